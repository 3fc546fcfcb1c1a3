//! Remote API access: typed wire model, the shared request builder, and
//! one module of request functions per resource family.
//!
//! ERROR HANDLING
//! ==============
//! Request functions perform exactly one HTTP call and hand back the typed
//! body; errors propagate unchanged as [`backend::ApiError`]. No retries,
//! no translation — transient failures are left to user-initiated
//! re-submission.

pub mod accounts;
pub mod auth;
pub mod backend;
pub mod donations;
pub mod paged;
pub mod types;
