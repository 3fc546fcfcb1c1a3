//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The only durable state in the app is the session (token + cached staff
//! profile). Everything else is fetched from the API on demand, so the
//! modules here stay small: token inspection, the session lifecycle, and
//! the fixed moderation-transition table.

pub mod moderation;
pub mod session;
pub mod token;
