//! Route components, one module per client route.

pub mod dashboard;
pub mod donations;
pub mod institutions;
pub mod login;
