//! Wall-clock access that works in both the browser and native builds.
//!
//! Token expiry checks and the dashboard metrics need "now". In the browser
//! that comes from `js_sys::Date`; natively (tests) from `chrono`.

use chrono::{DateTime, Utc};

/// Current Unix time in whole seconds.
pub fn now_unix() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Utc::now().timestamp()
    }
}

/// Current wall-clock time as a `chrono` instant.
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(now_unix(), 0).unwrap_or_else(Utc::now)
}
