//! Summary metrics for the dashboard cards.
//!
//! All functions are pure over already-fetched data and take `now`
//! explicitly; the dashboard passes the current wall clock.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use chrono::{DateTime, Datelike, Utc};

use crate::net::types::{Donation, DonationStatus};

fn same_month(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

fn growth_percent(total_now: f64, total_last_month: f64) -> i64 {
    if total_last_month == 0.0 {
        return if total_now > 0.0 { 100 } else { 0 };
    }
    (((total_now - total_last_month) / total_last_month) * 100.0).round() as i64
}

/// Percentage growth of a collection this calendar month.
///
/// Everything created before the current month counts as the previous
/// total. With an empty previous total the result saturates at 100%, or
/// 0% when there is nothing at all.
pub fn monthly_growth(created: &[DateTime<Utc>], now: DateTime<Utc>) -> i64 {
    let total_now = created.len();
    let new_this_month = created.iter().filter(|d| same_month(**d, now)).count();
    growth_percent(total_now as f64, (total_now - new_this_month) as f64)
}

/// The growth formula applied to summed donation amounts instead of item
/// counts.
pub fn monthly_amount_growth(donations: &[Donation], now: DateTime<Utc>) -> i64 {
    let total_now: f64 = donations.iter().map(|d| d.amount).sum();
    let new_this_month: f64 = donations
        .iter()
        .filter(|d| same_month(d.created_at, now))
        .map(|d| d.amount)
        .sum();
    growth_percent(total_now, total_now - new_this_month)
}

/// Sum of APPROVED donation amounts; pending and failed donations do not
/// count towards the total raised.
pub fn approved_total(donations: &[Donation]) -> f64 {
    donations
        .iter()
        .filter(|d| d.status == DonationStatus::Approved)
        .map(|d| d.amount)
        .sum()
}
