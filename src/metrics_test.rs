use super::*;

use chrono::TimeZone;

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

fn donation(amount: f64, status: DonationStatus, created_at: DateTime<Utc>) -> Donation {
    Donation {
        id: 1,
        amount,
        status,
        payment_checkout_url: None,
        payment_transaction_id: None,
        created_at,
        updated_at: None,
        donor_id: 1,
        institution_id: None,
        project_id: None,
        donor: None,
        institution: None,
        project: None,
    }
}

// =============================================================
// monthly_growth
// =============================================================

#[test]
fn empty_collection_has_zero_growth() {
    assert_eq!(monthly_growth(&[], at(2026, 8, 15)), 0);
}

#[test]
fn only_new_items_saturate_at_one_hundred_percent() {
    let created = vec![at(2026, 8, 1), at(2026, 8, 10)];
    assert_eq!(monthly_growth(&created, at(2026, 8, 15)), 100);
}

#[test]
fn growth_is_new_items_over_previous_total() {
    // 4 existing + 2 this month → 50%.
    let created = vec![
        at(2026, 5, 1),
        at(2026, 6, 2),
        at(2026, 6, 20),
        at(2026, 7, 3),
        at(2026, 8, 1),
        at(2026, 8, 14),
    ];
    assert_eq!(monthly_growth(&created, at(2026, 8, 15)), 50);
}

#[test]
fn no_new_items_means_zero_growth() {
    let created = vec![at(2026, 5, 1), at(2026, 6, 2)];
    assert_eq!(monthly_growth(&created, at(2026, 8, 15)), 0);
}

#[test]
fn growth_rounds_to_the_nearest_percent() {
    // 3 existing + 1 this month → 33.33…% → 33.
    let created = vec![at(2026, 7, 1), at(2026, 7, 2), at(2026, 7, 3), at(2026, 8, 1)];
    assert_eq!(monthly_growth(&created, at(2026, 8, 15)), 33);
}

#[test]
fn same_day_of_month_in_a_previous_year_is_not_this_month() {
    let created = vec![at(2025, 8, 15), at(2026, 8, 1)];
    assert_eq!(monthly_growth(&created, at(2026, 8, 15)), 100);
}

// =============================================================
// monthly_amount_growth
// =============================================================

#[test]
fn amount_growth_over_summed_amounts() {
    let donations = vec![
        donation(100.0, DonationStatus::Approved, at(2026, 7, 1)),
        donation(100.0, DonationStatus::Approved, at(2026, 7, 20)),
        donation(50.0, DonationStatus::Approved, at(2026, 8, 2)),
    ];
    // 200 before, 50 new → 25%.
    assert_eq!(monthly_amount_growth(&donations, at(2026, 8, 15)), 25);
}

#[test]
fn amount_growth_with_no_history_saturates() {
    let donations = vec![donation(10.0, DonationStatus::Approved, at(2026, 8, 2))];
    assert_eq!(monthly_amount_growth(&donations, at(2026, 8, 15)), 100);
    assert_eq!(monthly_amount_growth(&[], at(2026, 8, 15)), 0);
}

// =============================================================
// approved_total
// =============================================================

#[test]
fn approved_total_ignores_unsettled_donations() {
    let donations = vec![
        donation(100.0, DonationStatus::Approved, at(2026, 8, 1)),
        donation(40.5, DonationStatus::Approved, at(2026, 8, 2)),
        donation(999.0, DonationStatus::Pending, at(2026, 8, 3)),
        donation(999.0, DonationStatus::Rejected, at(2026, 8, 4)),
        donation(999.0, DonationStatus::Canceled, at(2026, 8, 5)),
    ];
    let total = approved_total(&donations);
    assert!((total - 140.5).abs() < f64::EPSILON);
}
