//! Status badges for accounts and donations.

use leptos::prelude::*;

use crate::net::types::{AccountStatus, DonationStatus};

/// Colored badge for an account's moderation status.
#[component]
pub fn AccountStatusBadge(status: AccountStatus) -> impl IntoView {
    let class = match status {
        AccountStatus::Active => "badge badge--active",
        AccountStatus::Pending => "badge badge--pending",
        AccountStatus::Suspended => "badge badge--suspended",
        AccountStatus::Banned => "badge badge--banned",
        AccountStatus::Inactive => "badge badge--inactive",
    };

    view! { <span class=class>{status.label()}</span> }
}

/// Colored badge for a donation's settlement status.
#[component]
pub fn DonationStatusBadge(status: DonationStatus) -> impl IntoView {
    let class = match status {
        DonationStatus::Approved => "badge badge--approved",
        DonationStatus::Pending => "badge badge--pending",
        DonationStatus::Canceled | DonationStatus::Rejected => "badge badge--failed",
    };

    view! { <span class=class>{status.label()}</span> }
}
