//! Overview dashboard: greeting, summary metric cards, quick links.

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::metrics;
use crate::net::accounts::fetch_accounts;
use crate::net::backend::Backend;
use crate::net::donations::fetch_donations;
use crate::net::types::{AccountType, DonationStatus};
use crate::state::session::Session;
use crate::util::clock;
use crate::util::format::format_brl;

/// How many recent donations feed the totals card. One block is enough
/// for the estimate; the full ledger lives on its own page.
const SUMMARY_DONATIONS_LIMIT: usize = 100;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let backend = expect_context::<Backend>();

    let institutions = {
        let backend = backend.clone();
        LocalResource::new(move || {
            let backend = backend.clone();
            let token = session.state.with(|s| s.token.clone());
            async move {
                if token.is_none() {
                    return Vec::new();
                }
                fetch_accounts(&backend, AccountType::Institution, None)
                    .await
                    .unwrap_or_else(|err| {
                        log::warn!("failed to load institutions: {err}");
                        Vec::new()
                    })
            }
        })
    };

    let donors = {
        let backend = backend.clone();
        LocalResource::new(move || {
            let backend = backend.clone();
            let token = session.state.with(|s| s.token.clone());
            async move {
                if token.is_none() {
                    return Vec::new();
                }
                fetch_accounts(&backend, AccountType::Donor, None)
                    .await
                    .unwrap_or_else(|err| {
                        log::warn!("failed to load donors: {err}");
                        Vec::new()
                    })
            }
        })
    };

    let donations = {
        let backend = backend.clone();
        LocalResource::new(move || {
            let backend = backend.clone();
            let token = session.state.with(|s| s.token.clone());
            async move {
                if token.is_none() {
                    return Vec::new();
                }
                match fetch_donations(&backend, 0, SUMMARY_DONATIONS_LIMIT).await {
                    Ok(page) => page.data,
                    Err(err) => {
                        log::warn!("failed to load donations: {err}");
                        Vec::new()
                    }
                }
            }
        })
    };

    let greeting = move || {
        session
            .state
            .with(|s| s.user.as_ref().map(|u| u.name.clone()))
            .map_or_else(|| "Hello".to_owned(), |name| format!("Hello, {name}"))
    };

    let approved = move || {
        donations
            .get()
            .map(|list| {
                list.into_iter()
                    .filter(|d| d.status == DonationStatus::Approved)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let institution_count = move || institutions.get().map_or(0, |list| list.len());
    let donor_count = move || donors.get().map_or(0, |list| list.len());

    let raised = move || format_brl(metrics::approved_total(&approved()));
    let raised_growth = move || {
        let growth = metrics::monthly_amount_growth(&approved(), clock::now());
        format!("{}{growth}% vs last month", if growth > 0 { "+" } else { "" })
    };

    let activity = move || {
        let mut created: Vec<DateTime<Utc>> = Vec::new();
        if let Some(list) = institutions.get() {
            created.extend(list.iter().filter_map(|a| a.created_at));
        }
        if let Some(list) = donors.get() {
            created.extend(list.iter().filter_map(|a| a.created_at));
        }
        let growth = metrics::monthly_growth(&created, clock::now());
        format!("{}{growth}%", if growth > 0 { "+" } else { "" })
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
                <p>"Welcome to the Reapp admin panel."</p>
            </header>

            <div class="dashboard-page__stats">
                {move || {
                    view! {
                        <StatCard
                            title="Institutions"
                            value=institution_count().to_string()
                            description="Registered institutions on the platform".to_owned()
                        />
                        <StatCard
                            title="Donations"
                            value=raised()
                            description=raised_growth()
                        />
                        <StatCard
                            title="Donors"
                            value=donor_count().to_string()
                            description="Registered donors on the platform".to_owned()
                        />
                        <StatCard
                            title="Activity"
                            value=activity()
                            description="User base growth this month".to_owned()
                        />
                    }
                }}
            </div>

            <div class="dashboard-page__links">
                <a class="quick-link" href="/institutions">
                    <div class="quick-link__text">
                        <span class="quick-link__title">"Manage institutions"</span>
                        <span class="quick-link__subtitle">
                            "Review, approve and suspend institution accounts"
                        </span>
                    </div>
                    <span class="quick-link__arrow">"\u{2192}"</span>
                </a>
                <a class="quick-link" href="/donations">
                    <div class="quick-link__text">
                        <span class="quick-link__title">"View donations"</span>
                        <span class="quick-link__subtitle">"Browse the donation ledger"</span>
                    </div>
                    <span class="quick-link__arrow">"\u{2192}"</span>
                </a>
            </div>
        </div>
    }
}
