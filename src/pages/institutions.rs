//! Institution moderation: one tab per reviewable status, a table of the
//! matching accounts, and the transition actions for each row.

use leptos::prelude::*;

use crate::components::institutions_table::InstitutionsTable;
use crate::components::spinner::Spinner;
use crate::net::accounts::{fetch_accounts, update_account_status};
use crate::net::backend::Backend;
use crate::net::types::{AccountStatus, AccountType};
use crate::state::session::Session;

/// The three moderation queues staff work through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ModerationTab {
    Registered,
    Pending,
    Suspended,
}

impl ModerationTab {
    const ALL: [Self; 3] = [Self::Registered, Self::Pending, Self::Suspended];

    fn status(self) -> AccountStatus {
        match self {
            Self::Registered => AccountStatus::Active,
            Self::Pending => AccountStatus::Pending,
            Self::Suspended => AccountStatus::Suspended,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Registered => "Registered",
            Self::Pending => "Pending",
            Self::Suspended => "Suspended",
        }
    }
}

#[component]
pub fn InstitutionsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let backend = expect_context::<Backend>();

    let tab = RwSignal::new(ModerationTab::Registered);

    // Keyed on the active tab's status: switching tabs re-runs the fetch.
    let accounts = {
        let backend = backend.clone();
        LocalResource::new(move || {
            let backend = backend.clone();
            let token = session.state.with(|s| s.token.clone());
            let status = tab.get().status();
            async move {
                if token.is_none() {
                    return Ok(Vec::new());
                }
                fetch_accounts(&backend, AccountType::Institution, Some(status))
                    .await
                    .inspect_err(|err| log::warn!("failed to load institutions: {err}"))
            }
        })
    };

    // Row with an in-flight status change; its menu is disabled meanwhile.
    let pending_id = RwSignal::new(None::<i64>);

    let on_action = {
        let backend = backend.clone();
        Callback::new(move |(account_id, status): (i64, AccountStatus)| {
            #[cfg(feature = "hydrate")]
            {
                let backend = backend.clone();
                let accounts = accounts.clone();
                pending_id.set(Some(account_id));
                leptos::task::spawn_local(async move {
                    match update_account_status(&backend, account_id, status).await {
                        // Refetch only once the server confirms the change.
                        Ok(_) => accounts.refetch(),
                        Err(err) => {
                            log::warn!("status change for account {account_id} failed: {err}");
                        }
                    }
                    pending_id.set(None);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&backend, &accounts, account_id, status);
            }
        })
    };

    view! {
        <div class="institutions-page">
            <header class="page-header">
                <h1>"Institutions"</h1>
                <p>"Review and moderate institution accounts."</p>
            </header>

            <div class="tabs">
                {ModerationTab::ALL
                    .iter()
                    .map(|&t| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Suspense fallback=move || view! { <Spinner/> }>
                {move || {
                    accounts
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <InstitutionsTable
                                        accounts=list
                                        on_action=on_action
                                        pending_id=pending_id
                                    />
                                }
                                    .into_any()
                            }
                            Err(_) => {
                                view! {
                                    <p class="error-banner">
                                        "Could not load institutions. Reload to try again."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
