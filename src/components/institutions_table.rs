//! Institutions table with per-row moderation actions.

use leptos::prelude::*;

use crate::components::status_badge::AccountStatusBadge;
use crate::net::types::{Account, AccountStatus};
use crate::state::moderation::allowed_targets;

/// Account listing for one moderation tab.
///
/// The actions menu is built from the transition table for the row's
/// current status, so a tab can only ever submit the targets allowed from
/// that status. `pending_id` marks the row with an in-flight mutation.
#[component]
pub fn InstitutionsTable(
    accounts: Vec<Account>,
    on_action: Callback<(i64, AccountStatus)>,
    #[prop(into)] pending_id: Signal<Option<i64>>,
) -> impl IntoView {
    if accounts.is_empty() {
        return view! { <p class="data-table__empty">"No institutions in this state."</p> }
            .into_any();
    }

    let open_menu = RwSignal::new(None::<i64>);

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Category"</th>
                    <th>"CNPJ"</th>
                    <th>"Followers"</th>
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {accounts
                    .into_iter()
                    .map(|account| {
                        let id = account.id;
                        let status = account.status;
                        let actions = allowed_targets(status);
                        let category = account
                            .institution
                            .as_ref()
                            .and_then(|i| i.category.as_ref())
                            .map_or_else(|| "-".to_owned(), |c| c.name.clone());
                        let cnpj = account
                            .institution
                            .as_ref()
                            .map_or_else(|| "-".to_owned(), |i| i.cnpj.clone());

                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{account.name}</td>
                                <td>{account.email}</td>
                                <td>{category}</td>
                                <td class="data-table__mono">{cnpj}</td>
                                <td>{account.followers_count}</td>
                                <td><AccountStatusBadge status=status/></td>
                                <td class="data-table__actions">
                                    <Show when=move || !actions.is_empty()>
                                        <button
                                            class="menu__trigger"
                                            disabled=move || pending_id.get() == Some(id)
                                            on:click=move |_| {
                                                open_menu
                                                    .update(|m| {
                                                        *m = if *m == Some(id) { None } else { Some(id) };
                                                    });
                                            }
                                        >
                                            "\u{22ef}"
                                        </button>
                                        <Show when=move || open_menu.get() == Some(id)>
                                            <div class="menu__items">
                                                {actions
                                                    .iter()
                                                    .map(|action| {
                                                        let action = *action;
                                                        view! {
                                                            <button
                                                                class="menu__item"
                                                                disabled=move || pending_id.get().is_some()
                                                                on:click=move |_| {
                                                                    open_menu.set(None);
                                                                    on_action.run((id, action.target));
                                                                }
                                                            >
                                                                {action.label}
                                                            </button>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        </Show>
                                    </Show>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
