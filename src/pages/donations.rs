//! Donation ledger with buffered pagination.
//!
//! `page`/`pageSize` live in the URL query so ledger positions are
//! shareable; malformed values fall back to defaults instead of erroring.
//! Rows are fetched in five-page blocks (see `net::paged`) and a page is
//! served by slicing the block locally. While the next block loads, the
//! previous one stays on screen slightly dimmed, so paging never
//! collapses the layout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::donations_table::DonationsTable;
use crate::components::spinner::Spinner;
use crate::net::backend::Backend;
use crate::net::donations::fetch_donations;
use crate::net::paged::{PageWindow, page_count};
use crate::net::types::{Donation, Meta, Page};
use crate::state::session::Session;

const DEFAULT_PAGE_SIZE: usize = 10;
const MAX_PAGE_SIZE: usize = 100;

#[component]
pub fn DonationsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let backend = expect_context::<Backend>();
    let query = use_query_map();

    // URL state with fallbacks: page >= 1, pageSize in 1..=100.
    let page = Memo::new(move |_| {
        query
            .with(|q| q.get("page"))
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    });
    let page_size = Memo::new(move |_| {
        query
            .with(|q| q.get("pageSize"))
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|s| (1..=MAX_PAGE_SIZE).contains(s))
            .unwrap_or(DEFAULT_PAGE_SIZE)
    });
    let window = Memo::new(move |_| PageWindow::for_page(page.get() - 1, page_size.get()));

    // Fetch one buffered block; the window is the cache key, so paging
    // within the block never refetches.
    let block = {
        let backend = backend.clone();
        LocalResource::new(move || {
            let backend = backend.clone();
            let token = session.state.with(|s| s.token.clone());
            let window = window.get();
            async move {
                if token.is_none() {
                    return Ok(Page {
                        data: Vec::new(),
                        meta: Meta { total: 0 },
                    });
                }
                fetch_donations(&backend, window.offset, window.limit)
                    .await
                    .inspect_err(|err| log::warn!("failed to load donations: {err}"))
            }
        })
    };

    // Placeholder data: the last block that loaded successfully.
    let last_block = RwSignal::new(None::<Page<Donation>>);
    Effect::new(move || {
        if let Some(Ok(fresh)) = block.get() {
            last_block.set(Some(fresh));
        }
    });

    let current = move || {
        block
            .get()
            .and_then(Result::ok)
            .or_else(|| last_block.get())
    };

    let total = move || current().map_or(0, |p| p.meta.total);
    let total_pages = move || page_count(total(), page_size.get()).max(1);

    let go_to = {
        let navigate = use_navigate();
        Callback::new(move |p: usize| {
            navigate(
                &format!("/donations?page={p}&pageSize={}", page_size.get()),
                NavigateOptions::default(),
            );
        })
    };

    view! {
        <div class="donations-page">
            <header class="page-header">
                <h1>"Donations"</h1>
                <p>"Browse the platform's donation history."</p>
            </header>

            {move || {
                let settled = block.get();
                let failed = settled.as_ref().is_some_and(|r| r.is_err());
                let fresh = settled.and_then(Result::ok);
                let stale = fresh.is_none() && !failed;
                let shown = fresh.or_else(|| last_block.get());

                let banner = failed.then(|| {
                    view! {
                        <p class="error-banner">"Could not load donations. Try again."</p>
                    }
                });

                let body = match shown {
                    Some(fetched) => {
                        let rows = window.get().slice(&fetched.data).to_vec();
                        view! { <DonationsTable donations=rows stale=stale/> }.into_any()
                    }
                    None if failed => ().into_any(),
                    None => view! { <Spinner/> }.into_any(),
                };

                view! {
                    {banner}
                    {body}
                }
            }}

            <div class="pager">
                <button
                    class="btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| go_to.run(page.get() - 1)
                >
                    "Previous"
                </button>
                <span class="pager__status">
                    {move || format!("Page {} of {} ({} donations)", page.get(), total_pages(), total())}
                </span>
                <button
                    class="btn"
                    disabled=move || page.get() >= total_pages()
                    on:click=move |_| go_to.run(page.get() + 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
