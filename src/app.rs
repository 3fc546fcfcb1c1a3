//! Root application component with routing, contexts, and the auth guard.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::components::sidebar::Sidebar;
use crate::net::backend::Backend;
use crate::pages::dashboard::DashboardPage;
use crate::pages::donations::DonationsPage;
use crate::pages::institutions::InstitutionsPage;
use crate::pages::login::LoginPage;
use crate::state::session::Session;
use crate::util::clock;

/// Root application component.
///
/// The session is rehydrated from storage before anything renders so the
/// route guard sees the restored token on first paint, then both the
/// session and the configured API client are provided via context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    session.restore();
    provide_context(session);
    provide_context(Backend::new(session));

    view! {
        <Title text="Reapp Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=AdminLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("institutions") view=InstitutionsPage/>
                    <Route path=StaticSegment("donations") view=DonationsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Layout for the authenticated routes: sidebar plus the active page.
///
/// The guard bounces logged-out visitors to `/login` with the original
/// location in the `redirect` parameter, and re-checks on every session
/// change and navigation.
#[component]
fn AdminLayout() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move || {
        let logged = session.state.with(|s| s.is_logged(clock::now_unix()));
        let path = location.pathname.get();
        let search = location.search.get();
        if !logged {
            let target = if search.is_empty() {
                path
            } else {
                format!("{path}?{}", search.trim_start_matches('?'))
            };
            let encoded: String = form_urlencoded::byte_serialize(target.as_bytes()).collect();
            navigate(
                &format!("/login?redirect={encoded}"),
                NavigateOptions::default(),
            );
        }
    });

    view! {
        <div class="admin-layout">
            <Sidebar/>
            <main class="admin-layout__content">
                <Outlet/>
            </main>
        </div>
    }
}
