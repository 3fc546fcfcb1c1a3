//! App navigation sidebar with the staff profile footer.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::Session;
use crate::util::format::initials;

/// Left navigation: brand header, section links, and the signed-in staff
/// member with a sign-out button.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let location = use_location();

    let on_logout = move |_| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    let pathname = location.pathname;
    let active = move |path: &str| pathname.get() == path;
    let user = move || session.state.with(|s| s.user.clone());

    view! {
        <nav class="sidebar">
            <a class="sidebar__brand" href="/">
                <span class="sidebar__logo">"R"</span>
                <span class="sidebar__brand-name">"Reapp"</span>
            </a>

            <div class="sidebar__section">
                <span class="sidebar__section-label">"Administration"</span>
                <a class="sidebar__link" class:sidebar__link--active=move || active("/") href="/">
                    "Home"
                </a>
                <a
                    class="sidebar__link"
                    class:sidebar__link--active=move || active("/institutions")
                    href="/institutions"
                >
                    "Institutions"
                </a>
                <a
                    class="sidebar__link"
                    class:sidebar__link--active=move || active("/donations")
                    href="/donations"
                >
                    "Donations"
                </a>
            </div>

            <div class="sidebar__footer">
                {move || {
                    user()
                        .map(|u| {
                            view! {
                                <div class="sidebar__user">
                                    <span class="sidebar__avatar">{initials(&u.name)}</span>
                                    <div class="sidebar__user-meta">
                                        <span class="sidebar__user-name">{u.name.clone()}</span>
                                        <span class="sidebar__user-email">{u.email.clone()}</span>
                                    </div>
                                </div>
                            }
                        })
                }}
                <button class="sidebar__logout" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
