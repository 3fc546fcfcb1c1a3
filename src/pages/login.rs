//! Login page: credential form, 401 handling, redirect-on-success.
//!
//! The guarded routes send logged-out visitors here with the original
//! location in the `redirect` query parameter; a successful sign-in (or
//! an already-valid session) goes back to that target, defaulting to the
//! dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::login_form::LoginForm;
use crate::net::auth::{LoginRequest, login};
use crate::net::backend::Backend;
use crate::state::session::Session;
use crate::util::clock;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let backend = expect_context::<Backend>();
    let navigate = use_navigate();
    let query = use_query_map();

    // Only same-app paths are honored as redirect targets.
    let redirect_target = move || {
        query
            .with(|q| q.get("redirect"))
            .filter(|r| r.starts_with('/'))
            .unwrap_or_else(|| "/".to_owned())
    };

    // An already-authenticated visit skips the form entirely.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if session.state.with(|s| s.is_logged(clock::now_unix())) {
                navigate(&redirect_target(), NavigateOptions::default());
            }
        });
    }

    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = {
        let backend = backend.clone();
        let navigate = navigate.clone();
        Callback::new(move |(email, password): (String, String)| {
            #[cfg(feature = "hydrate")]
            {
                let backend = backend.clone();
                let navigate = navigate.clone();
                pending.set(true);
                error.set(None);
                leptos::task::spawn_local(async move {
                    let request = LoginRequest { email, password };
                    match login(&backend, &request).await {
                        Ok(resp) => {
                            session.login(resp.token, resp.user);
                            if session.is_logged() {
                                navigate(&redirect_target(), NavigateOptions::default());
                            } else {
                                // The server handed back a token the client
                                // cannot use (already expired or malformed).
                                error.set(Some(
                                    "Received an unusable session token. Try again.".to_owned(),
                                ));
                            }
                        }
                        Err(err) if err.is_unauthorized() => {
                            error.set(Some("Invalid email or password".to_owned()));
                        }
                        Err(err) => {
                            log::warn!("login request failed: {err}");
                            error.set(Some("Could not sign in. Try again.".to_owned()));
                        }
                    }
                    pending.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&backend, &navigate, email, password);
            }
        })
    };

    view! {
        <main class="login-page">
            <LoginForm on_submit=on_submit pending=pending error=error/>
        </main>
    }
}
