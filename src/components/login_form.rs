//! Credential form for the login page.
//!
//! Validation mirrors what the API enforces (plausible email, password of
//! at least 8 characters) so obviously bad input never leaves the
//! browser. The submit error line is owned by the page: the form only
//! renders it.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;

/// Field-level validation failures shown under the inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate the credentials before they are submitted.
pub fn validate(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if email.trim().is_empty() {
        errors.email = Some("Email is required");
    } else if !email.contains('@') {
        errors.email = Some("Enter a valid email");
    }
    if password.is_empty() {
        errors.password = Some("Password is required");
    } else if password.chars().count() < 8 {
        errors.password = Some("Password must be at least 8 characters");
    }
    errors
}

/// Email + password form. Submits through `on_submit` only when local
/// validation passes; stays editable whatever the outcome.
#[component]
pub fn LoginForm(
    on_submit: Callback<(String, String)>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let errors = validate(&email.get_untracked(), &password.get_untracked());
        field_errors.set(errors);
        if errors.is_empty() {
            on_submit.run((email.get_untracked(), password.get_untracked()));
        }
    };

    view! {
        <div class="login-form">
            <h1 class="login-form__title">"Reapp Admin"</h1>
            <p class="login-form__subtitle">"Sign in with your staff account to continue."</p>

            <form class="login-form__form" on:submit=submit>
                <label class="login-form__label">
                    "Email"
                    <input
                        class="login-form__input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@reapp.org"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    field_errors
                        .get()
                        .email
                        .map(|msg| view! { <p class="login-form__field-error">{msg}</p> })
                }}

                <label class="login-form__label">
                    "Password"
                    <input
                        class="login-form__input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    field_errors
                        .get()
                        .password
                        .map(|msg| view! { <p class="login-form__field-error">{msg}</p> })
                }}

                {move || error.get().map(|msg| view! { <p class="login-form__error">{msg}</p> })}

                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
