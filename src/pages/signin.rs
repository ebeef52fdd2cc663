//! Sign-in page: writes the credential record on success.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful sign-in persists `token`/`user` and navigates; other
//! surfaces pick up the new session on their next route-change re-derive.
//! Failures surface the server message inline and leave the store untouched.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::AuthUser;
use crate::util::storage::{CredentialStore, SharedStore, TOKEN_KEY, USER_KEY};

fn validate_signin_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Persist a successful sign-in into the general namespace. The admin
/// namespace is written by back-office tooling, never by this form, so a
/// shopper session and an admin session can coexist.
pub(crate) fn store_signin(store: &dyn CredentialStore, token: &str, user: Option<&AuthUser>) {
    store.set(TOKEN_KEY, token);
    if let Some(user) = user {
        if let Ok(raw) = serde_json::to_string(user) {
            store.set(USER_KEY, &raw);
        }
    }
}

/// Route to land on after sign-in: admins go to the admin root; otherwise an
/// internal `redirect` target preserved by a guard; otherwise home.
pub(crate) fn post_signin_destination(user: Option<&AuthUser>, redirect: Option<&str>) -> String {
    if user.is_some_and(AuthUser::is_admin) {
        return "/admin".to_owned();
    }
    match redirect {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/".to_owned(),
    }
}

/// Sign-in form page.
#[component]
pub fn SignInPage() -> impl IntoView {
    let store = expect_context::<SharedStore>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_signin_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            let redirect = query.get_untracked().get("redirect");
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&email_value, &password_value).await {
                    Ok(resp) if resp.token.is_some() => {
                        let token = resp.token.unwrap_or_default();
                        store_signin(&*store, &token, resp.user.as_ref());
                        let dest = post_signin_destination(resp.user.as_ref(), redirect.as_deref());
                        navigate(&dest, Default::default());
                    }
                    Ok(resp) => {
                        info.set(resp.message.unwrap_or_else(|| "Sign in failed.".to_owned()));
                        busy.set(false);
                    }
                    Err(e) => {
                        info.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&store, &navigate, &query, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <Title text="Sign In | Skymart"/>
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Sign In"</h1>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Sign In"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-switch">
                    "New to Skymart? "
                    <A href="/signup">"Create an account"</A>
                </p>
            </form>
        </div>
    }
}
