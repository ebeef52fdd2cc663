//! Sign-up page; on success behaves exactly like sign-in.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::signin::{post_signin_destination, store_signin};
use crate::util::storage::SharedStore;

fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String), &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    Ok((name.to_owned(), email.to_owned(), password.to_owned()))
}

/// Account creation form page.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let store = expect_context::<SharedStore>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, email_value, password_value) =
            match validate_signup_input(&name.get(), &email.get(), &password.get()) {
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
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_up(&name_value, &email_value, &password_value).await {
                    Ok(resp) if resp.token.is_some() => {
                        let token = resp.token.unwrap_or_default();
                        store_signin(&*store, &token, resp.user.as_ref());
                        let dest = post_signin_destination(resp.user.as_ref(), None);
                        navigate(&dest, Default::default());
                    }
                    Ok(resp) => {
                        info.set(resp.message.unwrap_or_else(|| "Sign up failed.".to_owned()));
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
            let _ = (&store, &navigate, name_value, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <Title text="Sign Up | Skymart"/>
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Create Account"</h1>
                <input
                    class="auth-input"
                    type="text"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
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
                    placeholder="Password (6+ characters)"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Sign Up"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-switch">
                    "Already have an account? "
                    <A href="/signin">"Sign in"</A>
                </p>
            </form>
        </div>
    }
}
