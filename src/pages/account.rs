//! Account page for signed-in visitors (behind `PrivateRoute`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Saving a new display name writes the `user` blob back to the store and
//! dispatches the `userUpdated` notification, so the navbar (and any other
//! mounted surface) refreshes the shown name without a navigation.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::net::types::AuthUser;
use crate::state::session::{Scope, SessionState, read_session};
use crate::util::events::{SessionBus, dispatch_profile_updated};
use crate::util::storage::{CredentialStore, SharedStore, USER_KEY};

fn validate_profile_name(name: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a display name.");
    }
    Ok(name.to_owned())
}

fn renamed_profile(user: &AuthUser, name: &str) -> AuthUser {
    AuthUser { name: name.to_owned(), ..user.clone() }
}

/// Persist an edited profile and return it for the notification dispatch.
pub(crate) fn save_profile(store: &dyn CredentialStore, user: &AuthUser) -> bool {
    match serde_json::to_string(user) {
        Ok(raw) => {
            store.set(USER_KEY, &raw);
            true
        }
        Err(_) => false,
    }
}

/// Profile page showing the stored identity with an editable display name.
#[component]
pub fn AccountPage() -> impl IntoView {
    let store = expect_context::<SharedStore>();
    let bus = expect_context::<SessionBus>();

    let profile = RwSignal::new(None::<AuthUser>);
    let name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    // One-time load: the route guard already vouched for the token; a
    // missing profile (corrupt blob) renders the degraded variant below.
    if let SessionState::Active(snapshot) = read_session(&*store, Scope::General) {
        if let Some(user) = snapshot.profile {
            name.set(user.name.clone());
            profile.set(Some(user));
        }
    }

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = profile.get_untracked() else {
            return;
        };
        let new_name = match validate_profile_name(&name.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let updated = renamed_profile(&current, &new_name);
        if save_profile(&*store, &updated) {
            dispatch_profile_updated(&bus, &updated);
            profile.set(Some(updated));
            info.set("Profile saved.".to_owned());
        } else {
            info.set("Could not save profile.".to_owned());
        }
    };

    view! {
        <Title text="Your Account | Skymart"/>
        <div class="account-page">
            <h1>"Your Account"</h1>
            <Show
                when=move || profile.get().is_some()
                fallback=|| {
                    view! {
                        <p class="account-page__degraded">
                            "Your profile details are unavailable. Sign out and back in to refresh them."
                        </p>
                    }
                }
            >
                <p class="account-page__email">
                    {move || profile.get().map(|user| user.email).unwrap_or_default()}
                </p>
                <form class="account-form" on:submit=on_save.clone()>
                    <label class="account-form__label">
                        "Display name"
                        <input
                            class="account-form__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="account-form__save" type="submit">
                        "Save"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="account-form__message">{move || info.get()}</p>
                </Show>
            </Show>
        </div>
    }
}
