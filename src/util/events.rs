//! Cross-context session change notifier.
//!
//! SYSTEM CONTEXT
//! ==============
//! Credential changes reach live surfaces over two browser channels with
//! different semantics: the native `storage` event (fires in *other* tabs
//! only) and two in-page custom events, `userUpdated` (profile edited in
//! place) and `adminLogout` (logout performed by a sibling surface, since
//! `storage` never fires in the originating tab). Internally both channels
//! feed one publish/subscribe bus so guard and surface logic subscribes
//! once.
//!
//! Delivery is push-only with no acknowledgment and no ordering guarantee
//! beyond the event loop. A surface that was not mounted when an event fired
//! simply re-derives its snapshot from the store on mount.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::{Arc, Mutex};

use serde::Deserialize;

use crate::net::types::AuthUser;
use crate::util::storage::CREDENTIAL_KEYS;

/// In-page custom event announcing an in-place profile update.
/// Stable external contract: `detail` is `{ "user": { ... } }`.
pub const USER_UPDATED_EVENT: &str = "userUpdated";
/// In-page custom event announcing a logout performed by a sibling surface.
pub const ADMIN_LOGOUT_EVENT: &str = "adminLogout";

/// A session-relevant change, regardless of which channel carried it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Another tab changed a credential key; consumers re-read the store.
    ExternalChange { key: String },
    /// A sibling surface updated the profile in place. Carries the user
    /// directly so consumers can skip a redundant store read.
    ProfileUpdated { user: AuthUser },
    /// A sibling surface logged out in this tab.
    Logout,
}

/// Whether a storage change key belongs to the credential record.
pub fn is_credential_key(key: &str) -> bool {
    CREDENTIAL_KEYS.contains(&key)
}

/// Handle returned by [`SessionBus::subscribe`]; pass back to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    subscribers: Vec<(u64, Subscriber)>,
}

/// Process-wide publish/subscribe bus for [`SessionEvent`]s.
///
/// Surfaces subscribe on mount and must unsubscribe on unmount (`on_cleanup`)
/// so listeners never outlive their surface. Unsubscribing is idempotent.
#[derive(Clone, Default)]
pub struct SessionBus {
    inner: Arc<Mutex<BusInner>>,
}

impl SessionBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, subscriber: impl Fn(&SessionEvent) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Arc::new(subscriber)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        inner.subscribers.retain(|(sub_id, _)| *sub_id != id.0);
    }

    /// Deliver `event` to every current subscriber.
    ///
    /// Subscribers are snapshotted before delivery so a callback may
    /// subscribe or unsubscribe without deadlocking the bus.
    pub fn publish(&self, event: &SessionEvent) {
        let subscribers: Vec<Subscriber> = {
            let inner = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            inner.subscribers.iter().map(|(_, s)| Arc::clone(s)).collect()
        };
        for subscriber in subscribers {
            subscriber(event);
        }
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .subscribers
            .len()
    }
}

#[derive(Deserialize)]
struct UserUpdatedDetail {
    user: AuthUser,
}

/// Parse the `userUpdated` event detail (`{"user":{...}}`).
pub fn parse_user_updated_detail(raw: &str) -> Option<AuthUser> {
    serde_json::from_str::<UserUpdatedDetail>(raw).ok().map(|d| d.user)
}

/// Announce an in-place profile update to sibling surfaces.
///
/// In the browser this fires the `userUpdated` custom event (the installed
/// channel glue forwards it onto the bus); outside the browser it publishes
/// directly.
pub fn dispatch_profile_updated(bus: &SessionBus, user: &AuthUser) {
    #[cfg(feature = "csr")]
    {
        let _ = bus;
        let detail = serde_json::json!({ "user": user }).to_string();
        dispatch_dom_event(USER_UPDATED_EVENT, Some(&detail));
    }
    #[cfg(not(feature = "csr"))]
    {
        bus.publish(&SessionEvent::ProfileUpdated { user: user.clone() });
    }
}

/// Announce a logout to sibling surfaces in this tab.
pub fn dispatch_logout(bus: &SessionBus) {
    #[cfg(feature = "csr")]
    {
        let _ = bus;
        dispatch_dom_event(ADMIN_LOGOUT_EVENT, None);
    }
    #[cfg(not(feature = "csr"))]
    {
        bus.publish(&SessionEvent::Logout);
    }
}

#[cfg(feature = "csr")]
fn dispatch_dom_event(name: &str, detail_json: Option<&str>) {
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        return;
    };
    let event = match detail_json {
        Some(json) => {
            let detail = js_sys::JSON::parse(json).unwrap_or(JsValue::NULL);
            let init = web_sys::CustomEventInit::new();
            init.set_detail(&detail);
            web_sys::CustomEvent::new_with_event_init_dict(name, &init)
        }
        None => web_sys::CustomEvent::new(name),
    };
    if let Ok(event) = event {
        let _ = window.dispatch_event(&event);
    }
}

/// Wire the browser channels (`storage`, `userUpdated`, `adminLogout`) onto
/// `bus`. Installed once by the app shell; the listeners live for the page
/// lifetime, so the closures are intentionally leaked to the JS side.
pub fn install_browser_channels(bus: &SessionBus) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };

        let storage_bus = bus.clone();
        let on_storage = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
            if let Some(key) = ev.key() {
                if is_credential_key(&key) {
                    storage_bus.publish(&SessionEvent::ExternalChange { key });
                }
            }
        });
        let _ = window.add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref());
        on_storage.forget();

        let updated_bus = bus.clone();
        let on_updated = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let Some(custom) = ev.dyn_ref::<web_sys::CustomEvent>() else {
                return;
            };
            let Ok(raw) = js_sys::JSON::stringify(&custom.detail()) else {
                return;
            };
            if let Some(user) = parse_user_updated_detail(&String::from(raw)) {
                updated_bus.publish(&SessionEvent::ProfileUpdated { user });
            }
        });
        let _ = window.add_event_listener_with_callback(USER_UPDATED_EVENT, on_updated.as_ref().unchecked_ref());
        on_updated.forget();

        let logout_bus = bus.clone();
        let on_logout = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            logout_bus.publish(&SessionEvent::Logout);
        });
        let _ = window.add_event_listener_with_callback(ADMIN_LOGOUT_EVENT, on_logout.as_ref().unchecked_ref());
        on_logout.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = bus;
    }
}
