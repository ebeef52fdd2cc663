//! Public site navbar, a session-aware surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps its own local copy of the general-scope session snapshot,
//! re-derived on mount, on every route change, and on every session bus
//! event. Renders sign-in/sign-up affordances when anonymous, the account
//! name and sign-out control when authenticated, and an Admin link when the
//! profile carries the admin role.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{
    Scope, SessionSnapshot, read_session, snapshot_after_event,
};
use crate::util::events::{SessionBus, dispatch_logout};
use crate::util::storage::{SharedStore, clear_credentials};

/// Top navigation bar for the public storefront.
#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<SharedStore>();
    let bus = expect_context::<SessionBus>();
    let location = use_location();
    let navigate = use_navigate();

    let session = RwSignal::new(SessionSnapshot::anonymous());

    // Re-derive on mount and on every route change.
    let pathname = location.pathname;
    let route_store = store.clone();
    Effect::new(move || {
        pathname.track();
        session.set(read_session(&*route_store, Scope::General).snapshot());
    });

    // React to bus events for as long as this surface is mounted.
    let event_store = store.clone();
    let sub = bus.subscribe(move |event| {
        let current = session.get_untracked();
        session.set(snapshot_after_event(&*event_store, Scope::General, &current, event));
    });
    let cleanup_bus = bus.clone();
    on_cleanup(move || cleanup_bus.unsubscribe(sub));

    let on_logout = move |_| {
        // Clear and notify before navigating so guards on the destination
        // route see the signed-out store.
        clear_credentials(&*store);
        session.set(SessionSnapshot::anonymous());
        dispatch_logout(&bus);
        navigate("/", Default::default());
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Skymart"</A>
            <div class="navbar__links">
                <A href="/">"Home"</A>
                <A href="/products">"Drones"</A>
                <A href="/contact">"Contact"</A>
            </div>
            <div class="navbar__session">
                <Show
                    when=move || session.get().authenticated
                    fallback=|| {
                        view! {
                            <A href="/signin" attr:class="navbar__signin">"Sign In"</A>
                            <A href="/signup" attr:class="navbar__signup">"Sign Up"</A>
                        }
                    }
                >
                    <Show when=move || session.get().is_admin()>
                        <A href="/admin" attr:class="navbar__admin">"Admin"</A>
                    </Show>
                    <A href="/account" attr:class="navbar__account">
                        {move || session.get().display_name()}
                    </A>
                    <button class="navbar__logout" on:click=on_logout.clone()>
                        "Sign Out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
