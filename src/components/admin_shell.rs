//! Admin back-office shell, a session-aware surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the sidebar/topbar chrome around admin pages (routed into the
//! `<Outlet/>`). Like the navbar it keeps its own admin-scope snapshot,
//! re-derived on route change and on bus events; it never assumes the guard
//! that admitted it is still valid. Logout here clears both credential
//! namespaces and announces `adminLogout` before navigating, so sibling
//! surfaces in this tab drop their session immediately.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{
    Scope, SessionSnapshot, read_session, snapshot_after_event,
};
use crate::util::events::{SessionBus, dispatch_logout};
use crate::util::storage::{SharedStore, clear_credentials};

/// Layout shell for everything under `/admin`.
#[component]
pub fn AdminShell() -> impl IntoView {
    let store = expect_context::<SharedStore>();
    let bus = expect_context::<SessionBus>();
    let location = use_location();
    let navigate = use_navigate();

    let session = RwSignal::new(SessionSnapshot::anonymous());

    let pathname = location.pathname;
    let route_store = store.clone();
    Effect::new(move || {
        pathname.track();
        session.set(read_session(&*route_store, Scope::Admin).snapshot());
    });

    let event_store = store.clone();
    let sub = bus.subscribe(move |event| {
        let current = session.get_untracked();
        session.set(snapshot_after_event(&*event_store, Scope::Admin, &current, event));
    });
    let cleanup_bus = bus.clone();
    on_cleanup(move || cleanup_bus.unsubscribe(sub));

    let on_logout = move |_| {
        clear_credentials(&*store);
        session.set(SessionSnapshot::anonymous());
        dispatch_logout(&bus);
        navigate("/signin", Default::default());
    };

    view! {
        <div class="admin-shell">
            <aside class="admin-shell__sidebar">
                <span class="admin-shell__brand">"Skymart Admin"</span>
                <nav class="admin-shell__nav">
                    <A href="/admin">"Dashboard"</A>
                    <A href="/admin/products">"Products"</A>
                    <A href="/">"View Site"</A>
                </nav>
            </aside>
            <div class="admin-shell__main">
                <header class="admin-shell__topbar">
                    <span class="admin-shell__user">
                        {move || session.get().display_name()}
                    </span>
                    <button class="admin-shell__logout" on:click=on_logout>
                        "Sign Out"
                    </button>
                </header>
                <main class="admin-shell__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
