//! Route guard components gating protected subtrees.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each guard re-evaluates synchronously on every route change and on every
//! session bus event, then either renders its children or replace-navigates
//! away (no guard failure is left in browser history). The decision logic
//! itself lives in `state::guard`; these components only wire it to the
//! router and apply the admin purge side effect.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::guard::{
    GuardOutcome, evaluate_admin, evaluate_private, purge_credentials, signin_redirect_target,
};
use crate::util::events::SessionBus;
use crate::util::storage::SharedStore;

fn replace_navigation() -> NavigateOptions {
    NavigateOptions { replace: true, ..Default::default() }
}

/// Bump-on-event signal so guard closures re-run when the bus fires.
/// The subscription is released when the owning guard unmounts.
fn bus_version() -> RwSignal<u64> {
    let bus = expect_context::<SessionBus>();
    let version = RwSignal::new(0u64);
    let sub = bus.subscribe(move |_| version.update(|v| *v += 1));
    on_cleanup(move || bus.unsubscribe(sub));
    version
}

/// Gate for routes any authenticated user may see. Redirects to sign-in,
/// preserving the attempted location. Never mutates the store.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SharedStore>();
    let location = use_location();
    let navigate = use_navigate();
    let version = bus_version();

    let pathname = location.pathname;
    let eval_store = store.clone();
    let outcome = move || {
        pathname.track();
        version.track();
        evaluate_private(&*eval_store)
    };

    let nav_outcome = outcome.clone();
    Effect::new(move || {
        if let GuardOutcome::RedirectSignin { preserve_location } = nav_outcome() {
            let target = signin_redirect_target(preserve_location, &pathname.get_untracked());
            navigate(&target, replace_navigation());
        }
    });

    view! {
        <Show
            when=move || outcome() == GuardOutcome::Allow
            fallback=|| view! { <p class="guard-redirect">"Redirecting..."</p> }
        >
            {children()}
        </Show>
    }
}

/// Gate for admin routes: three-way check over the admin-scope session.
///
/// - no token: sign-in, preserving the attempted location;
/// - corrupt profile: purge both credential namespaces, then sign-in
///   (location dropped: the session was corrupt, not merely missing);
/// - authenticated non-admin: home, since re-prompting sign-in would be
///   wrong for a legitimate user.
#[component]
pub fn AdminRoute(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SharedStore>();
    let location = use_location();
    let navigate = use_navigate();
    let version = bus_version();

    let pathname = location.pathname;
    let eval_store = store.clone();
    let outcome = move || {
        pathname.track();
        version.track();
        evaluate_admin(&*eval_store)
    };

    let nav_outcome = outcome.clone();
    Effect::new(move || match nav_outcome() {
        GuardOutcome::Allow => {}
        GuardOutcome::RedirectSignin { preserve_location } => {
            let target = signin_redirect_target(preserve_location, &pathname.get_untracked());
            navigate(&target, replace_navigation());
        }
        GuardOutcome::RedirectHome => navigate("/", replace_navigation()),
        GuardOutcome::PurgeAndRedirectSignin => {
            // Cleanup strictly before navigation so guards evaluated on the
            // destination route see the cleared store.
            purge_credentials(&*store);
            navigate("/signin", replace_navigation());
        }
    });

    view! {
        <Show
            when=move || outcome() == GuardOutcome::Allow
            fallback=|| view! { <p class="guard-redirect">"Redirecting..."</p> }
        >
            {children()}
        </Show>
    }
}
