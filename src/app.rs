//! Application shell: router, shared context, and notifier wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the credential store and session bus through context so guards
//! and session-aware surfaces never reach for globals directly, then wires
//! the browser channels (storage + custom events) onto the bus once for the
//! page lifetime. The public chrome (navbar/footer) hides on admin routes,
//! which carry their own shell.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::admin_shell::AdminShell;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::route_guard::{AdminRoute, PrivateRoute};
use crate::pages::account::AccountPage;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::admin_products::AdminProductsPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::products::ProductsPage;
use crate::pages::signin::SignInPage;
use crate::pages::signup::SignUpPage;
use crate::util::events::{SessionBus, install_browser_channels};
use crate::util::storage::{SharedStore, default_store};

/// Admin routes render inside their own shell, without the public chrome.
pub(crate) fn is_admin_path(path: &str) -> bool {
    path == "/admin" || path.starts_with("/admin/")
}

/// Root component mounted to `<body>`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store: SharedStore = default_store();
    let bus = SessionBus::new();
    provide_context(store);
    provide_context(bus.clone());
    install_browser_channels(&bus);

    view! {
        <Router>
            <Chrome/>
        </Router>
    }
}

/// Layout inside the router so `use_location` is available.
#[component]
fn Chrome() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let public_chrome = move || !is_admin_path(&pathname.get());

    view! {
        <Show when=public_chrome>
            <Navbar/>
        </Show>
        <main class="app-main">
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/products") view=ProductsPage/>
                <Route path=path!("/contact") view=ContactPage/>
                <Route path=path!("/signin") view=SignInPage/>
                <Route path=path!("/signup") view=SignUpPage/>
                <Route
                    path=path!("/account")
                    view=|| {
                        view! {
                            <PrivateRoute>
                                <AccountPage/>
                            </PrivateRoute>
                        }
                    }
                />
                <ParentRoute
                    path=path!("/admin")
                    view=|| {
                        view! {
                            <AdminRoute>
                                <AdminShell/>
                            </AdminRoute>
                        }
                    }
                >
                    <Route path=path!("") view=AdminDashboardPage/>
                    <Route path=path!("products") view=AdminProductsPage/>
                </ParentRoute>
            </Routes>
        </main>
        <Show when=public_chrome>
            <Footer/>
        </Show>
    }
}
