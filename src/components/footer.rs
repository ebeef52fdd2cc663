//! Public site footer.

use leptos::prelude::*;
use leptos_router::components::A;

/// Footer shown on the public pages.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__links">
                <A href="/products">"Drones"</A>
                <A href="/contact">"Contact"</A>
                <A href="/signin">"Sign In"</A>
            </div>
            <p class="footer__note">"Skymart: professional drones, delivered."</p>
        </footer>
    }
}
