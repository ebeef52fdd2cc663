//! Admin dashboard landing page (inside the admin shell).

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Dashboard with catalog stats and quick links.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let product_count = RwSignal::new(None::<usize>);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_products().await {
            Ok(items) => product_count.set(Some(items.len())),
            Err(e) => error.set(Some(e)),
        }
    });

    view! {
        <Title text="Dashboard | Skymart Admin"/>
        <div class="admin-dashboard">
            <h1>"Dashboard"</h1>
            <Show when=move || error.get().is_some()>
                <p class="admin-dashboard__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="admin-dashboard__cards">
                <article class="admin-dashboard__card">
                    <h2>"Products"</h2>
                    <span class="admin-dashboard__stat">
                        {move || product_count.get().map_or_else(|| "...".to_owned(), |n| n.to_string())}
                    </span>
                    <A href="/admin/products">"Manage catalog"</A>
                </article>
                <article class="admin-dashboard__card">
                    <h2>"Storefront"</h2>
                    <p>"Review the live site as customers see it."</p>
                    <A href="/">"Open storefront"</A>
                </article>
            </div>
        </div>
    }
}
