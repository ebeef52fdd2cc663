//! Product catalog page backed by the remote API.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::product_card::ProductCard;
use crate::net::types::Product;

/// Catalog page: fetches the product list once and renders the card grid
/// with loading, error, and empty states.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_products().await {
            Ok(items) => products.set(items),
            Err(e) => error.set(Some(e)),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "csr"))]
    loading.set(false);

    view! {
        <Title text="Drones | Skymart"/>
        <div class="products-page">
            <h1>"Our Drones"</h1>
            <Show when=move || error.get().is_some()>
                <p class="products-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Loading catalog..."</p> }
            >
                <Show
                    when=move || !products.get().is_empty()
                    fallback=|| view! { <p class="products-page__empty">"No drones in stock right now."</p> }
                >
                    <div class="products-page__grid">
                        {move || {
                            products
                                .get()
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
