//! Read-only product listing for the admin back-office.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::net::types::{Product, format_price};

/// Catalog table inside the admin shell.
#[component]
pub fn AdminProductsPage() -> impl IntoView {
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
        <Title text="Products | Skymart Admin"/>
        <div class="admin-products">
            <h1>"Products"</h1>
            <Show when=move || error.get().is_some()>
                <p class="admin-products__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Loading products..."</p> }
            >
                <table class="admin-products__table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Category"</th>
                            <th>"Price"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            products
                                .get()
                                .into_iter()
                                .map(|product| {
                                    view! {
                                        <tr>
                                            <td>{product.id.clone()}</td>
                                            <td>{product.name.clone()}</td>
                                            <td>{product.category.clone().unwrap_or_default()}</td>
                                            <td>{format_price(product.price)}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
