//! Catalog card for one product.

use leptos::prelude::*;

use crate::net::types::{Product, format_price};

/// Card shown in the catalog grid.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let price = format_price(product.price);
    let image = product.image_url.clone();
    let alt = product.name.clone();
    let category = product.category.clone().unwrap_or_default();
    let has_category = !category.is_empty();

    view! {
        <article class="product-card">
            {image.map(|src| view! { <img class="product-card__image" src=src alt=alt.clone()/> })}
            <div class="product-card__body">
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <Show when=move || has_category>
                    <span class="product-card__category">{category.clone()}</span>
                </Show>
                <p class="product-card__description">{product.description.clone()}</p>
                <span class="product-card__price">{price.clone()}</span>
            </div>
        </article>
    }
}
