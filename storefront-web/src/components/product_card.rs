//! Product Card Component

use leptos::prelude::*;
use leptos_router::components::A;

use shared::catalog::Product;

use crate::utils::constants::FALLBACK_IMAGE;

#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    let (image_failed, set_image_failed) = signal(false);
    let href = format!("/product/{}", product.id);

    view! {
        <div class="card product-card">
            <div class="product-image">
                <img
                    src=move || if image_failed.get() { FALLBACK_IMAGE } else { product.image_url }
                    alt=product.name
                    on:error=move |_| set_image_failed.set(true)
                />
                <div class="product-badges">
                    {product.popular.then(|| view! { <span class="badge badge-popular">"Popular"</span> })}
                    {product.discount.map(|d| view! { <span class="badge badge-discount">{format!("-{}%", d)}</span> })}
                </div>
            </div>
            <div class="product-body">
                <span class="muted small">{format!("{} {}", product.category.icon(), product.category.name())}</span>
                <h3 class="clamp-1">{product.name}</h3>
                <p class="muted clamp-2">{product.description}</p>
                <div class="price-row">
                    <span class="price">{product.final_price().to_string()}</span>
                    {product.discount.map(|_| view! { <span class="price-old">{product.price.to_string()}</span> })}
                </div>
            </div>
            <A href=href>
                <span class="btn btn-primary full">"Start Top-Up"</span>
            </A>
        </div>
    }
}
