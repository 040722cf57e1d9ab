//! Product catalog page: category filter, text search and sort

use leptos::prelude::*;

use shared::catalog::{category_counts, products, Category, ProductQuery, SortKey};

use crate::components::{ConnectionStatus, ProductCard};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let (category, set_category) = signal(None::<Category>);
    let (text, set_text) = signal(String::new());
    let (sort, set_sort) = signal(SortKey::default());

    let visible = Memo::new(move |_| {
        let query = ProductQuery {
            category: category.get(),
            text: text.get(),
            sort: sort.get(),
        };
        query.apply(products())
    });

    let counts = category_counts(products());

    view! {
        <main class="container">
            <div class="page-header">
                <h1 class="gradient-title">"Shop Products"</h1>
                <p class="muted">"Browse our collection and start your top-up journey"</p>
            </div>

            <ConnectionStatus/>

            <div class="filters">
                <input
                    class="search"
                    type="search"
                    placeholder="Search products..."
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                />
                <select on:change=move |ev| set_sort.set(SortKey::from_id(&event_target_value(&ev)))>
                    {SortKey::ALL
                        .into_iter()
                        .map(|key| view! {
                            <option value=key.id() selected=move || sort.get() == key>{key.label()}</option>
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="chips">
                <button
                    class=move || if category.get().is_none() { "chip chip-active" } else { "chip" }
                    on:click=move |_| set_category.set(None)
                >
                    {format!("All ({})", products().len())}
                </button>
                {counts
                    .into_iter()
                    .map(|(c, count)| view! {
                        <button
                            class=move || if category.get() == Some(c) { "chip chip-active" } else { "chip" }
                            on:click=move |_| set_category.set(Some(c))
                        >
                            {format!("{} {} ({})", c.icon(), c.name(), count)}
                        </button>
                    })
                    .collect_view()}
            </div>

            {move || {
                let items = visible.get();
                if items.is_empty() {
                    view! { <p class="muted center">"No products match your search."</p> }.into_any()
                } else {
                    view! {
                        <div class="grid">
                            {items
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product/> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </main>
    }
}
