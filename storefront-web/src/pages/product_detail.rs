//! Product detail page with the full / top-up payment form
//!
//! Browsing is open to everyone; the payment form only appears once the
//! wallet is authenticated, otherwise a [`ConnectPrompt`] takes its place.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use web_sys::SubmitEvent;

use shared::catalog::{find, Product};
use shared::config::app_config;
use shared::dto::PurchaseRecord;
use shared::error::PaymentError;
use shared::payment::{plan_payment, PaymentMethod};

use crate::components::{ConnectPrompt, ProgressBar};
use crate::state::notice::use_notices;
use crate::state::purchases::use_purchases;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{FALLBACK_IMAGE, PAYMENT_CONFIRM_DELAY_MS, POST_PAYMENT_REDIRECT_MS};

fn error_title(error: &PaymentError) -> &'static str {
    match error {
        PaymentError::InvalidAmount => "Invalid amount",
        PaymentError::AmountTooHigh { .. } => "Amount too high",
        PaymentError::ProductNotFound(_) => "Product Not Found",
        PaymentError::Unauthenticated => "Wallet Required",
        PaymentError::AlreadyPaid => "Already Paid",
    }
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let notices = use_notices();

    let product = Memo::new(move |_| params.with(|p| p.get("id")).and_then(|id| find(&id)));

    Effect::new(move |_| {
        if product.get().is_none() {
            let id = params.with_untracked(|p| p.get("id")).unwrap_or_default();
            log::warn!("{}", PaymentError::ProductNotFound(id));
            notices.error("Product Not Found", "The requested product could not be found");
            navigate(&app_config().default_landing, NavigateOptions::default());
        }
    });

    move || product.get().map(|product| view! { <ProductView product=product/> })
}

#[component]
fn ProductView(product: &'static Product) -> impl IntoView {
    let wallet = use_wallet_context();
    let purchases = use_purchases();
    let notices = use_notices();
    let navigate = use_navigate();
    let back = navigate.clone();

    let (image_failed, set_image_failed) = signal(false);
    let (method, set_method) = signal(PaymentMethod::Full);
    let (custom_amount, set_custom_amount) = signal(String::new());
    let (processing, set_processing) = signal(false);

    let progress = Signal::derive(move || purchases.progress(product));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if processing.get_untracked() {
            return;
        }

        let plan = match plan_payment(
            product,
            method.get_untracked(),
            &custom_amount.get_untracked(),
            &progress.get_untracked(),
            wallet.is_authenticated(),
        ) {
            Ok(plan) => plan,
            Err(e) => {
                notices.error(error_title(&e), e.to_string());
                return;
            }
        };
        let Some(address) = wallet.address() else {
            return;
        };

        set_processing.set(true);
        notices.info("Processing Payment", "Please confirm the transaction in your Base Wallet...");
        let navigate = navigate.clone();
        spawn_local(async move {
            TimeoutFuture::new(PAYMENT_CONFIRM_DELAY_MS).await;

            let record = PurchaseRecord::new(&address, plan.product_id, plan.amount.cents(), None);
            if let Err(e) = purchases.record(record).await {
                log::error!("Error processing payment: {}", e);
                notices.error(
                    "Payment Failed",
                    "There was an issue processing your payment. Please try again.",
                );
                set_processing.set(false);
                return;
            }

            let (title, description) = plan.receipt(product.name);
            notices.success(title, description);
            set_custom_amount.set(String::new());
            set_processing.set(false);

            TimeoutFuture::new(POST_PAYMENT_REDIRECT_MS).await;
            navigate("/dashboard", NavigateOptions::default());
        });
    };

    view! {
        <main class="container">
            <button class="btn btn-ghost" on:click=move |_| back(&app_config().default_landing, NavigateOptions::default())>
                "← Back to Products"
            </button>

            <div class="detail-grid">
                <div class="stack">
                    <div class="product-image large">
                        <img
                            src=move || if image_failed.get() { FALLBACK_IMAGE } else { product.image_url }
                            alt=product.name
                            on:error=move |_| set_image_failed.set(true)
                        />
                        <div class="product-badges">
                            {product.popular.then(|| view! { <span class="badge badge-popular">"★ Popular"</span> })}
                            {product.discount.map(|d| view! { <span class="badge badge-discount">{format!("-{}% OFF", d)}</span> })}
                        </div>
                    </div>
                    <div class="card">
                        <h3>"Features"</h3>
                        <ul class="features">
                            {product.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="stack">
                    <div>
                        <span class="badge">{format!("{} {}", product.category.icon(), product.category.name())}</span>
                        <h1>{product.name}</h1>
                        <p class="muted">{product.description}</p>
                    </div>
                    <PriceBlock product=product/>
                    <ProgressBar progress=progress/>

                    {move || {
                        if !wallet.is_authenticated() {
                            return view! {
                                <ConnectPrompt
                                    title="Connect to Purchase"
                                    description="Connect your Base Wallet to buy this product or start a top-up"
                                />
                            }
                            .into_any();
                        }
                        if progress.get().is_complete() {
                            return view! {
                                <div class="alert alert-success">"You own this product. Thank you for your purchase!"</div>
                            }
                            .into_any();
                        }

                        view! {
                            <form class="card stack" on:submit=on_submit.clone()>
                                <h3>"Payment Options"</h3>
                                <label class="radio">
                                    <input
                                        type="radio"
                                        name="method"
                                        prop:checked=move || method.get() == PaymentMethod::Full
                                        on:change=move |_| set_method.set(PaymentMethod::Full)
                                    />
                                    {move || format!("Pay in full ({})", progress.get().remaining())}
                                </label>
                                <label class="radio">
                                    <input
                                        type="radio"
                                        name="method"
                                        prop:checked=move || method.get() == PaymentMethod::Partial
                                        on:change=move |_| set_method.set(PaymentMethod::Partial)
                                    />
                                    "Top up a custom amount"
                                </label>
                                <Show when=move || method.get() == PaymentMethod::Partial>
                                    <label for="amount">"Amount (USD)"</label>
                                    <input
                                        id="amount"
                                        type="number"
                                        step="0.01"
                                        min="0.01"
                                        placeholder="0.00"
                                        prop:value=move || custom_amount.get()
                                        on:input=move |ev| set_custom_amount.set(event_target_value(&ev))
                                    />
                                    <p class="muted small">
                                        {move || format!("Maximum: {}", progress.get().remaining())}
                                    </p>
                                </Show>
                                <button type="submit" class="btn btn-primary full" disabled=move || processing.get()>
                                    {move || if processing.get() { "Processing..." } else { "Pay with Base Wallet" }}
                                </button>
                            </form>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </main>
    }
}

#[component]
fn PriceBlock(product: &'static Product) -> impl IntoView {
    let savings = product.savings();

    view! {
        <div class="price-block">
            <span class="price large">{product.final_price().to_string()}</span>
            {(!savings.is_zero()).then(|| view! {
                <span class="price-old">{product.price.to_string()}</span>
                <span class="badge badge-discount">{format!("Save {}", savings)}</span>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::payment::PurchaseProgress;

    #[test]
    fn test_error_titles() {
        assert_eq!(error_title(&PaymentError::InvalidAmount), "Invalid amount");
        assert_eq!(
            error_title(&PaymentError::AmountTooHigh { max: shared::Usd::from_cents(100) }),
            "Amount too high"
        );
        assert_eq!(error_title(&PaymentError::Unauthenticated), "Wallet Required");
    }

    #[test]
    fn test_progress_starts_empty() {
        let product = find("1").unwrap();
        let progress = PurchaseProgress::from_records(product, &[]);
        assert_eq!(progress.percent(), 0);
        assert_eq!(progress.remaining(), product.final_price());
    }
}
