//! Dashboard (guarded): orders, wallet and transfers

use leptos::prelude::*;
use leptos_router::components::A;

use shared::catalog::{find, Product};
use shared::dto::PurchaseRecord;
use shared::payment::PurchaseProgress;
use shared::pricing::Usd;

use crate::components::{BaseWalletConnect, ProgressBar, RouteGuard, SendTransaction};
use crate::state::purchases::use_purchases;
use crate::state::wallet::use_wallet_context;
use crate::utils::format::format_chain_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Orders,
    Wallet,
    Transactions,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Orders, Tab::Wallet, Tab::Transactions];

    fn label(self) -> &'static str {
        match self {
            Tab::Orders => "My Orders",
            Tab::Wallet => "Base Wallet",
            Tab::Transactions => "Transactions",
        }
    }
}

/// Products with at least one payment, in order of first appearance.
fn ordered_products(records: &[PurchaseRecord]) -> Vec<(&'static Product, PurchaseProgress)> {
    let mut seen: Vec<&'static Product> = Vec::new();
    for record in records {
        if let Some(product) = find(&record.product_id) {
            if !seen.iter().any(|p| p.id == product.id) {
                seen.push(product);
            }
        }
    }
    seen.into_iter()
        .map(|product| (product, PurchaseProgress::from_records(product, records)))
        .collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RouteGuard require_auth=true>
            <DashboardContent/>
        </RouteGuard>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let (tab, set_tab) = signal(Tab::Orders);

    view! {
        <main class="container">
            <div class="page-header">
                <h1 class="gradient-title">"My Dashboard"</h1>
                <p class="muted">"Track your orders, manage your wallet, and view transaction history"</p>
            </div>

            <div class="tabs">
                {Tab::ALL
                    .into_iter()
                    .map(|t| view! {
                        <button
                            class=move || if tab.get() == t { "tab tab-active" } else { "tab" }
                            on:click=move |_| set_tab.set(t)
                        >
                            {t.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            {move || match tab.get() {
                Tab::Orders => view! { <OrdersTab/> }.into_any(),
                Tab::Wallet => view! { <WalletTab/> }.into_any(),
                Tab::Transactions => view! { <TransactionsTab/> }.into_any(),
            }}
        </main>
    }
}

#[component]
fn OrdersTab() -> impl IntoView {
    let purchases = use_purchases();

    move || {
        if purchases.loading.get() {
            return view! { <p class="muted center">"Loading your orders..."</p> }.into_any();
        }

        let orders = purchases.records.with(|records| ordered_products(records));
        if orders.is_empty() {
            return view! {
                <div class="card center">
                    <h3>"No orders yet"</h3>
                    <p class="muted">"Start shopping to see your orders here"</p>
                    <A href="/">
                        <span class="btn btn-primary">"Browse Products"</span>
                    </A>
                </div>
            }
            .into_any();
        }

        view! {
            <div class="stack">
                {orders
                    .into_iter()
                    .map(|(product, progress)| view! {
                        <div class="card order">
                            <div class="row spread">
                                <A href=format!("/product/{}", product.id)>
                                    <strong>{product.name}</strong>
                                </A>
                                <span class=if progress.is_complete() { "badge badge-online" } else { "badge" }>
                                    {if progress.is_complete() { "Paid" } else { "Topping up" }}
                                </span>
                            </div>
                            <ProgressBar progress=progress/>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    }
}

#[component]
fn WalletTab() -> impl IntoView {
    let wallet = use_wallet_context();

    view! {
        <div class="grid-2">
            <BaseWalletConnect/>
            <div class="card">
                <h3>"Base Network Info"</h3>
                <p class="muted">"You're connected to the Base blockchain network"</p>
                <div class="row spread">
                    <span class="muted">"Network:"</span>
                    <span>{move || wallet.network_name()}</span>
                </div>
                <div class="row spread">
                    <span class="muted">"Chain ID:"</span>
                    <span>{move || format_chain_id(wallet.chain_id())}</span>
                </div>
                <div class="row spread">
                    <span class="muted">"Currency:"</span>
                    <span>{move || wallet.currency_symbol()}</span>
                </div>
                {move || wallet.chain_info().map(|info| view! {
                    <div class="row spread">
                        <span class="muted">"RPC:"</span>
                        <span class="mono small">{info.rpc_url}</span>
                    </div>
                })}
            </div>
        </div>
    }
}

#[component]
fn TransactionsTab() -> impl IntoView {
    let purchases = use_purchases();

    view! {
        <div class="grid-2">
            <SendTransaction/>
            <div class="card">
                <h3>"Payment History"</h3>
                {move || {
                    let records = purchases.records.get();
                    if records.is_empty() {
                        return view! { <p class="muted">"No payments yet"</p> }.into_any();
                    }
                    let total: Usd = records.iter().map(|r| Usd::from_cents(r.amount_cents)).sum();
                    view! {
                        <ul class="history">
                            {records
                                .into_iter()
                                .map(|record| {
                                    let name = find(&record.product_id).map_or(record.product_id.clone(), |p| p.name.to_string());
                                    view! {
                                        <li class="row spread">
                                            <span>
                                                {name}
                                                <span class="muted small">
                                                    {format!(" · {}", record.created_at.format("%b %d, %Y %H:%M"))}
                                                </span>
                                            </span>
                                            <span>{Usd::from_cents(record.amount_cents).to_string()}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="row spread total">
                            <strong>"Total paid"</strong>
                            <strong>{total.to_string()}</strong>
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_products_groups_payments() {
        let records = vec![
            PurchaseRecord::new("0xabc", "2", 1000, None),
            PurchaseRecord::new("0xabc", "1", 500, None),
            PurchaseRecord::new("0xabc", "2", 500, None),
            PurchaseRecord::new("0xabc", "unknown", 500, None),
        ];

        let orders = ordered_products(&records);
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].0.id, "2");
        assert_eq!(orders[0].1.paid, Usd::from_cents(1500));
        assert_eq!(orders[1].0.id, "1");
        assert_eq!(orders[1].1.paid, Usd::from_cents(500));
    }
}
