//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use shared::utils::short_address;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet = use_wallet_context();

    view! {
        <nav class="navbar">
            <div class="nav-inner">
                <A href="/">
                    <span class="nav-title">"TopUp Shop"</span>
                </A>
                <div class="nav-links">
                    <A href="/">"Products"</A>
                    <A href="/dashboard">"Dashboard"</A>
                    {move || {
                        match wallet.address().filter(|_| wallet.is_authenticated()) {
                            Some(address) => view! {
                                <span class="badge badge-online" title=address.clone()>
                                    {short_address(&address)}
                                </span>
                            }
                            .into_any(),
                            None => view! {
                                <A href="/auth">
                                    <span class="btn btn-primary">"Connect Wallet"</span>
                                </A>
                            }
                            .into_any(),
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}
