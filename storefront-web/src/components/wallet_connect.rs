//! Base Wallet Connect Card
//!
//! Three states: authenticated, connected on a foreign chain, and
//! disconnected. Connection failures surface both inline and as a notice.

use leptos::prelude::*;

use shared::auth::AuthError;
use shared::network::Network;
use shared::utils::format_address;

use crate::services::wallet::has_wallet;
use crate::state::notice::use_notices;
use crate::state::wallet::use_wallet_context;

fn network_badge_class(network: Option<Network>) -> &'static str {
    match network {
        Some(Network::Mainnet) => "badge badge-mainnet",
        Some(Network::Testnet) => "badge badge-testnet",
        None => "badge badge-unknown",
    }
}

/// Error worth an inline alert on a connected card. A wrong network is
/// already the card's headline.
pub(crate) fn switch_error(error: Option<AuthError>) -> Option<String> {
    error
        .filter(|e| *e != AuthError::WrongNetwork)
        .map(|e| e.message())
}

/// One button per accepted Base network; disabled while a switch is in flight.
#[component]
pub fn NetworkSwitchButtons(#[prop(optional)] compact: bool) -> impl IntoView {
    let wallet = use_wallet_context();

    Network::ALL
        .into_iter()
        .map(|network| {
            let label = if compact {
                network.info().name.to_string()
            } else {
                format!("Switch to {}", network.info().name)
            };
            view! {
                <button
                    class="btn btn-outline"
                    disabled=move || wallet.switch_pending().is_some()
                    on:click=move |_| wallet.switch_network(network)
                >
                    {move || {
                        if wallet.switch_pending() == Some(network) {
                            "Switching...".to_string()
                        } else {
                            label.clone()
                        }
                    }}
                </button>
            }
        })
        .collect_view()
}

#[component]
pub fn BaseWalletConnect() -> impl IntoView {
    let wallet = use_wallet_context();
    let notices = use_notices();
    let (connect_error, set_connect_error) = signal(None::<String>);

    let handle_connect = move |_| {
        if !has_wallet() {
            notices.error("Wallet Not Found", "Please install Coinbase Wallet to continue");
            return;
        }
        set_connect_error.set(None);
        wallet.connect(move |result| match result {
            Ok(_) => notices.success(
                "Wallet Connected! 🎉",
                "Successfully connected to Base Wallet. Redirecting...",
            ),
            Err(e) => {
                set_connect_error.set(Some(e.to_string()));
                notices.error("Connection Failed", e.to_string());
            }
        });
    };

    let handle_disconnect = move |_| {
        wallet.disconnect();
        notices.success("Wallet Disconnected", "Successfully disconnected from Base Wallet");
    };

    move || {
        let state = wallet.state();
        let address = wallet.address();

        match address {
            Some(address) if wallet.is_connected() && state.is_authenticated => {
                let network = Network::from_chain_id(wallet.chain_id());
                let explorer = wallet.explorer_url().unwrap_or_default();
                view! {
                    <div class="card card-success">
                        <h3>"Base Wallet Connected"</h3>
                        <div class="mono">{format_address(&address, 8, 6)}</div>
                        <span class=network_badge_class(network)>{wallet.network_name()}</span>
                        {switch_error(state.error).map(|message| view! { <div class="alert alert-error">{message}</div> })}
                        <div class="row">
                            <button class="btn btn-outline grow" on:click=handle_disconnect>"Disconnect"</button>
                            <a class="btn btn-outline" href=explorer target="_blank" rel="noopener noreferrer">"Explorer ↗"</a>
                        </div>
                    </div>
                }
                .into_any()
            }
            Some(_) if wallet.is_connected() && !state.is_correct_network => view! {
                <div class="card card-warning">
                    <h3>"Wrong Network"</h3>
                    <p class="muted">"Please switch to a supported Base network"</p>
                    <div class="alert">
                        {format!(
                            "You're connected to {}. Please switch to Base Mainnet or Base Sepolia.",
                            wallet.network_name()
                        )}
                    </div>
                    {switch_error(state.error).map(|message| view! { <div class="alert alert-error">{message}</div> })}
                    <div class="stack">
                        <NetworkSwitchButtons/>
                    </div>
                    <button class="btn btn-ghost full" on:click=handle_disconnect>"Disconnect"</button>
                </div>
            }
            .into_any(),
            _ => {
                let error = connect_error
                    .get()
                    .or_else(|| state.error.map(|e| e.message()));
                view! {
                    <div class="card">
                        <h3>"Connect Base Wallet"</h3>
                        <p class="muted">"Connect your Base Wallet to shop premium products with crypto payments"</p>
                        {error.map(|message| view! { <div class="alert alert-error">{message}</div> })}
                        <button
                            class="btn btn-primary full"
                            disabled=move || wallet.connecting.get()
                            on:click=handle_connect
                        >
                            {move || if wallet.connecting.get() { "Connecting..." } else { "Connect Base Wallet" }}
                        </button>
                        <div class="muted small center">
                            <p>"Supports Base Mainnet & Base Sepolia"</p>
                            <p>"Powered by Coinbase Smart Wallet"</p>
                        </div>
                    </div>
                }
                .into_any()
            }
        }
    }
}
