//! Connection Status Banner

use leptos::prelude::*;

use crate::components::wallet_connect::switch_error;
use crate::components::NetworkSwitchButtons;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn ConnectionStatus() -> impl IntoView {
    let wallet = use_wallet_context();

    move || {
        let state = wallet.state();
        let network = wallet.network_name();

        if state.is_authenticated {
            view! {
                <div class="alert alert-success">
                    <span>{format!("Connected to {}", network)}</span>
                    <span class="badge badge-online">"Online"</span>
                    {switch_error(state.error).map(|message| view! { <p>{message}</p> })}
                </div>
            }
            .into_any()
        } else if wallet.is_connected() && !state.is_correct_network {
            view! {
                <div class="alert alert-error">
                    <p>{format!("Wrong network detected: {}", network)}</p>
                    {switch_error(state.error).map(|message| view! { <p>{message}</p> })}
                    <NetworkSwitchButtons compact=true/>
                </div>
            }
            .into_any()
        } else if let Some(error) = state.error {
            view! { <div class="alert alert-error">{error.message()}</div> }.into_any()
        } else if !wallet.is_connected() {
            view! {
                <div class="alert">
                    "Wallet not connected. Please connect your Base Wallet to continue."
                </div>
            }
            .into_any()
        } else {
            ().into_any()
        }
    }
}
