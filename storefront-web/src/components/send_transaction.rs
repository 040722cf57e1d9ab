//! ETH transfer panel
//!
//! Sends native ETH to any address on the connected Base network. Inputs
//! are validated before the wallet is asked to sign.

use leptos::prelude::*;
use leptos::task::spawn_local;

use shared::eth::{is_valid_address, parse_ether};
use shared::wallet::WalletPort;

use crate::state::notice::use_notices;
use crate::state::wallet::use_wallet_context;
use crate::utils::format::format_wei;

#[component]
pub fn SendTransaction() -> impl IntoView {
    let wallet = use_wallet_context();
    let notices = use_notices();

    let (to, set_to) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (sending, set_sending) = signal(false);
    let (tx_hash, set_tx_hash) = signal(None::<String>);

    let handle_send = move |_| {
        let recipient = to.get_untracked().trim().to_string();
        let raw_amount = amount.get_untracked();
        if recipient.is_empty() || raw_amount.trim().is_empty() {
            notices.error("Invalid Input", "Please enter both recipient address and amount");
            return;
        }
        if !is_valid_address(&recipient) {
            notices.error("Invalid Input", "Recipient must be a 0x address");
            return;
        }
        let value = match parse_ether(&raw_amount) {
            Ok(0) => {
                notices.error("Invalid Input", "Amount must be greater than zero");
                return;
            }
            Ok(value) => value,
            Err(e) => {
                notices.error("Invalid Input", e.to_string());
                return;
            }
        };

        let symbol = wallet.currency_symbol();
        set_sending.set(true);
        set_tx_hash.set(None);
        log::info!("Sending {} to {}", format_wei(value, symbol), recipient);
        spawn_local(async move {
            match wallet.auth().port().send_transaction(&recipient, value).await {
                Ok(hash) => {
                    notices.success("Transaction Sent", format!("Sent {}", format_wei(value, symbol)));
                    set_tx_hash.set(Some(hash));
                }
                Err(e) => {
                    log::warn!("Transaction failed: {}", e);
                    notices.error("Transaction Failed", e.to_string());
                }
            }
            set_sending.set(false);
        });
    };

    move || {
        if !wallet.is_connected() {
            return view! {
                <div class="card">
                    <h3>"Web3 Transaction"</h3>
                    <p class="muted">"Connect your Base Wallet to send transactions"</p>
                </div>
            }
            .into_any();
        }

        view! {
            <div class="card">
                <h3>{move || format!("Send {} on Base", wallet.currency_symbol())}</h3>
                <p class="muted">"Send ETH to any address on the Base network"</p>
                <label for="recipient">"Recipient Address"</label>
                <input
                    id="recipient"
                    placeholder="0x..."
                    prop:value=move || to.get()
                    on:input=move |ev| set_to.set(event_target_value(&ev))
                />
                <label for="amount">"Amount (ETH)"</label>
                <input
                    id="amount"
                    type="number"
                    step="0.001"
                    placeholder="0.001"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                />
                <button class="btn btn-primary full" disabled=move || sending.get() on:click=handle_send>
                    {move || if sending.get() { "Sending..." } else { "Send Transaction" }}
                </button>
                {move || tx_hash.get().map(|hash| view! {
                    <div class="muted small">
                        <p>"Transaction Hash:"</p>
                        <p class="mono break-all">{hash}</p>
                    </div>
                })}
            </div>
        }
        .into_any()
    }
}
