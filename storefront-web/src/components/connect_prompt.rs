//! Inline prompt shown where a purchase needs a connected wallet

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use shared::config::app_config;
use shared::navigation::ReturnTarget;

#[component]
pub fn ConnectPrompt(
    #[prop(into, default = "Connect Your Wallet".to_string())] title: String,
    #[prop(into, default = "Please connect your Base Wallet to make purchases and access Web3 features".to_string())]
    description: String,
    #[prop(into, default = "Connect Base Wallet".to_string())] action_text: String,
    #[prop(default = true)] show_alert: bool,
) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let browse = navigate.clone();

    // Come back to this page once connected.
    let on_connect = move |_| {
        let target = ReturnTarget::capture(&location.pathname.get_untracked(), &location.search.get_untracked());
        navigate(&target.redirect_url(&app_config().sign_in_path), NavigateOptions::default());
    };

    view! {
        <div class="card card-warning">
            <h3>{title}</h3>
            <p class="muted">{description}</p>
            {show_alert.then(|| view! {
                <div class="alert">
                    "You need to connect your Base Wallet to make purchases. This ensures secure, decentralized transactions on the blockchain."
                </div>
            })}
            <button class="btn btn-primary full" on:click=on_connect>{action_text}</button>
            <div class="center">
                <button class="btn btn-ghost" on:click=move |_| browse(&app_config().default_landing, NavigateOptions::default())>
                    "Continue Browsing"
                </button>
            </div>
            <div class="muted small center">
                <p>"✓ Secure blockchain transactions"</p>
                <p>"✓ No passwords required"</p>
                <p>"✓ Full control of your funds"</p>
            </div>
        </div>
    }
}
