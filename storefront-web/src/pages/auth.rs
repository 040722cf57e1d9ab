//! Sign-in page
//!
//! Hosts the wallet connect card. When authentication flips on, a short
//! countdown starts and the visitor is sent back to the captured
//! `returnTo` location (or the shop). "Continue" skips the wait; either
//! way only one navigation happens per sign-in.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use shared::config::app_config;
use shared::navigation::{resume_target, AuthRedirect, ReturnTarget};
use shared::network::Network;
use shared::utils::short_address;

use crate::components::BaseWalletConnect;
use crate::state::notice::use_notices;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::COUNTDOWN_TICK_MS;
use crate::utils::url::current_search;

const FEATURES: [(&str, &str, &str); 3] = [
    ("🛡", "Secure Payments", "Blockchain-secured transactions with no credit card required"),
    ("⚡", "Fast Checkout", "Quick ETH payments with instant confirmation"),
    ("🌐", "Global Shipping", "Worldwide delivery with decentralized payment processing"),
];

#[component]
pub fn AuthPage() -> impl IntoView {
    let wallet = use_wallet_context();
    let notices = use_notices();
    let location_search = use_location().search;
    let navigate = use_navigate();
    let config = app_config();

    let redirect = StoredValue::new(AuthRedirect::new(config.redirect_seconds));
    // Bumped per countdown so a stale timer loop stops ticking.
    let generation = StoredValue::new(0u64);
    let (countdown, set_countdown) = signal(None::<u32>);

    // The router may not have parsed the query yet on first load.
    let search = move || {
        let search = location_search.get_untracked();
        if search.is_empty() {
            current_search()
        } else {
            search
        }
    };
    let has_return = Memo::new(move |_| ReturnTarget::from_search(&location_search.get()).is_some());

    let resume = {
        let navigate = navigate.clone();
        move || {
            let target = resume_target(&search(), &config.default_landing);
            log::info!("Resuming navigation to {}", target);
            navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    };

    let resume_tick = resume.clone();
    Effect::new(move |_| {
        let is_authenticated = wallet.is_authenticated();
        let started = redirect
            .try_update_value(|r| r.observe(is_authenticated))
            .unwrap_or(false);
        set_countdown.set(redirect.with_value(AuthRedirect::remaining));

        if !started {
            return;
        }
        if let Some(address) = wallet.address() {
            notices.success(
                "Base Wallet Connected! 🎉",
                format!("Welcome! Connected with {}", short_address(&address)),
            );
        }

        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        let resume = resume_tick.clone();
        spawn_local(async move {
            loop {
                TimeoutFuture::new(COUNTDOWN_TICK_MS).await;
                if generation.try_get_value() != Some(current) {
                    break;
                }
                let Some(due) = redirect.try_update_value(|r| r.tick()) else {
                    break;
                };
                let remaining = redirect.with_value(AuthRedirect::remaining);
                set_countdown.set(remaining);
                if due {
                    resume();
                    break;
                }
                if remaining.is_none() {
                    break;
                }
            }
        });
    });

    let on_continue = move |_| {
        if redirect.try_update_value(|r| r.resume_now()).unwrap_or(false) {
            set_countdown.set(None);
            resume();
        }
    };

    let to_dashboard = move |_| navigate("/dashboard", NavigateOptions::default());

    view! {
        <main class="container">
            <div class="hero center">
                <span class="pill">"✨ Web3 Authentication"</span>
                <h1 class="gradient-title">"Welcome to TopUp Shop"</h1>
                <p class="muted lead">
                    "The future of e-commerce. Connect your Base Wallet to shop premium physical products with blockchain security."
                </p>
            </div>

            <div class="split">
                <div class="stack">
                    <BaseWalletConnect/>

                    {move || countdown.get().map(|seconds| {
                        let message = if has_return.get() {
                            format!("Redirecting back in {} seconds...", seconds)
                        } else {
                            format!("Redirecting to shop in {} seconds...", seconds)
                        };
                        view! {
                            <div class="alert alert-success">
                                <span class="pulse"></span>
                                {message}
                            </div>
                        }
                    })}

                    <Show when=move || wallet.is_connected()>
                        <div class="stack">
                            <button class="btn btn-primary full" on:click=on_continue.clone()>
                                {move || if has_return.get() { "Continue" } else { "Continue to Shop" }}
                            </button>
                            <button class="btn btn-outline full" on:click=to_dashboard.clone()>
                                "Go to Dashboard"
                            </button>
                        </div>
                    </Show>
                </div>

                <div class="stack">
                    <h2>"Why Choose Web3?"</h2>
                    {FEATURES
                        .iter()
                        .map(|(icon, title, description)| view! {
                            <div class="card feature">
                                <span class="feature-icon">{*icon}</span>
                                <div>
                                    <h3>{*title}</h3>
                                    <p class="muted small">{*description}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}

                    <div class="card">
                        <h3>"Supported Networks"</h3>
                        <p class="muted">"Connect to any of these Base networks"</p>
                        {Network::ALL
                            .into_iter()
                            .map(|network| {
                                let info = network.info();
                                view! {
                                    <div class="row spread">
                                        <span>{info.name}</span>
                                        <span class="badge">{format!("Chain {}", info.id)}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </main>
    }
}
