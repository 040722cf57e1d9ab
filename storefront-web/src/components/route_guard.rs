//! Route Guard Component
//!
//! Wraps a protected view. Unauthenticated visitors are sent to the sign-in
//! route with the current location captured in `returnTo`; the children are
//! not rendered at all until the visitor is authenticated.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use shared::config::app_config;
use shared::guard::{GuardConfig, GuardDecision, BLOCK_NOTICE_BODY, BLOCK_NOTICE_TITLE};

use crate::state::notice::use_notices;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn RouteGuard(
    /// Require an authenticated wallet on an accepted network.
    #[prop(optional)]
    require_auth: bool,
    /// Sign-in route; defaults to the configured one.
    #[prop(optional, into)]
    redirect_target: Option<String>,
    /// Show the "Authentication Required" notice when blocking.
    #[prop(default = true)]
    announce_on_block: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let wallet = use_wallet_context();
    let notices = use_notices();
    let location = use_location();
    let navigate = use_navigate();

    let target = redirect_target.unwrap_or_else(|| app_config().sign_in_path.clone());
    let config = GuardConfig::new(require_auth, target, announce_on_block).unwrap_or_else(|e| {
        log::error!("Invalid route guard target: {}", e);
        GuardConfig::new(require_auth, app_config().sign_in_path.clone(), announce_on_block)
            .unwrap_or_default()
    });

    let decision = Memo::new(move |_| {
        GuardDecision::evaluate(
            &config,
            wallet.is_authenticated(),
            &location.pathname.get(),
            &location.search.get(),
        )
    });

    Effect::new(move |_| {
        if let GuardDecision::Blocked(redirect) = decision.get() {
            log::info!("Blocked {}, redirecting to {}", redirect.return_target.as_str(), redirect.location);
            if redirect.announce {
                notices.error(BLOCK_NOTICE_TITLE, BLOCK_NOTICE_BODY);
            }
            navigate(
                &redirect.location,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || decision.with(GuardDecision::renders_children).then(|| children())
}
