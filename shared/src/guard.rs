//! # Route Guard Decisions
//!
//! A guarded view is either **Open** (children render) or **Blocked**
//! (children withheld, redirect issued). The decision is recomputed on
//! every change of the authentication flag or the location, so a session
//! that drops while the view is mounted re-blocks immediately.

use tracing::debug;

use crate::error::ConfigError;
use crate::navigation::{validate_route, ReturnTarget, SIGN_IN_PATH};

pub const BLOCK_NOTICE_TITLE: &str = "Authentication Required";
pub const BLOCK_NOTICE_BODY: &str = "Please connect your Base Wallet to access this page";

/// Guard options.
///
/// | Field               | Default  |
/// |---------------------|----------|
/// | `require_auth`      | `false`  |
/// | `redirect_target`   | `/auth`  |
/// | `announce_on_block` | `true`   |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    require_auth: bool,
    redirect_target: String,
    announce_on_block: bool,
}

impl GuardConfig {
    pub fn new(
        require_auth: bool,
        redirect_target: impl Into<String>,
        announce_on_block: bool,
    ) -> Result<Self, ConfigError> {
        let redirect_target = redirect_target.into();
        validate_route(&redirect_target)?;
        Ok(Self {
            require_auth,
            redirect_target,
            announce_on_block,
        })
    }

    /// Default options with `require_auth` set.
    pub fn protected() -> Self {
        Self {
            require_auth: true,
            ..Self::default()
        }
    }

    pub fn with_redirect_target(self, redirect_target: impl Into<String>) -> Result<Self, ConfigError> {
        Self::new(self.require_auth, redirect_target, self.announce_on_block)
    }

    pub fn silent(self) -> Self {
        Self {
            announce_on_block: false,
            ..self
        }
    }

    pub fn require_auth(&self) -> bool {
        self.require_auth
    }

    pub fn redirect_target(&self) -> &str {
        &self.redirect_target
    }

    pub fn announce_on_block(&self) -> bool {
        self.announce_on_block
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            require_auth: false,
            redirect_target: SIGN_IN_PATH.to_string(),
            announce_on_block: true,
        }
    }
}

/// Redirect issued by a blocked guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Full location, e.g. `/auth?returnTo=%2Fdashboard`.
    pub location: String,
    pub return_target: ReturnTarget,
    /// Whether to surface a notice to the user.
    pub announce: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Open,
    Blocked(Redirect),
}

impl GuardDecision {
    pub fn evaluate(config: &GuardConfig, is_authenticated: bool, pathname: &str, search: &str) -> Self {
        if !config.require_auth || is_authenticated {
            return GuardDecision::Open;
        }

        let return_target = ReturnTarget::capture(pathname, search);
        let location = return_target.redirect_url(&config.redirect_target);
        debug!(%location, "blocking unauthenticated access");

        GuardDecision::Blocked(Redirect {
            location,
            return_target,
            announce: config.announce_on_block,
        })
    }

    pub fn renders_children(&self) -> bool {
        matches!(self, GuardDecision::Open)
    }

    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            GuardDecision::Open => None,
            GuardDecision::Blocked(redirect) => Some(redirect),
        }
    }
}
