//! # Return Navigation
//!
//! When a guarded view turns a visitor away, the requested path and query
//! travel to the sign-in view inside a single percent-encoded query
//! parameter:
//!
//! ```text
//! /dashboard?tab=orders  ->  /auth?returnTo=%2Fdashboard%3Ftab%3Dorders
//! ```
//!
//! After authentication the target is decoded and visited exactly once.
//! Only in-app paths are honoured; anything else falls back to the default
//! landing route.

use tracing::{debug, warn};

use crate::error::ConfigError;

/// Query parameter carrying the encoded return target.
pub const RETURN_PARAM: &str = "returnTo";

/// Default landing route after sign-in when no target was captured.
pub const DEFAULT_LANDING: &str = "/";

/// Default sign-in view.
pub const SIGN_IN_PATH: &str = "/auth";

/// Check that `path` is an absolute in-app path without query or fragment.
pub fn validate_route(path: &str) -> Result<(), ConfigError> {
    let valid = path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains(['?', '#'])
        && !path.chars().any(char::is_whitespace);
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidRoute(path.to_string()))
    }
}

/// Originally requested path plus query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnTarget(String);

impl ReturnTarget {
    /// Capture from the current location. `search` may be empty or start with `?`.
    pub fn capture(pathname: &str, search: &str) -> Self {
        let search = match search {
            "" | "?" => "",
            s if s.starts_with('?') => s,
            s => return Self(format!("{}?{}", pathname, s)),
        };
        Self(format!("{}{}", pathname, search))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn encode(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }

    /// Decode a percent-encoded target. Empty targets are treated as absent.
    pub fn decode(encoded: &str) -> Option<Self> {
        let decoded = decode_component(encoded);
        if decoded.is_empty() {
            None
        } else {
            Some(Self(decoded))
        }
    }

    /// `redirect_target?returnTo=<encoded>`
    pub fn redirect_url(&self, redirect_target: &str) -> String {
        format!("{}?{}={}", redirect_target, RETURN_PARAM, self.encode())
    }

    /// Read the target from a query string such as `?returnTo=%2Fdashboard`.
    pub fn from_search(search: &str) -> Option<Self> {
        query_param(search, RETURN_PARAM).and_then(|value| {
            if value.is_empty() {
                None
            } else {
                Some(Self(value))
            }
        })
    }

    /// True for same-origin absolute paths (`/x`), false for `//host` or `scheme:`.
    pub fn is_internal(&self) -> bool {
        self.0.starts_with('/') && !self.0.starts_with("//") && !self.0.starts_with("/\\")
    }
}

/// Decode one query component the way `URLSearchParams` does.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

/// Get a query parameter from a query string, decoded.
///
/// A key without `=` yields an empty string.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);
    if query_string.is_empty() {
        return None;
    }

    for pair in query_string.split('&') {
        match pair.split_once('=') {
            Some((param_key, param_value)) if decode_component(param_key) == key => {
                return Some(decode_component(param_value));
            }
            None if decode_component(pair) == key => return Some(String::new()),
            _ => {}
        }
    }

    None
}

/// Where to go after a successful sign-in.
pub fn resume_target(search: &str, default_route: &str) -> String {
    match ReturnTarget::from_search(search) {
        Some(target) if target.is_internal() => {
            debug!(target = target.as_str(), "resuming captured route");
            target.0
        }
        Some(target) => {
            warn!(target = target.as_str(), "ignoring non-local return target");
            default_route.to_string()
        }
        None => default_route.to_string(),
    }
}

/// Stage of the post-authentication redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectPhase {
    /// Nothing observed yet, or not authenticated.
    Idle,
    /// Counting down; holds the seconds left.
    Counting(u32),
    /// Navigation has been handed out for the current authentication.
    Done,
}

/// One-shot redirect armed on the false -> true edge of authentication.
/// A fresh latch starts out unauthenticated, so a session that is already
/// live when the view mounts still counts down.
///
/// The countdown and the explicit "continue" action share one latch, so at
/// most one navigation happens per authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRedirect {
    seconds: u32,
    was_authenticated: bool,
    phase: RedirectPhase,
}

impl AuthRedirect {
    pub fn new(seconds: u32) -> Self {
        Self {
            seconds,
            was_authenticated: false,
            phase: RedirectPhase::Idle,
        }
    }

    pub fn phase(&self) -> RedirectPhase {
        self.phase
    }

    /// Seconds left while counting.
    pub fn remaining(&self) -> Option<u32> {
        match self.phase {
            RedirectPhase::Counting(n) => Some(n),
            _ => None,
        }
    }

    /// Feed the current authentication flag. Returns `true` when a countdown starts.
    pub fn observe(&mut self, is_authenticated: bool) -> bool {
        let rising = is_authenticated && !self.was_authenticated;
        let falling = !is_authenticated && self.was_authenticated;
        self.was_authenticated = is_authenticated;

        if rising {
            self.phase = RedirectPhase::Counting(self.seconds);
            return true;
        }
        if falling {
            self.phase = RedirectPhase::Idle;
        }
        false
    }

    /// Advance the countdown by one second. Returns `true` exactly once, when navigation is due.
    pub fn tick(&mut self) -> bool {
        match self.phase {
            RedirectPhase::Counting(n) if n <= 1 => {
                self.phase = RedirectPhase::Done;
                true
            }
            RedirectPhase::Counting(n) => {
                self.phase = RedirectPhase::Counting(n - 1);
                false
            }
            RedirectPhase::Idle | RedirectPhase::Done => false,
        }
    }

    /// Explicit "continue": claims the navigation unless it was already handed out.
    pub fn resume_now(&mut self) -> bool {
        if self.phase == RedirectPhase::Done {
            return false;
        }
        self.phase = RedirectPhase::Done;
        true
    }
}
