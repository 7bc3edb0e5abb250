//! Configuration for the stream helpers that downstream crates can
//! serialize/deserialize.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which callbacks the convenience `subscribe` helper insists on.
///
/// The source argument is always required; this only governs the three
/// notification callbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallbackPolicy {
    /// All callbacks optional; a missing one is a no-op.
    #[default]
    Lenient,
    /// `on_next` must be supplied, the terminal callbacks are optional.
    RequireOnNext,
    /// All three callbacks must be supplied.
    Strict,
}

impl CallbackPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            CallbackPolicy::Lenient => "lenient",
            CallbackPolicy::RequireOnNext => "require_on_next",
            CallbackPolicy::Strict => "strict",
        }
    }

    pub fn requires_on_next(self) -> bool {
        !matches!(self, CallbackPolicy::Lenient)
    }

    pub fn requires_terminal_callbacks(self) -> bool {
        matches!(self, CallbackPolicy::Strict)
    }
}

impl fmt::Display for CallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CallbackPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(CallbackPolicy::Lenient),
            "require_on_next" => Ok(CallbackPolicy::RequireOnNext),
            "strict" => Ok(CallbackPolicy::Strict),
            other => Err(Error::Config(format!("unknown callback policy '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RxConfig {
    /// Null-callback policy of the convenience subscribe helper.
    #[serde(default)]
    pub callback_policy: CallbackPolicy,
}

impl RxConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `BOXING_CALLBACK_POLICY`: `lenient`, `require_on_next` or `strict`
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("BOXING_CALLBACK_POLICY") {
            if let Ok(v) = s.parse::<CallbackPolicy>() {
                cfg.callback_policy = v;
            }
        }

        cfg
    }

    pub fn with_callback_policy(mut self, policy: CallbackPolicy) -> Self {
        self.callback_policy = policy;
        self
    }
}
