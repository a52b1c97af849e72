//! # Register Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     REGISTER_QUANTITY_POLICY=require_positive                          │
//! │                                                                         │
//! │  2. Embedding application (serde-deserialized RegisterConfig)          │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     QuantityPolicy::Permissive                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable overriding [`RegisterConfig::quantity_policy`].
pub const QUANTITY_POLICY_ENV: &str = "REGISTER_QUANTITY_POLICY";

// =============================================================================
// Quantity Policy
// =============================================================================

/// How `scan_item` treats the quantity it is given.
///
/// ## Policies
/// ```text
/// PERMISSIVE (Default)
/// ────────────────────
/// • Any quantity is recorded as given
/// • 0 gives a zero line total, negatives give negative line totals
///
/// REQUIRE_POSITIVE
/// ────────────────
/// • Quantities below 1 fail with InvalidQuantity
/// • Nothing is recorded for a rejected scan
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityPolicy {
    #[default]
    Permissive,
    RequirePositive,
}

impl std::fmt::Display for QuantityPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantityPolicy::Permissive => write!(f, "permissive"),
            QuantityPolicy::RequirePositive => write!(f, "require_positive"),
        }
    }
}

impl std::str::FromStr for QuantityPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permissive" | "any" => Ok(QuantityPolicy::Permissive),
            "require_positive" | "require-positive" | "strict" => {
                Ok(QuantityPolicy::RequirePositive)
            }
            other => Err(ConfigError::InvalidValue {
                key: QUANTITY_POLICY_ENV.to_string(),
                value: other.to_string(),
                reason: "valid options: permissive, require_positive".to_string(),
            }),
        }
    }
}

// =============================================================================
// Register Configuration
// =============================================================================

/// Settings a [`CashRegister`](crate::CashRegister) is built with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterConfig {
    /// Quantity check applied by `scan_item`.
    #[serde(default)]
    pub quantity_policy: QuantityPolicy,
}

impl RegisterConfig {
    /// Defaults overridden by environment variables.
    pub fn from_env() -> ConfigResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    ///
    /// Split out of [`RegisterConfig::from_env`] so overrides can be resolved
    /// without touching the process environment.
    pub fn with_overrides<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(QUANTITY_POLICY_ENV) {
            debug!(key = QUANTITY_POLICY_ENV, value = %raw, "Applying override");
            self.quantity_policy = raw.parse()?;
        }

        info!(quantity_policy = %self.quantity_policy, "Register configuration resolved");
        Ok(self)
    }

    /// Builder-style setter.
    pub fn quantity_policy(mut self, policy: QuantityPolicy) -> Self {
        self.quantity_policy = policy;
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
