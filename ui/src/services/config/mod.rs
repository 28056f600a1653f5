//! Runtime settings for the simulated registry
//!
//! Defaults reproduce the demo's timings and odds. Overrides can be
//! supplied as JSON; anything left out keeps its default.

use serde::{Deserialize, Serialize};

use crate::services::errors::{HynsError, HynsResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HynsConfig {
    pub timing: TimingConfig,
    pub outcomes: OutcomeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Simulated IMEI lookup latency
    pub verification_delay_ms: u32,
    /// Simulated transaction registration latency
    pub transaction_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeConfig {
    /// Chance that a valid transaction is accepted
    pub transaction_success_rate: f64,
    /// Chance that a fresh login is given the admin role
    pub admin_role_probability: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            verification_delay_ms: 1500, // 1.5 seconds
            transaction_delay_ms: 2000,  // 2 seconds
        }
    }
}

impl Default for OutcomeConfig {
    fn default() -> Self {
        Self {
            transaction_success_rate: 0.8,
            admin_role_probability: 0.5,
        }
    }
}

impl HynsConfig {
    /// Zero-latency profile for tests.
    pub fn instant() -> Self {
        Self {
            timing: TimingConfig {
                verification_delay_ms: 0,
                transaction_delay_ms: 0,
            },
            outcomes: OutcomeConfig::default(),
        }
    }

    pub fn from_json_str(json: &str) -> HynsResult<Self> {
        let config: HynsConfig =
            serde_json::from_str(json).map_err(|e| HynsError::Configuration {
                field: "json".to_string(),
                value: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Parses bundled overrides, falling back to the defaults when they
    /// are malformed or out of range.
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json_str(json).unwrap_or_else(|error| {
            tracing::warn!(%error, "using default configuration");
            Self::default()
        })
    }

    pub fn validate(&self) -> HynsResult<()> {
        check_probability(
            "outcomes.transaction_success_rate",
            self.outcomes.transaction_success_rate,
        )?;
        check_probability(
            "outcomes.admin_role_probability",
            self.outcomes.admin_role_probability,
        )?;
        Ok(())
    }
}

fn check_probability(field: &str, value: f64) -> HynsResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(HynsError::Configuration {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}
