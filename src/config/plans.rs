//! Plans page configuration

use serde::Deserialize;
use std::time::Duration;

use crate::application::PlansSettings;
use crate::domain::notification::NotificationTimings;
use crate::domain::plans::{PlanTier, TierVisibility};

use super::error::ValidationError;

const MAX_DELAY_MS: u64 = 60_000;

/// Plans page configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PlansConfig {
    /// Which tier cards are listed
    #[serde(default)]
    pub tier_visibility: TierVisibility,

    /// Info notification lifetime in milliseconds
    #[serde(default = "default_info_dismiss")]
    pub info_dismiss_ms: u64,

    /// Success notification lifetime in milliseconds
    #[serde(default = "default_success_dismiss")]
    pub success_dismiss_ms: u64,

    /// Error notification lifetime in milliseconds; unset keeps errors visible
    #[serde(default)]
    pub error_dismiss_ms: Option<u64>,

    /// Plan lookup timeout in milliseconds
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout_ms: u64,

    /// Simulated billing latency in milliseconds
    #[serde(default = "default_billing_latency")]
    pub billing_latency_ms: u64,

    /// Plan every viewer is treated as having (demos only)
    #[serde(default)]
    pub simulated_plan: Option<String>,
}

impl PlansConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    pub fn billing_latency(&self) -> Duration {
        Duration::from_millis(self.billing_latency_ms)
    }

    pub fn timings(&self) -> NotificationTimings {
        NotificationTimings {
            info: Some(Duration::from_millis(self.info_dismiss_ms)),
            success: Some(Duration::from_millis(self.success_dismiss_ms)),
            error: self.error_dismiss_ms.map(Duration::from_millis),
        }
    }

    /// Runtime settings for handlers and page sessions
    pub fn settings(&self) -> PlansSettings {
        PlansSettings {
            visibility: self.tier_visibility,
            timings: self.timings(),
            lookup_timeout: self.lookup_timeout(),
        }
    }

    /// Validate plans configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_delay("info_dismiss_ms", self.info_dismiss_ms)?;
        check_delay("success_dismiss_ms", self.success_dismiss_ms)?;
        if let Some(ms) = self.error_dismiss_ms {
            check_delay("error_dismiss_ms", ms)?;
        }
        check_delay("lookup_timeout_ms", self.lookup_timeout_ms)?;
        if self.billing_latency_ms > MAX_DELAY_MS {
            return Err(ValidationError::InvalidDelay("billing_latency_ms"));
        }
        if let Some(plan) = &self.simulated_plan {
            plan.parse::<PlanTier>()
                .map_err(|_| ValidationError::UnknownSimulatedPlan(plan.clone()))?;
        }
        Ok(())
    }
}

fn check_delay(name: &'static str, ms: u64) -> Result<(), ValidationError> {
    if ms == 0 || ms > MAX_DELAY_MS {
        return Err(ValidationError::InvalidDelay(name));
    }
    Ok(())
}

impl Default for PlansConfig {
    fn default() -> Self {
        Self {
            tier_visibility: TierVisibility::default(),
            info_dismiss_ms: default_info_dismiss(),
            success_dismiss_ms: default_success_dismiss(),
            error_dismiss_ms: None,
            lookup_timeout_ms: default_lookup_timeout(),
            billing_latency_ms: default_billing_latency(),
            simulated_plan: None,
        }
    }
}

fn default_info_dismiss() -> u64 {
    3000
}

fn default_success_dismiss() -> u64 {
    4000
}

fn default_lookup_timeout() -> u64 {
    5000
}

fn default_billing_latency() -> u64 {
    800
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_settings_defaults() {
        let config = PlansConfig::default();
        assert_eq!(config.settings(), PlansSettings::default());
        assert_eq!(config.billing_latency(), Duration::from_millis(800));
    }

    #[test]
    fn test_error_dismissal_is_opt_in() {
        let config = PlansConfig {
            error_dismiss_ms: Some(10_000),
            ..Default::default()
        };
        assert_eq!(config.timings().error, Some(Duration::from_secs(10)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_delay() {
        let config = PlansConfig {
            info_dismiss_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDelay("info_dismiss_ms"))
        ));
    }

    #[test]
    fn test_zero_billing_latency_is_allowed() {
        let config = PlansConfig {
            billing_latency_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_simulated_plan_must_be_known() {
        let config = PlansConfig {
            simulated_plan: Some("gold".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = PlansConfig {
            simulated_plan: Some("basic".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_visibility_deserializes() {
        let config: PlansConfig =
            serde_json::from_str(r#"{"tier_visibility":"hide_free_for_paid"}"#).unwrap();
        assert_eq!(config.tier_visibility, TierVisibility::HideFreeForPaid);
        assert_eq!(config.info_dismiss_ms, 3000);
    }
}
