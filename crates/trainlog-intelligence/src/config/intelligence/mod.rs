// ABOUTME: Intelligence configuration container with environment overrides
// ABOUTME: Global singleton loaded once, validated, and falling back to defaults on error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration
//!
//! Defaults reproduce the documented engine behavior exactly. Environment
//! variables can retune them per deployment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `TRAINLOG_STRENGTH_MIN_REPS` | `strength.min_effective_reps` |
//! | `TRAINLOG_STRENGTH_MAX_REPS` | `strength.max_effective_reps` |
//! | `TRAINLOG_PROGRESSION_MIN_TREND_POINTS` | `progression.min_points_for_trend` |
//! | `TRAINLOG_CYCLE_DEFAULT_LENGTH_DAYS` | `cycle.default_cycle_length_days` |

mod cycle;
mod error;
mod progression;
mod strength;

pub use cycle::CycleModelConfig;
pub use error::ConfigError;
pub use progression::ProgressionConfig;
pub use strength::StrengthConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// One-rep-max estimation settings
    pub strength: StrengthConfig,
    /// Progression summary settings
    pub progression: ProgressionConfig,
    /// Cycle model settings
    pub cycle: CycleModelConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strength.min_effective_reps == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "strength.min_effective_reps must be at least 1",
            ));
        }
        if self.strength.min_effective_reps > self.strength.max_effective_reps {
            return Err(ConfigError::InvalidRange(
                "strength.min_effective_reps must be <= strength.max_effective_reps",
            ));
        }
        // Brzycki divides by (37 - reps)
        if self.strength.max_effective_reps >= 37 {
            return Err(ConfigError::ValueOutOfRange(
                "strength.max_effective_reps must be below 37",
            ));
        }
        if self.progression.min_points_for_trend < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "progression.min_points_for_trend must be at least 2",
            ));
        }
        if self.cycle.default_cycle_length_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "cycle.default_cycle_length_days must be at least 1",
            ));
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "TRAINLOG_STRENGTH_MIN_REPS",
            &mut self.strength.min_effective_reps,
        )?;
        Self::apply_env_var(
            "TRAINLOG_STRENGTH_MAX_REPS",
            &mut self.strength.max_effective_reps,
        )?;
        Self::apply_env_var(
            "TRAINLOG_PROGRESSION_MIN_TREND_POINTS",
            &mut self.progression.min_points_for_trend,
        )?;
        Self::apply_env_var(
            "TRAINLOG_CYCLE_DEFAULT_LENGTH_DAYS",
            &mut self.cycle.default_cycle_length_days,
        )?;
        Ok(self)
    }
}
