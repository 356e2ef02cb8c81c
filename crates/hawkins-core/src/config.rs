//! Startup configuration: the messages spelled on the alphabet wall and the
//! user-tunable timing and particle parameters.
//!
//! The page may embed a JSON override; missing fields keep their defaults.
//! Configuration is read once at startup and never changes afterwards.

use crate::constants::{PARTICLE_MAX_COUNT, PARTICLE_MAX_DURATION_S};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
    #[error("particle duration range {min}..{max}s is invalid")]
    DurationRange { min: f64, max: f64 },
    #[error("{field} must be at most {max}")]
    TooLarge { field: &'static str, max: f64 },
    #[error("message {0} is empty")]
    EmptyMessage(usize),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timing {
    pub letter_delay_ms: u32,
    pub message_pause_ms: u32,
    pub particle_spawn_rate_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            letter_delay_ms: 350,
            message_pause_ms: 1200,
            particle_spawn_rate_ms: 500,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleConfig {
    pub count: u32,
    pub min_duration_s: f64,
    pub max_duration_s: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 20,
            min_duration_s: 12.0,
            max_duration_s: 20.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub messages: Vec<String>,
    pub timing: Timing,
    pub particles: ParticleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages: vec!["RUN".into(), "HIDE".into(), "IT IS HERE".into()],
            timing: Timing::default(),
            particles: ParticleConfig::default(),
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON override and validate the result.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.letter_delay_ms == 0 {
            return Err(ConfigError::Zero("timing.letterDelayMs"));
        }
        if self.timing.particle_spawn_rate_ms == 0 {
            return Err(ConfigError::Zero("timing.particleSpawnRateMs"));
        }
        let ParticleConfig {
            min_duration_s: min,
            max_duration_s: max,
            ..
        } = self.particles;
        if !(min > 0.0 && max >= min && max.is_finite()) {
            return Err(ConfigError::DurationRange { min, max });
        }
        if max > PARTICLE_MAX_DURATION_S {
            return Err(ConfigError::TooLarge {
                field: "particles.maxDurationS",
                max: PARTICLE_MAX_DURATION_S,
            });
        }
        if self.particles.count > PARTICLE_MAX_COUNT {
            return Err(ConfigError::TooLarge {
                field: "particles.count",
                max: f64::from(PARTICLE_MAX_COUNT),
            });
        }
        if let Some(i) = self.messages.iter().position(|m| m.trim().is_empty()) {
            return Err(ConfigError::EmptyMessage(i));
        }
        Ok(())
    }
}
