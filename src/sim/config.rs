//! Simulation configuration with builder pattern.
//!
//! [`SimulationConfig`] uses the `bon` crate for builder generation with
//! validation at build time; an invalid combination never reaches the run
//! loop.
//!
//! # Example
//!
//! ```
//! use shapcredit::sim::SimulationConfig;
//!
//! // All defaults
//! let config = SimulationConfig::builder().build().unwrap();
//!
//! // Longer, quieter learning
//! let config = SimulationConfig::builder()
//!     .n_trials(200)
//!     .learning_rate(0.3)
//!     .noise(0.5)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! ```

use bon::Builder;

use super::logger::Verbosity;

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Number of trials must be at least 1.
    InvalidTrials,
    /// Learning rate must be positive and finite.
    InvalidLearningRate(f64),
    /// Noise amplitude must be non-negative and finite.
    InvalidNoise(f64),
    /// Initial skill must be finite.
    InvalidSkill(f64),
    /// Number of averaged runs must be at least 1.
    InvalidRuns,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTrials => write!(f, "n_trials must be at least 1"),
            Self::InvalidLearningRate(v) => {
                write!(f, "learning_rate must be positive and finite, got {}", v)
            }
            Self::InvalidNoise(v) => {
                write!(f, "noise must be non-negative and finite, got {}", v)
            }
            Self::InvalidSkill(v) => write!(f, "initial_skill must be finite, got {}", v),
            Self::InvalidRuns => write!(f, "n_runs must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// SimulationConfig
// =============================================================================

/// Configuration for a stochastic learning-curve simulation.
///
/// Skill is expressed in log-odds: the default `initial_skill` of `-2.0`
/// corresponds to roughly a 12% starting success probability, leaving room
/// for a visible learning curve.
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct SimulationConfig {
    /// Number of trials per run. Default: 50.
    #[builder(default = 50)]
    pub n_trials: u32,

    /// Skill advance per successful trial, scaled by the active coalition's
    /// value. Default: 0.6.
    #[builder(default = 0.6)]
    pub learning_rate: f64,

    /// Amplitude of the bounded uniform noise added to the logistic input.
    /// Default: 0.75.
    #[builder(default = 0.75)]
    pub noise: f64,

    /// Starting skill in log-odds. Default: -2.0.
    #[builder(default = -2.0)]
    pub initial_skill: f64,

    /// Random seed. Averaged runs derive one seed per run from this.
    /// Default: 42.
    #[builder(default = 42)]
    pub seed: u64,

    /// Number of threads for averaged runs. `1` = sequential (default),
    /// `0` = auto.
    #[builder(default = 1)]
    pub n_threads: usize,

    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

/// Custom finishing function that validates the config.
impl<S: simulation_config_builder::IsComplete> SimulationConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is invalid:
    /// - `n_trials == 0`
    /// - `learning_rate <= 0` or non-finite
    /// - `noise < 0` or non-finite
    /// - non-finite `initial_skill`
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl SimulationConfig {
    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.n_trials == 0 {
            return Err(ConfigError::InvalidTrials);
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ConfigError::InvalidLearningRate(self.learning_rate));
        }
        if !(self.noise.is_finite() && self.noise >= 0.0) {
            return Err(ConfigError::InvalidNoise(self.noise));
        }
        if !self.initial_skill.is_finite() {
            return Err(ConfigError::InvalidSkill(self.initial_skill));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::builder().build().expect("default config is valid")
    }
}

// =============================================================================
// Tests
// =============================================================================
