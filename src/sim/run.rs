//! Simulation runs: single trial sequences and averaged trajectories.

use ndarray::{Array2, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::game::{Coalition, ValueFunction};
use crate::utils::run_with_threads;

use super::config::{ConfigError, SimulationConfig};
use super::logger::{SimulationLogger, Verbosity};

// =============================================================================
// Trial Records
// =============================================================================

/// One discrete trial of a simulated run.
///
/// Records the state going into the trial; a successful trial advances the
/// skill level afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    /// Zero-based trial index.
    pub trial: u32,
    /// Skill level (log-odds) at the start of the trial.
    pub skill: f64,
    /// Noisy success probability the outcome was drawn from.
    pub success_probability: f64,
    /// Whether the trial succeeded.
    pub success: bool,
    /// Components active during the trial.
    pub coalition: Coalition,
}

/// Outcome of one simulated run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Every trial, in order.
    pub trials: Vec<Trial>,
    /// Noise-free success probability at the starting skill.
    pub initial_value: f64,
    /// Noise-free success probability at the final skill.
    pub final_value: f64,
    /// `final_value - initial_value`.
    pub gain: f64,
}

/// Averaged trajectory over several independent runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AveragedSimulation {
    /// Mean success probability per trial index across runs.
    pub mean_curve: Vec<f64>,
    /// Mean of the per-run initial values.
    pub initial_value: f64,
    /// Mean of the per-run final values.
    pub final_value: f64,
    /// `final_value - initial_value`.
    pub gain: f64,
    /// Number of runs averaged.
    pub n_runs: u32,
}

#[inline]
fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

// =============================================================================
// Single Run
// =============================================================================

/// Simulate one learning trajectory for the given active coalition.
///
/// Per trial: draw bounded uniform noise, pass `skill + noise` through the
/// logistic function, draw success, and on success advance skill by
/// `learning_rate * v(active)` where `v` is the model's value at the active
/// coalition. Deterministic for a fixed seed.
pub fn run_simulation<V>(
    config: &SimulationConfig,
    model: &V,
    active: Coalition,
) -> SimulationResult
where
    V: ValueFunction + ?Sized,
{
    let logger = SimulationLogger::new(config.verbosity);
    let mut rng = StdRng::seed_from_u64(config.seed);

    // The learning-rate term is fixed for the whole run: the active set does
    // not change mid-run.
    let advance = config.learning_rate * model.value(active);

    let initial_value = logistic(config.initial_skill);
    let mut skill = config.initial_skill;
    let mut trials = Vec::with_capacity(config.n_trials as usize);

    for trial in 0..config.n_trials {
        let noise = if config.noise > 0.0 {
            (rng.gen::<f64>() * 2.0 - 1.0) * config.noise
        } else {
            0.0
        };
        let success_probability = logistic(skill + noise);
        let success = rng.gen::<f64>() < success_probability;

        trials.push(Trial { trial, skill, success_probability, success, coalition: active });
        logger.log_trial(
            trial as usize,
            &[("skill", skill), ("p", success_probability), ("hit", f64::from(u8::from(success)))],
        );

        if success {
            skill += advance;
        }
    }

    let final_value = logistic(skill);
    let gain = final_value - initial_value;
    logger.info(&format!(
        "run complete: {} trials, value {:.4} -> {:.4} (gain {:+.4})",
        config.n_trials, initial_value, final_value, gain
    ));

    SimulationResult { trials, initial_value, final_value, gain }
}

// =============================================================================
// Averaged Runs
// =============================================================================

/// Average `n_runs` independent trajectories to smooth the learning curve.
///
/// Each run derives its seed from `config.seed` plus the run index, so the
/// whole ensemble is reproducible. Runs fan out across threads when
/// `config.n_threads` allows it; the default is sequential.
///
/// # Errors
/// Returns [`ConfigError::InvalidRuns`] if `n_runs == 0`.
pub fn run_simulation_averaged<V>(
    config: &SimulationConfig,
    model: &V,
    active: Coalition,
    n_runs: u32,
) -> Result<AveragedSimulation, ConfigError>
where
    V: ValueFunction + Sync + ?Sized,
{
    if n_runs == 0 {
        return Err(ConfigError::InvalidRuns);
    }

    let logger = SimulationLogger::new(config.verbosity);

    // Per-run logging off; the ensemble reports once at the end.
    let mut run_config = config.clone();
    run_config.verbosity = Verbosity::Silent;

    let runs: Vec<SimulationResult> = run_with_threads(config.n_threads, |parallelism| {
        parallelism.maybe_par_map(0..n_runs, |run| {
            let mut config = run_config.clone();
            config.seed = run_config.seed.wrapping_add(u64::from(run));
            run_simulation(&config, model, active)
        })
    });

    let n_trials = config.n_trials as usize;
    let mut curves = Array2::<f64>::zeros((n_runs as usize, n_trials));
    for (r, run) in runs.iter().enumerate() {
        for (t, trial) in run.trials.iter().enumerate() {
            curves[[r, t]] = trial.success_probability;
        }
    }
    let mean_curve = curves.mean_axis(Axis(0)).expect("at least one run").to_vec();

    let initial_value = runs.iter().map(|r| r.initial_value).sum::<f64>() / f64::from(n_runs);
    let final_value = runs.iter().map(|r| r.final_value).sum::<f64>() / f64::from(n_runs);
    let gain = final_value - initial_value;

    logger.info(&format!(
        "averaged {} runs: value {:.4} -> {:.4} (gain {:+.4})",
        n_runs, initial_value, final_value, gain
    ));

    Ok(AveragedSimulation { mean_curve, initial_value, final_value, gain, n_runs })
}
