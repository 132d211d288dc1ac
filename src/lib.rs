//! shapcredit: exact Shapley-value attribution for multi-component interventions.
//!
//! Decomposes the measured effect of an intervention made of several togglable
//! components into fair per-component credit, interaction effects included.
//! The engine enumerates every coalition of components and averages weighted
//! marginal contributions. Results are exact rather than sampled, at a cost
//! exponential in the number of components; the intended universe is small
//! (up to roughly six components).
//!
//! # Key Types
//!
//! - [`ComponentId`] / [`Coalition`] - The players of the game and their subsets
//! - [`ValueFunction`] - Coalition → value capability supplied by a model
//! - [`ShapleyValues`] - Per-component credit with efficiency verification
//! - [`CausalModel`] - Additive value function with pairwise interaction terms
//! - [`SimulationConfig`] - Stochastic learning-curve simulation
//!
//! # Computing an Attribution
//!
//! Build a [`CausalModel`] (or any [`ValueFunction`]), then call
//! [`compute_shapley_values`] with the active components. See the [`shapley`]
//! module for details.
//!
//! # Simulating a Learning Curve
//!
//! Use `SimulationConfig::builder()` to configure, then [`run_simulation`].
//! Simulation output is presentation data; the engine never consumes it.

// Re-export approx traits for users who want to compare attributions
pub use approx;

pub mod game;
pub mod model;
pub mod shapley;
pub mod sim;
pub mod testing;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Game primitives
pub use game::{Coalition, ComponentId, Powerset, ValueFunction};

// The engine and its result type
pub use shapley::{compute_shapley_values, shapley_value, ShapleyValues, EFFICIENCY_TOLERANCE};

// Causal model collaborator
pub use model::{CausalModel, InteractionTerm, ModelError};

// Simulator collaborator
pub use sim::{
    run_simulation, run_simulation_averaged, AveragedSimulation, ConfigError, SimulationConfig,
    SimulationResult, Trial, Verbosity,
};

// Shared utilities
pub use utils::{run_with_threads, Parallelism};
