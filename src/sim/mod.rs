//! Stochastic trial simulator collaborator.
//!
//! Generates an illustrative learning curve for an active component set: a
//! sequence of discrete trials where success probability follows a logistic
//! function of the current skill level plus bounded noise, and successful
//! trials advance skill by a learning-rate term derived from the causal
//! model's value at the active coalition.
//!
//! Output is presentation data - trial records and trajectory summaries.
//! The attribution engine never consumes it, and the simulator only reads
//! the model through its [`ValueFunction`](crate::ValueFunction) face.

mod config;
mod logger;
mod run;

pub use config::{ConfigError, SimulationConfig};
pub use logger::{SimulationLogger, Verbosity};
pub use run::{run_simulation, run_simulation_averaged, AveragedSimulation, SimulationResult, Trial};
