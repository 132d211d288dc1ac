//! The Shapley value engine.
//!
//! For each component, the engine averages that component's marginal
//! contribution over every coalition of the remaining components, weighted
//! by how likely the coalition is to precede it in a uniformly random
//! ordering. The enumeration is exhaustive: exact results, exponential cost,
//! valid only for the small component universes this crate targets. Do not
//! replace it with sampling - exactness is the point.
//!
//! # Example
//!
//! ```
//! use shapcredit::{compute_shapley_values, Coalition, ComponentId};
//!
//! let a = ComponentId::new(0);
//! let b = ComponentId::new(1);
//!
//! // v({A}) = 0.15, v({B}) = 0.20, v({A,B}) = 0.45
//! let game = |s: Coalition| match (s.contains(a), s.contains(b)) {
//!     (true, true) => 0.45,
//!     (true, false) => 0.15,
//!     (false, true) => 0.20,
//!     (false, false) => 0.0,
//! };
//!
//! let result = compute_shapley_values(&[a, b], &game);
//! assert!((result.get(a) - 0.20).abs() < 1e-12);
//! assert!((result.get(b) - 0.25).abs() < 1e-12);
//! assert!(result.verify_efficiency(shapcredit::EFFICIENCY_TOLERANCE));
//! ```

mod engine;
mod values;
mod weights;

pub use engine::{compute_shapley_values, shapley_value};
pub use values::{ShapleyValues, EFFICIENCY_TOLERANCE};
pub use weights::{factorial, shapley_weight, MAX_FACTORIAL};
