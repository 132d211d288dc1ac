//! Shapley attribution container.
//!
//! Stores the per-component credit for one computed game together with the
//! grand-coalition total and the interaction diagnostic, and carries the
//! efficiency self-check.

use serde::{Deserialize, Serialize};

use crate::game::ComponentId;

/// Absolute tolerance of the efficiency self-check.
///
/// Any discrepancy beyond this is a correctness bug to surface in tests, not
/// accumulated floating-point noise to tolerate.
pub const EFFICIENCY_TOLERANCE: f64 = 1e-10;

/// Per-component Shapley attribution for one computed game.
///
/// Immutable once built. Components that were not part of the game report a
/// value of `0.0` - they were excluded from the game entirely, not merely
/// left out of some coalition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapleyValues {
    /// Active components, in computation order.
    components: Vec<ComponentId>,
    /// Attributed value per active component, aligned with `components`.
    values: Vec<f64>,
    /// Value of the grand coalition.
    total_value: f64,
    /// `total_value` minus the sum of singleton values.
    interaction_value: f64,
}

impl ShapleyValues {
    pub(crate) fn new(
        components: Vec<ComponentId>,
        values: Vec<f64>,
        total_value: f64,
        interaction_value: f64,
    ) -> Self {
        debug_assert_eq!(components.len(), values.len());
        Self { components, values, total_value, interaction_value }
    }

    /// The components the game was played over, in computation order.
    pub fn components(&self) -> &[ComponentId] {
        &self.components
    }

    /// Attributed value of `component`, or `0.0` if it was not in the game.
    pub fn get(&self, component: ComponentId) -> f64 {
        self.components
            .iter()
            .position(|&c| c == component)
            .map_or(0.0, |i| self.values[i])
    }

    /// Iterate `(component, attributed value)` pairs in computation order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, f64)> + '_ {
        self.components.iter().copied().zip(self.values.iter().copied())
    }

    /// Value of the grand coalition (all active components together).
    #[inline]
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// Portion of the total not explained by isolated single-component
    /// effects: `total_value - Σ v({i})`.
    ///
    /// A diagnostic, looser than the Shapley decomposition itself; it is not
    /// part of the efficiency axiom.
    #[inline]
    pub fn interaction_value(&self) -> f64 {
        self.interaction_value
    }

    /// Sum of all attributed values.
    pub fn value_sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Verify the efficiency axiom: attributed values must sum to the grand
    /// coalition's value within `tolerance`.
    ///
    /// Returns `true`/`false`; never panics. Run this against every computed
    /// result in a test suite - it is the engine's correctness self-check,
    /// not an optional extra.
    pub fn verify_efficiency(&self, tolerance: f64) -> bool {
        (self.value_sum() - self.total_value).abs() <= tolerance
    }
}
