//! Causal model collaborator.
//!
//! Builds the value function the engine consumes: a calibrated base effect
//! per component, plus an interaction term for every predefined component
//! pair that is jointly present in a coalition. The engine treats the model
//! as an opaque [`ValueFunction`]; nothing here leaks into the attribution
//! math.
//!
//! # Example
//!
//! ```
//! use shapcredit::{compute_shapley_values, CausalModel, ComponentId, InteractionTerm};
//!
//! let a = ComponentId::new(0);
//! let b = ComponentId::new(1);
//!
//! let model = CausalModel::new(
//!     vec![(a, 0.15), (b, 0.20)],
//!     vec![InteractionTerm::new(a, b, 0.10)],
//! ).unwrap();
//!
//! let result = compute_shapley_values(&model.components(), &model);
//! assert!((result.total_value() - 0.45).abs() < 1e-12);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{Coalition, ComponentId, ValueFunction};

// =============================================================================
// ModelError
// =============================================================================

/// Errors raised while assembling a [`CausalModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The same component appears twice in the base effects.
    DuplicateComponent(ComponentId),
    /// An interaction references a component without a base effect.
    UnknownComponent(ComponentId),
    /// An interaction pairs a component with itself.
    SelfInteraction(ComponentId),
    /// The same unordered pair carries two interaction terms.
    DuplicatePair(ComponentId, ComponentId),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateComponent(c) => {
                write!(f, "component {} has more than one base effect", c.index())
            }
            Self::UnknownComponent(c) => {
                write!(f, "interaction references component {} which has no base effect", c.index())
            }
            Self::SelfInteraction(c) => {
                write!(f, "component {} cannot interact with itself", c.index())
            }
            Self::DuplicatePair(a, b) => {
                write!(f, "pair ({}, {}) has more than one interaction term", a.index(), b.index())
            }
        }
    }
}

impl std::error::Error for ModelError {}

// =============================================================================
// InteractionTerm
// =============================================================================

/// One pairwise interaction: `effect` is added to the value of every
/// coalition containing both `a` and `b`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractionTerm {
    pub a: ComponentId,
    pub b: ComponentId,
    pub effect: f64,
}

impl InteractionTerm {
    pub fn new(a: ComponentId, b: ComponentId, effect: f64) -> Self {
        Self { a, b, effect }
    }

    /// Both members as a coalition.
    fn members(&self) -> Coalition {
        Coalition::singleton(self.a).with(self.b)
    }
}

// =============================================================================
// CausalModel
// =============================================================================

/// Additive causal model with pairwise interaction terms.
///
/// `v(S)` = sum of the base effects of the members of `S`, plus the effect of
/// every interaction whose pair lies entirely inside `S`. `v(∅) = 0` by
/// construction, and the mapping is deterministic and total over every
/// coalition - exactly what the engine requires of a [`ValueFunction`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CausalModel {
    base_effects: Vec<(ComponentId, f64)>,
    interactions: Vec<InteractionTerm>,
}

impl CausalModel {
    /// Assemble a model from calibrated base effects and interaction terms.
    ///
    /// # Errors
    /// Returns [`ModelError`] if a component carries two base effects, an
    /// interaction references a component with no base effect or pairs a
    /// component with itself, or an unordered pair appears twice.
    pub fn new(
        base_effects: Vec<(ComponentId, f64)>,
        interactions: Vec<InteractionTerm>,
    ) -> Result<Self, ModelError> {
        let mut universe = Coalition::empty();
        for &(component, _) in &base_effects {
            if universe.contains(component) {
                return Err(ModelError::DuplicateComponent(component));
            }
            universe = universe.with(component);
        }

        let mut seen_pairs: Vec<Coalition> = Vec::with_capacity(interactions.len());
        for term in &interactions {
            if term.a == term.b {
                return Err(ModelError::SelfInteraction(term.a));
            }
            for component in [term.a, term.b] {
                if !universe.contains(component) {
                    return Err(ModelError::UnknownComponent(component));
                }
            }
            let pair = term.members();
            if seen_pairs.contains(&pair) {
                return Err(ModelError::DuplicatePair(term.a, term.b));
            }
            seen_pairs.push(pair);
        }

        Ok(Self { base_effects, interactions })
    }

    /// Model with base effects only.
    pub fn additive(base_effects: Vec<(ComponentId, f64)>) -> Result<Self, ModelError> {
        Self::new(base_effects, Vec::new())
    }

    /// Components with a base effect, in declaration order.
    pub fn components(&self) -> Vec<ComponentId> {
        self.base_effects.iter().map(|&(c, _)| c).collect()
    }

    /// Base effect of `component`, if it is part of the model.
    pub fn base_effect(&self, component: ComponentId) -> Option<f64> {
        self.base_effects
            .iter()
            .find(|&&(c, _)| c == component)
            .map(|&(_, effect)| effect)
    }

    /// The interaction terms.
    pub fn interactions(&self) -> &[InteractionTerm] {
        &self.interactions
    }

    /// The coalition of every modeled component.
    pub fn grand_coalition(&self) -> Coalition {
        self.base_effects.iter().map(|&(c, _)| c).collect()
    }
}

impl ValueFunction for CausalModel {
    fn value(&self, coalition: Coalition) -> f64 {
        let mut value = 0.0;
        for &(component, effect) in &self.base_effects {
            if coalition.contains(component) {
                value += effect;
            }
        }
        for term in &self.interactions {
            if coalition.contains(term.a) && coalition.contains(term.b) {
                value += term.effect;
            }
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> (ComponentId, ComponentId, ComponentId) {
        (ComponentId::new(0), ComponentId::new(1), ComponentId::new(2))
    }

    #[test]
    fn test_value_sums_members_and_inner_pairs() {
        let (a, b, c) = abc();
        let model = CausalModel::new(
            vec![(a, 0.1), (b, 0.2), (c, 0.4)],
            vec![InteractionTerm::new(a, b, 0.05)],
        )
        .unwrap();

        assert_eq!(model.value(Coalition::empty()), 0.0);
        assert!((model.value(Coalition::singleton(a)) - 0.1).abs() < 1e-15);
        // a + c: pair (a, b) is not fully inside
        assert!((model.value(Coalition::singleton(a).with(c)) - 0.5).abs() < 1e-15);
        // a + b: base effects plus the interaction
        assert!((model.value(Coalition::singleton(a).with(b)) - 0.35).abs() < 1e-15);
        assert!((model.value(model.grand_coalition()) - 0.75).abs() < 1e-15);
    }

    #[test]
    fn test_accessors() {
        let (a, b, _) = abc();
        let model = CausalModel::new(
            vec![(a, 0.15), (b, 0.20)],
            vec![InteractionTerm::new(a, b, 0.10)],
        )
        .unwrap();

        assert_eq!(model.components(), vec![a, b]);
        assert_eq!(model.base_effect(a), Some(0.15));
        assert_eq!(model.base_effect(ComponentId::new(5)), None);
        assert_eq!(model.interactions().len(), 1);
        assert_eq!(model.grand_coalition(), Coalition::from_components(&[a, b]));
    }

    #[test]
    fn test_duplicate_component_rejected() {
        let (a, _, _) = abc();
        let result = CausalModel::additive(vec![(a, 0.1), (a, 0.2)]);
        assert_eq!(result.unwrap_err(), ModelError::DuplicateComponent(a));
    }

    #[test]
    fn test_unknown_component_rejected() {
        let (a, b, c) = abc();
        let result = CausalModel::new(
            vec![(a, 0.1), (b, 0.2)],
            vec![InteractionTerm::new(a, c, 0.05)],
        );
        assert_eq!(result.unwrap_err(), ModelError::UnknownComponent(c));
    }

    #[test]
    fn test_self_interaction_rejected() {
        let (a, b, _) = abc();
        let result = CausalModel::new(
            vec![(a, 0.1), (b, 0.2)],
            vec![InteractionTerm::new(a, a, 0.05)],
        );
        assert_eq!(result.unwrap_err(), ModelError::SelfInteraction(a));
    }

    #[test]
    fn test_duplicate_pair_rejected_regardless_of_order() {
        let (a, b, _) = abc();
        let result = CausalModel::new(
            vec![(a, 0.1), (b, 0.2)],
            vec![InteractionTerm::new(a, b, 0.05), InteractionTerm::new(b, a, 0.01)],
        );
        assert_eq!(result.unwrap_err(), ModelError::DuplicatePair(b, a));
    }

    #[test]
    fn test_error_messages() {
        let (a, b, _) = abc();
        assert_eq!(
            ModelError::UnknownComponent(b).to_string(),
            "interaction references component 1 which has no base effect"
        );
        assert_eq!(
            ModelError::SelfInteraction(a).to_string(),
            "component 0 cannot interact with itself"
        );
    }
}
