//! Deterministic fixtures shared by unit, integration, and property tests.
//!
//! Everything here is a plain calibrated model; nothing is random. The two
//! reference scenarios have Shapley splits known in closed form, so tests
//! can assert exact numbers.

use crate::game::ComponentId;
use crate::model::{CausalModel, InteractionTerm};

/// The first `k` component ids.
pub fn components(k: u8) -> Vec<ComponentId> {
    (0..k).map(ComponentId::new).collect()
}

/// Interaction-free model over the given effects.
pub fn additive_model(effects: &[f64]) -> CausalModel {
    let base_effects = effects
        .iter()
        .enumerate()
        .map(|(i, &effect)| (ComponentId::new(i as u8), effect))
        .collect();
    CausalModel::additive(base_effects).expect("distinct ids by construction")
}

/// The two-component reference scenario.
///
/// Bases 0.15 and 0.20 with a 0.10 pairwise term, so
/// `v({A}) = 0.15`, `v({B}) = 0.20`, `v({A, B}) = 0.45`, and the exact
/// Shapley split is 0.20 / 0.25 with interaction value 0.10.
pub fn paired_intervention_model() -> CausalModel {
    let a = ComponentId::new(0);
    let b = ComponentId::new(1);
    CausalModel::new(vec![(a, 0.15), (b, 0.20)], vec![InteractionTerm::new(a, b, 0.10)])
        .expect("valid by construction")
}

/// The three-component reference scenario: a chore-learning intervention
/// with a robot coach (component 0), a task ladder (component 1), and parent
/// involvement (component 2).
///
/// Bases 0.20 / 0.23 / 0.15 with pairwise terms 0.08 (robot, tasks),
/// 0.04 (robot, parent), and 0.02 (tasks, parent). For this functional form
/// each pairwise term splits evenly between its two members, so the exact
/// Shapley split is 0.26 / 0.28 / 0.18, the grand coalition is worth 0.72,
/// and the interaction value is 0.14.
pub fn chore_intervention_model() -> CausalModel {
    let robot = ComponentId::new(0);
    let tasks = ComponentId::new(1);
    let parent = ComponentId::new(2);
    CausalModel::new(
        vec![(robot, 0.20), (tasks, 0.23), (parent, 0.15)],
        vec![
            InteractionTerm::new(robot, tasks, 0.08),
            InteractionTerm::new(robot, parent, 0.04),
            InteractionTerm::new(tasks, parent, 0.02),
        ],
    )
    .expect("valid by construction")
}
