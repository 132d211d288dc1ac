//! Exact per-component computation and full-result aggregation.

use crate::game::{Coalition, ComponentId, Powerset, ValueFunction};

use super::values::ShapleyValues;
use super::weights::shapley_weight;

/// Exact Shapley value of `component` in the game over `components`.
///
/// Enumerates every subset `S` of the other components and accumulates
/// `weight(|S|, n) * (v(S ∪ {component}) - v(S))`. The value function is
/// evaluated twice per subset, `2^(n-1)` subsets in total; evaluations are
/// not cached, so `v` should be cheap.
///
/// `component` must be one of `components`.
pub fn shapley_value<V>(component: ComponentId, components: &[ComponentId], value_fn: &V) -> f64
where
    V: ValueFunction + ?Sized,
{
    let others: Vec<ComponentId> =
        components.iter().copied().filter(|&c| c != component).collect();
    debug_assert_eq!(
        others.len() + 1,
        components.len(),
        "component must appear in the game exactly once"
    );

    let n = components.len();
    let mut total = 0.0;
    for subset in Powerset::new(&others) {
        let weight = shapley_weight(subset.len(), n);
        let marginal = value_fn.value(subset.with(component)) - value_fn.value(subset);
        total += weight * marginal;
    }
    total
}

/// Full Shapley attribution for the game over `components`.
///
/// Visits every active component exactly once and computes, alongside the
/// per-component values:
///
/// - `total_value` - the value of the grand coalition,
/// - `interaction_value` - `total_value` minus the sum of singleton values,
///   the portion of the total that isolated single-component effects do not
///   explain.
///
/// An empty `components` slice is a degenerate but defined game: the result
/// carries no per-component values and both totals equal `v(∅)` (zero for
/// any value function honoring the `v(∅) = 0` convention). No weight
/// arithmetic runs in that case.
pub fn compute_shapley_values<V>(components: &[ComponentId], value_fn: &V) -> ShapleyValues
where
    V: ValueFunction + ?Sized,
{
    let grand = Coalition::from_components(components);
    let total_value = value_fn.value(grand);

    let singleton_sum: f64 = components
        .iter()
        .map(|&c| value_fn.value(Coalition::singleton(c)))
        .sum();

    let values: Vec<f64> = components
        .iter()
        .map(|&c| shapley_value(c, components, value_fn))
        .collect();

    ShapleyValues::new(components.to_vec(), values, total_value, total_value - singleton_sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapley::EFFICIENCY_TOLERANCE;

    fn ids(indices: &[u8]) -> Vec<ComponentId> {
        indices.iter().map(|&i| ComponentId::new(i)).collect()
    }

    /// v(S) = sum of fixed per-component effects; no interactions.
    fn additive_game(effects: Vec<(ComponentId, f64)>) -> impl Fn(Coalition) -> f64 {
        move |coalition: Coalition| {
            effects
                .iter()
                .filter(|(c, _)| coalition.contains(*c))
                .map(|(_, e)| e)
                .sum()
        }
    }

    #[test]
    fn test_singleton_game_takes_full_credit() {
        let a = ComponentId::new(0);
        let game = additive_game(vec![(a, 0.3)]);

        let value = shapley_value(a, &[a], &game);
        assert!((value - 0.3).abs() < 1e-15);
    }

    #[test]
    fn test_additive_game_recovers_base_effects() {
        let components = ids(&[0, 1, 2]);
        let game = additive_game(vec![
            (components[0], 0.1),
            (components[1], 0.2),
            (components[2], 0.4),
        ]);

        let result = compute_shapley_values(&components, &game);
        assert!((result.get(components[0]) - 0.1).abs() < 1e-12);
        assert!((result.get(components[1]) - 0.2).abs() < 1e-12);
        assert!((result.get(components[2]) - 0.4).abs() < 1e-12);
        assert!(result.interaction_value().abs() < 1e-12);
        assert!(result.verify_efficiency(EFFICIENCY_TOLERANCE));
    }

    #[test]
    fn test_two_component_reference_game() {
        let a = ComponentId::new(0);
        let b = ComponentId::new(1);
        let game = |s: Coalition| match (s.contains(a), s.contains(b)) {
            (true, true) => 0.45,
            (true, false) => 0.15,
            (false, true) => 0.20,
            (false, false) => 0.0,
        };

        let result = compute_shapley_values(&[a, b], &game);

        // Shapley(A) = 1/2 * 0.15 + 1/2 * (0.45 - 0.20) = 0.20
        // Shapley(B) = 1/2 * 0.20 + 1/2 * (0.45 - 0.15) = 0.25
        assert!((result.get(a) - 0.20).abs() < 1e-12);
        assert!((result.get(b) - 0.25).abs() < 1e-12);
        assert!((result.total_value() - 0.45).abs() < 1e-12);
        assert!((result.interaction_value() - 0.10).abs() < 1e-12);
        assert!(result.verify_efficiency(EFFICIENCY_TOLERANCE));
    }

    #[test]
    fn test_null_player_gets_exactly_zero() {
        let components = ids(&[0, 1]);
        let a = components[0];
        // Only component 0 ever contributes
        let game = move |s: Coalition| if s.contains(a) { 1.0 } else { 0.0 };

        let result = compute_shapley_values(&components, &game);
        assert_eq!(result.get(components[1]), 0.0);
        assert!((result.get(a) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_empty_game() {
        let game = |_: Coalition| 0.0;
        let result = compute_shapley_values(&[], &game);

        assert!(result.components().is_empty());
        assert_eq!(result.total_value(), 0.0);
        assert_eq!(result.interaction_value(), 0.0);
        assert!(result.verify_efficiency(EFFICIENCY_TOLERANCE));
    }

    #[test]
    fn test_empty_game_reports_empty_value() {
        // A value function that breaks the v(∅) = 0 convention: the empty
        // game reports whatever v(∅) is, as documented.
        let game = |_: Coalition| 0.7;
        let result = compute_shapley_values(&[], &game);
        assert_eq!(result.total_value(), 0.7);
    }

    #[test]
    fn test_dyn_value_function() {
        let a = ComponentId::new(0);
        let game: Box<dyn ValueFunction> =
            Box::new(move |s: Coalition| if s.contains(a) { 0.5 } else { 0.0 });

        let result = compute_shapley_values(&[a], &*game);
        assert!((result.get(a) - 0.5).abs() < 1e-15);
    }
}
