//! The value-function contract.

use super::Coalition;

/// Characteristic function of the game: maps a coalition to the total effect
/// it achieves.
///
/// A capability, not a hierarchy - anything that can answer "what is this
/// coalition worth?" qualifies, including plain closures. The engine never
/// inspects an implementation; it only requires that the mapping is:
///
/// - **deterministic** - the same coalition always yields the same value,
/// - **total** - defined for every coalition of the active universe,
///   including the empty one.
///
/// By convention `value(Coalition::empty()) == 0.0`. The engine does not
/// enforce this; implementations that violate it shift every marginal
/// contribution through the empty set and get attributions that no longer
/// start from zero.
pub trait ValueFunction {
    /// The value achieved when exactly the members of `coalition` are present.
    fn value(&self, coalition: Coalition) -> f64;
}

impl<F> ValueFunction for F
where
    F: Fn(Coalition) -> f64,
{
    #[inline]
    fn value(&self, coalition: Coalition) -> f64 {
        self(coalition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ComponentId;

    #[test]
    fn test_closure_is_a_value_function() {
        let size_game = |coalition: Coalition| coalition.len() as f64;
        let a = ComponentId::new(0);
        let b = ComponentId::new(1);

        assert_eq!(size_game.value(Coalition::empty()), 0.0);
        assert_eq!(size_game.value(Coalition::singleton(a).with(b)), 2.0);
    }

    #[test]
    fn test_value_function_object_safety() {
        let game = |coalition: Coalition| coalition.len() as f64 * 0.5;
        let boxed: Box<dyn ValueFunction> = Box::new(game);
        assert_eq!(boxed.value(Coalition::singleton(ComponentId::new(2))), 0.5);
    }
}
