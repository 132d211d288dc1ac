//! Coalition weights for the Shapley formula.
//!
//! Factorials come from a process-wide table that is populated once and then
//! only read. Initialization is idempotent, so a race on first use is benign;
//! `OnceLock` makes it impossible anyway.

use std::sync::OnceLock;

/// Largest argument served by [`factorial`].
///
/// Enumeration is already infeasible long before 20 components, and past
/// this point `f64` can no longer represent factorials exactly.
pub const MAX_FACTORIAL: usize = 20;

static FACTORIALS: OnceLock<[f64; MAX_FACTORIAL + 1]> = OnceLock::new();

/// `n!` as an `f64`, served from the shared table.
///
/// # Panics
/// Panics if `n > 20`.
#[inline]
pub fn factorial(n: usize) -> f64 {
    assert!(
        n <= MAX_FACTORIAL,
        "factorial({}) is outside the supported range 0..={}",
        n,
        MAX_FACTORIAL
    );
    let table = FACTORIALS.get_or_init(|| {
        let mut table = [1.0f64; MAX_FACTORIAL + 1];
        for i in 1..=MAX_FACTORIAL {
            table[i] = table[i - 1] * i as f64;
        }
        table
    });
    table[n]
}

/// Shapley weight of a coalition of `subset_len` members in a game of
/// `n_components` players: `s! * (n - s - 1)! / n!`.
///
/// This is the probability that, under a uniformly random ordering of all
/// players, exactly the `s` coalition members precede the player under
/// evaluation and everyone else follows. For the single-player game,
/// `shapley_weight(0, 1) == 1.0` - the sole player takes full credit.
///
/// `subset_len` must leave room for the evaluated player
/// (`n_components >= subset_len + 1`); the aggregation layer guarantees this
/// and never calls with a zero-player game.
#[inline]
pub fn shapley_weight(subset_len: usize, n_components: usize) -> f64 {
    debug_assert!(
        n_components >= subset_len + 1,
        "subset of {} cannot be drawn from {} players minus the evaluated one",
        subset_len,
        n_components
    );
    factorial(subset_len) * factorial(n_components - subset_len - 1) / factorial(n_components)
}
