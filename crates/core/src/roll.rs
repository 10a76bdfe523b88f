//! Weighted home world roll.
//!
//! Each home world owns a slice `[start_roll, end_roll)` of the roll table;
//! the width of that slice is its weight. A draw picks exactly one candidate
//! with probability `weight / total_weight`.
//!
//! Randomness is injected through [`RollSource`] so a seeded generator (or a
//! fixed value in tests) makes every draw reproducible.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Random source
// ---------------------------------------------------------------------------

/// Source of uniform values in `[0, 1)`.
///
/// Every [`rand::Rng`] is a `RollSource`.
pub trait RollSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: rand::Rng> RollSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

// ---------------------------------------------------------------------------
// Candidates
// ---------------------------------------------------------------------------

/// A home world as seen by the roll: its id, configured range, and the
/// weight derived from that range at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RollCandidate {
    pub id: DbId,
    pub start_roll: i32,
    pub end_roll: i32,
    pub roll_weight: i64,
}

impl RollCandidate {
    pub fn new(id: DbId, start_roll: i32, end_roll: i32) -> Self {
        Self {
            id,
            start_roll,
            end_roll,
            roll_weight: i64::from(end_roll) - i64::from(start_roll),
        }
    }

    /// A range whose end precedes its start is a configuration error, as
    /// opposed to an empty range (weight zero) which simply never wins.
    pub fn is_inverted(&self) -> bool {
        self.roll_weight < 0
    }
}

// ---------------------------------------------------------------------------
// Sampler
// ---------------------------------------------------------------------------

/// Draw one id from `(id, weight)` pairs, proportional to weight.
///
/// Candidates are bucketed cumulatively in the order given, so callers that
/// need reproducible draws must pass them in a fixed order. Non-positive
/// weights occupy no space in the table and are never returned.
///
/// Fails with [`CoreError::InvalidInput`] when there are no candidates or no
/// candidate has a positive weight.
pub fn choose_weighted<R>(candidates: &[(DbId, i64)], rng: &mut R) -> Result<DbId, CoreError>
where
    R: RollSource + ?Sized,
{
    if candidates.is_empty() {
        return Err(CoreError::InvalidInput(
            "No home worlds to roll from".to_string(),
        ));
    }

    let total: i64 = candidates.iter().map(|&(_, w)| w.max(0)).sum();
    if total <= 0 {
        return Err(CoreError::InvalidInput(
            "Every home world has a non-positive roll weight".to_string(),
        ));
    }

    let unit = rng.next_unit().clamp(0.0, 1.0);
    let target = unit * total as f64;

    // `total > 0` guarantees at least one positive weight overwrites this.
    let mut chosen = candidates[0].0;
    let mut cumulative = 0i64;
    for &(id, weight) in candidates.iter().filter(|&&(_, w)| w > 0) {
        chosen = id;
        cumulative += weight;
        if target < cumulative as f64 {
            break;
        }
    }

    // Falling off the end (a unit that rounds up to the top of the table)
    // leaves the last positive candidate chosen.
    Ok(chosen)
}

/// Draw one home world from `candidates` by their derived roll weight.
pub fn choose_home_world<R>(candidates: &[RollCandidate], rng: &mut R) -> Result<DbId, CoreError>
where
    R: RollSource + ?Sized,
{
    let weighted: Vec<(DbId, i64)> = candidates.iter().map(|c| (c.id, c.roll_weight)).collect();
    choose_weighted(&weighted, rng)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    /// Returns the same unit value on every call.
    struct FixedRoll(f64);

    impl RollSource for FixedRoll {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    // -- RollCandidate --

    #[test]
    fn weight_is_end_minus_start() {
        let c = RollCandidate::new(1, 1, 50);
        assert_eq!(c.roll_weight, 49);
        assert!(!c.is_inverted());
    }

    #[test]
    fn empty_range_has_zero_weight() {
        let c = RollCandidate::new(1, 10, 10);
        assert_eq!(c.roll_weight, 0);
        assert!(!c.is_inverted());
    }

    #[test]
    fn inverted_range_is_flagged() {
        assert!(RollCandidate::new(1, 60, 40).is_inverted());
    }

    // -- rejection --

    #[test]
    fn empty_candidates_are_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_matches!(choose_weighted(&[], &mut rng), Err(CoreError::InvalidInput(_)));
    }

    #[test]
    fn all_zero_weights_are_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = choose_weighted(&[(1, 0), (2, 0)], &mut rng);
        assert_matches!(result, Err(CoreError::InvalidInput(_)));
    }

    #[test]
    fn all_negative_weights_are_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = choose_weighted(&[(1, -5), (2, -1), (3, 0)], &mut rng);
        assert_matches!(result, Err(CoreError::InvalidInput(_)));
    }

    // -- bucket placement --

    #[test]
    fn low_roll_lands_in_first_bucket() {
        let result = choose_weighted(&[(1, 49), (2, 49)], &mut FixedRoll(0.0));
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn midpoint_roll_lands_in_second_bucket() {
        // 0.5 * 98 = 49, which is the first value outside bucket 1.
        let result = choose_weighted(&[(1, 49), (2, 49)], &mut FixedRoll(0.5));
        assert_eq!(result.unwrap(), 2);
    }

    #[test]
    fn top_of_table_falls_back_to_last_positive() {
        let result = choose_weighted(&[(1, 3), (2, 5), (3, 0)], &mut FixedRoll(1.0));
        assert_eq!(result.unwrap(), 2);
    }

    #[test]
    fn top_of_table_never_returns_a_leading_zero_weight() {
        let result = choose_weighted(&[(1, 0), (2, 4), (3, -2)], &mut FixedRoll(1.0));
        assert_eq!(result.unwrap(), 2);
    }

    #[test]
    fn zero_weight_candidates_are_skipped() {
        let candidates = [(1, 0), (2, 10), (3, 0)];
        for unit in [0.0, 0.25, 0.5, 0.999] {
            assert_eq!(choose_weighted(&candidates, &mut FixedRoll(unit)).unwrap(), 2);
        }
    }

    #[test]
    fn order_determines_bucket() {
        let forward = choose_weighted(&[(1, 1), (2, 9)], &mut FixedRoll(0.05)).unwrap();
        let reversed = choose_weighted(&[(2, 9), (1, 1)], &mut FixedRoll(0.05)).unwrap();
        assert_eq!(forward, 1);
        assert_eq!(reversed, 2);
    }

    // -- membership and distribution --

    #[test]
    fn result_is_always_a_candidate() {
        let candidates = [(11, 3), (22, 1), (33, 7), (44, 2)];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let id = choose_weighted(&candidates, &mut rng).unwrap();
            assert!(candidates.iter().any(|&(c, _)| c == id));
        }
    }

    #[test]
    fn heavy_candidate_wins_about_ninety_percent() {
        let candidates = [(1, 1), (2, 9)];
        let mut rng = StdRng::seed_from_u64(2024);
        let draws = 10_000;
        let b_wins = (0..draws)
            .filter(|_| choose_weighted(&candidates, &mut rng).unwrap() == 2)
            .count();
        let freq = b_wins as f64 / draws as f64;
        assert!((0.88..=0.92).contains(&freq), "B frequency was {freq}");
    }

    #[test]
    fn same_seed_same_draws() {
        let candidates = [(1, 10), (2, 20), (3, 30)];
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(
                choose_weighted(&candidates, &mut a).unwrap(),
                choose_weighted(&candidates, &mut b).unwrap()
            );
        }
    }

    #[test]
    fn choose_home_world_uses_roll_weight() {
        let candidates = [RollCandidate::new(1, 10, 10), RollCandidate::new(2, 11, 100)];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(choose_home_world(&candidates, &mut rng).unwrap(), 2);
        }
    }
}
