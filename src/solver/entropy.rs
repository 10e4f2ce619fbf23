//! Expected-information scoring for candidate guesses
//!
//! A guess partitions the candidate pool by the clue each pool word would
//! produce. The Shannon entropy of that partition, under a uniform prior over
//! the pool, is the expected information gain of the guess. Scores are in
//! natural-log units (nats).

use crate::core::{Clue, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Shannon entropy of the clue partition `guess` induces over `pool`
///
/// `H = -Σ p ln p` over the partitions, where each partition's probability is
/// its share of the pool. Zero when every pool word answers with the same
/// clue; never negative. Callers must not pass an empty pool.
#[must_use]
pub fn clue_entropy(guess: &Word, pool: &[&Word]) -> f64 {
    debug_assert!(!pool.is_empty(), "entropy of an empty pool is undefined");

    let mut partitions: FxHashMap<Clue, usize> = FxHashMap::default();
    for solution in pool {
        *partitions
            .entry(Clue::derive_unchecked(solution, guess))
            .or_insert(0) += 1;
    }

    let total = pool.len() as f64;
    partitions
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.ln()
        })
        .sum()
}

/// Highest-entropy guess in `universe`, scored against `pool`
///
/// Returns the winning word and its entropy, or `None` for an empty
/// universe. Ties go to the lowest universe index, so selection is
/// deterministic even though scoring runs in parallel.
#[must_use]
pub fn select_guess<'a>(universe: &[&'a Word], pool: &[&Word]) -> Option<(&'a Word, f64)> {
    universe
        .par_iter()
        .enumerate()
        .map(|(index, &guess)| (index, clue_entropy(guess, pool)))
        .reduce_with(|best, other| match other.1.total_cmp(&best.1) {
            Ordering::Greater => other,
            Ordering::Less => best,
            Ordering::Equal if other.0 < best.0 => other,
            Ordering::Equal => best,
        })
        .map(|(index, entropy)| (universe[index], entropy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s, s.len()).unwrap()
    }

    fn refs(words: &[Word]) -> Vec<&Word> {
        words.iter().collect()
    }

    #[test]
    fn entropy_zero_when_all_clues_agree() {
        // The guess shares no letters with any pool word, so every pool word
        // answers all-incorrect and the guess carries no information
        let pool = [word("doing"), word("found"), word("month")];
        let pool_refs = refs(&pool);

        let entropy = clue_entropy(&word("zzzzz"), &pool_refs);
        assert!(entropy.abs() < 1e-12);
    }

    #[test]
    fn entropy_even_split_is_ln2() {
        // slate matches itself perfectly and nippy not at all: two equally
        // likely partitions
        let pool = [word("slate"), word("nippy")];
        let pool_refs = refs(&pool);

        let entropy = clue_entropy(&word("slate"), &pool_refs);
        assert!((entropy - std::f64::consts::LN_2).abs() < 1e-12);
    }

    #[test]
    fn entropy_uniform_three_way_split() {
        // Three pool words, three distinct clues against the guess
        let pool = [word("slate"), word("stare"), word("crane")];
        let pool_refs = refs(&pool);

        let entropy = clue_entropy(&word("slate"), &pool_refs);
        assert!((entropy - 3f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn entropy_non_negative() {
        let pool = [word("slate"), word("stare"), word("share"), word("crane")];
        let pool_refs = refs(&pool);

        for guess in &pool {
            assert!(clue_entropy(guess, &pool_refs) >= 0.0);
        }
    }

    #[test]
    fn entropy_deterministic() {
        let pool = [word("slate"), word("stare"), word("share"), word("crane")];
        let pool_refs = refs(&pool);
        let guess = word("raise");

        let first = clue_entropy(&guess, &pool_refs);
        let second = clue_entropy(&guess, &pool_refs);
        assert!((first - second).abs() < f64::EPSILON);
    }

    #[test]
    fn select_prefers_informative_guess() {
        // aaaaa gives the same all-incorrect clue for the whole pool; slate
        // splits it
        let universe = [word("qqqqq"), word("slate")];
        let pool = [word("slate"), word("crane"), word("brink")];

        let universe_refs = refs(&universe);
        let pool_refs = refs(&pool);

        let (best, entropy) = select_guess(&universe_refs, &pool_refs).unwrap();
        assert_eq!(best.text(), "slate");
        assert!(entropy > 0.0);
    }

    #[test]
    fn select_breaks_ties_by_lowest_index() {
        // Neither guess shares a letter with the pool, so both score zero;
        // the earlier one must win
        let universe = [word("jumpy"), word("wimpy")];
        let pool = [word("shell"), word("total")];

        let universe_refs = refs(&universe);
        let pool_refs = refs(&pool);

        let (best, entropy) = select_guess(&universe_refs, &pool_refs).unwrap();
        assert_eq!(best.text(), "jumpy");
        assert!(entropy.abs() < 1e-12);
    }

    #[test]
    fn select_is_deterministic_across_runs() {
        let universe = [word("slate"), word("stare"), word("crane"), word("raise")];
        let pool = [word("share"), word("shard"), word("sharp"), word("shave")];

        let universe_refs = refs(&universe);
        let pool_refs = refs(&pool);

        let first = select_guess(&universe_refs, &pool_refs).unwrap();
        let second = select_guess(&universe_refs, &pool_refs).unwrap();

        assert_eq!(first.0.text(), second.0.text());
        assert!((first.1 - second.1).abs() < f64::EPSILON);
    }

    #[test]
    fn select_returns_none_for_empty_universe() {
        let pool = [word("slate")];
        let pool_refs = refs(&pool);
        assert!(select_guess(&[], &pool_refs).is_none());
    }
}
