use crate::data::LetterFrequencies;
use crate::results::SolverError;
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::result::Result;
use std::sync::Arc;

/// Scores a word by the information carried by its distinct letters:
/// `-Σ p(letter) * log2(p(letter))` over each unique letter, using the given frequencies.
///
/// Repeated letters only count once, and letters that never occur in the pool contribute
/// nothing. The result is never negative.
///
/// Letters are summed in alphabetical order, so anagrams always get bit-identical scores.
pub fn word_entropy(word: &str, frequencies: &LetterFrequencies) -> f64 {
    let unique_letters: BTreeSet<char> = word.chars().collect();
    unique_letters
        .into_iter()
        .map(|letter| frequencies.probability(letter))
        .filter(|probability| *probability > 0.0)
        .map(|probability| -probability * probability.log2())
        .sum()
}

/// Returns the pool sorted from the highest to the lowest entropy, along with each word's score.
///
/// Scores are computed from the letter frequencies of the pool itself. Words with equal scores
/// keep their pool order.
pub fn rank_by_entropy(pool: &[Arc<str>]) -> Result<Vec<(Arc<str>, f64)>, SolverError> {
    if pool.is_empty() {
        return Err(SolverError::EmptyPool);
    }
    let frequencies = LetterFrequencies::from_words(pool)?;
    let mut ranked: Vec<(Arc<str>, f64)> = pool
        .par_iter()
        .map(|word| (Arc::clone(word), word_entropy(word, &frequencies)))
        .collect();
    ranked.sort_by(|(_, score), (_, other_score)| other_score.total_cmp(score));
    Ok(ranked)
}

/// Selects the next guess: one of the `top_n` highest-entropy words in the pool, chosen
/// uniformly at random.
///
/// `top_n` is clamped to the size of the pool, and is treated as at least 1.
pub fn select_guess<R>(pool: &[Arc<str>], top_n: usize, rng: &mut R) -> Result<Arc<str>, SolverError>
where
    R: Rng + ?Sized,
{
    let ranked = rank_by_entropy(pool)?;
    let num_candidates = top_n.clamp(1, ranked.len());
    ranked[..num_candidates]
        .choose(rng)
        .map(|(word, _)| Arc::clone(word))
        .ok_or(SolverError::EmptyPool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn to_arc_vec(words: &[&str]) -> Vec<Arc<str>> {
        words.iter().map(|word| Arc::from(*word)).collect()
    }

    #[test]
    fn word_entropy_counts_unique_letters_once() -> Result<(), SolverError> {
        let frequencies = LetterFrequencies::from_words(&["ab", "ab"])?;

        // Both letters have probability 0.5, contributing 0.5 bits each.
        assert!((word_entropy("ab", &frequencies) - 1.0).abs() < 1e-12);
        assert!((word_entropy("aa", &frequencies) - 0.5).abs() < 1e-12);
        assert_eq!(word_entropy("zz", &frequencies), 0.0);
        Ok(())
    }

    #[test]
    fn rank_by_entropy_prefers_diverse_common_letters() -> Result<(), SolverError> {
        let pool = to_arc_vec(&["aaaa", "abcd", "aabb", "abce"]);

        let ranked = rank_by_entropy(&pool)?;

        assert_eq!(ranked.len(), 4);
        assert_eq!(ranked[0].0.as_ref(), "abcd");
        assert_eq!(ranked[3].0.as_ref(), "aaaa");
        assert!(ranked
            .windows(2)
            .all(|pair| pair[0].1 >= pair[1].1));
        Ok(())
    }

    #[test]
    fn rank_by_entropy_empty_pool_fails() {
        assert!(matches!(rank_by_entropy(&[]), Err(SolverError::EmptyPool)));
    }

    #[test]
    fn select_guess_stays_within_top_n() -> Result<(), SolverError> {
        let pool = to_arc_vec(&["aaaa", "abcd", "aabb", "abce", "bbbb"]);
        let ranked = rank_by_entropy(&pool)?;
        let top_two: Vec<&str> = ranked[..2].iter().map(|(word, _)| word.as_ref()).collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let guess = select_guess(&pool, 2, &mut rng)?;
            assert!(top_two.contains(&guess.as_ref()));
        }
        Ok(())
    }

    #[test]
    fn select_guess_top_one_is_deterministic() -> Result<(), SolverError> {
        let pool = to_arc_vec(&["aaaa", "abcd", "aabb"]);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(select_guess(&pool, 1, &mut rng)?.as_ref(), "abcd");
        assert_eq!(select_guess(&pool, 0, &mut rng)?.as_ref(), "abcd");
        Ok(())
    }

    #[test]
    fn select_guess_clamps_top_n_to_pool_size() -> Result<(), SolverError> {
        let pool = to_arc_vec(&["only"]);
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(select_guess(&pool, 10, &mut rng)?.as_ref(), "only");
        Ok(())
    }
}
