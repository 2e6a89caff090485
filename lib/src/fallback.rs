use crate::restrictions::ConstraintState;
use crate::results::SolverError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::result::Result;
use std::sync::Arc;

/// The number of words generated when the candidate pool runs dry.
pub const DEFAULT_FALLBACK_WORDS: usize = 1000;

/// Synthesizes `num_words` candidate words of `word_length` letters that are consistent with the
/// given restrictions. Duplicates are allowed.
///
/// Each word is built by fixing the known letters, placing each present letter at a random open
/// slot it hasn't been excluded from, and filling the rest with random letters that aren't known
/// to be absent. Placement of present letters is best-effort: a letter with no allowed open slot
/// is skipped, and random filler may repeat a present letter at one of its excluded slots.
///
/// Fails with [`SolverError::EmptyAlphabet`] if some slot must be filled but every letter is
/// absent.
pub fn generate_candidates<R>(
    word_length: usize,
    constraints: &ConstraintState,
    num_words: usize,
    rng: &mut R,
) -> Result<Vec<Arc<str>>, SolverError>
where
    R: Rng + ?Sized,
{
    let alphabet: Vec<char> = ('a'..='z')
        .filter(|letter| !constraints.absent_letters.contains(letter))
        .collect();
    (0..num_words)
        .map(|_| generate_candidate(word_length, constraints, &alphabet, &mut *rng))
        .collect()
}

fn generate_candidate<R>(
    word_length: usize,
    constraints: &ConstraintState,
    alphabet: &[char],
    rng: &mut R,
) -> Result<Arc<str>, SolverError>
where
    R: Rng + ?Sized,
{
    let mut slots: Vec<Option<char>> = vec![None; word_length];
    for (slot, letter) in &constraints.correct_positions {
        if let Some(entry) = slots.get_mut(*slot) {
            *entry = Some(*letter);
        }
    }

    for (letter, excluded_slots) in &constraints.present_letters {
        if constraints
            .correct_positions
            .values()
            .any(|known| known == letter)
        {
            continue;
        }
        let open_slots: Vec<usize> = (0..word_length)
            .filter(|slot| slots[*slot].is_none() && !excluded_slots.contains(slot))
            .collect();
        if let Some(slot) = open_slots.choose(rng) {
            slots[*slot] = Some(*letter);
        }
    }

    let word = slots
        .into_iter()
        .map(|letter| match letter {
            Some(letter) => Ok(letter),
            None => alphabet.choose(rng).copied().ok_or(SolverError::EmptyAlphabet),
        })
        .collect::<Result<String, SolverError>>()?;
    Ok(Arc::from(word.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeMap;
    use std::collections::BTreeSet;

    #[test]
    fn generate_candidates_without_restrictions() -> Result<(), SolverError> {
        let mut rng = StdRng::seed_from_u64(42);

        let words = generate_candidates(5, &ConstraintState::new(), 20, &mut rng)?;

        assert_eq!(words.len(), 20);
        assert!(words
            .iter()
            .all(|word| word.len() == 5 && word.chars().all(|letter| letter.is_ascii_lowercase())));
        Ok(())
    }

    #[test]
    fn generate_candidates_places_present_letter_in_only_allowed_slot() -> Result<(), SolverError> {
        let constraints = ConstraintState {
            correct_positions: BTreeMap::from([(0, 'c')]),
            present_letters: BTreeMap::from([('a', BTreeSet::from([1, 2]))]),
            absent_letters: BTreeSet::new(),
        };
        let mut rng = StdRng::seed_from_u64(5);

        let words = generate_candidates(4, &constraints, 30, &mut rng)?;

        assert!(words.iter().all(|word| word.starts_with('c') && word.ends_with('a')));
        Ok(())
    }

    #[test]
    fn generate_candidates_skips_present_letter_without_open_slot() -> Result<(), SolverError> {
        let constraints = ConstraintState {
            correct_positions: BTreeMap::from([(0, 'x'), (1, 'y')]),
            present_letters: BTreeMap::from([('z', BTreeSet::from([2]))]),
            absent_letters: ('a'..='v').collect(),
        };
        let mut rng = StdRng::seed_from_u64(9);

        let words = generate_candidates(3, &constraints, 50, &mut rng)?;

        assert_eq!(words.len(), 50);
        assert!(words.iter().all(|word| word.len() == 3 && word.starts_with("xy")));
        assert!(words
            .iter()
            .all(|word| matches!(word.chars().nth(2), Some('w'..='z'))));
        Ok(())
    }

    #[test]
    fn generate_candidates_with_every_letter_absent_fails() {
        let constraints = ConstraintState {
            correct_positions: BTreeMap::new(),
            present_letters: BTreeMap::new(),
            absent_letters: ('a'..='z').collect(),
        };
        let mut rng = StdRng::seed_from_u64(9);

        assert!(matches!(
            generate_candidates(3, &constraints, 5, &mut rng),
            Err(SolverError::EmptyAlphabet)
        ));
    }

    #[test]
    fn generate_candidates_zero_words() -> Result<(), SolverError> {
        let mut rng = StdRng::seed_from_u64(9);

        assert!(generate_candidates(5, &ConstraintState::new(), 0, &mut rng)?.is_empty());
        Ok(())
    }
}
