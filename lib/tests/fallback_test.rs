use entropy_wordle_solver::*;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::result::Result;

fn satisfies_hard_constraints(word: &str, word_length: usize, constraints: &ConstraintState) -> bool {
    let letters: Vec<char> = word.chars().collect();
    letters.len() == word_length
        && constraints
            .correct_positions
            .iter()
            .all(|(slot, letter)| letters[*slot] == *letter)
        && letters
            .iter()
            .all(|letter| !constraints.absent_letters.contains(letter))
}

#[test]
fn generate_candidates_after_feedback() -> Result<(), SolverError> {
    let mut constraints = ConstraintState::new();
    constraints.update(&get_result_for_guess("stone", "spore")?, 5)?;
    constraints.update(&get_result_for_guess("stone", "tacky")?, 5)?;
    let mut rng = StdRng::seed_from_u64(31);

    let words = generate_candidates(5, &constraints, DEFAULT_FALLBACK_WORDS, &mut rng)?;

    assert_eq!(words.len(), DEFAULT_FALLBACK_WORDS);
    assert!(words
        .iter()
        .all(|word| satisfies_hard_constraints(word, 5, &constraints)));
    // 't' is the only present letter.
    assert!(words.iter().all(|word| word.contains('t')));
    Ok(())
}

#[test]
fn generate_candidates_respects_hard_constraints_for_many_seeds() -> Result<(), SolverError> {
    let constraints = ConstraintState {
        correct_positions: BTreeMap::from([(1, 'r'), (5, 'y')]),
        present_letters: BTreeMap::from([('o', BTreeSet::from([0, 2])), ('e', BTreeSet::from([3]))]),
        absent_letters: BTreeSet::from(['a', 's', 't', 'n', 'l']),
    };

    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);

        let words = generate_candidates(6, &constraints, 40, &mut rng)?;

        assert_eq!(words.len(), 40);
        assert!(words
            .iter()
            .all(|word| satisfies_hard_constraints(word, 6, &constraints)));
        assert!(words.iter().all(|word| word.contains('o') && word.contains('e')));
    }
    Ok(())
}

#[test]
fn generate_candidates_is_reproducible_with_seed() -> Result<(), SolverError> {
    let constraints = ConstraintState::from_feedback(&get_result_for_guess("crane", "trace")?, 5)?;

    let first = generate_candidates(5, &constraints, 50, &mut StdRng::seed_from_u64(8))?;
    let second = generate_candidates(5, &constraints, 50, &mut StdRng::seed_from_u64(8))?;

    assert_eq!(first, second);
    Ok(())
}
