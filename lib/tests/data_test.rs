use entropy_wordle_solver::*;

use std::io::Cursor;
use std::result::Result;
use std::sync::Arc;

macro_rules! assert_arc_eq {
    ($arc_vec:expr, $non_arc_vec:expr) => {
        assert_eq!(
            $arc_vec as &[Arc<str>],
            $non_arc_vec
                .iter()
                .map(|thing| Arc::from(*thing))
                .collect::<Vec<Arc<_>>>()
        );
    };
}

#[test]
fn word_bank_from_reader_succeeds() -> Result<(), SolverError> {
    let cursor = Cursor::new(String::from("\n\nworda\n wordb\nAlan\nalan\n"));

    let word_bank = WordBank::from_reader(cursor)?;

    assert_eq!(word_bank.len(), 3);
    assert_arc_eq!(&word_bank, &["worda", "wordb", "alan"]);
    Ok(())
}

#[test]
fn word_bank_words_of_length_is_lowercase_and_unique() {
    let word_bank = WordBank::from_iterator(vec!["", "CRANE", "crane", "Stone ", "be", "x-ray"]);

    assert_arc_eq!(&word_bank.words_of_length(5), &["crane", "stone"]);
    assert_arc_eq!(&word_bank.words_of_length(2), &["be"]);
    assert!(word_bank.words_of_length(4).is_empty());
}

#[test]
fn letter_frequencies_sum_to_one() -> Result<(), SolverError> {
    let pools: Vec<Vec<&str>> = vec![
        vec!["crane"],
        vec!["spore", "stone", "store"],
        vec!["aaaaa", "bbbbb", "abcde", "zzzzz"],
    ];

    for pool in pools {
        let frequencies = LetterFrequencies::from_words(&pool)?;
        let total: f64 = frequencies.iter().map(|(_, probability)| probability).sum();

        assert!((total - 1.0).abs() < 1e-9);
        assert!(frequencies
            .iter()
            .all(|(_, probability)| probability > 0.0 && probability <= 1.0));
    }
    Ok(())
}

#[test]
fn letter_frequencies_of_single_letter_pool() -> Result<(), SolverError> {
    let frequencies = LetterFrequencies::from_words(&["aaa", "aa"])?;

    assert_eq!(frequencies.len(), 1);
    assert_eq!(frequencies.probability('a'), 1.0);
    Ok(())
}
