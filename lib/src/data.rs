use crate::results::SolverError;
use rayon::prelude::*;
use std::collections::HashMap;
use std::collections::HashSet;
use std::io::BufRead;
use std::result::Result;
use std::sync::Arc;

/// Provides the dictionary that candidate pools are drawn from.
pub trait WordSource {
    /// Returns every known word with exactly `word_length` letters, lower-cased and without
    /// duplicates.
    fn words_of_length(&self, word_length: usize) -> Vec<Arc<str>>;
}

/// Contains all the words known to the solver, of any length.
///
/// A bank is loaded once and is read-only afterwards, so it can be shared across solve sessions.
#[derive(Clone, Debug, Default)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to lower
    /// case. Blank lines, duplicates, and entries containing anything other than ASCII letters
    /// are skipped.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, SolverError> {
        let lines = word_reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        Ok(WordBank::from_iterator(lines))
    }

    /// Constructs a new `WordBank` using the words from the given iterator.
    ///
    /// Words are cleaned the same way as in [`WordBank::from_reader`].
    pub fn from_iterator<S>(words: impl IntoIterator<Item = S>) -> Self
    where
        S: AsRef<str>,
    {
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        let mut all_words = Vec::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() || !word.chars().all(|letter| letter.is_ascii_alphabetic()) {
                continue;
            }
            let word: Arc<str> = Arc::from(word.as_str());
            if seen.insert(Arc::clone(&word)) {
                all_words.push(word);
            }
        }
        WordBank { all_words }
    }

    /// Returns the number of words in the bank.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}

impl WordSource for WordBank {
    fn words_of_length(&self, word_length: usize) -> Vec<Arc<str>> {
        self.all_words
            .iter()
            .filter(|word| word.chars().count() == word_length)
            .map(Arc::clone)
            .collect()
    }
}

impl std::ops::Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

/// The relative frequency of each letter across every character of a candidate pool.
///
/// The probabilities of all observed letters sum to 1.
#[derive(Clone, Debug, PartialEq)]
pub struct LetterFrequencies {
    probability_by_letter: HashMap<char, f64>,
}

impl LetterFrequencies {
    /// Computes letter frequencies for the given pool. Fails if the pool holds no letters.
    pub fn from_words<S>(words: &[S]) -> Result<LetterFrequencies, SolverError>
    where
        S: AsRef<str> + Sync,
    {
        let count_by_letter: HashMap<char, usize> = words
            .par_iter()
            .fold(HashMap::new, |mut counts, word| {
                for letter in word.as_ref().chars() {
                    *counts.entry(letter).or_insert(0) += 1;
                }
                counts
            })
            .reduce(HashMap::new, |mut counts, other| {
                for (letter, count) in other {
                    *counts.entry(letter).or_insert(0) += count;
                }
                counts
            });
        let total_letters: usize = count_by_letter.values().sum();
        if total_letters == 0 {
            return Err(SolverError::EmptyPool);
        }
        Ok(LetterFrequencies {
            probability_by_letter: count_by_letter
                .into_iter()
                .map(|(letter, count)| (letter, count as f64 / total_letters as f64))
                .collect(),
        })
    }

    /// Retrieves the probability of the given letter, or 0 if it never occurs in the pool.
    pub fn probability(&self, letter: char) -> f64 {
        *self.probability_by_letter.get(&letter).unwrap_or(&0.0)
    }

    /// Iterates over every observed letter and its probability.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.probability_by_letter
            .iter()
            .map(|(letter, probability)| (*letter, *probability))
    }

    /// Returns the number of distinct letters observed in the pool.
    pub fn len(&self) -> usize {
        self.probability_by_letter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probability_by_letter.is_empty()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::io::Cursor;

    macro_rules! assert_arc_eq {
        ($arc_vec:expr, $non_arc_vec:expr) => {
            assert_eq!(
                $arc_vec,
                $non_arc_vec
                    .iter()
                    .map(|thing| Arc::from(*thing))
                    .collect::<Vec<Arc<str>>>()
            );
        };
    }

    #[test]
    fn word_bank_from_reader_cleans_words() -> Result<(), SolverError> {
        let cursor = Cursor::new(String::from("\n\nWorda\n wordb\nworda\nit's\n"));

        let word_bank = WordBank::from_reader(cursor)?;

        assert_eq!(word_bank.len(), 2);
        assert_arc_eq!(word_bank.to_vec(), vec!["worda", "wordb"]);
        Ok(())
    }

    #[test]
    fn word_bank_words_of_length() {
        let word_bank = WordBank::from_iterator(vec!["crane", "alan", "Stone", "be", "crane"]);

        assert_arc_eq!(word_bank.words_of_length(5), vec!["crane", "stone"]);
        assert_arc_eq!(word_bank.words_of_length(4), vec!["alan"]);
        assert!(word_bank.words_of_length(7).is_empty());
    }

    #[test]
    fn word_bank_skips_non_ascii_words() {
        let word_bank = WordBank::from_iterator(vec!["éclair", "Ångström", "naïve", "crane"]);

        assert_eq!(word_bank.len(), 1);
        assert_arc_eq!(word_bank.words_of_length(5), vec!["crane"]);
        assert!(word_bank.words_of_length(6).is_empty());
    }

    #[test]
    fn letter_frequencies_counts_every_character() -> Result<(), SolverError> {
        let frequencies = LetterFrequencies::from_words(&["aab", "abc"])?;

        assert_eq!(frequencies.len(), 3);
        assert_eq!(frequencies.probability('a'), 3.0 / 6.0);
        assert_eq!(frequencies.probability('b'), 2.0 / 6.0);
        assert_eq!(frequencies.probability('c'), 1.0 / 6.0);
        assert_eq!(frequencies.probability('z'), 0.0);
        Ok(())
    }

    #[test]
    fn letter_frequencies_empty_pool_fails() {
        let empty: [&str; 0] = [];

        assert!(matches!(
            LetterFrequencies::from_words(&empty),
            Err(SolverError::EmptyPool)
        ));
    }
}
