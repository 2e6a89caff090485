use crate::results::LetterResult;
use crate::results::SlotFeedback;
use crate::results::SolverError;
use crate::results::validate_feedback;
use log::debug;
use log::warn;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::result::Result;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything learned about the objective word during one solve session.
///
/// The state only grows: each round of feedback adds to it, and nothing is ever removed.
///
/// Letters are tracked as a flat set per category, so this can't fully describe words with a
/// repeated letter where one occurrence is correct or present and another is absent. In that
/// case the letter ends up both present and absent, and no dictionary word will satisfy the
/// restrictions until the fallback generator takes over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstraintState {
    /// The letter known to be at each slot.
    pub correct_positions: BTreeMap<usize, char>,
    /// Letters that are in the word, mapped to the slots where they are known not to be.
    pub present_letters: BTreeMap<char, BTreeSet<usize>>,
    /// Letters that are not in the word.
    pub absent_letters: BTreeSet<char>,
}

impl ConstraintState {
    /// Creates an empty `ConstraintState` that every word satisfies.
    pub fn new() -> ConstraintState {
        ConstraintState::default()
    }

    /// Returns the restrictions imposed by the given feedback.
    pub fn from_feedback(
        feedback: &[SlotFeedback],
        word_length: usize,
    ) -> Result<ConstraintState, SolverError> {
        let mut constraints = ConstraintState::new();
        constraints.update(feedback, word_length)?;
        Ok(constraints)
    }

    /// Adds the restrictions arising from one round of oracle feedback.
    ///
    /// The oracle's classification is trusted as-is. Feedback must hold exactly one record per
    /// slot of a `word_length`-letter word (see [`validate_feedback`]), otherwise nothing is
    /// recorded.
    pub fn update(
        &mut self,
        feedback: &[SlotFeedback],
        word_length: usize,
    ) -> Result<(), SolverError> {
        validate_feedback(feedback, word_length)?;
        for record in feedback {
            match record.result {
                LetterResult::Correct => self.set_letter_here(record.guess, record.slot),
                LetterResult::Present => {
                    self.present_letters
                        .entry(record.guess)
                        .or_default()
                        .insert(record.slot);
                }
                LetterResult::Absent => {
                    self.absent_letters.insert(record.guess);
                }
            }
        }
        if let Some(letter) = self
            .absent_letters
            .iter()
            .find(|letter| self.is_known_present(**letter))
        {
            debug!(
                "letter {:?} is reported both absent and present, restrictions may reject every word",
                letter
            );
        }
        Ok(())
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    ///
    /// Words must avoid every absent letter, match every known slot, and contain each present
    /// letter somewhere other than its excluded slots.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        let letters: Vec<char> = word.chars().collect();
        !letters
            .iter()
            .any(|letter| self.absent_letters.contains(letter))
            && self
                .correct_positions
                .iter()
                .all(|(slot, letter)| letters.get(*slot) == Some(letter))
            && self.present_letters.iter().all(|(letter, excluded_slots)| {
                letters.contains(letter)
                    && !excluded_slots
                        .iter()
                        .any(|slot| letters.get(*slot) == Some(letter))
            })
    }

    fn set_letter_here(&mut self, letter: char, slot: usize) {
        match self.correct_positions.entry(slot) {
            Entry::Vacant(entry) => {
                entry.insert(letter);
            }
            Entry::Occupied(entry) => {
                if *entry.get() != letter {
                    warn!(
                        "ignoring {:?} at slot {}, which is already known to be {:?}",
                        letter,
                        slot,
                        entry.get()
                    );
                }
            }
        }
    }

    fn is_known_present(&self, letter: char) -> bool {
        self.present_letters.contains_key(&letter)
            || self.correct_positions.values().any(|known| *known == letter)
    }
}

/// Gets the words in the pool that meet the given restrictions, in their original order.
pub fn filter_words(words: &[Arc<str>], constraints: &ConstraintState) -> Vec<Arc<str>> {
    words
        .iter()
        .filter(|word| constraints.is_satisfied_by(word))
        .map(Arc::clone)
        .collect()
}
