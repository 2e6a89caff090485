use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LetterResult {
    /// The letter is in the word at this slot.
    Correct,
    /// The letter is in the word, but at some other slot.
    Present,
    /// The letter is not in the word.
    Absent,
}

impl LetterResult {
    /// Returns the single-character pattern form of this result: `g` for [`Correct`],
    /// `y` for [`Present`], and `.` for [`Absent`].
    ///
    /// [`Correct`]: LetterResult::Correct
    /// [`Present`]: LetterResult::Present
    /// [`Absent`]: LetterResult::Absent
    pub fn to_char(self) -> char {
        match self {
            LetterResult::Correct => 'g',
            LetterResult::Present => 'y',
            LetterResult::Absent => '.',
        }
    }

    /// Parses the single-character pattern form produced by [`LetterResult::to_char`].
    pub fn from_char(pattern: char) -> Option<LetterResult> {
        match pattern.to_ascii_lowercase() {
            'g' => Some(LetterResult::Correct),
            'y' => Some(LetterResult::Present),
            '.' => Some(LetterResult::Absent),
            _ => None,
        }
    }
}

/// The oracle's verdict for one slot of a guess.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotFeedback {
    /// The zero-based slot that was scored.
    pub slot: usize,
    /// The guessed letter at this slot.
    pub guess: char,
    pub result: LetterResult,
}

impl SlotFeedback {
    pub fn new(slot: usize, guess: char, result: LetterResult) -> SlotFeedback {
        SlotFeedback {
            slot,
            guess,
            result,
        }
    }
}

/// Returns `true` iff every slot of the feedback was scored as correct.
pub fn is_all_correct(feedback: &[SlotFeedback]) -> bool {
    feedback
        .iter()
        .all(|record| record.result == LetterResult::Correct)
}

/// Checks that the feedback holds exactly one record for each slot of a `word_length`-letter word.
pub fn validate_feedback(
    feedback: &[SlotFeedback],
    word_length: usize,
) -> Result<(), SolverError> {
    if feedback.len() != word_length {
        return Err(SolverError::MalformedFeedback(format!(
            "expected {} records, received {}",
            word_length,
            feedback.len()
        )));
    }
    let mut seen_slots = vec![false; word_length];
    for record in feedback {
        match seen_slots.get_mut(record.slot) {
            None => {
                return Err(SolverError::MalformedFeedback(format!(
                    "slot {} is outside a {}-letter word",
                    record.slot, word_length
                )))
            }
            Some(true) => {
                return Err(SolverError::MalformedFeedback(format!(
                    "slot {} was scored more than once",
                    record.slot
                )))
            }
            Some(seen) => *seen = true,
        }
    }
    Ok(())
}

/// Renders feedback as a pattern string, e.g. `"g.y.."`.
pub fn feedback_pattern(feedback: &[SlotFeedback]) -> String {
    feedback
        .iter()
        .map(|record| record.result.to_char())
        .collect()
}

/// Builds slot feedback for `guess` from a pattern string such as `"g.y.."`.
pub fn feedback_from_pattern(guess: &str, pattern: &str) -> Result<Vec<SlotFeedback>, SolverError> {
    let guess_len = guess.chars().count();
    if pattern.chars().count() != guess_len {
        return Err(SolverError::MalformedFeedback(format!(
            "pattern {:?} does not match the length of the guess {:?}",
            pattern, guess
        )));
    }
    guess
        .chars()
        .zip(pattern.chars())
        .enumerate()
        .map(|(slot, (letter, pattern_letter))| {
            LetterResult::from_char(pattern_letter)
                .map(|result| SlotFeedback::new(slot, letter, result))
                .ok_or_else(|| {
                    SolverError::MalformedFeedback(format!(
                        "unexpected pattern character {:?}, expected 'g', 'y', or '.'",
                        pattern_letter
                    ))
                })
        })
        .collect()
}

/// Determines the feedback for the given `guess` when applied to the given `objective`, using
/// standard Wordle rules for repeated letters.
pub fn get_result_for_guess(objective: &str, guess: &str) -> Result<Vec<SlotFeedback>, SolverError> {
    let objective: Vec<char> = objective.chars().collect();
    let guess: Vec<char> = guess.chars().collect();
    if objective.len() != guess.len() {
        return Err(SolverError::InvalidWordLength(guess.len()));
    }
    let mut results = vec![LetterResult::Absent; guess.len()];
    // Objective letters not yet matched to a guess letter.
    let mut unmatched: Vec<Option<char>> = objective.iter().map(|letter| Some(*letter)).collect();
    for (index, letter) in guess.iter().enumerate() {
        if objective[index] == *letter {
            results[index] = LetterResult::Correct;
            unmatched[index] = None;
        }
    }
    for (index, letter) in guess.iter().enumerate() {
        if results[index] == LetterResult::Correct {
            continue;
        }
        if let Some(position) = unmatched.iter().position(|other| *other == Some(*letter)) {
            results[index] = LetterResult::Present;
            unmatched[position] = None;
        }
    }
    Ok(guess
        .into_iter()
        .zip(results)
        .enumerate()
        .map(|(slot, (letter, result))| SlotFeedback::new(slot, letter, result))
        .collect())
}

/// Indicates that an error occurred while trying to solve a puzzle.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The requested play mode is not one of `daily`, `random`, or `custom`.
    #[error("invalid mode {0:?}, expected one of \"daily\", \"random\" or \"custom\"")]
    InvalidMode(String),
    /// Words must have at least one letter.
    #[error("invalid word length: {0}")]
    InvalidWordLength(usize),
    /// The feedback oracle could not be reached, or rejected the request.
    #[error("feedback oracle unavailable: {0}")]
    OracleUnavailable(String),
    /// The feedback oracle answered with something that can't be applied to the guess.
    #[error("malformed feedback: {0}")]
    MalformedFeedback(String),
    /// An operation that needs at least one candidate word was given none.
    #[error("the candidate pool is empty")]
    EmptyPool,
    /// Every letter has been ruled out, so no word can be generated.
    #[error("every letter has been reported absent")]
    EmptyAlphabet,
    #[error("failed to read words: {0}")]
    Io(#[from] std::io::Error),
}

/// How a solve session ended.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum SolveOutcome {
    /// The oracle confirmed the last guess. Provides every guess that was made.
    Solved(Vec<Arc<str>>),
    /// The oracle failed, so the session was abandoned. Provides the guesses that were scored
    /// before the failure, and a description of the failure.
    OracleFailed {
        guesses: Vec<Arc<str>>,
        reason: String,
    },
    /// The attempt budget ran out before the word was found.
    Exhausted(Vec<Arc<str>>),
}

impl SolveOutcome {
    /// Returns the solution, if the puzzle was solved.
    pub fn solution(&self) -> Option<&str> {
        match self {
            SolveOutcome::Solved(guesses) => guesses.last().map(|word| word.as_ref()),
            _ => None,
        }
    }

    /// Returns the number of guesses that the oracle scored.
    pub fn attempts(&self) -> usize {
        match self {
            SolveOutcome::Solved(guesses) | SolveOutcome::Exhausted(guesses) => guesses.len(),
            SolveOutcome::OracleFailed { guesses, .. } => guesses.len(),
        }
    }
}

impl fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveOutcome::Solved(guesses) => write!(
                f,
                "solved the word {:?} in {} attempts",
                guesses.last().map(|word| word.as_ref()).unwrap_or(""),
                guesses.len()
            ),
            SolveOutcome::OracleFailed { guesses, reason } => write!(
                f,
                "could not solve the word: {} (after {} attempts)",
                reason,
                guesses.len()
            ),
            SolveOutcome::Exhausted(guesses) => write!(
                f,
                "could not solve the word within {} attempts",
                guesses.len()
            ),
        }
    }
}
