use crate::results::get_result_for_guess;
use crate::results::SlotFeedback;
use crate::results::SolverError;
use std::fmt;
use std::result::Result;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The word length used when none is given.
pub const DEFAULT_WORD_LENGTH: usize = 5;
/// The seed used for `random` puzzles when none is given.
pub const DEFAULT_SEED: u64 = 1234;
/// The objective word used for `custom` puzzles when none is given.
pub const DEFAULT_CUSTOM_WORD: &str = "alan";

/// Which puzzle the oracle scores guesses against.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PuzzleMode {
    /// Today's puzzle.
    Daily,
    /// A puzzle picked by a seed.
    Random,
    /// A puzzle with a caller-chosen objective word.
    Custom,
}

impl FromStr for PuzzleMode {
    type Err = SolverError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(PuzzleMode::Daily),
            "random" => Ok(PuzzleMode::Random),
            "custom" => Ok(PuzzleMode::Custom),
            _ => Err(SolverError::InvalidMode(mode.to_string())),
        }
    }
}

impl fmt::Display for PuzzleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PuzzleMode::Daily => "daily",
            PuzzleMode::Random => "random",
            PuzzleMode::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Identifies the puzzle being solved. The same puzzle is sent with every guess.
#[derive(Debug, Eq, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Puzzle {
    mode: PuzzleMode,
    word_length: usize,
    seed: Option<u64>,
    custom_word: Option<String>,
}

impl Puzzle {
    /// Constructs a puzzle from its parts, parsing the mode.
    ///
    /// `seed` is only kept for `random` puzzles, defaulting to [`DEFAULT_SEED`].
    /// `custom_word` is only kept for `custom` puzzles, defaulting to [`DEFAULT_CUSTOM_WORD`];
    /// its length overrides `word_length`.
    ///
    /// ```
    /// use entropy_wordle_solver::Puzzle;
    /// use entropy_wordle_solver::PuzzleMode;
    ///
    /// let puzzle = Puzzle::new("custom", 5, None, Some("Crane")).unwrap();
    /// assert_eq!(puzzle.mode(), PuzzleMode::Custom);
    /// assert_eq!(puzzle.custom_word(), Some("crane"));
    ///
    /// assert!(Puzzle::new("weekly", 5, None, None).is_err());
    /// ```
    pub fn new(
        mode: &str,
        word_length: usize,
        seed: Option<u64>,
        custom_word: Option<&str>,
    ) -> Result<Puzzle, SolverError> {
        match mode.parse::<PuzzleMode>()? {
            PuzzleMode::Daily => Puzzle::daily(word_length),
            PuzzleMode::Random => Puzzle::random(word_length, seed.unwrap_or(DEFAULT_SEED)),
            PuzzleMode::Custom => Puzzle::custom(custom_word.unwrap_or(DEFAULT_CUSTOM_WORD)),
        }
    }

    pub fn daily(word_length: usize) -> Result<Puzzle, SolverError> {
        Puzzle::checked(PuzzleMode::Daily, word_length, None, None)
    }

    pub fn random(word_length: usize, seed: u64) -> Result<Puzzle, SolverError> {
        Puzzle::checked(PuzzleMode::Random, word_length, Some(seed), None)
    }

    /// A puzzle whose objective is `word`. The word is trimmed and lower-cased.
    pub fn custom(word: &str) -> Result<Puzzle, SolverError> {
        let word = word.trim().to_lowercase();
        Puzzle::checked(
            PuzzleMode::Custom,
            word.chars().count(),
            None,
            Some(word),
        )
    }

    fn checked(
        mode: PuzzleMode,
        word_length: usize,
        seed: Option<u64>,
        custom_word: Option<String>,
    ) -> Result<Puzzle, SolverError> {
        if word_length == 0 {
            return Err(SolverError::InvalidWordLength(word_length));
        }
        Ok(Puzzle {
            mode,
            word_length,
            seed,
            custom_word,
        })
    }

    pub fn mode(&self) -> PuzzleMode {
        self.mode
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn custom_word(&self) -> Option<&str> {
        self.custom_word.as_deref()
    }
}

/// One guess to be scored by a [`FeedbackOracle`].
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct GuessRequest<'a> {
    pub puzzle: &'a Puzzle,
    pub guess: &'a str,
}

/// Scores guesses against a hidden objective word.
///
/// Implementations own their transport, including any retries or timeouts. An `Err` means no
/// feedback is available for this guess, and ends the solve session.
pub trait FeedbackOracle {
    /// Returns one record per slot of the guess, in slot order.
    fn feedback(&mut self, request: &GuessRequest) -> Result<Vec<SlotFeedback>, SolverError>;
}

/// An oracle that scores guesses locally against a known objective word.
///
/// This is how `custom` puzzles are scored: the objective is whatever word the caller chose.
#[derive(Debug, Clone)]
pub struct TargetWordOracle {
    objective: String,
}

impl TargetWordOracle {
    pub fn new(objective: &str) -> TargetWordOracle {
        TargetWordOracle {
            objective: objective.trim().to_lowercase(),
        }
    }

    /// Builds an oracle for the objective of a `custom` puzzle.
    pub fn for_puzzle(puzzle: &Puzzle) -> Option<TargetWordOracle> {
        puzzle.custom_word().map(TargetWordOracle::new)
    }
}

impl FeedbackOracle for TargetWordOracle {
    fn feedback(&mut self, request: &GuessRequest) -> Result<Vec<SlotFeedback>, SolverError> {
        get_result_for_guess(&self.objective, request.guess).map_err(|_| {
            SolverError::OracleUnavailable(format!(
                "guess {:?} does not have the same length as the objective",
                request.guess
            ))
        })
    }
}
