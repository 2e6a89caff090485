use crate::data::WordSource;
use crate::fallback::generate_candidates;
use crate::fallback::DEFAULT_FALLBACK_WORDS;
use crate::oracle::FeedbackOracle;
use crate::oracle::GuessRequest;
use crate::oracle::Puzzle;
use crate::restrictions::filter_words;
use crate::restrictions::ConstraintState;
use crate::results::*;
use crate::scorers::select_guess;
use log::debug;
use log::info;
use log::warn;
use rand::Rng;
use std::result::Result;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunes a [`Solver`].
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// The number of guesses the oracle may score before the session gives up.
    pub max_attempts: u32,
    /// Each guess is picked at random from this many of the highest-entropy candidates.
    pub top_n: usize,
    /// How many candidates to generate when no known word fits the restrictions.
    pub fallback_words: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_attempts: 100,
            top_n: 3,
            fallback_words: DEFAULT_FALLBACK_WORDS,
        }
    }
}

/// Where a solve session currently is.
#[derive(Debug, PartialEq, Clone)]
pub enum SolveState {
    /// Nothing has been guessed yet.
    Init,
    /// Waiting for the next guess to be made.
    Guessing,
    /// Ended with the given outcome.
    Done(SolveOutcome),
}

/// One attempt at solving one puzzle. Holds the candidate pool and everything learned so far.
///
/// Most callers should use [`Solver::solve`], which drives a session to completion. A session
/// can also be advanced one guess at a time with [`SolveSession::step`].
pub struct SolveSession<'a> {
    puzzle: &'a Puzzle,
    config: SolverConfig,
    pool: Vec<Arc<str>>,
    constraints: ConstraintState,
    guesses: Vec<Arc<str>>,
    state: SolveState,
}

impl<'a> SolveSession<'a> {
    /// Starts a session, drawing the initial pool from the given source.
    pub fn new<S>(source: &S, puzzle: &'a Puzzle, config: SolverConfig) -> SolveSession<'a>
    where
        S: WordSource + ?Sized,
    {
        let pool = source.words_of_length(puzzle.word_length());
        debug!(
            "starting {} puzzle with {} candidate words of length {}",
            puzzle.mode(),
            pool.len(),
            puzzle.word_length()
        );
        SolveSession {
            puzzle,
            config,
            pool,
            constraints: ConstraintState::new(),
            guesses: Vec::new(),
            state: SolveState::Init,
        }
    }

    pub fn state(&self) -> &SolveState {
        &self.state
    }

    /// The words that are still consistent with every piece of feedback.
    pub fn pool(&self) -> &[Arc<str>] {
        &self.pool
    }

    pub fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    /// The guesses scored so far.
    pub fn guesses(&self) -> &[Arc<str>] {
        &self.guesses
    }

    /// Makes one guess and applies its feedback, returning the new state.
    ///
    /// Once the session is done, this has no effect.
    pub fn step<O, R>(&mut self, oracle: &mut O, rng: &mut R) -> Result<&SolveState, SolverError>
    where
        O: FeedbackOracle + ?Sized,
        R: Rng + ?Sized,
    {
        if let SolveState::Done(_) = self.state {
            return Ok(&self.state);
        }
        if self.guesses.len() >= self.config.max_attempts as usize {
            warn!(
                "could not solve the word within {} attempts",
                self.config.max_attempts
            );
            self.state = SolveState::Done(SolveOutcome::Exhausted(self.guesses.clone()));
            return Ok(&self.state);
        }
        self.state = SolveState::Guessing;

        if self.pool.is_empty() {
            warn!(
                "no candidate words remain, generating {} fallback words",
                self.config.fallback_words
            );
            self.pool = generate_candidates(
                self.puzzle.word_length(),
                &self.constraints,
                self.config.fallback_words,
                rng,
            )?;
        }

        let guess = select_guess(&self.pool, self.config.top_n, rng)?;
        let request = GuessRequest {
            puzzle: self.puzzle,
            guess: &guess,
        };
        let feedback = match oracle.feedback(&request) {
            Ok(feedback) => feedback,
            Err(error) => {
                warn!("no feedback for guess {:?}: {}", guess, error);
                return Ok(self.fail(error));
            }
        };
        self.guesses.push(Arc::clone(&guess));
        info!(
            "attempt {}: guess = {}, feedback = {}",
            self.guesses.len(),
            guess,
            feedback_pattern(&feedback)
        );

        if let Err(error) = validate_feedback(&feedback, self.puzzle.word_length()) {
            warn!("unusable feedback for guess {:?}: {}", guess, error);
            return Ok(self.fail(error));
        }
        if is_all_correct(&feedback) {
            info!(
                "solved the word {:?} in {} attempts",
                guess,
                self.guesses.len()
            );
            self.state = SolveState::Done(SolveOutcome::Solved(self.guesses.clone()));
            return Ok(&self.state);
        }

        self.constraints
            .update(&feedback, self.puzzle.word_length())?;
        self.pool = filter_words(&self.pool, &self.constraints);
        debug!("{} candidate words remain", self.pool.len());
        Ok(&self.state)
    }

    fn fail(&mut self, error: SolverError) -> &SolveState {
        self.state = SolveState::Done(SolveOutcome::OracleFailed {
            guesses: self.guesses.clone(),
            reason: error.to_string(),
        });
        &self.state
    }
}

/// Solves puzzles using words from a [`WordSource`].
pub struct Solver<'a, S: ?Sized> {
    source: &'a S,
    config: SolverConfig,
}

impl<'a, S> Solver<'a, S>
where
    S: WordSource + ?Sized,
{
    /// Constructs a solver with the default [`SolverConfig`].
    pub fn new(source: &'a S) -> Solver<'a, S> {
        Solver::with_config(source, SolverConfig::default())
    }

    pub fn with_config(source: &'a S, config: SolverConfig) -> Solver<'a, S> {
        Solver { source, config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Guesses until the oracle confirms a word, the oracle fails, or the configured number of
    /// attempts is used up.
    ///
    /// Oracle failures end the session with [`SolveOutcome::OracleFailed`] rather than an `Err`.
    /// An `Err` is only returned when the session can't continue at all, e.g. when contradictory
    /// feedback rules out every letter.
    ///
    /// ```
    /// use entropy_wordle_solver::*;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let bank = WordBank::from_iterator(["crane", "stone", "store", "spore"]);
    /// let puzzle = Puzzle::custom("store").unwrap();
    /// let mut oracle = TargetWordOracle::for_puzzle(&puzzle).unwrap();
    /// let mut rng = StdRng::seed_from_u64(1);
    ///
    /// let outcome = Solver::new(&bank).solve(&puzzle, &mut oracle, &mut rng).unwrap();
    ///
    /// assert_eq!(outcome.solution(), Some("store"));
    /// ```
    pub fn solve<O, R>(
        &self,
        puzzle: &Puzzle,
        oracle: &mut O,
        rng: &mut R,
    ) -> Result<SolveOutcome, SolverError>
    where
        O: FeedbackOracle + ?Sized,
        R: Rng + ?Sized,
    {
        let mut session = SolveSession::new(self.source, puzzle, self.config);
        // One extra step lets the session record exhaustion once every attempt is used.
        for _ in 0..=self.config.max_attempts {
            if let SolveState::Done(outcome) = session.step(oracle, rng)? {
                return Ok(outcome.clone());
            }
        }
        Ok(SolveOutcome::Exhausted(session.guesses))
    }
}
