#![cfg_attr(feature = "unstable", feature(test))]

//! Solves Wordle-style puzzles that are scored by an external feedback oracle.
//!
//! Each guess is one of the highest-entropy words left in the candidate pool. The oracle's
//! feedback narrows the pool, and when no known word fits any more, candidates are generated
//! directly from what has been learned.

mod data;
mod engine;
mod fallback;
mod oracle;
mod restrictions;
mod results;
mod scorers;

pub use data::LetterFrequencies;
pub use data::WordBank;
pub use data::WordSource;
pub use engine::*;
pub use fallback::*;
pub use oracle::*;
pub use restrictions::*;
pub use results::*;
pub use scorers::*;
