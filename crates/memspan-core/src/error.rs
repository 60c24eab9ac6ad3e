//! Core error types.

use thiserror::Error;

/// Pool precondition violations, detected when a generator is built over
/// custom pools. The built-in pools satisfy every precondition, so quiz
/// generation itself has no failure path.
#[derive(Debug, Error)]
pub enum PoolError {
    /// A pool has fewer entries than the sampler needs.
    #[error("{pool} pool too small: need {need}, have {have}")]
    TooSmall {
        pool: &'static str,
        need: usize,
        have: usize,
    },

    /// The word pool repeats an entry, which would break the
    /// distinct-words invariant.
    #[error("word pool contains duplicate entry: {word}")]
    DuplicateWord { word: String },
}
