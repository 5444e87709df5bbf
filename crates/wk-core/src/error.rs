//! Error types for dice, games, and analysis.

use thiserror::Error;

use crate::face::Face;

/// Result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

/// Errors that can occur when building or running dice experiments.
#[derive(Debug, Error)]
pub enum DiceError {
    /// A die needs at least one face.
    #[error("a die needs at least one face")]
    NoFaces,

    /// A face appears more than once in a face list.
    #[error("duplicate face: {0}")]
    DuplicateFace(Face),

    /// A face list mixes numeric and textual faces.
    #[error("faces must be all numeric or all textual")]
    MixedFaces,

    /// A weight change referenced a face the die does not have.
    #[error("unknown face: {0}")]
    UnknownFace(Face),

    /// A weight was NaN or infinite.
    #[error("weight must be finite, got {0}")]
    NonFiniteWeight(f64),

    /// The weight vector cannot be normalized into probabilities.
    #[error("weights do not form a valid probability distribution")]
    DegenerateWeights,

    /// A game needs at least one die.
    #[error("a game needs at least one die")]
    NoDice,

    /// Dice in a game disagree on their face sets.
    #[error("dice in a game must share the same faces")]
    MismatchedDice,

    /// Results were requested before any successful play.
    #[error("no game has been played yet")]
    NoResultsYet,

    /// An unrecognized layout selector.
    #[error("invalid layout '{0}', use 'wide' or 'narrow'")]
    InvalidLayout(String),
}
