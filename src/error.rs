//! This module defines the error types used throughout the crate.

use thiserror::Error;

/// A move label was not present in the move table of a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown move `{label}`")]
pub struct UnknownMoveError {
    /// The offending label.
    pub label: String,
}

/// Error for a malformed puzzle specification. These are all detected while building a
/// [`Definition`](crate::spec::Definition), before any puzzle state exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// Two piece types share a name.
    #[error("piece type `{0}` is defined twice")]
    DuplicatePieceType(String),
    /// A move or the signature layout referred to a piece type that doesn't exist.
    #[error("unknown piece type `{name}` referenced by `{referenced_by}`")]
    UnknownPieceType {
        /// Name of the missing piece type.
        name: String,
        /// The move label (or `signature`) which referenced it.
        referenced_by: String,
    },
    /// A piece type had a zero count, a zero orientation modulus, or too many pieces.
    #[error("piece type `{0}` has an invalid count or orientation modulus")]
    InvalidPieceType(String),
    /// A permutation or orientation vector had the wrong length for its piece type.
    #[error("move `{label}` has a vector of length {found} for `{piece}`, expected {expected}")]
    BadLength {
        /// The move label.
        label: String,
        /// The piece type.
        piece: String,
        /// The piece count of the piece type.
        expected: usize,
        /// The length that was given.
        found: usize,
    },
    /// A permutation vector was not a bijection.
    #[error("move `{label}` does not permute the `{piece}` pieces")]
    NotAPermutation {
        /// The move label.
        label: String,
        /// The piece type.
        piece: String,
    },
    /// An orientation delta was not below the orientation modulus of its piece type.
    #[error("move `{label}` has an orientation out of range for `{piece}`")]
    OrientationOutOfRange {
        /// The move label.
        label: String,
        /// The piece type.
        piece: String,
    },
    /// A label was defined twice, either directly or through derivation (e.g. a primitive
    /// named `U2` next to a primitive `U`).
    #[error("move `{0}` is defined twice")]
    DuplicateLabel(String),
    /// A combination referenced a label which was unknown, or not derived yet.
    #[error("move `{referenced_by}` references unknown move `{label}`")]
    UnknownLabel {
        /// The label which couldn't be found.
        label: String,
        /// The combination or primitive key list which referenced it.
        referenced_by: String,
    },
    /// A combination with no moves in it.
    #[error("combination `{0}` is empty")]
    EmptyCombination(String),
    /// A fingerprinted piece type can't be written with the signature alphabet, either because
    /// it has more pieces than letters or an orientation modulus above 10.
    #[error("piece type `{0}` does not fit in the signature alphabet")]
    SignatureOverflow(String),
    /// The wildcard character is also a letter of the signature alphabet, or a digit.
    #[error("wildcard `{0}` clashes with the signature alphabet")]
    WildcardInAlphabet(char),
    /// The signature alphabet repeats a letter, or the delimiter is a digit or one of its
    /// letters, so signatures of different states could be written the same way.
    #[error("`{0}` is ambiguous in the signature layout")]
    AmbiguousLayout(char),
}

/// Error for matching and diffing signatures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Two signatures (or a pattern and a signature) had different lengths.
    #[error("signature has length {found}, expected {expected}")]
    LengthMismatch {
        /// The length of the first signature or the pattern.
        expected: usize,
        /// The length of the offending signature.
        found: usize,
    },
    /// Attempted to diff an empty collection of signatures.
    #[error("attempted to diff zero signatures")]
    Empty,
}
