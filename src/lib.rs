//! A library which models twisty puzzles as permutation groups acting on typed piece sets. Moves
//! are derived from a few hand written primitives, states are fingerprinted as signatures, and
//! signatures can be matched against wildcard patterns to find algorithms solving a given case.

#![deny(missing_docs)]

pub mod cube333;
pub mod cycle;
pub mod error;
pub mod moves;
pub mod piece;
pub mod puzzle;
pub mod search;
pub mod signature;
pub mod spec;

pub use cycle::Direction;
pub use error::{MatchError, SpecError, UnknownMoveError};
pub use moves::{Algorithm, Move, MoveTable};
pub use piece::{PieceState, PieceType, Pieces};
pub use puzzle::{Puzzle, PuzzleKind};
pub use spec::{Combination, Definition, MoveSpec, Specification};
