//! The puzzle state container: a state of some [`Definition`] together with the moves that
//! produced it.

use log::trace;

use crate::cycle::Direction;
use crate::error::UnknownMoveError;
use crate::moves::Algorithm;
use crate::piece::Pieces;
use crate::signature;
use crate::spec::Definition;

/// A puzzle of some kind, with a process wide definition.
pub trait PuzzleKind {
    /// The definition shared by every puzzle of this kind.
    fn definition() -> &'static Definition;

    /// A solved puzzle.
    fn solved() -> Puzzle<'static> {
        Puzzle::new(Self::definition())
    }

    /// A puzzle scrambled by `alg`, applied all or nothing.
    fn from_alg(alg: &str) -> Result<Puzzle<'static>, UnknownMoveError> {
        Puzzle::from_alg(Self::definition(), alg)
    }
}

/// A puzzle state and the moves applied to reach it from solved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle<'d> {
    definition: &'d Definition,
    pieces: Pieces,
    history: Vec<&'d str>,
}

impl<'d> Puzzle<'d> {
    /// A solved puzzle.
    pub fn new(definition: &'d Definition) -> Self {
        Puzzle {
            definition,
            pieces: definition.identity().clone(),
            history: Vec::new(),
        }
    }

    /// Replay a space separated algorithm from solved. Every label is checked before anything is
    /// applied, so on error no puzzle is built.
    pub fn from_alg(definition: &'d Definition, alg: &str) -> Result<Self, UnknownMoveError> {
        Self::from_alg_split(definition, alg, " ")
    }

    /// Like [`from_alg`](Self::from_alg), splitting on `separator`.
    pub fn from_alg_split(
        definition: &'d Definition,
        alg: &str,
        separator: &str,
    ) -> Result<Self, UnknownMoveError> {
        let alg = Algorithm::parse(definition.moves(), alg, separator)?;
        let mut puzzle = Puzzle::new(definition);
        for label in alg.iter() {
            puzzle.do_move(label)?;
        }
        Ok(puzzle)
    }

    /// Apply the move `label`. If it isn't in the move table the puzzle is left untouched.
    pub fn do_move(&mut self, label: &str) -> Result<&mut Self, UnknownMoveError> {
        let (label, mv) =
            self.definition
                .moves()
                .get_key_value(label)
                .ok_or_else(|| UnknownMoveError {
                    label: label.to_owned(),
                })?;

        trace!("{}: {label}", self.definition.name());
        self.pieces = self
            .pieces
            .cycle(mv, Direction::Forward, self.definition.piece_types());
        self.history.push(label);
        Ok(self)
    }

    /// Apply a space separated sequence of moves. See [`do_moves_split`](Self::do_moves_split).
    pub fn do_moves(&mut self, moves: &str) -> Result<&mut Self, UnknownMoveError> {
        self.do_moves_split(moves, " ")
    }

    /// Apply a sequence of moves split on `separator`, ignoring empty tokens. This stops at the
    /// first unknown label, leaving the moves before it applied; use
    /// [`from_alg`](Self::from_alg) or [`Algorithm::parse`] first for all or nothing behaviour.
    pub fn do_moves_split(
        &mut self,
        moves: &str,
        separator: &str,
    ) -> Result<&mut Self, UnknownMoveError> {
        for label in moves.split(separator).filter(|l| !l.is_empty()) {
            self.do_move(label)?;
        }
        Ok(self)
    }

    /// The moves applied so far, joined by single spaces.
    pub fn alg(&self) -> String {
        self.history.join(" ")
    }

    /// The moves applied so far.
    pub fn moves(&self) -> &[&'d str] {
        &self.history
    }

    /// The current state of every piece type.
    pub fn pieces(&self) -> &Pieces {
        &self.pieces
    }

    /// The signature of the current state.
    pub fn signature(&self) -> String {
        signature::serialize(self.definition, &self.pieces)
    }

    /// Whether the puzzle is solved, centers included.
    pub fn is_solved(&self) -> bool {
        self.pieces == *self.definition.identity()
    }

    /// The definition of this puzzle.
    pub fn definition(&self) -> &'d Definition {
        self.definition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::{self, Cube333, SOLVED};

    #[test]
    fn u_loop() {
        let mut cube = Cube333::solved();
        for _ in 0..4 {
            cube.do_move("U").unwrap();
        }
        assert!(cube.is_solved());

        let mut cube = Cube333::solved();
        cube.do_move("U2").unwrap().do_move("U2").unwrap();
        assert!(cube.is_solved());
        assert_eq!(cube.alg(), "U2 U2");
    }

    #[test]
    fn every_move_has_finite_order() {
        let def = cube333::definition();
        for label in def.moves().labels() {
            let mut cube = Puzzle::new(def);
            for _ in 0..4 {
                cube.do_move(label).unwrap();
            }
            assert!(cube.is_solved(), "{label}");
        }
    }

    #[test]
    fn every_move_has_an_inverse() {
        let def = cube333::definition();
        for label in def.moves().labels() {
            let alg = Algorithm::parse(def.moves(), label, " ").unwrap();
            let inverse = alg.inverse(def.moves()).unwrap();
            let mut cube = Puzzle::new(def);
            cube.do_moves(&alg.to_string()).unwrap();
            cube.do_moves(&inverse.to_string()).unwrap();
            assert!(cube.is_solved(), "{label} {inverse}");
        }
    }

    #[test]
    fn alg_is_normalized() {
        let cube = Cube333::from_alg("R U R' U'").unwrap();
        assert_eq!(cube.alg(), "R U R' U'");
        assert_eq!(cube.moves(), &["R", "U", "R'", "U'"]);

        let cube = Cube333::from_alg("  R   U ").unwrap();
        assert_eq!(cube.alg(), "R U");

        let cube = Puzzle::from_alg_split(cube333::definition(), "R,U,R',U'", ",").unwrap();
        assert_eq!(cube.alg(), "R U R' U'");
    }

    #[test]
    fn empty_alg_is_solved() {
        let cube = Cube333::from_alg("").unwrap();
        assert!(cube.is_solved());
        assert_eq!(cube.alg(), "");
        assert_eq!(cube.signature(), SOLVED);
    }

    #[test]
    fn unknown_move_leaves_state() {
        let mut cube = Cube333::from_alg("R U").unwrap();
        let before = cube.clone();
        assert_eq!(
            cube.do_move("Q").unwrap_err(),
            UnknownMoveError {
                label: "Q".to_owned()
            }
        );
        assert_eq!(cube, before);
    }

    #[test]
    fn do_moves_stops_at_failure() {
        let mut cube = Cube333::solved();
        assert!(cube.do_moves("R U Rw F").is_err());
        assert_eq!(cube.alg(), "R U");
        assert_eq!(cube.signature(), Cube333::from_alg("R U").unwrap().signature());
    }

    #[test]
    fn do_moves_ignores_empty_tokens() {
        let mut cube = Cube333::solved();
        cube.do_moves("R  U ").unwrap();
        assert_eq!(cube.moves(), &["R", "U"]);

        let mut cube = Cube333::solved();
        cube.do_moves("").unwrap();
        assert!(cube.moves().is_empty());
        assert!(cube.is_solved());

        // Whitespace that isn't the separator is part of a token, and isn't a known move.
        let mut cube = Cube333::solved();
        assert_eq!(
            cube.do_moves("R \tU").unwrap_err(),
            UnknownMoveError {
                label: "\tU".to_owned()
            }
        );
        assert_eq!(cube.alg(), "R");
    }

    #[test]
    fn from_alg_is_atomic() {
        assert_eq!(
            Cube333::from_alg("R U Rw F"),
            Err(UnknownMoveError {
                label: "Rw".to_owned()
            })
        );
    }

    #[test_log::test]
    fn sexy_move_order() {
        let mut cube = Cube333::solved();
        for _ in 0..6 {
            cube.do_moves("R U R' U'").unwrap();
        }
        assert!(cube.is_solved());
        assert_eq!(cube.moves().len(), 24);
    }

    #[test]
    fn rotations_are_not_solved() {
        // A whole cube rotation moves pieces around, so it isn't solved in this model.
        let cube = Cube333::from_alg("y2").unwrap();
        assert_eq!(
            cube.signature(),
            "C0D0A0B0G0H0E0F0-C0D0A0B0G0H0E0F0K0L0I0J0"
        );
        assert!(!cube.is_solved());
    }

    #[test]
    fn known_cases() {
        let sig = |alg: &str| Cube333::from_alg(alg).unwrap().signature();
        // T perm
        assert_eq!(
            sig("R U R' U' R' F R2 U' R' U' R U R' F'"),
            "A0C0B0D0E0F0G0H0-A0D0C0B0E0F0G0H0I0J0K0L0"
        );
        // Aa perm, two ways
        assert_eq!(
            sig("x R' U R' D2 R U' R' D2 R2 x'"),
            "C0A0B0D0E0F0G0H0-A0B0C0D0E0F0G0H0I0J0K0L0"
        );
        assert_eq!(
            sig("l' U R' D2 R U' R' D2 R2 x'"),
            sig("x R' U R' D2 R U' R' D2 R2 x'")
        );
    }
}
