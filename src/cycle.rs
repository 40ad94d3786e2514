//! The cycle operator, which applies a single move to a state. Every other transformation of a
//! puzzle (move derivation, combinations, applying algorithms) is built from it.

use crate::moves::Move;
use crate::piece::{PieceState, PieceType, Pieces};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The direction a move is applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Direction {
    /// Apply the move as is.
    Forward,
    /// Look the permutation up in reverse.
    Inverse,
}

impl PieceState {
    /// Apply the move `mv` (given as the state it produces from solved) to this state, returning
    /// the new state. Both states must belong to `ty`.
    ///
    /// Forwards, slot `i` receives the content of slot `mv.perm[i]`. Inversely, slot `i` receives
    /// the content of the slot `j` with `mv.perm[j] = i`. The orientation is computed the same
    /// way in both directions, as `orient[mv.perm[i]] + mv.orient[i]` modulo the orientation
    /// modulus. Inverse moves generated from solved carry the right twist already, but applying
    /// a move forwards then inversely to a twisted state does not restore its orientation.
    ///
    /// # Panics
    ///
    /// Panics if `self` or `mv` doesn't have `ty.count()` pieces.
    pub fn cycle(&self, mv: &PieceState, dir: Direction, ty: &PieceType) -> PieceState {
        assert!(
            self.len() == ty.count() && mv.len() == ty.count(),
            "cycling `{}` states of the wrong size",
            ty.name()
        );

        let perm = match dir {
            Direction::Forward => mv.perm.iter().map(|&j| self.perm[j as usize]).collect(),
            Direction::Inverse => {
                let mut inverse = vec![0u8; mv.perm.len()];
                for (j, &p) in mv.perm.iter().enumerate() {
                    inverse[p as usize] = j as u8;
                }
                inverse.iter().map(|&j| self.perm[j as usize]).collect()
            }
        };

        let modulus = ty.orientations() as u16;
        let orient = mv
            .perm
            .iter()
            .zip(&mv.orient)
            .map(|(&j, &twist)| ((self.orient[j as usize] as u16 + twist as u16) % modulus) as u8)
            .collect();

        PieceState { perm, orient }
    }
}

impl Pieces {
    /// Apply `mv` to every piece type of this state. Piece types the move doesn't touch are
    /// stored as the identity in `mv`, and so are left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if this state or `mv` wasn't built for `types`.
    pub fn cycle(&self, mv: &Move, dir: Direction, types: &[PieceType]) -> Pieces {
        assert!(
            self.0.len() == types.len() && mv.pieces().0.len() == types.len(),
            "cycling a state with the wrong piece types"
        );

        Pieces(
            self.0
                .iter()
                .zip(mv.pieces().iter())
                .zip(types)
                .map(|((state, m), ty)| state.cycle(m, dir, ty))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333;

    fn apply(pieces: &Pieces, label: &str, dir: Direction) -> Pieces {
        let def = cube333::definition();
        pieces.cycle(def.moves().get(label).unwrap(), dir, def.piece_types())
    }

    #[test]
    fn forward_remaps_slots() {
        let ty = PieceType::new("corners", 4, 3);
        let state = PieceState {
            perm: vec![0, 1, 2, 3],
            orient: vec![0, 1, 2, 0],
        };
        let mv = PieceState {
            perm: vec![3, 0, 1, 2],
            orient: vec![1, 0, 0, 2],
        };
        let result = state.cycle(&mv, Direction::Forward, &ty);
        assert_eq!(result.perm(), &[3, 0, 1, 2]);
        assert_eq!(result.orient(), &[1, 0, 1, 1]);
    }

    #[test]
    fn inverse_flips_lookup_only() {
        let ty = PieceType::new("corners", 4, 3);
        let state = PieceState::identity(4);
        let mv = PieceState {
            perm: vec![3, 0, 1, 2],
            orient: vec![1, 0, 0, 2],
        };
        let result = state.cycle(&mv, Direction::Inverse, &ty);
        assert_eq!(result.perm(), &[1, 2, 3, 0]);
        assert_eq!(result.orient(), &[1, 0, 0, 2]);
    }

    #[test]
    #[should_panic]
    fn mismatched_piece_types() {
        let def = cube333::definition();
        let other = Pieces::identity(&[PieceType::new("x", 2, 1)]);
        let _ = other.cycle(def.moves().get("R").unwrap(), Direction::Forward, def.piece_types());
    }

    #[test]
    #[should_panic]
    fn mismatched_piece_counts() {
        let ty = PieceType::new("corners", 4, 3);
        let mv = PieceState::identity(4);
        let _ = PieceState::identity(2).cycle(&mv, Direction::Forward, &ty);
    }

    #[test]
    fn untouched_types_unchanged() {
        let def = cube333::definition();
        let centers = def.piece_index("centers").unwrap();
        let after = apply(def.identity(), "R", Direction::Forward);
        assert!(after[centers].is_identity());
        assert!(!after.is_identity());
    }

    #[test]
    fn does_not_mutate_inputs() {
        let def = cube333::definition();
        let before = def.identity().clone();
        let _ = apply(def.identity(), "F", Direction::Forward);
        assert_eq!(&before, def.identity());
    }

    #[test]
    fn round_trip_from_solved() {
        let def = cube333::definition();
        for label in def.moves().labels() {
            let there = apply(def.identity(), label, Direction::Forward);
            let back = apply(&there, label, Direction::Inverse);
            assert_eq!(&back, def.identity(), "{label}");
        }
    }

    // Going forwards then inversely restores the permutation of any state, but the orientation of
    // a twisted state is remapped twice instead of being restored.
    #[test]
    fn round_trip_from_twisted() {
        let def = cube333::definition();
        let corners = def.piece_index("corners").unwrap();
        let twisted = apply(def.identity(), "R", Direction::Forward);
        assert_eq!(twisted[corners].orient(), &[0, 2, 1, 0, 0, 1, 2, 0]);

        let back = apply(
            &apply(&twisted, "U", Direction::Forward),
            "U",
            Direction::Inverse,
        );
        for (a, b) in back.iter().zip(twisted.iter()) {
            assert_eq!(a.perm(), b.perm());
        }
        assert_eq!(back[corners].orient(), &[1, 0, 0, 2, 0, 1, 2, 0]);
        assert_ne!(back, twisted);
    }

    use proptest::prelude::*;
    use proptest::sample::select;

    fn labels() -> Vec<&'static str> {
        cube333::definition().moves().labels().collect()
    }

    proptest! {
        #[test]
        fn every_move_permutes(label in select(labels()), dir in any::<Direction>()) {
            let after = apply(cube333::definition().identity(), label, dir);
            for state in after.iter() {
                prop_assert!(state.is_permutation());
            }
        }

        #[test]
        fn scrambled_states_stay_valid(
            scramble in proptest::collection::vec(select(labels()), 0..20),
            label in select(labels()),
            dir in any::<Direction>(),
        ) {
            let def = cube333::definition();
            let scrambled = scramble
                .iter()
                .fold(def.identity().clone(), |p, l| apply(&p, l, Direction::Forward));
            let after = apply(&scrambled, label, dir);
            for (state, ty) in after.iter().zip(def.piece_types()) {
                prop_assert!(state.is_permutation());
                prop_assert!(state.orient().iter().all(|&o| o < ty.orientations()));
            }
        }

        #[test]
        fn round_trip_restores_permutation(
            scramble in proptest::collection::vec(select(labels()), 0..20),
            label in select(labels()),
        ) {
            let def = cube333::definition();
            let scrambled = scramble
                .iter()
                .fold(def.identity().clone(), |p, l| apply(&p, l, Direction::Forward));
            let back = apply(&apply(&scrambled, label, Direction::Forward), label, Direction::Inverse);
            for (a, b) in back.iter().zip(scrambled.iter()) {
                prop_assert_eq!(a.perm(), b.perm());
            }
        }
    }
}
