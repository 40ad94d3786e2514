//! The piece model. A puzzle is described by a list of [`PieceType`]s, and its state by one
//! [`PieceState`] (a permutation and an orientation vector) per piece type.

use crate::error::SpecError;

/// A category of pieces sharing one permutation and orientation space, e.g. the corners of a
/// 3x3x3.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceType {
    name: String,
    count: usize,
    orientations: u8,
}

impl PieceType {
    /// Create a piece type with `count` pieces, each of which can be in one of `orientations`
    /// rotational states. Piece types without a meaningful orientation use a modulus of 1.
    pub fn new(name: impl Into<String>, count: usize, orientations: u8) -> Self {
        PieceType {
            name: name.into(),
            count,
            orientations,
        }
    }

    /// The name of this piece type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of pieces of this type.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The orientation modulus of this piece type.
    pub fn orientations(&self) -> u8 {
        self.orientations
    }

    // Pieces are stored as u8, so we can't have more than 256 of them.
    pub(crate) fn validate(&self) -> Result<(), SpecError> {
        if self.count == 0 || self.count > 256 || self.orientations == 0 {
            return Err(SpecError::InvalidPieceType(self.name.clone()));
        }
        Ok(())
    }
}

/// The state of all pieces of one [`PieceType`].
///
/// `perm[i]` is the piece currently occupying slot `i`, and `orient[i]` is the orientation of that
/// piece, which is always less than the orientation modulus of the piece type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceState {
    pub(crate) perm: Vec<u8>,
    pub(crate) orient: Vec<u8>,
}

impl PieceState {
    /// The solved state for `count` pieces.
    pub fn identity(count: usize) -> PieceState {
        PieceState {
            perm: (0..count).map(|i| i as u8).collect(),
            orient: vec![0; count],
        }
    }

    /// Build a state for `ty` from an optional permutation and an optional orientation vector,
    /// checking that both are well formed. Missing vectors default to the identity permutation
    /// and no twist respectively. `label` is only used for error reporting.
    pub fn from_parts(
        label: &str,
        ty: &PieceType,
        perm: Option<Vec<u8>>,
        orient: Option<Vec<u8>>,
    ) -> Result<PieceState, SpecError> {
        let identity = PieceState::identity(ty.count());
        let state = PieceState {
            perm: perm.unwrap_or(identity.perm),
            orient: orient.unwrap_or(identity.orient),
        };

        for len in [state.perm.len(), state.orient.len()] {
            if len != ty.count() {
                return Err(SpecError::BadLength {
                    label: label.to_owned(),
                    piece: ty.name().to_owned(),
                    expected: ty.count(),
                    found: len,
                });
            }
        }

        if !state.is_permutation() {
            return Err(SpecError::NotAPermutation {
                label: label.to_owned(),
                piece: ty.name().to_owned(),
            });
        }

        if state.orient.iter().any(|&o| o >= ty.orientations()) {
            return Err(SpecError::OrientationOutOfRange {
                label: label.to_owned(),
                piece: ty.name().to_owned(),
            });
        }

        Ok(state)
    }

    /// The permutation vector.
    pub fn perm(&self) -> &[u8] {
        &self.perm
    }

    /// The orientation vector.
    pub fn orient(&self) -> &[u8] {
        &self.orient
    }

    /// The number of pieces.
    pub fn len(&self) -> usize {
        self.perm.len()
    }

    /// Whether there are no pieces at all. This never holds for a validated piece type.
    pub fn is_empty(&self) -> bool {
        self.perm.is_empty()
    }

    /// Whether the permutation vector is a bijection on `0..len`.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.perm.len()];
        for &p in &self.perm {
            match seen.get_mut(p as usize) {
                Some(s) if !*s => *s = true,
                _ => return false,
            }
        }
        true
    }

    /// Whether every piece is in its home slot with no twist.
    pub fn is_identity(&self) -> bool {
        self.perm.iter().enumerate().all(|(i, &p)| i == p as usize)
            && self.orient.iter().all(|&o| o == 0)
    }
}

/// The state of every piece type of a puzzle, indexed in the order the piece types were declared
/// in the [`Specification`](crate::spec::Specification).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pieces(pub(crate) Vec<PieceState>);

impl Pieces {
    /// The solved state of a puzzle made of the given piece types.
    pub fn identity(types: &[PieceType]) -> Pieces {
        Pieces(types.iter().map(|ty| PieceState::identity(ty.count())).collect())
    }

    /// Get the state of the piece type at `index`.
    pub fn get(&self, index: usize) -> Option<&PieceState> {
        self.0.get(index)
    }

    /// Iterate over the piece states in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &PieceState> {
        self.0.iter()
    }

    /// Whether every piece type is solved.
    pub fn is_identity(&self) -> bool {
        self.0.iter().all(PieceState::is_identity)
    }
}

impl std::ops::Index<usize> for Pieces {
    type Output = PieceState;

    fn index(&self, index: usize) -> &PieceState {
        &self.0[index]
    }
}
