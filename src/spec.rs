//! Declarative puzzle specifications, and the validated [`Definition`] built from them.
//!
//! A [`Specification`] lists the piece types of a puzzle, a handful of hand written primitive
//! moves, which of those to derive double turns and inverses for, and combination rules for
//! compound moves. Turning it into a [`Definition`] checks it and generates the full move table
//! once; every [`Puzzle`](crate::puzzle::Puzzle) of that definition then shares it by reference.

use std::collections::HashSet;

use log::debug;

use crate::error::SpecError;
use crate::moves::{generate, Move, MoveTable};
use crate::piece::{PieceState, PieceType, Pieces};
use crate::signature::SignatureLayout;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PieceMove {
    perm: Option<Vec<u8>>,
    orient: Option<Vec<u8>>,
}

/// A hand written move, given as a permutation and orientation delta per piece type. Piece types
/// that aren't mentioned are left alone by the move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSpec {
    label: String,
    parts: Vec<(String, PieceMove)>,
}

impl MoveSpec {
    /// Start a move which does nothing.
    pub fn new(label: impl Into<String>) -> Self {
        MoveSpec {
            label: label.into(),
            parts: Vec::new(),
        }
    }

    /// Set the permutation of `piece`: slot `i` receives the content of slot `perm[i]`.
    pub fn permute(mut self, piece: &str, perm: impl Into<Vec<u8>>) -> Self {
        self.part(piece).perm = Some(perm.into());
        self
    }

    /// Set the orientation delta of `piece`, added to each slot after permuting.
    pub fn twist(mut self, piece: &str, orient: impl Into<Vec<u8>>) -> Self {
        self.part(piece).orient = Some(orient.into());
        self
    }

    /// The label of this move.
    pub fn label(&self) -> &str {
        &self.label
    }

    fn part(&mut self, piece: &str) -> &mut PieceMove {
        let index = match self.parts.iter().position(|(name, _)| name == piece) {
            Some(index) => index,
            None => {
                self.parts.push((piece.to_owned(), PieceMove::default()));
                self.parts.len() - 1
            }
        };
        &mut self.parts[index].1
    }

    pub(crate) fn build(&self, types: &[PieceType]) -> Result<Move, SpecError> {
        if let Some((name, _)) = self
            .parts
            .iter()
            .find(|(name, _)| !types.iter().any(|ty| ty.name() == name))
        {
            return Err(SpecError::UnknownPieceType {
                name: name.clone(),
                referenced_by: self.label.clone(),
            });
        }

        types
            .iter()
            .map(|ty| match self.parts.iter().find(|(name, _)| name == ty.name()) {
                Some((_, part)) => {
                    PieceState::from_parts(&self.label, ty, part.perm.clone(), part.orient.clone())
                }
                None => Ok(PieceState::identity(ty.count())),
            })
            .collect::<Result<_, _>>()
            .map(|states| Move(Pieces(states)))
    }
}

/// A compound move, defined as the moves of `moves` performed in order from solved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    label: String,
    moves: Vec<String>,
}

impl Combination {
    /// Define `label` as the given sequence of already known moves.
    pub fn new<S: Into<String>>(label: impl Into<String>, moves: impl IntoIterator<Item = S>) -> Self {
        Combination {
            label: label.into(),
            moves: moves.into_iter().map(Into::into).collect(),
        }
    }

    /// The label of the compound move.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The labels this move is made from.
    pub fn moves(&self) -> &[String] {
        &self.moves
    }
}

/// The full description of a puzzle, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specification {
    name: String,
    piece_types: Vec<PieceType>,
    primitives: Vec<MoveSpec>,
    primitive_keys: Vec<String>,
    combinations: Vec<Combination>,
    signature: SignatureLayout,
}

impl Specification {
    /// Start a specification with the given piece types and no moves. The signature covers every
    /// piece type in order until [`signature`](Self::signature) is called.
    pub fn new(name: impl Into<String>, piece_types: Vec<PieceType>) -> Self {
        let signature = SignatureLayout::new(piece_types.iter().map(PieceType::name));
        Specification {
            name: name.into(),
            piece_types,
            primitives: Vec::new(),
            primitive_keys: Vec::new(),
            combinations: Vec::new(),
            signature,
        }
    }

    /// Add a primitive move.
    pub fn primitive(mut self, mv: MoveSpec) -> Self {
        self.primitives.push(mv);
        self
    }

    /// Derive double turns and inverses for the given primitive labels, in order.
    pub fn derive<S: Into<String>>(mut self, keys: impl IntoIterator<Item = S>) -> Self {
        self.primitive_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Add a compound move. Combinations are built in the order they are added, after the
    /// primitive derivations.
    pub fn combination(mut self, combination: Combination) -> Self {
        self.combinations.push(combination);
        self
    }

    /// Set the signature layout.
    pub fn signature(mut self, layout: SignatureLayout) -> Self {
        self.signature = layout;
        self
    }

    /// The name of the puzzle.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The piece types, in declaration order.
    pub fn piece_types(&self) -> &[PieceType] {
        &self.piece_types
    }

    /// The primitive moves.
    pub fn primitives(&self) -> &[MoveSpec] {
        &self.primitives
    }

    /// The labels which get double turns and inverses derived.
    pub fn primitive_keys(&self) -> &[String] {
        &self.primitive_keys
    }

    /// The compound moves.
    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    /// The signature layout.
    pub fn signature_layout(&self) -> &SignatureLayout {
        &self.signature
    }

    fn validate_piece_types(&self) -> Result<(), SpecError> {
        let mut names = HashSet::new();
        for ty in &self.piece_types {
            ty.validate()?;
            if !names.insert(ty.name()) {
                return Err(SpecError::DuplicatePieceType(ty.name().to_owned()));
            }
        }
        Ok(())
    }
}

/// A validated puzzle: its specification, the generated move table and the solved state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    spec: Specification,
    moves: MoveTable,
    identity: Pieces,
    fingerprint: Vec<usize>,
}

impl Definition {
    /// Validate a specification and generate its move table.
    pub fn new(spec: Specification) -> Result<Definition, SpecError> {
        spec.validate_piece_types()?;
        let fingerprint = spec.signature.resolve(&spec.piece_types)?;
        let moves = generate(&spec)?;
        let identity = Pieces::identity(&spec.piece_types);

        debug!("{}: generated {} moves", spec.name(), moves.len());

        Ok(Definition {
            spec,
            moves,
            identity,
            fingerprint,
        })
    }

    /// The name of the puzzle.
    pub fn name(&self) -> &str {
        self.spec.name()
    }

    /// The specification this definition was built from.
    pub fn specification(&self) -> &Specification {
        &self.spec
    }

    /// The piece types, in declaration order.
    pub fn piece_types(&self) -> &[PieceType] {
        self.spec.piece_types()
    }

    /// The index of the piece type with the given name.
    pub fn piece_index(&self, name: &str) -> Option<usize> {
        self.piece_types().iter().position(|ty| ty.name() == name)
    }

    /// Every move of the puzzle.
    pub fn moves(&self) -> &MoveTable {
        &self.moves
    }

    /// The solved state.
    pub fn identity(&self) -> &Pieces {
        &self.identity
    }

    /// The signature layout.
    pub fn signature_layout(&self) -> &SignatureLayout {
        self.spec.signature_layout()
    }

    /// Indices of the piece types in the signature, in signature order.
    pub(crate) fn fingerprint(&self) -> &[usize] {
        &self.fingerprint
    }

    /// The signature of the solved state.
    pub fn solved_signature(&self) -> String {
        crate::signature::serialize(self, &self.identity)
    }
}
