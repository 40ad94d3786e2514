//! Moves, the table of every move a puzzle knows, and algorithms made of those moves.

mod generator;

pub use generator::generate;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::error::{SpecError, UnknownMoveError};
use crate::piece::Pieces;

/// A move, stored as the state it produces when applied to the solved puzzle. Piece types the move
/// doesn't touch hold the identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move(pub(crate) Pieces);

impl Move {
    /// The permutation and orientation delta of every piece type.
    pub fn pieces(&self) -> &Pieces {
        &self.0
    }
}

impl From<Pieces> for Move {
    fn from(pieces: Pieces) -> Move {
        Move(pieces)
    }
}

/// Every move of a puzzle, by label. A table is filled once by [`generate`] and is read only
/// afterwards; labels can't be redefined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveTable(BTreeMap<String, Move>);

impl MoveTable {
    pub(crate) fn insert(&mut self, label: String, mv: Move) -> Result<(), SpecError> {
        match self.0.entry(label) {
            Entry::Occupied(e) => Err(SpecError::DuplicateLabel(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(mv);
                Ok(())
            }
        }
    }

    pub(crate) fn lookup(&self, label: &str, referenced_by: &str) -> Result<&Move, SpecError> {
        self.get(label).ok_or_else(|| SpecError::UnknownLabel {
            label: label.to_owned(),
            referenced_by: referenced_by.to_owned(),
        })
    }

    /// Get the move with the given label.
    pub fn get(&self, label: &str) -> Option<&Move> {
        self.0.get(label)
    }

    /// Get the move with the given label, along with the table's own copy of the label.
    pub fn get_key_value(&self, label: &str) -> Option<(&str, &Move)> {
        self.0.get_key_value(label).map(|(k, v)| (k.as_str(), v))
    }

    /// Whether the table has a move with the given label.
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    /// All labels, in lexicographic order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// All moves with their labels, in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Move)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The number of moves.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A sequence of moves (also known as an algorithm), every one of which is known to be in the
/// move table it was parsed against. The labels are borrowed from that table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Algorithm<'t>(pub Vec<&'t str>);

impl<'t> Algorithm<'t> {
    /// Split `text` on `separator` and look every label up in `table`. Empty tokens, e.g. from
    /// doubled separators, are ignored. Fails on the first unknown label.
    pub fn parse(
        table: &'t MoveTable,
        text: &str,
        separator: &str,
    ) -> Result<Algorithm<'t>, UnknownMoveError> {
        text.split(separator)
            .filter(|token| !token.is_empty())
            .map(|token| {
                table
                    .get_key_value(token)
                    .map(|(label, _)| label)
                    .ok_or_else(|| UnknownMoveError {
                        label: token.to_owned(),
                    })
            })
            .collect::<Result<_, _>>()
            .map(Algorithm)
    }

    /// Invert an algorithm, reversing it and replacing each move with its inverse: `X` and `X'`
    /// are swapped and `X2` is kept. Fails if an inverse label isn't in `table`.
    pub fn inverse(&self, table: &'t MoveTable) -> Result<Algorithm<'t>, UnknownMoveError> {
        self.0
            .iter()
            .rev()
            .map(|&label| {
                let inverse = match label.strip_suffix('\'') {
                    Some(base) => base.to_owned(),
                    None if label.ends_with('2') => label.to_owned(),
                    None => format!("{label}'"),
                };
                table
                    .get_key_value(&inverse)
                    .map(|(label, _)| label)
                    .ok_or(UnknownMoveError { label: inverse })
            })
            .collect::<Result<_, _>>()
            .map(Algorithm)
    }

    /// The number of moves.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the algorithm has no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the labels.
    pub fn iter(&self) -> impl Iterator<Item = &'t str> + '_ {
        self.0.iter().copied()
    }
}

impl std::fmt::Display for Algorithm<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}
