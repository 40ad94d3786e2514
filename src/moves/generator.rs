//! Expansion of a small table of primitive moves into the full move vocabulary of a puzzle.

use log::debug;

use super::{Move, MoveTable};
use crate::cycle::Direction;
use crate::error::SpecError;
use crate::piece::{PieceType, Pieces};
use crate::spec::{Combination, Specification};

/// Build the move table of a specification. This happens in a fixed order, as later moves may be
/// defined in terms of earlier ones:
///
/// 1. every primitive move is added as is;
/// 2. each primitive key `K` gets a double turn `K2` (`K` applied to `K`) and an inverse `K'` (`K`
///    applied inversely to solved);
/// 3. each combination is folded left to right with the cycle operator and added under its label;
/// 4. each combination label gets its own double turn and inverse, as in step 2.
///
/// A combination can only use labels which exist by the time it is reached.
pub fn generate(spec: &Specification) -> Result<MoveTable, SpecError> {
    let types = spec.piece_types();
    let identity = Pieces::identity(types);
    let mut table = MoveTable::default();

    for primitive in spec.primitives() {
        table.insert(primitive.label().to_owned(), primitive.build(types)?)?;
    }

    derive_powers(
        &mut table,
        spec.primitive_keys().iter().map(String::as_str),
        types,
        &identity,
    )?;

    for combination in spec.combinations() {
        let mv = combine(&table, combination, types)?;
        debug!(
            "{}: combined {} into {}",
            spec.name(),
            combination.moves().join(" "),
            combination.label()
        );
        table.insert(combination.label().to_owned(), mv)?;
    }

    derive_powers(
        &mut table,
        spec.combinations().iter().map(Combination::label),
        types,
        &identity,
    )?;

    Ok(table)
}

fn derive_powers<'a>(
    table: &mut MoveTable,
    keys: impl IntoIterator<Item = &'a str>,
    types: &[PieceType],
    identity: &Pieces,
) -> Result<(), SpecError> {
    for key in keys {
        let mv = table.lookup(key, key)?;
        let double = mv.pieces().cycle(mv, Direction::Forward, types);
        let inverse = identity.cycle(mv, Direction::Inverse, types);

        table.insert(format!("{key}2"), Move(double))?;
        table.insert(format!("{key}'"), Move(inverse))?;
    }
    Ok(())
}

fn combine(
    table: &MoveTable,
    combination: &Combination,
    types: &[PieceType],
) -> Result<Move, SpecError> {
    let mut labels = combination.moves().iter();
    let first = labels
        .next()
        .ok_or_else(|| SpecError::EmptyCombination(combination.label().to_owned()))?;
    let first = table.lookup(first, combination.label())?.pieces().clone();

    labels
        .try_fold(first, |acc, label| {
            let mv = table.lookup(label, combination.label())?;
            Ok(acc.cycle(mv, Direction::Forward, types))
        })
        .map(Move)
}
