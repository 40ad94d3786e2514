//! The 3x3x3 Rubik's cube.

pub mod moves;

use std::sync::OnceLock;

use crate::piece::PieceType;
use crate::puzzle::PuzzleKind;
use crate::signature::SignatureLayout;
use crate::spec::{Combination, Definition, Specification};

/// The signature of the solved cube.
pub const SOLVED: &str = "A0B0C0D0E0F0G0H0-A0B0C0D0E0F0G0H0I0J0K0L0";

/// The specification of the 3x3x3: edges, corners and centers, the face and slice turns, and
/// rotations and wide turns built from those. Centers are left out of the signature.
pub fn specification() -> Specification {
    let pieces = vec![
        PieceType::new("edges", 12, 2),
        PieceType::new("corners", 8, 3),
        PieceType::new("centers", 6, 1),
    ];

    let spec = moves::primitives()
        .into_iter()
        .fold(Specification::new("3x3x3", pieces), Specification::primitive)
        .derive(moves::PRIMITIVE_KEYS);

    moves::COMBINATIONS
        .into_iter()
        .fold(spec, |spec, (label, mvs)| {
            spec.combination(Combination::new(label, mvs.iter().copied()))
        })
        .signature(SignatureLayout::new(["corners", "edges"]).with_alphabet("ABCDEFGHIJKL"))
}

/// The definition of the 3x3x3, built on first use.
pub fn definition() -> &'static Definition {
    static DEFINITION: OnceLock<Definition> = OnceLock::new();
    DEFINITION.get_or_init(|| {
        Definition::new(specification()).expect("the 3x3x3 specification is well formed")
    })
}

/// Marker type for the 3x3x3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube333;

impl PuzzleKind for Cube333 {
    fn definition() -> &'static Definition {
        definition()
    }
}
