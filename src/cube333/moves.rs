//! Primitive move tables of the 3x3x3.
//!
//! Corners are indexed UBL UBR UFR UFL DBL DBR DFR DFL, and edges UB UR UF UL BL BR FR FL DB DR
//! DF DL. Centers are indexed U L F R B D.

use crate::spec::MoveSpec;

/// The face and slice turns every other move is derived from.
pub const PRIMITIVE_KEYS: [&str; 9] = ["U", "D", "F", "B", "L", "R", "M", "S", "E"];

const U_CP: [u8; 8] = [3, 0, 1, 2, 4, 5, 6, 7];
const U_EP: [u8; 12] = [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11];

const L_CP: [u8; 8] = [4, 1, 2, 0, 7, 5, 6, 3];
const L_CO: [u8; 8] = [1, 0, 0, 2, 2, 0, 0, 1];
const L_EP: [u8; 12] = [0, 1, 2, 4, 11, 5, 6, 3, 8, 9, 10, 7];

const F_CP: [u8; 8] = [0, 1, 3, 7, 4, 5, 2, 6];
const F_CO: [u8; 8] = [0, 0, 2, 1, 0, 0, 1, 2];
const F_EP: [u8; 12] = [0, 1, 7, 3, 4, 5, 2, 10, 8, 9, 6, 11];
const F_EO: [u8; 12] = [0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 1, 0];

const R_CP: [u8; 8] = [0, 2, 6, 3, 4, 1, 5, 7];
const R_CO: [u8; 8] = [0, 2, 1, 0, 0, 1, 2, 0];
const R_EP: [u8; 12] = [0, 6, 2, 3, 4, 1, 9, 7, 8, 5, 10, 11];

const B_CP: [u8; 8] = [1, 5, 2, 3, 0, 4, 6, 7];
const B_CO: [u8; 8] = [2, 1, 0, 0, 1, 2, 0, 0];
const B_EP: [u8; 12] = [5, 1, 2, 3, 0, 8, 6, 7, 4, 9, 10, 11];
const B_EO: [u8; 12] = [1, 0, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0];

const D_CP: [u8; 8] = [0, 1, 2, 3, 5, 6, 7, 4];
const D_EP: [u8; 12] = [0, 1, 2, 3, 4, 5, 6, 7, 9, 10, 11, 8];

const M_EP: [u8; 12] = [8, 1, 0, 3, 4, 5, 6, 7, 10, 9, 2, 11];
const M_EO: [u8; 12] = [1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0];
const M_XP: [u8; 6] = [4, 1, 0, 3, 5, 2];

const S_EP: [u8; 12] = [0, 3, 2, 11, 4, 5, 6, 7, 8, 1, 10, 9];
const S_EO: [u8; 12] = [0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1];
const S_XP: [u8; 6] = [1, 5, 2, 0, 4, 3];

const E_EP: [u8; 12] = [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10, 11];
const E_EO: [u8; 12] = [0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0];
const E_XP: [u8; 6] = [0, 4, 1, 2, 3, 5];

/// The compound moves, as (label, moves) in definition order. Rotations come first, then wide
/// turns.
pub const COMBINATIONS: [(&str, &[&str]); 9] = [
    ("y", &["U", "E'", "D'"]),
    ("x", &["L'", "R", "M'"]),
    ("z", &["F", "S", "B'"]),
    ("u", &["U", "E'"]),
    ("r", &["R", "M'"]),
    ("f", &["F", "S"]),
    ("d", &["D", "E"]),
    ("l", &["L", "M"]),
    ("b", &["B", "S'"]),
];

/// The primitive moves.
pub fn primitives() -> Vec<MoveSpec> {
    vec![
        MoveSpec::new("U")
            .permute("corners", U_CP)
            .permute("edges", U_EP),
        MoveSpec::new("L")
            .permute("corners", L_CP)
            .twist("corners", L_CO)
            .permute("edges", L_EP),
        MoveSpec::new("F")
            .permute("corners", F_CP)
            .twist("corners", F_CO)
            .permute("edges", F_EP)
            .twist("edges", F_EO),
        MoveSpec::new("R")
            .permute("corners", R_CP)
            .twist("corners", R_CO)
            .permute("edges", R_EP),
        MoveSpec::new("B")
            .permute("corners", B_CP)
            .twist("corners", B_CO)
            .permute("edges", B_EP)
            .twist("edges", B_EO),
        MoveSpec::new("D")
            .permute("corners", D_CP)
            .permute("edges", D_EP),
        MoveSpec::new("M")
            .permute("edges", M_EP)
            .twist("edges", M_EO)
            .permute("centers", M_XP),
        MoveSpec::new("S")
            .permute("edges", S_EP)
            .twist("edges", S_EO)
            .permute("centers", S_XP),
        MoveSpec::new("E")
            .permute("edges", E_EP)
            .twist("edges", E_EO)
            .permute("centers", E_XP),
    ]
}
