//! Canonical textual fingerprints of puzzle states ("signatures"), and wildcard matching and
//! diffing of them.
//!
//! A signature writes every slot of a piece type as a letter naming the piece in that slot
//! followed by its orientation digit, so the solved state of a 3x3x3 has the corner segment
//! `A0B0C0D0E0F0G0H0`. Segments are joined by a delimiter. Patterns are signatures which may
//! contain a wildcard character at any position.

use std::collections::HashSet;

use crate::error::{MatchError, SpecError};
use crate::piece::{PieceType, Pieces};
use crate::spec::Definition;

/// The wildcard used unless a layout says otherwise.
pub const DEFAULT_WILDCARD: char = '*';

/// The piece letters used unless a layout says otherwise.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Configuration of the serializer: which piece types are part of the signature and in which
/// order, and how they are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureLayout {
    categories: Vec<String>,
    alphabet: Vec<char>,
    delimiter: char,
    wildcard: char,
}

impl SignatureLayout {
    /// A layout covering the named piece types in the given order, with the default alphabet,
    /// `-` as delimiter and `*` as wildcard.
    pub fn new<S: Into<String>>(categories: impl IntoIterator<Item = S>) -> Self {
        SignatureLayout {
            categories: categories.into_iter().map(Into::into).collect(),
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            delimiter: '-',
            wildcard: DEFAULT_WILDCARD,
        }
    }

    /// Use different piece letters. Letter `n` stands for piece `n`.
    pub fn with_alphabet(mut self, alphabet: &str) -> Self {
        self.alphabet = alphabet.chars().collect();
        self
    }

    /// Use a different character between piece type segments.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Use a different wildcard character in patterns.
    pub fn with_wildcard(mut self, wildcard: char) -> Self {
        self.wildcard = wildcard;
        self
    }

    /// The names of the piece types in the signature.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The segment delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// The wildcard character.
    pub fn wildcard(&self) -> char {
        self.wildcard
    }

    /// Whether `pattern` matches `signature` using this layout's wildcard. See [`matches`].
    pub fn matches(&self, pattern: &str, signature: &str) -> Result<bool, MatchError> {
        matches(pattern, signature, self.wildcard)
    }

    /// Reduce signatures to their common pattern using this layout's wildcard. See [`diff`].
    pub fn diff<S: AsRef<str>>(&self, signatures: &[S]) -> Result<String, MatchError> {
        diff(signatures, self.wildcard)
    }

    // Orientations are written as a single decimal digit, so moduli above 10 can't be
    // fingerprinted.
    pub(crate) fn resolve(&self, types: &[PieceType]) -> Result<Vec<usize>, SpecError> {
        if self.alphabet.contains(&self.wildcard)
            || self.wildcard.is_ascii_digit()
            || self.wildcard == self.delimiter
        {
            return Err(SpecError::WildcardInAlphabet(self.wildcard));
        }

        if self.delimiter.is_ascii_digit() || self.alphabet.contains(&self.delimiter) {
            return Err(SpecError::AmbiguousLayout(self.delimiter));
        }
        let mut letters = HashSet::new();
        if let Some(&repeated) = self.alphabet.iter().find(|&&c| !letters.insert(c)) {
            return Err(SpecError::AmbiguousLayout(repeated));
        }

        self.categories
            .iter()
            .map(|name| {
                let index = types
                    .iter()
                    .position(|ty| ty.name() == name)
                    .ok_or_else(|| SpecError::UnknownPieceType {
                        name: name.clone(),
                        referenced_by: "signature".to_owned(),
                    })?;
                let ty = &types[index];
                if ty.count() > self.alphabet.len() || ty.orientations() > 10 {
                    return Err(SpecError::SignatureOverflow(name.clone()));
                }
                Ok(index)
            })
            .collect()
    }
}

// `pieces` must be a state of `definition`; `Puzzle::signature` and
// `Definition::solved_signature` are the public ways in. The result only depends on the
// permutation and orientation vectors of the fingerprinted piece types, and never contains the
// wildcard.
pub(crate) fn serialize(definition: &Definition, pieces: &Pieces) -> String {
    let layout = definition.signature_layout();
    let mut out = String::new();

    for (n, &index) in definition.fingerprint().iter().enumerate() {
        if n > 0 {
            out.push(layout.delimiter);
        }
        let state = &pieces[index];
        for (&p, &o) in state.perm().iter().zip(state.orient()) {
            out.push(layout.alphabet[p as usize]);
            out.extend(char::from_digit(o as u32, 10));
        }
    }

    out
}

fn check_len(expected: &str, found: &str) -> Result<(), MatchError> {
    let (expected, found) = (expected.chars().count(), found.chars().count());
    if expected != found {
        return Err(MatchError::LengthMismatch { expected, found });
    }
    Ok(())
}

/// Whether every position of `pattern` is either `wildcard` or equal to the same position of
/// `signature`. Both must be the same length.
pub fn matches(pattern: &str, signature: &str, wildcard: char) -> Result<bool, MatchError> {
    check_len(pattern, signature)?;
    Ok(pattern
        .chars()
        .zip(signature.chars())
        .all(|(p, s)| p == wildcard || p == s))
}

/// Reduce equal length signatures to one pattern, keeping each position the signatures agree on
/// and writing `wildcard` everywhere else.
pub fn diff<S: AsRef<str>>(signatures: &[S], wildcard: char) -> Result<String, MatchError> {
    let (first, rest) = signatures.split_first().ok_or(MatchError::Empty)?;
    let first = first.as_ref();
    for s in rest {
        check_len(first, s.as_ref())?;
    }

    let mut others: Vec<_> = rest.iter().map(|s| s.as_ref().chars()).collect();
    Ok(first
        .chars()
        .map(|c| {
            // Every iterator has to be advanced, so don't short circuit.
            let agree = others
                .iter_mut()
                .fold(true, |agree, chars| chars.next() == Some(c) && agree);
            if agree {
                c
            } else {
                wildcard
            }
        })
        .collect())
}

/// For each position, whether `signature` differs from `reference`. This is what a report would
/// highlight when showing a signature next to a case pattern or the solved signature.
pub fn highlight(reference: &str, signature: &str) -> Result<Vec<bool>, MatchError> {
    check_len(reference, signature)?;
    Ok(reference
        .chars()
        .zip(signature.chars())
        .map(|(r, s)| r != s)
        .collect())
}
