//! Case search: replay a corpus of algorithms, keep the ones whose result matches a case pattern,
//! group them by signature and reduce the matches to their common pattern.

use std::collections::BTreeMap;

use log::{info, warn};

use crate::error::{MatchError, UnknownMoveError};
use crate::puzzle::Puzzle;
use crate::spec::Definition;

/// Extract the algorithm from a corpus line, which is the text before the first `(` (the
/// annotation), trimmed.
pub fn alg_from_line(line: &str) -> &str {
    match line.find('(') {
        Some(end) => line[..end].trim(),
        None => line.trim(),
    }
}

/// Options for [`search`]. The default scans every line and keeps every match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Only scan this many lines.
    pub line_limit: Option<usize>,
    /// Stop after this many matches.
    pub match_limit: Option<usize>,
    /// The separator between moves.
    pub separator: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            line_limit: None,
            match_limit: None,
            separator: " ".to_owned(),
        }
    }
}

impl SearchOptions {
    /// Only scan the first `limit` lines.
    pub fn line_limit(mut self, limit: usize) -> Self {
        self.line_limit = Some(limit);
        self
    }

    /// Keep at most `limit` matches.
    pub fn match_limit(mut self, limit: usize) -> Self {
        self.match_limit = Some(limit);
        self
    }

    /// Split algorithms on `separator` instead of a single space.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// A corpus line which couldn't be replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// The zero based line number.
    pub line: usize,
    /// Why it was skipped.
    pub error: UnknownMoveError,
}

/// The result of a [`search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseSearch<'d> {
    groups: BTreeMap<String, Vec<Puzzle<'d>>>,
    diff: Option<String>,
    skipped: Vec<SkippedLine>,
    matched: usize,
    scanned: usize,
}

impl<'d> CaseSearch<'d> {
    /// The matching puzzles grouped by signature, in signature order. Within a group puzzles keep
    /// corpus order.
    pub fn groups(&self) -> &BTreeMap<String, Vec<Puzzle<'d>>> {
        &self.groups
    }

    /// The common pattern of every match, or `None` if nothing matched.
    pub fn diff(&self) -> Option<&str> {
        self.diff.as_deref()
    }

    /// Lines with moves that aren't in the move table.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// The number of matching algorithms.
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// The number of corpus lines read before the search stopped.
    pub fn scanned(&self) -> usize {
        self.scanned
    }
}

/// Search `lines` for algorithms whose resulting state matches `pattern`.
///
/// Lines are read with [`alg_from_line`]; blank ones are ignored and ones with unknown moves are
/// skipped without stopping the search. Fails only if `pattern` doesn't have the length of a
/// signature of `definition`.
pub fn search<'d, 'l>(
    definition: &'d Definition,
    pattern: &str,
    lines: impl IntoIterator<Item = &'l str>,
    options: &SearchOptions,
) -> Result<CaseSearch<'d>, MatchError> {
    let layout = definition.signature_layout();
    layout.matches(pattern, &definition.solved_signature())?;

    let mut groups: BTreeMap<String, Vec<Puzzle<'d>>> = BTreeMap::new();
    let mut skipped = Vec::new();
    let mut matched = 0;
    let mut scanned = 0;

    let lines = lines
        .into_iter()
        .take(options.line_limit.unwrap_or(usize::MAX));
    for (n, line) in lines.enumerate() {
        if options.match_limit.is_some_and(|limit| matched >= limit) {
            break;
        }
        scanned += 1;

        let alg = alg_from_line(line);
        if alg.is_empty() {
            continue;
        }

        let puzzle = match Puzzle::from_alg_split(definition, alg, &options.separator) {
            Ok(puzzle) => puzzle,
            Err(error) => {
                warn!("skipping line {n}: {error}");
                skipped.push(SkippedLine { line: n, error });
                continue;
            }
        };

        let signature = puzzle.signature();
        if layout.matches(pattern, &signature)? {
            matched += 1;
            groups.entry(signature).or_default().push(puzzle);
        }
    }

    let signatures: Vec<&str> = groups.keys().map(String::as_str).collect();
    let diff = if signatures.is_empty() {
        None
    } else {
        Some(layout.diff(&signatures)?)
    };

    info!(
        "{}: scanned {scanned} lines, {matched} matches in {} groups, {} skipped",
        definition.name(),
        groups.len(),
        skipped.len()
    );

    Ok(CaseSearch {
        groups,
        diff,
        skipped,
        matched,
        scanned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::{self, SOLVED};
    use crate::signature::matches;

    const CPLL_CASE: &str = "*0*0B0*0E0F0G0H0-A0B0C0D0E0F0G0H0I0J0K0L0";

    const CORPUS: &str = "\
x R' U R' D2 R U' R' D2 R2 x' (Aa)
R2 B2 R F R' B2 R F' R (Ab)
R' F R' B2 R F' R' B2 R2 (Aa, no rotation)

x' R U' R' D R U R' D' R U R' D R U' R' D' x (E)
R U R' Qw (broken)
y' x R' U R' D2 R U' R' D2 R2 x' y (Aa from the side)
R U R' U' R' F R2 U' R' U' R U R' F' (T)
l' U R' D2 R U' R' D2 R2 x'";

    #[test]
    fn line_parsing() {
        assert_eq!(alg_from_line("R U R' U' (sexy move)"), "R U R' U'");
        assert_eq!(alg_from_line("  R U  "), "R U");
        assert_eq!(alg_from_line("(nothing)"), "");
        assert_eq!(alg_from_line(""), "");
    }

    #[test_log::test]
    fn cpll_search() {
        let def = cube333::definition();
        let result = search(def, CPLL_CASE, CORPUS.lines(), &SearchOptions::default()).unwrap();

        assert_eq!(result.matched(), 5);
        assert_eq!(result.scanned(), 9);
        assert_eq!(
            result.skipped(),
            &[SkippedLine {
                line: 5,
                error: UnknownMoveError {
                    label: "Qw".to_owned()
                }
            }]
        );

        let groups: Vec<(&str, Vec<String>)> = result
            .groups()
            .iter()
            .map(|(s, p)| (s.as_str(), p.iter().map(Puzzle::alg).collect()))
            .collect();
        assert_eq!(
            groups,
            vec![
                (
                    "A0D0B0C0E0F0G0H0-A0B0C0D0E0F0G0H0I0J0K0L0",
                    vec!["y' x R' U R' D2 R U' R' D2 R2 x' y".to_owned()]
                ),
                (
                    "C0A0B0D0E0F0G0H0-A0B0C0D0E0F0G0H0I0J0K0L0",
                    vec![
                        "x R' U R' D2 R U' R' D2 R2 x'".to_owned(),
                        "R' F R' B2 R F' R' B2 R2".to_owned(),
                        "l' U R' D2 R U' R' D2 R2 x'".to_owned(),
                    ]
                ),
                (
                    "D0C0B0A0E0F0G0H0-A0B0C0D0E0F0G0H0I0J0K0L0",
                    vec!["x' R U' R' D R U R' D' R U R' D R U' R' D' x".to_owned()]
                ),
            ]
        );
        assert_eq!(result.diff(), Some(CPLL_CASE));
    }

    #[test]
    fn groups_partition_matches() {
        let def = cube333::definition();
        let result = search(def, CPLL_CASE, CORPUS.lines(), &SearchOptions::default()).unwrap();

        let total: usize = result.groups().values().map(Vec::len).sum();
        assert_eq!(total, result.matched());
        for (signature, puzzles) in result.groups() {
            assert!(matches(CPLL_CASE, signature, '*').unwrap());
            for puzzle in puzzles {
                assert_eq!(&puzzle.signature(), signature);
            }
        }
    }

    #[test]
    fn limits() {
        let def = cube333::definition();
        let options = SearchOptions::default().line_limit(3);
        let result = search(def, CPLL_CASE, CORPUS.lines(), &options).unwrap();
        assert_eq!(result.matched(), 2);
        assert_eq!(result.scanned(), 3);
        assert_eq!(result.groups().len(), 1);
        assert_eq!(
            result.diff(),
            Some("C0A0B0D0E0F0G0H0-A0B0C0D0E0F0G0H0I0J0K0L0")
        );

        // The line after the last kept match isn't read.
        let options = SearchOptions::default().match_limit(1);
        let result = search(def, CPLL_CASE, CORPUS.lines(), &options).unwrap();
        assert_eq!(result.matched(), 1);
        assert_eq!(result.scanned(), 1);

        let options = SearchOptions::default().match_limit(2);
        let result = search(def, CPLL_CASE, CORPUS.lines(), &options).unwrap();
        assert_eq!(result.matched(), 2);
        assert_eq!(result.scanned(), 3);
    }

    #[test]
    fn no_matches() {
        let def = cube333::definition();
        let result = search(def, SOLVED, CORPUS.lines(), &SearchOptions::default()).unwrap();
        assert_eq!(result.matched(), 0);
        assert!(result.groups().is_empty());
        assert_eq!(result.diff(), None);
    }

    #[test]
    fn custom_separator() {
        let def = cube333::definition();
        let options = SearchOptions::default().separator(",");
        let lines = ["U,U' (nothing)", "R,U,R',U'"];
        let result = search(def, SOLVED, lines, &options).unwrap();
        assert_eq!(result.matched(), 1);
        assert_eq!(result.groups()[SOLVED][0].alg(), "U U'");
    }

    #[test]
    fn pattern_length_checked() {
        let def = cube333::definition();
        assert_eq!(
            search(def, "*0", CORPUS.lines(), &SearchOptions::default()),
            Err(MatchError::LengthMismatch {
                expected: 2,
                found: 41
            })
        );
    }
}
