//! Character-level spelling comparison for mistake highlighting.
//!
//! A greedy single-pass aligner, not an edit-distance diff. It walks both
//! strings with one cursor each and classifies every mismatch as a missing,
//! extra, or wrong character. The forward-search tie-break below is part of
//! the contract: runs of repeated characters can be misclassified, and
//! callers render exactly what this module reports.

use serde::{Deserialize, Serialize};

/// How a single character difference is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    /// In the expected word but absent from the typed spelling.
    Missing,
    /// Typed but not in the expected word.
    Extra,
    /// Both sides have a character and they disagree.
    Wrong,
}

/// One detected difference, in discovery order.
///
/// `index` is the position in the typed string for `Extra` records and in the
/// expected word otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingDifference {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<char>,
    pub kind: DiffKind,
}

/// Per-character annotation over one of the original (non-case-folded) strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightChar {
    pub ch: char,
    pub highlighted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DiffKind>,
}

/// Full result of comparing a typed spelling against the expected word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingDiff {
    pub differences: Vec<SpellingDifference>,
    pub expected_highlight: Vec<HighlightChar>,
    pub user_highlight: Vec<HighlightChar>,
}

impl SpellingDiff {
    /// True when the typed spelling matched the expected word exactly
    /// (after case folding).
    pub fn is_match(&self) -> bool {
        self.differences.is_empty()
    }

    /// The expected-word characters the learner left out, in order.
    pub fn missing_letters(&self) -> Vec<char> {
        self.differences
            .iter()
            .filter(|d| d.kind == DiffKind::Missing)
            .filter_map(|d| d.expected)
            .collect()
    }
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Compare `actual` (what the learner typed) against `expected`.
///
/// Comparison is case-insensitive; the highlight projections preserve the
/// original characters of each input. Always returns a result: empty inputs
/// are legal and identical strings yield no differences.
pub fn diff_spelling(expected: &str, actual: &str) -> SpellingDiff {
    let expected_orig: Vec<char> = expected.chars().collect();
    let actual_orig: Vec<char> = actual.chars().collect();
    let exp: Vec<char> = expected_orig.iter().map(|&c| fold(c)).collect();
    let typ: Vec<char> = actual_orig.iter().map(|&c| fold(c)).collect();

    let mut differences = Vec::new();
    let mut exp_marks: Vec<Option<DiffKind>> = vec![None; exp.len()];
    let mut typ_marks: Vec<Option<DiffKind>> = vec![None; typ.len()];

    let mut i = 0; // expected cursor
    let mut j = 0; // typed cursor
    while i < exp.len() || j < typ.len() {
        if i >= exp.len() {
            // Expected word exhausted: everything left was typed in excess.
            differences.push(SpellingDifference {
                index: j,
                expected: None,
                actual: Some(actual_orig[j]),
                kind: DiffKind::Extra,
            });
            typ_marks[j] = Some(DiffKind::Extra);
            j += 1;
            continue;
        }
        if j >= typ.len() {
            differences.push(SpellingDifference {
                index: i,
                expected: Some(expected_orig[i]),
                actual: None,
                kind: DiffKind::Missing,
            });
            exp_marks[i] = Some(DiffKind::Missing);
            i += 1;
            continue;
        }
        if exp[i] == typ[j] {
            i += 1;
            j += 1;
            continue;
        }

        // Mismatch: look strictly ahead on each side for the other side's
        // character. Fewer steps wins; ties prefer the extra classification.
        let ahead_in_typed = typ[j + 1..].iter().position(|&c| c == exp[i]);
        let ahead_in_expected = exp[i + 1..].iter().position(|&c| c == typ[j]);

        let classify_extra = match (ahead_in_typed, ahead_in_expected) {
            (Some(_), None) => true,
            (Some(t), Some(e)) => t <= e,
            (None, _) => false,
        };

        if classify_extra {
            differences.push(SpellingDifference {
                index: j,
                expected: None,
                actual: Some(actual_orig[j]),
                kind: DiffKind::Extra,
            });
            typ_marks[j] = Some(DiffKind::Extra);
            j += 1;
        } else if ahead_in_expected.is_some() {
            differences.push(SpellingDifference {
                index: i,
                expected: Some(expected_orig[i]),
                actual: None,
                kind: DiffKind::Missing,
            });
            exp_marks[i] = Some(DiffKind::Missing);
            i += 1;
        } else {
            differences.push(SpellingDifference {
                index: i,
                expected: Some(expected_orig[i]),
                actual: Some(actual_orig[j]),
                kind: DiffKind::Wrong,
            });
            exp_marks[i] = Some(DiffKind::Wrong);
            typ_marks[j] = Some(DiffKind::Wrong);
            i += 1;
            j += 1;
        }
    }

    let expected_highlight = expected_orig
        .iter()
        .zip(&exp_marks)
        .map(|(&ch, &kind)| HighlightChar {
            ch,
            highlighted: kind.is_some(),
            kind,
        })
        .collect();
    let user_highlight = actual_orig
        .iter()
        .zip(&typ_marks)
        .map(|(&ch, &kind)| HighlightChar {
            ch,
            highlighted: kind.is_some(),
            kind,
        })
        .collect();

    SpellingDiff {
        differences,
        expected_highlight,
        user_highlight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn missing(index: usize, expected: char) -> SpellingDifference {
        SpellingDifference {
            index,
            expected: Some(expected),
            actual: None,
            kind: DiffKind::Missing,
        }
    }

    fn extra(index: usize, actual: char) -> SpellingDifference {
        SpellingDifference {
            index,
            expected: None,
            actual: Some(actual),
            kind: DiffKind::Extra,
        }
    }

    fn wrong(index: usize, expected: char, actual: char) -> SpellingDifference {
        SpellingDifference {
            index,
            expected: Some(expected),
            actual: Some(actual),
            kind: DiffKind::Wrong,
        }
    }

    #[test]
    fn identical_strings_have_no_differences() {
        let result = diff_spelling("because", "because");
        assert!(result.is_match());
        assert!(result.expected_highlight.iter().all(|h| !h.highlighted));
        assert!(result.user_highlight.iter().all(|h| !h.highlighted));
    }

    #[test]
    fn comparison_folds_case() {
        let result = diff_spelling("Friend", "FRIEND");
        assert!(result.is_match());
        // Highlights keep the original characters of each side.
        assert_eq!(result.expected_highlight[0].ch, 'F');
        assert_eq!(result.user_highlight[1].ch, 'R');
    }

    #[test]
    fn empty_typed_yields_one_missing_per_character() {
        let result = diff_spelling("cat", "");
        assert_eq!(
            result.differences,
            vec![missing(0, 'c'), missing(1, 'a'), missing(2, 't')]
        );
        assert!(result.user_highlight.is_empty());
        assert_eq!(result.missing_letters(), vec!['c', 'a', 't']);
    }

    #[test]
    fn empty_expected_yields_one_extra_per_character() {
        let result = diff_spelling("", "cat");
        assert_eq!(
            result.differences,
            vec![extra(0, 'c'), extra(1, 'a'), extra(2, 't')]
        );
        assert!(result.expected_highlight.is_empty());
    }

    #[test]
    fn empty_vs_empty_is_a_match() {
        let result = diff_spelling("", "");
        assert!(result.is_match());
        assert!(result.expected_highlight.is_empty());
        assert!(result.user_highlight.is_empty());
    }

    #[test]
    fn substitution_is_classified_wrong() {
        let result = diff_spelling("cat", "cot");
        assert_eq!(result.differences, vec![wrong(1, 'a', 'o')]);
        assert!(result.expected_highlight[1].highlighted);
        assert_eq!(result.expected_highlight[1].kind, Some(DiffKind::Wrong));
        assert!(result.user_highlight[1].highlighted);
    }

    #[test]
    fn dropped_letter_is_classified_missing() {
        let result = diff_spelling("hello", "helo");
        assert_eq!(result.differences, vec![missing(3, 'l')]);
    }

    #[test]
    fn doubled_letter_is_classified_extra() {
        let result = diff_spelling("helo", "hello");
        assert_eq!(result.differences, vec![extra(3, 'l')]);
    }

    // The aligner is greedy, not minimal-edit-distance. A transposition
    // resolves as one extra followed by one missing; the forward matches are
    // equally near and the tie goes to extra.
    #[test]
    fn transposition_resolves_as_extra_then_missing() {
        let result = diff_spelling("friend", "freind");
        assert_eq!(result.differences, vec![extra(2, 'e'), missing(3, 'e')]);
        // Expected side: the skipped 'e' at index 3. User side: the early 'e'.
        assert_eq!(result.expected_highlight[3].kind, Some(DiffKind::Missing));
        assert_eq!(result.user_highlight[2].kind, Some(DiffKind::Extra));
        assert!(!result.expected_highlight[2].highlighted);
    }

    #[test]
    fn disjoint_strings_are_wrong_per_overlapping_character() {
        let result = diff_spelling("abc", "xyz");
        assert_eq!(
            result.differences,
            vec![wrong(0, 'a', 'x'), wrong(1, 'b', 'y'), wrong(2, 'c', 'z')]
        );
    }

    #[test]
    fn disjoint_remainder_drains_as_extra() {
        let result = diff_spelling("ab", "wxyz");
        assert_eq!(
            result.differences,
            vec![
                wrong(0, 'a', 'w'),
                wrong(1, 'b', 'x'),
                extra(2, 'y'),
                extra(3, 'z'),
            ]
        );
    }

    #[test]
    fn equally_near_forward_matches_prefer_extra() {
        // Both forward matches are one step ahead at index 0.
        let result = diff_spelling("rake", "arke");
        assert_eq!(result.differences, vec![extra(0, 'a'), missing(1, 'a')]);
    }

    #[test]
    fn strictly_nearer_expected_match_prefers_missing() {
        // Typed 'b' is one step ahead in the expected word while expected 'e'
        // is two steps ahead in the typed string.
        let result = diff_spelling("ebb", "bbe");
        assert_eq!(result.differences, vec![missing(0, 'e'), extra(2, 'e')]);
    }

    #[test]
    fn repeated_calls_yield_identical_output() {
        let a = diff_spelling("necessary", "neccessary");
        let b = diff_spelling("necessary", "neccessary");
        assert_eq!(a, b);
    }
}
