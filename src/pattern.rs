//! Shell-glob wildcard matcher.
//!
//! `*` matches any run of characters (including none), `?` matches exactly one
//! character, bracket expressions match one character from a set, everything
//! else matches literally. Matching is case-sensitive and anchored at both
//! ends. Patterns compile up front so an unbalanced bracket expression is a
//! load-time error rather than a pattern that silently never matches.

use crate::types::errors::PatternError;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Tok {
    Literal(char),
    AnyRun,
    AnyOne,
    Class { negated: bool, ranges: Vec<(char, char)> },
}

/// A compiled wildcard pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    toks: Vec<Tok>,
}

impl Pattern {
    /// Compile `pattern`. Fails on an unbalanced bracket expression.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut toks = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            match chars[i] {
                '*' => {
                    // Collapse runs of stars; they are equivalent to one.
                    if toks.last() != Some(&Tok::AnyRun) {
                        toks.push(Tok::AnyRun);
                    }
                    i += 1;
                }
                '?' => {
                    toks.push(Tok::AnyOne);
                    i += 1;
                }
                '[' => {
                    let (tok, next) = parse_class(pattern, &chars, i)?;
                    toks.push(tok);
                    i = next;
                }
                c => {
                    toks.push(Tok::Literal(c));
                    i += 1;
                }
            }
        }
        Ok(Self {
            source: pattern.to_string(),
            toks,
        })
    }

    /// The pattern text this was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whole-string match of `text` against this pattern.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        matches_at(&self.toks, &chars)
    }
}

/// Parse a bracket expression starting at `open` (the `[`). Returns the token
/// and the index one past the closing `]`.
fn parse_class(
    pattern: &str,
    chars: &[char],
    open: usize,
) -> Result<(Tok, usize), PatternError> {
    let mut i = open + 1;
    let negated = chars.get(i) == Some(&'!');
    if negated {
        i += 1;
    }
    let mut ranges: Vec<(char, char)> = Vec::new();
    let mut first = true;
    loop {
        match chars.get(i) {
            None => {
                return Err(PatternError {
                    pattern: pattern.to_string(),
                    reason: "unbalanced bracket expression".to_string(),
                })
            }
            // `]` is literal when it is the first member of the set.
            Some(']') if !first => break,
            Some(&c) => {
                if chars.get(i + 1) == Some(&'-') && chars.get(i + 2).is_some_and(|&e| e != ']') {
                    let end = chars[i + 2];
                    ranges.push((c, end));
                    i += 3;
                } else {
                    ranges.push((c, c));
                    i += 1;
                }
                first = false;
            }
        }
    }
    Ok((Tok::Class { negated, ranges }, i + 1))
}

fn class_matches(negated: bool, ranges: &[(char, char)], c: char) -> bool {
    let hit = ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi);
    hit != negated
}

/// Iterative match with single-star backtracking. The empty pattern matches
/// only the empty string, which falls out of the loop structure.
fn matches_at(toks: &[Tok], text: &[char]) -> bool {
    let mut t = 0; // token index
    let mut s = 0; // text index
    let mut star: Option<(usize, usize)> = None; // (token after star, text pos at star)
    while s < text.len() {
        let consumed = match toks.get(t) {
            Some(Tok::Literal(c)) => *c == text[s],
            Some(Tok::AnyOne) => true,
            Some(Tok::Class { negated, ranges }) => class_matches(*negated, ranges, text[s]),
            Some(Tok::AnyRun) => {
                star = Some((t + 1, s));
                t += 1;
                continue;
            }
            None => false,
        };
        if consumed {
            t += 1;
            s += 1;
        } else if let Some((st, ss)) = star {
            // Re-expand the last star by one character and retry.
            t = st;
            s = ss + 1;
            star = Some((st, s));
        } else {
            return false;
        }
    }
    // Remaining tokens must all be star runs.
    toks[t..].iter().all(|tok| *tok == Tok::AnyRun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(p: &str, s: &str) -> bool {
        Pattern::new(p).unwrap().matches(s)
    }

    #[test]
    fn star_matches_any_run() {
        assert!(m("has_*", "has_isolated_environment"));
        assert!(m("has_*", "has_"));
        assert!(!m("has_*", "requires_lock"));
    }

    #[test]
    fn dotted_paths_match_like_plain_strings() {
        assert!(m("checks.*", "checks.Python_Version"));
        assert!(!m("checks.*", "capabilities.has_python_files"));
    }

    #[test]
    fn question_mark_matches_exactly_one() {
        assert!(m("r?n", "run"));
        assert!(!m("r?n", "ruin"));
        assert!(!m("r?n", "rn"));
    }

    #[test]
    fn bracket_classes_and_ranges() {
        assert!(m("[abc]x", "bx"));
        assert!(!m("[abc]x", "dx"));
        assert!(m("[a-z]1", "q1"));
        assert!(m("[!0-9]", "x"));
        assert!(!m("[!0-9]", "7"));
        assert!(m("[]x]", "]"));
    }

    #[test]
    fn empty_pattern_matches_only_empty() {
        assert!(m("", ""));
        assert!(!m("", "a"));
    }

    #[test]
    fn exact_strings_are_valid_patterns() {
        assert!(m("Python Version", "Python Version"));
        assert!(!m("Python Version", "Python version"));
    }

    #[test]
    fn anchoring_is_implicit_at_both_ends() {
        assert!(!m("checks", "checks.Python_Version"));
        assert!(!m("Version", "Python Version"));
    }

    #[test]
    fn unbalanced_bracket_is_a_compile_error() {
        let err = Pattern::new("has_[ab").unwrap_err();
        assert!(err.reason.contains("unbalanced"));
        assert_eq!(err.pattern, "has_[ab");
    }

    #[test]
    fn consecutive_stars_collapse() {
        assert!(m("a**b", "ab"));
        assert!(m("a**b", "a_anything_b"));
    }
}
