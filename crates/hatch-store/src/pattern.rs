//! Wildcard patterns for bulk object and state queries.
//!
//! `*` matches any run of characters (including none). Every other
//! character, `.` included, matches only itself.

use std::fmt;

/// A compiled wildcard pattern.
#[derive(Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    parts: Vec<String>,
}

impl Pattern {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            parts: source.split('*').map(str::to_string).collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the pattern contains no wildcard.
    pub fn is_literal(&self) -> bool {
        self.parts.len() == 1
    }

    pub fn matches(&self, candidate: &str) -> bool {
        let (first, rest) = match self.parts.split_first() {
            Some(split) => split,
            None => return candidate.is_empty(),
        };
        if rest.is_empty() {
            return candidate == first;
        }
        let Some(mut remaining) = candidate.strip_prefix(first.as_str()) else {
            return false;
        };

        let Some((last, middle)) = rest.split_last() else {
            return true;
        };
        for part in middle {
            match remaining.find(part.as_str()) {
                Some(pos) => remaining = &remaining[pos + part.len()..],
                None => return false,
            }
        }
        remaining.len() >= last.len() && remaining.ends_with(last.as_str())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({})", self.source)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn literal_matches_exactly() {
        let p = Pattern::new("test.0.foo");
        assert!(p.is_literal());
        assert!(p.matches("test.0.foo"));
        assert!(!p.matches("test.0.foobar"));
    }

    #[test]
    fn trailing_star_matches_subtree() {
        let p = Pattern::new("test.0.*");
        assert!(p.matches("test.0.foo"));
        assert!(p.matches("test.0.a.b.c"));
        assert!(p.matches("test.0."));
        assert!(!p.matches("test.1.foo"));
        assert!(!p.matches("test.0"));
    }

    #[test]
    fn star_alone_matches_everything() {
        let p = Pattern::new("*");
        assert!(p.matches(""));
        assert!(p.matches("anything.at.all"));
    }

    #[test]
    fn inner_stars() {
        let p = Pattern::new("hue.*.lights.*.on");
        assert!(p.matches("hue.0.lights.kitchen.on"));
        assert!(!p.matches("hue.0.lights.kitchen.off"));
        assert!(!p.matches("sonos.0.lights.kitchen.on"));
    }

    #[test]
    fn prefix_and_suffix_do_not_overlap() {
        let p = Pattern::new("ab*ba");
        assert!(!p.matches("aba"));
        assert!(p.matches("abba"));
    }

    #[test]
    fn dots_are_literal() {
        assert!(!Pattern::new("a.b").matches("axb"));
    }

    proptest! {
        #[test]
        fn prefix_star_matches_any_suffix(prefix in "[a-z.]{0,10}", suffix in "[a-z0-9.]{0,10}") {
            let p = Pattern::new(&format!("{prefix}*"));
            let candidate = format!("{prefix}{suffix}");
            prop_assert!(p.matches(&candidate));
        }
    }
}
