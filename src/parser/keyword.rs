//! Structural keywords of the ASCII STL grammar.

use std::fmt;

/// A token with fixed structural meaning in the STL grammar.
///
/// Matching is exact: case-sensitive, whole-word. Anything that is not a
/// keyword is an ordinary data token (usually a coordinate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Solid,
    Facet,
    Normal,
    Outer,
    Loop,
    Vertex,
    Endloop,
    Endfacet,
    Endsolid,
}

/// The compound expectation used for error recovery: a malformed facet is
/// skipped until the next facet starts or the solid ends.
pub const FACET_OR_ENDSOLID: &[Keyword] = &[Keyword::Facet, Keyword::Endsolid];

impl Keyword {
    /// The literal source spelling of this keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Solid => "solid",
            Keyword::Facet => "facet",
            Keyword::Normal => "normal",
            Keyword::Outer => "outer",
            Keyword::Loop => "loop",
            Keyword::Vertex => "vertex",
            Keyword::Endloop => "endloop",
            Keyword::Endfacet => "endfacet",
            Keyword::Endsolid => "endsolid",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a word against a set of keywords.
///
/// Returns which member of `set` the word exactly equals, if any. This is
/// the one query the parser needs: for a single-element set it answers
/// "is this token X", for a compound set it additionally reports which
/// alternative matched.
pub fn classify(word: &str, set: &[Keyword]) -> Option<Keyword> {
    set.iter().copied().find(|kw| kw.as_str() == word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_single() {
        assert_eq!(classify("facet", &[Keyword::Facet]), Some(Keyword::Facet));
        assert_eq!(classify("vertex", &[Keyword::Facet]), None);
    }

    #[test]
    fn test_classify_reports_which_member_matched() {
        assert_eq!(classify("facet", FACET_OR_ENDSOLID), Some(Keyword::Facet));
        assert_eq!(
            classify("endsolid", FACET_OR_ENDSOLID),
            Some(Keyword::Endsolid)
        );
        assert_eq!(classify("normal", FACET_OR_ENDSOLID), None);
    }

    #[test]
    fn test_classify_is_exact() {
        // No prefix, suffix, or case-insensitive matches.
        assert_eq!(classify("face", &[Keyword::Facet]), None);
        assert_eq!(classify("facets", &[Keyword::Facet]), None);
        assert_eq!(classify("Facet", &[Keyword::Facet]), None);
        assert_eq!(classify("", &[Keyword::Facet]), None);
    }

    #[test]
    fn test_keyword_spelling() {
        assert_eq!(Keyword::Endsolid.as_str(), "endsolid");
        assert_eq!(Keyword::Loop.to_string(), "loop");
    }
}
