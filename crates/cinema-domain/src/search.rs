//! Free-text search terms.

/// Escape character used in every `LIKE` pattern built from a [`SearchTerm`].
pub const LIKE_ESCAPE: char = '\\';

/// How the database's `UPPER()` folds case. The pattern must be folded the
/// same way or non-ASCII prefixes miss rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFold {
    /// SQLite's built-in `UPPER()` only touches `a`..`z`.
    Ascii,
    /// PostgreSQL folds the full Unicode range.
    Unicode,
}

/// A sanitized, non-empty search term.
///
/// Double quotes and `%` are stripped from the raw input. What remains is
/// only ever bound as a query parameter, never spliced into SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Returns `None` when nothing is left after sanitizing.
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned: String = raw.chars().filter(|c| !matches!(c, '"' | '%')).collect();
        if cleaned.is_empty() {
            return None;
        }
        Some(Self(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased `LIKE` pattern matching every value that starts with the term.
    ///
    /// `_` and the escape character are escaped so they match literally.
    /// Use together with [`LIKE_ESCAPE`] and a column upper-cased by a
    /// database folding case as `fold` says.
    pub fn prefix_pattern(&self, fold: CaseFold) -> String {
        let folded = match fold {
            CaseFold::Ascii => self.0.to_ascii_uppercase(),
            CaseFold::Unicode => self.0.to_uppercase(),
        };
        let mut pattern = String::with_capacity(folded.len() + 2);
        for c in folded.chars() {
            if c == '_' || c == LIKE_ESCAPE {
                pattern.push(LIKE_ESCAPE);
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}
