use crate::error::{DomainError, Result};

/// Value object for substring searches over package fields
///
/// Rules:
/// - Must be non-empty (listing everything is a separate operation)
/// - Matching is case-insensitive for ASCII letters only, the way SQLite's
///   `LIKE` compares text. Non-ASCII letters must match exactly.
/// - The term is literal: `%`, `_` and `\` carry no wildcard meaning
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(term: impl Into<String>) -> Result<Self> {
        let term = term.into();

        if term.is_empty() {
            return Err(DomainError::Validation(
                "Search term cannot be empty".to_string(),
            ));
        }

        Ok(Self(term))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `haystack` contains this term
    pub fn matches(&self, haystack: &str) -> bool {
        haystack
            .to_ascii_lowercase()
            .contains(&self.0.to_ascii_lowercase())
    }

    /// `LIKE` pattern (`%term%`) with `\` as the escape character
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_search_term() {
        let result = SearchTerm::new("");
        assert_eq!(
            result.unwrap_err(),
            DomainError::Validation("Search term cannot be empty".to_string())
        );
    }

    #[test]
    fn test_matches_ascii_case_insensitive() {
        let term = SearchTerm::new("incas").unwrap();
        assert!(term.matches("La ciudad perdida de los Incas"));
        assert!(SearchTerm::new("ROMA").unwrap().matches("Roma, Italia"));
    }

    #[test]
    fn test_non_ascii_is_case_sensitive() {
        let term = SearchTerm::new("PARÍS").unwrap();
        assert!(!term.matches("París, Francia"));
        assert!(SearchTerm::new("parís").unwrap().matches("París, Francia"));
    }

    #[test]
    fn test_wildcards_are_literal() {
        let term = SearchTerm::new("%").unwrap();
        assert!(!term.matches("Roma, Italia"));
        assert!(term.matches("100% playa"));
        assert!(!SearchTerm::new("R_ma").unwrap().matches("Roma"));
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        let term = SearchTerm::new(r"50%_off\").unwrap();
        assert_eq!(term.like_pattern(), r"%50\%\_off\\%");
        assert_eq!(SearchTerm::new("Roma").unwrap().like_pattern(), "%Roma%");
    }
}
