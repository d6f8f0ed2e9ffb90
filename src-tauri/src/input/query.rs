use serde::Serialize;
use std::fmt;

/// Trimmed, non-empty search text.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(SearchQuery::parse("  new zealand \n").unwrap().as_str(), "new zealand");
    }

    #[test]
    fn blank_input_is_not_a_query() {
        assert!(SearchQuery::parse("").is_none());
        assert!(SearchQuery::parse(" \t\n ").is_none());
    }
}
