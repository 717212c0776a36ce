/// A validated search query: trimmed and guaranteed non-empty.
///
/// Blank input is unrepresentable, so a lookup can never be issued for an
/// empty title.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieQuery(String);

impl MovieQuery {
    /// Parse user input into a query, returning `None` when the input is
    /// blank or whitespace-only.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(MovieQuery(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MovieQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for MovieQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_input() {
        assert_eq!(MovieQuery::parse(""), None);
        assert_eq!(MovieQuery::parse("   "), None);
        assert_eq!(MovieQuery::parse("\t\n"), None);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let query = MovieQuery::parse("  Fight Club ").unwrap();
        assert_eq!(query.as_str(), "Fight Club");
    }
}
