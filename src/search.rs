use crate::error::{HuddleError, Result};
use crate::model::PromptTemplate;
use regex::Regex;

/// Search query with optional field-specific and regex support
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// Case-insensitive substring match against title and tags
    Simple(String),
    /// Regex match against title and tags
    Regex(Regex),
    /// Field-specific search
    Field {
        field: SearchField,
        pattern: Box<SearchQuery>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Tag,
    Id,
    Example,
}

/// Case-folded substring test used by every simple match.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl SearchQuery {
    /// Parse a search query string
    /// Supports:
    /// - Simple: "reframe" -> title or tags
    /// - Field-specific: "tag:pause" -> tags only
    /// - Regex: "regex:^re" -> regex over title or tags
    /// - Combined: "title:regex:^re" -> regex in title field
    pub fn parse(query: &str) -> Result<Self> {
        if let Some((field_str, pattern)) = query.split_once(':') {
            if let Ok(field) = field_str.parse::<SearchField>() {
                let sub_query = Self::parse(pattern)?;
                if let SearchQuery::Field { .. } = sub_query {
                    return Err(HuddleError::Parse(format!(
                        "Nested field search is not supported: {}",
                        query
                    )));
                }
                return Ok(SearchQuery::Field {
                    field,
                    pattern: Box::new(sub_query),
                });
            }

            if field_str == "regex" {
                let regex = Regex::new(pattern)
                    .map_err(|e| HuddleError::Parse(format!("Invalid regex: {}", e)))?;
                return Ok(SearchQuery::Regex(regex));
            }
        }

        Ok(SearchQuery::Simple(query.to_string()))
    }

    pub fn matches_prompt(&self, prompt: &PromptTemplate) -> bool {
        match self {
            SearchQuery::Simple(_) | SearchQuery::Regex(_) => {
                self.matches_text(&prompt.title)
                    || prompt.tags.iter().any(|tag| self.matches_text(tag))
            }
            SearchQuery::Field { field, pattern } => match field {
                SearchField::Title => pattern.matches_text(&prompt.title),
                SearchField::Tag => prompt.tags.iter().any(|tag| pattern.matches_text(tag)),
                SearchField::Id => pattern.matches_text(&prompt.id),
                SearchField::Example => pattern.matches_text(&prompt.example),
            },
        }
    }

    fn matches_text(&self, text: &str) -> bool {
        match self {
            SearchQuery::Simple(p) => contains_folded(text, p),
            SearchQuery::Regex(r) => r.is_match(text),
            SearchQuery::Field { .. } => false,
        }
    }
}

impl std::str::FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "tag" | "tags" => Ok(SearchField::Tag),
            "id" => Ok(SearchField::Id),
            "example" => Ok(SearchField::Example),
            _ => Err(format!("Unknown field: {}", s)),
        }
    }
}
