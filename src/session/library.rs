use crate::error::Result;
use crate::model::PromptTemplate;
use crate::search::{SearchQuery, contains_folded};

/// Read-only catalog of reusable prompt templates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptLibrary {
    prompts: Vec<PromptTemplate>,
}

impl PromptLibrary {
    pub fn new(prompts: Vec<PromptTemplate>) -> Self {
        Self { prompts }
    }

    pub fn all(&self) -> &[PromptTemplate] {
        &self.prompts
    }

    /// Templates whose title or any tag contains `query`, ignoring case.
    /// An empty query yields every template in stored order.
    pub fn filter<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a PromptTemplate> + 'a {
        self.prompts.iter().filter(move |p| {
            contains_folded(&p.title, query) || p.tags.iter().any(|t| contains_folded(t, query))
        })
    }

    /// Like [`filter`](Self::filter), but understands `title:`, `tag:`,
    /// `id:`, `example:` and `regex:` prefixes.
    pub fn search(&self, query: &str) -> Result<Vec<&PromptTemplate>> {
        let query = SearchQuery::parse(query)?;
        Ok(self
            .prompts
            .iter()
            .filter(|p| query.matches_prompt(p))
            .collect())
    }
}
