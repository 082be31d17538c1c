use super::types::{ElementKind, PhaseName};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryElement {
    pub id: String,

    pub kind: ElementKind,

    pub title: String,

    #[serde(default)]
    pub description: String,
}

impl LibraryElement {
    pub fn new(id: impl Into<String>, kind: ElementKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub name: PhaseName,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<LibraryElement>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl Phase {
    pub fn new(name: PhaseName, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
            elements: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_elements(mut self, elements: Vec<LibraryElement>) -> Self {
        self.elements = elements;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn position_of(&self, element_id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id == element_id)
    }
}
