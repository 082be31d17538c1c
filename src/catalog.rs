//! Content catalog: the four phases with their library elements, and the
//! prompt template library.
//!
//! A catalog is supplied at session construction. It can be loaded from a
//! TOML or YAML file, or taken from the built-in sample used by the console.
//!
//! ## File Format (TOML)
//!
//! ```toml
//! [[phases]]
//! name = "pause"
//! description = "Slow down and notice what is present."
//! suggestions = ["Open with one minute of silence."]
//!
//! [[phases.elements]]
//! id = "stillness"
//! kind = "word"
//! title = "Stillness"
//!
//! [[prompts]]
//! id = "reframe"
//! title = "Reframe"
//! example = "What else could this mean?"
//! tags = ["perspective", "shift"]
//! ```

use crate::error::{HuddleError, Result};
use crate::model::{
    Difficulty, ElementKind, LibraryElement, Nudge, PHASE_COUNT, Phase, PhaseName, PromptTemplate,
};
use crate::validation;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Yaml,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("toml") => Ok(CatalogFormat::Toml),
            Some("yaml") | Some("yml") => Ok(CatalogFormat::Yaml),
            _ => Err(HuddleError::Config(format!(
                "Unsupported catalog format: {} (expected .toml, .yaml or .yml)",
                path.display()
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub phases: Vec<Phase>,

    #[serde(default)]
    pub prompts: Vec<PromptTemplate>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self> {
        let format = CatalogFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::parse(&content, format)?;
        tracing::debug!(
            path = %path.display(),
            prompts = catalog.prompts.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    pub fn parse(content: &str, format: CatalogFormat) -> Result<Self> {
        let catalog: Catalog = match format {
            CatalogFormat::Toml => toml::from_str(content)?,
            CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn render(&self, format: CatalogFormat) -> Result<String> {
        Ok(match format {
            CatalogFormat::Toml => toml::to_string_pretty(self)?,
            CatalogFormat::Yaml => serde_yaml::to_string(self)?,
        })
    }

    /// Checks the fixed phase order and id uniqueness.
    pub fn validate(&self) -> Result<()> {
        if self.phases.len() != PHASE_COUNT {
            return Err(HuddleError::Config(format!(
                "Catalog must define exactly {} phases, found {}",
                PHASE_COUNT,
                self.phases.len()
            )));
        }
        for (phase, expected) in self.phases.iter().zip(PhaseName::ALL) {
            if phase.name != expected {
                return Err(HuddleError::Config(format!(
                    "Phase {} must be '{}', found '{}'",
                    expected.step(),
                    expected,
                    phase.name
                )));
            }
            let mut seen = HashSet::new();
            for element in &phase.elements {
                validation::validate_id(&element.id)?;
                validation::validate_title(&element.title)?;
                if !seen.insert(element.id.as_str()) {
                    return Err(HuddleError::DuplicateId(format!(
                        "element '{}' appears twice in phase '{}'",
                        element.id, phase.name
                    )));
                }
            }
        }

        let mut seen = HashSet::new();
        for prompt in &self.prompts {
            validation::validate_id(&prompt.id)?;
            validation::validate_title(&prompt.title)?;
            for tag in &prompt.tags {
                validation::validate_tag(tag)?;
            }
            if !seen.insert(prompt.id.as_str()) {
                return Err(HuddleError::DuplicateId(format!(
                    "prompt '{}' appears twice",
                    prompt.id
                )));
            }
        }
        Ok(())
    }

    /// The catalog shipped with the console.
    pub fn sample() -> Self {
        let pause = Phase::new(PhaseName::Pause, "Slow down and notice what is present.")
            .with_elements(vec![
                LibraryElement::new("stillness", ElementKind::Word, "Stillness")
                    .with_description("A single word to anchor the room."),
                LibraryElement::new("carrying", ElementKind::Prompt, "What are you carrying?")
                    .with_description("Invite each person to name what they bring in."),
                LibraryElement::new("horizon", ElementKind::Visual, "Horizon")
                    .with_description("A calm landscape card to settle attention."),
                LibraryElement::new("three-breaths", ElementKind::Exercise, "Three breaths")
                    .with_description("Guided pause before anyone speaks."),
            ])
            .with_suggestions(vec![
                "Hold one minute of silence before the first question.".to_string(),
                "Let everyone pick a word card without explaining it yet.".to_string(),
            ]);

        let expand = Phase::new(
            PhaseName::Expand,
            "Widen the view and invite other perspectives.",
        )
        .with_elements(vec![
            LibraryElement::new("perspective-deck", ElementKind::Deck, "Perspective cards")
                .with_description("Draw a card and answer from that angle."),
            LibraryElement::new("who-else", ElementKind::Prompt, "Who sees this differently?")
                .with_description("Surface viewpoints not yet in the room."),
            LibraryElement::new("branches", ElementKind::Visual, "Branches")
                .with_description("A tree image for mapping possibilities."),
            LibraryElement::new("mind-map", ElementKind::Template, "Mind map")
                .with_description("Shared canvas for clustering ideas."),
        ])
        .with_suggestions(vec![
            "Ask the quietest participant to draw the next card.".to_string(),
            "Collect at least three readings before converging.".to_string(),
        ]);

        let focus = Phase::new(PhaseName::Focus, "Narrow to what matters most.")
            .with_elements(vec![
                LibraryElement::new("dot-vote", ElementKind::Exercise, "Dot vote")
                    .with_description("Each person places three dots."),
                LibraryElement::new("strongest-thread", ElementKind::Prompt, "Which thread pulls hardest?")
                    .with_description("Name the theme with the most energy."),
                LibraryElement::new("essence", ElementKind::Word, "Essence")
                    .with_description("Distil the theme into one word."),
            ])
            .with_suggestions(vec![
                "Mirror back the two themes with the most energy.".to_string(),
            ]);

        let doing = Phase::new(PhaseName::Doing, "Commit to a concrete next step.")
            .with_elements(vec![
                LibraryElement::new("next-step-canvas", ElementKind::Template, "Next-step canvas")
                    .with_description("Who does what, by when."),
                LibraryElement::new("by-friday", ElementKind::Prompt, "What will you do by Friday?")
                    .with_description("Small, dated commitments."),
                LibraryElement::new("pair-check-in", ElementKind::Exercise, "Pair check-in")
                    .with_description("Partners agree on a follow-up touchpoint."),
            ])
            .with_suggestions(vec![
                "Keep commitments small enough to finish this week.".to_string(),
                "Close with a round of one-word check-outs.".to_string(),
            ]);

        Self {
            phases: vec![pause, expand, focus, doing],
            prompts: sample_prompts(),
        }
    }
}

fn sample_prompts() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate::new("reframe", "Reframe")
            .with_example("What else could this mean?")
            .with_tags(["perspective", "shift"]),
        PromptTemplate::new("deepen", "Deepen")
            .with_example("Say more about that.")
            .with_tags(["curiosity", "follow-up"]),
        PromptTemplate::new("pulse", "Pulse check")
            .with_example("How is everyone landing right now?")
            .with_tags(["energy", "group"]),
        PromptTemplate::new("quiet", "Hold the quiet")
            .with_example("Let's take thirty seconds before anyone answers.")
            .with_tags(["pause", "space"]),
        PromptTemplate::new("name-pattern", "Name the pattern")
            .with_example("I notice we keep returning to deadlines.")
            .with_tags(["observation", "mirror"]),
    ]
}

/// Nudges a signal-detection service would raise during a typical session.
/// Used by `huddle start --demo`.
pub fn sample_nudges() -> Vec<Nudge> {
    vec![
        Nudge::new("n1", "Balance the airtime")
            .with_reason("Two participants have held the floor for most of the last ten minutes.")
            .with_suggestion("Let's hear from someone who hasn't spoken yet.")
            .with_difficulty(Difficulty::Moderate)
            .with_cooldown(300),
        Nudge::new("n2", "Ask a wider question")
            .with_reason("Recent questions have mostly been yes/no.")
            .with_suggestion("What would change if this worked perfectly?")
            .with_difficulty(Difficulty::Gentle)
            .with_cooldown(180),
        Nudge::new("n3", "Acknowledge the tension")
            .with_reason("Tone has sharpened in the last exchange.")
            .with_suggestion("It sounds like this matters a lot to both of you.")
            .with_difficulty(Difficulty::Bold)
            .with_cooldown(600),
    ]
}
