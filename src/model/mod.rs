//! Data models for huddle.
//!
//! This module defines the core data structures:
//!
//! - [`Phase`]: One of the four journey stages with its library elements
//! - [`LibraryElement`]: Typed content attached to a phase (word, prompt, visual, ...)
//! - [`Nudge`]: A suggested facilitator intervention
//! - [`PromptTemplate`]: Reusable prompt from the library
//! - [`PhaseName`], [`PhaseStatus`], [`ElementKind`], [`Difficulty`]: Enumerations

mod nudge;
mod phase;
mod prompt;
mod types;

pub use nudge::Nudge;
pub use phase::{LibraryElement, Phase};
pub use prompt::PromptTemplate;
pub use types::{Difficulty, ElementKind, PHASE_COUNT, PhaseName, PhaseStatus};
