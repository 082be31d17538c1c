//! Facilitation session state.
//!
//! - [`PhaseTracker`]: current step, per-phase status, element ordering
//! - [`NudgeQueue`]: pending nudges with accept/dismiss and the accepted log
//! - [`PromptLibrary`]: read-only prompt templates with substring filtering
//!
//! A [`Session`] bundles the mutable parts so a single owner applies every
//! operation.

mod library;
mod nudges;
mod tracker;

pub use library::PromptLibrary;
pub use nudges::NudgeQueue;
pub use tracker::PhaseTracker;

use crate::catalog::Catalog;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub started: DateTime<Utc>,

    pub updated: DateTime<Utc>,

    pub tracker: PhaseTracker,

    #[serde(default)]
    pub nudges: NudgeQueue,
}

impl Session {
    pub fn start(catalog: &Catalog) -> Result<Self> {
        catalog.validate()?;
        let now = Utc::now();
        tracing::info!("Starting session");
        Ok(Self {
            started: now,
            updated: now,
            tracker: PhaseTracker::new(catalog.phases.clone())?,
            nudges: NudgeQueue::new(),
        })
    }

    pub fn touch(&mut self) {
        self.updated = Utc::now();
    }
}
