use crate::error::{HuddleError, Result};
use crate::model::Nudge;
use crate::validation;
use serde::{Deserialize, Serialize};

/// Pending nudges in arrival order, plus the ids of the ones the facilitator acted on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NudgeQueue {
    #[serde(default)]
    pending: Vec<Nudge>,

    #[serde(default)]
    accepted: Vec<String>,
}

impl NudgeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, nudge: Nudge) -> Result<()> {
        validation::validate_id(&nudge.id)?;
        validation::validate_title(&nudge.title)?;
        validation::validate_text("Reason", &nudge.reason)?;
        validation::validate_text("Suggestion", &nudge.suggestion)?;

        if self.get(&nudge.id).is_some() {
            return Err(HuddleError::DuplicateId(format!(
                "nudge '{}' is already pending",
                nudge.id
            )));
        }
        tracing::info!(id = %nudge.id, title = %nudge.title, difficulty = %nudge.difficulty, "Enqueuing nudge");
        self.pending.push(nudge);
        Ok(())
    }

    /// Removes the nudge from the queue and records it in the accepted log.
    pub fn accept(&mut self, id: &str) -> Result<Nudge> {
        let nudge = self.take(id)?;
        tracing::info!(id = %id, "Accepted nudge");
        self.accepted.push(nudge.id.clone());
        Ok(nudge)
    }

    /// Removes the nudge without recording it.
    pub fn dismiss(&mut self, id: &str) -> Result<Nudge> {
        let nudge = self.take(id)?;
        tracing::info!(id = %id, "Dismissed nudge");
        Ok(nudge)
    }

    pub fn get(&self, id: &str) -> Option<&Nudge> {
        self.pending.iter().find(|n| n.id == id)
    }

    pub fn pending(&self) -> &[Nudge] {
        &self.pending
    }

    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn take(&mut self, id: &str) -> Result<Nudge> {
        let pos = self
            .pending
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| HuddleError::NotFound(format!("nudge '{}' is not pending", id)))?;
        // Vec::remove keeps the remaining entries in arrival order
        Ok(self.pending.remove(pos))
    }
}
