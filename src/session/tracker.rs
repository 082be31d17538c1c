use crate::error::{HuddleError, Result};
use crate::model::{LibraryElement, PHASE_COUNT, Phase, PhaseName, PhaseStatus};
use crate::validation;
use serde::{Deserialize, Serialize};

/// Tracks where a journey currently is and owns each phase's element order.
///
/// Deserialization goes through [`PhaseTracker::new`], so a stored tracker
/// with a step outside `1..=4` or misordered phases is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredTracker")]
pub struct PhaseTracker {
    current_step: usize,
    phases: Vec<Phase>,
}

#[derive(Deserialize)]
struct StoredTracker {
    current_step: usize,
    phases: Vec<Phase>,
}

impl TryFrom<StoredTracker> for PhaseTracker {
    type Error = HuddleError;

    fn try_from(stored: StoredTracker) -> Result<Self> {
        PhaseName::from_step(stored.current_step)?;
        let mut tracker = Self::new(stored.phases)?;
        tracker.current_step = stored.current_step;
        Ok(tracker)
    }
}

impl PhaseTracker {
    /// Starts at step 1. `phases` must hold the four phases in journey order,
    /// which [`crate::catalog::Catalog::validate`] guarantees.
    pub fn new(phases: Vec<Phase>) -> Result<Self> {
        let in_order = phases.len() == PHASE_COUNT
            && phases.iter().zip(PhaseName::ALL).all(|(p, n)| p.name == n);
        if !in_order {
            return Err(HuddleError::Config(
                "Phases must be pause, expand, focus, doing in that order".to_string(),
            ));
        }
        Ok(Self {
            current_step: 1,
            phases,
        })
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn advance_to(&mut self, step: usize) -> Result<&Phase> {
        let name = PhaseName::from_step(step)?;
        tracing::info!(from = self.current_step, to = step, phase = %name, "Advancing journey");
        self.current_step = step;
        Ok(self.current_phase())
    }

    /// Moves to the following phase. Fails once the journey is at Doing.
    pub fn advance(&mut self) -> Result<&Phase> {
        self.advance_to(self.current_step + 1)
    }

    pub fn current_phase(&self) -> &Phase {
        &self.phases[self.current_step - 1]
    }

    pub fn phase(&self, name: PhaseName) -> &Phase {
        &self.phases[name.step() - 1]
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn status_of(&self, name: PhaseName) -> PhaseStatus {
        match name.step().cmp(&self.current_step) {
            std::cmp::Ordering::Less => PhaseStatus::Done,
            std::cmp::Ordering::Equal => PhaseStatus::InProgress,
            std::cmp::Ordering::Greater => PhaseStatus::Queued,
        }
    }

    pub fn overview(&self) -> Vec<(PhaseName, PhaseStatus)> {
        PhaseName::ALL
            .iter()
            .map(|&name| (name, self.status_of(name)))
            .collect()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.current_phase().suggestions
    }

    pub fn reorder_element(&mut self, name: PhaseName, from: usize, to: usize) -> Result<()> {
        let elements = &mut self.phase_mut(name).elements;
        let len = elements.len();
        for pos in [from, to] {
            if pos >= len {
                return Err(HuddleError::OutOfRange(format!(
                    "position {} in phase '{}' with {} elements",
                    pos, name, len
                )));
            }
        }
        if from == to {
            return Ok(());
        }

        let element = elements.remove(from);
        tracing::info!(phase = %name, id = %element.id, from, to, "Reordering element");
        elements.insert(to, element);
        Ok(())
    }

    /// Swaps the element with its predecessor. Returns `false` without change
    /// when it is already first.
    pub fn move_up(&mut self, name: PhaseName, pos: usize) -> Result<bool> {
        self.check_position(name, pos)?;
        if pos == 0 {
            tracing::debug!(phase = %name, pos, "Element already first");
            return Ok(false);
        }
        self.reorder_element(name, pos, pos - 1)?;
        Ok(true)
    }

    /// Swaps the element with its successor. Returns `false` without change
    /// when it is already last.
    pub fn move_down(&mut self, name: PhaseName, pos: usize) -> Result<bool> {
        self.check_position(name, pos)?;
        if pos + 1 == self.phase(name).elements.len() {
            tracing::debug!(phase = %name, pos, "Element already last");
            return Ok(false);
        }
        self.reorder_element(name, pos, pos + 1)?;
        Ok(true)
    }

    pub fn add_element(&mut self, name: PhaseName, element: LibraryElement) -> Result<()> {
        validation::validate_id(&element.id)?;
        validation::validate_title(&element.title)?;
        validation::validate_text("Description", &element.description)?;

        let phase = self.phase_mut(name);
        if phase.position_of(&element.id).is_some() {
            return Err(HuddleError::DuplicateId(format!(
                "element '{}' already exists in phase '{}'",
                element.id, name
            )));
        }
        tracing::info!(phase = %name, id = %element.id, kind = %element.kind, "Adding element");
        phase.elements.push(element);
        Ok(())
    }

    pub fn remove_element(&mut self, name: PhaseName, element_id: &str) -> Result<LibraryElement> {
        let phase = self.phase_mut(name);
        let pos = phase.position_of(element_id).ok_or_else(|| {
            HuddleError::NotFound(format!("element '{}' in phase '{}'", element_id, name))
        })?;
        tracing::info!(phase = %name, id = %element_id, "Removing element");
        Ok(phase.elements.remove(pos))
    }

    fn check_position(&self, name: PhaseName, pos: usize) -> Result<()> {
        let len = self.phase(name).elements.len();
        if pos >= len {
            return Err(HuddleError::OutOfRange(format!(
                "position {} in phase '{}' with {} elements",
                pos, name, len
            )));
        }
        Ok(())
    }

    fn phase_mut(&mut self, name: PhaseName) -> &mut Phase {
        &mut self.phases[name.step() - 1]
    }
}
