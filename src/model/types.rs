use crate::error::{HuddleError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Number of phases in a journey.
pub const PHASE_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseName {
    Pause,
    Expand,
    Focus,
    Doing,
}

impl PhaseName {
    pub const ALL: [PhaseName; PHASE_COUNT] = [
        PhaseName::Pause,
        PhaseName::Expand,
        PhaseName::Focus,
        PhaseName::Doing,
    ];

    /// 1-based position of the phase within a journey.
    pub fn step(self) -> usize {
        match self {
            PhaseName::Pause => 1,
            PhaseName::Expand => 2,
            PhaseName::Focus => 3,
            PhaseName::Doing => 4,
        }
    }

    pub fn from_step(step: usize) -> Result<Self> {
        if !(1..=PHASE_COUNT).contains(&step) {
            return Err(HuddleError::OutOfRange(format!(
                "step {} is outside 1..={}",
                step, PHASE_COUNT
            )));
        }
        Ok(Self::ALL[step - 1])
    }

    pub fn next(self) -> Option<Self> {
        Self::from_step(self.step() + 1).ok()
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseName::Pause => write!(f, "pause"),
            PhaseName::Expand => write!(f, "expand"),
            PhaseName::Focus => write!(f, "focus"),
            PhaseName::Doing => write!(f, "doing"),
        }
    }
}

impl FromStr for PhaseName {
    type Err = HuddleError;

    /// Accepts a phase name or its step number.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pause" | "1" => Ok(PhaseName::Pause),
            "expand" | "2" => Ok(PhaseName::Expand),
            "focus" | "3" => Ok(PhaseName::Focus),
            "doing" | "do" | "4" => Ok(PhaseName::Doing),
            _ => Err(HuddleError::Parse(format!("Invalid phase: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    Done,
    InProgress,
    Queued,
}

impl fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseStatus::Done => write!(f, "done"),
            PhaseStatus::InProgress => write!(f, "in-progress"),
            PhaseStatus::Queued => write!(f, "queued"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Word,
    Prompt,
    Visual,
    Exercise,
    Deck,
    Template,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Word => write!(f, "word"),
            ElementKind::Prompt => write!(f, "prompt"),
            ElementKind::Visual => write!(f, "visual"),
            ElementKind::Exercise => write!(f, "exercise"),
            ElementKind::Deck => write!(f, "deck"),
            ElementKind::Template => write!(f, "template"),
        }
    }
}

impl FromStr for ElementKind {
    type Err = HuddleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "word" => Ok(ElementKind::Word),
            "prompt" => Ok(ElementKind::Prompt),
            "visual" => Ok(ElementKind::Visual),
            "exercise" => Ok(ElementKind::Exercise),
            "deck" => Ok(ElementKind::Deck),
            "template" => Ok(ElementKind::Template),
            _ => Err(HuddleError::Parse(format!("Invalid element kind: {}", s))),
        }
    }
}

/// How much a nudge asks of the facilitator, from gentle (1) to bold (3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    #[default]
    Gentle,
    Moderate,
    Bold,
}

impl Difficulty {
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Gentle => 1,
            Difficulty::Moderate => 2,
            Difficulty::Bold => 3,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = HuddleError;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            1 => Ok(Difficulty::Gentle),
            2 => Ok(Difficulty::Moderate),
            3 => Ok(Difficulty::Bold),
            _ => Err(HuddleError::OutOfRange(format!(
                "difficulty {} is outside 1..=3",
                level
            ))),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.level()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}
