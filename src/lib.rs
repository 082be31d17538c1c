//! # Huddle - A facilitator console for group-reflection sessions
//!
//! Huddle tracks a facilitation journey through four phases (Pause, Expand,
//! Focus, Doing), queues real-time nudges for the facilitator, and serves a
//! library of reusable prompts.
//!
//! ## Features
//!
//! - **Phase tracking**: current step, per-phase status, reorderable library elements
//! - **Nudge queue**: accept or dismiss suggested interventions, with an accepted log
//! - **Prompt library**: case-insensitive filtering over titles and tags
//! - **Swappable content**: phases and prompts load from a TOML or YAML catalog
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a project
//! huddle init
//!
//! # Start a session with demo nudges
//! huddle start --demo
//!
//! # See where the journey is
//! huddle status
//!
//! # Move on and act on a nudge
//! huddle advance
//! huddle nudge accept n1
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Phase and prompt content, file loading
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and project discovery
//! - [`error`]: Error types and result aliases
//! - [`model`]: Data models (Phase, LibraryElement, Nudge, PromptTemplate)
//! - [`session`]: Phase tracker, nudge queue and prompt library
//! - [`storage`]: Persistence of the active session
//! - [`validation`]: Input validation utilities

/// Phase and prompt content supplied to a session.
pub mod catalog;

/// Command-line interface using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.huddle.toml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `HuddleError` enum and `Result<T>` type alias.
pub mod error;

/// Data models for sessions.
pub mod model;

/// Session state and its operations.
pub mod session;

/// File-based storage for the active session.
pub mod storage;

/// Input validation utilities.
///
/// Validates titles, IDs, tags and free text.
pub mod validation;

pub mod logging;
pub mod search;
