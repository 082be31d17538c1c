use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::ElementKind;

#[derive(Parser)]
#[command(name = "huddle")]
#[command(
    author,
    version,
    about = "A facilitator console for structured group-reflection sessions"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "HUDDLE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new huddle project in the current directory
    Init {
        /// Catalog file (.toml, .yaml or .yml) with phases and prompts
        #[arg(long)]
        catalog: Option<String>,
    },

    /// Start a new session at the Pause phase
    Start {
        /// Seed the nudge queue with demo signals
        #[arg(long)]
        demo: bool,

        /// Replace a session that is already running
        #[arg(long)]
        force: bool,
    },

    /// End the running session and discard its state
    End,

    /// Show the journey overview and suggestions for the current phase
    #[command(visible_alias = "st")]
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move the journey to a phase (next phase when omitted)
    Advance {
        /// Phase name or step number (1-4)
        step: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage library elements of a phase
    #[command(subcommand)]
    Element(ElementAction),

    /// Manage the nudge queue
    #[command(subcommand)]
    Nudge(NudgeAction),

    /// Browse the prompt library
    Prompts {
        /// Substring matched against titles and tags
        #[arg(default_value = "")]
        query: String,

        /// Enable field prefixes (title:, tag:, id:, example:) and regex:
        #[arg(long)]
        advanced: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ElementAction {
    /// List elements of a phase (current phase when omitted)
    #[command(visible_alias = "ls")]
    List {
        #[arg(short, long)]
        phase: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Append an element to a phase
    Add {
        /// Element title
        title: String,

        #[arg(short, long)]
        phase: String,

        #[arg(short, long, value_enum)]
        kind: ElementKindArg,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Element ID (derived from the title when omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// Remove an element from a phase
    #[command(visible_alias = "rm")]
    Remove {
        /// Element ID
        id: String,

        #[arg(short, long)]
        phase: String,
    },

    /// Move an element from one position to another (0-based)
    Move {
        from: usize,

        to: usize,

        #[arg(short, long)]
        phase: String,
    },

    /// Move an element one position earlier
    Up {
        pos: usize,

        #[arg(short, long)]
        phase: String,
    },

    /// Move an element one position later
    Down {
        pos: usize,

        #[arg(short, long)]
        phase: String,
    },
}

#[derive(Subcommand)]
pub enum NudgeAction {
    /// List pending nudges
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the accepted-nudge log
    Accepted {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Queue a new nudge
    Add {
        /// Short title
        title: String,

        /// What triggered the nudge
        #[arg(short, long, default_value = "")]
        reason: String,

        /// What the facilitator could say or do
        #[arg(short, long, default_value = "")]
        suggestion: String,

        /// 1 (gentle) to 3 (bold)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
        difficulty: u8,

        /// Advisory cooldown in seconds
        #[arg(short, long, default_value_t = 0)]
        cooldown: u64,

        /// Nudge ID (generated when omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// Accept a nudge and log it
    Accept { id: String },

    /// Dismiss a nudge without logging it
    Dismiss { id: String },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ElementKindArg {
    Word,
    Prompt,
    Visual,
    Exercise,
    Deck,
    Template,
}

impl From<ElementKindArg> for ElementKind {
    fn from(arg: ElementKindArg) -> Self {
        match arg {
            ElementKindArg::Word => ElementKind::Word,
            ElementKindArg::Prompt => ElementKind::Prompt,
            ElementKindArg::Visual => ElementKind::Visual,
            ElementKindArg::Exercise => ElementKind::Exercise,
            ElementKindArg::Deck => ElementKind::Deck,
            ElementKindArg::Template => ElementKind::Template,
        }
    }
}
