mod element;
mod init;
mod nudge;
mod prompts;
mod session;
mod status;
mod utils;

pub use element::handle_element;
pub use init::handle_init;
pub use nudge::handle_nudge;
pub use prompts::handle_prompts;
pub use session::{handle_end, handle_start};
pub use status::{handle_advance, handle_status};

use crate::catalog::Catalog;
use crate::config::HuddleConfig;
use crate::session::Session;
use crate::storage::SessionStore;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: HuddleConfig,
    pub root: PathBuf,
    pub store: SessionStore,
}

impl CommandContext {
    pub fn new(config: HuddleConfig, root: PathBuf) -> Self {
        let store = SessionStore::new(&config, &root);
        Self {
            config,
            root,
            store,
        }
    }

    /// Discover `.huddle.toml` from the current directory upwards.
    pub fn discover() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let (config, root) =
            HuddleConfig::load(&cwd).context("Failed to load huddle config")?;
        Ok(Self::new(config, root))
    }

    pub fn catalog(&self) -> Result<Catalog> {
        self.config
            .catalog(&self.root)
            .context("Failed to load catalog")
    }

    /// Load the active session, apply `op`, and persist the result.
    /// `op` sees the session already touched, so whatever it returns matches
    /// what is written. Nothing is written when `op` fails.
    pub fn update_session<T>(&self, op: impl FnOnce(&mut Session) -> Result<T>) -> Result<T> {
        let mut session = self.store.load()?;
        session.touch();
        let out = op(&mut session)?;
        self.store.save(&session)?;
        Ok(out)
    }
}
