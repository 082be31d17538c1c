use crate::{
    config::HuddleConfig,
    error::{HuddleError, Result},
    session::Session,
};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const SESSION_FILE: &str = "session.json";

/// Persists the single active session as JSON inside the data directory.
pub struct SessionStore {
    data_path: PathBuf,
}

impl SessionStore {
    pub fn new(config: &HuddleConfig, project_root: &Path) -> Self {
        Self {
            data_path: config.data_path(project_root),
        }
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_path.join(SESSION_FILE)
    }

    pub fn exists(&self) -> bool {
        self.session_path().exists()
    }

    pub fn load(&self) -> Result<Session> {
        let path = self.session_path();
        if !path.exists() {
            return Err(HuddleError::NoActiveSession);
        }
        let content = std::fs::read_to_string(&path)?;
        let session: Session = serde_json::from_str(&content).map_err(|e| {
            HuddleError::Storage(format!("Unreadable session file {}: {}", path.display(), e))
        })?;
        Ok(session)
    }

    /// Writes a fresh session. Refuses to replace a running one unless `force`.
    pub fn create(&self, session: &Session, force: bool) -> Result<PathBuf> {
        if !force && self.exists() {
            let started = match self.load() {
                Ok(existing) => existing.started.format("%Y-%m-%d %H:%M").to_string(),
                Err(e) => {
                    tracing::warn!(error = %e, "Existing session file is unreadable");
                    "at an unknown time, file unreadable".to_string()
                }
            };
            return Err(HuddleError::SessionActive(started));
        }
        tracing::info!(path = %self.session_path().display(), force, "Creating session");
        self.save(session)
    }

    pub fn save(&self, session: &Session) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.data_path)?;
        let path = self.session_path();
        let content = serde_json::to_string_pretty(session)?;
        self.atomic_write(&path, &content)?;
        tracing::debug!(path = %path.display(), "Saved session");
        Ok(path)
    }

    /// Discards the active session.
    pub fn end(&self) -> Result<Session> {
        let session = self.load()?;
        std::fs::remove_file(self.session_path())?;
        tracing::info!(started = %session.started, "Ended session");
        Ok(session)
    }

    /// Write to a temp file in the target directory, then rename over the target.
    fn atomic_write(&self, target_path: &Path, content: &str) -> Result<()> {
        let target_dir = target_path
            .parent()
            .ok_or_else(|| HuddleError::Storage("Target path has no parent directory".to_string()))?;

        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| HuddleError::Storage(format!("Failed to create temp file: {}", e)))?;

        use std::io::Write;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| HuddleError::Storage(format!("Failed to write to temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| HuddleError::Storage(format!("Failed to sync temp file: {}", e)))?;

        temp_file
            .persist(target_path)
            .map_err(|e| HuddleError::Storage(format!("Failed to persist temp file: {}", e)))?;

        Ok(())
    }
}
