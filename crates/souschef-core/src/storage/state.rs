//! JSON persistence for the active cooking session.
//!
//! A host process (the CLI in particular) is short-lived: each invocation
//! loads the session, applies one command, and saves it back. The absolute
//! timer anchor makes this safe - however much wall-clock time passed
//! between invocations, the next load reads the correct remaining time.

use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::CoreError;
use crate::session::CookingSession;

/// Loads and saves the active session under the data directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default location (`~/.config/souschef/session.json`).
    pub fn open() -> Result<Self, CoreError> {
        Ok(Self {
            path: data_dir()?.join("session.json"),
        })
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The persisted session, if one is active.
    pub fn load(&self) -> Result<Option<CookingSession>, CoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, session: &CookingSession) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Remove the persisted session (cooking is over).
    pub fn clear(&self) -> Result<(), CoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;

    fn sample_session() -> CookingSession {
        CookingSession::new(
            Recipe::new("Toast", vec!["Toast the bread for 2 minutes".into()]).unwrap(),
        )
    }

    #[test]
    fn load_returns_none_when_no_session_exists() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_load_clear_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));

        store.save(&sample_session()).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.recipe().title, "Toast");

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_state_surfaces_as_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = SessionStore::at(path);
        assert!(matches!(store.load(), Err(CoreError::Json(_))));
    }
}
