use crate::domain::ports::{SessionKey, SessionStore};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionData {
    token: String,
    username: String,
    issued_at: DateTime<Utc>,
}

/// Session state persisted as a small JSON file, standing in for the
/// browser's local storage. Missing or unreadable files read as signed-out.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn sign_in(&self, token: &str, username: &str) -> Result<()> {
        let data = SessionData {
            token: token.to_string(),
            username: username.to_string(),
            issued_at: Utc::now(),
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&data)?)?;
        Ok(())
    }

    fn load(&self) -> Option<SessionData> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!("Ignoring unreadable session file {:?}: {}", self.path, e);
                None
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        let data = self.load()?;
        match key {
            SessionKey::Token => Some(data.token),
            SessionKey::Username => Some(data.username),
        }
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Could not clear session file {:?}: {}", self.path, e);
            }
        }
    }
}
