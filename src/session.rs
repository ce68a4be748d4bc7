use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::error::SessionError;

const SESSION_DIR: &str = "freetime";
const SESSION_FILE: &str = "session.json";

/// The signed-in user, persisted between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub username: String,

    /// Display name reported by the backend at sign-in; may be empty
    #[serde(default)]
    pub name: String,
}

impl Session {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.username
        } else {
            &self.name
        }
    }
}

/// Where the session lives. Abstracted so the persistence mechanism
/// (local file today, server-issued token some day) can be swapped
/// without touching command logic.
pub trait SessionStore {
    /// Current session, or None when signed out. Tolerant of a missing
    /// or corrupt backing store.
    fn load(&self) -> Option<Session>;

    fn save(&self, session: &Session) -> Result<(), SessionError>;

    fn clear(&self) -> Result<(), SessionError>;
}

/// Load the session or fail with a sign-in hint.
pub fn require(store: &dyn SessionStore) -> Result<Session, SessionError> {
    store.load().ok_or(SessionError::NotSignedIn)
}

/// File-backed store under the platform config directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new() -> Result<Self, SessionError> {
        let base = dirs::config_dir().ok_or(SessionError::NoConfigDir)?;
        Ok(Self {
            dir: base.join(SESSION_DIR),
        })
    }

    /// Store rooted at an explicit directory (used in tests)
    #[allow(dead_code)]
    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Option<Session> {
        let path = self.path();
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(session) => Some(session),
                Err(e) => {
                    warn!("Ignoring unreadable session file {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                warn!("Ignoring unreadable session file {:?}: {}", path, e);
                None
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(session)?;
        fs::write(self.path(), json)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
