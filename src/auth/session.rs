use crate::models::UserProfile;
use keyring::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, info, warn};

const KEYRING_SERVICE: &str = "hotelhub";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Session store is unavailable")]
    Poisoned,
}

/// The two values the app keeps between launches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    AuthToken,
    User,
}

impl SessionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::AuthToken => "authToken",
            SessionKey::User => "user",
        }
    }
}

/// Client-side persisted session state: the bearer token and the
/// logged-in user's profile as a JSON blob
///
/// Reads and writes are independent; nothing is transactional.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionError>;
    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: SessionKey) -> Result<(), SessionError>;
}

pub type SharedSessionStore = Arc<dyn SessionStore>;

/// Read the stored token, treating any store failure as "no token"
pub fn stored_token(store: &dyn SessionStore) -> Option<String> {
    match store.get(SessionKey::AuthToken) {
        Ok(token) => token.filter(|t| !t.is_empty()),
        Err(e) => {
            warn!("Failed to read auth token: {}", e);
            None
        }
    }
}

/// Read and parse the stored user profile
pub fn stored_user(store: &dyn SessionStore) -> Option<UserProfile> {
    let json = match store.get(SessionKey::User) {
        Ok(Some(json)) => json,
        Ok(None) => return None,
        Err(e) => {
            warn!("Failed to read stored user: {}", e);
            return None;
        }
    };

    match serde_json::from_str(&json) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("Stored user is not valid JSON: {}", e);
            None
        }
    }
}

pub fn store_user(store: &dyn SessionStore, user: &UserProfile) -> Result<(), SessionError> {
    let json = serde_json::to_string(user)?;
    store.set(SessionKey::User, &json)
}

/// Token in the system keychain, user profile as a JSON file in the config dir
pub struct KeyringSessionStore {
    token_entry: Entry,
    user_file: UserFile,
}

impl KeyringSessionStore {
    pub fn new(user_file: PathBuf) -> Result<Self, SessionError> {
        let token_entry = Entry::new(KEYRING_SERVICE, SessionKey::AuthToken.as_str())?;
        Ok(Self {
            token_entry,
            user_file: UserFile::new(user_file),
        })
    }
}

impl SessionStore for KeyringSessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionError> {
        match key {
            SessionKey::AuthToken => match self.token_entry.get_password() {
                Ok(token) => Ok(Some(token)),
                Err(keyring::Error::NoEntry) => {
                    debug!("No auth token in keyring");
                    Ok(None)
                }
                Err(e) => Err(SessionError::Keyring(e)),
            },
            SessionKey::User => self.user_file.read(),
        }
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionError> {
        match key {
            SessionKey::AuthToken => {
                self.token_entry.set_password(value)?;
                info!("Stored auth token in keyring");
                Ok(())
            }
            SessionKey::User => self.user_file.write(value),
        }
    }

    fn remove(&self, key: SessionKey) -> Result<(), SessionError> {
        match key {
            SessionKey::AuthToken => match self.token_entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
                Err(e) => Err(SessionError::Keyring(e)),
            },
            SessionKey::User => self.user_file.remove(),
        }
    }
}

/// Plain file holding one JSON document
struct UserFile {
    path: PathBuf,
}

impl UserFile {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read(&self) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::Io(e)),
        }
    }

    fn write(&self, contents: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, contents)?;
        debug!("Wrote user profile to {}", self.path.display());
        Ok(())
    }

    fn remove(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Io(e)),
        }
    }

    #[cfg(test)]
    fn path(&self) -> &Path {
        &self.path
    }
}

/// In-memory store, used by tests and when the keychain is not available
#[derive(Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<SessionKey, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedSessionStore {
        Arc::new(Self::new())
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionError> {
        let values = self.values.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(values.get(&key).cloned())
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionError> {
        let mut values = self.values.lock().map_err(|_| SessionError::Poisoned)?;
        values.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<(), SessionError> {
        let mut values = self.values.lock().map_err(|_| SessionError::Poisoned)?;
        values.remove(&key);
        Ok(())
    }
}

/// Open the keychain-backed store, falling back to memory when the
/// platform has no usable keychain
pub fn open_session_store(user_file: &Path) -> SharedSessionStore {
    match KeyringSessionStore::new(user_file.to_path_buf()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!("Keyring unavailable ({}), session will not persist", e);
            MemorySessionStore::shared()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(SessionKey::AuthToken).unwrap(), None);

        store.set(SessionKey::AuthToken, "abc").unwrap();
        assert_eq!(stored_token(&store), Some("abc".to_string()));

        store.remove(SessionKey::AuthToken).unwrap();
        assert_eq!(stored_token(&store), None);
    }

    #[test]
    fn test_stored_user_ignores_invalid_json() {
        let store = MemorySessionStore::new();
        store.set(SessionKey::User, "{not json").unwrap();
        assert!(stored_user(&store).is_none());

        let user = UserProfile {
            first_name: "Minh".to_string(),
            email: "minh@example.com".to_string(),
            ..Default::default()
        };
        store_user(&store, &user).unwrap();
        assert_eq!(stored_user(&store), Some(user));
    }

    #[test]
    fn test_user_file_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let file = UserFile::new(dir.path().join("nested").join("user.json"));

        assert_eq!(file.read().unwrap(), None);
        file.write(r#"{"email":"a@b.co"}"#).unwrap();
        assert!(file.path().exists());
        assert_eq!(file.read().unwrap().as_deref(), Some(r#"{"email":"a@b.co"}"#));

        file.remove().unwrap();
        file.remove().unwrap();
        assert_eq!(file.read().unwrap(), None);
    }
}
