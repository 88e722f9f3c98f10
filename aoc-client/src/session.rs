//! Session token storage

use crate::error::AocError;
use std::fs;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Environment variable consulted when no session file exists
pub const SESSION_ENV_VAR: &str = "AOC_SESSION";

// Tokens issued by the site are hex and start with the encoding of "Salted__"
const MAGIC_SESSION_PREFIX: &str = "53616c7465645f5f";

/// Reads and writes the session token at a fixed per-user config path.
///
/// `load` falls back to the [`SESSION_ENV_VAR`] environment variable when the
/// file is absent.
///
/// # Example
///
/// ```no_run
/// use aoc_client::SessionStore;
///
/// # fn main() -> Result<(), aoc_client::AocError> {
/// let store = SessionStore::new()?;
/// let token = store.load()?;
/// # Ok(())
/// # }
/// ```
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default per-user path, `{config_dir}/aoc/.aoc_session`
    /// (`~/.config/aoc/.aoc_session` on Linux).
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the platform config directory cannot
    /// be determined.
    pub fn new() -> Result<Self, AocError> {
        let dir = dirs::config_dir().ok_or_else(|| {
            AocError::ClientInit("could not determine the user config directory".to_string())
        })?;
        Ok(Self::at(dir.join("aoc").join(".aoc_session")))
    }

    /// Store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The session file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a session file already exists. Confirming an overwrite is the
    /// caller's concern, not the store's.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the token from the session file, trimmed, falling back to the
    /// `AOC_SESSION` environment variable.
    ///
    /// # Errors
    ///
    /// Returns `AocError::MissingCredential` naming both the file path and
    /// the variable when neither source is present.
    pub fn load(&self) -> Result<Zeroizing<String>, AocError> {
        if let Ok(contents) = fs::read_to_string(&self.path) {
            return Ok(Zeroizing::new(contents.trim().to_string()));
        }
        match std::env::var(SESSION_ENV_VAR) {
            Ok(token) => Ok(Zeroizing::new(token)),
            Err(_) => Err(AocError::MissingCredential {
                path: self.path.clone(),
                env_var: SESSION_ENV_VAR,
            }),
        }
    }

    /// Save the token, creating parent directories as needed.
    ///
    /// Warns (non-fatally) when the token does not look like one issued by
    /// the site; the save still proceeds.
    pub fn save(&self, token: &str) -> Result<(), AocError> {
        if !token.starts_with(MAGIC_SESSION_PREFIX) {
            tracing::warn!(
                "session token does not begin with '{}...', perhaps it is invalid?",
                MAGIC_SESSION_PREFIX
            );
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = SessionStore::at(temp.path().join("aoc").join(".aoc_session"));

        assert!(!store.exists());
        store.save("53616c7465645f5fdeadbeef").unwrap();
        assert!(store.exists());
        assert_eq!(&*store.load().unwrap(), "53616c7465645f5fdeadbeef");
    }

    #[test]
    fn test_load_trims_trailing_newline() {
        let temp = TempDir::new().unwrap();
        let store = SessionStore::at(temp.path().join(".aoc_session"));

        fs::write(store.path(), "sometoken\n").unwrap();
        assert_eq!(&*store.load().unwrap(), "sometoken");
    }

    #[test]
    fn test_save_accepts_suspicious_token() {
        // Wrong prefix only warns; the save must still go through
        let temp = TempDir::new().unwrap();
        let store = SessionStore::at(temp.path().join(".aoc_session"));

        store.save("not-a-real-token").unwrap();
        assert_eq!(&*store.load().unwrap(), "not-a-real-token");
    }

    #[test]
    fn test_env_fallback_and_missing_credential() {
        // One test so the env var mutations never race each other
        let temp = TempDir::new().unwrap();
        let store = SessionStore::at(temp.path().join(".aoc_session"));

        unsafe { std::env::remove_var(SESSION_ENV_VAR) };
        match store.load() {
            Err(AocError::MissingCredential { path, env_var }) => {
                assert_eq!(path, store.path());
                assert_eq!(env_var, SESSION_ENV_VAR);
            }
            other => panic!("expected MissingCredential, got {:?}", other.err()),
        }

        unsafe { std::env::set_var(SESSION_ENV_VAR, "abc123") };
        assert_eq!(&*store.load().unwrap(), "abc123");

        // The file takes precedence over the environment
        fs::write(store.path(), "from-file").unwrap();
        assert_eq!(&*store.load().unwrap(), "from-file");

        unsafe { std::env::remove_var(SESSION_ENV_VAR) };
    }
}
