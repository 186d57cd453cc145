//! Bearer token persistence.
//!
//! Storage problems never reach the caller: a token that cannot be read is
//! an absent token, and a failed write is logged and dropped.

use parking_lot::RwLock;
use std::io;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Fixed key the session token is stored under
pub const TOKEN_STORAGE_KEY: &str = "clinic.auth.token";

/// Durable holder of the current session's bearer token
pub trait CredentialStore: Send + Sync {
    /// Stored token, or `None` when absent or unreadable
    fn get_stored_token(&self) -> Option<String>;

    /// Store `Some(token)` or remove the token on `None`; no format checks
    fn set_stored_token(&self, token: Option<&str>);

    fn clear(&self) {
        self.set_stored_token(None);
    }
}

/// Token kept on disk, one file per storage key under `dir`
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    dir: PathBuf,
}

impl FileCredentialStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_STORAGE_KEY)
    }

    fn write_token(&self, token: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.token_path();
        let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
        std::fs::write(&tmp, token)?;
        std::fs::rename(&tmp, &path).inspect_err(|_| {
            if let Err(e) = std::fs::remove_file(&tmp) {
                tracing::debug!(error = %e, "failed to remove temporary token file");
            }
        })
    }
}

impl CredentialStore for FileCredentialStore {
    fn get_stored_token(&self) -> Option<String> {
        match std::fs::read_to_string(self.token_path()) {
            Ok(token) => Some(token),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(error = %e, dir = %self.dir.display(), "failed to read stored token");
                None
            }
        }
    }

    fn set_stored_token(&self, token: Option<&str>) {
        let result = match token {
            Some(token) => self.write_token(token),
            None => match std::fs::remove_file(self.token_path()) {
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                other => other,
            },
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, dir = %self.dir.display(), "failed to update stored token");
        }
    }
}

/// Process-local token, gone when the process exits
#[derive(Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<Zeroizing<String>>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(Zeroizing::new(token.into()))),
        }
    }
}

impl std::fmt::Debug for MemoryCredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCredentialStore")
            .field("has_token", &self.token.read().is_some())
            .finish()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get_stored_token(&self) -> Option<String> {
        self.token.read().as_ref().map(|t| t.as_str().to_owned())
    }

    fn set_stored_token(&self, token: Option<&str>) {
        *self.token.write() = token.map(|t| Zeroizing::new(t.to_owned()));
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn round_trip(store: &dyn CredentialStore) {
        assert_eq!(store.get_stored_token(), None);

        store.set_stored_token(Some("abc"));
        assert_eq!(store.get_stored_token().as_deref(), Some("abc"));

        store.set_stored_token(Some("def"));
        assert_eq!(store.get_stored_token().as_deref(), Some("def"));

        store.set_stored_token(None);
        assert_eq!(store.get_stored_token(), None);
    }

    #[test]
    fn test_memory_store_round_trip() {
        round_trip(&MemoryCredentialStore::new());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        round_trip(&FileCredentialStore::new(dir.path().join("nested")));
    }

    #[test]
    fn test_file_store_uses_fixed_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path());
        store.set_stored_token(Some("tok"));

        let on_disk = std::fs::read_to_string(dir.path().join(TOKEN_STORAGE_KEY)).unwrap();
        assert_eq!(on_disk, "tok");
        let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn test_file_store_shared_between_instances() {
        let dir = tempfile::tempdir().unwrap();
        FileCredentialStore::new(dir.path()).set_stored_token(Some("persisted"));
        assert_eq!(
            FileCredentialStore::new(dir.path())
                .get_stored_token()
                .as_deref(),
            Some("persisted")
        );
    }

    #[test]
    fn test_unwritable_store_degrades_to_absent() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let store = FileCredentialStore::new(&blocker);
        store.set_stored_token(Some("abc"));
        assert_eq!(store.get_stored_token(), None);
        store.clear();
    }

    #[test]
    fn test_memory_debug_hides_token() {
        let store = MemoryCredentialStore::with_token("secret-token");
        let dbg = format!("{store:?}");
        assert!(!dbg.contains("secret-token"));
        assert!(dbg.contains("has_token: true"));
    }
}
