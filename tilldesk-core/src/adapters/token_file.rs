//! Persisted token storage
//!
//! One token string in one file under the app directory. The file is the
//! only thing that survives restarts; clearing it is how logout and auth
//! failure forget the session. Reads and writes take an advisory lock so
//! concurrent `till` invocations don't interleave.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::result::Result;

const TOKEN_FILE: &str = "token";

/// File-backed token store
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    /// Token store inside the app directory
    pub fn new(app_dir: &Path) -> Self {
        Self {
            path: app_dir.join(TOKEN_FILE),
        }
    }

    /// Read the persisted token; absent or empty file means no token
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut file = File::open(&self.path)?;
        file.lock_shared()?;
        let mut token = String::new();
        let read = file.read_to_string(&mut token);
        let _ = file.unlock();
        read?;

        let token = token.trim().to_string();
        Ok(if token.is_empty() { None } else { Some(token) })
    }

    /// Persist a token, replacing any previous one
    pub fn store(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.lock_exclusive()?;
        let write = file.write_all(token.as_bytes());
        let _ = file.unlock();
        write?;
        Ok(())
    }

    /// Forget the persisted token; clearing an absent token is fine
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_roundtrip() {
        let dir = tempdir().unwrap();
        let store = TokenFile::new(dir.path());

        assert!(store.load().unwrap().is_none());

        store.store("abc123").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc123"));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_store_overwrites() {
        let dir = tempdir().unwrap();
        let store = TokenFile::new(dir.path());

        store.store("first").unwrap();
        store.store("second").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = TokenFile::new(dir.path());

        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn test_whitespace_only_file_is_no_token() {
        let dir = tempdir().unwrap();
        let store = TokenFile::new(dir.path());

        std::fs::write(store.path(), "  \n").unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
