use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Persistent retention for the single bearer token the client uses.
///
/// The store only ever holds one value; `save` replaces it and `clear`
/// deletes it. Clearing an already-empty store is not an error.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> io::Result<Option<String>>;
    fn save(&self, token: &str) -> io::Result<()>;
    fn clear(&self) -> io::Result<()>;
}

impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    fn load(&self) -> io::Result<Option<String>> { (**self).load() }
    fn save(&self, token: &str) -> io::Result<()> { (**self).save(token) }
    fn clear(&self) -> io::Result<()> { (**self).clear() }
}

/// The on-disk document format of [`FileTokenStore`].
#[derive(Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// Keeps the token as a small JSON document at a fixed path.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };
        // A document we cannot parse is treated the same as no document.
        match serde_json::from_str::<StoredToken>(&contents) {
            Ok(stored) => Ok(Some(stored.token)),
            Err(_) => Ok(None),
        }
    }

    fn save(&self, token: &str) -> io::Result<()> {
        let stored = StoredToken { token: token.to_string() };
        let contents = serde_json::to_string(&stored).map_err(io::Error::other)?;
        fs::write(&self.path, contents)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

/// In-process store for tests and for embedders that manage retention
/// themselves.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self { Self::default() }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.token.lock().unwrap().clone())
    }

    fn save(&self, token: &str) -> io::Result<()> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}
