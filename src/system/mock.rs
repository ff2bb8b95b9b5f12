//! Mock system implementation for testing

#![expect(clippy::module_name_repetitions)]

use super::System;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// In-memory implementation of System trait for testing
///
/// `MockSystem` provides an in-memory filesystem and home directory
/// for isolated unit tests without side effects.
///
/// # Example
/// ```
/// use nsot_cli::system::{mock::MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_file("/data/interfaces.txt", b"device:name\n1:eth0\n").unwrap();
///
/// assert_eq!(system.home_dir().unwrap(), Path::new("/home/user"));
/// assert!(system.exists(Path::new("/data/interfaces.txt")));
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    home_dir: Option<PathBuf>,
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MockSystem {
    /// Create a new `MockSystem` with default state
    ///
    /// The home directory defaults to `/home/user` and holds no files.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                home_dir: Some(PathBuf::from("/home/user")),
                files: HashMap::new(),
            })),
        }
    }

    /// Set or clear the home directory (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The internal state lock is poisoned
    #[inline]
    pub fn with_home_dir<P: AsRef<Path>>(self, dir: Option<P>) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.home_dir = dir.map(|d| d.as_ref().to_path_buf());
        drop(state);
        Ok(self)
    }

    /// Add a file with contents (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The internal state lock is poisoned
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state
            .files
            .insert(path.as_ref().to_path_buf(), contents.to_vec());
        drop(state);
        Ok(self)
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn home_dir(&self) -> Option<PathBuf> {
        self.state.read().ok().and_then(|s| s.home_dir.clone())
    }

    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        let bytes = state.files.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        let result = bytes.clone();
        drop(state);
        String::from_utf8(result)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    #[inline]
    fn exists(&self, path: &Path) -> bool {
        self.state
            .read()
            .map(|s| s.files.contains_key(path))
            .unwrap_or(false)
    }
}
