//! Real system implementation using `std::fs` and `dirs`

use super::System;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Production implementation of System trait
///
/// This implementation delegates to the standard library's filesystem
/// functions and to `dirs` for the home directory.
#[derive(Debug, Clone, Copy)]
pub struct RealSystem;

impl RealSystem {
    /// Create a new `RealSystem` instance
    #[must_use]
    pub const fn new() -> Self {
        return Self;
    }
}

impl Default for RealSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for RealSystem {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
