//! System abstraction for environment and filesystem operations
//!
//! This module provides a unified trait for the few external system
//! interactions the client needs (reading the dotfile and bulk files),
//! allowing for easy testing with mock implementations.

use std::io;
use std::path::{Path, PathBuf};

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for system operations (environment + filesystem)
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs` and `dirs`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    // ==================== Environment Operations ====================

    /// Get the current user's home directory, if one can be determined
    fn home_dir(&self) -> Option<PathBuf>;

    // ==================== Filesystem Operations ====================

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;
}
