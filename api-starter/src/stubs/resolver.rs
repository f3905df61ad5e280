//! Stub resolvers
//!
//! A resolver answers "do you have this stub?" for a logical name such as
//! `controllers/api_controller.stub`. The renderer walks its resolvers in
//! order and stops at the first hit.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// One location stubs may be loaded from
pub trait StubResolver {
    /// Short description used in logs and not-found errors
    fn describe(&self) -> String;

    /// Return the stub contents, or `None` if this resolver does not have it
    ///
    /// # Errors
    ///
    /// Returns an error only when the stub exists but cannot be read.
    fn resolve(&self, name: &str) -> Result<Option<String>>;
}

/// Resolves stubs from files under a directory
///
/// A missing directory is not an error; it simply never reports a hit.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    root: PathBuf,
}

impl DirectoryResolver {
    /// Create a resolver rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory this resolver reads from
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path a stub would have in this directory
    #[must_use]
    pub fn stub_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl StubResolver for DirectoryResolver {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn resolve(&self, name: &str) -> Result<Option<String>> {
        let path = self.stub_path(name);
        if !path.is_file() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| ScaffoldError::filesystem(path, e))
    }
}
