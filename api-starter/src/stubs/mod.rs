//! Stub loading and token substitution
//!
//! Stubs are plain text files containing `{{ KEY }}` placeholders. A
//! [`StubRenderer`] asks an ordered chain of [`StubResolver`]s for the stub by
//! logical name (the first hit wins), then replaces every known placeholder in
//! a single left-to-right pass. Unknown placeholders are left untouched.

pub mod bundled;
pub mod resolver;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, ScaffoldError};

pub use bundled::{BundledResolver, BUNDLED_STUBS};
pub use resolver::{DirectoryResolver, StubResolver};

/// Placeholder values keyed by token name (`CLASS_NAME`, `TABLE_NAME`, ...)
pub type Tokens = BTreeMap<String, String>;

/// `{{ KEY }}` with exactly one space of padding on each side
#[allow(clippy::expect_used)]
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{ ([^{}\s]+) \}\}").expect("valid token pattern"));

/// Replace `{{ KEY }}` placeholders with values from `tokens`
///
/// Replacement values are never rescanned, and keys missing from `tokens`
/// are passed through verbatim.
///
/// # Examples
///
/// ```
/// use api_starter::stubs::{substitute, Tokens};
///
/// let mut tokens = Tokens::new();
/// tokens.insert("NAME".to_string(), "X".to_string());
///
/// assert_eq!(substitute("Hello {{ NAME }}", &tokens), "Hello X");
/// assert_eq!(substitute("Hello {{ UNKNOWN }}", &tokens), "Hello {{ UNKNOWN }}");
/// ```
#[must_use]
pub fn substitute(template: &str, tokens: &Tokens) -> String {
    TOKEN_PATTERN
        .replace_all(template, |caps: &Captures<'_>| {
            tokens
                .get(&caps[1])
                .map_or_else(|| caps[0].to_string(), Clone::clone)
        })
        .into_owned()
}

/// Resolves stubs through an ordered chain and renders them
pub struct StubRenderer {
    resolvers: Vec<Box<dyn StubResolver>>,
}

impl StubRenderer {
    /// Create a renderer that queries `resolvers` in order
    #[must_use]
    pub fn new(resolvers: Vec<Box<dyn StubResolver>>) -> Self {
        Self { resolvers }
    }

    /// Project override directory first, bundled defaults second
    #[must_use]
    pub fn with_override_dir(override_dir: impl Into<std::path::PathBuf>) -> Self {
        Self::new(vec![
            Box::new(DirectoryResolver::new(override_dir)),
            Box::new(BundledResolver),
        ])
    }

    /// Load the raw stub text for a logical name
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::TemplateNotFound`] when no resolver has the
    /// stub, or a filesystem error if an existing stub cannot be read.
    pub fn load(&self, name: &str) -> Result<String> {
        for resolver in &self.resolvers {
            if let Some(content) = resolver.resolve(name)? {
                tracing::debug!(stub = name, source = %resolver.describe(), "resolved stub");
                return Ok(content);
            }
        }

        Err(ScaffoldError::TemplateNotFound {
            name: name.to_string(),
            searched: self
                .resolvers
                .iter()
                .map(|r| r.describe())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    /// Load a stub and substitute its tokens
    ///
    /// # Errors
    ///
    /// See [`StubRenderer::load`].
    pub fn render(&self, name: &str, tokens: &Tokens) -> Result<String> {
        Ok(substitute(&self.load(name)?, tokens))
    }
}

/// Write rendered text to `path`, creating parent directories as needed
///
/// An existing file is overwritten.
///
/// # Errors
///
/// Returns [`ScaffoldError::Filesystem`] if a directory cannot be created or
/// the file cannot be written.
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::filesystem(parent, e))?;
    }

    fs::write(path, contents).map_err(|e| ScaffoldError::filesystem(path, e))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");

    Ok(())
}
