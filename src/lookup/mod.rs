//! Lookup Plugin System
//!
//! Lookup plugins resolve a template expression such as
//! `{{ lookup('file', 'motd.txt') }}` to a value. The only built-in plugin is
//! [`FileLookup`], which reads a file relative to a base directory and returns
//! its content with trailing whitespace removed.
//!
//! # Architecture
//!
//! 1. **[`LookupPlugin`]** trait: implemented by every lookup
//! 2. **[`LookupRegistry`]**: maps plugin names to implementations
//! 3. **[`LookupContext`]**: base directory plus typed extra context
//! 4. **[`PathResolver`]** / **[`Filesystem`]**: the two collaborators the
//!    file lookup delegates to
//!
//! # Example
//!
//! ```rust,no_run
//! use file_lookup::lookup::prelude::*;
//!
//! let registry = LookupRegistry::with_builtins();
//! let context = LookupContext::new().with_base_dir("/etc");
//!
//! let hosts = registry.lookup("file", &Terms::from("hosts"), &context)?;
//! assert_eq!(hosts.len(), 1);
//! # Ok::<(), LookupError>(())
//! ```

pub mod context;
pub mod file;
pub mod fs;
pub mod registry;
pub mod resolver;
pub mod terms;

pub use context::{ExtraContext, LookupContext};
pub use file::{FileLookup, ReadStrategy};
pub use fs::{Filesystem, OsFilesystem};
pub use registry::{LookupPlugin, LookupRegistry};
pub use resolver::{DwimResolver, PathResolver};
pub use terms::Terms;

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur during lookup operations
#[derive(Error, Debug)]
pub enum LookupError {
    /// The path resolver could not build a path from the terms
    #[error("Unable to resolve lookup path '{term}': {message}")]
    PathResolution {
        /// The term as supplied by the template
        term: String,
        /// Why resolution failed
        message: String,
    },

    /// The resolved path does not exist
    #[error("{0} does not exist")]
    FileNotFound(PathBuf),

    /// Reading the resolved path failed
    #[error("Failed to read '{path}': {source}")]
    Io {
        /// Resolved path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No plugin is registered under the requested name
    #[error("Lookup plugin not found: {0}")]
    PluginNotFound(String),
}

impl LookupError {
    /// Build a path resolution error for the given term
    pub fn resolution(term: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PathResolution {
            term: term.into(),
            message: message.into(),
        }
    }
}

/// Result type for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for lookup plugin development and usage.
pub mod prelude {
    pub use super::DwimResolver;
    pub use super::ExtraContext;
    pub use super::FileLookup;
    pub use super::Filesystem;
    pub use super::LookupContext;
    pub use super::LookupError;
    pub use super::LookupPlugin;
    pub use super::LookupRegistry;
    pub use super::LookupResult;
    pub use super::OsFilesystem;
    pub use super::PathResolver;
    pub use super::ReadStrategy;
    pub use super::Terms;
}
