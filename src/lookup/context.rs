//! Per-call lookup context.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Extra context supplied by the host alongside every lookup.
///
/// Plugins accept it so the calling convention can grow without changing
/// the [`LookupPlugin`](super::LookupPlugin) signature. The file lookup
/// carries it but never lets it influence the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtraContext {
    /// Template variables in scope at the call site
    pub vars: IndexMap<String, serde_json::Value>,

    /// What triggered the lookup (template name, task name, ...)
    pub origin: Option<String>,
}

/// Context for lookup plugin execution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupContext {
    /// Base directory for relative paths; `None` means the working directory
    pub base_dir: Option<PathBuf>,

    /// Additional host-provided context
    pub extra: ExtraContext,
}

impl LookupContext {
    /// Create a new lookup context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base directory for relative paths
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Set variables visible at the call site
    pub fn with_vars(mut self, vars: IndexMap<String, serde_json::Value>) -> Self {
        self.extra.vars = vars;
        self
    }

    /// Record where the lookup was triggered from
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.extra.origin = Some(origin.into());
        self
    }

    /// Base directory as a path reference
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }
}
