//! Path resolution for lookup terms.
//!
//! Turns a user supplied path expression plus an optional base directory into
//! an absolute filesystem path ("do what I mean" resolution).

use super::{LookupError, LookupResult, Terms};
use std::path::{Path, PathBuf};

/// Resolves lookup terms to a single absolute path
pub trait PathResolver: Send + Sync {
    /// Resolve `terms` against `base_dir`.
    ///
    /// Implementations must be deterministic for identical inputs and an
    /// unchanged working directory.
    fn resolve(&self, base_dir: Option<&Path>, terms: &Terms) -> LookupResult<PathBuf>;
}

impl<F> PathResolver for F
where
    F: Fn(Option<&Path>, &Terms) -> LookupResult<PathBuf> + Send + Sync,
{
    fn resolve(&self, base_dir: Option<&Path>, terms: &Terms) -> LookupResult<PathBuf> {
        self(base_dir, terms)
    }
}

/// Default resolver.
///
/// Accepts [`Terms::Single`] or a [`Terms::List`] holding exactly one entry.
/// `~` is expanded to the home directory, absolute paths are kept, relative
/// paths are joined onto the base directory (or the working directory when
/// there is none). Globs and environment variables are not interpreted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DwimResolver;

impl DwimResolver {
    /// Create a new resolver
    pub fn new() -> Self {
        Self
    }

    fn single_term(terms: &Terms) -> LookupResult<&str> {
        match terms {
            Terms::Single(s) => Ok(s.as_str()),
            Terms::List(items) => match items.as_slice() {
                [only] => Ok(only.as_str()),
                [] => Err(LookupError::resolution(
                    terms.to_string(),
                    "no path given",
                )),
                _ => Err(LookupError::resolution(
                    terms.to_string(),
                    format!("expected a single path, got {}", items.len()),
                )),
            },
        }
    }

    fn current_dir(term: &str) -> LookupResult<PathBuf> {
        std::env::current_dir().map_err(|e| {
            LookupError::resolution(term, format!("cannot determine working directory: {}", e))
        })
    }
}

impl PathResolver for DwimResolver {
    fn resolve(&self, base_dir: Option<&Path>, terms: &Terms) -> LookupResult<PathBuf> {
        let term = Self::single_term(terms)?;

        if term.is_empty() {
            return Err(LookupError::resolution(term, "empty path"));
        }
        if term.contains('\0') {
            return Err(LookupError::resolution(term, "path contains null byte"));
        }

        let path = PathBuf::from(shellexpand::tilde(term).as_ref());

        let resolved = if path.is_absolute() {
            if term.contains("..") {
                tracing::warn!("File lookup with path traversal in absolute path: {}", term);
            }
            path
        } else {
            let base = match base_dir {
                Some(base) if base.is_absolute() => base.to_path_buf(),
                Some(base) => Self::current_dir(term)?.join(base),
                None => Self::current_dir(term)?,
            };
            base.join(path)
        };

        tracing::debug!(term, path = %resolved.display(), "resolved lookup path");
        Ok(resolved)
    }
}
