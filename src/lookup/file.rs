//! File Lookup Plugin
//!
//! Reads file contents from the filesystem. Equivalent to Ansible's `file`
//! lookup plugin.
//!
//! # Usage
//!
//! ```yaml
//! # Relative to the base directory of the play or role
//! motd: "{{ lookup('file', 'motd.txt') }}"
//!
//! # Absolute or home-relative paths
//! key: "{{ lookup('file', '~/.ssh/id_ed25519.pub') }}"
//! ```
//!
//! The lookup yields exactly one string: the whole file with trailing
//! whitespace (including the final newline) removed. Leading and interior
//! whitespace is kept.

use super::{
    DwimResolver, Filesystem, LookupContext, LookupError, LookupPlugin, LookupResult,
    OsFilesystem, PathResolver, Terms,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::str::FromStr;

/// How the file lookup detects a missing file
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ReadStrategy {
    /// Check for existence, then read. A file removed between the two steps
    /// surfaces as an I/O error rather than `FileNotFound`.
    #[default]
    CheckThenRead,
    /// Open and read in one step, reporting `FileNotFound` from the open
    AtomicOpen,
}

impl fmt::Display for ReadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadStrategy::CheckThenRead => f.write_str("check-then-read"),
            ReadStrategy::AtomicOpen => f.write_str("atomic-open"),
        }
    }
}

impl FromStr for ReadStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "check-then-read" => Ok(ReadStrategy::CheckThenRead),
            "atomic-open" | "atomic" => Ok(ReadStrategy::AtomicOpen),
            other => Err(format!("unknown read strategy '{}'", other)),
        }
    }
}

/// File lookup plugin for reading file contents
#[derive(Debug, Clone, Default)]
pub struct FileLookup<R = DwimResolver, F = OsFilesystem> {
    resolver: R,
    fs: F,
    strategy: ReadStrategy,
}

impl FileLookup {
    /// Create a new FileLookup backed by [`DwimResolver`] and the host filesystem
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: PathResolver, F: Filesystem> FileLookup<R, F> {
    /// Create a FileLookup with explicit collaborators
    pub fn with_collaborators(resolver: R, fs: F) -> Self {
        Self {
            resolver,
            fs,
            strategy: ReadStrategy::default(),
        }
    }

    /// Set the read strategy
    pub fn with_strategy(mut self, strategy: ReadStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The configured read strategy
    pub fn strategy(&self) -> ReadStrategy {
        self.strategy
    }

    /// Resolve `terms`, read the file and return its trimmed content.
    ///
    /// Resolver errors are returned unchanged. A missing file yields
    /// [`LookupError::FileNotFound`]; any other read failure yields
    /// [`LookupError::Io`].
    pub fn run(&self, terms: &Terms, context: &LookupContext) -> LookupResult<Vec<String>> {
        let path = self.resolver.resolve(context.base_dir(), terms)?;

        let read = match self.strategy {
            ReadStrategy::CheckThenRead => {
                if !self.fs.exists(&path) {
                    return Err(LookupError::FileNotFound(path));
                }
                self.fs.read_to_string(&path)
            }
            ReadStrategy::AtomicOpen => match self.fs.read_to_string(&path) {
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Err(LookupError::FileNotFound(path));
                }
                other => other,
            },
        };

        let mut content = match read {
            Ok(content) => content,
            Err(source) => return Err(LookupError::Io { path, source }),
        };

        tracing::debug!(
            path = %path.display(),
            bytes = content.len(),
            origin = context.extra.origin.as_deref().unwrap_or("-"),
            "file lookup read"
        );

        let trimmed = content.trim_end().len();
        content.truncate(trimmed);
        Ok(vec![content])
    }
}

impl<R: PathResolver, F: Filesystem> LookupPlugin for FileLookup<R, F> {
    fn name(&self) -> &'static str {
        "file"
    }

    fn description(&self) -> &'static str {
        "Reads file contents from the filesystem"
    }

    fn lookup(&self, terms: &Terms, context: &LookupContext) -> LookupResult<Vec<String>> {
        self.run(terms, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::fs::MockFilesystem;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use tempfile::{NamedTempFile, TempDir};

    fn fixed(path: &'static str) -> impl PathResolver {
        move |_: Option<&Path>, _: &Terms| -> LookupResult<PathBuf> { Ok(PathBuf::from(path)) }
    }

    #[test]
    fn test_file_lookup_basic() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "Hello, World!").unwrap();

        let lookup = FileLookup::new();
        let context = LookupContext::default();

        let values = lookup
            .run(&Terms::from(temp.path().to_str().unwrap()), &context)
            .unwrap();
        assert_eq!(values, vec!["Hello, World!".to_string()]);
    }

    #[test]
    fn test_file_lookup_trims_only_trailing() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "  line1\n\nline2 \t\r\n\n\n").unwrap();

        let values = FileLookup::new()
            .run(&Terms::from(temp.path().to_str().unwrap()), &LookupContext::default())
            .unwrap();
        assert_eq!(values, vec!["  line1\n\nline2".to_string()]);
    }

    #[test]
    fn test_file_lookup_empty_file() {
        let temp = NamedTempFile::new().unwrap();

        let values = FileLookup::new()
            .run(&Terms::from(temp.path().to_str().unwrap()), &LookupContext::default())
            .unwrap();
        assert_eq!(values, vec![String::new()]);
    }

    #[test]
    fn test_file_lookup_relative_path() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("hosts"), "127.0.0.1 localhost\n").unwrap();

        let context = LookupContext::new().with_base_dir(dir.path());
        let values = FileLookup::new().run(&Terms::from("hosts"), &context).unwrap();
        assert_eq!(values, vec!["127.0.0.1 localhost".to_string()]);
    }

    #[test]
    fn test_file_lookup_not_found() {
        let dir = TempDir::new().unwrap();
        let context = LookupContext::new().with_base_dir(dir.path());

        let err = FileLookup::new()
            .run(&Terms::from("missing.txt"), &context)
            .unwrap_err();
        match err {
            LookupError::FileNotFound(path) => assert_eq!(path, dir.path().join("missing.txt")),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_file_lookup_not_found_atomic() {
        let dir = TempDir::new().unwrap();
        let context = LookupContext::new().with_base_dir(dir.path());

        let err = FileLookup::new()
            .with_strategy(ReadStrategy::AtomicOpen)
            .run(&Terms::from("missing.txt"), &context)
            .unwrap_err();
        assert!(matches!(err, LookupError::FileNotFound(_)));
    }

    #[test]
    fn test_file_lookup_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("conf.d")).unwrap();
        let context = LookupContext::new().with_base_dir(dir.path());

        let err = FileLookup::new()
            .run(&Terms::from("conf.d"), &context)
            .unwrap_err();
        assert!(matches!(err, LookupError::Io { .. }));
    }

    #[test]
    fn test_resolver_error_passes_through() {
        let lookup = FileLookup::with_collaborators(
            |_: Option<&Path>, _: &Terms| -> LookupResult<PathBuf> {
                Err(LookupError::resolution("x", "nope"))
            },
            MockFilesystem::new(),
        );

        let err = lookup
            .run(&Terms::from("x"), &LookupContext::default())
            .unwrap_err();
        assert!(matches!(
            err,
            LookupError::PathResolution { ref message, .. } if message == "nope"
        ));
    }

    #[test]
    fn test_check_then_read_skips_read_when_missing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("/tmp/missing.txt"))
            .times(1)
            .return_const(false);
        fs.expect_read_to_string().never();

        let lookup = FileLookup::with_collaborators(fixed("/tmp/missing.txt"), fs);
        let err = lookup
            .run(&Terms::from("missing.txt"), &LookupContext::default())
            .unwrap_err();
        assert!(err.to_string().contains("/tmp/missing.txt"));
    }

    #[test]
    fn test_check_then_read_race_is_io_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .times(1)
            .returning(|_| Err(io::Error::new(io::ErrorKind::NotFound, "gone")));

        let lookup = FileLookup::with_collaborators(fixed("/tmp/racy"), fs);
        let err = lookup
            .run(&Terms::from("racy"), &LookupContext::default())
            .unwrap_err();
        assert!(matches!(err, LookupError::Io { .. }));
    }

    #[test]
    fn test_atomic_open_never_checks_existence() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_read_to_string()
            .times(1)
            .returning(|_| Ok("value\n".to_string()));

        let lookup = FileLookup::with_collaborators(fixed("/tmp/value"), fs)
            .with_strategy(ReadStrategy::AtomicOpen);
        let values = lookup
            .run(&Terms::from("value"), &LookupContext::default())
            .unwrap();
        assert_eq!(values, vec!["value".to_string()]);
    }

    #[test]
    fn test_atomic_open_permission_denied_is_io_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|_| Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")));

        let lookup = FileLookup::with_collaborators(fixed("/root/secret"), fs)
            .with_strategy(ReadStrategy::AtomicOpen);
        let err = lookup
            .run(&Terms::from("secret"), &LookupContext::default())
            .unwrap_err();
        assert!(matches!(err, LookupError::Io { .. }));
    }

    #[test]
    fn test_read_strategy_parse() {
        assert_eq!("check-then-read".parse::<ReadStrategy>(), Ok(ReadStrategy::CheckThenRead));
        assert_eq!("ATOMIC_OPEN".parse::<ReadStrategy>(), Ok(ReadStrategy::AtomicOpen));
        assert!("sometimes".parse::<ReadStrategy>().is_err());
        assert_eq!(ReadStrategy::AtomicOpen.to_string(), "atomic-open");
    }

    #[test]
    fn test_plugin_metadata() {
        let lookup = FileLookup::new();
        assert_eq!(lookup.name(), "file");
        assert_eq!(lookup.strategy(), ReadStrategy::CheckThenRead);
    }
}
