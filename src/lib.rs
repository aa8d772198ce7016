//! # file-lookup
//!
//! The `file` lookup plugin for Jinja2-style templates: given a path
//! expression and an optional base directory it resolves the path, checks that
//! it exists, reads the whole file and returns its content with trailing
//! whitespace removed.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │  template (minijinja)        │   │  file-lookup CLI (clap)      │
//! │  lookup() / query()          │   │                              │
//! └──────────────┬───────────────┘   └──────────────┬───────────────┘
//!                └───────────────┬──────────────────┘
//!                                ▼
//!                ┌──────────────────────────────┐
//!                │  LookupRegistry              │
//!                │  name -> dyn LookupPlugin    │
//!                └──────────────┬───────────────┘
//!                               ▼
//!                ┌──────────────────────────────┐
//!                │  FileLookup                  │
//!                │  resolve -> exists -> read   │
//!                │  -> trim_end                 │
//!                └───────┬──────────────┬───────┘
//!                        ▼              ▼
//!                 PathResolver     Filesystem
//!                 (DwimResolver)   (OsFilesystem)
//! ```
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use file_lookup::prelude::*;
//!
//! let lookup = FileLookup::new();
//! let context = LookupContext::new().with_base_dir("/etc");
//!
//! let values = lookup.run(&Terms::from("hostname"), &context)?;
//! println!("{}", values[0]);
//! # Ok::<(), LookupError>(())
//! ```

pub mod config;
pub mod lookup;
pub mod template;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::config::{LogFormat, LoggingConfig, LookupConfig};
    pub use crate::lookup::prelude::*;
    pub use crate::template::{register_lookup_functions, render_with_lookups};
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
