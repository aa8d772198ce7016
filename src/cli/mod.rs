//! CLI module for file-lookup
//!
//! Argument parsing and command execution for the `file-lookup` binary.

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use file_lookup::config::LookupConfig;
use file_lookup::lookup::{FileLookup, LookupContext, LookupRegistry, ReadStrategy, Terms};
use file_lookup::template::render_with_lookups;
use indexmap::IndexMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Read files the way template `lookup('file', ...)` calls do
#[derive(Parser, Debug, Clone)]
#[command(name = "file-lookup")]
#[command(author = "Rustible Contributors")]
#[command(version)]
#[command(about = "Resolve, read and trim files like the `file` lookup plugin", long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["terms", "template"])))]
pub struct Cli {
    /// Paths to look up (each one is read independently)
    pub terms: Vec<String>,

    /// Base directory for relative paths
    #[arg(short = 'b', long)]
    pub base_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short = 'c', long, env = "FILE_LOOKUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// How missing files are detected
    #[arg(long, value_enum)]
    pub read_strategy: Option<ReadStrategy>,

    /// Render this template with `lookup()` and `query()` available
    #[arg(short = 't', long, conflicts_with = "terms")]
    pub template: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw file contents, one per line
    #[default]
    Human,
    /// JSON for scripting
    Json,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the verbosity level
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    /// Command line settings take precedence over the loaded configuration
    pub fn apply_to(&self, config: &mut LookupConfig) {
        if let Some(base_dir) = &self.base_dir {
            config.base_dir = Some(base_dir.clone());
        }
        if let Some(strategy) = self.read_strategy {
            config.read_strategy = strategy;
        }
    }

    /// Run the lookup (or template render) and return the text to print
    pub fn execute(&self, config: &LookupConfig) -> Result<String> {
        let mut registry = LookupRegistry::with_builtins();
        registry.register(Arc::new(
            FileLookup::new().with_strategy(config.read_strategy),
        ));
        let context = config.to_context().with_origin("cli");

        match &self.template {
            Some(template) => self.render(template, registry, context),
            None => self.lookup_terms(&registry, &context),
        }
    }

    fn lookup_terms(&self, registry: &LookupRegistry, context: &LookupContext) -> Result<String> {
        let mut values = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            let found = registry
                .lookup("file", &Terms::Single(term.clone()), context)
                .with_context(|| format!("lookup of '{}' failed", term))?;
            values.extend(found);
        }

        match self.output {
            OutputFormat::Human => Ok(values.join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&values)?),
        }
    }

    fn render(
        &self,
        template: &str,
        registry: LookupRegistry,
        context: LookupContext,
    ) -> Result<String> {
        let rendered = render_with_lookups(template, &IndexMap::new(), Arc::new(registry), context)
            .context("template rendering failed")?;

        match self.output {
            OutputFormat::Human => Ok(rendered),
            OutputFormat::Json => Ok(serde_json::to_string(&rendered)?),
        }
    }
}
