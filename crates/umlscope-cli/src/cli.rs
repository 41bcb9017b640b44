//! Command-line interface for the umlscope utility
//!
//! clap handles the catalog and logging options; everything after them is
//! handed to the switch parser (`-d`, `-v`, `-c`).

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

use umlscope::catalog::Catalog;
use umlscope::core::logging::{init_logging, LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use umlscope::core::{SwitchParser, TypeSource};
use umlscope::diagram::{DiagramRequest, USAGE};

/// umlscope - Print PlantUML class diagrams for a set of types
#[derive(Parser, Debug)]
#[command(name = "umlscope")]
#[command(about = "Print a PlantUML class diagram for the given types")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Extra type catalog (JSON) layered over the built-in one; repeatable
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalogs: Vec<PathBuf>,

    /// Do not load the built-in java.base catalog
    #[arg(long)]
    pub no_builtin: bool,

    /// Set log level (trace|debug|info|warn|error|off)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Diagram switches: -d <depth> -v <verbosity> -c <type>...
    #[arg(
        value_name = "SWITCHES",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub switches: Vec<String>,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// What a run printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Usage,
    Diagram(String),
}

/// Main CLI application
#[derive(Debug, Default)]
pub struct UmlscopeApp;

impl UmlscopeApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());
        let log_format = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level), Some(&log_format)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        match self.execute(&cli)? {
            Outcome::Usage => println!("{}", USAGE),
            Outcome::Diagram(script) => self.write_output(&script)?,
        }
        Ok(())
    }

    /// Parse the switches and build the diagram without printing it
    pub fn execute(&self, cli: &Cli) -> Result<Outcome> {
        let switches = SwitchParser::new(cli.switches.iter().cloned());
        if switches.is_empty() {
            return Ok(Outcome::Usage);
        }

        let request = DiagramRequest::from_switches(&switches)?;
        debug!(
            depth = request.config.depth,
            verbosity = %request.config.verbosity,
            roots = ?request.roots,
            "Parsed diagram request"
        );

        let catalog = self.load_catalog(&cli.catalogs, cli.no_builtin)?;
        let script = request.generate(&catalog)?;
        Ok(Outcome::Diagram(script))
    }

    /// Build the catalog from the built-in table and any extra files
    pub fn load_catalog(&self, paths: &[PathBuf], no_builtin: bool) -> Result<Catalog> {
        let mut catalog = if no_builtin {
            Catalog::new()
        } else {
            Catalog::builtin().context("Failed to load the built-in catalog")?
        };

        for path in paths {
            catalog
                .load_path(path)
                .with_context(|| format!("Failed to load catalog '{}'", path.display()))?;
        }

        debug!(types = catalog.type_count(), "Catalog ready");
        Ok(catalog)
    }

    /// Write the diagram to stdout
    pub fn write_output(&self, script: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(script.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
