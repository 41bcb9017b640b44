//! Diagram requests built from command-line switches

use super::DiagramGenerator;
use crate::core::{DiagramConfig, ListBound, SwitchParser, TypeSource, UmlError, Verbosity};

/// Inheritance depth switch
pub const DEPTH_SWITCH: &str = "-d";
/// Member verbosity switch
pub const VERBOSITY_SWITCH: &str = "-v";
/// Terminal list of root type names
pub const TYPES_SWITCH: &str = "-c";

pub const DEFAULT_DEPTH: i32 = 1;
pub const DEFAULT_VERBOSITY: i32 = 0;

/// Usage text printed when no switches are given
pub const USAGE: &str = "\
Usage: umlscope [OPTIONS] -d <depth> -v <verbosity> -c <type 1> <type 2> ... <type n>

\t-d  The level of inheritance to include 0..n (default 1)
\t-v  Members to show: 0 none, 1 first five, 2 all (default 0)
\t-c  Fully-qualified type names; consumes the rest of the line

Run with --help for catalog and logging options.";

/// Everything needed for one diagram run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramRequest {
    pub config: DiagramConfig,
    pub roots: Vec<String>,
}

impl DiagramRequest {
    /// Read depth, verbosity and root types from the switches
    pub fn from_switches(switches: &SwitchParser) -> Result<Self, UmlError> {
        let depth = switches.integer(DEPTH_SWITCH, DEFAULT_DEPTH)?;
        let verbosity = switches.integer(VERBOSITY_SWITCH, DEFAULT_VERBOSITY)?;
        let roots = switches.list(TYPES_SWITCH, ListBound::Unbounded)?;

        let config = DiagramConfig::default()
            .with_depth(DiagramConfig::depth_from_switch(depth)?)
            .with_verbosity(Verbosity::try_from(verbosity)?);

        Ok(Self { config, roots })
    }

    /// Generate the diagram for this request
    pub fn generate<S: TypeSource>(&self, source: &S) -> Result<String, UmlError> {
        DiagramGenerator::new(self.config.clone()).generate(source, &self.roots)
    }
}
