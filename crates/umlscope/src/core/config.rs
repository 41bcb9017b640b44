//! Diagram configuration
//!
//! Depth and verbosity as chosen on the command line, plus the universal
//! root types that inheritance walks never cross.

use std::fmt;

use super::UmlError;

/// Root types every class descends from; edges to them are never drawn
pub const DEFAULT_UNIVERSAL_ROOTS: [&str; 2] = ["java.lang.Object", "java.lang.Enum"];

/// Members shown per kind when verbosity is `Summary`
pub const SUMMARY_MEMBER_COUNT: usize = 5;

/// How many fields (and, separately, methods) to show per type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberLimit {
    None,
    AtMost(usize),
    Unbounded,
}

impl MemberLimit {
    /// Number of members to take out of `available`
    pub fn take(self, available: usize) -> usize {
        match self {
            MemberLimit::None => 0,
            MemberLimit::AtMost(max) => available.min(max),
            MemberLimit::Unbounded => available,
        }
    }
}

/// Member verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Verbosity {
    /// No members (`-v 0`)
    #[default]
    Hidden,
    /// First five fields and methods (`-v 1`)
    Summary,
    /// Every declared member (`-v 2`)
    Full,
}

impl Verbosity {
    pub fn member_limit(self) -> MemberLimit {
        match self {
            Verbosity::Hidden => MemberLimit::None,
            Verbosity::Summary => MemberLimit::AtMost(SUMMARY_MEMBER_COUNT),
            Verbosity::Full => MemberLimit::Unbounded,
        }
    }

    pub fn shows_members(self) -> bool {
        !matches!(self, Verbosity::Hidden)
    }
}

impl TryFrom<i32> for Verbosity {
    type Error = UmlError;

    fn try_from(level: i32) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Verbosity::Hidden),
            1 => Ok(Verbosity::Summary),
            2 => Ok(Verbosity::Full),
            _ => Err(UmlError::invalid_value("-v", "must be 0, 1 or 2")),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verbosity::Hidden => write!(f, "0"),
            Verbosity::Summary => write!(f, "1"),
            Verbosity::Full => write!(f, "2"),
        }
    }
}

/// Settings for one diagram run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramConfig {
    /// Levels of superclasses and interfaces to pull in; 0 keeps only roots
    pub depth: u32,
    pub verbosity: Verbosity,
    pub universal_roots: Vec<String>,
}

impl DiagramConfig {
    pub fn new(depth: u32, verbosity: Verbosity) -> Self {
        Self {
            depth,
            verbosity,
            ..Self::default()
        }
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_universal_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.universal_roots = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_universal_root(&self, name: &str) -> bool {
        self.universal_roots.iter().any(|root| root == name)
    }

    /// Convert a raw `-d` value, rejecting negatives
    pub fn depth_from_switch(depth: i32) -> Result<u32, UmlError> {
        u32::try_from(depth).map_err(|_| UmlError::invalid_value("-d", "must be 0 or greater"))
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            depth: 1,
            verbosity: Verbosity::Hidden,
            universal_roots: DEFAULT_UNIVERSAL_ROOTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
