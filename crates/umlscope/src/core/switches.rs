//! Command-line switch parser
//!
//! A deliberately small parser over a flat argument list. Switches are
//! matched exactly (`-d`, `-c`, ...) and their values are read from the
//! tokens that follow. The first occurrence of a switch wins.
//!
//! # Example
//!
//! ```rust
//! use umlscope::core::{ListBound, SwitchParser};
//!
//! let parser = SwitchParser::new(["-d", "2", "-c", "a.A", "a.B"]);
//! assert_eq!(parser.integer("-d", 1).unwrap(), 2);
//! assert_eq!(parser.list("-c", ListBound::Unbounded).unwrap(), vec!["a.A", "a.B"]);
//! ```

use tracing::trace;

use super::UmlError;

/// How many tokens a list switch may consume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListBound {
    /// Consume every remaining token
    Unbounded,
    /// Consume at most this many tokens
    AtMost(usize),
}

impl ListBound {
    fn allows(self, taken: usize) -> bool {
        match self {
            ListBound::Unbounded => true,
            ListBound::AtMost(max) => taken < max,
        }
    }
}

/// Switch parser over a raw argument list
#[derive(Debug, Clone, Default)]
pub struct SwitchParser {
    args: Vec<String>,
}

impl SwitchParser {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The raw arguments this parser was built from
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    fn find(&self, switch: &str) -> Option<usize> {
        self.args.iter().position(|arg| arg == switch)
    }

    /// Token following `switch`, or `MissingValue` if the switch is last.
    /// `None` when the switch is absent.
    fn value_after(&self, switch: &str) -> Result<Option<&str>, UmlError> {
        match self.find(switch) {
            Some(index) => self
                .args
                .get(index + 1)
                .map(|value| Some(value.as_str()))
                .ok_or_else(|| UmlError::missing_value(switch)),
            None => Ok(None),
        }
    }

    /// Read an integer value, or `default` when the switch is absent
    pub fn integer(&self, switch: &str, default: i32) -> Result<i32, UmlError> {
        match self.value_after(switch)? {
            Some(raw) => {
                trace!(switch, raw, "Parsing integer switch");
                raw.parse::<i32>()
                    .map_err(|_| UmlError::not_an_integer(switch))
            }
            None => Ok(default),
        }
    }

    /// Read a string value, or `default` when the switch is absent
    ///
    /// With `rest_of_args` set, every remaining token is joined with a
    /// single space.
    pub fn string(
        &self,
        switch: &str,
        default: Option<&str>,
        rest_of_args: bool,
    ) -> Result<Option<String>, UmlError> {
        let Some(index) = self.find(switch) else {
            return Ok(default.map(str::to_string));
        };

        let rest = &self.args[index + 1..];
        match rest.first() {
            None => Err(UmlError::missing_value(switch)),
            Some(first) if !rest_of_args => Ok(Some(first.clone())),
            Some(_) => Ok(Some(rest.join(" "))),
        }
    }

    /// Read the tokens following a required list switch
    pub fn list(&self, switch: &str, bound: ListBound) -> Result<Vec<String>, UmlError> {
        let index = self
            .find(switch)
            .ok_or_else(|| UmlError::expected_parameter(switch))?;

        let mut items = Vec::new();
        for value in &self.args[index + 1..] {
            if !bound.allows(items.len()) {
                break;
            }
            items.push(value.clone());
        }

        if items.is_empty() {
            return Err(UmlError::missing_value(switch));
        }
        trace!(switch, count = items.len(), "Parsed list switch");
        Ok(items)
    }

    /// Whether `switch` appears anywhere in the arguments
    pub fn has_switch(&self, switch: &str) -> bool {
        self.find(switch).is_some()
    }
}
