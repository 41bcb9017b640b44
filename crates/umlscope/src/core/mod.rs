//! Core abstractions for diagram generation
//!
//! This module defines the type metadata model, the trait seams between
//! metadata sources and renderers, and the shared error, config and
//! logging plumbing.

mod config;
mod descriptor;
mod error;
pub mod logging;
mod renderer;
mod source;
mod switches;

pub use config::*;
pub use descriptor::*;
pub use error::*;
pub use logging::*;
pub use renderer::*;
pub use source::*;
pub use switches::*;
