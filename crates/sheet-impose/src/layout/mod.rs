//! Layout calculation modules
//!
//! This module handles the geometric side of imposition:
//! - Context building (sanitizing, printable region, layout area)
//! - Grid solving (counts, usage, realized margins, overrides)
//! - Auto-margin centering

mod context;
mod solver;
mod types;

pub use context::*;
pub use solver::*;
pub use types::*;
