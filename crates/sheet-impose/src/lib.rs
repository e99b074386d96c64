//! Imposition calculator for sheet-fed finishing work
//!
//! Given a press sheet, a repeated document and the finishing required,
//! works out how many documents fit, where the grid sits, and every cut,
//! slit, score, perforation, hole and cutter program step needed to
//! finish the job. All lengths are inches.

pub mod compute;
pub mod constants;
pub mod finishing;
pub mod layout;
pub mod numeric;
mod options;
pub mod program;
mod stats;
mod types;

pub use compute::{CalculationResult, compute, solve_layout};
pub use finishing::{FinishingReadout, Hole, LineReadouts, Readout, generate_finishing};
pub use layout::{CalculationContext, Counts, Layout, build_context, solve};
pub use options::*;
pub use program::{ProgramStep, program_sequence};
pub use stats::{LayoutStatistics, calculate_statistics};
pub use types::*;
