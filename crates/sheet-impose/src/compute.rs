//! Single entry point for the calculator
//!
//! This module orchestrates one calculation:
//! 1. Build the context from the raw job
//! 2. Solve the grid, applying count overrides
//! 3. Optionally center the grid in the printable region and re-solve
//! 4. Generate finishing coordinates and the cutter program

use crate::finishing::{FinishingReadout, generate_finishing};
use crate::layout::{CalculationContext, Layout, build_context, centered_margins, solve};
use crate::numeric::clamp0;
use crate::options::ImpositionInputs;
use crate::program::{ProgramStep, program_sequence};
use crate::stats::{LayoutStatistics, calculate_statistics};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Everything derived from one job
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CalculationResult {
    pub context: CalculationContext,
    pub layout: Layout,
    pub finishing: FinishingReadout,
    pub program_sequence: Vec<ProgramStep>,
    pub statistics: LayoutStatistics,
    #[cfg_attr(feature = "serde", serde(skip))]
    inputs: ImpositionInputs,
}

impl CalculationResult {
    /// The job as it was realized: the final context's margins, centering
    /// switched off, overrides and finishing kept. Feeding it back through
    /// [`compute`] reproduces the same counts and finishing output.
    pub fn reconstructed_inputs(&self) -> ImpositionInputs {
        ImpositionInputs {
            margins: self.context.margins,
            auto_margins: false,
            ..self.inputs.clone()
        }
    }

    /// The job this result was computed from
    pub fn inputs(&self) -> &ImpositionInputs {
        &self.inputs
    }
}

/// Solve the grid for a job, including auto-margin centering.
pub fn solve_layout(inputs: &ImpositionInputs) -> Layout {
    let force_across = inputs.forced_across();
    let force_down = inputs.forced_down();

    let layout = solve(&build_context(inputs), force_across, force_down);
    if !inputs.auto_margins {
        return layout;
    }

    let margins = centered_margins(&layout);
    log::debug!(
        "Auto margins: top {:.4}, right {:.4}, bottom {:.4}, left {:.4}",
        margins.top,
        margins.right,
        margins.bottom,
        margins.left
    );
    let centered = ImpositionInputs {
        margins,
        ..inputs.clone()
    };
    let mut layout = solve(&build_context(&centered), force_across, force_down);

    // The centered area hugs the grid, so report the slack that centering
    // split across both sides instead of the (zero) slack inside it.
    let sheet = layout.context.sheet;
    layout.usage.horizontal.trailing_margin =
        clamp0(sheet.effective_width - layout.usage.horizontal.used_span);
    layout.usage.vertical.trailing_margin =
        clamp0(sheet.effective_height - layout.usage.vertical.used_span);
    layout
}

/// Run the whole calculation for a job. Never fails; an infeasible job
/// shows up as zero counts and empty outputs.
pub fn compute(inputs: &ImpositionInputs) -> CalculationResult {
    let layout = solve_layout(inputs);
    let finishing = generate_finishing(&layout, &inputs.finishing);
    let program_sequence = program_sequence(&layout);
    let statistics = calculate_statistics(&layout);

    log::debug!(
        "Computed {}x{} ({} per sheet), {} program steps",
        layout.counts.across,
        layout.counts.down,
        statistics.documents_per_sheet,
        program_sequence.len()
    );

    CalculationResult {
        context: layout.context,
        layout,
        finishing,
        program_sequence,
        statistics,
        inputs: inputs.clone(),
    }
}
