//! Cutter program sequence
//!
//! Distances a guillotine operator keys in, outer trims first, then the
//! internal cuts and gutter back-cuts for each axis.
//!
//! The sequence is referenced from a grid centered on the raw sheet,
//! independent of where the solver placed the layout area.

use crate::constants::{DISPLAY_DECIMALS, PROGRAM_DECIMALS, STEP_LABEL};
use crate::layout::{Layout, used_span};
use crate::numeric::{clamp0, in_to_mm, round_to};

#[cfg(feature = "serde")]
use serde::Serialize;

/// One cutter step
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ProgramStep {
    pub label: String,
    pub inches: f64,
    pub millimeters: f64,
}

/// Internal cuts and back-cuts along one axis.
fn axis_cuts(distances: &mut Vec<f64>, imposed: f64, size: f64, gutter: f64, count: u32) {
    let pitch = size + gutter;
    for i in 1..count {
        distances.push(clamp0(imposed - i as f64 * pitch));
    }
    if gutter > 0.0 {
        for _ in 1..count {
            distances.push(size);
        }
    }
}

/// Raw distances before filtering and rounding.
///
/// An axis with no documents gets no trim, since its centered margin would
/// be half the sheet. Its zero imposed span falls to the positivity filter.
pub fn raw_distances(layout: &Layout) -> Vec<f64> {
    let counts = layout.counts;
    if counts.across == 0 && counts.down == 0 {
        return Vec::new();
    }

    let sheet = layout.sheet();
    let doc = layout.document();
    let gutter = layout.gutter();

    let imposed_width = used_span(counts.across, doc.width, gutter.horizontal);
    let imposed_height = used_span(counts.down, doc.height, gutter.vertical);

    let mut distances = Vec::new();
    if counts.down > 0 {
        let top_margin = clamp0((sheet.raw_height - imposed_height) / 2.0);
        distances.push(sheet.raw_height - top_margin);
    }
    if counts.across > 0 {
        let left_margin = clamp0((sheet.raw_width - imposed_width) / 2.0);
        distances.push(sheet.raw_width - left_margin);
    }
    distances.push(imposed_height);
    distances.push(imposed_width);

    axis_cuts(
        &mut distances,
        imposed_width,
        doc.width,
        gutter.horizontal,
        counts.across,
    );
    axis_cuts(
        &mut distances,
        imposed_height,
        doc.height,
        gutter.vertical,
        counts.down,
    );
    distances
}

/// Build the operator program for a solved layout.
///
/// Distances that are not positive at program precision are dropped; the
/// rest keep their order and are labelled `Step 1`, `Step 2`, ...
pub fn program_sequence(layout: &Layout) -> Vec<ProgramStep> {
    raw_distances(layout)
        .into_iter()
        .filter(|&d| round_to(d, PROGRAM_DECIMALS) > 0.0)
        .enumerate()
        .map(|(i, d)| ProgramStep {
            label: format!("{} {}", STEP_LABEL, i + 1),
            inches: round_to(d, PROGRAM_DECIMALS),
            millimeters: round_to(in_to_mm(d), DISPLAY_DECIMALS),
        })
        .collect()
}
