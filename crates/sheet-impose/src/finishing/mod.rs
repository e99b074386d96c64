//! Finishing coordinates
//!
//! Everything an operator needs to finish a solved sheet:
//! - Cuts and slits at document edges
//! - Scores and perforations at fractional positions within documents
//! - Drilled hole centers
//!
//! All coordinates are measured from the raw sheet's top-left corner.

mod edges;
mod fractional;
mod holes;
mod readout;

pub use edges::*;
pub use fractional::*;
pub use holes::*;
pub use readout::*;

use crate::constants::{CUT_LABEL, PERFORATION_LABEL, SCORE_LABEL, SLIT_LABEL};
use crate::layout::Layout;
use crate::options::FinishingOptions;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Readouts for horizontal and vertical lines of one kind
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LineReadouts {
    /// Horizontal lines, positioned along the sheet height
    pub horizontal: Vec<Readout>,
    /// Vertical lines, positioned along the sheet width
    pub vertical: Vec<Readout>,
}

/// Complete finishing output for one sheet
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FinishingReadout {
    /// Transverse knife positions along the sheet height
    pub cuts: Vec<Readout>,
    /// Longitudinal knife positions along the sheet width
    pub slits: Vec<Readout>,
    pub scores: LineReadouts,
    pub perforations: LineReadouts,
    pub holes: Vec<Hole>,
}

impl FinishingReadout {
    /// True when no channel produced any output
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
            && self.slits.is_empty()
            && self.scores.horizontal.is_empty()
            && self.scores.vertical.is_empty()
            && self.perforations.horizontal.is_empty()
            && self.perforations.vertical.is_empty()
            && self.holes.is_empty()
    }
}

/// Positions of horizontal lines (scores or perforations) on a layout.
fn horizontal_lines(layout: &Layout, fractions: &[f64]) -> Vec<f64> {
    let area = layout.layout_area();
    generate_fractional(
        area.origin_y,
        layout.document().height,
        layout.gutter().vertical,
        layout.counts.down,
        fractions,
    )
}

/// Positions of vertical lines (scores or perforations) on a layout.
fn vertical_lines(layout: &Layout, fractions: &[f64]) -> Vec<f64> {
    let area = layout.layout_area();
    generate_fractional(
        area.origin_x,
        layout.document().width,
        layout.gutter().horizontal,
        layout.counts.across,
        fractions,
    )
}

fn line_readouts(layout: &Layout, label: &str, horizontal: &[f64], vertical: &[f64]) -> LineReadouts {
    LineReadouts {
        horizontal: map_to_readout(label, &horizontal_lines(layout, horizontal)),
        vertical: map_to_readout(label, &vertical_lines(layout, vertical)),
    }
}

/// Generate every finishing channel for a solved layout.
///
/// An axis with no documents yields empty lists on that axis; nothing here
/// fails.
pub fn generate_finishing(layout: &Layout, options: &FinishingOptions) -> FinishingReadout {
    let area = layout.layout_area();
    let doc = layout.document();
    let gutter = layout.gutter();

    let cuts = generate_edges(area.origin_y, doc.height, gutter.vertical, layout.counts.down);
    let slits = generate_edges(area.origin_x, doc.width, gutter.horizontal, layout.counts.across);

    let readout = FinishingReadout {
        cuts: map_to_readout(CUT_LABEL, &cuts),
        slits: map_to_readout(SLIT_LABEL, &slits),
        scores: line_readouts(
            layout,
            SCORE_LABEL,
            &options.score_horizontal,
            &options.score_vertical,
        ),
        perforations: line_readouts(
            layout,
            PERFORATION_LABEL,
            &options.perforation_horizontal,
            &options.perforation_vertical,
        ),
        holes: generate_holes(layout, &options.hole_plan),
    };

    log::trace!(
        "Finishing: {} cuts, {} slits, {} holes",
        readout.cuts.len(),
        readout.slits.len(),
        readout.holes.len()
    );
    readout
}
