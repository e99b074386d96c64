//! Layout data types
//!
//! These types carry the sanitized job (the calculation context) and the
//! solved grid between the layout stage and the finishing/program stages.

use crate::types::{Gutter, PerSide, Size};

#[cfg(feature = "serde")]
use serde::Serialize;

/// The raw sheet plus the band the press cannot print into.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SheetContext {
    pub raw_width: f64,
    pub raw_height: f64,
    pub non_printable: PerSide,
    /// Raw width minus the left and right non-printable bands
    pub effective_width: f64,
    /// Raw height minus the top and bottom non-printable bands
    pub effective_height: f64,
}

/// The rectangle documents are imposed into, measured from the sheet's
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutArea {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Sanitized job, ready for solving.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CalculationContext {
    pub sheet: SheetContext,
    pub document: Size,
    pub gutter: Gutter,
    /// Requested margins after sanitizing (not clamped against the band)
    pub margins: PerSide,
    pub layout_area: LayoutArea,
}

/// Documents per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Counts {
    pub across: u32,
    pub down: u32,
}

impl Counts {
    pub fn new(across: u32, down: u32) -> Self {
        Self { across, down }
    }

    /// Documents on one sheet
    pub fn total(&self) -> u64 {
        self.across as u64 * self.down as u64
    }

    /// True when nothing fits on at least one axis
    pub fn is_empty(&self) -> bool {
        self.across == 0 || self.down == 0
    }
}

/// How much of one axis the imposed grid occupies.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AxisUsage {
    /// Documents plus the gutters between them
    pub used_span: f64,
    /// Space left after the last document
    pub trailing_margin: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Usage {
    pub horizontal: AxisUsage,
    pub vertical: AxisUsage,
}

/// A solved imposition grid
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Layout {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub context: CalculationContext,
    pub counts: Counts,
    pub usage: Usage,
    /// Distance from each raw sheet edge to the outermost document
    pub realized_margins: PerSide,
}

impl Layout {
    pub fn sheet(&self) -> &SheetContext {
        &self.context.sheet
    }

    pub fn document(&self) -> Size {
        self.context.document
    }

    pub fn gutter(&self) -> Gutter {
        self.context.gutter
    }

    pub fn layout_area(&self) -> &LayoutArea {
        &self.context.layout_area
    }

    /// Horizontal distance from one document's left edge to the next
    pub fn pitch_x(&self) -> f64 {
        self.context.document.width + self.context.gutter.horizontal
    }

    /// Vertical distance from one document's top edge to the next
    pub fn pitch_y(&self) -> f64 {
        self.context.document.height + self.context.gutter.vertical
    }
}
