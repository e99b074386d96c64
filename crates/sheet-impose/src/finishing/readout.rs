//! Operator readouts
//!
//! Turns raw coordinates into labelled records carrying the canonical
//! (inch) value and its millimeter display value.

use crate::constants::{CANONICAL_DECIMALS, DISPLAY_DECIMALS};
use crate::numeric::{in_to_mm, round_to};

#[cfg(feature = "serde")]
use serde::Serialize;

/// One labelled coordinate
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Readout {
    /// Human label with a 1-based index, e.g. "Cut 3"
    pub label: String,
    pub inches: f64,
    pub millimeters: f64,
}

/// Label and round positions with the default precisions.
pub fn map_to_readout(label: &str, positions: &[f64]) -> Vec<Readout> {
    map_to_readout_with_precision(label, positions, CANONICAL_DECIMALS, DISPLAY_DECIMALS)
}

/// Label and round positions.
///
/// Both values are rounded once from the raw position, so millimeters are
/// never derived from an already-rounded inch value.
pub fn map_to_readout_with_precision(
    label: &str,
    positions: &[f64],
    canonical_decimals: u32,
    display_decimals: u32,
) -> Vec<Readout> {
    positions
        .iter()
        .enumerate()
        .map(|(i, &p)| Readout {
            label: format!("{} {}", label, i + 1),
            inches: round_to(p, canonical_decimals),
            millimeters: round_to(in_to_mm(p), display_decimals),
        })
        .collect()
}
