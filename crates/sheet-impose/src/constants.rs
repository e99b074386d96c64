//! Shared constants for the imposition engine
//!
//! This module centralizes the unit factors, rounding precisions and
//! tolerances used throughout the calculation.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimeters per inch (exact by definition)
pub const MM_PER_INCH: f64 = 25.4;

/// Steps per inch of the grid millimeter input is snapped to after
/// conversion (one nano-inch)
pub const INGRESS_SNAP_STEPS: f64 = 1e9;

// =============================================================================
// Readout Precision
// =============================================================================

/// Decimals kept for canonical (inch) finishing readouts
pub const CANONICAL_DECIMALS: u32 = 3;

/// Decimals kept for display (millimeter) values
pub const DISPLAY_DECIMALS: u32 = 2;

/// Decimals kept for canonical program sequence lengths
pub const PROGRAM_DECIMALS: u32 = 4;

// =============================================================================
// Solver
// =============================================================================

/// Relative slack added before flooring a fit count, scaled by the pitch.
///
/// `(A + g) / (s + g)` can land on 2.9999... for a grid that fits exactly 3.
pub const COUNT_EPSILON: f64 = 1e-9;

/// Most documents the solver places along one axis.
///
/// Keeps every per-document output bounded when a near-zero document size
/// would otherwise fit billions of times.
pub const MAX_AXIS_COUNT: u32 = 500;

// =============================================================================
// Labels
// =============================================================================

pub const CUT_LABEL: &str = "Cut";
pub const SLIT_LABEL: &str = "Slit";
pub const SCORE_LABEL: &str = "Score";
pub const PERFORATION_LABEL: &str = "Perforation";
pub const HOLE_LABEL: &str = "Hole";
pub const STEP_LABEL: &str = "Step";
