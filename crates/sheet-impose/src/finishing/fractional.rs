//! Score and perforation positions
//!
//! Each requested fraction is repeated on every document along the axis.
//! Perforations are positioned exactly like scores.

use crate::numeric::clamp_range;

/// Positions of the fractional `offsets` within each of `count` documents.
///
/// Offsets are filtered to finite values and clamped into `[0, 1]`.
/// Output is ordered document by document, preserving offset order inside
/// each document.
pub fn generate_fractional(
    start: f64,
    span: f64,
    gutter: f64,
    count: u32,
    offsets: &[f64],
) -> Vec<f64> {
    let fractions: Vec<f64> = offsets
        .iter()
        .copied()
        .filter(|o| o.is_finite())
        .map(|o| clamp_range(o, 0.0, 1.0))
        .collect();

    if fractions.is_empty() || count == 0 {
        return Vec::new();
    }

    let pitch = span + gutter;
    (0..count)
        .flat_map(|i| {
            let base = start + i as f64 * pitch;
            fractions.iter().map(move |o| base + span * o)
        })
        .collect()
}
