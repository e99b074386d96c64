//! Drilled hole centers
//!
//! A hole plan is applied to every imposed document. Each entry names an
//! edge, an anchor along it and two offsets; the result is an absolute
//! sheet coordinate per document per entry.

use crate::constants::{DISPLAY_DECIMALS, HOLE_LABEL};
use crate::layout::Layout;
use crate::numeric::{clamp_range, in_to_mm, round_to, sanitize, to_finite};
use crate::options::{HoleEntry, HolePlan};
use crate::types::{Align, Edge};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A hole center on the sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Hole {
    pub label: String,
    /// Distance from the sheet's left edge, in inches
    pub x: f64,
    /// Distance from the sheet's top edge, in inches
    pub y: f64,
    pub x_millimeters: f64,
    pub y_millimeters: f64,
    pub diameter: f64,
    /// 1-based column of the document the hole belongs to
    pub doc_across: u32,
    /// 1-based row of the document the hole belongs to
    pub doc_down: u32,
    /// 1-based index of the plan entry that produced the hole
    pub hole_index: usize,
}

/// Entry with every field coerced into range.
fn normalize_entry(entry: &HoleEntry) -> HoleEntry {
    HoleEntry {
        edge: entry.edge,
        align: entry.align,
        axis_offset: to_finite(entry.axis_offset),
        offset: sanitize(entry.offset),
    }
}

/// Coordinate along an edge of length `length`.
fn along_edge(align: Align, axis_offset: f64, length: f64) -> f64 {
    let raw = match align {
        Align::Start => axis_offset,
        Align::End => length - axis_offset,
        Align::Center => length / 2.0 + axis_offset,
    };
    clamp_range(raw, 0.0, length)
}

/// Document-local position of an entry on a `width` x `height` document.
pub fn resolve_local(entry: &HoleEntry, width: f64, height: f64) -> (f64, f64) {
    let entry = normalize_entry(entry);
    let (length, depth) = if entry.edge.is_horizontal() {
        (width, height)
    } else {
        (height, width)
    };

    let along = along_edge(entry.align, entry.axis_offset, length);
    let inset = match entry.edge {
        Edge::Top | Edge::Left => entry.offset,
        Edge::Bottom | Edge::Right => depth - entry.offset,
    };
    let inset = clamp_range(inset, 0.0, depth);

    if entry.edge.is_horizontal() {
        (along, inset)
    } else {
        (inset, along)
    }
}

/// Every hole for every document, rows outermost, then columns, then plan
/// entries.
pub fn generate_holes(layout: &Layout, plan: &HolePlan) -> Vec<Hole> {
    let diameter = sanitize(plan.diameter);
    let counts = layout.counts;
    if diameter <= 0.0 || plan.entries.is_empty() || counts.is_empty() {
        return Vec::new();
    }

    let doc = layout.document();
    let area = layout.layout_area();
    let locals: Vec<(f64, f64)> = plan
        .entries
        .iter()
        .map(|entry| resolve_local(entry, doc.width, doc.height))
        .collect();

    let mut holes = Vec::with_capacity(counts.total() as usize * locals.len());
    for row in 0..counts.down {
        let doc_y = area.origin_y + row as f64 * layout.pitch_y();
        for col in 0..counts.across {
            let doc_x = area.origin_x + col as f64 * layout.pitch_x();
            for (index, &(local_x, local_y)) in locals.iter().enumerate() {
                let x = doc_x + local_x;
                let y = doc_y + local_y;
                holes.push(Hole {
                    label: format!("{} {}", HOLE_LABEL, holes.len() + 1),
                    x,
                    y,
                    x_millimeters: round_to(in_to_mm(x), DISPLAY_DECIMALS),
                    y_millimeters: round_to(in_to_mm(y), DISPLAY_DECIMALS),
                    diameter,
                    doc_across: col + 1,
                    doc_down: row + 1,
                    hole_index: index + 1,
                });
            }
        }
    }
    holes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_along_edge_alignment() {
        assert_eq!(along_edge(Align::Start, 0.5, 6.0), 0.5);
        assert_eq!(along_edge(Align::Center, 0.0, 6.0), 3.0);
        assert_eq!(along_edge(Align::End, 0.5, 6.0), 5.5);
        assert_eq!(along_edge(Align::Center, -1.0, 6.0), 2.0);
    }

    #[test]
    fn test_along_edge_clamps_to_document() {
        assert_eq!(along_edge(Align::Start, -2.0, 6.0), 0.0);
        assert_eq!(along_edge(Align::Center, 10.0, 6.0), 6.0);
        assert_eq!(along_edge(Align::End, 10.0, 6.0), 0.0);
    }

    #[test]
    fn test_resolve_each_edge() {
        let (w, h) = (4.0, 6.0);
        let top = HoleEntry::new(Edge::Top, Align::Start, 1.0, 0.25);
        let bottom = HoleEntry::new(Edge::Bottom, Align::End, 1.0, 0.25);
        let left = HoleEntry::new(Edge::Left, Align::Center, 0.0, 0.25);
        let right = HoleEntry::new(Edge::Right, Align::Center, 0.0, 0.25);

        assert_eq!(resolve_local(&top, w, h), (1.0, 0.25));
        assert_eq!(resolve_local(&bottom, w, h), (3.0, 5.75));
        assert_eq!(resolve_local(&left, w, h), (0.25, 3.0));
        assert_eq!(resolve_local(&right, w, h), (3.75, 3.0));
    }

    #[test]
    fn test_resolve_sanitizes_offsets() {
        let entry = HoleEntry::new(Edge::Left, Align::Start, f64::NAN, -1.0);
        assert_eq!(resolve_local(&entry, 4.0, 6.0), (0.0, 0.0));

        let entry = HoleEntry::new(Edge::Right, Align::Start, 0.0, 10.0);
        assert_eq!(resolve_local(&entry, 4.0, 6.0), (0.0, 0.0));
    }
}
