//! Knife edge positions
//!
//! Cuts (along the vertical axis) and slits (along the horizontal axis)
//! fall on the leading and trailing edge of every document.

/// Leading/trailing edges of `count` documents of length `span`, starting
/// at `start` and separated by `gutter`.
///
/// With a zero gutter the trailing edge of one document is the leading edge
/// of the next and appears once, giving `count + 1` positions. With a
/// positive gutter both edges are separate knife actions, giving
/// `2 * count` positions.
pub fn generate_edges(start: f64, span: f64, gutter: f64, count: u32) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }

    let capacity = if gutter > 0.0 {
        2 * count as usize
    } else {
        count as usize + 1
    };
    let mut edges = Vec::with_capacity(capacity);

    let mut lead = start;
    let mut trail = lead + span;
    edges.push(lead);
    edges.push(trail);

    for _ in 1..count {
        lead = trail + gutter;
        if gutter > 0.0 {
            edges.push(lead);
        }
        trail = lead + span;
        edges.push(trail);
    }

    edges
}
