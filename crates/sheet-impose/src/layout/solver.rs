//! Grid solving
//!
//! Works out how many documents fit across and down the layout area,
//! how much of each axis they occupy, and the margins that result when
//! measured from the raw sheet edge.

use crate::constants::{COUNT_EPSILON, MAX_AXIS_COUNT};
use crate::numeric::clamp0;
use crate::types::PerSide;

use super::{AxisUsage, CalculationContext, Counts, Layout, Usage};

// =============================================================================
// Axis Math
// =============================================================================

/// Maximum number of items of size `size` separated by `gutter` that fit
/// in `available`.
///
/// The last item carries no trailing gutter, hence `available + gutter`
/// in the numerator. The result never exceeds [`MAX_AXIS_COUNT`].
pub fn count_fit(available: f64, size: f64, gutter: f64) -> u32 {
    if available <= 0.0 || size <= 0.0 {
        return 0;
    }
    let pitch = size + gutter;
    let fit = ((available + gutter + COUNT_EPSILON * pitch) / pitch).floor();
    if fit >= MAX_AXIS_COUNT as f64 {
        MAX_AXIS_COUNT
    } else {
        clamp0(fit) as u32
    }
}

/// Span occupied by `count` items and the gutters between them.
pub fn used_span(count: u32, size: f64, gutter: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    count as f64 * size + (count - 1) as f64 * gutter
}

/// Usage of an axis with `available` space.
pub fn axis_usage(available: f64, count: u32, size: f64, gutter: f64) -> AxisUsage {
    let used = used_span(count, size, gutter);
    AxisUsage {
        used_span: used,
        trailing_margin: clamp0(available - used),
    }
}

// =============================================================================
// Solving
// =============================================================================

/// Solve the grid for a context, optionally capping either count.
///
/// Overrides only ever reduce the solver's maximum.
pub fn solve(
    context: &CalculationContext,
    force_across: Option<u32>,
    force_down: Option<u32>,
) -> Layout {
    let area = context.layout_area;
    let doc = context.document;
    let gutter = context.gutter;

    let max = Counts::new(
        count_fit(area.width, doc.width, gutter.horizontal),
        count_fit(area.height, doc.height, gutter.vertical),
    );
    log::debug!(
        "Solved {}x{} in a {:.4}x{:.4} layout area",
        max.across,
        max.down,
        area.width,
        area.height
    );
    if max.across == MAX_AXIS_COUNT || max.down == MAX_AXIS_COUNT {
        log::warn!("Document count reached the {} per-axis limit", MAX_AXIS_COUNT);
    }

    apply_overrides(context, max, force_across, force_down)
}

/// Cap the solver counts with user overrides and recompute usage.
pub fn apply_overrides(
    context: &CalculationContext,
    max: Counts,
    force_across: Option<u32>,
    force_down: Option<u32>,
) -> Layout {
    let counts = Counts::new(
        cap(max.across, force_across, "across"),
        cap(max.down, force_down, "down"),
    );
    build_layout(context, counts)
}

fn cap(max: u32, forced: Option<u32>, axis: &str) -> u32 {
    match forced {
        Some(forced) if forced > max => {
            log::debug!("Forced {} count {} capped at {}", axis, forced, max);
            max
        }
        Some(forced) => forced,
        None => max,
    }
}

/// Assemble a layout for fixed counts.
pub(crate) fn build_layout(context: &CalculationContext, counts: Counts) -> Layout {
    let area = context.layout_area;
    let doc = context.document;
    let gutter = context.gutter;

    let usage = Usage {
        horizontal: axis_usage(area.width, counts.across, doc.width, gutter.horizontal),
        vertical: axis_usage(area.height, counts.down, doc.height, gutter.vertical),
    };

    Layout {
        context: *context,
        counts,
        usage,
        realized_margins: realized_margins(context, &usage),
    }
}

/// Margins as they end up on the press sheet, measured from the raw edge to
/// the outermost document. These surface any clamping of the requested
/// margins.
fn realized_margins(context: &CalculationContext, usage: &Usage) -> PerSide {
    let area = context.layout_area;
    let sheet = context.sheet;
    PerSide {
        top: clamp0(area.origin_y),
        right: clamp0(sheet.raw_width - (area.origin_x + usage.horizontal.used_span)),
        bottom: clamp0(sheet.raw_height - (area.origin_y + usage.vertical.used_span)),
        left: clamp0(area.origin_x),
    }
}

// =============================================================================
// Auto Margins
// =============================================================================

/// Symmetric margins that center a solved grid inside the printable region.
///
/// Each side gets its non-printable band plus half of the slack the grid
/// leaves in the effective span.
pub fn centered_margins(layout: &Layout) -> PerSide {
    let sheet = layout.sheet();
    let leftover_x = clamp0((sheet.effective_width - layout.usage.horizontal.used_span) / 2.0);
    let leftover_y = clamp0((sheet.effective_height - layout.usage.vertical.used_span) / 2.0);
    let band = sheet.non_printable;

    PerSide {
        top: band.top + leftover_y,
        right: band.right + leftover_x,
        bottom: band.bottom + leftover_y,
        left: band.left + leftover_x,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::build_context;
    use crate::options::ImpositionInputs;
    use crate::types::{Gutter, Size};

    #[test]
    fn test_count_fit_basic() {
        assert_eq!(count_fit(11.875, 3.5, 0.125), 3);
        assert_eq!(count_fit(17.875, 2.0, 0.125), 8);
        assert_eq!(count_fit(10.0, 2.0, 0.0), 5);
    }

    #[test]
    fn test_count_fit_degenerate() {
        assert_eq!(count_fit(0.0, 2.0, 0.125), 0);
        assert_eq!(count_fit(-1.0, 2.0, 0.125), 0);
        assert_eq!(count_fit(10.0, 0.0, 0.125), 0);
        assert_eq!(count_fit(1.0, 2.0, 0.125), 0);
    }

    #[test]
    fn test_count_fit_exact_fit_survives_rounding() {
        // 0.1 + 0.2 style drift: three 0.1" items with 0.2" gutters fill 0.7"
        let available = 0.1 * 3.0 + 0.2 * 2.0;
        assert_eq!(count_fit(available, 0.1, 0.2), 3);
        assert_eq!(count_fit(10.75, 3.5, 0.125), 3);
        assert_eq!(count_fit(4.25, 2.0, 0.25), 2);
    }

    #[test]
    fn test_count_fit_is_bounded() {
        assert_eq!(count_fit(10.0, 1e-12, 0.0), MAX_AXIS_COUNT);
        assert_eq!(count_fit(1e9, 1.0, 0.0), MAX_AXIS_COUNT);
        assert_eq!(count_fit(499.0, 1.0, 0.0), 499);
    }

    #[test]
    fn test_used_span() {
        assert_eq!(used_span(0, 3.5, 0.125), 0.0);
        assert_eq!(used_span(1, 3.5, 0.125), 3.5);
        assert_eq!(used_span(3, 3.5, 0.125), 10.75);
    }

    #[test]
    fn test_solve_business_cards() {
        let ctx = build_context(&ImpositionInputs::default());
        let layout = solve(&ctx, None, None);

        assert_eq!(layout.counts, Counts::new(3, 8));
        assert_eq!(layout.usage.horizontal.used_span, 10.75);
        assert_eq!(layout.usage.vertical.used_span, 16.875);
        assert_eq!(layout.usage.vertical.trailing_margin, 1.0);
        assert_eq!(layout.realized_margins.left, 0.0625);
        assert_eq!(layout.realized_margins.right, 1.1875);
    }

    #[test]
    fn test_overrides_only_reduce() {
        let ctx = build_context(&ImpositionInputs::default());

        let layout = solve(&ctx, Some(2), Some(3));
        assert_eq!(layout.counts, Counts::new(2, 3));
        assert_eq!(layout.usage.horizontal.used_span, 7.125);

        let layout = solve(&ctx, Some(10), Some(100));
        assert_eq!(layout.counts, Counts::new(3, 8));
    }

    #[test]
    fn test_centered_margins() {
        let ctx = build_context(&ImpositionInputs::default());
        let layout = solve(&ctx, None, None);
        let margins = centered_margins(&layout);

        assert_eq!(margins.left, 0.625);
        assert_eq!(margins.right, 0.625);
        assert_eq!(margins.top, 0.5625);
        assert_eq!(margins.bottom, 0.5625);
    }

    #[test]
    fn test_nothing_fits() {
        let inputs = ImpositionInputs {
            sheet: Size::new(3.0, 3.0),
            document: Size::new(4.0, 4.0),
            gutter: Gutter::default(),
            ..Default::default()
        };
        let layout = solve(&build_context(&inputs), None, None);

        assert!(layout.counts.is_empty());
        assert_eq!(layout.usage.horizontal.used_span, 0.0);
        assert_eq!(layout.realized_margins.right, 3.0 - 0.0625);
    }
}
