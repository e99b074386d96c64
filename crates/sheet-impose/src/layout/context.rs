//! Calculation context
//!
//! Normalizes a raw job into the sanitized context the solver works from:
//! every length finite and non-negative, the printable region, and the
//! layout area with user margins clamped against the non-printable band.

use crate::numeric::clamp0;
use crate::options::ImpositionInputs;

use super::{CalculationContext, LayoutArea, SheetContext};

/// Build the calculation context for a job. Never fails.
pub fn build_context(inputs: &ImpositionInputs) -> CalculationContext {
    let sheet = inputs.sheet.sanitized();
    let non_printable = inputs.non_printable.sanitized();
    let margins = inputs.margins.sanitized();

    let effective_width = clamp0(sheet.width - non_printable.left - non_printable.right);
    let effective_height = clamp0(sheet.height - non_printable.top - non_printable.bottom);

    // The layout area may be inset further than the requested margin, but
    // never into the non-printable band.
    let origin_x = margins.left.max(non_printable.left);
    let origin_y = margins.top.max(non_printable.top);
    let extent_x = sheet.width - margins.right.max(non_printable.right);
    let extent_y = sheet.height - margins.bottom.max(non_printable.bottom);

    CalculationContext {
        sheet: SheetContext {
            raw_width: sheet.width,
            raw_height: sheet.height,
            non_printable,
            effective_width,
            effective_height,
        },
        document: inputs.document.sanitized(),
        gutter: inputs.gutter.sanitized(),
        margins,
        layout_area: LayoutArea {
            origin_x,
            origin_y,
            width: clamp0(extent_x - origin_x),
            height: clamp0(extent_y - origin_y),
        },
    }
}
