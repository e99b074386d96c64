use crate::layout::Layout;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Statistics about a solved sheet
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutStatistics {
    /// Documents imposed on one sheet
    pub documents_per_sheet: u64,
    /// Width of the imposed grid, gutters included
    pub imposed_width: f64,
    /// Height of the imposed grid, gutters included
    pub imposed_height: f64,
    /// Raw sheet area
    pub sheet_area: f64,
    /// Area covered by documents (gutters excluded)
    pub document_area: f64,
    /// Share of the sheet covered by documents, 0..=1
    pub utilization: f64,
    /// Sheet area not covered by documents
    pub waste_area: f64,
}

impl LayoutStatistics {
    /// Press sheets needed to produce `quantity` documents.
    ///
    /// `None` when nothing fits on the sheet.
    pub fn sheets_required(&self, quantity: u64) -> Option<u64> {
        if self.documents_per_sheet == 0 {
            return None;
        }
        Some(quantity.div_ceil(self.documents_per_sheet))
    }
}

/// Calculate statistics for a solved layout
pub fn calculate_statistics(layout: &Layout) -> LayoutStatistics {
    let sheet = layout.sheet();
    let doc = layout.document();
    let documents_per_sheet = layout.counts.total();

    let sheet_area = sheet.raw_width * sheet.raw_height;
    let document_area = documents_per_sheet as f64 * doc.width * doc.height;
    let utilization = if sheet_area > 0.0 {
        (document_area / sheet_area).min(1.0)
    } else {
        0.0
    };

    LayoutStatistics {
        documents_per_sheet,
        imposed_width: layout.usage.horizontal.used_span,
        imposed_height: layout.usage.vertical.used_span,
        sheet_area,
        document_area,
        utilization,
        waste_area: (sheet_area - document_area).max(0.0),
    }
}
