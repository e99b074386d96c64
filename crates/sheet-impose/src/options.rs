use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single drilled hole, positioned relative to one document edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct HoleEntry {
    /// Edge the hole is inset from
    pub edge: Edge,
    /// Anchor along that edge
    pub align: Align,
    /// Signed displacement along the edge, relative to the anchor
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub axis_offset: f64,
    /// Inset from the edge into the document
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub offset: f64,
}

impl HoleEntry {
    pub fn new(edge: Edge, align: Align, axis_offset: f64, offset: f64) -> Self {
        Self {
            edge,
            align,
            axis_offset,
            offset,
        }
    }
}

/// Drill plan applied identically to every imposed document.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HolePlan {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub diameter: f64,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub entries: Vec<HoleEntry>,
}

impl HolePlan {
    /// Standard three-hole punch along the left edge of a letter page
    pub fn three_hole_letter() -> Self {
        Self {
            diameter: 0.3125,
            entries: vec![
                HoleEntry::new(Edge::Left, Align::Center, -4.25, 0.375),
                HoleEntry::new(Edge::Left, Align::Center, 0.0, 0.375),
                HoleEntry::new(Edge::Left, Align::Center, 4.25, 0.375),
            ],
        }
    }
}

/// Creasing, perforating and drilling requested for each document.
///
/// Score and perforation offsets are fractions of the document span.
/// Horizontal lines are positioned along the document height, vertical
/// lines along its width.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FinishingOptions {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::fractions"))]
    pub score_horizontal: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::fractions"))]
    pub score_vertical: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::fractions"))]
    pub perforation_horizontal: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::fractions"))]
    pub perforation_vertical: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub hole_plan: HolePlan,
}

/// Complete description of an imposition job
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ImpositionInputs {
    // Stock and artwork
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub sheet: Size,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub document: Size,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub gutter: Gutter,

    // Margins
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub margins: PerSide,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub non_printable: PerSide,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub auto_margins: bool,

    // Count overrides
    pub force_across: Option<u32>,
    pub force_down: Option<u32>,

    // Finishing
    #[cfg_attr(
        feature = "serde",
        serde(alias = "finishingOptions", deserialize_with = "crate::types::lenient::or_default")
    )]
    pub finishing: FinishingOptions,
}

impl Default for ImpositionInputs {
    /// Business cards on a 12" x 18" digital press sheet
    fn default() -> Self {
        Self {
            sheet: Size::new(12.0, 18.0),
            document: Size::new(3.5, 2.0),
            gutter: Gutter::uniform(0.125),
            margins: PerSide::default(),
            non_printable: PerSide::uniform(0.0625),
            auto_margins: true,
            force_across: None,
            force_down: None,
            finishing: FinishingOptions::default(),
        }
    }
}

impl ImpositionInputs {
    /// Load a job from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let inputs = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse job: {}", e)))?;
        Ok(inputs)
    }

    /// Save the job to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = self.to_json_pretty()?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Parse a job from a JSON string
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ImposeError::Config(format!("Failed to parse job: {}", e)))
    }

    #[cfg(feature = "serde")]
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize job: {}", e)))
    }

    /// Reinterpret every length of this job as being in `unit` and
    /// convert it to inches. Fractions and counts are left alone.
    pub fn in_units(mut self, unit: Unit) -> Self {
        if unit == Unit::Inches {
            return self;
        }
        self.sheet = self.sheet.converted(unit);
        self.document = self.document.converted(unit);
        self.gutter = self.gutter.converted(unit);
        self.margins = self.margins.converted(unit);
        self.non_printable = self.non_printable.converted(unit);

        let plan = &mut self.finishing.hole_plan;
        plan.diameter = unit.to_inches(plan.diameter);
        for entry in &mut plan.entries {
            entry.axis_offset = unit.to_inches(entry.axis_offset);
            entry.offset = unit.to_inches(entry.offset);
        }
        self
    }

    /// Forced column count, if one was given. Zero counts as absent.
    pub fn forced_across(&self) -> Option<u32> {
        self.force_across.filter(|&n| n >= 1)
    }

    /// Forced row count, if one was given. Zero counts as absent.
    pub fn forced_down(&self) -> Option<u32> {
        self.force_down.filter(|&n| n >= 1)
    }
}
