use crate::constants::MM_PER_INCH;
use crate::numeric::{sanitize, snap};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Unit a job's lengths are expressed in on ingress.
///
/// The engine itself only ever works in inches; millimeters are converted
/// at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    #[default]
    Inches,
    Millimeters,
}

impl Unit {
    /// Convert a length in this unit to inches.
    ///
    /// Millimeter values are snapped to a nano-inch grid so the same
    /// physical input gives bit-identical inches whichever unit it was
    /// typed in.
    pub fn to_inches(self, value: f64) -> f64 {
        match self {
            Unit::Inches => value,
            Unit::Millimeters => snap(value / MM_PER_INCH),
        }
    }

    /// Convert a length in inches to this unit.
    pub fn from_inches(self, inches: f64) -> f64 {
        match self {
            Unit::Inches => inches,
            Unit::Millimeters => inches * MM_PER_INCH,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Inches => "in",
            Unit::Millimeters => "mm",
        }
    }
}

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Portrait: height >= width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// A width/height pair in inches.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Size {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub width: f64,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub(crate) fn sanitized(self) -> Self {
        Self::new(sanitize(self.width), sanitize(self.height))
    }

    pub(crate) fn converted(self, unit: Unit) -> Self {
        Self::new(unit.to_inches(self.width), unit.to_inches(self.height))
    }
}

/// Spacing between neighbouring documents.
///
/// `horizontal` separates columns (it is added along the sheet width),
/// `vertical` separates rows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Gutter {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub horizontal: f64,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub vertical: f64,
}

impl Gutter {
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Same spacing on both axes
    pub fn uniform(gutter: f64) -> Self {
        Self::new(gutter, gutter)
    }

    pub(crate) fn sanitized(self) -> Self {
        Self::new(sanitize(self.horizontal), sanitize(self.vertical))
    }

    pub(crate) fn converted(self, unit: Unit) -> Self {
        Self::new(
            unit.to_inches(self.horizontal),
            unit.to_inches(self.vertical),
        )
    }
}

/// A length per sheet side, used for margins and non-printable bands.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PerSide {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub top: f64,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub right: f64,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub bottom: f64,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "crate::types::lenient::or_default"))]
    pub left: f64,
}

impl PerSide {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create uniform values on all sides
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Every side coerced to a finite, non-negative length.
    pub fn sanitized(self) -> Self {
        Self::new(
            sanitize(self.top),
            sanitize(self.right),
            sanitize(self.bottom),
            sanitize(self.left),
        )
    }

    pub(crate) fn converted(self, unit: Unit) -> Self {
        Self::new(
            unit.to_inches(self.top),
            unit.to_inches(self.right),
            unit.to_inches(self.bottom),
            unit.to_inches(self.left),
        )
    }
}

/// Document edge a hole is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edge {
    Top,
    Bottom,
    #[default]
    Left,
    Right,
}

impl Edge {
    pub fn as_str(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }

    /// Parse a tag, falling back to [`Edge::Left`] for anything unknown.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "top" => Edge::Top,
            "bottom" => Edge::Bottom,
            "right" => Edge::Right,
            _ => Edge::Left,
        }
    }

    /// True when the edge runs along the document width (top/bottom).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

/// Anchor along the chosen edge that a hole's axis offset is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Start => "start",
            Align::Center => "center",
            Align::End => "end",
        }
    }

    /// Parse a tag, falling back to [`Align::Center`] for anything unknown.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "start" => Align::Start,
            "end" => Align::End,
            _ => Align::Center,
        }
    }
}

/// Common press sheet sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetSize {
    Letter,
    Legal,
    Tabloid,
    /// 12" x 18" digital press sheet
    Tabloid12x18,
    /// 13" x 19" oversize sheet
    Super13x19,
    Sra3,
    A3,
    A4,
    Custom { width_in: f64, height_in: f64 },
}

impl SheetSize {
    /// Get base dimensions in inches (portrait)
    pub fn dimensions_in(self) -> (f64, f64) {
        match self {
            SheetSize::Letter => (8.5, 11.0),
            SheetSize::Legal => (8.5, 14.0),
            SheetSize::Tabloid => (11.0, 17.0),
            SheetSize::Tabloid12x18 => (12.0, 18.0),
            SheetSize::Super13x19 => (13.0, 19.0),
            SheetSize::Sra3 => (320.0 / MM_PER_INCH, 450.0 / MM_PER_INCH),
            SheetSize::A3 => (297.0 / MM_PER_INCH, 420.0 / MM_PER_INCH),
            SheetSize::A4 => (210.0 / MM_PER_INCH, 297.0 / MM_PER_INCH),
            SheetSize::Custom {
                width_in,
                height_in,
            } => (width_in, height_in),
        }
    }

    /// Get dimensions with orientation applied
    pub fn size(self, orientation: Orientation) -> Size {
        let (w, h) = self.dimensions_in();
        oriented(w, h, orientation)
    }
}

/// Common finished document sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocumentSize {
    /// 3.5" x 2" US business card
    BusinessCard,
    /// 6" x 4" postcard
    Postcard,
    /// 5" x 7" invitation
    Invitation,
    A6,
    A5,
    Custom { width_in: f64, height_in: f64 },
}

impl DocumentSize {
    /// Get dimensions in inches as the document is usually designed
    pub fn dimensions_in(self) -> (f64, f64) {
        match self {
            DocumentSize::BusinessCard => (3.5, 2.0),
            DocumentSize::Postcard => (6.0, 4.0),
            DocumentSize::Invitation => (5.0, 7.0),
            DocumentSize::A6 => (105.0 / MM_PER_INCH, 148.0 / MM_PER_INCH),
            DocumentSize::A5 => (148.0 / MM_PER_INCH, 210.0 / MM_PER_INCH),
            DocumentSize::Custom {
                width_in,
                height_in,
            } => (width_in, height_in),
        }
    }

    pub fn size(self) -> Size {
        let (w, h) = self.dimensions_in();
        Size::new(w, h)
    }
}

fn oriented(w: f64, h: f64, orientation: Orientation) -> Size {
    let (short, long) = if w <= h { (w, h) } else { (h, w) };
    match orientation {
        Orientation::Portrait => Size::new(short, long),
        Orientation::Landscape => Size::new(long, short),
    }
}

/// Total readers for job fields: `null` where a value is expected is read
/// like a missing field instead of failing the whole job.
#[cfg(feature = "serde")]
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};

    /// `null` becomes the type's default (zero for lengths).
    pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// A fraction list where `null` entries are skipped and a `null` list
    /// is empty.
    pub fn fractions<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let list: Option<Vec<Option<f64>>> = Option::deserialize(deserializer)?;
        Ok(list.into_iter().flatten().flatten().collect())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    // Tags are read totally: unknown strings and null fall back to the
    // default variant instead of failing the whole job.
    struct TagVisitor;

    impl<'de> Visitor<'de> for TagVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string tag or null")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_bool<E>(self, _: bool) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_i64<E>(self, _: i64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_u64<E>(self, _: u64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_f64<E>(self, _: f64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    impl Serialize for Edge {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for Edge {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let tag = deserializer.deserialize_any(TagVisitor)?;
            Ok(tag.as_deref().map(Edge::from_tag).unwrap_or_default())
        }
    }

    impl Serialize for Align {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for Align {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let tag = deserializer.deserialize_any(TagVisitor)?;
            Ok(tag.as_deref().map(Align::from_tag).unwrap_or_default())
        }
    }
} // end of serde_impls module
