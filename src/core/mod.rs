pub mod decode;
pub mod errors;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub use errors::{Error, MeasureExtractionError, Result};

/// Grouping key of one accumulator entry: a block name or a layer name.
pub type GroupKey = String;

/// Kind tag of a drawing object.
///
/// Host applications report object types as free-form names
/// (`AcDbBlockReference`, `AcDbPolyline`, ...). The name is matched once, at
/// the deserialization boundary; everything downstream works on the variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ObjectKind {
    BlockReference,
    Polyline,
    Text,
    Hatch,
    /// Any tag the aggregator has no metric for, kept verbatim for logging.
    Other(String),
}

impl ObjectKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::BlockReference => "AcDbBlockReference",
            Self::Polyline => "AcDbPolyline",
            Self::Text => "AcDbText",
            Self::Hatch => "AcDbHatch",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for ObjectKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "AcDbBlockReference" | "BlockReference" => Self::BlockReference,
            "AcDbPolyline" | "Polyline" => Self::Polyline,
            "AcDbText" | "Text" => Self::Text,
            "AcDbHatch" | "Hatch" => Self::Hatch,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for ObjectKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<ObjectKind> for String {
    fn from(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of a drawing's model space, as read from a drawing source.
///
/// Fields are optional because the set that is meaningful depends on the
/// kind: a block reference carries `name`, a polyline `layer` and `length`,
/// a text `layer` and `text`, a hatch `layer` and `area`.
///
/// Deserialization lives in [`decode`]: names and layers written as bare
/// numbers are accepted, and errors name the offending field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DrawingObject {
    pub kind: ObjectKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl DrawingObject {
    pub fn new(kind: impl Into<ObjectKind>) -> Self {
        Self {
            kind: kind.into(),
            handle: None,
            layer: None,
            name: None,
            length: None,
            area: None,
            text: None,
        }
    }

    pub fn block_reference(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(ObjectKind::BlockReference)
        }
    }

    pub fn polyline(layer: impl Into<String>, length: f64) -> Self {
        Self {
            layer: Some(layer.into()),
            length: Some(length),
            ..Self::new(ObjectKind::Polyline)
        }
    }

    pub fn text(layer: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            layer: Some(layer.into()),
            text: Some(text.into()),
            ..Self::new(ObjectKind::Text)
        }
    }

    pub fn hatch(layer: impl Into<String>, area: f64) -> Self {
        Self {
            layer: Some(layer.into()),
            area: Some(area),
            ..Self::new(ObjectKind::Hatch)
        }
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }

    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }
}

/// Metric category an object is aggregated under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BlockReference,
    Polyline,
    SingleLineText,
    Hatch,
}

impl Category {
    /// Report order.
    pub const ALL: [Category; 4] = [
        Category::BlockReference,
        Category::Polyline,
        Category::SingleLineText,
        Category::Hatch,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::BlockReference => 0,
            Self::Polyline => 1,
            Self::SingleLineText => 2,
            Self::Hatch => 3,
        }
    }

    /// Block counts are browsed alphabetically; the per-layer reports rank
    /// the dominant layer first.
    pub fn sort_rule(self) -> SortRule {
        match self {
            Self::BlockReference => SortRule::KeyAscending,
            Self::Polyline | Self::SingleLineText | Self::Hatch => SortRule::TotalDescending,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BlockReference => "block reference",
            Self::Polyline => "polyline",
            Self::SingleLineText => "single-line text",
            Self::Hatch => "hatch",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortRule {
    KeyAscending,
    /// Ties are ordered by key ascending.
    TotalDescending,
}

/// Accumulated value of one group.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Total {
    /// Occurrences or characters.
    Count(u64),
    /// Length or area.
    Quantity(f64),
}

impl Total {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Count(n) => n as f64,
            Self::Quantity(q) => q,
        }
    }

    pub fn add(self, other: Total) -> Total {
        match (self, other) {
            (Self::Count(a), Self::Count(b)) => Self::Count(a.saturating_add(b)),
            (a, b) => Self::Quantity(a.as_f64() + b.as_f64()),
        }
    }

    /// Total order usable for sorting, floats compared with `total_cmp`.
    pub fn total_cmp(&self, other: &Total) -> Ordering {
        match (self, other) {
            (Self::Count(a), Self::Count(b)) => a.cmp(b),
            (a, b) => a.as_f64().total_cmp(&b.as_f64()),
        }
    }

    /// Render for a table cell. Counts are always integral; quantities use
    /// `precision` decimals when given, the shortest exact form otherwise.
    pub fn format(&self, precision: Option<usize>) -> String {
        match (self, precision) {
            (Self::Count(n), _) => n.to_string(),
            (Self::Quantity(q), Some(p)) => format!("{q:.p$}"),
            (Self::Quantity(q), None) => q.to_string(),
        }
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(None))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub key: GroupKey,
    pub total: Total,
}

impl ResultRow {
    pub fn new(key: impl Into<GroupKey>, total: Total) -> Self {
        Self {
            key: key.into(),
            total,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnHeaders {
    pub key: String,
    pub value: String,
}

/// Sorted, labeled output of one category. Renderers must present `rows` in
/// the order given.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub category: Category,
    pub caption: String,
    pub headers: ColumnHeaders,
    pub rows: Vec<ResultRow>,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<Total> {
        self.rows.iter().find(|row| row.key == key).map(|row| row.total)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationStats {
    /// Objects read from the input.
    pub scanned: usize,
    /// Objects whose kind has no metric.
    pub skipped: usize,
    /// Objects merged per category, in `Category::ALL` order.
    pub classified: [usize; 4],
}

impl AggregationStats {
    pub fn classified_as(&self, category: Category) -> usize {
        self.classified[category.index()]
    }
}

/// The four result sets of one aggregation pass, in `Category::ALL` order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub result_sets: Vec<ResultSet>,
    pub stats: AggregationStats,
}

impl MetricsReport {
    pub fn get(&self, category: Category) -> Option<&ResultSet> {
        self.result_sets.iter().find(|set| set.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResultSet> {
        self.result_sets.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.result_sets.iter().all(ResultSet::is_empty)
    }
}
