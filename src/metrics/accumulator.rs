use super::sorter;
use crate::core::{Category, DrawingObject, GroupKey, MeasureExtractionError, ResultRow, Total};
use std::collections::HashMap;

/// Running totals of one category, keyed by block name or layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Accumulator {
    category: Category,
    totals: HashMap<GroupKey, Total>,
}

impl Accumulator {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            totals: HashMap::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<Total> {
        self.totals.get(key).copied()
    }

    /// Add one object's measure to its group. The object is assumed to be
    /// classified under this accumulator's category.
    pub fn merge(&mut self, object: &DrawingObject) -> Result<(), MeasureExtractionError> {
        let (key, measure) = extract(self.category, object)?;
        self.totals
            .entry(key)
            .and_modify(|total| *total = total.add(measure))
            .or_insert(measure);
        Ok(())
    }

    pub fn into_rows(self) -> Vec<ResultRow> {
        sorter::sort(self.category, self.totals)
    }
}

/// One accumulator per category, created empty for a single pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Accumulators {
    slots: [Accumulator; 4],
}

impl Default for Accumulators {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulators {
    pub fn new() -> Self {
        Self {
            slots: Category::ALL.map(Accumulator::new),
        }
    }

    pub fn merge(
        &mut self,
        category: Category,
        object: &DrawingObject,
    ) -> Result<(), MeasureExtractionError> {
        self.slots[category.index()].merge(object)
    }

    pub fn get(&self, category: Category) -> &Accumulator {
        &self.slots[category.index()]
    }

    pub fn into_inner(self) -> [Accumulator; 4] {
        self.slots
    }
}

/// Grouping key and measure of `object` under `category`.
pub fn extract(
    category: Category,
    object: &DrawingObject,
) -> Result<(GroupKey, Total), MeasureExtractionError> {
    match category {
        Category::BlockReference => {
            let name = require(category, "name", object.name.as_ref())?;
            Ok((name.clone(), Total::Count(1)))
        }
        Category::Polyline => {
            let layer = require(category, "layer", object.layer.as_ref())?;
            let length = require(category, "length", object.length)?;
            Ok((layer.clone(), quantity(category, "length", length)?))
        }
        Category::SingleLineText => {
            let layer = require(category, "layer", object.layer.as_ref())?;
            let text = require(category, "text", object.text.as_ref())?;
            Ok((layer.clone(), Total::Count(text.chars().count() as u64)))
        }
        Category::Hatch => {
            let layer = require(category, "layer", object.layer.as_ref())?;
            let area = require(category, "area", object.area)?;
            Ok((layer.clone(), quantity(category, "area", area)?))
        }
    }
}

fn require<T>(
    category: Category,
    field: &'static str,
    value: Option<T>,
) -> Result<T, MeasureExtractionError> {
    value.ok_or(MeasureExtractionError::MissingField { category, field })
}

// Lengths and areas are geometric magnitudes: finite and non-negative.
fn quantity(
    category: Category,
    field: &'static str,
    value: f64,
) -> Result<Total, MeasureExtractionError> {
    if value.is_finite() && value >= 0.0 {
        Ok(Total::Quantity(value))
    } else {
        Err(MeasureExtractionError::InvalidMeasure {
            category,
            field,
            value,
        })
    }
}
