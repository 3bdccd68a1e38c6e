//! Entity metrics aggregation.
//!
//! Turns an unordered stream of drawing objects into four ordered, labeled
//! result sets:
//!
//! - **classifier**: kind tag to [`Category`](crate::core::Category)
//! - **accumulator**: per-category running totals keyed by block name or layer
//! - **sorter**: category-specific deterministic ordering
//! - **report**: the single pass tying the three together
//!
//! ```rust
//! use cadtally::core::{Category, DrawingObject, Total};
//! use cadtally::metrics::aggregate;
//!
//! let objects = vec![
//!     DrawingObject::block_reference("Door"),
//!     DrawingObject::block_reference("Door"),
//!     DrawingObject::block_reference("Window"),
//! ];
//! let report = aggregate(&objects).unwrap();
//! let blocks = report.get(Category::BlockReference).unwrap();
//! assert_eq!(blocks.rows[0].key, "Door");
//! assert_eq!(blocks.rows[0].total, Total::Count(2));
//! ```

pub mod accumulator;
pub mod classifier;
pub mod labels;
pub mod report;
pub mod sorter;

pub use accumulator::{Accumulator, Accumulators};
pub use classifier::classify;
pub use labels::{Labels, Locale};
pub use report::{aggregate, aggregate_with};
