#![forbid(unsafe_code)]

//! Categorization and line wrapping for utility class attributes.
//!
//! Given class lists already split by an attribute parser and a category taxonomy, this crate
//! decides which category owns every class (longest declared prefix wins) and packs each
//! category's groups into lines no wider than the configured print width.
//!
//! Design goals:
//! - deterministic output: taxonomy declaration order, then input order
//! - no failure path in the algorithm; degenerate input yields fewer lines
//! - no state shared between calls
//!
//! ```
//! use classwrap_core::{FormatterConfig, ParsedClasses, Taxonomy, format_class_lines};
//!
//! let taxonomy: Taxonomy = [("layout", "flex p-*"), ("color", "bg-*")].into_iter().collect();
//! let config = FormatterConfig::new(taxonomy);
//! let classes = ParsedClasses::new(["bg-red-500", "p-4", "flex", "unknown-cls"]);
//!
//! assert_eq!(
//!     format_class_lines(&classes, &config),
//!     vec!["flex p-4", "bg-red-500", "unknown-cls"]
//! );
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod grouping;
pub mod index;
pub mod matcher;
pub mod measure;
pub mod pack;

pub use config::{
    Category, DEFAULT_PRINT_WIDTH, FormatterConfig, Taxonomy, UncategorizedPosition,
    ViewportGrouping, WidthMeasure,
};
pub use dispatch::{ParsedClasses, format_class_lines, grouped_lines};
pub use error::{Error, Result};
pub use grouping::{CategoryBucket, GroupedClasses, group_classes};
pub use index::{PrefixEntry, PrefixIndex};
pub use measure::{CharCount, DisplayWidth, LineMeasure};
pub use pack::pack_groups;

#[cfg(test)]
mod tests;
