use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::measure::{CharCount, DisplayWidth, LineMeasure};

pub const DEFAULT_PRINT_WIDTH: usize = 80;

/// A named group of prefix entries, e.g. `layout` => `"flex grid p-*"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    /// Whitespace-separated prefix entries. A trailing `*` marks a wildcard entry.
    pub prefixes: String,
}

impl Category {
    pub fn new(name: impl Into<String>, prefixes: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefixes: prefixes.into(),
        }
    }

    /// Raw prefix entries in declaration order (wildcard markers retained).
    pub fn raw_entries(&self) -> impl Iterator<Item = &str> {
        self.prefixes.split_whitespace()
    }
}

/// Category taxonomy as explicit ordered pairs.
///
/// Declaration order defines output order, so this never goes through a hashed map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, String>", into = "IndexMap<String, String>")]
pub struct Taxonomy(Vec<Category>);

impl Taxonomy {
    pub fn new(categories: Vec<Category>) -> Self {
        Self(categories)
    }

    pub fn categories(&self) -> &[Category] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn push(&mut self, name: impl Into<String>, prefixes: impl Into<String>) {
        self.0.push(Category::new(name, prefixes));
    }
}

impl<N, S> FromIterator<(N, S)> for Taxonomy
where
    N: Into<String>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, prefixes)| Category::new(name, prefixes))
                .collect(),
        )
    }
}

impl From<IndexMap<String, String>> for Taxonomy {
    fn from(map: IndexMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Taxonomy> for IndexMap<String, String> {
    fn from(taxonomy: Taxonomy) -> Self {
        taxonomy
            .0
            .into_iter()
            .map(|category| (category.name, category.prefixes))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewportGrouping {
    /// Base classes are categorized; each viewport collapses to one joined line.
    #[default]
    #[serde(rename = "separate")]
    Separate,
    /// Like `Separate`, but each viewport keeps its per-category lines.
    #[serde(rename = "separate-categorized")]
    SeparateCategorized,
    /// Viewport classes are merged into the base list and categorized once.
    #[serde(rename = "inline")]
    Inline,
    /// Unrecognized mode. Produces no output.
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl From<&str> for ViewportGrouping {
    fn from(value: &str) -> Self {
        match value {
            "separate" => Self::Separate,
            "separate-categorized" => Self::SeparateCategorized,
            "inline" => Self::Inline,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UncategorizedPosition {
    #[serde(rename = "beforeCategorized")]
    BeforeCategorized,
    #[default]
    #[serde(other, rename = "afterCategorized")]
    AfterCategorized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthMeasure {
    Display,
    #[default]
    #[serde(other)]
    Chars,
}

impl WidthMeasure {
    pub fn measurer(self) -> &'static dyn LineMeasure {
        match self {
            Self::Chars => &CharCount,
            Self::Display => &DisplayWidth,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatterConfig {
    pub categories: Taxonomy,
    pub viewports: Vec<String>,
    pub viewport_grouping: ViewportGrouping,
    pub uncategorized_position: UncategorizedPosition,
    pub print_width: usize,
    pub width_measure: WidthMeasure,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            categories: Taxonomy::default(),
            viewports: Vec::new(),
            viewport_grouping: ViewportGrouping::default(),
            uncategorized_position: UncategorizedPosition::default(),
            print_width: DEFAULT_PRINT_WIDTH,
            width_measure: WidthMeasure::default(),
        }
    }
}

impl FormatterConfig {
    pub fn new(categories: Taxonomy) -> Self {
        Self {
            categories,
            ..Default::default()
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| Error::InvalidConfig {
            message: err.to_string(),
        })
    }

    pub fn with_viewports<I, S>(mut self, viewports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.viewports = viewports.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_viewport_grouping(mut self, grouping: ViewportGrouping) -> Self {
        self.viewport_grouping = grouping;
        self
    }

    pub fn with_uncategorized_position(mut self, position: UncategorizedPosition) -> Self {
        self.uncategorized_position = position;
        self
    }

    pub fn with_print_width(mut self, print_width: usize) -> Self {
        self.print_width = print_width;
        self
    }

    pub fn with_width_measure(mut self, measure: WidthMeasure) -> Self {
        self.width_measure = measure;
        self
    }
}
