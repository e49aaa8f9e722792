use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::config::{FormatterConfig, UncategorizedPosition, ViewportGrouping};
use crate::error::{Error, Result};
use crate::grouping::{GroupedClasses, group_classes};
use crate::measure::LineMeasure;
use crate::pack::pack_groups;

/// Class lists as split by the attribute parser.
///
/// `viewport_classes` values carry bare class names; the dispatcher adds the `<viewport>:`
/// prefix back when it categorizes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedClasses {
    pub base_classes: Vec<String>,
    pub viewport_classes: IndexMap<String, Vec<String>>,
}

impl ParsedClasses {
    pub fn new<I, S>(base_classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_classes: base_classes.into_iter().map(Into::into).collect(),
            viewport_classes: IndexMap::new(),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| Error::InvalidClasses {
            message: err.to_string(),
        })
    }

    pub fn with_viewport<I, S>(mut self, viewport: impl Into<String>, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.viewport_classes.insert(
            viewport.into(),
            classes.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Classes of `viewport`, each prefixed with `<viewport>:`.
    pub fn prefixed_viewport_classes(&self, viewport: &str) -> Vec<String> {
        self.viewport_classes
            .get(viewport)
            .map(|classes| {
                classes
                    .iter()
                    .map(|class| format!("{viewport}:{class}"))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Packs grouped classes into lines: one or more per non-empty category, plus one line for the
/// uncategorized classes placed per `position`.
pub fn grouped_lines(
    grouped: &GroupedClasses,
    print_width: usize,
    measure: &dyn LineMeasure,
    position: UncategorizedPosition,
) -> Vec<String> {
    let mut lines = Vec::new();
    for category in &grouped.categories {
        let groups = category.non_empty_groups();
        if groups.is_empty() {
            continue;
        }
        lines.extend(pack_groups(&groups, print_width, measure));
    }

    if !grouped.uncategorized.is_empty() {
        let uncategorized = grouped.uncategorized.join(" ");
        match position {
            UncategorizedPosition::BeforeCategorized => lines.insert(0, uncategorized),
            UncategorizedPosition::AfterCategorized => lines.push(uncategorized),
        }
    }
    lines
}

/// Configured viewports in order, each label once.
fn distinct_viewports(config: &FormatterConfig) -> IndexSet<&str> {
    config.viewports.iter().map(String::as_str).collect()
}

fn categorized_lines(classes: &[String], config: &FormatterConfig) -> Vec<String> {
    let grouped = group_classes(classes, &config.categories, config.viewports.as_slice());
    grouped_lines(
        &grouped,
        config.print_width,
        config.width_measure.measurer(),
        config.uncategorized_position,
    )
}

/// Produces the output lines for one class attribute.
///
/// Never fails: empty input, an empty taxonomy or an unknown grouping mode all yield no lines.
pub fn format_class_lines(classes: &ParsedClasses, config: &FormatterConfig) -> Vec<String> {
    let lines = match config.viewport_grouping {
        ViewportGrouping::Separate => separate_lines(classes, config, false),
        ViewportGrouping::SeparateCategorized => separate_lines(classes, config, true),
        ViewportGrouping::Inline => inline_lines(classes, config),
        ViewportGrouping::Unknown => {
            tracing::debug!("unknown viewport grouping; producing no lines");
            Vec::new()
        }
    };

    tracing::debug!(
        mode = ?config.viewport_grouping,
        base = classes.base_classes.len(),
        viewports = classes.viewport_classes.len(),
        lines = lines.len(),
        "formatted class lines"
    );
    lines
}

fn separate_lines(
    classes: &ParsedClasses,
    config: &FormatterConfig,
    keep_categories: bool,
) -> Vec<String> {
    let mut lines = categorized_lines(&classes.base_classes, config);

    for viewport in distinct_viewports(config) {
        let prefixed = classes.prefixed_viewport_classes(viewport);
        if prefixed.is_empty() {
            continue;
        }
        let viewport_lines = categorized_lines(&prefixed, config);
        if keep_categories {
            lines.extend(viewport_lines);
        } else if !viewport_lines.is_empty() {
            lines.push(viewport_lines.join(" "));
        }
    }
    lines
}

fn inline_lines(classes: &ParsedClasses, config: &FormatterConfig) -> Vec<String> {
    let mut combined = classes.base_classes.clone();
    for viewport in distinct_viewports(config) {
        combined.extend(classes.prefixed_viewport_classes(viewport));
    }
    categorized_lines(&combined, config)
}
