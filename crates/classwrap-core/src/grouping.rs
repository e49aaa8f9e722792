use serde::Serialize;

use crate::config::Taxonomy;
use crate::index::PrefixIndex;

/// Classes of one category, bucketed per declared prefix entry.
///
/// `groups` holds one `(raw_key, classes)` pair per distinct declared entry, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBucket {
    pub name: String,
    pub groups: Vec<(String, Vec<String>)>,
}

impl CategoryBucket {
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|(_, classes)| classes.is_empty())
    }

    pub fn group(&self, raw_key: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(key, _)| key == raw_key)
            .map(|(_, classes)| classes.as_slice())
    }

    pub fn non_empty_groups(&self) -> Vec<&[String]> {
        self.groups
            .iter()
            .filter(|(_, classes)| !classes.is_empty())
            .map(|(_, classes)| classes.as_slice())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedClasses {
    pub categories: Vec<CategoryBucket>,
    pub uncategorized: Vec<String>,
}

impl GroupedClasses {
    fn empty_buckets(index: &PrefixIndex) -> Self {
        let categories = index
            .layout()
            .iter()
            .map(|layout| CategoryBucket {
                name: layout.name.clone(),
                groups: layout
                    .keys
                    .iter()
                    .map(|key| (key.clone(), Vec::new()))
                    .collect(),
            })
            .collect();
        Self {
            categories,
            uncategorized: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.uncategorized.is_empty() && self.categories.iter().all(CategoryBucket::is_empty)
    }

    pub fn category(&self, name: &str) -> Option<&CategoryBucket> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Total number of classes held across every bucket.
    pub fn class_count(&self) -> usize {
        self.uncategorized.len()
            + self
                .categories
                .iter()
                .flat_map(|c| c.groups.iter())
                .map(|(_, classes)| classes.len())
                .sum::<usize>()
    }
}

/// Buckets `classes` by the taxonomy, preserving input order inside each bucket.
pub fn group_classes<C, V>(classes: &[C], taxonomy: &Taxonomy, viewports: &[V]) -> GroupedClasses
where
    C: AsRef<str>,
    V: AsRef<str>,
{
    if classes.is_empty() || taxonomy.is_empty() {
        return GroupedClasses::default();
    }

    let index = PrefixIndex::build(taxonomy);
    let mut grouped = GroupedClasses::empty_buckets(&index);

    for class in classes {
        let class = class.as_ref();
        match index.match_class(class, viewports) {
            Some(entry) => {
                grouped.categories[entry.category].groups[entry.bucket]
                    .1
                    .push(class.to_string());
            }
            None => {
                tracing::trace!(class, "uncategorized class");
                grouped.uncategorized.push(class.to_string());
            }
        }
    }

    tracing::debug!(
        classes = classes.len(),
        uncategorized = grouped.uncategorized.len(),
        "grouped classes"
    );
    grouped
}
