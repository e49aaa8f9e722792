//! Flattened prefix table built from a [`Taxonomy`].
//!
//! Every prefix entry of every category lands in one table sorted by prefix length (longest
//! first, stable for ties), so the first hit during a scan is the longest declared prefix. Each
//! entry carries the index of the bucket it fills, which keeps wildcard (`p-*`) and literal (`p-`)
//! entries apart even though they match the same text.

use crate::config::Taxonomy;

pub const WILDCARD_MARKER: char = '*';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixEntry {
    /// Position of the owning category in the taxonomy.
    pub category: usize,
    /// Position of the bucket within the owning category.
    pub bucket: usize,
    /// Prefix with the wildcard marker stripped.
    pub prefix: String,
    /// Entry as declared, wildcard marker retained.
    pub raw_key: String,
    /// Length of `prefix` in chars.
    pub length: usize,
}

impl PrefixEntry {
    pub fn is_wildcard(&self) -> bool {
        self.raw_key.ends_with(WILDCARD_MARKER)
    }
}

/// Bucket keys of one category, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLayout {
    pub name: String,
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixIndex {
    entries: Vec<PrefixEntry>,
    layout: Vec<CategoryLayout>,
}

impl PrefixIndex {
    pub fn build(taxonomy: &Taxonomy) -> Self {
        let mut entries = Vec::new();
        let mut layout = Vec::with_capacity(taxonomy.len());

        for (category_idx, category) in taxonomy.categories().iter().enumerate() {
            let mut keys: Vec<String> = Vec::new();
            for raw in category.raw_entries() {
                let prefix = raw.strip_suffix(WILDCARD_MARKER).unwrap_or(raw);
                // Repeated declarations share the bucket of the first one.
                let bucket = match keys.iter().position(|k| k == raw) {
                    Some(pos) => pos,
                    None => {
                        keys.push(raw.to_string());
                        keys.len() - 1
                    }
                };
                entries.push(PrefixEntry {
                    category: category_idx,
                    bucket,
                    prefix: prefix.to_string(),
                    raw_key: raw.to_string(),
                    length: prefix.chars().count(),
                });
            }
            layout.push(CategoryLayout {
                name: category.name.clone(),
                keys,
            });
        }

        // `sort_by` is stable: equal lengths keep declaration order.
        entries.sort_by(|a, b| b.length.cmp(&a.length));

        Self { entries, layout }
    }

    /// Entries in match priority order.
    pub fn entries(&self) -> &[PrefixEntry] {
        &self.entries
    }

    pub fn layout(&self) -> &[CategoryLayout] {
        &self.layout
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
