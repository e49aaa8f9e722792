//! Longest-prefix matching of a single class against a [`PrefixIndex`].

use crate::index::{PrefixEntry, PrefixIndex};

pub const INTERPOLATION_MARKER: &str = "${";

/// Strips a configured `<viewport>:` prefix from `class`, if any.
pub fn strip_viewport<'a, S: AsRef<str>>(class: &'a str, viewports: &[S]) -> &'a str {
    for viewport in viewports {
        let viewport = viewport.as_ref();
        if viewport.is_empty() {
            continue;
        }
        if let Some(rest) = class
            .strip_prefix(viewport)
            .and_then(|rest| rest.strip_prefix(':'))
        {
            return rest;
        }
    }
    class
}

/// Cuts `class` at the first interpolation marker.
pub fn truncate_interpolation(class: &str) -> &str {
    match class.find(INTERPOLATION_MARKER) {
        Some(idx) => &class[..idx],
        None => class,
    }
}

/// The part of `class` that participates in prefix matching.
///
/// The viewport prefix is stripped before the interpolation cut, so a marker inside the viewport
/// segment keeps the class from being recognized as viewport-scoped.
pub fn matching_key<'a, S: AsRef<str>>(class: &'a str, viewports: &[S]) -> &'a str {
    truncate_interpolation(strip_viewport(class, viewports))
}

impl PrefixIndex {
    /// Returns the owning entry of `class`, or `None` when it is uncategorized.
    pub fn match_class<S: AsRef<str>>(
        &self,
        class: &str,
        viewports: &[S],
    ) -> Option<&PrefixEntry> {
        let key = matching_key(class, viewports);
        self.entries()
            .iter()
            .find(|entry| key.starts_with(entry.prefix.as_str()))
    }
}
