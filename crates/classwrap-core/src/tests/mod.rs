mod pack;
mod properties;

use crate::Taxonomy;

fn taxonomy(pairs: &[(&str, &str)]) -> Taxonomy {
    pairs.iter().copied().collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
