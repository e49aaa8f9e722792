//! Greedy packing of class groups into width-bounded lines.
//!
//! Groups are atomic: a line either holds a whole group or none of it. Each line starts with
//! every remaining group and drops trailing groups until it fits, so a group that is wider than
//! the budget on its own still gets a line of its own.

use crate::measure::LineMeasure;

fn join_groups(groups: &[&[String]]) -> String {
    groups
        .iter()
        .map(|group| group.join(" "))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn pack_groups<G>(groups: &[G], print_width: usize, measure: &dyn LineMeasure) -> Vec<String>
where
    G: AsRef<[String]>,
{
    let groups: Vec<&[String]> = groups
        .iter()
        .map(|group| group.as_ref())
        .filter(|group| !group.is_empty())
        .collect();

    let mut lines = Vec::new();
    let mut start = 0usize;
    while start < groups.len() {
        let mut end = groups.len();
        let mut line = join_groups(&groups[start..end]);
        while end - start > 1 && measure.width(&line) > print_width {
            end -= 1;
            line = join_groups(&groups[start..end]);
        }
        lines.push(line);
        start = end;
    }
    lines
}
