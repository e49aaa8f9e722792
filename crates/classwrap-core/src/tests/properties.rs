use super::{strings, taxonomy};
use crate::*;

const NO_VIEWPORTS: &[&str] = &[];

fn sample_taxonomy() -> Taxonomy {
    taxonomy(&[
        ("layout", "flex grid block container"),
        ("states", "group-hover hover:* focus:*"),
        ("interactivity", "group cursor-*"),
        ("spacing", "p-* px-* m-* mx-*"),
        ("typography", "text text-*"),
        ("color", "bg-* text-red-*"),
    ])
}

fn sample_classes() -> Vec<String> {
    strings(&[
        "text-red-500",
        "group-hover:visible",
        "flex",
        "px-2",
        "p-4",
        "bg-${tone}",
        "unknown",
        "group",
        "hover:bg-blue-200",
        "text",
        "cursor-pointer",
        "mx-auto",
        "flex",
        "container",
        "another-unknown",
        "text-lg",
    ])
}

fn flatten(grouped: &GroupedClasses) -> Vec<String> {
    let mut out: Vec<String> = grouped
        .categories
        .iter()
        .flat_map(|c| c.groups.iter())
        .flat_map(|(_, classes)| classes.iter().cloned())
        .chain(grouped.uncategorized.iter().cloned())
        .collect();
    out.sort();
    out
}

/// Deterministic pseudo-random sequence for generating packing inputs.
fn lcg(seed: &mut u64) -> u64 {
    *seed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *seed >> 33
}

#[test]
fn every_class_lands_in_exactly_one_bucket() {
    let classes = sample_classes();
    let grouped = group_classes(&classes, &sample_taxonomy(), NO_VIEWPORTS);
    let mut expected = classes.clone();
    expected.sort();
    assert_eq!(flatten(&grouped), expected);
    assert_eq!(grouped.class_count(), classes.len());
}

#[test]
fn longer_prefix_wins_regardless_of_category_order() {
    for tax in [
        taxonomy(&[("a", "group"), ("b", "group-hover")]),
        taxonomy(&[("b", "group-hover"), ("a", "group")]),
    ] {
        let classes = strings(&["group-hover:visible"]);
        let grouped = group_classes(&classes, &tax, NO_VIEWPORTS);
        assert_eq!(
            grouped.category("b").unwrap().group("group-hover"),
            Some(&classes[..])
        );
        assert!(grouped.category("a").unwrap().is_empty());
    }
}

#[test]
fn output_lines_follow_category_declaration_order() {
    let config = FormatterConfig::new(sample_taxonomy()).with_print_width(1000);
    let lines = format_class_lines(&ParsedClasses::new(sample_classes()), &config);
    assert_eq!(
        lines,
        vec![
            "flex flex container",
            "group-hover:visible hover:bg-blue-200",
            "group cursor-pointer",
            "p-4 px-2 mx-auto",
            "text text-lg",
            "bg-${tone} text-red-500",
            "unknown another-unknown",
        ]
    );
}

#[test]
fn multi_group_lines_never_exceed_the_budget() {
    let mut seed = 7u64;
    for _ in 0..200 {
        let width = (lcg(&mut seed) % 40) as usize;
        let group_count = (lcg(&mut seed) % 8) as usize;
        let groups: Vec<Vec<String>> = (0..group_count)
            .map(|g| {
                let len = 1 + (lcg(&mut seed) % 3) as usize;
                (0..len)
                    .map(|c| "x".repeat(1 + (lcg(&mut seed) % 12) as usize) + &format!("{g}{c}"))
                    .collect()
            })
            .collect();

        let lines = pack_groups(&groups, width, &CharCount);

        let mut next = 0usize;
        for line in &lines {
            let mut in_line = 0usize;
            let mut joined = String::new();
            while next < groups.len() {
                let candidate = if joined.is_empty() {
                    groups[next].join(" ")
                } else {
                    format!("{joined} {}", groups[next].join(" "))
                };
                if !line.starts_with(&candidate) {
                    break;
                }
                joined = candidate;
                in_line += 1;
                next += 1;
                if joined == *line {
                    break;
                }
            }
            assert_eq!(joined, *line, "line is not a run of whole groups");
            if in_line > 1 {
                assert!(line.chars().count() <= width, "{line:?} exceeds {width}");
            }
        }
        assert_eq!(next, groups.len(), "every group is emitted once");
    }
}

#[test]
fn regrouping_joined_output_is_stable() {
    let tax = sample_taxonomy();
    let first = group_classes(&sample_classes(), &tax, NO_VIEWPORTS);
    let lines = grouped_lines(
        &first,
        DEFAULT_PRINT_WIDTH,
        &CharCount,
        UncategorizedPosition::AfterCategorized,
    );
    let reflowed: Vec<String> = lines
        .join(" ")
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let second = group_classes(&reflowed, &tax, NO_VIEWPORTS);
    assert_eq!(first, second);
}
