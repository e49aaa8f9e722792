use super::strings;
use crate::*;

fn groups(items: &[&[&str]]) -> Vec<Vec<String>> {
    items.iter().map(|g| strings(g)).collect()
}

#[test]
fn everything_fits_on_one_line() {
    let lines = pack_groups(&groups(&[&["flex", "grid"], &["p-4"]]), 80, &CharCount);
    assert_eq!(lines, vec!["flex grid p-4"]);
}

#[test]
fn oversized_leading_group_is_forced_onto_its_own_line() {
    let lines = pack_groups(&groups(&[&["aaaaaaaaaa"], &["b"], &["c"]]), 10, &CharCount);
    assert_eq!(lines, vec!["aaaaaaaaaa", "b c"]);
}

#[test]
fn trailing_groups_are_deferred_until_the_line_fits() {
    let lines = pack_groups(
        &groups(&[&["p-4", "p-2"], &["m-1"], &["mx-auto", "my-2"]]),
        11,
        &CharCount,
    );
    assert_eq!(lines, vec!["p-4 p-2 m-1", "mx-auto my-2"]);
}

#[test]
fn width_equal_to_budget_fits() {
    let lines = pack_groups(&groups(&[&["abcd"], &["efgh"]]), 9, &CharCount);
    assert_eq!(lines, vec!["abcd efgh"]);
    let lines = pack_groups(&groups(&[&["abcd"], &["efgh"]]), 8, &CharCount);
    assert_eq!(lines, vec!["abcd", "efgh"]);
}

#[test]
fn groups_are_never_split_or_reordered() {
    let input = groups(&[&["a", "b", "c"], &["dddd", "eeee"], &["f"]]);
    let lines = pack_groups(&input, 3, &CharCount);
    assert_eq!(lines, vec!["a b c", "dddd eeee", "f"]);
}

#[test]
fn empty_groups_are_skipped() {
    let input = groups(&[&[], &["flex"], &[], &["grid"]]);
    assert_eq!(pack_groups(&input, 80, &CharCount), vec!["flex grid"]);
    let none: Vec<Vec<String>> = Vec::new();
    assert!(pack_groups(&none, 80, &CharCount).is_empty());
}

#[test]
fn display_width_counts_wide_glyphs_twice() {
    let input = groups(&[&["内容"], &["ab"]]);
    assert_eq!(pack_groups(&input, 5, &CharCount), vec!["内容 ab"]);
    assert_eq!(pack_groups(&input, 5, &DisplayWidth), vec!["内容", "ab"]);
}
