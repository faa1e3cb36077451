use super::*;

#[test]
fn stats_grid_has_four_metrics() {
    assert_eq!(stat_defs().len(), 4);
}

#[test]
fn stat_labels_are_unique_and_non_empty() {
    let defs = stat_defs();
    for (label, value, _) in &defs {
        assert!(!label.is_empty());
        assert!(!value.is_empty());
    }
    let mut labels: Vec<_> = defs.iter().map(|(l, _, _)| *l).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), defs.len());
}
