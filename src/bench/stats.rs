//! Summary statistics over recorded run times, grouped by category.

use std::collections::BTreeMap;

use crate::bench::RunRecord;

/// Per-category summary of run times (seconds).
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CategoryStats {
    pub(crate) category: String,
    pub(crate) mean: f64,
    pub(crate) median: f64,
    pub(crate) std_dev: f64,
}

/// Summarize run times per category, sorted by ascending mean.
pub(crate) fn summarize(records: &[RunRecord]) -> Vec<CategoryStats> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        groups.entry(record.category.as_str()).or_default().push(record.time);
    }

    let mut stats = groups.into_iter()
        .map(|(category, times)| CategoryStats {
            category: category.to_string(),
            mean: mean(&times),
            median: median(&times),
            std_dev: std_dev(&times),
        })
        .collect::<Vec<_>>();
    stats.sort_by(|a, b| a.mean.total_cmp(&b.mean));
    stats
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() { return 0.0 }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of the values; the midpoint average for even counts.
fn median(values: &[f64]) -> f64 {
    if values.is_empty() { return 0.0 }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 { sorted[mid] } else { (sorted[mid - 1] + sorted[mid]) / 2.0 }
}

/// Sample standard deviation (n - 1 denominator); zero below two values.
fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 { return 0.0 }

    let mean = mean(values);
    let variance = values.iter().map(|value| (value - mean).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, time: f64) -> RunRecord {
        RunRecord { category: category.to_string(), n: 16, m: 15, time, exitcode: 0 }
    }

    #[test]
    fn summarizes_known_values() {
        let records = vec![
            record("path", 1.0),
            record("path", 2.0),
            record("path", 3.0),
            record("path", 4.0),
        ];

        let stats = summarize(&records);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].mean, 2.5);
        assert_eq!(stats[0].median, 2.5);
        assert!((stats[0].std_dev - 1.2909944487358056).abs() < 1e-12);
    }

    #[test]
    fn odd_counts_take_the_middle_value() {
        let records = vec![record("path", 3.0), record("path", 1.0), record("path", 2.0)];
        assert_eq!(summarize(&records)[0].median, 2.0);
    }

    #[test]
    fn singleton_groups_have_zero_std_dev() {
        let stats = summarize(&[record("path", 5.0)]);
        assert_eq!(stats[0].std_dev, 0.0);
        assert_eq!(stats[0].mean, 5.0);
        assert_eq!(stats[0].median, 5.0);
    }

    #[test]
    fn categories_sort_by_ascending_mean() {
        let records = vec![
            record("slow", 9.0),
            record("fast", 1.0),
            record("middle", 4.0),
        ];

        let order = summarize(&records).into_iter()
            .map(|stat| stat.category)
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["fast", "middle", "slow"]);
    }

    #[test]
    fn empty_input_produces_no_stats() {
        assert!(summarize(&[]).is_empty());
    }
}
