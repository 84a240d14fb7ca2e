//! Timing sweep over the benchmark graph families.

use std::time::Instant;

use rand::Rng;

use crate::bench::Category;
use crate::connectivity::{find_articulation_points, find_bridges};
use crate::graph::Graph;

/// One timed analysis run, as recorded in the results CSV.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RunRecord {
    pub(crate) category: String,
    pub(crate) n: usize,
    pub(crate) m: usize,
    pub(crate) time: f64,
    pub(crate) exitcode: i32,
}

/// Time one full analysis (both finders) of `graph`, in seconds.
pub(crate) fn time_analysis(graph: &Graph) -> f64 {
    let start = Instant::now();
    let _ = find_articulation_points(graph);
    let _ = find_bridges(graph);
    start.elapsed().as_secs_f64()
}

/// Run the benchmark sweep: every category at doubling sizes from 16 up
/// to `max_n`, `samples` instances per point.
pub(crate) fn run_sweep(max_n: usize, samples: usize, verbose: u8, rng: &mut impl Rng) -> Vec<RunRecord> {
    let mut records = Vec::new();
    for category in Category::ALL {
        let mut n = 16;
        while n <= max_n {
            for _ in 0..samples {
                let graph = category.generate(n, rng);
                let time = time_analysis(&graph);
                let record = RunRecord {
                    category: category.name().to_string(),
                    n: graph.len(),
                    m: graph.canonical_edges().len(),
                    time,
                    exitcode: 0,
                };
                if verbose > 0 {
                    eprintln!("[bench] {} n={} m={} time={:.6}s", record.category, record.n, record.m, record.time);
                }
                records.push(record);
            }
            n *= 2;
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_covers_every_category_at_every_size() {
        let mut rng = rand::rng();
        let records = run_sweep(32, 2, 0, &mut rng);

        // 6 categories x 2 sizes (16, 32) x 2 samples.
        assert_eq!(records.len(), 24);
        assert!(records.iter().all(|record| record.exitcode == 0));
        assert!(records.iter().all(|record| record.time >= 0.0));
        assert_eq!(records.iter().filter(|record| record.category == "grid").count(), 4);
    }

    #[test]
    fn timing_a_tiny_graph_finishes() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        assert!(time_analysis(&graph) >= 0.0);
    }
}
