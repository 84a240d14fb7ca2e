//! Benchmark harness: graph generators, a timing sweep, and summary
//! statistics over the recorded run times.

mod generate;
mod runner;
mod stats;

pub(crate) use generate::*;
pub(crate) use runner::*;
pub(crate) use stats::*;
