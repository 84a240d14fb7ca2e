#![doc = "Sunder public API"]
mod bench;
mod connectivity;
mod graph;
mod io;

pub mod cli;
pub mod commands;

#[doc(inline)]
pub use graph::{Edge, Graph};

#[doc(inline)]
pub use connectivity::{count_reachable, find_articulation_points, find_bridges};
