#[macro_use] extern crate log;
#[macro_use] extern crate serde_json;
extern crate rand;

mod error;
mod data;
mod disjoint_set;
mod kruskal;
mod generator;
mod bench;

pub use error::{Error, Result};
pub use data::{Edge, Weight, total_weight};
pub use disjoint_set::DisjointSet;
pub use kruskal::{SpanningForest, kruskal, minimum_spanning_tree};
pub use generator::{GeneratorConfig, random_connected_graph, target_edge_count};
pub use bench::{BenchConfig, BenchRow, header, run_benchmark, run_benchmark_with};
