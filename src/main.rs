#[macro_use] extern crate log;
extern crate simplelog;
extern crate rand;
extern crate serde_json;
extern crate mst_bench;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;
use simplelog::*;
use std::env;
use std::error::Error;
use std::fs::File;

use mst_bench::BenchConfig;

fn load_config() -> mst_bench::Result<BenchConfig> {
	match env::var_os("MST_BENCH_CONFIG") {
		Some(path) => {
			let json: Value = serde_json::from_reader(File::open(path)?)?;
			BenchConfig::from_json(&json)
		},
		None => Ok(BenchConfig::default()),
	}
}

fn main() -> Result<(), Box<dyn Error>> {
	let file_level = if env::var_os("MST_BENCH_DEBUG").is_some() {
		LevelFilter::Debug
	} else {
		LevelFilter::Info
	};
	let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
	CombinedLogger::init(
		vec![
			TermLogger::new(LevelFilter::Warn, config.clone(), TerminalMode::Stderr, ColorChoice::Auto),
			WriteLogger::new(file_level, config, File::create("mst-bench.log")?),
		]
	)?;

	let bench = load_config()?;
	info!("vertices {}..={} step {}, seed {:?}, weights [{}, {}]",
		bench.min_vertices, bench.max_vertices, bench.step, bench.seed,
		bench.generator.min_weight, bench.generator.max_weight);

	println!("{}", mst_bench::header());
	let print_row = |row: &mst_bench::BenchRow| println!("{}", row.format());
	match bench.seed {
		Some(seed) => mst_bench::run_benchmark_with(&bench, &mut StdRng::seed_from_u64(seed), print_row)?,
		None => mst_bench::run_benchmark_with(&bench, &mut rand::thread_rng(), print_row)?,
	};
	Ok(())
}
