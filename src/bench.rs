use std::convert::TryFrom;
use std::time::Instant;

use rand::Rng;
use serde_json::Value;

use error::{Error, Result};
use generator::GeneratorConfig;
use kruskal::kruskal;

pub struct BenchConfig {
	pub min_vertices: usize,
	pub max_vertices: usize,
	pub step: usize,
	pub seed: Option<u64>,
	pub generator: GeneratorConfig,
}

impl Default for BenchConfig {
	fn default() -> BenchConfig {
		BenchConfig {
			min_vertices: 4,
			max_vertices: 24,
			step: 2,
			seed: None,
			generator: GeneratorConfig::default(),
		}
	}
}

fn read_u64(json: &Value, key: &str) -> Result<Option<u64>> {
	match json.get(key) {
		None | Some(Value::Null) => Ok(None),
		Some(v) => v.as_u64()
			.map(Some)
			.ok_or_else(|| Error::InvalidConfig(format!("{} must be a non-negative integer, got {}", key, v))),
	}
}

fn read_usize(json: &Value, key: &str) -> Result<Option<usize>> {
	match read_u64(json, key)? {
		Some(x) => usize::try_from(x)
			.map(Some)
			.map_err(|_| Error::InvalidConfig(format!("{} out of range: {}", key, x))),
		None => Ok(None),
	}
}

fn read_weight(json: &Value, key: &str) -> Result<Option<u32>> {
	match read_u64(json, key)? {
		Some(x) if x > u32::max_value() as u64 =>
			Err(Error::InvalidConfig(format!("{} out of range: {}", key, x))),
		other => Ok(other.map(|x| x as u32)),
	}
}

impl BenchConfig {
	/// Overrides defaults with whichever keys are present in `json`.
	pub fn from_json(json: &Value) -> Result<BenchConfig> {
		if !json.is_object() {
			return Err(Error::InvalidConfig("bench config must be a JSON object".to_string()));
		}
		let mut config = BenchConfig::default();
		if let Some(x) = read_usize(json, "min_vertices")? { config.min_vertices = x; }
		if let Some(x) = read_usize(json, "max_vertices")? { config.max_vertices = x; }
		if let Some(x) = read_usize(json, "step")? { config.step = x; }
		config.seed = read_u64(json, "seed")?;
		if let Some(x) = read_weight(json, "min_weight")? { config.generator.min_weight = x; }
		if let Some(x) = read_weight(json, "max_weight")? { config.generator.max_weight = x; }
		if let Some(x) = read_usize(json, "edges_per_vertex")? { config.generator.edges_per_vertex = x; }
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		if self.step == 0 {
			return Err(Error::InvalidConfig("step must be positive".to_string()));
		}
		if self.min_vertices < 2 {
			return Err(Error::InvalidConfig(format!("min_vertices must be at least 2, got {}", self.min_vertices)));
		}
		if self.min_vertices > self.max_vertices {
			return Err(Error::InvalidConfig(format!("min_vertices {} exceeds max_vertices {}",
				self.min_vertices, self.max_vertices)));
		}
		self.generator.validate()
	}

	pub fn vertex_counts(&self) -> Vec<usize> {
		(self.min_vertices..=self.max_vertices).step_by(self.step.max(1)).collect()
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchRow {
	pub vertices: usize,
	pub edges: usize,
	pub elapsed_ns: u128,
	pub mst_weight: u64,
}

impl BenchRow {
	pub fn format(&self) -> String {
		format!("{:<12}{:<12}{:<15}", self.vertices, self.edges, self.elapsed_ns)
	}
}

pub fn header() -> String {
	format!("{:<12}{:<12}{:<15}\n{}", "Vertices", "Edges", "Time (ns)", "-".repeat(40))
}

/// One timed Kruskal run per vertex count. Graph generation is not timed.
pub fn run_benchmark<R: Rng + ?Sized>(config: &BenchConfig, rng: &mut R) -> Result<Vec<BenchRow>> {
	run_benchmark_with(config, rng, |_| ())
}

/// Same as [`run_benchmark`], calling `on_row` as soon as each row is measured.
pub fn run_benchmark_with<R, F>(config: &BenchConfig, rng: &mut R, mut on_row: F) -> Result<Vec<BenchRow>>
	where R: Rng + ?Sized, F: FnMut(&BenchRow)
{
	config.validate()?;
	let mut rows = Vec::new();
	for n in config.vertex_counts() {
		let edges = config.generator.generate(n, rng)?;

		let start = Instant::now();
		let forest = kruskal(n, &edges)?;
		let elapsed = start.elapsed();

		let row = BenchRow {
			vertices: n,
			edges: edges.len(),
			elapsed_ns: elapsed.as_nanos(),
			mst_weight: forest.total_weight(),
		};
		info!("n={} edges={} mst_edges={} weight={} elapsed={:?}",
			n, row.edges, forest.edges().len(), row.mst_weight, elapsed);
		debug!("{}", json!({
			"vertices": row.vertices,
			"edges": row.edges,
			"elapsed_ns": row.elapsed_ns as u64,
			"mst_weight": row.mst_weight,
		}));
		on_row(&row);
		rows.push(row);
	}
	Ok(rows)
}
