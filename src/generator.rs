use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use data::{Edge, Weight};
use error::{Error, Result};

// consecutive duplicate draws tolerated before switching to enumeration
const MAX_REJECTIONS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
	pub min_weight: Weight,
	pub max_weight: Weight,
	pub edges_per_vertex: usize,
}

impl Default for GeneratorConfig {
	fn default() -> GeneratorConfig {
		GeneratorConfig {
			min_weight: 1,
			max_weight: 1000,
			edges_per_vertex: 2,
		}
	}
}

/// Number of edges a generated graph on `n` vertices ends up with.
pub fn target_edge_count(n: usize, edges_per_vertex: usize) -> usize {
	let complete = n.saturating_mul(n.saturating_sub(1)) / 2;
	edges_per_vertex.saturating_mul(n).min(complete).max(n.saturating_sub(1))
}

impl GeneratorConfig {
	pub fn validate(&self) -> Result<()> {
		if self.min_weight > self.max_weight {
			return Err(Error::InvalidConfig(format!(
				"min_weight {} exceeds max_weight {}", self.min_weight, self.max_weight)));
		}
		Ok(())
	}

	/// Builds a connected simple graph on `n` vertices: a random-weight path
	/// `0 - 1 - ... - n-1` plus random extra edges up to the target count.
	pub fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<Edge>> {
		if n < 2 {
			return Err(Error::TooFewVertices(n));
		}
		self.validate()?;

		let target = target_edge_count(n, self.edges_per_vertex);
		let mut present: HashSet<(usize, usize)> = HashSet::with_capacity(target);
		let mut edges: Vec<Edge> = Vec::with_capacity(target);

		for i in 0..n - 1 {
			let e = Edge::new(i, i + 1, self.draw_weight(rng));
			present.insert(e.pair());
			edges.push(e);
		}

		let total_pairs = n.saturating_mul(n - 1) / 2;
		let mut rejections = 0;
		// sampling only pays off while most pairs are still free
		while edges.len() < target && target <= total_pairs / 2 && rejections < MAX_REJECTIONS {
			let a = rng.gen_range(0..n);
			let mut b = rng.gen_range(0..n - 1);
			if b >= a {
				b += 1;
			}
			let e = Edge::new(a, b, self.draw_weight(rng));
			if present.insert(e.pair()) {
				edges.push(e);
				rejections = 0;
			} else {
				rejections += 1;
			}
		}

		if edges.len() < target {
			debug!("generator: enumerating missing pairs for n={} ({} of {} edges)",
				n, edges.len(), target);
			let mut missing: Vec<(usize, usize)> = (0..n)
				.flat_map(|a| (a + 1..n).map(move |b| (a, b)))
				.filter(|p| !present.contains(p))
				.collect();
			missing.shuffle(rng);
			let needed = target - edges.len();
			for (a, b) in missing.into_iter().take(needed) {
				let e = Edge::new(a, b, self.draw_weight(rng));
				edges.push(e);
			}
		}

		Ok(edges)
	}

	fn draw_weight<R: Rng + ?Sized>(&self, rng: &mut R) -> Weight {
		rng.gen_range(self.min_weight..=self.max_weight)
	}
}

/// Random connected graph with the default weight range `[1, 1000]` and at
/// most `2n` edges.
pub fn random_connected_graph<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<Edge>> {
	GeneratorConfig::default().generate(n, rng)
}
