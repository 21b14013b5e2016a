// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
use error::{Error, Result};

#[derive(Debug, Clone)]
pub struct DisjointSet {
	parent: Vec<usize>,
	rank: Vec<usize>,
	components: usize,
}

impl DisjointSet {
	pub fn make_singletons(size: usize) -> DisjointSet {
		DisjointSet {
			parent: (0..size).collect(),
			rank: vec![0; size],
			components: size,
		}
	}

	pub fn len(&self) -> usize {
		self.parent.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parent.is_empty()
	}

	/// Number of disjoint sets currently tracked.
	pub fn components(&self) -> usize {
		self.components
	}

	fn check(&self, x: usize) -> Result<()> {
		if x < self.parent.len() {
			Ok(())
		} else {
			Err(Error::VertexOutOfRange { vertex: x, len: self.parent.len() })
		}
	}

	/// Root of `x`'s set. Every vertex on the way is re-pointed at the root.
	pub fn find(&mut self, x: usize) -> Result<usize> {
		self.check(x)?;
		Ok(self.find_root(x))
	}

	// x must be in range
	fn find_root(&mut self, x: usize) -> usize {
		let parent = self.parent[x];
		if parent != x {
			self.parent[x] = self.find_root(parent);
		}
		self.parent[x]
	}

	/// Merges the sets of `x` and `y`. Returns `false` (and changes nothing)
	/// when they already share a root.
	pub fn unite(&mut self, x: usize, y: usize) -> Result<bool> {
		self.check(x)?;
		self.check(y)?;
		let x_root = self.find_root(x);
		let y_root = self.find_root(y);
		if x_root == y_root {
			return Ok(false);
		}
		if self.rank[x_root] < self.rank[y_root] {
			self.parent[x_root] = y_root;
		} else if self.rank[x_root] > self.rank[y_root] {
			self.parent[y_root] = x_root;
		} else {
			self.parent[y_root] = x_root;
			self.rank[x_root] += 1;
		}
		self.components -= 1;
		Ok(true)
	}

	pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
		Ok(self.find(x)? == self.find(y)?)
	}
}
