use data::{self, Edge};
use disjoint_set::DisjointSet;
use error::{Error, Result};

/// Edges accepted by Kruskal's algorithm, in acceptance (non-decreasing
/// weight) order. A spanning tree when the input was connected, otherwise a
/// minimum spanning forest with one tree per component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest {
	vertices: usize,
	components: usize,
	edges: Vec<Edge>,
}

impl SpanningForest {
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn into_edges(self) -> Vec<Edge> {
		self.edges
	}

	pub fn vertices(&self) -> usize {
		self.vertices
	}

	pub fn components(&self) -> usize {
		self.components
	}

	pub fn is_spanning_tree(&self) -> bool {
		self.components <= 1
	}

	pub fn total_weight(&self) -> u64 {
		data::total_weight(&self.edges)
	}

	pub fn into_tree(self) -> Result<Vec<Edge>> {
		if self.is_spanning_tree() {
			Ok(self.edges)
		} else {
			warn!("spanning forest on {} vertices has {} components",
				self.vertices, self.components);
			Err(Error::NotConnected { vertices: self.vertices, components: self.components })
		}
	}
}

/// Runs Kruskal's algorithm over `n` vertices. Edges of equal weight are
/// considered in input order.
pub fn kruskal(n: usize, edges: &[Edge]) -> Result<SpanningForest> {
	if let Some(e) = edges.iter().find(|e| e.v >= n || e.u >= n) {
		return Err(Error::VertexOutOfRange { vertex: e.v.max(e.u), len: n });
	}

	let mut sorted_edges = edges.to_vec();
	sorted_edges.sort_by(data::by_weight);

	let mut ds = DisjointSet::make_singletons(n);
	let target = n.saturating_sub(1);
	let mut mst_edges = Vec::with_capacity(target);

	for edge in sorted_edges {
		if mst_edges.len() == target {
			break;
		}
		if ds.unite(edge.u, edge.v)? {
			mst_edges.push(edge);
		}
	}

	trace!("kruskal: {} vertices, {} of {} edges accepted, {} components",
		n, mst_edges.len(), edges.len(), ds.components());

	Ok(SpanningForest {
		vertices: n,
		components: ds.components(),
		edges: mst_edges,
	})
}

/// Like [`kruskal`] but fails with `Error::NotConnected` instead of returning
/// a partial forest.
pub fn minimum_spanning_tree(n: usize, edges: &[Edge]) -> Result<Vec<Edge>> {
	kruskal(n, edges)?.into_tree()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn edges(raw: &[(usize, usize, u32)]) -> Vec<Edge> {
		raw.iter().map(|&t| Edge::from(t)).collect()
	}

	#[test]
	fn four_vertex_example() {
		let g = edges(&[(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 10), (0, 2, 4)]);
		let forest = kruskal(4, &g).unwrap();
		assert!(forest.is_spanning_tree());
		assert_eq!(forest.total_weight(), 6);
		assert_eq!(forest.into_edges(), edges(&[(0, 1, 1), (1, 2, 2), (2, 3, 3)]));
	}

	#[test]
	fn seven_vertices_eleven_edges() {
		let g = edges(&[
			(0, 1, 7), (0, 3, 5), (1, 2, 8), (1, 3, 9), (1, 4, 7), (2, 4, 5),
			(3, 4, 15), (3, 5, 6), (4, 5, 8), (4, 6, 9), (5, 6, 11),
		]);
		let tree = minimum_spanning_tree(7, &g).unwrap();
		assert_eq!(tree, edges(&[(0, 3, 5), (2, 4, 5), (3, 5, 6), (0, 1, 7), (1, 4, 7), (4, 6, 9)]));
		assert_eq!(data::total_weight(&tree), 39);
	}

	#[test]
	fn single_vertex_has_empty_tree() {
		let forest = kruskal(1, &[]).unwrap();
		assert!(forest.is_spanning_tree());
		assert!(forest.edges().is_empty());
		assert_eq!(minimum_spanning_tree(1, &[]).unwrap(), vec![]);
	}

	#[test]
	fn empty_graph() {
		let forest = kruskal(0, &[]).unwrap();
		assert_eq!(forest.components(), 0);
		assert!(forest.is_spanning_tree());
	}

	#[test]
	fn equal_weights_keep_input_order() {
		let g = edges(&[(0, 2, 1), (0, 1, 1), (1, 2, 1)]);
		let tree = minimum_spanning_tree(3, &g).unwrap();
		assert_eq!(tree, edges(&[(0, 2, 1), (0, 1, 1)]));
	}

	#[test]
	fn loops_and_parallel_edges_are_skipped() {
		let g = edges(&[(1, 1, 0), (0, 1, 5), (1, 0, 2)]);
		let tree = minimum_spanning_tree(2, &g).unwrap();
		assert_eq!(tree, edges(&[(0, 1, 2)]));
	}

	#[test]
	fn disconnected_graph_gives_forest() {
		let g = edges(&[(0, 1, 4), (0, 2, 6), (3, 4, 2)]);
		let forest = kruskal(5, &g).unwrap();
		assert!(!forest.is_spanning_tree());
		assert_eq!(forest.components(), 2);
		assert_eq!(forest.total_weight(), 12);
		match minimum_spanning_tree(5, &g) {
			Err(Error::NotConnected { vertices: 5, components: 2 }) => (),
			other => panic!("unexpected {:?}", other),
		}
	}

	#[test]
	fn out_of_range_edge_is_rejected_up_front() {
		let g = edges(&[(0, 1, 1), (1, 3, 2)]);
		match kruskal(3, &g) {
			Err(Error::VertexOutOfRange { vertex: 3, len: 3 }) => (),
			other => panic!("unexpected {:?}", other),
		}
	}
}
