use std::cmp::Ordering;
use std::fmt;

pub type Weight = u32;

/// An undirected weighted edge, always stored with `u <= v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(a: usize, b: usize, weight: Weight) -> Edge {
        if a <= b {
            Edge { u: a, v: b, weight }
        } else {
            Edge { u: b, v: a, weight }
        }
    }

    pub fn pair(&self) -> (usize, usize) {
        (self.u, self.v)
    }

    pub fn is_loop(&self) -> bool {
        self.u == self.v
    }
}

// ordering is by weight only; equal weights compare equal regardless of endpoints
pub fn by_weight(a: &Edge, b: &Edge) -> Ordering {
    a.weight.cmp(&b.weight)
}

pub fn total_weight(edges: &[Edge]) -> u64 {
    edges.iter().map(|e| e.weight as u64).sum()
}

impl From<(usize, usize, Weight)> for Edge {
    fn from((u, v, w): (usize, usize, Weight)) -> Edge {
        Edge::new(u, v, w)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.u, self.v, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_is_canonical() {
        assert_eq!(Edge::new(3, 1, 9), Edge::new(1, 3, 9));
        assert_eq!(Edge::new(3, 1, 9).pair(), (1, 3));
        assert!(Edge::new(2, 2, 0).is_loop());
    }

    #[test]
    fn weights_sum_without_overflow() {
        let edges = vec![Edge::new(0, 1, Weight::max_value()), Edge::new(1, 2, Weight::max_value())];
        assert_eq!(total_weight(&edges), 2 * Weight::max_value() as u64);
    }
}
