//! Random graphs, mostly for testing the algorithms on many inputs.
use rand::{seq::SliceRandom, Rng};
use rand_distr::{Bernoulli, Distribution};

use crate::error::Result;
use crate::graph::Graph;
use crate::incidence::AdjacencyRow;

/// A graph where every edge, self-loops included, is present with probability
/// `edge_probability`.
pub fn random_graph<R: Rng>(rng: &mut R, size: usize, edge_probability: f64) -> Result<Graph> {
    let edge = Bernoulli::new(edge_probability)?;
    let rows: Vec<AdjacencyRow> = (0..size)
        .map(|_| AdjacencyRow::new(edge.sample_iter(&mut *rng).take(size).collect()))
        .collect();
    Graph::new(rows)
}

/// A graph without cycles. The vertices are shuffled into a random order and
/// every edge going forward in that order is present with probability
/// `edge_probability`.
pub fn random_dag<R: Rng>(rng: &mut R, size: usize, edge_probability: f64) -> Result<Graph> {
    let edge = Bernoulli::new(edge_probability)?;
    let mut order: Vec<usize> = (0..size).collect();
    order.shuffle(rng);
    let mut edges = Vec::new();
    for (i, &u) in order.iter().enumerate() {
        for &v in &order[(i + 1)..] {
            if edge.sample(rng) {
                edges.push((u, v));
            }
        }
    }
    Graph::from_edges(size, &edges)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::classify::has_loop;
    use crate::error::GraphError;

    #[test]
    fn same_seed_same_graph() {
        let a = random_graph(&mut ChaCha8Rng::seed_from_u64(7), 12, 0.3).unwrap();
        let b = random_graph(&mut ChaCha8Rng::seed_from_u64(7), 12, 0.3).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.size(), 12);
    }

    #[test]
    fn probability_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(random_graph(&mut rng, 5, 0.0).unwrap().edges().count(), 0);
        assert_eq!(random_graph(&mut rng, 5, 1.0).unwrap().edges().count(), 25);
        assert_eq!(random_dag(&mut rng, 5, 1.0).unwrap().edges().count(), 10);
        assert!(matches!(random_graph(&mut rng, 5, 1.5), Err(GraphError::Probability(_))));
        assert!(matches!(random_dag(&mut rng, 5, -0.1), Err(GraphError::Probability(_))));
    }

    #[test]
    fn dags_have_no_loop() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for size in 0..20 {
            assert!(!has_loop(&random_dag(&mut rng, size, 0.5).unwrap()));
        }
    }
}
