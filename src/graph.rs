use tracing::trace;

use crate::cursor::Vertices;
use crate::error::{check_vertex, GraphError, Result};
use crate::incidence::{AdjacencyList, AdjacencyRow, Incidence};

/// A directed graph on the vertices `0..size()`.
///
/// Every vertex owns one [`Incidence`] describing its out-neighbors. The graph
/// can't be changed after construction, derived graphs (transpose,
/// condensation) are built as new values.
#[derive(Debug, PartialEq, Eq)]
pub struct Graph<I = AdjacencyRow> {
    incidence: Vec<I>,
}

impl<I: Clone> Clone for Graph<I> {
    fn clone(&self) -> Self {
        Self { incidence: self.incidence.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.incidence.clone_from(&source.incidence);
    }
}

impl<I: Incidence> Graph<I> {
    /// Takes ownership of one incidence per vertex. Fails if an incidence
    /// isn't defined over exactly `incidence.len()` vertices.
    pub fn new(incidence: Vec<I>) -> Result<Self> {
        let size = incidence.len();
        for (row, inc) in incidence.iter().enumerate() {
            if inc.len() != size {
                return Err(GraphError::RowLength { row, len: inc.len(), size });
            }
        }
        trace!(size, "built graph");
        Ok(Graph { incidence })
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.incidence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidence.is_empty()
    }

    /// Cursor over the out-neighbors of `v`.
    pub fn begin(&self, v: usize) -> Result<I::Cursor<'_>> {
        check_vertex(v, self.size())?;
        Ok(self.incidence[v].begin())
    }

    /// Cursor over every vertex of the graph.
    pub fn vertices(&self) -> Vertices {
        Vertices::new(self.size())
    }

    /// Returns true if there is an edge `u -> v`.
    pub fn is_connected(&self, u: usize, v: usize) -> Result<bool> {
        check_vertex(u, self.size())?;
        check_vertex(v, self.size())?;
        self.incidence[u].is_connected(v)
    }

    /// The incidence of `v`. Callers must pass a valid id.
    pub(crate) fn row(&self, v: usize) -> &I {
        &self.incidence[v]
    }

    /// All edges in increasing `(from, to)` order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.incidence.iter().enumerate().flat_map(|(u, inc)| inc.begin().map(move |v| (u, v)))
    }

    /// Dense copy of the adjacency, `matrix[u][v]` is `true` for an edge `u -> v`.
    pub fn to_matrix(&self) -> Vec<Vec<bool>> {
        let mut matrix = vec![vec![false; self.size()]; self.size()];
        for (u, v) in self.edges() {
            matrix[u][v] = true;
        }
        matrix
    }

    /// The graph with every edge reversed.
    pub fn transpose(&self) -> Graph<AdjacencyRow> {
        let mut rows = vec![AdjacencyRow::empty(self.size()); self.size()];
        for (u, v) in self.edges() {
            rows[v].set(u);
        }
        Graph::from_rows(rows)
    }
}

impl Graph<AdjacencyRow> {
    // Rows built by this crate, already `size` long
    pub(crate) fn from_rows(rows: Vec<AdjacencyRow>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == rows.len()));
        Graph { incidence: rows }
    }

    /// Build a dense graph from an adjacency matrix, `matrix[u][v]` is `true`
    /// for an edge `u -> v`.
    pub fn from_matrix(matrix: Vec<Vec<bool>>) -> Result<Self> {
        Graph::new(matrix.into_iter().map(AdjacencyRow::new).collect())
    }

    /// Build a dense graph with `size` vertices and the given edges.
    pub fn from_edges(size: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut rows = vec![AdjacencyRow::empty(size); size];
        for &(u, v) in edges {
            check_vertex(u, size)?;
            check_vertex(v, size)?;
            rows[u].set(v);
        }
        Graph::new(rows)
    }

    /// The same graph with `extra` edges added.
    pub fn with_edges(&self, extra: &[(usize, usize)]) -> Result<Self> {
        let mut rows = self.incidence.clone();
        for &(u, v) in extra {
            check_vertex(u, self.size())?;
            check_vertex(v, self.size())?;
            rows[u].set(v);
        }
        Ok(Graph::from_rows(rows))
    }
}

impl Graph<AdjacencyList> {
    /// Build a sparse graph from per-vertex neighbor lists.
    pub fn from_lists(lists: Vec<Vec<usize>>) -> Result<Self> {
        let size = lists.len();
        let incidence =
            lists.into_iter().map(|l| AdjacencyList::new(size, l)).collect::<Result<Vec<_>>>()?;
        Graph::new(incidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::VertexIterator;

    fn matrix() -> Vec<Vec<bool>> {
        [[0, 1, 0, 0], [1, 0, 0, 1], [1, 1, 0, 1], [0, 0, 1, 0]]
            .iter()
            .map(|r| r.iter().map(|&x| x == 1).collect())
            .collect()
    }

    #[test]
    fn is_connected() {
        let m = matrix();
        let graph = Graph::from_matrix(m.clone()).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(graph.is_connected(i, j), Ok(m[i][j]));
            }
        }
        assert_eq!(graph.is_connected(5, 0), Err(GraphError::OutOfRange { vertex: 5, size: 4 }));
        assert_eq!(graph.is_connected(1, 5), Err(GraphError::OutOfRange { vertex: 5, size: 4 }));
        assert!(graph.is_connected(4, 4).is_err());
    }

    #[test]
    fn begin() {
        let m = matrix();
        let graph = Graph::from_matrix(m.clone()).unwrap();
        for i in 0..4 {
            let mut it = graph.begin(i).unwrap();
            for j in 0..4 {
                if m[i][j] {
                    assert_eq!(it.get(), Some(j));
                    it.move_forward();
                }
            }
            assert!(!it.is_valid());
        }
        let mut it = graph.vertices();
        for i in 0..4 {
            assert_eq!(it.get(), Some(i));
            it.move_forward();
        }
        assert!(!it.is_valid());
        assert_eq!(graph.begin(4).err(), Some(GraphError::OutOfRange { vertex: 4, size: 4 }));
    }

    #[test]
    fn rejects_bad_rows() {
        let err = Graph::from_matrix(vec![vec![false, true], vec![false]]);
        assert_eq!(err, Err(GraphError::RowLength { row: 1, len: 1, size: 2 }));
        assert!(Graph::from_lists(vec![vec![1], vec![2]]).is_err());
        assert!(Graph::from_edges(2, &[(0, 2)]).is_err());
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::from_matrix(Vec::new()).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.vertices().count(), 0);
        assert!(graph.begin(0).is_err());
    }

    #[test]
    fn edges_and_matrix() {
        let graph = Graph::from_matrix(matrix()).unwrap();
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 0), (1, 3), (2, 0), (2, 1), (2, 3), (3, 2)]);
        assert_eq!(Graph::from_edges(4, &edges).unwrap(), graph);
        assert_eq!(graph.to_matrix(), matrix());
    }

    #[test]
    fn transpose() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 2)]).unwrap();
        let t = graph.transpose();
        assert_eq!(t.edges().collect::<Vec<_>>(), vec![(1, 0), (2, 1), (2, 2)]);
        assert_eq!(t.transpose(), graph);
    }

    #[test]
    fn with_edges() {
        let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
        let more = graph.with_edges(&[(1, 0)]).unwrap();
        assert_eq!(more.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
        assert_eq!(graph.edges().count(), 1);
        assert!(graph.with_edges(&[(0, 2)]).is_err());
    }

    #[test]
    fn sparse_matches_dense() {
        let dense = Graph::from_matrix(matrix()).unwrap();
        let sparse = Graph::from_lists(vec![vec![1], vec![3, 0], vec![0, 1, 3], vec![2]]).unwrap();
        assert!(dense.edges().eq(sparse.edges()));
        assert_eq!(sparse.is_connected(2, 3), Ok(true));
        assert_eq!(sparse.is_connected(3, 0), Ok(false));
    }

    #[test]
    fn clone() {
        let graph = Graph::from_matrix(matrix()).unwrap();
        let mut other = Graph::from_edges(1, &[]).unwrap();
        other.clone_from(&graph);
        assert_eq!(other, graph);
        assert_eq!(graph.clone(), graph);
    }
}
