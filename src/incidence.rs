//! Per-vertex adjacency.
//!
//! An [`Incidence`] is the set of out-neighbors of a single vertex. The
//! algorithms in this crate only use the trait, so a graph can be stored as
//! dense rows ([`AdjacencyRow`]) or as sorted lists ([`AdjacencyList`]).

use crate::cursor::{ListCursor, RowCursor, VertexIterator};
use crate::error::{check_vertex, Result};

pub trait Incidence {
    type Cursor<'a>: VertexIterator
    where
        Self: 'a;

    /// Cursor at the first neighbor, in increasing id order. It is invalid
    /// right away if there are no neighbors.
    fn begin(&self) -> Self::Cursor<'_>;

    /// Returns true if `v` is a neighbor.
    fn is_connected(&self, v: usize) -> Result<bool>;

    /// Number of vertices this incidence is defined over. Every neighbor is
    /// smaller than this.
    fn len(&self) -> usize;

    /// Returns true if there is at least one neighbor.
    fn has_neighbors(&self) -> bool {
        self.begin().is_valid()
    }
}

/// Dense adjacency row, `row[v]` is `true` if `v` is a neighbor.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct AdjacencyRow {
    row: Vec<bool>,
}

impl Clone for AdjacencyRow {
    fn clone(&self) -> Self {
        Self { row: self.row.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.row.clone_from(&source.row);
    }
}

impl AdjacencyRow {
    #[must_use]
    pub fn new(row: Vec<bool>) -> Self {
        AdjacencyRow { row }
    }

    /// A row over `dim` vertices without any neighbors.
    #[must_use]
    pub fn empty(dim: usize) -> Self {
        AdjacencyRow { row: vec![false; dim] }
    }

    pub(crate) fn set(&mut self, v: usize) {
        self.row[v] = true;
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.row
    }
}

impl From<Vec<bool>> for AdjacencyRow {
    fn from(row: Vec<bool>) -> Self {
        AdjacencyRow::new(row)
    }
}

impl Incidence for AdjacencyRow {
    type Cursor<'a> = RowCursor<'a>;

    fn begin(&self) -> RowCursor<'_> {
        RowCursor::new(&self.row, 0)
    }

    fn is_connected(&self, v: usize) -> Result<bool> {
        check_vertex(v, self.row.len())?;
        Ok(self.row[v])
    }

    fn len(&self) -> usize {
        self.row.len()
    }
}

/// Sorted list of neighbors, useful for sparse graphs.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AdjacencyList {
    dim: usize,
    neighbors: Vec<usize>,
}

impl AdjacencyList {
    /// Neighbors may be given in any order and may repeat. Fails if a
    /// neighbor is not smaller than `dim`.
    pub fn new(dim: usize, mut neighbors: Vec<usize>) -> Result<Self> {
        neighbors.sort_unstable();
        neighbors.dedup();
        if let Some(&max) = neighbors.last() {
            check_vertex(max, dim)?;
        }
        Ok(AdjacencyList { dim, neighbors })
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.neighbors
    }
}

impl Incidence for AdjacencyList {
    type Cursor<'a> = ListCursor<'a>;

    fn begin(&self) -> ListCursor<'_> {
        ListCursor::new(&self.neighbors)
    }

    fn is_connected(&self, v: usize) -> Result<bool> {
        check_vertex(v, self.dim)?;
        Ok(self.neighbors.binary_search(&v).is_ok())
    }

    fn len(&self) -> usize {
        self.dim
    }

    fn has_neighbors(&self) -> bool {
        !self.neighbors.is_empty()
    }
}
