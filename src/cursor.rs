//! Forward-only cursors over vertex ids.
//!
//! A cursor always points either at a vertex or past the end. Once it is past
//! the end it stays there, and [`VertexIterator::move_forward`] does nothing.
//! Every cursor is also an [`Iterator`], which yields the current vertex and
//! then moves forward, so the usual iterator adapters work on it.

/// The cursor protocol shared by neighbor sequences and the sequence of all
/// vertices of a graph. Ids are produced in strictly increasing order.
pub trait VertexIterator: Iterator<Item = usize> {
    /// Advance to the next vertex, or past the end.
    fn move_forward(&mut self);

    /// Returns `true` if the cursor currently points at a vertex.
    fn is_valid(&self) -> bool;

    /// The current vertex, or `None` once the cursor is past the end.
    fn get(&self) -> Option<usize>;
}

/// Cursor over the set positions of a dense adjacency row.
#[derive(Clone, Debug)]
pub struct RowCursor<'a> {
    row: &'a [bool],
    pos: usize,
}

impl<'a> RowCursor<'a> {
    /// Create a cursor at `pos`. If `row[pos]` isn't set the cursor skips
    /// ahead to the next set position, or past the end.
    pub fn new(row: &'a [bool], pos: usize) -> Self {
        let mut cursor = RowCursor { row, pos: pos.min(row.len()) };
        cursor.skip_unset();
        cursor
    }

    fn skip_unset(&mut self) {
        while self.pos < self.row.len() && !self.row[self.pos] {
            self.pos += 1;
        }
    }
}

impl VertexIterator for RowCursor<'_> {
    fn move_forward(&mut self) {
        if self.is_valid() {
            self.pos += 1;
            self.skip_unset();
        }
    }

    fn is_valid(&self) -> bool {
        self.pos < self.row.len()
    }

    fn get(&self) -> Option<usize> {
        self.is_valid().then_some(self.pos)
    }
}

impl Iterator for RowCursor<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let v = self.get()?;
        self.move_forward();
        Some(v)
    }
}

/// Cursor over a sorted list of neighbor ids.
#[derive(Clone, Debug)]
pub struct ListCursor<'a> {
    neighbors: &'a [usize],
    pos: usize,
}

impl<'a> ListCursor<'a> {
    pub(crate) fn new(neighbors: &'a [usize]) -> Self {
        debug_assert!(neighbors.windows(2).all(|w| w[0] < w[1]));
        ListCursor { neighbors, pos: 0 }
    }
}

impl VertexIterator for ListCursor<'_> {
    fn move_forward(&mut self) {
        if self.is_valid() {
            self.pos += 1;
        }
    }

    fn is_valid(&self) -> bool {
        self.pos < self.neighbors.len()
    }

    fn get(&self) -> Option<usize> {
        self.neighbors.get(self.pos).copied()
    }
}

impl Iterator for ListCursor<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let v = self.get()?;
        self.move_forward();
        Some(v)
    }
}

/// Cursor over every vertex `0..size` of a graph.
#[derive(Clone, Debug)]
pub struct Vertices {
    current: usize,
    size: usize,
}

impl Vertices {
    pub(crate) fn new(size: usize) -> Self {
        Vertices { current: 0, size }
    }
}

impl VertexIterator for Vertices {
    fn move_forward(&mut self) {
        if self.is_valid() {
            self.current += 1;
        }
    }

    fn is_valid(&self) -> bool {
        self.current < self.size
    }

    fn get(&self) -> Option<usize> {
        self.is_valid().then_some(self.current)
    }
}

impl Iterator for Vertices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let v = self.get()?;
        self.move_forward();
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.size - self.current;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Vertices {}
