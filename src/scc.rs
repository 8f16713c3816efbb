//! Strongly connected components.
//!
//! Two strategies compute the same partition: [`components_dummy`] tests
//! every pair of vertices for mutual reachability and is only meant as a
//! reference, [`components_tarjan`] does a single depth-first pass with
//! low-links.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

use crate::error::{check_vertex, Result};
use crate::graph::Graph;
use crate::incidence::{AdjacencyRow, Incidence};

/// Assignment of a color to every vertex, where two vertices share a color if
/// and only if they are in the same strongly connected component.
///
/// Colors are `0..number_of_colors()` in the order the components were found.
/// Every color has one representative vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coloring {
    color: Vec<usize>,
    representative: Vec<usize>,
}

impl Coloring {
    pub fn number_of_colors(&self) -> usize {
        self.representative.len()
    }

    pub fn color_of(&self, v: usize) -> Result<usize> {
        check_vertex(v, self.color.len())?;
        Ok(self.color[v])
    }

    /// A vertex with the given color.
    pub fn representative(&self, color: usize) -> Result<usize> {
        check_vertex(color, self.representative.len())?;
        Ok(self.representative[color])
    }

    /// Color of every vertex, indexed by vertex.
    pub fn colors(&self) -> &[usize] {
        &self.color
    }

    /// The vertices of every component, indexed by color. Vertices of a
    /// component are in increasing order.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut components = vec![Vec::new(); self.number_of_colors()];
        for (v, &c) in self.color.iter().enumerate() {
            components[c].push(v);
        }
        components
    }

    /// Returns true if both colorings split the vertices into the same
    /// components, no matter which color each component got.
    pub fn same_partition(&self, other: &Coloring) -> bool {
        if self.color.len() != other.color.len()
            || self.number_of_colors() != other.number_of_colors()
        {
            return false;
        }
        let mut forward = vec![None; self.number_of_colors()];
        let mut backward = vec![None; other.number_of_colors()];
        for (&a, &b) in self.color.iter().zip(&other.color) {
            if *forward[a].get_or_insert(b) != b || *backward[b].get_or_insert(a) != a {
                return false;
            }
        }
        true
    }

    /// The condensation of `graph`: one vertex per color and an edge between
    /// two colors if some edge of `graph` goes between them. The result has
    /// no cycles when `self` are the components of `graph`.
    pub fn condense<I: Incidence>(&self, graph: &Graph<I>) -> Graph<AdjacencyRow> {
        debug_assert!(graph.size() == self.color.len());
        let mut rows = vec![AdjacencyRow::empty(self.number_of_colors()); self.number_of_colors()];
        for (u, v) in graph.edges() {
            let (cu, cv) = (self.color[u], self.color[v]);
            if cu != cv {
                rows[cu].set(cv);
            }
        }
        Graph::from_rows(rows)
    }
}

// Depth-first search from `start`, true if `finish` is reached
fn reachable<I: Incidence>(graph: &Graph<I>, start: usize, finish: usize) -> bool {
    if start == finish {
        return true;
    }
    let mut visited = vec![false; graph.size()];
    visited[start] = true;
    let mut stack = vec![graph.row(start).begin()];
    while let Some(it) = stack.last_mut() {
        let Some(w) = it.next() else {
            stack.pop();
            continue;
        };
        if w == finish {
            return true;
        }
        if !visited[w] {
            visited[w] = true;
            stack.push(graph.row(w).begin());
        }
    }
    false
}

/// Returns true if there is a path from `start` to `finish`. Every vertex has
/// an empty path to itself.
pub fn is_path<I: Incidence>(graph: &Graph<I>, start: usize, finish: usize) -> Result<bool> {
    check_vertex(start, graph.size())?;
    check_vertex(finish, graph.size())?;
    Ok(reachable(graph, start, finish))
}

/// Components by checking mutual reachability of every pair of vertices.
/// Takes O(V²·(V+E)) time.
pub fn components_dummy<I: Incidence>(graph: &Graph<I>) -> Coloring {
    let n = graph.size();
    let mut color: Vec<Option<usize>> = vec![None; n];
    let mut representative = Vec::new();
    for u in graph.vertices() {
        if color[u].is_some() {
            continue;
        }
        let c = representative.len();
        representative.push(u);
        color[u] = Some(c);
        for v in (u + 1)..n {
            if color[v].is_none() && reachable(graph, u, v) && reachable(graph, v, u) {
                color[v] = Some(c);
            }
        }
    }
    let color = color.into_iter().flatten().collect();
    trace!(components = representative.len(), "dummy scc done");
    Coloring { color, representative }
}

struct Tarjan<'g, I: Incidence + 'g> {
    graph: &'g Graph<I>,
    counter: usize,
    index: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    // The recursion of the textbook version, every frame has the vertex and
    // the neighbors still to look at
    calls: Vec<(usize, I::Cursor<'g>)>,
    color: Vec<usize>,
    representative: Vec<usize>,
}

impl<'g, I: Incidence + 'g> Tarjan<'g, I> {
    fn new(graph: &'g Graph<I>) -> Self {
        let n = graph.size();
        Tarjan {
            graph,
            counter: 0,
            index: vec![None; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            calls: Vec::new(),
            color: vec![0; n],
            representative: Vec::new(),
        }
    }

    fn enter(&mut self, v: usize) {
        self.index[v] = Some(self.counter);
        self.lowlink[v] = self.counter;
        self.counter += 1;
        self.stack.push(v);
        self.on_stack[v] = true;
        self.calls.push((v, self.graph.row(v).begin()));
    }

    fn strongconnect(&mut self, root: usize) {
        self.enter(root);
        loop {
            let (v, next) = match self.calls.last_mut() {
                Some((v, it)) => (*v, it.next()),
                None => break,
            };
            match next {
                Some(w) => match self.index[w] {
                    None => self.enter(w),
                    Some(iw) if self.on_stack[w] => {
                        self.lowlink[v] = self.lowlink[v].min(iw);
                    }
                    Some(_) => {}
                },
                None => {
                    self.calls.pop();
                    if let Some(&(parent, _)) = self.calls.last() {
                        self.lowlink[parent] = self.lowlink[parent].min(self.lowlink[v]);
                    }
                    if Some(self.lowlink[v]) == self.index[v] {
                        self.pop_component(v);
                    }
                }
            }
        }
    }

    fn pop_component(&mut self, root: usize) {
        let c = self.representative.len();
        self.representative.push(root);
        while let Some(w) = self.stack.pop() {
            self.on_stack[w] = false;
            self.color[w] = c;
            if w == root {
                break;
            }
        }
    }
}

/// Components by Tarjan's algorithm in O(V+E) time. Components are colored
/// in reverse topological order of the condensation.
pub fn components_tarjan<I: Incidence>(graph: &Graph<I>) -> Coloring {
    let mut tarjan = Tarjan::new(graph);
    for v in graph.vertices() {
        if tarjan.index[v].is_none() {
            tarjan.strongconnect(v);
        }
    }
    trace!(components = tarjan.representative.len(), "tarjan scc done");
    Coloring { color: tarjan.color, representative: tarjan.representative }
}

/// Which algorithm to use for strongly connected components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SccMethod {
    Dummy,
    #[default]
    Tarjan,
}

impl SccMethod {
    pub fn components<I: Incidence>(self, graph: &Graph<I>) -> Coloring {
        match self {
            SccMethod::Dummy => components_dummy(graph),
            SccMethod::Tarjan => components_tarjan(graph),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown scc method `{0}`, expected `dummy` or `tarjan`")]
pub struct ParseSccMethodError(String);

impl FromStr for SccMethod {
    type Err = ParseSccMethodError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dummy" => Ok(SccMethod::Dummy),
            "tarjan" => Ok(SccMethod::Tarjan),
            _ => Err(ParseSccMethodError(s.to_string())),
        }
    }
}

impl fmt::Display for SccMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SccMethod::Dummy => write!(f, "dummy"),
            SccMethod::Tarjan => write!(f, "tarjan"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::has_loop;
    use crate::error::GraphError;
    use crate::tests::{from_bits, ArbitraryGraph, ArbitrarySparseGraph};

    //  0 <-- 2 <-
    //  |     |   \
    //  v     v    \
    //  1 <-- 3 --> 4
    fn five() -> Graph {
        from_bits(&[
            [0, 1, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [1, 0, 0, 1, 0],
            [0, 1, 0, 0, 1],
            [0, 0, 1, 0, 0],
        ])
    }

    fn cycle4() -> Graph {
        from_bits(&[[0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1], [1, 0, 0, 0]])
    }

    #[test]
    fn is_path_cases() {
        let graph = from_bits(&[[0, 1], [0, 0]]);
        assert_eq!(is_path(&graph, 0, 1), Ok(true));
        assert_eq!(is_path(&graph, 1, 0), Ok(false));
        assert_eq!(is_path(&graph, 1, 1), Ok(true));
        assert_eq!(is_path(&graph, 2, 1), Err(GraphError::OutOfRange { vertex: 2, size: 2 }));

        let graph = cycle4();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(is_path(&graph, i, j), Ok(true));
            }
        }
    }

    fn check_five(components: &Coloring) {
        assert_eq!(components.number_of_colors(), 3);
        let c = |v| components.color_of(v).unwrap();
        assert_eq!(c(2), c(3));
        assert_eq!(c(2), c(4));
        assert_ne!(c(2), c(1));
        assert_ne!(c(2), c(0));
        assert_ne!(c(1), c(0));
    }

    #[test]
    fn dummy_five() {
        let components = components_dummy(&five());
        check_five(&components);
        assert_eq!(components.colors(), &[0, 1, 2, 2, 2]);
        assert_eq!(components.representative(2), Ok(2));
    }

    #[test]
    fn tarjan_five() {
        let components = components_tarjan(&five());
        check_five(&components);
        // Sinks of the condensation are found first
        assert_eq!(components.color_of(1), Ok(0));
        assert!(components.same_partition(&components_dummy(&five())));
    }

    #[test]
    fn tarjan_cycle() {
        let components = components_tarjan(&cycle4());
        assert_eq!(components.number_of_colors(), 1);
        assert_eq!(components.components(), vec![vec![0, 1, 2, 3]]);
        assert_eq!(components.representative(0), Ok(0));
        assert!(components.representative(1).is_err());
    }

    #[test]
    fn empty_and_single() {
        let empty = Graph::from_matrix(Vec::new()).unwrap();
        assert_eq!(components_tarjan(&empty).number_of_colors(), 0);
        assert_eq!(components_dummy(&empty).number_of_colors(), 0);
        let single = from_bits(&[[1]]);
        assert_eq!(components_tarjan(&single).components(), vec![vec![0]]);
    }

    #[test]
    fn same_partition_relabels() {
        let a = Coloring { color: vec![0, 0, 1], representative: vec![0, 2] };
        let b = Coloring { color: vec![1, 1, 0], representative: vec![2, 1] };
        let c = Coloring { color: vec![0, 1, 1], representative: vec![0, 1] };
        assert!(a.same_partition(&b));
        assert!(!a.same_partition(&c));
    }

    #[test]
    fn condense_five() {
        let graph = five();
        let components = components_dummy(&graph);
        let condensed = components.condense(&graph);
        // colors: 0 -> {0}, 1 -> {1}, 2 -> {2, 3, 4}
        assert_eq!(condensed.edges().collect::<Vec<_>>(), vec![(0, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn method_from_str() {
        assert_eq!("tarjan".parse::<SccMethod>(), Ok(SccMethod::Tarjan));
        assert_eq!("Dummy".parse::<SccMethod>(), Ok(SccMethod::Dummy));
        assert!("kosaraju".parse::<SccMethod>().is_err());
        assert_eq!(SccMethod::default(), SccMethod::Tarjan);
        assert_eq!(SccMethod::Dummy.to_string(), "dummy");
    }

    #[quickcheck]
    fn tarjan_agrees_with_dummy(graph: ArbitraryGraph) -> bool {
        components_tarjan(&graph.0).same_partition(&components_dummy(&graph.0))
    }

    #[quickcheck]
    fn tarjan_agrees_on_sparse(graph: ArbitrarySparseGraph) -> bool {
        let edges: Vec<_> = graph.0.edges().collect();
        let dense = Graph::from_edges(graph.0.size(), &edges).unwrap();
        components_tarjan(&graph.0).same_partition(&components_dummy(&dense))
    }

    #[quickcheck]
    fn colors_are_mutual_reachability(graph: ArbitraryGraph) -> bool {
        let g = &graph.0;
        let components = SccMethod::Tarjan.components(g);
        g.vertices().all(|u| {
            g.vertices().all(|v| {
                let same = components.color_of(u) == components.color_of(v);
                same == (reachable(g, u, v) && reachable(g, v, u))
            })
        })
    }

    #[quickcheck]
    fn condensation_has_no_loop(graph: ArbitraryGraph) -> bool {
        let components = components_tarjan(&graph.0);
        let condensed = components.condense(&graph.0);
        condensed.size() == components.number_of_colors() && !has_loop(&condensed)
    }
}
