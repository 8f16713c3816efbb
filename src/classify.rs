//! Classification of vertices by their in- and out-degree, and cycle
//! detection.

use crate::cursor::VertexIterator;
use crate::graph::Graph;
use crate::incidence::Incidence;

// `has_income[v]` is true if some vertex has `v` as a neighbor
fn has_income<I: Incidence>(graph: &Graph<I>) -> Vec<bool> {
    let mut has_income = vec![false; graph.size()];
    for u in graph.vertices() {
        for v in graph.row(u).begin() {
            has_income[v] = true;
        }
    }
    has_income
}

/// Vertices with at least one outgoing edge and no incoming edges, in
/// increasing order.
pub fn sources<I: Incidence>(graph: &Graph<I>) -> Vec<usize> {
    let has_income = has_income(graph);
    graph.vertices().filter(|&v| !has_income[v] && graph.row(v).has_neighbors()).collect()
}

/// Vertices with at least one incoming edge and no outgoing edges, in
/// increasing order.
pub fn sinks<I: Incidence>(graph: &Graph<I>) -> Vec<usize> {
    let has_income = has_income(graph);
    graph.vertices().filter(|&v| has_income[v] && !graph.row(v).has_neighbors()).collect()
}

/// Vertices without any edges, in increasing order.
pub fn isolated<I: Incidence>(graph: &Graph<I>) -> Vec<usize> {
    let has_income = has_income(graph);
    graph.vertices().filter(|&v| !has_income[v] && !graph.row(v).has_neighbors()).collect()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    New,
    OnStack,
    Done,
}

/// Returns true if the graph has a cycle. Self-loops and 2-cycles count.
pub fn has_loop<I: Incidence>(graph: &Graph<I>) -> bool {
    let mut state = vec![Visit::New; graph.size()];
    let mut stack = Vec::new();
    for root in graph.vertices() {
        if state[root] != Visit::New {
            continue;
        }
        state[root] = Visit::OnStack;
        stack.push((root, graph.row(root).begin()));
        while let Some((v, it)) = stack.last_mut() {
            let Some(w) = it.get() else {
                state[*v] = Visit::Done;
                stack.pop();
                continue;
            };
            it.move_forward();
            match state[w] {
                Visit::New => {
                    state[w] = Visit::OnStack;
                    stack.push((w, graph.row(w).begin()));
                }
                Visit::OnStack => return true,
                Visit::Done => {}
            }
        }
    }
    false
}

/// Returns true if some vertex is its own neighbor.
pub fn has_self_loop<I: Incidence>(graph: &Graph<I>) -> bool {
    graph.vertices().any(|v| graph.row(v).is_connected(v).unwrap_or(false))
}
