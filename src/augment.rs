//! Minimum augmentation to strong connectivity (Eswaran and Tarjan).
//!
//! Given a graph without cycles, [`completion_in_condensed`] finds a smallest
//! set of edges whose addition makes the graph strongly connected. The
//! construction chains sources to sinks found by depth-first search, folds
//! the sources and sinks that weren't reached into that chain and finally
//! splices the isolated vertices into the closing edge.
//!
//! [`completion`] does the same for any graph by working on its condensation.

use tracing::debug;

use crate::classify::{has_loop, isolated, sinks, sources};
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::incidence::Incidence;
use crate::scc::components_tarjan;

/// An edge `(from, to)` to add to a graph.
pub type Edge = (usize, usize);

// Depth-first search from `start` that stops at the first sink. Visited
// vertices stay marked between calls, so two searches never share a vertex.
fn find_sink<I: Incidence>(
    graph: &Graph<I>,
    start: usize,
    visited: &mut [bool],
    is_sink: &[bool],
) -> Option<usize> {
    visited[start] = true;
    if is_sink[start] {
        return Some(start);
    }
    let mut stack = vec![graph.row(start).begin()];
    while let Some(it) = stack.last_mut() {
        let Some(w) = it.next() else {
            stack.pop();
            continue;
        };
        if visited[w] {
            continue;
        }
        visited[w] = true;
        if is_sink[w] {
            return Some(w);
        }
        stack.push(graph.row(w).begin());
    }
    None
}

// Edges through `vertices` in a cycle, in order
fn cycle_through(vertices: &[usize]) -> Vec<Edge> {
    if vertices.len() <= 1 {
        return Vec::new();
    }
    let n = vertices.len();
    (0..n).map(|i| (vertices[i], vertices[(i + 1) % n])).collect()
}

/// Edges that make `graph` strongly connected, for a graph that is its own
/// condensation.
///
/// Fails with [`GraphError::HasLoop`] if the graph has a cycle and with
/// [`GraphError::SourceSinkImbalance`] if it has more sources than sinks.
/// Unless the graph has no edges at all, exactly `sinks + isolated` edges are
/// returned.
pub fn completion_in_condensed<I: Incidence>(graph: &Graph<I>) -> Result<Vec<Edge>> {
    if has_loop(graph) {
        debug!(size = graph.size(), "refusing to complete a graph with a cycle");
        return Err(GraphError::HasLoop);
    }
    let isolated = isolated(graph);
    let source = sources(graph);
    let sink = sinks(graph);
    debug!(
        sources = source.len(),
        sinks = sink.len(),
        isolated = isolated.len(),
        "completing condensed graph"
    );
    if source.len() > sink.len() {
        debug!("refusing to complete a graph with more sources than sinks");
        return Err(GraphError::SourceSinkImbalance { sources: source.len(), sinks: sink.len() });
    }

    // Only isolated vertices
    if source.is_empty() && sink.is_empty() {
        return Ok(cycle_through(&isolated));
    }

    let mut is_sink = vec![false; graph.size()];
    for &v in &sink {
        is_sink[v] = true;
    }
    let mut visited = vec![false; graph.size()];
    let mut completion = Vec::with_capacity(sink.len() + isolated.len());
    let mut unused_source = Vec::new();
    let mut first_source = None;
    let mut last_found_sink = None;

    for &s in &source {
        match find_sink(graph, s, &mut visited, &is_sink) {
            Some(found) => {
                match last_found_sink {
                    None => first_source = Some(s),
                    Some(last) => completion.push((last, s)),
                }
                last_found_sink = Some(found);
            }
            None => unused_source.push(s),
        }
    }

    // In a graph without cycles the first source always reaches a sink
    let (Some(first_source), Some(last_found_sink)) = (first_source, last_found_sink) else {
        return Err(GraphError::HasLoop);
    };

    let unused_sink: Vec<usize> = sink.iter().copied().filter(|&v| !visited[v]).collect();
    debug_assert!(unused_source.len() <= unused_sink.len());

    for (&t, &s) in unused_sink.iter().zip(&unused_source) {
        completion.push((t, s));
    }
    for &t in &unused_sink[unused_source.len()..] {
        completion.push((t, first_source));
    }

    // Close the cycle, passing through the isolated vertices if there are any
    match (isolated.first(), isolated.last()) {
        (Some(&first), Some(&last)) => {
            completion.push((last_found_sink, first));
            completion.push((last, first_source));
            completion.extend(isolated.windows(2).map(|w| (w[0], w[1])));
        }
        _ => completion.push((last_found_sink, first_source)),
    }

    debug!(edges = completion.len(), "completed condensed graph");
    Ok(completion)
}

/// Edges that make any graph strongly connected.
///
/// The graph is condensed, the condensation completed and every added edge
/// connects representatives of the components. When the condensation has more
/// sources than sinks the transposed condensation is completed instead and
/// the edges are reversed.
pub fn completion<I: Incidence>(graph: &Graph<I>) -> Result<Vec<Edge>> {
    let components = components_tarjan(graph);
    let condensed = components.condense(graph);
    let edges: Vec<Edge> = if sources(&condensed).len() > sinks(&condensed).len() {
        let reversed = completion_in_condensed(&condensed.transpose())?;
        reversed.into_iter().map(|(u, v)| (v, u)).collect()
    } else {
        completion_in_condensed(&condensed)?
    };
    edges
        .into_iter()
        .map(|(u, v)| Ok((components.representative(u)?, components.representative(v)?)))
        .collect()
}
