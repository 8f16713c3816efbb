use rand_distr::BernoulliError;
use thiserror::Error;

/// Errors returned by graph queries and by the augmentation engine.
///
/// Every variant describes a precondition that was checked before any work
/// was done, so an error never comes with a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range, valid ids are 0..{size}")]
    OutOfRange { vertex: usize, size: usize },

    #[error("adjacency row {row} covers {len} vertices but the graph has {size}")]
    RowLength { row: usize, len: usize, size: usize },

    #[error("graph contains a cycle and is not a condensation")]
    HasLoop,

    #[error("{sources} sources outnumber {sinks} sinks")]
    SourceSinkImbalance { sources: usize, sinks: usize },

    #[error("edge probability must be between 0 and 1")]
    Probability(#[from] BernoulliError),
}

pub type Result<T> = std::result::Result<T, GraphError>;

/// Returns `Ok(())` if `vertex` is a valid id in a graph of `size` vertices.
pub(crate) fn check_vertex(vertex: usize, size: usize) -> Result<()> {
    if vertex < size {
        Ok(())
    } else {
        Err(GraphError::OutOfRange { vertex, size })
    }
}
