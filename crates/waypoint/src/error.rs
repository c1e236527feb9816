use std::fmt::Debug;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError<V: Debug> {
    #[error("Vertex {0:?} already exists")]
    DuplicateVertex(V),

    #[error("Vertex {0:?} doesn't exist")]
    UnknownVertex(V),
}
