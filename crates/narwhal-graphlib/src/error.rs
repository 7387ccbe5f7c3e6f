use crate::{Orientation, VertexIndex};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("graph has no vertex with index {index}")]
    MissingVertex { index: VertexIndex },

    #[error("refusing to add a self-loop on vertex {index}")]
    SelfLoop { index: VertexIndex },

    #[error("a {orientation} link {start} -> {end} already exists")]
    DuplicateLink {
        start: VertexIndex,
        end: VertexIndex,
        orientation: Orientation,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
