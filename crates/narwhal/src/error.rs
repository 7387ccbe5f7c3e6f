/// Why a bounded search stopped before it could prove its answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("search node limit reached after exploring {explored} nodes")]
    NodeLimit { explored: u64 },
    #[error("search cancelled after exploring {explored} nodes")]
    Cancelled { explored: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
