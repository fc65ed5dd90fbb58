use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    /// `max_chunks` was not a usable number. Malformed parameters fail
    /// loudly instead of silently falling back to the default.
    #[error("invalid max_chunks: {0}")]
    InvalidMaxChunks(String),
}
