use thiserror::Error;

/// Errors surfaced by the survey store boundary.
///
/// Scoring and extraction never produce errors; only the persistence
/// collaborator can fail, and only in these two ways.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("survey store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but does not hold a valid record array.
    #[error("malformed survey data: {0}")]
    Parse(#[from] serde_json::Error),
}
