use thiserror::Error;

/// Everything that can go wrong between fetching a snapshot and drawing it.
#[derive(Debug, Error)]
pub enum HeatmapError {
    /// The fetch was rejected, returned a non-success status, or the input
    /// could not be read at all.
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// The body is not a JSON array of finite numbers.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A sample lies outside [0,1] and the range policy rejects it.
    #[error("sample {index} out of range: {value} is not in [0, 1]")]
    OutOfRangeSample { index: usize, value: f64 },

    /// The surface could not take the drawn cells.
    #[error("surface failure: {0}")]
    SurfaceFailure(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, HeatmapError>;
