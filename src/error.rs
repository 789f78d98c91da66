use thiserror::Error;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("invalid view interval: start={start}, end={end}")]
    InvalidViewInterval { start: f64, end: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid style sheet: {0}")]
    InvalidStyleSheet(#[from] serde_json::Error),

    #[error("unknown projection `{0}`")]
    UnknownProjection(String),

    #[error("projection `{0}` is already registered")]
    DuplicateProjection(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
