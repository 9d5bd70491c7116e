use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unsupported visualization type `{requested}`, expected one of: {supported}")]
    UnsupportedVisualizationType {
        requested: String,
        supported: String,
    },

    #[error("axis alignment aborted: {0}")]
    AlignmentAborted(String),
}
