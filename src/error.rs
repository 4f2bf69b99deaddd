use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
