use thiserror::Error;

// Higher level error: PipelineError
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    CompanyConfig(#[from] CompanyConfigError),
    #[error("{0}")]
    Fetch(#[from] FetchError),
    #[error("{0}")]
    Raster(#[from] RasterError),
    #[error("{0}")]
    Trace(#[from] TraceError),
    #[error("error processing file: {0}")]
    FileIO(String),
}

// Lower level errors; should be used by the pipeline error
#[derive(Debug, Error)]
pub enum CompanyConfigError {
    #[error("tokens file not found for company: {0}")]
    NotFound(String),
    #[error("error parsing token list: {0}")]
    InvalidTokenList(#[from] serde_json::Error),
    #[error("error reading file: {0}")]
    FileIO(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid logo url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("error during logo request: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("error converting image: {0}")]
    Image(#[from] image::ImageError),
    #[error("error reading file: {0}")]
    FileIO(String),
}

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("error tracing raster to vector: {0}")]
    Vectorize(String),
}
