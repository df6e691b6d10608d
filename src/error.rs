use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between loading an image and getting an
/// answer back. Each failure is terminal for the single request; there is
/// no retry.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("missing OpenAI API key; set OPENAI_API_KEY in the environment or a .env file")]
    MissingCredential,

    #[error("API key is not a valid header value: {0}")]
    InvalidCredential(#[from] reqwest::header::InvalidHeaderValue),

    #[error("unsupported image type: {0} (expected .jpg, .jpeg, or .png)")]
    UnsupportedImageType(String),

    #[error("failed to read image {path}: {source}")]
    ImageRead {
        path: String,
        source: image::ImageError,
    },

    #[error("JPEG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("unexpected API response format")]
    UnexpectedFormat,

    #[error("invalid confidence threshold {0:?}; expected a number between 0.0 and 1.0")]
    InvalidThreshold(String),
}
