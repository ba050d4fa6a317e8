/// Convenience result type used across Denoyte.
pub type DenoyteResult<T> = Result<T, DenoyteError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum DenoyteError {
    /// Invalid caller-provided data (buffer lengths, dimensions, configuration).
    #[error("validation error: {0}")]
    Validation(String),

    /// A float-image stream that cannot be decoded (unparsable header,
    /// non-finite scale, or truncated pixel data).
    #[error("malformed float image: {0}")]
    MalformedImage(String),

    /// IO failures while writing float-image or raster artifacts.
    #[error("export error: {0}")]
    Export(String),

    /// External denoiser failures (spawn, exit status, or stderr loss).
    #[error("denoise error: {0}")]
    Denoise(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DenoyteError {
    /// Build a [`DenoyteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DenoyteError::MalformedImage`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedImage(msg.into())
    }

    /// Build a [`DenoyteError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`DenoyteError::Denoise`] value.
    pub fn denoise(msg: impl Into<String>) -> Self {
        Self::Denoise(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
