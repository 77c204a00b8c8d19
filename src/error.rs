use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Unsupported country '{0}'. Use 'US', 'CA', or 'AU'.")]
    UnsupportedCountry(String),

    #[error("Unique value generation failed after {0} attempts")]
    UniqueExhausted(u32),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IdentityError {
    /// True when the caller supplied bad input and can retry with a valid one.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            IdentityError::UnsupportedCountry(_) | IdentityError::InvalidParameter(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
