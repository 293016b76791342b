//! Error taxonomy for advisory computations

use thiserror::Error;

/// Failures raised by the advisory features.
///
/// The first three variants are expected outcomes of bad user input and are
/// shown verbatim. `ComputationFailure` covers anything that went wrong
/// after the inputs were accepted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdvisoryError {
    #[error("Crop type '{name}' not found! Available: {available}")]
    UnknownCrop { name: String, available: String },

    #[error("Region '{name}' not found!")]
    UnknownRegion { name: String },

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    ComputationFailure(String),
}

impl AdvisoryError {
    /// Machine-readable code, used in logs and error pages
    pub fn code(&self) -> &'static str {
        match self {
            AdvisoryError::UnknownCrop { .. } => "UNKNOWN_CROP",
            AdvisoryError::UnknownRegion { .. } => "UNKNOWN_REGION",
            AdvisoryError::InvalidInput(_) => "INVALID_INPUT",
            AdvisoryError::ComputationFailure(_) => "COMPUTATION_FAILURE",
        }
    }

    /// Message shown to the user on the advisory page
    pub fn user_message(&self) -> String {
        match self {
            AdvisoryError::UnknownCrop { .. } | AdvisoryError::UnknownRegion { .. } => {
                format!("Error: {}", self)
            }
            AdvisoryError::InvalidInput(msg) => msg.clone(),
            AdvisoryError::ComputationFailure(msg) => format!("An error occurred: {}", msg),
        }
    }

    /// True for failures caused by the request rather than the computation
    pub fn is_user_error(&self) -> bool {
        !matches!(self, AdvisoryError::ComputationFailure(_))
    }
}

/// Result alias for advisory computations
pub type AdvisoryResult<T> = Result<T, AdvisoryError>;
