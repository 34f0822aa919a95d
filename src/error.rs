//! @acp:module "Errors"
//! @acp:summary "Error type shared by the library layers"
//! @acp:domain cli
//! @acp:layer model

use thiserror::Error;

/// Library result alias
pub type Result<T> = std::result::Result<T, VitaplanError>;

/// @acp:summary "Every failure the library can report"
#[derive(Debug, Error)]
pub enum VitaplanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("No API credential configured")]
    MissingCredential,

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected service response: {0}")]
    MalformedResponse(String),

    #[error("Plan is missing required content: {0}")]
    IncompletePlan(&'static str),

    #[error("Answers are incomplete: step {step} ({title}) is not satisfied")]
    IncompleteAnswers { step: u8, title: String },

    #[error("Unsupported answers file format: {0}")]
    UnsupportedFormat(String),

    #[error("Plan generation failed: {0}")]
    GenerationFailed(String),
}

impl VitaplanError {
    /// Whether the error came from the generative service round trip
    pub fn is_service_failure(&self) -> bool {
        matches!(
            self,
            VitaplanError::MissingCredential
                | VitaplanError::Transport(_)
                | VitaplanError::Status { .. }
                | VitaplanError::MalformedResponse(_)
        )
    }
}
