use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("submission failed: {0}")]
    Submission(String),

    #[error("environment does not support {0}")]
    EnvironmentUnsupported(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),

    #[error("email address is malformed")]
    MalformedEmail,
}

impl SiteError {
    /// Text shown to the visitor in the error toast.
    pub fn user_message(&self) -> &'static str {
        match self {
            SiteError::Validation(ValidationError::MissingField(_)) => "Please fill in all fields",
            SiteError::Validation(ValidationError::MalformedEmail) => "Please enter a valid email",
            SiteError::Submission(_) => "Something went wrong while sending",
            SiteError::EnvironmentUnsupported(_) => "This feature is not supported by your browser",
        }
    }
}
