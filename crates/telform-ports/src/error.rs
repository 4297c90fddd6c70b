use telform_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PortError {
    #[error("unparseable number: {0}")]
    Unparseable(String),
    #[error("no numbering plan for region {0}")]
    UnknownRegion(String),
}

/// Error shown under the telephone field of a form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("select a country first")]
    AbsentRegion { input: String },
    #[error(transparent)]
    Telephone(#[from] ValidationError),
}

impl FieldError {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::AbsentRegion { .. } => "AbsentRegion",
            Self::Telephone(err) => err.tag(),
        }
    }
}
