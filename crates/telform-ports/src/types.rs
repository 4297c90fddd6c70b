use serde::Serialize;

use telform_core::Telephone;

/// Result of applying one keystroke's worth of input to a telephone field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FormatOutcome {
    /// Input held characters outside digits and whitespace; keep the old display.
    Rejected,
    /// Incomplete number, punctuated as far as the digits allow.
    Partial { display: String },
    /// Digits form a valid number; display its national form.
    Complete { telephone: Telephone },
}

impl FormatOutcome {
    pub fn display(&self) -> Option<&str> {
        match self {
            Self::Rejected => None,
            Self::Partial { display } => Some(display),
            Self::Complete { telephone } => Some(telephone.national()),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}
