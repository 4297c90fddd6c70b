use serde::Serialize;
use thiserror::Error;

use crate::region::RegionCode;

/// Why a telephone input was refused. Exactly one is reported per call, picked
/// by the order of the checks: region, characters, parse, region match.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "tag")]
pub enum ValidationError {
    #[error("region `{region}` is not supported")]
    InvalidRegion { input: String, region: String },
    #[error("must contain only digits and spaces, found {}", quoted(.offending_chars))]
    InvalidCharacters {
        input: String,
        offending_chars: Vec<char>,
    },
    #[error("not a valid phone number")]
    InvalidNumber { input: String },
    #[error("number belongs to {detected_region}, not {desired_region}")]
    RegionMismatch {
        input: String,
        desired_region: RegionCode,
        detected_region: RegionCode,
    },
}

impl ValidationError {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::InvalidRegion { .. } => "InvalidRegion",
            Self::InvalidCharacters { .. } => "InvalidCharacters",
            Self::InvalidNumber { .. } => "InvalidNumber",
            Self::RegionMismatch { .. } => "RegionMismatch",
        }
    }

    /// Raw input the failed validation was run against.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidRegion { input, .. }
            | Self::InvalidCharacters { input, .. }
            | Self::InvalidNumber { input }
            | Self::RegionMismatch { input, .. } => input,
        }
    }
}

fn quoted(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
