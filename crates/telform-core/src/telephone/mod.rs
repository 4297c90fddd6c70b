pub mod characters;

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;
use crate::region::RegionCode;

pub use characters::{digits_only, scan_characters};

/// What the numbering library reports for a digit string parsed against a
/// region hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    pub valid: bool,
    /// Region the number actually belongs to, which can differ from the hint.
    pub region: Option<RegionCode>,
    pub national: String,
    pub e164: String,
    pub calling_code: u16,
}

/// A telephone number that passed every validation step for `alpha2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Telephone {
    alpha2: RegionCode,
    input: String,
    national: String,
    e164: String,
    calling_code: u16,
}

impl Telephone {
    /// Checks `input` against the character class, then requires the parse
    /// to be valid and its detected region to equal `desired`. Whether
    /// `desired` is a supported region is up to the caller.
    pub fn confirm(
        input: &str,
        desired: &RegionCode,
        parsed: ParsedNumber,
    ) -> Result<Self, ValidationError> {
        scan_characters(input)?;

        if !parsed.valid {
            return Err(ValidationError::InvalidNumber {
                input: input.to_string(),
            });
        }

        // Valid numbers without a geographic region (e.g., +800) never match a hint.
        let Some(detected) = parsed.region else {
            return Err(ValidationError::InvalidNumber {
                input: input.to_string(),
            });
        };

        if detected != *desired {
            return Err(ValidationError::RegionMismatch {
                input: input.to_string(),
                desired_region: desired.clone(),
                detected_region: detected,
            });
        }

        Ok(Self {
            alpha2: detected,
            input: input.to_string(),
            national: parsed.national,
            e164: parsed.e164,
            calling_code: parsed.calling_code,
        })
    }

    pub fn alpha2(&self) -> &RegionCode {
        &self.alpha2
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn national(&self) -> &str {
        &self.national
    }

    pub fn e164(&self) -> &str {
        &self.e164
    }

    pub fn calling_code(&self) -> u16 {
        self.calling_code
    }
}

impl fmt::Display for Telephone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.e164)
    }
}
