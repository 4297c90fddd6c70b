use telform_core::{RegionCode, Telephone, ValidationError};

use crate::error::FieldError;
use crate::types::FormatOutcome;

pub trait TelephoneValidator: Send + Sync {
    fn validate(&self, input: &str, region: &str) -> Result<Telephone, ValidationError>;
    fn validate_field(&self, input: &str, region: Option<&str>) -> Result<Telephone, FieldError>;
    fn format(&self, partial: &str, region: &str) -> FormatOutcome;
    fn supported_regions(&self) -> Vec<RegionCode>;
}
