use telform_core::{ParsedNumber, RegionCode};

use crate::error::PortError;

/// Phone-number metadata and parsing, treated as an opaque collaborator.
pub trait PhoneNumberLibrary: Send + Sync {
    /// Regions the library carries a numbering plan for, sorted.
    fn supported_regions(&self) -> Vec<RegionCode>;

    fn is_supported(&self, region: &RegionCode) -> bool {
        self.supported_regions().contains(region)
    }

    fn parse(&self, digits: &str, region: &RegionCode) -> Result<ParsedNumber, PortError>;

    /// Best-effort punctuated rendering of an incomplete digit sequence.
    fn progressive_format(&self, digits: &str, region: &RegionCode) -> String;
}
