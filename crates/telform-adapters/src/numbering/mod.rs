mod template;

use phonenumber::country::Id;
use phonenumber::metadata::{Metadata, DATABASE};
use phonenumber::Mode;

use telform_core::{ParsedNumber, RegionCode};
use telform_ports::error::PortError;
use telform_ports::outbound::PhoneNumberLibrary;

use template::Template;

/// `PhoneNumberLibrary` backed by the libphonenumber metadata shipped with
/// the `phonenumber` crate.
#[derive(Debug, Clone)]
pub struct LibPhoneNumber {
    regions: Vec<RegionCode>,
}

impl LibPhoneNumber {
    pub fn new() -> Self {
        let regions: Vec<RegionCode> = ('A'..='Z')
            .flat_map(|a| ('A'..='Z').map(move |b| format!("{a}{b}")))
            .filter(|code| DATABASE.by_id(code.as_str()).is_some())
            .filter_map(|code| RegionCode::parse(&code).ok())
            .collect();
        tracing::debug!(count = regions.len(), "loaded numbering plans");
        Self { regions }
    }

    fn region_id(region: &RegionCode) -> Result<Id, PortError> {
        region
            .as_str()
            .parse::<Id>()
            .map_err(|_| PortError::UnknownRegion(region.to_string()))
    }

    /// Layout of a complete national number for the region, taken from the
    /// metadata's example mobile (else fixed-line) number.
    fn template(&self, region: &RegionCode) -> Option<(Template, Option<String>)> {
        let metadata: &Metadata = DATABASE.by_id(region.as_str())?;
        let descriptors = metadata.descriptors();
        let example = descriptors
            .mobile()
            .and_then(|d| d.example())
            .or_else(|| descriptors.fixed_line().and_then(|d| d.example()))?;

        let id = Self::region_id(region).ok()?;
        let number = phonenumber::parse(Some(id), example).ok()?;
        let national = number.format().mode(Mode::National).to_string();

        let prefix = metadata
            .national_prefix()
            .filter(|prefix| national.starts_with(*prefix))
            .map(str::to_string);
        Some((Template::from_formatted(&national), prefix))
    }
}

impl Default for LibPhoneNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneNumberLibrary for LibPhoneNumber {
    fn supported_regions(&self) -> Vec<RegionCode> {
        self.regions.clone()
    }

    fn is_supported(&self, region: &RegionCode) -> bool {
        self.regions.binary_search(region).is_ok()
    }

    fn parse(&self, digits: &str, region: &RegionCode) -> Result<ParsedNumber, PortError> {
        let id = Self::region_id(region)?;
        let number = phonenumber::parse(Some(id), digits).map_err(|err| {
            tracing::debug!(region = region.as_str(), error = %err, "number did not parse");
            PortError::Unparseable(err.to_string())
        })?;

        let detected = number
            .metadata(&DATABASE)
            .and_then(|metadata| RegionCode::parse(metadata.id()).ok());

        Ok(ParsedNumber {
            valid: number.is_valid(),
            region: detected,
            national: number.format().mode(Mode::National).to_string(),
            e164: number.format().mode(Mode::E164).to_string(),
            calling_code: number.country().code(),
        })
    }

    fn progressive_format(&self, digits: &str, region: &RegionCode) -> String {
        let Some((template, prefix)) = self.template(region) else {
            tracing::debug!(region = region.as_str(), "no example number to format against");
            return digits.to_string();
        };

        let template = match prefix {
            Some(prefix) if !digits.starts_with(&prefix) && !prefix.starts_with(digits) => {
                template.skip_digits(prefix.chars().count())
            }
            _ => template,
        };

        template
            .fill(digits)
            .unwrap_or_else(|| digits.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(code: &str) -> RegionCode {
        RegionCode::parse(code).unwrap()
    }

    #[test]
    fn supported_regions_are_sorted_and_geographic() {
        let lib = LibPhoneNumber::new();
        let regions = lib.supported_regions();
        assert!(regions.windows(2).all(|w| w[0] < w[1]));
        for code in ["NG", "CM", "US", "CA", "GB"] {
            assert!(lib.is_supported(&region(code)), "{code} missing");
        }
        assert!(!lib.is_supported(&region("ZZ")));
    }

    #[test]
    fn parse_reports_canonical_forms() {
        let parsed = LibPhoneNumber::new()
            .parse("08031234567", &region("NG"))
            .unwrap();
        assert!(parsed.valid);
        assert_eq!(parsed.region, Some(region("NG")));
        assert_eq!(parsed.e164, "+2348031234567");
        assert_eq!(parsed.calling_code, 234);
        assert_eq!(telform_core::digits_only(&parsed.national), "08031234567");
    }

    #[test]
    fn parse_detects_region_other_than_hint() {
        let parsed = LibPhoneNumber::new()
            .parse("2015550123", &region("CA"))
            .unwrap();
        assert!(parsed.valid);
        assert_eq!(parsed.region, Some(region("US")));
    }

    #[test]
    fn parse_short_input_is_not_valid() {
        let lib = LibPhoneNumber::new();
        let valid = lib
            .parse("080", &region("NG"))
            .map(|parsed| parsed.valid)
            .unwrap_or(false);
        assert!(!valid);
    }

    #[test]
    fn progressive_format_keeps_typed_digits() {
        let lib = LibPhoneNumber::new();
        for typed in ["0", "08", "080", "0803", "08031", "0803123"] {
            let shown = lib.progressive_format(typed, &region("NG"));
            assert_eq!(telform_core::digits_only(&shown), typed);
        }
    }

    #[test]
    fn progressive_format_inserts_separators() {
        let shown = LibPhoneNumber::new().progressive_format("0803123", &region("NG"));
        assert!(shown.contains(' '), "no separator in {shown:?}");
    }

    #[test]
    fn progressive_format_overflow_returns_digits() {
        let shown = LibPhoneNumber::new().progressive_format("0803123456789012", &region("NG"));
        assert_eq!(shown, "0803123456789012");
    }
}
