use telform_core::{digits_only, scan_characters, RegionCode, Telephone, ValidationError};
use telform_ports::error::FieldError;
use telform_ports::inbound::TelephoneValidator;
use telform_ports::outbound::PhoneNumberLibrary;
use telform_ports::types::FormatOutcome;

pub struct TelephoneService<L>
where
    L: PhoneNumberLibrary,
{
    library: L,
}

impl<L> TelephoneService<L>
where
    L: PhoneNumberLibrary,
{
    pub fn new(library: L) -> Self {
        Self { library }
    }

    /// Validate raw input against a region. Checks run region, characters,
    /// parse, region match; the first failure is returned.
    pub fn validate(&self, input: &str, region: &str) -> Result<Telephone, ValidationError> {
        let result = self.run_checks(input, region);
        match &result {
            Ok(telephone) => {
                tracing::debug!(region, e164 = telephone.e164(), "telephone accepted")
            }
            Err(err) => tracing::debug!(region, tag = err.tag(), "telephone rejected"),
        }
        result
    }

    fn run_checks(&self, input: &str, region: &str) -> Result<Telephone, ValidationError> {
        let alpha2 = self.supported_region(input, region)?;
        scan_characters(input)?;

        let parsed = self
            .library
            .parse(&digits_only(input), &alpha2)
            .map_err(|err| {
                tracing::debug!(error = %err, "numbering library refused input");
                ValidationError::InvalidNumber {
                    input: input.to_string(),
                }
            })?;

        Telephone::confirm(input, &alpha2, parsed)
    }

    fn supported_region(&self, input: &str, region: &str) -> Result<RegionCode, ValidationError> {
        RegionCode::parse(region)
            .ok()
            .filter(|code| self.library.is_supported(code))
            .ok_or_else(|| ValidationError::InvalidRegion {
                input: input.to_string(),
                region: region.to_string(),
            })
    }

    /// Form-level validation, where the region picker may still be empty.
    pub fn validate_field(
        &self,
        input: &str,
        region: Option<&str>,
    ) -> Result<Telephone, FieldError> {
        let region = region.ok_or_else(|| FieldError::AbsentRegion {
            input: input.to_string(),
        })?;
        Ok(self.validate(input, region)?)
    }

    /// Format-as-you-type. Non-conforming keystrokes are refused, complete
    /// numbers snap to their national form, anything else is punctuated
    /// progressively.
    pub fn format(&self, partial: &str, region: &str) -> FormatOutcome {
        if scan_characters(partial).is_err() {
            tracing::trace!(partial, "keystroke refused");
            return FormatOutcome::Rejected;
        }

        if let Ok(telephone) = self.run_checks(partial, region) {
            tracing::trace!(partial, e164 = telephone.e164(), "keystroke completed number");
            return FormatOutcome::Complete { telephone };
        }

        let shown = match RegionCode::parse(region) {
            Ok(code) if self.library.is_supported(&code) => {
                self.library.progressive_format(&digits_only(partial), &code)
            }
            _ => partial.to_string(),
        };
        tracing::trace!(partial, shown = shown.as_str(), "keystroke formatted");
        FormatOutcome::Partial { display: shown }
    }

    pub fn supported_regions(&self) -> Vec<RegionCode> {
        self.library.supported_regions()
    }
}

impl<L> TelephoneValidator for TelephoneService<L>
where
    L: PhoneNumberLibrary,
{
    fn validate(&self, input: &str, region: &str) -> Result<Telephone, ValidationError> {
        TelephoneService::validate(self, input, region)
    }

    fn validate_field(&self, input: &str, region: Option<&str>) -> Result<Telephone, FieldError> {
        TelephoneService::validate_field(self, input, region)
    }

    fn format(&self, partial: &str, region: &str) -> FormatOutcome {
        TelephoneService::format(self, partial, region)
    }

    fn supported_regions(&self) -> Vec<RegionCode> {
        TelephoneService::supported_regions(self)
    }
}
