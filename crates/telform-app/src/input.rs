use telform_core::Telephone;
use telform_ports::error::FieldError;
use telform_ports::inbound::TelephoneValidator;
use telform_ports::types::FormatOutcome;

/// State of one telephone input: selected region, what is on screen, and the
/// last value the formatter accepted.
pub struct TelephoneInput<'a, V>
where
    V: TelephoneValidator + ?Sized,
{
    validator: &'a V,
    region: Option<String>,
    display: String,
    /// Digits and whitespace only; the display may carry formatter punctuation.
    accepted: String,
    touched: bool,
}

impl<'a, V> TelephoneInput<'a, V>
where
    V: TelephoneValidator + ?Sized,
{
    pub fn new(validator: &'a V, region: Option<&str>) -> Self {
        Self {
            validator,
            region: region.map(str::to_string),
            display: String::new(),
            accepted: String::new(),
            touched: false,
        }
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Apply the full field value after a keystroke and return what to show.
    /// Ignored while no region is selected.
    pub fn key(&mut self, value: &str) -> &str {
        let Some(region) = self.region.as_deref() else {
            return &self.display;
        };

        let value = self.without_own_punctuation(value);
        match self.validator.format(&value, region) {
            FormatOutcome::Rejected => {}
            outcome => {
                if let Some(display) = outcome.display() {
                    self.display = display.to_string();
                }
                self.accepted = value;
                self.touched = true;
            }
        }
        &self.display
    }

    /// Punctuation currently on screen came from the formatter, so an edit
    /// of the display (e.g., a backspace) must not be refused because of it.
    fn without_own_punctuation(&self, value: &str) -> String {
        value
            .chars()
            .filter(|c| c.is_ascii_digit() || c.is_whitespace() || !self.display.contains(*c))
            .collect()
    }

    /// Switch the numbering plan and re-render what was typed so far.
    pub fn select_region(&mut self, region: Option<&str>) {
        self.region = region.map(str::to_string);
        if let Some(region) = self.region.as_deref() {
            if let Some(display) = self.validator.format(&self.accepted, region).display() {
                self.display = display.to_string();
            }
        }
    }

    /// Error to show under the field, once something has been typed.
    pub fn error(&self) -> Option<FieldError> {
        if !self.touched {
            return None;
        }
        self.validator
            .validate_field(&self.accepted, self.region())
            .err()
    }

    pub fn telephone(&self) -> Option<Telephone> {
        self.validator
            .validate_field(&self.accepted, self.region())
            .ok()
    }
}
