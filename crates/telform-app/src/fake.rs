use telform_core::{ParsedNumber, RegionCode};
use telform_ports::error::PortError;
use telform_ports::outbound::PhoneNumberLibrary;

/// Small numbering plan table standing in for the real library:
/// NG mobiles (0 + 10 digits starting with 8), NANP (US, and CA for area
/// code 506, national form punctuated as `(201) 555-0123`), CM mobiles (9 digits starting with 6).
pub(crate) struct FakeLibrary;

fn code(s: &str) -> RegionCode {
    RegionCode::parse(s).unwrap()
}

/// Splits `digits` into groups of `sizes`, dropping empty trailing groups.
/// Digit strings longer than the layout come back untouched.
fn group(digits: &str, sizes: &[usize]) -> String {
    if digits.len() > sizes.iter().sum::<usize>() {
        return digits.to_string();
    }
    let mut rest = digits;
    let mut parts = Vec::new();
    for size in sizes {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at((*size).min(rest.len()));
        parts.push(head);
        rest = tail;
    }
    parts.join(" ")
}

fn nigeria(digits: &str) -> ParsedNumber {
    if let Some(rest) = digits.strip_prefix("009") {
        if let Some(nanp_digits) = rest.strip_prefix('1') {
            return nanp(nanp_digits);
        }
    }
    let nsn = digits.strip_prefix('0').unwrap_or(digits);
    ParsedNumber {
        valid: nsn.len() == 10 && nsn.starts_with('8'),
        region: Some(code("NG")),
        national: group(&format!("0{nsn}"), &[4, 3, 4]),
        e164: format!("+234{nsn}"),
        calling_code: 234,
    }
}

fn nanp_national(digits: &str) -> String {
    if digits.len() != 10 {
        return group(digits, &[3, 3, 4]);
    }
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

fn nanp(digits: &str) -> ParsedNumber {
    let region = if digits.starts_with("506") { "CA" } else { "US" };
    ParsedNumber {
        valid: digits.len() == 10,
        region: Some(code(region)),
        national: nanp_national(digits),
        e164: format!("+1{digits}"),
        calling_code: 1,
    }
}

fn cameroon(digits: &str) -> ParsedNumber {
    ParsedNumber {
        valid: digits.len() == 9 && digits.starts_with('6'),
        region: Some(code("CM")),
        national: group(digits, &[1, 2, 2, 2, 2]),
        e164: format!("+237{digits}"),
        calling_code: 237,
    }
}

impl PhoneNumberLibrary for FakeLibrary {
    fn supported_regions(&self) -> Vec<RegionCode> {
        ["CA", "CM", "NG", "US"].into_iter().map(code).collect()
    }

    fn parse(&self, digits: &str, region: &RegionCode) -> Result<ParsedNumber, PortError> {
        if digits.is_empty() {
            return Err(PortError::Unparseable(digits.to_string()));
        }
        match region.as_str() {
            "NG" => Ok(nigeria(digits)),
            "US" | "CA" => Ok(nanp(digits)),
            "CM" => Ok(cameroon(digits)),
            other => Err(PortError::UnknownRegion(other.to_string())),
        }
    }

    fn progressive_format(&self, digits: &str, region: &RegionCode) -> String {
        match region.as_str() {
            "NG" => group(digits, &[4, 3, 4]),
            "US" | "CA" => group(digits, &[3, 3, 4]),
            "CM" => group(digits, &[1, 2, 2, 2, 2]),
            _ => digits.to_string(),
        }
    }
}
