use crate::error::ValidationError;

fn is_accepted(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace()
}

/// Rejects input holding anything other than decimal digits and whitespace.
/// Offending characters are reported once each, in order of first occurrence.
pub fn scan_characters(input: &str) -> Result<(), ValidationError> {
    let mut offending_chars: Vec<char> = Vec::new();
    for c in input.chars().filter(|c| !is_accepted(*c)) {
        if !offending_chars.contains(&c) {
            offending_chars.push(c);
        }
    }

    if offending_chars.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::InvalidCharacters {
            input: input.to_string(),
            offending_chars,
        })
    }
}

/// Input with all whitespace removed, as handed to the numbering library.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}
