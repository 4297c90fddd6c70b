//! Line protocol of the `telform` binary.
//!
//! ```text
//! NG 0803 123 4567         validate against NG
//! - 0803 123 4567          validate with no region selected
//! 0803 123 4567            validate against the default region
//! :format NG 08031         format-as-you-type
//! :regions                 list supported regions
//! ```
//!
//! The first token names a region when it is made of letters only (or is
//! `-`); otherwise the whole line is input for the default region.

use serde_json::{json, Value};

use telform_ports::error::FieldError;
use telform_ports::inbound::TelephoneValidator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Validate {
        region: Option<&'a str>,
        input: &'a str,
    },
    Format {
        region: Option<&'a str>,
        input: &'a str,
    },
    Regions,
}

fn split_first(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    }
}

fn is_region_token(token: &str) -> bool {
    token == "-" || (!token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic()))
}

fn region_and_input<'a>(
    line: &'a str,
    default_region: Option<&'a str>,
) -> (Option<&'a str>, &'a str) {
    let (head, rest) = split_first(line);
    if !is_region_token(head) {
        return (default_region, line);
    }
    match head {
        "-" => (None, rest),
        region => (Some(region), rest),
    }
}

/// `None` for blank lines.
pub fn parse_line<'a>(line: &'a str, default_region: Option<&'a str>) -> Option<Command<'a>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if line == ":regions" {
        return Some(Command::Regions);
    }

    if let Some(rest) = line.strip_prefix(":format") {
        let (region, input) = region_and_input(rest.trim(), default_region);
        return Some(Command::Format { region, input });
    }

    let (region, input) = region_and_input(line, default_region);
    Some(Command::Validate { region, input })
}

fn field_error(err: &FieldError) -> Value {
    let mut body = match err {
        FieldError::AbsentRegion { input } => json!({ "tag": err.tag(), "input": input }),
        FieldError::Telephone(inner) => serde_json::to_value(inner).unwrap_or_else(|_| json!({})),
    };
    if let Some(map) = body.as_object_mut() {
        map.insert("message".into(), Value::String(err.to_string()));
    }
    json!({ "error": body })
}

pub fn run<V>(validator: &V, command: Command<'_>) -> Value
where
    V: TelephoneValidator + ?Sized,
{
    match command {
        Command::Validate { region, input } => match validator.validate_field(input, region) {
            Ok(telephone) => json!({ "ok": telephone }),
            Err(err) => {
                tracing::info!(tag = err.tag(), "line rejected");
                field_error(&err)
            }
        },
        Command::Format { region: None, input } => {
            field_error(&FieldError::AbsentRegion {
                input: input.to_string(),
            })
        }
        Command::Format {
            region: Some(region),
            input,
        } => serde_json::to_value(validator.format(input, region))
            .unwrap_or_else(|err| json!({ "error": { "message": err.to_string() } })),
        Command::Regions => {
            let regions: Vec<String> = validator
                .supported_regions()
                .into_iter()
                .map(String::from)
                .collect();
            json!({ "regions": regions })
        }
    }
}
