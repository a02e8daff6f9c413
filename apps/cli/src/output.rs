//! Rendering an [`Outcome`] for the terminal or for machines.

use std::io::Write;

use clap::ValueEnum;
use israeli_validator::foundation::RawValue;
use israeli_validator::{IdentifierKind, Outcome, ReasonCode, Style, Subtype};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line
    #[default]
    Text,
    /// A JSON object
    Json,
}

/// Machine-readable view of an outcome.
#[derive(Debug, Serialize)]
struct Report<'a> {
    kind: IdentifierKind,
    input: &'a RawValue<'static>,
    valid: bool,
    normalized: Option<&'a str>,
    formatted: Option<String>,
    subtype: Option<Subtype>,
    reason: Option<ReasonCode>,
    message: Option<&'static str>,
}

fn formatted(outcome: &Outcome, style: Option<Style>) -> Option<String> {
    match style {
        Some(style) => outcome.formatted_as(style),
        None => outcome.formatted(),
    }
}

pub fn render_text(outcome: &Outcome, style: Option<Style>) -> String {
    let label = outcome.kind().label();

    match (formatted(outcome, style), outcome.reason()) {
        (Some(text), _) => match outcome.subtype() {
            Some(subtype) => format!("valid {label}: {text} ({subtype})"),
            None => format!("valid {label}: {text}"),
        },
        (None, Some(reason)) => format!("invalid {label}: {} [{reason}]", reason.message()),
        (None, None) => format!("invalid {label}"),
    }
}

pub fn render_json(outcome: &Outcome, style: Option<Style>) -> serde_json::Result<String> {
    let report = Report {
        kind: outcome.kind(),
        input: outcome.original(),
        valid: outcome.is_valid(),
        normalized: outcome.normalized(),
        formatted: formatted(outcome, style),
        subtype: outcome.subtype(),
        reason: outcome.reason(),
        message: outcome.reason().map(ReasonCode::message),
    };
    serde_json::to_string_pretty(&report)
}

pub fn write(
    writer: &mut impl Write,
    outcome: &Outcome,
    format: OutputFormat,
    style: Option<Style>,
) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(outcome, style),
        OutputFormat::Json => render_json(outcome, style)?,
    };
    writeln!(writer, "{rendered}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use israeli_validator::validators::{
        AccountFormat, PhoneStyle, PhoneType, bank_account, id, phone,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_text_valid_phone() {
        let outcome = phone::parse("+972501234567", PhoneType::Any);
        assert_eq!(
            render_text(&outcome, Some(PhoneStyle::Dashed.into())),
            "valid Israeli phone number: 050-123-4567 (mobile)"
        );
    }

    #[test]
    fn test_text_invalid_id() {
        let outcome = id::parse("123456789");
        assert_eq!(
            render_text(&outcome, None),
            "invalid Israeli ID: has an invalid check digit [invalid_checksum]"
        );
    }

    #[test]
    fn test_json_report() {
        let outcome = bank_account::parse("IL630108000000099999999", AccountFormat::Any);
        let rendered = render_json(&outcome, None).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["kind"], "bank_account");
        assert_eq!(json["valid"], false);
        assert_eq!(json["reason"], "invalid_checksum");
        assert_eq!(json["formatted"], serde_json::Value::Null);
        assert_eq!(json["input"], "IL630108000000099999999");
    }

    #[test]
    fn test_write_appends_newline() {
        let mut buffer = Vec::new();
        let outcome = id::parse("123456782");
        write(&mut buffer, &outcome, OutputFormat::Text, None).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "valid Israeli ID: 123456782\n"
        );
    }
}
