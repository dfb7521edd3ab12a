//! Input validation for the trip form.
//!
//! Raw values arrive as text that may use either `.` or `,` as the decimal
//! separator. The validator normalizes and parses them, enforces per-field
//! minimums, and tags every failure with the field and an error kind plus a
//! message rendered from the locale dictionary it was constructed with.

use std::fmt;

use crate::locale::Messages;

/// Default minimum for distance, consumption and gas price.
pub const DEFAULT_MIN: f64 = 0.1;

/// Number of passenger choices offered by the interactive form.
pub const MAX_PERSON_CHOICES: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    From,
    To,
    Distance,
    Consumption,
    GasPrice,
    PersonAmount,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::From => "from",
            Field::To => "to",
            Field::Distance => "distance",
            Field::Consumption => "consumption",
            Field::GasPrice => "gasPrice",
            Field::PersonAmount => "personAmount",
        }
    }

    /// Localized label for prompts and error prefixes.
    pub fn label(&self, messages: &Messages) -> &'static str {
        match self {
            Field::From => messages.from,
            Field::To => messages.to,
            Field::Distance => messages.distance,
            Field::Consumption => messages.consumption,
            Field::GasPrice => messages.gas_price,
            Field::PersonAmount => messages.person_amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// The input is not a recognizable number.
    Format,
    /// The parsed value is below the required minimum.
    Range { min: f64 },
    /// A location was typed but never resolved to a concrete place.
    MissingSelection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    field: Field,
    kind: ErrorKind,
    message: String,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        self.field
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Localized message for field-level display.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.name(), self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Field validator configured with one locale's messages.
///
/// Constructed per call site instead of configuring a process-wide error
/// map, so concurrent callers with different locales cannot interfere.
pub struct Validator<'a> {
    messages: &'a Messages,
}

impl<'a> Validator<'a> {
    pub fn new(messages: &'a Messages) -> Self {
        Self { messages }
    }

    /// Parse a decimal field and require it to be at least `min`.
    pub fn coerce_min(&self, field: Field, raw: &str, min: f64) -> Result<f64, ValidationError> {
        let value = parse_decimal(raw).ok_or_else(|| self.format_error(field))?;
        self.check_min(field, value, min)
    }

    /// Check an already-numeric value against `min`.
    pub fn check_min(&self, field: Field, value: f64, min: f64) -> Result<f64, ValidationError> {
        if value >= min {
            Ok(value)
        } else {
            Err(ValidationError {
                field,
                kind: ErrorKind::Range { min },
                message: self.messages.below_minimum_message(min),
            })
        }
    }

    /// Parse the passenger count: a positive integer, at least one.
    ///
    /// The form offers 1–9 but the computation accepts any count >= 1.
    pub fn person_count(&self, raw: &str) -> Result<u32, ValidationError> {
        let field = Field::PersonAmount;
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.format_error(field));
        }
        let count: u32 = raw.parse().map_err(|_| self.format_error(field))?;
        if count >= 1 {
            Ok(count)
        } else {
            Err(ValidationError {
                field,
                kind: ErrorKind::Range { min: 1.0 },
                message: self.messages.below_minimum_message(1.0),
            })
        }
    }

    /// Error for a typed-but-unresolved location field.
    pub fn missing_selection(&self, field: Field) -> ValidationError {
        ValidationError {
            field,
            kind: ErrorKind::MissingSelection,
            message: self.messages.missing_selection.to_string(),
        }
    }

    fn format_error(&self, field: Field) -> ValidationError {
        ValidationError {
            field,
            kind: ErrorKind::Format,
            message: self.messages.not_a_number.to_string(),
        }
    }
}

/// Parse a number that may use `.` or `,` as its decimal separator.
///
/// Accepts one or more digits, optionally followed by a single separator and
/// one or more digits; anything else is rejected.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    if !is_decimal_like(raw) {
        return None;
    }
    raw.replace(',', ".").parse().ok()
}

fn is_decimal_like(raw: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match raw.find([',', '.']) {
        Some(pos) => {
            let (integer, rest) = raw.split_at(pos);
            all_digits(integer) && all_digits(&rest[1..])
        }
        None => all_digits(raw),
    }
}
