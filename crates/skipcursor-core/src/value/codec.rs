//! Literal codec for cursor slots.
//!
//! Owns the textual rendering of every `Value` kind inside a skiptoken and
//! its exact inverse. Fragment splitting lives in `cursor::token`.

use crate::value::{Value, ValueKind};
use skipcursor_primitives::ScalarKind;
use thiserror::Error as ThisError;
use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339};
use uuid::Uuid;

/// Reserved literal for an explicit null slot.
pub const NULL_LITERAL: &str = "null";

const QUOTE: char = '\'';
const FLOAT_SUFFIX: char = 'D';
const NAN_LITERAL: &str = "NaND";
const INF_LITERAL: &str = "INFD";
const NEG_INF_LITERAL: &str = "-INFD";

// Bare words that would infer as something other than text.
const RESERVED_BARE_WORDS: [&str; 5] = [NULL_LITERAL, "true", "false", NAN_LITERAL, INF_LITERAL];

///
/// LiteralError
/// A literal that does not convert to the requested kind.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("literal '{literal}' is not a valid {kind}: {reason}")]
pub struct LiteralError {
    pub kind: ValueKind,
    pub literal: String,
    pub reason: String,
}

impl LiteralError {
    fn new(kind: ValueKind, literal: &str, reason: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convert one literal into a value of the requested kind.
pub fn parse_literal(text: &str, kind: ValueKind) -> Result<Value, LiteralError> {
    let scalar = match kind {
        ValueKind::Null => {
            return if text.eq_ignore_ascii_case(NULL_LITERAL) {
                Ok(Value::Null)
            } else {
                Err(LiteralError::new(kind, text, "expected the null marker"))
            };
        }
        ValueKind::Scalar(scalar) => scalar,
    };

    match scalar {
        ScalarKind::Bool => parse_bool(text).map(Value::Bool),
        ScalarKind::DateTime => parse_datetime(text).map(Value::DateTime),
        ScalarKind::Float => parse_float(text).map(Value::Float),
        ScalarKind::Guid => parse_guid(text).map(Value::Guid),
        ScalarKind::Int => parse_int(text).map(Value::Int),
        ScalarKind::Text => parse_text(text).map(Value::Text),
    }
}

/// Render a value as its cursor literal.
///
/// Fails only for date/times RFC 3339 cannot express (years outside 0..=9999).
pub fn format_literal(value: &Value) -> Result<String, LiteralError> {
    let literal = match value {
        Value::Null => NULL_LITERAL.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::DateTime(dt) => {
            let kind = ValueKind::Scalar(ScalarKind::DateTime);
            let utc = dt.checked_to_offset(UtcOffset::UTC).ok_or_else(|| {
                LiteralError::new(kind, &format!("{dt:?}"), "date/time is out of range in UTC")
            })?;
            let text = utc
                .format(&Rfc3339)
                .map_err(|err| LiteralError::new(kind, &format!("{utc:?}"), err.to_string()))?;

            tagged(ScalarKind::DateTime, &text)
        }
        Value::Float(f) => format_float(*f),
        Value::Guid(u) => tagged(ScalarKind::Guid, &u.hyphenated().to_string()),
        Value::Int(n) => n.to_string(),
        Value::Text(s) => {
            if is_bare_text(s) {
                s.clone()
            } else {
                quote(s)
            }
        }
    };

    Ok(literal)
}

/// Classify one trimmed fragment by its shape.
///
/// Returns `None` when the fragment matches no literal form. Payload validity
/// (ranges, date syntax) is checked later by `parse_literal`.
#[must_use]
pub fn infer_kind(fragment: &str) -> Option<ValueKind> {
    let first = fragment.chars().next()?;

    if fragment.eq_ignore_ascii_case(NULL_LITERAL) {
        return Some(ValueKind::Null);
    }
    if fragment.eq_ignore_ascii_case("true") || fragment.eq_ignore_ascii_case("false") {
        return Some(ScalarKind::Bool.into());
    }
    if fragment.eq_ignore_ascii_case(NAN_LITERAL) || fragment.eq_ignore_ascii_case(INF_LITERAL) {
        return Some(ScalarKind::Float.into());
    }
    if first == QUOTE {
        return Some(ScalarKind::Text.into());
    }
    if let Some(quote_at) = fragment.find(QUOTE) {
        return ScalarKind::from_literal_prefix(&fragment[..quote_at]).map(ValueKind::Scalar);
    }
    if first.is_ascii_digit() || matches!(first, '-' | '+' | '.') {
        return infer_numeric(fragment);
    }
    if is_bare_text(fragment) {
        return Some(ScalarKind::Text.into());
    }

    None
}

// Numeric shapes: `17`, `17L`, `1.5`, `1.5D`, `1e9`, `-INFD`.
fn infer_numeric(fragment: &str) -> Option<ValueKind> {
    let body = fragment.trim_start_matches(['-', '+']);
    if body.eq_ignore_ascii_case(INF_LITERAL) {
        return Some(ScalarKind::Float.into());
    }

    let (digits, suffix) = match body.char_indices().last() {
        Some((at, c)) if c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E') => {
            (&body[..at], Some(c.to_ascii_uppercase()))
        }
        _ => (body, None),
    };

    if digits.is_empty() || !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let all_digits = digits.chars().all(|c| c.is_ascii_digit());
    let float_shaped = digits
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '-' | '+'));

    match suffix {
        None if all_digits => Some(ScalarKind::Int.into()),
        Some('L') if all_digits => Some(ScalarKind::Int.into()),
        None | Some('D') if float_shaped => Some(ScalarKind::Float.into()),
        _ => None,
    }
}

fn parse_bool(text: &str) -> Result<bool, LiteralError> {
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(LiteralError::new(
            ScalarKind::Bool.into(),
            text,
            "expected true or false",
        ))
    }
}

fn parse_int(text: &str) -> Result<i64, LiteralError> {
    let digits = text.strip_suffix(['L', 'l']).unwrap_or(text);

    digits
        .parse::<i64>()
        .map_err(|err| LiteralError::new(ScalarKind::Int.into(), text, err.to_string()))
}

fn parse_float(text: &str) -> Result<f64, LiteralError> {
    let body = text.strip_suffix(['D', 'd']).unwrap_or(text);
    let unsigned = body.trim_start_matches(['-', '+']);

    if unsigned.eq_ignore_ascii_case("NaN") {
        return Ok(f64::NAN);
    }
    if unsigned.eq_ignore_ascii_case("INF") {
        return Ok(if body.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    // Rust also accepts spelled-out forms ("infinity"); only digits reach here.
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(LiteralError::new(
            ScalarKind::Float.into(),
            text,
            "expected a decimal number",
        ));
    }

    body.parse::<f64>()
        .map_err(|err| LiteralError::new(ScalarKind::Float.into(), text, err.to_string()))
}

fn parse_datetime(text: &str) -> Result<OffsetDateTime, LiteralError> {
    let kind = ValueKind::Scalar(ScalarKind::DateTime);
    let inner = untag(text, ScalarKind::DateTime).unwrap_or(text);

    let parsed = OffsetDateTime::parse(inner, &Rfc3339)
        .map_err(|err| LiteralError::new(kind, text, err.to_string()))?;

    parsed
        .checked_to_offset(UtcOffset::UTC)
        .ok_or_else(|| LiteralError::new(kind, text, "date/time is out of range in UTC"))
}

fn parse_guid(text: &str) -> Result<Uuid, LiteralError> {
    let inner = untag(text, ScalarKind::Guid).unwrap_or(text);

    Uuid::parse_str(inner)
        .map_err(|err| LiteralError::new(ScalarKind::Guid.into(), text, err.to_string()))
}

fn parse_text(text: &str) -> Result<String, LiteralError> {
    if !text.starts_with(QUOTE) {
        return if is_bare_text(text) {
            Ok(text.to_string())
        } else {
            Err(LiteralError::new(
                ScalarKind::Text.into(),
                text,
                "unquoted text must be a plain identifier",
            ))
        };
    }

    unquote(text).ok_or_else(|| {
        LiteralError::new(ScalarKind::Text.into(), text, "unbalanced quotes")
    })
}

// Finite floats use the shortest round-trip rendering plus the `D` suffix.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        NAN_LITERAL.to_string()
    } else if f.is_infinite() {
        if f.is_sign_negative() {
            NEG_INF_LITERAL.to_string()
        } else {
            INF_LITERAL.to_string()
        }
    } else {
        format!("{f:?}{FLOAT_SUFFIX}")
    }
}

fn tagged(kind: ScalarKind, inner: &str) -> String {
    let prefix = kind.literal_prefix().unwrap_or_default();

    format!("{prefix}{QUOTE}{inner}{QUOTE}")
}

// Strip `prefix'…'` and return the quoted payload.
fn untag(text: &str, kind: ScalarKind) -> Option<&str> {
    let prefix = kind.literal_prefix()?;
    let head = text.get(..prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }

    text[prefix.len()..]
        .strip_prefix(QUOTE)?
        .strip_suffix(QUOTE)
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(QUOTE);
    for c in s.chars() {
        if c == QUOTE {
            out.push(QUOTE);
        }
        out.push(c);
    }
    out.push(QUOTE);

    out
}

fn unquote(text: &str) -> Option<String> {
    let inner = text.strip_prefix(QUOTE)?.strip_suffix(QUOTE)?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c == QUOTE && chars.next() != Some(QUOTE) {
            return None;
        }
        out.push(c);
    }

    Some(out)
}

// Plain identifiers render without quotes so simple tokens stay readable.
fn is_bare_text(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RESERVED_BARE_WORDS
            .iter()
            .any(|word| s.eq_ignore_ascii_case(word))
}
