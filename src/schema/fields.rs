//! Low-level field readers and constraint checks.
//!
//! Validators read fields out of raw JSON and push one `FieldError` per
//! failing field, so a single pass reports everything that is wrong.

use serde_json::{Map, Value};
use url::Url;

use super::{FieldError, FieldReason};

pub(crate) fn push(
    errors: &mut Vec<FieldError>,
    field: impl Into<String>,
    reason: FieldReason,
    message: impl Into<String>,
) {
    errors.push(FieldError {
        field: field.into(),
        reason,
        message: message.into(),
    });
}

/// The document root must be a JSON object.
pub(crate) fn as_object<'v>(
    value: &'v Value,
    errors: &mut Vec<FieldError>,
) -> Option<&'v Map<String, Value>> {
    match value.as_object() {
        Some(map) => Some(map),
        None => {
            push(errors, "", FieldReason::InvalidType, "Expected an object");
            None
        }
    }
}

/// A required nested object such as `hero` or `testimonials`.
pub(crate) fn object_at<'v>(
    obj: &'v Map<String, Value>,
    name: &str,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'v Map<String, Value>> {
    match obj.get(name) {
        Some(Value::Object(map)) => Some(map),
        Some(_) => {
            push(errors, path, FieldReason::InvalidType, "Expected an object");
            None
        }
        None => {
            push(errors, path, FieldReason::Required, "Required");
            None
        }
    }
}

/// A required string field. Missing or non-string input yields an error.
pub(crate) fn str_at(
    obj: &Map<String, Value>,
    name: &str,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match obj.get(name) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            push(errors, path, FieldReason::InvalidType, "Expected a string");
            None
        }
        None => {
            push(errors, path, FieldReason::Required, "Required");
            None
        }
    }
}

/// An optional string field. Absent is fine; present non-string is an error.
pub(crate) fn opt_str_at(
    obj: &Map<String, Value>,
    name: &str,
    path: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match obj.get(name) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(Value::Null) | None => None,
        Some(_) => {
            push(errors, path, FieldReason::InvalidType, "Expected a string");
            None
        }
    }
}

pub(crate) fn bounded(
    value: Option<String>,
    max: usize,
    path: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    if let Some(text) = &value {
        if text.chars().count() > max {
            push(errors, path, FieldReason::TooLong { max }, message);
        }
    }
    value
}

pub(crate) fn url_checked(
    value: Option<String>,
    path: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    if let Some(text) = &value {
        if Url::parse(text).is_err() {
            push(errors, path, FieldReason::InvalidUrl, message);
        }
    }
    value
}

pub(crate) fn email_checked(
    value: Option<String>,
    path: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    if let Some(text) = &value {
        if !is_plausible_email(text) {
            push(errors, path, FieldReason::InvalidEmail, message);
        }
    }
    value
}

pub(crate) fn non_empty(
    value: Option<String>,
    path: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    if let Some(text) = &value {
        if text.trim().is_empty() {
            push(errors, path, FieldReason::Required, message);
        }
    }
    value
}

/// Minimal structural email check: one `@`, non-empty local part, and a
/// dotted domain without whitespace. Deliverability is not our problem.
fn is_plausible_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
