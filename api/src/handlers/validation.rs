//! Request validation helpers
//!
//! Turns `validator` output into the flat field → message map returned to
//! clients with a 400.

use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::domain::entities::is_valid_mobile_number;
use crate::error::AppError;

pub const MOBILE_NUMBER_MESSAGE: &str = "Mobile number must be 10 digits";

/// `validator` custom check for mobile numbers
pub fn validate_mobile_number(mobile_number: &str) -> Result<(), ValidationError> {
    if is_valid_mobile_number(mobile_number) {
        return Ok(());
    }
    let mut err = ValidationError::new("mobile_number");
    err.message = Some(Cow::Borrowed(MOBILE_NUMBER_MESSAGE));
    Err(err)
}

/// Validate a request, mapping failures to `AppError::Validation`
pub fn validate_request<T: Validate>(request: &T) -> Result<(), AppError> {
    request
        .validate()
        .map_err(|errors| AppError::Validation(field_messages(&errors)))
}

/// Flatten validation errors into `field -> first message`
///
/// Nested struct errors are keyed with a dotted path, e.g.
/// `account.accountNumber`. Field names are reported in camelCase to match
/// the JSON bodies.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    collect(errors, "", &mut out);
    out
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut BTreeMap<String, String>) {
    for (field, kind) in errors.errors() {
        let path = format!("{}{}", prefix, to_camel_case(&field.to_string()));
        match kind {
            ValidationErrorsKind::Field(errs) => {
                if let Some(err) = errs.first() {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", path));
                    out.insert(path, message);
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect(nested, &format!("{}.", path), out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{}[{}].", path, index), out);
                }
            }
        }
    }
}

fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
