//! Pure contact-form validation.
//!
//! Validators are synchronous functions from field values to a result; all
//! display state is the submission controller's concern. The email check is
//! a heuristic pattern — deliberately not full RFC 5322 — that accepts
//! `local-part@domain` where the domain is at least two dotted alphabetic
//! labels or a bracketed IPv4 literal.

use std::sync::LazyLock;

use regex::Regex;

use crate::events::FormField;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please provide a valid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters.";

/// Minimum trimmed message length, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[^\s@]+@(\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\]|[a-z]+(\.[a-z]+)+)$",
    )
    .expect("email pattern is valid")
});

/// A failed field check and the message to surface next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub message: &'static str,
}

/// Raw values of the three form fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Result of validating every field once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    pub name: Result<(), FieldError>,
    pub email: Result<(), FieldError>,
    pub message: Result<(), FieldError>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.name.is_ok() && self.email.is_ok() && self.message.is_ok()
    }

    pub fn field(&self, field: FormField) -> Result<(), FieldError> {
        match field {
            FormField::Name => self.name,
            FormField::Email => self.email,
            FormField::Message => self.message,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, Result<(), FieldError>)> + '_ {
        FormField::ALL.into_iter().map(|f| (f, self.field(f)))
    }
}

/// Validate all three fields.
pub fn validate_form(values: &FormValues) -> FormReport {
    FormReport {
        name: validate_field(FormField::Name, &values.name),
        email: validate_field(FormField::Email, &values.email),
        message: validate_field(FormField::Message, &values.message),
    }
}

/// Validate a single field value.
pub fn validate_field(field: FormField, value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    match field {
        FormField::Name => {
            if trimmed.is_empty() {
                return Err(FieldError {
                    message: NAME_REQUIRED,
                });
            }
        }
        FormField::Email => {
            if trimmed.is_empty() {
                return Err(FieldError {
                    message: EMAIL_REQUIRED,
                });
            }
            if !is_valid_email(trimmed) {
                return Err(FieldError {
                    message: EMAIL_INVALID,
                });
            }
        }
        FormField::Message => {
            if trimmed.is_empty() {
                return Err(FieldError {
                    message: MESSAGE_REQUIRED,
                });
            }
            if trimmed.chars().count() < MIN_MESSAGE_CHARS {
                return Err(FieldError {
                    message: MESSAGE_TOO_SHORT,
                });
            }
        }
    }
    Ok(())
}

/// Heuristic email predicate (see module docs).
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
