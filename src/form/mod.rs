//! Contact form: pure validation and the submission state machine.

pub mod submit;
pub mod validate;

pub use submit::{SubmissionController, SubmissionState};
pub use validate::{
    is_valid_email, validate_field, validate_form, FieldError, FormReport, FormValues,
};
