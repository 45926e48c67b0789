//! Submission state machine for the contact form.
//!
//! One submit event runs validate → lock UI → send → unlock UI exactly
//! once. The re-entrancy guard is the explicit [`SubmissionState`] value,
//! not the disabled state of the submit control, so a host that re-enables
//! the button early still cannot double-send.

use crate::config::SiteConfig;
use crate::dom::{Document, ElementId};
use crate::events::FormField;
use crate::form::validate::{validate_field, validate_form, FieldError, FormValues};
use crate::mail::{MailService, SendRequest};

/// Lifecycle of a submission attempt.
///
/// `Succeeded` and `Failed` behave as `Idle` for the next submit; only
/// `InFlight` refuses new attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Strings and identifiers the controller needs from [`SiteConfig`].
#[derive(Debug, Clone)]
struct FormStrings {
    error_region: String,
    error_class: String,
    success_class: String,
    busy_label: String,
    success_message: String,
    failure_message: String,
    service_id: String,
    template_id: String,
    recipient: String,
}

/// Orchestrates the contact form: per-field error display, the single
/// in-flight send, and unconditional restoration of the submit control.
pub struct SubmissionController {
    name_field: ElementId,
    email_field: ElementId,
    message_field: ElementId,
    submit_control: ElementId,
    /// Element whose text is swapped for the busy label (the control's
    /// inner label, or the control itself when it has none).
    label_element: ElementId,
    status_region: ElementId,
    original_label: String,
    strings: FormStrings,
    state: SubmissionState,
    /// Fields currently displaying an error; input on these re-validates
    /// live. Indexed by [`slot`].
    errored: [bool; 3],
}

fn slot(field: FormField) -> usize {
    match field {
        FormField::Name => 0,
        FormField::Email => 1,
        FormField::Message => 2,
    }
}

impl SubmissionController {
    /// Resolve the form's elements. Returns `None` when the form (or any
    /// required piece of it) is absent — pages without a contact form
    /// simply get no submission controller.
    pub fn register(config: &SiteConfig, doc: &dyn Document) -> Option<Self> {
        let Some(_form) = doc.query(&config.form) else {
            log::debug!("contact form absent, submission controller disabled");
            return None;
        };

        let name_field = doc.query(&config.name_field)?;
        let email_field = doc.query(&config.email_field)?;
        let message_field = doc.query(&config.message_field)?;
        let submit_control = doc.query(&config.submit_control)?;
        let status_region = doc.query(&config.status_region)?;

        let label_element = doc
            .query_within(submit_control, &config.submit_label)
            .into_iter()
            .next()
            .unwrap_or(submit_control);
        let original_label = doc.text(label_element);

        Some(Self {
            name_field,
            email_field,
            message_field,
            submit_control,
            label_element,
            status_region,
            original_label,
            strings: FormStrings {
                error_region: config.error_region.clone(),
                error_class: config.error_class.clone(),
                success_class: config.success_class.clone(),
                busy_label: config.busy_label.clone(),
                success_message: config.success_message.clone(),
                failure_message: config.failure_message.clone(),
                service_id: config.mail_service_id.clone(),
                template_id: config.mail_template_id.clone(),
                recipient: config.recipient.clone(),
            },
            state: SubmissionState::Idle,
            errored: [false; 3],
        })
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Handle a submit event: validate, and if everything passes, lock the
    /// UI and issue exactly one send request.
    pub fn handle_submit(&mut self, doc: &mut dyn Document, mailer: &mut dyn MailService) {
        if self.state == SubmissionState::InFlight {
            log::debug!("submit ignored: a send request is already in flight");
            return;
        }

        let values = self.values(doc);
        let report = validate_form(&values);
        for (field, result) in report.iter() {
            self.apply_field_result(field, result, doc);
        }
        if !report.is_valid() {
            self.state = SubmissionState::Idle;
            return;
        }

        self.state = SubmissionState::InFlight;
        doc.set_enabled(self.submit_control, false);
        doc.set_text(self.label_element, &self.strings.busy_label);
        doc.remove_class(self.status_region, &self.strings.success_class);
        doc.remove_class(self.status_region, &self.strings.error_class);
        doc.set_visible(self.status_region, false);

        let request = SendRequest {
            service_id: self.strings.service_id.clone(),
            template_id: self.strings.template_id.clone(),
            from_name: values.name,
            reply_to: values.email,
            message: values.message,
            to_name: self.strings.recipient.clone(),
        };

        // A fault raised while initiating the request is an immediate
        // failure response; the restore path below must still run.
        if let Err(error) = mailer.send(request) {
            self.handle_send_result(doc, Err(error));
        }
    }

    /// Live re-validation: only fields already showing an error are
    /// re-checked as the user types.
    pub fn handle_input(&mut self, field: FormField, doc: &mut dyn Document) {
        if !self.errored[slot(field)] {
            return;
        }
        let value = doc.field_value(self.field_element(field));
        let result = validate_field(field, &value);
        self.apply_field_result(field, result, doc);
    }

    /// Handle the asynchronous outcome of the in-flight send request.
    pub fn handle_send_result(
        &mut self,
        doc: &mut dyn Document,
        result: Result<(), crate::mail::MailError>,
    ) {
        if self.state != SubmissionState::InFlight {
            log::debug!("send result received with no request in flight, ignoring");
            return;
        }

        match result {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                doc.set_text(self.status_region, &self.strings.success_message);
                doc.add_class(self.status_region, &self.strings.success_class);
                for field in FormField::ALL {
                    doc.set_field_value(self.field_element(field), "");
                }
            }
            Err(error) => {
                self.state = SubmissionState::Failed;
                log::error!("send request failed: {}", error);
                doc.set_text(self.status_region, &self.strings.failure_message);
                doc.add_class(self.status_region, &self.strings.error_class);
                // Field values are preserved for a retry.
            }
        }
        doc.set_visible(self.status_region, true);

        // Runs on both branches: the submit control is always returned to
        // an actionable state.
        doc.set_enabled(self.submit_control, true);
        doc.set_text(self.label_element, &self.original_label);
    }

    fn field_element(&self, field: FormField) -> ElementId {
        match field {
            FormField::Name => self.name_field,
            FormField::Email => self.email_field,
            FormField::Message => self.message_field,
        }
    }

    fn values(&self, doc: &dyn Document) -> FormValues {
        FormValues {
            name: doc.field_value(self.name_field),
            email: doc.field_value(self.email_field),
            message: doc.field_value(self.message_field),
        }
    }

    /// Surface or clear one field's error on its containing input group.
    fn apply_field_result(
        &mut self,
        field: FormField,
        result: Result<(), FieldError>,
        doc: &mut dyn Document,
    ) {
        let element = self.field_element(field);
        let group = doc.parent(element).unwrap_or(element);
        let display = doc
            .query_within(group, &self.strings.error_region)
            .into_iter()
            .next();

        match result {
            Err(error) => {
                self.errored[slot(field)] = true;
                doc.add_class(group, &self.strings.error_class);
                if let Some(display) = display {
                    doc.set_text(display, error.message);
                }
            }
            Ok(()) => {
                self.errored[slot(field)] = false;
                doc.remove_class(group, &self.strings.error_class);
                if let Some(display) = display {
                    doc.set_text(display, "");
                }
            }
        }
    }
}
