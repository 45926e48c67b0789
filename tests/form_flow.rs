//! End-to-end tests for the contact form: validation display, the
//! submission state machine, and restoration of the submit control.

mod common;

use common::{FakeDocument, RecordingMailer};
use vitrine::form::validate::{
    EMAIL_INVALID, EMAIL_REQUIRED, MESSAGE_REQUIRED, MESSAGE_TOO_SHORT, NAME_REQUIRED,
};
use vitrine::prelude::*;

struct FormPage {
    doc: FakeDocument,
    fields: [ElementId; 3],
    groups: [ElementId; 3],
    errors: [ElementId; 3],
    submit: ElementId,
    label: ElementId,
    status: ElementId,
}

fn form_page() -> FormPage {
    let mut doc = FakeDocument::new();
    let form = doc.add(&["#contact-form"]);

    let mut fields = Vec::new();
    let mut groups = Vec::new();
    let mut errors = Vec::new();
    for selector in ["#name", "#email", "#message"] {
        let group = doc.add_child(form, &[".form-group"]);
        fields.push(doc.add_child(group, &[selector]));
        errors.push(doc.add_child(group, &[".error-message"]));
        groups.push(group);
    }

    let submit = doc.add_child(form, &["#submit-btn"]);
    let label = doc.add_child(submit, &["span"]);
    doc.set_element_text(label, "Send Message");
    let status = doc.add_child(form, &["#form-status"]);

    FormPage {
        doc,
        fields: [fields[0], fields[1], fields[2]],
        groups: [groups[0], groups[1], groups[2]],
        errors: [errors[0], errors[1], errors[2]],
        submit,
        label,
        status,
    }
}

fn fill(page: &mut FormPage, name: &str, email: &str, message: &str) {
    page.doc.set_value(page.fields[0], name);
    page.doc.set_value(page.fields[1], email);
    page.doc.set_value(page.fields[2], message);
}

fn config() -> SiteConfig {
    SiteConfig::default().mail_ids("svc_1", "tpl_1").recipient("Ada")
}

fn controller(page: &FormPage) -> SubmissionController {
    SubmissionController::register(&config(), &page.doc).expect("form present")
}

const VALID_MESSAGE: &str = "A long enough message.";

#[test]
fn test_each_missing_field_blocks_send_with_its_message() {
    let cases = [
        (("", "ada@example.com", VALID_MESSAGE), 0, NAME_REQUIRED),
        (("Ada", "", VALID_MESSAGE), 1, EMAIL_REQUIRED),
        (("Ada", "ada@example.com", ""), 2, MESSAGE_REQUIRED),
    ];

    for ((name, email, message), slot, expected) in cases {
        let mut page = form_page();
        let mut controller = controller(&page);
        let mut mailer = RecordingMailer::new();

        fill(&mut page, name, email, message);
        controller.handle_submit(&mut page.doc, &mut mailer);

        assert!(mailer.requests.is_empty(), "no request for empty field");
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(page.doc.has_class(page.groups[slot], "error"));
        assert_eq!(page.doc.text(page.errors[slot]), expected);
        // The other groups stay clean.
        for (i, group) in page.groups.into_iter().enumerate() {
            if i != slot {
                assert!(!page.doc.has_class(group, "error"));
            }
        }
    }
}

#[test]
fn test_email_format_gate() {
    let mut page = form_page();
    let mut controller = controller(&page);
    let mut mailer = RecordingMailer::new();

    fill(&mut page, "Ada", "a@b", VALID_MESSAGE);
    controller.handle_submit(&mut page.doc, &mut mailer);
    assert!(mailer.requests.is_empty());
    assert_eq!(page.doc.text(page.errors[1]), EMAIL_INVALID);

    fill(&mut page, "Ada", "a@b.c", VALID_MESSAGE);
    controller.handle_submit(&mut page.doc, &mut mailer);
    assert_eq!(mailer.requests.len(), 1);
    assert!(!page.doc.has_class(page.groups[1], "error"));
}

#[test]
fn test_message_length_gate() {
    let mut page = form_page();
    let mut controller = controller(&page);
    let mut mailer = RecordingMailer::new();

    fill(&mut page, "Ada", "ada@example.com", "123456789");
    controller.handle_submit(&mut page.doc, &mut mailer);
    assert!(mailer.requests.is_empty());
    assert_eq!(page.doc.text(page.errors[2]), MESSAGE_TOO_SHORT);

    fill(&mut page, "Ada", "ada@example.com", "1234567890");
    controller.handle_submit(&mut page.doc, &mut mailer);
    assert_eq!(mailer.requests.len(), 1);
}

#[test]
fn test_valid_submit_locks_ui_and_refuses_reentry() {
    let mut page = form_page();
    let mut controller = controller(&page);
    let mut mailer = RecordingMailer::new();

    fill(&mut page, "Ada", "ada@example.com", VALID_MESSAGE);
    controller.handle_submit(&mut page.doc, &mut mailer);

    assert_eq!(controller.state(), SubmissionState::InFlight);
    assert_eq!(mailer.requests.len(), 1);
    assert!(!page.doc.enabled(page.submit));
    assert_eq!(page.doc.text(page.label), "Sending...");
    assert!(!page.doc.visible(page.status));

    let request = &mailer.requests[0];
    assert_eq!(request.service_id, "svc_1");
    assert_eq!(request.template_id, "tpl_1");
    assert_eq!(request.from_name, "Ada");
    assert_eq!(request.reply_to, "ada@example.com");
    assert_eq!(request.message, VALID_MESSAGE);
    assert_eq!(request.to_name, "Ada");

    // Resubmitting while in flight issues no second request.
    controller.handle_submit(&mut page.doc, &mut mailer);
    assert_eq!(mailer.requests.len(), 1);
}

#[test]
fn test_success_clears_fields_and_restores_control() {
    let mut page = form_page();
    let mut controller = controller(&page);
    let mut mailer = RecordingMailer::new();

    fill(&mut page, "Ada", "ada@example.com", VALID_MESSAGE);
    controller.handle_submit(&mut page.doc, &mut mailer);
    controller.handle_send_result(&mut page.doc, Ok(()));

    assert_eq!(controller.state(), SubmissionState::Succeeded);
    assert!(page.doc.visible(page.status));
    assert!(page.doc.has_class(page.status, "success"));
    assert_eq!(
        page.doc.text(page.status),
        "Message sent successfully! I will get back to you soon."
    );
    for field in page.fields {
        assert_eq!(page.doc.field_value(field), "");
    }
    assert!(page.doc.enabled(page.submit));
    assert_eq!(page.doc.text(page.label), "Send Message");

    // A fresh submission is accepted afterwards.
    fill(&mut page, "Ada", "ada@example.com", VALID_MESSAGE);
    controller.handle_submit(&mut page.doc, &mut mailer);
    assert_eq!(mailer.requests.len(), 2);
}

#[test]
fn test_failure_preserves_fields_and_restores_control() {
    let mut page = form_page();
    let mut controller = controller(&page);
    let mut mailer = RecordingMailer::new();

    fill(&mut page, "Ada", "ada@example.com", VALID_MESSAGE);
    controller.handle_submit(&mut page.doc, &mut mailer);
    controller.handle_send_result(
        &mut page.doc,
        Err(MailError::Rejected {
            status: 500,
            reason: "server error".into(),
        }),
    );

    assert_eq!(controller.state(), SubmissionState::Failed);
    assert!(page.doc.visible(page.status));
    assert!(page.doc.has_class(page.status, "error"));
    assert_eq!(
        page.doc.text(page.status),
        "Failed to send message. Please try again later or email me directly."
    );
    assert_eq!(page.doc.field_value(page.fields[0]), "Ada");
    assert_eq!(page.doc.field_value(page.fields[2]), VALID_MESSAGE);
    assert!(page.doc.enabled(page.submit));
    assert_eq!(page.doc.text(page.label), "Send Message");

    // Retrying clears the stale status display while the new request is
    // in flight.
    controller.handle_submit(&mut page.doc, &mut mailer);
    assert!(!page.doc.has_class(page.status, "error"));
    assert!(!page.doc.visible(page.status));
    assert_eq!(mailer.requests.len(), 2);
}

#[test]
fn test_initiation_fault_takes_the_failure_path() {
    let mut page = form_page();
    let mut controller = controller(&page);
    let mut mailer = RecordingMailer::new();
    mailer.fail_next = Some(MailError::Transport("network unreachable".into()));

    fill(&mut page, "Ada", "ada@example.com", VALID_MESSAGE);
    controller.handle_submit(&mut page.doc, &mut mailer);

    assert!(mailer.requests.is_empty());
    assert_eq!(controller.state(), SubmissionState::Failed);
    assert!(page.doc.visible(page.status));
    assert!(page.doc.has_class(page.status, "error"));
    assert!(page.doc.enabled(page.submit));
    assert_eq!(page.doc.text(page.label), "Send Message");
}

#[test]
fn test_live_revalidation_only_after_a_field_has_errored() {
    let mut page = form_page();
    let mut controller = controller(&page);
    let mut mailer = RecordingMailer::new();

    // Typing into a clean field re-validates nothing.
    fill(&mut page, "Ada", "a@b", VALID_MESSAGE);
    controller.handle_input(FormField::Email, &mut page.doc);
    assert!(!page.doc.has_class(page.groups[1], "error"));

    controller.handle_submit(&mut page.doc, &mut mailer);
    assert!(page.doc.has_class(page.groups[1], "error"));

    // Fixing the value clears the error as the user types, without a
    // new submit and without sending anything.
    page.doc.set_value(page.fields[1], "ada@example.com");
    controller.handle_input(FormField::Email, &mut page.doc);
    assert!(!page.doc.has_class(page.groups[1], "error"));
    assert_eq!(page.doc.text(page.errors[1]), "");
    assert!(mailer.requests.is_empty());

    // Once cleared, the field goes back to submit-time validation only.
    page.doc.set_value(page.fields[1], "a@b");
    controller.handle_input(FormField::Email, &mut page.doc);
    assert!(!page.doc.has_class(page.groups[1], "error"));
}

#[test]
fn test_stale_send_result_is_ignored() {
    let mut page = form_page();
    let mut controller = controller(&page);

    controller.handle_send_result(&mut page.doc, Ok(()));

    assert_eq!(controller.state(), SubmissionState::Idle);
    assert_eq!(page.doc.text(page.status), "");
    assert!(!page.doc.has_class(page.status, "success"));
}

#[test]
fn test_registration_requires_the_full_form() {
    let mut doc = FakeDocument::new();
    assert!(SubmissionController::register(&config(), &doc).is_none());

    // A form without its submit control is also unusable.
    let form = doc.add(&["#contact-form"]);
    doc.add_child(form, &["#name"]);
    doc.add_child(form, &["#email"]);
    doc.add_child(form, &["#message"]);
    assert!(SubmissionController::register(&config(), &doc).is_none());
}
