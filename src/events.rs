//! Events delivered by the host's event loop.

use crate::mail::MailError;

/// The three contact-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];
}

/// One host event, dispatched to every interested controller.
///
/// The page scroll offset and pointer geometry are read back through the
/// [`Document`](crate::dom::Document) seam rather than carried on the
/// event, so controllers stay pure functions of current page state.
#[derive(Debug)]
pub enum PageEvent {
    /// The page scroll offset changed.
    Scroll,
    /// Pointer moved to viewport coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// Pointer left the viewport (or the tracked surface).
    PointerLeave,
    /// A form field received input.
    Input(FormField),
    /// The contact form was submitted (default navigation already
    /// suppressed by the host).
    Submit,
    /// The outcome of the in-flight send request.
    SendComplete(Result<(), MailError>),
}
