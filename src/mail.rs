//! Outbound message seam.
//!
//! The submission controller issues at most one [`SendRequest`] per valid
//! submit. Delivery is the host's concern: [`MailService::send`] only
//! initiates the request, and the asynchronous outcome comes back later as
//! [`PageEvent::SendComplete`](crate::events::PageEvent::SendComplete).

use thiserror::Error;

/// Parameters of one outbound message, matching the delivery template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub service_id: String,
    pub template_id: String,
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
    pub to_name: String,
}

/// Failure reported by the delivery service or its transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailError {
    /// The request never reached the service.
    #[error("mail transport failed: {0}")]
    Transport(String),
    /// The service answered with a rejection.
    #[error("mail service rejected the message (status {status}): {reason}")]
    Rejected { status: u16, reason: String },
}

/// Message delivery service.
///
/// `send` must not block: it hands the request to the transport and
/// returns. `Err` reports a fault raised while *initiating* the request
/// (treated as an immediate failure response); `Ok` means the outcome will
/// arrive later as a `SendComplete` event.
pub trait MailService {
    fn send(&mut self, request: SendRequest) -> Result<(), MailError>;
}
