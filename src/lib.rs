//! vitrine — presentation-effects orchestrator for single-page sites.
//!
//! Sequences an intro timeline, then coordinates a set of independently
//! triggered visual effects (scroll reveals, parallax, magnetic pointer
//! controls, scroll-spy navigation) and a validated contact form that
//! guards an outbound send-mail request.
//!
//! The crate owns orchestration and state only. Interpolation, the frame
//! clock, the document, and mail delivery are host concerns behind three
//! seams: [`engine::TweenEngine`], [`dom::Document`], and
//! [`mail::MailService`]. The host's event loop drives everything by
//! delivering [`events::PageEvent`]s to [`site::Site::handle_event`].
//!
//! ```ignore
//! let mut site = Site::new(SiteConfig::default().recipient("Ada"));
//! site.start(&doc, &mut engine);
//! // per event from the host:
//! site.handle_event(PageEvent::Scroll, &mut doc, &mut engine, &mut mailer);
//! ```

pub mod animation;
pub mod config;
pub mod dom;
pub mod engine;
pub mod events;
pub mod form;
pub mod geometry;
pub mod magnetic;
pub mod mail;
pub mod parallax;
pub mod reveal;
pub mod scrollspy;
pub mod site;

pub mod prelude {
    pub use crate::animation::{
        Direction, Ease, Property, Props, ScheduledStep, Sequence, Step, Tween, TweenOptions,
    };
    pub use crate::config::SiteConfig;
    pub use crate::dom::{Document, ElementId};
    pub use crate::engine::{ScrollTriggerSpec, TriggerEdge, TriggerMode, TweenEngine};
    pub use crate::events::{FormField, PageEvent};
    pub use crate::form::{
        validate_form, FieldError, FormReport, FormValues, SubmissionController, SubmissionState,
    };
    pub use crate::geometry::{Rect, Viewport};
    pub use crate::mail::{MailError, MailService, SendRequest};
    pub use crate::site::{intro_sequence, Site};
}
