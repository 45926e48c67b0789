//! The orchestrator: plays the intro sequence, then activates the
//! independent effect controllers exactly once.
//!
//! Controllers must not start before the layout they depend on has been
//! revealed by the intro, so activation rides the intro timeline: the
//! sequence's terminal callback flips a shared flag, and the flag is
//! consumed on the next event delivered by the host. Until then every
//! event falls through unhandled.

use std::cell::Cell;
use std::rc::Rc;

use crate::animation::{Ease, Props, Sequence, Tween, TweenOptions};
use crate::config::SiteConfig;
use crate::dom::Document;
use crate::engine::TweenEngine;
use crate::events::PageEvent;
use crate::form::SubmissionController;
use crate::magnetic::MagneticController;
use crate::mail::MailService;
use crate::parallax::ParallaxController;
use crate::reveal::RevealController;
use crate::scrollspy::ScrollSpy;

/// Owns the configuration and every controller for one page.
pub struct Site {
    config: SiteConfig,
    /// Set by the intro sequence's terminal callback; consumed on the next
    /// delivered event.
    activation: Rc<Cell<bool>>,
    started: bool,
    activated: bool,
    parallax: Option<ParallaxController>,
    magnetic: Option<MagneticController>,
    scrollspy: Option<ScrollSpy>,
    submission: Option<SubmissionController>,
}

impl Site {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            activation: Rc::new(Cell::new(false)),
            started: false,
            activated: false,
            parallax: None,
            magnetic: None,
            scrollspy: None,
            submission: None,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Play the intro sequence. Call exactly once, on page ready.
    pub fn start(&mut self, doc: &dyn Document, engine: &mut dyn TweenEngine) {
        if self.started {
            log::warn!("start() called twice; intro already playing");
            return;
        }
        self.started = true;

        let flag = self.activation.clone();
        let sequence =
            intro_sequence(&self.config, doc).call(move || flag.set(true));
        log::debug!(
            "playing intro sequence: {} steps over {:.2}s",
            sequence.len(),
            sequence.total_duration()
        );
        sequence.play(engine);
    }

    /// Dispatch one host event to every interested controller.
    pub fn handle_event(
        &mut self,
        event: PageEvent,
        doc: &mut dyn Document,
        engine: &mut dyn TweenEngine,
        mailer: &mut dyn MailService,
    ) {
        if self.activation.replace(false) {
            self.activate(doc, engine);
        }

        match event {
            PageEvent::Scroll => {
                if let Some(parallax) = &self.parallax {
                    parallax.handle_scroll(doc, engine);
                }
                if let Some(spy) = &self.scrollspy {
                    spy.handle_scroll(doc);
                }
            }
            PageEvent::PointerMove { x, y } => {
                if let Some(magnetic) = &mut self.magnetic {
                    magnetic.handle_pointer_move(doc, engine, x, y);
                }
                if let Some(parallax) = &mut self.parallax {
                    parallax.handle_pointer_move(doc, engine, x, y);
                }
            }
            PageEvent::PointerLeave => {
                if let Some(magnetic) = &mut self.magnetic {
                    magnetic.handle_pointer_leave(engine);
                }
                if let Some(parallax) = &mut self.parallax {
                    parallax.handle_pointer_leave(engine);
                }
            }
            PageEvent::Input(field) => {
                if let Some(submission) = &mut self.submission {
                    submission.handle_input(field, doc);
                }
            }
            PageEvent::Submit => {
                if let Some(submission) = &mut self.submission {
                    submission.handle_submit(doc, mailer);
                }
            }
            PageEvent::SendComplete(result) => {
                if let Some(submission) = &mut self.submission {
                    submission.handle_send_result(doc, result);
                }
            }
        }
    }

    /// Register every controller. Idempotent: a second activation request
    /// (an authoring slip upstream of this layer) registers nothing, so
    /// animations can never double up.
    fn activate(&mut self, doc: &mut dyn Document, engine: &mut dyn TweenEngine) {
        if self.activated {
            log::warn!("activation requested twice; controllers already registered");
            return;
        }
        self.activated = true;

        RevealController::register(&self.config, doc, engine);
        self.parallax = Some(ParallaxController::register(&self.config, doc));
        self.magnetic = Some(MagneticController::register(&self.config, doc));
        self.scrollspy = Some(ScrollSpy::register(&self.config, doc));
        self.submission = SubmissionController::register(&self.config, doc);

        log::debug!("controllers activated");
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}

/// Pure builder for the intro timeline: loader fill and exit, then the
/// hero elements entering with overlapping offsets.
pub fn intro_sequence(config: &SiteConfig, doc: &dyn Document) -> Sequence {
    Sequence::new()
        .then(Tween::to(
            doc.query_all(&config.loader_bar),
            Props::new().width(100.0),
            TweenOptions::new(1.5).ease(Ease::PowerInOut(2)),
        ))
        .then(Tween::to(
            doc.query_all(&config.loader_text),
            Props::new().opacity(0.0).y(-20.0),
            TweenOptions::new(0.5),
        ))
        .then(Tween::to(
            doc.query_all(&config.loader),
            Props::new().y_percent(-100.0),
            TweenOptions::new(1.0).ease(Ease::PowerInOut(3)),
        ))
        .step(
            Tween::from(
                doc.query_all(&config.hero_title_lines),
                Props::new().y(100.0).opacity(0.0),
                TweenOptions::new(1.0).stagger(0.2).ease(Ease::PowerOut(4)),
            ),
            -0.5,
        )
        .step(
            Tween::from(
                doc.query_all(&config.hero_subtitle),
                Props::new().y(20.0).opacity(0.0),
                TweenOptions::new(0.8),
            ),
            -0.5,
        )
        .step(
            Tween::from(
                doc.query_all(&config.hero_cta),
                Props::new().y(20.0).opacity(0.0),
                TweenOptions::new(0.8),
            ),
            -0.6,
        )
}
