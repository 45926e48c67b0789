//! Scroll-reveal: staggered entrance animations for content regions.
//!
//! Each content section's qualifying children are registered as one group
//! tween behind a reversible scroll trigger: the group plays when the
//! section's top crosses 80% of the viewport height, and the pre-animation
//! state is restored when the section scrolls back out, so the reveal
//! replays on re-entry.

use crate::animation::{Ease, Props, Tween, TweenOptions};
use crate::config::SiteConfig;
use crate::dom::Document;
use crate::engine::{ScrollTriggerSpec, TriggerEdge, TriggerMode, TweenEngine};

/// Vertical shift the children enter from, in pixels.
const ENTER_SHIFT: f32 = 50.0;
const ENTER_DURATION: f32 = 1.0;
const ENTER_STAGGER: f32 = 0.15;
/// Viewport fraction the section top must cross to trigger the reveal.
const TRIGGER_FRACTION: f32 = 0.8;

/// Registers reveal groups; holds no per-event state (the engine owns the
/// triggers once registered).
pub struct RevealController;

impl RevealController {
    /// Register one staggered reveal per content section that has
    /// qualifying children. Sections with none are skipped entirely.
    /// Returns the number of groups registered.
    pub fn register(
        config: &SiteConfig,
        doc: &dyn Document,
        engine: &mut dyn TweenEngine,
    ) -> usize {
        let mut registered = 0;

        for section in doc.query_all(&config.content_sections) {
            let children = doc.query_within(section, &config.reveal_children);
            if children.is_empty() {
                log::debug!("section {:?} has no reveal targets, skipping", section);
                continue;
            }

            let trigger = ScrollTriggerSpec {
                trigger: section,
                start: TriggerEdge::top_at(TRIGGER_FRACTION),
                end: None,
                mode: TriggerMode::Reversible,
            };
            let tween = Tween::from(
                children,
                Props::new().y(ENTER_SHIFT).opacity(0.0),
                TweenOptions::new(ENTER_DURATION)
                    .stagger(ENTER_STAGGER)
                    .ease(Ease::PowerOut(3)),
            );
            engine.bind(trigger, tween);
            registered += 1;
        }

        log::debug!("registered {} reveal groups", registered);
        registered
    }
}
