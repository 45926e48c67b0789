//! Tween-engine seam and scroll-trigger vocabulary.
//!
//! The engine owns the frame clock and all interpolation. Controllers only
//! describe tweens ([`Tween`]) and when they should run: immediately, at a
//! timeline position, or bound to a scroll trigger.

use crate::animation::{Props, Tween};
use crate::dom::ElementId;

/// One edge comparison between an element and the viewport, in the style of
/// scroll-trigger position strings: `element_fraction` picks a point on the
/// trigger element (0.0 = top, 1.0 = bottom) and `viewport_fraction` a line
/// across the viewport. The edge is crossed when the element point scrolls
/// past the viewport line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerEdge {
    pub element_fraction: f32,
    pub viewport_fraction: f32,
}

impl TriggerEdge {
    pub fn new(element_fraction: f32, viewport_fraction: f32) -> Self {
        Self {
            element_fraction,
            viewport_fraction,
        }
    }

    /// `"top 80%"` — element top crossing 80% of viewport height.
    pub fn top_at(viewport_fraction: f32) -> Self {
        Self::new(0.0, viewport_fraction)
    }

    /// `"bottom top"` — element bottom crossing the viewport top.
    pub fn bottom_at(viewport_fraction: f32) -> Self {
        Self::new(1.0, viewport_fraction)
    }
}

/// How a scroll-bound tween reacts to its trigger region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    /// Play once when the start edge is crossed; never reset.
    OneShot,
    /// Play on entry, restore the pre-animation state on exit so the
    /// animation replays on re-entry.
    Reversible,
    /// Bind progress directly to scroll position between the edges.
    Scrub,
}

/// Registration of a trigger region for a scroll-bound tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTriggerSpec {
    pub trigger: ElementId,
    pub start: TriggerEdge,
    /// End edge; only meaningful for [`TriggerMode::Scrub`].
    pub end: Option<TriggerEdge>,
    pub mode: TriggerMode,
}

/// Interpolation service consumed by every controller.
///
/// Contract required from implementations:
/// - tweens schedule themselves against the engine's frame clock and never
///   block the caller;
/// - a later tween on the same target and property supersedes an earlier
///   in-flight one (last-write-wins);
/// - callbacks registered via [`schedule_call`](TweenEngine::schedule_call)
///   fire when the timeline clock reaches their position.
pub trait TweenEngine {
    /// Start a tween immediately (honoring its own delay).
    fn run(&mut self, tween: Tween);

    /// Apply property values immediately, without interpolation.
    fn set(&mut self, target: ElementId, props: Props);

    /// Bind a tween to a scroll trigger instead of the frame clock.
    fn bind(&mut self, trigger: ScrollTriggerSpec, tween: Tween);

    /// Invoke `callback` when the timeline clock reaches `at` seconds.
    fn schedule_call(&mut self, at: f32, callback: Box<dyn FnOnce()>);
}
