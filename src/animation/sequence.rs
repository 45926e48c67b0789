//! Timeline sequencer for the intro animation.
//!
//! A [`Sequence`] is an ordered list of steps placed on one timeline. Each
//! step carries a start offset relative to the previous step's *end*; a
//! negative offset overlaps the previous step instead of waiting for it.
//! Start times are computed purely by [`Sequence::schedule`], so timing is
//! testable without a clock; [`Sequence::play`] consumes the sequence and
//! hands every step to the engine exactly once.

use super::Tween;
use crate::engine::TweenEngine;

/// One timeline step: a tween, or a zero-duration callback.
pub enum Step {
    Tween(Tween),
    Call(Box<dyn FnOnce()>),
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Tween(tween) => f.debug_tuple("Tween").field(tween).finish(),
            Step::Call(_) => f.write_str("Call"),
        }
    }
}

/// Computed timeline placement of one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledStep {
    /// Absolute start time on the timeline, in seconds.
    pub start: f32,
    /// Time the step occupies (zero for callbacks).
    pub span: f32,
}

/// An ordered timeline of steps, played at most once.
#[derive(Debug, Default)]
pub struct Sequence {
    steps: Vec<(Step, f32)>,
}

impl Sequence {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a tween starting when the previous step ends.
    pub fn then(self, tween: Tween) -> Self {
        self.step(tween, 0.0)
    }

    /// Append a tween with a start offset relative to the previous step's
    /// end. Negative offsets overlap the previous step.
    pub fn step(mut self, tween: Tween, offset: f32) -> Self {
        self.steps.push((Step::Tween(tween), offset));
        self
    }

    /// Append a zero-duration callback step at the current timeline end.
    pub fn call(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.steps.push((Step::Call(Box::new(callback)), 0.0));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Compute each step's absolute placement on the timeline.
    ///
    /// The timeline cursor sits at the previous step's end; each step starts
    /// at `cursor + offset`, clamped so overlaps cannot reach before zero.
    /// A step's own delay shifts its start like a positive offset would.
    pub fn schedule(&self) -> Vec<ScheduledStep> {
        let mut placements = Vec::with_capacity(self.steps.len());
        let mut cursor = 0.0_f32;

        for (step, offset) in &self.steps {
            let (extra_delay, span) = match step {
                Step::Tween(tween) => (tween.options.delay, tween.span()),
                Step::Call(_) => (0.0, 0.0),
            };
            let start = (cursor + offset + extra_delay).max(0.0);
            placements.push(ScheduledStep { start, span });
            cursor = start + span;
        }

        placements
    }

    /// Timeline position at which the final step ends.
    pub fn total_duration(&self) -> f32 {
        self.schedule()
            .last()
            .map(|step| step.start + step.span)
            .unwrap_or(0.0)
    }

    /// Play every step against the engine, honoring computed start times.
    ///
    /// Tweens with no targets are a caller contract violation; they keep
    /// their timeline slot but are not issued.
    pub fn play(self, engine: &mut dyn TweenEngine) {
        let placements = self.schedule();

        for ((step, _), placement) in self.steps.into_iter().zip(placements) {
            match step {
                Step::Tween(mut tween) => {
                    if tween.targets.is_empty() {
                        log::debug!("skipping sequence tween with no targets");
                        continue;
                    }
                    tween.options.delay = placement.start;
                    engine.run(tween);
                }
                Step::Call(callback) => engine.schedule_call(placement.start, callback),
            }
        }
    }
}
