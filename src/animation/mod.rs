//! Tween primitives handed to the host's tween engine.
//!
//! A [`Tween`] is a value describing one interpolation request: which
//! elements, which properties, which direction, and how it is timed. The
//! crate never interpolates visual properties itself — tweens are handed to
//! the [`TweenEngine`](crate::engine::TweenEngine) seam for playback.

mod easing;
mod sequence;

pub use easing::Ease;
pub use sequence::{ScheduledStep, Sequence, Step};

use crate::dom::ElementId;

/// Animatable visual property. Values are `f32` in the unit natural to the
/// property: pixels for translations, percent for `YPercent`/`Width`/
/// `BackgroundY`, `0.0..=1.0` for `Opacity`/`Grayscale`, a factor for
/// `Scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Horizontal translation in pixels.
    X,
    /// Vertical translation in pixels.
    Y,
    /// Vertical translation as a percentage of the element's own height.
    YPercent,
    /// Width as a percentage of the parent.
    Width,
    Opacity,
    Scale,
    /// Vertical background-position component in percent.
    BackgroundY,
    /// Grayscale filter amount, `0.0` (full color) to `1.0`.
    Grayscale,
}

/// A set of property targets for one tween.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Props(Vec<(Property, f32)>);

impl Props {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with(mut self, property: Property, value: f32) -> Self {
        self.0.retain(|(p, _)| *p != property);
        self.0.push((property, value));
        self
    }

    pub fn x(self, value: f32) -> Self {
        self.with(Property::X, value)
    }

    pub fn y(self, value: f32) -> Self {
        self.with(Property::Y, value)
    }

    pub fn y_percent(self, value: f32) -> Self {
        self.with(Property::YPercent, value)
    }

    pub fn width(self, value: f32) -> Self {
        self.with(Property::Width, value)
    }

    pub fn opacity(self, value: f32) -> Self {
        self.with(Property::Opacity, value)
    }

    pub fn scale(self, value: f32) -> Self {
        self.with(Property::Scale, value)
    }

    pub fn background_y(self, value: f32) -> Self {
        self.with(Property::BackgroundY, value)
    }

    pub fn grayscale(self, value: f32) -> Self {
        self.with(Property::Grayscale, value)
    }

    pub fn get(&self, property: Property) -> Option<f32> {
        self.0.iter().find(|(p, _)| *p == property).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, f32)> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Whether property values are animation end points or start points.
#[derive(Debug, Clone, PartialEq)]
pub enum Direction {
    /// Animate from the element's current state to the given values.
    To,
    /// Animate from the given values back to the element's current state.
    From,
    /// Animate between two explicit property sets.
    FromTo { from: Props },
}

/// Timing configuration for a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenOptions {
    /// Duration in seconds.
    pub duration: f32,
    /// Delay before the tween starts, in seconds.
    pub delay: f32,
    pub ease: Ease,
    /// Incremental start delay between targets of a group tween, in seconds.
    pub stagger: f32,
}

impl TweenOptions {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease: Ease::default(),
            stagger: 0.0,
        }
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger;
        self
    }
}

impl Default for TweenOptions {
    fn default() -> Self {
        Self::new(0.3)
    }
}

/// One interpolation request for the tween engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub targets: Vec<ElementId>,
    pub direction: Direction,
    pub props: Props,
    pub options: TweenOptions,
}

impl Tween {
    pub fn to(targets: Vec<ElementId>, props: Props, options: TweenOptions) -> Self {
        Self {
            targets,
            direction: Direction::To,
            props,
            options,
        }
    }

    pub fn from(targets: Vec<ElementId>, props: Props, options: TweenOptions) -> Self {
        Self {
            targets,
            direction: Direction::From,
            props,
            options,
        }
    }

    pub fn from_to(target: ElementId, from: Props, to: Props, options: TweenOptions) -> Self {
        Self {
            targets: vec![target],
            direction: Direction::FromTo { from },
            props: to,
            options,
        }
    }

    /// Time from the tween's start until its last target finishes:
    /// duration plus the stagger ramp across the group.
    pub fn span(&self) -> f32 {
        let ramp = self.options.stagger * self.targets.len().saturating_sub(1) as f32;
        self.options.duration + ramp
    }
}
