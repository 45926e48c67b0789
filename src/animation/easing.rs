//! Easing curves for tweens.
//!
//! An easing curve maps normalized time `t` in `[0, 1]` to an interpolation
//! factor. The factor may leave `[0, 1]` for overshooting curves such as
//! [`Ease::Elastic`].
//!
//! The power family matches the conventional web-animation naming:
//! `PowerOut(2)` starts fast and decelerates, `PowerIn(2)` the opposite,
//! `PowerInOut(3)` is slow at both ends with a fast middle.

use std::f32::consts::TAU;

/// Easing curve applied to a tween's progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    /// Linear interpolation (used for scroll-bound mappings, which take
    /// their pacing from the scroll position itself).
    None,
    /// Accelerating: `t^n`.
    PowerIn(u8),
    /// Decelerating: `1 - (1 - t)^n`.
    PowerOut(u8),
    /// Slow start and end, fast middle.
    PowerInOut(u8),
    /// Elastic overshoot settling on the target. `amplitude` scales the
    /// overshoot (>= 1.0), `period` sets the oscillation wavelength.
    Elastic { amplitude: f32, period: f32 },
}

impl Ease {
    /// The elastic return curve used for magnetic snap-back.
    pub fn elastic(amplitude: f32, period: f32) -> Self {
        Ease::Elastic {
            amplitude: amplitude.max(1.0),
            period,
        }
    }

    /// Evaluate the curve at normalized time `t` (0.0 to 1.0).
    /// The result can exceed `[0, 1]` for overshooting curves.
    pub fn evaluate(&self, t: f32) -> f32 {
        match *self {
            Ease::None => t,
            Ease::PowerIn(n) => t.powi(n.max(1) as i32),
            Ease::PowerOut(n) => 1.0 - (1.0 - t).powi(n.max(1) as i32),
            Ease::PowerInOut(n) => power_in_out(t, n.max(1)),
            Ease::Elastic { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::PowerOut(2)
    }
}

fn power_in_out(t: f32, n: u8) -> f32 {
    let n = n as i32;
    if t < 0.5 {
        2.0_f32.powi(n - 1) * t.powi(n)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(n) / 2.0_f32.powi(n)
    }
}

/// Exponentially decaying sinusoid that overshoots the target and settles.
fn elastic_out(t: f32, amplitude: f32, period: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let a = amplitude.max(1.0);
    let shift = period / TAU * (1.0 / a).asin();
    a * 2.0_f32.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
}
