//! Magnetic pointer controls.
//!
//! While the pointer is inside a control, the control follows it at a
//! damped fraction of the pointer's offset from center, and its inner
//! label follows at a smaller fraction for depth. When the pointer leaves,
//! both snap back to the origin with an elastic overshoot.

use crate::animation::{Ease, Props, Tween, TweenOptions};
use crate::config::SiteConfig;
use crate::dom::{Document, ElementId};
use crate::engine::TweenEngine;

/// Fraction of the pointer offset applied to the control itself.
pub const CONTROL_DAMPING: f32 = 0.3;
/// Fraction applied to the control's inner label.
pub const LABEL_DAMPING: f32 = 0.1;

const FOLLOW_DURATION: f32 = 0.3;
const RETURN_DURATION: f32 = 0.8;
const RETURN_AMPLITUDE: f32 = 1.0;
const RETURN_PERIOD: f32 = 0.3;

struct MagneticControl {
    control: ElementId,
    /// Inner label element; controls without one skip the label tween.
    label: Option<ElementId>,
}

/// Tracks the hovered control so that a move exiting one control's bounds
/// releases it even without a discrete leave event.
pub struct MagneticController {
    controls: Vec<MagneticControl>,
    hovered: Option<usize>,
}

impl MagneticController {
    pub fn register(config: &SiteConfig, doc: &dyn Document) -> Self {
        let controls: Vec<MagneticControl> = doc
            .query_all(&config.magnetic_controls)
            .into_iter()
            .map(|control| MagneticControl {
                control,
                label: doc
                    .query_within(control, &config.magnetic_label)
                    .into_iter()
                    .next(),
            })
            .collect();

        log::debug!("registered {} magnetic controls", controls.len());
        Self {
            controls,
            hovered: None,
        }
    }

    pub fn handle_pointer_move(
        &mut self,
        doc: &dyn Document,
        engine: &mut dyn TweenEngine,
        x: f32,
        y: f32,
    ) {
        let hit = self
            .controls
            .iter()
            .position(|c| doc.bounding_rect(c.control).contains(x, y));

        // Release a previously hovered control the pointer has left.
        if let Some(previous) = self.hovered {
            if hit != Some(previous) {
                self.release(previous, engine);
            }
        }
        self.hovered = hit;

        let Some(index) = hit else { return };
        let entry = &self.controls[index];
        let (dx, dy) = doc.bounding_rect(entry.control).offset_from_center(x, y);

        // Both tweens run concurrently against independent targets; a new
        // move supersedes any in-flight tween on the same target.
        engine.run(follow_tween(entry.control, damped(dx, dy, CONTROL_DAMPING)));
        if let Some(label) = entry.label {
            engine.run(follow_tween(label, damped(dx, dy, LABEL_DAMPING)));
        }
    }

    pub fn handle_pointer_leave(&mut self, engine: &mut dyn TweenEngine) {
        if let Some(index) = self.hovered.take() {
            self.release(index, engine);
        }
    }

    fn release(&self, index: usize, engine: &mut dyn TweenEngine) {
        let entry = &self.controls[index];
        engine.run(return_tween(entry.control));
        if let Some(label) = entry.label {
            engine.run(return_tween(label));
        }
    }
}

/// Apply a damping fraction to a pointer offset.
pub fn damped(dx: f32, dy: f32, factor: f32) -> (f32, f32) {
    (dx * factor, dy * factor)
}

fn follow_tween(target: ElementId, (x, y): (f32, f32)) -> Tween {
    Tween::to(
        vec![target],
        Props::new().x(x).y(y),
        TweenOptions::new(FOLLOW_DURATION).ease(Ease::PowerOut(2)),
    )
}

fn return_tween(target: ElementId) -> Tween {
    Tween::to(
        vec![target],
        Props::new().x(0.0).y(0.0),
        TweenOptions::new(RETURN_DURATION).ease(Ease::elastic(RETURN_AMPLITUDE, RETURN_PERIOD)),
    )
}
