//! Parallax: scroll- and pointer-linked drift for background layers.
//!
//! All scroll mappings are pure functions of the current scroll offset —
//! nothing is accumulated frame to frame, so repeated ticks at the same
//! offset produce identical output. The mapped values are applied through
//! [`TweenEngine::set`]; only the pointer-driven effects interpolate.

use crate::animation::{Ease, Props, Tween, TweenOptions};
use crate::config::SiteConfig;
use crate::dom::{Document, ElementId};
use crate::engine::TweenEngine;

/// Fraction of the hero region's height the background sinks across the
/// hero's scroll range.
const HERO_SWEEP_PERCENT: f32 = 50.0;
/// Background-position sweep of the decorative image, in percent.
const IMAGE_SWEEP_PERCENT: f32 = 20.0;
/// Full pointer-drift range across the viewport, in pixels.
const DRIFT_RANGE: f32 = 20.0;
const DRIFT_DURATION: f32 = 1.0;

const HOVER_SCALE: f32 = 1.05;
const RESTING_GRAYSCALE: f32 = 0.2;
const HOVER_DURATION: f32 = 0.5;

struct HeroLayer {
    region: ElementId,
    background: ElementId,
}

struct DecorativeImage {
    wrapper: ElementId,
    image: ElementId,
    hovered: bool,
}

/// Scroll/pointer parallax over the hero background and the decorative
/// image. Both layers are optional; absent markup degrades to a no-op.
pub struct ParallaxController {
    hero: Option<HeroLayer>,
    image: Option<DecorativeImage>,
}

impl ParallaxController {
    pub fn register(config: &SiteConfig, doc: &dyn Document) -> Self {
        let hero = match (doc.query(&config.hero), doc.query(&config.hero_bg)) {
            (Some(region), Some(background)) => Some(HeroLayer { region, background }),
            _ => {
                log::debug!("hero region or background absent, hero parallax disabled");
                None
            }
        };

        let image = match (
            doc.query(&config.decorative_wrapper),
            doc.query(&config.decorative_image),
        ) {
            (Some(wrapper), Some(image)) => Some(DecorativeImage {
                wrapper,
                image,
                hovered: false,
            }),
            _ => {
                log::debug!("decorative image absent, image parallax disabled");
                None
            }
        };

        Self { hero, image }
    }

    /// Recompute both scroll mappings from the current scroll offset.
    pub fn handle_scroll(&self, doc: &dyn Document, engine: &mut dyn TweenEngine) {
        let scroll_y = doc.scroll_y();

        if let Some(hero) = &self.hero {
            let start = doc.offset_top(hero.region);
            let end = start + doc.client_height(hero.region);
            let progress = span_progress(scroll_y, start, end);
            let (y_percent, opacity) = hero_sweep(progress);
            engine.set(
                hero.background,
                Props::new().y_percent(y_percent).opacity(opacity),
            );
        }

        if let Some(image) = &self.image {
            let top = doc.offset_top(image.wrapper);
            let start = top - doc.viewport().height;
            let end = top + doc.client_height(image.wrapper);
            let progress = span_progress(scroll_y, start, end);
            engine.set(
                image.image,
                Props::new().background_y(image_sweep(progress)),
            );
        }
    }

    /// Pointer-position parallax: drift the hero background toward the
    /// pointer, and track hover over the decorative image.
    pub fn handle_pointer_move(
        &mut self,
        doc: &dyn Document,
        engine: &mut dyn TweenEngine,
        x: f32,
        y: f32,
    ) {
        if let Some(hero) = &self.hero {
            if doc.bounding_rect(hero.region).contains(x, y) {
                let viewport = doc.viewport();
                let (dx, dy) = pointer_drift(x / viewport.width, y / viewport.height);
                engine.run(Tween::to(
                    vec![hero.background],
                    Props::new().x(dx).y(dy),
                    TweenOptions::new(DRIFT_DURATION).ease(Ease::PowerOut(2)),
                ));
            }
        }

        if let Some(image) = &mut self.image {
            let inside = doc.bounding_rect(image.wrapper).contains(x, y);
            if inside != image.hovered {
                image.hovered = inside;
                engine.run(hover_tween(image.image, inside));
            }
        }
    }

    pub fn handle_pointer_leave(&mut self, engine: &mut dyn TweenEngine) {
        if let Some(image) = &mut self.image {
            if image.hovered {
                image.hovered = false;
                engine.run(hover_tween(image.image, false));
            }
        }
    }
}

fn hover_tween(image: ElementId, entering: bool) -> Tween {
    let props = if entering {
        Props::new().scale(HOVER_SCALE).grayscale(0.0)
    } else {
        Props::new().scale(1.0).grayscale(RESTING_GRAYSCALE)
    };
    Tween::to(
        vec![image],
        props,
        TweenOptions::new(HOVER_DURATION).ease(Ease::PowerOut(2)),
    )
}

/// Progress of `scroll_y` through `[start, end]`, clamped to `[0, 1]`.
pub fn span_progress(scroll_y: f32, start: f32, end: f32) -> f32 {
    if end <= start {
        return if scroll_y >= start { 1.0 } else { 0.0 };
    }
    ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
}

/// Hero background mapping: offset sweeps 0 → 50% of the region height,
/// opacity sweeps 1 → 0.
pub fn hero_sweep(progress: f32) -> (f32, f32) {
    (HERO_SWEEP_PERCENT * progress, 1.0 - progress)
}

/// Decorative image mapping: background-position y sweeps 0% → 20%,
/// linear, since the pacing comes from the scroll position itself.
pub fn image_sweep(progress: f32) -> f32 {
    IMAGE_SWEEP_PERCENT * progress
}

/// Pointer drift: viewport-relative pointer fractions map to a centered
/// drift of ±half the range on each axis.
pub fn pointer_drift(x_fraction: f32, y_fraction: f32) -> (f32, f32) {
    (
        (x_fraction - 0.5) * DRIFT_RANGE,
        (y_fraction - 0.5) * DRIFT_RANGE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_progress_clamps() {
        assert_eq!(span_progress(-10.0, 0.0, 100.0), 0.0);
        assert_eq!(span_progress(50.0, 0.0, 100.0), 0.5);
        assert_eq!(span_progress(250.0, 0.0, 100.0), 1.0);
    }

    #[test]
    fn test_span_progress_degenerate_range() {
        assert_eq!(span_progress(5.0, 10.0, 10.0), 0.0);
        assert_eq!(span_progress(10.0, 10.0, 10.0), 1.0);
    }

    #[test]
    fn test_hero_sweep_endpoints() {
        assert_eq!(hero_sweep(0.0), (0.0, 1.0));
        assert_eq!(hero_sweep(1.0), (50.0, 0.0));
        let (offset, opacity) = hero_sweep(0.5);
        assert_eq!(offset, 25.0);
        assert_eq!(opacity, 0.5);
    }

    #[test]
    fn test_image_sweep_is_linear() {
        assert_eq!(image_sweep(0.0), 0.0);
        assert_eq!(image_sweep(0.5), 10.0);
        assert_eq!(image_sweep(1.0), 20.0);
    }

    #[test]
    fn test_pointer_drift_centered() {
        assert_eq!(pointer_drift(0.5, 0.5), (0.0, 0.0));
        assert_eq!(pointer_drift(1.0, 0.5), (10.0, 0.0));
        assert_eq!(pointer_drift(0.0, 0.0), (-10.0, -10.0));
    }

    #[test]
    fn test_same_offset_maps_to_same_values() {
        // No drift accumulation: the mapping is a pure function of offset.
        let a = hero_sweep(span_progress(350.0, 0.0, 800.0));
        let b = hero_sweep(span_progress(350.0, 0.0, 800.0));
        assert_eq!(a, b);
    }
}
