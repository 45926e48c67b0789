//! Viewport geometry used by the pointer and scroll controllers.

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Geometric center of the rectangle.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Offset of a point from the rectangle's center.
    pub fn offset_from_center(&self, x: f32, y: f32) -> (f32, f32) {
        let (cx, cy) = self.center();
        (x - cx, y - cy)
    }
}

/// Visible viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(rect.center(), (60.0, 40.0));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(50.0, 40.0));
        assert!(rect.contains(10.0, 20.0)); // top-left inclusive
        assert!(!rect.contains(110.0, 70.0)); // bottom-right exclusive
        assert!(!rect.contains(5.0, 40.0));
    }

    #[test]
    fn test_offset_from_center() {
        let rect = Rect::new(100.0, 100.0, 100.0, 50.0);
        assert_eq!(rect.offset_from_center(150.0, 125.0), (0.0, 0.0));
        assert_eq!(rect.offset_from_center(200.0, 125.0), (50.0, 0.0));
    }
}
