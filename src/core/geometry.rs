use glam::Vec2;

/// Axis-aligned rectangle in CSS pixels, mirroring `DOMRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Snapshot of the layout queries a cursor event needs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Layout {
    pub button: Rect,
    pub zone: Rect,
}

impl Layout {
    #[inline]
    pub fn cursor_distance(&self, cursor: Vec2) -> f32 {
        distance(cursor, self.button.center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_midpoint() {
        let r = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(r.center(), Vec2::new(60.0, 40.0));
    }

    #[test]
    fn distance_is_symmetric_pythagorean() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-6);
        assert!((distance(b, a) - 5.0).abs() < 1e-6);
    }
}
