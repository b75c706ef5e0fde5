use serde::{Deserialize, Serialize};

/// Point on the drawing surface, in pixels (y grows downwards).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

impl SurfacePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Vector from `other` to `self`.
    pub fn delta_from(&self, other: &Self) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

/// Width and height of an image or rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// Both sides finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.w.is_finite() && self.h.is_finite() && self.w > 0.0 && self.h > 0.0
    }
}

/// Axis-aligned rectangle on the drawing surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl SurfaceRect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_center(center: SurfacePoint, w: f64, h: f64) -> Self {
        Self {
            x: center.x - w / 2.0,
            y: center.y - h / 2.0,
            w,
            h,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> SurfacePoint {
        SurfacePoint::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// Finite coordinates and a non-empty area.
    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.w, self.h].iter().all(|v| v.is_finite())
            && self.w > 0.0
            && self.h > 0.0
    }

    /// Check if point is inside rectangle (edges included)
    pub fn contains(&self, p: SurfacePoint) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Same rectangle grown by `margin` on every side.
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            w: self.w + 2.0 * margin,
            h: self.h + 2.0 * margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_and_center() {
        let rect = SurfaceRect::new(10.0, 20.0, 100.0, 50.0);

        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.center(), SurfacePoint::new(60.0, 45.0));
    }

    #[test]
    fn test_rect_contains_point() {
        let rect = SurfaceRect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(SurfacePoint::new(50.0, 40.0)));
        assert!(rect.contains(SurfacePoint::new(10.0, 20.0))); // Top-left corner
        assert!(rect.contains(SurfacePoint::new(110.0, 70.0))); // Bottom-right corner
        assert!(!rect.contains(SurfacePoint::new(110.5, 70.0))); // Just outside
        assert!(!rect.contains(SurfacePoint::new(50.0, 19.0))); // Just above
    }

    #[test]
    fn test_rect_from_center_roundtrips_center() {
        let rect = SurfaceRect::from_center(SurfacePoint::new(5.0, 5.0), 4.0, 2.0);
        assert_eq!(rect, SurfaceRect::new(3.0, 4.0, 4.0, 2.0));
        assert_eq!(rect.center(), SurfacePoint::new(5.0, 5.0));
    }

    #[test]
    fn test_rect_validity() {
        assert!(SurfaceRect::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!SurfaceRect::new(0.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!SurfaceRect::new(f64::NAN, 0.0, 1.0, 1.0).is_valid());
    }

    #[test]
    fn test_rect_serialization_roundtrip() {
        let original = SurfaceRect::new(100.0, 200.0, 640.0, 480.0);

        let json = serde_json::to_string(&original).unwrap();
        let restored: SurfaceRect = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
    }
}
