//! Axis-aligned rectangle type and the tolerances used throughout the pipeline.

/// Geometric tolerance used for rectangle/lane comparisons (inflation,
/// clipping, merging, waypoint-in-wall checks).
pub(crate) const EPS_GEOM: f64 = 1e-9;

/// Minimum free-segment length kept after interval subtraction (S4).
pub(crate) const EPS_SEG: f64 = 1e-6;

/// An axis-aligned rectangle `[x, x+width] x [y, y+height]`.
///
/// `width` and `height` are expected to be non-negative; a rectangle with
/// zero area is a valid intermediate value (see [`Rect::is_degenerate`])
/// but is discarded before use by the obstacle preprocessor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::canonical::round9"))]
    pub x: f64,
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::canonical::round9"))]
    pub y: f64,
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::canonical::round9"))]
    pub width: f64,
    #[cfg_attr(feature = "serde", serde(serialize_with = "crate::canonical::round9"))]
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn is_degenerate(&self) -> bool {
        self.area() <= EPS_GEOM
    }

    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    /// Expand outward by `margin` on every side.
    pub(crate) fn inflate(&self, margin: f64) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }

    /// Intersect with another rectangle. Returns `None` if the intersection
    /// has non-positive width or height.
    pub(crate) fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.x_max().min(other.x_max());
        let y1 = self.y_max().min(other.y_max());
        if x1 - x0 > EPS_GEOM && y1 - y0 > EPS_GEOM {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        } else {
            None
        }
    }

    /// True if the open interiors overlap with positive area. Rectangles
    /// that only share an edge are *not* overlapping by this definition.
    pub(crate) fn overlaps(&self, other: &Rect) -> bool {
        self.intersect(other).map(|r| r.area() > EPS_GEOM).unwrap_or(false)
    }

    /// Axis-aligned bounding box of `self` and `other`.
    pub(crate) fn union_bbox(&self, other: &Rect) -> Rect {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.x_max().max(other.x_max());
        let y1 = self.y_max().max(other.y_max());
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Strict containment test used by the S6 collision self-check:
    /// `rect.x + eps < x < rect.x + width - eps` and symmetrically on `y`.
    pub(crate) fn strictly_contains(&self, x: f64, y: f64) -> bool {
        x > self.x + EPS_GEOM
            && x < self.x_max() - EPS_GEOM
            && y > self.y + EPS_GEOM
            && y < self.y_max() - EPS_GEOM
    }
}
