//! Rectangle and margin primitives
//!
//! All layout quantities are expressed with these two types. Pixel
//! rectangles use a top-left origin with y growing downward; normalized
//! rectangles are fractions of the figure with a bottom-left origin.

use serde::{Deserialize, Serialize};

/// A rectangle in layout coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The unit square, used as the default outer position
    pub const UNIT: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };

    /// Create a new rectangle
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Get the right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Get the center X coordinate
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Get the center Y coordinate
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// True when the rectangle covers no area
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Shrink by different amounts on each side.
    ///
    /// Width and height are clamped at zero.
    pub fn inset_sides(&self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            x: self.x + left,
            y: self.y + top,
            width: (self.width - left - right).max(0.0),
            height: (self.height - top - bottom).max(0.0),
        }
    }

    /// Grow by different amounts on each side
    pub fn outset_sides(&self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            x: self.x - left,
            y: self.y - top,
            width: self.width + left + right,
            height: self.height + top + bottom,
        }
    }

    /// Scale width and height by `factor`, keeping the center fixed.
    ///
    /// Negative factors are treated as zero.
    pub fn scaled_about_center(&self, factor: f64) -> Self {
        let factor = factor.max(0.0);
        let width = self.width * factor;
        let height = self.height * factor;
        Self {
            x: self.x + (self.width - width) / 2.0,
            y: self.y + (self.height - height) / 2.0,
            width,
            height,
        }
    }

    /// Whether `other` lies entirely within this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Insets from each side of a rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margin {
    /// Create a new margin
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Same inset on every side
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// The rectangle left over after removing this margin from `rect`
    pub fn area(&self, rect: &Rect) -> Rect {
        rect.inset_sides(self.top, self.right, self.bottom, self.left)
    }

    /// `rect` grown outward by this margin
    pub fn expand(&self, rect: &Rect) -> Rect {
        rect.outset_sides(self.top, self.right, self.bottom, self.left)
    }

    /// Sum of the left and right insets
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Largest absolute inset on any side
    pub fn max_side(&self) -> f64 {
        self.left
            .abs()
            .max(self.right.abs())
            .max(self.top.abs())
            .max(self.bottom.abs())
    }

    /// True when every side is within `tolerance` of zero
    pub fn is_zero(&self, tolerance: f64) -> bool {
        self.max_side() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_and_center() {
        let rect = Rect::new(10.0, 20.0, 100.0, 80.0);

        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 100.0);
        assert_eq!(rect.center_x(), 60.0);
        assert_eq!(rect.center_y(), 60.0);
    }

    #[test]
    fn test_inset_sides_clamps_to_zero() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inset = rect.inset_sides(8.0, 8.0, 8.0, 8.0);

        assert_eq!(inset.x, 8.0);
        assert_eq!(inset.y, 8.0);
        assert_eq!(inset.width, 0.0);
        assert_eq!(inset.height, 0.0);
        assert!(inset.is_empty());
    }

    #[test]
    fn test_margin_area() {
        let margin = Margin::new(1.0, 2.0, 3.0, 4.0);
        let area = margin.area(&Rect::new(0.0, 0.0, 100.0, 50.0));

        assert_eq!(area, Rect::new(1.0, 3.0, 97.0, 43.0));
    }

    #[test]
    fn test_margin_expand_is_outward() {
        let margin = Margin::uniform(5.0);
        let grown = margin.expand(&Rect::new(10.0, 10.0, 20.0, 20.0));

        assert_eq!(grown, Rect::new(5.0, 5.0, 30.0, 30.0));
        assert!(grown.contains_rect(&Rect::new(10.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn test_scaled_about_center() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let half = rect.scaled_about_center(0.5);

        assert_eq!(half, Rect::new(25.0, 12.5, 50.0, 25.0));
        assert_eq!(rect.scaled_about_center(-1.0).width, 0.0);
    }

    #[test]
    fn test_margin_is_zero() {
        assert!(Margin::default().is_zero(0.0));
        assert!(Margin::new(1e-12, 0.0, 0.0, -1e-12).is_zero(1e-9));
        assert!(!Margin::new(0.0, 0.0, 0.5, 0.0).is_zero(1e-9));
        assert_eq!(Margin::new(1.0, 2.0, 3.0, 4.0).horizontal(), 3.0);
        assert_eq!(Margin::new(1.0, 2.0, 3.0, 4.0).vertical(), 7.0);
    }
}
