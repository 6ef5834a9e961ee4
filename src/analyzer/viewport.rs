//! Linear mapping from function space to a pixel box

use crate::Point;

/// Fallback span when the data extent collapses to zero (or is non-finite)
const DEGENERATE_SPAN: f64 = 20.0;
/// Padding applied on each axis as a fraction of the data extent
const PADDING_RATIO: f64 = 0.1;

/// Maps math coordinates onto a width × height pixel box with padding.
/// Y is flipped so the mathematical axis points up while pixels grow down.
#[derive(Debug, Clone, Copy)]
pub struct ViewportTransform {
    min_x: f64,
    min_y: f64,
    x_padding: f64,
    y_padding: f64,
    x_scale: f64,
    y_scale: f64,
    height: f64,
}

impl ViewportTransform {
    /// Fit the sampled curve plus the root markers into the pixel box.
    ///
    /// The x-extent includes the roots so root markers are never clipped;
    /// the y-extent comes from the sampled points only.
    pub fn fit(points: &[Point], roots: &[f64], width: f64, height: f64) -> Self {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        for x in points.iter().map(|p| p.x).chain(roots.iter().copied()) {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
        }

        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for y in points.iter().map(|p| p.y) {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        let x_range = span_or_fallback(max_x - min_x);
        let y_range = span_or_fallback(max_y - min_y);
        if !min_x.is_finite() {
            min_x = -x_range / 2.0;
        }
        if !min_y.is_finite() {
            min_y = -y_range / 2.0;
        }

        let x_padding = x_range * PADDING_RATIO;
        let y_padding = y_range * PADDING_RATIO;

        Self {
            min_x,
            min_y,
            x_padding,
            y_padding,
            x_scale: width / (x_range + 2.0 * x_padding),
            y_scale: height / (y_range + 2.0 * y_padding),
            height,
        }
    }

    /// Math x to pixel x
    pub fn transform_x(&self, x: f64) -> f64 {
        (x - self.min_x + self.x_padding) * self.x_scale
    }

    /// Math y to pixel y (flipped: larger y is closer to the top of the box)
    pub fn transform_y(&self, y: f64) -> f64 {
        self.height - (y - self.min_y + self.y_padding) * self.y_scale
    }
}

/// Zero-width and non-finite extents both fall back to a fixed span so the
/// scale divisions below stay well-defined.
fn span_or_fallback(range: f64) -> f64 {
    if range == 0.0 || !range.is_finite() {
        DEGENERATE_SPAN
    } else {
        range
    }
}
