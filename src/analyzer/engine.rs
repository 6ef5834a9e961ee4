//! Closed-form quadratic analysis: discriminant, roots, vertex, curve sampling

use crate::{Analysis, Coefficients, Point, RootClass};

/// Half-width of the sampling window around the vertex, in domain units
pub const DEFAULT_HALF_RANGE: f64 = 10.0;
/// Number of sampling steps across the full window
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Stateless analysis engine. Every call is a pure function of its inputs;
/// re-running on each coefficient change is O(sample_count) and cheap.
#[derive(Debug, Clone, Copy)]
pub struct QuadraticAnalyzer {
    half_range: f64,
    sample_count: usize,
}

impl QuadraticAnalyzer {
    /// Create an analyzer with the default sampling window (±10, 100 steps)
    pub fn new() -> Self {
        Self {
            half_range: DEFAULT_HALF_RANGE,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }

    /// Set the half-width of the sampling window
    pub fn with_half_range(mut self, half_range: f64) -> Self {
        self.half_range = half_range;
        self
    }

    /// Set the number of sampling steps
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Analyze f(x) = ax² + bx + c.
    ///
    /// Never fails: a == 0 is not rejected, the vertex and root formulas
    /// divide by zero and the result carries NaN/±∞ for the caller to detect
    /// via [`Analysis::has_parabola`].
    pub fn analyze(&self, coefficients: Coefficients) -> Analysis {
        let Coefficients { a, b, c } = coefficients;

        let discriminant = b * b - 4.0 * a * c;

        // Both roots are emitted even when they coincide at discriminant == 0
        let roots = if discriminant >= 0.0 {
            let sqrt_d = discriminant.sqrt();
            vec![(-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a)]
        } else {
            Vec::new()
        };

        // + 0.0 folds the b == 0 negative zero into plain zero
        let vertex_x = -b / (2.0 * a) + 0.0;
        let vertex = Point::new(vertex_x, coefficients.eval(vertex_x));

        Analysis {
            coefficients,
            discriminant,
            root_class: RootClass::from_discriminant(discriminant),
            roots,
            vertex,
            curve_points: self.sample_curve(coefficients, vertex_x),
        }
    }

    /// Sample the curve over [center − R, center + R] at step 2R/sample_count.
    /// Float accumulation may land the final point count at sample_count ± 1;
    /// that is accepted sampling behavior. A non-finite center (a == 0)
    /// yields no points; an ±∞ center must not enter the loop at all, since
    /// `-inf + step` stays `-inf` and the loop would never terminate.
    fn sample_curve(&self, coefficients: Coefficients, center: f64) -> Vec<Point> {
        if !center.is_finite() {
            return Vec::new();
        }
        let step = (2.0 * self.half_range) / self.sample_count as f64;
        let end = center + self.half_range;

        let mut points = Vec::with_capacity(self.sample_count + 2);
        let mut x = center - self.half_range;
        while x <= end {
            points.push(Point::new(x, coefficients.eval(x)));
            x += step;
        }
        points
    }
}

impl Default for QuadraticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
