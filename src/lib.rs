//! AlgebraAide: quadratic equation tutor
//!
//! This library provides closed-form analysis of quadratic functions
//! f(x) = ax² + bx + c (discriminant, roots, vertex, sampled curve) plus the
//! supporting pieces of an interactive tutor: tolerance-based answer checking,
//! a quiz question bank with adaptive difficulty, a step-by-step explainer,
//! and a mock progress tracker.

pub mod analyzer;
pub mod checker;
pub mod config;
pub mod explainer;
pub mod parser;
pub mod progress;
pub mod quiz;
pub mod reporter;

use serde::{Deserialize, Serialize};

/// A point in function space (math coordinates, not pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite (a == 0 produces NaN/∞ vertices)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Coefficients of f(x) = ax² + bx + c
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluate f(x) = ax² + bx + c
    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }
}

impl std::fmt::Display for Coefficients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "f(x) = {}x²", self.a)?;
        if self.b >= 0.0 {
            write!(f, " + {}x", self.b)?;
        } else {
            write!(f, " - {}x", -self.b)?;
        }
        if self.c >= 0.0 {
            write!(f, " + {}", self.c)
        } else {
            write!(f, " - {}", -self.c)
        }
    }
}

/// Nature of the roots, determined by the sign of the discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootClass {
    /// discriminant > 0: two distinct real roots
    TwoReal,
    /// discriminant == 0: one repeated real root
    OneRepeated,
    /// discriminant < 0: the parabola never crosses the x-axis
    NoneReal,
}

impl RootClass {
    pub fn from_discriminant(discriminant: f64) -> Self {
        if discriminant > 0.0 {
            RootClass::TwoReal
        } else if discriminant == 0.0 {
            RootClass::OneRepeated
        } else {
            RootClass::NoneReal
        }
    }
}

impl std::fmt::Display for RootClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RootClass::TwoReal => write!(f, "two real roots"),
            RootClass::OneRepeated => write!(f, "one repeated root"),
            RootClass::NoneReal => write!(f, "no real roots"),
        }
    }
}

/// The main result of analyzing a quadratic function
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// The coefficients this analysis was computed from
    pub coefficients: Coefficients,
    /// b² − 4ac
    pub discriminant: f64,
    /// Root classification by discriminant sign
    pub root_class: RootClass,
    /// 0 or 2 entries; the repeated root at discriminant == 0 appears twice
    pub roots: Vec<f64>,
    /// Turning point at x = −b/2a (non-finite when a == 0)
    pub vertex: Point,
    /// Curve sampled over [vertex.x − R, vertex.x + R]
    pub curve_points: Vec<Point>,
}

impl Analysis {
    /// y-intercept: f(0) = c
    pub fn y_intercept(&self) -> f64 {
        self.coefficients.c
    }

    /// True when the parabola opens upward (a > 0)
    pub fn opens_upward(&self) -> bool {
        self.coefficients.a > 0.0
    }

    /// False when the degenerate a == 0 case produced a non-finite vertex.
    /// Callers must suppress vertex/curve rendering in that case.
    pub fn has_parabola(&self) -> bool {
        self.vertex.is_finite()
    }
}

/// Quiz difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Error for unrecognized difficulty names
#[derive(Debug, thiserror::Error)]
#[error("unknown difficulty '{0}' (expected easy, medium, or hard)")]
pub struct ParseDifficultyError(String);

impl Difficulty {
    /// Next level up, capped at hard
    pub fn step_up(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Hard => Difficulty::Hard,
        }
    }

    /// Next level down, floored at easy
    pub fn step_down(self) -> Self {
        match self {
            Difficulty::Hard => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Easy => Difficulty::Easy,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ParseDifficultyError(other.to_string())),
        }
    }
}

/// Public API: analyze a quadratic with default sampling parameters.
/// Programmatic consumers wanting custom sampling use
/// [`analyzer::QuadraticAnalyzer`] directly.
pub fn analyze(a: f64, b: f64, c: f64) -> Analysis {
    analyzer::QuadraticAnalyzer::new().analyze(Coefficients::new(a, b, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_display_signs() {
        assert_eq!(
            Coefficients::new(1.0, 0.0, -4.0).to_string(),
            "f(x) = 1x² + 0x - 4"
        );
        assert_eq!(
            Coefficients::new(2.0, -7.0, 3.0).to_string(),
            "f(x) = 2x² - 7x + 3"
        );
    }

    #[test]
    fn root_class_from_discriminant() {
        assert_eq!(RootClass::from_discriminant(16.0), RootClass::TwoReal);
        assert_eq!(RootClass::from_discriminant(0.0), RootClass::OneRepeated);
        assert_eq!(RootClass::from_discriminant(-3.0), RootClass::NoneReal);
    }

    #[test]
    fn difficulty_steps_clamp() {
        assert_eq!(Difficulty::Hard.step_up(), Difficulty::Hard);
        assert_eq!(Difficulty::Easy.step_down(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.step_up(), Difficulty::Medium);
        assert_eq!(Difficulty::Hard.step_down(), Difficulty::Medium);
    }

    #[test]
    fn difficulty_parse_rejects_unknown() {
        assert!("brutal".parse::<Difficulty>().is_err());
        assert_eq!(
            "  Medium ".parse::<Difficulty>().unwrap(),
            Difficulty::Medium
        );
    }
}
