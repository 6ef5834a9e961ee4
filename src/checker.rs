//! Tolerance-based checking of user-entered quiz answers
//!
//! Never fails: malformed input is simply an incorrect answer. Parse failures
//! become NaN so that comparisons come out false while token counts are
//! still honored.

use crate::Point;
use serde::{Deserialize, Serialize};

/// Absolute tolerance for accepting near-correct numeric answers
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// The answer a quiz question expects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum ExpectedAnswer {
    /// Root set, order-independent, entered as comma-separated values
    Roots(Vec<f64>),
    /// Vertex entered as "x, y"
    Vertex(Point),
    /// Single numeric answer
    Scalar(f64),
    /// Answer compared as the canonical rendering of the parsed number
    Text(String),
}

impl ExpectedAnswer {
    /// Input-field placeholder shown for this answer shape
    pub fn placeholder(&self) -> &'static str {
        match self {
            ExpectedAnswer::Roots(_) => "Enter roots separated by comma, e.g.: 2, -2",
            ExpectedAnswer::Vertex(_) => "Enter vertex as x,y, e.g.: 3, -1",
            ExpectedAnswer::Scalar(_) | ExpectedAnswer::Text(_) => "Enter your answer",
        }
    }
}

/// Check a raw user answer against the expected value with the default
/// tolerance of 0.1.
pub fn check(expected: &ExpectedAnswer, raw: &str) -> bool {
    check_with_tolerance(expected, raw, DEFAULT_TOLERANCE)
}

/// Check a raw user answer against the expected value.
///
/// Roots accept either order and require matching cardinality; vertices need
/// exactly two components; scalars a single float. Comparison is strict
/// `|user − expected| < tolerance`.
pub fn check_with_tolerance(expected: &ExpectedAnswer, raw: &str, tolerance: f64) -> bool {
    match expected {
        ExpectedAnswer::Roots(roots) => {
            let user = parse_list(raw);
            if user.len() != roots.len() {
                return false;
            }
            let mut user = user;
            let mut expected = roots.clone();
            user.sort_by(f64::total_cmp);
            expected.sort_by(f64::total_cmp);
            user.iter()
                .zip(expected.iter())
                .all(|(u, e)| (u - e).abs() < tolerance)
        }
        ExpectedAnswer::Vertex(vertex) => {
            let user = parse_list(raw);
            user.len() == 2
                && (user[0] - vertex.x).abs() < tolerance
                && (user[1] - vertex.y).abs() < tolerance
        }
        ExpectedAnswer::Scalar(value) => match raw.trim().parse::<f64>() {
            Ok(user) => (user - value).abs() < tolerance,
            Err(_) => false,
        },
        ExpectedAnswer::Text(text) => {
            // Gated on a numeric parse; the parsed value's canonical
            // rendering is compared, so "4.0" and "04" both match "4"
            match raw.trim().parse::<f64>() {
                Ok(value) => value.to_string() == *text,
                Err(_) => false,
            }
        }
    }
}

/// Comma-separated floats; unparseable tokens become NaN so the token count
/// is preserved ("2," is two tokens, one of them bad).
fn parse_list(raw: &str) -> Vec<f64> {
    raw.split(',')
        .map(|token| token.trim().parse::<f64>().unwrap_or(f64::NAN))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_either_order() {
        let expected = ExpectedAnswer::Roots(vec![2.0, -2.0]);
        assert!(check(&expected, "2, -2"));
        assert!(check(&expected, "-2,2"));
    }

    #[test]
    fn roots_cardinality_mismatch_is_wrong() {
        let expected = ExpectedAnswer::Roots(vec![2.0, -2.0]);
        assert!(!check(&expected, "2"));
        assert!(!check(&expected, "2, -2, 0"));
    }

    #[test]
    fn roots_within_tolerance() {
        let expected = ExpectedAnswer::Roots(vec![3.0, 0.5]);
        assert!(check(&expected, "0.55, 2.95"));
        assert!(!check(&expected, "0.65, 3.0"));
    }

    #[test]
    fn roots_garbage_token_is_wrong_not_error() {
        let expected = ExpectedAnswer::Roots(vec![2.0, -2.0]);
        assert!(!check(&expected, "2, banana"));
        assert!(!check(&expected, "2,"));
        assert!(!check(&expected, ""));
    }

    #[test]
    fn vertex_both_components_checked() {
        let expected = ExpectedAnswer::Vertex(Point::new(3.0, -1.0));
        assert!(check(&expected, "3, -1"));
        assert!(check(&expected, "3.05,-0.95"));
        assert!(!check(&expected, "3.2,-1"));
        assert!(!check(&expected, "3"));
        assert!(!check(&expected, "3,-1,0"));
    }

    #[test]
    fn scalar_tolerance_and_malformed() {
        let expected = ExpectedAnswer::Scalar(4.0);
        assert!(check(&expected, "4"));
        assert!(check(&expected, " 4.05 "));
        assert!(!check(&expected, "4.2"));
        assert!(!check(&expected, "four"));
    }

    #[test]
    fn text_accepts_equivalent_numeric_spellings() {
        let expected = ExpectedAnswer::Text("4".to_string());
        assert!(check(&expected, "4"));
        assert!(check(&expected, "4.0"));
        assert!(check(&expected, " 04 "));
        assert!(!check(&expected, "4.2"));
        assert!(!check(&expected, "x"));
    }

    #[test]
    fn custom_tolerance() {
        let expected = ExpectedAnswer::Scalar(1.0);
        assert!(check_with_tolerance(&expected, "1.4", 0.5));
        assert!(!check_with_tolerance(&expected, "1.5", 0.5)); // strict <
    }
}
