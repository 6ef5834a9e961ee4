//! Parses equation text ("2x^2 - 7x + 3", "f(x) = x² - 4", "1, 0, -4")
//! into [`Coefficients`]. This is the CLI input boundary; the analysis engine
//! itself never parses text.

use crate::Coefficients;
use once_cell::sync::Lazy;
use regex::Regex;

/// Errors from equation text parsing
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EquationParseError {
    #[error("empty equation")]
    Empty,
    #[error("unsupported term '{0}' (only ax², bx and constants are allowed)")]
    UnsupportedTerm(String),
    #[error("invalid number '{0}'")]
    BadNumber(String),
}

static QUADRATIC_TERM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9.]*)x\^2$").expect("static regex"));
static LINEAR_TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9.]*)x$").expect("static regex"));
static CONSTANT_TERM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9.]+)$").expect("static regex"));

/// Parse an equation string into coefficients.
///
/// Accepts polynomial text (`"x^2 - 4"`, `"-2x² + 4x + 1"`, with optional
/// `f(x) =` / `y =` prefix and `= 0` suffix) or a bare comma triple
/// (`"1, 0, -4"`). Missing terms default to zero, so linear input like
/// `"2x + 3"` yields a = 0 — the engine propagates that degeneracy as
/// non-finite values rather than erroring here. Terms above degree two are
/// rejected.
pub fn parse_equation(input: &str) -> Result<Coefficients, EquationParseError> {
    let normalized = normalize(input);
    if normalized.is_empty() {
        return Err(EquationParseError::Empty);
    }

    // Bare "a, b, c" triple (no variable present)
    if !normalized.contains('x') {
        if let Some(coeffs) = parse_triple(&normalized)? {
            return Ok(coeffs);
        }
    }

    let mut a = 0.0;
    let mut b = 0.0;
    let mut c = 0.0;

    for (sign, term) in split_terms(&normalized) {
        if term.is_empty() {
            return Err(EquationParseError::UnsupportedTerm(input.trim().to_string()));
        }
        if let Some(caps) = QUADRATIC_TERM.captures(&term) {
            a += sign * parse_coefficient(&caps[1], &term)?;
        } else if let Some(caps) = LINEAR_TERM.captures(&term) {
            b += sign * parse_coefficient(&caps[1], &term)?;
        } else if let Some(caps) = CONSTANT_TERM.captures(&term) {
            c += sign * parse_coefficient(&caps[1], &term)?;
        } else {
            return Err(EquationParseError::UnsupportedTerm(term));
        }
    }

    Ok(Coefficients::new(a, b, c))
}

/// Lowercase, strip whitespace and cosmetic prefixes/suffixes, fold unicode
/// forms onto their ASCII spellings.
fn normalize(input: &str) -> String {
    let mut s: String = input
        .to_ascii_lowercase()
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect();
    s = s.replace('²', "^2").replace('−', "-").replace('*', "");
    for prefix in ["f(x)=", "y="] {
        if let Some(rest) = s.strip_prefix(prefix) {
            s = rest.to_string();
        }
    }
    if let Some(rest) = s.strip_suffix("=0") {
        s = rest.to_string();
    }
    s
}

/// Split "-2x^2+4x-1" into signed terms: [(-1, "2x^2"), (1, "4x"), (-1, "1")]
fn split_terms(s: &str) -> Vec<(f64, String)> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut sign = 1.0;

    for (i, ch) in s.chars().enumerate() {
        match ch {
            '+' | '-' if i == 0 => sign = if ch == '-' { -1.0 } else { 1.0 },
            '+' | '-' => {
                terms.push((sign, std::mem::take(&mut current)));
                sign = if ch == '-' { -1.0 } else { 1.0 };
            }
            _ => current.push(ch),
        }
    }
    terms.push((sign, current));
    terms
}

/// Empty coefficient text means an implicit 1 ("x^2" is 1x^2)
fn parse_coefficient(text: &str, term: &str) -> Result<f64, EquationParseError> {
    if text.is_empty() {
        return Ok(1.0);
    }
    text.parse::<f64>()
        .map_err(|_| EquationParseError::BadNumber(term.to_string()))
}

/// "1,0,-4" → Coefficients; None when the comma count doesn't fit
fn parse_triple(s: &str) -> Result<Option<Coefficients>, EquationParseError> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Ok(None);
    }
    let mut values = [0.0; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|_| EquationParseError::BadNumber((*part).to_string()))?;
    }
    Ok(Some(Coefficients::new(values[0], values[1], values[2])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_forms() {
        assert_eq!(parse_equation("x^2 - 4").unwrap(), Coefficients::new(1.0, 0.0, -4.0));
        assert_eq!(
            parse_equation("2x^2 - 7x + 3").unwrap(),
            Coefficients::new(2.0, -7.0, 3.0)
        );
        assert_eq!(
            parse_equation("-2x^2 + 4x + 1").unwrap(),
            Coefficients::new(-2.0, 4.0, 1.0)
        );
    }

    #[test]
    fn prefixes_suffixes_and_unicode() {
        assert_eq!(
            parse_equation("f(x) = x² - 4").unwrap(),
            Coefficients::new(1.0, 0.0, -4.0)
        );
        assert_eq!(
            parse_equation("y = 1.5x^2 + 0.5x").unwrap(),
            Coefficients::new(1.5, 0.5, 0.0)
        );
        assert_eq!(
            parse_equation("x^2 - 4x + 4 = 0").unwrap(),
            Coefficients::new(1.0, -4.0, 4.0)
        );
    }

    #[test]
    fn implicit_unit_coefficients() {
        assert_eq!(parse_equation("x^2 + x").unwrap(), Coefficients::new(1.0, 1.0, 0.0));
        assert_eq!(parse_equation("-x^2 - x").unwrap(), Coefficients::new(-1.0, -1.0, 0.0));
    }

    #[test]
    fn comma_triple() {
        assert_eq!(parse_equation("1, 0, -4").unwrap(), Coefficients::new(1.0, 0.0, -4.0));
        assert_eq!(
            parse_equation("0.5,-3,2").unwrap(),
            Coefficients::new(0.5, -3.0, 2.0)
        );
    }

    #[test]
    fn linear_input_yields_a_zero() {
        // Not rejected here: the engine propagates the degeneracy
        assert_eq!(parse_equation("2x + 3").unwrap(), Coefficients::new(0.0, 2.0, 3.0));
    }

    #[test]
    fn repeated_terms_accumulate() {
        assert_eq!(
            parse_equation("x^2 + x^2 - 3 + 1").unwrap(),
            Coefficients::new(2.0, 0.0, -2.0)
        );
    }

    #[test]
    fn rejects_higher_degree_and_garbage() {
        assert!(matches!(
            parse_equation("x^3 - 1"),
            Err(EquationParseError::UnsupportedTerm(_))
        ));
        assert!(matches!(
            parse_equation("hello"),
            Err(EquationParseError::UnsupportedTerm(_))
        ));
        assert_eq!(parse_equation("   "), Err(EquationParseError::Empty));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(matches!(
            parse_equation("1..5x^2"),
            Err(EquationParseError::BadNumber(_))
        ));
        assert!(matches!(
            parse_equation("1, 0"),
            Err(EquationParseError::UnsupportedTerm(_)) | Err(EquationParseError::BadNumber(_))
        ));
    }
}
