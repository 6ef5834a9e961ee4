//! Built-in question bank

use crate::checker::ExpectedAnswer;
use crate::{Coefficients, Difficulty, Point};
use serde::{Deserialize, Serialize};

/// A quiz question about one quadratic equation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub difficulty: Difficulty,
    /// Prompt shown above the equation
    pub prompt: String,
    /// The equation the question is about
    pub equation: Coefficients,
    /// What counts as correct
    pub expected: ExpectedAnswer,
    /// Hints revealed one at a time after a wrong answer
    pub hints: Vec<String>,
}

fn question(
    id: u32,
    difficulty: Difficulty,
    prompt: &str,
    equation: Coefficients,
    expected: ExpectedAnswer,
    hints: [&str; 3],
) -> Question {
    Question {
        id,
        difficulty,
        prompt: prompt.to_string(),
        equation,
        expected,
        hints: hints.iter().map(|h| h.to_string()).collect(),
    }
}

/// The full built-in bank, ordered easy to hard
pub fn built_in() -> Vec<Question> {
    vec![
        question(
            1,
            Difficulty::Easy,
            "Find the roots of the quadratic equation:",
            Coefficients::new(1.0, 0.0, -4.0),
            ExpectedAnswer::Roots(vec![2.0, -2.0]),
            [
                "When c is negative and b is 0, the roots are symmetric around the origin.",
                "Try using the quadratic formula: x = (-b ± √(b² - 4ac)) / (2a)",
                "Since b=0, the formula simplifies to x = ±√(-c/a)",
            ],
        ),
        question(
            2,
            Difficulty::Easy,
            "Find the vertex of the quadratic function:",
            Coefficients::new(1.0, -6.0, 8.0),
            ExpectedAnswer::Vertex(Point::new(3.0, -1.0)),
            [
                "The x-coordinate of the vertex is x = -b/(2a)",
                "After finding x, calculate y by substituting back into the equation",
                "For this equation, x = -(-6)/(2*1) = 3",
            ],
        ),
        question(
            3,
            Difficulty::Medium,
            "Find the roots of the quadratic equation:",
            Coefficients::new(2.0, -7.0, 3.0),
            ExpectedAnswer::Roots(vec![3.0, 0.5]),
            [
                "Use the quadratic formula: x = (-b ± √(b² - 4ac)) / (2a)",
                "Calculate the discriminant first: b² - 4ac = (-7)² - 4*2*3",
                "After finding the discriminant, substitute into the formula to find the two roots",
            ],
        ),
        question(
            4,
            Difficulty::Medium,
            "Find the y-intercept of the quadratic function:",
            Coefficients::new(-2.0, 4.0, 1.0),
            ExpectedAnswer::Scalar(1.0),
            [
                "The y-intercept is where the function crosses the y-axis (x = 0)",
                "To find the y-intercept, substitute x = 0 into the function",
                "For f(x) = ax² + bx + c, the y-intercept is simply c",
            ],
        ),
        question(
            5,
            Difficulty::Hard,
            "If f(x) = ax² + bx + c has roots at x = -3 and x = 2, and f(1) = 8, find the value of a:",
            Coefficients::new(2.0, 2.0, -12.0),
            ExpectedAnswer::Scalar(2.0),
            [
                "If the roots are -3 and 2, then f(x) = a(x+3)(x-2)",
                "Expand this expression to get f(x) = a(x² + x - 6)",
                "Since f(1) = 8, substitute x = 1 to get a(1 + 1 - 6) = 8, which gives a(−4) = 8",
            ],
        ),
        question(
            6,
            Difficulty::Hard,
            "For what value of k will the equation x² - kx + 4 = 0 have exactly one solution?",
            Coefficients::new(1.0, -4.0, 4.0),
            ExpectedAnswer::Scalar(4.0),
            [
                "A quadratic equation has exactly one solution when its discriminant equals zero",
                "For ax² + bx + c, the discriminant is b² - 4ac",
                "Substitute a=1, c=4 and set b² - 4ac = 0 to find k",
            ],
        ),
    ]
}
