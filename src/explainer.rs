//! Step-by-step lesson content for the quadratic explainer

use crate::Coefficients;
use serde::{Deserialize, Serialize};

/// One step of the guided lesson
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonStep {
    /// 1-based step number
    pub number: usize,
    pub title: String,
    /// Paragraphs and bullet lines, already ordered for display
    pub body: Vec<String>,
    /// Coefficients worth trying against this step's idea
    pub try_coefficients: Option<Coefficients>,
}

fn step(
    number: usize,
    title: &str,
    body: &[&str],
    try_coefficients: Option<Coefficients>,
) -> LessonStep {
    LessonStep {
        number,
        title: title.to_string(),
        body: body.iter().map(|line| line.to_string()).collect(),
        try_coefficients,
    }
}

/// The four lesson steps, in teaching order
pub fn lesson_steps() -> Vec<LessonStep> {
    vec![
        step(
            1,
            "The Basic Structure",
            &[
                "A quadratic equation has the form f(x) = ax² + bx + c, where:",
                "- a determines if the parabola opens up (a > 0) or down (a < 0)",
                "- b affects how the parabola is positioned horizontally",
                "- c is the y-intercept (where the parabola crosses the y-axis)",
                "Try adjusting the coefficients to see how each one affects the graph!",
            ],
            None,
        ),
        step(
            2,
            "Finding the Roots",
            &[
                "The roots (or x-intercepts) are where the parabola crosses the x-axis (where y = 0).",
                "We can find these by solving ax² + bx + c = 0 using the quadratic formula:",
                "    x = (-b ± √(b² - 4ac)) / (2a)",
                "The term b² - 4ac is called the discriminant:",
                "- If it's positive, there are two real roots",
                "- If it's zero, there is exactly one root (the parabola touches the x-axis)",
                "- If it's negative, there are no real roots (the parabola doesn't cross the x-axis)",
                "Try a = 1, b = 0, c = -4 to see a parabola with two roots at x = -2 and x = 2.",
            ],
            Some(Coefficients::new(1.0, 0.0, -4.0)),
        ),
        step(
            3,
            "The Vertex",
            &[
                "The vertex is the highest or lowest point of the parabola.",
                "Its x-coordinate comes from the formula:",
                "    x = -b / (2a)",
                "To find the y-coordinate, substitute this x-value back into the original equation.",
                "- If a > 0, the vertex is the minimum point",
                "- If a < 0, the vertex is the maximum point",
                "Try a = -1, b = 0, c = 4 to see a parabola with its vertex as a maximum point.",
            ],
            Some(Coefficients::new(-1.0, 0.0, 4.0)),
        ),
        step(
            4,
            "Applications",
            &[
                "Quadratic equations appear in many real-world scenarios:",
                "- Physics: the path of a projectile is a parabola",
                "- Economics: finding optimal price points",
                "- Engineering: building structures like arches",
                "- Optimization: finding maximum or minimum values",
                "If you throw a ball upward, its height is h(t) = -4.9t² + v₀t + h₀, \
                 where v₀ is the initial velocity and h₀ is the initial height.",
                "Now that you understand the basics, you're ready to try some practice problems!",
            ],
            None,
        ),
    ]
}
