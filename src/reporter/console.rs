//! Console reporter with colored output

use crate::progress::ProgressReport;
use crate::quiz::QuizSession;
use crate::{Analysis, RootClass};
use chrono::{DateTime, Utc};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a full analysis
    pub fn report(&self, analysis: &Analysis) {
        println!();
        println!("{}", analysis.coefficients.to_string().bold());
        println!();

        println!("   Discriminant: {}", fmt_value(analysis.discriminant));
        match analysis.root_class {
            RootClass::TwoReal => {
                println!(
                    "   Roots: {} ({} and {})",
                    analysis.root_class,
                    fmt_value(analysis.roots[0]),
                    fmt_value(analysis.roots[1])
                );
            }
            RootClass::OneRepeated => {
                println!(
                    "   Roots: {} (x = {})",
                    analysis.root_class,
                    fmt_value(analysis.roots[0])
                );
            }
            RootClass::NoneReal => {
                println!(
                    "   Roots: {} (the parabola does not cross the x-axis)",
                    analysis.root_class
                );
            }
        }

        if analysis.has_parabola() {
            println!(
                "   Vertex: ({}, {}) - {}",
                fmt_value(analysis.vertex.x),
                fmt_value(analysis.vertex.y),
                if analysis.opens_upward() {
                    "minimum point, opens upward"
                } else {
                    "maximum point, opens downward"
                }
            );
        } else {
            println!("   Vertex: undefined (a = 0 gives no parabola)");
        }
        println!("   y-intercept: {}", fmt_value(analysis.y_intercept()));

        if self.verbose {
            println!();
            println!(
                "   {} {} points sampled around the vertex",
                "↳".dimmed(),
                analysis.curve_points.len()
            );
        }
        println!();
    }

    /// Report in quiet mode (one line)
    pub fn report_quiet(&self, analysis: &Analysis) {
        let roots = if analysis.roots.is_empty() {
            "none".to_string()
        } else {
            analysis
                .roots
                .iter()
                .map(|r| fmt_value(*r))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let vertex = if analysis.has_parabola() {
            format!(
                "({}, {})",
                fmt_value(analysis.vertex.x),
                fmt_value(analysis.vertex.y)
            )
        } else {
            "undefined".to_string()
        };
        println!(
            "discriminant={} roots={} vertex={}",
            fmt_value(analysis.discriminant),
            roots,
            vertex
        );
    }

    /// Show the current quiz question with its prompt and input hint
    pub fn report_question(&self, session: &QuizSession) {
        let Some(question) = session.current_question() else {
            return;
        };
        println!();
        println!(
            "{}",
            format!(
                "Question {} of {} [{}]",
                session.question_number(),
                session.total_questions(),
                session.difficulty()
            )
            .bold()
        );
        println!("   {}", question.prompt);
        println!("   {}", question.equation.to_string().bold());
        println!("   ({})", question.expected.placeholder().dimmed());
    }

    /// Feedback after an answer is checked
    pub fn report_answer(&self, correct: bool, session: &QuizSession) {
        if correct {
            println!("   {} Correct! Great job, you got it right!", "✓".green());
        } else {
            println!("   {} Not quite right. Check the hint for help.", "✗".red());
            if let Some(hint) = session.visible_hint() {
                println!("   {} {}", "Hint:".yellow().bold(), hint);
            }
        }
    }

    /// Round summary with score bar and difficulty adjustment notice
    pub fn report_quiz_summary(&self, session: &QuizSession) {
        let total = session.total_questions();
        let score = session.score();
        println!();
        println!("{}", "Quiz Completed!".bold());
        println!(
            "   You scored {} out of {}",
            score.to_string().bold(),
            total
        );
        if total > 0 {
            let pct = ((score * 100) / total) as u8;
            println!("   {}", self.create_score_bar(pct));
        }

        let message = if score == total && total > 0 {
            "Perfect score! You've mastered these concepts!"
        } else if total > 0 && score * 2 >= total {
            "Good job! Keep practicing to improve further."
        } else {
            "Keep practicing! You'll get better with time."
        };
        println!("   {}", message);

        let next = session.recommended_difficulty();
        if next > session.difficulty() {
            println!(
                "   {} You've mastered this level. Moving you to {} difficulty!",
                "↑".green(),
                next.to_string().bold()
            );
        } else if next < session.difficulty() {
            println!(
                "   {} Let's practice with some {} problems next.",
                "↓".yellow(),
                next.to_string().bold()
            );
        }
        println!();
    }

    /// Learning progress overview
    pub fn report_progress(&self, report: &ProgressReport, now: DateTime<Utc>) {
        println!();
        println!("{}", "Your Learning Progress".bold());
        println!(
            "   Topics mastered:  {}/{}",
            report.topics_mastered(),
            report.topics.len()
        );
        println!("   Questions solved: {}", report.total_questions());
        println!("   Overall accuracy: {}%", report.overall_accuracy());

        if let Some(recommended) = report.recommended_topic() {
            println!();
            println!(
                "   {} {} ({})",
                "Recommended next topic:".bold(),
                recommended.topic,
                recommended.mastery
            );
        }

        println!();
        for topic in &report.topics {
            let bar = self.create_mini_bar(topic.accuracy, 100);
            let accuracy = format!("{:>3}%", topic.accuracy);
            let colored_accuracy = if topic.accuracy >= 90 {
                accuracy.green()
            } else if topic.accuracy >= 70 {
                accuracy.yellow()
            } else {
                accuracy.red()
            };
            println!(
                "   {} {} {} [{}]",
                bar,
                colored_accuracy,
                topic.topic.to_string().bold(),
                topic.mastery
            );
            println!(
                "      {} questions, last practiced {}",
                topic.questions_attempted,
                topic.last_practiced_label(now).dimmed()
            );
        }
        println!();
    }

    fn create_score_bar(&self, pct: u8) -> String {
        let filled = (pct as usize * 20) / 100;
        let empty = 20 - filled;
        let bar = format!("[{}{}] {:>3}%", "█".repeat(filled), "░".repeat(empty), pct);

        if self.use_colors {
            if pct >= 80 {
                bar.green().to_string()
            } else if pct >= 50 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }

    fn create_mini_bar(&self, value: u8, max: u8) -> String {
        // accuracy is deserializable above 100, so the fill must clamp
        let filled = ((value as usize * 10) / max as usize).min(10);
        let empty = 10 - filled;
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(empty))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Two decimal places, with non-finite values spelled out
fn fmt_value(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        "undefined".to_string()
    }
}
