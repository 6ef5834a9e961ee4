//! Quiz engine: question selection, session scoring, adaptive difficulty

pub mod bank;

pub use bank::{built_in, Question};

use crate::checker;
use crate::Difficulty;
use rand::seq::SliceRandom;
use rand::Rng;

/// Questions per round
pub const ROUND_SIZE: usize = 3;

/// Success rate above which the next round steps up a difficulty level
const LEVEL_UP_RATE: f64 = 0.8;
/// Success rate below which the next round steps down
const LEVEL_DOWN_RATE: f64 = 0.4;

/// Pick a shuffled round of questions for a difficulty level.
///
/// Harder levels draw from a wider pool: easy questions stay in rotation at
/// medium, and everything is fair game at hard.
pub fn select_questions(
    bank: &[Question],
    difficulty: Difficulty,
    rng: &mut impl Rng,
) -> Vec<Question> {
    select_round(bank, difficulty, ROUND_SIZE, rng)
}

/// Like [`select_questions`] with a configurable round size
pub fn select_round(
    bank: &[Question],
    difficulty: Difficulty,
    round_size: usize,
    rng: &mut impl Rng,
) -> Vec<Question> {
    let mut pool: Vec<Question> = bank
        .iter()
        .filter(|q| q.difficulty <= difficulty)
        .cloned()
        .collect();
    pool.shuffle(rng);
    pool.truncate(round_size);
    pool
}

/// Outcome of submitting an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    /// Wrong answer; the session reveals the current hint
    Incorrect,
}

/// One round of questions with score, hint, and adaptation state.
///
/// The session holds no I/O; the CLI drives it and the reporter renders it.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    difficulty: Difficulty,
    current: usize,
    score: usize,
    attempts: usize,
    hint_index: usize,
    hint_visible: bool,
    completed: bool,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>, difficulty: Difficulty) -> Self {
        let completed = questions.is_empty();
        Self {
            questions,
            difficulty,
            current: 0,
            score: 0,
            attempts: 0,
            hint_index: 0,
            hint_visible: false,
            completed,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// 1-based number of the question currently being asked
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.completed {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    /// The hint currently revealed, if any
    pub fn visible_hint(&self) -> Option<&str> {
        if !self.hint_visible {
            return None;
        }
        self.current_question()
            .and_then(|q| q.hints.get(self.hint_index))
            .map(|h| h.as_str())
    }

    /// Reveal the first hint (or keep the current one visible)
    pub fn show_hint(&mut self) {
        self.hint_visible = true;
    }

    /// Advance to the next hint if one exists; returns the now-visible hint
    pub fn next_hint(&mut self) -> Option<&str> {
        self.hint_visible = true;
        if let Some(q) = self.questions.get(self.current) {
            if self.hint_index + 1 < q.hints.len() {
                self.hint_index += 1;
            }
        }
        self.visible_hint()
    }

    /// Check a raw answer against the current question. A wrong answer
    /// reveals the current hint, matching the tutor's behavior.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        if self.completed {
            return SubmitOutcome::Incorrect;
        }
        let Some(question) = self.questions.get(self.current) else {
            return SubmitOutcome::Incorrect;
        };
        self.attempts += 1;
        if checker::check(&question.expected, raw) {
            self.score += 1;
            SubmitOutcome::Correct
        } else {
            self.hint_visible = true;
            SubmitOutcome::Incorrect
        }
    }

    /// Move to the next question, or mark the round complete
    pub fn advance(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.hint_index = 0;
            self.hint_visible = false;
        } else {
            self.completed = true;
        }
    }

    /// Correct answers over total attempts (retries count against the rate)
    pub fn success_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.score as f64 / self.attempts as f64
        }
    }

    /// Difficulty for the next round: step up past 80% success, step down
    /// under 40%, otherwise stay put.
    pub fn recommended_difficulty(&self) -> Difficulty {
        let rate = self.success_rate();
        if rate > LEVEL_UP_RATE {
            self.difficulty.step_up()
        } else if rate < LEVEL_DOWN_RATE {
            self.difficulty.step_down()
        } else {
            self.difficulty
        }
    }
}
