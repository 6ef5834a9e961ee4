//! Mock learning-progress tracking
//!
//! There is no persistence (deliberately): the report starts from a fixed
//! sample dataset and can be updated in-memory from a finished quiz round.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How well a topic has been absorbed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mastery {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Mastery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mastery::Beginner => write!(f, "Beginner"),
            Mastery::Intermediate => write!(f, "Intermediate"),
            Mastery::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Per-topic progress record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicProgress {
    pub topic: String,
    /// Percentage of correct answers (0-100)
    pub accuracy: u8,
    pub questions_attempted: usize,
    pub last_practiced: DateTime<Utc>,
    pub mastery: Mastery,
}

impl TopicProgress {
    /// Human label for when the topic was last practiced
    pub fn last_practiced_label(&self, now: DateTime<Utc>) -> String {
        let days = (now.date_naive() - self.last_practiced.date_naive()).num_days();
        match days {
            d if d <= 0 => "Today".to_string(),
            1 => "Yesterday".to_string(),
            2..=13 => format!("{} days ago", days),
            _ => format!("{} weeks ago", days / 7),
        }
    }
}

/// Aggregated view over all tracked topics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub topics: Vec<TopicProgress>,
}

impl ProgressReport {
    pub fn new(topics: Vec<TopicProgress>) -> Self {
        Self { topics }
    }

    /// The fixed mock dataset the tutor ships with
    pub fn sample(now: DateTime<Utc>) -> Self {
        Self::new(vec![
            TopicProgress {
                topic: "Quadratic Equations".to_string(),
                accuracy: 85,
                questions_attempted: 12,
                last_practiced: now,
                mastery: Mastery::Intermediate,
            },
            TopicProgress {
                topic: "Linear Equations".to_string(),
                accuracy: 92,
                questions_attempted: 25,
                last_practiced: now - chrono::Duration::days(1),
                mastery: Mastery::Advanced,
            },
            TopicProgress {
                topic: "Factoring".to_string(),
                accuracy: 68,
                questions_attempted: 8,
                last_practiced: now - chrono::Duration::days(7),
                mastery: Mastery::Beginner,
            },
        ])
    }

    /// Count of topics at advanced mastery
    pub fn topics_mastered(&self) -> usize {
        self.topics
            .iter()
            .filter(|t| t.mastery == Mastery::Advanced)
            .count()
    }

    pub fn total_questions(&self) -> usize {
        self.topics.iter().map(|t| t.questions_attempted).sum()
    }

    /// Rounded mean accuracy across topics (0 when empty)
    pub fn overall_accuracy(&self) -> u8 {
        if self.topics.is_empty() {
            return 0;
        }
        let sum: u32 = self.topics.iter().map(|t| t.accuracy as u32).sum();
        ((sum as f64 / self.topics.len() as f64).round()) as u8
    }

    /// The topic most in need of practice: lowest mastery first, accuracy as
    /// the tie-break.
    pub fn recommended_topic(&self) -> Option<&TopicProgress> {
        self.topics
            .iter()
            .min_by(|a, b| a.mastery.cmp(&b.mastery).then(a.accuracy.cmp(&b.accuracy)))
    }

    /// Fold a finished quiz round into the named topic (in-memory only).
    /// Accuracy becomes the blended rate over all attempts so far.
    pub fn record_round(
        &mut self,
        topic: &str,
        correct: usize,
        attempts: usize,
        now: DateTime<Utc>,
    ) {
        if attempts == 0 {
            return;
        }
        let index = match self.topics.iter().position(|t| t.topic == topic) {
            Some(index) => index,
            None => {
                self.topics.push(TopicProgress {
                    topic: topic.to_string(),
                    accuracy: 0,
                    questions_attempted: 0,
                    last_practiced: now,
                    mastery: Mastery::Beginner,
                });
                self.topics.len() - 1
            }
        };
        let entry = &mut self.topics[index];

        let prior_correct =
            (entry.accuracy as f64 / 100.0 * entry.questions_attempted as f64).round() as usize;
        entry.questions_attempted += attempts;
        let blended = (prior_correct + correct) as f64 / entry.questions_attempted as f64;
        entry.accuracy = (blended * 100.0).round().min(100.0) as u8;
        entry.last_practiced = now;
        entry.mastery = match entry.accuracy {
            90..=100 => Mastery::Advanced,
            70..=89 => Mastery::Intermediate,
            _ => Mastery::Beginner,
        };
    }
}
