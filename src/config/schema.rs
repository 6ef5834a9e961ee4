//! Config schema and deserialization

use crate::analyzer::engine::{DEFAULT_HALF_RANGE, DEFAULT_SAMPLE_COUNT};
use crate::checker::DEFAULT_TOLERANCE;
use crate::quiz::ROUND_SIZE;
use crate::Difficulty;
use serde::Deserialize;

fn default_half_range() -> f64 {
    DEFAULT_HALF_RANGE
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_width() -> f64 {
    600.0
}

fn default_height() -> f64 {
    400.0
}

fn default_round_size() -> usize {
    ROUND_SIZE
}

/// Root config structure for .algebraiderc.json
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Half-width of the curve sampling window around the vertex
    #[serde(default = "default_half_range")]
    pub half_range: f64,

    /// Number of sampling steps across the window
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,

    /// Absolute tolerance for accepting quiz answers
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// SVG viewport width in pixels
    #[serde(default = "default_width")]
    pub width: f64,

    /// SVG viewport height in pixels
    #[serde(default = "default_height")]
    pub height: f64,

    /// Starting quiz difficulty
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Questions per quiz round
    #[serde(default = "default_round_size")]
    pub questions_per_round: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            half_range: DEFAULT_HALF_RANGE,
            sample_count: DEFAULT_SAMPLE_COUNT,
            tolerance: DEFAULT_TOLERANCE,
            width: 600.0,
            height: 400.0,
            difficulty: Difficulty::default(),
            questions_per_round: ROUND_SIZE,
        }
    }
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(
        mut self,
        half_range: Option<f64>,
        sample_count: Option<usize>,
        width: Option<f64>,
        height: Option<f64>,
        difficulty: Option<Difficulty>,
    ) -> Self {
        if let Some(v) = half_range {
            self.half_range = v;
        }
        if let Some(v) = sample_count {
            self.sample_count = v;
        }
        if let Some(v) = width {
            self.width = v;
        }
        if let Some(v) = height {
            self.height = v;
        }
        if let Some(v) = difficulty {
            self.difficulty = v;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_constants() {
        let config = Config::default();
        assert_eq!(config.half_range, 10.0);
        assert_eq!(config.sample_count, 100);
        assert_eq!(config.tolerance, 0.1);
        assert_eq!(config.questions_per_round, 3);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{ "halfRange": 5, "difficulty": "hard" }"#)
            .expect("valid config");
        assert_eq!(config.half_range, 5.0);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.sample_count, 100);
        assert_eq!(config.width, 600.0);
    }

    #[test]
    fn cli_overrides_win() {
        let config = Config::default().merge_with_cli(
            Some(4.0),
            Some(50),
            None,
            None,
            Some(Difficulty::Medium),
        );
        assert_eq!(config.half_range, 4.0);
        assert_eq!(config.sample_count, 50);
        assert_eq!(config.height, 400.0);
        assert_eq!(config.difficulty, Difficulty::Medium);
    }
}
