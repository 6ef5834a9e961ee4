//! Analyzer module - quadratic analysis engine and viewport fitting

pub mod engine;
pub mod viewport;

pub use engine::QuadraticAnalyzer;
pub use viewport::ViewportTransform;
