//! Scoring and skill-gap analysis module

pub mod analyzer;
pub mod catalog;
pub mod extractor;
pub mod format_evaluator;
pub mod normalizer;
pub mod scorer;
