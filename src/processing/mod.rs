//! Core scoring pipeline: normalization, keyword extraction, scoring

pub mod analyzer;
pub mod keywords;
pub mod normalizer;
pub mod scoring;

pub use analyzer::AnalysisEngine;
