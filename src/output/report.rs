//! Match report structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final output of one analysis run. Immutable once created; consumed only
/// by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Weighted blend of keyword and semantic scores (0-100, one decimal)
    pub final_score: f32,

    /// Exact keyword overlap score (0-100, one decimal)
    pub keyword_score: f32,

    /// Embedding cosine similarity score (0-100, one decimal)
    pub semantic_score: f32,

    /// Job-description keywords found in the resume, sorted
    pub matched_keywords: Vec<String>,

    /// Job-description keywords absent from the resume, sorted
    pub missing_keywords: Vec<String>,

    /// Size of the resume keyword set
    pub resume_keyword_count: usize,

    /// Size of the job-description keyword set
    pub jd_keyword_count: usize,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub embedding_model: String,
    pub processing_time_ms: u64,
}

impl MatchReport {
    /// One-line verdict for the console summary
    pub fn verdict(&self) -> &'static str {
        match self.final_score {
            s if s >= 80.0 => "Strong match",
            s if s >= 60.0 => "Good match",
            s if s >= 40.0 => "Partial match",
            _ => "Weak match",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report(final_score: f32) -> MatchReport {
        MatchReport {
            final_score,
            keyword_score: 80.0,
            semantic_score: 50.0,
            matched_keywords: vec!["python".to_string()],
            missing_keywords: vec!["kubernetes".to_string()],
            resume_keyword_count: 5,
            jd_keyword_count: 4,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                embedding_model: "test-model".to_string(),
                processing_time_ms: 12,
            },
        }
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(sample_report(85.0).verdict(), "Strong match");
        assert_eq!(sample_report(68.0).verdict(), "Good match");
        assert_eq!(sample_report(45.0).verdict(), "Partial match");
        assert_eq!(sample_report(10.0).verdict(), "Weak match");
    }

    #[test]
    fn test_json_roundtrip() {
        let report = sample_report(68.0);
        let json = serde_json::to_string(&report).unwrap();
        let parsed: MatchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.final_score, report.final_score);
        assert_eq!(parsed.matched_keywords, report.matched_keywords);
    }
}
