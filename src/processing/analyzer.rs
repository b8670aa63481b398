//! Analysis engine combining the exact-match and semantic scorers

use crate::config::{Config, ScoringConfig};
use crate::error::Result;
use crate::nlp::embeddings::{Embedder, EmbeddingEngine};
use crate::nlp::tagger::{LexiconTagger, Tagger};
use crate::output::report::{MatchReport, ReportMetadata};
use crate::processing::keywords::extract_keywords;
use crate::processing::normalizer::normalize;
use crate::processing::scoring::{keyword_score, round1, semantic_score};
use chrono::Utc;
use log::debug;
use std::time::Instant;

/// Holds the long-lived tagger and embedding model and runs the scoring
/// pipeline. Both resources are read-only after construction; the engine
/// can be shared across analyses, while each run owns its own texts,
/// keyword sets, and report.
pub struct AnalysisEngine {
    tagger: Box<dyn Tagger>,
    embedder: Box<dyn Embedder>,
    weights: ScoringConfig,
    model_name: String,
}

impl AnalysisEngine {
    pub fn new(
        tagger: Box<dyn Tagger>,
        embedder: Box<dyn Embedder>,
        config: &Config,
    ) -> Self {
        Self {
            tagger,
            embedder,
            weights: config.scoring.clone(),
            model_name: config.models.embedding_model.clone(),
        }
    }

    /// Build the engine with the default tagger and the configured
    /// Model2Vec embedding model
    pub fn from_config(config: &Config) -> Result<Self> {
        let embedder = EmbeddingEngine::from_config(config)?;
        Ok(Self::new(
            Box::new(LexiconTagger::new()),
            Box::new(embedder),
            config,
        ))
    }

    /// Run the full pipeline: normalize, extract keywords, score both
    /// ways, blend. Any failure aborts the run; no partial report is
    /// produced.
    pub fn analyze(&self, resume_text: &str, jd_text: &str) -> Result<MatchReport> {
        let start_time = Instant::now();

        // 1. Normalize both documents
        let clean_resume = normalize(resume_text);
        let clean_jd = normalize(jd_text);

        // 2. Keyword sets from lower-cased text; the ignore list and
        //    category checks assume lower case
        let resume_keywords = extract_keywords(self.tagger.as_ref(), &clean_resume.to_lowercase())?;
        let jd_keywords = extract_keywords(self.tagger.as_ref(), &clean_jd.to_lowercase())?;

        debug!(
            "Extracted {} resume keywords, {} JD keywords",
            resume_keywords.len(),
            jd_keywords.len()
        );

        // 3. Exact-match score with matched/missing breakdown
        let keyword_result = keyword_score(&resume_keywords, &jd_keywords);

        // 4. Semantic score on the normalized (not lower-cased) texts
        let semantic = semantic_score(self.embedder.as_ref(), &clean_resume, &clean_jd)?;

        // 5. Blend un-rounded sub-scores, then round the result; the
        //    sub-scores are rounded separately for the report
        let final_score = round1(
            keyword_result.score * self.weights.keyword_weight
                + semantic * self.weights.semantic_weight,
        );

        Ok(MatchReport {
            final_score,
            keyword_score: round1(keyword_result.score),
            semantic_score: round1(semantic),
            matched_keywords: keyword_result.matched.into_iter().collect(),
            missing_keywords: keyword_result.missing.into_iter().collect(),
            resume_keyword_count: resume_keywords.len(),
            jd_keyword_count: jd_keywords.len(),
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                embedding_model: self.model_name.clone(),
                processing_time_ms: start_time.elapsed().as_millis() as u64,
            },
        })
    }
}
