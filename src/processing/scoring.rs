//! Exact-match and semantic scorers

use crate::error::{AtsError, Result};
use crate::nlp::embeddings::Embedder;
use std::collections::{BTreeSet, HashSet};

/// Result of exact keyword matching. Sets are ordered so presentation and
/// serialization stay deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordScore {
    pub score: f32,
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

/// Percentage of job-description keywords present in the resume keyword
/// set. Asymmetric by design: the JD side is the denominator. An empty JD
/// keyword set scores 0 (defined policy, not an error).
pub fn keyword_score(
    resume_keywords: &HashSet<String>,
    jd_keywords: &HashSet<String>,
) -> KeywordScore {
    let matched: BTreeSet<String> = jd_keywords
        .intersection(resume_keywords)
        .cloned()
        .collect();
    let missing: BTreeSet<String> = jd_keywords.difference(resume_keywords).cloned().collect();

    let score = if jd_keywords.is_empty() {
        0.0
    } else {
        100.0 * matched.len() as f32 / jd_keywords.len() as f32
    };

    KeywordScore {
        score,
        matched,
        missing,
    }
}

/// Cosine similarity between two embedding vectors
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(AtsError::Embedding(format!(
            "Embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm_a * norm_b))
    }
}

/// Cosine similarity between whole-text embeddings, scaled to 0-100.
/// Returned un-rounded; rounding happens at the report boundary.
///
/// An empty normalized text short-circuits to 0.0 instead of relying on
/// whatever vector the model produces for empty input.
pub fn semantic_score(embedder: &dyn Embedder, text_a: &str, text_b: &str) -> Result<f32> {
    if text_a.trim().is_empty() || text_b.trim().is_empty() {
        return Ok(0.0);
    }

    let embedding_a = embedder.embed(text_a)?;
    let embedding_b = embedder.embed(text_b)?;

    let similarity = cosine_similarity(&embedding_a, &embedding_b)?;
    Ok(similarity * 100.0)
}

/// Round to one decimal place for the report
pub fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    struct FixedEmbedder {
        a: Vec<f32>,
        b: Vec<f32>,
    }

    impl Embedder for FixedEmbedder {
        fn embed(&self, text: &str) -> Result<Vec<f32>> {
            if text.contains('a') {
                Ok(self.a.clone())
            } else {
                Ok(self.b.clone())
            }
        }
    }

    #[test]
    fn test_full_overlap_scores_100() {
        let resume = set(&["python", "developer", "cloud"]);
        let jd = set(&["python", "cloud"]);
        let result = keyword_score(&resume, &jd);

        assert_eq!(result.score, 100.0);
        assert!(result.missing.is_empty());
        assert_eq!(result.matched.len(), 2);
    }

    #[test]
    fn test_partial_overlap() {
        let resume = set(&["python"]);
        let jd = set(&["python", "kubernetes", "terraform", "docker"]);
        let result = keyword_score(&resume, &jd);

        assert_eq!(result.score, 25.0);
        assert!(result.missing.contains("kubernetes"));
        assert!(result.missing.contains("terraform"));
    }

    #[test]
    fn test_empty_jd_keywords() {
        let resume = set(&["python", "rust"]);
        let jd = HashSet::new();
        let result = keyword_score(&resume, &jd);

        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_score_bounds() {
        let cases = [
            (set(&[]), set(&["a", "b"])),
            (set(&["a"]), set(&["a", "b"])),
            (set(&["a", "b", "c"]), set(&["a"])),
            (set(&["x"]), set(&["y"])),
        ];
        for (resume, jd) in cases {
            let result = keyword_score(&resume, &jd);
            assert!(result.score >= 0.0 && result.score <= 100.0);
        }
    }

    #[test]
    fn test_asymmetry() {
        // Different denominators on each side must produce different scores
        let small = set(&["python"]);
        let large = set(&["python", "kubernetes", "terraform", "docker"]);

        let forward = keyword_score(&small, &large);
        let reverse = keyword_score(&large, &small);

        assert_eq!(forward.score, 25.0);
        assert_eq!(reverse.score, 100.0);
        assert_ne!(forward.score, reverse.score);
    }

    #[test]
    fn test_set_laws() {
        let resume = set(&["python", "docker", "linux"]);
        let jd = set(&["python", "kubernetes", "docker", "terraform"]);
        let result = keyword_score(&resume, &jd);

        // matched ∪ missing == jd
        let union: BTreeSet<String> = result.matched.union(&result.missing).cloned().collect();
        let jd_sorted: BTreeSet<String> = jd.iter().cloned().collect();
        assert_eq!(union, jd_sorted);

        // matched ∩ missing == ∅
        assert!(result.matched.intersection(&result.missing).next().is_none());

        // matched ⊆ resume
        assert!(result.matched.iter().all(|k| resume.contains(k)));
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.5, 0.3, -0.2, 0.8];
        let similarity = cosine_similarity(&v, &v).unwrap();
        assert!((similarity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_cosine_zero_norm() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 2.0];
        assert_eq!(cosine_similarity(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_cosine_dimension_mismatch() {
        let a = vec![1.0, 2.0];
        let b = vec![1.0, 2.0, 3.0];
        assert!(cosine_similarity(&a, &b).is_err());
    }

    #[test]
    fn test_semantic_score_scaled() {
        let embedder = FixedEmbedder {
            a: vec![1.0, 0.0],
            b: vec![1.0, 0.0],
        };
        let score = semantic_score(&embedder, "alpha", "other").unwrap();
        assert!((score - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_semantic_score_empty_text_is_zero() {
        let embedder = FixedEmbedder {
            a: vec![1.0, 0.0],
            b: vec![1.0, 0.0],
        };
        assert_eq!(semantic_score(&embedder, "", "other").unwrap(), 0.0);
        assert_eq!(semantic_score(&embedder, "alpha", "  ").unwrap(), 0.0);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(68.04), 68.0);
        assert_eq!(round1(68.06), 68.1);
        assert_eq!(round1(100.0), 100.0);
    }
}
