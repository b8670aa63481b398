//! Text embeddings using Model2Vec
//!
//! The embedding model is loaded once per process and held read-only for
//! the process lifetime; the engine is handed explicitly to the analysis
//! pipeline rather than accessed as a global.

use crate::config::Config;
use crate::error::{AtsError, Result};
use log::info;
use model2vec_rs::model::StaticModel;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Maps a text string to a fixed-dimension vector capturing its meaning.
pub trait Embedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

pub struct EmbeddingEngine {
    model: StaticModel,
    model_name: String,
}

impl EmbeddingEngine {
    pub fn new(model_path: &Path, config: &Config) -> Result<Self> {
        let start_time = Instant::now();
        info!("Loading embedding model from: {}", model_path.display());

        let model = StaticModel::from_pretrained(
            model_path,
            None, // token
            None, // normalize
            None, // subfolder
        )
        .map_err(|e| AtsError::ModelLoading(format!("Failed to load embedding model: {}", e)))?;

        info!("Embedding model loaded in {:.2?}", start_time.elapsed());

        Ok(Self {
            model,
            model_name: config.models.embedding_model.clone(),
        })
    }

    /// Create from the default model in config
    pub fn from_config(config: &Config) -> Result<Self> {
        let model_path = Self::model_path(config);
        Self::new(&model_path, config)
    }

    /// Resolve the model location: a local directory under models_dir, or
    /// a HuggingFace model ID that model2vec fetches on first use.
    fn model_path(config: &Config) -> PathBuf {
        let model_name = &config.models.embedding_model;

        let local_path = config.models_dir().join(model_name);
        if local_path.exists() {
            return local_path;
        }

        PathBuf::from(model_name)
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

impl Embedder for EmbeddingEngine {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.model.encode_single(text))
    }
}
