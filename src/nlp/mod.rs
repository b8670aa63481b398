//! Opaque NLP utilities: grammatical tagging and text embeddings

pub mod embeddings;
pub mod tagger;

pub use embeddings::{Embedder, EmbeddingEngine};
pub use tagger::{LexiconTagger, PosCategory, TaggedToken, Tagger};
