//! Embedding collaborator.
//!
//! The engine treats embedding as an opaque capability behind
//! [`TextEmbedder`]; [`MiniLmEmbedder`] is the shipped implementation
//! (BERT encoder via candle, with a deterministic stub mode). The embedder
//! is constructed once at startup and injected; there is no ambient
//! global model handle.

mod config;
mod device;
mod error;
mod minilm;

#[cfg(test)]
mod tests;

pub use config::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig};
pub use error::EmbeddingError;
pub use minilm::MiniLmEmbedder;

/// Capability interface: text in, fixed-dimension vector out.
///
/// Implementations must return the empty-vector sentinel (not an error) for
/// input that carries no usable text, and must be deterministic for
/// identical inputs.
pub trait TextEmbedder: Send + Sync {
    /// Embeds a single document.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Output dimensionality of [`embed`](Self::embed).
    fn embedding_dim(&self) -> usize;
}

impl TextEmbedder for MiniLmEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        MiniLmEmbedder::embed(self, text)
    }

    fn embedding_dim(&self) -> usize {
        MiniLmEmbedder::embedding_dim(self)
    }
}
