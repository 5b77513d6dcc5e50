use std::sync::Arc;

use crate::embedding::TextEmbedder;
use crate::engine::ScreeningEngine;

/// Shared handler state: the screening engine plus a little metadata for
/// the readiness probe.
pub struct HandlerState<E: TextEmbedder + 'static> {
    pub engine: Arc<ScreeningEngine<E>>,

    /// Whether the injected embedder runs in stub mode (surfaced on
    /// `/ready` so operators can tell a model-less deployment apart).
    pub stub_embedder: bool,
}

impl<E: TextEmbedder + 'static> Clone for HandlerState<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            stub_embedder: self.stub_embedder,
        }
    }
}

impl<E: TextEmbedder + 'static> HandlerState<E> {
    pub fn new(engine: Arc<ScreeningEngine<E>>, stub_embedder: bool) -> Self {
        Self {
            engine,
            stub_embedder,
        }
    }
}
