use super::*;

#[test]
fn test_stub_config() {
    let config = MiniLmConfig::stub();
    assert!(config.testing_stub);
    assert!(config.validate().is_ok());
}

#[test]
fn test_non_stub_requires_model_dir() {
    let config = MiniLmConfig::default();
    assert!(matches!(
        config.validate(),
        Err(EmbeddingError::InvalidConfig { .. })
    ));
}

#[test]
fn test_missing_model_dir_is_not_found() {
    let config = MiniLmConfig::new("/nonexistent/minilm");
    assert!(matches!(
        config.validate(),
        Err(EmbeddingError::ModelNotFound { .. })
    ));
}

#[test]
fn test_load_fails_without_model_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = MiniLmConfig::new(dir.path());
    // Directory exists but holds no weights/tokenizer.
    assert!(matches!(
        MiniLmEmbedder::load(config),
        Err(EmbeddingError::ModelNotFound { .. })
    ));
}

#[test]
fn test_config_derived_paths() {
    let config = MiniLmConfig::new("/models/minilm");
    assert_eq!(
        config.weights_path(),
        std::path::Path::new("/models/minilm/model.safetensors")
    );
    assert_eq!(
        config.model_config_path(),
        std::path::Path::new("/models/minilm/config.json")
    );
    assert_eq!(
        config.tokenizer_path(),
        std::path::Path::new("/models/minilm/tokenizer.json")
    );
}

#[test]
fn test_stub_embedder_loads() {
    let embedder = MiniLmEmbedder::load(MiniLmConfig::stub()).unwrap();
    assert!(embedder.is_stub());
    assert_eq!(embedder.embedding_dim(), MINILM_EMBEDDING_DIM);
}

#[test]
fn test_stub_embedding_shape_and_norm() {
    let embedder = MiniLmEmbedder::stub();
    let embedding = embedder.embed("Rust engineer with 5 years of experience").unwrap();

    assert_eq!(embedding.len(), MINILM_EMBEDDING_DIM);

    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() < 1e-4, "embedding not unit-norm: {}", norm);
}

#[test]
fn test_stub_embedding_deterministic() {
    let embedder = MiniLmEmbedder::stub();
    let a = embedder.embed("same input text").unwrap();
    let b = embedder.embed("same input text").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_stub_embedding_distinguishes_texts() {
    let embedder = MiniLmEmbedder::stub();
    let a = embedder.embed("backend engineer").unwrap();
    let b = embedder.embed("pastry chef").unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_empty_input_yields_sentinel() {
    let embedder = MiniLmEmbedder::stub();
    assert!(embedder.embed("").unwrap().is_empty());
    // Whitespace-only input is empty after cleanup.
    assert!(embedder.embed("\n\n  \n").unwrap().is_empty());
}

#[test]
fn test_newline_noise_does_not_change_embedding() {
    // Cleanup collapses newline runs before embedding, so layout-only
    // differences in extracted text do not perturb scores.
    let embedder = MiniLmEmbedder::stub();
    let a = embedder.embed("alpha\nbeta").unwrap();
    let b = embedder.embed("alpha\n\n\nbeta").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_trait_object_usable() {
    let embedder: Box<dyn TextEmbedder> = Box::new(MiniLmEmbedder::stub());
    let embedding = embedder.embed("via trait object").unwrap();
    assert_eq!(embedding.len(), embedder.embedding_dim());
}

#[test]
fn test_debug_format_reports_backend() {
    let embedder = MiniLmEmbedder::stub();
    let debug_str = format!("{:?}", embedder);
    assert!(debug_str.contains("MiniLmEmbedder"));
    assert!(debug_str.contains("Stub"));
}
