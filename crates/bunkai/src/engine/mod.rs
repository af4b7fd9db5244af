//! engine module
//!
//! The analyzer engine is an external component: it takes a sentence and returns its
//! segmentation as a MeCab-format text blob. [`MorphEngine`] is the seam between that
//! component and the decoding pipeline, so the pipeline can run against a real
//! dictionary-backed engine or a canned blob in tests.
//!
//! Lifecycle: resources are acquired when the engine value is constructed and released
//! when it is dropped.

pub mod vibrato_engine;

use crate::errors::EngineError;

/// Terminator line written after the last token of a sentence.
pub const EOS: &str = "EOS";

/// Morphological analyzer producing MeCab-format output.
///
/// Implementations are not reentrant: `analyze` takes `&mut self`, so one handle
/// serves one caller at a time. Use separate handles for concurrent work.
pub trait MorphEngine {
  /// Analyzes one sentence and returns the raw output blob.
  ///
  /// # Errors
  /// [`EngineError::Parse`] when the engine cannot analyze `text`.
  fn analyze(&mut self, text: &str) -> Result<String, EngineError>;
}

impl<E: MorphEngine + ?Sized> MorphEngine for Box<E> {
  fn analyze(&mut self, text: &str) -> Result<String, EngineError> {
    (**self).analyze(text)
  }
}

/// 再エクスポート
pub use vibrato_engine::VibratoEngine;
