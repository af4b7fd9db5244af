//! MeCab-compatible engine backed by vibrato-rkyv

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::Arc;

use tracing::{debug, info};
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;
use vibrato_rkyv::tokenizer::worker::Worker;

use super::{EOS, MorphEngine};
use crate::config::{BunkaiConfig, EngineConfig};
use crate::dictionary::DictionaryManager;
use crate::errors::EngineError;

/// Longest sentence (in chars) the vibrato lattice can hold.
pub const MAX_SENTENCE_CHARS: usize = 0xFFFE;

/// Analyzer engine holding one vibrato worker (lattice + scratch buffers).
///
/// The worker is reset for every sentence, so repeated calls with the same text
/// produce the same output.
pub struct VibratoEngine {
  worker: Worker,
}

impl VibratoEngine {
  /// Builds an engine from MeCab-style `key -> value` options.
  ///
  /// See [`crate::config::option_keys`] for the recognised keys.
  ///
  /// # Errors
  /// [`EngineError::Init`] when an option is invalid or the dictionary cannot be loaded.
  pub fn initialize(options: &BTreeMap<String, String>) -> Result<Self, EngineError> {
    let config = BunkaiConfig::from_options(options)?;
    Self::from_config(&config)
  }

  /// Builds an engine from a full configuration (dictionary + engine sections).
  pub fn from_config(config: &BunkaiConfig) -> Result<Self, EngineError> {
    config.validate()?;
    let manager = DictionaryManager::from_config(&config.dictionary)?;
    let dict = manager.load()?;
    Self::from_shared_dictionary(dict, &config.engine)
  }

  /// Builds an engine around an already loaded dictionary.
  ///
  /// Engines built from the same `Arc<Dictionary>` share it read-only.
  pub fn from_shared_dictionary(
    dict: Arc<Dictionary>,
    config: &EngineConfig,
  ) -> Result<Self, EngineError> {
    let tokenizer = VibratoImpl::from_shared_dictionary(dict)
      .ignore_space(config.ignore_space)
      .map_err(|e| EngineError::init_with("ignore-space を設定できません", e))?
      .max_grouping_len(config.max_grouping_len);

    info!(
      ignore_space = config.ignore_space,
      max_grouping_len = config.max_grouping_len,
      "Analyzer engine initialized"
    );

    Ok(Self {
      worker: tokenizer.new_worker(),
    })
  }
}

impl MorphEngine for VibratoEngine {
  fn analyze(&mut self, text: &str) -> Result<String, EngineError> {
    check_sentence(text)?;

    self.worker.reset_sentence(text);
    self.worker.tokenize();

    debug!(input_text = %text, tokens = self.worker.num_tokens(), "Sentence analyzed");

    let mut output = String::new();
    for token in self.worker.token_iter() {
      write_token_line(&mut output, token.surface(), token.feature());
    }
    write_eos(&mut output);
    Ok(output)
  }
}

impl Drop for VibratoEngine {
  fn drop(&mut self) {
    // worker（ラティス）と辞書の参照はここで解放される
    info!("Analyzer engine released");
  }
}

/// Rejects input the engine cannot analyze or the line format cannot carry.
fn check_sentence(text: &str) -> Result<(), EngineError> {
  if let Some(c) = text.chars().find(|c| matches!(c, '\t' | '\n' | '\r' | '\0')) {
    return Err(EngineError::parse(format!(
      "入力テキストに使用できない文字が含まれています: {:?}",
      c
    )));
  }

  let len = text.chars().count();
  if len > MAX_SENTENCE_CHARS {
    return Err(EngineError::parse(format!(
      "入力テキストが長すぎます: {} 文字（最大: {} 文字）",
      len, MAX_SENTENCE_CHARS
    )));
  }

  Ok(())
}

/// Appends one `surface\tfeature` line.
pub fn write_token_line(out: &mut String, surface: &str, feature: &str) {
  // String への書き込みは失敗しない
  let _ = writeln!(out, "{surface}\t{feature}");
}

/// Appends the `EOS` terminator line.
pub fn write_eos(out: &mut String) {
  out.push_str(EOS);
  out.push('\n');
}
