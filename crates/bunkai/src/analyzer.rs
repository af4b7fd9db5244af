// crates/bunkai/src/analyzer.rs

//! Analyzer: bunkai クレートの統合ファサード。
//!
//! - 形態素解析エンジン (MorphEngine) - 排他的に所有する
//! - RawDecoder - 解析結果テキストを行ごとのフィールド列へ分解
//! - TokenMapper - フィールド列を Token へ変換
//!
//! 呼び出し側はこの構造体だけを意識すればよい。

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::BunkaiConfig;
use crate::decoder::{DecodeMode, RawDecoder};
use crate::engine::{MorphEngine, VibratoEngine};
use crate::errors::AnalyzerResult;
use crate::mapper::map_tokens;
use crate::models::{RawRow, Token};

/// 形態素解析ハンドル。
///
/// エンジンを排他的に所有し、`parse` / `parse_raw` は `&mut self` を取る。
/// エンジンのリソースは `Analyzer` の破棄時（エラー経路を含む）に必ず解放される。
pub struct Analyzer<E: MorphEngine = VibratoEngine> {
  engine: E,
  decoder: RawDecoder,
}

impl Analyzer<VibratoEngine> {
  /// 初期化（設定検証 + 辞書ロード + エンジン構築）
  ///
  /// # エラー
  /// - 設定が不正
  /// - 辞書ロード失敗
  pub fn init(config: &BunkaiConfig) -> AnalyzerResult<Self> {
    let engine = VibratoEngine::from_config(config)?;
    info!(decode_mode = %config.decode_mode(), "Analyzer initialized");
    Ok(Self::with_engine(engine, config.decode_mode()))
  }

  /// MeCab 形式の `key -> value` オプションから初期化する。
  pub fn from_options(options: &BTreeMap<String, String>) -> AnalyzerResult<Self> {
    let config = BunkaiConfig::from_options(options)?;
    Self::init(&config)
  }
}

impl<E: MorphEngine> Analyzer<E> {
  /// 構築済みのエンジンから作成する。
  pub fn with_engine(engine: E, mode: DecodeMode) -> Self {
    Self {
      engine,
      decoder: RawDecoder::new(mode),
    }
  }

  /// デコードモードを返す。
  pub fn decode_mode(&self) -> DecodeMode {
    self.decoder.mode()
  }

  /// テキストを解析し、終端行を除いた行ごとのフィールド列を返す。
  ///
  /// # エラー
  /// - エンジンの解析失敗（そのまま伝播）
  /// - strict モードで終端行の後に内容が続いている場合
  pub fn parse_raw(&mut self, text: &str) -> AnalyzerResult<Vec<RawRow>> {
    let blob = self.engine.analyze(text)?;
    let rows = self.decoder.decode(&blob)?;
    debug!(rows = rows.len(), "parse_raw completed");
    Ok(rows)
  }

  /// テキストを解析し、Token 列を返す。
  ///
  /// 途中の行が不正な場合はエラーとなり、部分的な結果は返さない。
  pub fn parse(&mut self, text: &str) -> AnalyzerResult<Vec<Token>> {
    let rows = self.parse_raw(text)?;
    Ok(map_tokens(&rows)?)
  }

  /// ハンドルを明示的に解放する。
  ///
  /// `drop` と同じ効果を持つ。解放のタイミングを呼び出し側で明示したい場合に使う。
  pub fn release(self) {
    info!("Analyzer released");
    drop(self);
  }
}
