//! Data Model Definition
use serde::{Deserialize, Serialize};

/// Placeholder stored in a [`Token`] field when the analyzer output has no value for it.
///
/// Same marker the analyzer itself writes for empty feature slots, so a token
/// always has all of its fields populated.
pub const NUL: &str = "*";

/// One decoded line of analyzer output.
///
/// - Full row: `[surface, feature1, ..., featureN]`
/// - Terminal/short row: `[line]` (no tab in the source line)
pub type RawRow = Vec<String>;

/// Feature slots of the UniDic schema emitted by the analyzer.
///
/// The raw row carries the surface form at position 0, so the row position of a
/// feature is its schema index + 1 (see [`FeatureField::row_index`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureField {
  /// 品詞大分類
  Pos1,
  /// 品詞中分類
  Pos2,
  /// 品詞小分類
  Pos3,
  /// 品詞細分類
  Pos4,
  /// 活用型
  CType,
  /// 活用形
  CForm,
  /// 語彙素読み
  LForm,
  /// 語彙素
  Lemma,
  /// 書字形出現形
  Orth,
  /// 書字形基本形
  OrthBase,
  /// 発音形出現形
  Pron,
  /// 発音形基本形
  PronBase,
  /// 語種
  Goshu,
  /// アクセント型
  AType,
  /// アクセント結合型
  AConType,
  /// アクセント修飾型
  AModType,
}

impl FeatureField {
  /// Every slot in schema order.
  pub const ALL: [FeatureField; 16] = [
    FeatureField::Pos1,
    FeatureField::Pos2,
    FeatureField::Pos3,
    FeatureField::Pos4,
    FeatureField::CType,
    FeatureField::CForm,
    FeatureField::LForm,
    FeatureField::Lemma,
    FeatureField::Orth,
    FeatureField::OrthBase,
    FeatureField::Pron,
    FeatureField::PronBase,
    FeatureField::Goshu,
    FeatureField::AType,
    FeatureField::AConType,
    FeatureField::AModType,
  ];

  /// 0-based index within the comma-separated feature string.
  pub fn feature_index(self) -> usize {
    self as usize
  }

  /// Position of this slot inside a [`RawRow`].
  pub fn row_index(self) -> usize {
    self.feature_index() + 1
  }

  /// Schema name (`pos1`, `cType`, ...).
  pub fn name(self) -> &'static str {
    match self {
      FeatureField::Pos1 => "pos1",
      FeatureField::Pos2 => "pos2",
      FeatureField::Pos3 => "pos3",
      FeatureField::Pos4 => "pos4",
      FeatureField::CType => "cType",
      FeatureField::CForm => "cForm",
      FeatureField::LForm => "lForm",
      FeatureField::Lemma => "lemma",
      FeatureField::Orth => "orth",
      FeatureField::OrthBase => "orthBase",
      FeatureField::Pron => "pron",
      FeatureField::PronBase => "pronBase",
      FeatureField::Goshu => "goshu",
      FeatureField::AType => "aType",
      FeatureField::AConType => "aConType",
      FeatureField::AModType => "aModType",
    }
  }
}

/// Reads a schema slot from a raw row, `None` if the row is too short.
pub fn raw_feature(row: &[String], field: FeatureField) -> Option<&str> {
  row.get(field.row_index()).map(String::as_str)
}

impl std::fmt::Display for FeatureField {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

/// Morphological token
///
/// Fixed-shape record: every field is always present, absent values hold [`NUL`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
  /// Surface form (string appearing in original text)
  pub surface_form: String,

  /// Part of Speech
  pub pos: String,

  /// POS detail 1
  pub pos_detail1: String,

  /// POS detail 2
  pub pos_detail2: String,

  /// POS detail 3 (never populated from analyzer output, always [`NUL`])
  pub pos_detail3: String,

  /// Conjugation type
  pub conjugated_type: String,

  /// Conjugation form
  pub conjugated_form: String,

  /// Basic (dictionary) form
  pub basic_form: String,

  /// Reading
  pub reading: String,

  /// Pronunciation
  pub pronunciation: String,
}

impl Token {
  /// Returns `true` if `value` is the absent-field placeholder.
  pub fn is_nul(value: &str) -> bool {
    value == NUL
  }

  /// Basic form, or `None` if the analyzer did not provide one.
  pub fn basic_form(&self) -> Option<&str> {
    Some(self.basic_form.as_str()).filter(|v| !Self::is_nul(v))
  }

  /// Pronunciation, or `None` if the analyzer did not provide one.
  pub fn pronunciation(&self) -> Option<&str> {
    Some(self.pronunciation.as_str()).filter(|v| !Self::is_nul(v))
  }
}
