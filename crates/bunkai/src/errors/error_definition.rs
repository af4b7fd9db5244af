//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// 設定（BunkaiConfig / エンジンオプション）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// 未知のエンジンオプションキー
  #[error("不明なオプションです: key={key}")]
  UnknownOption {
    /// 指定されたキー
    key: String,
  },

  /// オプション値が解釈できない
  #[error("オプション値が不正です: key={key}, value={value}, expected={expected}")]
  InvalidOptionValue {
    /// オプションキー
    key: String,
    /// 指定された値
    value: String,
    /// 受け付ける値の説明
    expected: &'static str,
  },

  /// engine.max_grouping_len が許容範囲外
  #[error("engine.max_grouping_len は {max} 以下である必要があります: actual={actual}")]
  InvalidMaxGroupingLen {
    /// 許容される最大値
    max: usize,
    /// 実際に指定された値
    actual: usize,
  },

  /// dictionary.path が存在するファイルでない
  #[error("dictionary.path がファイルではありません: path={path:?}")]
  InvalidDictionaryPath {
    /// 不正なパス
    path: PathBuf,
  },

  /// dictionary.cache_dir が「存在するディレクトリ」でない（ファイルである等）
  #[error("dictionary.cache_dir がディレクトリではありません: path={path:?}")]
  InvalidDictionaryCacheDir {
    /// 不正なパス
    path: PathBuf,
  },

  /// dictionary.cache_dir の作成に失敗
  #[error("dictionary.cache_dir の作成に失敗しました: path={path:?}, error={source}")]
  DictionaryCacheDirCreationFailed {
    /// 作成しようとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// JSON 設定の読み込み失敗
  #[error("設定 JSON の解析に失敗しました: {0}")]
  Json(Arc<serde_json::Error>),
}

/// 辞書関連のエラー
/// Vibrato では mecab, ipadic, unidic 等の辞書を使用可能
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// キャッシュディレクトリーが見つからない
  #[error("辞書キャッシュディレクトリーが見つかりません")]
  CacheDirNotFound,

  /// キャッシュディレクトリーの作成失敗
  #[error("辞書キャッシュディレクトリーの作成に失敗しました: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// 指定された辞書が見つからない
  #[error("指定された辞書が見つかりません: {0}")]
  DictionaryNotFound(PathBuf),

  /// vibrato-rkyv による辞書のロード失敗
  #[error("vibrato-rkyv 辞書ロードエラー: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv のプリセット辞書のダウンロード失敗
  #[error("vibrato-rkyv プリセット辞書ダウンロード失敗: {0}")]
  PresetDictDownloadFailed(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// 形態素解析エンジン（外部コンポーネント）のエラー
///
/// - `Init`: エンジンの構築に失敗。そのインスタンスは使用不能で、再初期化が必要
/// - `Parse`: 1文の解析に失敗。呼び出し単位で回復可能
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum EngineError {
  /// エンジンの初期化失敗
  #[error("形態素解析エンジンの初期化に失敗しました: {reason}")]
  Init {
    /// 失敗の理由
    reason: String,
    /// 元となったエラー
    #[source]
    source: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
  },

  /// テキストの解析失敗
  #[error("テキストの解析に失敗しました: {reason}")]
  Parse {
    /// 失敗の理由
    reason: String,
  },
}

impl EngineError {
  /// 元エラーを伴わない初期化エラーを生成する
  pub fn init(reason: impl Into<String>) -> Self {
    Self::Init {
      reason: reason.into(),
      source: None,
    }
  }

  /// 元エラーを伴う初期化エラーを生成する
  pub fn init_with<E>(reason: impl Into<String>, source: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Init {
      reason: reason.into(),
      source: Some(Arc::new(source)),
    }
  }

  /// 解析エラーを生成する
  pub fn parse(reason: impl Into<String>) -> Self {
    Self::Parse {
      reason: reason.into(),
    }
  }
}

impl From<DictionaryError> for EngineError {
  fn from(err: DictionaryError) -> Self {
    Self::init_with("辞書を準備できません", err)
  }
}

impl From<ConfigError> for EngineError {
  fn from(err: ConfigError) -> Self {
    Self::init_with("エンジン設定が不正です", err)
  }
}

/// 解析結果（MeCab 形式テキスト）のデコードエラー
///
/// エンジン出力が想定形式から外れている場合に返す。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
  /// 要素数 0 の行
  #[error("行 {row} が空です")]
  EmptyRow {
    /// 0 始まりの行番号
    row: usize,
  },

  /// フィールドグループに必要な要素数が足りない
  #[error("行 {row} のフィールドが不足しています: group={group}, required={required}, actual={actual}")]
  MissingFields {
    /// 0 始まりの行番号
    row: usize,
    /// 不足しているフィールドグループ名
    group: &'static str,
    /// 必要な要素数（表層形を含む）
    required: usize,
    /// 実際の要素数
    actual: usize,
  },

  /// 終端行（タブを含まない行）の後にさらに内容が続いている（strict モードのみ）
  #[error("{line} 行目で終端行の後に内容が続いています: {content:?}")]
  UnexpectedTerminator {
    /// 1 始まりの行番号（早すぎる終端行の位置）
    line: usize,
    /// 終端行として扱われた行の内容
    content: String,
  },

  /// 終端行が見つからないまま出力が終わった（strict モードのみ）
  #[error("終端行がありません: {rows} 行を読み込んだ時点で出力が終わっています")]
  MissingTerminator {
    /// 読み込んだトークン行の数
    rows: usize,
  },
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `AnalyzerResult<T>` = `Result<T, AnalyzerError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum AnalyzerError {
  /// 辞書関連エラー
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// エンジン関連エラー
  #[error(transparent)]
  Engine(#[from] EngineError),

  /// デコード関連エラー
  #[error(transparent)]
  Decode(#[from] DecodeError),

  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// bunkai クレートの標準 Result 型エイリアス
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
