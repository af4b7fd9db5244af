//! bunkai 形態素解析ライブラリー
//!
//! vibrato-rkyv による形態素解析結果（MeCab 形式テキスト）を型付きの Token 列へ変換する

/// 解析ファサード - Analyzer（parse / parse_raw / release）を提供
pub mod analyzer;

/// 設定モジュール - BunkaiConfig, LogLevel 等の設定構造体を定義
pub mod config;

/// デコーダーモジュール - MeCab 形式テキストを行ごとのフィールド列へ分解
pub mod decoder;

/// 辞書モジュール - 形態素解析用辞書の管理・ロード機能を提供
pub mod dictionary;

/// エンジンモジュール - 外部形態素解析エンジンのインターフェースと vibrato-rkyv 実装
pub mod engine;

/// エラーモジュール - AnalyzerError, AnalyzerResult 等のエラー型を定義
pub mod errors;

/// ログモジュール - tracing-subscriber の初期化
pub mod logging;

/// マッパーモジュール - フィールド列を Token へ変換
pub mod mapper;

/// データモデルモジュール - Token, RawRow 等のデータ構造を定義
pub mod models;

/// 再エクスポート
pub use analyzer::Analyzer;
pub use config::{BunkaiConfig, LogLevel};
pub use decoder::DecodeMode;
pub use engine::{MorphEngine, VibratoEngine};
pub use errors::{AnalyzerError, AnalyzerResult};
pub use models::{NUL, RawRow, Token};
