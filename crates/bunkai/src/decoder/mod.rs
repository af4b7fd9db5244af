//! decoder module
pub mod raw_decoder;

/// 再エクスポート
pub use raw_decoder::{DecodeMode, RawDecoder, decode};
