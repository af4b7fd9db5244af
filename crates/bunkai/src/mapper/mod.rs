//! mapper module
pub mod token_mapper;

/// 再エクスポート
pub use token_mapper::{map_row, map_tokens};
