//! models module
pub mod model_definition;

pub use model_definition::{FeatureField, NUL, RawRow, Token, raw_feature};
