//! bunkai crate example
//!
//! Analyzes the sentences given on the command line (or a default one) and prints
//! the decoded tokens as JSON lines.
//!
//! ```bash
//! BUNKAI_PRESET=ipadic cargo run --example parse_sentence -- 吾輩は猫である
//! ```

use bunkai::config::BunkaiConfig;
use bunkai::logging::init_tracing;
use bunkai::models::{FeatureField, raw_feature};
use bunkai::Analyzer;

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
  let config = BunkaiConfig::from_env()?;
  init_tracing(config.log_level());

  let mut sentences: Vec<String> = std::env::args().skip(1).collect();
  if sentences.is_empty() {
    sentences.push("東京タワーは東京の観光名所です".to_string());
  }

  let mut analyzer = Analyzer::init(&config)?;

  for sentence in &sentences {
    println!("# {sentence}");

    for row in analyzer.parse_raw(sentence)? {
      let goshu = raw_feature(&row, FeatureField::Goshu).unwrap_or("-");
      println!("  {} ({} fields, goshu={goshu})", row[0], row.len());
    }

    for token in analyzer.parse(sentence)? {
      println!("{}", serde_json::to_string(&token)?);
    }
  }

  analyzer.release();
  Ok(())
}
