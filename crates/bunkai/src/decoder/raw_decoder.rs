//! Decoder for MeCab-format analyzer output
//!
//! Output layout:
//! ```text
//! 猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ
//! が\t助詞,格助詞,一般,*,*,*,が,ガ,ガ
//! EOS
//!
//! ```
//! Each token line is `<surface>\t<feature>,<feature>,...`; the first line without a
//! tab is the terminator.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::DecodeError;
use crate::models::RawRow;

/// How the decoder treats a tab-free line that is followed by more content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
  /// Stop at the first tab-free line and silently ignore the rest.
  #[default]
  Lenient,
  /// Fail with [`DecodeError::UnexpectedTerminator`] if non-empty lines follow it,
  /// or with [`DecodeError::MissingTerminator`] if the output never reaches one.
  Strict,
}

impl DecodeMode {
  /// Mode name as used in configuration (`"lenient"` / `"strict"`).
  pub fn as_str(&self) -> &'static str {
    match self {
      DecodeMode::Lenient => "lenient",
      DecodeMode::Strict => "strict",
    }
  }
}

impl std::str::FromStr for DecodeMode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "lenient" => Ok(Self::Lenient),
      "strict" => Ok(Self::Strict),
      _ => Err(format!(
        "Unknown decode mode: {}. Valid values: lenient, strict",
        s
      )),
    }
  }
}

impl std::fmt::Display for DecodeMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Scanner state over the lines of one blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
  /// Still reading token lines
  Scanning,
  /// Terminator seen at the given 0-based line
  Terminated { at: usize },
}

/// Line decoder for analyzer output.
///
/// Stateless apart from its [`DecodeMode`]; one instance can decode any number of blobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawDecoder {
  mode: DecodeMode,
}

impl RawDecoder {
  /// Creates a decoder with the given mode.
  pub fn new(mode: DecodeMode) -> Self {
    Self { mode }
  }

  /// Returns the configured mode.
  pub fn mode(&self) -> DecodeMode {
    self.mode
  }

  /// Splits `blob` into rows and drops the trailing terminator row.
  ///
  /// # Errors
  /// Only in [`DecodeMode::Strict`]:
  /// - [`DecodeError::UnexpectedTerminator`] when a tab-free line is followed by a non-empty line
  /// - [`DecodeError::MissingTerminator`] when every line carries a tab
  ///
  /// Lenient decoding never fails.
  pub fn decode(&self, blob: &str) -> Result<Vec<RawRow>, DecodeError> {
    let mut rows: Vec<RawRow> = Vec::new();
    let mut state = ScanState::Scanning;

    for (idx, line) in blob.split('\n').enumerate() {
      match state {
        ScanState::Scanning => match line.split_once('\t') {
          Some((surface, features)) => {
            let mut row = Vec::with_capacity(features.matches(',').count() + 2);
            row.push(surface.to_string());
            row.extend(features.split(',').map(str::to_string));
            debug!(line = idx + 1, fields = row.len(), "Decoded row");
            rows.push(row);
          }
          None => {
            debug!(line = idx + 1, content = %line, "Terminator");
            rows.push(vec![line.to_string()]);
            state = ScanState::Terminated { at: idx };
          }
        },
        ScanState::Terminated { at } => {
          if line.is_empty() {
            continue;
          }
          match self.mode {
            DecodeMode::Strict => {
              return Err(DecodeError::UnexpectedTerminator {
                line: at + 1,
                content: rows.last().and_then(|r| r.first()).cloned().unwrap_or_default(),
              });
            }
            DecodeMode::Lenient => {
              warn!(
                terminator_line = at + 1,
                ignored_from = idx + 1,
                "Content after terminator ignored"
              );
              break;
            }
          }
        }
      }
    }

    if state == ScanState::Scanning {
      match self.mode {
        DecodeMode::Strict => return Err(DecodeError::MissingTerminator { rows: rows.len() }),
        DecodeMode::Lenient => warn!(rows = rows.len(), "No terminator; last token row dropped"),
      }
    }

    // 末尾の終端行を落とす（行が 0 件なら何もしない）
    rows.pop();
    Ok(rows)
  }
}

/// Decodes `blob` in lenient mode.
///
/// Lenient decoding is total, so this returns the rows directly.
pub fn decode(blob: &str) -> Vec<RawRow> {
  RawDecoder::new(DecodeMode::Lenient).decode(blob).unwrap_or_default()
}
