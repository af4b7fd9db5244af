//! Maps decoded rows into [`Token`] records

use tracing::debug;

use crate::errors::DecodeError;
use crate::models::{NUL, RawRow, Token};

// Row positions (position 0 is the surface form).
const POS: usize = 1;
const POS_DETAIL1: usize = 2;
const POS_DETAIL2: usize = 3;
const CONJUGATED_TYPE: usize = 4;
const CONJUGATED_FORM: usize = 5;
const BASIC_FORM: usize = 8;
// Read into both reading and pronunciation.
const PRONUNCIATION: usize = 10;

/// Field groups every row must carry: `(group name, minimum row length)`.
const REQUIRED_GROUPS: [(&str, usize); 2] = [
  ("part_of_speech", POS_DETAIL2 + 1),
  ("conjugation", CONJUGATED_FORM + 1),
];

/// Converts a single row.
///
/// `row_no` is only used for error reporting.
///
/// # Errors
/// - [`DecodeError::EmptyRow`] for a zero-length row
/// - [`DecodeError::MissingFields`] when a required field group is cut short
pub fn map_row(row_no: usize, row: &[String]) -> Result<Token, DecodeError> {
  if row.is_empty() {
    return Err(DecodeError::EmptyRow { row: row_no });
  }

  for (group, required) in REQUIRED_GROUPS {
    if row.len() < required {
      return Err(DecodeError::MissingFields {
        row: row_no,
        group,
        required,
        actual: row.len(),
      });
    }
  }

  let optional = |idx: usize| row.get(idx).map_or_else(|| NUL.to_string(), Clone::clone);
  let pronunciation = optional(PRONUNCIATION);

  Ok(Token {
    surface_form: row[0].clone(),
    pos: row[POS].clone(),
    pos_detail1: row[POS_DETAIL1].clone(),
    pos_detail2: row[POS_DETAIL2].clone(),
    pos_detail3: NUL.to_string(),
    conjugated_type: row[CONJUGATED_TYPE].clone(),
    conjugated_form: row[CONJUGATED_FORM].clone(),
    basic_form: optional(BASIC_FORM),
    reading: pronunciation.clone(),
    pronunciation,
  })
}

/// Converts every row in order. Fails on the first malformed row; no partial output.
pub fn map_tokens(rows: &[RawRow]) -> Result<Vec<Token>, DecodeError> {
  let tokens = rows
    .iter()
    .enumerate()
    .map(|(i, row)| map_row(i, row))
    .collect::<Result<Vec<_>, _>>()?;

  debug!(rows = rows.len(), "Mapped tokens");
  Ok(tokens)
}
