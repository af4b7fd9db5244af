//! crates/bunkai/tests/analyzer/analyzer_tests.rs
//!
//! End-to-end tests of the decode pipeline.
//! Drives `Analyzer` with an engine that replays fixed MeCab-format blobs, so no
//! dictionary is required.

use std::collections::HashMap;

use bunkai::decoder::{DecodeMode, RawDecoder};
use bunkai::engine::MorphEngine;
use bunkai::errors::{AnalyzerError, DecodeError, EngineError};
use bunkai::mapper::map_tokens;
use bunkai::{Analyzer, NUL, RawRow, Token};

/// Engine double returning a fixed blob per input text.
#[derive(Default)]
struct ScriptedEngine {
  outputs: HashMap<String, String>,
}

impl ScriptedEngine {
  fn with(mut self, text: &str, blob: &str) -> Self {
    self.outputs.insert(text.to_string(), blob.to_string());
    self
  }
}

impl MorphEngine for ScriptedEngine {
  fn analyze(&mut self, text: &str) -> Result<String, EngineError> {
    self
      .outputs
      .get(text)
      .cloned()
      .ok_or_else(|| EngineError::parse(format!("no script for {text:?}")))
  }
}

fn analyzer(text: &str, blob: &str) -> Analyzer<ScriptedEngine> {
  Analyzer::with_engine(ScriptedEngine::default().with(text, blob), DecodeMode::Lenient)
}

fn row(fields: &[&str]) -> RawRow {
  fields.iter().map(|s| s.to_string()).collect()
}

const CAT: &str = "猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ\nEOS\n";

/// UniDic-style output with the full 16-field feature string.
const UNIDIC_SENTENCE: &str = "\
東京\t名詞,固有名詞,地名,一般,*,*,トウキョウ,トウキョウ,東京,トーキョー,東京,トーキョー,固,*,*,*\n\
へ\t助詞,格助詞,*,*,*,*,ヘ,へ,へ,エ,へ,エ,和,*,*,*\n\
行く\t動詞,非自立可能,*,*,五段-カ行,終止形-一般,イク,行く,行く,イク,行く,イク,和,*,*,*\n\
EOS\n";

#[test]
fn terminator_only_output_is_empty() {
  let mut a = analyzer("", "EOS\n");
  assert!(a.parse_raw("").unwrap().is_empty());
  assert!(a.parse("").unwrap().is_empty());
}

#[test]
fn single_token_raw_rows_drop_terminator() {
  let mut a = analyzer("猫", CAT);
  let rows = a.parse_raw("猫").unwrap();
  assert_eq!(
    rows,
    vec![row(&["猫", "名詞", "一般", "*", "*", "*", "*", "猫", "ネコ", "ネコ"])]
  );
}

#[test]
fn single_token_is_mapped_positionally() {
  let mut a = analyzer("猫", CAT);
  let tokens = a.parse("猫").unwrap();

  assert_eq!(
    tokens,
    vec![Token {
      surface_form: "猫".into(),
      pos: "名詞".into(),
      pos_detail1: "一般".into(),
      pos_detail2: "*".into(),
      pos_detail3: NUL.into(),
      conjugated_type: "*".into(),
      conjugated_form: "*".into(),
      // row position 8
      basic_form: "ネコ".into(),
      reading: NUL.into(),
      pronunciation: NUL.into(),
    }]
  );
}

#[test]
fn parse_is_idempotent_for_same_text() {
  let mut a = analyzer("東京へ行く", UNIDIC_SENTENCE);
  let first = a.parse("東京へ行く").unwrap();
  let second = a.parse("東京へ行く").unwrap();
  assert_eq!(first, second);
  assert_eq!(first.len(), 3);
}

#[test]
fn long_rows_fill_reading_and_pronunciation_from_same_field() {
  let mut a = analyzer("東京へ行く", UNIDIC_SENTENCE);
  let tokens = a.parse("東京へ行く").unwrap();

  let tokyo = &tokens[0];
  assert_eq!(tokyo.pos, "名詞");
  assert_eq!(tokyo.pos_detail1, "固有名詞");
  assert_eq!(tokyo.pos_detail2, "地名");
  assert_eq!(tokyo.conjugated_type, "一般");
  assert_eq!(tokyo.basic_form, "トウキョウ");
  assert_eq!(tokyo.reading, "トーキョー");
  assert_eq!(tokyo.reading, tokyo.pronunciation);

  let iku = &tokens[2];
  assert_eq!(iku.surface_form, "行く");
  assert_eq!(iku.basic_form, "行く");
  assert_eq!(iku.pronunciation, "イク");
}

#[test]
fn row_of_nine_fields_has_basic_form_only() {
  let mut a = analyzer("x", "x\ta,b,c,d,e,f,g,h\nEOS\n");
  let token = &a.parse("x").unwrap()[0];
  assert_eq!(token.basic_form, "h");
  assert_eq!(token.reading, NUL);
  assert_eq!(token.pronunciation, NUL);
}

#[test]
fn row_of_eleven_fields_has_pronunciation() {
  let mut a = analyzer("x", "x\ta,b,c,d,e,f,g,h,i,j\nEOS\n");
  let token = &a.parse("x").unwrap()[0];
  assert_eq!(token.basic_form, "h");
  assert_eq!(token.reading, "j");
  assert_eq!(token.pronunciation, "j");
}

#[test]
fn spurious_tab_free_line_truncates_output() {
  let blob = "\
猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ\n\
garbage line\n\
犬\t名詞,一般,*,*,*,*,犬,イヌ,イヌ\n\
EOS\n";
  let mut a = analyzer("猫犬", blob);

  let rows = a.parse_raw("猫犬").unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0][0], "猫");

  let tokens = a.parse("猫犬").unwrap();
  assert_eq!(tokens.len(), 1);
  assert_eq!(tokens[0].surface_form, "猫");
}

#[test]
fn spurious_tab_free_line_is_an_error_in_strict_mode() {
  let blob = "猫\t名詞,一般,*,*,*,*\ngarbage line\n犬\t名詞,一般,*,*,*,*\nEOS\n";
  let mut a = Analyzer::with_engine(
    ScriptedEngine::default().with("猫犬", blob),
    DecodeMode::Strict,
  );

  match a.parse("猫犬").unwrap_err() {
    AnalyzerError::Decode(DecodeError::UnexpectedTerminator { line, content }) => {
      assert_eq!(line, 2);
      assert_eq!(content, "garbage line");
    }
    other => panic!("expected UnexpectedTerminator, got {other:?}"),
  }
}

#[test]
fn output_without_terminator_is_an_error_in_strict_mode() {
  let blob = "猫\t名詞,一般,*,*,*,*\n犬\t名詞,一般,*,*,*,*";
  let mut strict = Analyzer::with_engine(
    ScriptedEngine::default().with("猫犬", blob),
    DecodeMode::Strict,
  );
  assert_eq!(
    strict.parse_raw("猫犬").unwrap_err().to_string(),
    DecodeError::MissingTerminator { rows: 2 }.to_string()
  );
  assert!(matches!(
    strict.parse("猫犬").unwrap_err(),
    AnalyzerError::Decode(DecodeError::MissingTerminator { rows: 2 })
  ));

  // lenient keeps dropping the final row
  let mut lenient = analyzer("猫犬", blob);
  let tokens = lenient.parse("猫犬").unwrap();
  assert_eq!(tokens.len(), 1);
  assert_eq!(tokens[0].surface_form, "猫");
}

#[test]
fn short_row_is_rejected_without_partial_result() {
  let blob = "猫\t名詞,一般,*,*,*,*\n!\t記号\nEOS\n";
  let mut a = analyzer("猫!", blob);

  match a.parse("猫!").unwrap_err() {
    AnalyzerError::Decode(DecodeError::MissingFields { row, group, .. }) => {
      assert_eq!(row, 1);
      assert_eq!(group, "part_of_speech");
    }
    other => panic!("expected MissingFields, got {other:?}"),
  }
}

#[test]
fn engine_errors_reach_the_caller() {
  let mut a = analyzer("known", "EOS\n");
  let err = a.parse("unknown").unwrap_err();
  assert!(matches!(err, AnalyzerError::Engine(EngineError::Parse { .. })));
  // the handle stays usable after a per-call failure
  assert!(a.parse("known").unwrap().is_empty());
}

#[test]
fn free_functions_match_analyzer_output() {
  let rows = RawDecoder::new(DecodeMode::Lenient).decode(UNIDIC_SENTENCE).unwrap();
  let tokens = map_tokens(&rows).unwrap();

  let mut a = analyzer("東京へ行く", UNIDIC_SENTENCE);
  assert_eq!(a.parse("東京へ行く").unwrap(), tokens);
}

#[test]
fn tokens_serialize_to_json() {
  let mut a = analyzer("猫", CAT);
  let tokens = a.parse("猫").unwrap();
  let json = serde_json::to_value(&tokens).unwrap();
  assert_eq!(json[0]["surface_form"], "猫");
  assert_eq!(json[0]["pronunciation"], NUL);
}
