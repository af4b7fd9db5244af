//! dictionary 用のテスト
//! 辞書管理と、実辞書を使った解析の統合テスト

use std::collections::BTreeMap;

use bunkai::config::{BunkaiConfig, DictionaryConfig, DictionaryPreset};
use bunkai::dictionary::DictionaryManager;
use bunkai::errors::{AnalyzerError, DictionaryError, EngineError};
use bunkai::{Analyzer, NUL};
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// DictionaryManager のコンストラクタが正常に動作することを確認する。
#[test]
fn create_dictionary_manager_with_preset() {
  let result = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic);

  // コンストラクタ自体はネットワーク不要なので成功するはず
  assert!(
    result.is_ok(),
    "DictionaryManager の構築に失敗: {:?}",
    result.err()
  );
}

/// 存在しないパスを指定した場合にエラーが返ることを確認する。
#[test]
fn from_local_path_with_nonexistent_file() {
  let err = DictionaryManager::from_local_path("/nonexistent/path/to/system.dic").unwrap_err();

  assert!(
    matches!(err, DictionaryError::DictionaryNotFound(_)),
    "期待されるエラー型ではありません: {:?}",
    err
  );
}

/// 存在しない辞書ファイルでは Analyzer の初期化がエンジン初期化エラーになる。
#[test]
fn analyzer_init_fails_without_dictionary() {
  let config = BunkaiConfig {
    dictionary: DictionaryConfig {
      preset: DictionaryPreset::Ipadic,
      cache_dir: None,
      path: Some("/nonexistent/path/to/system.dic".into()),
    },
    ..BunkaiConfig::default()
  };

  let err = Analyzer::init(&config).err().expect("初期化は失敗するはず");
  assert!(
    matches!(err, AnalyzerError::Engine(EngineError::Init { .. })),
    "期待されるエラー型ではありません: {:?}",
    err
  );
}

/// プリセット辞書のダウンロード＆ロード テスト。
///
/// ネットワークアクセスと大容量ファイルの処理が必要なため
/// `with_dict_tests` フィーチャー有効時のみ実行する。
///
/// 実行方法:
/// ```bash
/// cargo test --features with_dict_tests
/// ```
#[test]
#[cfg_attr(not(feature = "with_dict_tests"), ignore)]
fn download_and_load_ipadic() {
  let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic)
    .expect("DictionaryManager の構築に失敗");

  // 辞書をロード（初回はダウンロードが発生する）
  let dict = manager.load();
  assert!(dict.is_ok(), "辞書のロードに失敗: {:?}", dict.err());

  // 2回目のロードはキャッシュから取得される
  let dict2 = manager.load();
  assert!(dict2.is_ok(), "2回目のロードに失敗");
}

/// IPADIC を使って MeCab 形式の出力から Token 列が得られることを確認する。
#[test]
#[cfg_attr(not(feature = "with_dict_tests"), ignore)]
fn parse_with_ipadic() {
  let mut options = BTreeMap::new();
  options.insert("preset".to_string(), "ipadic".to_string());
  let mut analyzer = Analyzer::from_options(&options).expect("辞書のロードに失敗");

  let text = "東京は日本の首都です";
  let rows = analyzer.parse_raw(text).expect("解析に失敗");
  let tokens = analyzer.parse(text).expect("解析に失敗");

  assert!(!tokens.is_empty(), "形態素解析結果が空です");
  assert_eq!(rows.len(), tokens.len());

  // 表層形を連結すると元のテキストに戻る
  let joined: String = tokens.iter().map(|t| t.surface_form.as_str()).collect();
  assert_eq!(joined, text);

  for token in &tokens {
    println!("{:8} | {} | {}", token.surface_form, token.pos, token.basic_form);
    assert_eq!(token.pos_detail3, NUL);
  }

  // 同じテキストの再解析は同じ結果
  assert_eq!(analyzer.parse(text).unwrap(), tokens);
  analyzer.release();
}
