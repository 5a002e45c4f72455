use std::fs;
use std::path::{Path, PathBuf};

use gimei_core::{TableSummary, validate_addresses_json, validate_names_json, validate_tables};
use gimei_generate::assets::{ADDRESSES_FILE, NAMES_FILE};
use gimei_generate::{GenerationError, Gimei, SeededRandomizer, embedded_tables, load_tables_dir};

fn asset_path(file: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join(file)
}

fn load_json(path: &Path) -> serde_json::Value {
    let contents =
        fs::read_to_string(path).unwrap_or_else(|_| panic!("missing json at {}", path.display()));
    serde_json::from_str(&contents).expect("parse json")
}

fn temp_assets_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gimei_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn shipped_assets_match_json_schema() {
    let names = load_json(&asset_path(NAMES_FILE));
    let addresses = load_json(&asset_path(ADDRESSES_FILE));

    let violations = validate_names_json(&names).expect("compile names schema");
    assert!(violations.is_empty(), "names.json violations: {violations:?}");
    let violations = validate_addresses_json(&addresses).expect("compile addresses schema");
    assert!(violations.is_empty(), "addresses.json violations: {violations:?}");
}

#[test]
fn shipped_assets_validate() {
    let tables = embedded_tables().expect("embedded tables");
    validate_tables(&tables).expect("embedded tables validate");
}

#[test]
fn directory_assets_match_embedded_assets() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
    let from_dir = load_tables_dir(&root).expect("load asset dir");
    let embedded = embedded_tables().expect("embedded tables");
    assert_eq!(&from_dir, embedded.as_ref());
}

#[test]
fn custom_directory_with_wrapped_addresses_loads() {
    let dir = temp_assets_dir("wrapped");
    fs::write(
        dir.join(NAMES_FILE),
        r#"{"first_name": {"male": [["太郎","たろう","タロウ","Taro"]],
            "female": [["花子","はなこ","ハナコ","Hanako"]]},
            "last_name": [["山田","やまだ","ヤマダ","Yamada"]]}"#,
    )
    .expect("write names");
    fs::write(
        dir.join(ADDRESSES_FILE),
        r#"{"addresses": {"prefecture": [["東京都","とうきょうと","トウキョウト","tokyo"]],
            "city": [["千代田区","ちよだく","チヨダク","chiyodaku"]],
            "town": [["大手町","おおてまち","オオテマチ","otemachi"]]}}"#,
    )
    .expect("write addresses");

    let tables = load_tables_dir(&dir).expect("load custom tables");
    let summary = TableSummary::of(&tables);
    assert_eq!(summary.address_combinations(), 1);

    let gimei = Gimei::with_tables(tables.into(), SeededRandomizer::new(5));
    assert_eq!(gimei.address().expect("address").kanji, "東京都千代田区大手町");
    assert_eq!(gimei.male().expect("male").kanji, "山田 太郎");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn malformed_asset_is_reported_with_path() {
    let dir = temp_assets_dir("malformed");
    fs::write(dir.join(NAMES_FILE), "{\"first_name\": ").expect("write names");
    fs::write(dir.join(ADDRESSES_FILE), "{}").expect("write addresses");

    let err = load_tables_dir(&dir).expect_err("malformed names should fail");
    match err {
        GenerationError::Asset(message) => {
            assert!(message.contains("invalid json asset"), "{message}");
            assert!(message.contains(NAMES_FILE), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }

    fs::remove_dir_all(&dir).ok();
}
