use gimei_core::{Error, Gender, Script, Tables, TableSummary, validate_tables};

const NAMES: &str = r#"{
  "first_name": {
    "male": [["太郎", "たろう", "タロウ", "Taro"], ["健太", "けんた", "ケンタ", "Kenta"]],
    "female": [["花子", "はなこ", "ハナコ", "Hanako"]]
  },
  "last_name": [["山田", "やまだ", "ヤマダ", "Yamada"]]
}"#;

const ADDRESSES: &str = r#"{
  "addresses": {
    "prefecture": [["北海道", "ほっかいどう", "ホッカイドウ", "hokkaido"]],
    "city": [["札幌市中央区", "さっぽろしちゅうおうく", "サッポロシチュウオウク", "sapporoshichuoku"]],
    "town": [["旭ケ丘", "あさひがおか", "アサヒガオカ", "asahigaoka"]]
  }
}"#;

#[test]
fn tables_load_from_upstream_documents() {
    let tables = Tables::from_json(NAMES, ADDRESSES).expect("parse tables");
    validate_tables(&tables).expect("tables validate");

    let male = tables.names.first_name.for_gender(Gender::Male);
    assert_eq!(male[1].script(Script::Hiragana), "けんた");
    assert_eq!(tables.addresses.city[0].romaji, "sapporoshichuoku");

    let summary = TableSummary::of(&tables);
    assert_eq!(summary.male, 2);
    assert_eq!(summary.female, 1);
    assert_eq!(summary.town, 1);
}

#[test]
fn empty_pools_parse_but_fail_validation() {
    let names = r#"{"first_name": {"male": [], "female": []}, "last_name": []}"#;
    let tables = Tables::from_json(names, ADDRESSES).expect("empty pools still parse");

    let result = validate_tables(&tables);
    assert!(matches!(result, Err(Error::InvalidTable(_))));
}

#[test]
fn malformed_json_is_reported() {
    let result = Tables::from_json("{", ADDRESSES);
    assert!(matches!(result, Err(Error::Json(_))));
}
