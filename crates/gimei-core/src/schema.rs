use jsonschema::JSONSchema;
use schemars::schema::RootSchema;
use schemars::schema_for;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::tables::{Addresses, Names, unwrap_addresses};

/// Emit the JSON Schema for `names.json`.
pub fn names_json_schema() -> RootSchema {
    schema_for!(Names)
}

/// Emit the JSON Schema for `addresses.json` (bare form).
pub fn addresses_json_schema() -> RootSchema {
    schema_for!(Addresses)
}

/// Location and message of a JSON Schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    pub path: String,
    pub message: String,
}

/// Check a `names.json` document against its JSON Schema.
pub fn validate_names_json(document: &Value) -> Result<Vec<SchemaViolation>> {
    validate_document(document, &names_json_schema())
}

/// Check an `addresses.json` document against its JSON Schema.
///
/// A document wrapped in an `addresses` object is unwrapped first.
pub fn validate_addresses_json(document: &Value) -> Result<Vec<SchemaViolation>> {
    let document = unwrap_addresses(document.clone());
    validate_document(&document, &addresses_json_schema())
}

fn validate_document(document: &Value, schema: &RootSchema) -> Result<Vec<SchemaViolation>> {
    let schema = serde_json::to_value(schema)?;
    let compiled = JSONSchema::compile(&schema).map_err(|err| Error::Schema(err.to_string()))?;

    let mut violations = Vec::new();
    if let Err(errors) = compiled.validate(document) {
        for error in errors {
            let path = error.instance_path.to_string();
            violations.push(SchemaViolation {
                path: if path.is_empty() { "/".to_string() } else { path },
                message: error.to_string(),
            });
        }
    }

    Ok(violations)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn records_are_described_as_string_quadruples() {
        let schema = serde_json::to_value(names_json_schema()).expect("serialize schema");
        let record = &schema["definitions"]["Record"];
        assert_eq!(record["type"], "array");
        assert_eq!(record["minItems"], 4);
        assert_eq!(record["maxItems"], 4);
    }

    #[test]
    fn valid_names_document_has_no_violations() {
        let document = json!({
            "first_name": {
                "male": [["太郎", "たろう", "タロウ", "Taro"]],
                "female": [["花子", "はなこ", "ハナコ", "Hanako"]]
            },
            "last_name": [["山田", "やまだ", "ヤマダ", "Yamada"]]
        });
        let violations = validate_names_json(&document).expect("compile schema");
        assert!(violations.is_empty(), "unexpected violations: {violations:?}");
    }

    #[test]
    fn short_record_is_a_violation() {
        let document = json!({
            "prefecture": [["東京都", "とうきょうと", "トウキョウト"]],
            "city": [],
            "town": []
        });
        let violations = validate_addresses_json(&document).expect("compile schema");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "/prefecture/0");
    }

    #[test]
    fn wrapped_addresses_document_is_unwrapped() {
        let document = json!({
            "addresses": {
                "prefecture": [["東京都", "とうきょうと", "トウキョウト", "tokyo"]],
                "city": [["渋谷区", "しぶやく", "シブヤク", "shibuyaku"]],
                "town": [["本町", "ほんちょう", "ホンチョウ", "honcho"]]
            }
        });
        let violations = validate_addresses_json(&document).expect("compile schema");
        assert!(violations.is_empty());
    }
}
