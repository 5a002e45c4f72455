use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use schemars::r#gen::SchemaGenerator;
use schemars::schema::Schema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One word rendered in the four Japanese scripts.
///
/// Asset files store a record as a `[kanji, hiragana, katakana, romaji]`
/// array. Serialized output uses named fields; both forms deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RecordRepr")]
pub struct Record {
    pub kanji: String,
    pub hiragana: String,
    pub katakana: String,
    pub romaji: String,
}

impl Record {
    pub fn new(
        kanji: impl Into<String>,
        hiragana: impl Into<String>,
        katakana: impl Into<String>,
        romaji: impl Into<String>,
    ) -> Self {
        Self {
            kanji: kanji.into(),
            hiragana: hiragana.into(),
            katakana: katakana.into(),
            romaji: romaji.into(),
        }
    }

    /// Returns the rendering of this record in `script`.
    pub fn script(&self, script: Script) -> &str {
        match script {
            Script::Kanji => &self.kanji,
            Script::Hiragana => &self.hiragana,
            Script::Katakana => &self.katakana,
            Script::Romaji => &self.romaji,
        }
    }

    /// Joins the records script by script, placing `separator` between parts.
    ///
    /// `Record::join(&[&last, &first], " ")` yields `"山田 太郎"` in kanji and
    /// `"Yamada Taro"` in romaji.
    pub fn join(parts: &[&Record], separator: &str) -> Record {
        let field = |script: Script| {
            parts
                .iter()
                .map(|part| part.script(script))
                .collect::<Vec<_>>()
                .join(separator)
        };
        Record {
            kanji: field(Script::Kanji),
            hiragana: field(Script::Hiragana),
            katakana: field(Script::Katakana),
            romaji: field(Script::Romaji),
        }
    }
}

impl From<[String; 4]> for Record {
    fn from([kanji, hiragana, katakana, romaji]: [String; 4]) -> Self {
        Self {
            kanji,
            hiragana,
            katakana,
            romaji,
        }
    }
}

impl JsonSchema for Record {
    fn schema_name() -> String {
        "Record".to_string()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        <[String; 4]>::json_schema(generator)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordRepr {
    Tuple(String, String, String, String),
    Named {
        kanji: String,
        hiragana: String,
        katakana: String,
        romaji: String,
    },
}

impl From<RecordRepr> for Record {
    fn from(repr: RecordRepr) -> Self {
        match repr {
            RecordRepr::Tuple(kanji, hiragana, katakana, romaji)
            | RecordRepr::Named {
                kanji,
                hiragana,
                katakana,
                romaji,
            } => Record {
                kanji,
                hiragana,
                katakana,
                romaji,
            },
        }
    }
}

/// Writing system of a record field, in asset tuple order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    Kanji,
    Hiragana,
    Katakana,
    Romaji,
}

impl Script {
    pub const ALL: [Script; 4] = [
        Script::Kanji,
        Script::Hiragana,
        Script::Katakana,
        Script::Romaji,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Script::Kanji => "kanji",
            Script::Hiragana => "hiragana",
            Script::Katakana => "katakana",
            Script::Romaji => "romaji",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Script {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Script::ALL
            .into_iter()
            .find(|script| script.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| Error::UnknownValue(format!("script '{value}'")))
    }
}

/// Selects which first-name pool a name is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Candidates for an unspecified gender, in draw order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|gender| gender.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| Error::UnknownValue(format!("gender '{value}'")))
    }
}
