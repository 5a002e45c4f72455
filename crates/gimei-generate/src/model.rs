use serde::{Deserialize, Serialize};

use gimei_core::{Gender, Record, Script};

/// Separator placed between last and first name in every script.
pub const NAME_SEPARATOR: &str = " ";

/// Generated full name.
///
/// The script fields hold `last + " " + first`; `first` and `last` keep the
/// picked records verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GimeiName {
    pub gender: Gender,
    pub kanji: String,
    pub hiragana: String,
    pub katakana: String,
    pub romaji: String,
    pub first: Record,
    pub last: Record,
}

impl GimeiName {
    pub fn compose(gender: Gender, first: Record, last: Record) -> Self {
        let Record {
            kanji,
            hiragana,
            katakana,
            romaji,
        } = Record::join(&[&last, &first], NAME_SEPARATOR);
        Self {
            gender,
            kanji,
            hiragana,
            katakana,
            romaji,
            first,
            last,
        }
    }

    pub fn script(&self, script: Script) -> &str {
        match script {
            Script::Kanji => &self.kanji,
            Script::Hiragana => &self.hiragana,
            Script::Katakana => &self.katakana,
            Script::Romaji => &self.romaji,
        }
    }
}

/// Generated address.
///
/// The script fields hold `prefecture + city + town` with no separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GimeiAddress {
    pub kanji: String,
    pub hiragana: String,
    pub katakana: String,
    pub romaji: String,
    pub prefecture: Record,
    pub city: Record,
    pub town: Record,
}

impl GimeiAddress {
    pub fn compose(prefecture: Record, city: Record, town: Record) -> Self {
        let Record {
            kanji,
            hiragana,
            katakana,
            romaji,
        } = Record::join(&[&prefecture, &city, &town], "");
        Self {
            kanji,
            hiragana,
            katakana,
            romaji,
            prefecture,
            city,
            town,
        }
    }

    pub fn script(&self, script: Script) -> &str {
        match script {
            Script::Kanji => &self.kanji,
            Script::Hiragana => &self.hiragana,
            Script::Katakana => &self.katakana,
            Script::Romaji => &self.romaji,
        }
    }
}
