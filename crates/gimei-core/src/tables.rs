use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::types::{Gender, Record};

/// Top-level key the upstream address dataset nests its tables under.
pub const ADDRESSES_WRAPPER_KEY: &str = "addresses";

/// First-name pools keyed by gender.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct FirstNames {
    pub male: Vec<Record>,
    pub female: Vec<Record>,
}

impl FirstNames {
    pub fn for_gender(&self, gender: Gender) -> &[Record] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

/// Contents of `names.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct Names {
    pub first_name: FirstNames,
    pub last_name: Vec<Record>,
}

impl Names {
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}

/// Contents of `addresses.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct Addresses {
    pub prefecture: Vec<Record>,
    pub city: Vec<Record>,
    pub town: Vec<Record>,
}

impl Addresses {
    /// Parses an address document, accepting both the bare tables and the
    /// upstream form wrapped in an `addresses` object.
    pub fn from_json(contents: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(contents)?;
        Ok(serde_json::from_value(unwrap_addresses(value))?)
    }
}

/// Strips the `addresses` wrapper from an address document when present.
pub fn unwrap_addresses(mut value: Value) -> Value {
    match value.get_mut(ADDRESSES_WRAPPER_KEY) {
        Some(inner) if inner.is_object() => inner.take(),
        _ => value,
    }
}

/// Name and address tables the generator draws from.
///
/// Tables are immutable once built; share them behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables {
    pub names: Names,
    pub addresses: Addresses,
}

impl Tables {
    pub fn new(names: Names, addresses: Addresses) -> Self {
        Self { names, addresses }
    }

    /// Parses both asset documents.
    pub fn from_json(names: &str, addresses: &str) -> Result<Self> {
        Ok(Self {
            names: Names::from_json(names)?,
            addresses: Addresses::from_json(addresses)?,
        })
    }
}
