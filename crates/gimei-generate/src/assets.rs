use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use gimei_core::{Addresses, Names, TableSummary, Tables};

use crate::errors::GenerationError;

pub const NAMES_FILE: &str = "names.json";
pub const ADDRESSES_FILE: &str = "addresses.json";

const EMBEDDED_NAMES: &str = include_str!("../assets/names.json");
const EMBEDDED_ADDRESSES: &str = include_str!("../assets/addresses.json");

/// Reads `names.json` and `addresses.json` from a directory.
#[derive(Debug, Clone)]
pub struct AssetsLoader {
    root: PathBuf,
}

impl AssetsLoader {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn load_names(&self) -> Result<Names, GenerationError> {
        let path = self.root.join(NAMES_FILE);
        let contents = read_asset(&path)?;
        Names::from_json(&contents).map_err(|err| invalid_json(&path, err))
    }

    pub fn load_addresses(&self) -> Result<Addresses, GenerationError> {
        let path = self.root.join(ADDRESSES_FILE);
        let contents = read_asset(&path)?;
        Addresses::from_json(&contents).map_err(|err| invalid_json(&path, err))
    }

    pub fn load_tables(&self) -> Result<Tables, GenerationError> {
        let tables = Tables::new(self.load_names()?, self.load_addresses()?);
        let summary = TableSummary::of(&tables);
        tracing::debug!(root = %self.root.display(), ?summary, "loaded tables");
        Ok(tables)
    }
}

/// Loads tables from a directory holding the two asset files.
pub fn load_tables_dir(root: &Path) -> Result<Tables, GenerationError> {
    AssetsLoader::new(root.to_path_buf()).load_tables()
}

/// Tables compiled into the crate, parsed on first use.
pub fn embedded_tables() -> Result<Arc<Tables>, GenerationError> {
    static EMBEDDED: OnceLock<Result<Arc<Tables>, String>> = OnceLock::new();
    EMBEDDED
        .get_or_init(|| {
            let tables = Tables::from_json(EMBEDDED_NAMES, EMBEDDED_ADDRESSES)
                .map_err(|err| format!("invalid embedded tables: {err}"))?;
            tracing::debug!(summary = ?TableSummary::of(&tables), "parsed embedded tables");
            Ok(Arc::new(tables))
        })
        .clone()
        .map_err(GenerationError::Asset)
}

/// Reads an asset file as an untyped JSON document.
pub fn read_json_asset(path: &Path) -> Result<serde_json::Value, GenerationError> {
    let contents = read_asset(path)?;
    serde_json::from_str(&contents).map_err(|err| invalid_json(path, err.into()))
}

pub fn read_asset(path: &Path) -> Result<String, GenerationError> {
    fs::read_to_string(path).map_err(|err| {
        GenerationError::Asset(format!("failed to read asset {}: {}", path.display(), err))
    })
}

pub fn invalid_json(path: &Path, err: gimei_core::Error) -> GenerationError {
    GenerationError::Asset(format!("invalid json asset {}: {}", path.display(), err))
}
