use serde::Serialize;

use crate::error::{Error, Result};
use crate::tables::Tables;
use crate::types::{Record, Script};

/// Validate that every table can be drawn from.
///
/// This checks:
/// - every sequence holds at least one record
/// - no record has an empty rendering in any script
///
/// The first violation is reported with a dotted path such as
/// `names.first_name.male` or `addresses.town[3].romaji`.
pub fn validate_tables(tables: &Tables) -> Result<()> {
    for (path, records) in sequences(tables) {
        check_sequence(path, records)?;
    }
    Ok(())
}

fn check_sequence(path: &str, records: &[Record]) -> Result<()> {
    if records.is_empty() {
        return Err(Error::InvalidTable(format!("{path} is empty")));
    }

    for (idx, record) in records.iter().enumerate() {
        for script in Script::ALL {
            if record.script(script).trim().is_empty() {
                return Err(Error::InvalidTable(format!(
                    "{path}[{idx}].{script} is blank"
                )));
            }
        }
    }

    Ok(())
}

fn sequences(tables: &Tables) -> [(&'static str, &[Record]); 6] {
    [
        ("names.first_name.male", tables.names.first_name.male.as_slice()),
        ("names.first_name.female", tables.names.first_name.female.as_slice()),
        ("names.last_name", tables.names.last_name.as_slice()),
        ("addresses.prefecture", tables.addresses.prefecture.as_slice()),
        ("addresses.city", tables.addresses.city.as_slice()),
        ("addresses.town", tables.addresses.town.as_slice()),
    ]
}

/// Entry counts per table sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub male: usize,
    pub female: usize,
    pub last_name: usize,
    pub prefecture: usize,
    pub city: usize,
    pub town: usize,
}

impl TableSummary {
    pub fn of(tables: &Tables) -> Self {
        Self {
            male: tables.names.first_name.male.len(),
            female: tables.names.first_name.female.len(),
            last_name: tables.names.last_name.len(),
            prefecture: tables.addresses.prefecture.len(),
            city: tables.addresses.city.len(),
            town: tables.addresses.town.len(),
        }
    }

    /// Number of distinct full names the tables can produce.
    pub fn name_combinations(&self) -> u128 {
        (self.male as u128 + self.female as u128) * self.last_name as u128
    }

    /// Number of distinct addresses the tables can produce.
    pub fn address_combinations(&self) -> u128 {
        self.prefecture as u128 * self.city as u128 * self.town as u128
    }
}
