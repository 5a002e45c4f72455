use std::sync::{Arc, OnceLock};

use gimei_core::{Gender, Tables};

use crate::assets::embedded_tables;
use crate::errors::GenerationError;
use crate::generators::address::generate_address;
use crate::generators::name::generate_name;
use crate::model::{GimeiAddress, GimeiName};
use crate::randomizer::{Randomizer, ThreadRandomizer};

/// Random name and address generator.
///
/// Holds shared, read-only tables and a randomizer. Every call is a pure
/// function of the randomizer's draws, so a deterministic randomizer yields
/// deterministic output.
#[derive(Debug, Clone)]
pub struct Gimei<R = ThreadRandomizer> {
    tables: Arc<Tables>,
    randomizer: R,
}

impl Gimei<ThreadRandomizer> {
    /// Generator over the embedded tables using the thread-local RNG.
    pub fn new() -> Result<Self, GenerationError> {
        Self::with_randomizer(ThreadRandomizer)
    }
}

impl<R: Randomizer> Gimei<R> {
    /// Generator over the embedded tables using `randomizer`.
    pub fn with_randomizer(randomizer: R) -> Result<Self, GenerationError> {
        Ok(Self::with_tables(embedded_tables()?, randomizer))
    }

    pub fn with_tables(tables: Arc<Tables>, randomizer: R) -> Self {
        Self { tables, randomizer }
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn randomizer(&self) -> &R {
        &self.randomizer
    }

    /// Generates a name; a missing `gender` is drawn uniformly.
    pub fn name(&self, gender: Option<Gender>) -> Result<GimeiName, GenerationError> {
        generate_name(&self.tables.names, gender, &self.randomizer)
    }

    pub fn male(&self) -> Result<GimeiName, GenerationError> {
        self.name(Some(Gender::Male))
    }

    pub fn female(&self) -> Result<GimeiName, GenerationError> {
        self.name(Some(Gender::Female))
    }

    pub fn names(
        &self,
        count: usize,
        gender: Option<Gender>,
    ) -> Result<Vec<GimeiName>, GenerationError> {
        (0..count).map(|_| self.name(gender)).collect()
    }

    pub fn address(&self) -> Result<GimeiAddress, GenerationError> {
        generate_address(&self.tables.addresses, &self.randomizer)
    }

    pub fn addresses(&self, count: usize) -> Result<Vec<GimeiAddress>, GenerationError> {
        (0..count).map(|_| self.address()).collect()
    }
}

/// Process-wide default generator, built on first use.
pub fn gimei() -> Result<&'static Gimei, GenerationError> {
    static DEFAULT: OnceLock<Gimei> = OnceLock::new();
    if let Some(default) = DEFAULT.get() {
        return Ok(default);
    }
    let default = Gimei::new()?;
    Ok(DEFAULT.get_or_init(|| default))
}
