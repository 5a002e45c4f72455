//! Random Japanese name and address generation for Gimei.
//!
//! A [`Gimei`] draws uniformly from the name and address tables through a
//! pluggable [`Randomizer`] and composes the picks into multi-script records.

pub mod assets;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod randomizer;

pub use assets::{AssetsLoader, embedded_tables, load_tables_dir};
pub use engine::{Gimei, gimei};
pub use errors::GenerationError;
pub use generators::{choice, choice_index};
pub use model::{GimeiAddress, GimeiName};
pub use randomizer::{FixedRandomizer, Randomizer, SeededRandomizer, ThreadRandomizer};
