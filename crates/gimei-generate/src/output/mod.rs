pub mod csv;

pub use self::csv::{write_addresses_csv, write_names_csv};
