//! Domain models for doc-inventory
//!
//! Documentation records and the inventory document, without any I/O concerns.

mod record;
mod inventory;

pub use record::{compare_names, iso_timestamp, Category, CategoryParseError, DocRecord, DEFAULT_LANGUAGE};
pub use inventory::{InventoryDocument, Statistics, TableRow};
