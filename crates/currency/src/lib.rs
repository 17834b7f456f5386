//! ISO 4217 currency descriptors and the currency registry.
//!
//! This crate is the leaf of the workspace. It provides:
//! - `Currency`, an immutable descriptor compared by code
//! - `CurrencyCode`, a validated three-letter code
//! - `Registry`, a read-only code-to-currency mapping, and the built-in
//!   process-wide instance generated from `data/currencies.json`
//! - the dataset schema the built-in table is generated from

pub mod code;
pub mod currency;
pub mod dataset;
pub mod error;
pub mod registry;
pub mod table;

pub use code::CurrencyCode;
pub use currency::Currency;
pub use dataset::{CurrencyRecord, parse_dataset};
pub use error::{CurrencyError, CurrencyResult};
pub use registry::{CurrencyLookup, Registry, lookup};
pub use table::*;
