//! Immutable currency registry.
//!
//! The built-in registry is built once, on first use, from the generated
//! table and is never mutated afterwards. Only lookups are exposed.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::code::CurrencyCode;
use crate::currency::Currency;
use crate::dataset::{CurrencyRecord, parse_dataset};
use crate::error::CurrencyResult;
use crate::table;

static BUILTIN: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::from_currencies(table::ALL.iter().copied());
    debug!(currencies = registry.len(), "Built-in currency registry initialised");
    registry
});

/// Lookup-by-code service.
pub trait CurrencyLookup {
    /// Returns the currency stored under `code`.
    ///
    /// Matching is case-sensitive against the uppercase stored form.
    fn lookup(&self, code: &str) -> Option<Currency>;
}

/// A read-only mapping from ISO code to currency.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    currencies: HashMap<CurrencyCode, Currency>,
}

impl Registry {
    /// Returns the process-wide registry of built-in currencies.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Builds a registry from descriptors; later duplicates replace earlier ones.
    pub fn from_currencies<I: IntoIterator<Item = Currency>>(currencies: I) -> Self {
        currencies.into_iter().collect()
    }

    /// Builds a registry from dataset JSON.
    pub fn from_json(json: &str) -> CurrencyResult<Self> {
        parse_dataset(json)?
            .iter()
            .map(CurrencyRecord::to_currency)
            .collect()
    }

    /// Returns the currency with the given code.
    pub fn get(&self, code: CurrencyCode) -> Option<Currency> {
        self.currencies.get(&code).copied()
    }

    /// Returns true if `code` is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    /// Number of registered currencies.
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns true if no currency is registered.
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// All registered currencies, sorted by code.
    pub fn currencies(&self) -> Vec<Currency> {
        let mut currencies: Vec<Currency> = self.currencies.values().copied().collect();
        currencies.sort_by_key(Currency::code);
        currencies
    }
}

impl CurrencyLookup for Registry {
    fn lookup(&self, code: &str) -> Option<Currency> {
        CurrencyCode::exact(code).and_then(|code| self.get(code))
    }
}

/// Later entries replace earlier ones with the same code.
impl FromIterator<Currency> for Registry {
    fn from_iter<I: IntoIterator<Item = Currency>>(iter: I) -> Self {
        Self {
            currencies: iter
                .into_iter()
                .map(|currency| (currency.code(), currency))
                .collect(),
        }
    }
}

/// Looks up `code` in the built-in registry.
pub fn lookup(code: &str) -> Option<Currency> {
    Registry::builtin().lookup(code)
}
