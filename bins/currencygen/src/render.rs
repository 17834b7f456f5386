//! Renders the currency table as Rust source.

use moneta_currency::{Currency, CurrencyRecord, CurrencyResult};

const HEADER: &str = "\
// THIS FILE IS AUTOMATICALLY GENERATED BY `currencygen`. DO NOT EDIT.
//! Built-in currency table.

use crate::currency::Currency;
";

/// Renders `table.rs` for the given records.
///
/// Every record is validated first; output is sorted by code and a code
/// listed twice keeps its first record.
pub fn render_table(records: &[CurrencyRecord]) -> CurrencyResult<String> {
    let mut entries = records
        .iter()
        .map(|record| record.to_currency().map(|currency| (record, currency)))
        .collect::<CurrencyResult<Vec<_>>>()?;
    entries.sort_by_key(|(_, currency)| currency.code());
    entries.dedup_by_key(|(_, currency)| currency.code());

    let mut out = String::from(HEADER);

    out.push_str("\n/// Every built-in currency, sorted by code.\n");
    out.push_str("pub const ALL: &[Currency] = &[\n");
    for (_, currency) in &entries {
        out.push_str(&format!("    {},\n", currency.code()));
    }
    out.push_str("];\n");

    for (record, currency) in &entries {
        out.push_str(&format!("\n/// {}\n", record.name));
        out.push_str(&render_const(currency));
    }

    Ok(out)
}

fn render_const(currency: &Currency) -> String {
    let code = currency.code();
    format!(
        "pub const {code}: Currency = Currency::from_table(*b\"{code}\", {}, {:?}, {:?}, {:?}, {});\n",
        currency.numeric_code(),
        currency.symbol(),
        currency.decimal_mark(),
        currency.thousands_delimiter(),
        currency.minor_unit_exponent(),
    )
}
