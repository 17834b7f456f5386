// THIS FILE IS AUTOMATICALLY GENERATED BY `currencygen`. DO NOT EDIT.
//! Built-in currency table.

use crate::currency::Currency;

/// Every built-in currency, sorted by code.
pub const ALL: &[Currency] = &[
    AUD,
    CAD,
    CLP,
    CNY,
    EUR,
    GBP,
    INR,
    JPY,
    KRW,
    KWD,
    MXN,
    SGD,
    USD,
];

/// Australian Dollar
pub const AUD: Currency = Currency::from_table(*b"AUD", 36, '$', '.', ',', 2);

/// Canadian Dollar
pub const CAD: Currency = Currency::from_table(*b"CAD", 124, '$', '.', ',', 2);

/// Chilean Peso
pub const CLP: Currency = Currency::from_table(*b"CLP", 152, '$', ',', '.', 0);

/// Chinese Renminbi Yuan
pub const CNY: Currency = Currency::from_table(*b"CNY", 156, '¥', '.', ',', 2);

/// Euro
pub const EUR: Currency = Currency::from_table(*b"EUR", 978, '€', ',', '.', 2);

/// British Pound
pub const GBP: Currency = Currency::from_table(*b"GBP", 826, '£', '.', ',', 2);

/// Indian Rupee
pub const INR: Currency = Currency::from_table(*b"INR", 356, '₹', '.', ',', 2);

/// Japanese Yen
pub const JPY: Currency = Currency::from_table(*b"JPY", 392, '¥', '.', ',', 0);

/// South Korean Won
pub const KRW: Currency = Currency::from_table(*b"KRW", 410, '₩', '.', ',', 0);

/// Kuwaiti Dinar
pub const KWD: Currency = Currency::from_table(*b"KWD", 414, 'د', '.', ',', 3);

/// Mexican Peso
pub const MXN: Currency = Currency::from_table(*b"MXN", 484, '$', '.', ',', 2);

/// Singapore Dollar
pub const SGD: Currency = Currency::from_table(*b"SGD", 702, '$', '.', ',', 2);

/// United States Dollar
pub const USD: Currency = Currency::from_table(*b"USD", 840, '$', '.', ',', 2);
