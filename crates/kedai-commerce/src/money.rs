//! Money type and Rupiah conversion.
//!
//! Uses cents-based integer representation to avoid floating-point
//! drift once an amount has been converted. Formatting follows the
//! locale conventions of each currency (`$1,234.50`, `Rp 1.234,50`).

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    IDR,
}

impl Currency {
    /// Get the currency code (e.g., "IDR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::IDR => "IDR",
        }
    }

    /// Text placed before the amount (e.g., "Rp ").
    pub fn prefix(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::IDR => "Rp ",
        }
    }

    /// Separator between groups of three integer digits.
    pub fn group_separator(&self) -> char {
        match self {
            Currency::USD => ',',
            Currency::IDR => '.',
        }
    }

    /// Separator between the integer and fraction parts.
    pub fn decimal_separator(&self) -> char {
        match self {
            Currency::USD => '.',
            Currency::IDR => ',',
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "IDR" => Some(Currency::IDR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (cents, sen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// ```
    /// use kedai_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format with the currency's prefix and separators (e.g., "Rp 1.543.600,00").
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        format!("{}{}{}", sign, self.currency.prefix(), self.display_amount())
    }

    /// Format the unsigned amount without prefix (e.g., "1.543.600,00").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let cents = self.amount_cents.unsigned_abs();
        format!(
            "{}{}{:0width$}",
            group_digits(cents / divisor, self.currency.group_separator()),
            self.currency.decimal_separator(),
            cents % divisor,
            width = places as usize
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// A fixed conversion rate between two currencies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub from: Currency,
    pub to: Currency,
    /// Units of `to` per one unit of `from`.
    pub rate: f64,
}

impl ExchangeRate {
    /// Rupiah per US dollar used by the storefront.
    pub const USD_TO_IDR: f64 = 15_436.0;

    pub fn new(from: Currency, to: Currency, rate: f64) -> Self {
        Self { from, to, rate }
    }

    /// USD to IDR at the given rate.
    pub fn usd_to_idr(rate: f64) -> Self {
        Self::new(Currency::USD, Currency::IDR, rate)
    }

    /// Convert a decimal amount in `from` into `to`.
    pub fn convert_decimal(&self, amount: f64) -> Money {
        Money::from_decimal(amount * self.rate, self.to)
    }

    /// Convert a Money value, which must be denominated in `from`.
    pub fn convert(&self, money: &Money) -> Result<Money, CommerceError> {
        if money.currency != self.from {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.from.code().to_string(),
                got: money.currency.code().to_string(),
            });
        }
        Ok(self.convert_decimal(money.to_decimal()))
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        Self::usd_to_idr(Self::USD_TO_IDR)
    }
}

/// Format a USD amount as Rupiah at the default rate.
///
/// ```
/// use kedai_commerce::convert_to_rupiah;
/// assert_eq!(convert_to_rupiah(1000.0), "Rp 15.436.000,00");
/// ```
pub fn convert_to_rupiah(usd: f64) -> String {
    convert_to_rupiah_at(usd, &ExchangeRate::default())
}

/// Format a USD amount as Rupiah at an explicit rate.
pub fn convert_to_rupiah_at(usd: f64, rate: &ExchangeRate) -> String {
    rate.convert_decimal(usd).display()
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
