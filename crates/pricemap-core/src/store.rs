//! Store records as published by the price feed.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One retail location and the price it was observed selling at.
///
/// Field names follow the feed's JSON keys where they are renamed. Required
/// strings default to empty so a single malformed record never fails the
/// whole load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRecord {
    #[serde(rename = "store_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    #[serde(default)]
    pub city: String,
    /// Full state name, e.g. `"Minnesota"`.
    #[serde(rename = "state", default)]
    pub state_name: String,
    /// State abbreviation, e.g. `"MN"`.
    #[serde(rename = "region", default)]
    pub state_code: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
    /// Price exactly as published, currency symbol included (e.g. `"$2.50"`).
    #[serde(rename = "Price", default)]
    pub price: String,
    #[serde(rename = "quadrant_description", default)]
    pub location_description: String,
    #[serde(rename = "quadrant_code", default)]
    pub location_code: String,
    pub intersection_description: Option<String>,
    pub county: Option<String>,
    #[serde(rename = "Product Title")]
    pub product_title: Option<String>,
}

impl StoreRecord {
    /// Numeric price, or `None` when the published string is not a valid
    /// non-negative amount.
    #[must_use]
    pub fn parsed_price(&self) -> Option<Decimal> {
        parse_price(&self.price)
    }

    /// Price formatted to cents with a dollar sign, falling back to the raw
    /// published string when it does not parse.
    #[must_use]
    pub fn display_price(&self) -> String {
        self.parsed_price()
            .map_or_else(|| self.price.clone(), |p| format!("${:.2}", p.round_dp(2)))
    }

    /// `"City, State"` line used in grid and list rows.
    #[must_use]
    pub fn city_state(&self) -> String {
        match (self.city.is_empty(), self.state_name.is_empty()) {
            (false, false) => format!("{}, {}", self.city, self.state_name),
            (false, true) => self.city.clone(),
            (true, false) => self.state_name.clone(),
            (true, true) => String::new(),
        }
    }
}

/// Parses a published price such as `"$2.50"`, `" $1,299.00 "` or `"3.19"`.
///
/// Leading currency symbols and thousands separators are ignored. Returns
/// `None` for empty, non-numeric or negative input.
#[must_use]
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let trimmed = raw
        .trim()
        .trim_start_matches(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned)
        .ok()
        .filter(|p| !p.is_sign_negative() || p.is_zero())
}

/// Lowest and highest parseable price across a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBounds {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceBounds {
    /// Scans `records` once. Returns `None` when no record has a parseable price.
    #[must_use]
    pub fn from_records(records: &[StoreRecord]) -> Option<Self> {
        records
            .iter()
            .filter_map(StoreRecord::parsed_price)
            .fold(None, |acc, price| match acc {
                None => Some(Self {
                    min: price,
                    max: price,
                }),
                Some(b) => Some(Self {
                    min: b.min.min(price),
                    max: b.max.max(price),
                }),
            })
    }

    #[must_use]
    pub fn span(&self) -> Decimal {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}
