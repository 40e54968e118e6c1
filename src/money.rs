use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

pub const FALLBACK_SYMBOL: &str = "₦";
const MAX_SYMBOL_CHARS: usize = 3;

/// Currency symbol shown in front of every amount.
///
/// Always non-empty and at most three characters long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Currency(String);

impl Currency {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        Currency(trimmed.chars().take(MAX_SYMBOL_CHARS).collect())
    }

    pub fn symbol(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency(FALLBACK_SYMBOL.to_string())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

pub fn amount_or_zero(raw: &str) -> Decimal {
    parse_amount(raw).unwrap_or(Decimal::ZERO)
}

// Server totals come preformatted, e.g. "1,234.50".
fn parse_server_amount(raw: &str) -> Decimal {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    amount_or_zero(&cleaned)
}

pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_money(value: Decimal, currency: &Currency) -> String {
    let rounded = round_cents(value);
    let plain = format!("{:.2}", rounded.abs());
    let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}.{}", currency, sign, group_thousands(whole), cents)
}

/// Amount as received from the backend.
///
/// Deserializes from a number, a numeric string (commas allowed) or `null`.
/// Unparsable strings become zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Amount(pub Decimal);

impl Amount {
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:.2}", round_cents(self.0)))
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        Ok(Amount(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        Ok(Amount(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        // Going through the shortest float repr keeps 1234.5 exact.
        Ok(Amount(amount_or_zero(&v.to_string())))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        Ok(Amount(parse_server_amount(v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Amount, E> {
        Ok(Amount::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Amount, E> {
        Ok(Amount::default())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_grouping_and_two_decimals() {
        let naira = Currency::default();
        assert_eq!(format_money(Decimal::new(12345, 1), &naira), "₦1,234.50");
        assert_eq!(format_money(Decimal::ZERO, &naira), "₦0.00");
        assert_eq!(format_money(Decimal::new(1_000_000, 0), &naira), "₦1,000,000.00");
        assert_eq!(format_money(Decimal::new(999, 0), &naira), "₦999.00");
    }

    #[test]
    fn formats_string_and_number_inputs_identically() {
        let naira = Currency::default();
        let from_number: Amount = serde_json::from_str("1234.5").unwrap();
        let from_string: Amount = serde_json::from_str("\"1234.5\"").unwrap();
        let from_grouped: Amount = serde_json::from_str("\"1,234.50\"").unwrap();
        for amount in [from_number, from_string, from_grouped] {
            assert_eq!(format_money(amount.value(), &naira), "₦1,234.50");
        }
    }

    #[test]
    fn uses_configured_symbol() {
        let dollars = Currency::new("$");
        assert_eq!(format_money(Decimal::new(12345, 1), &dollars), "$1,234.50");
    }

    #[test]
    fn negative_sign_follows_symbol() {
        assert_eq!(
            format_money(Decimal::new(-5, 1), &Currency::default()),
            "₦-0.50"
        );
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(
            format_money(Decimal::new(1005, 3), &Currency::new("$")),
            "$1.01"
        );
    }

    #[test]
    fn currency_is_never_empty_or_long() {
        assert_eq!(Currency::new("   ").symbol(), FALLBACK_SYMBOL);
        assert_eq!(Currency::new(" GHS ").symbol(), "GHS");
        assert_eq!(Currency::new("USDX").symbol(), "USD");
        assert_eq!(Currency::new("₦₦₦₦").symbol(), "₦₦₦");
    }

    #[test]
    fn parse_amount_edge_cases() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("  "), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(" 12.5 "), Some(Decimal::new(125, 1)));
        assert_eq!(parse_amount("1e3"), Some(Decimal::new(1000, 0)));
        assert_eq!(amount_or_zero("nope"), Decimal::ZERO);
    }

    #[test]
    fn separators_only_accepted_from_server() {
        assert_eq!(parse_amount("1,5"), None);
        assert_eq!(parse_amount("1,234.50"), None);
        assert_eq!(amount_or_zero("1,5"), Decimal::ZERO);
        let grouped: Amount = serde_json::from_str("\"1,234.50\"").unwrap();
        assert_eq!(grouped.value(), Decimal::new(123450, 2));
    }

    #[test]
    fn null_amount_is_zero() {
        let amount: Amount = serde_json::from_str("null").unwrap();
        assert_eq!(amount.value(), Decimal::ZERO);
    }

    #[test]
    fn serializes_with_two_decimals() {
        let json = serde_json::to_string(&Amount(Decimal::new(10, 0))).unwrap();
        assert_eq!(json, "\"10.00\"");
    }
}
