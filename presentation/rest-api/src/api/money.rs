use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};

/// Renders an amount with exactly two fractional digits, e.g. `"5.00"`.
pub fn format_money(value: &BigDecimal) -> String {
    value.with_scale_round(2, RoundingMode::HalfUp).to_string()
}

const MAX_INTEGER_DIGITS: usize = 12;
const MAX_FRACTION_DIGITS: usize = 6;

/// Parses a decimal amount sent by a client, e.g. `"4.99"`.
///
/// Only plain notation is accepted: no exponent, at most
/// `MAX_INTEGER_DIGITS` before the point and `MAX_FRACTION_DIGITS` after it.
/// Sign is preserved so the domain can reject negatives with its own error.
pub fn parse_money(raw: &str) -> Option<BigDecimal> {
    let raw = raw.trim();
    let unsigned = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let plain = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if integer.is_empty()
        || integer.len() > MAX_INTEGER_DIGITS
        || fraction.len() > MAX_FRACTION_DIGITS
        || !plain(integer)
        || !plain(fraction)
    {
        return None;
    }

    BigDecimal::from_str(raw).ok()
}
