// SPDX-License-Identifier: MPL-2.0
//! Rupiah price formatting following the `id-ID` number convention.
//!
//! Thousands are grouped with `.` and decimals use `,`, with at most three
//! fraction digits. Card labels wrap the number as `Rp. {number},-`.

/// Maximum fraction digits kept by the `id-ID` number format.
const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a price for display on product cards, e.g. `Rp. 1.500.000,-`.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("Rp. {},-", format_id_number(price))
}

/// Formats a number with `id-ID` grouping (`1234567.891` → `1.234.567,891`).
#[must_use]
pub fn format_id_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = rounded
        .split_once('.')
        .unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + integer.len() / 3 + 1);
    if value < 0.0 && (integer != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        out.push(',');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_periods() {
        assert_eq!(format_id_number(0.0), "0");
        assert_eq!(format_id_number(999.0), "999");
        assert_eq!(format_id_number(1000.0), "1.000");
        assert_eq!(format_id_number(1_500_000.0), "1.500.000");
        assert_eq!(format_id_number(12_345_678.0), "12.345.678");
    }

    #[test]
    fn keeps_up_to_three_fraction_digits() {
        assert_eq!(format_id_number(1234.5), "1.234,5");
        assert_eq!(format_id_number(0.125), "0,125");
        assert_eq!(format_id_number(1.23456), "1,235");
        assert_eq!(format_id_number(2.0004), "2");
    }

    #[test]
    fn card_label_wraps_number() {
        assert_eq!(format_price(1_500_000.0), "Rp. 1.500.000,-");
        assert_eq!(format_price(1234.5), "Rp. 1.234,5,-");
    }

    #[test]
    fn non_finite_values_degrade_to_text() {
        assert_eq!(format_price(f64::NAN), "Rp. NaN,-");
        assert_eq!(format_id_number(f64::INFINITY), "∞");
        assert_eq!(format_id_number(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_id_number(-2500.0), "-2.500");
        assert_eq!(format_id_number(-0.0001), "0");
    }
}
