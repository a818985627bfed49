use std::iter;

/// Fractional digits shown for scaled amounts. Extra digits are truncated,
/// never rounded, so a displayed balance is never more than what is held.
pub const DISPLAY_PRECISION: usize = 2;

/// Format a raw on-chain integer amount for display.
///
/// * `decimals == None` → `raw` unchanged, `symbol` ignored.
/// * otherwise `raw / 10^decimals`, truncated to [`DISPLAY_PRECISION`]
///   digits, thousands grouped, followed by ` {symbol}` when given.
///
/// Input that is not a non-negative integer string is returned unchanged.
pub fn format_value(raw: &str, decimals: Option<u32>, symbol: Option<&str>) -> String {
    format_value_with(raw, decimals, symbol, DISPLAY_PRECISION)
}

/// [`format_value`] with an explicit display precision.
pub fn format_value_with(
    raw: &str,
    decimals: Option<u32>,
    symbol: Option<&str>,
    precision: usize,
) -> String {
    let Some(decimals) = decimals else {
        return raw.to_string();
    };

    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    let amount = shift_decimal_point(digits, decimals as usize, precision);
    match symbol.map(str::trim).filter(|s| !s.is_empty()) {
        Some(sym) => format!("{amount} {sym}"),
        None => amount,
    }
}

/// Divide a digit string by `10^decimals` and keep `precision` fractional
/// digits, truncating toward zero.
fn shift_decimal_point(digits: &str, decimals: usize, precision: usize) -> String {
    let len = digits.len();
    let (int_digits, leading_zeros, frac_digits) = if len > decimals {
        (&digits[..len - decimals], 0, &digits[len - decimals..])
    } else {
        ("", decimals - len, digits)
    };

    let int_digits = int_digits.trim_start_matches('0');
    let int_part = group_thousands(if int_digits.is_empty() { "0" } else { int_digits });

    if precision == 0 {
        return int_part;
    }

    let frac: String = iter::repeat('0')
        .take(leading_zeros)
        .chain(frac_digits.chars())
        .chain(iter::repeat('0'))
        .take(precision)
        .collect();

    format!("{int_part}.{frac}")
}

/// Insert `,` between every group of three integer digits.
pub fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_balance() {
        assert_eq!(format_value("0", Some(8), Some("CKB")), "0.00 CKB");
    }

    #[test]
    fn truncates_instead_of_rounding() {
        assert_eq!(format_value("123456789", Some(8), Some("CKB")), "1.23 CKB");
        assert_eq!(format_value("199999999", Some(8), Some("CKB")), "1.99 CKB");
    }

    #[test]
    fn unknown_scale_is_passthrough() {
        assert_eq!(format_value("123456789", None, Some("CKB")), "123456789");
        assert_eq!(format_value("not-a-number", None, None), "not-a-number");
    }

    #[test]
    fn fewer_digits_than_decimals() {
        assert_eq!(format_value("5", Some(2), Some("X")), "0.05 X");
        assert_eq!(format_value("5", Some(3), Some("X")), "0.00 X");
        assert_eq!(format_value("12345", Some(18), None), "0.00");
    }

    #[test]
    fn groups_integer_part() {
        assert_eq!(
            format_value("123456789000000000", Some(8), Some("CKB")),
            "1,234,567,890.00 CKB"
        );
        assert_eq!(group_thousands("100"), "100");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("0"), "0");
    }

    #[test]
    fn missing_symbol_has_no_suffix() {
        assert_eq!(format_value("250", Some(2), None), "2.50");
        assert_eq!(format_value("250", Some(2), Some("")), "2.50");
    }

    #[test]
    fn zero_decimals() {
        assert_eq!(format_value("1234", Some(0), Some("PTS")), "1,234.00 PTS");
    }

    #[test]
    fn wider_than_any_machine_integer() {
        let raw = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        let out = format_value(raw, Some(18), Some("ETH"));
        assert!(out.starts_with(concat!(
            "115,792,089,237,316,195,423,570,985,008,",
            "687,907,853,269,984,665,640,564,039,457."
        )));
        assert!(out.ends_with(".58 ETH"));
    }

    #[test]
    fn leading_zeros_in_input() {
        assert_eq!(format_value("000150", Some(2), None), "1.50");
    }

    #[test]
    fn malformed_input_passes_through() {
        assert_eq!(format_value("-5", Some(2), Some("X")), "-5");
        assert_eq!(format_value("1.5", Some(2), Some("X")), "1.5");
        assert_eq!(format_value("", Some(2), Some("X")), "");
    }

    #[test]
    fn custom_precision() {
        assert_eq!(format_value_with("123456789", Some(8), None, 4), "1.2345");
        assert_eq!(format_value_with("123456789", Some(8), None, 0), "1");
    }

    #[test]
    fn integer_part_never_exceeds_input() {
        for raw in ["0", "1", "9", "10", "99", "100", "999999", "1000001", "987654321987654321"] {
            let v: u128 = raw.parse().unwrap();
            for decimals in 0u32..=20 {
                let shown = format_value(raw, Some(decimals), None);
                let int_part: u128 = shown
                    .split('.')
                    .next()
                    .unwrap()
                    .replace(',', "")
                    .parse()
                    .unwrap();
                assert!(int_part * 10u128.pow(decimals) <= v, "{raw} / 10^{decimals} -> {shown}");
                let frac: u128 = shown.split('.').nth(1).unwrap().parse().unwrap();
                let scaled = int_part * 100 + frac;
                assert!(
                    scaled * 10u128.pow(decimals) <= v * 100,
                    "{raw} / 10^{decimals} -> {shown}"
                );
            }
        }
    }
}
