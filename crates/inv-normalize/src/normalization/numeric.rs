//! Numeric formatting with Indonesian separators.

/// Maximum number of fraction digits shown.
const MAX_FRACTION_DIGITS: usize = 3;

/// Formats an amount as Rupiah, e.g. `Rp 12.500.000`.
pub fn format_rupiah(amount: f64) -> String {
    format!("Rp {}", format_id_number(amount))
}

/// Formats a number with `.` thousands separators and `,` as the decimal
/// separator, rounding to three fraction digits and trimming trailing zeros.
pub fn format_id_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let symbol = if value.is_sign_negative() { "-∞" } else { "∞" };
        return symbol.to_string();
    }

    let rounded = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = rounded
        .split_once('.')
        .unwrap_or((rounded.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let is_zero = int_part == "0" && frac.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    let grouped = group_thousands(int_part);

    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{frac}")
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_rupiah(12_500_000.0), "Rp 12.500.000");
        assert_eq!(format_rupiah(999.0), "Rp 999");
        assert_eq!(format_rupiah(1000.0), "Rp 1.000");
        assert_eq!(format_rupiah(0.0), "Rp 0");
    }

    #[test]
    fn keeps_up_to_three_fraction_digits() {
        assert_eq!(format_id_number(1234.5), "1.234,5");
        assert_eq!(format_id_number(0.12345), "0,123");
        assert_eq!(format_id_number(-1500.25), "-1.500,25");
        assert_eq!(format_id_number(-0.0001), "0");
    }
}
