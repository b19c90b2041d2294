//! Fixed-point decimal formatting.
//!
//! Values are rounded to the nearest decimal with the requested number of
//! places. When a value lies exactly halfway between two decimals, the one
//! farther from zero is chosen (so `0.03125` becomes `"0.0313"`). Negative
//! zero is printed without a sign.

/// Largest magnitude below which a double can still have a fractional part.
const FRACTIONAL_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

/// Format `value` with exactly `places` digits after the decimal point.
pub fn to_fixed(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let value = if value == 0.0 { 0.0 } else { value };

    match halfway_digits(value, places) {
        Some(digits) => {
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{}{}", sign, insert_point(&digits, places))
        }
        None => format!("{:.*}", places, value),
    }
}

/// For a value exactly halfway between two decimals, the digits of the
/// rounded-away-from-zero result without a decimal point.
///
/// A double `x` is halfway at `p` places iff `x * 2^(p+1)` is an odd integer.
fn halfway_digits(value: f64, places: usize) -> Option<String> {
    if places > 20 {
        return None;
    }
    let magnitude = value.abs();
    if magnitude >= FRACTIONAL_LIMIT {
        return None;
    }

    let scaled = magnitude * f64::from(1u32 << (places + 1));
    if scaled.fract() != 0.0 {
        return None;
    }
    let odd = scaled as u128;
    if odd % 2 == 0 {
        return None;
    }

    // |x| * 10^p = odd * 5^p / 2, rounded up.
    let rounded = (odd * 5u128.pow(places as u32) + 1) / 2;
    Some(rounded.to_string())
}

fn insert_point(digits: &str, places: usize) -> String {
    if places == 0 {
        return digits.to_string();
    }
    let padded = format!("{:0>width$}", digits, width = places + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - places);
    format!("{}.{}", int_part, frac_part)
}
