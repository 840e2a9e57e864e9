//! # Display Number Formatting
//!
//! Conversion between `f64` values and the text shown on the calculator
//! display.
//!
//! - [`format_number`] renders the shortest round-trip digits in plain
//!   notation for magnitudes in `[1e-6, 1e21)` and exponent notation
//!   otherwise. When two shortest candidates are equally close, the one with
//!   the even last digit wins.
//! - [`normalize`] rounds to [`SIGNIFICANT_DIGITS`] first, hiding binary
//!   representation noise such as `0.1 + 0.2 = 0.30000000000000004`.
//!   Exact ties round away from zero.
//! - [`parse_display`] reads the numeric prefix of display text, so partial
//!   entries like `"0."` or carried-over text like `"Infinity"` still parse.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::format::{format_number, normalize, parse_display};
//!
//! assert_eq!(format_number(100.0), "100");
//! assert_eq!(format_number(1e21), "1e+21");
//! assert_eq!(normalize(0.1 + 0.2), "0.3");
//! assert_eq!(parse_display("0."), 0.0);
//! ```

/// Significant digits kept when normalizing a computed result
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Largest decimal exponent (exclusive) still written in plain notation
const MAX_PLAIN_EXPONENT: i32 = 21;

/// Smallest decimal exponent (exclusive) still written in plain notation
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Precision that prints every digit of an `f64` exactly (767 significant digits)
const EXACT_PRECISION: usize = 766;

/// Render a value the way the display shows it.
///
/// Integers have no fractional part, `-0` renders as `"0"`, and non-finite
/// values render as `Infinity`, `-Infinity` or `NaN`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let Some((digits, exponent)) = shortest_digits(value.abs()) else {
        return value.to_string();
    };

    let mut out = String::with_capacity(digits.len() + 8);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&layout_digits(&digits, exponent + 1));
    out
}

/// Split `d.ddde<exp>` into its digits (no point) and exponent
fn split_scientific(text: &str) -> Option<(String, i32)> {
    let (mantissa, exponent) = text.split_once('e')?;
    let exponent = exponent.parse::<i32>().ok()?;
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    Some((digits, exponent))
}

/// Exact decimal expansion of a positive finite value, trailing zeros removed
fn exact_digits(value: f64) -> Option<(String, i32)> {
    let (digits, exponent) = split_scientific(&format!("{:.*e}", EXACT_PRECISION, value))?;
    let trimmed = digits.trim_end_matches('0');
    let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
    Some((trimmed.to_string(), exponent))
}

/// Add one unit in the last place. Returns the new digits and whether the
/// carry added a leading digit.
fn increment_digits(digits: &str) -> (String, bool) {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return (String::from_utf8_lossy(&bytes).into_owned(), false);
        }
    }
    bytes.insert(0, b'1');
    (String::from_utf8_lossy(&bytes).into_owned(), true)
}

/// Parse `digits` whose first digit sits at `10^exponent`
fn digits_to_f64(digits: &str, exponent: i32) -> Option<f64> {
    let scale = exponent - (digits.len() as i32 - 1);
    format!("{}e{}", digits, scale).parse().ok()
}

/// Shortest round-trip digits of a positive finite value.
///
/// `{:e}` picks the shortest digit string that parses back to `value`. When
/// `value` lies exactly halfway between two such strings it may pick the odd
/// one; the even neighbour is preferred instead.
fn shortest_digits(value: f64) -> Option<(String, i32)> {
    let (digits, exponent) = split_scientific(&format!("{:e}", value))?;

    let Some((exact, exact_exponent)) = exact_digits(value) else {
        return Some((digits, exponent));
    };
    let last_place = exponent - (digits.len() as i32 - 1);
    let exact_last_place = exact_exponent - (exact.len() as i32 - 1);

    // Halfway: the exact expansion ends in a 5 one place below the last digit
    let is_midpoint = exact_last_place == last_place - 1 && exact.ends_with('5') && exact.len() > 1;
    let last_is_odd = digits.bytes().last().is_some_and(|b| (b - b'0') % 2 == 1);
    if !is_midpoint || !last_is_odd {
        return Some((digits, exponent));
    }

    let floor = &exact[..exact.len() - 1];
    let (ceil, carried) = increment_digits(floor);
    let floor_is_even = floor.bytes().last().is_some_and(|b| (b - b'0') % 2 == 0);
    let (even, even_exponent) = if floor_is_even {
        (floor.to_string(), exact_exponent)
    } else {
        (ceil, exact_exponent + i32::from(carried))
    };

    if digits_to_f64(&even, even_exponent) != Some(value) {
        return Some((digits, exponent));
    }
    let even = even.trim_end_matches('0');
    if even.is_empty() {
        return Some((digits, exponent));
    }
    Some((even.to_string(), even_exponent))
}

/// Place significant `digits` around the decimal point.
///
/// `point` is the position of the decimal point relative to the first digit
/// (the value is `0.digits * 10^point`).
fn layout_digits(digits: &str, point: i32) -> String {
    let count = digits.len() as i32;

    if count <= point && point <= MAX_PLAIN_EXPONENT {
        // Integer: pad with trailing zeros
        let mut s = digits.to_string();
        s.extend(std::iter::repeat('0').take((point - count) as usize));
        s
    } else if 0 < point && point <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{}.{}", int_part, frac_part)
    } else if MIN_PLAIN_EXPONENT < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let exponent = point - 1;
        let sign = if exponent >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, exponent.abs())
        }
    }
}

/// Round a value to `digits` significant decimal digits.
///
/// Rounds on the exact decimal expansion; a tail of exactly one half rounds
/// the magnitude up. Non-finite values pass through untouched.
pub fn round_to_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0.0 || digits == 0 {
        return value;
    }
    let Some((exact, exponent)) = exact_digits(value.abs()) else {
        return value;
    };
    if exact.len() <= digits {
        return value;
    }

    let (head, tail) = exact.split_at(digits);
    let (kept, kept_exponent) = if tail.as_bytes()[0] >= b'5' {
        let (rounded, carried) = increment_digits(head);
        (rounded, exponent + i32::from(carried))
    } else {
        (head.to_string(), exponent)
    };

    match digits_to_f64(&kept, kept_exponent) {
        Some(magnitude) => magnitude.copysign(value),
        None => value,
    }
}

/// Round to [`SIGNIFICANT_DIGITS`] and render for the display.
pub fn normalize(value: f64) -> String {
    format_number(round_to_significant(value, SIGNIFICANT_DIGITS))
}

/// Parse the numeric prefix of display text.
///
/// Accepts an optional sign followed by `Infinity` or a decimal literal with
/// an optional exponent. Anything after the prefix is ignored. Text with no
/// numeric prefix parses as NaN.
pub fn parse_display(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    if rest.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let len = numeric_prefix_len(rest);
    if len == 0 {
        return f64::NAN;
    }
    rest[..len]
        .parse::<f64>()
        .map(|v| sign * v)
        .unwrap_or(f64::NAN)
}

/// Length in bytes of the longest decimal literal at the start of `s`.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = digits_from(0);
    let mut end = int_digits;
    let mut frac_digits = 0;

    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = digits_from(exp_start);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    end
}
