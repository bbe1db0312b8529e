//! Number <-> display string conversion
//!
//! The display shows the shortest decimal string that round-trips to the
//! same `f64`, laid out with the ECMAScript `Number::toString` rules
//! (plain notation between `1e-7` and `1e21`, exponential outside).
//! Parsing follows `parseFloat`: the longest numeric prefix wins and
//! anything else is NaN.

/// Largest decimal exponent printed without exponential notation
const MAX_PLAIN_EXPONENT: i32 = 21;

/// Smallest decimal exponent printed without exponential notation
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Formats a value for the display
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3"
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{sign}{scientific}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{sign}{scientific}");
    };

    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    format!("{sign}{}", layout_digits(&digits, exponent + 1))
}

/// Lays out significant `digits` whose value is `0.digits × 10^point`
fn layout_digits(digits: &str, point: i32) -> String {
    let len = digits.len() as i32;

    if len <= point && point <= MAX_PLAIN_EXPONENT {
        return format!("{digits}{}", "0".repeat((point - len) as usize));
    }

    if 0 < point && point <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(point as usize);
        return format!("{int_part}.{frac_part}");
    }

    if MIN_PLAIN_EXPONENT < point && point <= 0 {
        return format!("0.{}{digits}", "0".repeat((-point) as usize));
    }

    let exponent = point - 1;
    let exp_sign = if exponent >= 0 { '+' } else { '-' };
    let (first, rest) = digits.split_at(1);
    if rest.is_empty() {
        format!("{first}e{exp_sign}{}", exponent.abs())
    } else {
        format!("{first}.{rest}e{exp_sign}{}", exponent.abs())
    }
}

/// Parses the longest numeric prefix of `text`, NaN if there is none
#[must_use]
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut mantissa_digits = int_digits;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[end + 1..]);
        // "5." is a complete literal, a lone "." is not
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
        mantissa_digits += frac_digits;
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
