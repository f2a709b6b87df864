// Lenient numeric reads from raw JSON fields.
// Strings are read by longest numeric prefix; anything unreadable becomes NaN
// (floats) or None (integers). Nothing here returns an error.

use serde_json::Value;

/// Read a float. Missing, null and non-numeric values give NaN.
pub(crate) fn float_field(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => float_prefix(s),
        _ => f64::NAN,
    }
}

/// Read a base-10 integer. Fractional parts are truncated.
pub(crate) fn int_field(value: Option<&Value>) -> Option<i64> {
    match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Some(Value::String(s)) => int_prefix(s),
        _ => None,
    }
}

/// Read a base-10 whole number as a float, so digit runs past the i64 range
/// keep their magnitude. Fractional parts are truncated.
pub(crate) fn whole_field(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().map_or(f64::NAN, f64::trunc),
        Some(Value::String(s)) => int_digits(s)
            .and_then(|digits| digits.parse().ok())
            .unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Longest leading decimal literal of `s`, after leading whitespace.
pub(crate) fn float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Longest leading base-10 integer of `s`, after leading whitespace.
/// `None` when there are no digits or the value overflows i64.
pub(crate) fn int_prefix(s: &str) -> Option<i64> {
    int_digits(s)?.parse().ok()
}

/// Leading sign and digit run of `s`, after leading whitespace.
fn int_digits(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    (digits > 0).then(|| &s[..sign + digits])
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
