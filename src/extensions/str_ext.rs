/// Lenient float parsing that reads the longest numeric prefix of a string.
///
/// Leading whitespace is skipped, trailing garbage is ignored and a string without a numeric
/// prefix yields `NaN`, so `"12.5km"` parses to `12.5` and `"abc"` to `NaN`.
pub trait FloatPrefix {
    fn parse_float_prefix(&self) -> f64;
}

impl FloatPrefix for str {
    fn parse_float_prefix(&self) -> f64 {
        let trimmed = self.trim_start();
        let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
        if unsigned.starts_with("Infinity") {
            return if trimmed.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
        }

        let end = numeric_prefix_len(trimmed);
        trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
    }
}

/// Length in bytes of `[+-]?(digits[.digits]|.digits)([eE][+-]?digits)?` at the start of `s`, or 0.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| start + bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = if matches!(bytes.first(), Some(b'+' | b'-')) { 1 } else { 0 };
    let integer_end = digits_from(end);
    let mut digits = integer_end - end;
    end = integer_end;

    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        let fraction_digits = fraction_end - (end + 1);
        if digits > 0 || fraction_digits > 0 {
            digits += fraction_digits;
            end = fraction_end;
        }
    }

    if digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_start = end + 1;
        if matches!(bytes.get(exponent_start), Some(b'+' | b'-')) {
            exponent_start += 1;
        }
        let exponent_end = digits_from(exponent_start);
        if exponent_end > exponent_start {
            end = exponent_end;
        }
    }

    end
}
