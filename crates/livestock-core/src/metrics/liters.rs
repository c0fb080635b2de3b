//! Milk production figures typed as free text.

/// Parse a liters value such as `"3.5"`, `"4,2"` or `"12 L"`.
///
/// The first comma is taken as the decimal separator, then the longest
/// numeric prefix is read (leading whitespace skipped, trailing text
/// ignored). Returns `None` when there is no number or it is not finite.
pub fn parse_liters(raw: &str) -> Option<f64> {
    leading_number(&raw.replacen(',', ".", 1))
}

fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Mean of every parsable value, `0.0` when none parse.
pub fn average_liters<'a, I>(values: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let (sum, count) = values
        .into_iter()
        .filter_map(parse_liters)
        .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return 0.0;
    }
    let avg = sum / count as f64;
    if avg.is_finite() {
        avg
    } else {
        0.0
    }
}

/// Round to one decimal, halves away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Display form with exactly one decimal (`"3.9"`).
pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", round_one_decimal(value))
}
