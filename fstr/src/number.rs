//! Numeric rendering for `,` / `.Nf` / `,.Nf` format specs
//!
//! Fixed precision uses the standard library's float-to-fixed conversion,
//! which rounds the exact binary value correctly: a true tie (only possible
//! when the value is exactly representable, such as `0.125` or `2.5`) goes to
//! the even digit. `1.005` is stored slightly below the tie and rounds down.

use crate::error::InterpolateError;
use crate::template::FormatSpec;

/// Render a number according to a format spec
///
/// Fails only for a spec with neither grouping nor precision, which the
/// template parser never produces.
pub fn format_number(value: f64, spec: &FormatSpec) -> Result<String, InterpolateError> {
    if !spec.is_valid() {
        return Err(InterpolateError::InvalidFormatSpec { spec: *spec });
    }

    let rendered = match spec.precision {
        Some(precision) => format!("{:.prec$}", value, prec = precision as usize),
        None => format!("{:.0}", value),
    };

    if spec.grouping {
        Ok(group(rendered, value))
    } else {
        Ok(rendered)
    }
}

fn group(rendered: String, value: f64) -> String {
    // "inf" and "NaN" have no digits to group
    if value.is_finite() {
        add_thousands_sep(&rendered)
    } else {
        rendered
    }
}

/// Add thousands separator to a number string
///
/// Only the integer part is grouped; a leading sign is kept out of the count.
pub fn add_thousands_sep(s: &str) -> String {
    let (int_part, dec_part) = match s.find('.') {
        Some(pos) => (&s[..pos], &s[pos..]),
        None => (s, ""),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(s.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.push_str(dec_part);
    grouped
}
