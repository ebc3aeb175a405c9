#![forbid(unsafe_code)]

//! Digit grouping for slider labels.

/// Insert `separator` between every three digits of the integer portion,
/// counting from the right. A fractional portion is appended verbatim and
/// never grouped; the sign is not grouped either.
///
/// `None` formats as the empty string (an unset label renders as nothing).
///
/// ```
/// use rangekit_core::group_digits;
///
/// assert_eq!(group_digits(Some(1_234_567.0), " "), "1 234 567");
/// assert_eq!(group_digits(Some(-1234.5), ","), "-1,234.5");
/// assert_eq!(group_digits(None, " "), "");
/// ```
#[must_use]
pub fn group_digits(value: Option<f64>, separator: &str) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let text = value.to_string();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (rest, None),
    };

    let mut out = String::with_capacity(text.len() + separator.len() * (int_part.len() / 3));
    out.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(digit);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
