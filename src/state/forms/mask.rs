//! Phone input mask for the template `(00) 00000-0000`
//!
//! The mask owns the display string of the phone field: every edit is
//! reduced to the raw digits, clamped to the template capacity, and
//! reformatted from scratch. Non-digit keystrokes are discarded.

/// Digit capacity of the template
const MAX_DIGITS: usize = 11;

/// Extract the raw digits from a (possibly partially) masked value
pub fn digits(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_DIGITS)
        .collect()
}

/// Format raw digits into the template, filling left to right.
///
/// Partial input yields a partial mask: `119` renders as `(11) 9`.
pub fn format(raw: &str) -> String {
    let ds: Vec<char> = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_DIGITS)
        .collect();

    if ds.is_empty() {
        return String::new();
    }

    let mut out = String::from("(");
    for (i, d) in ds.iter().enumerate() {
        match i {
            2 => out.push_str(") "),
            7 => out.push('-'),
            _ => {}
        }
        out.push(*d);
    }
    out
}

/// Apply a keystroke to a masked value. Non-digits and digits beyond
/// the template capacity are dropped.
pub fn push(value: &str, c: char) -> String {
    if !c.is_ascii_digit() {
        return value.to_string();
    }
    let mut ds = digits(value);
    if ds.len() >= MAX_DIGITS {
        return value.to_string();
    }
    ds.push(c);
    format(&ds)
}

/// Remove the last digit from a masked value and reformat
pub fn pop(value: &str) -> String {
    let mut ds = digits(value);
    ds.pop();
    format(&ds)
}
