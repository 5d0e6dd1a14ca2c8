use std::fmt::{Display, Write};

/// Replace `%s` placeholders in `template` left to right with `args`.
///
/// `%%` renders a literal `%`. Placeholders left over once `args` runs out stay
/// as a literal `%s`; arguments beyond the last placeholder are ignored. Any
/// other `%` sequence is copied through unchanged.
pub fn format_positional(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('s') => {
                chars.next();
                match args.next() {
                    // Writing into a String cannot fail
                    Some(arg) => {
                        let _ = write!(out, "{arg}");
                    }
                    None => out.push_str("%s"),
                }
            }
            Some('%') => {
                chars.next();
                out.push('%');
            }
            _ => out.push('%'),
        }
    }

    out
}

/// Parse the leading base-10 integer of `input`, the way plural counts are read.
///
/// Leading whitespace and a single sign are accepted, parsing stops at the first
/// non-digit (`"2.5"` reads as `2`), and input without any leading digit yields
/// `None`. Values past the `i64` range saturate.
pub fn parse_count(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits.chars().map_while(|c| c.to_digit(10)) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
