// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Translation of dashboard display patterns (`dd/MM/yyyy h:mm a`) to strftime.

/// Translates a display pattern into a strftime format string.
///
/// Supported tokens:
///
/// | Token  | Meaning                 | Example     |
/// |--------|-------------------------|-------------|
/// | `yyyy` | year                    | `2024`      |
/// | `yy`   | two-digit year          | `24`        |
/// | `MMMM` | month name              | `June`      |
/// | `MMM`  | short month name        | `Jun`       |
/// | `MM`   | month, zero padded      | `06`        |
/// | `M`    | month                   | `6`         |
/// | `dd`   | day, zero padded        | `05`        |
/// | `d`    | day                     | `5`         |
/// | `EEEE` | weekday name            | `Saturday`  |
/// | `EEE`  | short weekday name      | `Sat`       |
/// | `HH`   | 24-hour, zero padded    | `07`        |
/// | `H`    | 24-hour                 | `7`         |
/// | `hh`   | 12-hour, zero padded    | `07`        |
/// | `h`    | 12-hour                 | `7`         |
/// | `mm`   | minute, zero padded     | `05`        |
/// | `m`    | minute                  | `5`         |
/// | `ss`   | second, zero padded     | `09`        |
/// | `s`    | second                  | `9`         |
/// | `a`    | meridiem                | `PM`        |
///
/// Text in single quotes is copied verbatim, `''` is a literal quote. Other
/// letters are copied as-is.
pub fn to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                    continue;
                }
                while let Some(lit) = chars.next() {
                    if lit == '\'' {
                        if chars.peek() == Some(&'\'') {
                            chars.next();
                            out.push('\'');
                            continue;
                        }
                        break;
                    }
                    push_literal(&mut out, lit);
                }
            }
            c if c.is_ascii_alphabetic() => {
                let mut run = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    run += 1;
                }
                push_token(&mut out, c, run);
            }
            c => push_literal(&mut out, c),
        }
    }

    out
}

fn push_token(out: &mut String, c: char, run: usize) {
    let directive = match (c, run) {
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('d', 1) => "%-d",
        ('d', _) => "%d",
        ('E', 1..=3) => "%a",
        ('E', _) => "%A",
        ('H', 1) => "%-H",
        ('H', _) => "%H",
        ('h', 1) => "%-I",
        ('h', _) => "%I",
        ('m', 1) => "%-M",
        ('m', _) => "%M",
        ('s', 1) => "%-S",
        ('s', _) => "%S",
        ('a', _) => "%p",
        _ => {
            for _ in 0..run {
                push_literal(out, c);
            }
            return;
        }
    };
    out.push_str(directive);
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_dashboard_pattern() {
        assert_eq!(to_strftime("dd/MM/yyyy h:mm a"), "%d/%m/%Y %-I:%M %p");
    }

    #[test]
    fn translates_time_only_patterns() {
        assert_eq!(to_strftime("HH:mm"), "%H:%M");
        assert_eq!(to_strftime("HH:mm:ss"), "%H:%M:%S");
        assert_eq!(to_strftime("h:mm a"), "%-I:%M %p");
    }

    #[test]
    fn translates_names() {
        assert_eq!(to_strftime("EEEE, MMMM d"), "%A, %B %-d");
        assert_eq!(to_strftime("EEE MMM yy"), "%a %b %y");
    }

    #[test]
    fn keeps_quoted_literals() {
        assert_eq!(to_strftime("'at' h a"), "at %-I %p");
        assert_eq!(to_strftime("h 'o''clock'"), "%-I o'clock");
        assert_eq!(to_strftime("''"), "'");
    }

    #[test]
    fn escapes_percent_and_keeps_unknown_letters() {
        assert_eq!(to_strftime("100% Q"), "100%% Q");
        assert_eq!(to_strftime("'50%'"), "50%%");
    }
}
