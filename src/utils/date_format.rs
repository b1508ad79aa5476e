use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-dd HH:mm:ss";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateFormatError {
    #[error("date format is empty")]
    Empty,
    #[error("unsupported pattern letter '{0}'")]
    UnsupportedLetter(char),
    #[error("unterminated quote in date format")]
    UnterminatedQuote,
    #[error("date format has no '{0}' field")]
    MissingField(char),
}

/// A `yyyy-MM-dd HH:mm:ss` style pattern compiled to a chrono format
/// string.
///
/// Supported letters: `y` (`yy` two-digit year, otherwise four digits),
/// `M` (`MMM` short and `MMMM` full month names), `d`, `H`, `m`, `s` and
/// `S` (milliseconds). Text inside single quotes is literal, `''` is a
/// quote. A pattern with any date field needs year, month and day; one
/// with any time field needs hour and minute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
    chrono_format: String,
    has_date: bool,
    has_time: bool,
}

impl DateFormat {
    pub fn new(pattern: &str) -> Result<Self, DateFormatError> {
        if pattern.is_empty() {
            return Err(DateFormatError::Empty);
        }

        let mut chrono_format = String::with_capacity(pattern.len() * 2);
        let mut seen = Vec::new();
        let mut chars = pattern.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    chrono_format.push('\'');
                    continue;
                }
                loop {
                    match chars.next() {
                        Some('\'') if chars.peek() == Some(&'\'') => {
                            chars.next();
                            chrono_format.push('\'');
                        }
                        Some('\'') => break,
                        Some(lit) => push_literal(&mut chrono_format, lit),
                        None => return Err(DateFormatError::UnterminatedQuote),
                    }
                }
                continue;
            }

            if !ch.is_ascii_alphabetic() {
                push_literal(&mut chrono_format, ch);
                continue;
            }

            let mut run = 1;
            while chars.peek() == Some(&ch) {
                chars.next();
                run += 1;
            }

            let spec = match (ch, run) {
                ('y', 2) => "%y",
                ('y', _) => "%Y",
                ('M', 1 | 2) => "%m",
                ('M', 3) => "%b",
                ('M', _) => "%B",
                ('d', _) => "%d",
                ('H', _) => "%H",
                ('m', _) => "%M",
                ('s', _) => "%S",
                ('S', _) => "%3f",
                (other, _) => return Err(DateFormatError::UnsupportedLetter(other)),
            };
            seen.push(ch);
            chrono_format.push_str(spec);
        }

        let has_date = seen.iter().any(|c| matches!(c, 'y' | 'M' | 'd'));
        let has_time = seen.iter().any(|c| matches!(c, 'H' | 'm' | 's' | 'S'));
        let mut required = Vec::new();
        if has_date {
            required.extend(['y', 'M', 'd']);
        }
        if has_time {
            required.extend(['H', 'm']);
        }
        if let Some(&missing) = required.iter().find(|c| !seen.contains(*c)) {
            return Err(DateFormatError::MissingField(missing));
        }

        Ok(DateFormat {
            pattern: pattern.to_string(),
            chrono_format,
            has_date,
            has_time,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parses `input`, returning `None` when it does not match the
    /// pattern. Date-only patterns yield midnight; time-only patterns
    /// are placed on 1970-01-01.
    pub fn parse(&self, input: &str) -> Option<NaiveDateTime> {
        match (self.has_date, self.has_time) {
            (true, true) => NaiveDateTime::parse_from_str(input, &self.chrono_format).ok(),
            (true, false) => NaiveDate::parse_from_str(input, &self.chrono_format)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN)),
            (false, true) => {
                let time = NaiveTime::parse_from_str(input, &self.chrono_format).ok()?;
                NaiveDate::from_ymd_opt(1970, 1, 1).map(|date| date.and_time(time))
            }
            (false, false) => None,
        }
    }
}

fn push_literal(out: &mut String, ch: char) {
    if ch == '%' {
        out.push_str("%%");
    } else {
        out.push(ch);
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        DateFormat {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
            chrono_format: "%Y-%m-%d %H:%M:%S".to_string(),
            has_date: true,
            has_time: true,
        }
    }
}

impl FromStr for DateFormat {
    type Err = DateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateFormat::new(s)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
