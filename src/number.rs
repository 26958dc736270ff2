use std::iter::Peekable;
use std::str::{Chars, FromStr};

use log::debug;

/// Decimal and digit-group separators for reading numbers typed by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    decimal: char,
    group: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::invariant()
    }
}

impl NumberFormat {
    /// `1,234.5`
    pub fn invariant() -> Self {
        NumberFormat {
            decimal: '.',
            group: ',',
        }
    }

    /// `1.234,5`
    pub fn comma_decimal() -> Self {
        NumberFormat {
            decimal: ',',
            group: '.',
        }
    }

    pub fn decimal(&self) -> char {
        self.decimal
    }

    pub fn group(&self) -> char {
        self.group
    }

    /// Parse a whole token, or `None` if any of it is not part of a number in this format.
    pub fn parse(&self, token: &str) -> Option<f64> {
        if is_special(token) {
            return f64::from_str(token).ok();
        }
        let canonical = Scanner::new(token, *self).canonical()?;
        f64::from_str(&canonical).ok()
    }
}

/// Try the invariant format, then `fallback`.
pub fn parse_number(token: &str, fallback: NumberFormat) -> Option<f64> {
    NumberFormat::invariant().parse(token).or_else(|| {
        let val = fallback.parse(token);
        if val.is_some() {
            debug!(
                "`{}` parsed with fallback format (decimal `{}`, group `{}`)",
                token,
                fallback.decimal(),
                fallback.group()
            );
        }
        val
    })
}

/// `NaN`, `inf` and `infinity` in any case, optionally signed.
fn is_special(token: &str) -> bool {
    let word = token.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(token);
    ["nan", "inf", "infinity"]
        .iter()
        .any(|special| word.eq_ignore_ascii_case(special))
}

/// Rewrites a token into the form `f64::from_str` accepts.
struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    format: NumberFormat,
    out: String,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, format: NumberFormat) -> Self {
        Self {
            chars: input.chars().peekable(),
            format,
            out: String::with_capacity(input.len()),
        }
    }

    fn consume_if<P: FnOnce(char) -> bool>(&mut self, pred: P) -> Option<char> {
        self.chars.next_if(|c| pred(*c))
    }

    fn consume_sign(&mut self) {
        if let Some(c) = self.consume_if(|c| c == '+' || c == '-') {
            self.out.push(c);
        }
    }

    /// Digits, with group separators allowed after the first one. Returns the number of digits,
    /// or `None` if a separator leads.
    fn consume_digits(&mut self, grouped: bool) -> Option<usize> {
        let group = self.format.group;
        let mut digits = 0;
        while let Some(c) = self.consume_if(|c| c.is_ascii_digit() || (grouped && c == group)) {
            if c == group {
                if digits == 0 {
                    return None;
                }
            } else {
                self.out.push(c);
                digits += 1;
            }
        }
        Some(digits)
    }

    fn canonical(mut self) -> Option<String> {
        let decimal = self.format.decimal;

        self.consume_sign();
        let mut digits = self.consume_digits(true)?;

        if self.consume_if(|c| c == decimal).is_some() {
            self.out.push('.');
            digits += self.consume_digits(false)?;
        }

        if digits == 0 {
            return None;
        }

        if self.consume_if(|c| c == 'e' || c == 'E').is_some() {
            self.out.push('e');
            self.consume_sign();
            if self.consume_digits(false)? == 0 {
                return None;
            }
        }

        if self.chars.peek().is_some() {
            return None;
        }

        Some(self.out)
    }
}
