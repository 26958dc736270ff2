use std::io::{self, BufRead, Write};

use log::warn;
use smallvec::SmallVec;

use crate::number::{parse_number, NumberFormat};

pub type Numbers = SmallVec<[f64; 6]>;

/// Reads whitespace-separated numbers from `input`, writing prompts for missing or malformed
/// ones to `output`.
pub struct NumberReader<R, W> {
    input: R,
    output: W,
    fallback: NumberFormat,
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> NumberReader<R, W> {
    pub fn new(input: R, output: W, fallback: NumberFormat) -> Self {
        Self {
            input,
            output,
            fallback,
            buf: Vec::new(),
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// The next line, trimmed. `None` at end of input. Invalid UTF-8 is replaced, not an error.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).trim().to_string()))
    }

    /// Read exactly `count` numbers, spanning as many lines as it takes. Tokens beyond `count`
    /// on the final line are dropped.
    pub fn read_numbers(&mut self, count: usize) -> io::Result<Numbers> {
        let mut numbers = Numbers::new();

        while numbers.len() < count {
            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        format!("expected {} more number(s)", count - numbers.len()),
                    ))
                }
            };

            if line.is_empty() {
                writeln!(self.output, "Input empty. Please enter numbers:")?;
                continue;
            }

            for token in line.split_whitespace() {
                if numbers.len() >= count {
                    break;
                }
                match parse_number(token, self.fallback) {
                    Some(val) => numbers.push(val),
                    None => {
                        warn!("rejected token `{}`", token);
                        writeln!(self.output, "Could not parse '{}'. Enter a valid number.", token)?;
                    }
                }
            }

            if numbers.len() < count {
                writeln!(self.output, "Need {} more number(s)...", count - numbers.len())?;
            }
        }

        Ok(numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> NumberReader<Cursor<&str>, Vec<u8>> {
        NumberReader::new(Cursor::new(input), Vec::new(), NumberFormat::comma_decimal())
    }

    fn output(reader: NumberReader<Cursor<&str>, Vec<u8>>) -> String {
        String::from_utf8(reader.into_output()).unwrap()
    }

    #[test]
    fn test_single_line() {
        let mut r = reader("1 2.5 -3 4\n");
        assert_eq!(r.read_numbers(4).unwrap().as_slice(), &[1., 2.5, -3., 4.]);
        assert_eq!(output(r), "");
    }

    #[test]
    fn test_spans_lines_and_drops_extra() {
        let mut r = reader("1\t2\n\n3 4 5\n6\n");
        assert_eq!(r.read_numbers(4).unwrap().as_slice(), &[1., 2., 3., 4.]);
        // The rest of the line with `5` is gone; the next read starts on a fresh line.
        assert_eq!(r.read_numbers(1).unwrap().as_slice(), &[6.]);
        assert_eq!(
            output(r),
            "Need 2 more number(s)...\nInput empty. Please enter numbers:\n"
        );
    }

    #[test]
    fn test_bad_tokens() {
        let mut r = reader("1 x 2\n1.234,5\n");
        assert_eq!(r.read_numbers(3).unwrap().as_slice(), &[1., 2., 1234.5]);
        assert_eq!(
            output(r),
            "Could not parse 'x'. Enter a valid number.\nNeed 1 more number(s)...\n"
        );
    }

    #[test]
    fn test_non_finite_tokens_are_numbers() {
        let mut r = reader("NaN inf\n");
        let nums = r.read_numbers(2).unwrap();
        assert!(nums[0].is_nan());
        assert_eq!(nums[1], f64::INFINITY);
    }

    #[test]
    fn test_invalid_utf8_is_a_bad_token() {
        let mut r = NumberReader::new(
            Cursor::new(&b"\xff\xfe 1\n2 3\n"[..]),
            Vec::new(),
            NumberFormat::invariant(),
        );
        assert_eq!(r.read_numbers(2).unwrap().as_slice(), &[1., 2.]);
        let out = String::from_utf8(r.into_output()).unwrap();
        assert!(out.starts_with("Could not parse '"));
        assert!(out.ends_with("Need 1 more number(s)...\n"));
    }

    #[test]
    fn test_eof() {
        let mut r = reader("1 2\n");
        let err = r.read_numbers(3).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_read_line() {
        let mut r = reader("  1  \n");
        assert_eq!(r.read_line().unwrap(), Some("1".to_string()));
        assert_eq!(r.read_line().unwrap(), None);
    }
}
