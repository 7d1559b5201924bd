use std::fmt;
use std::io::{self, BufRead, Write};

use chrono::NaiveDateTime;
use thiserror::Error;

/// Format accepted for manually dated orders, e.g. `14-03-2021 09:26:53`.
pub const DATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

#[derive(Debug, Error)]
pub enum DateInputError {
    #[error("malformed date: {0}")]
    Malformed(#[from] chrono::ParseError),
    #[error("every field must be zero-padded, got {0:?}")]
    Unpadded(String),
    #[error("date {0} is in the future")]
    InFuture(NaiveDateTime),
}

pub fn parse_order_date(text: &str, now: NaiveDateTime) -> Result<NaiveDateTime, DateInputError> {
    let text = text.trim();
    let date = NaiveDateTime::parse_from_str(text, DATE_FORMAT)?;
    // chrono accepts `1-3-2021 9:26:53`; only the fixed-width form is allowed.
    if date.format(DATE_FORMAT).to_string() != text {
        return Err(DateInputError::Unpadded(text.to_string()));
    }
    if date > now {
        return Err(DateInputError::InFuture(date));
    }
    Ok(date)
}

/// Line-oriented prompt helpers over any reader/writer pair.
///
/// Invalid answers are reported and asked again; only I/O failures and end
/// of input escape as errors.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Prints `items` as a menu numbered from 1.
    pub fn menu<T: fmt::Display>(&mut self, items: &[T]) -> io::Result<()> {
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "{}) {}", i + 1, item)?;
        }
        Ok(())
    }

    pub fn read_line(&mut self) -> io::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Reads a non-empty answer of at most `max_len` characters, trimmed.
    pub fn read_text(&mut self, max_len: usize) -> io::Result<String> {
        loop {
            let text = self.read_line()?.trim().to_string();
            if text.is_empty() {
                self.say("Please enter a value.")?;
            } else if text.chars().count() > max_len {
                self.say(format!("Please use at most {} characters.", max_len))?;
            } else {
                return Ok(text);
            }
        }
    }

    pub fn read_int(&mut self) -> io::Result<i32> {
        loop {
            match self.read_line()?.trim().parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Invalid Input.")?,
            }
        }
    }

    /// Reads an integer in `low..=high`.
    pub fn read_int_range(&mut self, low: i32, high: i32) -> io::Result<i32> {
        loop {
            let value = self.read_int()?;
            if (low..=high).contains(&value) {
                return Ok(value);
            }
            self.say("Invalid Range.")?;
        }
    }

    pub fn read_yes_no(&mut self) -> io::Result<bool> {
        loop {
            match self.read_line()?.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer Y or N.")?,
            }
        }
    }

    /// Reads a date in [`DATE_FORMAT`] that is not later than `now`.
    pub fn read_order_date(&mut self, now: NaiveDateTime) -> io::Result<NaiveDateTime> {
        loop {
            let text = self.read_line()?;
            match parse_order_date(&text, now) {
                Ok(date) => return Ok(date),
                Err(e) => {
                    log::debug!("rejected order date {:?}: {}", text, e);
                    self.say("This is not valid.")?;
                    self.say("Please input a valid date in format dd-MM-yyyy HH:mm:ss")?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn output(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).expect("utf8 output")
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 6, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("valid date")
    }

    #[test]
    fn read_int_reprompts_on_garbage() {
        let mut c = console("abc\n\n42\n");
        assert_eq!(c.read_int().expect("read failed"), 42);
        assert_eq!(output(c).matches("Invalid Input.").count(), 2);
    }

    #[test]
    fn read_int_range_rejects_out_of_range() {
        let mut c = console("0\n4\n3\n");
        assert_eq!(c.read_int_range(1, 3).expect("read failed"), 3);
        assert_eq!(output(c).matches("Invalid Range.").count(), 2);
    }

    #[test]
    fn read_int_fails_at_end_of_input() {
        let mut c = console("nope\n");
        let err = c.read_int().expect_err("should hit eof");
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn read_yes_no_is_case_insensitive() {
        let mut c = console("maybe\nY\nno\n");
        assert!(c.read_yes_no().expect("read failed"));
        assert!(!c.read_yes_no().expect("read failed"));
        assert!(output(c).contains("Please answer Y or N."));
    }

    #[test]
    fn read_line_strips_line_endings() {
        let mut c = console("Dave Brown\r\n");
        assert_eq!(c.read_line().expect("read failed"), "Dave Brown");
    }

    #[test]
    fn read_text_reprompts_on_empty_and_overlong_answers() {
        let input = format!("   \n{}\n  Dave Brown  \n", "A".repeat(65));
        let mut c = Console::new(input.as_bytes(), Vec::new());

        assert_eq!(c.read_text(64).expect("read failed"), "Dave Brown");
        let out = String::from_utf8(c.into_output()).expect("utf8 output");
        assert!(out.contains("Please enter a value."));
        assert!(out.contains("Please use at most 64 characters."));
    }

    #[test]
    fn read_text_accepts_exactly_max_len() {
        let answer = "B".repeat(64);
        let input = format!("{}\n", answer);
        let mut c = Console::new(input.as_bytes(), Vec::new());
        assert_eq!(c.read_text(64).expect("read failed"), answer);
    }

    #[test]
    fn parse_order_date_rejects_unpadded_fields() {
        assert!(matches!(
            parse_order_date("1-3-2021 9:26:53", now()),
            Err(DateInputError::Unpadded(_))
        ));
    }

    #[test]
    fn parse_order_date_accepts_past_date() {
        let date = parse_order_date("14-03-2021 09:26:53", now()).expect("valid date");
        assert_eq!(date.to_string(), "2021-03-14 09:26:53");
    }

    #[test]
    fn parse_order_date_rejects_future_date() {
        assert!(matches!(
            parse_order_date("01-01-2030 00:00:00", now()),
            Err(DateInputError::InFuture(_))
        ));
    }

    #[test]
    fn parse_order_date_rejects_wrong_format() {
        assert!(matches!(
            parse_order_date("2021-03-14 09:26:53", now()),
            Err(DateInputError::Malformed(_))
        ));
    }

    #[test]
    fn read_order_date_reprompts_until_valid() {
        let mut c = console("tomorrow\n02-06-2021 00:00:00\n31-05-2021 23:59:59\n");
        let date = c.read_order_date(now()).expect("read failed");
        assert_eq!(date.to_string(), "2021-05-31 23:59:59");
        assert_eq!(output(c).matches("This is not valid.").count(), 2);
    }

    #[test]
    fn menu_numbers_from_one() {
        let mut c = console("");
        c.menu(&["hammer", "screwdriver"]).expect("write failed");
        assert_eq!(output(c), "1) hammer\n2) screwdriver\n");
    }
}
