use std::io::{BufRead, Write};

use crate::core::error::PietError;

/// The device behind the four I/O operations.
pub trait PietIo {
    fn read_integer(&mut self) -> Result<i64, PietError>;
    /// Reads the next non-whitespace character and returns its code point.
    fn read_char(&mut self) -> Result<i64, PietError>;
    fn write_integer(&mut self, value: i64) -> Result<(), PietError>;
    fn write_char(&mut self, value: i64) -> Result<(), PietError>;
}

/// Text I/O over any reader/writer pair: stdin/stdout, files or in-memory buffers.
pub struct ConsoleIo<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        ConsoleIo { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn peek_byte(&mut self) -> Result<Option<u8>, PietError> {
        Ok(self.reader.fill_buf()?.first().copied())
    }

    fn next_byte(&mut self) -> Result<Option<u8>, PietError> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.reader.consume(1);
        }
        Ok(byte)
    }

    fn skip_whitespace(&mut self) -> Result<(), PietError> {
        while let Some(byte) = self.peek_byte()? {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.reader.consume(1);
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> PietIo for ConsoleIo<R, W> {
    fn read_integer(&mut self) -> Result<i64, PietError> {
        self.skip_whitespace()?;

        let mut text = String::new();
        if let Some(sign @ (b'-' | b'+')) = self.peek_byte()? {
            text.push(sign as char);
            self.reader.consume(1);
        }
        while let Some(byte) = self.peek_byte()? {
            if !byte.is_ascii_digit() {
                break;
            }
            text.push(byte as char);
            self.reader.consume(1);
        }

        if text.is_empty() {
            return match self.peek_byte()? {
                None => Err(PietError::InputExhausted { expected: "an integer" }),
                Some(byte) => Err(PietError::InvalidInteger {
                    found: (byte as char).to_string(),
                }),
            };
        }
        text.parse::<i64>()
            .map_err(|_| PietError::InvalidInteger { found: text.clone() })
    }

    fn read_char(&mut self) -> Result<i64, PietError> {
        self.skip_whitespace()?;
        let Some(first) = self.next_byte()? else {
            return Err(PietError::InputExhausted { expected: "a character" });
        };
        let width = match first {
            0x00..=0x7F => 1,
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return Err(PietError::InvalidUtf8),
        };

        let mut bytes = vec![first];
        for _ in 1..width {
            match self.next_byte()? {
                Some(byte) => bytes.push(byte),
                None => return Err(PietError::InvalidUtf8),
            }
        }
        let text = std::str::from_utf8(&bytes).map_err(|_| PietError::InvalidUtf8)?;
        let ch = text.chars().next().ok_or(PietError::InvalidUtf8)?;
        Ok(ch as i64)
    }

    fn write_integer(&mut self, value: i64) -> Result<(), PietError> {
        write!(self.writer, "{value}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_char(&mut self, value: i64) -> Result<(), PietError> {
        let ch = u32::try_from(value)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        write!(self.writer, "{ch}")?;
        self.writer.flush()?;
        Ok(())
    }
}
