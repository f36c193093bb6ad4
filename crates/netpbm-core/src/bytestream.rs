/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//!
//! The reader keeps its position explicitly, it is handed by reference
//! from the header parser to the pixel decoders so that each stage
//! picks up exactly where the previous one stopped.
//!
//! Besides plain byte reads it understands the textual parts of the netpbm
//! grammar, i.e whitespace separated tokens and `#` comments running to the
//! end of a line.

static ERROR_MSG: &str = "No more bytes";

/// An encapsulation of a byte stream reader
///
/// The lifetime parameter is from the stream which we are reading from
pub struct ZByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    /// Create a new instance of the byte stream
    ///
    /// # Example
    /// ```
    /// use netpbm_core::bytestream::ZByteReader;
    /// let reader = ZByteReader::new(b"P1\n2 2\n");
    /// assert_eq!(reader.remaining(), 7);
    /// ```
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }

    /// Return true if we have no more bytes to read
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Number of bytes left in the stream
    pub const fn remaining(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }

    /// Get the current offset of the reader
    pub const fn get_position(&self) -> usize {
        self.position
    }

    /// Skip `num` bytes ahead of the stream, stopping at the end
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }

    /// Read a single byte or error out if the stream is exhausted
    pub fn get_u8_err(&mut self) -> Result<u8, &'static str> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ERROR_MSG)
        }
    }

    /// Look at the next byte without advancing
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }

    /// Return a reference to the next `num` bytes and advance past them,
    /// or error out without moving if the stream is shorter than that.
    pub fn get_as_ref(&mut self, num: usize) -> Result<&'a [u8], &'static str> {
        let end = self.position.checked_add(num).ok_or(ERROR_MSG)?;

        match self.stream.get(self.position..end) {
            Some(bytes) => {
                self.position = end;
                Ok(bytes)
            }
            None => Err(ERROR_MSG)
        }
    }

    /// Skip all whitespace characters and comments
    /// until one hits a character that isn't a space or
    /// we reach eof
    pub fn skip_spaces_and_comments(&mut self) {
        while let Some(byte) = self.peek_u8() {
            if byte == b'#' {
                self.skip_line();
            } else if byte.is_ascii_whitespace() {
                self.position += 1;
            } else {
                break;
            }
        }
    }

    /// Advance past the next line feed, or to the end of the stream
    pub fn skip_line(&mut self) {
        self.read_line();
    }

    /// Return the bytes up to the next line feed and advance past the
    /// line feed.
    ///
    /// The terminator is not part of the returned line, neither is
    /// a carriage return preceding it.
    ///
    /// # Example
    /// ```
    /// use netpbm_core::bytestream::ZByteReader;
    /// let mut reader = ZByteReader::new(b"P2\r\n# comment\n");
    /// assert_eq!(reader.read_line(), b"P2");
    /// assert_eq!(reader.read_line(), b"# comment");
    /// assert!(reader.eof());
    /// ```
    pub fn read_line(&mut self) -> &'a [u8] {
        let rest = &self.stream[self.position.min(self.stream.len())..];

        let (line, consumed) = match rest.iter().position(|x| *x == b'\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len())
        };
        self.position += consumed;

        line.strip_suffix(b"\r").unwrap_or(line)
    }

    /// Return a reference to the next token
    ///
    /// Leading whitespace and comments are skipped, the token is the longest
    /// run of bytes that are neither whitespace nor the start of a comment.
    ///
    /// An empty slice is returned when the stream is exhausted
    ///
    /// # Example
    /// ```
    /// use netpbm_core::bytestream::ZByteReader;
    /// let mut reader = ZByteReader::new(b"P3\n# made by hand\n10 20");
    /// assert_eq!(reader.next_token(), b"P3");
    /// assert_eq!(reader.next_token(), b"10");
    /// assert_eq!(reader.next_token(), b"20");
    /// assert_eq!(reader.next_token(), b"");
    /// ```
    pub fn next_token(&mut self) -> &'a [u8] {
        self.skip_spaces_and_comments();

        let start = self.position;

        while let Some(byte) = self.peek_u8() {
            if byte.is_ascii_whitespace() || byte == b'#' {
                break;
            }
            self.position += 1;
        }
        &self.stream[start..self.position]
    }

    /// Read the next token and interpret it as an unsigned decimal integer
    ///
    /// Returns `None` if the stream is exhausted, the token contains anything
    /// but ASCII digits or the value does not fit into a `usize`.
    /// The token is consumed either way.
    pub fn next_integer(&mut self) -> Option<usize> {
        parse_decimal(self.next_token())
    }
}

/// Parse a run of ASCII digits into an integer, rejecting
/// empty input, non digits and overflow
pub fn parse_decimal(token: &[u8]) -> Option<usize> {
    if token.is_empty() {
        return None;
    }
    token.iter().try_fold(0_usize, |acc, byte| {
        if byte.is_ascii_digit() {
            acc.checked_mul(10)?.checked_add(usize::from(byte - b'0'))
        } else {
            None
        }
    })
}
