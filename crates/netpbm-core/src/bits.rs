/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bit level reader and writer for packed bitmap rows
//!
//! Raw bitmaps (`P4`) store eight pixels per byte, most significant bit
//! first, and every row starts on a fresh byte. The reader and writer here
//! make that contract explicit, callers move to the next row with
//! [`BitReader::align`] and [`BitWriter::flush`].
use alloc::vec::Vec;

/// Number of bytes a packed row of `width` pixels occupies
///
/// # Example
/// ```
/// use netpbm_core::bits::row_stride;
/// assert_eq!(row_stride(1), 1);
/// assert_eq!(row_stride(8), 1);
/// assert_eq!(row_stride(9), 2);
/// ```
pub const fn row_stride(width: usize) -> usize {
    width.div_ceil(8)
}

/// Reads single bits from a byte slice, most significant bit first
pub struct BitReader<'a> {
    data:     &'a [u8],
    position: usize,
    // bits already consumed from data[position]
    consumed: u8
}

impl<'a> BitReader<'a> {
    pub const fn new(data: &'a [u8]) -> BitReader<'a> {
        BitReader {
            data,
            position: 0,
            consumed: 0
        }
    }

    /// Read the next bit, or `None` once the data is exhausted
    pub fn read_bit(&mut self) -> Option<bool> {
        let byte = *self.data.get(self.position)?;

        let bit = (byte >> (7 - self.consumed)) & 1 == 1;

        self.consumed += 1;

        if self.consumed == 8 {
            self.consumed = 0;
            self.position += 1;
        }
        Some(bit)
    }

    /// Discard the unread bits of a partially consumed byte
    ///
    /// This is a no-op when the reader sits on a byte boundary
    pub fn align(&mut self) {
        if self.consumed != 0 {
            self.consumed = 0;
            self.position += 1;
        }
    }

    /// Number of bytes touched so far, counting a partially read byte
    pub const fn bytes_consumed(&self) -> usize {
        self.position + (self.consumed != 0) as usize
    }
}

/// Packs single bits into bytes, most significant bit first
#[derive(Default)]
pub struct BitWriter {
    buffer:  Vec<u8>,
    current: u8,
    // bits already placed in current
    filled:  u8
}

impl BitWriter {
    pub fn new() -> BitWriter {
        BitWriter::default()
    }

    /// Create a writer whose buffer can hold `bytes` without reallocating
    pub fn with_capacity(bytes: usize) -> BitWriter {
        BitWriter {
            buffer:  Vec::with_capacity(bytes),
            current: 0,
            filled:  0
        }
    }

    pub fn write_bit(&mut self, bit: bool) {
        self.current |= u8::from(bit) << (7 - self.filled);
        self.filled += 1;

        if self.filled == 8 {
            self.buffer.push(self.current);
            self.current = 0;
            self.filled = 0;
        }
    }

    /// Pad a partially filled byte with zero bits and push it out
    pub fn flush(&mut self) {
        if self.filled != 0 {
            self.buffer.push(self.current);
            self.current = 0;
            self.filled = 0;
        }
    }

    /// Bytes written so far, excluding a partially filled byte
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Flush and return the packed bytes
    pub fn into_inner(mut self) -> Vec<u8> {
        self.flush();
        self.buffer
    }
}
