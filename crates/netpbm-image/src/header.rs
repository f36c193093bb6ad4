/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Netpbm header parsing
//!
//! A header is the magic number followed by whitespace separated width,
//! height and, for grayscale and color images, max value. Comments run from
//! `#` to the end of the line and may appear between any two tokens.
use log::{debug, info};
use netpbm_core::bytestream::{parse_decimal, ZByteReader};
use netpbm_core::magic::MagicNumber;
use netpbm_core::options::DecoderOptions;

use crate::errors::{FormatErrors, PnmErrors};

/// Image header information
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct Header {
    magic:     MagicNumber,
    width:     usize,
    height:    usize,
    max_value: u8
}

impl Header {
    /// Create a new header, validating its fields
    ///
    /// Width and height must be non zero and `max_value` must be non zero
    /// for grayscale and color images. Bitmaps always get a max value of 1,
    /// whatever is passed in.
    pub fn new(
        magic: MagicNumber, width: usize, height: usize, max_value: u8
    ) -> Result<Header, PnmErrors> {
        if width == 0 || height == 0 {
            let msg = format!("dimensions must be non zero, found {width}x{height}");
            return Err(FormatErrors::MalformedHeader(msg).into());
        }
        width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(magic.kind().num_components()))
            .ok_or_else(|| {
                let msg = format!("dimensions {width}x{height} overflow");
                FormatErrors::MalformedHeader(msg)
            })?;

        let max_value = if magic.kind().has_max_value() {
            if max_value == 0 {
                return Err(FormatErrors::MalformedHeader("max value must be non zero".into()).into());
            }
            max_value
        } else {
            1
        };

        Ok(Header {
            magic,
            width,
            height,
            max_value
        })
    }

    pub const fn magic_number(&self) -> MagicNumber {
        self.magic
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Max sample value, always 1 for bitmaps
    pub const fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Number of pixels in the raster
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Same dimensions under a different magic number
    ///
    /// Moving to a bitmap resets the max value to 1
    pub(crate) const fn with_magic_number(mut self, magic: MagicNumber) -> Header {
        if !magic.kind().has_max_value() {
            self.max_value = 1;
        }
        self.magic = magic;
        self
    }
}

fn token_name(token: &[u8]) -> String {
    String::from_utf8_lossy(token).into_owned()
}

fn read_dimension(
    reader: &mut ZByteReader, name: &str, limit: usize
) -> Result<usize, PnmErrors> {
    let token = reader.next_token();

    if token.is_empty() {
        let msg = format!("missing {name}");
        return Err(FormatErrors::MalformedHeader(msg).into());
    }
    let value = parse_decimal(token).ok_or_else(|| {
        let msg = format!("{name} `{}` is not a positive integer", token_name(token));
        FormatErrors::MalformedHeader(msg)
    })?;

    if value == 0 {
        let msg = format!("{name} must be greater than zero");
        return Err(FormatErrors::MalformedHeader(msg).into());
    }
    if value > limit {
        return Err(FormatErrors::LargeDimensions {
            limit,
            found: value
        }
        .into());
    }
    Ok(value)
}

fn read_max_value(reader: &mut ZByteReader) -> Result<u8, PnmErrors> {
    let token = reader.next_token();

    if token.is_empty() {
        return Err(FormatErrors::MalformedHeader("missing max value".into()).into());
    }
    let value = parse_decimal(token).ok_or_else(|| {
        let msg = format!("max value `{}` is not a positive integer", token_name(token));
        FormatErrors::MalformedHeader(msg)
    })?;

    match u8::try_from(value) {
        Ok(0) => Err(FormatErrors::MalformedHeader("max value must be greater than zero".into()).into()),
        Ok(max) => Ok(max),
        Err(_) => {
            let msg = format!("max value {value} greater than 255, 16 bit samples are not supported");
            Err(FormatErrors::MalformedHeader(msg).into())
        }
    }
}

/// Read a header from the start of `reader`
///
/// On success the reader is left on the first byte of the raster. For raw
/// formats that is right after the single whitespace byte ending the header.
///
/// # Errors
/// - [`UnknownMagicNumber`](FormatErrors::UnknownMagicNumber) if the first token is not `P1`..`P6`
/// - [`MalformedHeader`](FormatErrors::MalformedHeader) on missing, non numeric or out of range fields
/// - [`LargeDimensions`](FormatErrors::LargeDimensions) if a dimension exceeds the limits in `options`
pub fn read_header(
    reader: &mut ZByteReader, options: &DecoderOptions
) -> Result<Header, PnmErrors> {
    let token = reader.next_token();

    let magic = MagicNumber::from_bytes(token)
        .ok_or_else(|| FormatErrors::UnknownMagicNumber(token_name(token)))?;

    info!("Magic number: {magic}");

    let width = read_dimension(reader, "width", options.get_max_width())?;
    let height = read_dimension(reader, "height", options.get_max_height())?;

    info!("Width: {width}, height: {height}");

    let max_value = if magic.kind().has_max_value() {
        let max_value = read_max_value(reader)?;
        info!("Max value: {max_value}");
        max_value
    } else {
        1
    };

    if magic.is_binary() {
        // exactly one whitespace byte separates the header from raw data,
        // the raster may well start with a byte that looks like a space
        match reader.peek_u8() {
            Some(byte) if byte.is_ascii_whitespace() => reader.skip(1),
            Some(byte) => {
                let msg = format!(
                    "expected whitespace after the header but found byte {byte:#04x}"
                );
                return Err(FormatErrors::MalformedHeader(msg).into());
            }
            None => {}
        }
    }
    debug!("Raster starts at offset {}", reader.get_position());

    Header::new(magic, width, height, max_value)
}
