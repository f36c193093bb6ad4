/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when reading, manipulating and writing images
use std::fmt::{Debug, Display, Formatter};
use std::io;

use netpbm_core::magic::{MagicNumber, PixelKind};

/// Reasons a byte stream is not a valid netpbm image
pub enum FormatErrors {
    /// The stream does not start with one of `P1`..`P6`
    UnknownMagicNumber(String),
    /// The magic number is valid but of another kind than requested
    UnexpectedMagicNumber {
        expected: PixelKind,
        found:    MagicNumber
    },
    /// A header token is missing, non numeric or out of range
    MalformedHeader(String),
    /// A raster token is not a valid sample
    InvalidPixelToken(String),
    /// The raster ended early, counts are in bytes for raw images
    /// and in samples for ASCII ones
    TruncatedData { expected: usize, found: usize },
    /// Dimension larger than the configured limit
    LargeDimensions { limit: usize, found: usize }
}

impl Debug for FormatErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMagicNumber(val) => {
                write!(
                    f,
                    "Unknown magic number `{val}`, expected one of P1, P2, P3, P4, P5 or P6"
                )
            }
            Self::UnexpectedMagicNumber { expected, found } => {
                write!(f, "Expected a {expected} image but found magic number {found}")
            }
            Self::MalformedHeader(val) => {
                write!(f, "Malformed header, reason: {val}")
            }
            Self::InvalidPixelToken(val) => {
                write!(f, "Invalid pixel data, reason: {val}")
            }
            Self::TruncatedData { expected, found } => {
                write!(
                    f,
                    "Truncated pixel data, expected {expected} values but found {found}"
                )
            }
            Self::LargeDimensions { limit, found } => {
                write!(
                    f,
                    "Too large dimensions, expected a value less than {limit} but found {found}"
                )
            }
        }
    }
}

impl Display for FormatErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// All errors the library surfaces
pub enum PnmErrors {
    /// Opening, reading, creating or writing a file failed
    IoErrors(io::Error),
    /// The input is not a valid netpbm stream
    Format(FormatErrors),
    /// A pixel coordinate outside the image
    Index {
        x:      usize,
        y:      usize,
        width:  usize,
        height: usize
    },
    /// A sample larger than the image's max value
    InvalidPixelValue { value: u8, max_value: u8 },
    /// The magic number cannot describe the image's pixels
    IncompatibleMagicNumber {
        kind:      PixelKind,
        requested: MagicNumber
    },
    /// The pixel buffer does not hold `width * height` pixels
    DimensionsMismatch { expected: usize, found: usize }
}

impl Debug for PnmErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoErrors(err) => {
                write!(f, "I/O error: {err}")
            }
            Self::Format(err) => {
                write!(f, "{err:?}")
            }
            Self::Index {
                x,
                y,
                width,
                height
            } => {
                write!(
                    f,
                    "Pixel ({x}, {y}) is out of bounds for a {width}x{height} image"
                )
            }
            Self::InvalidPixelValue { value, max_value } => {
                write!(f, "Sample {value} is larger than the max value {max_value}")
            }
            Self::IncompatibleMagicNumber { kind, requested } => {
                write!(
                    f,
                    "Magic number {requested} cannot be used for a {kind} image"
                )
            }
            Self::DimensionsMismatch { expected, found } => {
                write!(
                    f,
                    "Data length does not match image dimensions, expected {expected} pixels but found {found}"
                )
            }
        }
    }
}

impl Display for PnmErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PnmErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<io::Error> for PnmErrors {
    fn from(err: io::Error) -> Self {
        PnmErrors::IoErrors(err)
    }
}

impl From<FormatErrors> for PnmErrors {
    fn from(err: FormatErrors) -> Self {
        PnmErrors::Format(err)
    }
}
