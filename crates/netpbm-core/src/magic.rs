/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Magic numbers and the pixel kinds they describe
use core::fmt::{Display, Formatter};

/// The kind of pixel an image stores
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PixelKind {
    /// One boolean per pixel, `true` is a set (black) pixel
    Bitmap,
    /// One 8 bit sample per pixel
    Gray,
    /// Red, green and blue 8 bit samples per pixel
    Color
}

impl PixelKind {
    /// Number of samples that make up a pixel
    pub const fn num_components(self) -> usize {
        match self {
            PixelKind::Bitmap | PixelKind::Gray => 1,
            PixelKind::Color => 3
        }
    }

    /// Whether headers of this kind carry a max value
    pub const fn has_max_value(self) -> bool {
        !matches!(self, PixelKind::Bitmap)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PixelKind::Bitmap => "bitmap",
            PixelKind::Gray => "grayscale",
            PixelKind::Color => "color"
        }
    }
}

impl Display for PixelKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six netpbm magic numbers
///
/// The first three store their raster as ASCII text, the last
/// three as raw bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MagicNumber {
    /// ASCII bitmap (PBM)
    P1,
    /// ASCII grayscale (PGM)
    P2,
    /// ASCII color (PPM)
    P3,
    /// Raw bitmap (PBM)
    P4,
    /// Raw grayscale (PGM)
    P5,
    /// Raw color (PPM)
    P6
}

impl MagicNumber {
    /// Match a magic number token, returning `None` for anything
    /// that isn't one of the six recognized tags
    ///
    /// # Example
    /// ```
    /// use netpbm_core::magic::MagicNumber;
    /// assert_eq!(MagicNumber::from_bytes(b"P4"), Some(MagicNumber::P4));
    /// assert_eq!(MagicNumber::from_bytes(b"P7"), None);
    /// ```
    pub fn from_bytes(token: &[u8]) -> Option<MagicNumber> {
        match token {
            b"P1" => Some(MagicNumber::P1),
            b"P2" => Some(MagicNumber::P2),
            b"P3" => Some(MagicNumber::P3),
            b"P4" => Some(MagicNumber::P4),
            b"P5" => Some(MagicNumber::P5),
            b"P6" => Some(MagicNumber::P6),
            _ => None
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MagicNumber::P1 => "P1",
            MagicNumber::P2 => "P2",
            MagicNumber::P3 => "P3",
            MagicNumber::P4 => "P4",
            MagicNumber::P5 => "P5",
            MagicNumber::P6 => "P6"
        }
    }

    pub const fn kind(self) -> PixelKind {
        match self {
            MagicNumber::P1 | MagicNumber::P4 => PixelKind::Bitmap,
            MagicNumber::P2 | MagicNumber::P5 => PixelKind::Gray,
            MagicNumber::P3 | MagicNumber::P6 => PixelKind::Color
        }
    }

    /// Whether the raster is stored as raw bytes
    pub const fn is_binary(self) -> bool {
        matches!(self, MagicNumber::P4 | MagicNumber::P5 | MagicNumber::P6)
    }

    /// The magic number for `kind` in the requested encoding
    pub const fn for_kind(kind: PixelKind, binary: bool) -> MagicNumber {
        match (kind, binary) {
            (PixelKind::Bitmap, false) => MagicNumber::P1,
            (PixelKind::Gray, false) => MagicNumber::P2,
            (PixelKind::Color, false) => MagicNumber::P3,
            (PixelKind::Bitmap, true) => MagicNumber::P4,
            (PixelKind::Gray, true) => MagicNumber::P5,
            (PixelKind::Color, true) => MagicNumber::P6
        }
    }

    /// The ASCII counterpart of this magic number
    pub const fn ascii(self) -> MagicNumber {
        MagicNumber::for_kind(self.kind(), false)
    }

    /// The raw counterpart of this magic number
    pub const fn binary(self) -> MagicNumber {
        MagicNumber::for_kind(self.kind(), true)
    }
}

impl Display for MagicNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
