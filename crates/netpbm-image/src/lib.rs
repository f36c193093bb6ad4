/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Portable Bitmap, Graymap and Pixmap library
//!
//! This crate reads and writes the six netpbm formats
//!
//! | Magic | Kind      | Raster                         |
//! |-------|-----------|--------------------------------|
//! | `P1`  | bitmap    | ASCII `0`/`1`                  |
//! | `P2`  | grayscale | ASCII decimal samples          |
//! | `P3`  | color     | ASCII decimal `R G B` triples  |
//! | `P4`  | bitmap    | packed bits, MSB first         |
//! | `P5`  | grayscale | one byte per pixel             |
//! | `P6`  | color     | three bytes per pixel          |
//!
//! and provides simple manipulation on the decoded images, inversion,
//! mirroring, conversion between kinds and drawing onto color images.
//!
//! Only 8 bit samples are supported, i.e max values up to 255.
//!
//! # Example
//! ```
//! use netpbm_image::decoder::PnmDecoder;
//!
//! let mut decoder = PnmDecoder::new(b"P1\n2 2\n0 1\n1 0\n");
//! let mut image = decoder.decode_pbm().unwrap();
//!
//! assert_eq!(image.get(1, 0).unwrap(), true);
//! image.invert();
//! assert_eq!(image.get(1, 0).unwrap(), false);
//! ```
pub use netpbm_core;
pub use netpbm_core::magic::{MagicNumber, PixelKind};
pub use netpbm_core::options::DecoderOptions;
pub use netpbm_core::pixel::Rgb;
pub use netpbm_imageprocs::draw::Point;

pub use crate::errors::{FormatErrors, PnmErrors};
pub use crate::file_io::{read, read_pbm, read_pgm, read_ppm, read_with_options};
pub use crate::header::Header;
pub use crate::image::{Image, Netpbm, Pbm, Pgm, Ppm};
pub use crate::pixel::Pixel;

pub mod decoder;
pub mod encoder;
pub mod errors;
pub mod file_io;
pub mod header;
pub mod image;
pub mod pixel;
