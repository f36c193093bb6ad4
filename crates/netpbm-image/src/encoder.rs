/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Netpbm encoding
//!
//! The layout written is
//!
//! ```text
//! <magic>\n<width> <height>\n[<max value>\n]<raster>
//! ```
//!
//! ASCII rasters hold one image row per line, samples separated by single
//! spaces. Raw rasters are bytes, with bitmap rows packed eight pixels per
//! byte, most significant bit first, and padded to a whole byte.
use std::io::Write;

use log::debug;
use netpbm_core::bits::{row_stride, BitWriter};
use netpbm_core::pixel::Rgb;

use crate::errors::PnmErrors;
use crate::image::{Image, Netpbm};
use crate::pixel::Pixel;

/// A netpbm encoder
///
/// # Example
/// ```
/// use netpbm_image::encoder::PnmEncoder;
/// use netpbm_image::{Header, MagicNumber, Pgm};
///
/// let header = Header::new(MagicNumber::P2, 2, 1, 9).unwrap();
/// let image = Pgm::from_pixels(header, vec![3, 9]).unwrap();
///
/// let mut out = vec![];
/// PnmEncoder::new(&mut out).encode(&image).unwrap();
///
/// assert_eq!(out, b"P2\n2 1\n9\n3 9\n");
/// ```
pub struct PnmEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PnmEncoder<'a, W> {
    pub fn new(writer: &'a mut W) -> PnmEncoder<'a, W> {
        PnmEncoder { writer }
    }

    /// Encode `image` using its magic number
    pub fn encode<P: Pixel>(&mut self, image: &Netpbm<P>) -> Result<(), PnmErrors> {
        let header = image.header();
        let magic = header.magic_number();

        debug!(
            "Encoding {}x{} image as {magic}",
            header.width(),
            header.height()
        );

        write!(self.writer, "{magic}\n{} {}\n", header.width(), header.height())?;

        if magic.kind().has_max_value() {
            writeln!(self.writer, "{}", header.max_value())?;
        }

        let mut line = Vec::new();

        for row in image.rows() {
            line.clear();

            if magic.is_binary() {
                P::encode_binary(row, &mut line);
            } else {
                P::encode_ascii(row, &mut line);
                line.push(b'\n');
            }
            self.writer.write_all(&line)?;
        }
        self.writer.flush()?;

        Ok(())
    }

    /// Encode an image of any kind
    pub fn encode_image(&mut self, image: &Image) -> Result<(), PnmErrors> {
        match image {
            Image::Bitmap(image) => self.encode(image),
            Image::Gray(image) => self.encode(image),
            Image::Color(image) => self.encode(image)
        }
    }
}

/// Per pixel type raster encoding, one image row at a time
pub trait EncodePixels: Sized {
    /// Append the samples of `row` as space separated decimals
    fn encode_ascii(row: &[Self], out: &mut Vec<u8>);

    /// Append the raw bytes of `row`
    fn encode_binary(row: &[Self], out: &mut Vec<u8>);
}

fn push_samples(samples: impl Iterator<Item = u8>, out: &mut Vec<u8>) {
    for (i, sample) in samples.enumerate() {
        if i != 0 {
            out.push(b' ');
        }
        out.extend_from_slice(sample.to_string().as_bytes());
    }
}

impl EncodePixels for bool {
    fn encode_ascii(row: &[bool], out: &mut Vec<u8>) {
        push_samples(row.iter().map(|x| u8::from(*x)), out);
    }

    fn encode_binary(row: &[bool], out: &mut Vec<u8>) {
        let mut writer = BitWriter::with_capacity(row_stride(row.len()));

        for bit in row {
            writer.write_bit(*bit);
        }
        out.extend_from_slice(&writer.into_inner());
    }
}

impl EncodePixels for u8 {
    fn encode_ascii(row: &[u8], out: &mut Vec<u8>) {
        push_samples(row.iter().copied(), out);
    }

    fn encode_binary(row: &[u8], out: &mut Vec<u8>) {
        out.extend_from_slice(row);
    }
}

impl EncodePixels for Rgb {
    fn encode_ascii(row: &[Rgb], out: &mut Vec<u8>) {
        push_samples(row.iter().flat_map(|x| x.to_array()), out);
    }

    fn encode_binary(row: &[Rgb], out: &mut Vec<u8>) {
        for pixel in row {
            out.extend_from_slice(&pixel.to_array());
        }
    }
}
