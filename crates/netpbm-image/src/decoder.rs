/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Netpbm decoding
use log::{info, warn};
use netpbm_core::bits::{row_stride, BitReader};
use netpbm_core::bytestream::{parse_decimal, ZByteReader};
use netpbm_core::magic::PixelKind;
use netpbm_core::options::DecoderOptions;
use netpbm_core::pixel::Rgb;

use crate::errors::{FormatErrors, PnmErrors};
use crate::header::{read_header, Header};
use crate::image::{Image, Netpbm, Pbm, Pgm, Ppm};
use crate::pixel::Pixel;

/// An instance of a netpbm decoder
///
/// The decoder can decode all six formats, `P1` to `P6`, with
/// max values up to 255.
pub struct PnmDecoder<'a> {
    reader:  ZByteReader<'a>,
    header:  Option<Header>,
    options: DecoderOptions
}

impl<'a> PnmDecoder<'a> {
    /// Create a new decoder with default options
    ///
    /// # Arguments
    /// - data: netpbm encoded bytes
    ///
    /// # Example
    /// ```
    /// use netpbm_image::decoder::PnmDecoder;
    /// let mut decoder = PnmDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PnmDecoder<'a> {
        PnmDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: netpbm encoded bytes.
    ///
    /// # Example
    /// ```
    /// use netpbm_image::decoder::PnmDecoder;
    /// use netpbm_image::DecoderOptions;
    ///
    /// let options = DecoderOptions::default().set_max_width(2);
    /// let mut decoder = PnmDecoder::new_with_options(options, b"P1\n3 1\n0 1 0\n");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PnmDecoder<'a> {
        PnmDecoder {
            reader: ZByteReader::new(data),
            header: None,
            options
        }
    }

    /// Read the header and store it in internal state
    ///
    /// Calling this more than once is fine, the header is only parsed the first time
    pub fn read_headers(&mut self) -> Result<Header, PnmErrors> {
        if let Some(header) = self.header {
            return Ok(header);
        }
        let header = read_header(&mut self.reader, &self.options)?;
        self.header = Some(header);

        Ok(header)
    }

    /// Return the header or none if it hasn't been decoded yet
    pub const fn get_header(&self) -> Option<Header> {
        self.header
    }

    /// Return image dimensions or none if the header hasn't been decoded yet
    pub fn get_dimensions(&self) -> Option<(usize, usize)> {
        self.header.map(|x| x.dimensions())
    }

    /// Decode an image of any kind
    pub fn decode(&mut self) -> Result<Image, PnmErrors> {
        let header = self.read_headers()?;

        Ok(match header.magic_number().kind() {
            PixelKind::Bitmap => Image::Bitmap(self.decode_as()?),
            PixelKind::Gray => Image::Gray(self.decode_as()?),
            PixelKind::Color => Image::Color(self.decode_as()?)
        })
    }

    /// Decode a bitmap, `P1` or `P4`
    ///
    /// # Errors
    /// [`FormatErrors::UnexpectedMagicNumber`] if the stream holds another kind of image
    pub fn decode_pbm(&mut self) -> Result<Pbm, PnmErrors> {
        self.decode_as()
    }

    /// Decode a grayscale image, `P2` or `P5`
    pub fn decode_pgm(&mut self) -> Result<Pgm, PnmErrors> {
        self.decode_as()
    }

    /// Decode a color image, `P3` or `P6`
    pub fn decode_ppm(&mut self) -> Result<Ppm, PnmErrors> {
        self.decode_as()
    }

    fn decode_as<P: DecodePixels>(&mut self) -> Result<Netpbm<P>, PnmErrors> {
        let header = self.read_headers()?;
        let magic = header.magic_number();

        if magic.kind() != P::KIND {
            return Err(FormatErrors::UnexpectedMagicNumber {
                expected: P::KIND,
                found:    magic
            }
            .into());
        }
        let pixels = if magic.is_binary() {
            P::decode_binary(&mut self.reader, &header)?
        } else {
            P::decode_ascii(&mut self.reader, &header)?
        };

        if magic.is_binary() && !self.reader.eof() {
            warn!(
                "{} bytes of trailing data after the raster, ignoring",
                self.reader.remaining()
            );
        }
        info!("Decoded {} pixels", pixels.len());

        Netpbm::from_pixels(header, pixels)
    }
}

/// Per pixel type raster decoding
trait DecodePixels: Pixel {
    fn decode_ascii(reader: &mut ZByteReader, header: &Header) -> Result<Vec<Self>, PnmErrors>;

    fn decode_binary(reader: &mut ZByteReader, header: &Header)
        -> Result<Vec<Self>, PnmErrors>;
}

fn truncated(expected: usize, found: usize) -> PnmErrors {
    FormatErrors::TruncatedData { expected, found }.into()
}

/// Take `length` raw bytes from the reader or report how many were there
fn raw_bytes<'a>(reader: &mut ZByteReader<'a>, length: usize) -> Result<&'a [u8], PnmErrors> {
    let remaining = reader.remaining();

    reader
        .get_as_ref(length)
        .map_err(|_| truncated(length, remaining))
}

/// Read `count` ASCII decimal samples, each at most `max_value`
fn ascii_samples(
    reader: &mut ZByteReader, count: usize, max_value: u8
) -> Result<Vec<u8>, PnmErrors> {
    // every sample takes at least one byte
    let mut samples = Vec::with_capacity(count.min(reader.remaining()));

    for found in 0..count {
        let token = reader.next_token();

        if token.is_empty() {
            return Err(truncated(count, found));
        }
        let sample = parse_decimal(token)
            .and_then(|x| u8::try_from(x).ok())
            .filter(|x| *x <= max_value)
            .ok_or_else(|| {
                let msg = format!(
                    "sample `{}` is not an integer between 0 and {max_value}",
                    String::from_utf8_lossy(token)
                );
                FormatErrors::InvalidPixelToken(msg)
            })?;

        samples.push(sample);
    }
    Ok(samples)
}

fn check_raw_samples(samples: &[u8], max_value: u8) -> Result<(), PnmErrors> {
    if let Some(sample) = samples.iter().find(|x| **x > max_value) {
        let msg = format!("sample {sample} is larger than the max value {max_value}");
        return Err(FormatErrors::InvalidPixelToken(msg).into());
    }
    Ok(())
}

impl DecodePixels for bool {
    /// `0` and `1` characters, separators between them are optional
    fn decode_ascii(reader: &mut ZByteReader, header: &Header) -> Result<Vec<bool>, PnmErrors> {
        let count = header.pixel_count();
        let mut bits = Vec::with_capacity(count.min(reader.remaining()));

        while bits.len() < count {
            let byte = reader
                .get_u8_err()
                .map_err(|_| truncated(count, bits.len()))?;

            match byte {
                b'0' => bits.push(false),
                b'1' => bits.push(true),
                b'#' => reader.skip_line(),
                _ if byte.is_ascii_whitespace() => {}
                _ => {
                    let msg = format!(
                        "expected `0` or `1` in bitmap data but found `{}`",
                        byte.escape_ascii()
                    );
                    return Err(FormatErrors::InvalidPixelToken(msg).into());
                }
            }
        }
        Ok(bits)
    }

    /// Packed bits, most significant first, each row padded to a whole byte
    fn decode_binary(reader: &mut ZByteReader, header: &Header) -> Result<Vec<bool>, PnmErrors> {
        let (width, height) = header.dimensions();
        let length = row_stride(width) * height;

        let data = raw_bytes(reader, length)?;

        let mut bits = Vec::with_capacity(header.pixel_count());
        let mut bit_reader = BitReader::new(data);

        for _ in 0..height {
            for _ in 0..width {
                let bit = bit_reader
                    .read_bit()
                    .ok_or_else(|| truncated(length, bit_reader.bytes_consumed()))?;
                bits.push(bit);
            }
            bit_reader.align();
        }
        Ok(bits)
    }
}

impl DecodePixels for u8 {
    fn decode_ascii(reader: &mut ZByteReader, header: &Header) -> Result<Vec<u8>, PnmErrors> {
        ascii_samples(reader, header.pixel_count(), header.max_value())
    }

    fn decode_binary(reader: &mut ZByteReader, header: &Header) -> Result<Vec<u8>, PnmErrors> {
        let data = raw_bytes(reader, header.pixel_count())?;

        check_raw_samples(data, header.max_value())?;

        Ok(data.to_vec())
    }
}

impl DecodePixels for Rgb {
    /// Whitespace separated `R G B` samples, any number of pixels per line
    fn decode_ascii(reader: &mut ZByteReader, header: &Header) -> Result<Vec<Rgb>, PnmErrors> {
        let samples = ascii_samples(reader, header.pixel_count() * 3, header.max_value())?;

        Ok(samples
            .chunks_exact(3)
            .map(|x| Rgb::new(x[0], x[1], x[2]))
            .collect())
    }

    fn decode_binary(reader: &mut ZByteReader, header: &Header) -> Result<Vec<Rgb>, PnmErrors> {
        let data = raw_bytes(reader, header.pixel_count() * 3)?;

        check_raw_samples(data, header.max_value())?;

        Ok(data
            .chunks_exact(3)
            .map(|x| Rgb::new(x[0], x[1], x[2]))
            .collect())
    }
}
