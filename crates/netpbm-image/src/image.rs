/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! In memory images
//!
//! [`Netpbm`] is generic over its pixel type, the three concrete image kinds
//! are [`Pbm`], [`Pgm`] and [`Ppm`]. When the kind is only known at runtime,
//! e.g after decoding a file of any type, images are passed around as
//! the [`Image`] enum.
use std::io::Write;
use std::path::Path;

use log::trace;
use netpbm_core::magic::{MagicNumber, PixelKind};
use netpbm_core::pixel::Rgb;
use netpbm_imageprocs::draw::{draw_line, draw_sierpinski_triangle, Point};
use netpbm_imageprocs::flip::flip;
use netpbm_imageprocs::flop::flop;
use netpbm_imageprocs::grayscale::rgb_to_grayscale;
use netpbm_imageprocs::invert::invert;
use netpbm_imageprocs::threshold::{threshold, threshold_for};

use crate::encoder::PnmEncoder;
use crate::errors::PnmErrors;
use crate::file_io;
use crate::header::Header;
use crate::pixel::Pixel;

/// An image whose pixels are all of type `P`
///
/// Pixels are stored row major, `width` pixels per row and `height` rows.
/// Every sample is at most the header's max value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Netpbm<P: Pixel> {
    header: Header,
    pixels: Vec<P>
}

/// A bitmap, `true` is a set pixel
pub type Pbm = Netpbm<bool>;
/// A grayscale image
pub type Pgm = Netpbm<u8>;
/// A color image
pub type Ppm = Netpbm<Rgb>;

impl<P: Pixel> Netpbm<P> {
    fn check_kind(magic: MagicNumber) -> Result<(), PnmErrors> {
        if magic.kind() != P::KIND {
            return Err(PnmErrors::IncompatibleMagicNumber {
                kind:      P::KIND,
                requested: magic
            });
        }
        Ok(())
    }

    /// Create an image with every pixel set to its default,
    /// i.e clear bits or black samples
    ///
    /// # Example
    /// ```
    /// use netpbm_image::{Header, MagicNumber, Pgm};
    ///
    /// let header = Header::new(MagicNumber::P2, 3, 2, 15).unwrap();
    /// let image = Pgm::new(header).unwrap();
    /// assert_eq!(image.size(), (3, 2));
    /// assert_eq!(image.get(2, 1).unwrap(), 0);
    /// ```
    pub fn new(header: Header) -> Result<Netpbm<P>, PnmErrors> {
        Self::check_kind(header.magic_number())?;

        Ok(Netpbm {
            header,
            pixels: vec![P::default(); header.pixel_count()]
        })
    }

    /// Create an image from row major pixels
    ///
    /// # Errors
    /// - If the header's magic number is for another pixel kind
    /// - If `pixels` does not hold exactly `width * height` pixels
    /// - If a pixel has a sample above the header's max value
    pub fn from_pixels(header: Header, pixels: Vec<P>) -> Result<Netpbm<P>, PnmErrors> {
        Self::check_kind(header.magic_number())?;

        if pixels.len() != header.pixel_count() {
            return Err(PnmErrors::DimensionsMismatch {
                expected: header.pixel_count(),
                found:    pixels.len()
            });
        }
        if let Some(pixel) = pixels.iter().find(|x| !x.fits(header.max_value())) {
            return Err(PnmErrors::InvalidPixelValue {
                value:     pixel.max_sample(),
                max_value: header.max_value()
            });
        }
        Ok(Netpbm { header, pixels })
    }

    pub const fn header(&self) -> &Header {
        &self.header
    }

    /// Return `(width, height)`
    pub const fn size(&self) -> (usize, usize) {
        self.header.dimensions()
    }

    pub const fn width(&self) -> usize {
        self.header.width()
    }

    pub const fn height(&self) -> usize {
        self.header.height()
    }

    /// Max sample value, 1 for bitmaps
    pub const fn max_value(&self) -> u8 {
        self.header.max_value()
    }

    /// The magic number used when the image is encoded
    pub const fn magic_number(&self) -> MagicNumber {
        self.header.magic_number()
    }

    /// Change the magic number used by later encodes
    ///
    /// Pixels are left as they are, so only magic numbers of the same kind
    /// are accepted, i.e this switches between ASCII and raw encoding.
    ///
    /// # Example
    /// ```
    /// use netpbm_image::decoder::PnmDecoder;
    /// use netpbm_image::MagicNumber;
    ///
    /// let mut image = PnmDecoder::new(b"P1 1 1 1").decode_pbm().unwrap();
    /// assert!(image.set_magic_number(MagicNumber::P4).is_ok());
    /// assert!(image.set_magic_number(MagicNumber::P6).is_err());
    /// ```
    pub fn set_magic_number(&mut self, magic: MagicNumber) -> Result<(), PnmErrors> {
        Self::check_kind(magic)?;
        self.header = self.header.with_magic_number(magic);
        Ok(())
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, PnmErrors> {
        let (width, height) = self.size();

        if x >= width || y >= height {
            return Err(PnmErrors::Index {
                x,
                y,
                width,
                height
            });
        }
        Ok(y * width + x)
    }

    /// Return the pixel at column `x`, row `y`
    ///
    /// # Errors
    /// [`PnmErrors::Index`] if the coordinate lies outside the image
    pub fn get(&self, x: usize, y: usize) -> Result<P, PnmErrors> {
        let index = self.index(x, y)?;
        Ok(self.pixels[index])
    }

    /// Overwrite the pixel at column `x`, row `y`
    ///
    /// # Errors
    /// - [`PnmErrors::Index`] if the coordinate lies outside the image
    /// - [`PnmErrors::InvalidPixelValue`] if a sample exceeds the max value
    pub fn set(&mut self, x: usize, y: usize, value: P) -> Result<(), PnmErrors> {
        let index = self.index(x, y)?;
        self.check_value(value)?;
        self.pixels[index] = value;
        Ok(())
    }

    fn check_value(&self, value: P) -> Result<(), PnmErrors> {
        if !value.fits(self.max_value()) {
            return Err(PnmErrors::InvalidPixelValue {
                value:     value.max_sample(),
                max_value: self.max_value()
            });
        }
        Ok(())
    }

    /// All pixels, row major
    pub fn pixels(&self) -> &[P] {
        &self.pixels
    }

    /// Iterate over the rows of the image, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[P]> {
        self.pixels.chunks_exact(self.width())
    }

    /// Replace every pixel with its complement,
    /// `max_value - sample` for samples, negation for bits
    pub fn invert(&mut self) {
        trace!("Inverting {}x{} image", self.width(), self.height());
        let max_value = self.max_value();
        invert(&mut self.pixels, max_value);
    }

    /// Mirror the image horizontally, pixel `(x, y)` moves to `(width - 1 - x, y)`
    pub fn flip(&mut self) {
        trace!("Flipping {}x{} image", self.width(), self.height());
        let width = self.width();
        flip(&mut self.pixels, width);
    }

    /// Mirror the image vertically, row `y` moves to `height - 1 - y`
    pub fn flop(&mut self) {
        trace!("Flopping {}x{} image", self.width(), self.height());
        let width = self.width();
        flop(&mut self.pixels, width);
    }

    /// Encode the image into `writer` using its magic number
    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<(), PnmErrors> {
        PnmEncoder::new(writer).encode(self)
    }

    /// Encode the image into a freshly allocated buffer
    pub fn to_bytes(&self) -> Result<Vec<u8>, PnmErrors> {
        let mut out = vec![];
        self.encode(&mut out)?;
        Ok(out)
    }

    /// Write the image to `path`
    ///
    /// Either the whole file is written or the destination is left as it was,
    /// see [`file_io::save`]
    pub fn save<Q: AsRef<Path>>(&self, path: Q) -> Result<(), PnmErrors> {
        file_io::save(path, self)
    }
}

impl Pgm {
    /// Threshold the image into a bitmap
    ///
    /// A bit is set when its sample is greater than `max_value / 2`.
    /// The bitmap uses `P1` or `P4` following the encoding of this image.
    pub fn to_bitmap(&self) -> Pbm {
        let mut bits = vec![false; self.pixels.len()];

        threshold(&self.pixels, &mut bits, threshold_for(self.max_value()));

        let magic = MagicNumber::for_kind(PixelKind::Bitmap, self.magic_number().is_binary());

        Netpbm {
            header: self.header.with_magic_number(magic),
            pixels: bits
        }
    }
}

impl Ppm {
    /// Convert the image to grayscale
    ///
    /// Each sample is `(r + g + b) / 3` rounded down, the max value is kept.
    /// The result uses `P2` or `P5` following the encoding of this image.
    pub fn to_gray(&self) -> Pgm {
        let mut gray = vec![0; self.pixels.len()];

        rgb_to_grayscale(&self.pixels, &mut gray);

        let magic = MagicNumber::for_kind(PixelKind::Gray, self.magic_number().is_binary());

        Netpbm {
            header: self.header.with_magic_number(magic),
            pixels: gray
        }
    }

    /// Threshold the image into a bitmap
    ///
    /// A bit is set when the pixel's `(r + g + b) / 3` is greater than
    /// `max_value / 2`.
    pub fn to_bitmap(&self) -> Pbm {
        self.to_gray().to_bitmap()
    }

    /// Draw a line from `from` to `to`, both ends included
    ///
    /// Parts of the line outside the image are clipped.
    ///
    /// # Errors
    /// [`PnmErrors::InvalidPixelValue`] if `color` has a sample above the max value
    pub fn draw_line(&mut self, from: Point, to: Point, color: Rgb) -> Result<(), PnmErrors> {
        self.check_value(color)?;

        let (width, height) = self.size();
        draw_line(&mut self.pixels, width, height, from, to, color);

        Ok(())
    }

    /// Draw a Sierpinski triangle of `depth` levels
    ///
    /// The outer triangle's base runs from `start` to `start + (side, 0)`,
    /// its apex lies above. A depth of zero or less leaves the image untouched.
    ///
    /// # Errors
    /// [`PnmErrors::InvalidPixelValue`] if `color` has a sample above the max value
    pub fn draw_sierpinski_triangle(
        &mut self, depth: i32, start: Point, side: i32, color: Rgb
    ) -> Result<(), PnmErrors> {
        self.check_value(color)?;

        let (width, height) = self.size();
        draw_sierpinski_triangle(&mut self.pixels, width, height, depth, start, side, color);

        Ok(())
    }
}

/// An image of any kind
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Image {
    Bitmap(Pbm),
    Gray(Pgm),
    Color(Ppm)
}

macro_rules! dispatch {
    ($self:expr, $image:ident => $body:expr) => {
        match $self {
            Image::Bitmap($image) => $body,
            Image::Gray($image) => $body,
            Image::Color($image) => $body
        }
    };
}

impl Image {
    pub fn header(&self) -> &Header {
        dispatch!(self, image => image.header())
    }

    /// Return `(width, height)`
    pub fn size(&self) -> (usize, usize) {
        self.header().dimensions()
    }

    pub fn kind(&self) -> PixelKind {
        match self {
            Image::Bitmap(_) => PixelKind::Bitmap,
            Image::Gray(_) => PixelKind::Gray,
            Image::Color(_) => PixelKind::Color
        }
    }

    pub fn magic_number(&self) -> MagicNumber {
        self.header().magic_number()
    }

    /// Change the magic number, see [`Netpbm::set_magic_number`]
    pub fn set_magic_number(&mut self, magic: MagicNumber) -> Result<(), PnmErrors> {
        dispatch!(self, image => image.set_magic_number(magic))
    }

    pub fn invert(&mut self) {
        dispatch!(self, image => image.invert())
    }

    pub fn flip(&mut self) {
        dispatch!(self, image => image.flip())
    }

    pub fn flop(&mut self) {
        dispatch!(self, image => image.flop())
    }

    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<(), PnmErrors> {
        PnmEncoder::new(writer).encode_image(self)
    }

    pub fn save<Q: AsRef<Path>>(&self, path: Q) -> Result<(), PnmErrors> {
        dispatch!(self, image => image.save(path))
    }

    pub fn as_gray(&self) -> Option<&Pgm> {
        match self {
            Image::Gray(image) => Some(image),
            _ => None
        }
    }

    pub fn as_color(&self) -> Option<&Ppm> {
        match self {
            Image::Color(image) => Some(image),
            _ => None
        }
    }

    pub fn as_color_mut(&mut self) -> Option<&mut Ppm> {
        match self {
            Image::Color(image) => Some(image),
            _ => None
        }
    }

    pub fn into_bitmap(self) -> Option<Pbm> {
        match self {
            Image::Bitmap(image) => Some(image),
            _ => None
        }
    }

    pub fn into_color(self) -> Option<Ppm> {
        match self {
            Image::Color(image) => Some(image),
            _ => None
        }
    }
}

impl From<Pbm> for Image {
    fn from(image: Pbm) -> Self {
        Image::Bitmap(image)
    }
}

impl From<Pgm> for Image {
    fn from(image: Pgm) -> Self {
        Image::Gray(image)
    }
}

impl From<Ppm> for Image {
    fn from(image: Ppm) -> Self {
        Image::Color(image)
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use netpbm_core::magic::MagicNumber;
    use netpbm_core::pixel::Rgb;
    use netpbm_imageprocs::draw::Point;

    use crate::errors::PnmErrors;
    use crate::header::Header;
    use crate::image::{Image, Pbm, Pgm, Ppm};

    fn random_ppm(width: usize, height: usize, max_value: u8) -> Ppm {
        let mut rand = nanorand::WyRand::new();
        let header = Header::new(MagicNumber::P6, width, height, max_value).unwrap();

        let pixels = (0..width * height)
            .map(|_| {
                Rgb::new(
                    rand.generate_range(0..=max_value),
                    rand.generate_range(0..=max_value),
                    rand.generate_range(0..=max_value)
                )
            })
            .collect();

        Ppm::from_pixels(header, pixels).unwrap()
    }

    #[test]
    fn operations_are_involutions() {
        let original = random_ppm(13, 7, 200);

        let mut image = original.clone();
        image.invert();
        assert_ne!(image, original);
        image.invert();
        assert_eq!(image, original);

        image.flip();
        image.flip();
        assert_eq!(image, original);

        image.flop();
        image.flop();
        assert_eq!(image, original);
    }

    #[test]
    fn flip_and_flop_move_pixels() {
        let header = Header::new(MagicNumber::P2, 3, 2, 255).unwrap();
        let mut image = Pgm::from_pixels(header, vec![1, 2, 3, 4, 5, 6]).unwrap();

        image.flip();
        assert_eq!(image.pixels(), &[3, 2, 1, 6, 5, 4]);

        image.flop();
        assert_eq!(image.pixels(), &[6, 5, 4, 3, 2, 1]);
        assert_eq!(image.get(0, 1).unwrap(), 3);
    }

    #[test]
    fn invert_uses_the_image_max_value() {
        let header = Header::new(MagicNumber::P3, 2, 1, 100).unwrap();
        let mut image =
            Ppm::from_pixels(header, vec![Rgb::new(0, 40, 100), Rgb::new(1, 2, 3)]).unwrap();

        image.invert();
        assert_eq!(image.pixels(), &[Rgb::new(100, 60, 0), Rgb::new(99, 98, 97)]);

        image.flip();
        assert_eq!(image.pixels(), &[Rgb::new(99, 98, 97), Rgb::new(100, 60, 0)]);
    }

    #[test]
    fn out_of_bounds_access() {
        let mut image = Pbm::new(Header::new(MagicNumber::P1, 2, 3, 1).unwrap()).unwrap();

        assert!(matches!(
            image.get(2, 0),
            Err(PnmErrors::Index {
                x: 2,
                y: 0,
                width: 2,
                height: 3
            })
        ));
        assert!(matches!(image.get(0, 3), Err(PnmErrors::Index { .. })));
        assert!(matches!(image.set(5, 5, true), Err(PnmErrors::Index { .. })));
        assert!(image.set(1, 2, true).is_ok());
        assert!(image.get(1, 2).unwrap());
    }

    #[test]
    fn set_rejects_samples_above_max_value() {
        let mut image = Pgm::new(Header::new(MagicNumber::P2, 1, 1, 15).unwrap()).unwrap();

        assert!(matches!(
            image.set(0, 0, 16),
            Err(PnmErrors::InvalidPixelValue {
                value: 16,
                max_value: 15
            })
        ));
        assert!(image.set(0, 0, 15).is_ok());
    }

    #[test]
    fn from_pixels_validates() {
        let header = Header::new(MagicNumber::P5, 2, 2, 9).unwrap();

        assert!(matches!(
            Pgm::from_pixels(header, vec![0; 3]),
            Err(PnmErrors::DimensionsMismatch {
                expected: 4,
                found: 3
            })
        ));
        assert!(matches!(
            Pgm::from_pixels(header, vec![0, 0, 10, 0]),
            Err(PnmErrors::InvalidPixelValue { .. })
        ));
        assert!(matches!(
            Ppm::from_pixels(header, vec![Rgb::default(); 4]),
            Err(PnmErrors::IncompatibleMagicNumber { .. })
        ));
    }

    #[test]
    fn magic_number_must_keep_kind() {
        let mut image = random_ppm(2, 2, 255);

        assert!(image.set_magic_number(MagicNumber::P3).is_ok());
        assert_eq!(image.magic_number(), MagicNumber::P3);
        assert!(image.set_magic_number(MagicNumber::P2).is_err());
        assert_eq!(image.magic_number(), MagicNumber::P3);
    }

    #[test]
    fn color_to_gray_and_bitmap() {
        let header = Header::new(MagicNumber::P3, 2, 1, 255).unwrap();
        let image = Ppm::from_pixels(header, vec![Rgb::new(9, 9, 9), Rgb::new(200, 100, 90)]).unwrap();

        let gray = image.to_gray();
        assert_eq!(gray.magic_number(), MagicNumber::P2);
        assert_eq!(gray.max_value(), 255);
        assert_eq!(gray.pixels(), &[9, 130]);

        let bitmap = image.to_bitmap();
        assert_eq!(bitmap.magic_number(), MagicNumber::P1);
        assert_eq!(bitmap.pixels(), &[false, true]);
        // source is untouched and conversion is repeatable
        assert_eq!(image.to_bitmap(), bitmap);
        assert_eq!(image.get(0, 0).unwrap(), Rgb::new(9, 9, 9));
    }

    #[test]
    fn gray_to_bitmap_follows_encoding() {
        let header = Header::new(MagicNumber::P5, 3, 1, 10).unwrap();
        let image = Pgm::from_pixels(header, vec![5, 6, 10]).unwrap();

        let bitmap = image.to_bitmap();
        assert_eq!(bitmap.magic_number(), MagicNumber::P4);
        assert_eq!(bitmap.pixels(), &[false, true, true]);
    }

    #[test]
    fn draw_line_only_touches_the_line() {
        let header = Header::new(MagicNumber::P6, 4, 3, 255).unwrap();
        let mut image = Ppm::new(header).unwrap();
        let red = Rgb::new(255, 0, 0);

        image
            .draw_line(Point::new(0, 0), Point::new(2, 0), red)
            .unwrap();

        for y in 0..3 {
            for x in 0..4 {
                let expected = if y == 0 && x <= 2 { red } else { Rgb::default() };
                assert_eq!(image.get(x, y).unwrap(), expected);
            }
        }
    }

    #[test]
    fn draw_rejects_colors_above_max_value() {
        let header = Header::new(MagicNumber::P6, 4, 4, 100).unwrap();
        let mut image = Ppm::new(header).unwrap();
        let original = image.clone();

        let result = image.draw_line(Point::new(0, 0), Point::new(3, 3), Rgb::new(101, 0, 0));

        assert!(matches!(result, Err(PnmErrors::InvalidPixelValue { .. })));
        assert_eq!(image, original);
    }

    #[test]
    fn sierpinski_depth_zero_is_noop() {
        let mut image = random_ppm(32, 32, 255);
        let original = image.clone();

        image
            .draw_sierpinski_triangle(0, Point::new(0, 31), 32, Rgb::new(1, 2, 3))
            .unwrap();

        assert_eq!(image, original);
    }

    #[test]
    fn enum_dispatch() {
        let mut image = Image::from(random_ppm(3, 3, 255));
        let copy = image.clone();

        assert_eq!(image.size(), (3, 3));
        assert_eq!(image.magic_number(), MagicNumber::P6);
        image.invert();
        image.invert();
        assert_eq!(image, copy);
        assert!(image.as_color().is_some());
        assert!(image.as_gray().is_none());
        assert!(image.into_bitmap().is_none());
    }
}
