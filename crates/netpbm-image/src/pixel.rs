/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The pixel types an image can hold
use std::fmt::Debug;

use netpbm_core::magic::PixelKind;
use netpbm_core::pixel::Rgb;
use netpbm_imageprocs::invert::Complement;

use crate::encoder::EncodePixels;

/// A pixel stored by a [`Netpbm`](crate::image::Netpbm) image
///
/// Implemented for `bool` (bitmaps), `u8` (grayscale) and [`Rgb`] (color)
pub trait Pixel: Complement + EncodePixels + Copy + Default + Debug + PartialEq {
    /// The kind of image that stores this pixel
    const KIND: PixelKind;

    /// The largest sample in this pixel, bits count as one when set
    fn max_sample(self) -> u8;

    /// Whether every sample of the pixel fits under `max_value`
    fn fits(self, max_value: u8) -> bool {
        self.max_sample() <= max_value
    }
}

impl Pixel for bool {
    const KIND: PixelKind = PixelKind::Bitmap;

    fn max_sample(self) -> u8 {
        u8::from(self)
    }
}

impl Pixel for u8 {
    const KIND: PixelKind = PixelKind::Gray;

    fn max_sample(self) -> u8 {
        self
    }
}

impl Pixel for Rgb {
    const KIND: PixelKind = PixelKind::Color;

    fn max_sample(self) -> u8 {
        self.max_channel()
    }
}
