/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// A color pixel with red, green and blue 8 bit samples
///
/// Pixels are plain values, reading or writing one copies it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Brightness as the truncated mean of the three samples
    ///
    /// # Example
    /// ```
    /// use netpbm_core::pixel::Rgb;
    /// assert_eq!(Rgb::new(10, 20, 31).luma(), 20);
    /// ```
    pub const fn luma(self) -> u8 {
        // the mean of three u8 values always fits in a u8
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }

    /// The largest of the three samples
    pub fn max_channel(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
