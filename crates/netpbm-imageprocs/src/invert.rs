/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Invert: replace every pixel with its complement
use netpbm_core::pixel::Rgb;

/// A pixel that can be complemented against a max value
pub trait Complement: Copy {
    fn complement(self, max_value: u8) -> Self;
}

impl Complement for bool {
    /// Bits ignore the max value, a set bit becomes clear and vice versa
    fn complement(self, _: u8) -> Self {
        !self
    }
}

impl Complement for u8 {
    fn complement(self, max_value: u8) -> Self {
        max_value.saturating_sub(self)
    }
}

impl Complement for Rgb {
    fn complement(self, max_value: u8) -> Self {
        Rgb::new(
            self.r.complement(max_value),
            self.g.complement(max_value),
            self.b.complement(max_value)
        )
    }
}

/// Invert pixels
///
/// The formula for inverting an 8 bit sample
///  is `pixel[x,y] = max_value - pixel[x,y]`, bits are negated.
///
/// Inverting twice gives back the original as long as every
/// sample is at most `max_value`
pub fn invert<T: Complement>(in_image: &mut [T], max_value: u8) {
    in_image
        .iter_mut()
        .for_each(|x| *x = x.complement(max_value));
}
