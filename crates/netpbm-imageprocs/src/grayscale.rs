/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use netpbm_core::pixel::Rgb;

/// Convert color pixels to grayscale samples
///
/// Each sample is the truncated mean of the pixel's three channels,
/// `(r + g + b) / 3`, so the result never exceeds the largest channel.
///
/// # Panics
/// If `input` and `out` have different lengths
pub fn rgb_to_grayscale(input: &[Rgb], out: &mut [u8]) {
    assert_eq!(
        input.len(),
        out.len(),
        "Input and output lengths do not match"
    );

    for (pixel, gray) in input.iter().zip(out.iter_mut()) {
        *gray = pixel.luma();
    }
}
