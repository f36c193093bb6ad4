/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Flip: reflect pixels around the central vertical axis

/// Flip an image, creating a horizontal mirror image
///
/// The pixel at `(x, y)` moves to `(width - 1 - x, y)`
///
///```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │e d c b a │
///│f g h i j│   │j i h g f │
///└─────────┘   └──────────┘
///```
///
/// A trailing partial row (when `width` does not divide the length)
/// is left untouched.
pub fn flip<T: Copy>(in_out_image: &mut [T], width: usize) {
    if width == 0 {
        return;
    }
    for width_chunks in in_out_image.chunks_exact_mut(width) {
        let (left_to_right, right_to_left) = width_chunks.split_at_mut(width / 2);

        // iterate and swap
        for (ltr, rtl) in left_to_right.iter_mut().zip(right_to_left.iter_mut().rev()) {
            core::mem::swap(ltr, rtl);
        }
    }
}
