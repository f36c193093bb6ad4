/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Flop: reflect pixels around the central horizontal axis

/// Flop an image, reversing the order of its rows
///
/// Row `y` moves to `height - 1 - y`
///
/// ```text
///
///old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │f g h i j │
/// │f g h i j│   │a b c d e │
/// └─────────┘   └──────────┘
/// ```
///
pub fn flop<T: Copy>(channel: &mut [T], width: usize) {
    if width == 0 {
        return;
    }
    // Simply split the image in half
    // on one end read from the start to the halfway point
    // on the other end read from the end to the halfway point
    let rows = channel.len() / width;

    let (top, bottom) = channel[..rows * width].split_at_mut((rows / 2) * width);

    for (t, b) in top
        .chunks_exact_mut(width)
        .zip(bottom.rchunks_exact_mut(width))
    {
        t.swap_with_slice(b);
    }
}
