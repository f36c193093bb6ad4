/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// The threshold used when turning samples with `max_value` into bits
///
/// Half the max value, rounded down
pub const fn threshold_for(max_value: u8) -> u8 {
    max_value / 2
}

/// Turn samples into bits, a bit is set when its sample is strictly
/// greater than `threshold`
///
/// # Panics
/// If `input` and `out` have different lengths
pub fn threshold(input: &[u8], out: &mut [bool], threshold: u8) {
    assert_eq!(
        input.len(),
        out.len(),
        "Input and output lengths do not match"
    );

    for (sample, bit) in input.iter().zip(out.iter_mut()) {
        *bit = *sample > threshold;
    }
}
