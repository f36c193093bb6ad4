/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use netpbm_image::Rgb;

/// Parse `N` comma separated values, e.g `1,2,3,4`
fn get_comma_args<T: std::str::FromStr, const N: usize>(
    input: &str, name: &str
) -> Result<[T; N], String>
where
    T::Err: std::fmt::Display
{
    let split_args: Vec<&str> = input.split(',').map(str::trim).collect();

    if split_args.len() != N {
        return Err(format!(
            "{name} expected {N} values separated by `,` but found {}",
            split_args.len()
        ));
    }
    let mut values = Vec::with_capacity(N);

    for arg in split_args {
        let value = arg
            .parse::<T>()
            .map_err(|x| format!("{name}: could not parse `{arg}`, reason {x}"))?;
        values.push(value);
    }
    values
        .try_into()
        .map_err(|_| format!("{name} expected {N} values"))
}

/// Parse `x1,y1,x2,y2`
pub fn get_four_pair_args(input: &str) -> Result<[i32; 4], String> {
    get_comma_args(input, "line")
}

/// Parse `r,g,b`
pub fn get_color_args(input: &str) -> Result<Rgb, String> {
    let [r, g, b] = get_comma_args::<u8, 3>(input, "color")?;
    Ok(Rgb::new(r, g, b))
}
