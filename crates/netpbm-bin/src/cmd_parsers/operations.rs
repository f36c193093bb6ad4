/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{debug, warn};
use netpbm_image::{Image, MagicNumber, Point, Ppm, Rgb};

use crate::cmd_args::arg_parsers::{get_color_args, get_four_pair_args};
use crate::errors::CliErrors;

fn missing(id: &str) -> CliErrors {
    CliErrors::GenericString(format!("Missing value for --{id}"))
}

fn string_arg<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a str, CliErrors> {
    args.get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| missing(id))
}

fn color_image<'a>(image: &'a mut Image, operation: &str) -> Result<&'a mut Ppm, CliErrors> {
    let kind = image.kind();

    image.as_color_mut().ok_or_else(|| {
        CliErrors::GenericString(format!(
            "Cannot {operation} on a {kind} image, only color images can be drawn on"
        ))
    })
}

/// Carry out `order_args` on `image`, returning the resulting image
///
/// Conversions consume the image they convert, hence taking it by value.
pub fn apply_operations(
    mut image: Image, order_args: &[String], args: &ArgMatches
) -> Result<Image, CliErrors> {
    // drawing color, white unless set by --color
    let mut color: Option<Rgb> = None;

    // repeatable operations, one value per occurrence in command line order
    let mut colors = args.get_many::<String>("color").into_iter().flatten();
    let mut lines = args.get_many::<String>("line").into_iter().flatten();
    let mut depths = args.get_many::<i32>("sierpinski").into_iter().flatten();

    for argument in order_args {
        if argument == "invert" {
            debug!("Inverting image");
            image.invert();
        } else if argument == "flip" {
            debug!("Flipping image");
            image.flip();
        } else if argument == "flop" {
            debug!("Flopping image");
            image.flop();
        } else if argument == "grayscale" {
            image = match image {
                Image::Color(ppm) => {
                    debug!("Converting color image to grayscale");
                    ppm.to_gray().into()
                }
                Image::Gray(pgm) => {
                    warn!("Image is already grayscale, ignoring --grayscale");
                    pgm.into()
                }
                Image::Bitmap(_) => {
                    return Err(CliErrors::GenericString(
                        "Cannot convert a bitmap image to grayscale".to_string()
                    ));
                }
            };
        } else if argument == "bitmap" {
            image = match image {
                Image::Color(ppm) => {
                    debug!("Thresholding color image into a bitmap");
                    ppm.to_bitmap().into()
                }
                Image::Gray(pgm) => {
                    debug!("Thresholding grayscale image into a bitmap");
                    pgm.to_bitmap().into()
                }
                Image::Bitmap(pbm) => {
                    warn!("Image is already a bitmap, ignoring --bitmap");
                    pbm.into()
                }
            };
        } else if argument == "magic" {
            let value = string_arg(args, argument)?;
            let magic = MagicNumber::from_bytes(value.as_bytes())
                .ok_or_else(|| CliErrors::GenericString(format!("Unknown magic number {value}")))?;

            debug!("Setting magic number to {magic}");
            image.set_magic_number(magic)?;
        } else if argument == "color" {
            let value = colors.next().ok_or_else(|| missing(argument))?;
            let value = get_color_args(value)?;

            debug!("Drawing color set to {value:?}");
            color = Some(value);
        } else if argument == "line" {
            let value = lines.next().ok_or_else(|| missing(argument))?;
            let [x1, y1, x2, y2] = get_four_pair_args(value)?;
            let ppm = color_image(&mut image, "draw a line")?;
            let value = match color {
                Some(color) => color,
                None => white(ppm)
            };

            debug!("Drawing line from ({x1}, {y1}) to ({x2}, {y2})");
            ppm.draw_line(Point::new(x1, y1), Point::new(x2, y2), value)?;
        } else if argument == "sierpinski" {
            let depth = *depths.next().ok_or_else(|| missing(argument))?;
            let ppm = color_image(&mut image, "draw a Sierpinski triangle")?;
            let value = match color {
                Some(color) => color,
                None => white(ppm)
            };

            // base on the bottom row, as wide as the image
            let (width, height) = ppm.size();
            let start = Point::new(0, clamp_i32(height.saturating_sub(1)));
            let side = clamp_i32(width);

            debug!("Drawing Sierpinski triangle of depth {depth} and side {side}");
            ppm.draw_sierpinski_triangle(depth, start, side, value)?;
        } else {
            warn!("Unknown operation {argument}, ignoring");
        }
    }
    Ok(image)
}

fn white(image: &Ppm) -> Rgb {
    let max = image.max_value();
    Rgb::new(max, max, max)
}

fn clamp_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
