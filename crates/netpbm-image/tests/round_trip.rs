/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use netpbm_image::decoder::PnmDecoder;
use netpbm_image::{Header, Image, MagicNumber, Pbm, Pgm, Ppm, Rgb};

fn random_image(magic: MagicNumber, width: usize, height: usize, max_value: u8) -> Image {
    let mut rand = nanorand::WyRand::new();
    let header = Header::new(magic, width, height, max_value).unwrap();
    let count = width * height;

    match magic {
        MagicNumber::P1 | MagicNumber::P4 => {
            let pixels = (0..count).map(|_| rand.generate::<bool>()).collect();
            Pbm::from_pixels(header, pixels).unwrap().into()
        }
        MagicNumber::P2 | MagicNumber::P5 => {
            let pixels = (0..count)
                .map(|_| rand.generate_range(0..=max_value))
                .collect();
            Pgm::from_pixels(header, pixels).unwrap().into()
        }
        MagicNumber::P3 | MagicNumber::P6 => {
            let pixels = (0..count)
                .map(|_| {
                    Rgb::new(
                        rand.generate_range(0..=max_value),
                        rand.generate_range(0..=max_value),
                        rand.generate_range(0..=max_value)
                    )
                })
                .collect();
            Ppm::from_pixels(header, pixels).unwrap().into()
        }
    }
}

fn round_trip(magic: MagicNumber, width: usize, height: usize, max_value: u8) {
    let image = random_image(magic, width, height, max_value);

    let mut encoded = vec![];
    image.encode(&mut encoded).unwrap();

    let decoded = PnmDecoder::new(&encoded).decode().unwrap();

    assert_eq!(decoded, image, "{magic} {width}x{height}");
}

#[test]
fn ascii_formats() {
    round_trip(MagicNumber::P1, 17, 5, 1);
    round_trip(MagicNumber::P2, 31, 12, 255);
    round_trip(MagicNumber::P2, 8, 8, 7);
    round_trip(MagicNumber::P3, 9, 21, 100);
}

#[test]
fn raw_formats() {
    round_trip(MagicNumber::P4, 64, 3, 1);
    round_trip(MagicNumber::P5, 33, 17, 255);
    round_trip(MagicNumber::P6, 12, 40, 255);
}

#[test]
fn raw_bitmap_with_partial_bytes() {
    for width in [1, 7, 9, 10, 15] {
        round_trip(MagicNumber::P4, width, 4, 1);
    }
}

#[test]
fn single_pixel_images() {
    for magic in [
        MagicNumber::P1,
        MagicNumber::P2,
        MagicNumber::P3,
        MagicNumber::P4,
        MagicNumber::P5,
        MagicNumber::P6
    ] {
        round_trip(magic, 1, 1, 1);
    }
}

#[test]
fn switching_between_ascii_and_raw_keeps_pixels() {
    let mut image = random_image(MagicNumber::P3, 6, 5, 255);
    let ascii = image.clone();

    image.set_magic_number(MagicNumber::P6).unwrap();

    let mut encoded = vec![];
    image.encode(&mut encoded).unwrap();
    assert!(encoded.starts_with(b"P6\n6 5\n255\n"));

    let decoded = PnmDecoder::new(&encoded).decode_ppm().unwrap();
    assert_eq!(decoded.pixels(), ascii.as_color().unwrap().pixels());
}
