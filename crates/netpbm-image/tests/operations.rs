/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use netpbm_image::decoder::PnmDecoder;
use netpbm_image::{Header, MagicNumber, Point, Ppm, Rgb};

fn rows<P: netpbm_image::Pixel>(image: &netpbm_image::Netpbm<P>) -> Vec<Vec<P>> {
    image.rows().map(|x| x.to_vec()).collect()
}

#[test]
fn invert_bitmap() {
    let mut image = PnmDecoder::new(b"P1\n2 2\n0 1\n1 0\n")
        .decode_pbm()
        .unwrap();

    assert_eq!(rows(&image), vec![vec![false, true], vec![true, false]]);

    image.invert();

    assert_eq!(rows(&image), vec![vec![true, false], vec![false, true]]);
}

#[test]
fn invert_color() {
    let mut image = PnmDecoder::new(b"P3\n1 1\n255\n10 20 30\n")
        .decode_ppm()
        .unwrap();

    assert_eq!(image.get(0, 0).unwrap(), Rgb::new(10, 20, 30));

    image.invert();

    assert_eq!(image.get(0, 0).unwrap(), Rgb::new(245, 235, 225));
}

#[test]
fn invert_uses_max_value() {
    let mut image = PnmDecoder::new(b"P2\n3 1\n15\n0 5 15\n")
        .decode_pgm()
        .unwrap();

    image.invert();

    assert_eq!(image.pixels(), &[15, 10, 0]);
}

#[test]
fn dark_pixel_to_gray_and_bitmap() {
    let image = PnmDecoder::new(b"P3\n1 1\n255\n9 9 9\n")
        .decode_ppm()
        .unwrap();

    assert_eq!(image.to_gray().get(0, 0).unwrap(), 9);
    assert!(!image.to_bitmap().get(0, 0).unwrap());
}

#[test]
fn threshold_is_strictly_greater() {
    let image = PnmDecoder::new(b"P2\n3 1\n255\n127 128 255\n")
        .decode_pgm()
        .unwrap();

    assert_eq!(image.to_bitmap().pixels(), &[false, true, true]);
}

#[test]
fn line_touches_only_its_pixels() {
    let header = Header::new(MagicNumber::P3, 5, 5, 255).unwrap();
    let mut image = Ppm::new(header).unwrap();
    let red = Rgb::new(255, 0, 0);

    image
        .draw_line(Point::new(0, 0), Point::new(2, 0), red)
        .unwrap();

    for y in 0..5 {
        for x in 0..5 {
            let expected = if y == 0 && x < 3 { red } else { Rgb::default() };
            assert_eq!(image.get(x, y).unwrap(), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn line_endpoints_are_interchangeable() {
    let header = Header::new(MagicNumber::P6, 9, 7, 255).unwrap();
    let color = Rgb::new(1, 2, 3);

    let mut forward = Ppm::new(header).unwrap();
    forward
        .draw_line(Point::new(1, 6), Point::new(8, 0), color)
        .unwrap();

    let mut backward = Ppm::new(header).unwrap();
    backward
        .draw_line(Point::new(8, 0), Point::new(1, 6), color)
        .unwrap();

    assert_eq!(forward.get(1, 6).unwrap(), color);
    assert_eq!(forward.get(8, 0).unwrap(), color);
    assert_eq!(
        forward.pixels().iter().filter(|x| **x == color).count(),
        backward.pixels().iter().filter(|x| **x == color).count()
    );
}

#[test]
fn line_outside_the_image_is_clipped() {
    let header = Header::new(MagicNumber::P6, 4, 4, 255).unwrap();
    let mut image = Ppm::new(header).unwrap();
    let color = Rgb::new(7, 7, 7);

    image
        .draw_line(Point::new(-10, 2), Point::new(10, 2), color)
        .unwrap();

    assert!(image.rows().nth(2).unwrap().iter().all(|x| *x == color));
    assert_eq!(image.pixels().iter().filter(|x| **x == color).count(), 4);
}

#[test]
fn sierpinski_depth_zero_leaves_image_untouched() {
    let header = Header::new(MagicNumber::P6, 16, 16, 255).unwrap();
    let mut image = Ppm::new(header).unwrap();
    let original = image.clone();

    image
        .draw_sierpinski_triangle(0, Point::new(0, 15), 16, Rgb::new(255, 255, 255))
        .unwrap();

    assert_eq!(image, original);
}

#[test]
fn sierpinski_draws_midpoint_triangles() {
    let header = Header::new(MagicNumber::P6, 64, 64, 255).unwrap();
    let mut image = Ppm::new(header).unwrap();
    let white = Rgb::new(255, 255, 255);

    image
        .draw_sierpinski_triangle(3, Point::new(0, 63), 64, white)
        .unwrap();

    // corners of the first inner triangle
    assert_eq!(image.get(32, 63).unwrap(), white);
    assert_eq!(image.get(48, 35).unwrap(), white);
    assert_eq!(image.get(16, 35).unwrap(), white);
    // the outer triangle itself is not outlined
    assert_eq!(image.get(0, 63).unwrap(), Rgb::default());
    // centre of the first inner triangle is never subdivided
    assert_eq!(image.get(32, 44).unwrap(), Rgb::default());
}

#[test]
fn flip_then_flop_rotates_half_turn() {
    let mut image = PnmDecoder::new(b"P2\n3 2\n9\n1 2 3\n4 5 6\n")
        .decode_pgm()
        .unwrap();

    image.flip();
    assert_eq!(rows(&image), vec![vec![3, 2, 1], vec![6, 5, 4]]);

    image.flop();
    assert_eq!(rows(&image), vec![vec![6, 5, 4], vec![3, 2, 1]]);
}
