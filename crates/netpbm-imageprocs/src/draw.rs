/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Vector drawing onto a pixel buffer
//!
//! Coordinates are signed so shapes may extend past the image,
//! anything that lands outside `width x height` is clipped.
use log::trace;

/// An integer coordinate, `x` grows to the right and `y` grows down
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// The point halfway between `self` and `other`, rounded toward zero
    pub const fn midpoint(self, other: Point) -> Point {
        Point {
            x: ((self.x as i64 + other.x as i64) / 2) as i32,
            y: ((self.y as i64 + other.y as i64) / 2) as i32
        }
    }
}

#[inline]
fn plot<T: Copy>(data: &mut [T], width: usize, height: usize, x: i64, y: i64, value: T) {
    let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
        return;
    };
    if x < width && y < height {
        if let Some(pixel) = data.get_mut(y * width + x) {
            *pixel = value;
        }
    }
}

/// Draw a straight line from `from` to `to`, both ends included
///
/// This is Bresenham's algorithm: it steps one pixel at a time along the
/// dominant axis and keeps an integer error term that decides when the
/// other axis advances too. Points outside the image are skipped.
pub fn draw_line<T: Copy>(
    data: &mut [T], width: usize, height: usize, from: Point, to: Point, value: T
) {
    let (x1, y1) = (i64::from(to.x), i64::from(to.y));
    let (mut x, mut y) = (i64::from(from.x), i64::from(from.y));

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };

    let mut error = dx + dy;

    loop {
        plot(data, width, height, x, y, value);

        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * error;

        if e2 >= dy {
            error += dy;
            x += sx;
        }
        if e2 <= dx {
            error += dx;
            y += sy;
        }
    }
}

/// Draw a Sierpinski triangle of `depth` levels
///
/// The outer triangle is equilateral with its base running from `start`
/// to `start + (side, 0)` and its apex `side * sqrt(3) / 2` pixels above.
/// Each level draws the inner triangle joining the midpoints of the three
/// edges, then recurses into the three corner triangles at half the side.
///
/// A depth of zero or less draws nothing, and so does a side too short
/// to be subdivided.
pub fn draw_sierpinski_triangle<T: Copy>(
    data: &mut [T], width: usize, height: usize, depth: i32, start: Point, side: i32, value: T
) {
    if depth <= 0 || side < 2 {
        return;
    }
    trace!("Sierpinski level {depth} at ({}, {}) side {side}", start.x, start.y);

    let apex_height = (f64::from(side) * 3_f64.sqrt() / 2.0) as i32;

    let p1 = start;
    let p2 = Point::new(start.x.saturating_add(side), start.y);
    let p3 = Point::new(
        start.x.saturating_add(side / 2),
        start.y.saturating_sub(apex_height)
    );

    let m1 = p1.midpoint(p2);
    let m2 = p2.midpoint(p3);
    let m3 = p3.midpoint(p1);

    draw_line(data, width, height, m1, m2, value);
    draw_line(data, width, height, m2, m3, value);
    draw_line(data, width, height, m3, m1, value);

    let half = side / 2;

    // bottom left, bottom right and top corners
    draw_sierpinski_triangle(data, width, height, depth - 1, p1, half, value);
    draw_sierpinski_triangle(data, width, height, depth - 1, m1, half, value);
    draw_sierpinski_triangle(data, width, height, depth - 1, m3, half, value);
}

#[cfg(test)]
mod tests {
    use crate::draw::{draw_line, draw_sierpinski_triangle, Point};

    fn set_points(data: &[u8], width: usize) -> Vec<(usize, usize)> {
        data.iter()
            .enumerate()
            .filter(|(_, v)| **v != 0)
            .map(|(i, _)| (i % width, i / width))
            .collect()
    }

    #[test]
    fn horizontal_line() {
        let (width, height) = (4, 3);
        let mut data = vec![0_u8; width * height];

        draw_line(&mut data, width, height, Point::new(0, 0), Point::new(2, 0), 1);

        assert_eq!(set_points(&data, width), vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn line_direction_does_not_matter_for_diagonals() {
        let (width, height) = (5, 5);
        let mut forward = vec![0_u8; width * height];
        let mut backward = vec![0_u8; width * height];

        draw_line(&mut forward, width, height, Point::new(0, 0), Point::new(4, 4), 1);
        draw_line(&mut backward, width, height, Point::new(4, 4), Point::new(0, 0), 1);

        assert_eq!(forward, backward);
        assert_eq!(
            set_points(&forward, width),
            vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]
        );
    }

    #[test]
    fn steep_line_has_one_pixel_per_row() {
        let (width, height) = (3, 7);
        let mut data = vec![0_u8; width * height];

        draw_line(&mut data, width, height, Point::new(0, 0), Point::new(2, 6), 1);

        let points = set_points(&data, width);
        assert_eq!(points.len(), 7);
        for (row, (_, y)) in points.iter().enumerate() {
            assert_eq!(*y, row);
        }
        assert_eq!(points[0], (0, 0));
        assert_eq!(points[6], (2, 6));
    }

    #[test]
    fn line_is_clipped() {
        let (width, height) = (3, 3);
        let mut data = vec![0_u8; width * height];

        draw_line(&mut data, width, height, Point::new(-2, 1), Point::new(5, 1), 1);

        assert_eq!(set_points(&data, width), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn sierpinski_depth_zero_draws_nothing() {
        let (width, height) = (16, 16);
        let mut data = vec![0_u8; width * height];

        draw_sierpinski_triangle(&mut data, width, height, 0, Point::new(0, 15), 16, 1);
        draw_sierpinski_triangle(&mut data, width, height, -3, Point::new(0, 15), 16, 1);

        assert!(data.iter().all(|x| *x == 0));
    }

    #[test]
    fn sierpinski_first_level_is_the_midpoint_triangle() {
        let (width, height) = (17, 17);
        let mut data = vec![0_u8; width * height];
        let mut expected = vec![0_u8; width * height];

        let start = Point::new(0, 16);
        draw_sierpinski_triangle(&mut data, width, height, 1, start, 16, 1);

        // side 16 gives an apex 13 pixels up, at (8, 3)
        let m1 = Point::new(8, 16);
        let m2 = Point::new(12, 9);
        let m3 = Point::new(4, 9);
        draw_line(&mut expected, width, height, m1, m2, 1);
        draw_line(&mut expected, width, height, m2, m3, 1);
        draw_line(&mut expected, width, height, m3, m1, 1);

        assert_eq!(data, expected);
    }

    #[test]
    fn sierpinski_deeper_levels_add_pixels() {
        let (width, height) = (64, 64);
        let start = Point::new(0, 63);

        let mut shallow = vec![0_u8; width * height];
        let mut deep = vec![0_u8; width * height];

        draw_sierpinski_triangle(&mut shallow, width, height, 1, start, 64, 1);
        draw_sierpinski_triangle(&mut deep, width, height, 3, start, 64, 1);

        let count = |d: &[u8]| d.iter().filter(|x| **x != 0).count();

        assert!(count(&deep) > count(&shallow));
        // everything drawn at depth one is still drawn at depth three
        assert!(shallow.iter().zip(&deep).all(|(s, d)| *s == 0 || *d != 0));
    }
}
