/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Common image processing routines for netpbm images
//!
//! Every routine here works on a row major slice of pixels plus the
//! image width (and height where needed). The typed images in `netpbm-image`
//! call into these, but they are just as usable on raw buffers.
//!
//! # Routines
//! - [`invert`](invert::invert): complement every pixel against a max value
//! - [`flip`](flip::flip): mirror every row
//! - [`flop`](flop::flop): mirror the row order
//! - [`rgb_to_grayscale`](grayscale::rgb_to_grayscale): average color channels
//! - [`threshold`](threshold::threshold): turn samples into bits
//! - [`draw_line`](draw::draw_line), [`draw_sierpinski_triangle`](draw::draw_sierpinski_triangle)
#![cfg_attr(feature = "benchmarks", feature(test))]

pub mod draw;
pub mod flip;
pub mod flop;
pub mod grayscale;
pub mod invert;
pub mod threshold;
