/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the netpbm crates
//!
//! This crate provides a set of core routines shared
//! by the decoder, encoder and image processing crates.
//!
//! It currently contains
//!
//! - A bytestream reader that doubles as the header and ASCII raster tokenizer
//! - An MSB first bit reader and writer for packed bitmap rows
//! - Magic number and pixel kind information shared by images
//! - Decoder options
//! - The RGB pixel triple
//!
//! This library is `#[no_std]` with `alloc` needed for defining `Vec`
//! which we need for storing packed bits.
//!
//! # Features
//!  - `std`: Compile with the standard library.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![cfg_attr(not(any(feature = "std", test)), no_std)]
extern crate alloc;

pub mod bits;
pub mod bytestream;
pub mod magic;
pub mod options;
pub mod pixel;
mod serde;
