/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading images from and writing images to files
use std::ffi::OsString;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use log::{info, warn};
use netpbm_core::options::DecoderOptions;

use crate::decoder::PnmDecoder;
use crate::errors::PnmErrors;
use crate::image::{Image, Netpbm, Pbm, Pgm, Ppm};
use crate::pixel::Pixel;

fn read_file(path: &Path) -> Result<Vec<u8>, PnmErrors> {
    info!("Reading {:?}", path);
    Ok(std::fs::read(path)?)
}

/// Read an image of any kind
///
/// # Example
/// ```no_run
/// let image = netpbm_image::read("a.pgm").unwrap();
/// println!("{:?}", image.size());
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> Result<Image, PnmErrors> {
    read_with_options(path, DecoderOptions::default())
}

/// Read an image of any kind, using `options` to limit dimensions
pub fn read_with_options<P: AsRef<Path>>(
    path: P, options: DecoderOptions
) -> Result<Image, PnmErrors> {
    let data = read_file(path.as_ref())?;
    PnmDecoder::new_with_options(options, &data).decode()
}

/// Read a `P1` or `P4` file
pub fn read_pbm<P: AsRef<Path>>(path: P) -> Result<Pbm, PnmErrors> {
    let data = read_file(path.as_ref())?;
    PnmDecoder::new(&data).decode_pbm()
}

/// Read a `P2` or `P5` file
pub fn read_pgm<P: AsRef<Path>>(path: P) -> Result<Pgm, PnmErrors> {
    let data = read_file(path.as_ref())?;
    PnmDecoder::new(&data).decode_pgm()
}

/// Read a `P3` or `P6` file
pub fn read_ppm<P: AsRef<Path>>(path: P) -> Result<Ppm, PnmErrors> {
    let data = read_file(path.as_ref())?;
    PnmDecoder::new(&data).decode_ppm()
}

/// Temporary sibling of `path`, `dir/.name.tmp`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");

    path.with_file_name(name)
}

fn write_temp<P: Pixel>(temp: &Path, image: &Netpbm<P>) -> Result<(), PnmErrors> {
    let mut writer = BufWriter::new(File::create(temp)?);

    image.encode(&mut writer)?;

    let file = writer.into_inner().map_err(|x| x.into_error())?;
    file.sync_all()?;

    Ok(())
}

/// Write `image` to `path` using its magic number
///
/// The image is written to a temporary file next to `path` which is then
/// renamed over it, so the destination holds either its old contents or the
/// complete new image, never a partial one.
pub fn save<P: Pixel, Q: AsRef<Path>>(path: Q, image: &Netpbm<P>) -> Result<(), PnmErrors> {
    let path = path.as_ref();

    if path.file_name().is_none() {
        let msg = format!("{path:?} does not name a file");
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, msg).into());
    }
    let temp = temp_path(path);

    info!("Writing {:?}", path);

    let result = write_temp(&temp, image).and_then(|_| Ok(std::fs::rename(&temp, path)?));

    if result.is_err() && temp.exists() {
        if let Err(err) = std::fs::remove_file(&temp) {
            warn!("Could not remove temporary file {:?}: {err}", temp);
        }
    }
    result
}
