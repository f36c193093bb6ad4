/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use clap::ArgMatches;
use log::warn;
use netpbm_image::decoder::PnmDecoder;
use netpbm_image::{DecoderOptions, PnmErrors};

use crate::errors::CliErrors;
use crate::serde::Metadata;

/// Probe input files, extract headers, and print them to standard output.
pub fn probe_input_files(args: &ArgMatches, options: DecoderOptions) -> Result<(), CliErrors> {
    let Some(files) = args.get_many::<OsString>("in") else {
        return Ok(());
    };

    for in_file in files {
        let data = std::fs::read(in_file).map_err(PnmErrors::from)?;

        let mut decoder = PnmDecoder::new_with_options(options, &data);

        match decoder.read_headers() {
            Ok(header) => {
                let metadata = Metadata::new(in_file.clone(), data.len() as u64, &header);

                println!("{}", serde_json::to_string_pretty(&metadata)?);
            }
            Err(err) => {
                warn!("Could not probe {:?}, reason {err}", in_file);
            }
        }
    }
    Ok(())
}
