/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use netpbm_image::DecoderOptions;

use crate::cmd_args::OPERATIONS;

pub mod global_options;
pub mod operations;

/// Fill operation arguments into a Vec according to the
/// order which they were specified in the command line
pub fn fill_args(options: &ArgMatches) -> Vec<String> {
    let mut args = Vec::with_capacity(OPERATIONS.len());

    for id in OPERATIONS {
        if options.value_source(id) != Some(ValueSource::CommandLine) {
            // ignore things not passed via command line
            continue;
        }
        if let Some(indices) = options.indices_of(id) {
            for index in indices {
                args.push((index, id.to_string()));
            }
        }
    }
    args.sort_unstable_by_key(|x| x.0);

    args.into_iter().map(|x| x.1).collect()
}

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let defaults = DecoderOptions::default();

    let max_width = options
        .get_one::<usize>("max-width")
        .copied()
        .unwrap_or(defaults.get_max_width());
    let max_height = options
        .get_one::<usize>("max-height")
        .copied()
        .unwrap_or(defaults.get_max_height());

    defaults
        .set_max_width(max_width)
        .set_max_height(max_height)
}
