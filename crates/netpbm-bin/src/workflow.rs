/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};
use netpbm_image::{read_with_options, DecoderOptions};

use crate::cmd_parsers::fill_args;
use crate::cmd_parsers::operations::apply_operations;
use crate::errors::CliErrors;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, options: DecoderOptions
) -> Result<(), CliErrors> {
    info!("Creating workflows from input");

    let inputs: Vec<&OsStr> = args
        .get_many::<std::ffi::OsString>("in")
        .map(|x| x.map(|y| y.as_os_str()).collect())
        .unwrap_or_default();
    let outputs: Vec<&OsStr> = args
        .get_many::<std::ffi::OsString>("out")
        .map(|x| x.map(|y| y.as_os_str()).collect())
        .unwrap_or_default();

    if inputs.len() != outputs.len() {
        return Err(CliErrors::GenericString(format!(
            "Expected as many outputs as inputs, found {} inputs and {} outputs",
            inputs.len(),
            outputs.len()
        )));
    }
    let order_args = fill_args(args);

    debug!("Operations in order: {:?}", order_args);

    for (in_file, out_file) in inputs.into_iter().zip(outputs) {
        verify_file_paths(in_file, out_file)?;

        let image = read_with_options(in_file, options)?;

        info!(
            "Decoded {:?}, {} image of {}x{}",
            in_file,
            image.kind(),
            image.size().0,
            image.size().1
        );

        let image = apply_operations(image, &order_args, args)?;

        image.save(out_file)?;

        info!("Wrote {:?} as {}", out_file, image.magic_number());
    }

    Ok(())
}

fn verify_file_paths(p0: &OsStr, p1: &OsStr) -> Result<(), CliErrors> {
    if p0 == p1 {
        return Err(CliErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            p0
        )));
    }
    let in_path = Path::new(p0);

    if !in_path.exists() {
        return Err(CliErrors::GenericString(format!(
            "Path {:?}, does not exist",
            in_path
        )));
    }

    if !in_path.is_file() {
        return Err(CliErrors::GenericString(format!(
            "Path {:?} is not a file",
            in_path
        )));
    }
    Ok(())
}
