/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

use crate::cmd_args::help_strings::{
    AFTER_HELP, COLOR_HELP, LINE_HELP, MAGIC_HELP, SIERPINSKI_HELP
};

pub mod arg_parsers;
pub mod help_strings;

/// Ids of arguments that modify the image, applied in command line order
pub static OPERATIONS: [&str; 9] = [
    "invert",
    "flip",
    "flop",
    "grayscale",
    "bitmap",
    "magic",
    "line",
    "sierpinski",
    "color"
];

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("netpbm")
        .after_help(AFTER_HELP)
        .version(env!("CARGO_PKG_VERSION"))
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .action(ArgAction::Append)
            .value_parser(value_parser!(OsString))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("out")
            .help("Output to write the data to")
            .action(ArgAction::Append)
            .value_parser(value_parser!(OsString))
            .required_unless_present("probe"))
        .arg(Arg::new("probe")
            .long("probe")
            .help("Print the headers of the input files as JSON and exit")
            .action(ArgAction::SetTrue)
            .conflicts_with_all(["out", "operations"]))
        .args(add_logging_options())
        .args(add_operations())
        .args(add_settings())
        .group(ArgGroup::new("operations")
            .args(OPERATIONS)
            .multiple(true))
}

fn add_logging_options() -> [Arg; 4] {
    [
        Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display debug information and higher"),
        Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display very verbose information"),
        Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display warnings and errors"),
        Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("Logging")
            .help("Display information about the decoding options")
    ]
}

fn add_settings() -> [Arg; 2] {
    [
        Arg::new("max-width")
            .long("max-width")
            .help_heading("Image Settings")
            .help("Maximum width of images allowed")
            .default_value("16384")
            .value_parser(value_parser!(usize)),
        Arg::new("max-height")
            .long("max-height")
            .help_heading("Image Settings")
            .help("Maximum height of images allowed")
            .default_value("16384")
            .value_parser(value_parser!(usize))
    ]
}

fn add_operations() -> Vec<Arg> {
    static HELP_HEADING: &str = "Image Operations";

    let mut args = [
        Arg::new("invert")
            .long("invert")
            .help_heading(HELP_HEADING)
            .action(ArgAction::SetTrue)
            .help("Invert image pixels"),
        Arg::new("flip")
            .long("flip")
            .help_heading(HELP_HEADING)
            .action(ArgAction::SetTrue)
            .help("Mirror the image horizontally"),
        Arg::new("flop")
            .long("flop")
            .help_heading(HELP_HEADING)
            .action(ArgAction::SetTrue)
            .help("Mirror the image vertically"),
        Arg::new("grayscale")
            .long("grayscale")
            .help_heading(HELP_HEADING)
            .action(ArgAction::SetTrue)
            .help("Convert a color image to grayscale"),
        Arg::new("bitmap")
            .long("bitmap")
            .help_heading(HELP_HEADING)
            .action(ArgAction::SetTrue)
            .help("Threshold a color or grayscale image into a bitmap"),
        Arg::new("magic")
            .long("magic")
            .help_heading(HELP_HEADING)
            .help("Change the encoding of the output image")
            .long_help(MAGIC_HELP)
            .value_parser(["P1", "P2", "P3", "P4", "P5", "P6"]),
        Arg::new("line")
            .long("line")
            .help_heading(HELP_HEADING)
            .value_name("x1,y1,x2,y2")
            .action(ArgAction::Append)
            .allow_hyphen_values(true)
            .help("Draw a line")
            .long_help(LINE_HELP),
        Arg::new("sierpinski")
            .long("sierpinski")
            .help_heading(HELP_HEADING)
            .value_name("depth")
            .action(ArgAction::Append)
            .help("Draw a Sierpinski triangle")
            .long_help(SIERPINSKI_HELP)
            .value_parser(value_parser!(i32)),
        Arg::new("color")
            .long("color")
            .help_heading(HELP_HEADING)
            .value_name("r,g,b")
            .action(ArgAction::Append)
            .help("Color for the drawing operations that follow")
            .long_help(COLOR_HELP)
    ];
    // list them in order
    args.sort_unstable_by(|x, y| x.get_id().cmp(y.get_id()));
    args.to_vec()
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn command_is_consistent() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn probe_needs_no_output() {
        let matches = create_cmd_args()
            .try_get_matches_from(["netpbm", "-i", "a.ppm", "--probe"])
            .unwrap();

        assert!(matches.get_flag("probe"));
        assert!(create_cmd_args()
            .try_get_matches_from(["netpbm", "-i", "a.ppm"])
            .is_err());
    }
}
