/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static AFTER_HELP: &str = "Operations are carried out in the order they appear on the command line.

Examples:
    netpbm -i in.ppm -o out.pgm --grayscale
    netpbm -i in.ppm -o out.ppm --flip --invert
    netpbm -i in.ppm --probe";

pub static LINE_HELP: &str = "Draw a line between two points

Takes the form x1,y1,x2,y2. Both points are included in the line,
parts of it lying outside the image are skipped.
Only color images can be drawn on";

pub static SIERPINSKI_HELP: &str = "Draw a Sierpinski triangle of the given depth

The triangle's base spans the bottom row of the image and its
apex lies above the middle. A depth of zero draws nothing.
Only color images can be drawn on";

pub static COLOR_HELP: &str = "Color used by drawing operations

Takes the form r,g,b. Defaults to white, i.e the image's max value
in every channel";

pub static MAGIC_HELP: &str = "Change the magic number used when writing the image

Only magic numbers of the image's kind can be used, this switches
between the ASCII (P1, P2, P3) and raw (P4, P5, P6) encodings.
Use --grayscale or --bitmap to change kinds";
