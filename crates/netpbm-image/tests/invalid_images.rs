/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use netpbm_image::decoder::PnmDecoder;
use netpbm_image::{DecoderOptions, FormatErrors, MagicNumber, PixelKind, PnmErrors};

fn decode_err(data: &[u8]) -> FormatErrors {
    match PnmDecoder::new(data).decode() {
        Err(PnmErrors::Format(err)) => err,
        other => panic!("expected a format error, got {other:?}")
    }
}

#[test]
fn unknown_magic_number() {
    assert!(matches!(
        decode_err(b"P9\n2 2\n0 1\n1 0\n"),
        FormatErrors::UnknownMagicNumber(x) if x == "P9"
    ));
    assert!(matches!(
        decode_err(b"\x89PNG\r\n"),
        FormatErrors::UnknownMagicNumber(_)
    ));
    assert!(matches!(decode_err(b""), FormatErrors::UnknownMagicNumber(_)));
}

#[test]
fn truncated_ascii_raster() {
    assert!(matches!(
        decode_err(b"P1\n3 3\n0 1 0\n1 0"),
        FormatErrors::TruncatedData {
            expected: 9,
            found: 5
        }
    ));
    assert!(matches!(
        decode_err(b"P2\n2 2\n255\n1 2 3"),
        FormatErrors::TruncatedData {
            expected: 4,
            found: 3
        }
    ));
}

#[test]
fn truncated_raw_raster() {
    assert!(matches!(
        decode_err(b"P5\n4 4\n255\n\x01\x02"),
        FormatErrors::TruncatedData {
            expected: 16,
            found: 2
        }
    ));
    // header ends without the separating whitespace
    assert!(matches!(
        decode_err(b"P6\n1 1\n255"),
        FormatErrors::TruncatedData {
            expected: 3,
            found: 0
        }
    ));
}

#[test]
fn malformed_headers() {
    let cases: [&[u8]; 6] = [
        b"P2\n",
        b"P2 -1 4 255\n",
        b"P3 2 2\n",
        b"P5 2 2 256\n",
        b"P5 2 2 0\n",
        b"P4 2 2x"
    ];

    for data in cases {
        assert!(
            matches!(decode_err(data), FormatErrors::MalformedHeader(_)),
            "{:?}",
            String::from_utf8_lossy(data)
        );
    }
}

#[test]
fn invalid_tokens() {
    assert!(matches!(
        decode_err(b"P1\n2 1\n0 x\n"),
        FormatErrors::InvalidPixelToken(_)
    ));
    assert!(matches!(
        decode_err(b"P3\n1 1\n10\n1 2 11\n"),
        FormatErrors::InvalidPixelToken(_)
    ));
    assert!(matches!(
        decode_err(b"P2\n1 1\n255\n1.5\n"),
        FormatErrors::InvalidPixelToken(_)
    ));
}

#[test]
fn wrong_kind_for_typed_decode() {
    let result = PnmDecoder::new(b"P2\n1 1\n255\n0\n").decode_ppm();

    assert!(matches!(
        result,
        Err(PnmErrors::Format(FormatErrors::UnexpectedMagicNumber {
            expected: PixelKind::Color,
            found: MagicNumber::P2
        }))
    ));
}

#[test]
fn dimension_limits() {
    let options = DecoderOptions::default()
        .set_max_width(100)
        .set_max_height(100);

    let result = PnmDecoder::new_with_options(options, b"P5\n100 101\n255\n").decode();

    assert!(matches!(
        result,
        Err(PnmErrors::Format(FormatErrors::LargeDimensions {
            limit: 100,
            found: 101
        }))
    ));
}

#[test]
fn trailing_data_is_tolerated() {
    let image = PnmDecoder::new(b"P5\n1 1\n255\n\x07extra bytes")
        .decode_pgm()
        .unwrap();

    assert_eq!(image.pixels(), &[7]);
}
