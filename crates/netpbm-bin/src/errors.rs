/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use netpbm_image::PnmErrors;

pub enum CliErrors {
    Image(PnmErrors),
    GenericString(String)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image(err) => write!(f, "{err:?}"),
            Self::GenericString(err) => write!(f, "{err}")
        }
    }
}

impl From<PnmErrors> for CliErrors {
    fn from(err: PnmErrors) -> Self {
        CliErrors::Image(err)
    }
}

impl From<String> for CliErrors {
    fn from(err: String) -> Self {
        CliErrors::GenericString(err)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(err: serde_json::Error) -> Self {
        CliErrors::GenericString(err.to_string())
    }
}
