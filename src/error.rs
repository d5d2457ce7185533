// Copyright 2021 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types for sampling operations.

use std::{error, fmt};

/// Error type returned from fallible sampling operations.
///
/// All variants are detected synchronously at the violated precondition and
/// surfaced immediately; nothing is retried or silently corrected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `getrandbits` requires `1 <= k <= 64`.
    BitCount,
    /// `randrange_step` given a step of zero.
    ZeroStep,
    /// A range or stepped range contains no candidate values.
    EmptyRange,
    /// `choice` invoked on an empty sequence.
    EmptySequence,
    /// `sample` size is larger than the population.
    SampleSize,
    /// `expovariate` requires a nonzero rate `lambd`.
    LambdaZero,
    /// Shape parameter is not positive and finite.
    ShapeTooSmall,
    /// Scale parameter is not positive and finite.
    ScaleTooSmall,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::BitCount => "number of bits must be in 1..=64 for getrandbits",
            Error::ZeroStep => "zero step for randrange",
            Error::EmptyRange => "empty range for randrange",
            Error::EmptySequence => "cannot choose from an empty sequence",
            Error::SampleSize => "sample larger than population",
            Error::LambdaZero => "lambd is zero in exponential distribution",
            Error::ShapeTooSmall => "shape parameter is not positive and finite",
            Error::ScaleTooSmall => "scale parameter is not positive and finite",
        })
    }
}

impl error::Error for Error {}
