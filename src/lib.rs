// Copyright 2021 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A Galois linear-feedback shift register (LFSR) random number generator,
//! together with the classic sampling toolkit layered on top of it:
//!
//! - uniform floats in `[0, 1)` and arbitrary-width bit extraction;
//! - uniform integers over inclusive and stepped ranges
//!   ([`Lfsr::randint`], [`Lfsr::randrange`], [`Lfsr::randrange_step`]);
//! - sequence operations: [`Lfsr::choice`], [`Lfsr::shuffle`] and
//!   sampling without replacement ([`Lfsr::sample`]);
//! - continuous distributions: uniform, triangular, normal, log-normal,
//!   exponential, von Mises, gamma, beta, Pareto and Weibull variates.
//!
//! The register advances one Galois step per word: shift right, and XOR
//! with the feedback polynomial when the ejected bit was set. With a
//! primitive polynomial of width `n` the register cycles through all
//! `2^n - 1` nonzero values before repeating. The default polynomial is
//! 30 bits wide, chosen to keep shifting cheap; any polynomial up to 63
//! bits may be supplied instead.
//!
//! [`Lfsr`] implements [`rand_core::RngCore`] and [`rand_core::SeedableRng`],
//! so it can be plugged in wherever a `rand` generator is expected. Like the
//! other small generators in this family it is **not** cryptographically
//! secure, and its state can be trivially recovered from its output.
//!
//! A generator is a value, not a process-wide singleton: construct one and
//! pass it where randomness is needed. For a throwaway generator seeded from
//! the operating system, use `SeedableRng::from_entropy`.
//!
//! # Example
//!
//! ```
//! use rand_lfsr::Lfsr;
//!
//! let mut rng = Lfsr::default();
//! let x = rng.random();
//! assert!((0.0..1.0).contains(&x));
//!
//! let roll = rng.randint(1, 6);
//! assert!((1..=6).contains(&roll));
//!
//! let mut deck: Vec<u8> = (0..52).collect();
//! rng.shuffle(&mut deck);
//! ```
//!
//! # Crate features
//!
//! - `serde1`: serialization of the generator state with serde.
//! - `log`: trace-level diagnostics for sampling-strategy selection.

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico",
    html_root_url = "https://rust-random.github.io/rand/"
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![allow(clippy::excessive_precision, clippy::float_cmp, clippy::unreadable_literal)]

#[macro_use]
mod log_macros;

mod error;
mod floats;
mod integers;
mod lfsr;
mod sequences;

pub use rand_core;

pub use crate::error::Error;
pub use crate::lfsr::{Lfsr, DEFAULT_POLYNOMIAL};
pub use crate::sequences::shuffle_with;
