// Copyright 2021 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Galois LFSR generator core.

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand_core::impls::fill_bytes_via_next;
use rand_core::le::read_u64_into;
use rand_core::{RngCore, SeedableRng};

use crate::Error;

/// The default feedback polynomial, giving a 30 bit register.
///
/// Primitive, so the generator cycles through all `2^30 - 1` nonzero
/// register values before repeating.
pub const DEFAULT_POLYNOMIAL: u64 = 0x2000_0029;

/// A Galois linear-feedback shift register random number generator.
///
/// The register holds a strictly positive value below `2^width`, where
/// `width` is the bit length of the feedback polynomial. Each step shifts
/// the register right by one bit and, when the ejected bit was set, XORs in
/// the polynomial. Zero is an absorbing state and must never be stored.
///
/// The generator is deterministic: a fixed polynomial and seed produce the
/// same output sequence on every platform. It is not cryptographically
/// secure. It is also a plain value with no internal synchronization; to use
/// randomness from several threads, give each thread its own instance.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Lfsr {
    state: u64,
    poly: u64,
    width: u32,
    lsb: f64,
    pub(crate) gauss_next: Option<f64>,
}

impl Lfsr {
    /// Create a generator with the given feedback polynomial, seeded with
    /// register value 1.
    ///
    /// The register width is the bit length of `polynomial`; the constant
    /// term (bit 0) should be set for the feedback to be invertible. The
    /// polynomial is not checked for primitivity: a non-primitive choice
    /// yields a shorter cycle, not an error.
    ///
    /// # Panics
    ///
    /// If `polynomial < 2` or its bit length exceeds 63.
    pub fn new(polynomial: u64) -> Lfsr {
        assert!(polynomial >= 2, "feedback polynomial must have degree >= 1");
        assert!(
            polynomial.leading_zeros() >= 1,
            "feedback polynomial wider than 63 bits"
        );
        let width = 64 - polynomial.leading_zeros();
        debug!("Lfsr: polynomial {:#x}, register width {} bits", polynomial, width);
        Lfsr {
            state: 1,
            poly: polynomial,
            width,
            lsb: 1.0 / (1u64 << width) as f64,
            gauss_next: None,
        }
    }

    /// Advance the register by one Galois step.
    ///
    /// Exposed so that period measurement and benchmarking can drive the raw
    /// register; ordinary use goes through the sampling methods.
    #[inline]
    pub fn shift(&mut self) {
        if self.state & 1 != 0 {
            self.state = (self.state >> 1) ^ self.poly;
        } else {
            self.state >>= 1;
        }
    }

    /// The current register value.
    ///
    /// Together with the construction polynomial this is the generator's
    /// entire persistent state (the Gaussian spare cache aside):
    /// `set_state(state())` is a no-op.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Overwrite the register value.
    ///
    /// The value is not validated. Anything outside `1..2^width` risks the
    /// absorbing zero state; callers must supply a value previously obtained
    /// from [`state`](Self::state) or otherwise known to be in range.
    #[inline]
    pub fn set_state(&mut self, state: u64) {
        self.state = state;
    }

    /// The feedback polynomial this generator was constructed with.
    #[inline]
    pub fn polynomial(&self) -> u64 {
        self.poly
    }

    /// The register width in bits.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The next uniform float in `[0, 1)`.
    ///
    /// Advances the register once and scales it: the result is
    /// `(state - 1) / 2^width`, so 1.0 is never returned.
    #[inline]
    pub fn random(&mut self) -> f64 {
        self.shift();
        (self.state - 1) as f64 * self.lsb
    }

    /// `k` random bits as the low bits of a `u64`.
    ///
    /// Draws `ceil(k / width)` register words, concatenates them most
    /// significant first, and discards excess low-order bits.
    ///
    /// Returns [`Error::BitCount`] unless `1 <= k <= 64`. For wider output,
    /// use [`RngCore::fill_bytes`].
    pub fn getrandbits(&mut self, k: u32) -> Result<u64, Error> {
        if k == 0 || k > 64 {
            return Err(Error::BitCount);
        }
        Ok(self.gen_bits(k))
    }

    // Unchecked bit extraction; `k` must be in 1..=64.
    pub(crate) fn gen_bits(&mut self, k: u32) -> u64 {
        let passes = (k + self.width - 1) / self.width;
        let mut x: u128 = 0;
        for _ in 0..passes {
            self.shift();
            x = (x << self.width) | u128::from(self.state);
        }
        (x >> (passes * self.width - k)) as u64
    }
}

/// A generator with the [default polynomial](DEFAULT_POLYNOMIAL) and
/// register value 1.
impl Default for Lfsr {
    fn default() -> Lfsr {
        Lfsr::new(DEFAULT_POLYNOMIAL)
    }
}

impl RngCore for Lfsr {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.gen_bits(32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.gen_bits(64)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lfsr {
    type Seed = [u8; 8];

    /// Create a generator with the default polynomial, seeding the register
    /// from `seed` (little endian). The seed is masked to the register width;
    /// an all-zero seed maps to register value 1.
    fn from_seed(seed: [u8; 8]) -> Lfsr {
        let mut s = [0u64; 1];
        read_u64_into(&seed, &mut s);
        let mut rng = Lfsr::new(DEFAULT_POLYNOMIAL);
        let state = s[0] & ((1u64 << rng.width) - 1);
        rng.state = if state == 0 { 1 } else { state };
        rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_shift_sequence() {
        // Hand-computed Galois steps for the 4 bit polynomial 0x9.
        let mut rng = Lfsr::new(0x9);
        assert_eq!(rng.width(), 4);
        assert_eq!(rng.polynomial(), 0x9);
        let expected = [9, 13, 15, 14, 7, 10, 5, 11, 12, 6, 3, 8, 4, 2, 1, 9];
        for &e in &expected {
            rng.shift();
            assert_eq!(rng.state(), e);
        }
    }

    #[test]
    fn random_covers_half_open_unit_interval() {
        // Over one full period of the 4 bit register, random() emits every
        // multiple of 1/16 in [0, 15/16] exactly once.
        let mut rng = Lfsr::new(0x9);
        let expected = [
            0.5, 0.75, 0.875, 0.8125, 0.375, 0.5625, 0.25, 0.625, 0.6875, 0.3125, 0.125,
            0.4375, 0.1875, 0.0625, 0.0,
        ];
        for &e in &expected {
            assert_eq!(rng.random(), e);
        }
    }

    #[test]
    fn random_default_polynomial() {
        let mut rng = Lfsr::default();
        let expected = [
            0.500000037252903,
            0.7500000558793545,
            0.875000050291419,
            0.9375000456348062,
            0.4687500223517418,
        ];
        for &e in &expected {
            assert_eq!(rng.random(), e);
        }
    }

    #[test]
    fn getrandbits_word_concatenation() {
        // poly 0x9: first two register words are 9 and 13, so eight bits
        // are 0b1001_1101 and six bits drop the two lowest.
        let mut rng = Lfsr::new(0x9);
        assert_eq!(rng.getrandbits(8), Ok(157));
        let mut rng = Lfsr::new(0x9);
        assert_eq!(rng.getrandbits(6), Ok(39));
        let mut rng = Lfsr::new(0x9);
        assert_eq!(rng.getrandbits(4), Ok(9));
        assert_eq!(rng.getrandbits(4), Ok(13));
    }

    #[test]
    fn getrandbits_rejects_bad_widths() {
        let mut rng = Lfsr::default();
        assert_eq!(rng.getrandbits(0), Err(Error::BitCount));
        assert_eq!(rng.getrandbits(65), Err(Error::BitCount));
        assert!(rng.getrandbits(64).is_ok());
        assert!(rng.getrandbits(1).is_ok());
    }

    #[test]
    fn getrandbits_single_bits() {
        let mut rng = Lfsr::default();
        let bits: Vec<u64> = (0..10).map(|_| rng.getrandbits(1).unwrap()).collect();
        assert_eq!(bits, [1, 1, 1, 1, 0, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn rng_core_reference() {
        let mut rng = Lfsr::default();
        let expected32: [u32; 6] = [
            2147483815, 3758096607, 2013266022, 3724542191, 2004877416, 2648703167,
        ];
        for &e in &expected32 {
            assert_eq!(rng.next_u32(), e);
        }
        let mut rng = Lfsr::default();
        let expected64: [u64; 4] = [
            9223372754114315230,
            17293823436149227931,
            15996786906071302983,
            4305441477699306236,
        ];
        for &e in &expected64 {
            assert_eq!(rng.next_u64(), e);
        }
    }

    #[test]
    fn state_round_trip() {
        let mut rng = Lfsr::default();
        for _ in 0..7 {
            rng.shift();
        }
        let saved = rng.state();
        let mut replay = Lfsr::default();
        replay.set_state(saved);
        assert_eq!(replay.state(), saved);
        for _ in 0..100 {
            assert_eq!(rng.random(), replay.random());
        }
    }

    #[test]
    fn from_seed_masks_and_avoids_zero() {
        let rng = Lfsr::from_seed([0; 8]);
        assert_eq!(rng.state(), 1);
        // Bits above the register width are discarded.
        let rng = Lfsr::from_seed(0xffff_ffff_ffff_ffffu64.to_le_bytes());
        assert_eq!(rng.state(), (1u64 << 30) - 1);
        let rng = Lfsr::from_seed(12345u64.to_le_bytes());
        assert_eq!(rng.state(), 12345);
    }

    #[test]
    fn instances_are_independent() {
        let mut a = Lfsr::default();
        let mut b = Lfsr::default();
        let _ = a.random();
        let _ = a.random();
        // b has not moved.
        assert_eq!(b.state(), 1);
        let _ = b.random();
        assert_eq!(b.state(), DEFAULT_POLYNOMIAL);
    }

    #[test]
    #[should_panic]
    fn polynomial_too_wide() {
        Lfsr::new(1u64 << 63);
    }
}
