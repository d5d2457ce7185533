// Copyright 2021 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Uniform integers over inclusive and stepped ranges.

use crate::{Error, Lfsr};

impl Lfsr {
    /// A uniform integer in the inclusive range `[a, b]`.
    ///
    /// Computed as `a + floor((b + 1 - a) * random())` and clamped to `b`,
    /// so floating rounding at the boundary can never push the result to
    /// `b + 1`.
    ///
    /// # Panics
    ///
    /// If `a > b`.
    pub fn randint(&mut self, a: i64, b: i64) -> i64 {
        assert!(a <= b, "randint: empty range [{}, {}]", a, b);
        let width = i128::from(b) - i128::from(a) + 1;
        (i128::from(a) + self.rand_index(width)) as i64
    }

    /// A uniform integer in `[0, n - 1]`, or [`Error::EmptyRange`] if
    /// `n <= 0`.
    ///
    /// This is the single-argument form of [`randrange`](Self::randrange).
    pub fn randbelow(&mut self, n: i64) -> Result<i64, Error> {
        self.randrange(0, n)
    }

    /// A uniform integer in the half-open range `[start, stop)`, or
    /// [`Error::EmptyRange`] if `stop <= start`.
    pub fn randrange(&mut self, start: i64, stop: i64) -> Result<i64, Error> {
        let width = i128::from(stop) - i128::from(start);
        if width <= 0 {
            return Err(Error::EmptyRange);
        }
        Ok((i128::from(start) + self.rand_index(width)) as i64)
    }

    /// A uniform element of the stepped range `start, start + step, ...`
    /// bounded (exclusively) by `stop`.
    ///
    /// Negative steps count downward, matching floor-division semantics for
    /// the candidate count. Returns [`Error::ZeroStep`] if `step == 0` and
    /// [`Error::EmptyRange`] if no candidate lies between `start` and `stop`
    /// in the direction of `step`.
    pub fn randrange_step(&mut self, start: i64, stop: i64, step: i64) -> Result<i64, Error> {
        if step == 0 {
            return Err(Error::ZeroStep);
        }
        let width = i128::from(stop) - i128::from(start);
        let step = i128::from(step);
        let n = if step > 0 {
            div_floor(width + step - 1, step)
        } else {
            div_floor(width + step + 1, step)
        };
        if n <= 0 {
            return Err(Error::EmptyRange);
        }
        Ok((i128::from(start) + step * self.rand_index(n)) as i64)
    }

    // A uniform index in `[0, width - 1]` for `width > 0`: truncate
    // `width * random()` and clamp the rounding edge case.
    pub(crate) fn rand_index(&mut self, width: i128) -> i128 {
        debug_assert!(width > 0);
        let offset = (width as f64 * self.random()) as i128;
        offset.min(width - 1)
    }
}

// Division rounding toward negative infinity, for either sign of divisor.
fn div_floor(a: i128, b: i128) -> i128 {
    let q = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn randint_reference() {
        let mut rng = Lfsr::default();
        let xs: Vec<i64> = (0..12).map(|_| rng.randint(0, 9)).collect();
        assert_eq!(xs, [5, 7, 8, 9, 4, 7, 8, 9, 4, 2, 6, 8]);

        let mut rng = Lfsr::default();
        let xs: Vec<i64> = (0..12).map(|_| rng.randint(-5, 5)).collect();
        assert_eq!(xs, [0, 3, 4, 5, 0, 3, 4, 5, 0, -3, 1, 3]);
    }

    #[test]
    fn randint_degenerate_range() {
        let mut rng = Lfsr::default();
        for _ in 0..50 {
            assert_eq!(rng.randint(5, 5), 5);
        }
    }

    #[test]
    fn randint_stays_inclusive() {
        let mut rng = Lfsr::new(0x9);
        // One full period exercises every register value, including the
        // largest float the 4 bit register can produce.
        for _ in 0..15 {
            let x = rng.randint(-2, 2);
            assert!((-2..=2).contains(&x));
        }
    }

    #[test]
    #[should_panic]
    fn randint_rejects_inverted_range() {
        Lfsr::default().randint(3, 2);
    }

    #[test]
    fn randbelow_bounds_and_errors() {
        let mut rng = Lfsr::default();
        for _ in 0..100 {
            let x = rng.randbelow(7).unwrap();
            assert!((0..7).contains(&x));
        }
        assert_eq!(rng.randbelow(0), Err(Error::EmptyRange));
        assert_eq!(rng.randbelow(-3), Err(Error::EmptyRange));
    }

    #[test]
    fn randrange_never_returns_stop() {
        let mut rng = Lfsr::default();
        for _ in 0..200 {
            let x = rng.randrange(-3, 4).unwrap();
            assert!((-3..4).contains(&x));
        }
        assert_eq!(rng.randrange(5, 5), Err(Error::EmptyRange));
        assert_eq!(rng.randrange(5, 4), Err(Error::EmptyRange));
    }

    #[test]
    fn randrange_step_reference() {
        let mut rng = Lfsr::default();
        let xs: Vec<i64> = (0..10)
            .map(|_| rng.randrange_step(0, 100, 10).unwrap())
            .collect();
        assert_eq!(xs, [50, 70, 80, 90, 40, 70, 80, 90, 40, 20]);

        let mut rng = Lfsr::default();
        let xs: Vec<i64> = (0..10)
            .map(|_| rng.randrange_step(10, -10, -3).unwrap())
            .collect();
        assert_eq!(xs, [1, -5, -8, -8, 1, -5, -8, -8, 1, 7]);
    }

    #[test]
    fn randrange_step_congruence() {
        let mut rng = Lfsr::default();
        for _ in 0..200 {
            let x = rng.randrange_step(7, 100, 9).unwrap();
            assert!(x >= 7 && x < 100);
            assert_eq!((x - 7) % 9, 0);
        }
        for _ in 0..200 {
            let x = rng.randrange_step(10, -10, -3).unwrap();
            assert!(x <= 10 && x > -10);
            assert_eq!((10 - x) % 3, 0);
        }
    }

    #[test]
    fn randrange_step_errors() {
        let mut rng = Lfsr::default();
        assert_eq!(rng.randrange_step(0, 10, 0), Err(Error::ZeroStep));
        assert_eq!(rng.randrange_step(0, 0, 1), Err(Error::EmptyRange));
        assert_eq!(rng.randrange_step(0, 10, -1), Err(Error::EmptyRange));
        assert_eq!(rng.randrange_step(10, 0, 3), Err(Error::EmptyRange));
    }

    #[test]
    fn div_floor_matches_floor_semantics() {
        assert_eq!(div_floor(7, 2), 3);
        assert_eq!(div_floor(-7, 2), -4);
        assert_eq!(div_floor(7, -2), -4);
        assert_eq!(div_floor(-7, -2), 3);
        assert_eq!(div_floor(-22, -3), 7);
        assert_eq!(div_floor(6, 3), 2);
    }
}
