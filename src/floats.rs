// Copyright 2021 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Continuous real-valued distributions.
//!
//! Each method consumes uniform variates from the generator and is otherwise
//! a pure function of its parameters. The rejection-based samplers (normal,
//! von Mises, gamma) loop until their acceptance test passes; termination is
//! probabilistic with O(1) expected iterations, not bounded by a hard cap.

use std::f64::consts::{E, PI};

use crate::{Error, Lfsr};

const TWO_PI: f64 = 2.0 * PI;

impl Lfsr {
    /// A uniform float in `[a, b)` (or `[a, b]` at the mercy of rounding
    /// when `b - a` is large).
    #[inline]
    pub fn uniform(&mut self, a: f64, b: f64) -> f64 {
        a + (b - a) * self.random()
    }

    /// A triangular variate on `[low, high]` with the given mode.
    ///
    /// `mode` defaults to the midpoint, giving a symmetric distribution.
    /// A degenerate `high == low` returns `low` (one variate is still
    /// consumed, keeping the stream position independent of the data).
    pub fn triangular(&mut self, low: f64, high: f64, mode: Option<f64>) -> f64 {
        let u = self.random();
        let c = match mode {
            None => 0.5,
            Some(m) => {
                if high == low {
                    return low;
                }
                (m - low) / (high - low)
            }
        };
        let (mut u, mut c, mut low, mut high) = (u, c, low, high);
        if u > c {
            u = 1.0 - u;
            c = 1.0 - c;
            std::mem::swap(&mut low, &mut high);
        }
        low + (high - low) * (u * c).sqrt()
    }

    /// A normal variate with mean `mu` and standard deviation `sigma`,
    /// via Kinderman–Monahan ratio-of-uniforms rejection.
    ///
    /// Consumes about 1.37 uniform pairs per variate on average; the loop
    /// has no hard iteration bound.
    pub fn normalvariate(&mut self, mu: f64, sigma: f64) -> f64 {
        let nv_magicconst = 4.0 * (-0.5f64).exp() / 2.0f64.sqrt();
        loop {
            let u1 = self.random();
            let u2 = 1.0 - self.random();
            let z = nv_magicconst * (u1 - 0.5) / u2;
            if z * z / 4.0 <= -u2.ln() {
                return mu + z * sigma;
            }
        }
    }

    /// A normal variate via the polar (Box–Muller) method, which produces
    /// values in pairs: the spare is cached and consumed by the next call.
    ///
    /// The cache survives intervening calls to other methods; only the next
    /// `gauss` call consumes it. `Clone`ing a generator clones a pending
    /// spare with it.
    ///
    /// Consecutive register words of a narrow LFSR are correlated, which
    /// compresses the tails of the pair-based polar method: with the 30 bit
    /// default polynomial the empirical standard deviation at `sigma = 1`
    /// is about 0.945. Use [`normalvariate`](Self::normalvariate) where tail
    /// accuracy matters more than speed.
    pub fn gauss(&mut self, mu: f64, sigma: f64) -> f64 {
        if let Some(g) = self.gauss_next.take() {
            return mu + g * sigma;
        }
        loop {
            let u1 = 2.0 * self.random() - 1.0;
            let u2 = 2.0 * self.random() - 1.0;
            let s = u1 * u1 + u2 * u2;
            if s >= 1.0 || s == 0.0 {
                continue;
            }
            let f = (-2.0 * s.ln() / s).sqrt();
            self.gauss_next = Some(u1 * f);
            return mu + u2 * f * sigma;
        }
    }

    /// A log-normal variate: `exp(N)` where `N` is normal with mean `mu`
    /// and standard deviation `sigma`.
    #[inline]
    pub fn lognormvariate(&mut self, mu: f64, sigma: f64) -> f64 {
        self.normalvariate(mu, sigma).exp()
    }

    /// An exponential variate with rate `lambd` (mean `1 / lambd`).
    ///
    /// Returns [`Error::LambdaZero`] if `lambd == 0`. A negative rate is
    /// permitted and mirrors the distribution below zero. `random()` never
    /// returns 1.0, so the logarithm's argument is never zero.
    pub fn expovariate(&mut self, lambd: f64) -> Result<f64, Error> {
        if lambd == 0.0 {
            return Err(Error::LambdaZero);
        }
        Ok(-(1.0 - self.random()).ln() / lambd)
    }

    /// A von Mises variate: an angle in `[0, 2*pi)` centred on `mu` with
    /// concentration `kappa`.
    ///
    /// `kappa <= 1e-6` degenerates to the uniform angle `2*pi*random()`;
    /// otherwise the Best–Fisher (1979) wrapped-Cauchy rejection algorithm
    /// is used.
    pub fn vonmisesvariate(&mut self, mu: f64, kappa: f64) -> f64 {
        if kappa <= 1e-6 {
            return TWO_PI * self.random();
        }

        let a = 1.0 + (1.0 + 4.0 * kappa * kappa).sqrt();
        let b = (a - (2.0 * a).sqrt()) / (2.0 * kappa);
        let r = (1.0 + b * b) / (2.0 * b);

        let f = loop {
            let u1 = self.random();
            let z = (PI * u1).cos();
            let f = (1.0 + r * z) / (r + z);
            let c = kappa * (r - f);
            let u2 = self.random();
            if u2 < c * (2.0 - c) || u2 <= c * (1.0 - c).exp() {
                break f;
            }
        };

        let u3 = self.random();
        if u3 > 0.5 {
            (mu + f.acos()).rem_euclid(TWO_PI)
        } else {
            (mu - f.acos()).rem_euclid(TWO_PI)
        }
    }

    /// A gamma variate with shape `alpha` and scale `beta` (mean
    /// `alpha * beta`).
    ///
    /// Three branches on the shape: Cheng's log-logistic rejection for
    /// `alpha > 1`, a plain exponential for `alpha == 1`, and the
    /// Ahrens–Dieter ALGORITHM GS rejection for `alpha < 1`.
    ///
    /// Returns [`Error::ShapeTooSmall`] / [`Error::ScaleTooSmall`] unless
    /// both parameters are positive and finite; NaN and infinity are
    /// rejected up front so the rejection loops cannot spin on them.
    pub fn gammavariate(&mut self, alpha: f64, beta: f64) -> Result<f64, Error> {
        if !(alpha > 0.0) || alpha.is_infinite() {
            return Err(Error::ShapeTooSmall);
        }
        if !(beta > 0.0) || beta.is_infinite() {
            return Err(Error::ScaleTooSmall);
        }

        if alpha > 1.0 {
            // Cheng (1977): rejection from a log-logistic envelope.
            let log4 = 4.0f64.ln();
            let sg_magicconst = 1.0 + 4.5f64.ln();
            let ainv = (2.0 * alpha - 1.0).sqrt();
            let bbb = alpha - log4;
            let ccc = alpha + ainv;
            loop {
                let u1 = self.random();
                if !(1e-7 < u1 && u1 < 0.999_999_9) {
                    continue;
                }
                let u2 = 1.0 - self.random();
                let v = (u1 / (1.0 - u1)).ln() / ainv;
                let x = alpha * v.exp();
                let z = u1 * u1 * u2;
                let r = bbb + ccc * v - x;
                if r + sg_magicconst - 4.5 * z >= 0.0 || r >= z.ln() {
                    return Ok(x * beta);
                }
            }
        } else if alpha == 1.0 {
            Ok(-(1.0 - self.random()).ln() * beta)
        } else {
            // Ahrens–Dieter ALGORITHM GS for 0 < alpha < 1.
            loop {
                let u = self.random();
                let b = (E + alpha) / E;
                let p = b * u;
                let x = if p <= 1.0 {
                    p.powf(1.0 / alpha)
                } else {
                    -((b - p) / alpha).ln()
                };
                let u1 = self.random();
                if p > 1.0 {
                    if u1 <= x.powf(alpha - 1.0) {
                        return Ok(x * beta);
                    }
                } else if u1 <= (-x).exp() {
                    return Ok(x * beta);
                }
            }
        }
    }

    /// A beta variate on `[0, 1]` with shape parameters `alpha` and `beta`,
    /// as the ratio `y / (y + z)` of two gamma variates.
    ///
    /// When the first gamma draw is exactly zero the result is zero and the
    /// second gamma is neither drawn nor validated. Parameter errors are
    /// those of [`gammavariate`](Self::gammavariate).
    pub fn betavariate(&mut self, alpha: f64, beta: f64) -> Result<f64, Error> {
        let y = self.gammavariate(alpha, 1.0)?;
        if y == 0.0 {
            return Ok(0.0);
        }
        let z = self.gammavariate(beta, 1.0)?;
        Ok(y / (y + z))
    }

    /// A Pareto variate with shape `alpha`; results are always `>= 1`.
    ///
    /// Returns [`Error::ShapeTooSmall`] unless `alpha` is positive and
    /// finite.
    pub fn paretovariate(&mut self, alpha: f64) -> Result<f64, Error> {
        if !(alpha > 0.0) || alpha.is_infinite() {
            return Err(Error::ShapeTooSmall);
        }
        let u = 1.0 - self.random();
        Ok(u.powf(-1.0 / alpha))
    }

    /// A Weibull variate with scale `alpha` and shape `beta`.
    ///
    /// Returns [`Error::ScaleTooSmall`] / [`Error::ShapeTooSmall`] unless
    /// both parameters are positive and finite.
    pub fn weibullvariate(&mut self, alpha: f64, beta: f64) -> Result<f64, Error> {
        if !(alpha > 0.0) || alpha.is_infinite() {
            return Err(Error::ScaleTooSmall);
        }
        if !(beta > 0.0) || beta.is_infinite() {
            return Err(Error::ShapeTooSmall);
        }
        let u = 1.0 - self.random();
        Ok(alpha * (-u.ln()).powf(1.0 / beta))
    }
}
