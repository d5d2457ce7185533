// Copyright 2021 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sequence operations: choice, shuffle and sampling without replacement.

use std::collections::HashSet;

use crate::{Error, Lfsr};

impl Lfsr {
    /// A reference to a uniformly chosen element of `seq`, or
    /// [`Error::EmptySequence`] if `seq` is empty.
    pub fn choice<'a, T>(&mut self, seq: &'a [T]) -> Result<&'a T, Error> {
        if seq.is_empty() {
            return Err(Error::EmptySequence);
        }
        let i = self.rand_index(seq.len() as i128) as usize;
        Ok(&seq[i])
    }

    /// Shuffle `x` in place into a uniformly random permutation.
    ///
    /// Fisher–Yates, walking `i` from the last index down to 1 and swapping
    /// with a uniform `j` in `[0, i]`.
    pub fn shuffle<T>(&mut self, x: &mut [T]) {
        for i in (1..x.len()).rev() {
            let j = self.randint(0, i as i64) as usize;
            x.swap(i, j);
        }
    }

    /// Sample `k` elements of `population` without replacement, in selection
    /// order.
    ///
    /// Every prefix of the result is itself a valid uniform sample of its
    /// length, so a raffle drawn with `k = 3` can split its result into a
    /// grand-prize winner and two runners-up. Element positions never
    /// repeat, even when element values do.
    ///
    /// Two strategies, chosen by a size heuristic: for small populations the
    /// pool is copied and selected slots are overwritten from the shrinking
    /// tail (O(n) space, no reselection); for large populations a set of
    /// chosen indices is kept and collisions are redrawn (O(k) expected
    /// work, no full copy).
    ///
    /// Returns [`Error::SampleSize`] if `k > population.len()`.
    pub fn sample<T: Clone>(&mut self, population: &[T], k: usize) -> Result<Vec<T>, Error> {
        let n = population.len();
        if k > n {
            return Err(Error::SampleSize);
        }
        let mut setsize = 21; // size of a small set minus size of an empty list
        if k > 5 {
            // table size for big sets: smallest power of 4 covering 3k
            let mut table = 4;
            while table < k.saturating_mul(3) {
                table *= 4;
            }
            setsize += table;
        }
        let mut result = Vec::with_capacity(k);
        if n <= setsize {
            trace!("sample: {} of {}, pool strategy", k, n);
            let mut pool = population.to_vec();
            for i in 0..k {
                // invariant: non-selected elements occupy pool[..n - i]
                let j = self.randint(0, (n - i - 1) as i64) as usize;
                result.push(pool[j].clone());
                pool.swap(j, n - i - 1);
            }
        } else {
            trace!("sample: {} of {}, rejection-set strategy", k, n);
            let mut selected = HashSet::with_capacity(k);
            for _ in 0..k {
                let mut j = self.randint(0, (n - 1) as i64) as usize;
                while !selected.insert(j) {
                    j = self.randint(0, (n - 1) as i64) as usize;
                }
                result.push(population[j].clone());
            }
        }
        Ok(result)
    }

    /// Like [`sample`](Self::sample), for populations that are not already
    /// indexable: the iterator is materialized into a buffer first.
    ///
    /// Useful for set-like containers, which have no defined order to begin
    /// with; the buffer's order is whatever the iterator yields.
    pub fn sample_from<I>(&mut self, population: I, k: usize) -> Result<Vec<I::Item>, Error>
    where
        I: IntoIterator,
        I::Item: Clone,
    {
        let buf: Vec<I::Item> = population.into_iter().collect();
        self.sample(&buf, k)
    }
}

/// Shuffle `x` in place using an external uniform-float source instead of a
/// generator.
///
/// `random` must return values in `[0, 1)`; each swap index is
/// `floor(random() * (i + 1))`, truncating toward zero like the rest of the
/// index derivation.
pub fn shuffle_with<T, F>(x: &mut [T], mut random: F)
where
    F: FnMut() -> f64,
{
    for i in (1..x.len()).rev() {
        let j = (random() * (i + 1) as f64) as usize;
        let j = j.min(i);
        x.swap(i, j);
    }
}
