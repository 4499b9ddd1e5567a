// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::f64::consts::LN_2;

use crate::error::Error;

/// Smallest bit count a filter can have.
pub const MIN_NUM_BITS: u64 = 1;
/// Largest bit count a filter can have: a 32-bit hash cannot address more positions.
pub const MAX_NUM_BITS: u64 = 1 << 32;
/// Smallest number of hash functions a filter uses.
pub const MIN_NUM_HASHES: u16 = 1;

/// Checks that `max_items` and `fpp` describe a buildable filter.
pub(super) fn validate(max_items: u64, fpp: f64) -> Result<(), Error> {
    if max_items == 0 {
        return Err(Error::invalid_configuration(
            "expected items must be greater than 0",
        ));
    }
    // written so NaN fails too
    if !(fpp > 0.0 && fpp < 1.0) {
        return Err(
            Error::invalid_configuration("fpp must be strictly between 0.0 and 1.0")
                .with_context("fpp", fpp),
        );
    }
    Ok(())
}

/// Suggests the optimal number of bits given max items and target FPP.
///
/// Formula: `m = ceil(-n * ln(p) / (ln(2)^2))`
/// where n = max_items, p = fpp
///
/// The result is not clamped; inputs are expected to have passed the same checks as
/// [`BloomFilter::new`](super::BloomFilter::new).
///
/// # Examples
///
/// ```
/// # use cachebloom::bloom::suggest_num_bits;
/// assert_eq!(suggest_num_bits(1000, 1e-7), 33_548);
/// assert_eq!(suggest_num_bits(1000, 0.01), 9_586);
/// ```
pub fn suggest_num_bits(max_items: u64, fpp: f64) -> u64 {
    let n = max_items as f64;
    let ln2_squared = LN_2 * LN_2;

    (-n * fpp.ln() / ln2_squared).ceil() as u64
}

/// Suggests the optimal number of hash functions given max items and bit count.
///
/// Formula: `k = round((m / n) * ln(2))`, rounding ties to even, and never less than 1.
///
/// # Examples
///
/// ```
/// # use cachebloom::bloom::suggest_num_hashes;
/// assert_eq!(suggest_num_hashes(1000, 33_548), 23);
/// assert_eq!(suggest_num_hashes(1000, 9_586), 7);
/// // tiny filters still hash at least once
/// assert_eq!(suggest_num_hashes(1000, 1), 1);
/// ```
pub fn suggest_num_hashes(max_items: u64, num_bits: u64) -> u16 {
    let m = num_bits as f64;
    let n = max_items as f64;

    let k = (m / n * LN_2).round_ties_even();
    k.clamp(f64::from(MIN_NUM_HASHES), f64::from(u16::MAX)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_validate() {
        assert!(validate(1, 0.5).is_ok());
        assert!(validate(1000, 1e-7).is_ok());

        for (n, p) in [
            (0, 0.01),
            (100, 0.0),
            (100, 1.0),
            (100, -0.5),
            (100, 1.5),
            (100, f64::NAN),
            (100, f64::INFINITY),
        ] {
            let err = validate(n, p).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidConfiguration, "n={n}, p={p}");
        }
    }

    #[test]
    fn test_suggest_num_bits_never_zero() {
        // -ln(p) is positive for any p in (0, 1), so at least one bit is required.
        assert_eq!(suggest_num_bits(1, 0.999_999), MIN_NUM_BITS);
    }

    #[test]
    fn test_suggest_num_hashes_tracks_fpp() {
        // k depends on p alone once m is optimal: k ~= -log2(p)
        for (p, expected) in [(0.5, 1), (0.1, 3), (0.01, 7), (0.001, 10), (1e-7, 23)] {
            let m = suggest_num_bits(10_000, p);
            assert_eq!(suggest_num_hashes(10_000, m), expected, "p={p}");
        }
    }
}
