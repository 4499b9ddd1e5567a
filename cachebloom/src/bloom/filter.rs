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

use std::fmt;

use super::params::MAX_NUM_BITS;
use super::params::suggest_num_bits;
use super::params::suggest_num_hashes;
use super::params::validate;
use crate::bitvec::BitVector;
use crate::bitvec::Fill;
use crate::error::Error;
use crate::hash::bit_position;

/// Answer to a membership query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    /// At least one of the item's bits is clear, so it was never added.
    DefinitelyAbsent,
    /// All of the item's bits are set: it was added, or this is a false positive.
    ProbablyPresent,
}

impl Membership {
    /// Returns `true` for [`Membership::ProbablyPresent`].
    pub fn is_probably_present(self) -> bool {
        self == Membership::ProbablyPresent
    }

    /// Returns `true` for [`Membership::DefinitelyAbsent`].
    pub fn is_definitely_absent(self) -> bool {
        self == Membership::DefinitelyAbsent
    }

    /// Convert this membership into static str.
    pub const fn into_static(self) -> &'static str {
        match self {
            Membership::DefinitelyAbsent => "DefinitelyAbsent",
            Membership::ProbablyPresent => "ProbablyPresent",
        }
    }
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.into_static())
    }
}

/// A Bloom filter for probabilistic set membership testing.
///
/// Provides fast membership queries with:
/// - No false negatives (added items always report [`Membership::ProbablyPresent`])
/// - A false positive rate of about `fpp` once `expected_items` distinct items are added
/// - Constant space usage, fixed at construction
///
/// Items are byte sequences; `&str` and `String` are hashed as their UTF-8 bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct BloomFilter {
    /// Expected number of distinct items (n)
    expected_items: u64,
    /// Target false positive probability (p)
    fpp: f64,
    /// Total number of bits in the filter (m)
    num_bits: u64,
    /// Number of hash functions to use (k)
    num_hashes: u16,
    /// Count of bits set to 1 (for statistics)
    num_bits_set: u64,
    /// Bit array of exactly `num_bits` bits
    bit_array: BitVector,
}

impl BloomFilter {
    /// Creates an empty filter sized for `expected_items` items at false positive
    /// probability `fpp`.
    ///
    /// The bit count and hash count are derived with [`suggest_num_bits`] and
    /// [`suggest_num_hashes`].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidConfiguration`](crate::error::ErrorKind::InvalidConfiguration)
    /// if `expected_items` is 0, if `fpp` is not strictly between 0 and 1, or if the derived
    /// bit count exceeds [`MAX_NUM_BITS`](super::MAX_NUM_BITS).
    ///
    /// # Examples
    ///
    /// ```
    /// # use cachebloom::bloom::BloomFilter;
    /// let filter = BloomFilter::new(1000, 1e-7).unwrap();
    /// assert_eq!(filter.num_bits(), 33_548);
    /// assert_eq!(filter.num_hashes(), 23);
    ///
    /// assert!(BloomFilter::new(0, 0.01).is_err());
    /// assert!(BloomFilter::new(1000, 1.0).is_err());
    /// ```
    pub fn new(expected_items: u64, fpp: f64) -> Result<Self, Error> {
        validate(expected_items, fpp)?;

        let num_bits = suggest_num_bits(expected_items, fpp);
        if num_bits > MAX_NUM_BITS {
            return Err(Error::invalid_configuration("filter would exceed maximum size")
                .with_context("num_bits", num_bits)
                .with_context("max_num_bits", MAX_NUM_BITS));
        }
        let len = usize::try_from(num_bits).map_err(|_| {
            Error::invalid_configuration("filter does not fit in addressable memory")
                .with_context("num_bits", num_bits)
        })?;
        let num_hashes = suggest_num_hashes(expected_items, num_bits);

        Ok(BloomFilter {
            expected_items,
            fpp,
            num_bits,
            num_hashes,
            num_bits_set: 0,
            bit_array: BitVector::new(len, Fill::Zero)?,
        })
    }

    /// Adds an item to the filter.
    ///
    /// After this, [`check()`](Self::check) reports the item as probably present forever.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cachebloom::bloom::{BloomFilter, Membership};
    /// let mut filter = BloomFilter::new(100, 0.01).unwrap();
    ///
    /// filter.add("apple");
    /// filter.add(String::from("banana"));
    /// filter.add([0xde_u8, 0xad, 0xbe, 0xef]);
    ///
    /// assert_eq!(filter.check("apple"), Membership::ProbablyPresent);
    /// ```
    pub fn add(&mut self, item: impl AsRef<[u8]>) {
        let item = item.as_ref();
        for seed in 0..u32::from(self.num_hashes) {
            let bit_index = self.compute_bit_index(item, seed);
            self.set_bit(bit_index);
        }
    }

    /// Tests whether an item is possibly in the set.
    ///
    /// Stops at the first clear bit, which proves the item was never added.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cachebloom::bloom::{BloomFilter, Membership};
    /// let mut filter = BloomFilter::new(1000, 1e-7).unwrap();
    /// filter.add("alice@example.com");
    ///
    /// assert_eq!(filter.check("alice@example.com"), Membership::ProbablyPresent);
    /// assert_eq!(filter.check("definitely-not-inserted-9f3a"), Membership::DefinitelyAbsent);
    /// ```
    pub fn check(&self, item: impl AsRef<[u8]>) -> Membership {
        let item = item.as_ref();
        for seed in 0..u32::from(self.num_hashes) {
            let bit_index = self.compute_bit_index(item, seed);
            if !self.bit_array.get_bit(bit_index) {
                return Membership::DefinitelyAbsent;
            }
        }
        Membership::ProbablyPresent
    }

    /// Tests and adds an item in a single pass over its bit positions.
    ///
    /// Returns the membership the item had before this call, which makes the filter usable
    /// as a "seen before?" guard.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cachebloom::bloom::{BloomFilter, Membership};
    /// let mut filter = BloomFilter::new(100, 0.01).unwrap();
    ///
    /// assert_eq!(filter.check_and_add("apple"), Membership::DefinitelyAbsent);
    /// assert_eq!(filter.check_and_add("apple"), Membership::ProbablyPresent);
    /// ```
    pub fn check_and_add(&mut self, item: impl AsRef<[u8]>) -> Membership {
        let item = item.as_ref();
        let mut membership = Membership::ProbablyPresent;
        for seed in 0..u32::from(self.num_hashes) {
            let bit_index = self.compute_bit_index(item, seed);
            if self.set_bit(bit_index) {
                membership = Membership::DefinitelyAbsent;
            }
        }
        membership
    }

    /// Returns whether the filter is empty (no items added).
    pub fn is_empty(&self) -> bool {
        self.num_bits_set == 0
    }

    /// Returns the expected number of distinct items the filter was sized for.
    pub fn expected_items(&self) -> u64 {
        self.expected_items
    }

    /// Returns the target false positive probability the filter was sized for.
    pub fn fpp(&self) -> f64 {
        self.fpp
    }

    /// Returns the total number of bits in the filter.
    pub fn num_bits(&self) -> u64 {
        self.num_bits
    }

    /// Returns the number of hash functions used.
    pub fn num_hashes(&self) -> u16 {
        self.num_hashes
    }

    /// Returns the number of bits set to 1.
    ///
    /// Useful for monitoring filter saturation.
    pub fn bits_used(&self) -> u64 {
        self.num_bits_set
    }

    /// Returns the current load factor (fraction of bits set).
    ///
    /// An optimally sized filter holding `expected_items` items sits near 0.5.
    pub fn load_factor(&self) -> f64 {
        self.num_bits_set as f64 / self.num_bits as f64
    }

    /// Estimates the current false positive probability.
    ///
    /// Uses the approximation `load_factor^k`, which assumes uniformly distributed bits.
    pub fn estimated_fpp(&self) -> f64 {
        self.load_factor().powi(i32::from(self.num_hashes))
    }

    /// Maps an item to its bit index for the hash function with the given seed.
    fn compute_bit_index(&self, item: &[u8], seed: u32) -> usize {
        // bit_position is < num_bits, which fits in usize by construction
        bit_position(item, seed, self.num_bits) as usize
    }

    /// Sets a single bit and updates the count if it wasn't already set.
    ///
    /// Returns whether the bit was previously clear.
    fn set_bit(&mut self, bit_index: usize) -> bool {
        let was_clear = self.bit_array.set_bit(bit_index);
        if was_clear {
            self.num_bits_set += 1;
        }
        was_clear
    }
}

#[cfg(test)]
mod tests {
    use super::BloomFilter;
    use super::Membership;
    use crate::error::ErrorKind;

    #[test]
    fn test_new_with_accuracy() {
        let filter = BloomFilter::new(1000, 0.01).unwrap();
        assert_eq!(filter.num_bits(), 9586);
        assert_eq!(filter.num_hashes(), 7);
        assert_eq!(filter.expected_items(), 1000);
        assert_eq!(filter.fpp(), 0.01);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_bit_vector_sized_exactly() {
        let filter = BloomFilter::new(1000, 1e-7).unwrap();
        assert_eq!(filter.bit_array.len() as u64, filter.num_bits());
        assert_eq!(filter.bit_array.count_ones(), 0);
    }

    #[test]
    fn test_add_and_check() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();

        assert_eq!(filter.check("apple"), Membership::DefinitelyAbsent);
        filter.add("apple");
        assert_eq!(filter.check("apple"), Membership::ProbablyPresent);
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_str_and_bytes_hash_alike() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        filter.add("apple");
        assert!(filter.check(b"apple").is_probably_present());
        assert!(filter.check(vec![b'a', b'p', b'p', b'l', b'e']).is_probably_present());
    }

    #[test]
    fn test_empty_item() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        filter.add("");
        assert!(filter.check("").is_probably_present());
    }

    #[test]
    fn test_add_sets_at_most_k_bits() {
        let mut filter = BloomFilter::new(1000, 1e-7).unwrap();
        filter.add("alice@example.com");
        assert!(filter.bits_used() >= 1);
        assert!(filter.bits_used() <= u64::from(filter.num_hashes()));
        assert_eq!(filter.bits_used(), filter.bit_array.count_ones());

        // adding again changes nothing
        let before = filter.clone();
        filter.add("alice@example.com");
        assert_eq!(filter, before);
    }

    #[test]
    fn test_positions_follow_mmh3_convention() {
        // mmh3.hash("alice@example.com", i) % 33548 for i in range(23)
        let expected: [usize; 23] = [
            11642, 4396, 2119, 23037, 7445, 21619, 2095, 29510, 28491, 31307, 27497, 13509, 13484,
            4870, 6314, 14006, 28811, 17449, 33032, 21423, 29214, 32271, 2579,
        ];

        let mut filter = BloomFilter::new(1000, 1e-7).unwrap();
        filter.add("alice@example.com");
        for (seed, position) in expected.iter().enumerate() {
            assert_eq!(
                filter.compute_bit_index(b"alice@example.com", seed as u32),
                *position
            );
            assert!(filter.bit_array.test(*position).unwrap());
        }
        assert_eq!(filter.bits_used(), 23);
    }

    #[test]
    fn test_check_and_add() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();

        assert_eq!(filter.check_and_add(42_u64.to_le_bytes()), Membership::DefinitelyAbsent);
        assert_eq!(filter.check_and_add(42_u64.to_le_bytes()), Membership::ProbablyPresent);
        assert!(filter.check(42_u64.to_le_bytes()).is_probably_present());
    }

    #[test]
    fn test_statistics() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        assert_eq!(filter.bits_used(), 0);
        assert_eq!(filter.load_factor(), 0.0);
        assert_eq!(filter.estimated_fpp(), 0.0);

        filter.add("test");
        assert!(filter.bits_used() > 0);
        assert!(filter.load_factor() > 0.0);
        assert!(filter.estimated_fpp() > 0.0);
    }

    #[test]
    fn test_single_hash_for_loose_fpp() {
        let mut filter = BloomFilter::new(1, 0.9).unwrap();
        assert_eq!(filter.num_hashes(), 1);
        filter.add("x");
        assert!(filter.check("x").is_probably_present());
    }

    #[test]
    fn test_invalid_expected_items() {
        let err = BloomFilter::new(0, 0.01).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn test_invalid_fpp() {
        for fpp in [0.0, 1.0, 1.5, -0.1, f64::NAN] {
            let err = BloomFilter::new(100, fpp).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
        }
    }

    #[test]
    fn test_too_large() {
        let err = BloomFilter::new(u64::MAX, 1e-7).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
        assert!(err.to_string().contains("num_bits"));
    }

    #[test]
    fn test_membership_display() {
        assert_eq!(Membership::DefinitelyAbsent.to_string(), "DefinitelyAbsent");
        assert_eq!(Membership::ProbablyPresent.to_string(), "ProbablyPresent");
        assert!(Membership::DefinitelyAbsent.is_definitely_absent());
        assert!(!Membership::ProbablyPresent.is_definitely_absent());
    }
}
