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

use crate::error::Error;

const WORD_BITS: usize = 32;

/// Initial value for every bit of a new [`BitVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// All bits cleared.
    Zero,
    /// All bits set.
    One,
}

impl Fill {
    fn word(self) -> u32 {
        match self {
            Fill::Zero => 0,
            Fill::One => u32::MAX,
        }
    }
}

/// A fixed-length array of bits packed into `u32` words.
///
/// Padding bits in the last word, beyond [`len()`](Self::len), are always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVector {
    words: Box<[u32]>,
    len: usize,
}

impl BitVector {
    /// Creates a bit vector of `bit_size` bits, each initialised to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidSize`](crate::error::ErrorKind::InvalidSize) if `bit_size`
    /// is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cachebloom::bitvec::{BitVector, Fill};
    /// let bits = BitVector::new(33, Fill::One).unwrap();
    /// assert_eq!(bits.num_words(), 2);
    /// assert_eq!(bits.count_ones(), 33);
    /// ```
    pub fn new(bit_size: usize, fill: Fill) -> Result<Self, Error> {
        if bit_size == 0 {
            return Err(Error::invalid_size("bit vector must hold at least one bit")
                .with_context("bit_size", bit_size));
        }

        let num_words = bit_size.div_ceil(WORD_BITS);
        let mut bits = BitVector {
            words: vec![fill.word(); num_words].into_boxed_slice(),
            len: bit_size,
        };
        bits.mask_padding();
        Ok(bits)
    }

    /// Returns the number of addressable bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a bit vector holds at least one bit.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of `u32` storage words.
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Returns the number of bits set to 1.
    pub fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| u64::from(w.count_ones())).sum()
    }

    /// Returns whether the bit at `index` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange) if
    /// `index >= len()`.
    pub fn test(&self, index: usize) -> Result<bool, Error> {
        self.check_index(index)?;
        Ok(self.get_bit(index))
    }

    /// Sets the bit at `index` to 1. Setting an already set bit is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange) if
    /// `index >= len()`.
    pub fn set(&mut self, index: usize) -> Result<(), Error> {
        self.check_index(index)?;
        self.set_bit(index);
        Ok(())
    }

    /// Sets the bit at `index` to 0. Clearing an already clear bit is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange) if
    /// `index >= len()`.
    pub fn clear(&mut self, index: usize) -> Result<(), Error> {
        self.check_index(index)?;
        let (word_index, mask) = locate(index);
        self.words[word_index] &= !mask;
        Ok(())
    }

    /// Overwrites every bit with `fill`, a whole word at a time.
    pub fn fill(&mut self, fill: Fill) {
        self.words.fill(fill.word());
        self.mask_padding();
    }

    /// Gets a bit the caller has already proven to be in range.
    pub(crate) fn get_bit(&self, index: usize) -> bool {
        let (word_index, mask) = locate(index);
        (self.words[word_index] & mask) != 0
    }

    /// Sets a bit the caller has already proven to be in range.
    ///
    /// Returns whether the bit was previously clear.
    pub(crate) fn set_bit(&mut self, index: usize) -> bool {
        let (word_index, mask) = locate(index);
        let was_clear = (self.words[word_index] & mask) == 0;
        self.words[word_index] |= mask;
        was_clear
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.len {
            Ok(())
        } else {
            Err(Error::index_out_of_range(index, self.len))
        }
    }

    fn mask_padding(&mut self) {
        let excess_bits = self.len % WORD_BITS;
        if excess_bits != 0 {
            let last_idx = self.words.len() - 1;
            self.words[last_idx] &= (1u32 << excess_bits) - 1;
        }
    }
}

/// Splits a bit index into its word index and the mask selecting it within that word.
#[inline]
fn locate(index: usize) -> (usize, u32) {
    let word_index = index >> 5; // Equivalent to index / 32
    let bit_offset = index & 31; // Equivalent to index % 32
    (word_index, 1u32 << bit_offset)
}
