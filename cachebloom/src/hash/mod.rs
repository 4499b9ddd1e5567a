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

//! Seeded hash family used to map items to bit positions.
//!
//! Items are plain byte sequences; strings are hashed as their UTF-8 encoding with no framing.
//! Each of the `k` hash functions of a Bloom filter is MurmurHash3 x86_32 seeded with its own
//! index `0..k`.
//!
//! ```
//! use cachebloom::hash::murmurhash3_x86_32;
//!
//! let digest = murmurhash3_x86_32("foo".as_bytes(), 0);
//! assert_eq!(digest as i32, -156908512);
//! ```

mod murmurhash;

pub use self::murmurhash::MurmurHash3X86_32;
pub use self::murmurhash::murmurhash3_x86_32;

/// Maps the digest of `item` under `seed` to a bit position in `[0, num_bits)`.
///
/// The digest is read as a signed 32-bit integer and reduced with a floored modulo, which is
/// the convention of the Python `mmh3` package (`mmh3.hash(item, seed) % num_bits`). Positions
/// are therefore reproducible across implementations that follow it.
///
/// `num_bits` must be in `1..=2^32`; larger values leave positions unreachable.
pub(crate) fn bit_position(item: &[u8], seed: u32, num_bits: u64) -> u64 {
    debug_assert!(num_bits > 0);
    let signed = i64::from(murmurhash3_x86_32(item, seed) as i32);
    signed.rem_euclid(num_bits as i64) as u64
}
