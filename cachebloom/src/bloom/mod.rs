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

//! Bloom Filter implementation for probabilistic set membership testing.
//!
//! A Bloom filter is a space-efficient probabilistic data structure used to test whether
//! an element is a member of a set. False positive matches are possible, but false negatives
//! are not. In other words, a query returns either "probably present" or "definitely absent".
//!
//! Put in front of a slower backing store, a `DefinitelyAbsent` answer lets the caller skip
//! the lookup for keys that do not exist (cache penetration).
//!
//! # Properties
//!
//! - **No false negatives**: If an item was added, `check()` always returns `ProbablyPresent`
//! - **Bounded false positives**: About `fpp` of never-added items report `ProbablyPresent`
//!   once `expected_items` items are in the filter
//! - **Fixed size**: The filter never resizes; items cannot be removed
//!
//! # Usage
//!
//! ```rust
//! use cachebloom::bloom::BloomFilter;
//! use cachebloom::bloom::Membership;
//!
//! // Sized for 1000 items with a one-in-ten-million false positive rate
//! let mut filter = BloomFilter::new(1000, 1e-7).unwrap();
//!
//! filter.add("alice@example.com");
//! filter.add("bob@example.com");
//!
//! assert_eq!(filter.check("alice@example.com"), Membership::ProbablyPresent);
//! assert_eq!(filter.check("mallory@example.com"), Membership::DefinitelyAbsent);
//!
//! println!("Capacity: {} bits", filter.num_bits());
//! println!("Hash functions: {}", filter.num_hashes());
//! println!("Est. FPP: {:.2e}", filter.estimated_fpp());
//! ```
//!
//! # Sizing
//!
//! For `n` expected items and target probability `p`:
//!
//! - bits: `m = ceil(-n * ln(p) / ln(2)^2)`
//! - hashes: `k = round(m / n * ln(2))`, at least 1
//!
//! # Hashing
//!
//! Hash function `i` (for `i` in `0..k`) is MurmurHash3 x86_32 seeded with `i`. The digest is
//! read as a signed 32-bit integer and reduced modulo `m` with a floored modulo, so bit
//! positions match `mmh3.hash(item, i) % m` from the Python `mmh3` package.
//!
//! # Concurrency
//!
//! [`BloomFilter::add`] takes `&mut self` and [`BloomFilter::check`] takes `&self`. The
//! filter does no locking of its own; to share one between threads, wrap it in a
//! [`std::sync::RwLock`] so queries run concurrently while adds are exclusive.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/time trade-offs in hash coding with allowable errors"

mod filter;
mod params;

pub use self::filter::BloomFilter;
pub use self::filter::Membership;
pub use self::params::MAX_NUM_BITS;
pub use self::params::MIN_NUM_BITS;
pub use self::params::MIN_NUM_HASHES;
pub use self::params::suggest_num_bits;
pub use self::params::suggest_num_hashes;
