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

//! Fixed-length bit vector packed into 32-bit words.
//!
//! Bit `i` lives in word `i >> 5` at offset `i & 31`, so `n` bits take `ceil(n / 32)` words
//! instead of `n` bytes. The length is chosen at construction and never changes.
//!
//! # Usage
//!
//! ```rust
//! use cachebloom::bitvec::BitVector;
//! use cachebloom::bitvec::Fill;
//!
//! let mut bits = BitVector::new(100, Fill::Zero).unwrap();
//! bits.set(42).unwrap();
//! assert!(bits.test(42).unwrap());
//!
//! bits.clear(42).unwrap();
//! assert!(!bits.test(42).unwrap());
//!
//! // Indices at or past the length are rejected.
//! assert!(bits.test(100).is_err());
//! ```

mod vector;

pub use self::vector::BitVector;
pub use self::vector::Fill;
