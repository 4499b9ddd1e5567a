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

//! # cachebloom
//!
//! A Bloom filter sized from an expected item count and a tolerated false positive rate,
//! meant to sit in front of a slower backing store and answer "definitely absent" for keys
//! that were never stored.
//!
//! This library is divided into modules that constitute distinct layers:
//!
//! - [`bitvec`]: fixed-length bit storage packed into 32-bit words
//! - [`hash`]: the seeded MurmurHash3 family mapping items to bit positions
//! - [`bloom`]: the membership filter built on both
//!
//! The library performs no I/O and never logs.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod bitvec;
pub mod bloom;
pub mod error;
pub mod hash;
