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

//! Synthetic email addresses for exercising the filter by hand.

use anyhow::ensure;
use rand::Rng;
use rand::seq::IndexedRandom;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Domains appended to generated local parts.
pub const DOMAINS: [&str; 8] = [
    "@gmail.com",
    "@outlook.com",
    "@gmx.com",
    "@zoho.com",
    "@icloud.com",
    "@aol.com",
    "@proton.com",
    "@yahoo.com",
];

/// Shortest generated local part.
pub const MIN_LOCAL_LEN: usize = 5;
/// Longest generated local part.
pub const MAX_LOCAL_LEN: usize = 10;

/// Generates one address: 5 to 10 lowercase alphanumerics followed by one of [`DOMAINS`].
pub fn random_email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let local_len = rng.random_range(MIN_LOCAL_LEN..=MAX_LOCAL_LEN);
    let mut email: String = (0..local_len)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect();
    email.push_str(DOMAINS[rng.random_range(0..DOMAINS.len())]);
    email
}

/// Generates `count` random addresses. Duplicates are possible but unlikely.
pub fn generate_emails<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count).map(|_| random_email(rng)).collect()
}

/// Picks between `min` and `max - 1` distinct entries at random.
///
/// The sample size is capped at `entries.len()`.
pub fn sample_entries<R: Rng + ?Sized>(
    rng: &mut R,
    entries: &[String],
    min: usize,
    max: usize,
) -> anyhow::Result<Vec<String>> {
    ensure!(min < max, "sample range is empty: min {min} must be below max {max}");

    let amount = rng.random_range(min..max).min(entries.len());
    Ok(entries.choose_multiple(rng, amount).cloned().collect())
}
