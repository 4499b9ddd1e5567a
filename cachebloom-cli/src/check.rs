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

//! Building a filter from one list file and checking another against it.

use std::io::Write;
use std::path::Path;

use cachebloom::bloom::BloomFilter;
use log::info;

use crate::entries::read_entries;

/// False positive probability used when none is configured.
pub const DEFAULT_FPP: f64 = 1e-7;

/// Counts reported after a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckSummary {
    /// Entries added to the filter.
    pub inserted: usize,
    /// Entries queried against the filter.
    pub queried: usize,
    /// Queried entries reported as probably present.
    pub probably_present: usize,
}

/// Builds a filter sized for `entries` and adds all of them.
///
/// An empty list still yields a usable filter, sized for a single item.
pub fn build_filter<S: AsRef<str>>(entries: &[S], fpp: f64) -> anyhow::Result<BloomFilter> {
    let expected_items = entries.len().max(1) as u64;
    let mut filter = BloomFilter::new(expected_items, fpp)?;
    info!(
        "filter sized for {} items at fpp {:e}: {} bits, {} hashes",
        expected_items,
        fpp,
        filter.num_bits(),
        filter.num_hashes()
    );

    for entry in entries {
        filter.add(entry.as_ref());
    }
    Ok(filter)
}

/// Writes `<item>,<membership>` for every query, in order.
pub fn write_results<S: AsRef<str>, W: Write>(
    filter: &BloomFilter,
    queries: &[S],
    out: &mut W,
) -> anyhow::Result<usize> {
    let mut probably_present = 0;
    for query in queries {
        let query = query.as_ref();
        let membership = filter.check(query);
        if membership.is_probably_present() {
            probably_present += 1;
        }
        writeln!(out, "{query},{membership}")?;
    }
    Ok(probably_present)
}

/// Adds every entry of `insert_path` to a new filter, then checks every entry of
/// `query_path` and writes one result line per query to `out`.
pub fn run_check<W: Write>(
    insert_path: &Path,
    query_path: &Path,
    fpp: f64,
    out: &mut W,
) -> anyhow::Result<CheckSummary> {
    let inserts = read_entries(insert_path)?;
    let queries = read_entries(query_path)?;

    let filter = build_filter(&inserts, fpp)?;
    let probably_present = write_results(&filter, &queries, out)?;
    out.flush()?;

    let summary = CheckSummary {
        inserted: inserts.len(),
        queried: queries.len(),
        probably_present,
    };
    info!(
        "checked {} entries against {} inserted: {} probably present, load factor {:.3}",
        summary.queried,
        summary.inserted,
        summary.probably_present,
        filter.load_factor()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_empty_list() {
        let filter = build_filter::<&str>(&[], DEFAULT_FPP).unwrap();
        assert_eq!(filter.expected_items(), 1);
        assert!(filter.check("anything").is_definitely_absent());
    }

    #[test]
    fn test_build_filter_rejects_bad_fpp() {
        let err = build_filter(&["a"], 2.0).unwrap_err();
        assert!(err.to_string().contains("InvalidConfiguration"));
    }

    #[test]
    fn test_write_results_in_order() {
        let filter = build_filter(&["a@gmail.com", "b@aol.com"], DEFAULT_FPP).unwrap();
        let mut out = Vec::new();
        let hits = write_results(&filter, &["b@aol.com", "c@zoho.com", "a@gmail.com"], &mut out)
            .unwrap();

        assert_eq!(hits, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "b@aol.com,ProbablyPresent\nc@zoho.com,DefinitelyAbsent\na@gmail.com,ProbablyPresent\n"
        );
    }
}
