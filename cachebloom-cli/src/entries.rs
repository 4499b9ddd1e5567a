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

//! Reading and writing list files.

use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use log::debug;

/// Header line written at the top of generated list files.
pub const EMAIL_HEADER: &str = "Email";

/// Splits list file contents into entries, dropping the header line.
///
/// Both `\n` and `\r\n` line endings are accepted. Blank lines after the header are kept as
/// empty entries.
pub fn parse_entries(text: &str) -> Vec<String> {
    text.lines().skip(1).map(str::to_owned).collect()
}

/// Reads a list file and returns its entries without the header line.
pub fn read_entries(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read list file {}", path.display()))?;
    let entries = parse_entries(&text);
    debug!("read {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Writes `header` followed by one entry per line to `path`, replacing any existing file.
pub fn write_entries<S: AsRef<str>>(path: &Path, header: &str, entries: &[S]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create list file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{header}")?;
    for entry in entries {
        writeln!(out, "{}", entry.as_ref())?;
    }
    out.flush()
        .with_context(|| format!("failed to write list file {}", path.display()))?;
    debug!("wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}
