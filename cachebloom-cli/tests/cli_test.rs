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

use std::fs;
use std::path::Path;
use std::process::Command;

use cachebloom_cli::check::CheckSummary;
use cachebloom_cli::check::DEFAULT_FPP;
use cachebloom_cli::check::run_check;
use cachebloom_cli::entries::EMAIL_HEADER;
use cachebloom_cli::entries::read_entries;
use googletest::assert_that;
use googletest::prelude::eq;
use tempfile::TempDir;

fn write_list(dir: &Path, name: &str, entries: &[&str]) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut text = format!("{EMAIL_HEADER}\n");
    for entry in entries {
        text.push_str(entry);
        text.push('\n');
    }
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_run_check_output() {
    let dir = TempDir::new().unwrap();
    let inserts = write_list(
        dir.path(),
        "db_check.csv",
        &["alice@example.com", "bob@gmail.com", "carol@aol.com"],
    );
    let queries = write_list(
        dir.path(),
        "db_input.csv",
        &["carol@aol.com", "definitely-not-inserted-9f3a", "alice@example.com"],
    );

    let mut out = Vec::new();
    let summary = run_check(&inserts, &queries, DEFAULT_FPP, &mut out).unwrap();

    assert_that!(
        summary,
        eq(CheckSummary {
            inserted: 3,
            queried: 3,
            probably_present: 2,
        })
    );
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "carol@aol.com,ProbablyPresent\n\
         definitely-not-inserted-9f3a,DefinitelyAbsent\n\
         alice@example.com,ProbablyPresent\n"
    );
}

#[test]
fn test_run_check_header_only_files() {
    let dir = TempDir::new().unwrap();
    let inserts = write_list(dir.path(), "empty.csv", &[]);
    let queries = write_list(dir.path(), "queries.csv", &["x@gmx.com"]);

    let mut out = Vec::new();
    let summary = run_check(&inserts, &queries, DEFAULT_FPP, &mut out).unwrap();
    assert_eq!(summary.inserted, 0);
    assert_eq!(String::from_utf8(out).unwrap(), "x@gmx.com,DefinitelyAbsent\n");
}

#[test]
fn test_run_check_missing_file() {
    let dir = TempDir::new().unwrap();
    let queries = write_list(dir.path(), "queries.csv", &["x@gmx.com"]);
    let missing = dir.path().join("missing.csv");

    let mut out = Vec::new();
    let err = run_check(&missing, &queries, DEFAULT_FPP, &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("missing.csv"));
    assert!(out.is_empty());
}

#[test]
fn test_binary_success() {
    let dir = TempDir::new().unwrap();
    let inserts = write_list(dir.path(), "in.csv", &["a@gmail.com", "b@outlook.com"]);
    let queries = write_list(dir.path(), "q.csv", &["b@outlook.com", "a@gmail.com"]);

    let output = Command::new(env!("CARGO_BIN_EXE_cachebloom"))
        .arg(&inserts)
        .arg(&queries)
        .env_remove("CACHEBLOOM_FPP")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "b@outlook.com,ProbablyPresent\na@gmail.com,ProbablyPresent\n"
    );
}

#[test]
fn test_binary_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let queries = write_list(dir.path(), "q.csv", &["a@gmail.com"]);

    let output = Command::new(env!("CARGO_BIN_EXE_cachebloom"))
        .arg(dir.path().join("nope.csv"))
        .arg(&queries)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.csv"));
}

#[test]
fn test_binary_missing_arguments_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_cachebloom"))
        .arg("only-one.csv")
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_binary_invalid_fpp_fails() {
    let dir = TempDir::new().unwrap();
    let list = write_list(dir.path(), "l.csv", &["a@gmail.com"]);

    let output = Command::new(env!("CARGO_BIN_EXE_cachebloom"))
        .arg(&list)
        .arg(&list)
        .args(["--fpp", "1.5"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("InvalidConfiguration"));
}

#[test]
fn test_emailgen_round_trip() {
    let dir = TempDir::new().unwrap();
    let check = dir.path().join("db_check.csv");
    let input = dir.path().join("db_input.csv");

    let status = Command::new(env!("CARGO_BIN_EXE_emailgen"))
        .args(["emails", "--count", "30", "--output"])
        .arg(&check)
        .status()
        .unwrap();
    assert!(status.success());

    let status = Command::new(env!("CARGO_BIN_EXE_emailgen"))
        .arg("sample")
        .arg("--input")
        .arg(&check)
        .arg("--output")
        .arg(&input)
        .status()
        .unwrap();
    assert!(status.success());

    let generated = read_entries(&check).unwrap();
    let sampled = read_entries(&input).unwrap();
    assert_eq!(generated.len(), 30);
    assert!((5..10).contains(&sampled.len()));
    assert!(fs::read_to_string(&check).unwrap().starts_with("Email\n"));

    // every sampled address was generated, so none may be reported absent
    let output = Command::new(env!("CARGO_BIN_EXE_cachebloom"))
        .arg(&check)
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), sampled.len());
    assert!(stdout.lines().all(|line| line.ends_with(",ProbablyPresent")));
}
