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

//! Adds the entries of one list file to a Bloom filter and reports, for every entry of a
//! second list file, whether it is definitely absent or probably present.

use std::io;
use std::io::BufWriter;
use std::path::PathBuf;

use cachebloom_cli::check::DEFAULT_FPP;
use cachebloom_cli::check::run_check;
use clap::Parser;
use log::error;

#[derive(Parser)]
#[command(name = "cachebloom")]
#[command(about = "Check list entries against a Bloom filter built from another list")]
#[command(version)]
struct Cli {
    /// List file whose entries are added to the filter (first line is a header)
    #[arg(value_name = "INSERT_FILE")]
    insert_file: PathBuf,

    /// List file whose entries are checked (first line is a header)
    #[arg(value_name = "QUERY_FILE")]
    query_file: PathBuf,

    /// Target false positive probability, strictly between 0 and 1
    #[arg(long, env = "CACHEBLOOM_FPP", default_value_t = DEFAULT_FPP)]
    fpp: f64,
}

fn main() -> anyhow::Result<()> {
    // Results go to stdout; logs go to stderr and stay quiet unless RUST_LOG asks for more.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(e) = run_check(&cli.insert_file, &cli.query_file, cli.fpp, &mut out) {
        error!("check failed: {e:#}");
        return Err(e);
    }

    Ok(())
}
