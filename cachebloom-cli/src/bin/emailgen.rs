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

//! Generates list files of random email addresses for trying out `cachebloom`.

use std::path::PathBuf;

use cachebloom_cli::entries::EMAIL_HEADER;
use cachebloom_cli::entries::read_entries;
use cachebloom_cli::entries::write_entries;
use cachebloom_cli::generate::generate_emails;
use cachebloom_cli::generate::sample_entries;
use clap::Parser;
use clap::Subcommand;
use log::info;

#[derive(Parser)]
#[command(name = "emailgen")]
#[command(about = "Generate email list files for cachebloom")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a list file of random email addresses
    Emails {
        /// Number of addresses to generate
        #[arg(long, short = 'n', default_value_t = 20)]
        count: usize,

        /// Output list file
        #[arg(long, short = 'o', default_value = "db_check.csv")]
        output: PathBuf,
    },
    /// Write a random sample of an existing list file
    Sample {
        /// List file to sample from
        #[arg(long, short = 'i', default_value = "db_check.csv")]
        input: PathBuf,

        /// Output list file
        #[arg(long, short = 'o', default_value = "db_input.csv")]
        output: PathBuf,

        /// Smallest sample size
        #[arg(long, default_value_t = 5)]
        min: usize,

        /// Sample size upper bound (exclusive)
        #[arg(long, default_value_t = 10)]
        max: usize,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut rng = rand::rng();

    match cli.command {
        Commands::Emails { count, output } => {
            let emails = generate_emails(&mut rng, count);
            write_entries(&output, EMAIL_HEADER, &emails)?;
            info!("generated {} emails into {}", emails.len(), output.display());
        }
        Commands::Sample {
            input,
            output,
            min,
            max,
        } => {
            let entries = read_entries(&input)?;
            let sample = sample_entries(&mut rng, &entries, min, max)?;
            write_entries(&output, EMAIL_HEADER, &sample)?;
            info!(
                "sampled {} of {} emails from {} into {}",
                sample.len(),
                entries.len(),
                input.display(),
                output.display()
            );
        }
    }

    Ok(())
}
