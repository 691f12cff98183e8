// Copyright 2022 Matthew Ingwersen.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you
// may not use this file except in compliance with the License. You may
// obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied. See the License for the specific language governing
// permissions and limitations under the License.

//! Implements running the comparisons.

use std::fmt::Write;
use std::process;

use anyhow::{Context, Result};
use env_logger::Env;
use log::{debug, error, info, warn};

use dnscmp::{Validator, Verdict};

use crate::args::Command;
use crate::config::{self, Config, PairConfig};
use crate::inputs;

/// The exit status when every pair was equivalent.
const EXIT_EQUIVALENT: i32 = 0;

/// The exit status when at least one pair differed and none failed.
const EXIT_MISMATCH: i32 = 1;

/// The exit status when anything failed, including a malformed
/// expected message.
const EXIT_FAILURE: i32 = 2;

/// The outcome of comparing a single pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Outcome {
    Equivalent,
    Mismatch,
}

/// Runs the given command and exits.
pub fn run(command: Command) {
    env_logger::init_from_env(Env::new().default_filter_or("warn"));

    let status = match try_running(command) {
        Ok(status) => status,
        Err(e) => {
            log_error_chain("Failed to run:", &e);
            EXIT_FAILURE
        }
    };
    process::exit(status);
}

fn try_running(command: Command) -> Result<i32> {
    let config = match command {
        Command::Compare(args) => config::load_from_args(args),
        Command::Batch(args) => {
            info!("Loading the configuration from {}.", args.config.display());
            config::load_from_path(&args.config).context("failed to load the configuration")?
        }
    };

    let mut mismatches = 0;
    let mut failures = 0;
    for pair in &config.pairs {
        let name = pair.name();
        match compare_pair(&config, pair) {
            Ok(Outcome::Equivalent) => println!("EQUIVALENT {}", name),
            Ok(Outcome::Mismatch) => {
                println!("MISMATCH {}", name);
                mismatches += 1;
            }
            Err(e) => {
                println!("ERROR {}", name);
                log_error_chain(&format!("Failed to compare {}:", name), &e);
                failures += 1;
            }
        }
    }

    info!(
        "Compared {} pairs: {} equivalent, {} mismatched, {} failed.",
        config.pairs.len(),
        config.pairs.len() - mismatches - failures,
        mismatches,
        failures,
    );
    if failures > 0 {
        Ok(EXIT_FAILURE)
    } else if mismatches > 0 {
        Ok(EXIT_MISMATCH)
    } else {
        Ok(EXIT_EQUIVALENT)
    }
}

/// Loads and compares a single pair of messages.
fn compare_pair(config: &Config, pair: &PairConfig) -> Result<Outcome> {
    let mode = pair.mode(config);
    let format = pair.format(config);
    debug!("Comparing {} in {} mode.", pair.name(), mode);

    let expected = inputs::load(&pair.expected, format)?;
    let actual = inputs::load(&pair.actual, format)?;
    let verdict = mode
        .validator()
        .validate(&expected, &actual)
        .with_context(|| format!("{} is malformed", pair.expected.display()))?;

    match verdict {
        Verdict::Equivalent => Ok(Outcome::Equivalent),
        Verdict::Mismatch(mismatch) => {
            warn!(
                "{} does not match {}:\n{}",
                pair.actual.display(),
                pair.expected.display(),
                mismatch,
            );
            Ok(Outcome::Mismatch)
        }
    }
}

/// Logs an error along with all of its causes.
fn log_error_chain(heading: &str, e: &anyhow::Error) {
    let mut message = String::from(heading);
    for (i, cause) in e.chain().enumerate() {
        write!(message, "\n[{}] {}", i + 1, cause).unwrap();
    }
    error!("{}", message);
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::args::BatchArgs;

    /// A reply for an A query for the root with one answer, 127.0.0.1
    /// with a TTL of 300, in hex.
    const EXPECTED: &str = "1234 8180 0000 0001 0000 0000 \
                            00 0001 0001 0000012c 0004 7f000001";

    /// Runs a batch comparing one pair of hex message files, written
    /// next to the configuration file in a temporary directory.
    fn run_batch(expected: &str, actual: &str) -> i32 {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("expected.hex"), expected).unwrap();
        fs::write(dir.path().join("actual.hex"), actual).unwrap();
        let config_path = dir.path().join("pairs.toml");
        fs::write(
            &config_path,
            "format = \"hex\"\n\
             \n\
             [[pairs]]\n\
             expected = \"expected.hex\"\n\
             actual = \"actual.hex\"\n",
        )
        .unwrap();
        try_running(Command::Batch(BatchArgs {
            config: config_path,
        }))
        .unwrap()
    }

    #[test]
    fn equivalent_pair_exits_with_zero() {
        let actual = "1234 8180 0000 0001 0000 0000 \
                      00 0001 0001 0000003c 0004 7f000001";
        assert_eq!(run_batch(EXPECTED, actual), EXIT_EQUIVALENT);
    }

    #[test]
    fn mismatched_pair_exits_with_one() {
        let actual = "1234 8180 0000 0001 0000 0000 \
                      00 0001 0001 0000012c 0004 7f000002";
        assert_eq!(run_batch(EXPECTED, actual), EXIT_MISMATCH);
    }

    #[test]
    fn truncated_expected_exits_with_two() {
        let truncated = "1234 8180 0000 0001 0000 0000 \
                         00 0001 0001 0000012c 0004 7f0000";
        assert_eq!(run_batch(truncated, EXPECTED), EXIT_FAILURE);
    }

    #[test]
    fn undecodable_file_exits_with_two() {
        assert_eq!(run_batch(EXPECTED, "not hex"), EXIT_FAILURE);
    }

    #[test]
    fn missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(try_running(Command::Batch(BatchArgs {
            config: dir.path().join("missing.toml"),
        }))
        .is_err());
    }
}
