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

//! Implements command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dnscmp::Mode;

use crate::inputs::Format;

/// Parses the command line arguments.
pub fn parse() -> Args {
    Args::parse()
}

/// Compares DNS messages, ignoring the TTLs of resource records
#[derive(Debug, Parser)]
#[clap(author, version)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare one expected message with one actual message
    Compare(CompareArgs),

    /// Compare the pairs of messages listed in a configuration file
    Batch(BatchArgs),
}

#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// Set the file containing the expected message
    #[clap(long, value_name = "FILE")]
    pub expected: PathBuf,

    /// Set the file containing the actual message
    #[clap(long, value_name = "FILE")]
    pub actual: PathBuf,

    /// Set how the messages are compared (exact or ignore-ttls)
    #[clap(long, default_value_t = Mode::IgnoreTtls, value_name = "MODE")]
    pub mode: Mode,

    /// Set how the message files are encoded (raw, hex, or base64)
    #[clap(long, default_value_t = Format::Raw, value_name = "FORMAT")]
    pub format: Format,
}

#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Set the configuration file listing the pairs to compare
    #[clap(long, value_name = "FILE")]
    pub config: PathBuf,
}
