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

//! Implementation of the [`Error`] type for message traversal.

use std::fmt;

/// An error signaling that a message could not be walked.
///
/// The walker trusts every length it reads, so the only thing that can
/// go wrong is running off the end of the buffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// The message ended before the named field could be read in full.
    /// `offset` is the cursor position at which the read started.
    Truncated { field: Field, offset: usize },
}

/// The part of a message that was being read when an [`Error`]
/// occurred.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    Header,
    LabelLength,
    Label,
    Pointer,
    QuestionFields,
    RecordFields,
    Ttl,
    Rdlength,
    Rdata,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Truncated { field, offset } => write!(
                f,
                "message truncated while reading {} at offset {}",
                field, offset
            ),
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Header => f.write_str("the header"),
            Self::LabelLength => f.write_str("a label length"),
            Self::Label => f.write_str("a label"),
            Self::Pointer => f.write_str("a compression pointer"),
            Self::QuestionFields => f.write_str("QTYPE and QCLASS"),
            Self::RecordFields => f.write_str("TYPE and CLASS"),
            Self::Ttl => f.write_str("a TTL"),
            Self::Rdlength => f.write_str("RDLENGTH"),
            Self::Rdata => f.write_str("RDATA"),
        }
    }
}

/// The type returned by fallible functions in this module.
pub type Result<T> = std::result::Result<T, Error>;
