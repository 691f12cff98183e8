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

//! Implements loading of messages from files.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::{self, FromStr};

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// The encoding of a file containing a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// The file holds the message itself.
    Raw,

    /// The file holds the message in hexadecimal. Whitespace is
    /// ignored.
    Hex,

    /// The file holds the message in standard base64. Whitespace is
    /// ignored.
    Base64,
}

impl FromStr for Format {
    type Err = &'static str;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "raw" => Ok(Self::Raw),
            "hex" => Ok(Self::Hex),
            "base64" => Ok(Self::Base64),
            _ => Err("unknown format (expected raw, hex, or base64)"),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Raw => f.write_str("raw"),
            Self::Hex => f.write_str("hex"),
            Self::Base64 => f.write_str("base64"),
        }
    }
}

/// Loads the message stored in the file at `path`.
pub fn load(path: &Path, format: Format) -> Result<Vec<u8>> {
    let contents = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    decode(contents, format).with_context(|| format!("failed to decode {}", path.display()))
}

/// Decodes the contents of a message file.
fn decode(contents: Vec<u8>, format: Format) -> Result<Vec<u8>> {
    match format {
        Format::Raw => Ok(contents),
        Format::Hex => {
            let text = str::from_utf8(&contents).context("the file is not valid UTF-8")?;
            dnscmp::decode_hex(text).ok_or_else(|| anyhow!("the file is not valid hexadecimal"))
        }
        Format::Base64 => {
            let compact: Vec<u8> = contents
                .into_iter()
                .filter(|c| !c.is_ascii_whitespace())
                .collect();
            STANDARD
                .decode(compact)
                .context("the file is not valid base64")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_contents_are_unchanged() {
        let contents = b"\x00\x01\xff".to_vec();
        assert_eq!(decode(contents.clone(), Format::Raw).unwrap(), contents);
    }

    #[test]
    fn hex_contents_are_decoded() {
        assert_eq!(
            decode(b"ab cd\n00 01\n".to_vec(), Format::Hex).unwrap(),
            b"\xab\xcd\x00\x01"
        );
        assert!(decode(b"abc".to_vec(), Format::Hex).is_err());
        assert!(decode(b"\xff\xfe".to_vec(), Format::Hex).is_err());
    }

    #[test]
    fn base64_contents_are_decoded() {
        assert_eq!(
            decode(b"q80A\nAQ==\n".to_vec(), Format::Base64).unwrap(),
            b"\xab\xcd\x00\x01"
        );
        assert!(decode(b"!!!!".to_vec(), Format::Base64).is_err());
    }

    #[test]
    fn format_parses_its_own_display() {
        for format in [Format::Raw, Format::Hex, Format::Base64] {
            assert_eq!(format.to_string().parse(), Ok(format));
        }
        assert!("binary".parse::<Format>().is_err());
    }
}
