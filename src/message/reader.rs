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

//! Cursor-based primitives for reading on-the-wire DNS messages.
//!
//! There is no reader object. Each function takes the message and a
//! cursor (an index into the message) and returns whatever it read
//! along with the new cursor, which is never less than the old one. On
//! failure, the caller's cursor is simply left where it was.

use super::{Error, Field, Result};

/// Returns the `len` octets of `octets` starting at `cursor`, along
/// with the cursor just past them.
fn take(octets: &[u8], cursor: usize, len: usize, field: Field) -> Result<(&[u8], usize)> {
    let truncated = Error::Truncated {
        field,
        offset: cursor,
    };
    let end = cursor.checked_add(len).ok_or(truncated)?;
    let taken = octets.get(cursor..end).ok_or(truncated)?;
    Ok((taken, end))
}

/// Skips `len` octets starting at `cursor`. The octets must all be
/// present in `octets`.
pub fn skip(octets: &[u8], cursor: usize, len: usize, field: Field) -> Result<usize> {
    take(octets, cursor, len, field).map(|(_, end)| end)
}

/// Reads an octet at `cursor`.
pub fn read_u8(octets: &[u8], cursor: usize, field: Field) -> Result<(u8, usize)> {
    let (taken, end) = take(octets, cursor, 1, field)?;
    Ok((taken[0], end))
}

/// Reads a network-byte-order `u16` at `cursor`.
pub fn read_u16(octets: &[u8], cursor: usize, field: Field) -> Result<(u16, usize)> {
    let (taken, end) = take(octets, cursor, 2, field)?;
    Ok((u16::from_be_bytes([taken[0], taken[1]]), end))
}

/// Reads a network-byte-order `u32` at `cursor`.
pub fn read_u32(octets: &[u8], cursor: usize, field: Field) -> Result<(u32, usize)> {
    let (taken, end) = take(octets, cursor, 4, field)?;
    Ok((
        u32::from_be_bytes([taken[0], taken[1], taken[2], taken[3]]),
        end,
    ))
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
