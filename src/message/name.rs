// Copyright 2021 Matthew Ingwersen.
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

//! Skipping of compressed on-the-wire names.

use super::constants::MAX_LABEL_LEN;
use super::reader::{read_u8, skip};
use super::{Field, Result};

/// Skips the name starting at `cursor` in `octets` and returns the
/// cursor just past it.
///
/// A name ends at the first null label or at the first pointer.
/// Any length octet greater than 63 is taken to start a pointer, which
/// occupies that octet and the next one; the pointer itself is never
/// followed, so its target may be anything (even outside of the
/// message). Label lengths are otherwise trusted, and no limit on the
/// total length of the name is enforced.
pub fn skip_name(octets: &[u8], mut cursor: usize) -> Result<usize> {
    loop {
        let (label_len, next) = read_u8(octets, cursor, Field::LabelLength)?;
        if label_len == 0 {
            return Ok(next);
        } else if label_len > MAX_LABEL_LEN {
            return skip(octets, next, 1, Field::Pointer);
        } else {
            cursor = skip(octets, next, label_len as usize, Field::Label)?;
        }
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
