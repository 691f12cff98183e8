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

//! DNS messages shared by the unit tests.

/// This is a reply to a query for example.com. IN NS to a recursive
/// server, made on January 7, 2022. The answers use compression
/// pointers, and there is an OPT record in the additional section.
/// TTLs are at 35, 67, and 82 (the last being the OPT record's).
pub const EXAMPLE_COM_NS_MESSAGE: &[u8] =
    b"\xe2\xd7\x81\x80\x00\x01\x00\x02\x00\x00\x00\x01\x07\x65\x78\x61\
      \x6d\x70\x6c\x65\x03\x63\x6f\x6d\x00\x00\x02\x00\x01\xc0\x0c\x00\
      \x02\x00\x01\x00\x01\x50\xa2\x00\x14\x01\x61\x0c\x69\x61\x6e\x61\
      \x2d\x73\x65\x72\x76\x65\x72\x73\x03\x6e\x65\x74\x00\xc0\x0c\x00\
      \x02\x00\x01\x00\x01\x50\xa2\x00\x04\x01\x62\xc0\x2b\x00\x00\x29\
      \x10\x00\x00\x00\x00\x00\x00\x00";

pub const EXAMPLE_COM_NS_TTL_OFFSETS: &[usize] = &[35, 67, 82];

/// A reply for example.com. IN A with one uncompressed answer,
/// 93.184.216.34 with a TTL of 300. The TTL is at 46 and the RDATA
/// occupies 52..56.
pub const EXAMPLE_COM_A_MESSAGE: &[u8] =
    b"\xab\xcd\x81\x80\x00\x01\x00\x01\x00\x00\x00\x00\
      \x07example\x03com\x00\x00\x01\x00\x01\
      \x07example\x03com\x00\x00\x01\x00\x01\x00\x00\x01\x2c\x00\x04\
      \x5d\xb8\xd8\x22";

pub const EXAMPLE_COM_A_TTL_OFFSET: usize = 46;
