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

//! Comparison of on-the-wire DNS messages that ignores the TTLs of
//! resource records.
//!
//! Two encodings of the "same" DNS response (say, one captured from
//! the network and one produced while replaying that capture) often
//! differ only in their TTLs. This crate locates every TTL field of an
//! *expected* message with a shallow walk over its wire format (see
//! [`message::walk`]) and then checks that everything else is
//! byte-for-byte identical in the *actual* message (see
//! [`compare::compare`]).
//!
//! ```
//! let expected = b"\x12\x34\x81\x80\x00\x00\x00\x01\x00\x00\x00\x00\
//!                  \x00\x00\x01\x00\x01\x00\x00\x01\x2c\x00\x04\x7f\x00\x00\x01";
//! let mut actual = expected.to_vec();
//! actual[17..21].copy_from_slice(&60u32.to_be_bytes());
//! assert!(dnscmp::compare_ignoring_ttls(expected, &actual)
//!     .unwrap()
//!     .is_equivalent());
//! ```
//!
//! Only the positions of TTL fields are computed; names, RDATA, and
//! the header are never decoded beyond what is needed to skip them.
//! Compression pointers are recognized but never followed.
//!
//! # Limitation: OPT records
//!
//! The EDNS OPT pseudo-record reuses the TTL field to carry the
//! extended RCODE, version, and flags. The walker does not special-case
//! it, so those four octets are ignored just like any other TTL.

pub mod compare;
pub mod message;
#[cfg(test)]
mod test_messages;
mod util;
pub mod validator;

pub use compare::{compare, Mismatch, Segment, Verdict};
pub use message::walk;
pub use util::{decode_hex, Hex};
pub use validator::{DnsValidator, ExactValidator, Mode, Validator};

/// Compares `expected` and `actual`, ignoring the TTL of every resource
/// record in `expected`.
///
/// This is shorthand for [`walk`]ing `expected` and then calling
/// [`compare`]. An error is only returned if `expected` is truncated;
/// any difference in `actual`, including structural ones, is reported
/// as a [`Verdict::Mismatch`].
pub fn compare_ignoring_ttls<'a>(
    expected: &'a [u8],
    actual: &'a [u8],
) -> Result<Verdict<'a>, message::Error> {
    DnsValidator.validate(expected, actual)
}
