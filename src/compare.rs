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

//! Segment-wise comparison of two messages around their TTL fields.

use std::fmt;
use std::slice;

use crate::message::TTL_LEN;
use crate::util::Hex;

////////////////////////////////////////////////////////////////////////
// SEGMENTS                                                           //
////////////////////////////////////////////////////////////////////////

/// A half-open range `[start, end)` of octets that must be identical
/// in both messages.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    /// Returns whether `offset` falls within the segment.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Returns an iterator over the [`Segment`]s of a message of length
/// `len` whose TTL fields start at `ttl_offsets`.
///
/// There is always one more segment than there are TTL offsets: the
/// segments run up to each TTL, and the last one runs from just after
/// the last TTL to the end of the message. Segments may be empty.
pub fn segments(len: usize, ttl_offsets: &[usize]) -> Segments<'_> {
    Segments {
        len,
        ttl_offsets: ttl_offsets.iter(),
        next_start: Some(0),
    }
}

/// The iterator returned by [`segments`].
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    len: usize,
    ttl_offsets: slice::Iter<'a, usize>,
    next_start: Option<usize>,
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start?;
        if let Some(&ttl_offset) = self.ttl_offsets.next() {
            self.next_start = Some(ttl_offset.saturating_add(TTL_LEN));
            Some(Segment {
                start,
                end: ttl_offset,
            })
        } else {
            self.next_start = None;
            Some(Segment {
                start,
                end: self.len,
            })
        }
    }
}

////////////////////////////////////////////////////////////////////////
// COMPARISON                                                         //
////////////////////////////////////////////////////////////////////////

/// The outcome of comparing two messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict<'a> {
    /// Every segment was identical.
    Equivalent,

    /// A segment differed. Only the first differing segment is
    /// reported.
    Mismatch(Mismatch<'a>),
}

impl<'a> Verdict<'a> {
    /// Returns whether the messages were found to be equivalent.
    pub fn is_equivalent(&self) -> bool {
        matches!(self, Self::Equivalent)
    }

    /// Returns the mismatch, if there was one.
    pub fn mismatch(&self) -> Option<&Mismatch<'a>> {
        match self {
            Self::Equivalent => None,
            Self::Mismatch(mismatch) => Some(mismatch),
        }
    }
}

/// Diagnostic information about the first segment that differed.
///
/// `expected` and `actual` are the octets of the segment in each
/// message. If the actual message is too short to contain the whole
/// segment, `actual` holds only what it does contain. For the final
/// segment, `actual` runs to the end of the actual message, so that
/// trailing data is visible.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Mismatch<'a> {
    pub segment: Segment,
    pub expected: &'a [u8],
    pub actual: &'a [u8],
}

impl fmt::Display for Mismatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "octets {} differ\nexpected: {}\nactual:   {}",
            self.segment,
            Hex(self.expected),
            Hex(self.actual),
        )
    }
}

/// Compares `expected` and `actual` everywhere except in the four-octet
/// TTL fields starting at `ttl_offsets`.
///
/// The offsets should be those returned by
/// [`walk`](crate::message::walk) for `expected`. Nothing is assumed
/// about `actual`: any difference in length or content outside of the
/// TTL fields, however it arose, results in a [`Verdict::Mismatch`].
/// This function never fails or panics, even for offsets that `walk`
/// would not produce; a segment that cannot be sliced out of either
/// message counts as a mismatch.
pub fn compare<'a>(expected: &'a [u8], actual: &'a [u8], ttl_offsets: &[usize]) -> Verdict<'a> {
    for (i, segment) in segments(expected.len(), ttl_offsets).enumerate() {
        // The final segment takes in whatever is left of each message.
        let actual_end = if i == ttl_offsets.len() {
            actual.len()
        } else {
            segment.end
        };
        let e = expected.get(segment.start..segment.end);
        let a = actual.get(segment.start..actual_end);
        if e.is_none() || e != a {
            return Verdict::Mismatch(Mismatch {
                segment,
                expected: clamped(expected, segment.start, segment.end),
                actual: clamped(actual, segment.start, actual_end),
            });
        }
    }
    Verdict::Equivalent
}

/// Returns as much of `octets[start..end]` as exists.
fn clamped(octets: &[u8], start: usize, end: usize) -> &[u8] {
    let end = end.min(octets.len());
    &octets[start.min(end)..end]
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////
