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

//! Implementation of [`walk`], which finds the TTL fields of a
//! message.

use log::{debug, trace};

use super::constants::*;
use super::name::skip_name;
use super::reader::{read_u16, read_u32, skip};
use super::{Field, Result};

////////////////////////////////////////////////////////////////////////
// HEADER COUNTS                                                      //
////////////////////////////////////////////////////////////////////////

/// The section counts from a DNS message header.
///
/// The ID and flags are not included; the walker has no use for them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Counts {
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Counts {
    /// Reads the counts from the header at the start of `octets`.
    pub fn read(octets: &[u8]) -> Result<Self> {
        skip(octets, 0, HEADER_SIZE, Field::Header)?;
        let count_at = |start| read_u16(octets, start, Field::Header).map(|(count, _)| count);
        Ok(Self {
            qdcount: count_at(QDCOUNT_START)?,
            ancount: count_at(ANCOUNT_START)?,
            nscount: count_at(NSCOUNT_START)?,
            arcount: count_at(ARCOUNT_START)?,
        })
    }

    /// Returns the total number of resource records in the answer,
    /// authority, and additional sections.
    pub fn records(&self) -> usize {
        self.ancount as usize + self.nscount as usize + self.arcount as usize
    }
}

////////////////////////////////////////////////////////////////////////
// WALKING                                                            //
////////////////////////////////////////////////////////////////////////

/// Walks the message in `octets` and returns the offset of the first
/// octet of each resource record's TTL field.
///
/// Offsets are returned in the order the records appear in the message
/// (answers, then authority records, then additional records), which
/// is also ascending order. Questions have no TTL and contribute no
/// offsets. Nothing but lengths is examined, so any message whose
/// lengths are consistent is accepted. Octets following the last
/// record are ignored.
///
/// Every record is treated the same, including OPT pseudo-records,
/// whose "TTL" actually holds the extended RCODE and flags.
pub fn walk(octets: &[u8]) -> Result<Vec<usize>> {
    let counts = Counts::read(octets)?;
    trace!("Walking a message with {:?}.", counts);

    let mut cursor = HEADER_SIZE;
    for _ in 0..counts.qdcount {
        cursor = skip_question(octets, cursor)?;
    }

    let mut ttl_offsets = Vec::with_capacity(counts.records());
    for _ in 0..counts.records() {
        let (ttl_offset, next) = skip_record(octets, cursor)?;
        ttl_offsets.push(ttl_offset);
        cursor = next;
    }

    if cursor < octets.len() {
        trace!("{} octets follow the last record.", octets.len() - cursor);
    }
    Ok(ttl_offsets)
}

/// Skips the question at `cursor`.
fn skip_question(octets: &[u8], cursor: usize) -> Result<usize> {
    let cursor = skip_name(octets, cursor)?;
    skip(octets, cursor, QUESTION_FIELDS_LEN, Field::QuestionFields)
}

/// Skips the resource record at `cursor`. Returns the offset of its TTL
/// field and the cursor just past the record.
fn skip_record(octets: &[u8], cursor: usize) -> Result<(usize, usize)> {
    let owner_end = skip_name(octets, cursor)?;
    let (rr_type, _) = read_u16(octets, owner_end, Field::RecordFields)?;
    let ttl_offset = skip(octets, owner_end, RECORD_FIELDS_LEN, Field::RecordFields)?;
    if rr_type == TYPE_OPT {
        debug!(
            "The OPT record at offset {} has its extended RCODE and flags at {}; \
             they will be ignored like a TTL.",
            cursor, ttl_offset,
        );
    }
    let (ttl, ttl_end) = read_u32(octets, ttl_offset, Field::Ttl)?;
    trace!("The record at offset {} has a TTL of {}.", cursor, ttl);
    let (rdlength, cursor) = read_u16(octets, ttl_end, Field::Rdlength)?;
    let cursor = skip(octets, cursor, rdlength as usize, Field::Rdata)?;
    Ok((ttl_offset, cursor))
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::super::Error;
    use super::*;
    use crate::test_messages::*;

    #[test]
    fn counts_are_read_from_header() {
        assert_eq!(
            Counts::read(EXAMPLE_COM_NS_MESSAGE),
            Ok(Counts {
                qdcount: 1,
                ancount: 2,
                nscount: 0,
                arcount: 1,
            })
        );
    }

    #[test]
    fn record_total_does_not_overflow() {
        let counts = Counts {
            qdcount: 0,
            ancount: u16::MAX,
            nscount: u16::MAX,
            arcount: u16::MAX,
        };
        assert_eq!(counts.records(), 3 * u16::MAX as usize);
    }

    #[test]
    fn walk_finds_single_answer_ttl() {
        let offsets = walk(EXAMPLE_COM_A_MESSAGE).unwrap();
        assert_eq!(offsets, vec![EXAMPLE_COM_A_TTL_OFFSET]);
        assert_eq!(&EXAMPLE_COM_A_MESSAGE[46..50], &300u32.to_be_bytes());
    }

    #[test]
    fn walk_handles_compressed_names_and_opt() {
        let offsets = walk(EXAMPLE_COM_NS_MESSAGE).unwrap();
        assert_eq!(offsets, EXAMPLE_COM_NS_TTL_OFFSETS);
        assert_eq!(&EXAMPLE_COM_NS_MESSAGE[35..39], b"\x00\x01\x50\xa2");
        assert_eq!(&EXAMPLE_COM_NS_MESSAGE[67..71], b"\x00\x01\x50\xa2");
        assert_eq!(&EXAMPLE_COM_NS_MESSAGE[82..86], b"\x00\x00\x00\x00");
    }

    #[test]
    fn walk_of_header_only_message_is_empty() {
        assert_eq!(walk(&[0; HEADER_SIZE]), Ok(Vec::new()));
    }

    #[test]
    fn walk_ignores_trailing_octets() {
        let mut message = EXAMPLE_COM_A_MESSAGE.to_vec();
        message.extend_from_slice(b"junk");
        assert_eq!(walk(&message), Ok(vec![46]));
    }

    #[test]
    fn walk_accepts_nonsensical_types() {
        let message = b"\x00\x00\x00\x00\x00\x00\x00\x01\x00\x00\x00\x00\
                        \x00\xff\xff\xff\xff\x00\x00\x00\x00\x00\x00";
        assert_eq!(walk(message), Ok(vec![17]));
    }

    #[test]
    fn walk_rejects_short_header() {
        for len in 0..HEADER_SIZE {
            assert_eq!(
                walk(&EXAMPLE_COM_A_MESSAGE[..len]),
                Err(Error::Truncated {
                    field: Field::Header,
                    offset: 0
                })
            );
        }
    }

    #[test]
    fn walk_rejects_truncated_ttl() {
        assert_eq!(
            walk(&EXAMPLE_COM_A_MESSAGE[..EXAMPLE_COM_A_TTL_OFFSET + 3]),
            Err(Error::Truncated {
                field: Field::Ttl,
                offset: EXAMPLE_COM_A_TTL_OFFSET
            })
        );
    }

    #[test]
    fn walk_rejects_truncated_rdata() {
        let len = EXAMPLE_COM_A_MESSAGE.len();
        assert_eq!(
            walk(&EXAMPLE_COM_A_MESSAGE[..len - 1]),
            Err(Error::Truncated {
                field: Field::Rdata,
                offset: 52
            })
        );
    }

    #[test]
    fn walk_rejects_every_truncation() {
        // Cutting the message anywhere inside its records must fail;
        // there is no point at which a prefix is itself a complete
        // message with the same counts.
        for len in HEADER_SIZE..EXAMPLE_COM_NS_MESSAGE.len() {
            assert!(
                matches!(
                    walk(&EXAMPLE_COM_NS_MESSAGE[..len]),
                    Err(Error::Truncated { .. })
                ),
                "prefix of length {} was accepted",
                len
            );
        }
    }

    #[test]
    fn walk_rejects_missing_records() {
        // The header claims two answers but only one is present.
        let mut message = EXAMPLE_COM_A_MESSAGE.to_vec();
        message[7] = 2;
        assert_eq!(
            walk(&message),
            Err(Error::Truncated {
                field: Field::LabelLength,
                offset: message.len()
            })
        );
    }
}
