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

//! Constants related to DNS messages.

pub const HEADER_SIZE: usize = 12;
pub const QDCOUNT_START: usize = 4;
pub const ANCOUNT_START: usize = 6;
pub const NSCOUNT_START: usize = 8;
pub const ARCOUNT_START: usize = 10;

/// The length of QTYPE plus QCLASS in a question.
pub const QUESTION_FIELDS_LEN: usize = 4;

/// The length of TYPE plus CLASS in a resource record.
pub const RECORD_FIELDS_LEN: usize = 4;

/// The length of the TTL field of a resource record.
pub const TTL_LEN: usize = 4;

pub const MAX_LABEL_LEN: u8 = 63;

/// The RR type of the EDNS OPT pseudo-record (RFC 6891).
pub const TYPE_OPT: u16 = 41;
