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

//! Validators, which decide whether an actual message matches an
//! expected one.
//!
//! A replay tool compares each message it receives against the one in
//! its capture. Byte-for-byte equality ([`ExactValidator`]) is the
//! right test for most protocols, but DNS responses carry TTLs that
//! count down between the capture and the replay, so for DNS the
//! [`DnsValidator`] is used instead.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::compare::{compare, Mismatch, Segment, Verdict};
use crate::message::{self, walk};
use crate::util::Caseless;

////////////////////////////////////////////////////////////////////////
// VALIDATOR TRAIT                                                    //
////////////////////////////////////////////////////////////////////////

/// A test of whether `actual` is equivalent to `expected`.
///
/// Validators hold no state between calls, so one validator may be
/// shared among any number of threads.
pub trait Validator: Send + Sync {
    /// Returns a short name for the validator, for logging.
    fn name(&self) -> &'static str;

    /// Compares the two messages. An error means that `expected` could
    /// not be understood; a difference between the messages is not an
    /// error, and is reported through the [`Verdict`].
    fn validate<'a>(
        &self,
        expected: &'a [u8],
        actual: &'a [u8],
    ) -> Result<Verdict<'a>, message::Error>;
}

/// A [`Validator`] requiring the messages to be identical.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactValidator;

impl Validator for ExactValidator {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn validate<'a>(
        &self,
        expected: &'a [u8],
        actual: &'a [u8],
    ) -> Result<Verdict<'a>, message::Error> {
        if expected == actual {
            Ok(Verdict::Equivalent)
        } else {
            let mismatch = Mismatch {
                segment: Segment {
                    start: 0,
                    end: expected.len(),
                },
                expected,
                actual,
            };
            debug!("Messages are not identical: {}", mismatch);
            Ok(Verdict::Mismatch(mismatch))
        }
    }
}

/// A [`Validator`] for DNS messages that ignores the TTL of every
/// resource record.
///
/// The record structure is taken from `expected` alone, using
/// [`walk`]. This includes OPT records, whose TTL fields (which really
/// hold the extended RCODE and flags) are ignored too.
#[derive(Clone, Copy, Debug, Default)]
pub struct DnsValidator;

impl Validator for DnsValidator {
    fn name(&self) -> &'static str {
        "ignore-ttls"
    }

    fn validate<'a>(
        &self,
        expected: &'a [u8],
        actual: &'a [u8],
    ) -> Result<Verdict<'a>, message::Error> {
        let ttl_offsets = walk(expected)?;
        trace!(
            "Ignoring {} TTL fields at offsets {:?}.",
            ttl_offsets.len(),
            ttl_offsets
        );
        let verdict = compare(expected, actual, &ttl_offsets);
        if let Verdict::Mismatch(ref mismatch) = verdict {
            debug!("Messages differ outside of TTLs: {}", mismatch);
        }
        Ok(verdict)
    }
}

////////////////////////////////////////////////////////////////////////
// MODE SELECTION                                                     //
////////////////////////////////////////////////////////////////////////

/// A choice of [`Validator`], selectable by name.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Use the [`ExactValidator`].
    Exact,

    /// Use the [`DnsValidator`].
    #[default]
    IgnoreTtls,
}

impl Mode {
    /// Returns the validator for this mode.
    pub fn validator(self) -> Box<dyn Validator> {
        match self {
            Self::Exact => Box::new(ExactValidator),
            Self::IgnoreTtls => Box::new(DnsValidator),
        }
    }
}

impl FromStr for Mode {
    type Err = &'static str;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = Caseless(text);
        if text == Caseless("exact") {
            Ok(Self::Exact)
        } else if text == Caseless("ignore-ttls") {
            Ok(Self::IgnoreTtls)
        } else {
            Err("unknown mode (expected exact or ignore-ttls)")
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Exact => f.write_str("exact"),
            Self::IgnoreTtls => f.write_str("ignore-ttls"),
        }
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                              //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Field;
    use crate::test_messages::*;

    fn with_new_ttl(message: &[u8], ttl_offset: usize, ttl: u32) -> Vec<u8> {
        let mut changed = message.to_vec();
        changed[ttl_offset..ttl_offset + 4].copy_from_slice(&ttl.to_be_bytes());
        changed
    }

    #[test]
    fn exact_validator_rejects_ttl_changes() {
        let actual = with_new_ttl(EXAMPLE_COM_A_MESSAGE, EXAMPLE_COM_A_TTL_OFFSET, 299);
        assert!(ExactValidator
            .validate(EXAMPLE_COM_A_MESSAGE, EXAMPLE_COM_A_MESSAGE)
            .unwrap()
            .is_equivalent());
        let verdict = ExactValidator
            .validate(EXAMPLE_COM_A_MESSAGE, &actual)
            .unwrap();
        assert_eq!(
            verdict.mismatch().map(|m| m.segment),
            Some(Segment {
                start: 0,
                end: EXAMPLE_COM_A_MESSAGE.len()
            })
        );
    }

    #[test]
    fn exact_validator_accepts_anything_identical() {
        assert!(ExactValidator.validate(b"", b"").unwrap().is_equivalent());
        assert!(ExactValidator
            .validate(b"not dns", b"not dns")
            .unwrap()
            .is_equivalent());
    }

    #[test]
    fn dns_validator_accepts_ttl_changes() {
        let actual = with_new_ttl(EXAMPLE_COM_A_MESSAGE, EXAMPLE_COM_A_TTL_OFFSET, 299);
        assert!(DnsValidator
            .validate(EXAMPLE_COM_A_MESSAGE, &actual)
            .unwrap()
            .is_equivalent());
    }

    #[test]
    fn dns_validator_ignores_opt_extended_flags() {
        // Setting the DO bit in the OPT record goes unnoticed.
        let mut actual = EXAMPLE_COM_NS_MESSAGE.to_vec();
        actual[EXAMPLE_COM_NS_TTL_OFFSETS[2] + 2] = 0x80;
        assert!(DnsValidator
            .validate(EXAMPLE_COM_NS_MESSAGE, &actual)
            .unwrap()
            .is_equivalent());
    }

    #[test]
    fn dns_validator_reports_truncated_expected() {
        let expected = &EXAMPLE_COM_A_MESSAGE[..EXAMPLE_COM_A_MESSAGE.len() - 2];
        assert_eq!(
            DnsValidator.validate(expected, EXAMPLE_COM_A_MESSAGE),
            Err(message::Error::Truncated {
                field: Field::Rdata,
                offset: 52
            })
        );
    }

    #[test]
    fn dns_validator_does_not_walk_actual() {
        // A truncated actual message is a mismatch, not an error.
        let actual = &EXAMPLE_COM_A_MESSAGE[..30];
        let verdict = DnsValidator
            .validate(EXAMPLE_COM_A_MESSAGE, actual)
            .unwrap();
        assert!(!verdict.is_equivalent());
    }

    #[test]
    fn compare_ignoring_ttls_matches_dns_validator() {
        let actual = with_new_ttl(EXAMPLE_COM_NS_MESSAGE, EXAMPLE_COM_NS_TTL_OFFSETS[0], 1);
        assert!(crate::compare_ignoring_ttls(EXAMPLE_COM_NS_MESSAGE, &actual)
            .unwrap()
            .is_equivalent());
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("exact".parse(), Ok(Mode::Exact));
        assert_eq!("EXACT".parse(), Ok(Mode::Exact));
        assert_eq!("Ignore-TTLs".parse(), Ok(Mode::IgnoreTtls));
        assert!("ignore".parse::<Mode>().is_err());
    }

    #[test]
    fn mode_display_round_trips_and_names_validator() {
        for mode in [Mode::Exact, Mode::IgnoreTtls] {
            assert_eq!(mode.to_string().parse(), Ok(mode));
            assert_eq!(mode.validator().name(), mode.to_string());
        }
    }

    #[test]
    fn default_mode_ignores_ttls() {
        assert_eq!(Mode::default(), Mode::IgnoreTtls);
    }
}
