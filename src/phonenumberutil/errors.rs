// Copyright (C) 2009 The Libphonenumber Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::error;
use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Errors returned by the parsing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The number did not start with a plus sign and could not be matched
    /// against the metadata of a valid default region.
    #[error("Could not interpret numbers after plus-sign.")]
    InvalidCountryCode,
    /// The string supplied did not seem to be a phone number at all.
    #[error("The string supplied did not seem to be a phone number.")]
    NotANumber,
    /// After stripping an international direct dialing prefix there were
    /// too few digits left for the number to contain a country code.
    #[error("Phone number had an IDD, but after this was not long enough to be a viable phone number.")]
    TooShortAfterIdd,
    #[error("The string supplied is too short to be a phone number.")]
    TooShortNsn,
    #[error("The string supplied is too long to be a phone number.")]
    TooLong,
}

/// Reasons a number fails the possible-number check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The number has a country calling code we do not recognize.
    #[error("Phone number had an invalid country calling code.")]
    InvalidCountryCode,
    #[error("Phone number is too short.")]
    TooShort,
    #[error("Phone number is too long.")]
    TooLong,
}

/// Internal parsing error that still carries regex failures. Regexes come
/// from the bundled metadata, so a compile failure is a library defect and
/// must never leak into the public error type.
#[derive(Debug, Error)]
pub(crate) enum ParseErrorInternal {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Regex(#[from] InvalidRegexError),
}

impl ParseErrorInternal {
    pub fn into_public(self) -> ParseError {
        match self {
            Self::Parse(err) => err,
            Self::Regex(err) => {
                error!("{err}");
                panic!("A valid regex is expected in metadata; this indicates a library bug!")
            }
        }
    }
}

/// Strips the regex-error branch off internal results at the public API
/// boundary. Every metadata pattern is compiled at load time, so this can
/// only panic when the library itself ships a broken pattern.
pub(crate) fn expect_metadata_regex<T>(result: Result<T, InvalidRegexError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            error!("{err}");
            panic!("A valid regex is expected in metadata; this indicates a library bug!")
        }
    }
}
