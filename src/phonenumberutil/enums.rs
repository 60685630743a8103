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

use strum::EnumIter;

/// INTERNATIONAL and NATIONAL formats are consistent with the definition
/// in ITU-T Recommendation E.123. For example, the number of the Google
/// Switzerland office will be written as "+41 44 668 1800" in
/// INTERNATIONAL format, and as "044 668 1800" in NATIONAL format. E164
/// format is as per INTERNATIONAL format but with no formatting applied,
/// e.g. "+41446681800". RFC3966 keeps the international grouping but joins
/// the groups with hyphens, e.g. "+41-44-668-1800".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    E164,
    International,
    National,
    RFC3966,
}

/// Type of phone numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PhoneNumberType {
    FixedLine,
    Mobile,
    /// In some regions (e.g. the USA), it is impossible to distinguish
    /// between fixed-line and mobile numbers by looking at the phone
    /// number itself.
    FixedLineOrMobile,
    /// Freephone lines.
    TollFree,
    PremiumRate,
    /// The cost of this call is shared between the caller and the
    /// recipient, and is hence typically less than PREMIUM_RATE calls.
    SharedCost,
    /// Voice over IP numbers. This includes TSoIP (Telephony Service over
    /// IP).
    Voip,
    /// A personal number is associated with a particular person, and may
    /// be routed to either a MOBILE or FIXED_LINE number.
    PersonalNumber,
    Pager,
    /// Used for "Universal Access Numbers" or "Company Numbers". They may
    /// be further routed to specific offices, but allow one number to be
    /// used for a company.
    Uan,
    /// A phone number is of type UNKNOWN when it does not fit any of the
    /// known patterns for a specific region.
    Unknown,
}

/// Types of phone number matches. See detailed description beside the
/// `is_number_match` method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    NotANumber,
    NoMatch,
    ShortNsnMatch,
    NsnMatch,
    ExactMatch,
}
