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

/// Records how the country calling code of a parsed number was determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CountryCodeSource {
    /// The country code was not recorded (plain `parse`, or the field was
    /// cleared before comparison).
    #[default]
    Unspecified,
    /// The number began with one or more plus signs.
    FromNumberWithPlusSign,
    /// The number began with the calling region's international dialing prefix.
    FromNumberWithIdd,
    /// The number began with the bare country calling code digits.
    FromNumberWithoutPlusSign,
    /// The country code was taken from the supplied default region.
    FromDefaultCountry,
}

/// A parsed phone number. A value type compared structurally; instances are
/// created per `parse` call and never shared mutably.
///
/// `national_number` holds the national significant number as an integer, so
/// it never encodes leading zeros directly; `italian_leading_zero` marks a
/// significant leading zero for the regions where one is possible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    pub country_code: i32,
    pub national_number: u64,
    pub extension: Option<String>,
    pub italian_leading_zero: Option<bool>,
    pub raw_input: Option<String>,
    pub country_code_source: CountryCodeSource,
    pub preferred_domestic_carrier_code: Option<String>,
}

impl PhoneNumber {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn set_country_code(&mut self, country_code: i32) {
        self.country_code = country_code;
    }

    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    pub fn set_national_number(&mut self, national_number: u64) {
        self.national_number = national_number;
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or_default()
    }

    pub fn set_extension(&mut self, extension: String) {
        self.extension = Some(extension);
    }

    pub fn clear_extension(&mut self) {
        self.extension = None;
    }

    pub fn has_italian_leading_zero(&self) -> bool {
        self.italian_leading_zero.is_some()
    }

    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero.unwrap_or_default()
    }

    pub fn set_italian_leading_zero(&mut self, italian_leading_zero: bool) {
        self.italian_leading_zero = Some(italian_leading_zero);
    }

    pub fn has_raw_input(&self) -> bool {
        self.raw_input.is_some()
    }

    pub fn raw_input(&self) -> &str {
        self.raw_input.as_deref().unwrap_or_default()
    }

    pub fn set_raw_input(&mut self, raw_input: String) {
        self.raw_input = Some(raw_input);
    }

    pub fn clear_raw_input(&mut self) {
        self.raw_input = None;
    }

    pub fn country_code_source(&self) -> CountryCodeSource {
        self.country_code_source
    }

    pub fn set_country_code_source(&mut self, country_code_source: CountryCodeSource) {
        self.country_code_source = country_code_source;
    }

    pub fn clear_country_code_source(&mut self) {
        self.country_code_source = CountryCodeSource::Unspecified;
    }

    pub fn has_preferred_domestic_carrier_code(&self) -> bool {
        self.preferred_domestic_carrier_code.is_some()
    }

    pub fn preferred_domestic_carrier_code(&self) -> &str {
        self.preferred_domestic_carrier_code
            .as_deref()
            .unwrap_or_default()
    }

    pub fn set_preferred_domestic_carrier_code(&mut self, carrier_code: String) {
        self.preferred_domestic_carrier_code = Some(carrier_code);
    }

    pub fn clear_preferred_domestic_carrier_code(&mut self) {
        self.preferred_domestic_carrier_code = None;
    }

    pub fn clear(&mut self) {
        *self = Default::default();
    }
}
