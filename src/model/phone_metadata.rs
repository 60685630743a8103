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

/// A single formatting rule of a numbering plan.
///
/// `pattern` is matched against the whole national significant number;
/// `format` is the replacement template with `$1`-style back references.
/// `leading_digits_pattern` gates applicability: rules are scanned in order
/// and the last entry of the list is the most specific one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberFormat {
    pub pattern: String,
    pub format: String,
    pub leading_digits_pattern: Vec<String>,
    pub national_prefix_formatting_rule: Option<String>,
    pub domestic_carrier_code_formatting_rule: Option<String>,
}

impl NumberFormat {
    pub fn new(pattern: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            format: format.into(),
            ..Default::default()
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn has_national_prefix_formatting_rule(&self) -> bool {
        self.national_prefix_formatting_rule.is_some()
    }

    pub fn national_prefix_formatting_rule(&self) -> &str {
        self.national_prefix_formatting_rule
            .as_deref()
            .unwrap_or_default()
    }

    pub fn has_domestic_carrier_code_formatting_rule(&self) -> bool {
        self.domestic_carrier_code_formatting_rule.is_some()
    }

    pub fn domestic_carrier_code_formatting_rule(&self) -> &str {
        self.domestic_carrier_code_formatting_rule
            .as_deref()
            .unwrap_or_default()
    }
}

/// Validation data for one service type within a region.
///
/// An absent field means the type inherits from the general description (or
/// that no numbers of the type exist when the whole desc is absent).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumberDesc {
    pub national_number_pattern: Option<String>,
    pub possible_number_pattern: Option<String>,
    pub example_number: Option<String>,
}

impl PhoneNumberDesc {
    pub fn has_national_number_pattern(&self) -> bool {
        self.national_number_pattern.is_some()
    }

    pub fn national_number_pattern(&self) -> &str {
        self.national_number_pattern.as_deref().unwrap_or_default()
    }

    pub fn has_possible_number_pattern(&self) -> bool {
        self.possible_number_pattern.is_some()
    }

    pub fn possible_number_pattern(&self) -> &str {
        self.possible_number_pattern.as_deref().unwrap_or_default()
    }

    pub fn has_example_number(&self) -> bool {
        self.example_number.is_some()
    }

    pub fn example_number(&self) -> &str {
        self.example_number.as_deref().unwrap_or_default()
    }
}

/// The numbering plan of one region, immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneMetadata {
    /// ISO 3166-1 two-letter region code, or "001" for non-geographical
    /// entities.
    pub id: String,
    pub country_code: i32,
    pub international_prefix: Option<String>,
    pub preferred_international_prefix: Option<String>,
    pub national_prefix: Option<String>,
    pub national_prefix_for_parsing: Option<String>,
    pub national_prefix_transform_rule: Option<String>,
    pub preferred_extn_prefix: Option<String>,
    /// Disambiguates regions sharing a country calling code.
    pub leading_digits: Option<String>,
    pub leading_zero_possible: bool,
    pub same_mobile_and_fixed_line_pattern: bool,
    pub main_country_for_code: bool,
    pub number_format: Vec<NumberFormat>,
    /// When non-empty, used instead of `number_format` for every target
    /// format except NATIONAL.
    pub intl_number_format: Vec<NumberFormat>,
    pub general_desc: PhoneNumberDesc,
    pub fixed_line: PhoneNumberDesc,
    pub mobile: PhoneNumberDesc,
    pub toll_free: PhoneNumberDesc,
    pub premium_rate: PhoneNumberDesc,
    pub shared_cost: PhoneNumberDesc,
    pub voip: PhoneNumberDesc,
    pub personal_number: PhoneNumberDesc,
    pub pager: PhoneNumberDesc,
    pub uan: PhoneNumberDesc,
    pub no_international_dialling: PhoneNumberDesc,
}

impl PhoneMetadata {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn has_international_prefix(&self) -> bool {
        self.international_prefix.is_some()
    }

    pub fn international_prefix(&self) -> &str {
        self.international_prefix.as_deref().unwrap_or_default()
    }

    pub fn has_preferred_international_prefix(&self) -> bool {
        self.preferred_international_prefix.is_some()
    }

    pub fn preferred_international_prefix(&self) -> &str {
        self.preferred_international_prefix
            .as_deref()
            .unwrap_or_default()
    }

    pub fn has_national_prefix(&self) -> bool {
        self.national_prefix.is_some()
    }

    pub fn national_prefix(&self) -> &str {
        self.national_prefix.as_deref().unwrap_or_default()
    }

    pub fn has_national_prefix_for_parsing(&self) -> bool {
        self.national_prefix_for_parsing.is_some()
    }

    pub fn national_prefix_for_parsing(&self) -> &str {
        self.national_prefix_for_parsing
            .as_deref()
            .unwrap_or_default()
    }

    pub fn has_national_prefix_transform_rule(&self) -> bool {
        self.national_prefix_transform_rule.is_some()
    }

    pub fn national_prefix_transform_rule(&self) -> &str {
        self.national_prefix_transform_rule
            .as_deref()
            .unwrap_or_default()
    }

    pub fn has_preferred_extn_prefix(&self) -> bool {
        self.preferred_extn_prefix.is_some()
    }

    pub fn preferred_extn_prefix(&self) -> &str {
        self.preferred_extn_prefix.as_deref().unwrap_or_default()
    }

    pub fn has_leading_digits(&self) -> bool {
        self.leading_digits.is_some()
    }

    pub fn leading_digits(&self) -> &str {
        self.leading_digits.as_deref().unwrap_or_default()
    }

    pub fn leading_zero_possible(&self) -> bool {
        self.leading_zero_possible
    }

    pub fn same_mobile_and_fixed_line_pattern(&self) -> bool {
        self.same_mobile_and_fixed_line_pattern
    }

    pub fn main_country_for_code(&self) -> bool {
        self.main_country_for_code
    }
}
