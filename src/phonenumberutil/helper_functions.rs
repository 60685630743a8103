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

use std::collections::HashMap;

use fast_cat::concat_str;

use super::enums::{PhoneNumberFormat, PhoneNumberType};
use crate::model::{PhoneMetadata, PhoneNumber, PhoneNumberDesc};

/// A helper function that is used by format and format_by_pattern.
pub fn prefix_number_with_country_calling_code(
    country_code: i32,
    number_format: PhoneNumberFormat,
    formatted_number: &mut String,
) {
    let mut buffer = itoa::Buffer::new();
    let country_code = buffer.format(country_code);
    let prefixed = match number_format {
        PhoneNumberFormat::E164 => concat_str!("+", country_code, formatted_number.as_str()),
        PhoneNumberFormat::International => {
            concat_str!("+", country_code, " ", formatted_number.as_str())
        }
        PhoneNumberFormat::RFC3966 => {
            concat_str!("+", country_code, "-", formatted_number.as_str())
        }
        PhoneNumberFormat::National => return,
    };
    *formatted_number = prefixed;
}

/// Rewrites `number` character by character through the replacement table.
/// Characters missing from the table are dropped when `remove_non_matches`
/// is set and kept verbatim otherwise. Lookup upper-cases the character
/// first so that both cases of a letter share one table entry.
pub fn normalize_helper(
    number: &str,
    replacements: &HashMap<char, char>,
    remove_non_matches: bool,
) -> String {
    let mut normalized = String::with_capacity(number.len());
    for character in number.chars() {
        if let Some(replacement) = replacements.get(&character.to_ascii_uppercase()) {
            normalized.push(*replacement);
        } else if !remove_non_matches {
            normalized.push(character);
        }
    }
    normalized
}

pub fn get_number_desc_by_type(
    metadata: &PhoneMetadata,
    number_type: PhoneNumberType,
) -> &PhoneNumberDesc {
    match number_type {
        PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile => &metadata.fixed_line,
        PhoneNumberType::Mobile => &metadata.mobile,
        PhoneNumberType::TollFree => &metadata.toll_free,
        PhoneNumberType::PremiumRate => &metadata.premium_rate,
        PhoneNumberType::SharedCost => &metadata.shared_cost,
        PhoneNumberType::Voip => &metadata.voip,
        PhoneNumberType::PersonalNumber => &metadata.personal_number,
        PhoneNumberType::Pager => &metadata.pager,
        PhoneNumberType::Uan => &metadata.uan,
        PhoneNumberType::Unknown => &metadata.general_desc,
    }
}

pub fn is_national_number_suffix_of_the_other(first: &PhoneNumber, second: &PhoneNumber) -> bool {
    let mut first_buffer = itoa::Buffer::new();
    let mut second_buffer = itoa::Buffer::new();
    let first_number = first_buffer.format(first.national_number());
    let second_number = second_buffer.format(second.national_number());
    // Note that ends_with returns true if the two numbers are equal.
    first_number.ends_with(second_number) || second_number.ends_with(first_number)
}

/// Copies the fields that matter for the comparison of two numbers,
/// leaving behind raw input, the country code source and the preferred
/// carrier code. An empty extension counts as no extension.
pub fn copy_core_fields_only(number: &PhoneNumber) -> PhoneNumber {
    let mut copy = PhoneNumber::new();
    copy.set_country_code(number.country_code());
    copy.set_national_number(number.national_number());
    if !number.extension().is_empty() {
        copy.set_extension(number.extension().to_owned());
    }
    if number.has_italian_leading_zero() {
        copy.set_italian_leading_zero(number.italian_leading_zero());
    }
    copy
}
