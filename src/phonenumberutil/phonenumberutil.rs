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

use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use fast_cat::concat_str;
use log::{error, trace, warn};
use regex::Regex;

use super::{
    enums::{MatchType, PhoneNumberFormat, PhoneNumberType},
    errors::{expect_metadata_regex, ParseError, ParseErrorInternal, ValidationError},
    helper_constants::{
        DEFAULT_EXTN_PREFIX, MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN,
        NANPA_COUNTRY_CODE, PLUS_SIGN, REGION_CODE_FOR_NON_GEO_ENTITY, RFC3966_EXTN_PREFIX,
    },
    helper_functions::{
        copy_core_fields_only, get_number_desc_by_type, is_national_number_suffix_of_the_other,
        normalize_helper, prefix_number_with_country_calling_code,
    },
    helper_types::PhoneNumberWithCountryCodeSource,
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
};
use crate::{
    i18n::region_code::RegionCode,
    interfaces::MatcherApi,
    metadata,
    model::{CountryCodeSource, NumberFormat, PhoneMetadata, PhoneNumber, PhoneNumberDesc},
    regex_based_matcher::RegexBasedMatcher,
    regex_util::{RegexConsume, RegexFullMatch},
    regexp_cache::InvalidRegexError,
};

/// The shared ready-to-use instance, created lazily on first access.
pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(PhoneNumberUtil::new);

/// Parsing, formatting, validation and comparison of international phone
/// numbers, driven by the numbering plan metadata bundled with the
/// library.
pub struct PhoneNumberUtil {
    matcher_api: Box<dyn MatcherApi>,
    reg_exps: PhoneNumberRegExpsAndMappings,

    /// Maps a country calling code to the region codes it serves, the
    /// main country first. Sorted by calling code for binary search.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,
    nanpa_regions: HashSet<String>,
    region_to_metadata_map: HashMap<String, PhoneMetadata>,
    /// Numbering plans of non-geographical entities, keyed by their
    /// country calling code since they share the region code "001".
    country_code_to_non_geographical_metadata_map: HashMap<i32, PhoneMetadata>,
}

impl Default for PhoneNumberUtil {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneNumberUtil {
    pub fn new() -> Self {
        let mut country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)> = Vec::new();
        let mut region_to_metadata_map = HashMap::new();
        let mut country_code_to_non_geographical_metadata_map = HashMap::new();
        for region_metadata in metadata::load_metadata() {
            let country_code = region_metadata.country_code();
            let region_code = region_metadata.id().to_owned();
            let index = match country_calling_code_to_region_code_map
                .binary_search_by_key(&country_code, |(code, _)| *code)
            {
                Ok(index) => index,
                Err(index) => {
                    country_calling_code_to_region_code_map
                        .insert(index, (country_code, Vec::new()));
                    index
                }
            };
            let region_codes = &mut country_calling_code_to_region_code_map[index].1;
            if region_metadata.main_country_for_code() {
                region_codes.insert(0, region_code.clone());
            } else {
                region_codes.push(region_code.clone());
            }
            if region_code == REGION_CODE_FOR_NON_GEO_ENTITY {
                country_code_to_non_geographical_metadata_map.insert(country_code, region_metadata);
            } else {
                region_to_metadata_map.insert(region_code, region_metadata);
            }
        }
        let nanpa_regions = country_calling_code_to_region_code_map
            .binary_search_by_key(&NANPA_COUNTRY_CODE, |(code, _)| *code)
            .ok()
            .map(|index| {
                country_calling_code_to_region_code_map[index]
                    .1
                    .iter()
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        let util = Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            reg_exps: PhoneNumberRegExpsAndMappings::new(),
            country_calling_code_to_region_code_map,
            nanpa_regions,
            region_to_metadata_map,
            country_code_to_non_geographical_metadata_map,
        };
        if let Err(err) = util.compile_metadata_patterns() {
            error!("{err}");
            panic!("A valid regex is expected in metadata; this indicates a library bug!");
        }
        util
    }

    /// Warms the regex cache with every pattern the bundled numbering
    /// plans carry, so a metadata defect surfaces at load time rather
    /// than in the middle of a parse.
    fn compile_metadata_patterns(&self) -> Result<(), InvalidRegexError> {
        let all_metadata = self
            .region_to_metadata_map
            .values()
            .chain(self.country_code_to_non_geographical_metadata_map.values());
        for region_metadata in all_metadata {
            let descs = [
                &region_metadata.general_desc,
                &region_metadata.fixed_line,
                &region_metadata.mobile,
                &region_metadata.toll_free,
                &region_metadata.premium_rate,
                &region_metadata.shared_cost,
                &region_metadata.voip,
                &region_metadata.personal_number,
                &region_metadata.pager,
                &region_metadata.uan,
                &region_metadata.no_international_dialling,
            ];
            for desc in descs {
                if desc.has_national_number_pattern() {
                    self.reg_exps
                        .regexp_cache
                        .get_regex(desc.national_number_pattern())?;
                }
                if desc.has_possible_number_pattern() {
                    self.reg_exps
                        .regexp_cache
                        .get_regex(desc.possible_number_pattern())?;
                }
            }
            if region_metadata.has_international_prefix() {
                self.reg_exps
                    .regexp_cache
                    .get_regex(region_metadata.international_prefix())?;
            }
            if region_metadata.has_national_prefix_for_parsing() {
                self.reg_exps
                    .regexp_cache
                    .get_regex(region_metadata.national_prefix_for_parsing())?;
            }
            if region_metadata.has_leading_digits() {
                self.reg_exps
                    .regexp_cache
                    .get_regex(region_metadata.leading_digits())?;
            }
            for format in region_metadata
                .number_format
                .iter()
                .chain(region_metadata.intl_number_format.iter())
            {
                self.reg_exps.regexp_cache.get_regex(format.pattern())?;
                for leading_digits in &format.leading_digits_pattern {
                    self.reg_exps.regexp_cache.get_regex(leading_digits)?;
                }
            }
        }
        Ok(())
    }

    fn region_codes_for_country_calling_code(&self, country_code: i32) -> Option<&[String]> {
        let index = self
            .country_calling_code_to_region_code_map
            .binary_search_by_key(&country_code, |(code, _)| *code)
            .ok()?;
        Some(&self.country_calling_code_to_region_code_map[index].1)
    }

    fn get_metadata_for_region(&self, region_code: &str) -> Option<&PhoneMetadata> {
        self.region_to_metadata_map.get(region_code)
    }

    fn get_metadata_for_non_geographical_region(&self, country_code: i32) -> Option<&PhoneMetadata> {
        self.country_code_to_non_geographical_metadata_map
            .get(&country_code)
    }

    fn get_metadata_for_region_or_calling_code(
        &self,
        country_code: i32,
        region_code: &str,
    ) -> Option<&PhoneMetadata> {
        if region_code == REGION_CODE_FOR_NON_GEO_ENTITY {
            self.get_metadata_for_non_geographical_region(country_code)
        } else {
            self.get_metadata_for_region(region_code)
        }
    }

    fn is_valid_region_code(&self, region_code: &str) -> bool {
        self.region_to_metadata_map.contains_key(region_code)
    }

    /// Returns the region codes the library has a numbering plan for.
    pub fn get_supported_regions(&self) -> impl Iterator<Item = &str> {
        self.region_to_metadata_map.keys().map(String::as_str)
    }

    /// Returns the country calling code for a region, or 0 if the region
    /// code is invalid.
    pub fn get_country_code_for_region(&self, region_code: &str) -> i32 {
        self.get_metadata_for_region(region_code)
            .map_or(0, PhoneMetadata::country_code)
    }

    /// Returns the main region a country calling code belongs to, or
    /// "ZZ" if the code is not in use.
    pub fn get_region_code_for_country_code(&self, country_code: i32) -> &str {
        match self
            .region_codes_for_country_calling_code(country_code)
            .and_then(|region_codes| region_codes.first())
        {
            Some(main_region) => main_region.as_str(),
            None => RegionCode::get_unknown(),
        }
    }

    /// Checks if this region is one of those sharing the North American
    /// Numbering Plan (country calling code 1).
    pub fn is_nanpa_country(&self, region_code: &str) -> bool {
        self.nanpa_regions.contains(region_code)
    }

    /// Returns the national dialling prefix for a region, e.g. "0" for
    /// the United Kingdom. Some prefixes contain "~", meaning a wait for
    /// dial tone; pass `strip_non_digits` to remove it.
    pub fn get_ndd_prefix_for_region(
        &self,
        region_code: &str,
        strip_non_digits: bool,
    ) -> Option<String> {
        let region_metadata = self.get_metadata_for_region(region_code)?;
        let national_prefix = region_metadata.national_prefix();
        if national_prefix.is_empty() {
            return None;
        }
        if strip_non_digits {
            // Note: if any other non-numeric symbols are ever used in
            // national prefixes, they would have to be removed here as
            // well.
            return Some(national_prefix.replace('~', ""));
        }
        Some(national_prefix.to_owned())
    }

    /// Normalizes a string of characters representing a phone number.
    /// When the number is a vanity number, keypad letters are converted
    /// to their digit equivalent; otherwise every non-digit is dropped.
    fn normalize(&self, number: &str) -> String {
        if self.reg_exps.valid_alpha_phone_pattern.full_match(number) {
            normalize_helper(number, &self.reg_exps.alpha_phone_mappings, true)
        } else {
            self.normalize_digits_only(number)
        }
    }

    /// Keeps the digits of the number, converting fullwidth and
    /// arabic-indic digits to their ASCII counterparts.
    pub fn normalize_digits_only(&self, number: &str) -> String {
        normalize_helper(number, &self.reg_exps.digit_mappings, true)
    }

    /// Converts keypad letters in a number to their digit equivalent,
    /// retaining all other characters, e.g. "1800 Flowers" becomes
    /// "1800 3569377".
    pub fn convert_alpha_characters_in_number(&self, number: &str) -> String {
        normalize_helper(number, &self.reg_exps.alpha_phone_mappings, false)
    }

    /// Attempts to extract a possible number from the string passed in:
    /// leading characters that cannot start a phone number are removed,
    /// as are trailing non-alphanumeric characters and a trailing second
    /// number.
    fn extract_possible_number<'a>(&self, number: &'a str) -> &'a str {
        let Some(start_match) = self.reg_exps.valid_start_char_pattern.find(number) else {
            return "";
        };
        let mut number = &number[start_match.start()..];
        // Remove trailing non-alpha non-numerical characters.
        if let Some(trailing_chars) = self.reg_exps.unwanted_end_char_pattern.find(number) {
            number = &number[..trailing_chars.start()];
        }
        // Check for extra numbers at the end.
        if let Some(second_number) = self.reg_exps.second_number_start_pattern.find(number) {
            number = &number[..second_number.start()];
        }
        number
    }

    /// Checks to see if a string could possibly be a phone number. This
    /// accepts grouping marks and vanity letters, but not e.g. emergency
    /// numbers, which are two digits long in many countries.
    pub fn is_viable_phone_number(&self, number: &str) -> bool {
        if number.chars().count() < MIN_LENGTH_FOR_NSN {
            return false;
        }
        self.reg_exps.valid_phone_number_pattern.full_match(number)
    }

    /// Checks if the number is a valid vanity number, such as
    /// "800 MICROSOFT". A valid vanity number has at least three keypad
    /// letters together with a viable phone number shape.
    pub fn is_alpha_number(&self, number: &str) -> bool {
        if !self.is_viable_phone_number(number) {
            // Number is too short, or doesn't match the basic phone
            // number pattern.
            return false;
        }
        let (_, number) = self.maybe_strip_extension(number);
        self.reg_exps.valid_alpha_phone_pattern.full_match(number)
    }

    /// Strips any international prefix (such as +, 00, 011) present in
    /// the number, normalizes the remainder, and reports how the prefix
    /// was written.
    fn maybe_strip_i18n_prefix_and_normalize<'a>(
        &self,
        number: &'a str,
        possible_idd_prefix: &str,
    ) -> Result<PhoneNumberWithCountryCodeSource<'a>, InvalidRegexError> {
        if number.is_empty() {
            return Ok(PhoneNumberWithCountryCodeSource::new(
                Cow::Borrowed(number),
                CountryCodeSource::FromDefaultCountry,
            ));
        }
        if let Some(plus_match) = self.reg_exps.plus_chars_pattern.find_start(number) {
            // Can now normalize the rest of the number since we've
            // consumed the "+" sign at the start.
            let remainder = &number[plus_match.end()..];
            return Ok(PhoneNumberWithCountryCodeSource::new(
                Cow::Owned(self.normalize(remainder)),
                CountryCodeSource::FromNumberWithPlusSign,
            ));
        }
        // Attempt to parse the first digits as an international prefix.
        let idd_pattern = self.reg_exps.regexp_cache.get_regex(possible_idd_prefix)?;
        if let Some(stripped) = self.parse_prefix_as_idd(&idd_pattern, number) {
            return Ok(PhoneNumberWithCountryCodeSource::new(
                Cow::Owned(self.normalize(stripped)),
                CountryCodeSource::FromNumberWithIdd,
            ));
        }
        // If still not found, try again on the normalized number.
        let normalized = self.normalize(number);
        if let Some(stripped) = self.parse_prefix_as_idd(&idd_pattern, &normalized) {
            return Ok(PhoneNumberWithCountryCodeSource::new(
                Cow::Owned(stripped.to_owned()),
                CountryCodeSource::FromNumberWithIdd,
            ));
        }
        Ok(PhoneNumberWithCountryCodeSource::new(
            Cow::Owned(normalized),
            CountryCodeSource::FromDefaultCountry,
        ))
    }

    /// Strips the IDD from the start of the number if present. The
    /// prefix is only accepted when the first digit after it could start
    /// a country calling code, i.e. is not a zero.
    fn parse_prefix_as_idd<'a>(&self, idd_pattern: &Regex, number: &'a str) -> Option<&'a str> {
        let idd_match = idd_pattern.find_start(number)?;
        let after_idd = &number[idd_match.end()..];
        if let Some(digit_match) = self
            .reg_exps
            .capturing_digit_pattern
            .captures(after_idd)
            .and_then(|captures| captures.get(1))
        {
            let normalized_group =
                normalize_helper(digit_match.as_str(), &self.reg_exps.digit_mappings, true);
            if normalized_group == "0" {
                return None;
            }
        }
        Some(after_idd)
    }

    /// Extracts a country calling code from the beginning of the
    /// normalized number, trying the one, two and three digit prefixes
    /// in turn. Returns 0 when no known calling code is found.
    fn extract_country_code<'a>(&self, number: &'a str) -> (i32, &'a str) {
        for length in 1..=MAX_LENGTH_COUNTRY_CODE.min(number.len()) {
            if let Ok(country_code) = number[..length].parse::<i32>() {
                if self
                    .region_codes_for_country_calling_code(country_code)
                    .is_some()
                {
                    return (country_code, &number[length..]);
                }
            }
        }
        (0, number)
    }

    /// Tries to extract a country calling code from a number, looking
    /// first for an international prefix or plus sign, then for the bare
    /// calling code of the default region. Returns the code found (0 for
    /// none) and the national number portion.
    fn maybe_extract_country_code(
        &self,
        number: &str,
        region_metadata: Option<&PhoneMetadata>,
        keep_raw_input: bool,
        phone_number: &mut PhoneNumber,
    ) -> Result<(i32, String), ParseErrorInternal> {
        if number.is_empty() {
            return Ok((0, String::new()));
        }
        // Set the default prefix to be something that will never match.
        let possible_idd_prefix = region_metadata
            .filter(|metadata| metadata.has_international_prefix())
            .map_or("NonMatch", |metadata| metadata.international_prefix());
        let stripped = self.maybe_strip_i18n_prefix_and_normalize(number, possible_idd_prefix)?;
        if keep_raw_input {
            phone_number.set_country_code_source(stripped.country_code_source);
        }
        let full_number = stripped.phone_number;
        if stripped.country_code_source != CountryCodeSource::FromDefaultCountry {
            if full_number.len() < MIN_LENGTH_FOR_NSN {
                trace!("Phone number had an IDD, but after this was not long enough to be a viable phone number.");
                return Err(ParseError::TooShortAfterIdd.into());
            }
            let (country_code, national_number) = self.extract_country_code(&full_number);
            if country_code != 0 {
                phone_number.set_country_code(country_code);
                return Ok((country_code, national_number.to_owned()));
            }
            // If this fails, they must be using a strange country
            // calling code that we don't recognize, or that doesn't
            // exist.
            return Err(ParseError::InvalidCountryCode.into());
        }
        if let Some(region_metadata) = region_metadata {
            // Check to see if the number starts with the country calling
            // code for the default region. If so, we remove the country
            // calling code, and do some checks on the validity of the
            // number before and after.
            let default_country_code = region_metadata.country_code();
            let mut buffer = itoa::Buffer::new();
            let default_country_code_str = buffer.format(default_country_code);
            if let Some(potential_national_number) =
                full_number.strip_prefix(default_country_code_str)
            {
                let potential_national_number = Cow::Borrowed(potential_national_number);
                let general_desc = &region_metadata.general_desc;
                let valid_number_pattern = self
                    .reg_exps
                    .regexp_cache
                    .get_regex(general_desc.national_number_pattern())?;
                let (_, potential_national_number) = self
                    .maybe_strip_national_prefix_and_carrier_code(
                        potential_national_number,
                        region_metadata,
                    )?;
                let possible_number_pattern = self
                    .reg_exps
                    .regexp_cache
                    .get_regex(general_desc.possible_number_pattern())?;
                // If the number was not valid before but is valid now,
                // or if it was too long before, we consider the number
                // with the country calling code stripped to be a better
                // result.
                if (!valid_number_pattern.full_match(&full_number)
                    && valid_number_pattern.full_match(&potential_national_number))
                    || matches!(
                        self.test_number_length_against_pattern(
                            &possible_number_pattern,
                            &full_number
                        ),
                        Err(ValidationError::TooLong)
                    )
                {
                    if keep_raw_input {
                        phone_number
                            .set_country_code_source(CountryCodeSource::FromNumberWithoutPlusSign);
                    }
                    phone_number.set_country_code(default_country_code);
                    return Ok((default_country_code, potential_national_number.into_owned()));
                }
            }
        }
        // No country calling code present.
        Ok((0, String::new()))
    }

    /// Strips any national prefix (such as 0 or 1) or carrier selection
    /// code from the start of the number, returning the carrier code (if
    /// one was captured) and the remainder. The strip is abandoned when
    /// what remains no longer matches the general pattern of the region.
    fn maybe_strip_national_prefix_and_carrier_code<'a>(
        &self,
        number: Cow<'a, str>,
        region_metadata: &PhoneMetadata,
    ) -> Result<(Option<String>, Cow<'a, str>), InvalidRegexError> {
        let possible_national_prefix = region_metadata.national_prefix_for_parsing();
        if number.is_empty() || possible_national_prefix.is_empty() {
            // Early return for numbers of zero length and regions with
            // no national prefix.
            return Ok((None, number));
        }
        let prefix_pattern = self
            .reg_exps
            .regexp_cache
            .get_regex(possible_national_prefix)?;
        let general_pattern = self
            .reg_exps
            .regexp_cache
            .get_regex(region_metadata.general_desc.national_number_pattern())?;
        let num_groups = prefix_pattern.captures_len() - 1;
        let transform_rule = region_metadata.national_prefix_transform_rule();
        let prefix_match = prefix_pattern.captures_start(&number).map(|prefix_match| {
            (
                prefix_match.get(0).map_or(0, |whole| whole.end()),
                prefix_match.get(1).map(|group| group.as_str().to_owned()),
                prefix_match.get(num_groups).is_some(),
            )
        });
        let Some((prefix_end, first_group, last_group_present)) = prefix_match else {
            return Ok((None, number));
        };
        if transform_rule.is_empty() || !last_group_present {
            // Just strip the prefix.
            let stripped = &number[prefix_end..];
            if !general_pattern.full_match(stripped) {
                return Ok((None, number));
            }
            let carrier_code = if num_groups > 0 { first_group } else { None };
            let stripped = stripped.to_owned();
            Ok((carrier_code, Cow::Owned(stripped)))
        } else {
            // The national prefix takes part in a transformation, e.g.
            // turning a carrier dialling form into the mobile form.
            let transformed = prefix_pattern
                .replace(number.as_ref(), transform_rule)
                .into_owned();
            if !general_pattern.full_match(&transformed) {
                return Ok((None, number));
            }
            let carrier_code = if num_groups > 1 { first_group } else { None };
            Ok((carrier_code, Cow::Owned(transformed)))
        }
    }

    /// Strips any extension from the end of the number. The extension
    /// digits and the number without its extension are returned.
    fn maybe_strip_extension<'a>(&self, number: &'a str) -> (Option<String>, &'a str) {
        let Some(captures) = self.reg_exps.extn_pattern.captures(number) else {
            return (None, number);
        };
        let Some(whole_match) = captures.get(0) else {
            return (None, number);
        };
        let number_without_extension = &number[..whole_match.start()];
        // Only accept the extension when the part before it is a viable
        // phone number on its own.
        if !self.is_viable_phone_number(number_without_extension) {
            return (None, number);
        }
        for index in 1..captures.len() {
            if let Some(group) = captures.get(index) {
                return (
                    Some(group.as_str().to_owned()),
                    number_without_extension,
                );
            }
        }
        (None, number)
    }

    /// Checks that the region supplied to a parse is usable, or that the
    /// number starts with a plus sign so the region can be deduced.
    fn check_region_for_parsing(&self, number: &str, default_region: &str) -> bool {
        if !self.is_valid_region_code(default_region) {
            if number.is_empty()
                || self
                    .reg_exps
                    .plus_chars_pattern
                    .find_start(number)
                    .is_none()
            {
                return false;
            }
        }
        true
    }

    /// Parses a string into a phone number, inferring the country
    /// calling code from the number itself when possible and from
    /// `default_region` otherwise. The input may contain formatting,
    /// vanity letters and an extension.
    pub fn parse(
        &self,
        number_to_parse: &str,
        default_region: &str,
    ) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, default_region, false, true)
            .map_err(ParseErrorInternal::into_public)
    }

    /// Parses a string in the same way as `parse`, but records the raw
    /// input, the country code source and the carrier code (if any) on
    /// the result. Used for numbers that are later formatted in their
    /// original form.
    pub fn parse_and_keep_raw_input(
        &self,
        number_to_parse: &str,
        default_region: &str,
    ) -> Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, default_region, true, true)
            .map_err(ParseErrorInternal::into_public)
    }

    fn parse_helper(
        &self,
        number_to_parse: &str,
        default_region: &str,
        keep_raw_input: bool,
        check_region: bool,
    ) -> Result<PhoneNumber, ParseErrorInternal> {
        let mut phone_number = PhoneNumber::new();
        // Extract a possible number from the string passed in. This
        // strips leading characters that could not be the start of a
        // phone number.
        let number = self.extract_possible_number(number_to_parse);
        if !self.is_viable_phone_number(number) {
            trace!("The string supplied did not seem to be a phone number.");
            return Err(ParseError::NotANumber.into());
        }
        // Check the region supplied is valid, or that the extracted
        // number starts with some sort of plus sign so the number's
        // region can be determined.
        if check_region && !self.check_region_for_parsing(number, default_region) {
            trace!("Missing or invalid default region.");
            return Err(ParseError::InvalidCountryCode.into());
        }
        if keep_raw_input {
            phone_number.set_raw_input(number_to_parse.to_owned());
        }
        // Attempt to parse the extension first, since it doesn't require
        // region-specific data and we want to work with the
        // non-normalized number here.
        let (extension, national_number) = self.maybe_strip_extension(number);
        if let Some(extension) = extension {
            phone_number.set_extension(extension);
        }
        let mut region_metadata = self.get_metadata_for_region(default_region);
        let (country_code, mut normalized_national_number) = self.maybe_extract_country_code(
            national_number,
            region_metadata,
            keep_raw_input,
            &mut phone_number,
        )?;
        if country_code != 0 {
            let phone_number_region = self.get_region_code_for_country_code(country_code);
            if phone_number_region != default_region {
                region_metadata = self
                    .get_metadata_for_region_or_calling_code(country_code, phone_number_region);
            }
        } else {
            // If no extracted country calling code, use the region
            // supplied instead. The national number is just the
            // normalized version of the number we were given to parse.
            normalized_national_number.push_str(&self.normalize(national_number));
            if let Some(region_metadata) = region_metadata {
                phone_number.set_country_code(region_metadata.country_code());
            } else if keep_raw_input {
                phone_number.clear_country_code_source();
            }
        }
        if normalized_national_number.len() < MIN_LENGTH_FOR_NSN {
            trace!("The string supplied is too short to be a phone number.");
            return Err(ParseError::TooShortNsn.into());
        }
        if let Some(region_metadata) = region_metadata {
            let (carrier_code, potential_national_number) = self
                .maybe_strip_national_prefix_and_carrier_code(
                    Cow::Owned(normalized_national_number),
                    region_metadata,
                )?;
            normalized_national_number = potential_national_number.into_owned();
            if keep_raw_input {
                phone_number.set_preferred_domestic_carrier_code(carrier_code.unwrap_or_default());
            }
        }
        let number_length = normalized_national_number.len();
        if number_length < MIN_LENGTH_FOR_NSN {
            trace!("The string supplied is too short to be a phone number.");
            return Err(ParseError::TooShortNsn.into());
        }
        if number_length > MAX_LENGTH_FOR_NSN {
            trace!("The string supplied is too long to be a phone number.");
            return Err(ParseError::TooLong.into());
        }
        if normalized_national_number.starts_with('0')
            && region_metadata.is_some_and(|metadata| metadata.leading_zero_possible())
        {
            phone_number.set_italian_leading_zero(true);
        }
        let national_number = normalized_national_number
            .parse::<u64>()
            .map_err(|_| ParseError::NotANumber)?;
        phone_number.set_national_number(national_number);
        Ok(phone_number)
    }

    /// Returns the national significant number of a phone number, i.e.
    /// the number after the country calling code, keeping a significant
    /// leading zero where the numbering plan allows one.
    pub fn get_national_significant_number(&self, number: &PhoneNumber) -> String {
        let mut buffer = itoa::Buffer::new();
        let national_number = buffer.format(number.national_number());
        // If a leading zero has been set, prefix it now. Note this is
        // not a national prefix.
        if number.italian_leading_zero() && self.is_leading_zero_possible(number.country_code()) {
            return concat_str!("0", national_number);
        }
        national_number.to_owned()
    }

    fn is_leading_zero_possible(&self, country_code: i32) -> bool {
        let region_code = self.get_region_code_for_country_code(country_code);
        self.get_metadata_for_region_or_calling_code(country_code, region_code)
            .is_some_and(|metadata| metadata.leading_zero_possible())
    }

    /// Returns the length of the geographical area code of a number, so
    /// that clients can split a national significant number into area
    /// code and subscriber number. Returns 0 for every number without an
    /// area code, which includes all non fixed-line numbers and the
    /// numbers of regions that keep the area code as part of the number
    /// itself.
    pub fn get_length_of_geographical_area_code(&self, number: &PhoneNumber) -> usize {
        let Some(region_metadata) = self
            .get_region_code_for_number(number)
            .and_then(|region_code| self.get_metadata_for_region(region_code))
        else {
            return 0;
        };
        // If a region has no national prefix, its numbers are always
        // dialled in full and there is nothing to split off.
        if !region_metadata.has_national_prefix() {
            return 0;
        }
        let national_significant_number = self.get_national_significant_number(number);
        let number_type = expect_metadata_regex(
            self.get_number_type_helper(&national_significant_number, region_metadata),
        );
        // Most numbers other than fixed-line ones have to be dialled in
        // full.
        if number_type != PhoneNumberType::FixedLine
            && number_type != PhoneNumberType::FixedLineOrMobile
        {
            return 0;
        }
        self.get_length_of_national_destination_code(number)
    }

    /// Returns the length of the national destination code of a number,
    /// i.e. of the first group of digits following the country calling
    /// code when the number is written in international format.
    pub fn get_length_of_national_destination_code(&self, number: &PhoneNumber) -> usize {
        let copied_number = if number.has_extension() {
            // The extension must not end up in the formatted number, and
            // the number passed in is left untouched.
            let mut copy = number.clone();
            copy.clear_extension();
            Cow::Owned(copy)
        } else {
            Cow::Borrowed(number)
        };
        let formatted_number = self.format(&copied_number, PhoneNumberFormat::International);
        let number_groups: Vec<&str> = self
            .reg_exps
            .non_digits_pattern
            .split(&formatted_number)
            .collect();
        // The international format starts with "+CC ", so the first
        // group is always empty and the second one holds the country
        // calling code. The third group is the national destination code
        // only when a subscriber part follows it.
        if number_groups.len() <= 3 {
            return 0;
        }
        if self.get_region_code_for_number(number) == Some("AR")
            && self.get_number_type(number) == PhoneNumberType::Mobile
        {
            // Argentinian mobile numbers are written internationally as
            // "9" followed by the destination code, so the marker digit
            // counts towards the code as well.
            return number_groups[3].len() + 1;
        }
        number_groups[2].len()
    }

    /// Formats a phone number in the specified format using default
    /// rules. For vanity numbers, the digit representation is formatted.
    pub fn format(&self, number: &PhoneNumber, number_format: PhoneNumberFormat) -> String {
        let country_code = number.country_code();
        let national_significant_number = self.get_national_significant_number(number);
        if number_format == PhoneNumberFormat::E164 {
            // Early exit for E164 since no pattern needs to be applied
            // and extensions are dropped.
            let mut formatted_number = national_significant_number;
            prefix_number_with_country_calling_code(
                country_code,
                PhoneNumberFormat::E164,
                &mut formatted_number,
            );
            return formatted_number;
        }
        // Note that region_code_for_country_code() is used because the
        // formatting information of regions sharing a country calling
        // code is carried by the main region for that code.
        let region_code = self.get_region_code_for_country_code(country_code);
        let Some(region_metadata) =
            self.get_metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return national_significant_number;
        };
        let mut formatted_number = expect_metadata_regex(self.format_nsn(
            &national_significant_number,
            region_metadata,
            number_format,
            None,
        ));
        self.maybe_append_formatted_extension(
            number,
            region_metadata,
            number_format,
            &mut formatted_number,
        );
        prefix_number_with_country_calling_code(country_code, number_format, &mut formatted_number);
        formatted_number
    }

    /// Formats a phone number using client-defined formatting rules. A
    /// "$NP" in a rule stands for the national prefix of the number's
    /// region and "$FG" for the first group.
    pub fn format_by_pattern(
        &self,
        number: &PhoneNumber,
        number_format: PhoneNumberFormat,
        user_defined_formats: &[NumberFormat],
    ) -> String {
        let country_code = number.country_code();
        let national_significant_number = self.get_national_significant_number(number);
        let region_code = self.get_region_code_for_country_code(country_code);
        let Some(region_metadata) =
            self.get_metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return national_significant_number;
        };
        let mut user_defined_formats_copy = Vec::with_capacity(user_defined_formats.len());
        for this_format in user_defined_formats {
            let mut format_copy = this_format.clone();
            let national_prefix_formatting_rule = this_format.national_prefix_formatting_rule();
            if !national_prefix_formatting_rule.is_empty() {
                let national_prefix = region_metadata.national_prefix();
                if !national_prefix.is_empty() {
                    // Replace $NP with the national prefix and $FG with
                    // the first group ($1).
                    let rule = self
                        .reg_exps
                        .np_pattern
                        .replace(national_prefix_formatting_rule, national_prefix);
                    let rule = self.reg_exps.fg_pattern.replace(&rule, "$$1");
                    format_copy.national_prefix_formatting_rule = Some(rule.into_owned());
                } else {
                    // There is no national prefix to format, so the rule
                    // is dropped.
                    format_copy.national_prefix_formatting_rule = None;
                }
            }
            user_defined_formats_copy.push(format_copy);
        }
        let mut formatted_number = match self.format_according_to_formats(
            &national_significant_number,
            &user_defined_formats_copy,
            number_format,
            None,
        ) {
            Ok(formatted_number) => formatted_number,
            Err(err) => {
                warn!("Invalid user-defined format pattern: {err}");
                national_significant_number
            }
        };
        self.maybe_append_formatted_extension(
            number,
            region_metadata,
            number_format,
            &mut formatted_number,
        );
        prefix_number_with_country_calling_code(country_code, number_format, &mut formatted_number);
        formatted_number
    }

    /// Formats a number in national format for dialling using the
    /// supplied carrier selection code, inserted where the metadata of
    /// the number's region asks for one.
    pub fn format_national_number_with_carrier_code(
        &self,
        number: &PhoneNumber,
        carrier_code: &str,
    ) -> String {
        let country_code = number.country_code();
        let national_significant_number = self.get_national_significant_number(number);
        let region_code = self.get_region_code_for_country_code(country_code);
        let Some(region_metadata) =
            self.get_metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return national_significant_number;
        };
        let mut formatted_number = expect_metadata_regex(self.format_nsn(
            &national_significant_number,
            region_metadata,
            PhoneNumberFormat::National,
            Some(carrier_code),
        ));
        self.maybe_append_formatted_extension(
            number,
            region_metadata,
            PhoneNumberFormat::National,
            &mut formatted_number,
        );
        prefix_number_with_country_calling_code(
            country_code,
            PhoneNumberFormat::National,
            &mut formatted_number,
        );
        formatted_number
    }

    /// Formats a number in national format for dialling using the
    /// carrier preferred at parse time, falling back to
    /// `fallback_carrier_code` when none was recorded.
    pub fn format_national_number_with_preferred_carrier_code(
        &self,
        number: &PhoneNumber,
        fallback_carrier_code: &str,
    ) -> String {
        let carrier_code = if number.has_preferred_domestic_carrier_code() {
            number.preferred_domestic_carrier_code()
        } else {
            fallback_carrier_code
        };
        self.format_national_number_with_carrier_code(number, carrier_code)
    }

    /// Formats a phone number for out-of-country dialling purposes,
    /// prefixing it with the international dialling prefix used in
    /// `region_calling_from` when that prefix is unambiguous.
    pub fn format_out_of_country_calling_number(
        &self,
        number: &PhoneNumber,
        region_calling_from: &str,
    ) -> String {
        if !self.is_valid_region_code(region_calling_from) {
            return self.format(number, PhoneNumberFormat::International);
        }
        let country_code = number.country_code();
        let national_significant_number = self.get_national_significant_number(number);
        let region_code = self.get_region_code_for_country_code(country_code);
        let Some(region_metadata) =
            self.get_metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return national_significant_number;
        };
        if country_code == NANPA_COUNTRY_CODE {
            if self.is_nanpa_country(region_calling_from) {
                // For NANPA regions, return the national format of these
                // numbers together with the country calling code.
                let mut buffer = itoa::Buffer::new();
                let formatted_number = self.format(number, PhoneNumberFormat::National);
                return concat_str!(
                    buffer.format(country_code),
                    " ",
                    formatted_number.as_str()
                );
            }
        } else if country_code == self.get_country_code_for_region(region_calling_from) {
            // For regions that share a country calling code, the number
            // can be dialled in national format.
            return self.format(number, PhoneNumberFormat::National);
        }
        let Some(metadata_calling_from) = self.get_metadata_for_region(region_calling_from) else {
            return self.format(number, PhoneNumberFormat::International);
        };
        let international_prefix = metadata_calling_from.international_prefix();
        // An international prefix is only used when it is all digits (a
        // tilde separated wait-tone is allowed); otherwise the preferred
        // prefix of the region decides, and when there is none the
        // number is formatted with a plus sign instead.
        let international_prefix_for_formatting = if self
            .reg_exps
            .single_international_prefix
            .full_match(international_prefix)
        {
            international_prefix
        } else {
            metadata_calling_from.preferred_international_prefix()
        };
        let mut formatted_number = expect_metadata_regex(self.format_nsn(
            &national_significant_number,
            region_metadata,
            PhoneNumberFormat::International,
            None,
        ));
        self.maybe_append_formatted_extension(
            number,
            region_metadata,
            PhoneNumberFormat::International,
            &mut formatted_number,
        );
        if !international_prefix_for_formatting.is_empty() {
            let mut buffer = itoa::Buffer::new();
            return concat_str!(
                international_prefix_for_formatting,
                " ",
                buffer.format(country_code),
                " ",
                formatted_number.as_str()
            );
        }
        prefix_number_with_country_calling_code(
            country_code,
            PhoneNumberFormat::International,
            &mut formatted_number,
        );
        formatted_number
    }

    /// Formats a phone number for out-of-country dialling purposes,
    /// keeping the alpha characters and grouping symbols of the raw
    /// input (requires `parse_and_keep_raw_input`). Numbers parsed
    /// without their raw input fall back to
    /// `format_out_of_country_calling_number`.
    pub fn format_out_of_country_keeping_alpha_chars(
        &self,
        number: &PhoneNumber,
        region_calling_from: &str,
    ) -> String {
        // Without raw input there are no alpha characters to keep.
        if number.raw_input().is_empty() {
            return self.format_out_of_country_calling_number(number, region_calling_from);
        }
        let country_code = number.country_code();
        let region_code = self.get_region_code_for_country_code(country_code);
        if !self.is_valid_region_code(region_code) {
            return number.raw_input().to_owned();
        }
        // Strip any prefix such as country calling code or IDD that was
        // present in the raw input, by normalizing it down to digits,
        // letters and grouping symbols and cutting at the start of the
        // parsed national number. All valid alpha numbers begin with at
        // least three digits, so the first three are enough to find the
        // cut point; shorter numbers are left as written.
        let mut raw_input = normalize_helper(
            number.raw_input(),
            &self.reg_exps.all_plus_number_grouping_symbols,
            true,
        );
        let national_number = self.get_national_significant_number(number);
        if national_number.len() > 3 {
            if let Some(start) = raw_input.find(&national_number[..3]) {
                raw_input.drain(..start);
            }
        }
        let Some(metadata_calling_from) = self.get_metadata_for_region(region_calling_from) else {
            return self.format(number, PhoneNumberFormat::International);
        };
        if country_code == NANPA_COUNTRY_CODE {
            if self.is_nanpa_country(region_calling_from) {
                let mut buffer = itoa::Buffer::new();
                return concat_str!(buffer.format(country_code), " ", raw_input.as_str());
            }
        } else if country_code == self.get_country_code_for_region(region_calling_from) {
            // A domestic call. The formatting rules are copied with
            // their pattern widened to pass the user's grouping through,
            // so only the national prefix rule of the matching format is
            // applied.
            let mut available_formats =
                Vec::with_capacity(metadata_calling_from.number_format.len());
            for this_format in &metadata_calling_from.number_format {
                let mut format_copy = this_format.clone();
                // The first group is the first run of digits the user
                // wrote together.
                format_copy.pattern = r"(\d+)(.*)".to_owned();
                // The groups are concatenated back together after the
                // national prefix has been spliced in.
                format_copy.format = "$1$2".to_owned();
                available_formats.push(format_copy);
            }
            return expect_metadata_regex(self.format_according_to_formats(
                &raw_input,
                &available_formats,
                PhoneNumberFormat::National,
                None,
            ));
        }
        let international_prefix = metadata_calling_from.international_prefix();
        // For regions with several international prefixes the number is
        // formatted with a plus sign, unless the region has declared a
        // preferred prefix.
        let international_prefix_for_formatting = if self
            .reg_exps
            .single_international_prefix
            .full_match(international_prefix)
        {
            international_prefix
        } else {
            metadata_calling_from.preferred_international_prefix()
        };
        let mut formatted_number = raw_input;
        if let Some(region_metadata) = self.get_metadata_for_region(region_code) {
            self.maybe_append_formatted_extension(
                number,
                region_metadata,
                PhoneNumberFormat::International,
                &mut formatted_number,
            );
        }
        if !international_prefix_for_formatting.is_empty() {
            let mut buffer = itoa::Buffer::new();
            return concat_str!(
                international_prefix_for_formatting,
                " ",
                buffer.format(country_code),
                " ",
                formatted_number.as_str()
            );
        }
        prefix_number_with_country_calling_code(
            country_code,
            PhoneNumberFormat::International,
            &mut formatted_number,
        );
        formatted_number
    }

    /// Formats a phone number using the original format the number was
    /// parsed with (requires `parse_and_keep_raw_input`). Falls back to
    /// national format when the original format is unknown.
    pub fn format_in_original_format(
        &self,
        number: &PhoneNumber,
        region_calling_from: &str,
    ) -> String {
        match number.country_code_source() {
            CountryCodeSource::FromNumberWithPlusSign => {
                self.format(number, PhoneNumberFormat::International)
            }
            CountryCodeSource::FromNumberWithIdd => {
                self.format_out_of_country_calling_number(number, region_calling_from)
            }
            CountryCodeSource::FromNumberWithoutPlusSign => {
                let formatted_number = self.format(number, PhoneNumberFormat::International);
                match formatted_number.strip_prefix(PLUS_SIGN) {
                    Some(without_plus) => without_plus.to_owned(),
                    None => formatted_number,
                }
            }
            CountryCodeSource::FromDefaultCountry | CountryCodeSource::Unspecified => {
                self.format(number, PhoneNumberFormat::National)
            }
        }
    }

    /// Formats the national significant number according to the rules of
    /// the given metadata and target format.
    fn format_nsn(
        &self,
        number: &str,
        region_metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
        carrier_code: Option<&str>,
    ) -> Result<String, InvalidRegexError> {
        // When international formats are available they are preferred
        // for everything but the national format.
        let available_formats = if region_metadata.intl_number_format.is_empty()
            || number_format == PhoneNumberFormat::National
        {
            &region_metadata.number_format
        } else {
            &region_metadata.intl_number_format
        };
        let mut formatted_number =
            self.format_according_to_formats(number, available_formats, number_format, carrier_code)?;
        if number_format == PhoneNumberFormat::RFC3966 {
            formatted_number = self
                .reg_exps
                .separator_pattern
                .replace_all(&formatted_number, "-")
                .into_owned();
        }
        Ok(formatted_number)
    }

    fn format_according_to_formats(
        &self,
        number: &str,
        available_formats: &[NumberFormat],
        number_format: PhoneNumberFormat,
        carrier_code: Option<&str>,
    ) -> Result<String, InvalidRegexError> {
        for this_format in available_formats {
            // When leading digits patterns are present, only the last
            // (most detailed) one decides whether the rule applies.
            if let Some(leading_digits) = this_format.leading_digits_pattern.last() {
                let leading_digits_pattern =
                    self.reg_exps.regexp_cache.get_regex(leading_digits)?;
                if leading_digits_pattern.find_start(number).is_none() {
                    continue;
                }
            }
            let pattern = self.reg_exps.regexp_cache.get_regex(this_format.pattern())?;
            if !pattern.full_match(number) {
                continue;
            }
            let number_format_rule = this_format.format();
            if number_format == PhoneNumberFormat::National
                && carrier_code.is_some_and(|code| !code.is_empty())
                && this_format.has_domestic_carrier_code_formatting_rule()
            {
                // Replace the $CC in the formatting rule with the
                // desired carrier code, then splice the whole rule in
                // for the first group.
                let carrier_code_formatting_rule = self.reg_exps.carrier_code_pattern.replace(
                    this_format.domestic_carrier_code_formatting_rule(),
                    carrier_code.unwrap_or_default(),
                );
                let number_format_rule = self
                    .reg_exps
                    .first_group_capturing_pattern
                    .replace(number_format_rule, carrier_code_formatting_rule.as_ref());
                return Ok(pattern
                    .replace(number, number_format_rule.as_ref())
                    .into_owned());
            }
            if number_format == PhoneNumberFormat::National
                && !this_format.national_prefix_formatting_rule().is_empty()
            {
                let number_format_rule = self.reg_exps.first_group_capturing_pattern.replace(
                    number_format_rule,
                    this_format.national_prefix_formatting_rule(),
                );
                return Ok(pattern
                    .replace(number, number_format_rule.as_ref())
                    .into_owned());
            }
            return Ok(pattern.replace(number, number_format_rule).into_owned());
        }
        // If no pattern is matched, the number is returned in its
        // original form.
        Ok(number.to_owned())
    }

    /// Appends the extension of the number, using the preferred prefix
    /// of the region when there is one.
    fn maybe_append_formatted_extension(
        &self,
        number: &PhoneNumber,
        region_metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
        formatted_number: &mut String,
    ) {
        if !number.has_extension() || number.extension().is_empty() {
            return;
        }
        if number_format == PhoneNumberFormat::RFC3966 {
            formatted_number.push_str(RFC3966_EXTN_PREFIX);
        } else if region_metadata.has_preferred_extn_prefix() {
            formatted_number.push_str(region_metadata.preferred_extn_prefix());
        } else {
            formatted_number.push_str(DEFAULT_EXTN_PREFIX);
        }
        formatted_number.push_str(number.extension());
    }

    fn is_number_matching_desc(
        &self,
        national_number: &str,
        number_desc: &PhoneNumberDesc,
    ) -> Result<bool, InvalidRegexError> {
        if !number_desc.has_possible_number_pattern()
            || !number_desc.has_national_number_pattern()
        {
            return Ok(false);
        }
        let possible_pattern = self
            .reg_exps
            .regexp_cache
            .get_regex(number_desc.possible_number_pattern())?;
        Ok(possible_pattern.full_match(national_number)
            && self
                .matcher_api
                .match_national_number(national_number, number_desc, false))
    }

    fn get_number_type_helper(
        &self,
        national_number: &str,
        region_metadata: &PhoneMetadata,
    ) -> Result<PhoneNumberType, InvalidRegexError> {
        if !region_metadata.general_desc.has_national_number_pattern()
            || !self.is_number_matching_desc(national_number, &region_metadata.general_desc)?
        {
            trace!("Number type unknown - doesn't match general national number pattern.");
            return Ok(PhoneNumberType::Unknown);
        }
        if self.is_number_matching_desc(national_number, &region_metadata.premium_rate)? {
            trace!("Number is a premium number.");
            return Ok(PhoneNumberType::PremiumRate);
        }
        if self.is_number_matching_desc(national_number, &region_metadata.toll_free)? {
            trace!("Number is a toll-free number.");
            return Ok(PhoneNumberType::TollFree);
        }
        if self.is_number_matching_desc(national_number, &region_metadata.shared_cost)? {
            trace!("Number is a shared cost number.");
            return Ok(PhoneNumberType::SharedCost);
        }
        if self.is_number_matching_desc(national_number, &region_metadata.voip)? {
            trace!("Number is a VOIP (Voice over IP) number.");
            return Ok(PhoneNumberType::Voip);
        }
        if self.is_number_matching_desc(national_number, &region_metadata.personal_number)? {
            trace!("Number is a personal number.");
            return Ok(PhoneNumberType::PersonalNumber);
        }
        if self.is_number_matching_desc(national_number, &region_metadata.pager)? {
            trace!("Number is a pager number.");
            return Ok(PhoneNumberType::Pager);
        }
        if self.is_number_matching_desc(national_number, &region_metadata.uan)? {
            trace!("Number is a UAN.");
            return Ok(PhoneNumberType::Uan);
        }
        if self.is_number_matching_desc(national_number, &region_metadata.fixed_line)? {
            if region_metadata.same_mobile_and_fixed_line_pattern() {
                trace!("Fixed-line and mobile patterns equal, number is fixed-line or mobile.");
                return Ok(PhoneNumberType::FixedLineOrMobile);
            }
            if self.is_number_matching_desc(national_number, &region_metadata.mobile)? {
                trace!(
                    "Fixed-line and mobile patterns differ, but number is still fixed-line or mobile."
                );
                return Ok(PhoneNumberType::FixedLineOrMobile);
            }
            trace!("Number is a fixed line number.");
            return Ok(PhoneNumberType::FixedLine);
        }
        // Otherwise, test to see if the number is mobile. Only do this
        // if certain that the patterns for mobile and fixed line aren't
        // the same.
        if !region_metadata.same_mobile_and_fixed_line_pattern()
            && self.is_number_matching_desc(national_number, &region_metadata.mobile)?
        {
            trace!("Number is a mobile number.");
            return Ok(PhoneNumberType::Mobile);
        }
        trace!("Number type unknown - doesn't match any specific number type pattern.");
        Ok(PhoneNumberType::Unknown)
    }

    /// Returns the type of the number, e.g. toll-free or premium rate,
    /// or `Unknown` when the number is not valid for its region.
    pub fn get_number_type(&self, number: &PhoneNumber) -> PhoneNumberType {
        let Some(region_code) = self.get_region_code_for_number(number) else {
            return PhoneNumberType::Unknown;
        };
        let Some(region_metadata) =
            self.get_metadata_for_region_or_calling_code(number.country_code(), region_code)
        else {
            return PhoneNumberType::Unknown;
        };
        let national_significant_number = self.get_national_significant_number(number);
        expect_metadata_regex(
            self.get_number_type_helper(&national_significant_number, region_metadata),
        )
    }

    /// Tests whether the number matches a valid pattern of its region.
    /// Note this doesn't verify the number is actually in use.
    pub fn is_valid_number(&self, number: &PhoneNumber) -> bool {
        let Some(region_code) = self.get_region_code_for_number(number) else {
            return false;
        };
        self.is_valid_number_for_region(number, region_code)
    }

    /// Tests whether the number is valid for a particular region. This
    /// is stricter than `is_valid_number`: a Bahamian number is not
    /// valid for the region "US", even though both share country
    /// calling code 1.
    pub fn is_valid_number_for_region(&self, number: &PhoneNumber, region_code: &str) -> bool {
        let country_code = number.country_code();
        let Some(region_metadata) =
            self.get_metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return false;
        };
        if region_code != REGION_CODE_FOR_NON_GEO_ENTITY
            && country_code != self.get_country_code_for_region(region_code)
        {
            // Either the region code was invalid, or the country calling
            // code for a geographical region didn't match that of the
            // number.
            return false;
        }
        let national_significant_number = self.get_national_significant_number(number);
        if !region_metadata.general_desc.has_national_number_pattern() {
            // For regions whose metadata carries no general pattern, any
            // number of acceptable length is treated as valid.
            let number_length = national_significant_number.len();
            return number_length > MIN_LENGTH_FOR_NSN && number_length < MAX_LENGTH_FOR_NSN;
        }
        expect_metadata_regex(
            self.get_number_type_helper(&national_significant_number, region_metadata),
        ) != PhoneNumberType::Unknown
    }

    /// Returns the region where a phone number is from. When several
    /// regions share the number's country calling code, leading digits
    /// and region-specific patterns decide between them.
    pub fn get_region_code_for_number(&self, number: &PhoneNumber) -> Option<&str> {
        let country_code = number.country_code();
        let region_codes = self.region_codes_for_country_calling_code(country_code)?;
        if region_codes.len() == 1 {
            return Some(&region_codes[0]);
        }
        self.region_code_for_number_from_region_list(number, region_codes)
    }

    fn region_code_for_number_from_region_list<'a>(
        &'a self,
        number: &PhoneNumber,
        region_codes: &'a [String],
    ) -> Option<&'a str> {
        let national_number = self.get_national_significant_number(number);
        for region_code in region_codes {
            // If leading_digits is present, use it. Otherwise, do full
            // validation.
            let Some(region_metadata) = self.get_metadata_for_region(region_code) else {
                continue;
            };
            if region_metadata.has_leading_digits() {
                let leading_digits_pattern = expect_metadata_regex(
                    self.reg_exps
                        .regexp_cache
                        .get_regex(region_metadata.leading_digits()),
                );
                if leading_digits_pattern.find_start(&national_number).is_some() {
                    return Some(region_code);
                }
            } else if expect_metadata_regex(
                self.get_number_type_helper(&national_number, region_metadata),
            ) != PhoneNumberType::Unknown
            {
                return Some(region_code);
            }
        }
        None
    }

    /// Performs a quick, length-based check of the number. A possible
    /// number is not necessarily valid.
    pub fn is_possible_number(&self, number: &PhoneNumber) -> bool {
        self.is_possible_number_with_reason(number).is_ok()
    }

    /// As `is_possible_number`, but on failure reports whether the
    /// country calling code was the problem or the number is too short
    /// or too long.
    pub fn is_possible_number_with_reason(
        &self,
        number: &PhoneNumber,
    ) -> Result<(), ValidationError> {
        let national_number = self.get_national_significant_number(number);
        let country_code = number.country_code();
        // Note: regions that share a country calling code, such as the
        // NANPA regions, are checked against the rules of the main
        // region for that code.
        let region_code = self.get_region_code_for_country_code(country_code);
        let Some(region_metadata) =
            self.get_metadata_for_region_or_calling_code(country_code, region_code)
        else {
            return Err(ValidationError::InvalidCountryCode);
        };
        let general_desc = &region_metadata.general_desc;
        if !general_desc.has_national_number_pattern() {
            trace!("Checking if number is possible with incomplete metadata.");
            let number_length = national_number.len();
            return if number_length < MIN_LENGTH_FOR_NSN {
                Err(ValidationError::TooShort)
            } else if number_length > MAX_LENGTH_FOR_NSN {
                Err(ValidationError::TooLong)
            } else {
                Ok(())
            };
        }
        let possible_number_pattern = expect_metadata_regex(
            self.reg_exps
                .regexp_cache
                .get_regex(general_desc.possible_number_pattern()),
        );
        self.test_number_length_against_pattern(&possible_number_pattern, &national_number)
    }

    /// Parses the string and then checks whether the result is a
    /// possible number; unparseable input is simply not possible.
    pub fn is_possible_number_for_string(
        &self,
        number: &str,
        region_dialing_from: &str,
    ) -> bool {
        match self.parse(number, region_dialing_from) {
            Ok(parsed) => self.is_possible_number(&parsed),
            Err(_) => false,
        }
    }

    fn test_number_length_against_pattern(
        &self,
        pattern: &Regex,
        number: &str,
    ) -> Result<(), ValidationError> {
        if pattern.full_match(number) {
            return Ok(());
        }
        // A prefix match means there are too many digits, no match at
        // the start means too few.
        if pattern.find_start(number).is_some() {
            Err(ValidationError::TooLong)
        } else {
            Err(ValidationError::TooShort)
        }
    }

    /// Truncates a number that is too long to the longest valid prefix,
    /// mutating it in place. Returns true when the number was valid
    /// already or could be made valid, false when no amount of
    /// truncation helps.
    pub fn truncate_too_long_number(&self, number: &mut PhoneNumber) -> bool {
        if self.is_valid_number(number) {
            return true;
        }
        let mut number_copy = number.clone();
        let mut national_number = number.national_number();
        loop {
            national_number /= 10;
            number_copy.set_national_number(national_number);
            if national_number == 0
                || matches!(
                    self.is_possible_number_with_reason(&number_copy),
                    Err(ValidationError::TooShort)
                )
            {
                return false;
            }
            if self.is_valid_number(&number_copy) {
                number.set_national_number(national_number);
                return true;
            }
        }
    }

    /// Tests whether the number can only be dialled from inside its own
    /// region, like many freephone numbers.
    pub fn can_be_internationally_dialled(&self, number: &PhoneNumber) -> bool {
        let region_metadata = self
            .get_region_code_for_number(number)
            .and_then(|region_code| self.get_metadata_for_region(region_code));
        let Some(region_metadata) = region_metadata else {
            // Note numbers belonging to non-geographical entities
            // (global networks) are always internationally diallable.
            return true;
        };
        let national_significant_number = self.get_national_significant_number(number);
        !expect_metadata_regex(self.is_number_matching_desc(
            &national_significant_number,
            &region_metadata.no_international_dialling,
        ))
    }

    /// Returns a valid fixed-line number for the region, when the
    /// metadata carries an example.
    pub fn get_example_number(&self, region_code: &str) -> Option<PhoneNumber> {
        self.get_example_number_for_type(region_code, PhoneNumberType::FixedLine)
    }

    /// Returns a valid number of the given type for the region, when the
    /// metadata carries an example.
    pub fn get_example_number_for_type(
        &self,
        region_code: &str,
        number_type: PhoneNumberType,
    ) -> Option<PhoneNumber> {
        let region_metadata = self.get_metadata_for_region(region_code)?;
        let desc = get_number_desc_by_type(region_metadata, number_type);
        if !desc.has_example_number() {
            return None;
        }
        self.parse(desc.example_number(), region_code).ok()
    }

    /// Takes two phone numbers and compares them for equality.
    ///
    /// Returns EXACT_MATCH when the country calling code, national
    /// number, extension and leading zero are exactly the same;
    /// NSN_MATCH when either or both has no country calling code
    /// specified and the national numbers and extensions are the same;
    /// SHORT_NSN_MATCH when one national number is a suffix of the other,
    /// or the numbers differ only in country calling code. Otherwise
    /// NO_MATCH.
    pub fn is_number_match(
        &self,
        first_number: &PhoneNumber,
        second_number: &PhoneNumber,
    ) -> MatchType {
        // Make copies of the phone numbers so that the numbers passed in
        // are not edited.
        let mut first_number = copy_core_fields_only(first_number);
        let second_number = copy_core_fields_only(second_number);
        // Early exit if both had extensions and these are different.
        if first_number.has_extension()
            && second_number.has_extension()
            && first_number.extension() != second_number.extension()
        {
            return MatchType::NoMatch;
        }
        let first_number_country_code = first_number.country_code();
        let second_number_country_code = second_number.country_code();
        // Both had country calling code specified.
        if first_number_country_code != 0 && second_number_country_code != 0 {
            if first_number == second_number {
                return MatchType::ExactMatch;
            }
            if first_number_country_code == second_number_country_code
                && is_national_number_suffix_of_the_other(&first_number, &second_number)
            {
                // A SHORT_NSN_MATCH occurs if there is a difference
                // because of the presence or absence of an "Italian
                // leading zero", the presence or absence of an
                // extension, or one NSN being a shorter variant of the
                // other.
                return MatchType::ShortNsnMatch;
            }
            return MatchType::NoMatch;
        }
        // Checks cases where one or both country calling codes were not
        // specified. To make equality checks easier, we first set the
        // country codes to be equal.
        first_number.set_country_code(second_number_country_code);
        // If all else was the same, then this is an NSN_MATCH.
        if first_number == second_number {
            return MatchType::NsnMatch;
        }
        if is_national_number_suffix_of_the_other(&first_number, &second_number) {
            return MatchType::ShortNsnMatch;
        }
        MatchType::NoMatch
    }

    /// Takes two phone numbers as strings and compares them for
    /// equality. Strings that fail to parse against any region are
    /// compared on their bare national numbers as a last resort.
    pub fn is_number_match_with_two_strings(
        &self,
        first_number: &str,
        second_number: &str,
    ) -> MatchType {
        match self.parse(first_number, RegionCode::get_unknown()) {
            Ok(first_number_as_proto) => {
                self.is_number_match_with_one_string(&first_number_as_proto, second_number)
            }
            Err(ParseError::InvalidCountryCode) => {
                match self.parse(second_number, RegionCode::get_unknown()) {
                    Ok(second_number_as_proto) => self
                        .is_number_match_with_one_string(&second_number_as_proto, first_number),
                    Err(ParseError::InvalidCountryCode) => {
                        let first_number_parsed = self
                            .parse_helper(first_number, RegionCode::get_unknown(), false, false)
                            .map_err(ParseErrorInternal::into_public);
                        let second_number_parsed = self
                            .parse_helper(second_number, RegionCode::get_unknown(), false, false)
                            .map_err(ParseErrorInternal::into_public);
                        if let (Ok(first_number_parsed), Ok(second_number_parsed)) =
                            (first_number_parsed, second_number_parsed)
                        {
                            return self
                                .is_number_match(&first_number_parsed, &second_number_parsed);
                        }
                        MatchType::NotANumber
                    }
                    Err(_) => MatchType::NotANumber,
                }
            }
            Err(_) => MatchType::NotANumber,
        }
    }

    /// Takes a phone number and a string and compares them for equality.
    /// The string is parsed with the region of the number as a fallback
    /// when it carries no country calling code of its own.
    pub fn is_number_match_with_one_string(
        &self,
        first_number: &PhoneNumber,
        second_number: &str,
    ) -> MatchType {
        // First see if the second number has an implicit country calling
        // code, by attempting to parse it.
        match self.parse(second_number, RegionCode::get_unknown()) {
            Ok(second_number_as_proto) => {
                self.is_number_match(first_number, &second_number_as_proto)
            }
            Err(ParseError::InvalidCountryCode) => {
                // The second number has no country calling code. Exact
                // match is not possible. We parse it as if the region
                // was the same as that for the first number, and if
                // EXACT_MATCH is returned, we replace this with
                // NSN_MATCH.
                let first_number_region =
                    self.get_region_code_for_country_code(first_number.country_code());
                if first_number_region != RegionCode::get_unknown() {
                    let Ok(second_number_with_first_number_region) =
                        self.parse(second_number, first_number_region)
                    else {
                        return MatchType::NotANumber;
                    };
                    let match_type = self
                        .is_number_match(first_number, &second_number_with_first_number_region);
                    if match_type == MatchType::ExactMatch {
                        return MatchType::NsnMatch;
                    }
                    return match_type;
                }
                // If the first number didn't have a valid country
                // calling code, then we parse the second number without
                // one as well.
                match self
                    .parse_helper(second_number, RegionCode::get_unknown(), false, false)
                    .map_err(ParseErrorInternal::into_public)
                {
                    Ok(second_number_as_proto) => {
                        self.is_number_match(first_number, &second_number_as_proto)
                    }
                    Err(_) => MatchType::NotANumber,
                }
            }
            Err(_) => MatchType::NotANumber,
        }
    }
}
