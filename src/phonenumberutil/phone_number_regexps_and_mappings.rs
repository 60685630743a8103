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

use regex::Regex;

use super::helper_constants::{
    PLUS_CHARS, RFC3966_EXTN_PREFIX, SECOND_NUMBER_START, UNWANTED_END_CHARS, VALID_ALPHA,
    VALID_DIGITS, VALID_PUNCTUATION,
};
use crate::regexp_cache::RegexCache;

fn build_digit_mappings() -> HashMap<char, char> {
    let mut mappings = HashMap::with_capacity(40);
    for ascii in '0'..='9' {
        mappings.insert(ascii, ascii);
    }
    for (index, fullwidth) in ('\u{FF10}'..='\u{FF19}').enumerate() {
        mappings.insert(fullwidth, (b'0' + index as u8) as char);
    }
    for (index, arabic_indic) in ('\u{0660}'..='\u{0669}').enumerate() {
        mappings.insert(arabic_indic, (b'0' + index as u8) as char);
    }
    for (index, eastern_arabic) in ('\u{06F0}'..='\u{06F9}').enumerate() {
        mappings.insert(eastern_arabic, (b'0' + index as u8) as char);
    }
    mappings
}

/// Digit mappings plus the ITU E.161 keypad letters.
fn build_alpha_phone_mappings() -> HashMap<char, char> {
    let mut mappings = build_digit_mappings();
    let keypad = [
        ("ABC", '2'),
        ("DEF", '3'),
        ("GHI", '4'),
        ("JKL", '5'),
        ("MNO", '6'),
        ("PQRS", '7'),
        ("TUV", '8'),
        ("WXYZ", '9'),
    ];
    for (letters, digit) in keypad {
        for letter in letters.chars() {
            mappings.insert(letter, digit);
        }
    }
    mappings
}

/// Characters retained when formatting alpha numbers: digits, keypad
/// letters (uppercased through the lookup) and the common grouping
/// symbols, with each variant mapped to its plain ASCII form.
fn build_all_plus_number_grouping_symbols() -> HashMap<char, char> {
    let mut mappings = HashMap::with_capacity(64);
    for ascii in '0'..='9' {
        mappings.insert(ascii, ascii);
    }
    for letter in 'A'..='Z' {
        mappings.insert(letter, letter);
    }
    let grouping_symbols = [
        ('-', '-'),
        ('\u{FF0D}', '-'),
        ('\u{2010}', '-'),
        ('\u{2011}', '-'),
        ('\u{2012}', '-'),
        ('\u{2013}', '-'),
        ('\u{2014}', '-'),
        ('\u{2015}', '-'),
        ('\u{2212}', '-'),
        ('/', '/'),
        ('\u{FF0F}', '/'),
        (' ', ' '),
        ('\u{3000}', ' '),
        ('\u{2060}', ' '),
        ('.', '.'),
        ('\u{FF0E}', '.'),
    ];
    for (symbol, replacement) in grouping_symbols {
        mappings.insert(symbol, replacement);
    }
    mappings
}

fn extn_digits(max_length: usize) -> String {
    format!("([{VALID_DIGITS}]{{1,{max_length}}})")
}

/// Builds the grammar recognising phone extensions, without anchors and
/// without a case flag. One capture group per alternative; whichever group
/// matched holds the extension digits. The alternatives cover the RFC 3966
/// ";ext=" syntax, the written-out prefixes such as "ext", "extn",
/// "extensión", "int", "anexo", their fullwidth variants and the single
/// symbol prefixes, and finally a short digit run terminated by "#".
fn create_extn_patterns_for_parsing() -> String {
    let long_digits = extn_digits(7);
    let short_digits = extn_digits(5);
    format!(
        "{RFC3966_EXTN_PREFIX}{long_digits}|\
[ \u{00A0}\\t,]*\
(?:ext(?:ensi(?:o\u{0301}?|\u{00F3}))?n?|\u{FF45}\u{FF58}\u{FF54}\u{FF4E}?|\
[,x\u{FF58}#\u{FF03}~\u{FF5E}]|int|anexo|\u{FF49}\u{FF4E}\u{FF54})\
[:.\u{FF0E}]?[ \u{00A0}\\t,-]*{long_digits}#?|\
[- ]+{short_digits}#"
    )
}

/// The regular expressions and character tables that do not depend on any
/// particular numbering plan, compiled once when the util is created.
/// Per-metadata patterns go through `regexp_cache` instead.
pub struct PhoneNumberRegExpsAndMappings {
    pub regexp_cache: RegexCache,

    /// Maps every understood digit character to its ASCII value.
    pub digit_mappings: HashMap<char, char>,
    /// As above, with the keypad letters added for vanity numbers.
    pub alpha_phone_mappings: HashMap<char, char>,
    /// Digits, letters and grouping symbols, used when alpha characters
    /// should survive formatting.
    pub all_plus_number_grouping_symbols: HashMap<char, char>,

    /// Matches international prefixes that can be used unambiguously when
    /// formatting, i.e. all-digit prefixes, possibly with a wait-tone
    /// tilde between two digit runs.
    pub single_international_prefix: Regex,
    /// Captures one digit in any of the understood scripts.
    pub capturing_digit_pattern: Regex,
    pub valid_start_char_pattern: Regex,
    pub second_number_start_pattern: Regex,
    pub unwanted_end_char_pattern: Regex,
    /// A run of punctuation, collapsed to "-" when rendering RFC 3966.
    pub separator_pattern: Regex,
    /// The extension grammar anchored at the end of the number.
    pub extn_pattern: Regex,
    /// Anchored on both sides; accepts a viable phone number with an
    /// optional extension.
    pub valid_phone_number_pattern: Regex,
    /// At least three keypad letters make a number a vanity number.
    pub valid_alpha_phone_pattern: Regex,
    pub plus_chars_pattern: Regex,
    /// Splits a formatted number into its digit groups.
    pub non_digits_pattern: Regex,

    /// Captures the first "$1"-style back reference of a format template,
    /// so a national prefix or carrier rule can be spliced around it.
    pub first_group_capturing_pattern: Regex,
    pub carrier_code_pattern: Regex,
    pub np_pattern: Regex,
    pub fg_pattern: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    pub fn new() -> Self {
        let extn_patterns = create_extn_patterns_for_parsing();
        let valid_phone_number = format!(
            "[{PLUS_CHARS}]*(?:[{VALID_PUNCTUATION}]*[{VALID_DIGITS}]){{3,}}\
[{VALID_PUNCTUATION}{VALID_ALPHA}{VALID_DIGITS}]*"
        );
        Self {
            regexp_cache: RegexCache::with_capacity(128),
            digit_mappings: build_digit_mappings(),
            alpha_phone_mappings: build_alpha_phone_mappings(),
            all_plus_number_grouping_symbols: build_all_plus_number_grouping_symbols(),
            single_international_prefix: Regex::new(
                "\\d+(?:[~\u{2053}\u{223C}\u{FF5E}]\\d+)?",
            )
            .unwrap(),
            capturing_digit_pattern: Regex::new(&format!("([{VALID_DIGITS}])")).unwrap(),
            valid_start_char_pattern: Regex::new(&format!("[{PLUS_CHARS}{VALID_DIGITS}]"))
                .unwrap(),
            second_number_start_pattern: Regex::new(SECOND_NUMBER_START).unwrap(),
            unwanted_end_char_pattern: Regex::new(UNWANTED_END_CHARS).unwrap(),
            separator_pattern: Regex::new(&format!("[{VALID_PUNCTUATION}]+")).unwrap(),
            extn_pattern: Regex::new(&format!("(?i)(?:{extn_patterns})$")).unwrap(),
            valid_phone_number_pattern: Regex::new(&format!(
                "(?i)^(?:{valid_phone_number})(?:{extn_patterns})?$"
            ))
            .unwrap(),
            valid_alpha_phone_pattern: Regex::new("^(?:.*?[A-Za-z]){3}.*$").unwrap(),
            plus_chars_pattern: Regex::new(&format!("[{PLUS_CHARS}]+")).unwrap(),
            non_digits_pattern: Regex::new(r"\D+").unwrap(),
            first_group_capturing_pattern: Regex::new(r"(\$\d)").unwrap(),
            carrier_code_pattern: Regex::new(r"\$CC").unwrap(),
            np_pattern: Regex::new(r"\$NP").unwrap(),
            fg_pattern: Regex::new(r"\$FG").unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneNumberRegExpsAndMappings;

    #[test]
    fn check_regexps_are_compiling() {
        // Every hardcoded pattern is compiled eagerly in new().
        PhoneNumberRegExpsAndMappings::new();
    }
}
