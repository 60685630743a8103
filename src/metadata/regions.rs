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

//! Per-region numbering plan data. Patterns are matched against the full
//! national significant number; formats are scanned in declaration order
//! and the first applicable one wins.

use crate::model::{NumberFormat, PhoneMetadata, PhoneNumberDesc};

fn desc(
    national_number_pattern: &str,
    possible_number_pattern: &str,
    example_number: Option<&str>,
) -> PhoneNumberDesc {
    PhoneNumberDesc {
        national_number_pattern: Some(national_number_pattern.to_owned()),
        possible_number_pattern: Some(possible_number_pattern.to_owned()),
        example_number: example_number.map(str::to_owned),
    }
}

fn format(pattern: &str, format: &str, leading_digits: &[&str]) -> NumberFormat {
    NumberFormat {
        pattern: pattern.to_owned(),
        format: format.to_owned(),
        leading_digits_pattern: leading_digits.iter().map(|rule| (*rule).to_owned()).collect(),
        ..Default::default()
    }
}

fn national_format(
    pattern: &str,
    format_rule: &str,
    leading_digits: &[&str],
    national_prefix_formatting_rule: &str,
) -> NumberFormat {
    NumberFormat {
        national_prefix_formatting_rule: Some(national_prefix_formatting_rule.to_owned()),
        ..format(pattern, format_rule, leading_digits)
    }
}

pub(super) fn us() -> PhoneMetadata {
    PhoneMetadata {
        id: "US".to_owned(),
        country_code: 1,
        international_prefix: Some("011".to_owned()),
        national_prefix: Some("1".to_owned()),
        national_prefix_for_parsing: Some("1".to_owned()),
        same_mobile_and_fixed_line_pattern: true,
        main_country_for_code: true,
        number_format: vec![
            format(r"(\d{3})(\d{4})", "$1-$2", &[]),
            format(r"(\d{3})(\d{3})(\d{4})", "($1) $2-$3", &[]),
        ],
        intl_number_format: vec![format(r"(\d{3})(\d{3})(\d{4})", "$1-$2-$3", &[])],
        general_desc: desc(r"[13-689]\d{9}|2[0-35-9]\d{8}", r"\d{7}(?:\d{3})?", None),
        fixed_line: desc(
            r"[13-689]\d{9}|2[0-35-9]\d{8}",
            r"\d{7}(?:\d{3})?",
            Some("6502530000"),
        ),
        mobile: desc(
            r"[13-689]\d{9}|2[0-35-9]\d{8}",
            r"\d{7}(?:\d{3})?",
            Some("6502530000"),
        ),
        toll_free: desc(r"8(?:00|66|77|88)\d{7}", r"\d{10}", Some("8002530000")),
        premium_rate: desc(r"900\d{7}", r"\d{10}", Some("9002530000")),
        no_international_dialling: desc(r"8(?:00|66|77|88)\d{7}", r"\d{10}", None),
        ..Default::default()
    }
}

pub(super) fn bs() -> PhoneMetadata {
    PhoneMetadata {
        id: "BS".to_owned(),
        country_code: 1,
        international_prefix: Some("011".to_owned()),
        national_prefix: Some("1".to_owned()),
        national_prefix_for_parsing: Some("1".to_owned()),
        general_desc: desc(r"242\d{7}", r"\d{7}(?:\d{3})?", None),
        fixed_line: desc(
            r"242(?:3[2-46-9]|6[0-5])\d{5}",
            r"\d{7}(?:\d{3})?",
            Some("2423651234"),
        ),
        mobile: desc(r"24235[79]\d{4}", r"\d{10}", Some("2423570000")),
        ..Default::default()
    }
}

pub(super) fn ar() -> PhoneMetadata {
    PhoneMetadata {
        id: "AR".to_owned(),
        country_code: 54,
        international_prefix: Some("00".to_owned()),
        national_prefix: Some("0".to_owned()),
        // Carrier selection ("15") is folded into the prefix, turning a
        // domestically dialled mobile number into its international
        // shape with the "9" marker.
        national_prefix_for_parsing: Some(r"0(?:(11|343|3715)15)?".to_owned()),
        national_prefix_transform_rule: Some("9$1".to_owned()),
        main_country_for_code: true,
        number_format: vec![
            NumberFormat {
                domestic_carrier_code_formatting_rule: Some("0$1 $CC".to_owned()),
                ..national_format(r"(\d{2})(\d{4})(\d{4})", "$1 $2-$3", &["11"], "0$1")
            },
            national_format(r"(9)(\d{2})(\d{4})(\d{4})", "$2 15-$3-$4", &["911"], "0$1"),
            national_format(r"(9)(\d{3})(\d{3})(\d{4})", "$2 15-$3-$4", &["9(?:2|3)"], "0$1"),
            NumberFormat {
                domestic_carrier_code_formatting_rule: Some("0$1 $CC".to_owned()),
                ..national_format(r"(\d{3})(\d{3})(\d{4})", "$1 $2-$3", &["[23]"], "0$1")
            },
        ],
        intl_number_format: vec![
            format(r"(\d{2})(\d{4})(\d{4})", "$1 $2-$3", &["11"]),
            format(r"(9)(\d{2})(\d{4})(\d{4})", "$1 $2 $3 $4", &["911"]),
            format(r"(9)(\d{3})(\d{3})(\d{4})", "$1 $2 $3 $4", &["9(?:2|3)"]),
            format(r"(\d{3})(\d{3})(\d{4})", "$1 $2-$3", &["[23]"]),
        ],
        general_desc: desc(r"11\d{8}|[368]\d{9}|9\d{10}", r"\d{10,11}", None),
        fixed_line: desc(r"11\d{8}|[368]\d{9}", r"\d{10}", Some("1123456789")),
        mobile: desc(r"9\d{10}", r"\d{11}", Some("91123456789")),
        ..Default::default()
    }
}

pub(super) fn au() -> PhoneMetadata {
    PhoneMetadata {
        id: "AU".to_owned(),
        country_code: 61,
        international_prefix: Some("001[12]".to_owned()),
        preferred_international_prefix: Some("0011".to_owned()),
        national_prefix: Some("0".to_owned()),
        national_prefix_for_parsing: Some("0".to_owned()),
        main_country_for_code: true,
        number_format: vec![
            national_format(r"(\d)(\d{4})(\d{4})", "$1 $2 $3", &["[2378]"], "(0$1)"),
            national_format(r"(\d{3})(\d{3})(\d{3})", "$1 $2 $3", &["4"], "0$1"),
            format(r"(\d{4})(\d{3})(\d{3})", "$1 $2 $3", &["1"]),
        ],
        general_desc: desc(r"[2378]\d{8}|4\d{8}|1[38]00\d{6}", r"\d{9,10}", None),
        fixed_line: desc(r"[2378]\d{8}", r"\d{9}", Some("293744000")),
        mobile: desc(r"4\d{8}", r"\d{9}", Some("412345678")),
        toll_free: desc(r"1800\d{6}", r"\d{10}", Some("1800123456")),
        shared_cost: desc(r"1300\d{6}", r"\d{10}", Some("1300123456")),
        ..Default::default()
    }
}

pub(super) fn de() -> PhoneMetadata {
    PhoneMetadata {
        id: "DE".to_owned(),
        country_code: 49,
        international_prefix: Some("00".to_owned()),
        national_prefix: Some("0".to_owned()),
        national_prefix_for_parsing: Some("0".to_owned()),
        main_country_for_code: true,
        number_format: vec![
            national_format(r"(\d{2})(\d{3,10})", "$1 $2", &["3[02]|40|[68]9"], "0$1"),
            national_format(r"(\d{3})(\d{3,4})(\d{4})", "$1 $2 $3", &["[89]0"], "0$1"),
            national_format(r"(\d{3})(\d{4})(\d{4,5})", "$1 $2 $3", &["1[5-7]"], "0$1"),
            national_format(r"(\d{3})(\d{3,8})", "$1 $2", &["[2-9]"], "0$1"),
        ],
        general_desc: desc(
            r"(?:[24-6]\d{2}|3[03-9]\d|[789](?:0[2-9]|[1-9]\d))\d{1,8}|900(?:[135]\d{6}|9\d{7})|800\d{7}|1[5-7]\d{8,9}",
            r"\d{4,11}",
            None,
        ),
        fixed_line: desc(
            r"(?:[24-6]\d{2}|3[03-9]\d|[789](?:0[2-9]|[1-9]\d))\d{1,8}",
            r"\d{4,11}",
            Some("30123456"),
        ),
        mobile: desc(r"1[5-7]\d{8,9}", r"\d{10,11}", Some("15123456789")),
        toll_free: desc(r"800\d{7}", r"\d{10}", Some("8001234567")),
        premium_rate: desc(r"900(?:[135]\d{6}|9\d{7})", r"\d{10,11}", Some("9001234567")),
        ..Default::default()
    }
}

pub(super) fn gb() -> PhoneMetadata {
    PhoneMetadata {
        id: "GB".to_owned(),
        country_code: 44,
        international_prefix: Some("00".to_owned()),
        national_prefix: Some("0".to_owned()),
        national_prefix_for_parsing: Some("0".to_owned()),
        main_country_for_code: true,
        number_format: vec![
            national_format(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3", &["[25]|7[06]"], "(0$1)"),
            national_format(r"(\d{4})(\d{3})(\d{3})", "$1 $2 $3", &["[1389]"], "0$1"),
            national_format(r"(\d{4})(\d{3})(\d{3})", "$1 $2 $3", &["7[1-57-9]"], "0$1"),
        ],
        general_desc: desc(r"[1-9]\d{9}", r"\d{10}", None),
        fixed_line: desc(r"[1-6]\d{9}", r"\d{10}", Some("2070313000")),
        mobile: desc(r"7[1-57-9]\d{8}", r"\d{10}", Some("7912345678")),
        toll_free: desc(r"80\d{8}", r"\d{10}", Some("8012345678")),
        premium_rate: desc(r"9[018]\d{8}", r"\d{10}", Some("9012345678")),
        shared_cost: desc(r"8(?:4[2-5]|7[0-3])\d{7}", r"\d{10}", Some("8431231234")),
        voip: desc(r"56\d{8}", r"\d{10}", Some("5612345678")),
        personal_number: desc(r"70\d{8}", r"\d{10}", Some("7031231234")),
        pager: desc(r"76\d{8}", r"\d{10}", Some("7640012345")),
        uan: desc(r"55\d{8}", r"\d{10}", Some("5512345678")),
        ..Default::default()
    }
}

pub(super) fn it() -> PhoneMetadata {
    PhoneMetadata {
        id: "IT".to_owned(),
        country_code: 39,
        international_prefix: Some("00".to_owned()),
        // Fixed-line numbers keep their leading zero in international
        // format, so there is no national prefix to strip.
        leading_zero_possible: true,
        main_country_for_code: true,
        number_format: vec![
            format(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3", &["0[26]"]),
            format(r"(\d{3})(\d{4})(\d{3,4})", "$1 $2 $3", &["0[13-57-9]"]),
            format(r"(\d{3})(\d{3})(\d{3,4})", "$1 $2 $3", &["3"]),
            format(r"(\d{3})(\d{3,6})", "$1 $2", &["8"]),
        ],
        general_desc: desc(r"0\d{5,10}|3\d{8,9}|800\d{6}|89\d{7}", r"\d{6,11}", None),
        fixed_line: desc(r"0\d{5,10}", r"\d{6,11}", Some("0236618300")),
        mobile: desc(r"3\d{8,9}", r"\d{9,10}", Some("312345678")),
        toll_free: desc(r"800\d{6}", r"\d{9}", Some("800123456")),
        premium_rate: desc(r"89[29]\d{6}", r"\d{9}", Some("892123456")),
        ..Default::default()
    }
}

pub(super) fn kz() -> PhoneMetadata {
    PhoneMetadata {
        id: "KZ".to_owned(),
        country_code: 7,
        international_prefix: Some("810".to_owned()),
        national_prefix: Some("8".to_owned()),
        national_prefix_for_parsing: Some("8".to_owned()),
        general_desc: desc(r"7\d{9}", r"\d{10}", None),
        fixed_line: desc(r"7(?:1\d{2}|2\d{2})\d{6}", r"\d{10}", Some("7172123456")),
        mobile: desc(r"70[0-2]\d{7}", r"\d{10}", Some("7012345678")),
        ..Default::default()
    }
}

pub(super) fn nz() -> PhoneMetadata {
    PhoneMetadata {
        id: "NZ".to_owned(),
        country_code: 64,
        international_prefix: Some("00".to_owned()),
        national_prefix: Some("0".to_owned()),
        national_prefix_for_parsing: Some("0".to_owned()),
        main_country_for_code: true,
        number_format: vec![
            national_format(r"(\d)(\d{3})(\d{4})", "$1-$2 $3", &["24|[34679]"], "0$1"),
            national_format(r"(\d{2})(\d{3})(\d{3,5})", "$1-$2 $3", &["2"], "0$1"),
            national_format(r"(\d{3})(\d{3})(\d{3,4})", "$1 $2 $3", &["[89]0"], "0$1"),
        ],
        general_desc: desc(r"2\d{7,9}|[34679]\d{7}|[89]00\d{6,7}", r"\d{7,10}", None),
        fixed_line: desc(
            r"(?:3[2-79]|[49][2-9]|6[235-9]|7[2-57-9])\d{6}",
            r"\d{7,8}",
            Some("33316005"),
        ),
        mobile: desc(r"2\d{7,9}", r"\d{8,10}", Some("21123456")),
        toll_free: desc(r"800\d{6,7}", r"\d{9,10}", Some("800123456")),
        premium_rate: desc(r"900\d{6,7}", r"\d{9,10}", Some("900123456")),
        ..Default::default()
    }
}

pub(super) fn ru() -> PhoneMetadata {
    PhoneMetadata {
        id: "RU".to_owned(),
        country_code: 7,
        international_prefix: Some("810".to_owned()),
        national_prefix: Some("8".to_owned()),
        national_prefix_for_parsing: Some("8".to_owned()),
        main_country_for_code: true,
        number_format: vec![national_format(
            r"(\d{3})(\d{3})(\d{2})(\d{2})",
            "$1 $2-$3-$4",
            &["[3-9]"],
            "8 ($1)",
        )],
        general_desc: desc(r"[3489]\d{9}", r"\d{10}", None),
        fixed_line: desc(r"(?:495|499|812|343)\d{7}", r"\d{10}", Some("4951234567")),
        mobile: desc(r"9\d{9}", r"\d{10}", Some("9123456789")),
        toll_free: desc(r"80[04]\d{7}", r"\d{10}", Some("8001234567")),
        premium_rate: desc(r"80[39]\d{7}", r"\d{10}", Some("8091234567")),
        ..Default::default()
    }
}

pub(super) fn sg() -> PhoneMetadata {
    PhoneMetadata {
        id: "SG".to_owned(),
        country_code: 65,
        // Several competing carrier prefixes, none of them preferred.
        international_prefix: Some("0[0-3][0-9]".to_owned()),
        main_country_for_code: true,
        number_format: vec![format(r"(\d{4})(\d{4})", "$1 $2", &[])],
        general_desc: desc(r"[3689]\d{7}", r"\d{8}", None),
        fixed_line: desc(r"6\d{7}", r"\d{8}", Some("61234567")),
        mobile: desc(r"[89]\d{7}", r"\d{8}", Some("81234567")),
        ..Default::default()
    }
}

/// Universal international freephone service, country calling code 800.
pub(super) fn universal_toll_free() -> PhoneMetadata {
    PhoneMetadata {
        id: "001".to_owned(),
        country_code: 800,
        main_country_for_code: true,
        number_format: vec![format(r"(\d{4})(\d{4})", "$1 $2", &[])],
        general_desc: desc(r"\d{8}", r"\d{8}", None),
        toll_free: desc(r"\d{8}", r"\d{8}", Some("12345678")),
        ..Default::default()
    }
}

/// Universal international premium rate service, country calling code
/// 979.
pub(super) fn universal_premium_rate() -> PhoneMetadata {
    PhoneMetadata {
        id: "001".to_owned(),
        country_code: 979,
        main_country_for_code: true,
        number_format: vec![format(r"(\d{3})(\d{3})(\d{3})", "$1 $2 $3", &[])],
        general_desc: desc(r"\d{9}", r"\d{9}", None),
        premium_rate: desc(r"\d{9}", r"\d{9}", Some("123456789")),
        ..Default::default()
    }
}
