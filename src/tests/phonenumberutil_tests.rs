use strum::IntoEnumIterator;

use crate::{
    CountryCodeSource, MatchType, NumberFormat, ParseError, PhoneNumber, PhoneNumberFormat,
    PhoneNumberType, PhoneNumberUtil, ValidationError, PHONE_NUMBER_UTIL,
};

use super::region_code::RegionCode;

static ONCE: std::sync::Once = std::sync::Once::new();

fn get_phone_util() -> &'static PhoneNumberUtil {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
    &PHONE_NUMBER_UTIL
}

fn make_number(country_code: i32, national_number: u64) -> PhoneNumber {
    let mut number = PhoneNumber::new();
    number.set_country_code(country_code);
    number.set_national_number(national_number);
    number
}

#[test]
fn get_supported_regions() {
    let phone_util = get_phone_util();
    let regions: Vec<&str> = phone_util.get_supported_regions().collect();
    assert_eq!(11, regions.len());
    assert!(regions.contains(&RegionCode::us()));
    assert!(regions.contains(&RegionCode::gb()));
    assert!(regions.contains(&RegionCode::kz()));
    // Non-geographical entities are not regions.
    assert!(!regions.contains(&RegionCode::un001()));
    assert!(!regions.contains(&RegionCode::zz()));
}

#[test]
fn get_country_code_for_region() {
    let phone_util = get_phone_util();
    assert_eq!(1, phone_util.get_country_code_for_region(RegionCode::us()));
    assert_eq!(1, phone_util.get_country_code_for_region(RegionCode::bs()));
    assert_eq!(64, phone_util.get_country_code_for_region(RegionCode::nz()));
    assert_eq!(0, phone_util.get_country_code_for_region(RegionCode::zz()));
    assert_eq!(0, phone_util.get_country_code_for_region(RegionCode::un001()));
}

#[test]
fn get_region_code_for_country_code() {
    let phone_util = get_phone_util();
    assert_eq!(RegionCode::us(), phone_util.get_region_code_for_country_code(1));
    assert_eq!(RegionCode::gb(), phone_util.get_region_code_for_country_code(44));
    // The main country comes first for shared calling codes.
    assert_eq!(RegionCode::ru(), phone_util.get_region_code_for_country_code(7));
    assert_eq!(RegionCode::un001(), phone_util.get_region_code_for_country_code(800));
    assert_eq!(RegionCode::un001(), phone_util.get_region_code_for_country_code(979));
    assert_eq!(RegionCode::zz(), phone_util.get_region_code_for_country_code(2));
    assert_eq!(RegionCode::zz(), phone_util.get_region_code_for_country_code(-1));
}

#[test]
fn is_nanpa_country() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_nanpa_country(RegionCode::us()));
    assert!(phone_util.is_nanpa_country(RegionCode::bs()));
    assert!(!phone_util.is_nanpa_country(RegionCode::gb()));
    assert!(!phone_util.is_nanpa_country(RegionCode::zz()));
}

#[test]
fn get_ndd_prefix_for_region() {
    let phone_util = get_phone_util();
    assert_eq!(
        Some("1".to_owned()),
        phone_util.get_ndd_prefix_for_region(RegionCode::us(), false)
    );
    assert_eq!(
        Some("0".to_owned()),
        phone_util.get_ndd_prefix_for_region(RegionCode::gb(), false)
    );
    assert_eq!(
        Some("8".to_owned()),
        phone_util.get_ndd_prefix_for_region(RegionCode::ru(), true)
    );
    // Regions without a national prefix.
    assert_eq!(None, phone_util.get_ndd_prefix_for_region(RegionCode::it(), false));
    assert_eq!(None, phone_util.get_ndd_prefix_for_region(RegionCode::sg(), false));
    assert_eq!(None, phone_util.get_ndd_prefix_for_region(RegionCode::zz(), false));
}

#[test]
fn get_national_significant_number() {
    let phone_util = get_phone_util();
    let number = make_number(1, 6502530000);
    assert_eq!("6502530000", phone_util.get_national_significant_number(&number));

    let number = make_number(39, 312345678);
    assert_eq!("312345678", phone_util.get_national_significant_number(&number));

    // An Italian fixed-line number keeps its leading zero.
    let mut number = make_number(39, 236618300);
    number.set_italian_leading_zero(true);
    assert_eq!("0236618300", phone_util.get_national_significant_number(&number));

    // A leading zero flag on a region where zeros are not significant is
    // ignored.
    let mut number = make_number(1, 6502530000);
    number.set_italian_leading_zero(true);
    assert_eq!("6502530000", phone_util.get_national_significant_number(&number));

    let number = make_number(800, 12345678);
    assert_eq!("12345678", phone_util.get_national_significant_number(&number));
}

#[test]
fn get_length_of_geographical_area_code() {
    let phone_util = get_phone_util();
    // Google MTV, which has area code "650".
    assert_eq!(
        3,
        phone_util.get_length_of_geographical_area_code(&make_number(1, 6502530000))
    );
    // A North America toll-free number, which has no area code.
    assert_eq!(
        0,
        phone_util.get_length_of_geographical_area_code(&make_number(1, 8002530000))
    );
    // Google London, which has area code "20".
    assert_eq!(
        2,
        phone_util.get_length_of_geographical_area_code(&make_number(44, 2070313000))
    );
    // A UK mobile number, which has no area code.
    assert_eq!(
        0,
        phone_util.get_length_of_geographical_area_code(&make_number(44, 7912345678))
    );
    // Buenos Aires, which has area code "11".
    assert_eq!(
        2,
        phone_util.get_length_of_geographical_area_code(&make_number(54, 1123456789))
    );
    // An Italian number, where no national prefix is stripped and the
    // area code cannot be split off.
    let mut it_number = make_number(39, 236618300);
    it_number.set_italian_leading_zero(true);
    assert_eq!(0, phone_util.get_length_of_geographical_area_code(&it_number));
    // Singapore has no area codes and no national prefix.
    assert_eq!(
        0,
        phone_util.get_length_of_geographical_area_code(&make_number(65, 61234567))
    );
    // An international toll-free number has no geographical region.
    assert_eq!(
        0,
        phone_util.get_length_of_geographical_area_code(&make_number(800, 12345678))
    );
    // An invalid number.
    assert_eq!(
        0,
        phone_util.get_length_of_geographical_area_code(&make_number(1, 1234))
    );
}

#[test]
fn get_length_of_national_destination_code() {
    let phone_util = get_phone_util();
    assert_eq!(
        3,
        phone_util.get_length_of_national_destination_code(&make_number(1, 6502530000))
    );
    // The extension does not change the result.
    let mut us_number_with_extension = make_number(1, 6502530000);
    us_number_with_extension.set_extension("4567".to_owned());
    assert_eq!(
        3,
        phone_util.get_length_of_national_destination_code(&us_number_with_extension)
    );
    // A North America toll-free number still has a destination code.
    assert_eq!(
        3,
        phone_util.get_length_of_national_destination_code(&make_number(1, 8002530000))
    );
    assert_eq!(
        2,
        phone_util.get_length_of_national_destination_code(&make_number(44, 2070313000))
    );
    assert_eq!(
        4,
        phone_util.get_length_of_national_destination_code(&make_number(44, 7912345678))
    );
    assert_eq!(
        2,
        phone_util.get_length_of_national_destination_code(&make_number(54, 1123456789))
    );
    // An Argentinian mobile number counts the international "9" marker
    // as part of the destination code.
    assert_eq!(
        3,
        phone_util.get_length_of_national_destination_code(&make_number(54, 91123456789))
    );
    assert_eq!(
        4,
        phone_util.get_length_of_national_destination_code(&make_number(65, 61234567))
    );
    assert_eq!(
        4,
        phone_util.get_length_of_national_destination_code(&make_number(800, 12345678))
    );
    // Too short to have a destination code.
    assert_eq!(
        0,
        phone_util.get_length_of_national_destination_code(&make_number(1, 6502530))
    );
}

#[test]
fn get_example_number() {
    let phone_util = get_phone_util();
    let de_number = make_number(49, 30123456);
    assert_eq!(Some(de_number.clone()), phone_util.get_example_number(RegionCode::de()));
    assert_eq!(
        Some(de_number),
        phone_util.get_example_number_for_type(RegionCode::de(), PhoneNumberType::FixedLine)
    );

    let gb_mobile =
        phone_util.get_example_number_for_type(RegionCode::gb(), PhoneNumberType::Mobile);
    assert_eq!(Some(make_number(44, 7912345678)), gb_mobile);

    let us_toll_free =
        phone_util.get_example_number_for_type(RegionCode::us(), PhoneNumberType::TollFree);
    assert_eq!(Some(make_number(1, 8002530000)), us_toll_free);

    // BS carries no example for types other than fixed line and mobile.
    assert_eq!(
        None,
        phone_util.get_example_number_for_type(RegionCode::bs(), PhoneNumberType::Uan)
    );
    assert_eq!(None, phone_util.get_example_number(RegionCode::un001()));
    assert_eq!(None, phone_util.get_example_number(RegionCode::zz()));
}

#[test]
fn example_numbers_are_valid() {
    let phone_util = get_phone_util();
    for region_code in phone_util.get_supported_regions() {
        if let Some(example) = phone_util.get_example_number(region_code) {
            assert!(
                phone_util.is_valid_number_for_region(&example, region_code),
                "Example number for {region_code} is not valid"
            );
        }
    }
}

#[test]
fn example_numbers_for_types_are_valid() {
    let phone_util = get_phone_util();
    for region_code in phone_util.get_supported_regions() {
        for number_type in PhoneNumberType::iter() {
            let Some(example) = phone_util.get_example_number_for_type(region_code, number_type)
            else {
                continue;
            };
            assert!(
                phone_util.is_valid_number(&example),
                "Example number of type {number_type:?} for {region_code} is not valid"
            );
        }
    }
}

#[test]
fn format_us_number() {
    let phone_util = get_phone_util();
    let number = make_number(1, 6502530000);
    assert_eq!("(650) 253-0000", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!(
        "+1 650-253-0000",
        phone_util.format(&number, PhoneNumberFormat::International)
    );
    assert_eq!("+16502530000", phone_util.format(&number, PhoneNumberFormat::E164));
    assert_eq!("+1-650-253-0000", phone_util.format(&number, PhoneNumberFormat::RFC3966));

    let number = make_number(1, 8002530000);
    assert_eq!("(800) 253-0000", phone_util.format(&number, PhoneNumberFormat::National));

    let number = make_number(1, 9002530000);
    assert_eq!("(900) 253-0000", phone_util.format(&number, PhoneNumberFormat::National));
}

#[test]
fn format_bs_number() {
    let phone_util = get_phone_util();
    // BS carries no formats of its own; the main country for calling code
    // 1 provides them.
    let number = make_number(1, 2423651234);
    assert_eq!("(242) 365-1234", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!(
        "+1 242-365-1234",
        phone_util.format(&number, PhoneNumberFormat::International)
    );
}

#[test]
fn format_gb_number() {
    let phone_util = get_phone_util();
    let number = make_number(44, 2079460958);
    assert_eq!("(020) 7946 0958", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!(
        "+44 20 7946 0958",
        phone_util.format(&number, PhoneNumberFormat::International)
    );
    assert_eq!(
        "+44-20-7946-0958",
        phone_util.format(&number, PhoneNumberFormat::RFC3966)
    );

    let number = make_number(44, 7912345678);
    assert_eq!("07912 345 678", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!(
        "+44 7912 345 678",
        phone_util.format(&number, PhoneNumberFormat::International)
    );
}

#[test]
fn format_de_number() {
    let phone_util = get_phone_util();
    let number = make_number(49, 30123456);
    assert_eq!("030 123456", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!("+49 30 123456", phone_util.format(&number, PhoneNumberFormat::International));

    let number = make_number(49, 8001234567);
    assert_eq!("0800 123 4567", phone_util.format(&number, PhoneNumberFormat::National));

    let number = make_number(49, 15123456789);
    assert_eq!("0151 2345 6789", phone_util.format(&number, PhoneNumberFormat::National));
}

#[test]
fn format_it_number() {
    let phone_util = get_phone_util();
    let mut number = make_number(39, 236618300);
    number.set_italian_leading_zero(true);
    assert_eq!("02 3661 8300", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!(
        "+39 02 3661 8300",
        phone_util.format(&number, PhoneNumberFormat::International)
    );
    assert_eq!("+390236618300", phone_util.format(&number, PhoneNumberFormat::E164));

    let number = make_number(39, 312345678);
    assert_eq!("312 345 678", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!("+39312345678", phone_util.format(&number, PhoneNumberFormat::E164));
}

#[test]
fn format_ru_number() {
    let phone_util = get_phone_util();
    let number = make_number(7, 4951234567);
    assert_eq!("8 (495) 123-45-67", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!(
        "+7 495 123-45-67",
        phone_util.format(&number, PhoneNumberFormat::International)
    );
}

#[test]
fn format_ar_number() {
    let phone_util = get_phone_util();
    let number = make_number(54, 1123456789);
    assert_eq!("011 2345-6789", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!(
        "+54 11 2345-6789",
        phone_util.format(&number, PhoneNumberFormat::International)
    );

    // Mobile numbers are shown in the carrier dialling form nationally
    // and with the "9" marker internationally.
    let number = make_number(54, 91123456789);
    assert_eq!("011 15-2345-6789", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!(
        "+54 9 11 2345 6789",
        phone_util.format(&number, PhoneNumberFormat::International)
    );
    assert_eq!("+5491123456789", phone_util.format(&number, PhoneNumberFormat::E164));
}

#[test]
fn format_au_number() {
    let phone_util = get_phone_util();
    let number = make_number(61, 293744000);
    assert_eq!("(02) 9374 4000", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!(
        "+61 2 9374 4000",
        phone_util.format(&number, PhoneNumberFormat::International)
    );

    let number = make_number(61, 1800123456);
    assert_eq!("1800 123 456", phone_util.format(&number, PhoneNumberFormat::National));
}

#[test]
fn format_non_geographical_number() {
    let phone_util = get_phone_util();
    let number = make_number(800, 12345678);
    assert_eq!("1234 5678", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!("+800 1234 5678", phone_util.format(&number, PhoneNumberFormat::International));
    assert_eq!("+80012345678", phone_util.format(&number, PhoneNumberFormat::E164));

    let number = make_number(979, 123456789);
    assert_eq!(
        "+979 123 456 789",
        phone_util.format(&number, PhoneNumberFormat::International)
    );
}

#[test]
fn format_number_with_unknown_country_code() {
    let phone_util = get_phone_util();
    // No metadata, so the national significant number comes back as is.
    let number = make_number(2, 12345);
    assert_eq!("12345", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!("+212345", phone_util.format(&number, PhoneNumberFormat::E164));
}

#[test]
fn format_number_shorter_than_patterns() {
    let phone_util = get_phone_util();
    // No format pattern covers the number, so it stays unformatted.
    let number = make_number(44, 12345);
    assert_eq!("12345", phone_util.format(&number, PhoneNumberFormat::National));
    assert_eq!("+44 12345", phone_util.format(&number, PhoneNumberFormat::International));
}

#[test]
fn format_by_pattern() {
    let phone_util = get_phone_util();
    let number = make_number(1, 6502530000);
    let mut num_format = NumberFormat::new(r"(\d{3})(\d{3})(\d{4})", "($1) $2-$3");
    assert_eq!(
        "(650) 253-0000",
        phone_util.format_by_pattern(
            &number,
            PhoneNumberFormat::National,
            std::slice::from_ref(&num_format)
        )
    );
    assert_eq!(
        "+1 (650) 253-0000",
        phone_util.format_by_pattern(
            &number,
            PhoneNumberFormat::International,
            std::slice::from_ref(&num_format)
        )
    );

    // $NP is replaced by the national prefix and $FG by the first group.
    num_format.format = "$1 $2-$3".to_owned();
    num_format.national_prefix_formatting_rule = Some("$NP ($FG)".to_owned());
    assert_eq!(
        "1 (650) 253-0000",
        phone_util.format_by_pattern(
            &number,
            PhoneNumberFormat::National,
            std::slice::from_ref(&num_format)
        )
    );

    // Italy has no national prefix, so the rule is dropped.
    let mut it_number = make_number(39, 236618300);
    it_number.set_italian_leading_zero(true);
    let mut it_format = NumberFormat::new(r"(\d{2})(\d{4})(\d{4})", "$1-$2-$3");
    it_format.national_prefix_formatting_rule = Some("$NP$FG".to_owned());
    assert_eq!(
        "02-3661-8300",
        phone_util.format_by_pattern(
            &it_number,
            PhoneNumberFormat::National,
            std::slice::from_ref(&it_format)
        )
    );
}

#[test]
fn format_national_number_with_carrier_code() {
    let phone_util = get_phone_util();
    let ar_fixed = make_number(54, 1123456789);
    assert_eq!(
        "011 15 2345-6789",
        phone_util.format_national_number_with_carrier_code(&ar_fixed, "15")
    );
    // An empty carrier falls back to the plain national format.
    assert_eq!(
        "011 2345-6789",
        phone_util.format_national_number_with_carrier_code(&ar_fixed, "")
    );
    // US formats carry no carrier code rule, so the code is ignored.
    let us_number = make_number(1, 6502530000);
    assert_eq!(
        "(650) 253-0000",
        phone_util.format_national_number_with_carrier_code(&us_number, "15")
    );
}

#[test]
fn format_national_number_with_preferred_carrier_code() {
    let phone_util = get_phone_util();
    let mut ar_number = make_number(54, 1123456789);
    assert_eq!(
        "011 15 2345-6789",
        phone_util.format_national_number_with_preferred_carrier_code(&ar_number, "15")
    );
    ar_number.set_preferred_domestic_carrier_code("19".to_owned());
    assert_eq!(
        "011 19 2345-6789",
        phone_util.format_national_number_with_preferred_carrier_code(&ar_number, "15")
    );
    // A present but empty preferred code means no carrier at all, even
    // when a fallback is supplied.
    ar_number.set_preferred_domestic_carrier_code(String::new());
    assert_eq!(
        "011 2345-6789",
        phone_util.format_national_number_with_preferred_carrier_code(&ar_number, "15")
    );
}

#[test]
fn format_out_of_country_calling_number() {
    let phone_util = get_phone_util();
    let us_number = make_number(1, 6502530000);
    assert_eq!(
        "00 1 650-253-0000",
        phone_util.format_out_of_country_calling_number(&us_number, RegionCode::de())
    );
    // Within the NANPA the country calling code is dialled without an
    // international prefix.
    assert_eq!(
        "1 (650) 253-0000",
        phone_util.format_out_of_country_calling_number(&us_number, RegionCode::bs())
    );
    assert_eq!(
        "011 44 20 7946 0958",
        phone_util
            .format_out_of_country_calling_number(&make_number(44, 2079460958), RegionCode::us())
    );
    // Singapore's carrier prefixes are ambiguous and no preferred one is
    // set, so the plus-sign form is used.
    assert_eq!(
        "+44 20 7946 0958",
        phone_util
            .format_out_of_country_calling_number(&make_number(44, 2079460958), RegionCode::sg())
    );
    // Kazakhstan shares calling code 7 with Russia, so the number is
    // dialled in national format.
    assert_eq!(
        "8 (717) 212-34-56",
        phone_util
            .format_out_of_country_calling_number(&make_number(7, 7172123456), RegionCode::ru())
    );
    assert_eq!(
        "(02) 9374 4000",
        phone_util
            .format_out_of_country_calling_number(&make_number(61, 293744000), RegionCode::au())
    );
    // An invalid calling-from region falls back to international format.
    assert_eq!(
        "+1 650-253-0000",
        phone_util.format_out_of_country_calling_number(&us_number, RegionCode::zz())
    );
}

#[test]
fn format_out_of_country_keeping_alpha_chars() {
    let phone_util = get_phone_util();
    let alpha_number = phone_util
        .parse_and_keep_raw_input("1800 SIX-flag", RegionCode::us())
        .unwrap();
    assert_eq!(
        "0011 1 800 SIX-FLAG",
        phone_util.format_out_of_country_keeping_alpha_chars(&alpha_number, RegionCode::au())
    );
    // Within the NANPA only the country calling code is prefixed.
    assert_eq!(
        "1 800 SIX-FLAG",
        phone_util.format_out_of_country_keeping_alpha_chars(&alpha_number, RegionCode::us())
    );
    // An unknown calling-from region falls back to international format.
    assert_eq!(
        "+1 800-749-3524",
        phone_util.format_out_of_country_keeping_alpha_chars(&alpha_number, RegionCode::zz())
    );

    // A domestic call keeps the grouping as written, with the national
    // prefix fixed up by the formatting rules.
    let it_number = phone_util
        .parse_and_keep_raw_input("02 3661 8300", RegionCode::it())
        .unwrap();
    assert_eq!(
        "02 3661 8300",
        phone_util.format_out_of_country_keeping_alpha_chars(&it_number, RegionCode::it())
    );

    // Without raw input there are no alpha characters to keep.
    let us_number = make_number(1, 6502530000);
    assert_eq!(
        phone_util.format_out_of_country_calling_number(&us_number, RegionCode::de()),
        phone_util.format_out_of_country_keeping_alpha_chars(&us_number, RegionCode::de())
    );
}

#[test]
fn format_in_original_format() {
    let phone_util = get_phone_util();
    let number = phone_util
        .parse_and_keep_raw_input("+442079460958", RegionCode::gb())
        .unwrap();
    assert_eq!(
        "+44 20 7946 0958",
        phone_util.format_in_original_format(&number, RegionCode::gb())
    );

    let number = phone_util
        .parse_and_keep_raw_input("02079460958", RegionCode::gb())
        .unwrap();
    assert_eq!(
        "(020) 7946 0958",
        phone_util.format_in_original_format(&number, RegionCode::gb())
    );

    let number = phone_util
        .parse_and_keep_raw_input("00 1 650 253 0000", RegionCode::gb())
        .unwrap();
    assert_eq!(
        "00 1 650-253-0000",
        phone_util.format_in_original_format(&number, RegionCode::gb())
    );

    let number = phone_util
        .parse_and_keep_raw_input("1 650 253 0000", RegionCode::us())
        .unwrap();
    assert_eq!(
        "1 650-253-0000",
        phone_util.format_in_original_format(&number, RegionCode::us())
    );

    // Without the raw input the national format is used.
    let number = make_number(1, 6502530000);
    assert_eq!(
        "(650) 253-0000",
        phone_util.format_in_original_format(&number, RegionCode::us())
    );
}

#[test]
fn format_number_with_extension() {
    let phone_util = get_phone_util();
    let mut nz_number = make_number(64, 33316005);
    nz_number.set_extension("1234".to_owned());
    assert_eq!(
        "03-331 6005 ext. 1234",
        phone_util.format(&nz_number, PhoneNumberFormat::National)
    );
    assert_eq!(
        "+64-3-331-6005;ext=1234",
        phone_util.format(&nz_number, PhoneNumberFormat::RFC3966)
    );
    // Extensions are dropped from E164.
    assert_eq!("+6433316005", phone_util.format(&nz_number, PhoneNumberFormat::E164));
}

#[test]
fn get_number_type() {
    let phone_util = get_phone_util();
    assert_eq!(
        PhoneNumberType::PremiumRate,
        phone_util.get_number_type(&make_number(1, 9002530000))
    );
    assert_eq!(
        PhoneNumberType::PremiumRate,
        phone_util.get_number_type(&make_number(44, 9012345678))
    );
    assert_eq!(
        PhoneNumberType::PremiumRate,
        phone_util.get_number_type(&make_number(979, 123456789))
    );
    // Nine digits, recognised by the last branch of the NZ general
    // pattern even though an earlier branch matches the first eight.
    assert_eq!(
        PhoneNumberType::PremiumRate,
        phone_util.get_number_type(&make_number(64, 900123456))
    );
    assert_eq!(
        PhoneNumberType::TollFree,
        phone_util.get_number_type(&make_number(1, 8002530000))
    );
    assert_eq!(
        PhoneNumberType::TollFree,
        phone_util.get_number_type(&make_number(800, 12345678))
    );
    assert_eq!(
        PhoneNumberType::SharedCost,
        phone_util.get_number_type(&make_number(44, 8431231234))
    );
    assert_eq!(
        PhoneNumberType::Voip,
        phone_util.get_number_type(&make_number(44, 5612345678))
    );
    assert_eq!(
        PhoneNumberType::PersonalNumber,
        phone_util.get_number_type(&make_number(44, 7031231234))
    );
    assert_eq!(
        PhoneNumberType::Pager,
        phone_util.get_number_type(&make_number(44, 7640012345))
    );
    assert_eq!(
        PhoneNumberType::Uan,
        phone_util.get_number_type(&make_number(44, 5512345678))
    );
    assert_eq!(
        PhoneNumberType::Mobile,
        phone_util.get_number_type(&make_number(44, 7912345678))
    );
    assert_eq!(
        PhoneNumberType::Mobile,
        phone_util.get_number_type(&make_number(54, 91123456789))
    );
    assert_eq!(
        PhoneNumberType::FixedLine,
        phone_util.get_number_type(&make_number(44, 2070313000))
    );
    assert_eq!(
        PhoneNumberType::FixedLine,
        phone_util.get_number_type(&make_number(54, 1123456789))
    );
    // US fixed-line and mobile patterns are identical.
    assert_eq!(
        PhoneNumberType::FixedLineOrMobile,
        phone_util.get_number_type(&make_number(1, 6502530000))
    );
    assert_eq!(
        PhoneNumberType::Unknown,
        phone_util.get_number_type(&make_number(1, 65025300000))
    );
    assert_eq!(
        PhoneNumberType::Unknown,
        phone_util.get_number_type(&make_number(3, 12345678))
    );
}

#[test]
fn is_valid_number() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_valid_number(&make_number(1, 6502530000)));
    assert!(phone_util.is_valid_number(&make_number(44, 2079460958)));
    assert!(phone_util.is_valid_number(&make_number(1, 2423570000)));
    assert!(phone_util.is_valid_number(&make_number(800, 12345678)));

    let mut it_number = make_number(39, 236618300);
    it_number.set_italian_leading_zero(true);
    assert!(phone_util.is_valid_number(&it_number));
}

#[test]
fn is_not_valid_number() {
    let phone_util = get_phone_util();
    assert!(!phone_util.is_valid_number(&make_number(1, 2530000)));
    assert!(!phone_util.is_valid_number(&make_number(44, 791234567)));
    // Without its significant leading zero an Italian fixed-line number
    // is not valid.
    assert!(!phone_util.is_valid_number(&make_number(39, 23661830)));
    assert!(!phone_util.is_valid_number(&make_number(3, 12345678)));
    assert!(!phone_util.is_valid_number(&make_number(800, 123456789)));
}

#[test]
fn is_valid_number_for_region() {
    let phone_util = get_phone_util();
    let bs_number = make_number(1, 2423570000);
    assert!(phone_util.is_valid_number(&bs_number));
    assert!(phone_util.is_valid_number_for_region(&bs_number, RegionCode::bs()));
    assert!(!phone_util.is_valid_number_for_region(&bs_number, RegionCode::us()));

    let us_number = make_number(1, 6502530000);
    assert!(phone_util.is_valid_number_for_region(&us_number, RegionCode::us()));
    assert!(!phone_util.is_valid_number_for_region(&us_number, RegionCode::bs()));
    assert!(!phone_util.is_valid_number_for_region(&us_number, RegionCode::gb()));
    assert!(!phone_util.is_valid_number_for_region(&us_number, RegionCode::zz()));

    // A Kazakh number shares calling code 7 but does not fit the Russian
    // plan.
    let kz_number = make_number(7, 7172123456);
    assert!(phone_util.is_valid_number_for_region(&kz_number, RegionCode::kz()));
    assert!(!phone_util.is_valid_number_for_region(&kz_number, RegionCode::ru()));

    let intl_toll_free = make_number(800, 12345678);
    assert!(phone_util.is_valid_number_for_region(&intl_toll_free, RegionCode::un001()));
    assert!(!phone_util.is_valid_number_for_region(&intl_toll_free, RegionCode::us()));
}

#[test]
fn get_region_code_for_number() {
    let phone_util = get_phone_util();
    assert_eq!(
        Some(RegionCode::us()),
        phone_util.get_region_code_for_number(&make_number(1, 6502530000))
    );
    assert_eq!(
        Some(RegionCode::bs()),
        phone_util.get_region_code_for_number(&make_number(1, 2423570000))
    );
    assert_eq!(
        Some(RegionCode::ru()),
        phone_util.get_region_code_for_number(&make_number(7, 4951234567))
    );
    assert_eq!(
        Some(RegionCode::kz()),
        phone_util.get_region_code_for_number(&make_number(7, 7172123456))
    );
    assert_eq!(
        Some(RegionCode::un001()),
        phone_util.get_region_code_for_number(&make_number(800, 12345678))
    );
    assert_eq!(None, phone_util.get_region_code_for_number(&make_number(2, 12345678)));
}

#[test]
fn is_possible_number() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_possible_number(&make_number(1, 6502530000)));
    assert!(phone_util.is_possible_number(&make_number(1, 2530000)));
    assert!(phone_util.is_possible_number(&make_number(44, 2070313000)));
    assert!(phone_util.is_possible_number(&make_number(800, 12345678)));

    assert!(phone_util.is_possible_number_for_string("+1 650 253 0000", RegionCode::us()));
    assert!(phone_util.is_possible_number_for_string("253-0000", RegionCode::us()));
    assert!(phone_util.is_possible_number_for_string("+44 20 7031 3000", RegionCode::gb()));
    assert!(!phone_util.is_possible_number_for_string("+44 300", RegionCode::gb()));
    assert!(!phone_util.is_possible_number_for_string("not a number", RegionCode::us()));
}

#[test]
fn is_possible_number_with_reason() {
    let phone_util = get_phone_util();
    assert_eq!(Ok(()), phone_util.is_possible_number_with_reason(&make_number(1, 6502530000)));
    // Possible, though not a valid US number.
    assert_eq!(Ok(()), phone_util.is_possible_number_with_reason(&make_number(1, 2530000)));
    assert_eq!(
        Err(ValidationError::TooShort),
        phone_util.is_possible_number_with_reason(&make_number(1, 253000))
    );
    assert_eq!(
        Err(ValidationError::TooLong),
        phone_util.is_possible_number_with_reason(&make_number(1, 65025300000))
    );
    assert_eq!(
        Err(ValidationError::InvalidCountryCode),
        phone_util.is_possible_number_with_reason(&make_number(0, 2530000))
    );
    assert_eq!(
        Err(ValidationError::InvalidCountryCode),
        phone_util.is_possible_number_with_reason(&make_number(3, 2530000))
    );
    assert_eq!(Ok(()), phone_util.is_possible_number_with_reason(&make_number(800, 12345678)));
    assert_eq!(
        Err(ValidationError::TooLong),
        phone_util.is_possible_number_with_reason(&make_number(800, 123456789))
    );
}

#[test]
fn truncate_too_long_number() {
    let phone_util = get_phone_util();
    let mut number = make_number(1, 65025300000);
    assert!(phone_util.truncate_too_long_number(&mut number));
    assert_eq!(6502530000, number.national_number());

    // A valid number is left alone.
    let mut number = make_number(1, 6502530000);
    assert!(phone_util.truncate_too_long_number(&mut number));
    assert_eq!(6502530000, number.national_number());

    let mut number = make_number(39, 23661830000);
    number.set_italian_leading_zero(true);
    assert!(phone_util.truncate_too_long_number(&mut number));
    assert_eq!(2366183000, number.national_number());

    // Too-short numbers cannot be rescued by truncation.
    let mut number = make_number(1, 2530000);
    assert!(!phone_util.truncate_too_long_number(&mut number));
    assert_eq!(2530000, number.national_number());
}

#[test]
fn can_be_internationally_dialled() {
    let phone_util = get_phone_util();
    // US toll-free numbers cannot be reached from abroad.
    assert!(!phone_util.can_be_internationally_dialled(&make_number(1, 8002530000)));
    assert!(phone_util.can_be_internationally_dialled(&make_number(1, 6502530000)));
    assert!(phone_util.can_be_internationally_dialled(&make_number(1, 9002530000)));
    assert!(phone_util.can_be_internationally_dialled(&make_number(44, 7912345678)));
    // Non-geographical numbers are always diallable.
    assert!(phone_util.can_be_internationally_dialled(&make_number(800, 12345678)));
}

#[test]
fn normalise_remove_punctuation() {
    let phone_util = get_phone_util();
    assert_eq!("03456234", phone_util.normalize_digits_only("034-56&+#234"));
    assert_eq!("6502530000", phone_util.normalize_digits_only("(650) 253-0000"));
}

#[test]
fn normalise_other_digits() {
    let phone_util = get_phone_util();
    // Fullwidth digits.
    assert_eq!("6502530000", phone_util.normalize_digits_only("\u{FF16}\u{FF15}\u{FF10}2530000"));
    // Arabic-indic digits.
    assert_eq!("52", phone_util.normalize_digits_only("\u{0665}\u{0662}"));
    // Eastern-arabic digits.
    assert_eq!("52", phone_util.normalize_digits_only("\u{06F5}\u{06F2}"));
}

#[test]
fn convert_alpha_characters_in_number() {
    let phone_util = get_phone_util();
    assert_eq!(
        "1800 749-3524",
        phone_util.convert_alpha_characters_in_number("1800 SIX-flag")
    );
    // Non-keypad characters are retained untouched.
    assert_eq!(
        "+1 (800) 749-3524",
        phone_util.convert_alpha_characters_in_number("+1 (800) SIX-flag")
    );
}

#[test]
fn is_alpha_number() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_alpha_number("1800 six-flags"));
    assert!(phone_util.is_alpha_number("1800 six-flags ext. 1234"));
    assert!(!phone_util.is_alpha_number("1800 123-1234"));
    assert!(!phone_util.is_alpha_number("1 six-flags"));
}

#[test]
fn is_viable_phone_number() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_viable_phone_number("+1 650 253 0000"));
    assert!(phone_util.is_viable_phone_number("0800-4-pizza"));
    // Grouping marks from other scripts are acceptable.
    assert!(phone_util.is_viable_phone_number("+44\u{2013}2087654321"));

    // Too short.
    assert!(!phone_util.is_viable_phone_number("12"));
    // Only one digit before the alpha characters.
    assert!(!phone_util.is_viable_phone_number("1-pizza"));
    assert!(!phone_util.is_viable_phone_number("isn't it?"));
    assert!(!phone_util.is_viable_phone_number(""));
}

#[test]
fn parse_national_number() {
    let phone_util = get_phone_util();
    let nz_number = make_number(64, 33316005);
    let test_number = phone_util.parse("033316005", RegionCode::nz()).unwrap();
    assert_eq!(nz_number, test_number);
    assert_eq!(CountryCodeSource::Unspecified, test_number.country_code_source());
    assert!(!test_number.has_raw_input());

    assert_eq!(nz_number, phone_util.parse("33316005", RegionCode::nz()).unwrap());
    assert_eq!(nz_number, phone_util.parse("03-331 6005", RegionCode::nz()).unwrap());
    assert_eq!(nz_number, phone_util.parse("03 331 6005", RegionCode::nz()).unwrap());
    // A plus sign determines the region by itself.
    assert_eq!(nz_number, phone_util.parse("+64 3 331 6005", RegionCode::us()).unwrap());

    let us_number = make_number(1, 6502530000);
    assert_eq!(us_number, phone_util.parse("650 253 0000", RegionCode::us()).unwrap());
    // The country calling code dialled without a plus sign is still
    // recognized.
    assert_eq!(us_number, phone_util.parse("1-650-253-0000", RegionCode::us()).unwrap());
    assert_eq!(us_number, phone_util.parse("011 1 650 253 0000", RegionCode::us()).unwrap());
}

#[test]
fn parse_number_with_leading_zero(){
    let phone_util = get_phone_util();
    let mut it_number = make_number(39, 236618300);
    it_number.set_italian_leading_zero(true);
    assert_eq!(it_number, phone_util.parse("02 3661 8300", RegionCode::it()).unwrap());
    assert_eq!(it_number, phone_util.parse("+39 02 3661 8300", RegionCode::us()).unwrap());

    let it_mobile = make_number(39, 312345678);
    assert_eq!(it_mobile, phone_util.parse("312 345 678", RegionCode::it()).unwrap());
}

#[test]
fn parse_number_with_transform_rule() {
    let phone_util = get_phone_util();
    // The Argentinian carrier dialling form "0" + area code + "15" is
    // rewritten to the mobile form with the "9" marker.
    let ar_mobile = make_number(54, 91123456789);
    assert_eq!(ar_mobile, phone_util.parse("0111523456789", RegionCode::ar()).unwrap());
    assert_eq!(ar_mobile, phone_util.parse("+54 9 11 2345 6789", RegionCode::ar()).unwrap());

    let ar_fixed = make_number(54, 3435551212);
    assert_eq!(ar_fixed, phone_util.parse("0343 555-1212", RegionCode::ar()).unwrap());
}

#[test]
fn parse_with_international_prefix() {
    let phone_util = get_phone_util();
    let us_number = make_number(1, 6502530000);
    assert_eq!(us_number, phone_util.parse("+1 (650) 253-0000", RegionCode::nz()).unwrap());
    assert_eq!(us_number, phone_util.parse("00 1 650 253 0000", RegionCode::gb()).unwrap());
    assert_eq!(us_number, phone_util.parse("810 1 650 253 0000", RegionCode::ru()).unwrap());
    // Repeated plus signs are tolerated.
    assert_eq!(us_number, phone_util.parse("++1 (650) 253-0000", RegionCode::nz()).unwrap());
}

#[test]
fn parse_fullwidth_and_arabic_digits() {
    let phone_util = get_phone_util();
    let us_number = make_number(1, 6502530000);
    assert_eq!(
        us_number,
        phone_util
            .parse(
                "\u{FF0B}\u{FF11} \u{FF08}\u{FF16}\u{FF15}\u{FF10}\u{FF09} \
\u{FF12}\u{FF15}\u{FF13}\u{FF0D}\u{FF10}\u{FF10}\u{FF10}\u{FF10}",
                RegionCode::sg()
            )
            .unwrap()
    );
    assert_eq!(
        us_number,
        phone_util
            .parse(
                "+\u{0661}\u{0666}\u{0665}\u{0660}\u{0662}\u{0665}\u{0663}\
\u{0660}\u{0660}\u{0660}\u{0660}",
                RegionCode::sg()
            )
            .unwrap()
    );
}

#[test]
fn parse_vanity_number() {
    let phone_util = get_phone_util();
    // The keypad letters are converted once at least three of them
    // appear in the number.
    let us_toll_free = make_number(1, 8007493524);
    assert_eq!(us_toll_free, phone_util.parse("1800 six-flag", RegionCode::us()).unwrap());
    assert_eq!(us_toll_free, phone_util.parse("+1800 six-flag", RegionCode::nz()).unwrap());
}

#[test]
fn parse_extensions() {
    let phone_util = get_phone_util();
    let mut nz_number = make_number(64, 33316005);
    nz_number.set_extension("3456".to_owned());
    assert_eq!(nz_number, phone_util.parse("03 331 6005 ext 3456", RegionCode::nz()).unwrap());
    assert_eq!(nz_number, phone_util.parse("03-3316005x3456", RegionCode::nz()).unwrap());
    assert_eq!(nz_number, phone_util.parse("03-3316005 int.3456", RegionCode::nz()).unwrap());
    assert_eq!(nz_number, phone_util.parse("03 3316005 #3456", RegionCode::nz()).unwrap());
    assert_eq!(
        nz_number,
        phone_util.parse("+64 3 331 6005 extension 3456", RegionCode::nz()).unwrap()
    );
    assert_eq!(nz_number, phone_util.parse("+64 3 331 6005;ext=3456", RegionCode::nz()).unwrap());

    // A "#" after a short digit run is an extension even without a
    // written-out prefix.
    let mut us_with_extension = make_number(1, 8004567890);
    us_with_extension.set_extension("123".to_owned());
    assert_eq!(
        us_with_extension,
        phone_util.parse("(800) 456-7890 123#", RegionCode::us()).unwrap()
    );

    // Plain numbers keep no extension field.
    let parsed = phone_util.parse("03 331 6005", RegionCode::nz()).unwrap();
    assert!(!parsed.has_extension());
}

#[test]
fn parse_and_keep_raw_input() {
    let phone_util = get_phone_util();
    let number = phone_util
        .parse_and_keep_raw_input("+442079460958", RegionCode::gb())
        .unwrap();
    assert_eq!("+442079460958", number.raw_input());
    assert_eq!(CountryCodeSource::FromNumberWithPlusSign, number.country_code_source());
    assert!(number.has_preferred_domestic_carrier_code());
    assert_eq!("", number.preferred_domestic_carrier_code());

    let number = phone_util
        .parse_and_keep_raw_input("02079460958", RegionCode::gb())
        .unwrap();
    assert_eq!("02079460958", number.raw_input());
    assert_eq!(CountryCodeSource::FromDefaultCountry, number.country_code_source());

    let number = phone_util
        .parse_and_keep_raw_input("00 1 650 253 0000", RegionCode::gb())
        .unwrap();
    assert_eq!(CountryCodeSource::FromNumberWithIdd, number.country_code_source());
    assert_eq!(1, number.country_code());

    let number = phone_util
        .parse_and_keep_raw_input("1 650 253 0000", RegionCode::us())
        .unwrap();
    assert_eq!(CountryCodeSource::FromNumberWithoutPlusSign, number.country_code_source());

    // The plain parse records none of this.
    let number = phone_util.parse("+442079460958", RegionCode::gb()).unwrap();
    assert!(!number.has_raw_input());
    assert!(!number.has_preferred_domestic_carrier_code());
    assert_eq!(CountryCodeSource::Unspecified, number.country_code_source());
}

#[test]
fn failed_parse_on_invalid_numbers() {
    let phone_util = get_phone_util();
    assert_eq!(
        ParseError::NotANumber,
        phone_util
            .parse("This is not a phone number", RegionCode::nz())
            .unwrap_err()
    );
    assert_eq!(ParseError::NotANumber, phone_util.parse("12", RegionCode::us()).unwrap_err());
    assert_eq!(ParseError::NotANumber, phone_util.parse("", RegionCode::us()).unwrap_err());

    // No region and no plus sign to take the country from.
    assert_eq!(
        ParseError::InvalidCountryCode,
        phone_util
            .parse("123 456 7890", RegionCode::get_unknown())
            .unwrap_err()
    );
    assert_eq!(
        ParseError::InvalidCountryCode,
        phone_util.parse("+299 123 456", RegionCode::us()).unwrap_err()
    );

    assert_eq!(
        ParseError::TooShortAfterIdd,
        phone_util.parse("011", RegionCode::us()).unwrap_err()
    );
    // Three digits after the IDD are enough to look for a country
    // calling code; the failure then comes from the short remainder.
    assert_eq!(
        ParseError::TooShortNsn,
        phone_util.parse("00123", RegionCode::gb()).unwrap_err()
    );
    assert_eq!(
        ParseError::TooShortNsn,
        phone_util.parse("+44 22", RegionCode::gb()).unwrap_err()
    );
    assert_eq!(
        ParseError::TooLong,
        phone_util
            .parse("+44 123456789012345678", RegionCode::gb())
            .unwrap_err()
    );
}

#[test]
fn parse_non_geographical_numbers() {
    let phone_util = get_phone_util();
    let toll_free = make_number(800, 12345678);
    assert_eq!(
        toll_free,
        phone_util.parse("+800 1234 5678", RegionCode::get_unknown()).unwrap()
    );
    let premium = make_number(979, 123456789);
    assert_eq!(
        premium,
        phone_util.parse("+979 123 456 789", RegionCode::get_unknown()).unwrap()
    );
}

#[test]
fn is_number_match_matches() {
    let phone_util = get_phone_util();
    let first = phone_util.parse("+64 3 331 6005", RegionCode::nz()).unwrap();
    let second = phone_util.parse("03 331 6005", RegionCode::nz()).unwrap();
    assert_eq!(MatchType::ExactMatch, phone_util.is_number_match(&first, &second));

    assert_eq!(
        MatchType::ExactMatch,
        phone_util.is_number_match_with_two_strings("+64 3 331 6005", "+64 03 331 6005")
    );
    assert_eq!(
        MatchType::ExactMatch,
        phone_util
            .is_number_match_with_two_strings("+64 3 331-6005 ext. 1234", "+6433316005;ext=1234")
    );
    // Raw input and country code source never affect the comparison.
    let first = phone_util
        .parse_and_keep_raw_input("+64 3 331 6005", RegionCode::nz())
        .unwrap();
    assert_eq!(MatchType::ExactMatch, phone_util.is_number_match(&first, &second));
}

#[test]
fn is_number_match_nsn_matches() {
    let phone_util = get_phone_util();
    assert_eq!(
        MatchType::NsnMatch,
        phone_util.is_number_match_with_two_strings("+64 3 331-6005", "03 331 6005")
    );
    let nz_number = phone_util.parse("+64 3 331 6005", RegionCode::nz()).unwrap();
    assert_eq!(
        MatchType::NsnMatch,
        phone_util.is_number_match_with_one_string(&nz_number, "03 331 6005")
    );
    // Neither side carries a country calling code.
    assert_eq!(
        MatchType::NsnMatch,
        phone_util.is_number_match_with_two_strings("413 570 123", "413-570-123")
    );
}

#[test]
fn is_number_match_short_nsn_matches() {
    let phone_util = get_phone_util();
    let nz_number = phone_util.parse("+64 3 331 6005", RegionCode::nz()).unwrap();
    assert_eq!(
        MatchType::ShortNsnMatch,
        phone_util.is_number_match_with_one_string(&nz_number, "331 6005")
    );
    // Presence of the Italian leading zero on only one side downgrades
    // the match.
    let with_zero = phone_util.parse("+39 02 3661 8300", RegionCode::it()).unwrap();
    let without_zero = make_number(39, 236618300);
    assert_eq!(
        MatchType::ShortNsnMatch,
        phone_util.is_number_match(&with_zero, &without_zero)
    );
    // So does an extension on only one side.
    let mut with_extension = make_number(64, 33316005);
    with_extension.set_extension("1234".to_owned());
    assert_eq!(
        MatchType::ShortNsnMatch,
        phone_util.is_number_match(&with_extension, &make_number(64, 33316005))
    );
}

#[test]
fn is_number_match_non_matches() {
    let phone_util = get_phone_util();
    assert_eq!(
        MatchType::NoMatch,
        phone_util.is_number_match_with_two_strings("+64 3 331 6005", "+1 650 253 0000")
    );
    assert_eq!(
        MatchType::NoMatch,
        phone_util.is_number_match_with_two_strings("03 331 6005", "03 331 6006")
    );
    // Different extensions never match.
    let mut first = make_number(64, 33316005);
    first.set_extension("1234".to_owned());
    let mut second = make_number(64, 33316005);
    second.set_extension("1235".to_owned());
    assert_eq!(MatchType::NoMatch, phone_util.is_number_match(&first, &second));

    assert_eq!(
        MatchType::NotANumber,
        phone_util.is_number_match_with_two_strings("43", "3 331 6005")
    );
    let nz_number = phone_util.parse("+64 3 331 6005", RegionCode::nz()).unwrap();
    assert_eq!(
        MatchType::NotANumber,
        phone_util.is_number_match_with_one_string(&nz_number, "not a number")
    );
}
