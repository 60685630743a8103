mod interfaces;
mod metadata;
mod model;
mod phonenumberutil;
mod regex_based_matcher;
mod regexp_cache;
pub mod i18n;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use model::{CountryCodeSource, NumberFormat, PhoneMetadata, PhoneNumber, PhoneNumberDesc};
pub use phonenumberutil::{
    enums::{MatchType, PhoneNumberFormat, PhoneNumberType},
    errors::{ParseError, ValidationError},
    PhoneNumberUtil, PHONE_NUMBER_UTIL,
};
