mod phone_metadata;
mod phone_number;

pub use phone_metadata::{NumberFormat, PhoneMetadata, PhoneNumberDesc};
pub use phone_number::{CountryCodeSource, PhoneNumber};
