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

/// The minimum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 3;

/// The ITU says the maximum length should be 15, but one can find longer
/// numbers in Germany.
pub const MAX_LENGTH_FOR_NSN: usize = 15;

/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;

/// Region code for non-geographical entities such as universal
/// international toll-free numbers.
pub const REGION_CODE_FOR_NON_GEO_ENTITY: &str = "001";

pub const NANPA_COUNTRY_CODE: i32 = 1;

pub const PLUS_SIGN: char = '+';

/// The plus sign and its fullwidth presentation form.
pub const PLUS_CHARS: &str = "+\u{FF0B}";

/// Digits understood in phone numbers: ASCII, fullwidth, arabic-indic and
/// eastern arabic-indic digits, written as character class ranges.
pub const VALID_DIGITS: &str = "0-9\u{FF10}-\u{FF19}\u{0660}-\u{0669}\u{06F0}-\u{06F9}";

pub const VALID_ALPHA: &str = "A-Za-z";

/// Punctuation tolerated inside phone numbers. This includes dashes of all
/// kinds, full stops, slashes, spaces (including the no-break and
/// ideographic ones) and brackets.
pub const VALID_PUNCTUATION: &str = "-x\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \
\u{00A0}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\u{FF3D}.\\[\\]/~\u{2053}\u{223C}\u{FF5E}";

/// A number is only deemed a second number when it follows a backslash or
/// a forward slash and the letter "x".
pub const SECOND_NUMBER_START: &str = r"[\\/] *x";

/// Trailing characters dropped from a candidate number. A trailing "#" is
/// kept as it signals an extension.
pub const UNWANTED_END_CHARS: &str = r"(?:_|[^#\w])+$";

pub const RFC3966_EXTN_PREFIX: &str = ";ext=";

/// Appended before the extension when the region metadata does not carry a
/// preferred extension prefix of its own.
pub const DEFAULT_EXTN_PREFIX: &str = " ext. ";
