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

use std::sync::LazyLock;

use regex::{Captures, Match, Regex};

use crate::regexp_cache::RegexCache;

/// Anchored variants of the patterns `full_match` has been asked about.
/// A plain `find` cannot prove the absence of a full match: alternation
/// is leftmost-first, so a shorter branch can win at the start of the
/// string even when another branch spans all of it.
static ANCHORED_PATTERN_CACHE: LazyLock<RegexCache> =
    LazyLock::new(|| RegexCache::with_capacity(64));

pub trait RegexFullMatch {
    /// Eq of C fullMatch
    fn full_match(&self, s: &str) -> bool;
}

pub trait RegexConsume {
    fn matches_start<'a>(&self, s: &'a str) -> bool {
        self.find_start(s).is_some()
    }

    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>>;
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>>;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        let Some(matched) = self.find(s) else {
            return false;
        };
        if matched.start() != 0 {
            // No match can start earlier than the leftmost one.
            return false;
        }
        if matched.end() == s.len() {
            return true;
        }
        // The preferred match stopped short of the end; retest against
        // the anchored form of the pattern, which matches if and only if
        // some branch covers the whole string.
        ANCHORED_PATTERN_CACHE
            .get_regex(&format!("^(?:{})$", self.as_str()))
            .is_ok_and(|anchored| anchored.is_match(s))
    }
}

impl RegexConsume for Regex {
    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>> {
        let captures = self.captures(s)?;
        let full_capture = captures.get(0)?;
        if full_capture.start() != 0 {
            return None
        }

        Some(captures)
    }

    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        let found = self.find(s)?;
        if found.start() != 0 {
            return None
        }
        Some(found)
    }
}
