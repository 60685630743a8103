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

mod regions;

use crate::model::PhoneMetadata;

/// Returns the numbering plans bundled with the library, main countries
/// for a calling code before the other countries sharing it.
pub(crate) fn load_metadata() -> Vec<PhoneMetadata> {
    vec![
        regions::us(),
        regions::bs(),
        regions::ar(),
        regions::au(),
        regions::de(),
        regions::gb(),
        regions::it(),
        regions::kz(),
        regions::nz(),
        regions::ru(),
        regions::sg(),
        regions::universal_toll_free(),
        regions::universal_premium_rate(),
    ]
}
