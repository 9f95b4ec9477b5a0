// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Layout of `NATFIX.txt`, the index of fixes, navaids and airports.
//!
//! The file starts with a two-line preamble and ends with a line starting
//! with `$`. Neither is a record.

use crate::{Enrichment, Layout};

pub const NATFIX_RECORD_LENGTH: usize = 44;

// The single blank columns between the values are rolled into the preceding
// field and removed when it is trimmed.
pub const NATFIX: Layout = layout![
    _ => 2,
    "id" => 6,
    "latitude_string" => 8,
    "longitude_string" => 9,
    _ => 1,
    "artcc_id" => 5,
    "state_code" => 3,
    "icao_code" => 3,
    "fix_navaid_type" => 7,
];

const _: () = assert!(NATFIX.width() == NATFIX_RECORD_LENGTH);

pub const NATFIX_ENRICHMENTS: &[Enrichment] = &[
    Enrichment::dms_compact("latitude_string", "lat"),
    Enrichment::dms_compact("longitude_string", "lon"),
];
