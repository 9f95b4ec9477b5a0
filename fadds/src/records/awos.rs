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

//! Layouts of `AWOS.txt` with the automated weather observing systems.

use crate::convert::DatePattern;
use crate::{Enrichment, Layout};

pub const AWOS_RECORD_LENGTH: usize = 255;

/// Sensor location and contact data.
pub const AWOS1: Layout = layout![
    "record_type" => 5,
    "sensor_identifier" => 4,
    "sensor_type" => 10,
    "commissioning_status" => 1,
    "commissioning_date" => 10,
    "navaid_flag" => 1,
    "latitude" => 14,
    "longitude" => 15,
    "elevation" => 7,
    "survey_method" => 1,
    "frequency" => 7,
    "second_frequency" => 7,
    "telephone" => 14,
    "second_telephone" => 14,
    "landing_facility_site_number" => 11,
    "city" => 40,
    "state_post_office_code" => 2,
    "information_effective_date" => 10,
    _ => 82,
];

/// Remark on a sensor.
pub const AWOS2: Layout = layout![
    "record_type" => 5,
    "sensor_identifier" => 4,
    "sensor_type" => 10,
    "remark" => 236,
];

const _: () = assert!(AWOS1.width() == AWOS_RECORD_LENGTH);
const _: () = assert!(AWOS2.width() == AWOS_RECORD_LENGTH);

pub const AWOS1_ENRICHMENTS: &[Enrichment] = &[
    Enrichment::dms_dashed("latitude", "lat"),
    Enrichment::dms_dashed("longitude", "lon"),
    Enrichment::date(
        "commissioning_date",
        DatePattern::MonthDayYear,
        "commissioned",
    ),
];
