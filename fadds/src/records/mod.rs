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

//! Layouts of the FADDS record types and the dispatch from a line's tag to
//! its layout.

pub mod apt;
pub mod awos;
pub mod natfix;

use log::trace;

use crate::{decode, enrich, Enrichment, Error, Layout, Record};

/// The longest record type tag.
const MAX_TAG_LENGTH: usize = 5;

/// The record types, identified by the tag their lines start with.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum RecordKind {
    /// `APT` landing facility.
    Airport,
    /// `ATT` attendance schedule.
    Attendance,
    /// `RWY` runway.
    Runway,
    /// `RMK` remark.
    Remark,
    /// `AWOS1` weather sensor.
    AwosSensor,
    /// `AWOS2` weather sensor remark.
    AwosRemark,
    /// `NATFIX` fix, navaid or airport.
    NavFix,
}

impl RecordKind {
    pub const ALL: [RecordKind; 7] = [
        Self::Airport,
        Self::Attendance,
        Self::Runway,
        Self::Remark,
        Self::AwosSensor,
        Self::AwosRemark,
        Self::NavFix,
    ];

    /// Returns the tag a line of this kind starts with.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Airport => "APT",
            Self::Attendance => "ATT",
            Self::Runway => "RWY",
            Self::Remark => "RMK",
            Self::AwosSensor => "AWOS1",
            Self::AwosRemark => "AWOS2",
            Self::NavFix => "I ",
        }
    }

    pub fn layout(self) -> &'static Layout {
        match self {
            Self::Airport => &apt::APT,
            Self::Attendance => &apt::ATT,
            Self::Runway => &apt::RWY,
            Self::Remark => &apt::RMK,
            Self::AwosSensor => &awos::AWOS1,
            Self::AwosRemark => &awos::AWOS2,
            Self::NavFix => &natfix::NATFIX,
        }
    }

    /// Returns the typed fields derived after decoding.
    pub fn enrichments(self) -> &'static [Enrichment] {
        match self {
            Self::Airport => apt::APT_ENRICHMENTS,
            Self::Runway => apt::RWY_ENRICHMENTS,
            Self::AwosSensor => awos::AWOS1_ENRICHMENTS,
            Self::NavFix => natfix::NATFIX_ENRICHMENTS,
            Self::Attendance | Self::Remark | Self::AwosRemark => &[],
        }
    }

    /// Detects the record type from the tag at the start of the line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedRecordType`] if no record type has the
    /// line's tag.
    pub fn from_line(line: &str) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|kind| line.starts_with(kind.tag()))
            .ok_or_else(|| {
                let tag: String = line.chars().take(MAX_TAG_LENGTH).collect();
                Error::UnrecognizedRecordType {
                    tag: tag.trim_end().to_owned(),
                }
            })
    }

    /// Decodes and enriches a line of this kind without looking at its tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the line doesn't fit the layout or a field can't be
    /// converted.
    pub fn parse(self, line: &str) -> Result<Record, Error> {
        let mut record = decode(line, self.layout())?;
        enrich(&mut record, self.enrichments())?;
        trace!("parsed {:?} record with {} field(s)", self, record.len());
        Ok(record)
    }
}

/// Parses a line of any of the supported files.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedRecordType`] for an unknown tag, and otherwise
/// any error of [`RecordKind::parse`].
///
/// # Examples
///
/// ```
/// let record = fadds::parse_record("I SUNOL 373620N 1214837W 'ZOA  CA K2 REP-PT \n")?;
///
/// assert_eq!(record.get_str("id"), Some("SUNOL"));
/// assert_eq!(record.get_str("artcc_id"), Some("ZOA"));
/// let lat = record.get_f64("lat").unwrap_or_default();
/// println!("SUNOL at {lat:.4}"); // => "SUNOL at 37.6056"
/// # Ok::<(), fadds::Error>(())
/// ```
pub fn parse_record(line: &str) -> Result<Record, Error> {
    RecordKind::from_line(line)?.parse(line)
}
