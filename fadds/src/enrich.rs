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

use log::trace;

use crate::convert::{Converter, DatePattern};
use crate::{Error, Record};

/// Derives a typed field from a decoded text field.
///
/// The source field is left as it is and the converted value is stored under
/// the target key, so enriching a record twice gives the same record.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Enrichment {
    pub source: &'static str,
    pub converter: Converter,
    pub target: &'static str,
}

impl Enrichment {
    pub const fn new(source: &'static str, converter: Converter, target: &'static str) -> Self {
        Self {
            source,
            converter,
            target,
        }
    }

    pub const fn dms_compact(source: &'static str, target: &'static str) -> Self {
        Self::new(source, Converter::DmsCompact, target)
    }

    pub const fn dms_dashed(source: &'static str, target: &'static str) -> Self {
        Self::new(source, Converter::DmsDashed, target)
    }

    pub const fn flag(source: &'static str, target: &'static str) -> Self {
        Self::new(source, Converter::Flag, target)
    }

    pub const fn date(source: &'static str, pattern: DatePattern, target: &'static str) -> Self {
        Self::new(source, Converter::Date(pattern), target)
    }

    /// Converts the source field into the target field.
    ///
    /// Nothing happens if the source is missing or empty, since many fields of
    /// the extracts are optional.
    ///
    /// # Errors
    ///
    /// Returns the converter's error.
    pub fn apply(&self, record: &mut Record) -> Result<(), Error> {
        let Some(raw) = record.non_empty_str(self.source) else {
            trace!("{} is empty, skipping {}", self.source, self.target);
            return Ok(());
        };

        let value = self.converter.apply(raw)?;
        record.insert(self.target, value);
        Ok(())
    }
}

/// Applies all enrichments in order, stopping at the first error.
///
/// # Errors
///
/// Returns the first converter error.
pub fn enrich(record: &mut Record, enrichments: &[Enrichment]) -> Result<(), Error> {
    enrichments
        .iter()
        .try_for_each(|enrichment| enrichment.apply(record))
}
