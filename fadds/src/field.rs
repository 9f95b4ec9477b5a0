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

use std::fmt;

/// A fixed-width column of a record.
///
/// Named fields end up in the decoded [`Record`](crate::Record) while filler
/// only keeps the columns aligned and is skipped.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Field {
    name: Option<&'static str>,
    width: usize,
}

impl Field {
    /// A field that is decoded under `name`.
    ///
    /// # Panics
    ///
    /// Panics if the width is zero. Within a `const` this fails the build.
    pub const fn named(name: &'static str, width: usize) -> Self {
        assert!(width > 0, "field width must be positive");
        Self {
            name: Some(name),
            width,
        }
    }

    /// Filler columns without meaning.
    ///
    /// # Panics
    ///
    /// Panics if the width is zero. Within a `const` this fails the build.
    pub const fn filler(width: usize) -> Self {
        assert!(width > 0, "field width must be positive");
        Self { name: None, width }
    }

    #[inline]
    pub const fn name(&self) -> Option<&'static str> {
        self.name
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn is_filler(&self) -> bool {
        self.name.is_none()
    }
}

/// The ordered field widths of a record type.
///
/// The order of the fields is the order of the columns in the line, so a
/// layout is a slice and never a map.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Layout {
    fields: &'static [Field],
}

impl Layout {
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }

    /// Returns the fields in column order.
    #[inline]
    pub const fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// The total width in characters, which is the exact length a line must
    /// have to be decoded with this layout.
    pub const fn width(&self) -> usize {
        let mut width = 0;
        let mut i = 0;
        while i < self.fields.len() {
            width += self.fields[i].width;
            i += 1;
        }
        width
    }

    /// Returns the number of fields that are not filler.
    pub fn named_len(&self) -> usize {
        self.fields.iter().filter(|field| !field.is_filler()).count()
    }

    /// Returns the field with the name and its column range.
    pub fn position(&self, name: &str) -> Option<(usize, usize)> {
        let mut start = 0;
        for field in self.fields {
            let end = start + field.width;
            if field.name == Some(name) {
                return Some((start, end));
            }
            start = end;
        }
        None
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("fields", &self.fields.len())
            .field("width", &self.width())
            .finish()
    }
}
