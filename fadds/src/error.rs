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

use std::error;
use std::fmt;

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The line is not exactly as long as the layout it is decoded with.
    LengthMismatch { expected: usize, actual: usize },
    /// No layout is registered for the line's record type tag.
    UnrecognizedRecordType { tag: String },
    /// A value is outside of the grammar a converter accepts.
    Format {
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "line should be {expected} characters long but is {actual}")
            }
            Self::UnrecognizedRecordType { tag } => {
                write!(f, "record type \"{tag}\" is not recognized")
            }
            Self::Format { value, expected } => {
                write!(f, "found \"{value}\" but should be {expected}")
            }
        }
    }
}

impl error::Error for Error {}
