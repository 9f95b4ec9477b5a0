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

/// Declares a [`Layout`](crate::Layout) from `"name" => width` pairs, with
/// `_ => width` for filler columns.
///
/// ```ignore
/// pub const EXAMPLE: Layout = layout![
///     "record_type" => 3,
///     _ => 2,
///     "identifier" => 4,
/// ];
/// ```
macro_rules! layout {
    (@field _, $width:expr) => {
        $crate::Field::filler($width)
    };

    (@field $name:literal, $width:expr) => {
        $crate::Field::named($name, $width)
    };

    ($($name:tt => $width:expr),+ $(,)?) => {
        $crate::Layout::new({
            const FIELDS: &[$crate::Field] = &[$(layout!(@field $name, $width)),+];
            FIELDS
        })
    };
}

/// Parse ASCII digits into an `u32`, returning `None` if any byte is not a
/// digit or the slice is empty.
macro_rules! parse_numeric {
    ($b:expr) => {{
        let bytes: &[u8] = $b;
        if !bytes.is_empty() && bytes.iter().all(|&byte| byte.is_ascii_digit()) {
            Some(
                bytes
                    .iter()
                    .fold(0u32, |acc, &byte| acc * 10 + (byte & 0x0F) as u32),
            )
        } else {
            None
        }
    }};
}
