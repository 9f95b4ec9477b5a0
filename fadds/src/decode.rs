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

use std::borrow::Cow;

use log::trace;

use crate::{Error, Layout, Record, Value};

/// Characters left in the extracts by their historic text encoding, and what
/// they are replaced with in decoded fields.
///
/// Only these artifacts are known from the sample data. Other record types may
/// contain more.
pub const LEGACY_SUBSTITUTIONS: &[(char, &str)] = &[
    ('\u{fa}', ""),
    ('\u{d1}', "N"),
    ('\u{bf}', ""),
    ('\u{b4}', ""),
    ('\u{b0}', ""),
];

/// Decodes a fixed-width line into a record of trimmed text fields.
///
/// Trailing line breaks are removed before the line's length is measured in
/// characters. The length must be exactly the layout's width. Filler fields
/// are skipped.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if the line is shorter or longer than the
/// layout.
///
/// # Examples
///
/// ```
/// use fadds::{decode, Field, Layout};
///
/// const FIELDS: &[Field] = &[
///     Field::named("first", 2),
///     Field::named("second", 3),
///     Field::filler(1),
///     Field::named("third", 4),
/// ];
/// const LAYOUT: Layout = Layout::new(FIELDS);
///
/// let record = decode("abcdefghij", &LAYOUT)?;
/// assert_eq!(record.get_str("first"), Some("ab"));
/// assert_eq!(record.get_str("second"), Some("cde"));
/// assert_eq!(record.get_str("third"), Some("ghij"));
/// assert_eq!(record.len(), 3);
/// # Ok::<(), fadds::Error>(())
/// ```
pub fn decode(line: &str, layout: &Layout) -> Result<Record, Error> {
    let line = line.trim_end_matches(['\r', '\n']);
    let columns = Columns::new(line);

    let expected = layout.width();
    if columns.len() != expected {
        return Err(Error::LengthMismatch {
            expected,
            actual: columns.len(),
        });
    }

    let mut record = Record::with_capacity(layout.named_len());
    let mut start = 0;

    for field in layout.fields() {
        let end = start + field.width();
        if let Some(name) = field.name() {
            record.insert(name, Value::Text(clean(columns.slice(start, end))));
        }
        start = end;
    }

    trace!("decoded {} field(s) from {expected} columns", record.len());
    Ok(record)
}

/// Maps Latin-1 bytes to a string with one character per byte.
///
/// The extracts are not UTF-8. Reading a line as Latin-1 keeps every column a
/// single character, which [`decode`] relies on, and preserves the characters
/// of [`LEGACY_SUBSTITUTIONS`].
pub fn from_latin1(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) if s.is_ascii() => Cow::Borrowed(s),
        _ => Cow::Owned(bytes.iter().map(|&b| b as char).collect()),
    }
}

/// Character columns of a line.
///
/// ASCII lines are sliced by byte offsets directly; only lines with multibyte
/// characters pay for an index of their character boundaries.
struct Columns<'a> {
    line: &'a str,
    boundaries: Option<Vec<usize>>,
}

impl<'a> Columns<'a> {
    fn new(line: &'a str) -> Self {
        let boundaries = (!line.is_ascii()).then(|| {
            line.char_indices()
                .map(|(i, _)| i)
                .chain(std::iter::once(line.len()))
                .collect()
        });

        Self { line, boundaries }
    }

    fn len(&self) -> usize {
        match &self.boundaries {
            Some(boundaries) => boundaries.len() - 1,
            None => self.line.len(),
        }
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        match &self.boundaries {
            Some(boundaries) => &self.line[boundaries[start]..boundaries[end]],
            None => &self.line[start..end],
        }
    }
}

fn clean(raw: &str) -> String {
    // ASCII blanks only, so Latin-1 0x85 and 0xA0 stay part of the field
    let trimmed = raw.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B');
    if trimmed.is_ascii() {
        return trimmed.to_owned();
    }

    let mut cleaned = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match LEGACY_SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => cleaned.push_str(to),
            None => cleaned.push(c),
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RecordKind;

    const EXAMPLE: Layout = layout![
        "first" => 2,
        "second" => 3,
        _ => 1,
        "third" => 4,
    ];

    #[test]
    fn decodes_named_fields() {
        let record = decode("abcdefghij", &EXAMPLE).expect("line should decode");

        assert_eq!(record.get_str("first"), Some("ab"));
        assert_eq!(record.get_str("second"), Some("cde"));
        assert_eq!(record.get_str("third"), Some("ghij"));
        assert_eq!(record.keys().collect::<Vec<_>>(), ["first", "second", "third"]);
    }

    #[test]
    fn trims_fields() {
        const LAYOUT: Layout = layout!["first" => 2, "second" => 2];
        let record = decode("a cd", &LAYOUT).expect("line should decode");

        assert_eq!(record.get_str("first"), Some("a"));
        assert_eq!(record.get_str("second"), Some("cd"));
    }

    #[test]
    fn keeps_non_ascii_blanks() {
        const LAYOUT: Layout = layout!["first" => 4];
        let record = decode(&from_latin1(b"AB\xa0\x85"), &LAYOUT).expect("line should decode");

        assert_eq!(record.get_str("first"), Some("AB\u{a0}\u{85}"));
    }

    #[test]
    fn trims_ascii_blanks() {
        const LAYOUT: Layout = layout!["first" => 6];
        let record = decode("\t AB\x0B\x0C", &LAYOUT).expect("line should decode");

        assert_eq!(record.get_str("first"), Some("AB"));
    }

    #[test]
    fn strips_line_breaks() {
        const LAYOUT: Layout = layout!["first" => 2, "second" => 2];

        for line in ["abcd\n", "abcd\r\n", "abcd\r"] {
            let record = decode(line, &LAYOUT).expect("line should decode");
            assert_eq!(record.get_str("second"), Some("cd"));
        }
    }

    #[test]
    fn rejects_wrong_length() {
        const LAYOUT: Layout = layout!["first" => 2, "second" => 2];

        assert_eq!(
            decode("abc", &LAYOUT),
            Err(Error::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            decode("abcde", &LAYOUT),
            Err(Error::LengthMismatch {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn replaces_legacy_characters() {
        const LAYOUT: Layout = layout!["name" => 8, "remark" => 6];
        let record = decode("CA\u{d1}ON   10\u{b0}\u{b4}\u{fa}\u{bf}", &LAYOUT)
            .expect("line should decode");

        assert_eq!(record.get_str("name"), Some("CANON"));
        assert_eq!(record.get_str("remark"), Some("10"));
    }

    #[test]
    fn keeps_other_non_ascii_characters() {
        const LAYOUT: Layout = layout!["name" => 6];
        let record = decode("M\u{e9}rida", &LAYOUT).expect("line should decode");

        assert_eq!(record.get_str("name"), Some("M\u{e9}rida"));
    }

    #[test]
    fn counts_characters_not_bytes() {
        const LAYOUT: Layout = layout!["first" => 3, _ => 1, "second" => 2];
        let record = decode("A\u{d1}B-CD", &LAYOUT).expect("line should decode");

        assert_eq!(record.get_str("first"), Some("ANB"));
        assert_eq!(record.get_str("second"), Some("CD"));
    }

    #[test]
    fn maps_latin1_bytes() {
        assert!(matches!(from_latin1(b"APT"), Cow::Borrowed("APT")));
        assert_eq!(from_latin1(b"CA\xd1ON"), "CA\u{d1}ON");
    }

    /// Builds a line where every field is filled with its own letter.
    fn synthetic_line(layout: &Layout) -> String {
        layout
            .fields()
            .iter()
            .zip((b'a'..=b'z').cycle())
            .map(|(field, letter)| (letter as char).to_string().repeat(field.width()))
            .collect()
    }

    #[test]
    fn recovers_every_field_of_every_layout() {
        for kind in RecordKind::ALL {
            let layout = kind.layout();
            let line = synthetic_line(layout);
            let record = decode(&line, layout).expect("synthetic line should decode");

            assert_eq!(record.len(), layout.named_len(), "{kind:?}");

            let mut start = 0;
            for field in layout.fields() {
                let end = start + field.width();
                if let Some(name) = field.name() {
                    assert_eq!(
                        record.get_str(name),
                        Some(&line[start..end]),
                        "{kind:?} {name}"
                    );
                }
                start = end;
            }
        }
    }

    #[test]
    fn every_layout_rejects_off_by_one() {
        for kind in RecordKind::ALL {
            let layout = kind.layout();
            let line = synthetic_line(layout);

            let shorter = &line[..line.len() - 1];
            let longer = format!("{line}x");

            assert!(
                matches!(decode(shorter, layout), Err(Error::LengthMismatch { .. })),
                "{kind:?}"
            );
            assert!(
                matches!(decode(&longer, layout), Err(Error::LengthMismatch { .. })),
                "{kind:?}"
            );
        }
    }
}
