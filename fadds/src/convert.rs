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

//! Converters from the extracts' string encodings to typed values.

use chrono::NaiveDate;
use log::debug;

use crate::{Error, Value};

const COMPACT_DMS: &str = "DDMMSS followed by N or S, or DDDMMSS followed by E or W";
const DASHED_DMS: &str = "D-M-S.sss followed by N, S, E or W";

/// Converts a compact coordinate like `335303N` or `0844402W` to decimal
/// degrees, negative in the southern and western hemisphere.
///
/// # Errors
///
/// Returns [`Error::Format`] unless the value is seven characters ending in
/// `N` or `S`, or eight characters ending in `E` or `W`, with digits before.
///
/// # Examples
///
/// ```
/// use fadds::convert::dms_compact_to_decimal;
///
/// let lon = dms_compact_to_decimal("0844402W")?;
/// assert!((lon + 84.733888888).abs() < 1e-9);
/// # Ok::<(), fadds::Error>(())
/// ```
pub fn dms_compact_to_decimal(s: &str) -> Result<f64, Error> {
    let err = || Error::Format {
        value: s.to_owned(),
        expected: COMPACT_DMS,
    };

    let bytes = s.as_bytes();
    let (deg_len, sign) = match (bytes.len(), bytes.last()) {
        (7, Some(b'N')) => (2, 1.0),
        (7, Some(b'S')) => (2, -1.0),
        (8, Some(b'E')) => (3, 1.0),
        (8, Some(b'W')) => (3, -1.0),
        _ => return Err(err()),
    };

    let deg = parse_numeric!(&bytes[..deg_len]).ok_or_else(err)?;
    let min = parse_numeric!(&bytes[deg_len..deg_len + 2]).ok_or_else(err)?;
    let sec = parse_numeric!(&bytes[deg_len + 2..deg_len + 4]).ok_or_else(err)?;

    Ok(sign * (deg as f64 + (min * 60 + sec) as f64 / 3600.0))
}

/// Converts a dashed coordinate like `37-32-29.770N` to decimal degrees,
/// negative in the southern and western hemisphere.
///
/// # Errors
///
/// Returns [`Error::Format`] if the last character is not a hemisphere or if
/// the value is not integer degrees and minutes with decimal seconds.
///
/// # Examples
///
/// ```
/// use fadds::convert::dms_dashed_to_decimal;
///
/// let lat = dms_dashed_to_decimal("33-53-03.000S")?;
/// assert!((lat + 33.884166666).abs() < 1e-9);
/// # Ok::<(), fadds::Error>(())
/// ```
pub fn dms_dashed_to_decimal(s: &str) -> Result<f64, Error> {
    let err = || Error::Format {
        value: s.to_owned(),
        expected: DASHED_DMS,
    };

    let (dms, sign) = match s.as_bytes().last() {
        Some(b'N' | b'E') => (&s[..s.len() - 1], 1.0),
        Some(b'S' | b'W') => (&s[..s.len() - 1], -1.0),
        _ => return Err(err()),
    };

    let mut parts = dms.split('-');
    let (Some(deg), Some(min), Some(sec), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(err());
    };

    let deg: u32 = deg.parse().map_err(|_| err())?;
    let min: u32 = min.parse().map_err(|_| err())?;
    let sec: f64 = sec
        .parse()
        .ok()
        .filter(|sec: &f64| sec.is_finite() && sec.is_sign_positive())
        .ok_or_else(err)?;

    Ok(sign * (deg as f64 + (min as f64 * 60.0 + sec) / 3600.0))
}

/// Converts the FAA's `Y`/`N` flags. Anything but `Y` is `false`.
#[inline]
pub fn flag_to_boolean(s: &str) -> bool {
    s == "Y"
}

/// The slashed date formats of the extracts.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum DatePattern {
    /// `MM/YYYY`, taken as the first of the month.
    MonthYear,
    /// `MM/DD/YYYY`.
    MonthDayYear,
}

/// Parses a slashed date.
///
/// Dates in the extracts are not always well-formed, so a value that doesn't
/// match the pattern is `None` rather than an error.
pub fn date_from_slashed(s: &str, pattern: DatePattern) -> Option<NaiveDate> {
    let mut parts = s.split('/');
    let date = match (pattern, parts.next(), parts.next(), parts.next(), parts.next()) {
        (DatePattern::MonthYear, Some(month), Some(year), None, None) => {
            ymd(year, month, "1")
        }
        (DatePattern::MonthDayYear, Some(month), Some(day), Some(year), None) => {
            ymd(year, month, day)
        }
        _ => None,
    };

    if date.is_none() {
        debug!("ignoring malformed date \"{s}\" ({pattern:?})");
    }

    date
}

/// Digits only: a four-digit year, a month and day of one or two digits.
fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    if year.len() != 4 || month.len() > 2 || day.len() > 2 {
        return None;
    }

    let year = parse_numeric!(year.as_bytes())?;
    let month = parse_numeric!(month.as_bytes())?;
    let day = parse_numeric!(day.as_bytes())?;
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// A converter that can be applied to a decoded field.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Converter {
    /// [`dms_compact_to_decimal`]
    DmsCompact,
    /// [`dms_dashed_to_decimal`]
    DmsDashed,
    /// [`flag_to_boolean`]
    Flag,
    /// [`date_from_slashed`], with an unparsable date as [`Value::Null`].
    Date(DatePattern),
}

impl Converter {
    /// Converts the text to a typed value.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate converter fails.
    pub fn apply(self, s: &str) -> Result<Value, Error> {
        match self {
            Self::DmsCompact => dms_compact_to_decimal(s).map(Value::Float),
            Self::DmsDashed => dms_dashed_to_decimal(s).map(Value::Float),
            Self::Flag => Ok(Value::Bool(flag_to_boolean(s))),
            Self::Date(pattern) => Ok(date_from_slashed(s, pattern).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_almost_eq(expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() < 1e-7,
            "expected {expected} but got {actual}"
        );
    }

    #[test]
    fn converts_compact_dms() {
        assert_almost_eq(33.884166666, dms_compact_to_decimal("335303N").unwrap());
        assert_almost_eq(-33.884166666, dms_compact_to_decimal("335303S").unwrap());
        assert_almost_eq(-84.73388888888, dms_compact_to_decimal("0844402W").unwrap());
        assert_almost_eq(84.73388888888, dms_compact_to_decimal("0844402E").unwrap());
    }

    #[test]
    fn rejects_malformed_compact_dms() {
        for value in [
            "", "335303", "335303E", "0844402N", "3353030N", "08444W", "33A303N", "0844402w",
        ] {
            assert_eq!(
                dms_compact_to_decimal(value),
                Err(Error::Format {
                    value: value.to_string(),
                    expected: COMPACT_DMS,
                }),
                "{value}"
            );
        }
    }

    #[test]
    fn converts_dashed_dms() {
        assert_almost_eq(33.884166666, dms_dashed_to_decimal("33-53-03.000N").unwrap());
        assert_almost_eq(-33.884166666, dms_dashed_to_decimal("33-53-03.000S").unwrap());
        assert_almost_eq(-84.73388888888, dms_dashed_to_decimal("084-44-02.000W").unwrap());
        assert_almost_eq(84.73388888888, dms_dashed_to_decimal("084-44-02.000E").unwrap());
        assert_almost_eq(1.016975, dms_dashed_to_decimal("01-01-01.110N").unwrap());
        assert_almost_eq(39.01111111, dms_dashed_to_decimal("39-00-40.0000N").unwrap());
    }

    #[test]
    fn rejects_malformed_dashed_dms() {
        for value in [
            "",
            "N",
            "33-53-03.000",
            "33-53-03.000X",
            "33-53N",
            "33-53-03-01N",
            "3A-53-03.000N",
            "33-53-xx.000N",
            "33-53-inf N",
            "33-53-NaNN",
        ] {
            assert!(
                matches!(dms_dashed_to_decimal(value), Err(Error::Format { .. })),
                "{value}"
            );
        }
    }

    #[test]
    fn converts_flags() {
        assert!(flag_to_boolean("Y"));
        assert!(!flag_to_boolean("N"));
        assert!(!flag_to_boolean(""));
        assert!(!flag_to_boolean("y"));
    }

    #[test]
    fn parses_slashed_dates() {
        assert_eq!(
            date_from_slashed("10/17/2013", DatePattern::MonthDayYear),
            NaiveDate::from_ymd_opt(2013, 10, 17)
        );
        assert_eq!(
            date_from_slashed("04/1940", DatePattern::MonthYear),
            NaiveDate::from_ymd_opt(1940, 4, 1)
        );
        assert_eq!(
            date_from_slashed("4/1940", DatePattern::MonthYear),
            NaiveDate::from_ymd_opt(1940, 4, 1)
        );
    }

    #[test]
    fn swallows_malformed_dates() {
        assert_eq!(date_from_slashed("", DatePattern::MonthDayYear), None);
        assert_eq!(date_from_slashed("02/30/2013", DatePattern::MonthDayYear), None);
        assert_eq!(date_from_slashed("04/1940", DatePattern::MonthDayYear), None);
        assert_eq!(date_from_slashed("13/1940", DatePattern::MonthYear), None);
        assert_eq!(date_from_slashed("04/40", DatePattern::MonthYear), None);
        assert_eq!(date_from_slashed("041940", DatePattern::MonthYear), None);
        assert_eq!(date_from_slashed("04/-940", DatePattern::MonthYear), None);
        assert_eq!(date_from_slashed("+4/1940", DatePattern::MonthYear), None);
        assert_eq!(date_from_slashed("04/1940/01", DatePattern::MonthYear), None);
        assert_eq!(date_from_slashed("10/17/-013", DatePattern::MonthDayYear), None);
        assert_eq!(date_from_slashed("+1/17/2013", DatePattern::MonthDayYear), None);
    }

    #[test]
    fn applies_converters() {
        assert_eq!(Converter::Flag.apply("Y"), Ok(Value::Bool(true)));
        assert_eq!(
            Converter::Date(DatePattern::MonthYear).apply("garbage"),
            Ok(Value::Null)
        );
        assert!(matches!(
            Converter::DmsDashed.apply("39-00-40.0000N"),
            Ok(Value::Float(_))
        ));
        assert!(Converter::DmsCompact.apply("39-00-40.0000N").is_err());
    }
}
