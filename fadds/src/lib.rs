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

//! FAA FADDS airport and navigation data parser.
//!
//! The FAA publishes its facility data as fixed-width text files. This crate
//! parses single lines of `APT.txt` (with `APT`, `ATT`, `RWY` and `RMK`
//! records), `AWOS.txt` and `NATFIX.txt` into a [`Record`] of trimmed text
//! fields. Coordinates, Y/N flags and dates of some fields are converted and
//! added to the record under their own keys, keeping the original text.
//!
//! # Examples
//!
//! Lets parse a fix from `NATFIX.txt` and print its position:
//!
//! ```
//! # fn main() -> Result<(), fadds::Error> {
//! let fix = fadds::parse_record("I 00AK  595122N 1514147W 'ZAN  AK PA ARPT   ")?;
//!
//! let id = fix.get_str("id").unwrap_or_default();
//! let lat = fix.get_f64("lat").unwrap_or_default();
//! let lon = fix.get_f64("lon").unwrap_or_default();
//! println!("{id} at {lat:.4}, {lon:.4}"); // => "00AK at 59.8561, -151.6964"
//! #     Ok(())
//! # }
//! ```
//!
//! Reading a file is left to the caller. The extracts are Latin-1, so each
//! line should be mapped with [`from_latin1`] and lines that are no records,
//! like the preamble of `NATFIX.txt`, skipped:
//!
//! ```no_run
//! # use std::io::BufRead;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = std::io::BufReader::new(std::fs::File::open("APT.txt")?);
//!
//! for line in file.split(b'\n') {
//!     let line = line?;
//!     match fadds::parse_record(&fadds::from_latin1(&line)) {
//!         Ok(record) => println!("{}", record["facility_site_number"]),
//!         Err(e) => eprintln!("skipping line: {e}"),
//!     }
//! }
//! #     Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

mod decode;
mod enrich;
mod error;
mod field;
mod record;

pub mod convert;
pub mod records;

pub use decode::{decode, from_latin1, LEGACY_SUBSTITUTIONS};
pub use enrich::{enrich, Enrichment};
pub use error::Error;
pub use field::{Field, Layout};
pub use record::{Record, Value};
pub use records::{parse_record, RecordKind};
