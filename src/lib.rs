//! # csv2qif
//!
//! Converts ING bank CSV exports into QIF files that budgeting software
//! such as YNAB can import.
//!
//! ## Design Principles
//!
//! - **One row, one block**: every CSV row maps to one QIF block, no state
//!   is carried between rows
//! - **Exact amounts**: comma-decimal numerals are read with `rust_decimal`
//! - **Fail fast**: the first malformed row aborts the run
//! - **Decoupled output**: formatting returns strings, [`QifWriter`] owns the sink
//!
//! ## Example
//!
//! ```
//! use csv2qif::{ConvertOptions, Converter};
//! use std::io::Cursor;
//!
//! let csv = "Datum,Naam,Rekening,Tegenrekening,Code,Af Bij,Bedrag,Soort,Mededelingen\n\
//!            20161003,Albert Heijn,NL09INGB1234567890,,BA,Af,\"12,34\",Diversen,\n";
//! let mut qif = Vec::new();
//! Converter::new(ConvertOptions::default())
//!     .convert(Cursor::new(csv), "export.csv", &mut qif, "export.qif")
//!     .unwrap();
//! assert!(String::from_utf8(qif).unwrap().contains("T-12.34\n"));
//! ```

pub mod amount;
pub mod config;
pub mod converter;
pub mod error;
pub mod qif;
pub mod record;

pub use amount::Amount;
pub use config::{default_output_path, Config};
pub use converter::{convert_file, ConvertOptions, ConvertSummary, Converter};
pub use error::{ConvertError, ParseError, Result};
pub use qif::{format_record, MemoOptions, QifWriter, QIF_HEADER};
pub use record::{parse_record, TransactionRecord};
