//! QIF output.
//!
//! Each [`TransactionRecord`] becomes one block of labeled lines:
//!
//! ```text
//! D10/03/2016
//! T-12.34
//! U-12.34
//! PAlbert Heijn 1234
//! MBetaalautomaat
//! Cc
//! N
//! ^
//! ```

use crate::record::TransactionRecord;
use std::io::{self, Write};

/// First line of every QIF file we write.
pub const QIF_HEADER: &str = "!Type:Bank";

const DATE_FORMAT: &str = "%m/%d/%Y";

/// Which record fields end up in the memo line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoOptions {
    /// Include the transaction code
    pub include_code: bool,

    /// Include the transaction kind
    pub include_kind: bool,

    /// Include the free text comments
    pub include_comment: bool,
}

impl Default for MemoOptions {
    fn default() -> Self {
        MemoOptions {
            include_code: false,
            include_kind: true,
            include_comment: false,
        }
    }
}

/// Builds the memo line from the enabled fields, in code, kind, comment order.
pub fn memo(record: &TransactionRecord, options: &MemoOptions) -> String {
    let mut fragments: Vec<&str> = Vec::with_capacity(3);
    if options.include_code {
        fragments.push(&record.code);
    }
    if options.include_kind {
        fragments.push(&record.transaction_kind);
    }
    if options.include_comment {
        fragments.push(&record.comments);
    }
    fragments.join(" ")
}

/// Renders one record as a QIF block, newline terminated.
pub fn format_record(record: &TransactionRecord, options: &MemoOptions) -> String {
    let date = record.date.format(DATE_FORMAT);

    let mut block = String::new();
    block.push_str(&format!("D{}\n", date));
    block.push_str(&format!("T{}\n", record.amount));
    block.push_str(&format!("U{}\n", record.amount));
    block.push_str(&format!("P{}\n", record.name));
    block.push_str(&format!("M{}\n", memo(record, options)));
    // cleared status
    block.push_str("Cc\n");
    block.push_str("N\n");
    block.push_str("^\n");
    block
}

/// Appends QIF blocks to a sink.
///
/// The header line is written on construction, so even a file without
/// records is a valid QIF file.
pub struct QifWriter<W: Write> {
    inner: W,
    records_written: usize,
}

impl<W: Write> QifWriter<W> {
    /// Wraps `inner` and writes the QIF header to it.
    pub fn new(mut inner: W) -> io::Result<Self> {
        writeln!(inner, "{}", QIF_HEADER)?;
        Ok(QifWriter {
            inner,
            records_written: 0,
        })
    }

    /// Formats and appends one record.
    pub fn write_record(
        &mut self,
        record: &TransactionRecord,
        options: &MemoOptions,
    ) -> io::Result<()> {
        self.inner
            .write_all(format_record(record, options).as_bytes())?;
        self.records_written += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Flushes and returns the underlying sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
