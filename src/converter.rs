//! CSV to QIF conversion loop.
//!
//! Reads rows one at a time, parses each into a [`TransactionRecord`] and
//! appends its QIF block to the output. The first bad row aborts the run;
//! whatever was written before it stays in the output.
//!
//! [`TransactionRecord`]: crate::record::TransactionRecord

use crate::config::Config;
use crate::error::{ConvertError, Result};
use crate::qif::{MemoOptions, QifWriter};
use crate::record::parse_record;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};

/// How rows are read and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Treat the first row as column headers and drop it
    pub skip_first_row: bool,

    /// Memo line composition
    pub memo: MemoOptions,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            skip_first_row: true,
            memo: MemoOptions::default(),
        }
    }
}

/// Counters reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertSummary {
    /// Rows read from the input, header included
    pub rows_read: usize,

    /// QIF blocks written
    pub records_written: usize,

    /// Whether the first row was dropped as a header
    pub header_skipped: bool,
}

/// Converts bank CSV exports to QIF.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Creates a converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Converter { options }
    }

    /// Converts CSV rows from `input` into QIF written to `output`.
    ///
    /// `input_name` and `output_name` only label error messages.
    pub fn convert<R: Read, W: Write>(
        &self,
        input: R,
        input_name: &str,
        output: W,
        output_name: &str,
    ) -> Result<ConvertSummary> {
        let output_error = |source| ConvertError::OutputIo {
            target: output_name.to_string(),
            source,
        };

        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input);

        let mut writer = QifWriter::new(output).map_err(output_error)?;
        let mut summary = ConvertSummary::default();
        let mut raw = StringRecord::new();

        loop {
            let row = summary.rows_read + 1;

            let more = csv_reader
                .read_record(&mut raw)
                .map_err(|source| ConvertError::Csv {
                    row,
                    file: input_name.to_string(),
                    source,
                })?;
            if !more {
                break;
            }
            summary.rows_read = row;

            if row == 1 && self.options.skip_first_row {
                debug!("Row {}: skipping header", row);
                summary.header_skipped = true;
                continue;
            }

            let fields: Vec<&str> = raw.iter().collect();
            let record = parse_record(&fields).map_err(|source| ConvertError::Record {
                row,
                file: input_name.to_string(),
                source,
            })?;

            writer
                .write_record(&record, &self.options.memo)
                .map_err(output_error)?;
            debug!(
                "Row {}: {} {} {}",
                row, record.date, record.amount, record.name
            );
        }

        summary.records_written = writer.records_written();
        writer.finish().map_err(output_error)?;

        info!(
            "Converted {} of {} rows from {}",
            summary.records_written, summary.rows_read, input_name
        );
        Ok(summary)
    }
}

/// Converts the file named by `config.input_path` into `config.output_path`.
///
/// The output file is created (or truncated) before the first row is read.
pub fn convert_file(config: &Config) -> Result<ConvertSummary> {
    let input_path = &config.input_path;
    let input_error = |source| ConvertError::InputIo {
        path: input_path.clone(),
        source,
    };

    let metadata = match fs::metadata(input_path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConvertError::InputNotFound {
                path: input_path.clone(),
            })
        }
        Err(e) => return Err(input_error(e)),
    };
    if metadata.len() == 0 {
        return Err(ConvertError::InputEmpty {
            path: input_path.clone(),
        });
    }

    let input = File::open(input_path).map_err(input_error)?;

    let output_name = config.output_path.display().to_string();
    let output = File::create(&config.output_path).map_err(|source| ConvertError::OutputIo {
        target: output_name.clone(),
        source,
    })?;

    info!("Converting {} to {}", input_path.display(), output_name);

    Converter::new(config.options).convert(
        BufReader::new(input),
        &input_path.display().to_string(),
        BufWriter::new(output),
        &output_name,
    )
}
