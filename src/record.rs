//! Transaction records as exported by the bank, and their parser.

use crate::amount::Amount;
use crate::error::ParseError;
use chrono::NaiveDate;

/// Number of columns in an exported row.
pub const COLUMN_COUNT: usize = 9;

/// Direction token for money leaving the account ("Af" = off).
pub const OUTGOING_MARKER: &str = "Af";

const DATE_FORMAT: &str = "%Y%m%d";

/// One parsed row of the bank export.
///
/// Column order in the export is date, name, IBAN, counter IBAN, code,
/// direction, amount, kind, comments.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Transaction date
    pub date: NaiveDate,

    /// Account holder or account description
    pub name: String,

    /// IBAN of the exported account
    pub iban: String,

    /// IBAN of the counterparty, if any
    pub other_iban: String,

    /// Short transaction code (e.g. `BA`, `GT`)
    pub code: String,

    /// `Af` when money leaves the account, `Bij` when it comes in
    pub direction: String,

    /// Signed amount; negative for outgoing transactions
    pub amount: Amount,

    /// Human readable transaction kind, matches `code`
    pub transaction_kind: String,

    /// Free text memo
    pub comments: String,

    /// Columns exactly as read
    pub raw_fields: Vec<String>,
}

impl TransactionRecord {
    /// Returns `true` if the direction marks money leaving the account.
    pub fn is_outgoing(&self) -> bool {
        self.direction.contains(OUTGOING_MARKER)
    }
}

/// Parses one row of raw columns into a [`TransactionRecord`].
///
/// Either the whole row parses or an error is returned.
pub fn parse_record<S: AsRef<str>>(raw: &[S]) -> Result<TransactionRecord, ParseError> {
    if raw.len() != COLUMN_COUNT {
        return Err(ParseError::RowShape {
            expected: COLUMN_COUNT,
            found: raw.len(),
        });
    }

    let fields: Vec<&str> = raw.iter().map(|s| s.as_ref()).collect();

    let date = parse_date(fields[0])?;
    let amount = Amount::parse_comma_decimal(fields[6]).map_err(|source| ParseError::Amount {
        value: fields[6].to_string(),
        source,
    })?;

    let mut record = TransactionRecord {
        date,
        name: fields[1].trim().to_string(),
        iban: fields[2].trim().to_string(),
        other_iban: fields[3].trim().to_string(),
        code: fields[4].trim().to_string(),
        direction: fields[5].trim().to_string(),
        amount,
        transaction_kind: fields[7].trim().to_string(),
        comments: fields[8].trim().to_string(),
        raw_fields: fields.iter().map(|s| s.to_string()).collect(),
    };

    if record.is_outgoing() {
        record.amount = record.amount.negative_abs();
    }

    Ok(record)
}

/// Parses a strict `YYYYMMDD` date: eight digits, nothing else.
fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::Date {
            value: value.to_string(),
            reason: "expected 8 digits in YYYYMMDD form".to_string(),
        });
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| ParseError::Date {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
