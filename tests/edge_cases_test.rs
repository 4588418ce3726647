//! Edge case tests for parsing and QIF conversion.

use csv2qif::{
    format_record, parse_record, ConvertError, ConvertOptions, Converter, MemoOptions, ParseError,
};
use std::io::Cursor;

const HEADER: &str = "Datum,Naam / Omschrijving,Rekening,Tegenrekening,Code,Af Bij,Bedrag (EUR),MutatieSoort,Mededelingen";

fn run_csv(csv: &str, options: ConvertOptions) -> Result<String, ConvertError> {
    let mut output = Vec::new();
    Converter::new(options).convert(Cursor::new(csv), "edge.csv", &mut output, "edge.qif")?;
    Ok(String::from_utf8(output).unwrap())
}

fn data_row(direction: &str, amount: &str) -> Vec<String> {
    vec![
        "20161003".to_string(),
        "Albert Heijn".to_string(),
        "NL09INGB1234567890".to_string(),
        "".to_string(),
        "BA".to_string(),
        direction.to_string(),
        amount.to_string(),
        "Diversen".to_string(),
        "Lunch".to_string(),
    ]
}

/// Extracts the `T` and `U` lines of the first block.
fn amount_lines(output: &str) -> (String, String) {
    let t = output.lines().find(|l| l.starts_with('T')).unwrap();
    let u = output.lines().find(|l| l.starts_with('U')).unwrap();
    (t[1..].to_string(), u[1..].to_string())
}

// ==================== ROW SHAPE ====================

#[test]
fn test_every_wrong_arity_is_rejected() {
    for arity in (0..9).chain(10..14) {
        let raw: Vec<String> = (0..arity).map(|i| format!("col{}", i)).collect();
        match parse_record(&raw) {
            Err(ParseError::RowShape { found, .. }) => assert_eq!(found, arity),
            other => panic!("arity {} should be a RowShape error, got {:?}", arity, other),
        }
    }
}

#[test]
fn test_extra_column_in_csv_aborts_run() {
    let csv = format!("{}\n20161003,a,b,c,d,Af,\"1,00\",e,f,extra\n", HEADER);
    let err = run_csv(&csv, ConvertOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Record {
            row: 2,
            source: ParseError::RowShape { found: 10, .. },
            ..
        }
    ));
}

#[test]
fn test_quoted_comma_stays_in_column() {
    let csv = format!(
        "{}\n20161003,\"Jansen, P.\",b,c,d,Bij,\"1,00\",e,\"a, b\"\n",
        HEADER
    );
    let output = run_csv(&csv, ConvertOptions::default()).unwrap();
    assert!(output.contains("\nPJansen, P.\n"));
}

// ==================== DATES ====================

#[test]
fn test_date_is_rendered_month_first() {
    let record = parse_record(&data_row("Af", "1,00")).unwrap();
    let block = format_record(&record, &MemoOptions::default());
    assert!(block.starts_with("D10/03/2016\n"));
}

#[test]
fn test_leap_day() {
    let mut raw = data_row("Af", "1,00");
    raw[0] = "20160229".to_string();
    let record = parse_record(&raw).unwrap();
    assert!(format_record(&record, &MemoOptions::default()).starts_with("D02/29/2016\n"));

    raw[0] = "20170229".to_string();
    assert!(matches!(parse_record(&raw), Err(ParseError::Date { .. })));
}

// ==================== AMOUNTS ====================

#[test]
fn test_outgoing_amount_is_negative_on_both_lines() {
    let csv = format!("{}\n20161003,a,b,c,d,Af,\"12,34\",e,f\n", HEADER);
    let output = run_csv(&csv, ConvertOptions::default()).unwrap();
    assert_eq!(amount_lines(&output), ("-12.34".to_string(), "-12.34".to_string()));
}

#[test]
fn test_incoming_amount_is_positive() {
    let csv = format!("{}\n20161003,a,b,c,d,Bij,\"50,00\",e,f\n", HEADER);
    let output = run_csv(&csv, ConvertOptions::default()).unwrap();
    assert_eq!(amount_lines(&output), ("50.00".to_string(), "50.00".to_string()));
}

#[test]
fn test_sign_follows_direction_for_many_amounts() {
    let amounts = ["0,01", "1", "1,5", "12,34", "999999,99", "0,00"];
    for amount in amounts {
        let magnitude = amount.replacen(',', ".", 1);

        let outgoing = parse_record(&data_row("Af", amount)).unwrap();
        assert!(outgoing.amount.is_negative() || outgoing.amount.is_zero());
        assert_eq!(
            (-outgoing.amount).value(),
            magnitude.parse::<rust_decimal::Decimal>().unwrap()
        );

        let incoming = parse_record(&data_row("Bij", amount)).unwrap();
        assert!(!incoming.amount.is_negative());
        assert_eq!(
            incoming.amount.value(),
            magnitude.parse::<rust_decimal::Decimal>().unwrap()
        );
    }
}

#[test]
fn test_zero_outgoing_amount_has_no_minus_sign() {
    let record = parse_record(&data_row("Af", "0,00")).unwrap();
    let block = format_record(&record, &MemoOptions::default());
    assert!(block.contains("\nT0.00\nU0.00\n"));
}

#[test]
fn test_amount_with_period_separator_is_accepted() {
    let record = parse_record(&data_row("Bij", "3.25")).unwrap();
    assert_eq!(record.amount.to_string(), "3.25");
}

#[test]
fn test_amount_with_thousands_separators_is_rejected() {
    assert!(matches!(
        parse_record(&data_row("Bij", "1.234,56")),
        Err(ParseError::Amount { .. })
    ));
}

#[test]
fn test_amount_with_underscores_or_exponent_is_rejected() {
    for amount in ["1_000,00", "1e3", "1,5e2", "Inf"] {
        match parse_record(&data_row("Bij", amount)) {
            Err(ParseError::Amount { value, .. }) => assert_eq!(value, amount),
            other => panic!("amount {:?} should be rejected, got {:?}", amount, other),
        }
    }
}

// ==================== MEMO ====================

#[test]
fn test_memo_kind_only() {
    let record = parse_record(&data_row("Af", "1,00")).unwrap();
    let block = format_record(&record, &MemoOptions::default());
    assert!(block.contains("\nMDiversen\n"));
}

#[test]
fn test_memo_all_fragments() {
    let record = parse_record(&data_row("Af", "1,00")).unwrap();
    let options = MemoOptions {
        include_code: true,
        include_kind: true,
        include_comment: true,
    };
    assert!(format_record(&record, &options).contains("\nMBA Diversen Lunch\n"));
}

#[test]
fn test_memo_code_and_comment_without_kind() {
    let record = parse_record(&data_row("Af", "1,00")).unwrap();
    let options = MemoOptions {
        include_code: true,
        include_kind: false,
        include_comment: true,
    };
    assert!(format_record(&record, &options).contains("\nMBA Lunch\n"));
}

// ==================== HEADER HANDLING ====================

#[test]
fn test_first_row_skipped_even_when_valid() {
    let csv = "20161003,first,b,c,d,Af,\"1,00\",e,f\n20161004,second,b,c,d,Af,\"2,00\",e,f\n";
    let output = run_csv(csv, ConvertOptions::default()).unwrap();

    assert!(!output.contains("Pfirst"));
    assert!(output.contains("Psecond"));
}

#[test]
fn test_first_row_skipped_even_when_malformed() {
    let csv = "garbage\n20161004,second,b,c,d,Af,\"2,00\",e,f\n";
    let output = run_csv(csv, ConvertOptions::default()).unwrap();
    assert!(output.contains("Psecond"));
}

#[test]
fn test_qif_header_exactly_once() {
    for rows in 0..4 {
        let mut csv = format!("{}\n", HEADER);
        for i in 0..rows {
            csv.push_str(&format!("2016100{},n{},b,c,d,Af,\"1,00\",e,f\n", i + 1, i));
        }

        let output = run_csv(&csv, ConvertOptions::default()).unwrap();
        assert!(output.starts_with("!Type:Bank\n"));
        assert_eq!(output.matches("!Type:Bank").count(), 1);
        assert_eq!(output.matches("\n^\n").count(), rows);
    }
}

// ==================== DETERMINISM ====================

#[test]
fn test_conversion_is_deterministic() {
    let csv = format!(
        "{}\n20161003,a,b,c,BA,Af,\"12,34\",Diversen,Lunch\n20161004,x,y,z,GT,Bij,\"5,00\",Online bankieren,\n",
        HEADER
    );
    let options = ConvertOptions {
        skip_first_row: true,
        memo: MemoOptions {
            include_code: true,
            include_kind: true,
            include_comment: true,
        },
    };

    let first = run_csv(&csv, options).unwrap();
    let second = run_csv(&csv, options).unwrap();
    assert_eq!(first, second);
}
