//! csv2qif CLI
//!
//! Converts an ING bank CSV export into a QIF file that YNAB (You Need A
//! Budget) can import.
//!
//! # Usage
//!
//! ```bash
//! # drag and drop, or a bare path: writes NL09INGB1234567890_03-10-2016_03-11-2016.qif
//! csv2qif NL09INGB1234567890_03-10-2016_03-11-2016.csv
//!
//! csv2qif -i export.csv --out-file export.qif --use-code true --use-comment true
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use clap::{ArgAction, CommandFactory, Parser};
use csv2qif::{convert_file, Config, ConvertOptions, MemoOptions};
use std::env;
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::Duration;

/// Pause used when started by dropping a file on the executable, so the
/// error stays readable before the console window closes.
const DRAG_DROP_PAUSE_SECS: u64 = 10;

#[derive(Parser, Debug)]
#[command(
    name = "csv2qif",
    version,
    about = "Convert ING bank transaction CSV files to QIF for YNAB",
    after_help = "Example: csv2qif -i NL09INGB1234567890_03-10-2016_03-11-2016.csv \
                  --out-file export.qif --use-code true --use-comment true"
)]
struct Cli {
    /// The CSV file to read (same as --input, used for drag and drop)
    #[arg(value_name = "FILE", conflicts_with = "input")]
    file: Option<PathBuf>,

    /// The CSV file to read
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// The QIF file to write; defaults to the CSV name with a .qif extension
    #[arg(short, long, value_name = "FILE")]
    out_file: Option<PathBuf>,

    /// Skip the first line of the CSV file
    #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    skip_headers: bool,

    /// Use the ING code in the QIF memo
    #[arg(long, value_name = "BOOL", default_value_t = false, action = ArgAction::Set)]
    use_code: bool,

    /// Use the ING transaction kind in the QIF memo
    #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    use_kind: bool,

    /// Use the ING comment in the QIF memo
    #[arg(long, value_name = "BOOL", default_value_t = false, action = ArgAction::Set)]
    use_comment: bool,

    /// Seconds to wait before exiting after an error
    /// [default: 10 when started with only a file path, otherwise 0]
    #[arg(long, value_name = "SECONDS")]
    pause_on_error: Option<u64>,
}

impl Cli {
    /// Started with nothing but a path, as Explorer does on drag and drop.
    /// `arg_count` includes the program name.
    fn is_drag_drop(&self, arg_count: usize) -> bool {
        self.file.is_some() && arg_count == 2
    }

    fn pause_on_error(&self, arg_count: usize) -> Duration {
        pause_duration(self.pause_on_error, self.is_drag_drop(arg_count))
    }

    fn into_config(self) -> Option<Config> {
        let input = self.input.or(self.file)?;
        let options = ConvertOptions {
            skip_first_row: self.skip_headers,
            memo: MemoOptions {
                include_code: self.use_code,
                include_kind: self.use_kind,
                include_comment: self.use_comment,
            },
        };
        Some(Config::new(input, self.out_file, options))
    }
}

/// An explicit `--pause-on-error` wins; otherwise only drag and drop pauses.
fn pause_duration(explicit_secs: Option<u64>, drag_drop: bool) -> Duration {
    let default = if drag_drop { DRAG_DROP_PAUSE_SECS } else { 0 };
    Duration::from_secs(explicit_secs.unwrap_or(default))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let pause = cli.pause_on_error(env::args_os().len());

    let Some(config) = cli.into_config() else {
        eprint!("{}", Cli::command().render_help());
        process::exit(1);
    };

    match convert_file(&config) {
        Ok(_) => println!("Wrote {}", config.output_path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            thread::sleep(pause);
            process::exit(1);
        }
    }
}
