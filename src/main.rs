use clap::{ArgAction, Parser, ValueEnum};
use sheetdate::{DateTime, Format, ParseError};

mod logging;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CliError {
    #[error("{0}")]
    LibraryError(#[from] ParseError),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum FormatArg {
    /// Try every format, in priority order
    Auto,
    /// Days since 1899-12-30, e.g. `44015.93`
    Serial,
    /// `MM-DD-YY`
    ShortDash,
    /// `MM/DD/YYYY`
    Slash,
    /// `YYYY-MM-DD HH:MM:SS`
    DateTime,
}

impl FormatArg {
    fn parse(&self, value: &str) -> Result<(Format, DateTime), CliError> {
        let format = match self {
            FormatArg::Auto => return Ok(sheetdate::detect(value)?),
            FormatArg::Serial => Format::Serial,
            FormatArg::ShortDash => Format::ShortYearDash,
            FormatArg::Slash => Format::SlashFullYear,
            FormatArg::DateTime => Format::DashedDateTime,
        };
        Ok((format, format.parse(value)?))
    }
}

/// Parses date strings exported from spreadsheets.
///
/// Each VALUE is printed on its own line. Values that can't be parsed are reported on stderr, and
/// the exit code is 1 if any failed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The strings to parse
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<String>,

    /// The format to parse with
    #[arg(short, long, value_enum, default_value_t = FormatArg::Auto)]
    format: FormatArg,

    /// Prefix each result with the format that parsed it
    #[arg(short, long)]
    show_format: bool,

    /// Print results as RFC 3339 UTC timestamps
    #[arg(long)]
    utc: bool,

    /// Increase log verbosity (-v, -vv, -vvv). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn render(&self, format: Format, datetime: DateTime) -> String {
        let rendered = if self.utc {
            datetime.to_utc().to_rfc3339()
        } else {
            datetime.to_string()
        };

        if self.show_format {
            format!("{format}\t{rendered}")
        } else {
            rendered
        }
    }
}

type Output = Vec<Result<String, CliError>>;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut exit_code = 0;
    for line in do_work(&cli) {
        match line {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("{e}");
                exit_code = 1;
            }
        }
    }
    std::process::exit(exit_code);
}

fn do_work(cli: &Cli) -> Output {
    cli.values
        .iter()
        .map(|value| {
            let (format, datetime) = cli.format.parse(value)?;
            Ok(cli.render(format, datetime))
        })
        .collect()
}
