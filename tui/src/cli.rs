use chrono::NaiveDate;
use clap::Parser;
use datepick_common::CliConfigOverrides;
use datepick_common::WeekStartCliArg;

#[derive(Parser, Debug)]
#[command(version, about = "Pick a date in the terminal and print it to stdout.")]
pub struct Cli {
    /// Date the cursor starts on (YYYY-MM-DD). Defaults to today.
    #[arg(long = "start", short = 's', value_name = "DATE", value_parser = parse_start_date)]
    pub start_at: Option<NaiveDate>,

    /// First day of the week in the calendar.
    #[arg(long = "week-start", short = 'w', value_enum)]
    pub week_start: Option<WeekStartCliArg>,

    /// strftime pattern used to print the selected date.
    #[arg(long = "format", short = 'f', value_name = "PATTERN")]
    pub output_format: Option<String>,

    /// Do not show key help below the calendar.
    #[arg(long = "hide-help", default_value_t = false)]
    pub hide_help: bool,

    /// Log at info level instead of warn.
    #[arg(long = "debug", short = 'd', default_value_t = false)]
    pub debug: bool,

    #[clap(flatten)]
    pub config_overrides: CliConfigOverrides,
}

fn parse_start_date(raw: &str) -> Result<NaiveDate, String> {
    datepick_core::config::parse_date(raw).map_err(|err| err.to_string())
}
