use std::path::PathBuf;

use clap::Args;
use rehab_calendar::YearMonth;
use time::Date;

use crate::render::Format;

pub mod calendar;

/// Which month to show and where its assignments come from
#[derive(Args, Debug, Clone, Default)]
pub struct MonthArgs {
    /// Month to display as YYYY-MM (defaults to the month containing today)
    #[arg(long)]
    pub month: Option<YearMonth>,

    /// Date treated as today, YYYY-MM-DD (defaults to the local date)
    #[arg(long, value_parser = rehab_shared::parse_calendar_date)]
    pub today: Option<Date>,

    /// Assignment feed, a JSON array of events (overrides config file)
    #[arg(long)]
    pub events: Option<PathBuf>,

    /// Months to move from the displayed month, negative goes back
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i32,

    /// Output format (overrides config file)
    #[arg(long, value_enum)]
    pub format: Option<Format>,
}
