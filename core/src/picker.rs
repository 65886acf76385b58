use std::fmt;
use std::fmt::Write as _;
use std::sync::Arc;

use chrono::Datelike;
use chrono::NaiveDate;

use crate::cache::GridCache;
use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::command::Command;
use crate::config::Config;
use crate::config::DEFAULT_OUTPUT_FORMAT;
use crate::grid::Grid;
use crate::grid::WeekStart;
use crate::navigation::navigate;
use crate::navigation::next_month;
use crate::navigation::previous_month;

/// One date picker: a cursor, the grids it has looked at, and the clock it
/// asks for "today".
pub struct DatePicker {
    date: NaiveDate,
    grids: GridCache,
    clock: Box<dyn Clock>,
    output_format: String,
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("date", &self.date)
            .field("week_start", &self.grids.week_start())
            .field("output_format", &self.output_format)
            .finish()
    }
}

impl DatePicker {
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: &Config, clock: Box<dyn Clock>) -> Self {
        let date = config.start_at.unwrap_or_else(|| clock.today());
        Self {
            date,
            grids: GridCache::new(config.week_start),
            clock,
            output_format: config.output_format.clone(),
        }
    }

    pub fn current_date(&self) -> NaiveDate {
        self.date
    }

    pub fn week_start(&self) -> WeekStart {
        self.grids.week_start()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn grid(&mut self, year: i32, month: u32) -> Arc<Grid> {
        self.grids.get(year, month)
    }

    /// Grid of the month the cursor is in.
    pub fn current_grid(&mut self) -> Arc<Grid> {
        self.grids.get(self.date.year(), self.date.month())
    }

    pub fn previous_month_grid(&mut self) -> Arc<Grid> {
        let (year, month) = previous_month(self.date.year(), self.date.month());
        self.grids.get(year, month)
    }

    pub fn next_month_grid(&mut self) -> Arc<Grid> {
        let (year, month) = next_month(self.date.year(), self.date.month());
        self.grids.get(year, month)
    }

    pub fn dispatch(&mut self, command: Command) {
        let before = self.date;
        self.date = navigate(before, command, &mut self.grids, self.clock.as_ref());
        tracing::debug!(command = command.command(), %before, after = %self.date, "cursor moved");
    }

    /// The selected date rendered with the configured output format. Falls
    /// back to [`DEFAULT_OUTPUT_FORMAT`] if the pattern cannot be formatted.
    pub fn current_value(&self) -> String {
        let mut value = String::new();
        if write!(value, "{}", self.date.format(&self.output_format)).is_err() {
            tracing::warn!("invalid output format {:?}", self.output_format);
            return self.date.format(DEFAULT_OUTPUT_FORMAT).to_string();
        }
        value
    }

    /// Number of month grids computed so far.
    pub fn grids_built(&self) -> usize {
        self.grids.build_count()
    }
}
