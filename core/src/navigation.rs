//! Date-cursor transitions.
//!
//! Every transition is total: if chrono cannot represent the target date the
//! cursor stays where it is.

use chrono::Datelike;
use chrono::Days;
use chrono::Months;
use chrono::NaiveDate;

use crate::cache::GridCache;
use crate::clock::Clock;
use crate::command::Command;
use crate::grid::days_in_month;
use crate::grid::first_weekday_offset;
use crate::grid::row_index;

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Apply `command` to `date`.
pub fn navigate(
    date: NaiveDate,
    command: Command,
    grids: &mut GridCache,
    clock: &dyn Clock,
) -> NaiveDate {
    let next = match command {
        Command::DayPrev => date.checked_sub_days(Days::new(1)),
        Command::DayNext => date.checked_add_days(Days::new(1)),
        Command::WeekPrev => date.checked_sub_days(Days::new(7)),
        Command::WeekNext => date.checked_add_days(Days::new(7)),
        Command::WeekStart => start_of_displayed_week(date, grids),
        Command::WeekEnd => end_of_displayed_week(date, grids),
        Command::MonthStart => date.with_day(1),
        Command::MonthEnd => date.with_day(days_in_month(date.year(), date.month())),
        Command::MonthPrev => date.checked_sub_months(Months::new(1)),
        Command::MonthNext => date.checked_add_months(Months::new(1)),
        Command::YearPrev => date.checked_sub_months(Months::new(12)),
        Command::YearNext => date.checked_add_months(Months::new(12)),
        Command::Today => Some(clock.today()),
    };
    next.unwrap_or(date)
}

/// First day of the grid row holding `date`. A first row with leading blanks
/// continues the previous month's last row, so the answer comes from there.
fn start_of_displayed_week(date: NaiveDate, grids: &mut GridCache) -> Option<NaiveDate> {
    let (year, month) = (date.year(), date.month());
    let grid = grids.get(year, month);
    let offset = first_weekday_offset(year, month, grids.week_start());
    let week = grid.week(row_index(date.day(), offset))?;

    if !week.has_leading_blank() {
        return date.with_day(week.first_day()?);
    }
    let (year, month) = previous_month(year, month);
    let day = grids.get(year, month).last_week()?.slot(0)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Last day of the grid row holding `date`, continuing into the next month's
/// first row when the current row has trailing blanks.
fn end_of_displayed_week(date: NaiveDate, grids: &mut GridCache) -> Option<NaiveDate> {
    let (year, month) = (date.year(), date.month());
    let grid = grids.get(year, month);
    let offset = first_weekday_offset(year, month, grids.week_start());
    let week = grid.week(row_index(date.day(), offset))?;

    if !week.has_trailing_blank() {
        return date.with_day(week.last_day()?);
    }
    let (year, month) = next_month(year, month);
    let day = grids.get(year, month).first_week()?.slot(6)?;
    NaiveDate::from_ymd_opt(year, month, day)
}
