//! Month grids: the 7-column layout of a month's days used for display and
//! for row-based navigation.

use chrono::Datelike;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::Display;

/// Number of columns in every grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// Which weekday occupies the first column of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize, Display)]
pub enum WeekStart {
    #[default]
    #[serde(rename = "monday")]
    #[strum(serialize = "monday")]
    MondayFirst,
    #[serde(rename = "sunday")]
    #[strum(serialize = "sunday")]
    SundayFirst,
}

impl WeekStart {
    pub fn from_monday_first(first_weekday_is_mo: bool) -> Self {
        if first_weekday_is_mo {
            WeekStart::MondayFirst
        } else {
            WeekStart::SundayFirst
        }
    }

    /// Column (0..=6) that `date`'s weekday occupies under this convention.
    pub fn column_of(self, date: NaiveDate) -> usize {
        let weekday = date.weekday();
        let column = match self {
            WeekStart::MondayFirst => weekday.num_days_from_monday(),
            WeekStart::SundayFirst => weekday.num_days_from_sunday(),
        };
        column as usize
    }

    /// Columns that hold Saturday and Sunday.
    pub fn is_weekend_column(self, column: usize) -> bool {
        match self {
            WeekStart::MondayFirst => column >= 5,
            WeekStart::SundayFirst => column == 0 || column == 6,
        }
    }
}

/// One grid row. `None` marks a blank slot outside the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Week([Option<u32>; DAYS_PER_WEEK]);

impl Week {
    pub fn slots(&self) -> &[Option<u32>; DAYS_PER_WEEK] {
        &self.0
    }

    pub fn slot(&self, column: usize) -> Option<u32> {
        self.0.get(column).copied().flatten()
    }

    /// First non-blank day in the row.
    pub fn first_day(&self) -> Option<u32> {
        self.0.iter().flatten().next().copied()
    }

    /// Last non-blank day in the row.
    pub fn last_day(&self) -> Option<u32> {
        self.0.iter().rev().flatten().next().copied()
    }

    pub fn column_of(&self, day: u32) -> Option<usize> {
        self.0.iter().position(|slot| *slot == Some(day))
    }

    pub fn has_leading_blank(&self) -> bool {
        self.0[0].is_none()
    }

    pub fn has_trailing_blank(&self) -> bool {
        self.0[DAYS_PER_WEEK - 1].is_none()
    }
}

/// The weeks of a single month, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    year: i32,
    month: u32,
    weeks: Vec<Week>,
}

impl Grid {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Number of rows; always 4, 5 or 6.
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn week(&self, row: usize) -> Option<&Week> {
        self.weeks.get(row)
    }

    pub fn first_week(&self) -> Option<&Week> {
        self.weeks.first()
    }

    pub fn last_week(&self) -> Option<&Week> {
        self.weeks.last()
    }

    /// Row containing `day`, located by scanning the grid.
    pub fn row_of(&self, day: u32) -> Option<usize> {
        self.weeks
            .iter()
            .position(|week| week.column_of(day).is_some())
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Column that day 1 of `(year, month)` occupies.
///
/// `(year, month)` must be a month chrono can represent; anything else is
/// placed in column 0.
pub fn first_weekday_offset(year: i32, month: u32, week_start: WeekStart) -> usize {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| week_start.column_of(first))
        .unwrap_or_default()
}

/// Row index of `day` in a month whose day 1 sits in column `offset`.
///
/// Grid slots are numbered row-major from zero, so day `d` lands in slot
/// `offset + d - 1`.
pub fn row_index(day: u32, offset: usize) -> usize {
    (day as usize + offset).saturating_sub(1) / DAYS_PER_WEEK
}

/// Lay out `(year, month)` as rows of seven slots.
pub fn build_grid(year: i32, month: u32, week_start: WeekStart) -> Grid {
    let days = days_in_month(year, month);
    let mut column = first_weekday_offset(year, month, week_start);

    let mut weeks = Vec::with_capacity(6);
    let mut week = [None; DAYS_PER_WEEK];
    for day in 1..=days {
        week[column] = Some(day);
        column += 1;
        if column == DAYS_PER_WEEK {
            weeks.push(Week(week));
            week = [None; DAYS_PER_WEEK];
            column = 0;
        }
    }
    if column > 0 {
        weeks.push(Week(week));
    }

    Grid { year, month, weeks }
}
