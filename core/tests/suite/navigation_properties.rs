use chrono::Datelike;
use chrono::Days;
use chrono::NaiveDate;
use datepick_core::Command;
use datepick_core::DatePicker;
use datepick_core::FixedClock;
use datepick_core::WeekStart;
use datepick_core::config::Config;
use datepick_core::grid::days_in_month;
use datepick_core::navigation::next_month;
use pretty_assertions::assert_eq;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn picker_at(date: NaiveDate, week_start: WeekStart) -> DatePicker {
    let config = Config {
        week_start,
        start_at: Some(date),
        ..Config::default()
    };
    DatePicker::with_clock(&config, Box::new(FixedClock(ymd(2026, 10, 19))))
}

fn after(date: NaiveDate, week_start: WeekStart, commands: &[Command]) -> NaiveDate {
    let mut picker = picker_at(date, week_start);
    for command in commands {
        picker.dispatch(*command);
    }
    picker.current_date()
}

fn every_day(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    from.iter_days().take_while(move |date| *date <= to)
}

#[test]
fn week_jumps_land_on_the_edges_of_the_displayed_row() {
    for week_start in [WeekStart::MondayFirst, WeekStart::SundayFirst] {
        for date in every_day(ymd(2023, 1, 1), ymd(2025, 12, 31)) {
            let column = week_start.column_of(date) as u64;
            let row_start = date.checked_sub_days(Days::new(column)).unwrap();
            let row_end = date.checked_add_days(Days::new(6 - column)).unwrap();

            assert_eq!(after(date, week_start, &[Command::WeekStart]), row_start, "{date}");
            assert_eq!(after(date, week_start, &[Command::WeekEnd]), row_end, "{date}");
            assert_eq!(
                after(date, week_start, &[Command::WeekStart, Command::WeekEnd]),
                row_end,
                "{date}"
            );
            assert_eq!(
                after(date, week_start, &[Command::WeekEnd, Command::WeekStart]),
                row_start,
                "{date}"
            );
        }
    }
}

#[test]
fn row_straddling_january_and_february_2024() {
    let monday = WeekStart::MondayFirst;
    let mut picker = picker_at(ymd(2024, 2, 1), monday);
    let grid = picker.current_grid();
    let first_row: Vec<Option<u32>> = grid.weeks()[0].slots().to_vec();
    assert_eq!(
        first_row,
        vec![None, None, None, Some(1), Some(2), Some(3), Some(4)]
    );

    picker.dispatch(Command::WeekStart);
    assert_eq!(picker.current_date(), ymd(2024, 1, 29));
    picker.dispatch(Command::WeekEnd);
    assert_eq!(picker.current_date(), ymd(2024, 2, 4));

    // From the January side of the same row the answer is the same.
    assert_eq!(after(ymd(2024, 1, 30), monday, &[Command::WeekEnd]), ymd(2024, 2, 4));
}

#[test]
fn month_round_trip_preserves_days_that_fit() {
    for date in every_day(ymd(2023, 1, 1), ymd(2024, 12, 31)) {
        let (year, month) = next_month(date.year(), date.month());
        let shorter = days_in_month(date.year(), date.month()).min(days_in_month(year, month));
        let round_trip = after(
            date,
            WeekStart::MondayFirst,
            &[Command::MonthNext, Command::MonthPrev],
        );
        if date.day() <= shorter {
            assert_eq!(round_trip, date);
        } else {
            assert_eq!(round_trip, date.with_day(shorter).unwrap(), "{date}");
        }
    }
}

#[test]
fn leap_day_year_steps() {
    let monday = WeekStart::MondayFirst;
    assert_eq!(after(ymd(2024, 2, 29), monday, &[Command::YearNext]), ymd(2025, 2, 28));
    assert_eq!(after(ymd(2000, 2, 29), monday, &[Command::YearPrev]), ymd(1999, 2, 28));
    assert_eq!(
        after(ymd(2024, 2, 28), monday, &[Command::YearNext, Command::YearPrev]),
        ymd(2024, 2, 28)
    );
}

#[test]
fn month_edges_cover_every_length() {
    let sunday = WeekStart::SundayFirst;
    for (year, month, last) in [(2023, 2, 28), (2024, 2, 29), (2024, 4, 30), (2024, 12, 31)] {
        let mid = ymd(year, month, 15);
        assert_eq!(after(mid, sunday, &[Command::MonthEnd]), ymd(year, month, last));
        assert_eq!(after(mid, sunday, &[Command::MonthStart]), ymd(year, month, 1));
    }
}
