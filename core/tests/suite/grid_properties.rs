use datepick_core::GridCache;
use datepick_core::WeekStart;
use datepick_core::grid::DAYS_PER_WEEK;
use datepick_core::grid::build_grid;
use datepick_core::grid::days_in_month;
use datepick_core::grid::first_weekday_offset;
use datepick_core::grid::row_index;
use pretty_assertions::assert_eq;

const CONVENTIONS: [WeekStart; 2] = [WeekStart::MondayFirst, WeekStart::SundayFirst];

/// Every day appears once, in row-major order, and blanks only pad the
/// first and last rows.
#[test]
fn every_grid_is_well_formed() {
    for week_start in CONVENTIONS {
        for year in 1..=9999 {
            for month in 1..=12 {
                let grid = build_grid(year, month, week_start);
                let rows = grid.len();
                assert!((4..=6).contains(&rows), "{year}-{month}: {rows} rows");

                let slots: Vec<Option<u32>> = grid
                    .weeks()
                    .iter()
                    .flat_map(|week| week.slots().iter().copied())
                    .collect();
                assert_eq!(slots.len(), rows * DAYS_PER_WEEK);

                let leading = slots.iter().take_while(|slot| slot.is_none()).count();
                let trailing = slots.iter().rev().take_while(|slot| slot.is_none()).count();
                assert!(leading < DAYS_PER_WEEK, "{year}-{month}: blank first row");
                assert!(trailing < DAYS_PER_WEEK, "{year}-{month}: blank last row");
                assert_eq!(leading, first_weekday_offset(year, month, week_start));

                let days: Vec<u32> = slots[leading..slots.len() - trailing]
                    .iter()
                    .map(|slot| slot.unwrap_or(0))
                    .collect();
                let expected: Vec<u32> = (1..=days_in_month(year, month)).collect();
                assert_eq!(days, expected, "{year}-{month} {week_start}");
            }
        }
    }
}

/// The closed-form row lookup must agree with where the builder put each day.
#[test]
fn row_index_matches_the_builder() {
    for week_start in CONVENTIONS {
        for year in 1900..=2100 {
            for month in 1..=12 {
                let grid = build_grid(year, month, week_start);
                let offset = first_weekday_offset(year, month, week_start);
                for day in 1..=days_in_month(year, month) {
                    let row = row_index(day, offset);
                    assert_eq!(grid.row_of(day), Some(row), "{year}-{month}-{day}");
                    let column = grid.weeks()[row].column_of(day);
                    assert_eq!(column, Some((offset + day as usize - 1) % DAYS_PER_WEEK));
                }
            }
        }
    }
}

#[test]
fn monday_and_sunday_grids_differ_by_one_column() {
    // 2024-09-01 is a Sunday: column 6 with Monday first, column 0 with Sunday first.
    assert_eq!(first_weekday_offset(2024, 9, WeekStart::MondayFirst), 6);
    assert_eq!(first_weekday_offset(2024, 9, WeekStart::SundayFirst), 0);

    for year in 2000..=2030 {
        for month in 1..=12 {
            let monday = first_weekday_offset(year, month, WeekStart::MondayFirst);
            let sunday = first_weekday_offset(year, month, WeekStart::SundayFirst);
            assert_eq!((monday + 1) % DAYS_PER_WEEK, sunday);
        }
    }
}

#[test]
fn cache_builds_each_month_once() {
    let mut cache = GridCache::new(WeekStart::SundayFirst);
    for _ in 0..3 {
        for year in 2020..=2025 {
            for month in 1..=12 {
                let grid = cache.get(year, month);
                assert_eq!((grid.year(), grid.month()), (year, month));
            }
        }
    }
    assert_eq!(cache.build_count(), 6 * 12);
    assert_eq!(cache.len(), 6 * 12);
}

#[test]
fn colliding_integer_keys_get_their_own_entries() {
    let mut cache = GridCache::new(WeekStart::MondayFirst);
    // All of these sum to 2027.
    let months = [(2024, 3), (2023, 4), (2022, 5), (2016, 11)];
    for (year, month) in months {
        let grid = cache.get(year, month);
        assert_eq!(*grid, build_grid(year, month, WeekStart::MondayFirst));
    }
    assert_eq!(cache.build_count(), months.len());
}
