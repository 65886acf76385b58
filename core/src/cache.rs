use std::collections::HashMap;
use std::sync::Arc;

use crate::grid::Grid;
use crate::grid::WeekStart;
use crate::grid::build_grid;

/// Identity of a cached month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

/// Lazily built month grids for one week-start convention.
///
/// A cache is created per picker and only ever answers for the convention it
/// was constructed with. Grids never go stale, so nothing is evicted.
#[derive(Debug)]
pub struct GridCache {
    week_start: WeekStart,
    grids: HashMap<MonthKey, Arc<Grid>>,
    builds: usize,
}

impl GridCache {
    pub fn new(week_start: WeekStart) -> Self {
        Self {
            week_start,
            grids: HashMap::new(),
            builds: 0,
        }
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Grid for `(year, month)`, building it on first use.
    pub fn get(&mut self, year: i32, month: u32) -> Arc<Grid> {
        let week_start = self.week_start;
        let builds = &mut self.builds;
        self.grids
            .entry(MonthKey::new(year, month))
            .or_insert_with(|| {
                tracing::trace!(year, month, %week_start, "building month grid");
                *builds += 1;
                Arc::new(build_grid(year, month, week_start))
            })
            .clone()
    }

    /// How many grids have been computed over the cache's lifetime.
    pub fn build_count(&self) -> usize {
        self.builds
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}
