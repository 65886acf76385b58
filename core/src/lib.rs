//! Root of the `datepick-core` library: month grids, the grid cache and the
//! date cursor that navigates them.

// Library code never writes to the terminal; front ends own stdout/stderr.
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod cache;
pub mod clock;
pub mod command;
pub mod config;
pub mod error;
pub mod grid;
pub mod navigation;
mod picker;

pub use cache::GridCache;
pub use cache::MonthKey;
pub use clock::Clock;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use command::Command;
pub use grid::Grid;
pub use grid::Week;
pub use grid::WeekStart;
pub use picker::DatePicker;
