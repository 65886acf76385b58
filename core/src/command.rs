use strum_macros::AsRefStr;
use strum_macros::EnumIter;
use strum_macros::EnumString;
use strum_macros::IntoStaticStr;

/// Navigation commands understood by the date cursor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, AsRefStr, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Command {
    // Enum order is the order used in the full help listing.
    DayPrev,
    DayNext,
    WeekPrev,
    WeekNext,
    WeekStart,
    WeekEnd,
    MonthStart,
    MonthEnd,
    MonthPrev,
    MonthNext,
    YearPrev,
    YearNext,
    Today,
}

impl Command {
    /// Short description used by help output.
    pub fn description(self) -> &'static str {
        match self {
            Command::DayPrev => "previous day",
            Command::DayNext => "next day",
            Command::WeekPrev => "previous week",
            Command::WeekNext => "next week",
            Command::WeekStart => "start of week",
            Command::WeekEnd => "end of week",
            Command::MonthStart => "start of month",
            Command::MonthEnd => "end of month",
            Command::MonthPrev => "previous month",
            Command::MonthNext => "next month",
            Command::YearPrev => "previous year",
            Command::YearNext => "next year",
            Command::Today => "today",
        }
    }

    pub fn command(self) -> &'static str {
        self.into()
    }
}
