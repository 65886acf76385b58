//! Standard type to use with the `--week-start` CLI option.

use clap::ValueEnum;

use datepick_core::WeekStart;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum WeekStartCliArg {
    /// Weeks run Monday to Sunday.
    Monday,

    /// Weeks run Sunday to Saturday.
    Sunday,
}

impl From<WeekStartCliArg> for WeekStart {
    fn from(value: WeekStartCliArg) -> Self {
        match value {
            WeekStartCliArg::Monday => WeekStart::MondayFirst,
            WeekStartCliArg::Sunday => WeekStart::SundayFirst,
        }
    }
}
