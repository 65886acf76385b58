#[cfg(feature = "cli")]
mod week_start_cli_arg;

#[cfg(feature = "cli")]
pub use week_start_cli_arg::WeekStartCliArg;

#[cfg(feature = "cli")]
mod config_override;

#[cfg(feature = "cli")]
pub use config_override::CliConfigOverrides;
