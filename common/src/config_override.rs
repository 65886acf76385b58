//! Support for `-c key=value` overrides shared across datepick front ends.
//!
//! This module provides a [`CliConfigOverrides`] struct that can be embedded
//! into a `clap`-derived CLI struct using `#[clap(flatten)]`. Each occurrence
//! of `-c key=value` (or `--config key=value`) will be collected as a raw
//! string. [`CliConfigOverrides::parse_overrides`] turns the raw strings into
//! `(dotted.path, toml::Value)` pairs that the core config loader applies on
//! top of `config.toml`.

use clap::ArgAction;
use clap::Parser;
use datepick_core::error::DatepickErr;
use datepick_core::error::Result;
use toml::Value;

/// CLI option that captures arbitrary configuration overrides specified as
/// `-c key=value`. It keeps both halves unparsed until the caller asks for
/// them.
#[derive(Parser, Debug, Default, Clone)]
pub struct CliConfigOverrides {
    /// Override a configuration value that would otherwise be loaded from
    /// `~/.datepick/config.toml`. Use a dotted path (`foo.bar`) to override
    /// nested values. The `value` portion is parsed as TOML. If it fails to
    /// parse as TOML, the raw string is used as a literal.
    ///
    /// Examples:
    ///   - `-c week_start=sunday`
    ///   - `-c output_format="%d.%m.%Y"`
    ///   - `-c colors.2024-12-25=red`
    #[arg(
        short = 'c',
        long = "config",
        value_name = "key=value",
        action = ArgAction::Append,
        global = true,
    )]
    pub raw_overrides: Vec<String>,
}

impl CliConfigOverrides {
    /// Parse the raw strings captured from the CLI into a list of `(path,
    /// value)` tuples where `value` is a `toml::Value`.
    pub fn parse_overrides(&self) -> Result<Vec<(String, Value)>> {
        self.raw_overrides
            .iter()
            .map(|s| {
                // Only split on the *first* '=' so values are free to contain
                // the character.
                let mut parts = s.splitn(2, '=');
                let key = match parts.next() {
                    Some(k) => k.trim(),
                    None => return Err(DatepickErr::InvalidOverride(s.to_string())),
                };
                let value_str = parts
                    .next()
                    .ok_or_else(|| DatepickErr::InvalidOverride(format!("missing '=' in {s}")))?
                    .trim();

                if key.is_empty() {
                    return Err(DatepickErr::InvalidOverride(format!("empty key in {s}")));
                }

                // Attempt to parse as TOML. If that fails, treat it as a raw
                // string. This allows convenient usage such as
                // `-c week_start=sunday` without the quotes.
                let value = parse_toml_value(value_str)
                    .unwrap_or_else(|| Value::String(value_str.to_string()));

                Ok((key.to_string(), value))
            })
            .collect()
    }
}

/// Parse a bare TOML value by wrapping it in a one-key document.
fn parse_toml_value(raw: &str) -> Option<Value> {
    const SENTINEL_KEY: &str = "_datepick_override_";
    let mut table: toml::Table = toml::from_str(&format!("{SENTINEL_KEY} = {raw}")).ok()?;
    table.remove(SENTINEL_KEY)
}
