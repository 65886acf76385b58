use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use std::path::PathBuf;

use chrono::NaiveDate;
use chrono::format::StrftimeItems;
use dirs::home_dir;
use serde::Deserialize;
use toml::Value as TomlValue;

use crate::error::DatepickErr;
use crate::error::Result;
use crate::grid::WeekStart;

/// Pattern used by [`crate::DatePicker::current_value`] unless configured.
pub const DEFAULT_OUTPUT_FORMAT: &str = "%Y/%m/%d";

const CONFIG_TOML_FILE: &str = "config.toml";

/// Environment variable that relocates the datepick home directory.
pub const DATEPICK_HOME_ENV_VAR: &str = "DATEPICK_HOME";

/// Picker configuration after merging defaults, `config.toml`, `-c`
/// overrides and explicit CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub week_start: WeekStart,

    /// chrono `strftime` pattern for the selected value. Validated on load.
    pub output_format: String,

    /// Initial cursor; `None` means today.
    pub start_at: Option<NaiveDate>,

    pub hide_help: bool,

    /// Per-date colours, as understood by the renderer.
    pub colors: BTreeMap<NaiveDate, String>,

    /// Directory holding `config.toml` and the `log/` folder.
    pub datepick_home: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            start_at: None,
            hide_help: false,
            colors: BTreeMap::new(),
            datepick_home: PathBuf::new(),
        }
    }
}

/// On-disk shape of `config.toml`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ConfigToml {
    pub week_start: Option<WeekStart>,

    /// Older spelling of `week_start`; ignored when `week_start` is present.
    pub first_weekday_is_mo: Option<bool>,

    pub output_format: Option<String>,

    /// Either a quoted `"YYYY-MM-DD"` string or a bare TOML local date.
    pub start_at: Option<TomlValue>,

    pub hide_help: Option<bool>,

    #[serde(default)]
    pub colors: BTreeMap<NaiveDate, String>,
}

/// Values supplied directly on the command line; these win over everything.
#[derive(Default, Debug, Clone)]
pub struct ConfigOverrides {
    pub week_start: Option<WeekStart>,
    pub output_format: Option<String>,
    pub start_at: Option<NaiveDate>,
    pub hide_help: Option<bool>,
}

impl Config {
    /// Load `config.toml` from the datepick home, apply the `-c` overrides to
    /// the raw TOML tree and then the typed `overrides`.
    pub fn load_with_cli_overrides(
        cli_overrides: Vec<(String, TomlValue)>,
        overrides: ConfigOverrides,
    ) -> Result<Self> {
        let datepick_home = find_datepick_home()?;
        let cfg = load_config_as_toml_with_cli_overrides(&datepick_home, cli_overrides)?;
        Self::load_from_base_config_with_overrides(cfg, overrides, datepick_home)
    }

    pub fn load_from_base_config_with_overrides(
        cfg: ConfigToml,
        overrides: ConfigOverrides,
        datepick_home: PathBuf,
    ) -> Result<Self> {
        let ConfigOverrides {
            week_start,
            output_format,
            start_at,
            hide_help,
        } = overrides;

        let week_start = week_start
            .or(cfg.week_start)
            .or_else(|| cfg.first_weekday_is_mo.map(WeekStart::from_monday_first))
            .unwrap_or_default();

        let output_format = output_format
            .or(cfg.output_format)
            .unwrap_or_else(|| DEFAULT_OUTPUT_FORMAT.to_string());
        validate_output_format(&output_format)?;

        let start_at = match start_at {
            Some(date) => Some(date),
            None => cfg.start_at.as_ref().map(parse_start_at).transpose()?,
        };

        Ok(Self {
            week_start,
            output_format,
            start_at,
            hide_help: hide_help.or(cfg.hide_help).unwrap_or(false),
            colors: cfg.colors,
            datepick_home,
        })
    }
}

/// Reject patterns that cannot format a bare date: unknown specifiers and
/// time or zone fields such as `%H` or `%Z`.
pub fn validate_output_format(pattern: &str) -> Result<()> {
    let mut trial = String::new();
    write!(
        trial,
        "{}",
        NaiveDate::MIN.format_with_items(StrftimeItems::new(pattern))
    )
    .map_err(|_| DatepickErr::InvalidOutputFormat(pattern.to_string()))
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DatepickErr::InvalidStartDate(raw.to_string()))
}

fn parse_start_at(value: &TomlValue) -> Result<NaiveDate> {
    match value {
        TomlValue::String(raw) => parse_date(raw),
        TomlValue::Datetime(datetime) => match (datetime.date, datetime.time) {
            (Some(date), None) => NaiveDate::from_ymd_opt(
                i32::from(date.year),
                u32::from(date.month),
                u32::from(date.day),
            )
            .ok_or_else(|| DatepickErr::InvalidStartDate(datetime.to_string())),
            _ => Err(DatepickErr::InvalidStartDate(datetime.to_string())),
        },
        other => Err(DatepickErr::InvalidStartDate(other.to_string())),
    }
}

/// Read `config.toml` (a missing file counts as empty) and apply each
/// `(dotted.path, value)` override on top of it.
pub fn load_config_as_toml_with_cli_overrides(
    datepick_home: &Path,
    cli_overrides: Vec<(String, TomlValue)>,
) -> Result<ConfigToml> {
    let path = datepick_home.join(CONFIG_TOML_FILE);
    let mut root = match std::fs::read_to_string(&path) {
        Ok(contents) => toml::from_str::<TomlValue>(&contents).map_err(|source| {
            DatepickErr::ParseToml {
                path: path.clone(),
                source,
            }
        })?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("{} not found, using defaults", path.display());
            TomlValue::Table(Default::default())
        }
        Err(err) => {
            tracing::error!("failed to read {}: {err}", path.display());
            return Err(err.into());
        }
    };

    for (key, value) in cli_overrides {
        apply_toml_override(&mut root, &key, value);
    }

    root.try_into()
        .map_err(|source| DatepickErr::ParseToml { path, source })
}

/// Set `value` at the dotted `path`, creating intermediate tables.
fn apply_toml_override(root: &mut TomlValue, path: &str, value: TomlValue) {
    let mut current = root;
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        if !current.is_table() {
            *current = TomlValue::Table(Default::default());
        }
        let TomlValue::Table(table) = current else {
            return;
        };
        if segments.peek().is_none() {
            table.insert(segment.to_string(), value);
            return;
        }
        current = table
            .entry(segment.to_string())
            .or_insert_with(|| TomlValue::Table(Default::default()));
    }
}

/// `$DATEPICK_HOME` when set and non-empty, otherwise `~/.datepick`. Does
/// not verify that the directory exists.
pub fn find_datepick_home() -> Result<PathBuf> {
    if let Ok(val) = std::env::var(DATEPICK_HOME_ENV_VAR)
        && !val.is_empty()
    {
        return Ok(PathBuf::from(val));
    }

    let mut p = home_dir().ok_or(DatepickErr::HomeDirNotFound)?;
    p.push(".datepick");
    Ok(p)
}

/// Folder where the front ends write their logs.
pub fn log_dir(config: &Config) -> PathBuf {
    config.datepick_home.join("log")
}
