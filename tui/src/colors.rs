use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use ratatui::style::Color;

// Palette for the calendar. Terminal-indexed colours so the user's terminal
// theme decides the exact shades.
pub(crate) fn title() -> Color {
    Color::Magenta
}

pub(crate) fn adjacent_day() -> Color {
    Color::Gray
}

pub(crate) fn today() -> Color {
    Color::LightRed
}

pub(crate) fn weekend() -> Color {
    Color::Blue
}

pub(crate) fn weekday() -> Color {
    Color::Yellow
}

/// Foreground used on top of a highlighted (focused) cell.
pub(crate) fn focused_text() -> Color {
    Color::Black
}

pub(crate) fn help_key() -> Color {
    Color::Gray
}

pub(crate) fn help_desc() -> Color {
    Color::DarkGray
}

/// Per-date colours from the `[colors]` config table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateColors(BTreeMap<NaiveDate, Color>);

impl DateColors {
    /// Parse the configured colour names. Entries ratatui cannot parse are
    /// logged and dropped.
    pub fn from_config(raw: &BTreeMap<NaiveDate, String>) -> Self {
        let colors = raw
            .iter()
            .filter_map(|(date, name)| match Color::from_str(name) {
                Ok(color) => Some((*date, color)),
                Err(err) => {
                    tracing::warn!("ignoring colour {name:?} for {date}: {err}");
                    None
                }
            })
            .collect();
        Self(colors)
    }

    pub fn get(&self, date: NaiveDate) -> Option<Color> {
        self.0.get(&date).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(NaiveDate, Color)> for DateColors {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, Color)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
