//! Renders one month around the cursor.
//!
//! Rendering is split in two: [`CalendarFrame::capture`] pulls everything it
//! needs out of the picker (filling the grid cache as a side effect), and
//! [`CalendarView`] turns that snapshot into styled lines without touching
//! any picker state.

use std::sync::Arc;

use chrono::Datelike;
use chrono::NaiveDate;
use datepick_core::DatePicker;
use datepick_core::Grid;
use datepick_core::WeekStart;
use datepick_core::grid::DAYS_PER_WEEK;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

use crate::colors;
use crate::colors::DateColors;

const LEGEND_MONDAY_FIRST: &str = " Mo Tu We Th Fr Sa Su";
const LEGEND_SUNDAY_FIRST: &str = " Su Mo Tu We Th Fr Sa";

/// Title, legend and six week rows. Shorter months are padded so the widget
/// keeps a constant height while navigating.
pub const CALENDAR_HEIGHT: u16 = 8;

/// Width of the legend and of every week row.
pub const CALENDAR_WIDTH: u16 = 21;

const MAX_WEEKS: usize = 6;

/// Everything the view needs, captured from the picker.
#[derive(Debug, Clone)]
pub struct CalendarFrame {
    pub cursor: NaiveDate,
    pub today: NaiveDate,
    pub week_start: WeekStart,
    pub grid: Arc<Grid>,
    pub previous: Arc<Grid>,
    pub next: Arc<Grid>,
}

impl CalendarFrame {
    pub fn capture(picker: &mut DatePicker) -> Self {
        Self {
            cursor: picker.current_date(),
            today: picker.today(),
            week_start: picker.week_start(),
            grid: picker.current_grid(),
            previous: picker.previous_month_grid(),
            next: picker.next_month_grid(),
        }
    }
}

/// Facts about one in-month cell that decide its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_weekend: bool,
    pub is_focused: bool,
}

/// Style for an in-month day. Precedence: custom colour for the exact date,
/// then today, then weekend, then the default. A focused cell shows its
/// colour as the background.
pub fn day_style(cell: DayCell, custom_colors: &DateColors) -> Style {
    let accent = custom_colors.get(cell.date).unwrap_or_else(|| {
        if cell.is_today {
            colors::today()
        } else if cell.is_weekend {
            colors::weekend()
        } else {
            colors::weekday()
        }
    });

    if cell.is_focused {
        Style::default().bg(accent).fg(colors::focused_text())
    } else {
        Style::default().fg(accent)
    }
}

fn adjacent_day_style() -> Style {
    Style::default()
        .fg(colors::adjacent_day())
        .add_modifier(Modifier::BOLD)
}

fn header_style() -> Style {
    Style::default()
        .fg(colors::title())
        .add_modifier(Modifier::BOLD)
}

pub struct CalendarView<'a> {
    frame: &'a CalendarFrame,
    colors: &'a DateColors,
}

impl<'a> CalendarView<'a> {
    pub fn new(frame: &'a CalendarFrame, colors: &'a DateColors) -> Self {
        Self { frame, colors }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let frame = self.frame;
        let legend = match frame.week_start {
            WeekStart::MondayFirst => LEGEND_MONDAY_FIRST,
            WeekStart::SundayFirst => LEGEND_SUNDAY_FIRST,
        };
        let title = format!("{} {}", frame.cursor.format("%B"), frame.cursor.year());
        let indent = legend.len().saturating_sub(title.len()) / 2 + 1;

        let mut lines = Vec::with_capacity(CALENDAR_HEIGHT as usize);
        lines.push(Line::from(Span::styled(
            format!("{}{title}", " ".repeat(indent)),
            header_style(),
        )));
        lines.push(Line::from(Span::styled(legend, header_style())));

        for (row, week) in frame.grid.weeks().iter().enumerate() {
            let spans: Vec<Span<'static>> = (0..DAYS_PER_WEEK)
                .map(|column| match week.slot(column) {
                    Some(day) => self.day_span(day, column),
                    None => self.adjacent_span(row, column),
                })
                .collect();
            lines.push(Line::from(spans));
        }

        for _ in frame.grid.len()..MAX_WEEKS {
            lines.push(Line::default());
        }
        lines
    }

    fn day_span(&self, day: u32, column: usize) -> Span<'static> {
        let frame = self.frame;
        let text = format!(" {day:>2}");
        let Some(date) = frame.cursor.with_day(day) else {
            return Span::raw(text);
        };
        let cell = DayCell {
            date,
            is_today: date == frame.today,
            is_weekend: frame.week_start.is_weekend_column(column),
            is_focused: date == frame.cursor,
        };
        Span::styled(text, day_style(cell, self.colors))
    }

    /// Blank slots show the neighbouring month's day in the same column.
    fn adjacent_span(&self, row: usize, column: usize) -> Span<'static> {
        let week = if row == 0 {
            self.frame.previous.last_week()
        } else {
            self.frame.next.first_week()
        };
        match week.and_then(|week| week.slot(column)) {
            Some(day) => Span::styled(format!(" {day:>2}"), adjacent_day_style()),
            None => Span::raw("   "),
        }
    }
}

impl Widget for &CalendarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}
