use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

use crate::colors;
use crate::key_map::Binding;
use crate::key_map::KeyMap;

const SHORT_SEPARATOR: &str = " • ";
const COLUMN_GAP: &str = "    ";

/// Key help below the calendar: one line by default, every binding in
/// columns once toggled with `?`.
pub struct HelpView<'a> {
    key_map: &'a KeyMap,
    show_all: bool,
}

impl<'a> HelpView<'a> {
    pub fn new(key_map: &'a KeyMap, show_all: bool) -> Self {
        Self { key_map, show_all }
    }

    pub fn desired_height(&self) -> u16 {
        self.lines().len() as u16
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        if self.show_all {
            full_help_lines(&self.key_map.full_help())
        } else {
            vec![short_help_line(&self.key_map.short_help())]
        }
    }
}

impl Widget for &HelpView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}

fn key_style() -> Style {
    Style::default().fg(colors::help_key())
}

fn desc_style() -> Style {
    Style::default().fg(colors::help_desc())
}

fn short_help_line(bindings: &[&Binding]) -> Line<'static> {
    let mut spans = Vec::with_capacity(bindings.len() * 4);
    for (i, binding) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SHORT_SEPARATOR, desc_style()));
        }
        spans.push(Span::styled(binding.label, key_style()));
        spans.push(Span::styled(" ", desc_style()));
        spans.push(Span::styled(binding.action.description(), desc_style()));
    }
    Line::from(spans)
}

fn full_help_lines(columns: &[Vec<&Binding>]) -> Vec<Line<'static>> {
    let widths: Vec<(usize, usize)> = columns
        .iter()
        .map(|column| {
            let key = column.iter().map(|b| b.label.chars().count()).max();
            let desc = column.iter().map(|b| b.action.description().len()).max();
            (key.unwrap_or(0), desc.unwrap_or(0))
        })
        .collect();
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);

    (0..rows)
        .map(|row| {
            let mut spans = Vec::new();
            for (i, (column, (key_width, desc_width))) in columns.iter().zip(&widths).enumerate() {
                if i > 0 {
                    spans.push(Span::raw(COLUMN_GAP));
                }
                match column.get(row) {
                    Some(binding) => {
                        spans.push(Span::styled(
                            format!("{:<key_width$} ", binding.label),
                            key_style(),
                        ));
                        spans.push(Span::styled(
                            format!("{:<desc_width$}", binding.action.description()),
                            desc_style(),
                        ));
                    }
                    None => spans.push(Span::raw(" ".repeat(key_width + 1 + desc_width))),
                }
            }
            Line::from(spans)
        })
        .collect()
}
