use std::sync::mpsc::Receiver;
use std::sync::mpsc::channel;
use std::time::Duration;

use crossterm::event::KeyEvent;
use datepick_core::DatePicker;
use datepick_core::config::Config;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::app_event::AppEvent;
use crate::app_event::Selection;
use crate::app_event_sender::AppEventSender;
use crate::calendar_widget::CALENDAR_HEIGHT;
use crate::calendar_widget::CalendarFrame;
use crate::calendar_widget::CalendarView;
use crate::colors::DateColors;
use crate::help::HelpView;
use crate::key_map::Action;
use crate::key_map::KeyMap;
use crate::tui;

pub(crate) struct App {
    picker: DatePicker,
    colors: DateColors,
    key_map: KeyMap,
    show_full_help: bool,
    hide_help: bool,

    app_event_tx: AppEventSender,
    app_event_rx: Receiver<AppEvent>,
}

impl App {
    pub(crate) fn new(config: &Config) -> Self {
        Self::with_picker(config, DatePicker::new(config))
    }

    pub(crate) fn with_picker(config: &Config, picker: DatePicker) -> Self {
        let (app_event_tx, app_event_rx) = channel();
        Self {
            picker,
            colors: DateColors::from_config(&config.colors),
            key_map: KeyMap::default(),
            show_full_help: false,
            hide_help: config.hide_help,
            app_event_tx: AppEventSender::new(app_event_tx),
            app_event_rx,
        }
    }

    /// Read terminal input on a background thread and block on the event
    /// channel until the user accepts or cancels.
    pub(crate) fn run(&mut self, terminal: &mut tui::Tui) -> color_eyre::Result<Selection> {
        self.spawn_input_thread();
        self.event_loop(terminal).map_err(color_eyre::Report::from)
    }

    fn spawn_input_thread(&self) {
        let app_event_tx = self.app_event_tx.clone();
        std::thread::spawn(move || {
            loop {
                // Poll with a timeout so the event lock that
                // crossterm::event::read() takes is released regularly.
                if let Ok(true) = crossterm::event::poll(Duration::from_millis(100))
                    && let Ok(event) = crossterm::event::read()
                {
                    match event {
                        crossterm::event::Event::Key(key_event) => {
                            app_event_tx.send(AppEvent::KeyEvent(key_event));
                        }
                        crossterm::event::Event::Resize(_, _) => {
                            app_event_tx.send(AppEvent::Redraw);
                        }
                        _ => {}
                    }
                }
            }
        });
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> std::io::Result<Selection> {
        self.draw(terminal)?;
        while let Ok(event) = self.app_event_rx.recv() {
            match event {
                AppEvent::KeyEvent(key_event) => self.handle_key_event(key_event),
                AppEvent::Redraw => self.draw(terminal)?,
                AppEvent::Exit(selection) => {
                    tracing::info!("exiting with {selection:?}");
                    return Ok(selection);
                }
            }
        }
        Ok(Selection::Cancelled)
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        let Some(action) = self.key_map.action_for(key_event) else {
            return;
        };
        match action {
            Action::Navigate(command) => {
                self.picker.dispatch(command);
                self.app_event_tx.send(AppEvent::Redraw);
            }
            Action::ToggleHelp => {
                self.show_full_help = !self.show_full_help;
                self.app_event_tx.send(AppEvent::Redraw);
            }
            Action::Accept => {
                let value = self.picker.current_value();
                self.app_event_tx
                    .send(AppEvent::Exit(Selection::Accepted(value)));
            }
            Action::Quit => self.app_event_tx.send(AppEvent::Exit(Selection::Cancelled)),
        }
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> std::io::Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();
            self.render(area, frame.buffer_mut());
        })?;
        Ok(())
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let frame = CalendarFrame::capture(&mut self.picker);
        let help = HelpView::new(&self.key_map, self.show_full_help);
        let help_height = if self.hide_help {
            0
        } else {
            help.desired_height()
        };
        let [calendar_area, help_area] = Layout::vertical([
            Constraint::Length(CALENDAR_HEIGHT),
            Constraint::Length(help_height),
        ])
        .areas(area);

        (&CalendarView::new(&frame, &self.colors)).render(calendar_area, buf);
        if help_height > 0 {
            (&help).render(help_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::KeyCode;
    use crossterm::event::KeyModifiers;
    use datepick_core::FixedClock;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_app(config: Config) -> App {
        let picker = DatePicker::with_clock(&config, Box::new(FixedClock(ymd(2026, 10, 19))));
        App::with_picker(&config, picker)
    }

    fn start_at(date: NaiveDate) -> Config {
        Config {
            start_at: Some(date),
            ..Config::default()
        }
    }

    fn press(app: &App, codes: &[KeyCode]) {
        for code in codes {
            app.app_event_tx
                .send(AppEvent::KeyEvent(KeyEvent::new(*code, KeyModifiers::NONE)));
        }
    }

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(100, 14)).unwrap()
    }

    fn screen(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn enter_prints_the_formatted_cursor() {
        let mut app = make_app(start_at(ymd(2024, 2, 28)));
        press(&app, &[KeyCode::Right, KeyCode::Right, KeyCode::Enter]);

        let selection = app.event_loop(&mut terminal()).unwrap();
        assert_eq!(selection, Selection::Accepted("2024/03/01".to_string()));
    }

    #[test]
    fn quit_keys_cancel() {
        for code in [KeyCode::Esc, KeyCode::Char('q')] {
            let mut app = make_app(start_at(ymd(2024, 2, 28)));
            press(&app, &[KeyCode::Down, code]);
            assert_eq!(
                app.event_loop(&mut terminal()).unwrap(),
                Selection::Cancelled
            );
        }

        let mut app = make_app(start_at(ymd(2024, 2, 28)));
        app.app_event_tx.send(AppEvent::KeyEvent(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(app.event_loop(&mut terminal()).unwrap(), Selection::Cancelled);
    }

    #[test]
    fn today_key_jumps_to_the_clock_date() {
        let config = Config {
            output_format: "%d.%m.%Y".to_string(),
            ..start_at(ymd(1999, 12, 31))
        };
        let mut app = make_app(config);
        press(&app, &[KeyCode::Char('t'), KeyCode::Enter]);
        assert_eq!(
            app.event_loop(&mut terminal()).unwrap(),
            Selection::Accepted("19.10.2026".to_string())
        );
    }

    #[test]
    fn redraw_shows_the_new_month_and_help_toggle() {
        let mut app = make_app(start_at(ymd(2024, 1, 31)));
        let mut terminal = terminal();
        press(&app, &[KeyCode::Char(']'), KeyCode::Char('?'), KeyCode::Enter]);

        let selection = app.event_loop(&mut terminal).unwrap();
        assert_eq!(selection, Selection::Accepted("2024/02/29".to_string()));

        let screen = screen(&terminal);
        assert_eq!(screen[0], "     February 2024");
        assert_eq!(
            screen[8],
            "←/h previous day     home/0 start of week     pgup/[ previous month    t     today"
        );
        assert_eq!(
            screen[11],
            "↓/j next week        G      end of month      }      next year         ?     toggle help"
        );
        assert_eq!(screen[12], "");
    }

    #[test]
    fn short_help_and_hidden_help() {
        let mut terminal = terminal();
        let mut app = make_app(start_at(ymd(2024, 2, 1)));
        app.draw(&mut terminal).unwrap();
        assert_eq!(
            screen(&terminal)[8],
            "t today • enter select • q/esc quit • ? toggle help"
        );
        // The help area is sized to its content.
        assert!(screen(&terminal)[9..].iter().all(String::is_empty));

        let mut terminal = self::terminal();
        let mut app = make_app(Config {
            hide_help: true,
            ..start_at(ymd(2024, 2, 1))
        });
        app.draw(&mut terminal).unwrap();
        assert!(screen(&terminal)[8..].iter().all(String::is_empty));
    }
}
