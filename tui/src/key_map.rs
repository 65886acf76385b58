use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use datepick_core::Command;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(Command),
    ToggleHelp,
    Accept,
    Quit,
}

impl Action {
    pub fn description(self) -> &'static str {
        match self {
            Action::Navigate(command) => command.description(),
            Action::ToggleHelp => "toggle help",
            Action::Accept => "select",
            Action::Quit => "quit",
        }
    }
}

/// One entry of the key map: the keys that trigger `action` and how the
/// help view labels them.
#[derive(Debug, Clone)]
pub struct Binding {
    pub keys: Vec<KeyCode>,
    pub label: &'static str,
    pub action: Action,
    /// Listed in the one-line help.
    pub short: bool,
}

impl Binding {
    fn new(keys: &[KeyCode], label: &'static str, action: Action) -> Self {
        Self {
            keys: keys.to_vec(),
            label,
            action,
            short: false,
        }
    }

    fn short(mut self) -> Self {
        self.short = true;
        self
    }

    fn matches(&self, code: KeyCode) -> bool {
        self.keys.contains(&code)
    }
}

#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<Binding>,
}

impl Default for KeyMap {
    fn default() -> Self {
        use Action::Navigate;
        use KeyCode::Char;

        let bindings = vec![
            Binding::new(&[KeyCode::Left, Char('h')], "←/h", Navigate(Command::DayPrev)),
            Binding::new(&[KeyCode::Right, Char('l')], "→/l", Navigate(Command::DayNext)),
            Binding::new(&[KeyCode::Up, Char('k')], "↑/k", Navigate(Command::WeekPrev)),
            Binding::new(&[KeyCode::Down, Char('j')], "↓/j", Navigate(Command::WeekNext)),
            Binding::new(&[KeyCode::Home, Char('0')], "home/0", Navigate(Command::WeekStart)),
            Binding::new(&[KeyCode::End, Char('$')], "end/$", Navigate(Command::WeekEnd)),
            Binding::new(&[Char('g')], "g", Navigate(Command::MonthStart)),
            Binding::new(&[Char('G')], "G", Navigate(Command::MonthEnd)),
            Binding::new(&[KeyCode::PageUp, Char('[')], "pgup/[", Navigate(Command::MonthPrev)),
            Binding::new(&[KeyCode::PageDown, Char(']')], "pgdn/]", Navigate(Command::MonthNext)),
            Binding::new(&[Char('{')], "{", Navigate(Command::YearPrev)),
            Binding::new(&[Char('}')], "}", Navigate(Command::YearNext)),
            Binding::new(&[Char('t')], "t", Navigate(Command::Today)).short(),
            Binding::new(&[KeyCode::Enter], "enter", Action::Accept).short(),
            Binding::new(&[KeyCode::Esc, Char('q')], "q/esc", Action::Quit).short(),
            Binding::new(&[Char('?')], "?", Action::ToggleHelp).short(),
        ];
        Self { bindings }
    }
}

impl KeyMap {
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Resolve a key press. Key releases and keys held with modifiers other
    /// than Shift resolve to nothing; Ctrl-C always quits.
    pub fn action_for(&self, key_event: KeyEvent) -> Option<Action> {
        if key_event.kind == KeyEventKind::Release {
            return None;
        }
        match key_event {
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers,
                ..
            } if modifiers.contains(KeyModifiers::CONTROL) => return Some(Action::Quit),
            KeyEvent { modifiers, .. } if !(modifiers - KeyModifiers::SHIFT).is_empty() => {
                return None;
            }
            _ => {}
        }
        self.bindings
            .iter()
            .find(|binding| binding.matches(key_event.code))
            .map(|binding| binding.action)
    }

    pub fn short_help(&self) -> Vec<&Binding> {
        self.bindings.iter().filter(|binding| binding.short).collect()
    }

    /// Bindings grouped into the columns of the full help view.
    pub fn full_help(&self) -> Vec<Vec<&Binding>> {
        self.bindings.chunks(4).map(|chunk| chunk.iter().collect()).collect()
    }
}
