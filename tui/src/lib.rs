// Forbid accidental stdout/stderr writes in the *library* portion of the TUI.
// Only `main.rs` prints, and only after the terminal has been restored.
#![deny(clippy::print_stdout, clippy::print_stderr)]

use std::fs::OpenOptions;

use app::App;
use datepick_core::config::Config;
use datepick_core::config::ConfigOverrides;
use tracing_appender::non_blocking;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod app;
mod app_event;
mod app_event_sender;
mod calendar_widget;
mod cli;
mod colors;
mod help;
mod key_map;
mod tui;

pub use app_event::Selection;
pub use calendar_widget::CALENDAR_HEIGHT;
pub use calendar_widget::CALENDAR_WIDTH;
pub use calendar_widget::CalendarFrame;
pub use calendar_widget::CalendarView;
pub use calendar_widget::DayCell;
pub use calendar_widget::day_style;
pub use cli::Cli;
pub use colors::DateColors;
pub use help::HelpView;
pub use key_map::Action;
pub use key_map::Binding;
pub use key_map::KeyMap;

pub fn run_main(cli: Cli) -> std::io::Result<Selection> {
    let cli_kv_overrides = cli
        .config_overrides
        .parse_overrides()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let overrides = ConfigOverrides {
        week_start: cli.week_start.map(Into::into),
        output_format: cli.output_format,
        start_at: cli.start_at,
        hide_help: cli.hide_help.then_some(true),
    };

    let config = Config::load_with_cli_overrides(cli_kv_overrides, overrides)
        .map_err(|e| std::io::Error::other(format!("error loading config.toml: {e}")))?;

    let log_dir = datepick_core::config::log_dir(&config);
    std::fs::create_dir_all(&log_dir)?;
    // Open (or create) the log file, appending to it.
    let mut log_file_opts = OpenOptions::new();
    log_file_opts.create(true).append(true);

    // Ensure the file is only readable and writable by the current user.
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        log_file_opts.mode(0o600);
    }

    let log_file = log_file_opts.open(log_dir.join("datepick-tui.log"))?;

    // Wrap file in non‑blocking writer.
    let (non_blocking, _guard) = non_blocking(log_file);

    let default_filter = if cli.debug {
        "datepick_core=info,datepick_tui=info"
    } else {
        "datepick_core=warn,datepick_tui=warn"
    };

    // use RUST_LOG env var, defaulting based on debug flag.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_target(false)
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(file_layer).try_init();

    tracing::info!(
        week_start = %config.week_start,
        output_format = %config.output_format,
        "starting datepick"
    );

    run_ratatui_app(config).map_err(|err| std::io::Error::other(err.to_string()))
}

fn run_ratatui_app(config: Config) -> color_eyre::Result<Selection> {
    color_eyre::install()?;

    // Forward panic reports through tracing so they land in the log file,
    // then chain to the previous hook for the usual report.
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        prev_hook(info);
    }));

    let mut terminal = tui::init()?;
    terminal.clear()?;

    let mut app = App::new(&config);
    let app_result = app.run(&mut terminal);

    let _ = tui::restore();
    app_result
}
