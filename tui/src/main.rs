use clap::Parser;
use datepick_tui::Cli;
use datepick_tui::Selection;
use datepick_tui::run_main;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match run_main(cli)? {
        Selection::Accepted(value) => println!("{value}"),
        Selection::Cancelled => std::process::exit(1),
    }
    Ok(())
}
