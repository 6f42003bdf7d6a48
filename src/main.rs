use clap::Parser;
use colored::Colorize;
use styrcykel::cli;

#[derive(Parser)]
#[command(name = "styrcykel")]
#[command(about = "Sync the governance-cycle master spreadsheet with the web calendar's events.json")]
#[command(long_about = "Styrcykel - spreadsheet/JSON sync for the yearly governance cycle

Run from the repository root. Without flags, the master spreadsheet
(data/source/2026/events_master.xlsx) is read and the events in
data/generated/2026/events.json are replaced, then mirrored to
web-data/2026/events.json. All other JSON fields (config, styles)
are preserved.

With --init, the direction is reversed: the current JSON events are
written back to the master spreadsheet with localized headers.")]
#[command(version)]
struct Cli {
    /// Rebuild the master spreadsheet from the current JSON events
    #[arg(long)]
    init: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(styrcykel::SyncError::from)
        .and_then(|root| {
            if cli.init {
                cli::init_spreadsheet(&root)
            } else {
                cli::update_json(&root)
            }
        });

    if let Err(e) = result {
        eprintln!("{} {}", "❌ Error:".bold().red(), e);
        std::process::exit(1);
    }
}
