use std::fs::File;
use std::sync::Mutex;

use clap::Parser;
use quickadd::cli::commands::Cli;
use quickadd::cli::handlers;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.command.is_none());

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr for subcommands. The TUI owns the terminal, so it logs to
/// `quickadd.log` in the temp directory instead.
fn init_tracing(tui: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if tui {
        let path = std::env::temp_dir().join("quickadd.log");
        if let Ok(file) = File::create(path) {
            let _ = builder.with_writer(Mutex::new(file)).with_ansi(false).try_init();
        }
    } else {
        let _ = builder.with_writer(std::io::stderr).try_init();
    }
}
