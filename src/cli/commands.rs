use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qa", about = concat!("qa v", env!("CARGO_PKG_VERSION"), " - type a task, tag it inline, done"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: $XDG_CONFIG_HOME/quickadd/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Workspace slug (default: first configured workspace)
    #[arg(short = 'w', long = "workspace", global = true)]
    pub workspace: Option<String>,

    /// Resolve due dates relative to this RFC 3339 time instead of now
    #[arg(long, global = true, value_name = "TIME")]
    pub now: Option<DateTime<FixedOffset>>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the task a line of text would create
    Parse(ParseArgs),
    /// Show the directive under the cursor and its candidates
    Suggest(SuggestArgs),
    /// Create a task and print it as a JSON line
    Add(AddArgs),
}

#[derive(Args)]
pub struct ParseArgs {
    /// Task text, e.g. "Fix login p:eng d:fri pr:high"
    pub text: String,
}

#[derive(Args)]
pub struct SuggestArgs {
    /// Text being typed
    pub text: String,
    /// Cursor byte offset (default: end of text)
    #[arg(long)]
    pub cursor: Option<usize>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
}
