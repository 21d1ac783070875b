use std::io::{self, Write};


use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::model::config::{Config, WorkspaceConfig};
use crate::model::project::ProjectDirectory;
use crate::ops::submit::{JsonLinesSink, SubmitContext, TaskSink, submit_task};
use crate::ops::suggest::suggest;
use crate::parse::{Clock, detect_directive};
use crate::tui;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config(cli.config.as_deref())?;
    let clock = Clock::from(cli.now);
    let json = cli.json;

    match cli.command {
        None => cmd_tui(config, cli.workspace.as_deref(), clock),
        Some(cmd) => {
            let workspace = config.select_workspace(cli.workspace.as_deref());
            match cmd {
                Commands::Parse(args) => cmd_parse(args, workspace, clock, json),
                Commands::Suggest(args) => cmd_suggest(args, workspace, json),
                Commands::Add(args) => cmd_add(args, &config, workspace, clock),
            }
        }
    }
}

fn directory_of(workspace: Option<&WorkspaceConfig>) -> ProjectDirectory {
    workspace.map(|w| w.directory()).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_tui(
    config: Config,
    workspace: Option<&str>,
    clock: Clock,
) -> Result<(), Box<dyn std::error::Error>> {
    let drafts = tui::run(config, workspace, clock)?;
    // Tasks created in the session go to stdout once the terminal is restored
    let mut sink = JsonLinesSink::new(io::stdout().lock());
    for draft in &drafts {
        sink.create(draft)?;
    }
    Ok(())
}

fn cmd_parse(
    args: ParseArgs,
    workspace: Option<&WorkspaceConfig>,
    clock: Clock,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = clock.extract(&args.text, &directory_of(workspace));
    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        for line in format_parsed(&parsed) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_suggest(
    args: SuggestArgs,
    workspace: Option<&WorkspaceConfig>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let cursor = args.cursor.unwrap_or(args.text.len());
    let active = detect_directive(&args.text, cursor);
    let items = suggest(active.as_ref(), &directory_of(workspace));
    if json {
        let out = SuggestJson {
            directive: active.as_ref(),
            suggestions: &items,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for line in format_suggestions(active.as_ref(), &items) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_add(
    args: AddArgs,
    config: &Config,
    workspace: Option<&WorkspaceConfig>,
    clock: Clock,
) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = clock.extract(&args.text, &directory_of(workspace));
    let ctx = SubmitContext {
        workspace,
        user: config.user.as_ref(),
    };
    let stdout = io::stdout();
    let mut sink = JsonLinesSink::new(stdout.lock());
    submit_task(&args.text, &parsed, ctx, &mut sink, clock.now())?;
    sink.into_inner().flush()?;
    Ok(())
}
