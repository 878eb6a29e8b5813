use super::site_file::SiteFile;
use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use pagewright_editor::{EditCommand, EditSession};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Site file to edit
    pub file: PathBuf,

    /// Edit script: inline JSON or a path to a JSON file
    #[arg(short, long)]
    pub commands: String,

    /// Run the script without writing the result
    #[arg(long)]
    pub dry_run: bool,
}

/// One entry of an edit script
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum Step {
    History(HistoryStep),
    Command(EditCommand),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
enum HistoryStep {
    Undo,
    Redo,
}

fn parse_script(source: &str) -> Result<Vec<Step>> {
    serde_json::from_str(source).context("Edit script must be a JSON array of commands")
}

pub fn apply(args: ApplyArgs, config: &Config, cwd: &str) -> Result<()> {
    let script = if args.commands.trim_start().starts_with('[') {
        args.commands.clone()
    } else {
        let path = PathBuf::from(cwd).join(&args.commands);
        fs::read_to_string(&path).with_context(|| format!("Cannot read {}", path.display()))?
    };
    let steps = parse_script(&script)?;

    let catalog = Arc::new(config.load_catalog(cwd)?);
    let mut site_file = SiteFile::read(&PathBuf::from(cwd).join(&args.file))?;
    let document = site_file.site_data.clone().into_document();
    let mut session = EditSession::with_history_limit(catalog, document, config.history_limit);

    println!("{}", "✏️  Applying edits...".bright_blue().bold());

    for (index, step) in steps.into_iter().enumerate() {
        let (label, changed) = match step {
            Step::History(HistoryStep::Undo) => ("Undo".to_string(), session.undo()),
            Step::History(HistoryStep::Redo) => ("Redo".to_string(), session.redo()),
            Step::Command(command) => {
                let label = command.describe();
                let changed = session
                    .execute(command)
                    .map_err(|e| anyhow!("Step {}: {}", index + 1, e))?;
                (label, changed)
            }
        };

        if changed {
            println!("  {} {}", "✓".green(), label);
        } else {
            println!("  {} {} {}", "·".dimmed(), label, "(no change)".dimmed());
        }
    }

    println!();
    println!(
        "   Blocks: {}   Undo levels: {}",
        session.document().len(),
        session.history().undo_levels()
    );

    if args.dry_run {
        println!("{}", "(dry run, nothing written)".dimmed());
        return Ok(());
    }
    if !session.is_dirty() {
        println!("{} Nothing to save", "✓".green());
        return Ok(());
    }

    let (ticket, site_data) = session.prepare_save();
    match site_file.write(site_data) {
        Ok(()) => {
            session.complete_save::<String>(ticket, Ok(()));
            println!(
                "{} Saved {} ({})",
                "✅".green(),
                site_file.path.display(),
                session.save_status()
            );
            Ok(())
        }
        Err(err) => {
            session.complete_save(ticket, Err(format!("{:#}", err)));
            Err(err)
        }
    }
}
