use super::site_file::{find_site_files, SiteFile};
use crate::config::Config;
use anyhow::{anyhow, bail, Result};
use clap::Args;
use colored::Colorize;
use pagewright_catalog::BlockCatalog;
use pagewright_document::{check as check_site_data, DiagnosticLevel};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Site file or directory (defaults to the configured sites directory)
    pub input: Option<PathBuf>,

    /// Show info-level diagnostics too
    #[arg(short, long)]
    pub all: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Totals {
    diagnostics: usize,
    errors: usize,
    warnings: usize,
}

pub fn check(args: CheckArgs, config: &Config, cwd: &str) -> Result<()> {
    if args.format != "text" && args.format != "json" {
        bail!("Unknown format: {}. Use: text or json", args.format);
    }

    let catalog = config.load_catalog(cwd)?;
    let input = match &args.input {
        Some(input) => PathBuf::from(cwd).join(input),
        None => config.get_sites_dir(cwd),
    };

    if !input.exists() {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    }

    let text = args.format == "text";
    if text {
        println!("🔍 {} Site check", "Starting".green().bold());
        println!("   Input: {}", input.display());
        println!();
    }

    let files = find_site_files(&input);
    let mut totals = Totals::default();
    for file in &files {
        let file_totals = check_file(file, &catalog, &args)?;
        totals.diagnostics += file_totals.diagnostics;
        totals.errors += file_totals.errors;
        totals.warnings += file_totals.warnings;
    }

    if text {
        println!(
            "✨ {} Check complete!",
            if totals.errors > 0 {
                "Done".red().bold()
            } else {
                "Done".green().bold()
            }
        );
        println!("   Files checked: {}", files.len());
        println!("   Total diagnostics: {}", totals.diagnostics);
        if totals.errors > 0 {
            println!("   {} {}", "Errors:".red(), totals.errors);
        }
        if totals.warnings > 0 {
            println!("   {} {}", "Warnings:".yellow(), totals.warnings);
        }
        if totals.errors == 0 && totals.warnings == 0 {
            println!("   {} No issues found!", "✓".green());
        }
    }

    if totals.errors > 0 {
        bail!("{} errors found", totals.errors);
    }
    Ok(())
}

fn check_file(file_path: &Path, catalog: &BlockCatalog, args: &CheckArgs) -> Result<Totals> {
    let site_file = match SiteFile::read(file_path) {
        Ok(site_file) => site_file,
        Err(err) => {
            eprintln!("{} {:#}", "✗".red(), err);
            return Ok(Totals {
                diagnostics: 1,
                errors: 1,
                warnings: 0,
            });
        }
    };

    let diagnostics: Vec<_> = check_site_data(&site_file.site_data, catalog)
        .into_iter()
        .filter(|d| args.all || d.level != DiagnosticLevel::Info)
        .collect();

    let totals = Totals {
        diagnostics: diagnostics.len(),
        errors: diagnostics.iter().filter(|d| d.level == DiagnosticLevel::Error).count(),
        warnings: diagnostics.iter().filter(|d| d.level == DiagnosticLevel::Warning).count(),
    };

    if args.format == "json" {
        let report = serde_json::json!({
            "file": file_path.display().to_string(),
            "diagnostics": diagnostics,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(totals);
    }

    if diagnostics.is_empty() {
        println!("{} {}", "✓".green(), file_path.display());
        return Ok(totals);
    }

    println!("{}", file_path.display());
    for diagnostic in &diagnostics {
        let level_str = match diagnostic.level {
            DiagnosticLevel::Error => "error".red().bold(),
            DiagnosticLevel::Warning => "warning".yellow().bold(),
            DiagnosticLevel::Info => "info".blue().bold(),
        };

        match &diagnostic.block_id {
            Some(block_id) => println!(
                "  {} [{}] {} {}",
                level_str,
                diagnostic.rule,
                diagnostic.message,
                format!("({})", block_id).dimmed()
            ),
            None => println!("  {} [{}] {}", level_str, diagnostic.rule, diagnostic.message),
        }

        if let Some(suggestion) = &diagnostic.suggestion {
            println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
        }
    }
    println!();

    Ok(totals)
}
