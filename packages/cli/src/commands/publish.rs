use super::site_file::{find_site_files, SiteFile};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagewright_compiler_html::{compile_to_html, is_publishable, CompileOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Site file or directory (defaults to the configured sites directory)
    pub path: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Leave a comment where a block type has no published form
    #[arg(long)]
    pub comments: bool,
}

pub fn publish(args: PublishArgs, config: &Config, cwd: &str) -> Result<()> {
    let source = match &args.path {
        Some(path) => PathBuf::from(cwd).join(path),
        None => config.get_sites_dir(cwd),
    };

    if !source.exists() {
        return Err(anyhow!("Sites path does not exist: {}", source.display()));
    }

    let files = find_site_files(&source);
    if files.is_empty() {
        println!("{}", "⚠️  No site files found".yellow());
        return Ok(());
    }

    let out_dir = match &args.out_dir {
        Some(out) => PathBuf::from(cwd).join(out),
        None => config.get_out_dir(cwd),
    };

    if !args.stdout {
        println!("{}", "📦 Publishing sites...".bright_blue().bold());
        println!("Found {} files", files.len());
    }

    let mut success_count = 0;
    let mut error_count = 0;

    for file in &files {
        let relative_path = file.strip_prefix(&source).unwrap_or(file);
        match publish_file(file, &args, config, &out_dir) {
            Ok(output) => {
                success_count += 1;
                if !args.stdout {
                    println!("  {} {} → {}", "✓".green(), relative_path.display(), output);
                }
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    format!("{:#}", e).red()
                );
            }
        }
    }

    if args.stdout {
        return if error_count == 0 {
            Ok(())
        } else {
            Err(anyhow!("{} sites failed to publish", error_count))
        };
    }

    println!();
    if error_count == 0 {
        println!("{} Published {} sites successfully", "✅".green(), success_count);
    } else {
        println!(
            "{} Published {} sites, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
    }

    Ok(())
}

fn publish_file(file: &Path, args: &PublishArgs, config: &Config, out_dir: &Path) -> Result<String> {
    let site_file = SiteFile::read(file)?;
    let title = site_file.title();
    let document = site_file.site_data.into_document();

    let skipped = document
        .blocks()
        .iter()
        .filter(|b| b.is_visible() && !is_publishable(&b.block_type))
        .count();
    if skipped > 0 {
        debug!(file = %file.display(), skipped, "Blocks without a published form");
    }

    let options = CompileOptions {
        pretty: config.pretty,
        comments: args.comments,
        ..CompileOptions::default()
    }
    .with_title(title);

    let html = compile_to_html(&document, &options)?;

    if args.stdout {
        println!("{}", html);
        return Ok("stdout".to_string());
    }

    let stem = file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index".to_string());
    let output_file = out_dir.join(format!("{}.html", stem));

    fs::create_dir_all(out_dir)?;
    fs::write(&output_file, html)?;

    Ok(output_file.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_document::{starter_document, Site};

    #[test]
    fn test_publish_writes_one_page_per_site() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        let config = Config::default();

        let sites = config.get_sites_dir(&cwd);
        fs::create_dir_all(&sites).unwrap();
        let site = Site::new(7, "Corner Cafe", "corner-cafe").with_document(&starter_document(None));
        fs::write(sites.join("7.json"), serde_json::to_string(&site).unwrap()).unwrap();

        let args = PublishArgs {
            path: None,
            stdout: false,
            out_dir: None,
            comments: false,
        };
        publish(args, &config, &cwd).unwrap();

        let html = fs::read_to_string(config.get_out_dir(&cwd).join("7.html")).unwrap();
        assert!(html.contains("<title>Corner Cafe</title>"));
        assert!(html.contains("Welcome to Your New Website"));
    }

    #[test]
    fn test_missing_sites_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        let args = PublishArgs {
            path: None,
            stdout: false,
            out_dir: None,
            comments: false,
        };
        assert!(publish(args, &Config::default(), &cwd).is_err());
    }
}
