mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    apply, catalog, check, init, publish, render, ApplyArgs, CatalogArgs, CheckArgs, InitArgs, PublishArgs,
    RenderArgs,
};
use config::Config;
use tracing_subscriber::EnvFilter;

/// Pagewright CLI - build, check and publish block-based pages
#[derive(Parser, Debug)]
#[command(name = "pagewright")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Pagewright project with a starter site
    Init(InitArgs),

    /// List the blocks available to pages
    Catalog(CatalogArgs),

    /// Render a site to editor or preview markup
    Render(RenderArgs),

    /// Publish sites as standalone HTML pages
    Publish(PublishArgs),

    /// Check stored site data for problems
    Check(CheckArgs),

    /// Run edit commands against a site file
    Apply(ApplyArgs),
}

fn init_tracing(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let config = match Config::load(&cwd) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    init_tracing(&config, cli.verbose);

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Catalog(args) => catalog(args, &config, &cwd),
        Command::Render(args) => render(args, &config, &cwd),
        Command::Publish(args) => publish(args, &config, &cwd),
        Command::Check(args) => check(args, &config, &cwd),
        Command::Apply(args) => apply(args, &config, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
