use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagewright_document::{starter_document, Site, TemplateSeed};
use pagewright_editor::{FileSiteStore, StoreError};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Name of the starter site
    #[arg(short, long, default_value = "My Website")]
    pub name: String,

    /// Template category to seed from (e.g. business)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Directory for site records
    #[arg(short, long, default_value = "sites")]
    pub sites_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Pagewright project...".bright_blue().bold());

    let config = Config {
        sites_dir: args.sites_dir.clone(),
        ..Config::default()
    };

    let sites_dir = config.get_sites_dir(cwd);
    if !sites_dir.exists() {
        fs::create_dir_all(&sites_dir)
            .with_context(|| format!("Cannot create {}", sites_dir.display()))?;
        println!("  {} Created {}/", "✓".green(), args.sites_dir);
    }

    let seed = args
        .category
        .as_ref()
        .map(|category| TemplateSeed::new(&args.name, category, ""));
    let document = starter_document(seed.as_ref());
    let site = Site::new(1, &args.name, subdomain_for(&args.name)).with_document(&document);

    let store = FileSiteStore::new(&sites_dir);
    match store.create_site(&site) {
        Ok(()) => println!(
            "  {} Created {} ({} blocks)",
            "✓".green(),
            store.path_for(site.id).display(),
            document.len()
        ),
        Err(StoreError::AlreadyExists(id)) => println!(
            "  {} Site {} already exists, left untouched",
            "⚠️".yellow(),
            id
        ),
        Err(err) => return Err(err.into()),
    }

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: pagewright check {}", args.sites_dir);
    println!("  2. Run: pagewright publish");
    println!("  3. Open {}/1.html", config.out_dir);

    Ok(())
}

/// Lowercase ASCII alphanumerics joined by single dashes
fn subdomain_for(name: &str) -> String {
    let slug = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "site".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(dir: &str) -> InitArgs {
        InitArgs {
            name: "Joe's Bakery".to_string(),
            category: Some("business".to_string()),
            sites_dir: dir.to_string(),
            force: false,
        }
    }

    #[test]
    fn test_subdomain_for() {
        assert_eq!(subdomain_for("Joe's Bakery"), "joe-s-bakery");
        assert_eq!(subdomain_for("  Café 24 "), "caf-24");
        assert_eq!(subdomain_for("!!!"), "site");
    }

    #[test]
    fn test_init_writes_config_and_starter_site() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        init(args("sites"), &cwd).unwrap();

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.sites_dir, "sites");

        let json = fs::read_to_string(dir.path().join("sites/1.json")).unwrap();
        let site: Site = serde_json::from_str(&json).unwrap();
        assert_eq!(site.name, "Joe's Bakery");
        assert_eq!(site.subdomain, "joe-s-bakery");
        assert!(site.site_data.blocks.iter().any(|b| b.block_type == "services"));
    }

    #[test]
    fn test_init_keeps_existing_config_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "sitesDir": "custom" }"#).unwrap();

        init(args("sites"), &cwd).unwrap();

        assert_eq!(Config::load(&cwd).unwrap().sites_dir, "custom");
        assert!(!dir.path().join("sites").exists());
    }
}
