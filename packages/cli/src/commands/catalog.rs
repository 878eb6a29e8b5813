use crate::config::Config;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use pagewright_catalog::{BlockCatalog, BlockDefinition, CatalogFilter};

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Only blocks in this category ("all" lists everything)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Case-insensitive match on name or description
    #[arg(short, long)]
    pub search: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn catalog(args: CatalogArgs, config: &Config, cwd: &str) -> Result<()> {
    let catalog = config.load_catalog(cwd)?;

    let mut filter = CatalogFilter::new();
    if let Some(category) = &args.category {
        filter = filter.category(category);
    }
    if let Some(search) = &args.search {
        filter = filter.search(search);
    }

    let definitions = catalog.list_definitions(Some(&filter));

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&definitions)?),
        "text" => print_definitions(&catalog, &definitions),
        other => bail!("Unknown format: {}. Use: text or json", other),
    }

    Ok(())
}

fn print_definitions(catalog: &BlockCatalog, definitions: &[&BlockDefinition]) {
    if definitions.is_empty() {
        println!("{}", "No blocks match".yellow());
        return;
    }

    for category in catalog.categories() {
        let in_category: Vec<_> = definitions
            .iter()
            .filter(|def| def.category == category.id)
            .collect();
        if in_category.is_empty() {
            continue;
        }

        println!("{}", category.name.bright_blue().bold());
        for def in in_category {
            let mut badges = String::new();
            if def.is_popular {
                badges.push_str(&format!(" {}", "popular".green()));
            }
            if def.is_premium {
                badges.push_str(&format!(" {}", "premium".magenta()));
            }
            println!(
                "  {} {}{}",
                def.id.bright_white(),
                format!("({})", def.block_type).dimmed(),
                badges
            );
            if !def.description.is_empty() {
                println!("      {}", def.description.dimmed());
            }
        }
        println!();
    }

    println!("{} {} blocks", "✓".green(), definitions.len());
}
