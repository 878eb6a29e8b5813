use super::site_file::SiteFile;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagewright_renderer::{RenderContext, Renderer};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Site file (a site record or bare site data)
    pub file: PathBuf,

    /// Render as the preview canvas instead of the editing canvas
    #[arg(short, long)]
    pub preview: bool,

    /// Mark a block as selected (editing canvas only)
    #[arg(long)]
    pub selected: Option<String>,

    /// Write markup here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn render(args: RenderArgs, config: &Config, cwd: &str) -> Result<()> {
    let catalog = config.load_catalog(cwd)?;
    let site_file = SiteFile::read(&PathBuf::from(cwd).join(&args.file))?;
    let document = site_file.site_data.clone().into_document();

    let ctx = match (args.preview, args.selected) {
        (true, _) => RenderContext::preview(),
        (false, Some(selected)) => RenderContext::edit().with_selected(selected),
        (false, None) => RenderContext::edit(),
    };

    let markup = Renderer::new(&catalog).render_page(&document, &ctx).to_html();

    match args.out {
        Some(out) => {
            let out = PathBuf::from(cwd).join(out);
            if let Some(parent) = out.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&out, markup)?;
            println!(
                "{} Rendered {} blocks → {}",
                "✓".green(),
                document.len(),
                out.display()
            );
        }
        None => println!("{}", markup),
    }

    Ok(())
}
