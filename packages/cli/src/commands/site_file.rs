//! Reading and writing site JSON files.
//!
//! A file holds either a full site record (as written by the file store) or
//! a bare `site_data` object.

use crate::config::DEFAULT_CONFIG_NAME;
use anyhow::{Context, Result};
use pagewright_document::{Site, SiteData};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct SiteFile {
    pub path: PathBuf,
    pub site: Option<Site>,
    pub site_data: SiteData,
}

impl SiteFile {
    pub fn read(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&source)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?;

        let is_site_record = value.get("site_data").is_some() && value.get("id").is_some();
        let (site, site_data) = if is_site_record {
            let site: Site = serde_json::from_value(value)
                .with_context(|| format!("Invalid site record in {}", path.display()))?;
            let site_data = site.site_data.clone();
            (Some(site), site_data)
        } else {
            let site_data = SiteData::from_value(value)
                .with_context(|| format!("Invalid site data in {}", path.display()))?;
            (None, site_data)
        };

        Ok(Self {
            path: path.to_path_buf(),
            site,
            site_data,
        })
    }

    /// Page title: the site name, else the file stem
    pub fn title(&self) -> String {
        match &self.site {
            Some(site) => site.name.clone(),
            None => self
                .path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Website".to_string()),
        }
    }

    /// Write `site_data` back in the shape the file was read in
    pub fn write(&mut self, site_data: SiteData) -> Result<()> {
        let json = match &mut self.site {
            Some(site) => {
                site.patch_site_data(site_data.clone());
                serde_json::to_string_pretty(site)?
            }
            None => site_data.to_json_pretty()?,
        };
        fs::write(&self.path, json)?;
        self.site_data = site_data;
        Ok(())
    }
}

/// Site files under `path` (or `path` itself when it is a file)
pub fn find_site_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.is_file()
                && path.extension().and_then(|s| s.to_str()) == Some("json")
                && path.file_name().and_then(|s| s.to_str()) != Some(DEFAULT_CONFIG_NAME)
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_document::starter_document;

    #[test]
    fn test_reads_both_shapes() {
        let dir = tempfile::tempdir().unwrap();
        let doc = starter_document(None);

        let record = dir.path().join("1.json");
        let site = Site::new(1, "Cafe", "cafe").with_document(&doc);
        fs::write(&record, serde_json::to_string(&site).unwrap()).unwrap();

        let bare = dir.path().join("landing.json");
        fs::write(&bare, doc.to_site_data().to_json().unwrap()).unwrap();

        let file = SiteFile::read(&record).unwrap();
        assert_eq!(file.title(), "Cafe");
        assert_eq!(file.site_data.blocks.len(), 1);

        let file = SiteFile::read(&bare).unwrap();
        assert!(file.site.is_none());
        assert_eq!(file.title(), "landing");
    }

    #[test]
    fn test_find_skips_config_and_other_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.md"), "").unwrap();

        let files = find_site_files(dir.path());
        assert_eq!(files, vec![dir.path().join("a.json")]);
    }
}
