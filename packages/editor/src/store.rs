//! Site persistence.
//!
//! The editor only ever reads a site and patches its `site_data`. The real
//! backend is out of process; [`MemorySiteStore`] backs tests and
//! [`FileSiteStore`] backs the command line (one `{id}.json` per site).

use pagewright_document::{Site, SiteData};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Site not found: {0}")]
    NotFound(i64),

    #[error("Site {0} already exists")]
    AlreadyExists(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid site record: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait SiteStore {
    fn get_site(&self, id: i64) -> Result<Site, StoreError>;

    /// Replace the site's `site_data`, returning the updated record
    fn patch_site_data(&mut self, id: i64, site_data: &SiteData) -> Result<Site, StoreError>;

    fn list_sites(&self) -> Result<Vec<Site>, StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemorySiteStore {
    sites: BTreeMap<i64, Site>,
}

impl MemorySiteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site(mut self, site: Site) -> Self {
        self.sites.insert(site.id, site);
        self
    }
}

impl SiteStore for MemorySiteStore {
    fn get_site(&self, id: i64) -> Result<Site, StoreError> {
        self.sites.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn patch_site_data(&mut self, id: i64, site_data: &SiteData) -> Result<Site, StoreError> {
        let site = self.sites.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        site.patch_site_data(site_data.clone());
        Ok(site.clone())
    }

    fn list_sites(&self) -> Result<Vec<Site>, StoreError> {
        Ok(self.sites.values().cloned().collect())
    }
}

#[derive(Debug, Clone)]
pub struct FileSiteStore {
    dir: PathBuf,
}

impl FileSiteStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, id: i64) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    /// Write a new site record. Fails if one with the same id exists.
    pub fn create_site(&self, site: &Site) -> Result<(), StoreError> {
        let path = self.path_for(site.id);
        if path.exists() {
            return Err(StoreError::AlreadyExists(site.id));
        }
        fs::create_dir_all(&self.dir)?;
        self.write(site)
    }

    fn write(&self, site: &Site) -> Result<(), StoreError> {
        let path = self.path_for(site.id);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(site)?)?;
        fs::rename(&tmp, &path)?;
        debug!(site_id = site.id, path = %path.display(), "Wrote site");
        Ok(())
    }
}

impl SiteStore for FileSiteStore {
    fn get_site(&self, id: i64) -> Result<Site, StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id));
        }
        let source = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&source)?)
    }

    fn patch_site_data(&mut self, id: i64, site_data: &SiteData) -> Result<Site, StoreError> {
        let mut site = self.get_site(id)?;
        site.patch_site_data(site_data.clone());
        self.write(&site)?;
        Ok(site)
    }

    fn list_sites(&self) -> Result<Vec<Site>, StoreError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut sites = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let source = fs::read_to_string(&path)?;
            match serde_json::from_str::<Site>(&source) {
                Ok(site) => sites.push(site),
                Err(err) => warn!(path = %path.display(), error = %err, "Skipping unreadable site record"),
            }
        }

        sites.sort_by_key(|site| site.id);
        Ok(sites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_document::{starter_document, PageDocument};

    #[test]
    fn test_memory_store_patch() {
        let mut store = MemorySiteStore::new().with_site(Site::new(1, "Bakery", "bakery"));
        let data = starter_document(None).to_site_data();

        let site = store.patch_site_data(1, &data).unwrap();
        assert_eq!(site.site_data, data);
        assert_eq!(store.get_site(1).unwrap().document().len(), 2);
    }

    #[test]
    fn test_missing_site() {
        let mut store = MemorySiteStore::new();
        assert!(matches!(store.get_site(9), Err(StoreError::NotFound(9))));
        assert!(matches!(
            store.patch_site_data(9, &PageDocument::new().to_site_data()),
            Err(StoreError::NotFound(9))
        ));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSiteStore::new(dir.path());

        store.create_site(&Site::new(2, "Gym", "gym")).unwrap();
        store.create_site(&Site::new(1, "Cafe", "cafe")).unwrap();
        assert!(matches!(
            store.create_site(&Site::new(1, "Cafe", "cafe")),
            Err(StoreError::AlreadyExists(1))
        ));

        let data = starter_document(None).to_site_data();
        store.patch_site_data(2, &data).unwrap();

        let ids: Vec<i64> = store.list_sites().unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.get_site(2).unwrap().site_data, data);
    }

    #[test]
    fn test_file_store_skips_garbage() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("junk.json"), "{").unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();

        let store = FileSiteStore::new(dir.path());
        assert!(store.list_sites().unwrap().is_empty());
    }
}
