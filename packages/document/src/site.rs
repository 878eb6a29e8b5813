use crate::{PageDocument, SiteData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Publication state of a site. Transitions belong to the hosting application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteStatus {
    #[default]
    Draft,
    Live,
    Paused,
}

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteStatus::Draft => f.write_str("draft"),
            SiteStatus::Live => f.write_str("live"),
            SiteStatus::Paused => f.write_str("paused"),
        }
    }
}

/// A stored site record. The editor only reads and writes `site_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: i64,

    #[serde(default)]
    pub user_id: i64,

    #[serde(default)]
    pub template_id: i64,

    pub name: String,

    pub subdomain: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,

    #[serde(default)]
    pub site_data: SiteData,

    #[serde(default)]
    pub status: SiteStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Site {
    pub fn new(id: i64, name: impl Into<String>, subdomain: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id: 0,
            template_id: 0,
            name: name.into(),
            subdomain: subdomain.into(),
            custom_domain: None,
            site_data: SiteData::default(),
            status: SiteStatus::Draft,
            published_at: None,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    pub fn with_document(mut self, document: &PageDocument) -> Self {
        self.site_data = document.to_site_data();
        self
    }

    pub fn document(&self) -> PageDocument {
        self.site_data.clone().into_document()
    }

    /// Replace `site_data` and bump `updated_at`
    pub fn patch_site_data(&mut self, site_data: SiteData) {
        self.site_data = site_data;
        self.updated_at = Some(Utc::now());
    }
}
