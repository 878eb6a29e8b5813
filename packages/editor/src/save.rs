//! Save status tracking.
//!
//! Saves are fire-and-forget from the editor's point of view: the caller
//! takes a ticket, persists the snapshot however it likes and reports back.
//! Only the most recent ticket may change the status, so a slow response
//! for an older save never overwrites a newer one.

use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved { at: DateTime<Utc> },
    Failed { message: String },
}

impl fmt::Display for SaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveStatus::Idle => f.write_str("idle"),
            SaveStatus::Saving => f.write_str("saving"),
            SaveStatus::Saved { at } => write!(f, "saved at {}", at.format("%H:%M:%S")),
            SaveStatus::Failed { message } => write!(f, "save failed: {}", message),
        }
    }
}

/// Handle for one in-flight save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTicket {
    sequence: u64,
    revision: u64,
}

impl SaveTicket {
    /// Document revision the save carries
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[derive(Debug, Clone, Default)]
pub struct SaveTracker {
    sequence: u64,
    saved_revision: u64,
    status: SaveStatus,
}

impl SaveTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, revision: u64) -> SaveTicket {
        self.sequence += 1;
        self.status = SaveStatus::Saving;
        debug!(sequence = self.sequence, revision, "Save started");
        SaveTicket {
            sequence: self.sequence,
            revision,
        }
    }

    /// Report the outcome of a save. Returns false when the ticket is stale.
    pub fn finish<E: fmt::Display>(&mut self, ticket: SaveTicket, result: Result<(), E>) -> bool {
        if ticket.sequence != self.sequence {
            debug!(
                sequence = ticket.sequence,
                latest = self.sequence,
                "Ignoring stale save response"
            );
            return false;
        }

        match result {
            Ok(()) => {
                self.saved_revision = self.saved_revision.max(ticket.revision);
                self.status = SaveStatus::Saved { at: Utc::now() };
                info!(revision = ticket.revision, "Saved");
            }
            Err(err) => {
                warn!(error = %err, "Save failed");
                self.status = SaveStatus::Failed {
                    message: err.to_string(),
                };
            }
        }
        true
    }

    pub fn status(&self) -> &SaveStatus {
        &self.status
    }

    pub fn is_saving(&self) -> bool {
        self.status == SaveStatus::Saving
    }

    /// Whether `revision` has changes newer than the last successful save
    pub fn is_dirty(&self, revision: u64) -> bool {
        revision > self.saved_revision
    }
}
