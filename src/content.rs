//! Content Catalog - Section Records by Tenant
//!
//! Stand-in for the remote content API: record files are loaded into an
//! in-memory index keyed by (entity, kind). A file that fails to parse
//! only loses its own section; everything else still loads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::imageset::ImageSet;
use crate::theme::EntityId;

/// The record families the site displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Hero,
    Gallery,
    Article,
    Facility,
    Testimonial,
    Structure,
}

/// One displayable item as delivered by the content API. Immutable once
/// loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub entity: EntityId,
    pub kind: ContentKind,
    #[serde(default)]
    pub images: Option<ImageSet>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read content directory: {0}")]
    Io(#[from] std::io::Error),
}

/// In-memory content index keyed by (entity, kind).
pub struct ContentCatalog {
    sections: HashMap<(EntityId, ContentKind), Vec<ContentRecord>>,
}

impl ContentCatalog {
    pub fn new() -> Self {
        Self { sections: HashMap::new() }
    }

    /// Load every `*.json` record file under `dir`. Each file holds an
    /// array of records; unparseable files are skipped so one bad
    /// section cannot corrupt the rest. A missing directory loads empty.
    pub fn load_from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        if dir.exists() {
            for entry in fs::read_dir(dir)? {
                let entry = entry?;
                let path = entry.path();
                if path.extension().map_or(false, |e| e == "json") {
                    if let Ok(content) = fs::read_to_string(&path) {
                        if let Ok(records) = serde_json::from_str::<Vec<ContentRecord>>(&content) {
                            for record in records {
                                catalog.register(record);
                            }
                        }
                    }
                }
            }
        }
        Ok(catalog)
    }

    pub fn register(&mut self, record: ContentRecord) {
        self.sections
            .entry((record.entity, record.kind))
            .or_default()
            .push(record);
    }

    /// Records for one section. Empty slice when nothing loaded: the
    /// presentational layer renders an empty state, never a crash.
    pub fn section(&self, entity: EntityId, kind: ContentKind) -> &[ContentRecord] {
        self.sections
            .get(&(entity, kind))
            .map_or(&[], Vec::as_slice)
    }

    pub fn list(&self) -> Vec<&ContentRecord> {
        self.sections.values().flatten().collect()
    }

    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::new()
    }
}
