//! Page Plan Pipeline - Single Entry Point
//!
//! CRITICAL: plan_page never fails. Unknown tenants, missing sections
//! and unusable image sets all degrade to deterministic defaults; this
//! layer sits beneath presentational code with no error boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::article::resolve_article_entity;
use crate::content::{ContentCatalog, ContentKind, ContentRecord};
use crate::imageset::{default_blur_placeholder, DisplayMode};
use crate::theme::{EntityId, EntityTheme};
use crate::viewport::ViewportClass;
use crate::CORE_VERSION;

#[cfg(feature = "test-hooks")]
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "test-hooks")]
static ITEM_RESOLUTION_COUNT: AtomicU32 = AtomicU32::new(0);

#[cfg(feature = "test-hooks")]
pub fn get_item_resolution_count() -> u32 {
    ITEM_RESOLUTION_COUNT.load(Ordering::SeqCst)
}

#[cfg(feature = "test-hooks")]
pub fn reset_item_resolution_count() {
    ITEM_RESOLUTION_COUNT.store(0, Ordering::SeqCst);
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// What a page asks for: which tenant, which sections, at what width.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Explicit tenant, e.g. from the route segment.
    #[serde(default)]
    pub entity: Option<String>,
    /// `ref` query parameter on shared article pages.
    #[serde(default)]
    pub referrer: Option<String>,
    /// Article category, used for tenant inference when no explicit
    /// entity or referrer applies.
    #[serde(default)]
    pub category: Option<String>,
    pub viewport_width: u32,
    pub sections: Vec<ContentKind>,
    #[serde(default)]
    pub mode: DisplayMode,
}

impl PageRequest {
    pub fn from_json(payload: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// One record, ready to render: principal URL picked, blur in place,
/// image suppressed when the set holds nothing displayable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub blur_url: String,
    pub show_image: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionPlan {
    pub kind: ContentKind,
    pub items: Vec<ResolvedItem>,
}

/// The manifest the rendering layer consumes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePlan {
    pub id: String,
    pub engine_version: String,
    pub created_at: DateTime<Utc>,
    pub entity: EntityId,
    pub theme: EntityTheme,
    pub viewport: ViewportClass,
    pub sections: Vec<SectionPlan>,
}

impl PagePlan {
    pub fn to_json(&self) -> Result<String, PlanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Composes tenant resolution, viewport classification and image
/// resolution over the catalog.
pub struct Planner {
    catalog: ContentCatalog,
}

impl Planner {
    pub fn new(catalog: ContentCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Build the render plan for one page. Infallible: every error class
    /// (unknown tenant, empty section, unusable image set) is absorbed
    /// into a default.
    pub fn plan_page(&self, request: &PageRequest) -> PagePlan {
        let entity = self.resolve_entity(request);
        let viewport = ViewportClass::classify(request.viewport_width);

        let sections = request
            .sections
            .iter()
            .map(|&kind| SectionPlan {
                kind,
                items: self
                    .catalog
                    .section(entity, kind)
                    .iter()
                    .map(|record| plan_item(record, request.mode, viewport))
                    .collect(),
            })
            .collect();

        PagePlan {
            id: Uuid::new_v4().to_string(),
            engine_version: CORE_VERSION.to_string(),
            created_at: Utc::now(),
            entity,
            theme: *EntityTheme::of(entity),
            viewport,
            sections,
        }
    }

    fn resolve_entity(&self, request: &PageRequest) -> EntityId {
        if let Some(id) = request.entity.as_deref().and_then(EntityId::parse) {
            return id;
        }
        resolve_article_entity(
            request.referrer.as_deref(),
            request.category.as_deref().unwrap_or(""),
        )
    }
}

fn plan_item(record: &ContentRecord, mode: DisplayMode, viewport: ViewportClass) -> ResolvedItem {
    #[cfg(feature = "test-hooks")]
    ITEM_RESOLUTION_COUNT.fetch_add(1, Ordering::SeqCst);

    let (image_url, blur_url, show_image) = match &record.images {
        Some(set) if set.is_displayable() => (
            set.resolve(mode, viewport).to_string(),
            set.blur_placeholder()
                .map_or_else(default_blur_placeholder, str::to_string),
            true,
        ),
        _ => (String::new(), String::new(), false),
    };

    ResolvedItem {
        id: record.id.clone(),
        title: record.title.clone(),
        image_url,
        blur_url,
        show_image,
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(ContentCatalog::default())
    }
}
