//! Trihita Core - Multi-Tenant Presentation Engine
//!
//! # The Guarantees (Non-Negotiable)
//! 1. One Breakpoint Table
//! 2. Variant Selection Is Deterministic
//! 3. Blur Is Never the Principal Image
//! 4. Unknown Tenants Render as Pura
//! 5. Explicit Referrer Beats Inference
//! 6. The Core Never Fails a Render

pub mod viewport;
pub mod imageset;
pub mod theme;
pub mod article;
pub mod content;
pub mod plan;

pub use viewport::{ListenerToken, ViewportClass, ViewportTracker};
pub use imageset::{data_uri_placeholder, default_blur_placeholder, DisplayMode, ImageSet};
pub use theme::{theme_for, EntityId, EntityTheme};
pub use article::resolve_article_entity;
pub use content::{CatalogError, ContentCatalog, ContentKind, ContentRecord};
pub use plan::{PagePlan, PageRequest, PlanError, Planner, ResolvedItem, SectionPlan};

pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");
