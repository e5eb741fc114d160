//! Article Tenant Resolution - Explicit Beats Inferred Beats Default
//!
//! Articles are shared across all three tenants; the standalone detail
//! page needs one consistent theme and back-link. Precedence: a valid
//! `ref` query value wins outright, then category keywords, then pura.

use crate::theme::EntityId;

/// Decide which tenant owns an article.
///
/// The referrer must match a known identifier verbatim; category
/// inference is case-insensitive over the free-text category name.
pub fn resolve_article_entity(ref_param: Option<&str>, category: &str) -> EntityId {
    if let Some(id) = ref_param.and_then(EntityId::parse) {
        return id;
    }

    let category = category.to_lowercase();
    if category.contains("pendidikan") || category.contains("sekolah") {
        EntityId::Pasraman
    } else if category.contains("sosial") || category.contains("donasi") {
        EntityId::Yayasan
    } else {
        EntityId::Pura
    }
}
