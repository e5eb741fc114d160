//! Entity Theming - One Table, No Drift
//!
//! The three tenants share every component; the theme table is the single
//! place their visual identity lives. Lookups are total: an unknown or
//! missing identifier resolves to the pura bundle so nothing ever renders
//! unstyled.

use serde::{Deserialize, Serialize};

/// The three organizations sharing the codebase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityId {
    /// The temple (default tenant)
    #[default]
    Pura,
    /// The foundation
    Yayasan,
    /// The school
    Pasraman,
}

impl EntityId {
    pub const ALL: [Self; 3] = [Self::Pura, Self::Yayasan, Self::Pasraman];

    /// Exact lowercase match only. Anything else is unrecognized and
    /// left to the caller's fallback.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pura" => Some(Self::Pura),
            "yayasan" => Some(Self::Yayasan),
            "pasraman" => Some(Self::Pasraman),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pura => "pura",
            Self::Yayasan => "yayasan",
            Self::Pasraman => "pasraman",
        }
    }
}

/// Fixed presentation tokens for one tenant. Constructed once, never
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTheme {
    pub accent_text: &'static str,
    pub accent_bg: &'static str,
    pub ring: &'static str,
    pub back_path: &'static str,
    pub badge_tint: &'static str,
}

const PURA_THEME: EntityTheme = EntityTheme {
    accent_text: "text-amber-700",
    accent_bg: "bg-amber-600",
    ring: "ring-amber-400",
    back_path: "/",
    badge_tint: "text-amber-400",
};

const YAYASAN_THEME: EntityTheme = EntityTheme {
    accent_text: "text-emerald-700",
    accent_bg: "bg-emerald-600",
    ring: "ring-emerald-400",
    back_path: "/yayasan",
    badge_tint: "text-emerald-400",
};

const PASRAMAN_THEME: EntityTheme = EntityTheme {
    accent_text: "text-sky-700",
    accent_bg: "bg-sky-600",
    ring: "ring-sky-400",
    back_path: "/pasraman",
    badge_tint: "text-sky-400",
};

impl EntityTheme {
    /// Total lookup into the static table. Adding a tenant means adding
    /// a table row and a match arm here, nothing else.
    pub const fn of(entity: EntityId) -> &'static EntityTheme {
        match entity {
            EntityId::Pura => &PURA_THEME,
            EntityId::Yayasan => &YAYASAN_THEME,
            EntityId::Pasraman => &PASRAMAN_THEME,
        }
    }
}

/// Resolve a raw identifier (query param, route segment) to its theme.
/// Unknown or missing identifiers get the pura bundle.
pub fn theme_for(entity: Option<&str>) -> &'static EntityTheme {
    let id = entity.and_then(EntityId::parse).unwrap_or_default();
    EntityTheme::of(id)
}
