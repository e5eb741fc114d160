//! ImageSet Resolution - Deterministic Variant Selection
//!
//! A record ships a subset of size buckets; the resolver walks one fixed
//! preference order per display mode and returns the first real URL.
//! `blur` is never the principal image. No usable entry resolves to the
//! empty string, which callers treat as "omit the element".

use serde::{Deserialize, Serialize};

use crate::viewport::ViewportClass;

/// What the caller intends to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Grid/card thumbnail: viewport-appropriate resolution.
    #[default]
    Thumbnail,
    /// Lightbox/detail view: highest fidelity available.
    Full,
}

/// Multi-resolution image variants as delivered by the content API.
/// Any subset of keys may be present; empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub xs: Option<String>,
    #[serde(default)]
    pub sm: Option<String>,
    #[serde(default)]
    pub md: Option<String>,
    #[serde(default)]
    pub lg: Option<String>,
    #[serde(default)]
    pub xl: Option<String>,
    #[serde(default, rename = "2xl")]
    pub xxl: Option<String>,
    #[serde(default)]
    pub fhd: Option<String>,
    /// Tiny placeholder, shown behind the principal image while it loads.
    #[serde(default)]
    pub blur: Option<String>,
    /// Square-cropped variant.
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Fhd,
    Avatar,
}

/// Highest-fidelity first.
const FULL_ORDER: [Bucket; 5] = [Bucket::Fhd, Bucket::Xxl, Bucket::Xl, Bucket::Lg, Bucket::Md];

/// Tried after the viewport-matching bucket in thumbnail mode.
const THUMBNAIL_TAIL: [Bucket; 4] = [Bucket::Lg, Bucket::Md, Bucket::Sm, Bucket::Xl];

/// Last resort: any real (non-blur) entry, fixed declaration order.
/// Avatar last, it is a square crop.
const ANY_REAL_ORDER: [Bucket; 8] = [
    Bucket::Xs,
    Bucket::Sm,
    Bucket::Md,
    Bucket::Lg,
    Bucket::Xl,
    Bucket::Xxl,
    Bucket::Fhd,
    Bucket::Avatar,
];

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|url| !url.is_empty())
}

fn viewport_bucket(class: ViewportClass) -> Bucket {
    match class {
        ViewportClass::Xs => Bucket::Xs,
        ViewportClass::Sm => Bucket::Sm,
        ViewportClass::Md => Bucket::Md,
        ViewportClass::Lg => Bucket::Lg,
        ViewportClass::Xl => Bucket::Xl,
        ViewportClass::Xxl => Bucket::Xxl,
        ViewportClass::Fhd => Bucket::Fhd,
    }
}

impl ImageSet {
    fn url(&self, bucket: Bucket) -> Option<&str> {
        match bucket {
            Bucket::Xs => present(&self.xs),
            Bucket::Sm => present(&self.sm),
            Bucket::Md => present(&self.md),
            Bucket::Lg => present(&self.lg),
            Bucket::Xl => present(&self.xl),
            Bucket::Xxl => present(&self.xxl),
            Bucket::Fhd => present(&self.fhd),
            Bucket::Avatar => present(&self.avatar),
        }
    }

    /// Pick the principal URL for a display intent. Pure and total:
    /// returns `""` when the set holds nothing usable.
    pub fn resolve(&self, mode: DisplayMode, viewport: ViewportClass) -> &str {
        match mode {
            DisplayMode::Full => {
                for bucket in FULL_ORDER {
                    if let Some(url) = self.url(bucket) {
                        return url;
                    }
                }
            }
            DisplayMode::Thumbnail => {
                if let Some(url) = self.url(viewport_bucket(viewport)) {
                    return url;
                }
                for bucket in THUMBNAIL_TAIL {
                    if let Some(url) = self.url(bucket) {
                        return url;
                    }
                }
            }
        }

        // Anything real beats nothing; blur is never eligible.
        for bucket in ANY_REAL_ORDER {
            if let Some(url) = self.url(bucket) {
                return url;
            }
        }

        ""
    }

    /// True iff at least one non-blur, non-avatar bucket holds a URL.
    /// Callers suppress the image element when this is false.
    pub fn is_displayable(&self) -> bool {
        const DISPLAY_BUCKETS: [Bucket; 7] = [
            Bucket::Xs,
            Bucket::Sm,
            Bucket::Md,
            Bucket::Lg,
            Bucket::Xl,
            Bucket::Xxl,
            Bucket::Fhd,
        ];
        DISPLAY_BUCKETS.iter().any(|&b| self.url(b).is_some())
    }

    /// The record's own blur placeholder, if it shipped one.
    pub fn blur_placeholder(&self) -> Option<&str> {
        present(&self.blur)
    }
}

/// Inline an image as a base64 data URI, e.g. for synthesized blur
/// placeholders.
pub fn data_uri_placeholder(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime,
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, bytes)
    )
}

// Minimal 1x1 transparent PNG
const TRANSPARENT_PIXEL_PNG: [u8; 67] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A,
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
    0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41,
    0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00,
    0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

/// System default blur placeholder for records that ship none.
pub fn default_blur_placeholder() -> String {
    data_uri_placeholder("image/png", &TRANSPARENT_PIXEL_PNG)
}
