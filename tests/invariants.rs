//! Contract Invariant Tests
//!
//! These tests verify the non-negotiable guarantees.

use std::fs;

use trihita_core::{
    resolve_article_entity, theme_for, ContentCatalog, ContentKind, ContentRecord, DisplayMode,
    EntityId, EntityTheme, ImageSet, PageRequest, Planner, ViewportClass,
};

fn gallery_set() -> ImageSet {
    ImageSet {
        sm: Some("sm.jpg".to_string()),
        md: Some("md.jpg".to_string()),
        lg: Some("lg.jpg".to_string()),
        fhd: Some("fhd.jpg".to_string()),
        blur: Some("blur.jpg".to_string()),
        ..ImageSet::default()
    }
}

fn record(id: &str, entity: EntityId, kind: ContentKind, images: Option<ImageSet>) -> ContentRecord {
    ContentRecord {
        id: id.to_string(),
        title: format!("Record {}", id),
        summary: None,
        category: None,
        published_at: None,
        entity,
        kind,
        images,
    }
}

#[test]
fn invariant_resolver_returns_own_value() {
    let set = gallery_set();
    let values = ["sm.jpg", "md.jpg", "lg.jpg", "fhd.jpg"];

    for mode in [DisplayMode::Thumbnail, DisplayMode::Full] {
        for width in [0u32, 479, 480, 800, 1300, 1920] {
            let url = set.resolve(mode, ViewportClass::classify(width));
            assert!(!url.is_empty());
            assert!(values.contains(&url), "resolver invented a URL: {}", url);
        }
    }
}

#[test]
fn invariant_blur_only_resolves_empty() {
    let set = ImageSet {
        blur: Some("blur.jpg".to_string()),
        ..ImageSet::default()
    };

    assert_eq!(set.resolve(DisplayMode::Thumbnail, ViewportClass::Md), "");
    assert_eq!(set.resolve(DisplayMode::Full, ViewportClass::Md), "");
    assert_eq!(
        ImageSet::default().resolve(DisplayMode::Full, ViewportClass::Md),
        ""
    );
}

#[test]
fn invariant_resolver_is_pure() {
    let set = gallery_set();
    let first = set.resolve(DisplayMode::Thumbnail, ViewportClass::Lg).to_string();
    let second = set.resolve(DisplayMode::Thumbnail, ViewportClass::Lg).to_string();
    assert_eq!(first, second);
}

#[test]
fn invariant_classifier_boundaries() {
    assert_eq!(ViewportClass::classify(479), ViewportClass::Xs);
    assert_eq!(ViewportClass::classify(480), ViewportClass::Sm);
    assert_eq!(ViewportClass::classify(1536), ViewportClass::Fhd);
}

#[test]
fn invariant_classifier_monotonic() {
    let mut previous = ViewportClass::classify(0);
    for width in 1..=2000u32 {
        let current = ViewportClass::classify(width);
        assert!(current >= previous, "class regressed at width {}", width);
        previous = current;
    }
}

#[test]
fn invariant_unknown_entity_gets_pura_theme() {
    let default = theme_for(Some("pura"));
    assert_eq!(theme_for(Some("unknown")), default);
    assert_eq!(theme_for(None), default);
    assert_eq!(EntityTheme::of(EntityId::default()), default);
}

#[test]
fn invariant_explicit_referrer_wins() {
    assert_eq!(
        resolve_article_entity(Some("pasraman"), "Apa Saja"),
        EntityId::Pasraman
    );
}

#[test]
fn invariant_category_inference() {
    assert_eq!(
        resolve_article_entity(None, "Kegiatan Sosial"),
        EntityId::Yayasan
    );
    assert_eq!(
        resolve_article_entity(None, "Pendidikan Agama"),
        EntityId::Pasraman
    );
}

#[test]
fn invariant_default_entity_fallback() {
    assert_eq!(
        resolve_article_entity(None, "Upacara Piodalan"),
        EntityId::Pura
    );
}

#[test]
fn invariant_thumbnail_falls_through_ordering() {
    let set = ImageSet {
        md: Some("a.jpg".to_string()),
        blur: Some("b.jpg".to_string()),
        ..ImageSet::default()
    };
    assert_eq!(set.resolve(DisplayMode::Thumbnail, ViewportClass::Lg), "a.jpg");
}

#[test]
fn invariant_full_prefers_highest_fidelity() {
    let set = ImageSet {
        fhd: Some("x.jpg".to_string()),
        xl: Some("y.jpg".to_string()),
        ..ImageSet::default()
    };
    assert_eq!(set.resolve(DisplayMode::Full, ViewportClass::Md), "x.jpg");
}

#[test]
fn invariant_catalog_skips_bad_files() {
    let dir = tempfile::tempdir().unwrap();

    let good = vec![record("g1", EntityId::Pura, ContentKind::Gallery, Some(gallery_set()))];
    fs::write(
        dir.path().join("gallery.json"),
        serde_json::to_string(&good).unwrap(),
    )
    .unwrap();
    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let catalog = ContentCatalog::load_from_dir(dir.path()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.section(EntityId::Pura, ContentKind::Gallery).len(), 1);
}

#[test]
fn invariant_missing_directory_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let catalog = ContentCatalog::load_from_dir(&missing).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.section(EntityId::Yayasan, ContentKind::Hero).is_empty());
}

#[test]
fn invariant_plan_suppresses_unusable_images() {
    let mut catalog = ContentCatalog::new();
    catalog.register(record("with", EntityId::Pura, ContentKind::Gallery, Some(gallery_set())));
    catalog.register(record(
        "blur-only",
        EntityId::Pura,
        ContentKind::Gallery,
        Some(ImageSet {
            blur: Some("b.jpg".to_string()),
            ..ImageSet::default()
        }),
    ));
    catalog.register(record("none", EntityId::Pura, ContentKind::Gallery, None));

    let planner = Planner::new(catalog);
    let plan = planner.plan_page(&PageRequest {
        entity: Some("pura".to_string()),
        referrer: None,
        category: None,
        viewport_width: 800,
        sections: vec![ContentKind::Gallery],
        mode: DisplayMode::Thumbnail,
    });

    assert_eq!(plan.sections.len(), 1);
    let items = &plan.sections[0].items;
    assert_eq!(items.len(), 3);

    let shown = items.iter().find(|i| i.id == "with").unwrap();
    assert!(shown.show_image);
    assert_eq!(shown.image_url, "lg.jpg");
    assert_eq!(shown.blur_url, "blur.jpg");

    for id in ["blur-only", "none"] {
        let hidden = items.iter().find(|i| i.id == id).unwrap();
        assert!(!hidden.show_image);
        assert!(hidden.image_url.is_empty());
        assert!(hidden.blur_url.is_empty());
    }
}

#[test]
fn invariant_plan_synthesizes_blur_placeholder() {
    let mut catalog = ContentCatalog::new();
    catalog.register(record(
        "no-blur",
        EntityId::Pasraman,
        ContentKind::Facility,
        Some(ImageSet {
            md: Some("m.jpg".to_string()),
            ..ImageSet::default()
        }),
    ));

    let planner = Planner::new(catalog);
    let plan = planner.plan_page(&PageRequest {
        entity: Some("pasraman".to_string()),
        referrer: None,
        category: None,
        viewport_width: 640,
        sections: vec![ContentKind::Facility],
        mode: DisplayMode::Thumbnail,
    });

    let item = &plan.sections[0].items[0];
    assert!(item.show_image);
    assert_eq!(item.image_url, "m.jpg");
    assert!(item.blur_url.starts_with("data:image/png;base64,"));
}

#[test]
fn invariant_plan_resolves_entity_with_precedence() {
    let planner = Planner::default();

    // Explicit entity wins
    let plan = planner.plan_page(&PageRequest {
        entity: Some("yayasan".to_string()),
        referrer: Some("pasraman".to_string()),
        category: Some("Pendidikan".to_string()),
        viewport_width: 1024,
        sections: vec![],
        mode: DisplayMode::Thumbnail,
    });
    assert_eq!(plan.entity, EntityId::Yayasan);
    assert_eq!(plan.theme, *EntityTheme::of(EntityId::Yayasan));

    // Then the referrer, then category inference, then pura
    let plan = planner.plan_page(&PageRequest {
        entity: None,
        referrer: Some("pasraman".to_string()),
        category: Some("Kegiatan Sosial".to_string()),
        viewport_width: 1024,
        sections: vec![],
        mode: DisplayMode::Thumbnail,
    });
    assert_eq!(plan.entity, EntityId::Pasraman);

    let plan = planner.plan_page(&PageRequest {
        entity: Some("bogus".to_string()),
        referrer: None,
        category: Some("Donasi Rutin".to_string()),
        viewport_width: 1024,
        sections: vec![],
        mode: DisplayMode::Thumbnail,
    });
    assert_eq!(plan.entity, EntityId::Yayasan);

    let plan = planner.plan_page(&PageRequest {
        entity: None,
        referrer: None,
        category: None,
        viewport_width: 1024,
        sections: vec![],
        mode: DisplayMode::Thumbnail,
    });
    assert_eq!(plan.entity, EntityId::Pura);
    assert_eq!(plan.viewport, ViewportClass::Xl);
}

#[test]
fn invariant_plan_is_deterministic() {
    let mut catalog = ContentCatalog::new();
    catalog.register(record("g1", EntityId::Pura, ContentKind::Gallery, Some(gallery_set())));
    catalog.register(record("g2", EntityId::Pura, ContentKind::Gallery, None));
    catalog.register(record("h1", EntityId::Pura, ContentKind::Hero, Some(gallery_set())));

    let planner = Planner::new(catalog);
    let request = PageRequest {
        entity: Some("pura".to_string()),
        referrer: None,
        category: None,
        viewport_width: 800,
        sections: vec![ContentKind::Hero, ContentKind::Gallery],
        mode: DisplayMode::Thumbnail,
    };

    let first = planner.plan_page(&request);
    let second = planner.plan_page(&request);

    // Only the generated id and timestamp may differ between runs
    assert_eq!(first.entity, second.entity);
    assert_eq!(first.viewport, second.viewport);
    assert_eq!(first.theme, second.theme);
    assert_eq!(first.sections, second.sections);
}

#[test]
fn invariant_plan_sections_follow_request() {
    let mut catalog = ContentCatalog::new();
    catalog.register(record("h1", EntityId::Pura, ContentKind::Hero, Some(gallery_set())));

    let planner = Planner::new(catalog);
    let plan = planner.plan_page(&PageRequest {
        entity: Some("pura".to_string()),
        referrer: None,
        category: None,
        viewport_width: 375,
        sections: vec![ContentKind::Hero, ContentKind::Testimonial],
        mode: DisplayMode::Full,
    });

    assert_eq!(plan.sections.len(), 2);
    assert_eq!(plan.sections[0].kind, ContentKind::Hero);
    assert_eq!(plan.sections[0].items.len(), 1);
    // Empty section renders as an empty state, never an error
    assert_eq!(plan.sections[1].kind, ContentKind::Testimonial);
    assert!(plan.sections[1].items.is_empty());

    assert!(!plan.id.is_empty());
    assert_eq!(plan.engine_version, trihita_core::CORE_VERSION);
}

#[test]
fn invariant_request_round_trips_from_json() {
    let request = PageRequest::from_json(
        r#"{
            "entity": "pasraman",
            "viewportWidth": 1280,
            "sections": ["hero", "gallery", "structure"],
            "mode": "full"
        }"#,
    )
    .unwrap();

    assert_eq!(request.entity.as_deref(), Some("pasraman"));
    assert_eq!(request.viewport_width, 1280);
    assert_eq!(
        request.sections,
        vec![ContentKind::Hero, ContentKind::Gallery, ContentKind::Structure]
    );
    assert_eq!(request.mode, DisplayMode::Full);

    assert!(PageRequest::from_json("{ not json").is_err());
}
