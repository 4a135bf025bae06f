use super::*;
use crate::types::Asset;

fn asset(name: &str, category: &str, tags: &[&str]) -> Asset {
    let mut asset = Asset::new(name, name, name, "kit.zip");
    asset.category = category.to_string();
    asset.tags = tags.iter().map(|t| t.to_string()).collect();
    asset
}

fn catalog() -> Vec<Asset> {
    vec![
        asset("hero-banner.jpg", "hero-image", &["hero", "retina"]),
        asset("Section 1", "section", &["gallery", "slider"]),
        asset("footer-dark.json", "footer", &["footer", "dark"]),
        asset("Gallery Grid", "section", &["gallery"]),
        asset("logo.svg", "logo", &[]),
    ]
}

fn ids(assets: &[&Asset]) -> Vec<String> {
    assets.iter().map(|a| a.id.clone()).collect()
}

#[test]
fn test_identity_law() {
    let catalog = catalog();
    let result = query(&catalog, "", ALL_CATEGORIES, &[]);
    let expected: Vec<&Asset> = catalog.iter().collect();
    assert_eq!(ids(&result), ids(&expected));
}

#[test]
fn test_whitespace_term_is_unranked() {
    let catalog = catalog();
    let result = query(&catalog, "   ", "section", &[]);
    let names: Vec<_> = result.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Section 1", "Gallery Grid"]);
}

#[test]
fn test_category_filter_is_exact() {
    let catalog = catalog();
    assert!(query(&catalog, "", "sect", &[]).is_empty());
    assert_eq!(query(&catalog, "", "logo", &[]).len(), 1);
}

#[test]
fn test_tag_filter_requires_every_tag() {
    let catalog = catalog();
    let both = query(&catalog, "", ALL_CATEGORIES, &["gallery", "slider"]);
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].name, "Section 1");

    let gallery = query(&catalog, "", ALL_CATEGORIES, &["gallery"]);
    assert_eq!(gallery.len(), 2);

    assert!(query(&catalog, "", ALL_CATEGORIES, &["missing"]).is_empty());
}

#[test]
fn test_filters_compose_before_ranking() {
    let catalog = catalog();
    let result = query(&catalog, "gallery", "section", &["slider"]);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Section 1");
}

#[test]
fn test_fuzzy_term_tolerates_typo() {
    let catalog = catalog();
    let result = query(&catalog, "galery", ALL_CATEGORIES, &[]);
    let names: Vec<_> = result.iter().map(|a| a.name.as_str()).collect();
    assert!(names.contains(&"Gallery Grid"));
    assert!(names.contains(&"Section 1"));
    assert!(!names.contains(&"logo.svg"));
}

#[test]
fn test_ranked_hits_meet_threshold_and_descend() {
    let catalog = catalog();
    let engine = QueryEngine::default();
    let hits = engine.rank(&catalog, "foter");

    assert!(!hits.is_empty());
    for hit in &hits {
        assert!(hit.score >= 0.7);
    }
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert_eq!(hits[0].asset.name, "footer-dark.json");
}

#[test]
fn test_ties_keep_catalog_order() {
    let catalog = vec![
        asset("b gallery", "x", &["gallery"]),
        asset("a gallery", "x", &["gallery"]),
    ];
    let result = query(&catalog, "gallery", ALL_CATEGORIES, &[]);
    let names: Vec<_> = result.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["b gallery", "a gallery"]);
}

#[test]
fn test_metadata_title_is_searchable() {
    let mut layout = asset("Full Layout", "layout", &[]);
    layout.metadata.title = Some("Agency Landing".into());
    let catalog = vec![layout, asset("logo.svg", "logo", &[])];

    let result = query(&catalog, "agency", ALL_CATEGORIES, &[]);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Full Layout");
}

#[test]
fn test_no_match_is_empty_not_error() {
    let catalog = catalog();
    assert!(query(&catalog, "zzzzqqqq", ALL_CATEGORIES, &[]).is_empty());
}

#[test]
fn test_stricter_threshold_returns_fewer() {
    let catalog = catalog();
    let strict = QueryEngine::new(crate::services::config::SearchConfig {
        min_similarity: 1.0,
        distance: 100,
    });
    let result = strict.search(&catalog, "galery", ALL_CATEGORIES, &[]);
    assert!(result.is_empty());
}
