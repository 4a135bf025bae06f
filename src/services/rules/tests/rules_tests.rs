use super::*;

#[test]
fn test_first_match_respects_table_order() {
    // "hero" and "bg" both present: hero-image comes first.
    assert_eq!(
        first_match(IMAGE_CATEGORY_RULES, "hero-bg.png"),
        Some("hero-image")
    );
    assert_eq!(
        first_match(IMAGE_CATEGORY_RULES, "site-bg.png"),
        Some("background")
    );
    assert_eq!(first_match(IMAGE_CATEGORY_RULES, "photo.png"), None);
}

#[test]
fn test_all_matches_is_a_union() {
    let tags: Vec<_> = all_matches(FILENAME_TAG_RULES, "dark-hero-footer.json").collect();
    assert!(tags.contains(&"dark"));
    assert!(tags.contains(&"hero"));
    assert!(tags.contains(&"footer"));
}

#[test]
fn test_one_keyword_can_feed_several_tags() {
    // "clean" is listed under both modern and minimal.
    let tags: Vec<_> = all_matches(FILENAME_TAG_RULES, "clean").collect();
    assert_eq!(tags, vec!["modern", "minimal"]);
}

#[test]
fn test_category_for_extension() {
    assert_eq!(category_for_extension("woff2"), "font-file");
    assert_eq!(category_for_extension("psd"), "photoshop-file");
    assert_eq!(category_for_extension("exe"), UNKNOWN_CATEGORY);
    assert_eq!(category_for_extension(""), UNKNOWN_CATEGORY);
}

#[test]
fn test_content_rules_lookup() {
    let css = content_rules_for_extension("css").unwrap();
    assert_eq!(css.fallback, "stylesheet");
    assert_eq!(content_rules_for_extension("htm").unwrap().fallback, "html-template");
    assert!(content_rules_for_extension("txt").is_none());
}
