use super::*;
use serde_json::json;

fn ctx() -> DocumentContext<'static> {
    DocumentContext {
        archive_name: "kit.zip",
        document_path: "exports/home.json",
        document_name: "home.json",
        import_version: "4.0",
    }
}

fn section(module: &str) -> Value {
    json!({"type": "section", "content": [{"type": module, "text_color": "#333333"}]})
}

#[test]
fn test_three_sections_plus_full_layout() {
    let doc = json!({
        "title": "Agency Home",
        "content": [section("et_pb_text"), section("et_pb_gallery"), section("et_pb_blog")]
    });
    let result = decompose(&doc, &ctx());

    assert_eq!(result.assets.len(), 4);
    let sections: Vec<_> = result
        .assets
        .iter()
        .filter(|a| a.category == "section")
        .collect();
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0].name, "Section 1");
    assert_eq!(sections[2].original_name, "home.json_section_2");
    assert!(sections[1].tags.contains("gallery"));
    assert_eq!(sections[0].metadata.colors, vec!["#333333"]);

    let layout = result.assets.last().unwrap();
    assert_eq!(layout.category, "layout");
    assert_eq!(layout.name, "Agency Home");
    assert_eq!(layout.json_content.as_ref(), Some(&doc));
    assert!(result.warnings.is_empty());
}

#[test]
fn test_sub_assets_are_json_with_synthetic_names() {
    let doc = json!({"content": [section("et_pb_text")]});
    let result = decompose(&doc, &ctx());
    for asset in &result.assets {
        assert_eq!(asset.extension, "json");
        assert_eq!(asset.path, "exports/home.json");
        assert_eq!(asset.source_archive_name, "kit.zip");
        assert_ne!(asset.original_name, "home.json");
        assert!(asset.copyable_content.is_some());
        assert!(asset.size_bytes > 0);
    }
}

#[test]
fn test_nested_sections_are_not_emitted_separately() {
    let doc = json!({"content": [
        {"type": "section", "content": [section("et_pb_text")]}
    ]});
    let result = decompose(&doc, &ctx());
    // one outer section + full layout
    assert_eq!(result.assets.len(), 2);
}

#[test]
fn test_module_fallback_when_no_sections() {
    let doc = json!({"content": [
        {"type": "et_pb_blurb", "content": {"title": "Fast"}},
        {"type": "cta", "content": {"button": "Buy"}},
        {"type": "et_pb_row", "content": [1, 2]}
    ]});
    let result = decompose(&doc, &ctx());
    assert_eq!(result.assets.len(), 3);

    let first = &result.assets[0];
    assert_eq!(first.name, "blurb Module 1");
    assert_eq!(first.category, "module");
    assert!(first.tags.contains("blurb"));
    assert!(first.tags.contains("module"));
    assert_eq!(first.metadata.module_type.as_deref(), Some("blurb"));
    assert_eq!(first.original_name, "home.json_module_0");

    assert_eq!(result.assets[1].name, "cta Module 2");
    assert_eq!(result.assets[2].category, "layout");
}

#[test]
fn test_section_with_non_array_content_is_skipped_with_warning() {
    let doc = json!({"content": [
        {"type": "section", "content": "[et_pb_section][/et_pb_section]"},
        section("et_pb_text")
    ]});
    let result = decompose(&doc, &ctx());
    assert_eq!(result.assets.len(), 2);
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_layouts_only_export_yields_full_layout() {
    let doc = json!({"layouts": [{"name": "a"}]});
    let result = decompose(&doc, &ctx());
    assert_eq!(result.assets.len(), 1);
    assert_eq!(result.assets[0].name, "Full Layout");
    assert_eq!(result.assets[0].category, "layout");
}

#[test]
fn test_array_document_yields_items_in_order() {
    let doc = json!([
        {"name": "Hero Block", "description": "Big header"},
        "not an object",
        {"title": "Pricing Table"},
        {}
    ]);
    let result = decompose(&doc, &ctx());
    let names: Vec<_> = result.assets.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Hero Block", "Pricing Table", "Asset 4"]);
    assert_eq!(result.assets[0].description.as_deref(), Some("Big header"));
    assert_eq!(result.assets[1].original_name, "home.json_item_2");
    assert!(result.assets[1].tags.contains("pricing"));
}

#[test]
fn test_collection_object_uses_items_or_assets() {
    let items = json!({"items": [{"name": "A"}, {"name": "B"}]});
    assert_eq!(decompose(&items, &ctx()).assets.len(), 2);

    let assets = json!({"assets": [{"name": "A"}]});
    assert_eq!(decompose(&assets, &ctx()).assets.len(), 1);
}

#[test]
fn test_plain_object_is_single_item() {
    let doc = json!({"name": "Footer Module", "type": "et_pb_row"});
    let result = decompose(&doc, &ctx());
    assert_eq!(result.assets.len(), 1);
    assert_eq!(result.assets[0].category, "row");
    assert_eq!(result.assets[0].original_name, "home.json_item_0");
}

#[test]
fn test_scalar_document_warns() {
    let result = decompose(&json!(42), &ctx());
    assert!(result.assets.is_empty());
    assert_eq!(result.warnings.len(), 1);
}
