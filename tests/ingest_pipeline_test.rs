mod common;

use asset_indexer_lib::{ingest, ingest_with_report, AssetType, IndexerConfig, Ingestor};
use common::{create_test_zip, init_logger, THREE_SECTION_EXPORT};
use std::collections::HashSet;

#[test]
fn test_export_decomposes_into_sections_and_layout() {
    init_logger();
    let zip = create_test_zip(&[("layouts/agency.json", THREE_SECTION_EXPORT)]);

    let assets = ingest(&zip, "agency-kit.zip").expect("ingest should succeed");

    assert_eq!(assets.len(), 4);
    let names: Vec<_> = assets.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Section 1", "Section 2", "Section 3", "Agency Landing"]
    );
    assert_eq!(assets[0].original_name, "agency.json_section_0");
    assert_eq!(assets[3].original_name, "agency.json_full_layout");
    assert_eq!(assets[3].category, "layout");

    assert!(assets[0].has_tag("gallery"));
    assert!(assets[1].has_tag("slider"));
    assert!(assets[2].has_tag("contact"));

    for asset in &assets {
        assert_eq!(asset.path, "layouts/agency.json");
        assert_eq!(asset.source_archive_name, "agency-kit.zip");
        assert_eq!(asset.asset_type, AssetType::Code);
        assert_eq!(asset.extension, "json");
        let copyable = asset
            .copyable_content
            .as_ref()
            .expect("JSON assets carry copyable content");
        assert!(!copyable.minified.contains('\n'));
    }

    let layout = &assets[3];
    assert_eq!(layout.metadata.module_count, Some(6));
    assert!(layout
        .metadata
        .unique_modules
        .contains(&"et_pb_gallery".to_string()));
}

#[test]
fn test_ids_are_unique_within_and_across_ingests() {
    init_logger();
    let zip = create_test_zip(&[
        ("layouts/agency.json", THREE_SECTION_EXPORT),
        ("img/logo.png", b"\x89PNG\r\n\x1a\n"),
        ("notes.txt", b"read me"),
    ]);

    let first = ingest(&zip, "kit.zip").unwrap();
    let second = ingest(&zip, "kit.zip").unwrap();

    let ids: HashSet<_> = first.iter().chain(second.iter()).map(|a| &a.id).collect();
    assert_eq!(ids.len(), first.len() + second.len());
}

#[test]
fn test_report_counts_skipped_entries() {
    init_logger();
    let zip = create_test_zip(&[
        ("__MACOSX/._agency.json", b"junk"),
        (".hidden", b"junk"),
        ("agency.json", THREE_SECTION_EXPORT),
    ]);

    let report = ingest_with_report(&zip, "kit.zip").unwrap();

    assert_eq!(report.archive_name, "kit.zip");
    assert_eq!(report.entries_total, 3);
    assert_eq!(report.entries_skipped, 2);
    assert_eq!(report.assets.len(), 4);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_config_controls_skipping() {
    init_logger();
    let config = IndexerConfig::from_json_str(
        r#"{"archive": {"system_folders": ["drafts"], "parallel": false}}"#,
    )
    .unwrap();
    let ingestor = Ingestor::new(config);
    let zip = create_test_zip(&[
        ("drafts/old.css", b"body {}"),
        ("__MACOSX/readme.txt", b"kept now"),
    ]);

    let assets = ingestor.ingest(&zip, "kit.zip").unwrap();

    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].path, "__MACOSX/readme.txt");
}
