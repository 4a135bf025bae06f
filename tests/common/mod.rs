use std::io::{Cursor, Write};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// In-memory ZIP with stored (uncompressed) entries.
pub fn create_test_zip(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (name, content) in files {
        writer
            .start_file(name.to_string(), options)
            .expect("Failed to start zip entry");
        writer.write_all(content).expect("Failed to write zip entry");
    }
    writer.finish().expect("Failed to finish zip").into_inner()
}

/// A page-builder export with three sections.
pub const THREE_SECTION_EXPORT: &[u8] = br##"{
    "title": "Agency Landing",
    "context": "et_builder",
    "content": [
        {"type": "et_pb_section", "content": [
            {"type": "et_pb_gallery", "content": {"background_color": "#ff0000"}}
        ]},
        {"type": "et_pb_section", "content": [
            {"type": "et_pb_slider", "content": {"font_family": "Roboto"}}
        ]},
        {"type": "et_pb_section", "content": [
            {"type": "et_pb_contact_form", "content": {}}
        ]}
    ]
}"##;
