//! Page-builder export documents (`content` / `layouts` / `sections`).
//!
//! Sections and modules are found by walking the parsed `content` tree. A
//! matched unit is not descended into, so sections nested inside other
//! sections are not emitted on their own.

use super::{json_sub_asset, Decomposition, DocumentContext};
use crate::services::classifier::{document_tags, section_tags};
use crate::services::metadata::{document_metadata, fragment_metadata, truthy_field};
use crate::services::rules::MODULE_MARKER_PREFIX;
use crate::types::Asset;
use serde_json::Value;
use std::collections::BTreeSet;

const SECTION_TYPES: &[&str] = &["section", "et_pb_section"];

pub(super) fn decompose_export(
    document: &Value,
    ctx: &DocumentContext<'_>,
    out: &mut Decomposition,
) {
    if let Some(content) = truthy_field(document, "content") {
        let mut sections = Vec::new();
        collect_sections(content, &mut sections, ctx, out);

        if sections.is_empty() {
            let mut modules = Vec::new();
            collect_modules(content, &mut modules);
            for (index, (module_type, body)) in modules.into_iter().enumerate() {
                out.assets.push(module_asset(module_type, body, index, ctx));
            }
        } else {
            for (index, body) in sections.into_iter().enumerate() {
                out.assets.push(section_asset(body, index, ctx));
            }
        }
    }

    out.assets.push(full_layout_asset(document, ctx));
}

fn node_type(node: &Value) -> Option<&str> {
    node.get("type").and_then(Value::as_str)
}

fn collect_sections<'v>(
    node: &'v Value,
    found: &mut Vec<&'v Value>,
    ctx: &DocumentContext<'_>,
    out: &mut Decomposition,
) {
    match node {
        Value::Object(map) => {
            let is_section = node_type(node).is_some_and(|t| SECTION_TYPES.contains(&t));
            if is_section {
                if let Some(body) = map.get("content") {
                    if body.is_array() {
                        found.push(body);
                    } else {
                        out.warn(format!(
                            "{}: skipping section whose content is not an array",
                            ctx.document_name
                        ));
                    }
                    return;
                }
            }
            for child in map.values() {
                collect_sections(child, found, ctx, out);
            }
        }
        Value::Array(items) => {
            for child in items {
                collect_sections(child, found, ctx, out);
            }
        }
        _ => {}
    }
}

/// Module name of a `type` value: `et_pb_blurb` → `blurb`, `blurb` → `blurb`.
fn module_name(type_value: &str) -> Option<&str> {
    let name = match type_value.strip_prefix(MODULE_MARKER_PREFIX) {
        Some(rest) if !rest.is_empty() => rest,
        _ => type_value,
    };
    let is_word = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_word.then_some(name)
}

fn collect_modules<'v>(node: &'v Value, found: &mut Vec<(&'v str, &'v Value)>) {
    match node {
        Value::Object(map) => {
            let module = node_type(node)
                .and_then(module_name)
                .zip(map.get("content").filter(|c| c.is_object()));
            if let Some(hit) = module {
                found.push(hit);
                return;
            }
            for child in map.values() {
                collect_modules(child, found);
            }
        }
        Value::Array(items) => {
            for child in items {
                collect_modules(child, found);
            }
        }
        _ => {}
    }
}

fn section_asset(body: &Value, index: usize, ctx: &DocumentContext<'_>) -> Asset {
    json_sub_asset(
        ctx,
        format!("Section {}", index + 1),
        format!("{}_section_{index}", ctx.document_name),
        body.clone(),
        "section".to_string(),
        section_tags(body),
        fragment_metadata(body),
    )
}

fn module_asset(
    module_type: &str,
    body: &Value,
    index: usize,
    ctx: &DocumentContext<'_>,
) -> Asset {
    let mut metadata = fragment_metadata(body);
    metadata.module_type = Some(module_type.to_string());
    let tags = BTreeSet::from([module_type.to_string(), "module".to_string()]);

    json_sub_asset(
        ctx,
        format!("{module_type} Module {}", index + 1),
        format!("{}_module_{index}", ctx.document_name),
        body.clone(),
        "module".to_string(),
        tags,
        metadata,
    )
}

fn full_layout_asset(document: &Value, ctx: &DocumentContext<'_>) -> Asset {
    let name = document
        .get("title")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .unwrap_or("Full Layout")
        .to_string();

    json_sub_asset(
        ctx,
        name,
        format!("{}_full_layout", ctx.document_name),
        document.clone(),
        "layout".to_string(),
        document_tags(document, ctx.document_name),
        document_metadata(document),
    )
}
