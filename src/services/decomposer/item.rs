use super::{json_sub_asset, Decomposition, DocumentContext};
use crate::services::classifier::{categorize_item, item_tags};
use crate::services::metadata::{item_metadata, scalar_text, truthy_field};
use crate::types::Asset;
use serde_json::Value;

pub(super) fn decompose_items(
    items: &[Value],
    ctx: &DocumentContext<'_>,
    out: &mut Decomposition,
) {
    for (index, item) in items.iter().enumerate() {
        match item_asset(item, index, ctx) {
            Some(asset) => out.assets.push(asset),
            None => log::debug!(
                "{}: skipping non-object item at index {index}",
                ctx.document_name
            ),
        }
    }
}

/// One collection item as an asset; `None` for non-object items.
pub(super) fn item_asset(item: &Value, index: usize, ctx: &DocumentContext<'_>) -> Option<Asset> {
    if !item.is_object() {
        return None;
    }

    let name = truthy_field(item, "name")
        .or_else(|| truthy_field(item, "title"))
        .map(scalar_text)
        .unwrap_or_else(|| format!("Asset {}", index + 1));

    let mut asset = json_sub_asset(
        ctx,
        name,
        format!("{}_item_{index}", ctx.document_name),
        item.clone(),
        categorize_item(item),
        item_tags(item),
        item_metadata(item),
    );
    asset.description = item
        .get("description")
        .and_then(Value::as_str)
        .filter(|d| !d.trim().is_empty())
        .map(str::to_string);
    Some(asset)
}
