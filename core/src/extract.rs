// catalog_seed/src/extract.rs

//! Tolerant readers for ids inside loosely-shaped JSON responses.
//!
//! Nothing here fails: input that does not match an expected shape yields an
//! empty result.

use serde_json::Value;
use std::collections::BTreeSet;

/// Integer `id` field of a JSON object.
pub fn extract_id(value: &Value) -> Option<i64> {
  value.as_object()?.get("id")?.as_i64()
}

/// Integer ids of every object in `items`, skipping entries without one.
pub fn collect_ids(items: &[Value]) -> Vec<i64> {
  items.iter().filter_map(extract_id).collect()
}

/// Category ids associated with a product representation.
///
/// Shapes are tried in order and the first one present wins, even if it is
/// empty:
/// 1. `"categoryIds": [1, 2]`
/// 2. `"categories": [{"id": 1}, {"id": 2}]` (bare integers also accepted)
/// 3. `"categoryId": 1`
pub fn extract_category_ids(product: &Value) -> BTreeSet<i64> {
  let Some(obj) = product.as_object() else {
    return BTreeSet::new();
  };

  if let Some(Value::Array(ids)) = obj.get("categoryIds") {
    return ids.iter().filter_map(Value::as_i64).collect();
  }

  if let Some(Value::Array(categories)) = obj.get("categories") {
    return categories
      .iter()
      .filter_map(|c| match c {
        Value::Object(_) => extract_id(c),
        other => other.as_i64(),
      })
      .collect();
  }

  obj.get("categoryId").and_then(Value::as_i64).into_iter().collect()
}
