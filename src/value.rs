//! Diffing of loosely typed `serde_json::Value` documents.

use crate::levenshtein::{diff_full, EditScript, Keyed};
use serde_json::Value;
use std::borrow::Cow;
use std::slice;

/// Only objects have fields; every other value compares by equality alone.
impl Keyed for Value {
    type Field = Value;
    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object()?.get(name)
    }
}

/// The elements `value` is diffed as.
///
/// Arrays yield their items and strings one single-character string per
/// `char`. Any other value is a one-element sequence.
pub fn as_sequence(value: &Value) -> Cow<'_, [Value]> {
    match value {
        Value::Array(items) => Cow::Borrowed(items.as_slice()),
        Value::String(s) => Cow::Owned(s.chars().map(|c| Value::String(c.into())).collect()),
        other => Cow::Borrowed(slice::from_ref(other)),
    }
}

/// Diffs two JSON values as sequences.
///
/// ```
/// use listdiff::levenshtein::Patch;
/// use listdiff::value::diff_values;
/// use serde_json::json;
///
/// let old = json!([{"id": 1}, {"id": 2}]);
/// let new = json!([{"id": 2, "done": true}]);
/// let script = diff_values(&old, &new, Some("id"));
/// assert_eq!(script.patches, vec![Patch::Deletion { index: 0 }]);
/// ```
pub fn diff_values(old: &Value, new: &Value, key: Option<&str>) -> EditScript<Value> {
    diff_full(&as_sequence(old), &as_sequence(new), key)
}
