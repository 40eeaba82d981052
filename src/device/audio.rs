//! Audio output option normalization

use serde::Serialize;
use serde_json::Value;

/// One selectable audio output, already sanitized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioOption {
    /// Device identifier used for selection and control pushes
    pub id: String,
    /// Human-readable label; falls back to the id when blank
    pub label: String,
}

/// Sanitize the remote output list.
///
/// Entries without a usable id are dropped; numeric ids are coerced to
/// strings; blank labels fall back to the id. A non-list input yields an
/// empty result.
pub fn normalize_audio_options(value: &Value) -> Vec<AudioOption> {
    let entries = match value.as_array() {
        Some(entries) => entries,
        None => return Vec::new(),
    };

    entries
        .iter()
        .filter_map(|entry| {
            let obj = entry.as_object()?;
            let id = match obj.get("id") {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => return None,
            };
            if id.is_empty() {
                return None;
            }
            let label = obj
                .get("label")
                .and_then(Value::as_str)
                .map(str::trim)
                .unwrap_or("");
            let label = if label.is_empty() {
                id.clone()
            } else {
                label.to_string()
            };
            Some(AudioOption { id, label })
        })
        .collect()
}

/// Stable serialized signature of a sanitized option list.
///
/// The audio select sink compares signatures across polls and only rebuilds
/// its option list on change, so an unchanged poll never disturbs the user's
/// in-progress interaction with the control.
pub fn options_signature(options: &[AudioOption]) -> String {
    serde_json::to_string(options).unwrap_or_default()
}
