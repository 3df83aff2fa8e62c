// src/form/submit.rs

use std::collections::HashMap;

use crate::form::fixed::{field_for_item, FixedBindings};
use crate::models::application::{AnswerState, ApplicationAnswerItem};
use crate::models::recruitment::{ItemType, RecruitmentItem};

/// Converts current answer state into the backend's per-item answer array.
///
/// SELECT keys resolve back to numeric option ids through a lookup built
/// from the item's options; keys that fail to resolve are silently dropped,
/// which protects a stale client against options removed by a later form
/// edit. ANNOUNCEMENT items are excluded from the payload entirely. The
/// default-answer map for synthetic fixed fields never feeds this array:
/// synthetic fields have no backing item, and backed items answer from
/// [`AnswerState`] alone, exactly what the validator checked.
pub fn assemble_answers(
    items: &[RecruitmentItem],
    answers: &AnswerState,
    bindings: &FixedBindings,
) -> Vec<ApplicationAnswerItem> {
    items
        .iter()
        .filter_map(|item| match item.item_type {
            ItemType::Announcement => None,
            ItemType::Select => {
                let lookup: HashMap<String, i64> = item
                    .options
                    .iter()
                    .map(|o| (o.id.to_string(), o.id))
                    .collect();
                let option_ids: Vec<i64> = answers
                    .get(&item.id)
                    .map(|v| v.selection())
                    .unwrap_or_default()
                    .iter()
                    .filter_map(|key| lookup.get(key).copied())
                    .collect();
                Some(ApplicationAnswerItem {
                    recruitment_item_id: item.id,
                    text: None,
                    date: None,
                    option_ids: Some(option_ids),
                })
            }
            ItemType::Calendar => {
                let date = answers
                    .get(&item.id)
                    .map(|v| v.as_text())
                    .unwrap_or_default();
                Some(ApplicationAnswerItem {
                    recruitment_item_id: item.id,
                    text: None,
                    date: Some(date),
                    option_ids: None,
                })
            }
            ItemType::Text => {
                let value = answers
                    .get(&item.id)
                    .map(|v| v.as_text())
                    .unwrap_or_default();
                let value = if field_for_item(bindings, item.id).is_some() {
                    normalize_legacy_list(&value)
                } else {
                    value
                };
                Some(ApplicationAnswerItem {
                    recruitment_item_id: item.id,
                    text: Some(value),
                    date: None,
                    option_ids: None,
                })
            }
        })
        .collect()
}

/// Fixed-field values occasionally arrive as JSON array strings, an artifact
/// of reusing a generic text input for multi-valued fixed answers. They are
/// opportunistically parsed back and joined into one display string; any
/// value that does not parse passes through untouched. Stored data depends
/// on this exact normalization.
pub fn normalize_legacy_list(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.starts_with('[') {
        if let Ok(parts) = serde_json::from_str::<Vec<String>>(trimmed) {
            return parts.join(", ");
        }
    }
    value.to_string()
}
