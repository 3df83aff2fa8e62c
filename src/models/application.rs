// src/models/application.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single editable answer value.
///
/// Choice items with `multiple = true` hold `Many`; every other item holds
/// `One`. Calendar values are ISO date strings. Announcement items never
/// appear in an [`AnswerState`] at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    One(String),
    Many(Vec<String>),
}

impl AnswerValue {
    /// The value normalized to a selection list, blank entries dropped.
    pub fn selection(&self) -> Vec<String> {
        match self {
            AnswerValue::One(s) => {
                if s.trim().is_empty() {
                    Vec::new()
                } else {
                    vec![s.clone()]
                }
            }
            AnswerValue::Many(v) => v
                .iter()
                .filter(|s| !s.trim().is_empty())
                .cloned()
                .collect(),
        }
    }

    /// The value normalized to a single string.
    pub fn as_text(&self) -> String {
        match self {
            AnswerValue::One(s) => s.clone(),
            AnswerValue::Many(v) => v.join(", "),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            AnswerValue::One(s) => s.trim().is_empty(),
            AnswerValue::Many(v) => v.iter().all(|s| s.trim().is_empty()),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::One(s.to_string())
    }
}

/// Current answers of the applying/editing page, keyed by item id.
pub type AnswerState = BTreeMap<i64, AnswerValue>;

/// Entry of the legacy `selectOptions` answer shape. Every field is optional
/// on the wire; the mapper decides what a missing flag means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOptionEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_selected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl SelectOptionEntry {
    /// Whether the entry carries any selection flag at all.
    pub fn has_flag(&self) -> bool {
        self.selected.is_some() || self.is_selected.is_some() || self.checked.is_some()
    }

    /// Whether any carried flag marks the entry selected.
    pub fn flagged_selected(&self) -> bool {
        self.selected == Some(true)
            || self.is_selected == Some(true)
            || self.checked == Some(true)
    }
}

/// One previously submitted answer, in the loose historical wire shape.
///
/// Older backend responses omit `recruitmentItemId` (matching falls back to
/// `order`), spell the text payload three different ways, and report SELECT
/// answers through any of three formats. All of that is kept intact here;
/// the mapper owns the fallback chains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruitment_item_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option_titles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_options: Option<Vec<SelectOptionEntry>>,
}

/// A previously submitted application, as fetched for editing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedApplication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruitment_id: Option<i64>,
    #[serde(default)]
    pub answers: Vec<SubmittedAnswer>,
}

/// Strict outbound per-item answer shape for create/update calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationAnswerItem {
    pub recruitment_item_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_ids: Option<Vec<i64>>,
}

/// DTO for submitting or updating an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitApplicationRequest {
    pub recruitment_id: i64,
    pub name: String,
    pub email: String,
    pub answers: Vec<ApplicationAnswerItem>,
}
