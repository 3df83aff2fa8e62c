// src/models/recruitment.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Wire-level item type. Immutable after creation; there is no migration
/// path between types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Text,
    Select,
    Calendar,
    Announcement,
}

/// Lifecycle status of a recruitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecruitmentStatus {
    Draft,
    Recruiting,
    Closed,
}

/// One option of a SELECT item as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOption {
    pub id: i64,
    pub title: String,
    /// 1-based, dense within the item.
    pub order: i32,
    #[serde(default)]
    pub is_etc: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etc_title: Option<String>,
}

/// One item of a fetched recruitment.
///
/// `id` and `order` are server-assigned; `order` values are unique and dense
/// per recruitment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentItem {
    pub id: i64,
    pub order: i32,
    /// Mapped from the wire field `type`, a reserved word in Rust.
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub required: bool,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ItemOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,
}

/// Option payload inside a create/update request (no server id yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItemOption {
    pub title: String,
    pub order: i32,
    #[serde(default)]
    pub is_etc: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etc_title: Option<String>,
}

/// Item payload inside a create/update request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecruitmentItem {
    /// 1-based position in the final items array, assigned after fixed-field
    /// items are prepended.
    pub order: i32,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub required: bool,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<NewItemOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,
}

/// DTO for creating (or re-saving) a recruitment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecruitmentRequest {
    pub name: String,
    /// Absent when no end date was chosen; the recruitment stays an
    /// inactive draft.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<NaiveDateTime>,
    pub is_active: bool,
    pub recruitment_status: RecruitmentStatus,
    pub items: Vec<NewRecruitmentItem>,
}

/// A fetched recruitment definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentDetail {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<NaiveDateTime>,
    pub is_active: bool,
    pub recruitment_status: RecruitmentStatus,
    pub items: Vec<RecruitmentItem>,
}

/// Response body of the create-recruitment call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRecruitment {
    pub id: i64,
}
