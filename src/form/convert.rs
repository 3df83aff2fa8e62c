// src/form/convert.rs

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::question::{Question, QuestionKind};
use crate::models::recruitment::{
    CreateRecruitmentRequest, ItemType, NewItemOption, NewRecruitmentItem, RecruitmentStatus,
};

/// Default `maxLength` for short-answer items.
const SHORT_ANSWER_MAX_LENGTH: u32 = 100;
/// Default `maxLength` for long-answer items.
const LONG_ANSWER_MAX_LENGTH: u32 = 1000;

/// Everything the form editor holds about a recruitment being authored.
#[derive(Debug, Clone, Default)]
pub struct FormDraft {
    pub title: String,
    pub end_date: Option<NaiveDate>,
    /// Time of day as `HH:MM`; ignored without an end date, midnight if
    /// unparseable.
    pub end_time: String,
    pub questions: Vec<Question>,
}

/// Converts the authored form into the backend's create-recruitment schema.
///
/// `fixed_items` is the prefix built by [`crate::form::fixed::fixed_field_items`];
/// this function only consumes it and assigns the final dense 1-based order
/// across the whole items array.
///
/// Never fails: missing or invalid input degrades to defaults (empty title,
/// no end date produces an inactive draft). That permissiveness is a design
/// choice the rest of the product relies on.
pub fn to_create_request(
    draft: &FormDraft,
    fixed_items: Vec<NewRecruitmentItem>,
) -> CreateRecruitmentRequest {
    let end_at = compose_end_at(draft.end_date, &draft.end_time);
    let is_active = end_at.is_some();
    let recruitment_status = if is_active {
        RecruitmentStatus::Recruiting
    } else {
        RecruitmentStatus::Draft
    };

    let mut items = fixed_items;
    items.extend(draft.questions.iter().map(question_to_item));

    for (index, item) in items.iter_mut().enumerate() {
        item.order = index as i32 + 1;
    }

    CreateRecruitmentRequest {
        name: draft.title.clone(),
        end_at,
        is_active,
        recruitment_status,
        items,
    }
}

/// Merges the date-only end value with an `HH:MM` time-of-day string.
fn compose_end_at(end_date: Option<NaiveDate>, end_time: &str) -> Option<NaiveDateTime> {
    let date = end_date?;
    let time = NaiveTime::parse_from_str(end_time.trim(), "%H:%M")
        .unwrap_or_else(|_| NaiveTime::MIN);
    Some(date.and_time(time))
}

fn question_to_item(question: &Question) -> NewRecruitmentItem {
    let mut item = NewRecruitmentItem {
        order: 0,
        item_type: ItemType::Text,
        required: question.is_required,
        title: question.title.clone(),
        description: question.description.clone(),
        multiple: None,
        options: Vec::new(),
        max_length: None,
        date: None,
        announcement: None,
    };

    match &question.kind {
        QuestionKind::SingleCheck { options, multiple } => {
            item.item_type = ItemType::Select;
            item.multiple = Some(multiple.unwrap_or(false));
            item.options = serialize_options(options);
        }
        QuestionKind::MultiCheck { options, multiple } => {
            item.item_type = ItemType::Select;
            // Forced true for multi-check; an explicit author value wins.
            item.multiple = Some(multiple.unwrap_or(true));
            item.options = serialize_options(options);
        }
        QuestionKind::ShortAnswer {
            max_length,
            multiple,
        } => {
            item.item_type = ItemType::Text;
            item.max_length = Some(max_length.unwrap_or(SHORT_ANSWER_MAX_LENGTH));
            item.multiple = Some(multiple.unwrap_or(false));
        }
        QuestionKind::LongAnswer {
            max_length,
            multiple,
        } => {
            item.item_type = ItemType::Text;
            item.max_length = Some(max_length.unwrap_or(LONG_ANSWER_MAX_LENGTH));
            item.multiple = Some(multiple.unwrap_or(true));
        }
        QuestionKind::DatePicker { date_value } => {
            item.item_type = ItemType::Calendar;
            item.date = date_value.map(|d| d.to_string());
        }
        QuestionKind::Description => {
            item.item_type = ItemType::Announcement;
            item.announcement = Some(question.description.clone());
        }
    }

    item
}

/// 1-based option order is assigned here, from insertion order.
fn serialize_options(
    options: &[crate::models::question::QuestionOption],
) -> Vec<NewItemOption> {
    options
        .iter()
        .enumerate()
        .map(|(index, option)| NewItemOption {
            title: option.text.clone(),
            order: index as i32 + 1,
            is_etc: option.is_other,
            etc_title: option.placeholder.clone(),
        })
        .collect()
}
