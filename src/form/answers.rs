// src/form/answers.rs

use crate::models::application::{AnswerState, AnswerValue, SubmittedAnswer};
use crate::models::recruitment::{ItemType, RecruitmentItem};

/// Builds the editable answer map from a fetched recruitment and, when
/// editing a prior submission, its per-item answers.
///
/// Announcement items never get an entry. Items with no matching prior
/// answer start without an entry; the validator treats that as unanswered.
pub fn detail_to_answer_state(
    items: &[RecruitmentItem],
    prior: Option<&[SubmittedAnswer]>,
) -> AnswerState {
    let mut state = AnswerState::new();

    for item in items {
        if item.item_type == ItemType::Announcement {
            continue;
        }
        let answer = prior.and_then(|answers| match_answer(item, answers));
        let Some(answer) = answer else { continue };

        match item.item_type {
            ItemType::Select => {
                let keys = resolve_selected_keys(item, answer);
                if keys.is_empty() {
                    continue;
                }
                // Single-select items never hold more than one key.
                if item.multiple == Some(true) {
                    state.insert(item.id, AnswerValue::Many(keys));
                } else {
                    state.insert(item.id, AnswerValue::One(keys[0].clone()));
                }
            }
            ItemType::Calendar => {
                // The raw date string is carried verbatim.
                if let Some(date) = &answer.date {
                    state.insert(item.id, AnswerValue::One(date.clone()));
                }
            }
            ItemType::Text => {
                let value = answer
                    .text
                    .as_ref()
                    .or(answer.answer.as_ref())
                    .or(answer.value.as_ref())
                    .cloned()
                    .unwrap_or_default();
                state.insert(item.id, AnswerValue::One(value));
            }
            ItemType::Announcement => unreachable!("filtered above"),
        }
    }

    state
}

/// Matches a prior answer to an item: by `recruitmentItemId` first, falling
/// back to `order` when the id is absent. Some backend responses omit the
/// id; the fallback is compatibility behavior, not a bug.
fn match_answer<'a>(
    item: &RecruitmentItem,
    answers: &'a [SubmittedAnswer],
) -> Option<&'a SubmittedAnswer> {
    answers
        .iter()
        .find(|a| a.recruitment_item_id == Some(item.id))
        .or_else(|| {
            answers
                .iter()
                .find(|a| a.recruitment_item_id.is_none() && a.order == Some(item.order))
        })
}

/// Resolves the selected option set of a SELECT answer.
///
/// Three progressively weaker strategies, stopping at the first that yields
/// a non-empty result:
///   (a) numeric `selectedOptionIds` matched against option ids;
///   (b) `selectedOptionTitles` trimmed-equality matched against titles;
///   (c) `selectOptions` entries with explicit selected/isSelected/checked
///       flags. When no entry carries any flag at all, every entry counts
///       as selected.
/// Existing stored data depends on this exact ordering; do not collapse it
/// into a single strict path.
fn resolve_selected_keys(item: &RecruitmentItem, answer: &SubmittedAnswer) -> Vec<String> {
    if let Some(ids) = &answer.selected_option_ids {
        let keys: Vec<String> = ids
            .iter()
            .filter(|id| item.options.iter().any(|o| o.id == **id))
            .map(|id| id.to_string())
            .collect();
        if !keys.is_empty() {
            return keys;
        }
    }

    if let Some(titles) = &answer.selected_option_titles {
        let keys: Vec<String> = titles
            .iter()
            .filter_map(|title| {
                item.options
                    .iter()
                    .find(|o| o.title.trim() == title.trim())
                    .map(|o| o.id.to_string())
            })
            .collect();
        if !keys.is_empty() {
            tracing::debug!(item = item.id, "resolved selection by option titles");
            return keys;
        }
    }

    if let Some(entries) = &answer.select_options {
        let any_flag = entries.iter().any(|e| e.has_flag());
        let keys: Vec<String> = entries
            .iter()
            .filter(|e| !any_flag || e.flagged_selected())
            .filter_map(|e| {
                let by_id = e
                    .id
                    .and_then(|id| item.options.iter().find(|o| o.id == id));
                let by_title = e.title.as_ref().and_then(|title| {
                    item.options.iter().find(|o| o.title.trim() == title.trim())
                });
                by_id.or(by_title).map(|o| o.id.to_string())
            })
            .collect();
        if !keys.is_empty() {
            tracing::debug!(item = item.id, any_flag, "resolved selection via selectOptions");
            return keys;
        }
    }

    Vec::new()
}
