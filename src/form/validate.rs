// src/form/validate.rs

use std::collections::BTreeMap;

use crate::form::fixed::{FixedBinding, FixedBindings, FixedField};
use crate::models::application::AnswerState;
use crate::models::recruitment::{ItemType, RecruitmentItem};

/// Counts required items that are still unanswered.
///
/// Policy per type: SELECT needs a non-empty normalized selection, CALENDAR
/// and TEXT need a non-empty trimmed string, ANNOUNCEMENT is exempt no
/// matter what its `required` flag says. Synthetic fixed fields (no backing
/// item) validate against the default-answer map and are always required.
///
/// Pure and recomputed from current state on every call; with tens of items
/// there is nothing worth memoizing.
pub fn required_unanswered_count(
    items: &[RecruitmentItem],
    bindings: &FixedBindings,
    answers: &AnswerState,
    fixed_defaults: &BTreeMap<FixedField, String>,
) -> usize {
    let mut count = 0;

    for item in items {
        if item.item_type == ItemType::Announcement || !item.required {
            continue;
        }
        let answered = match item.item_type {
            ItemType::Select => answers
                .get(&item.id)
                .is_some_and(|v| !v.selection().is_empty()),
            ItemType::Text | ItemType::Calendar => answers
                .get(&item.id)
                .is_some_and(|v| !v.as_text().trim().is_empty()),
            ItemType::Announcement => unreachable!("filtered above"),
        };
        if !answered {
            count += 1;
        }
    }

    for (field, binding) in bindings {
        if *binding == FixedBinding::Synthetic {
            let answered = fixed_defaults
                .get(field)
                .is_some_and(|v| !v.trim().is_empty());
            if !answered {
                count += 1;
            }
        }
    }

    count
}
