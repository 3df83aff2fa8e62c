// src/form/fixed.rs

use std::collections::BTreeMap;

use crate::models::recruitment::{ItemType, NewRecruitmentItem, RecruitmentItem};

/// The three well-known applicant fields every recruitment carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FixedField {
    Name,
    Phone,
    Email,
}

impl FixedField {
    pub const ALL: [FixedField; 3] = [FixedField::Name, FixedField::Phone, FixedField::Email];

    /// Canonical Korean label used when the field is rendered or created.
    pub fn label(self) -> &'static str {
        match self {
            FixedField::Name => "이름",
            FixedField::Phone => "전화번호",
            FixedField::Email => "이메일",
        }
    }

    /// Labels accepted when locating the field among fetched items.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            FixedField::Name => &["이름", "성명", "name"],
            FixedField::Phone => &["전화번호", "연락처", "휴대폰", "phone"],
            FixedField::Email => &["이메일", "메일", "email", "e-mail"],
        }
    }

    /// Case-insensitive, whitespace-stripped substring match.
    pub fn matches_label(self, title: &str) -> bool {
        let normalized: String = title
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        self.aliases()
            .iter()
            .any(|alias| normalized.contains(alias))
    }
}

/// How a fixed field is realized for one recruitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedBinding {
    /// Backed by a real item returned by the backend.
    Backed { item_id: i64 },
    /// No matching item; answered from the default-answer map instead.
    Synthetic,
}

/// Resolved bindings for one recruitment load. Resolved once and cached on
/// the session; never re-derived per keystroke.
pub type FixedBindings = BTreeMap<FixedField, FixedBinding>;

/// Locates each fixed field among the fetched items.
///
/// The first unused match wins: an item consumed by one field is not offered
/// to the next, and later items with a similar label stay ordinary dynamic
/// questions. Fields with no match get a synthetic binding.
pub fn resolve_fixed_fields(items: &[RecruitmentItem]) -> FixedBindings {
    let mut consumed: Vec<i64> = Vec::new();
    let mut bindings = FixedBindings::new();

    for field in FixedField::ALL {
        let matched = items.iter().find(|item| {
            item.item_type == ItemType::Text
                && !consumed.contains(&item.id)
                && field.matches_label(&item.title)
        });
        match matched {
            Some(item) => {
                consumed.push(item.id);
                bindings.insert(field, FixedBinding::Backed { item_id: item.id });
            }
            None => {
                tracing::debug!(field = field.label(), "fixed field missing, using synthetic");
                bindings.insert(field, FixedBinding::Synthetic);
            }
        }
    }

    bindings
}

/// The fixed field backed by the given item id, if any.
pub fn field_for_item(bindings: &FixedBindings, item_id: i64) -> Option<FixedField> {
    bindings.iter().find_map(|(field, binding)| match binding {
        FixedBinding::Backed { item_id: id } if *id == item_id => Some(*field),
        _ => None,
    })
}

/// Item drafts for the three fixed fields, prepended by the creation flow.
/// `order` is a placeholder; the converter assigns final 1-based positions.
pub fn fixed_field_items() -> Vec<NewRecruitmentItem> {
    FixedField::ALL
        .into_iter()
        .map(|field| NewRecruitmentItem {
            order: 0,
            item_type: ItemType::Text,
            required: true,
            title: field.label().to_string(),
            description: String::new(),
            multiple: None,
            options: Vec::new(),
            max_length: Some(100),
            date: None,
            announcement: None,
        })
        .collect()
}
