// src/form/session.rs

use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::form::answers::detail_to_answer_state;
use crate::form::fixed::{resolve_fixed_fields, FixedBinding, FixedBindings, FixedField};
use crate::form::submit::{assemble_answers, normalize_legacy_list};
use crate::form::validate::required_unanswered_count;
use crate::models::application::{
    AnswerState, AnswerValue, SubmitApplicationRequest, SubmittedApplication,
};
use crate::models::recruitment::{RecruitmentDetail, RecruitmentItem};

/// Phase of the apply/edit page.
///
/// `Loading → Ready → (Submitting → Success | Submitting → Error) → Ready`.
/// Success navigates away (the caller's concern); Error keeps the form
/// populated for retry. There is no autosave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Ready,
    Submitting,
    Success,
    Error,
}

/// Per-page state of the applying/editing flow.
///
/// Owns the fetched items, the fixed-field bindings (resolved once per load,
/// cached for the session), the answer map, and the default answers for
/// synthetic fixed fields. All mutations live here until an explicit submit.
#[derive(Debug, Clone)]
pub struct ApplySession {
    recruitment_id: i64,
    items: Vec<RecruitmentItem>,
    bindings: FixedBindings,
    answers: AnswerState,
    fixed_defaults: BTreeMap<FixedField, String>,
    phase: SessionPhase,
}

impl ApplySession {
    /// A session waiting for the recruitment detail fetch.
    pub fn new(recruitment_id: i64) -> Self {
        Self {
            recruitment_id,
            items: Vec::new(),
            bindings: FixedBindings::new(),
            answers: AnswerState::new(),
            fixed_defaults: BTreeMap::new(),
            phase: SessionPhase::Loading,
        }
    }

    /// Installs the fetched detail (and prior application when editing) and
    /// moves to `Ready`.
    pub fn load(&mut self, detail: RecruitmentDetail, prior: Option<&SubmittedApplication>) {
        let mut items = detail.items;
        items.sort_by_key(|item| item.order);

        self.bindings = resolve_fixed_fields(&items);
        self.answers = detail_to_answer_state(&items, prior.map(|p| p.answers.as_slice()));
        self.recruitment_id = detail.id;
        self.items = items;
        self.phase = SessionPhase::Ready;
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn items(&self) -> &[RecruitmentItem] {
        &self.items
    }

    pub fn bindings(&self) -> &FixedBindings {
        &self.bindings
    }

    pub fn answers(&self) -> &AnswerState {
        &self.answers
    }

    pub fn set_text_answer(&mut self, item_id: i64, value: impl Into<String>) {
        self.answers.insert(item_id, AnswerValue::One(value.into()));
    }

    /// Default answer for a synthetic fixed field.
    pub fn set_fixed_default(&mut self, field: FixedField, value: impl Into<String>) {
        self.fixed_defaults.insert(field, value.into());
    }

    /// Selects or deselects an option. Single-select items replace their
    /// value wholesale, so they never hold more than one key.
    pub fn toggle_option(&mut self, item_id: i64, option_id: i64) {
        let Some(item) = self.items.iter().find(|i| i.id == item_id) else {
            return;
        };
        let key = option_id.to_string();

        if item.multiple == Some(true) {
            let mut keys = self
                .answers
                .get(&item_id)
                .map(|v| v.selection())
                .unwrap_or_default();
            if let Some(pos) = keys.iter().position(|k| *k == key) {
                keys.remove(pos);
            } else {
                keys.push(key);
            }
            self.answers.insert(item_id, AnswerValue::Many(keys));
        } else {
            self.answers.insert(item_id, AnswerValue::One(key));
        }
    }

    pub fn required_unanswered_count(&self) -> usize {
        required_unanswered_count(
            &self.items,
            &self.bindings,
            &self.answers,
            &self.fixed_defaults,
        )
    }

    /// Builds the submission payload and enters `Submitting`.
    ///
    /// Refuses while another submit is in flight (submissions are
    /// serialized by disabling the control) and while required answers are
    /// missing — in both cases before any network call.
    pub fn begin_submit(&mut self) -> Result<SubmitApplicationRequest, ApiError> {
        if self.phase == SessionPhase::Submitting {
            return Err(ApiError::SubmitInFlight);
        }
        let missing_required = self.required_unanswered_count();
        if missing_required > 0 {
            return Err(ApiError::Validation { missing_required });
        }

        self.phase = SessionPhase::Submitting;
        Ok(SubmitApplicationRequest {
            recruitment_id: self.recruitment_id,
            name: self.fixed_value(FixedField::Name),
            email: self.fixed_value(FixedField::Email),
            answers: assemble_answers(&self.items, &self.answers, &self.bindings),
        })
    }

    /// Records the outcome of the submit request.
    pub fn finish_submit(&mut self, success: bool) {
        self.phase = if success {
            SessionPhase::Success
        } else {
            SessionPhase::Error
        };
    }

    /// Dismisses a submit error and returns to `Ready`, answers intact.
    pub fn acknowledge_error(&mut self) {
        if self.phase == SessionPhase::Error {
            self.phase = SessionPhase::Ready;
        }
    }

    /// Current value of a fixed field: the backing item's answer when the
    /// field is backed, the default-answer map when synthetic.
    pub fn fixed_value(&self, field: FixedField) -> String {
        let raw = match self.bindings.get(&field) {
            Some(FixedBinding::Backed { item_id }) => self
                .answers
                .get(item_id)
                .map(|v| v.as_text())
                .unwrap_or_default(),
            Some(FixedBinding::Synthetic) | None => self
                .fixed_defaults
                .get(&field)
                .cloned()
                .unwrap_or_default(),
        };
        normalize_legacy_list(&raw)
    }
}
