// src/models/question.rs

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimum number of options a choice question must keep.
pub const MIN_OPTIONS: usize = 1;
/// Maximum number of options a choice question may carry.
pub const MAX_OPTIONS: usize = 5;

static NEXT_CLIENT_ID: AtomicU64 = AtomicU64::new(1);

/// Allocates a fresh client-side id for a question or option.
///
/// Ids are monotonic and never reused, even after a deletion, so option and
/// question references stay stable across reorders.
pub fn next_client_id() -> u64 {
    NEXT_CLIENT_ID.fetch_add(1, Ordering::Relaxed)
}

/// One selectable option of a choice question, as authored in the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: u64,
    pub text: String,
    /// Marks the free-text "other" option.
    pub is_other: bool,
    /// Placeholder shown inside the "other" input.
    pub placeholder: Option<String>,
}

impl QuestionOption {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: next_client_id(),
            text: text.into(),
            is_other: false,
            placeholder: None,
        }
    }

    pub fn other(text: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            id: next_client_id(),
            text: text.into(),
            is_other: true,
            placeholder: Some(placeholder.into()),
        }
    }
}

/// The closed set of authorable question shapes.
///
/// Every conversion boundary matches exhaustively on this enum, so adding a
/// new question type is a compile-time-checked change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    SingleCheck {
        options: Vec<QuestionOption>,
        /// Explicit author override; `None` falls back to the per-kind default
        /// at serialization time.
        multiple: Option<bool>,
    },
    MultiCheck {
        options: Vec<QuestionOption>,
        multiple: Option<bool>,
    },
    ShortAnswer {
        max_length: Option<u32>,
        multiple: Option<bool>,
    },
    LongAnswer {
        max_length: Option<u32>,
        multiple: Option<bool>,
    },
    DatePicker {
        date_value: Option<NaiveDate>,
    },
    /// Informational block; carries no answer.
    Description,
}

impl QuestionKind {
    /// A choice kind starting with one blank option.
    pub fn single_check() -> Self {
        QuestionKind::SingleCheck {
            options: vec![QuestionOption::new("")],
            multiple: None,
        }
    }

    pub fn multi_check() -> Self {
        QuestionKind::MultiCheck {
            options: vec![QuestionOption::new("")],
            multiple: None,
        }
    }

    pub fn short_answer() -> Self {
        QuestionKind::ShortAnswer {
            max_length: None,
            multiple: None,
        }
    }

    pub fn long_answer() -> Self {
        QuestionKind::LongAnswer {
            max_length: None,
            multiple: None,
        }
    }

    pub fn date_picker() -> Self {
        QuestionKind::DatePicker { date_value: None }
    }

    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            QuestionKind::SingleCheck { .. } | QuestionKind::MultiCheck { .. }
        )
    }

    pub fn options(&self) -> Option<&[QuestionOption]> {
        match self {
            QuestionKind::SingleCheck { options, .. }
            | QuestionKind::MultiCheck { options, .. } => Some(options),
            _ => None,
        }
    }

    fn options_mut(&mut self) -> Option<&mut Vec<QuestionOption>> {
        match self {
            QuestionKind::SingleCheck { options, .. }
            | QuestionKind::MultiCheck { options, .. } => Some(options),
            _ => None,
        }
    }
}

/// One authorable question of a recruitment form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub is_required: bool,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    pub fn new(kind: QuestionKind) -> Self {
        Self {
            id: next_client_id(),
            title: String::new(),
            description: String::new(),
            is_required: false,
            kind,
        }
    }
}

/// Owns the question list of the form editor.
///
/// Every mutation replaces the whole list with a freshly built one, so a
/// state update is observable as a single atomic transition. Invariants held
/// here: a choice question keeps at least [`MIN_OPTIONS`] and at most
/// [`MAX_OPTIONS`] options; out-of-range add/remove calls are no-ops.
#[derive(Debug, Default, Clone)]
pub struct FormEditor {
    questions: Vec<Question>,
}

impl FormEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Appends a new question and returns its id.
    pub fn add_question(&mut self, kind: QuestionKind) -> u64 {
        let question = Question::new(kind);
        let id = question.id;
        let mut next = self.questions.clone();
        next.push(question);
        self.questions = next;
        id
    }

    pub fn remove_question(&mut self, question_id: u64) {
        self.questions = self
            .questions
            .iter()
            .filter(|q| q.id != question_id)
            .cloned()
            .collect();
    }

    pub fn set_title(&mut self, question_id: u64, title: impl Into<String>) {
        let title = title.into();
        self.replace(question_id, |q| q.title = title.clone());
    }

    pub fn set_description(&mut self, question_id: u64, description: impl Into<String>) {
        let description = description.into();
        self.replace(question_id, |q| q.description = description.clone());
    }

    pub fn toggle_required(&mut self, question_id: u64) {
        self.replace(question_id, |q| q.is_required = !q.is_required);
    }

    /// Adds a blank option to a choice question. No-op at [`MAX_OPTIONS`] or
    /// on a non-choice question.
    pub fn add_option(&mut self, question_id: u64) {
        self.replace(question_id, |q| {
            if let Some(options) = q.kind.options_mut() {
                if options.len() < MAX_OPTIONS {
                    options.push(QuestionOption::new(""));
                }
            }
        });
    }

    /// Removes an option from a choice question. Removing the last remaining
    /// option is a no-op.
    pub fn remove_option(&mut self, question_id: u64, option_id: u64) {
        self.replace(question_id, |q| {
            if let Some(options) = q.kind.options_mut() {
                if options.len() > MIN_OPTIONS {
                    options.retain(|o| o.id != option_id);
                }
            }
        });
    }

    pub fn set_option_text(&mut self, question_id: u64, option_id: u64, text: impl Into<String>) {
        let text = text.into();
        self.replace(question_id, |q| {
            if let Some(options) = q.kind.options_mut() {
                if let Some(option) = options.iter_mut().find(|o| o.id == option_id) {
                    option.text = text.clone();
                }
            }
        });
    }

    /// Whole-list replacement: clone, apply, swap.
    fn replace(&mut self, question_id: u64, mut apply: impl FnMut(&mut Question)) {
        let mut next = self.questions.clone();
        if let Some(question) = next.iter_mut().find(|q| q.id == question_id) {
            apply(question);
        }
        self.questions = next;
    }
}
