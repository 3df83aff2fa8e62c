// src/state.rs

use std::collections::HashMap;

use crate::models::stage::StageStatus;

/// Applicant identity shared between the apply and result pages.
///
/// An explicit container handed by reference to the components that need
/// it; there is no ambient singleton. Last write wins.
#[derive(Debug, Default, Clone)]
pub struct IdentityStore {
    name: Option<String>,
    email: Option<String>,
}

impl IdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, email: impl Into<String>) {
        self.name = Some(name.into());
        self.email = Some(email.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Clears stored identity, e.g. after a token-expiry redirect.
    pub fn reset(&mut self) {
        self.name = None;
        self.email = None;
    }
}

/// Key of one stage-cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StageKey {
    pub email: String,
    pub applied_at: String,
}

/// Stage lookup cache keyed by email + appliedAt. Last write wins; no merge
/// or versioning.
#[derive(Debug, Default, Clone)]
pub struct StageCache {
    entries: HashMap<StageKey, StageStatus>,
}

impl StageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: StageKey, status: StageStatus) {
        self.entries.insert(key, status);
    }

    pub fn get(&self, key: &StageKey) -> Option<&StageStatus> {
        self.entries.get(key)
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
