//! Lifecycle of a single users fetch. Exactly one phase is active at a time, and the
//! only legal transition is `Loading -> Success | Failed`.

use crate::{
    errors::{FetchError, FALLBACK_MESSAGE},
    users::User,
};
use std::collections::HashSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchState {
    /// Request in flight; no data and no error yet.
    #[default]
    Loading,
    Success(Vec<User>),
    Failed(String),
}

impl FetchState {
    /// Failed state used when the fetch ended without a usable error value.
    #[must_use]
    pub fn unknown_failure() -> Self {
        Self::Failed(FALLBACK_MESSAGE.to_string())
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    #[must_use]
    pub fn users(&self) -> Option<&[User]> {
        match self {
            Self::Success(users) => Some(users),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short phase name for logs.
    #[must_use]
    pub fn phase(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Failed(_) => "error",
        }
    }

    /// Moves a loading state to `next`. Returns whether the state changed.
    ///
    /// Settled states are final: a second outcome is ignored, and `next` being
    /// `Loading` is never a transition.
    pub fn settle(&mut self, next: Self) -> bool {
        if self.is_settled() || next.is_loading() {
            return false;
        }
        *self = next;
        true
    }
}

impl From<Result<Vec<User>, FetchError>> for FetchState {
    fn from(outcome: Result<Vec<User>, FetchError>) -> Self {
        match outcome {
            Ok(users) => Self::Success(users),
            Err(err) => Self::Failed(err.message()),
        }
    }
}

/// Ids that appear more than once, in order of their first repeat.
#[must_use]
pub fn duplicate_ids(users: &[User]) -> Vec<u64> {
    let mut seen = HashSet::with_capacity(users.len());
    let mut repeated = Vec::new();

    for user in users {
        if !seen.insert(user.id) && !repeated.contains(&user.id) {
            repeated.push(user.id);
        }
    }

    repeated
}
