//! Persistence seam for quest progress.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use gq_core::{QuestId, UserId};

use crate::{QuestProgress, QuestResult};

/// One quest attempt: a quest and the user who bought it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProgressKey {
    pub quest_id: QuestId,
    pub user_id:  UserId,
}

impl ProgressKey {
    pub fn new(quest_id: impl Into<QuestId>, user_id: impl Into<UserId>) -> Self {
        Self { quest_id: quest_id.into(), user_id: user_id.into() }
    }
}

/// Renders as the key-value store key, `quest-progress-{quest}-{user}`.
impl fmt::Display for ProgressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quest-progress-{}-{}", self.quest_id, self.user_id)
    }
}

/// Key-value store holding one [`QuestProgress`] per attempt.
///
/// Implementations map their own failures to [`crate::QuestError::Store`].
pub trait ProgressStore {
    fn load(&self, key: &ProgressKey) -> QuestResult<Option<QuestProgress>>;
    fn save(&mut self, key: &ProgressKey, progress: &QuestProgress) -> QuestResult<()>;
}

/// In-process store.  Used by tests and the demo.
#[derive(Clone, Debug, Default)]
pub struct MemoryProgressStore {
    entries: HashMap<ProgressKey, QuestProgress>,
    writes:  usize,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of `save` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ProgressStore for MemoryProgressStore {
    fn load(&self, key: &ProgressKey) -> QuestResult<Option<QuestProgress>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &ProgressKey, progress: &QuestProgress) -> QuestResult<()> {
        self.entries.insert(key.clone(), progress.clone());
        self.writes += 1;
        Ok(())
    }
}
