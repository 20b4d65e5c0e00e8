//! Quest play loop: judge, record, persist, advance.

use gq_core::Language;

use crate::{
    NextState, ProgressKey, ProgressStore, Quest, QuestError, QuestProgress, QuestResult, Submission, advance,
};

/// Result of one [`QuestTracker::submit`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub correct:  bool,
    /// Whether the stored progress changed (and was written back).
    pub changed:  bool,
    pub progress: QuestProgress,
    /// Where to go next.  `None` for a wrong answer; the user retries.
    pub next:     Option<NextState>,
}

/// Drives quest play against a [`ProgressStore`].
#[derive(Debug)]
pub struct QuestTracker<S: ProgressStore> {
    store: S,
}

impl<S: ProgressStore> QuestTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create the initial progress for `key`, as done at purchase time.
    ///
    /// Idempotent: if progress already exists it is returned untouched.
    pub fn begin(&mut self, key: &ProgressKey, quest: &Quest) -> QuestResult<QuestProgress> {
        if let Some(existing) = self.store.load(key)? {
            tracing::debug!(%key, "quest already started");
            return Ok(existing);
        }
        let progress = QuestProgress::new(quest.total_steps());
        self.store.save(key, &progress)?;
        tracing::debug!(%key, total_steps = progress.total_steps, "quest started");
        Ok(progress)
    }

    /// Judge `submission` for `step`, record it, and report what happened.
    ///
    /// Progress is written back only when it differs from the stored value,
    /// so wrong answers and replays of completed steps cost no store write.
    /// A malformed stored value is repaired first; the repair itself counts
    /// as a change and is persisted even when the answer is wrong.
    ///
    /// # Errors
    ///
    /// * [`QuestError::StepOutOfRange`] if `quest` has no such step.
    /// * [`QuestError::QuestNotStarted`] if [`begin`](Self::begin) was never
    ///   called for `key`.
    /// * Whatever the store returns.
    pub fn submit(
        &mut self,
        key: &ProgressKey,
        quest: &Quest,
        step: u32,
        lang: Language,
        submission: &Submission,
    ) -> QuestResult<SubmitOutcome> {
        let total = quest.total_steps();
        let question = &quest
            .step(step)
            .ok_or(QuestError::StepOutOfRange { step, total })?
            .question;
        let stored = self.store.load(key)?.ok_or(QuestError::QuestNotStarted)?;
        let current = stored.repaired();
        if current != stored {
            tracing::warn!(%key, "stored progress was malformed; repairing");
        }

        let correct = question.is_correct(lang, submission);
        let progress = current.submit_answer(step, correct);
        let changed = progress != stored;
        if changed {
            self.store.save(key, &progress)?;
            if progress.is_complete() {
                tracing::info!(%key, "quest complete");
            }
        }
        tracing::debug!(%key, step, correct, changed, "answer submitted");

        Ok(SubmitOutcome {
            correct,
            changed,
            progress,
            next: correct.then(|| advance(step, total)),
        })
    }

    pub fn progress(&self, key: &ProgressKey) -> QuestResult<Option<QuestProgress>> {
        self.store.load(key)
    }

    /// Recompute completion from the stored progress and the quest's current
    /// step count.  An attempt that was never started is not complete.
    pub fn is_complete(&self, key: &ProgressKey, quest: &Quest) -> QuestResult<bool> {
        Ok(self.store.load(key)?.is_some_and(|p| {
            let p = p.repaired();
            p.completed_steps.len() as u32 == quest.total_steps()
        }))
    }
}
