//! Quest progress state machine.
//!
//! # Transitions
//!
//! ```text
//!   submit_answer(p, i, false)                 → p
//!   submit_answer(p, i, true), i ∉ completed   → p + {i}, correct_answers + 1
//!   submit_answer(p, i, true), i ∈ completed   → p
//!   submit_answer(p, i, _),    i ≥ total       → p   (logged)
//! ```
//!
//! Completion is derived (`completed_steps.len() == total_steps`) and never
//! stored.  Callers detect "nothing happened" by comparing the returned
//! progress with the one they passed in.

use serde::{Deserialize, Serialize};

/// Persisted per quest attempt.
///
/// Invariants: `correct_answers == completed_steps.len()`, no duplicate
/// steps, every step `< total_steps`.  [`QuestProgress::repaired`] restores
/// them for values read back from an untrusted store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestProgress {
    pub correct_answers: u32,
    pub total_steps:     u32,
    /// Step indices answered correctly, in the order they were answered.
    #[serde(default)]
    pub completed_steps: Vec<u32>,
}

/// Where play goes after a correct answer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NextState {
    Continue(u32),
    Complete,
}

impl QuestProgress {
    /// Fresh progress, created when the quest is purchased.
    pub fn new(total_steps: u32) -> Self {
        Self { correct_answers: 0, total_steps, completed_steps: Vec::new() }
    }

    /// Apply one verdict.  See the module docs for the transition table.
    pub fn submit_answer(&self, step: u32, is_correct: bool) -> Self {
        if !is_correct || self.completed_steps.contains(&step) {
            return self.clone();
        }
        if step >= self.total_steps {
            tracing::warn!(step, total = self.total_steps, "ignoring answer for out-of-range step");
            return self.clone();
        }
        let mut next = self.clone();
        next.correct_answers += 1;
        next.completed_steps.push(step);
        next
    }

    pub fn is_complete(&self) -> bool {
        self.completed_steps.len() as u32 == self.total_steps
    }

    pub fn is_step_completed(&self, step: u32) -> bool {
        self.completed_steps.contains(&step)
    }

    /// First step not yet answered, or `None` when complete.
    pub fn resume_step(&self) -> Option<u32> {
        (0..self.total_steps).find(|i| !self.completed_steps.contains(i))
    }

    pub fn remaining(&self) -> u32 {
        self.total_steps.saturating_sub(self.completed_steps.len() as u32)
    }

    /// A copy with duplicate and out-of-range steps dropped and
    /// `correct_answers` recomputed.
    pub fn repaired(&self) -> Self {
        let mut steps: Vec<u32> = Vec::with_capacity(self.completed_steps.len());
        for &s in &self.completed_steps {
            if s < self.total_steps && !steps.contains(&s) {
                steps.push(s);
            }
        }
        Self {
            correct_answers: steps.len() as u32,
            total_steps:     self.total_steps,
            completed_steps: steps,
        }
    }
}

/// Free-function form of [`QuestProgress::submit_answer`].
pub fn submit_answer(progress: &QuestProgress, step: u32, is_correct: bool) -> QuestProgress {
    progress.submit_answer(step, is_correct)
}

/// The step after `current`, or `Complete` when `current` is the last one.
pub fn advance(current: u32, total_steps: u32) -> NextState {
    match current.checked_add(1) {
        Some(next) if next < total_steps => NextState::Continue(next),
        _ => NextState::Complete,
    }
}
