//! `gq-quest` — quest definitions and the progress tracker for quest play.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`step`]     | `Quest`, `QuestStep`, `Question`, `QuestionKind`, `QuestStatus` |
//! | [`answer`]   | `Submission`, `Question::is_correct`                            |
//! | [`progress`] | `QuestProgress`, `submit_answer`, `advance`, `NextState`        |
//! | [`store`]    | `ProgressStore` trait, `ProgressKey`, `MemoryProgressStore`     |
//! | [`tracker`]  | `QuestTracker<S>`, `SubmitOutcome`                              |
//! | [`error`]    | `QuestError`, `QuestResult<T>`                                  |
//!
//! `progress` is pure and knows nothing about questions; `tracker` wires
//! answer matching, the state machine, and the store together.
//!
//! ```rust,ignore
//! let mut tracker = QuestTracker::new(MemoryProgressStore::new());
//! let key = ProgressKey::new(quest.id.clone(), user);
//! tracker.begin(&key, &quest)?;
//! let outcome = tracker.submit(&key, &quest, 0, Language::En, &Submission::Text("narikala".into()))?;
//! if let Some(NextState::Continue(next)) = outcome.next { /* show step `next` */ }
//! ```

pub mod answer;
pub mod error;
pub mod progress;
pub mod step;
pub mod store;
pub mod tracker;

#[cfg(test)]
mod tests;

pub use answer::Submission;
pub use error::{QuestError, QuestResult};
pub use progress::{NextState, QuestProgress, advance, submit_answer};
pub use step::{Quest, QuestStatus, QuestStep, Question, QuestionKind};
pub use store::{MemoryProgressStore, ProgressKey, ProgressStore};
pub use tracker::{QuestTracker, SubmitOutcome};
