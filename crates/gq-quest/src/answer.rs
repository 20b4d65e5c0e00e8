//! Judging a user's answer against a step's question.
//!
//! This is the string-normalisation layer in front of the progress tracker;
//! [`crate::progress`] only ever sees the boolean verdict.

use serde::{Deserialize, Serialize};

use gq_core::Language;

use crate::{Question, QuestionKind};

/// What the user handed in for a step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Submission {
    Text(String),
    /// Index of the selected multiple-choice option.
    Choice(usize),
}

impl Question {
    /// Whether `submission` answers this question for a user reading in
    /// `lang`.
    ///
    /// Open text is lower-cased and trimmed, then compared against each
    /// entry of the comma-separated accepted list for `lang`.  Empty entries
    /// never match.  Multiple choice compares option indices; a text
    /// submission is parsed as an index.
    pub fn is_correct(&self, lang: Language, submission: &Submission) -> bool {
        match (&self.kind, submission) {
            (QuestionKind::OpenText { accepted }, Submission::Text(text)) => {
                let given = normalize(text);
                !given.is_empty()
                    && accepted
                        .get(lang)
                        .split(',')
                        .map(normalize)
                        .any(|a| a == given)
            }
            (QuestionKind::OpenText { .. }, Submission::Choice(_)) => false,
            (QuestionKind::MultipleChoice { correct, .. }, Submission::Choice(i)) => i == correct,
            (QuestionKind::MultipleChoice { correct, .. }, Submission::Text(text)) => {
                text.trim().parse::<usize>().is_ok_and(|i| i == *correct)
            }
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
