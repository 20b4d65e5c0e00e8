//! Quest and step definitions as delivered by the item-data provider.

use serde::{Deserialize, Serialize};

use gq_core::{Coordinate, Located, LocatedItem, Localized, QuestId};

use crate::{QuestError, QuestResult};

// ── Question ──────────────────────────────────────────────────────────────────

/// How a step's question is answered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Free text.  `accepted` holds a comma-separated list of answers per
    /// language.
    OpenText { accepted: Localized },
    /// Pick one of `options`.  `correct` indexes into `options` and is the
    /// same for every language.
    MultipleChoice { options: Vec<Localized>, correct: usize },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: Localized,
    pub kind:   QuestionKind,
    #[serde(default)]
    pub hint:   Option<Localized>,
}

// ── QuestStep ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestStep {
    /// 0-based position within the quest.
    pub step_index:       u32,
    pub title:            Localized,
    pub clue:             Localized,
    pub location:         Option<Coordinate>,
    pub question:         Question,
    #[serde(default)]
    pub post_answer_info: Option<Localized>,
}

// ── Quest ─────────────────────────────────────────────────────────────────────

/// Moderation state of a quest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    #[default]
    Draft,
    PendingApproval,
    Published,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id:     QuestId,
    pub title:  Localized,
    pub steps:  Vec<QuestStep>,
    /// Price in the smallest currency unit.
    #[serde(default)]
    pub price:  u32,
    #[serde(default)]
    pub status: QuestStatus,
}

impl Quest {
    pub fn total_steps(&self) -> u32 {
        self.steps.len() as u32
    }

    /// The step with `step_index == index`, if present.
    pub fn step(&self, index: u32) -> Option<&QuestStep> {
        self.steps.get(index as usize).filter(|s| s.step_index == index)
    }

    /// Check the step invariants: at least one step, `step_index` equal to
    /// the step's position, and every multiple-choice answer pointing at an
    /// existing option.
    pub fn validate(&self) -> QuestResult<()> {
        if self.steps.is_empty() {
            return Err(QuestError::InvalidSteps(format!("quest {} has no steps", self.id)));
        }
        for (pos, step) in self.steps.iter().enumerate() {
            if step.step_index as usize != pos {
                return Err(QuestError::InvalidSteps(format!(
                    "quest {}: step at position {pos} has step_index {}",
                    self.id, step.step_index
                )));
            }
            if let QuestionKind::MultipleChoice { options, correct } = &step.question.kind {
                if *correct >= options.len() {
                    return Err(QuestError::InvalidSteps(format!(
                        "quest {}: step {pos} answer index {correct} but only {} options",
                        self.id,
                        options.len()
                    )));
                }
            }
        }
        Ok(())
    }

    /// One marker per step, for geofencing or clustering a quest's route.
    /// Ids are `"{quest_id}#{step_index}"`.
    pub fn step_markers(&self) -> Vec<LocatedItem> {
        self.steps
            .iter()
            .map(|s| LocatedItem {
                id:       format!("{}#{}", self.id, s.step_index).into(),
                location: s.location,
            })
            .collect()
    }
}

/// Quests are placed on the map, and ranked, by their first step.
impl Located for Quest {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn location(&self) -> Option<Coordinate> {
        self.steps.first().and_then(|s| s.location)
    }
}
