//! Unit tests for gq-quest.

use gq_core::{Coordinate, Language, Localized, QuestId};

use crate::{Quest, QuestProgress, QuestStatus, QuestStep, Question, QuestionKind};

// ── Helpers ───────────────────────────────────────────────────────────────────

const NARIKALA: Coordinate = Coordinate::new(41.6879, 44.8075);
const METEKHI:  Coordinate = Coordinate::new(41.6908, 44.8099);

fn open_text(en: &str, ru: &str, ge: &str) -> Question {
    Question {
        prompt: Localized::text("Name this place", "Назовите место", "დაასახელეთ ადგილი"),
        kind:   QuestionKind::OpenText { accepted: Localized::text(en, ru, ge) },
        hint:   None,
    }
}

fn multiple_choice(correct: usize) -> Question {
    Question {
        prompt: Localized::text("When was it built?", "Когда построено?", "როდის აშენდა?"),
        kind:   QuestionKind::MultipleChoice {
            options: vec![
                Localized::uniform("IV".to_string()),
                Localized::uniform("XIII".to_string()),
                Localized::uniform("XIX".to_string()),
            ],
            correct,
        },
        hint:   Some(Localized::text("Middle Ages", "Средние века", "შუა საუკუნეები")),
    }
}

fn step(index: u32, location: Option<Coordinate>, question: Question) -> QuestStep {
    QuestStep {
        step_index: index,
        title: Localized::uniform(format!("Step {index}")),
        clue: Localized::uniform(String::new()),
        location,
        question,
        post_answer_info: None,
    }
}

/// Three steps: open text, multiple choice (answer index 1), open text.
fn old_town() -> Quest {
    Quest {
        id:     QuestId::new("old-town"),
        title:  Localized::text("Old Town", "Старый город", "ძველი ქალაქი"),
        steps:  vec![
            step(0, Some(NARIKALA), open_text("Narikala, Narikala Fortress", "Нарикала", "ნარიყალა")),
            step(1, Some(METEKHI), multiple_choice(1)),
            step(2, None, open_text("metekhi", "метехи", "მეტეხი")),
        ],
        price:  1500,
        status: QuestStatus::Published,
    }
}

fn progress(correct: u32, total: u32, completed: &[u32]) -> QuestProgress {
    QuestProgress { correct_answers: correct, total_steps: total, completed_steps: completed.to_vec() }
}

// ── Progress transitions ──────────────────────────────────────────────────────

#[cfg(test)]
mod transitions {
    use super::*;
    use crate::{NextState, advance, submit_answer};

    #[test]
    fn correct_answer_records_step() {
        let p = submit_answer(&QuestProgress::new(3), 2, true);
        assert_eq!(p, progress(1, 3, &[2]));
    }

    #[test]
    fn repeated_correct_answer_is_idempotent() {
        let p = QuestProgress::new(5);
        let once = submit_answer(&p, 2, true);
        let twice = submit_answer(&once, 2, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn wrong_answer_never_changes_progress() {
        for p in [QuestProgress::new(3), progress(1, 3, &[0]), progress(3, 3, &[0, 1, 2])] {
            for i in 0..4 {
                assert_eq!(submit_answer(&p, i, false), p);
            }
        }
    }

    #[test]
    fn out_of_range_step_is_ignored() {
        let p = progress(1, 3, &[0]);
        assert_eq!(submit_answer(&p, 3, true), p);
        assert_eq!(submit_answer(&p, u32::MAX, true), p);
    }

    #[test]
    fn steps_can_be_answered_out_of_order() {
        let p = submit_answer(&submit_answer(&QuestProgress::new(3), 2, true), 0, true);
        assert_eq!(p, progress(2, 3, &[2, 0]));
        assert!(p.is_step_completed(2) && !p.is_step_completed(1));
        assert_eq!(p.resume_step(), Some(1));
        assert_eq!(p.remaining(), 1);
    }

    #[test]
    fn advance_continues_then_completes() {
        assert_eq!(advance(0, 3), NextState::Continue(1));
        assert_eq!(advance(1, 3), NextState::Continue(2));
        assert_eq!(advance(2, 3), NextState::Complete);
        assert_eq!(advance(0, 1), NextState::Complete);
        assert_eq!(advance(u32::MAX, 3), NextState::Complete);
    }

    #[test]
    fn completion_is_derived() {
        let done = progress(3, 3, &[0, 1, 2]);
        assert!(done.is_complete());
        assert_eq!(done.resume_step(), None);
        assert_eq!(done.remaining(), 0);
        assert!(!progress(2, 3, &[0, 1]).is_complete());
    }

    #[test]
    fn three_step_walkthrough() {
        let p = QuestProgress::new(3);
        assert_eq!(p, progress(0, 3, &[]));

        let p = submit_answer(&p, 0, true);
        assert_eq!(p, progress(1, 3, &[0]));
        assert_eq!(advance(0, 3), NextState::Continue(1));

        let p = submit_answer(&p, 1, true);
        assert_eq!(p, progress(2, 3, &[0, 1]));

        let p = submit_answer(&p, 2, false);
        assert_eq!(p, progress(2, 3, &[0, 1]));

        let p = submit_answer(&p, 2, true);
        assert_eq!(p, progress(3, 3, &[0, 1, 2]));
        assert_eq!(advance(2, 3), NextState::Complete);
        assert!(p.is_complete());
    }

    #[test]
    fn repaired_restores_invariants() {
        let broken = progress(7, 3, &[1, 1, 5, 0]);
        assert_eq!(broken.repaired(), progress(2, 3, &[1, 0]));
    }
}

// ── Persisted shape ───────────────────────────────────────────────────────────

#[cfg(test)]
mod persisted {
    use super::*;

    #[test]
    fn json_uses_camel_case() {
        let json = serde_json::to_value(progress(2, 3, &[0, 1])).unwrap();
        assert_eq!(json, serde_json::json!({ "correctAnswers": 2, "totalSteps": 3, "completedSteps": [0, 1] }));
    }

    #[test]
    fn missing_completed_steps_reads_as_empty() {
        let p: QuestProgress = serde_json::from_str(r#"{"correctAnswers":0,"totalSteps":4}"#).unwrap();
        assert_eq!(p, QuestProgress::new(4));
    }

    #[test]
    fn quest_round_trips_through_json() {
        // Dyadic coordinates so the float text round-trips exactly.
        let mut quest = old_town();
        for (i, s) in quest.steps.iter_mut().enumerate() {
            s.location = Some(Coordinate::new(41.5 + i as f64 * 0.25, 44.75));
        }
        let text = serde_json::to_string(&quest).unwrap();
        assert!(text.contains(r#""type":"multiple_choice""#));
        assert!(text.contains(r#""status":"published""#));
        let back: Quest = serde_json::from_str(&text).unwrap();
        assert_eq!(back, quest);
    }
}

// ── Quest definitions ─────────────────────────────────────────────────────────

#[cfg(test)]
mod quests {
    use super::*;
    use gq_core::Located;

    use crate::QuestError;

    #[test]
    fn anchored_at_first_step() {
        let quest = old_town();
        assert_eq!(quest.location(), Some(NARIKALA));
        assert_eq!(Located::id(&quest), "old-town");

        let empty = Quest { steps: Vec::new(), ..old_town() };
        assert_eq!(empty.location(), None);
    }

    #[test]
    fn step_lookup() {
        let quest = old_town();
        assert_eq!(quest.total_steps(), 3);
        assert_eq!(quest.step(1).map(|s| s.location), Some(Some(METEKHI)));
        assert!(quest.step(3).is_none());
    }

    #[test]
    fn validate_accepts_well_formed() {
        assert!(old_town().validate().is_ok());
    }

    #[test]
    fn validate_rejects_gaps_and_bad_choices() {
        let mut gap = old_town();
        gap.steps[2].step_index = 3;
        assert!(matches!(gap.validate(), Err(QuestError::InvalidSteps(_))));

        let mut choice = old_town();
        choice.steps[1].question = multiple_choice(3);
        assert!(matches!(choice.validate(), Err(QuestError::InvalidSteps(_))));

        let empty = Quest { steps: Vec::new(), ..old_town() };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn step_markers_keep_unlocated_steps() {
        let markers = old_town().step_markers();
        let ids: Vec<&str> = markers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["old-town#0", "old-town#1", "old-town#2"]);
        assert_eq!(markers[2].location, None);
    }
}

// ── Answer matching ───────────────────────────────────────────────────────────

#[cfg(test)]
mod answers {
    use super::*;
    use crate::Submission;

    fn text(s: &str) -> Submission {
        Submission::Text(s.to_string())
    }

    #[test]
    fn open_text_normalises_case_and_whitespace() {
        let q = open_text("Narikala, Narikala Fortress", "Нарикала", "ნარიყალა");
        assert!(q.is_correct(Language::En, &text("narikala")));
        assert!(q.is_correct(Language::En, &text("  NARIKALA fortress ")));
        assert!(q.is_correct(Language::Ru, &text("нарикала")));
        assert!(!q.is_correct(Language::En, &text("metekhi")));
    }

    #[test]
    fn open_text_checks_the_reader_language() {
        let q = open_text("Narikala", "Нарикала", "ნარიყალა");
        assert!(!q.is_correct(Language::Ru, &text("narikala")));
        assert!(q.is_correct(Language::Ge, &text("ნარიყალა")));
    }

    #[test]
    fn empty_answer_never_matches() {
        let q = open_text("a,,b", "a", "a");
        assert!(!q.is_correct(Language::En, &text("")));
        assert!(!q.is_correct(Language::En, &text("   ")));
    }

    #[test]
    fn multiple_choice_compares_index_in_every_language() {
        let q = multiple_choice(1);
        for lang in Language::ALL {
            assert!(q.is_correct(lang, &Submission::Choice(1)));
            assert!(!q.is_correct(lang, &Submission::Choice(0)));
            assert!(q.is_correct(lang, &text(" 1 ")));
            assert!(!q.is_correct(lang, &text("XIII")));
        }
    }

    #[test]
    fn choice_on_open_text_is_wrong() {
        let q = open_text("0", "0", "0");
        assert!(!q.is_correct(Language::En, &Submission::Choice(0)));
    }
}

// ── Tracker ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tracker {
    use super::*;
    use crate::{
        MemoryProgressStore, NextState, ProgressKey, ProgressStore, QuestError, QuestTracker, Submission,
    };

    fn key() -> ProgressKey {
        ProgressKey::new("old-town", "user-1")
    }

    fn text(s: &str) -> Submission {
        Submission::Text(s.to_string())
    }

    #[test]
    fn key_display() {
        assert_eq!(key().to_string(), "quest-progress-old-town-user-1");
    }

    #[test]
    fn begin_is_idempotent() {
        let quest = old_town();
        let mut t = QuestTracker::new(MemoryProgressStore::new());
        assert_eq!(t.begin(&key(), &quest).unwrap(), QuestProgress::new(3));

        t.submit(&key(), &quest, 0, Language::En, &text("narikala")).unwrap();
        let again = t.begin(&key(), &quest).unwrap();
        assert_eq!(again, progress(1, 3, &[0]));
        assert_eq!(t.store().len(), 1);
    }

    #[test]
    fn submit_before_begin_fails() {
        let mut t = QuestTracker::new(MemoryProgressStore::new());
        let err = t.submit(&key(), &old_town(), 0, Language::En, &text("narikala")).unwrap_err();
        assert!(matches!(err, QuestError::QuestNotStarted));
    }

    #[test]
    fn submit_rejects_unknown_step() {
        let quest = old_town();
        let mut t = QuestTracker::new(MemoryProgressStore::new());
        t.begin(&key(), &quest).unwrap();
        let err = t.submit(&key(), &quest, 3, Language::En, &text("x")).unwrap_err();
        assert!(matches!(err, QuestError::StepOutOfRange { step: 3, total: 3 }));
    }

    #[test]
    fn writes_only_on_change() {
        let quest = old_town();
        let mut t = QuestTracker::new(MemoryProgressStore::new());
        t.begin(&key(), &quest).unwrap();
        assert_eq!(t.store().writes(), 1);

        let wrong = t.submit(&key(), &quest, 0, Language::En, &text("metekhi")).unwrap();
        assert!(!wrong.correct && !wrong.changed);
        assert_eq!(wrong.next, None);
        assert_eq!(t.store().writes(), 1);

        let right = t.submit(&key(), &quest, 0, Language::En, &text("Narikala")).unwrap();
        assert!(right.correct && right.changed);
        assert_eq!(right.next, Some(NextState::Continue(1)));
        assert_eq!(t.store().writes(), 2);

        let replay = t.submit(&key(), &quest, 0, Language::En, &text("narikala")).unwrap();
        assert!(replay.correct && !replay.changed);
        assert_eq!(replay.next, Some(NextState::Continue(1)));
        assert_eq!(t.store().writes(), 2);
    }

    #[test]
    fn plays_to_completion() {
        let quest = old_town();
        let mut t = QuestTracker::new(MemoryProgressStore::new());
        t.begin(&key(), &quest).unwrap();

        t.submit(&key(), &quest, 0, Language::Ru, &text("нарикала")).unwrap();
        t.submit(&key(), &quest, 1, Language::Ru, &Submission::Choice(1)).unwrap();
        assert!(!t.is_complete(&key(), &quest).unwrap());

        let miss = t.submit(&key(), &quest, 2, Language::Ru, &text("narikala")).unwrap();
        assert_eq!(miss.progress, progress(2, 3, &[0, 1]));

        let last = t.submit(&key(), &quest, 2, Language::Ru, &text("Метехи")).unwrap();
        assert_eq!(last.progress, progress(3, 3, &[0, 1, 2]));
        assert_eq!(last.next, Some(NextState::Complete));
        assert!(t.is_complete(&key(), &quest).unwrap());
    }

    #[test]
    fn completion_recomputed_from_store() {
        let quest = old_town();
        let mut store = MemoryProgressStore::new();
        store.save(&key(), &progress(3, 3, &[2, 0, 1])).unwrap();
        let t = QuestTracker::new(store);
        assert!(t.is_complete(&key(), &quest).unwrap());

        let other = ProgressKey::new("old-town", "user-2");
        assert!(!t.is_complete(&other, &quest).unwrap());
        assert_eq!(t.progress(&other).unwrap(), None);
    }

    #[test]
    fn malformed_progress_is_repaired_and_persisted() {
        let quest = old_town();
        let mut store = MemoryProgressStore::new();
        store.save(&key(), &progress(5, 3, &[0, 0, 7])).unwrap();
        let mut t = QuestTracker::new(store);

        let wrong = t.submit(&key(), &quest, 1, Language::En, &Submission::Choice(0)).unwrap();
        assert!(!wrong.correct);
        assert!(wrong.changed);
        assert_eq!(wrong.progress, progress(1, 3, &[0]));
        assert_eq!(t.progress(&key()).unwrap(), Some(wrong.progress.clone()));

        let again = t.submit(&key(), &quest, 1, Language::En, &Submission::Choice(0)).unwrap();
        assert!(!again.changed);
        assert_eq!(t.store().writes(), 2);
    }

    #[test]
    fn attempts_are_isolated_per_user() {
        let quest = old_town();
        let mut t = QuestTracker::new(MemoryProgressStore::new());
        let other = ProgressKey::new("old-town", "user-2");
        t.begin(&key(), &quest).unwrap();
        t.begin(&other, &quest).unwrap();

        t.submit(&key(), &quest, 0, Language::En, &text("narikala")).unwrap();
        assert_eq!(t.progress(&other).unwrap(), Some(QuestProgress::new(3)));
    }
}
