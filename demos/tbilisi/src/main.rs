//! `tbilisi` — a scripted walk through the Old Town exercising every gq crate.
//!
//! 1. Load the embedded guide CSV and an optional JSON `GuideConfig`.
//! 2. Cluster the map markers for two container sizes.
//! 3. Rank guide entries by distance and pick the nearest site.
//! 4. Walk a route past the sights with a geofence watcher running.
//! 5. Play a three-step quest through the progress tracker.
//!
//! Run with:
//!   RUST_LOG=debug cargo run -p tbilisi -- [config.json]

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

use gq_core::{Category, Coordinate, GuideConfig, GuideItem, Localized, QuestId, UserId};
use gq_geofence::{GeofenceWatcher, LocationError, ManualLocationSource};
use gq_quest::{
    MemoryProgressStore, NextState, ProgressKey, Quest, QuestStatus, QuestStep, QuestTracker, Question,
    QuestionKind, Submission,
};
use gq_spatial::{LinearProjection, cluster, load_guide_items_reader, nearest, ranked};

// ── Constants ─────────────────────────────────────────────────────────────────

const GUIDE_CSV: &str = include_str!("../data/guide.csv");

/// Freedom Square, where the walk starts.
const START: Coordinate = Coordinate::new(41.6934, 44.8015);

/// Map container sizes: a phone in portrait, then a desktop window.
const CONTAINERS: [(f64, f64); 2] = [(360.0, 640.0), (1280.0, 800.0)];

/// Fixes the scripted walk emits, in order.
const WALK: [Coordinate; 6] = [
    Coordinate::new(41.6934, 44.8015),
    Coordinate::new(41.6920, 44.8060),
    Coordinate::new(41.6929, 44.8082),
    Coordinate::new(41.6895, 44.8100),
    Coordinate::new(41.6883, 44.8075),
    Coordinate::new(41.6908, 44.8099),
];

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<GuideConfig> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<GuideConfig>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GuideConfig::default(),
    };
    config.validate()?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

// ── Quest ─────────────────────────────────────────────────────────────────────

fn old_town_quest() -> Quest {
    let step = |index: u32, at: Coordinate, title: Localized, question: Question| QuestStep {
        step_index: index,
        title,
        clue: Localized::text("Look for the oldest walls", "Ищите самые старые стены", "ეძებეთ უძველესი კედლები"),
        location: Some(at),
        question,
        post_answer_info: None,
    };
    let open = |en: &str, ru: &str, ge: &str| Question {
        prompt: Localized::text("What is this place called?", "Как называется это место?", "რა ჰქვია ამ ადგილს?"),
        kind:   QuestionKind::OpenText { accepted: Localized::text(en, ru, ge) },
        hint:   None,
    };

    Quest {
        id:     QuestId::new("old-town"),
        title:  Localized::text("Old Town Walk", "Прогулка по Старому городу", "ძველი ქალაქი"),
        steps:  vec![
            step(
                0,
                Coordinate::new(41.6929, 44.8082),
                Localized::text("The bridge", "Мост", "ხიდი"),
                open("bridge of peace, peace bridge", "мост мира", "მშვიდობის ხიდი"),
            ),
            step(
                1,
                Coordinate::new(41.6887, 44.8106),
                Localized::text("The baths", "Бани", "აბანოები"),
                Question {
                    prompt: Localized::text("What heats the water?", "Чем нагрета вода?", "რა ათბობს წყალს?"),
                    kind:   QuestionKind::MultipleChoice {
                        options: vec![
                            Localized::text("Wood fires", "Дрова", "შეშა"),
                            Localized::text("Sulphur springs", "Серные источники", "გოგირდის წყაროები"),
                            Localized::text("Gas boilers", "Газовые котлы", "გაზის ქვაბები"),
                        ],
                        correct: 1,
                    },
                    hint:   Some(Localized::text("Smell it", "Понюхайте", "დაყნოსეთ")),
                },
            ),
            step(
                2,
                Coordinate::new(41.6879, 44.8075),
                Localized::text("The fortress", "Крепость", "ციხე"),
                open("narikala", "нарикала", "ნარიყალა"),
            ),
        ],
        price:  0,
        status: QuestStatus::Published,
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref().map(Path::new))?;
    let lang = config.default_language;
    println!("=== tbilisi — geoquest demo ===");
    println!(
        "Geofence radius: {} km  |  Cluster radius: {} px  |  Language: {lang}",
        config.geofence_radius_km, config.cluster_radius_px
    );
    println!();

    // 1. Guide items.
    let items: Vec<GuideItem> = load_guide_items_reader(Cursor::new(GUIDE_CSV))?;
    println!("Loaded {} guide items", items.len());

    // 2. Map markers, re-clustered per container size.
    for (width, height) in CONTAINERS {
        let projection = LinearProjection::new(config.map_bounds, width, height);
        let clusters = cluster(&items, &projection, config.cluster_radius_px);
        println!("\nMap {width}×{height}: {} markers", clusters.len());
        for c in &clusters {
            let titles: Vec<&str> = c.items.iter().map(|i| i.title.get(lang).as_str()).collect();
            println!(
                "  [{:>2}] at ({:>6.1}, {:>6.1})  {}",
                c.len(),
                c.center.x,
                c.center.y,
                titles.join(", ")
            );
        }
    }

    // 3. Distance listing and the landing-page "nearest site" card.
    println!("\nBy distance from {START}:");
    for r in ranked(&items, START) {
        match r.distance_km {
            Some(d) => println!("  {:>6.2} km  {}", d, r.item.title.get(lang)),
            None => println!("       n/a  {}", r.item.title.get(lang)),
        }
    }
    let sites: Vec<&GuideItem> = items.iter().filter(|i| i.category == Category::Sites).collect();
    if let Some(near) = nearest(&sites, START) {
        println!(
            "Nearest site: {} ({:.2} km)",
            near.item.title.get(lang),
            near.distance_km.unwrap_or(f64::INFINITY)
        );
    }

    // 4. Walk with geofencing on.
    let source = ManualLocationSource::new();
    let mut watcher = GeofenceWatcher::new(source.clone());
    let entered: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    {
        let entered = Arc::clone(&entered);
        watcher.start_watching(items.clone(), config.geofence_radius_km, move |item: &GuideItem| {
            entered.lock().push(item.title.get(lang).clone());
        })?;
    }
    println!("\nWalking {} fixes...", WALK.len());
    source.emit(Err(LocationError::Timeout));
    for here in WALK {
        source.move_to(here);
    }
    watcher.stop_watching();
    for title in entered.lock().iter() {
        println!("  You are near: {title}");
    }

    // 5. Quest play.
    let quest = old_town_quest();
    quest.validate()?;
    let mut tracker = QuestTracker::new(MemoryProgressStore::new());
    let key = ProgressKey::new(quest.id.clone(), UserId::new("demo-user"));
    tracker.begin(&key, &quest)?;

    let answers = [
        (0, Submission::Text("Bridge of Peace ".into())),
        (1, Submission::Choice(0)),
        (1, Submission::Choice(1)),
        (2, Submission::Text("NARIKALA".into())),
    ];
    println!("\nQuest: {}", quest.title.get(lang));
    for (step, answer) in &answers {
        let outcome = tracker.submit(&key, &quest, *step, lang, answer)?;
        let verdict = if outcome.correct { "correct" } else { "wrong, try again" };
        let next = match outcome.next {
            Some(NextState::Continue(n)) => format!("next step {n}"),
            Some(NextState::Complete) => "quest complete".to_string(),
            None => String::new(),
        };
        println!(
            "  step {step}: {verdict:<16} {}/{} {next}",
            outcome.progress.correct_answers, outcome.progress.total_steps
        );
    }
    println!("Complete: {}", tracker.is_complete(&key, &quest)?);

    Ok(())
}
