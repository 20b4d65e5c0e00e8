//! CSV guide-item loader.
//!
//! # CSV format
//!
//! One row per guide entry, as exported by the content admin panel:
//!
//! ```csv
//! id,category,lat,lng,title_en,title_ru,title_ge
//! nar-fort,sites,41.6879,44.8075,Narikala Fortress,Крепость Нарикала,ნარიყალა
//! metekhi,sites,41.6908,44.8099,Metekhi Church,Метехи,მეტეხი
//! atm-1,services,,,ATM (mobile),Банкомат,ბანკომატი
//! ```
//!
//! **`category`** is one of `sites`, `restaurants`, `services`.
//!
//! **`lat`/`lng`** may both be empty, meaning the item has no location on
//! record.  It is still loaded (and ranks last in distance listings).
//! Exactly one empty or a value outside WGS-84 ranges is a parse error.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use gq_core::{Category, Coordinate, GuideItem, ItemId, Localized};

use crate::SpatialError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct GuideItemRecord {
    id:       String,
    category: String,
    lat:      Option<f64>,
    lng:      Option<f64>,
    title_en: String,
    title_ru: String,
    title_ge: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load guide items from a CSV file, in file order.
pub fn load_guide_items_csv(path: &Path) -> Result<Vec<GuideItem>, SpatialError> {
    let file = std::fs::File::open(path)?;
    load_guide_items_reader(file)
}

/// Like [`load_guide_items_csv`] but accepts any `Read` source.
pub fn load_guide_items_reader<R: Read>(reader: R) -> Result<Vec<GuideItem>, SpatialError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut items = Vec::new();

    for (row, result) in csv_reader.deserialize::<GuideItemRecord>().enumerate() {
        let r = result.map_err(|e| SpatialError::Parse(e.to_string()))?;
        let location = parse_location(r.lat, r.lng)
            .map_err(|msg| SpatialError::Parse(format!("row {}: {msg}", row + 1)))?;
        let category = parse_category(&r.category)
            .map_err(|msg| SpatialError::Parse(format!("row {}: {msg}", row + 1)))?;

        items.push(GuideItem {
            id:       ItemId::new(r.id),
            category,
            title:    Localized::new(r.title_en, r.title_ru, r.title_ge),
            location,
        });
    }

    tracing::debug!(count = items.len(), "loaded guide items");
    Ok(items)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_location(lat: Option<f64>, lng: Option<f64>) -> Result<Option<Coordinate>, String> {
    match (lat, lng) {
        (None, None) => Ok(None),
        (Some(lat), Some(lng)) => Coordinate::try_new(lat, lng).map(Some).map_err(|e| e.to_string()),
        _ => Err("lat and lng must both be set or both be empty".to_owned()),
    }
}

fn parse_category(s: &str) -> Result<Category, String> {
    match s.trim() {
        "sites" => Ok(Category::Sites),
        "restaurants" => Ok(Category::Restaurants),
        "services" => Ok(Category::Services),
        other => Err(format!(
            "invalid category {other:?}: expected \"sites\", \"restaurants\", or \"services\""
        )),
    }
}
