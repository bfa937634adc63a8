// src/select/mod.rs
//! Weekly rotating selection of low-competition niches.
//!
//! Pure with respect to its inputs: the catalog is read-only and the week
//! number is an explicit parameter, so the same (catalog, filter, week)
//! triple always produces the same output. Only the host reads the clock.

mod rotation;

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{Niche, NicheCatalog, VolumeLabel};
use rotation::circular_window;

/// Sentinel filter value that keeps every category.
const ALL_CATEGORIES: &str = "all";

/// Anything at or above this many competing listings is not a niche.
const LOW_COMPETITION_MAX: u32 = 1000;
/// Boundary between the ultra-low and medium-low competition bands.
const ULTRA_LOW_MAX: u32 = 500;

/// Picks taken from the ultra-low band each week.
const ULTRA_WINDOW: usize = 15;
/// Weekly start-index stride through the ultra-low band.
const ULTRA_STRIDE: usize = 15;
/// Weekly start-index stride through the medium-low band.
const MEDIUM_STRIDE: usize = 5;
/// Hard cap on the combined result.
const MAX_PICKS: usize = 20;

/// One selected niche, shaped for the JSON response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NichePick {
    pub name: String,
    pub search_volume_text: VolumeLabel,
    pub amazon_results: u32,
    pub category: String,
}

impl From<&Niche> for NichePick {
    fn from(niche: &Niche) -> Self {
        Self {
            name: niche.name.clone(),
            search_volume_text: niche.volume_label,
            amazon_results: niche.amazon_results,
            category: niche.category.clone(),
        }
    }
}

/// Select up to 20 low-competition niches for `week` (ISO week number).
///
/// The filter is normalized before matching, so `" Fiction "` selects rows
/// stored as `fiction`. Empty intermediate results short-circuit to an empty
/// vec; this function has no failure mode.
pub fn select_niches(catalog: &NicheCatalog, category_filter: &str, week: u32) -> Vec<NichePick> {
    let filter = category_filter.trim().to_lowercase();

    let candidates: Vec<&Niche> = catalog
        .iter()
        .filter(|n| filter == ALL_CATEGORIES || n.category == filter)
        .collect();
    if candidates.is_empty() {
        debug!(category = %filter, "no rows for category");
        return Vec::new();
    }

    let low_competition: Vec<&Niche> = candidates
        .into_iter()
        .filter(|n| n.amazon_results < LOW_COMPETITION_MAX)
        .collect();
    if low_competition.is_empty() {
        debug!(category = %filter, "no low-competition rows for category");
        return Vec::new();
    }

    let (mut ultra_low, mut medium_low): (Vec<&Niche>, Vec<&Niche>) = low_competition
        .into_iter()
        .partition(|n| n.amazon_results < ULTRA_LOW_MAX);

    sort_band(&mut ultra_low);
    sort_band(&mut medium_low);

    // Week 1 starts at index 0; each following week strides forward, wrapping
    // over the band so the whole pool is cycled through over the year.
    let tick = week.saturating_sub(1) as usize;

    let mut picks: Vec<&Niche> = Vec::with_capacity(MAX_PICKS);
    if !ultra_low.is_empty() {
        let start = (tick * ULTRA_STRIDE) % ultra_low.len();
        picks.extend(circular_window(&ultra_low, start, ULTRA_WINDOW));
    }

    let remaining = MAX_PICKS.saturating_sub(picks.len());
    if remaining > 0 && !medium_low.is_empty() {
        let start = (tick * MEDIUM_STRIDE) % medium_low.len();
        picks.extend(circular_window(&medium_low, start, remaining));
    }
    picks.truncate(MAX_PICKS);

    info!(
        category = %filter,
        week,
        ultra_low = ultra_low.len(),
        medium_low = medium_low.len(),
        returned = picks.len(),
        "selected niches"
    );

    picks.into_iter().map(NichePick::from).collect()
}

/// Deterministic total order: search volume descending, name ascending.
fn sort_band(band: &mut [&Niche]) {
    band.sort_by(|a, b| {
        b.search_volume
            .total_cmp(&a.search_volume)
            .then_with(|| a.name.cmp(&b.name))
    });
}
