// src/catalog/types.rs
use serde::Serialize;

/// Coarse search-volume classification, derived once at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VolumeLabel {
    High,
    Low,
}

impl VolumeLabel {
    /// "High" strictly above 100 monthly searches, "Low" otherwise.
    pub fn from_volume(volume: f64) -> Self {
        if volume > 100.0 {
            VolumeLabel::High
        } else {
            VolumeLabel::Low
        }
    }
}

/// One row of the keyword table, fully normalized.
#[derive(Debug, Clone)]
pub struct Niche {
    /// The keyword phrase.
    pub name: String,
    /// Monthly search volume. Never negative; unparsable source values land at 0.
    pub search_volume: f64,
    /// Count of competing product listings. Never negative; unparsable → 0.
    pub amazon_results: u32,
    /// Derived from `search_volume`, fixed after load.
    pub volume_label: VolumeLabel,
    /// Lowercased, trimmed category label.
    pub category: String,
}

/// The in-memory keyword table. Built once, never mutated afterwards,
/// so it can be shared across request handlers without locking.
///
/// Rows keep source-file order; any ordering the selector needs is
/// imposed at query time, not stored here.
#[derive(Debug, Default)]
pub struct NicheCatalog {
    niches: Vec<Niche>,
}

impl NicheCatalog {
    pub fn new(niches: Vec<Niche>) -> Self {
        Self { niches }
    }

    pub fn len(&self) -> usize {
        self.niches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.niches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Niche> {
        self.niches.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_label_threshold_is_strict() {
        assert_eq!(VolumeLabel::from_volume(100.0), VolumeLabel::Low);
        assert_eq!(VolumeLabel::from_volume(101.0), VolumeLabel::High);
        assert_eq!(VolumeLabel::from_volume(0.0), VolumeLabel::Low);
        assert_eq!(VolumeLabel::from_volume(100.5), VolumeLabel::High);
    }
}
