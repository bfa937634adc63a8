// src/catalog/load.rs
use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use tracing::{error, info, warn};

use super::parse::{normalize_category, parse_competing_products, parse_search_volume};
use super::types::{Niche, NicheCatalog, VolumeLabel};

/// Source column headers, matched exactly.
const COL_NAME: &str = "Keyword Phrase";
const COL_SEARCH_VOLUME: &str = "Search Volume";
const COL_COMPETING: &str = "Competing Products";
const COL_CATEGORY: &str = "category";

/// Load and normalize the keyword CSV. Runs once at startup.
///
/// Fails soft: a missing file, unreadable CSV or absent required column is
/// logged and yields an empty catalog, so the host stays up in a degraded
/// state instead of refusing to start.
pub fn load_catalog(path: &Path) -> NicheCatalog {
    match read_catalog(path) {
        Ok(catalog) => {
            info!(path = %path.display(), rows = catalog.len(), "catalog loaded");
            catalog
        }
        Err(err) => {
            error!(path = %path.display(), "catalog load failed: {err:#}");
            NicheCatalog::default()
        }
    }
}

fn read_catalog(path: &Path) -> Result<NicheCatalog> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening keyword CSV `{}`", path.display()))?;

    let headers = rdr.headers().context("reading CSV header row")?.clone();
    let col = |name: &str| headers.iter().position(|h| h == name);

    let required = [COL_NAME, COL_SEARCH_VOLUME, COL_COMPETING, COL_CATEGORY];
    let missing: Vec<&str> = required
        .iter()
        .filter(|name| col(name).is_none())
        .copied()
        .collect();
    if !missing.is_empty() {
        bail!("keyword CSV is missing required columns: {}", missing.join(", "));
    }

    // Presence checked above.
    let name_idx = col(COL_NAME).unwrap();
    let volume_idx = col(COL_SEARCH_VOLUME).unwrap();
    let competing_idx = col(COL_COMPETING).unwrap();
    let category_idx = col(COL_CATEGORY).unwrap();

    let mut niches = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("CSV parse error at data row {row}"))?;

        let name = record.get(name_idx).unwrap_or("").trim();
        if name.is_empty() {
            warn!(row, "skipping row with empty keyword phrase");
            continue;
        }

        let search_volume = parse_search_volume(record.get(volume_idx));
        niches.push(Niche {
            name: name.to_string(),
            search_volume,
            amazon_results: parse_competing_products(record.get(competing_idx)),
            volume_label: VolumeLabel::from_volume(search_volume),
            category: normalize_category(record.get(category_idx).unwrap_or("")),
        });
    }

    Ok(NicheCatalog::new(niches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(content.as_bytes()).unwrap();
        tmp.flush().unwrap();
        tmp
    }

    #[test]
    fn loads_and_normalizes_rows() {
        let tmp = write_csv(
            "Keyword Phrase,Search Volume,Competing Products,category,Extra\n\
             dragon coloring book,\"1,250\",\">1,000\", Fiction ,ignored\n\
             dot grid journal,87,412,JOURNALS,ignored\n",
        );
        let catalog = load_catalog(tmp.path());
        assert_eq!(catalog.len(), 2);

        let rows: Vec<&Niche> = catalog.iter().collect();
        assert_eq!(rows[0].name, "dragon coloring book");
        assert_eq!(rows[0].search_volume, 1250.0);
        assert_eq!(rows[0].amazon_results, 1000);
        assert_eq!(rows[0].volume_label, VolumeLabel::High);
        assert_eq!(rows[0].category, "fiction");

        assert_eq!(rows[1].amazon_results, 412);
        assert_eq!(rows[1].volume_label, VolumeLabel::Low);
        assert_eq!(rows[1].category, "journals");
    }

    #[test]
    fn numeric_fields_never_go_negative() {
        let tmp = write_csv(
            "Keyword Phrase,Search Volume,Competing Products,category\n\
             a,-50,-3,misc\n\
             b,n/a,n/a,misc\n\
             c,,,misc\n",
        );
        let catalog = load_catalog(tmp.path());
        assert_eq!(catalog.len(), 3);
        for niche in catalog.iter() {
            assert!(niche.search_volume >= 0.0);
            // amazon_results is unsigned; just confirm the fallback applied
            assert_eq!(niche.amazon_results, 0);
        }
    }

    #[test]
    fn missing_file_yields_empty_catalog() {
        let catalog = load_catalog(Path::new("/nonexistent/keywords.csv"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_required_column_yields_empty_catalog() {
        let tmp = write_csv(
            "Keyword Phrase,Search Volume,category\n\
             no competing column,10,misc\n",
        );
        let catalog = load_catalog(tmp.path());
        assert!(catalog.is_empty());
    }

    #[test]
    fn rows_without_a_keyword_are_skipped() {
        let tmp = write_csv(
            "Keyword Phrase,Search Volume,Competing Products,category\n\
             ,100,100,misc\n\
             kept,100,100,misc\n",
        );
        let catalog = load_catalog(tmp.path());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.iter().next().unwrap().name, "kept");
    }
}
