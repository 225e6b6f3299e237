use std::path::Path;

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde_json::Value;
use walkdir::WalkDir;

use crate::{
    catalogue::Catalogue,
    types::{District, DistrictKey},
    weights::RawDistrictId,
};

/// Population from a `Pop20` property written as a number or a numeric string.
fn population_of(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().filter(|v| *v >= 0.0).map(|v| v.round() as u64)),
        Value::String(s) => {
            let digits: String = s.chars().filter(|c| *c != ',').collect();
            digits.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0).map(|v| v.round() as u64)
        }
        _ => None,
    }
}

fn district_id_of(value: &Value) -> Option<RawDistrictId> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()).map(RawDistrictId::Number),
        Value::String(s) if !s.trim().is_empty() => Some(RawDistrictId::Text(s.trim().to_string())),
        _ => None,
    }
}

/// Read catalogue districts from a GeoJSON FeatureCollection.
///
/// Each feature's properties carry `id`, an optional `Pop20`, and an optional
/// `StateAbbreviation` that falls back to `default_jurisdiction`. Geometry is ignored.
pub(crate) fn read_catalogue_geojson_bytes(bytes: &[u8], default_jurisdiction: Option<&str>) -> Result<Catalogue> {
    let value: Value = serde_json::from_slice(bytes).context("[io::geojson] Failed to parse GeoJSON bytes")?;
    let Some(features) = value["features"].as_array() else {
        bail!("[io::geojson] GeoJSON has no 'features' array");
    };

    let mut catalogue = Catalogue::new();
    for (index, feature) in features.iter().enumerate() {
        let properties = &feature["properties"];

        let jurisdiction = properties["StateAbbreviation"].as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or(default_jurisdiction);
        let Some(jurisdiction) = jurisdiction else {
            log::warn!("[io::geojson] feature {index} has no StateAbbreviation, skipping");
            continue;
        };
        let Some(id) = district_id_of(&properties["id"]) else {
            log::warn!("[io::geojson] feature {index} in {jurisdiction} has no id, skipping");
            continue;
        };

        let key = DistrictKey::new(jurisdiction, id.local_id(jurisdiction));
        let population = population_of(&properties["Pop20"]);
        if catalogue.insert(District::new(key.clone(), population)).is_some() {
            log::warn!("[io::geojson] duplicate district {key}, keeping the last feature");
        }
    }
    Ok(catalogue)
}

impl Catalogue {
    /// Read districts from one GeoJSON file.
    pub fn read_from_geojson(path: &Path, default_jurisdiction: Option<&str>) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("[io::geojson] Failed to read GeoJSON file: {}", path.display()))?;
        read_catalogue_geojson_bytes(&bytes, default_jurisdiction)
            .with_context(|| format!("[io::geojson] Failed to read districts from {}", path.display()))
    }

    /// Read every `*.geojson` file directly inside `dir`, in file name order.
    /// A name of the form `NYT XX.geojson` supplies `XX` as the default abbreviation.
    pub fn read_from_dir(dir: &Path) -> Result<Self> {
        super::fs::require_dir_exists(dir)?;
        let pattern = Regex::new(r"^NYT ([A-Za-z]{2})\.geojson$")?;

        let mut catalogue = Catalogue::new();
        let entries = WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name();
        for entry in entries {
            let entry = entry.with_context(|| format!("[io::geojson] Failed to list {}", dir.display()))?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "geojson") {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy();
            let default = pattern.captures(&file_name).map(|caps| caps[1].to_ascii_uppercase());

            let part = Self::read_from_geojson(path, default.as_deref())?;
            log::info!("[io::geojson] {} districts from {}", part.len(), path.display());
            catalogue.extend(part);
        }
        Ok(catalogue)
    }

    /// Read a single GeoJSON file or a directory of them.
    pub fn read_from_path(path: &Path) -> Result<Self> {
        if path.is_dir() { Self::read_from_dir(path) } else { Self::read_from_geojson(path, None) }
    }
}
