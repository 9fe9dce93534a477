//! Reading pose results exported by the inference side.
//!
//! A file holds one result, `{"landmarks": [[{"x": .., "y": .., "z": ..}, ...]]}`,
//! or an array of them for a recorded sequence.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::topology::LANDMARK_COUNT;
use crate::types::PoseResult;

#[derive(Deserialize)]
#[serde(untagged)]
enum ResultFile {
    Sequence(Vec<PoseResult>),
    Single(PoseResult),
}

pub fn parse_results(json: &str) -> Result<Vec<PoseResult>> {
    let results = match serde_json::from_str::<ResultFile>(json)? {
        ResultFile::Sequence(results) => results,
        ResultFile::Single(result) => vec![result],
    };
    Ok(results)
}

/// Bodies whose landmark count differs from the 33-point model. They still load; rendering
/// decides whether they are usable.
pub fn irregular_sets(results: &[PoseResult]) -> usize {
    results
        .iter()
        .flat_map(|r| r.landmarks.iter())
        .filter(|set| set.len() != LANDMARK_COUNT)
        .count()
}

pub fn load_results(path: &Path) -> Result<Vec<PoseResult>> {
    let content = fs::read_to_string(path)?;
    let results = parse_results(&content)?;
    log::info!("Loaded {} pose results from {}", results.len(), path.display());
    let irregular = irregular_sets(&results);
    if irregular > 0 {
        log::warn!("{} landmark sets do not have {} points", irregular, LANDMARK_COUNT);
    }
    Ok(results)
}
