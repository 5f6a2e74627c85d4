// Run Manifest - JSON record of what a batch wrote, with SHA-256 per clip
// Contains no timestamps, so identical runs produce identical manifests

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::clip::{ClipConfig, PreparedClip};
use super::SkippedEntry;

pub const MANIFEST_FILENAME: &str = "manifest.json";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// One clip as recorded in the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestClip {
    pub index: usize,
    pub pitch: u8,
    pub effective_pitch: u8,
    pub label: String,
    pub filename: String,
    pub sha256: String,
}

impl ManifestClip {
    pub fn from_prepared(clip: &PreparedClip) -> Self {
        ManifestClip {
            index: clip.index,
            pitch: clip.pitch,
            effective_pitch: clip.effective_pitch,
            label: clip.label.clone(),
            filename: clip.filename.clone(),
            sha256: calculate_sha256(&clip.bytes),
        }
    }
}

/// Everything one instrument run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub instrument: String,
    pub config: ClipConfig,
    pub clips: Vec<ManifestClip>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedEntry>,
}

impl Manifest {
    pub fn new(
        instrument: &str,
        config: &ClipConfig,
        clips: &[ManifestClip],
        skipped: &[SkippedEntry],
    ) -> Self {
        Manifest {
            instrument: instrument.to_string(),
            config: config.clone(),
            clips: clips.to_vec(),
            skipped: skipped.to_vec(),
        }
    }
}

/// Calculate SHA256 hash of data
pub fn calculate_sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Write `manifest.json` into `output_dir` and return its path
pub fn write_manifest(manifest: &Manifest, output_dir: &Path) -> Result<PathBuf, ManifestError> {
    fs::create_dir_all(output_dir)?;

    let path = output_dir.join(MANIFEST_FILENAME);
    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');
    fs::write(&path, json)?;

    Ok(path)
}
