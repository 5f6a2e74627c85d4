// Clip Writer - Turns a pattern entry into a named clip file on disk
// Resolves pitch, label and filename, then writes atomically (temp file + rename)

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::tables::PatternEntry;
use super::config::ClipConfig;
use super::midi::clip_bytes;

/// Semitones removed by octave correction
pub const OCTAVE_OFFSET: u8 = 12;

#[derive(Debug, Error)]
pub enum ClipError {
    #[error("Pitch {pitch} maps to MIDI note {effective}, outside valid range (0-127)")]
    PitchRange { pitch: u8, effective: i16 },

    #[error("Label {0:?} has no characters usable in a filename")]
    InvalidLabel(String),

    #[error("Invalid note duration: {beats} beats")]
    InvalidDuration { beats: f64 },

    #[error("Sequence index must start at 1")]
    InvalidIndex,

    #[error("Invalid clip configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to write MIDI: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClipError {
    /// Errors that only affect one entry; a batch skips the entry and continues
    pub fn is_entry_error(&self) -> bool {
        matches!(
            self,
            ClipError::PitchRange { .. }
                | ClipError::InvalidLabel(_)
                | ClipError::InvalidDuration { .. }
        )
    }
}

pub type ClipResult<T> = Result<T, ClipError>;

/// A fully resolved clip, ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedClip {
    pub index: usize,
    pub pitch: u8,
    pub effective_pitch: u8,
    pub label: String,
    pub filename: String,
    pub duration_ticks: u32,
    pub bytes: Vec<u8>,
}

/// Pitch actually written to the file
pub fn effective_pitch(pitch: u8, octave_correction: bool) -> ClipResult<u8> {
    let effective = if octave_correction {
        pitch as i16 - i16::from(OCTAVE_OFFSET)
    } else {
        pitch as i16
    };

    if !(0..=127).contains(&effective) {
        return Err(ClipError::PitchRange { pitch, effective });
    }

    Ok(effective as u8)
}

/// Replace everything outside `[A-Za-z0-9_-]` with `_`
pub fn sanitize_label(label: &str) -> ClipResult<String> {
    let sanitized: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() {
        return Err(ClipError::InvalidLabel(label.to_string()));
    }

    Ok(sanitized)
}

/// `NN_Label.mid`, index zero-padded to at least two digits
pub fn clip_filename(index: usize, label: &str) -> ClipResult<String> {
    if index == 0 {
        return Err(ClipError::InvalidIndex);
    }

    Ok(format!("{:02}_{}.mid", index, sanitize_label(label)?))
}

/// Resolve and encode one entry without touching the filesystem
pub fn prepare_clip(
    entry: &PatternEntry,
    index: usize,
    config: &ClipConfig,
) -> ClipResult<PreparedClip> {
    let effective_pitch = effective_pitch(entry.pitch, config.octave_correction)?;
    let filename = clip_filename(index, &entry.label)?;
    let duration_ticks =
        config.duration_ticks(entry.duration_beats.unwrap_or(config.duration_beats))?;
    let bytes = clip_bytes(&entry.label, effective_pitch, duration_ticks, config)?;

    Ok(PreparedClip {
        index,
        pitch: entry.pitch,
        effective_pitch,
        label: entry.label.clone(),
        filename,
        duration_ticks,
        bytes,
    })
}

/// Write a prepared clip into `output_dir`, creating the directory if needed
pub fn store_clip(clip: &PreparedClip, output_dir: &Path) -> ClipResult<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let file_path = output_dir.join(&clip.filename);
    let temp_path = output_dir.join(format!(".{}.tmp", clip.filename));

    if let Err(e) = write_then_rename(&temp_path, &file_path, &clip.bytes) {
        if temp_path.exists() {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                log::warn!("Could not remove {}: {}", temp_path.display(), cleanup);
            }
        }
        return Err(e.into());
    }

    Ok(file_path)
}

fn write_then_rename(temp_path: &Path, file_path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);
    fs::rename(temp_path, file_path)
}

/// Write one entry as `output_dir/NN_Label.mid` and return its path
///
/// # Arguments
/// * `entry` - Pitch and label to encode
/// * `index` - 1-based sequence number for the filename prefix
/// * `output_dir` - Destination folder, created if absent
/// * `config` - Octave correction, tempo, velocity, resolution and duration
pub fn write_clip(
    entry: &PatternEntry,
    index: usize,
    output_dir: &Path,
    config: &ClipConfig,
) -> ClipResult<PathBuf> {
    config.validate()?;
    let clip = prepare_clip(entry, index, config)?;
    let path = store_clip(&clip, output_dir)?;

    log::info!(
        "Created {} (note {}, track name '{}')",
        clip.filename,
        clip.effective_pitch,
        clip.label
    );

    Ok(path)
}
