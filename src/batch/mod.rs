// Batch Generation - Walks a pattern table and writes one clip per entry
// Bad entries are skipped and reported; I/O failures stop the run

pub mod manifest;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::clip::{prepare_clip, store_clip, ClipConfig, ClipError};
use crate::tables::{InstrumentTable, PatternTable};

pub use manifest::{Manifest, ManifestClip, MANIFEST_FILENAME, write_manifest};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Invalid configuration: {0}")]
    Config(ClipError),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: ClipError,
    },

    #[error("Clip error: {0}")]
    Clip(ClipError),

    #[error("Manifest error: {0}")]
    Manifest(#[from] manifest::ManifestError),
}

/// A clip that made it to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrittenClip {
    pub index: usize,
    pub pitch: u8,
    pub effective_pitch: u8,
    pub label: String,
    pub path: PathBuf,
}

/// An entry that could not be turned into a clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub pitch: u8,
    pub label: String,
    pub reason: String,
}

/// Outcome of one table run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    pub written: Vec<WrittenClip>,
    pub skipped: Vec<SkippedEntry>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Write every entry of `table` into `output_dir`
///
/// Entries are taken in ascending pitch order. Entries that fail on their
/// own (pitch out of range after correction, unusable label, bad duration)
/// are skipped; the rest are numbered 1..N without gaps.
pub fn generate_table(
    table: &PatternTable,
    output_dir: &Path,
    config: &ClipConfig,
) -> Result<BatchReport, BatchError> {
    let (report, _) = run_table(table, output_dir, config)?;
    Ok(report)
}

/// Generate an instrument's clips into `output_root/<folder>`, optionally
/// with a manifest alongside
pub fn generate_instrument(
    instrument: &InstrumentTable,
    output_root: &Path,
    config: &ClipConfig,
    with_manifest: bool,
) -> Result<BatchReport, BatchError> {
    let output_dir = output_root.join(&instrument.folder);
    log::info!(
        "Generating {} ({} entries) into {}",
        instrument.name,
        instrument.table.len(),
        output_dir.display()
    );

    let (report, clips) = run_table(&instrument.table, &output_dir, config)?;

    if with_manifest {
        let manifest = Manifest::new(&instrument.id, config, &clips, &report.skipped);
        let path = write_manifest(&manifest, &output_dir)?;
        log::info!("Wrote manifest {}", path.display());
    }

    Ok(report)
}

fn run_table(
    table: &PatternTable,
    output_dir: &Path,
    config: &ClipConfig,
) -> Result<(BatchReport, Vec<ManifestClip>), BatchError> {
    config.validate().map_err(BatchError::Config)?;

    let mut report = BatchReport {
        output_dir: output_dir.to_path_buf(),
        ..Default::default()
    };
    let mut manifest_clips = Vec::new();

    // PatternTable keeps entries pitch-sorted
    for entry in table.iter() {
        let index = report.written.len() + 1;

        let clip = match prepare_clip(entry, index, config) {
            Ok(clip) => clip,
            Err(e) if e.is_entry_error() => {
                log::warn!("Skipping {:?} (pitch {}): {}", entry.label, entry.pitch, e);
                report.skipped.push(SkippedEntry {
                    pitch: entry.pitch,
                    label: entry.label.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
            Err(e) => return Err(BatchError::Clip(e)),
        };

        let path = store_clip(&clip, output_dir).map_err(|source| BatchError::Io {
            path: output_dir.join(&clip.filename),
            source,
        })?;

        log::info!(
            "Created {} (note {}, track name '{}')",
            clip.filename,
            clip.effective_pitch,
            clip.label
        );

        manifest_clips.push(ManifestClip::from_prepared(&clip));
        report.written.push(WrittenClip {
            index,
            pitch: clip.pitch,
            effective_pitch: clip.effective_pitch,
            label: clip.label,
            path,
        });
    }

    log::info!(
        "Created {} clip(s) in {}, skipped {}",
        report.written.len(),
        output_dir.display(),
        report.skipped.len()
    );

    Ok((report, manifest_clips))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::midi::readback::read_clip;
    use crate::tables::{InstrumentCatalog, PatternEntry};
    use std::fs;
    use tempfile::TempDir;

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    fn is_clip_filename(name: &str) -> bool {
        let Some(stem) = name.strip_suffix(".mid") else {
            return false;
        };
        let Some((digits, label)) = stem.split_once('_') else {
            return false;
        };
        digits.len() >= 2
            && digits.chars().all(|c| c.is_ascii_digit())
            && !label.is_empty()
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    #[test]
    fn test_numbering_follows_pitch_order() {
        let temp_dir = TempDir::new().unwrap();
        let table = PatternTable::new(vec![
            PatternEntry::new(50, "Chorus"),
            PatternEntry::new(25, "Intro"),
            PatternEntry::new(40, "Verse 1"),
        ])
        .unwrap();

        let report = generate_table(&table, temp_dir.path(), &ClipConfig::default()).unwrap();

        assert!(report.is_complete());
        assert_eq!(
            file_names(temp_dir.path()),
            vec!["01_Intro.mid", "02_Verse_1.mid", "03_Chorus.mid"]
        );
        let indices: Vec<usize> = report.written.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_bad_entries_are_skipped_without_gaps() {
        let temp_dir = TempDir::new().unwrap();
        let table = PatternTable::new(vec![
            PatternEntry::new(5, "Too Low"),
            PatternEntry::new(20, "First"),
            PatternEntry::new(30, ""),
            PatternEntry::new(40, "Second"),
            PatternEntry::new(45, "Broken").with_duration(-1.0),
        ])
        .unwrap();

        let report = generate_table(&table, temp_dir.path(), &ClipConfig::default()).unwrap();

        assert_eq!(report.written.len(), 2);
        assert_eq!(report.skipped.len(), 3);
        assert!(!report.is_complete());
        assert_eq!(report.skipped[0].label, "Too Low");
        assert_eq!(report.skipped[1].pitch, 30);
        assert_eq!(report.skipped[2].label, "Broken");
        assert_eq!(file_names(temp_dir.path()), vec!["01_First.mid", "02_Second.mid"]);
    }

    #[test]
    fn test_invalid_config_fails_before_writing() {
        let temp_dir = TempDir::new().unwrap();
        let table = PatternTable::new(vec![PatternEntry::new(40, "A")]).unwrap();
        let config = ClipConfig { tempo_bpm: 0.0, ..Default::default() };

        let result = generate_table(&table, temp_dir.path(), &config);
        assert!(matches!(result, Err(BatchError::Config(ClipError::InvalidConfig(_)))));
        assert!(file_names(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_io_error_stops_the_run() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocked");
        fs::write(&blocker, b"file").unwrap();

        let table = PatternTable::new(vec![
            PatternEntry::new(40, "A"),
            PatternEntry::new(41, "B"),
        ])
        .unwrap();

        let result = generate_table(&table, &blocker, &ClipConfig::default());
        match result {
            Err(BatchError::Io { path, source }) => {
                assert_eq!(path, blocker.join("01_A.mid"));
                assert!(matches!(source, ClipError::Io(_)));
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_every_builtin_instrument() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = InstrumentCatalog::builtin().unwrap();

        for instrument in catalog.iter() {
            let config = ClipConfig {
                octave_correction: instrument.default_octave_correction,
                ..Default::default()
            };
            let report = generate_instrument(instrument, temp_dir.path(), &config, false).unwrap();

            assert!(report.is_complete(), "{} skipped entries", instrument.id);
            assert_eq!(report.written.len(), instrument.table.len());

            let names = file_names(&temp_dir.path().join(&instrument.folder));
            assert_eq!(names.len(), instrument.table.len());
            assert!(names.iter().all(|n| is_clip_filename(n)), "{:?}", names);

            // Sorted names match index order, and notes rise with the index
            let mut last_note = None;
            for (i, clip) in report.written.iter().enumerate() {
                assert_eq!(clip.index, i + 1);
                let summary = read_clip(&fs::read(&clip.path).unwrap());
                assert_eq!(summary.track_name.as_deref(), Some(clip.label.as_str()));
                assert!(summary.note > last_note);
                last_note = summary.note;
            }
        }
    }

    #[test]
    fn test_drummer_first_clip() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = InstrumentCatalog::builtin().unwrap();
        let drummer = catalog.get("drummer").unwrap();

        let report =
            generate_instrument(drummer, temp_dir.path(), &ClipConfig::default(), false).unwrap();
        let first = &report.written[0];

        assert_eq!(first.path, temp_dir.path().join("notes_drummer").join("01_Verse_1_C3.mid"));
        let summary = read_clip(&fs::read(&first.path).unwrap());
        assert_eq!(summary.note, Some(60));
        assert_eq!(summary.note_off_tick, Some(1920));
        assert_eq!(summary.track_name.as_deref(), Some("Verse 1 C3"));
    }

    #[test]
    fn test_first_clip_plays_labelled_key() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = InstrumentCatalog::builtin().unwrap();

        for (id, label, note) in [("subcraft", "Loop 1 C2", 48), ("drumlab", "Groove 1 C-1", 12)] {
            let instrument = catalog.get(id).unwrap();
            let config = ClipConfig {
                octave_correction: instrument.default_octave_correction,
                ..Default::default()
            };
            let report = generate_instrument(instrument, temp_dir.path(), &config, false).unwrap();

            let summary = read_clip(&fs::read(&report.written[0].path).unwrap());
            assert_eq!(summary.track_name.as_deref(), Some(label));
            assert_eq!(summary.note, Some(note), "{}", id);
        }
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = InstrumentCatalog::builtin().unwrap();
        let subcraft = catalog.get("subcraft").unwrap();
        let config = ClipConfig::default();

        let first = generate_instrument(subcraft, temp_dir.path(), &config, true).unwrap();
        let snapshot: Vec<Vec<u8>> = first.written.iter().map(|c| fs::read(&c.path).unwrap()).collect();
        let manifest_path = temp_dir.path().join("notes_subcraft").join(MANIFEST_FILENAME);
        let manifest_before = fs::read(&manifest_path).unwrap();

        let second = generate_instrument(subcraft, temp_dir.path(), &config, true).unwrap();
        let again: Vec<Vec<u8>> = second.written.iter().map(|c| fs::read(&c.path).unwrap()).collect();

        assert_eq!(snapshot, again);
        assert_eq!(manifest_before, fs::read(&manifest_path).unwrap());
    }
}
