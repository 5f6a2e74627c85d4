// Pattern Table Types
// Entries, tables and instrument definitions fed to the clip serializer

use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::clip::OCTAVE_OFFSET;
use crate::notes::{parse_note_name, Notation, NoteError};

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("Duplicate pitch {pitch} in table ({first:?} and {second:?})")]
    DuplicatePitch {
        pitch: u8,
        first: String,
        second: String,
    },

    #[error("Note error: {0}")]
    Note(#[from] NoteError),

    #[error("Invalid note range: {start} is above {end}")]
    InvalidRange { start: String, end: String },

    #[error("Entry {label:?} needs either `pitch` or `note`")]
    MissingPitch { label: String },

    #[error("Entry {label:?} sets both `pitch` and `note`")]
    AmbiguousPitch { label: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Table file parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type TableResult<T> = Result<T, TableError>;

/// Table pitch for a named key
///
/// Table pitches sit one octave above the key they trigger, so the clip
/// written with octave correction on plays exactly the named key.
pub fn keyswitch_pitch(name: &str, notation: Notation) -> TableResult<u8> {
    let key = parse_note_name(name, notation)?;
    key.checked_add(OCTAVE_OFFSET).ok_or_else(|| {
        TableError::Note(NoteError::OutOfRange {
            name: name.trim().to_string(),
            pitch: i32::from(key) + i32::from(OCTAVE_OFFSET),
        })
    })
}

/// One row of a pattern table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternEntry {
    /// MIDI pitch before octave correction
    pub pitch: u8,

    /// Clip name, used for the track name and the filename
    pub label: String,

    /// Note length in beats; the run's default applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_beats: Option<f64>,
}

impl PatternEntry {
    pub fn new(pitch: u8, label: impl Into<String>) -> Self {
        PatternEntry {
            pitch,
            label: label.into(),
            duration_beats: None,
        }
    }

    pub fn with_duration(mut self, beats: f64) -> Self {
        self.duration_beats = Some(beats);
        self
    }
}

/// A pitch-sorted table of entries with unique pitches
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
}

impl PatternTable {
    /// Build a table, sorting entries ascending by pitch
    ///
    /// Fails if two entries share a pitch.
    pub fn new(mut entries: Vec<PatternEntry>) -> TableResult<Self> {
        entries.sort_by_key(|e| e.pitch);

        for pair in entries.windows(2) {
            if pair[0].pitch == pair[1].pitch {
                return Err(TableError::DuplicatePitch {
                    pitch: pair[0].pitch,
                    first: pair[0].label.clone(),
                    second: pair[1].label.clone(),
                });
            }
        }

        Ok(PatternTable { entries })
    }

    /// Build a table from `(Ableton note name, label)` rows sharing one duration
    pub fn from_note_names(
        rows: &[(&str, &str)],
        duration_beats: Option<f64>,
    ) -> TableResult<Self> {
        let entries = rows
            .iter()
            .map(|(note, label)| {
                let entry = PatternEntry::new(keyswitch_pitch(note, Notation::Ableton)?, *label);
                Ok(match duration_beats {
                    Some(beats) => entry.with_duration(beats),
                    None => entry,
                })
            })
            .collect::<TableResult<Vec<_>>>()?;

        PatternTable::new(entries)
    }

    /// Entries in ascending pitch order
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A named instrument layout and where its clips go
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstrumentTable {
    /// Lookup key, lowercase (e.g. "drummer")
    pub id: String,

    /// Display name (e.g. "UJAM Virtual Drummer")
    pub name: String,

    /// Output folder name under the output root
    pub folder: String,

    /// Whether clips are shifted down an octave unless the run says otherwise
    pub default_octave_correction: bool,

    pub table: PatternTable,
}

impl InstrumentTable {
    pub fn new(id: &str, name: &str, folder: &str, table: PatternTable) -> Self {
        InstrumentTable {
            id: id.to_lowercase(),
            name: name.to_string(),
            folder: folder.to_string(),
            default_octave_correction: true,
            table,
        }
    }

    /// Create a summary for listing
    pub fn summary(&self) -> InstrumentSummary {
        InstrumentSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            folder: self.folder.clone(),
            entry_count: self.table.len(),
            octave_correction: self.default_octave_correction,
        }
    }
}

/// Instrument summary for listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentSummary {
    pub id: String,
    pub name: String,
    pub folder: String,
    pub entry_count: usize,
    pub octave_correction: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sorted_by_pitch() {
        let table = PatternTable::new(vec![
            PatternEntry::new(40, "High"),
            PatternEntry::new(20, "Low"),
            PatternEntry::new(30, "Mid"),
        ])
        .unwrap();

        let labels: Vec<&str> = table.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Low", "Mid", "High"]);
    }

    #[test]
    fn test_duplicate_pitch_rejected() {
        let result = PatternTable::new(vec![
            PatternEntry::new(36, "Verse 1"),
            PatternEntry::new(36, "Verse 2"),
        ]);

        match result {
            Err(TableError::DuplicatePitch { pitch, first, second }) => {
                assert_eq!(pitch, 36);
                assert_eq!(first, "Verse 1");
                assert_eq!(second, "Verse 2");
            }
            other => panic!("Expected DuplicatePitch, got {:?}", other),
        }
    }

    #[test]
    fn test_from_note_names() {
        let table = PatternTable::from_note_names(
            &[("D3", "Verse 2"), ("C3", "Verse 1")],
            Some(4.0),
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0], PatternEntry::new(72, "Verse 1").with_duration(4.0));
        assert_eq!(table.entries()[1].pitch, 74);
    }

    #[test]
    fn test_keyswitch_pitch_lands_on_named_key() {
        assert_eq!(keyswitch_pitch("C3", Notation::Ableton).unwrap(), 72);
        assert_eq!(keyswitch_pitch("C-2", Notation::Ableton).unwrap(), 12);
        assert_eq!(keyswitch_pitch("C4", Notation::Standard).unwrap(), 72);
        assert_eq!(keyswitch_pitch("G7", Notation::Ableton).unwrap(), 127);

        match keyswitch_pitch("G#7", Notation::Ableton) {
            Err(TableError::Note(NoteError::OutOfRange { pitch, .. })) => assert_eq!(pitch, 128),
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_from_note_names_bad_note() {
        let result = PatternTable::from_note_names(&[("X3", "Broken")], None);
        assert!(matches!(result, Err(TableError::Note(NoteError::InvalidFormat(_)))));
    }

    #[test]
    fn test_instrument_summary() {
        let table = PatternTable::new(vec![PatternEntry::new(60, "Only")]).unwrap();
        let mut instrument = InstrumentTable::new("Test", "Test Instrument", "notes_test", table);
        instrument.default_octave_correction = false;

        let summary = instrument.summary();
        assert_eq!(summary.id, "test");
        assert_eq!(summary.entry_count, 1);
        assert!(!summary.octave_correction);
    }
}
