// Custom Tables - User-defined instrument layouts loaded from TOML
//
// [[instrument]]
// id = "playbox"
// name = "Playbox"
// duration_beats = 4.0
// notation = "ableton"      # or "standard"; applies to `note`
//
// [[instrument.entries]]
// note = "C3"               # key the clip plays with octave correction on
// label = "Verse 1"
//
// `pitch` sets the raw table pitch instead (before octave correction).

use serde::Deserialize;
use std::path::Path;
use super::types::{keyswitch_pitch, InstrumentTable, PatternEntry, PatternTable, TableError, TableResult};
use crate::notes::Notation;

#[derive(Debug, Deserialize)]
struct TableFile {
    #[serde(default, rename = "instrument")]
    instruments: Vec<InstrumentDef>,
}

#[derive(Debug, Deserialize)]
struct InstrumentDef {
    id: String,
    name: Option<String>,
    folder: Option<String>,
    octave_correction: Option<bool>,
    duration_beats: Option<f64>,
    #[serde(default)]
    notation: Notation,
    #[serde(default)]
    entries: Vec<EntryDef>,
}

#[derive(Debug, Deserialize)]
struct EntryDef {
    pitch: Option<u8>,
    note: Option<String>,
    label: String,
    duration_beats: Option<f64>,
}

impl EntryDef {
    fn resolve(self, default_beats: Option<f64>, notation: Notation) -> TableResult<PatternEntry> {
        let pitch = match (self.pitch, self.note.as_deref()) {
            (Some(pitch), None) => pitch,
            (None, Some(note)) => keyswitch_pitch(note, notation)?,
            (None, None) => return Err(TableError::MissingPitch { label: self.label }),
            (Some(_), Some(_)) => return Err(TableError::AmbiguousPitch { label: self.label }),
        };

        Ok(PatternEntry {
            pitch,
            label: self.label,
            duration_beats: self.duration_beats.or(default_beats),
        })
    }
}

impl InstrumentDef {
    fn resolve(self) -> TableResult<InstrumentTable> {
        let default_beats = self.duration_beats;
        let notation = self.notation;
        let entries = self
            .entries
            .into_iter()
            .map(|e| e.resolve(default_beats, notation))
            .collect::<TableResult<Vec<_>>>()?;

        let id = self.id.to_lowercase();
        let folder = self.folder.unwrap_or_else(|| format!("notes_{}", id));
        let name = self.name.unwrap_or_else(|| self.id.clone());

        let mut instrument = InstrumentTable::new(&id, &name, &folder, PatternTable::new(entries)?);
        if let Some(correction) = self.octave_correction {
            instrument.default_octave_correction = correction;
        }

        Ok(instrument)
    }
}

/// Parse instrument tables from TOML source
pub fn parse_tables(source: &str) -> TableResult<Vec<InstrumentTable>> {
    let file: TableFile = toml::from_str(source)?;
    file.instruments.into_iter().map(InstrumentDef::resolve).collect()
}

/// Read and parse a TOML table file
pub fn load_tables(path: &Path) -> TableResult<Vec<InstrumentTable>> {
    let source = std::fs::read_to_string(path)?;
    let tables = parse_tables(&source)?;
    log::debug!("Loaded {} instrument table(s) from {}", tables.len(), path.display());
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[[instrument]]
id = "Playbox"
name = "Playbox"
duration_beats = 4.0

[[instrument.entries]]
note = "D3"
label = "Verse 2"

[[instrument.entries]]
pitch = 48
label = "Verse 1"
duration_beats = 2.0

[[instrument]]
id = "trk-01"
folder = "trk"
octave_correction = false
notation = "standard"

[[instrument.entries]]
note = "C4"
label = "Kick"
"#;

    #[test]
    fn test_parse_tables() {
        let tables = parse_tables(SAMPLE).unwrap();
        assert_eq!(tables.len(), 2);

        let playbox = &tables[0];
        assert_eq!(playbox.id, "playbox");
        assert_eq!(playbox.folder, "notes_playbox");
        assert!(playbox.default_octave_correction);

        let entries = playbox.table.entries();
        assert_eq!(entries[0], PatternEntry::new(48, "Verse 1").with_duration(2.0));
        assert_eq!(entries[1], PatternEntry::new(74, "Verse 2").with_duration(4.0));

        let trk = &tables[1];
        assert_eq!(trk.name, "trk-01");
        assert_eq!(trk.folder, "trk");
        assert!(!trk.default_octave_correction);
        assert_eq!(trk.table.entries()[0], PatternEntry::new(72, "Kick"));
    }

    #[test]
    fn test_entry_needs_exactly_one_pitch_source() {
        let missing = r#"
[[instrument]]
id = "x"
[[instrument.entries]]
label = "Nothing"
"#;
        assert!(matches!(parse_tables(missing), Err(TableError::MissingPitch { .. })));

        let both = r#"
[[instrument]]
id = "x"
[[instrument.entries]]
pitch = 40
note = "C3"
label = "Both"
"#;
        assert!(matches!(parse_tables(both), Err(TableError::AmbiguousPitch { .. })));
    }

    #[test]
    fn test_duplicate_pitch_in_file() {
        let dup = r#"
[[instrument]]
id = "x"
[[instrument.entries]]
pitch = 72
label = "A"
[[instrument.entries]]
note = "C3"
label = "B"
"#;
        assert!(matches!(parse_tables(dup), Err(TableError::DuplicatePitch { pitch: 72, .. })));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(parse_tables("[[instrument]]\nid = 3"), Err(TableError::Parse(_))));
    }

    #[test]
    fn test_load_tables_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tables.toml");
        fs::write(&path, SAMPLE).unwrap();

        let tables = load_tables(&path).unwrap();
        assert_eq!(tables.len(), 2);

        let missing = load_tables(&temp_dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(TableError::Io(_))));
    }
}
