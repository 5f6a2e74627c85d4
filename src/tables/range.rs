// Note Range - Chromatic scan between two note names
// Every semitone becomes one entry named after the key it plays

use super::types::{keyswitch_pitch, InstrumentTable, PatternEntry, PatternTable, TableError, TableResult};
use crate::clip::OCTAVE_OFFSET;
use crate::notes::{note_name, Notation};

/// Default output folder for range scans
pub const RANGE_FOLDER: &str = "midi_files_range";

/// Track name for a scanned key, e.g. "Note C3" or "Note C4 (Standard)"
fn range_label(key: u8, notation: Notation) -> String {
    match notation {
        Notation::Ableton => format!("Note {}", note_name(key, notation)),
        Notation::Standard => format!("Note {} (Standard)", note_name(key, notation)),
    }
}

/// Build a table covering the keys `start..=end`
///
/// With octave correction on, each clip plays exactly the key in its label.
pub fn note_range(start: &str, end: &str, notation: Notation) -> TableResult<PatternTable> {
    let low = keyswitch_pitch(start, notation)?;
    let high = keyswitch_pitch(end, notation)?;

    if low > high {
        return Err(TableError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let entries = (low..=high)
        .map(|pitch| PatternEntry::new(pitch, range_label(pitch - OCTAVE_OFFSET, notation)))
        .collect();

    PatternTable::new(entries)
}

/// Wrap a range scan as an instrument so it runs through the same batch path
pub fn range_instrument(
    start: &str,
    end: &str,
    folder: &str,
    notation: Notation,
) -> TableResult<InstrumentTable> {
    let table = note_range(start, end, notation)?;
    let name = format!("Note range {} to {}", start.trim(), end.trim());
    Ok(InstrumentTable::new("range", &name, folder, table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::effective_pitch;

    #[test]
    fn test_full_octave_range() {
        let table = note_range("C0", "C1", Notation::Ableton).unwrap();

        assert_eq!(table.len(), 13);
        assert_eq!(table.entries()[0], PatternEntry::new(36, "Note C0"));
        assert_eq!(table.entries()[1].label, "Note C#0");
        assert_eq!(table.entries()[12], PatternEntry::new(48, "Note C1"));
    }

    #[test]
    fn test_corrected_range_plays_named_keys() {
        let table = note_range("C0", "C6", Notation::Ableton).unwrap();
        let first = effective_pitch(table.entries()[0].pitch, true).unwrap();
        let last = effective_pitch(table.entries()[table.len() - 1].pitch, true).unwrap();

        assert_eq!(first, 24);
        assert_eq!(last, 96);
    }

    #[test]
    fn test_standard_notation_range() {
        let table = note_range("C4", "C#4", Notation::Standard).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0], PatternEntry::new(72, "Note C4 (Standard)"));
        assert_eq!(effective_pitch(table.entries()[0].pitch, true).unwrap(), 60);
        assert_eq!(table.entries()[1].label, "Note C#4 (Standard)");
    }

    #[test]
    fn test_reversed_range() {
        let result = note_range("C6", "C0", Notation::Ableton);
        assert!(matches!(result, Err(TableError::InvalidRange { .. })));
    }

    #[test]
    fn test_range_above_correctable_keys() {
        let result = note_range("C7", "C8", Notation::Ableton);
        assert!(matches!(result, Err(TableError::Note(_))));
    }

    #[test]
    fn test_range_instrument() {
        let instrument = range_instrument("C0", "C6", RANGE_FOLDER, Notation::Ableton).unwrap();
        assert_eq!(instrument.id, "range");
        assert_eq!(instrument.folder, "midi_files_range");
        assert_eq!(instrument.table.len(), 73);
        assert!(instrument.default_octave_correction);
    }
}
