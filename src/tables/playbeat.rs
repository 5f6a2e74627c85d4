// Audiomodern Playbeat - Original pattern plus remix slots

use super::types::{InstrumentTable, PatternTable, TableResult};

/// Original at C3, remixes from C#3 to B4
const PLAYBEAT_NOTES: &[(&str, &str)] = &[
    ("C3", "Original C3"),
    ("C#3", "Remix 1 C#3"),
    ("D3", "Remix 2 D3"),
    ("D#3", "Remix 3 D#3"),
    ("E3", "Remix 4 E3"),
    ("F3", "Remix 5 F3"),
    ("F#3", "Remix 6 F#3"),
    ("G3", "Remix 7 G3"),
    ("G#3", "Remix 8 G#3"),
    ("A3", "Remix 9 A3"),
    ("A#3", "Remix 10 A#3"),
    ("B3", "Remix 11 B3"),
    ("C4", "Remix 12 C4"),
    ("C#4", "Remix 13 C#4"),
    ("D4", "Remix 14 D4"),
    ("D#4", "Remix 15 D#4"),
    ("E4", "Remix 16 E4"),
    ("F4", "Remix 17 F4"),
    ("F#4", "Remix 18 F#4"),
    ("G4", "Remix 19 G4"),
    ("G#4", "Remix 20 G#4"),
    ("A4", "Remix 21 A4"),
    ("A#4", "Remix 22 A#4"),
    ("B4", "Remix 23 B4"),
];

pub fn playbeat() -> TableResult<InstrumentTable> {
    let table = PatternTable::from_note_names(PLAYBEAT_NOTES, Some(16.0))?;
    Ok(InstrumentTable::new("playbeat", "Playbeat", "notes_playbeat", table))
}
