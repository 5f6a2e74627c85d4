// Native Instruments - Pattern grids for the NI phrase players

use super::types::{InstrumentTable, PatternTable, TableResult};

/// Grooves from C-1 to B-1
const DRUMLAB_NOTES: &[(&str, &str)] = &[
    ("C-1", "Groove 1 C-1"),
    ("C#-1", "Groove 2 C#-1"),
    ("D-1", "Groove 3 D-1"),
    ("D#-1", "Groove 4 D#-1"),
    ("E-1", "Groove 5 E-1"),
    ("F-1", "Groove 6 F-1"),
    ("F#-1", "Groove 7 F#-1"),
    ("G-1", "Groove 8 G-1"),
    ("G#-1", "Groove 9 G#-1"),
    ("A-1", "Groove 10 A-1"),
    ("A#-1", "Groove 11 A#-1"),
    ("B-1", "Groove 12 B-1"),
];

pub fn drumlab() -> TableResult<InstrumentTable> {
    let table = PatternTable::from_note_names(DRUMLAB_NOTES, Some(4.0))?;
    Ok(InstrumentTable::new("drumlab", "Drumlab", "notes_drumlab", table))
}

/// Patterns from C1 to B1, phrases from C2 to B2
const SPOTLIGHT_NOTES: &[(&str, &str)] = &[
    ("C1", "Pattern 1 C1"),
    ("C#1", "Pattern 2 C#1"),
    ("D1", "Pattern 3 D1"),
    ("D#1", "Pattern 4 D#1"),
    ("E1", "Pattern 5 E1"),
    ("F1", "Pattern 6 F1"),
    ("F#1", "Pattern 7 F#1"),
    ("G1", "Pattern 8 G1"),
    ("G#1", "Pattern 9 G#1"),
    ("A1", "Pattern 10 A1"),
    ("A#1", "Pattern 11 A#1"),
    ("B1", "Pattern 12 B1"),
    ("C2", "Phrase 1 C2"),
    ("C#2", "Phrase 2 C#2"),
    ("D2", "Phrase 3 D2"),
    ("D#2", "Phrase 4 D#2"),
    ("E2", "Phrase 5 E2"),
    ("F2", "Phrase 6 F2"),
    ("F#2", "Phrase 7 F#2"),
    ("G2", "Phrase 8 G2"),
    ("G#2", "Phrase 9 G#2"),
    ("A2", "Phrase 10 A2"),
    ("A#2", "Phrase 11 A#2"),
    ("B2", "Phrase 12 B2"),
];

pub fn spotlight() -> TableResult<InstrumentTable> {
    let table = PatternTable::from_note_names(SPOTLIGHT_NOTES, Some(4.0))?;
    Ok(InstrumentTable::new("spotlight", "Spotlight", "notes_spotlight", table))
}

/// Phrases on the white keys from C1 to A1
const SESSION_HORNS_NOTES: &[(&str, &str)] = &[
    ("C1", "Phrase 1 C1"),
    ("D1", "Phrase 2 D1"),
    ("E1", "Phrase 3 E1"),
    ("F1", "Phrase 4 F1"),
    ("G1", "Phrase 5 G1"),
    ("A1", "Phrase 6 A1"),
];

pub fn session_horns() -> TableResult<InstrumentTable> {
    let table = PatternTable::from_note_names(SESSION_HORNS_NOTES, Some(4.0))?;
    Ok(InstrumentTable::new("s-horns", "Session Horns", "notes_s-horns", table))
}
