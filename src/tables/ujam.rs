// UJAM Instruments - Keyswitch layouts for the UJAM phrase players
// Each table maps a trigger key to the phrase or control it selects

use super::types::{InstrumentTable, PatternTable, TableResult};

/// Verses, intros, fills, choruses, endings and breakdowns from C3 to B4
const DRUMMER_NOTES: &[(&str, &str)] = &[
    ("C3", "Verse 1 C3"),
    ("C#3", "Intro 1 C#3"),
    ("D3", "Verse 2 D3"),
    ("D#3", "Intro 2 D#3"),
    ("E3", "Verse 3 E3"),
    ("F3", "Verse 4 F3"),
    ("F#3", "Fill 1 F#3"),
    ("G3", "Verse 5 G3"),
    ("G#3", "Fill 2 G#3"),
    ("A3", "Chorus 1 A3"),
    ("A#3", "Fill 3 A#3"),
    ("B3", "Chorus 2 B3"),
    ("C4", "Chorus 3 C4"),
    ("C#4", "Ending 1 C#4"),
    ("D4", "Chorus 4 D4"),
    ("D#4", "Ending 2 D#4"),
    ("E4", "Chorus 5 E4"),
    ("F4", "Special 1 F4"),
    ("F#4", "Breakdown 1 F#4"),
    ("G4", "Special 2 G4"),
    ("G#4", "Breakdown 2 G#4"),
    ("A4", "Special 3 A4"),
    ("A#4", "Breakdown 3 A#4"),
    ("B4", "Stop B4"),
];

pub fn drummer() -> TableResult<InstrumentTable> {
    let table = PatternTable::from_note_names(DRUMMER_NOTES, Some(4.0))?;
    Ok(InstrumentTable::new("drummer", "Virtual Drummer", "notes_drummer", table))
}

/// Silence, phrases, style variations and stop from C0 to B2
const V_BASSIST_NOTES: &[(&str, &str)] = &[
    ("C0", "Silence C0"),
    ("C#0", "Phrase 1 C#0"),
    ("D0", "Phrase 2 D0"),
    ("D#0", "Phrase 3 D#0"),
    ("E0", "Phrase 4 E0"),
    ("F0", "Phrase 5 F0"),
    ("F#0", "Phrase 6 F#0"),
    ("G0", "Phrase 7 G0"),
    ("G#0", "Phrase 8 G#0"),
    ("A0", "Phrase 9 A0"),
    ("A#0", "Phrase 10 A#0"),
    ("B0", "Phrase 11 B0"),
    ("C1", "Phrase 12 C1"),
    ("C#1", "Intro 1 C#1"),
    ("D1", "Phrase 13 D1"),
    ("D#1", "Intro 2 D#1"),
    ("E1", "Phrase 14 E1"),
    ("F1", "Phrase 15 F1"),
    ("F#1", "Fill 1 F#1"),
    ("G1", "Phrase 16 G1"),
    ("G#1", "Fill 2 G#1"),
    ("A1", "Phrase 17 A1"),
    ("A#1", "Fill 3 A#1"),
    ("B1", "Phrase 18 B1"),
    ("C2", "Style 1 C2"),
    ("C#2", "Style Intro 1 C#2"),
    ("D2", "Style 2 D2"),
    ("D#2", "Style Intro 2 D#2"),
    ("E2", "Style 3 E2"),
    ("F2", "Style 4 F2"),
    ("F#2", "Style Fill 1 F#2"),
    ("G2", "Style 5 G2"),
    ("G#2", "Style Fill 2 G#2"),
    ("A2", "Style 6 A2"),
    ("A#2", "Style Fill 3 A#2"),
    ("B2", "Stop B2"),
];

pub fn v_bassist() -> TableResult<InstrumentTable> {
    let table = PatternTable::from_note_names(V_BASSIST_NOTES, Some(4.0))?;
    Ok(InstrumentTable::new("v-bassist", "Virtual Bassist", "notes_v-bassist", table))
}

/// Silence, phrases, styles and stop from C0 to B2
const V_GUITARIST_NOTES: &[(&str, &str)] = &[
    ("C0", "Silence C0"),
    ("C#0", "Phrase 1 C#0"),
    ("D0", "Phrase 2 D0"),
    ("D#0", "Phrase 3 D#0"),
    ("E0", "Phrase 4 E0"),
    ("F0", "Phrase 5 F0"),
    ("F#0", "Phrase 6 F#0"),
    ("G0", "Phrase 7 G0"),
    ("G#0", "Phrase 8 G#0"),
    ("A0", "Phrase 9 A0"),
    ("A#0", "Phrase 10 A#0"),
    ("B0", "Phrase 11 B0"),
    ("C1", "Phrase 12 C1"),
    ("C#1", "Phrase 13 C#1"),
    ("D1", "Phrase 14 D1"),
    ("D#1", "Phrase 15 D#1"),
    ("E1", "Phrase 16 E1"),
    ("F1", "Phrase 17 F1"),
    ("F#1", "Phrase 18 F#1"),
    ("G1", "Phrase 19 G1"),
    ("G#1", "Phrase 20 G#1"),
    ("A1", "Phrase 21 A1"),
    ("A#1", "Phrase 22 A#1"),
    ("B1", "Phrase 23 B1"),
    ("C2", "Style 1 C2"),
    ("C#2", "Style 2 C#2"),
    ("D2", "Style 3 D2"),
    ("D#2", "Style 4 D#2"),
    ("E2", "Style 5 E2"),
    ("F2", "Style 6 F2"),
    ("F#2", "Style 7 F#2"),
    ("G2", "Style 8 G2"),
    ("G#2", "Style 9 G#2"),
    ("A2", "Style 10 A2"),
    ("A#2", "Style 11 A#2"),
    ("B2", "Stop B2"),
];

pub fn v_guitarist() -> TableResult<InstrumentTable> {
    let table = PatternTable::from_note_names(V_GUITARIST_NOTES, Some(4.0))?;
    Ok(InstrumentTable::new("v-guitarist", "Virtual Guitarist", "notes_v-guitarist", table))
}

/// Loops and stop from C2 to E2
const SUBCRAFT_NOTES: &[(&str, &str)] = &[
    ("C2", "Loop 1 C2"),
    ("C#2", "Loop 2 C#2"),
    ("D2", "Loop 3 D2"),
    ("D#2", "Stop D#2"),
    ("E2", "Loop 4 E2"),
];

pub fn subcraft() -> TableResult<InstrumentTable> {
    let table = PatternTable::from_note_names(SUBCRAFT_NOTES, Some(8.0))?;
    Ok(InstrumentTable::new("subcraft", "Subcraft", "notes_subcraft", table))
}

/// Loops and timing controls from C1 to B1
const USYNTH_NOTES: &[(&str, &str)] = &[
    ("C1", "Loop 1 C1"),
    ("C#1", "Mute C#1"),
    ("D1", "Loop 2 D1"),
    ("D#1", "Repeat D#1"),
    ("E1", "Loop 3 E1"),
    ("F1", "Loop 4 F1"),
    ("F#1", "Time x2 F#1"),
    ("G1", "Loop 5 G1"),
    ("G#1", "Time x3 G#1"),
    ("A1", "Loop 6 A1"),
    ("A#1", "Time x4 A#1"),
    ("B1", "Stop B1"),
];

pub fn usynth() -> TableResult<InstrumentTable> {
    let table = PatternTable::from_note_names(USYNTH_NOTES, Some(8.0))?;
    Ok(InstrumentTable::new("usynth", "Usynth", "notes_usynth", table))
}

/// Song parts on the black keys from C#1 to A#2
const BEATMAKER_NOTES: &[(&str, &str)] = &[
    ("C#1", "Intro C#1"),
    ("D#1", "Fill D#1"),
    ("F#1", "Verse 1 F#1"),
    ("G#1", "Verse 2 G#1"),
    ("A#1", "Fill A#1"),
    ("C#2", "Chorus 1 C#2"),
    ("D#2", "Chorus 2 D#2"),
    ("F#2", "Break F#2"),
    ("G#2", "Special G#2"),
    ("A#2", "Ending A#2"),
];

pub fn beatmaker() -> TableResult<InstrumentTable> {
    let table = PatternTable::from_note_names(BEATMAKER_NOTES, Some(4.0))?;
    Ok(InstrumentTable::new("beatmaker", "Beatmaker", "notes_beatmaker", table))
}

/// Phrases, chords and fills from C1 to B1
const PIANIST_NOTES: &[(&str, &str)] = &[
    ("C1", "Phrase 1 C1"),
    ("C#1", "Low Chord C#1"),
    ("D1", "Phrase 2 D1"),
    ("D#1", "High Chord D#1"),
    ("E1", "Phrase 3 E1"),
    ("F1", "Phrase 4 F1"),
    ("F#1", "Fill 1 F#1"),
    ("G1", "Phrase 5 G1"),
    ("G#1", "Fill 2 G#1"),
    ("A1", "Phrase 6 A1"),
    ("A#1", "Fill 3 for A#1"),
    ("B1", "Phrase 7 B1"),
];

pub fn pianist() -> TableResult<InstrumentTable> {
    let table = PatternTable::from_note_names(PIANIST_NOTES, Some(4.0))?;
    Ok(InstrumentTable::new("pianist", "Virtual Pianist", "notes_pianist", table))
}
