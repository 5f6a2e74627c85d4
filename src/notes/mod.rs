// Notes Module
// Note-name notation and pitch helpers shared by the tables and the CLI

pub mod names;

// Re-export main types
pub use names::{
    NoteError,
    Notation,
    NOTE_NAMES,
    parse_note_name,
    note_name,
    midi_to_frequency,
};
