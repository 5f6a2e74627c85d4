// Note Names - Ableton (C-2 = 0, C3 = 60) and standard (C-1 = 0, C4 = 60) notation
// Parses "C#3"-style names into pitch numbers and back

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pitch class names in semitone order
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error("Invalid note name format: {0:?} (expected e.g. 'C3', 'C#4', 'A-1')")]
    InvalidFormat(String),

    #[error("Note {name} results in MIDI {pitch}, which is outside valid range (0-127)")]
    OutOfRange { name: String, pitch: i32 },
}

/// Octave numbering used by a note name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Ableton Live piano roll: C-2 = 0, C3 = 60
    #[default]
    Ableton,
    /// Scientific pitch notation: C-1 = 0, C4 = 60
    Standard,
}

impl Notation {
    /// Octave number that maps to pitch 0 is `-octave_shift()`
    fn octave_shift(self) -> i32 {
        match self {
            Notation::Ableton => 2,
            Notation::Standard => 1,
        }
    }
}

/// Parse a note name into a MIDI pitch
///
/// Accepts a letter `A`-`G`, an optional `#`, and a (possibly negative)
/// octave number. The pitch is `(octave + shift) * 12 + pitch_class`, with a
/// shift of 2 for Ableton names and 1 for standard names.
pub fn parse_note_name(name: &str, notation: Notation) -> Result<u8, NoteError> {
    let invalid = || NoteError::InvalidFormat(name.to_string());
    let trimmed = name.trim();

    let mut chars = trimmed.chars();
    let letter = chars.next().ok_or_else(invalid)?;
    let rest = chars.as_str();

    let (sharp, octave_str) = match rest.strip_prefix('#') {
        Some(after) => (true, after),
        None => (false, rest),
    };

    let mut class_name = letter.to_ascii_uppercase().to_string();
    if sharp {
        class_name.push('#');
    }

    let pitch_class = NOTE_NAMES
        .iter()
        .position(|n| *n == class_name)
        .ok_or_else(invalid)?;

    // Octave is an optional '-' followed by digits
    let digits = octave_str.strip_prefix('-').unwrap_or(octave_str);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let octave: i32 = octave_str.parse().map_err(|_| invalid())?;

    let pitch = octave
        .checked_add(notation.octave_shift())
        .and_then(|o| o.checked_mul(12))
        .and_then(|p| p.checked_add(pitch_class as i32))
        .ok_or_else(invalid)?;
    if !(0..=127).contains(&pitch) {
        return Err(NoteError::OutOfRange {
            name: trimmed.to_string(),
            pitch,
        });
    }

    Ok(pitch as u8)
}

/// Render a MIDI pitch as a note name
pub fn note_name(pitch: u8, notation: Notation) -> String {
    let octave = (pitch / 12) as i32 - notation.octave_shift();
    format!("{}{}", NOTE_NAMES[(pitch % 12) as usize], octave)
}

/// Convert MIDI note number to frequency in Hz (A4 = 440 Hz)
pub fn midi_to_frequency(pitch: u8) -> f64 {
    440.0 * 2f64.powf((pitch as f64 - 69.0) / 12.0)
}
