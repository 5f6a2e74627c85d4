// Clip Encoding - One-note Standard MIDI Files using the midly crate
// Format 0, single track: name, tempo, (time signature), note, end of track

use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind};
use super::config::ClipConfig;
use super::writer::{ClipError, ClipResult};

/// Encode a single-note clip to MIDI file bytes
///
/// # Arguments
/// * `label` - Track name, written verbatim
/// * `pitch` - Note number actually written (already octave-corrected)
/// * `duration_ticks` - Ticks between note-on and note-off
/// * `config` - Tempo, velocity, resolution and time signature options
pub fn clip_bytes(
    label: &str,
    pitch: u8,
    duration_ticks: u32,
    config: &ClipConfig,
) -> ClipResult<Vec<u8>> {
    let header = Header {
        format: Format::SingleTrack,
        timing: Timing::Metrical(config.ticks_per_beat.into()),
    };

    let mut track = Track::new();
    add_track_name(&mut track, 0, label);
    add_tempo(&mut track, 0, config.tempo_us());
    if config.include_time_signature {
        add_time_signature(&mut track, 0);
    }
    add_note(&mut track, pitch, config.velocity, duration_ticks);
    add_end_of_track(&mut track, 0);

    let smf = Smf {
        header,
        tracks: vec![track],
    };

    let mut bytes = Vec::new();
    smf.write(&mut bytes)
        .map_err(|e| ClipError::Encode(e.to_string()))?;

    Ok(bytes)
}

/// Add track name to track
fn add_track_name<'a>(track: &mut Track<'a>, delta: u32, name: &'a str) {
    track.push(TrackEvent {
        delta: delta.into(),
        kind: TrackEventKind::Meta(MetaMessage::TrackName(name.as_bytes())),
    });
}

/// Add tempo meta message
fn add_tempo(track: &mut Track<'_>, delta: u32, us_per_quarter: u32) {
    track.push(TrackEvent {
        delta: delta.into(),
        kind: TrackEventKind::Meta(MetaMessage::Tempo(us_per_quarter.into())),
    });
}

/// Add a 4/4 time signature meta message
fn add_time_signature(track: &mut Track<'_>, delta: u32) {
    let numerator = 4u8;
    let denominator = 2u8; // 2^2 = 4 (quarter note)

    // MIDI clocks per metronome click (24 for quarter note)
    let clocks_per_click = 24u8;

    // 32nd notes per quarter note (8)
    let thirty_seconds_per_quarter = 8u8;

    track.push(TrackEvent {
        delta: delta.into(),
        kind: TrackEventKind::Meta(MetaMessage::TimeSignature(
            numerator,
            denominator,
            clocks_per_click,
            thirty_seconds_per_quarter,
        )),
    });
}

/// Add a note-on at the current tick and its note-off `duration_ticks` later
fn add_note(track: &mut Track<'_>, pitch: u8, velocity: u8, duration_ticks: u32) {
    track.push(TrackEvent {
        delta: 0u32.into(),
        kind: TrackEventKind::Midi {
            channel: 0.into(),
            message: MidiMessage::NoteOn {
                key: pitch.into(),
                vel: velocity.into(),
            },
        },
    });

    track.push(TrackEvent {
        delta: duration_ticks.into(),
        kind: TrackEventKind::Midi {
            channel: 0.into(),
            message: MidiMessage::NoteOff {
                key: pitch.into(),
                vel: 0.into(),
            },
        },
    });
}

/// Add end of track message
fn add_end_of_track(track: &mut Track<'_>, delta: u32) {
    track.push(TrackEvent {
        delta: delta.into(),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });
}
