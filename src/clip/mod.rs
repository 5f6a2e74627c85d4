// Clip Module - One-note keyswitch clips
// Pattern entry + run config -> Standard MIDI File on disk

pub mod config;
pub mod midi;
pub mod writer;

// Re-export main types
pub use config::{ClipConfig, ClipOverrides};
pub use midi::clip_bytes;
pub use writer::{
    ClipError,
    ClipResult,
    PreparedClip,
    OCTAVE_OFFSET,
    effective_pitch,
    sanitize_label,
    clip_filename,
    prepare_clip,
    store_clip,
    write_clip,
};
