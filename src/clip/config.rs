// Clip Configuration - Run parameters shared by every clip in a batch

use serde::{Deserialize, Serialize};
use super::writer::{ClipError, ClipResult};

/// Largest tempo value a Set Tempo meta event can hold (24 bits)
const MAX_TEMPO_US: f64 = 0xFF_FFFF as f64;

/// Largest delta time a track event can hold (28 bits)
pub(crate) const MAX_DELTA_TICKS: u32 = 0x0FFF_FFFF;

/// Clip rendering options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipConfig {
    /// Shift every note down 12 semitones so the DAW piano roll shows the
    /// note the table names
    pub octave_correction: bool,

    /// Tempo written at tick 0
    pub tempo_bpm: f64,

    /// Note-on velocity (0-127)
    pub velocity: u8,

    /// Pulses per quarter note (PPQ)
    pub ticks_per_beat: u16,

    /// Note length for entries that don't carry their own
    pub duration_beats: f64,

    /// Include a 4/4 time signature meta event
    pub include_time_signature: bool,
}

impl Default for ClipConfig {
    fn default() -> Self {
        ClipConfig {
            octave_correction: true,
            tempo_bpm: 120.0,
            velocity: 100,
            ticks_per_beat: 480,
            duration_beats: 1.0,
            include_time_signature: true,
        }
    }
}

impl ClipConfig {
    /// Check that every field can be encoded
    pub fn validate(&self) -> ClipResult<()> {
        if !self.tempo_bpm.is_finite() || self.tempo_bpm <= 0.0 {
            return Err(ClipError::InvalidConfig(format!(
                "tempo must be a positive number, got {}",
                self.tempo_bpm
            )));
        }

        let us = tempo_us_per_quarter(self.tempo_bpm);
        if us < 1.0 || us > MAX_TEMPO_US {
            return Err(ClipError::InvalidConfig(format!(
                "tempo {} BPM cannot be encoded in a MIDI file",
                self.tempo_bpm
            )));
        }

        if self.velocity > 127 {
            return Err(ClipError::InvalidConfig(format!(
                "velocity must be 0-127, got {}",
                self.velocity
            )));
        }

        if self.ticks_per_beat == 0 || self.ticks_per_beat > 0x7FFF {
            return Err(ClipError::InvalidConfig(format!(
                "ticks per beat must be 1-32767, got {}",
                self.ticks_per_beat
            )));
        }

        // Default duration goes through the same check as per-entry ones
        self.duration_ticks(self.duration_beats)?;

        Ok(())
    }

    /// Note length in ticks for a duration in beats
    pub fn duration_ticks(&self, beats: f64) -> ClipResult<u32> {
        if !beats.is_finite() || beats <= 0.0 {
            return Err(ClipError::InvalidDuration { beats });
        }

        let ticks = (beats * self.ticks_per_beat as f64).round();
        if ticks < 1.0 || ticks > MAX_DELTA_TICKS as f64 {
            return Err(ClipError::InvalidDuration { beats });
        }

        Ok(ticks as u32)
    }

    /// Microseconds per quarter note for the Set Tempo event
    pub fn tempo_us(&self) -> u32 {
        tempo_us_per_quarter(self.tempo_bpm).round() as u32
    }
}

fn tempo_us_per_quarter(bpm: f64) -> f64 {
    60_000_000.0 / bpm
}

/// Optional overrides layered over a base config
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipOverrides {
    pub octave_correction: Option<bool>,
    pub tempo_bpm: Option<f64>,
    pub velocity: Option<u8>,
    pub ticks_per_beat: Option<u16>,
    pub duration_beats: Option<f64>,
    pub include_time_signature: Option<bool>,
}

impl ClipOverrides {
    /// Apply the set fields on top of `base`
    pub fn apply(&self, mut base: ClipConfig) -> ClipConfig {
        if let Some(octave_correction) = self.octave_correction {
            base.octave_correction = octave_correction;
        }
        if let Some(tempo_bpm) = self.tempo_bpm {
            base.tempo_bpm = tempo_bpm;
        }
        if let Some(velocity) = self.velocity {
            base.velocity = velocity;
        }
        if let Some(ticks_per_beat) = self.ticks_per_beat {
            base.ticks_per_beat = ticks_per_beat;
        }
        if let Some(duration_beats) = self.duration_beats {
            base.duration_beats = duration_beats;
        }
        if let Some(include_time_signature) = self.include_time_signature {
            base.include_time_signature = include_time_signature;
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClipConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tempo_us(), 500_000);
        assert_eq!(config.duration_ticks(config.duration_beats).unwrap(), 480);
    }

    #[test]
    fn test_tempo_rounding() {
        let config = ClipConfig { tempo_bpm: 140.0, ..Default::default() };
        // 428571.43 us
        assert_eq!(config.tempo_us(), 428_571);
    }

    #[test]
    fn test_invalid_tempo() {
        for bpm in [0.0, -10.0, f64::NAN, f64::INFINITY, 3.0] {
            let config = ClipConfig { tempo_bpm: bpm, ..Default::default() };
            assert!(
                matches!(config.validate(), Err(ClipError::InvalidConfig(_))),
                "tempo {} should be rejected",
                bpm
            );
        }
    }

    #[test]
    fn test_invalid_velocity_and_ppq() {
        let config = ClipConfig { velocity: 128, ..Default::default() };
        assert!(matches!(config.validate(), Err(ClipError::InvalidConfig(_))));

        let config = ClipConfig { ticks_per_beat: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ClipError::InvalidConfig(_))));

        let config = ClipConfig { ticks_per_beat: 0x8000, ..Default::default() };
        assert!(matches!(config.validate(), Err(ClipError::InvalidConfig(_))));
    }

    #[test]
    fn test_duration_ticks() {
        let config = ClipConfig::default();
        assert_eq!(config.duration_ticks(4.0).unwrap(), 1920);
        assert_eq!(config.duration_ticks(0.25).unwrap(), 120);
        assert!(matches!(config.duration_ticks(0.0), Err(ClipError::InvalidDuration { .. })));
        assert!(matches!(config.duration_ticks(0.0001), Err(ClipError::InvalidDuration { .. })));
        assert!(matches!(config.duration_ticks(1e9), Err(ClipError::InvalidDuration { .. })));
    }

    #[test]
    fn test_overrides() {
        let overrides = ClipOverrides {
            octave_correction: Some(false),
            velocity: Some(64),
            ..Default::default()
        };

        let config = overrides.apply(ClipConfig::default());
        assert!(!config.octave_correction);
        assert_eq!(config.velocity, 64);
        assert_eq!(config.tempo_bpm, 120.0);
        assert_eq!(config.ticks_per_beat, 480);

        assert_eq!(ClipOverrides::default().apply(ClipConfig::default()), ClipConfig::default());
    }
}
