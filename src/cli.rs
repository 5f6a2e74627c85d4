// Command-line interface definitions (clap derive)

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use crate::clip::ClipOverrides;
use crate::config::RunConfig;
use crate::notes::Notation;
use crate::tables::RANGE_FOLDER;

/// phrasegen - keyswitch MIDI clips for phrase-based instruments
#[derive(Debug, Parser)]
#[command(name = "phrasegen")]
#[command(about = "Generate keyswitch/phrase MIDI clips for sequencer-style instruments")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Extra instrument tables (TOML); ids matching a built-in replace it
    #[arg(long, global = true, env = "PHRASEGEN_TABLES")]
    pub tables: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available instruments
    List,

    /// Show an instrument's table and the files it would produce
    Show(ShowArgs),

    /// Write clips for one or more instruments
    Generate(GenerateArgs),

    /// Write one clip per semitone between two notes
    Range(RangeArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Instrument id (see `phrasegen list`)
    pub instrument: String,

    #[command(flatten)]
    pub clip: ClipArgs,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Instrument ids (see `phrasegen list`)
    #[arg(required_unless_present = "all")]
    pub instruments: Vec<String>,

    /// Generate every known instrument
    #[arg(long, conflicts_with = "instruments")]
    pub all: bool,

    #[command(flatten)]
    pub clip: ClipArgs,
}

#[derive(Debug, Args)]
pub struct RangeArgs {
    /// First note (Ableton notation by default, C3 = 60)
    #[arg(long, default_value = "C0")]
    pub start: String,

    /// Last note, inclusive
    #[arg(long, default_value = "C6")]
    pub end: String,

    /// Octave numbering of --start and --end
    #[arg(long, value_enum, default_value_t = Notation::Ableton)]
    pub notation: Notation,

    /// Output folder name under the output root
    #[arg(long, default_value = RANGE_FOLDER)]
    pub folder: String,

    #[command(flatten)]
    pub clip: ClipArgs,
}

/// Options shared by every command that writes clips
#[derive(Debug, Clone, Args)]
pub struct ClipArgs {
    /// Root folder for instrument subfolders
    #[arg(short, long, env = "PHRASEGEN_OUTPUT_ROOT", default_value = ".")]
    pub output_root: PathBuf,

    /// Shift notes down one octave (true/false); defaults per instrument
    #[arg(long, env = "PHRASEGEN_OCTAVE_CORRECTION", value_parser = BoolishValueParser::new())]
    pub octave_correction: Option<bool>,

    /// Tempo in BPM
    #[arg(long)]
    pub tempo: Option<f64>,

    /// Note-on velocity
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=127))]
    pub velocity: Option<u8>,

    /// Ticks per beat (PPQ)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=32767))]
    pub ppq: Option<u16>,

    /// Note length in beats for entries without their own
    #[arg(long)]
    pub duration_beats: Option<f64>,

    /// Leave out the 4/4 time signature event
    #[arg(long)]
    pub no_time_signature: bool,

    /// Write manifest.json with SHA-256 hashes next to the clips
    #[arg(long)]
    pub manifest: bool,
}

impl ClipArgs {
    pub fn overrides(&self) -> ClipOverrides {
        ClipOverrides {
            octave_correction: self.octave_correction,
            tempo_bpm: self.tempo,
            velocity: self.velocity,
            ticks_per_beat: self.ppq,
            duration_beats: self.duration_beats,
            include_time_signature: self.no_time_signature.then_some(false),
        }
    }

    pub fn run_config(&self, tables: Option<PathBuf>) -> RunConfig {
        RunConfig {
            output_root: self.output_root.clone(),
            tables_file: tables,
            manifest: self.manifest,
            overrides: self.overrides(),
        }
    }
}
