// Run Configuration
// Where clips go, which tables are loaded, and how clip options are layered

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::clip::{ClipConfig, ClipOverrides};
use crate::tables::{InstrumentCatalog, InstrumentTable, TableResult};

/// Options for one CLI invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Root folder; each instrument writes into its own subfolder
    pub output_root: PathBuf,

    /// Extra instrument tables (TOML)
    pub tables_file: Option<PathBuf>,

    /// Write `manifest.json` next to the clips
    pub manifest: bool,

    /// Explicit clip options; unset fields fall back to the instrument's defaults
    pub overrides: ClipOverrides,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            output_root: PathBuf::from("."),
            tables_file: None,
            manifest: false,
            overrides: ClipOverrides::default(),
        }
    }
}

impl RunConfig {
    /// Clip options for an instrument: defaults, then the instrument's own
    /// octave-correction setting, then explicit overrides
    pub fn clip_config_for(&self, instrument: &InstrumentTable) -> ClipConfig {
        let base = ClipConfig {
            octave_correction: instrument.default_octave_correction,
            ..ClipConfig::default()
        };
        self.overrides.apply(base)
    }

    /// Built-in instruments plus the configured table file, if any
    pub fn catalog(&self) -> TableResult<InstrumentCatalog> {
        let mut catalog = InstrumentCatalog::builtin()?;
        if let Some(path) = &self.tables_file {
            let count = catalog.load_file(path)?;
            log::info!("Loaded {} instrument table(s) from {}", count, path.display());
        }
        Ok(catalog)
    }
}
