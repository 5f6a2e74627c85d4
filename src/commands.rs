// CLI Commands
// Each command returns data; printing happens in the entry point
use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::batch::{self, BatchReport};
use crate::clip::prepare_clip;
use crate::config::RunConfig;
use crate::notes::{midi_to_frequency, note_name, Notation};
use crate::tables::{self, InstrumentSummary};

// ==================== CATALOG COMMANDS ====================

/// All instruments known to this run
pub fn list_instruments(config: &RunConfig) -> Result<Vec<InstrumentSummary>> {
    let catalog = config.catalog().context("Failed to load instrument tables")?;
    Ok(catalog.list())
}

/// One row of `show` output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedClip {
    pub index: Option<usize>,
    pub pitch: u8,
    pub effective_pitch: Option<u8>,
    /// Key the clip plays, Ableton notation
    pub note: Option<String>,
    pub frequency_hz: Option<f64>,
    pub label: String,
    pub filename: Option<String>,
    pub problem: Option<String>,
}

/// What `generate` would write for an instrument, without writing it
///
/// Entries go through the same preparation as a real run, so skipped rows
/// and numbering match `generate` for the same options.
pub fn show_instrument(
    config: &RunConfig,
    instrument_id: &str,
) -> Result<(InstrumentSummary, Vec<PlannedClip>)> {
    let catalog = config.catalog().context("Failed to load instrument tables")?;
    let instrument = catalog.get(instrument_id)?;

    let clip_config = config.clip_config_for(instrument);
    clip_config.validate()?;

    let mut rows = Vec::with_capacity(instrument.table.len());
    let mut index = 1;
    for entry in instrument.table.iter() {
        let row = match prepare_clip(entry, index, &clip_config) {
            Ok(clip) => {
                index += 1;
                PlannedClip {
                    index: Some(clip.index),
                    pitch: clip.pitch,
                    effective_pitch: Some(clip.effective_pitch),
                    note: Some(note_name(clip.effective_pitch, Notation::Ableton)),
                    frequency_hz: Some(midi_to_frequency(clip.effective_pitch)),
                    label: clip.label,
                    filename: Some(clip.filename),
                    problem: None,
                }
            }
            Err(e) if e.is_entry_error() => PlannedClip {
                index: None,
                pitch: entry.pitch,
                effective_pitch: None,
                note: None,
                frequency_hz: None,
                label: entry.label.clone(),
                filename: None,
                problem: Some(e.to_string()),
            },
            Err(e) => return Err(e.into()),
        };
        rows.push(row);
    }

    let mut summary = instrument.summary();
    summary.octave_correction = clip_config.octave_correction;
    Ok((summary, rows))
}

// ==================== GENERATION COMMANDS ====================

/// Write clips for the named instruments (or all of them)
pub fn generate(config: &RunConfig, instrument_ids: &[String], all: bool) -> Result<Vec<BatchReport>> {
    let catalog = config.catalog().context("Failed to load instrument tables")?;

    let instruments = if all {
        catalog.iter().collect::<Vec<_>>()
    } else {
        if instrument_ids.is_empty() {
            bail!("Name at least one instrument or pass --all");
        }
        // Resolve every id up front so a typo fails before anything is written
        instrument_ids
            .iter()
            .map(|id| catalog.get(id))
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut reports = Vec::with_capacity(instruments.len());
    for instrument in instruments {
        let clip_config = config.clip_config_for(instrument);
        log::debug!("Clip config for {}: {:?}", instrument.id, clip_config);

        let report = batch::generate_instrument(
            instrument,
            &config.output_root,
            &clip_config,
            config.manifest,
        )
        .with_context(|| format!("Generation failed for {}", instrument.id))?;
        reports.push(report);
    }

    Ok(reports)
}

/// Write one clip per semitone from `start` to `end`
pub fn generate_range(
    config: &RunConfig,
    start: &str,
    end: &str,
    folder: &str,
    notation: Notation,
) -> Result<BatchReport> {
    let instrument = tables::range_instrument(start, end, folder, notation)
        .with_context(|| format!("Invalid range {} to {}", start, end))?;
    let clip_config = config.clip_config_for(&instrument);
    log::debug!("Clip config for range: {:?}", clip_config);

    let report = batch::generate_instrument(
        &instrument,
        &config.output_root,
        &clip_config,
        config.manifest,
    )?;

    Ok(report)
}
