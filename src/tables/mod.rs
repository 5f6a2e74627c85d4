// Tables Module
// Instrument catalog: maps an instrument id to its pattern table

pub mod types;
pub mod range;
pub mod custom;
mod ujam;
mod native;
mod playbeat;

use std::path::Path;

// Re-export main types
pub use types::{
    PatternEntry,
    PatternTable,
    InstrumentTable,
    InstrumentSummary,
    TableError,
    TableResult,
};
pub use range::{note_range, range_instrument, RANGE_FOLDER};
pub use custom::{load_tables, parse_tables};

/// All built-in instruments, in listing order
pub fn builtin_instruments() -> TableResult<Vec<InstrumentTable>> {
    Ok(vec![
        ujam::drummer()?,
        ujam::v_bassist()?,
        ujam::v_guitarist()?,
        ujam::subcraft()?,
        ujam::usynth()?,
        ujam::beatmaker()?,
        ujam::pianist()?,
        playbeat::playbeat()?,
        native::drumlab()?,
        native::spotlight()?,
        native::session_horns()?,
    ])
}

/// Get a built-in instrument's pattern table by id
pub fn get_pattern_table(instrument_id: &str) -> TableResult<PatternTable> {
    let catalog = InstrumentCatalog::builtin()?;
    Ok(catalog.get(instrument_id)?.table.clone())
}

/// Registry of instruments available to a run
#[derive(Debug, Clone, Default)]
pub struct InstrumentCatalog {
    instruments: Vec<InstrumentTable>,
}

impl InstrumentCatalog {
    /// Catalog holding the built-in instruments
    pub fn builtin() -> TableResult<Self> {
        Ok(InstrumentCatalog {
            instruments: builtin_instruments()?,
        })
    }

    /// Add instruments, replacing any existing entry with the same id
    pub fn merge(&mut self, tables: Vec<InstrumentTable>) {
        for table in tables {
            match self.instruments.iter_mut().find(|i| i.id == table.id) {
                Some(existing) => {
                    log::info!("User table replaces built-in instrument '{}'", table.id);
                    *existing = table;
                }
                None => self.instruments.push(table),
            }
        }
    }

    /// Load a TOML table file into the catalog, returning how many instruments it held
    pub fn load_file(&mut self, path: &Path) -> TableResult<usize> {
        let tables = load_tables(path)?;
        let count = tables.len();
        self.merge(tables);
        Ok(count)
    }

    /// Look up an instrument by id (case-insensitive)
    pub fn get(&self, instrument_id: &str) -> TableResult<&InstrumentTable> {
        let wanted = instrument_id.trim().to_lowercase();
        self.instruments
            .iter()
            .find(|i| i.id == wanted)
            .ok_or_else(|| TableError::UnknownInstrument(instrument_id.to_string()))
    }

    pub fn get_pattern_table(&self, instrument_id: &str) -> TableResult<&PatternTable> {
        Ok(&self.get(instrument_id)?.table)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstrumentTable> {
        self.instruments.iter()
    }

    /// List all instruments with summaries
    pub fn list(&self) -> Vec<InstrumentSummary> {
        self.instruments.iter().map(InstrumentTable::summary).collect()
    }
}
