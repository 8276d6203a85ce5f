use crate::core::{duration, header, ingest, punch, reorder, xlsx};
use crate::domain::model::{RawTable, Table};
use crate::domain::ports::{ConfigProvider, Pipeline};
use crate::utils::error::Result;

/// The punch-record normalizer: raw upload bytes in, cleaned workbook bytes
/// out. Invoked once per file with no state carried between invocations.
pub struct PunchPipeline<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> PunchPipeline<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

impl<C: ConfigProvider> Pipeline for PunchPipeline<C> {
    fn extract(&self, bytes: &[u8], filename: &str) -> Result<RawTable> {
        tracing::debug!("Reading {} ({} bytes)", filename, bytes.len());
        let raw = ingest::read_raw_table(bytes, filename)?;
        tracing::debug!("Read {} raw rows", raw.rows.len());
        Ok(raw)
    }

    fn transform(&self, raw: RawTable) -> Result<Table> {
        let table = header::promote_header(raw)?;
        tracing::debug!(
            "Promoted header: {} columns, {} data rows",
            table.columns.len(),
            table.rows.len()
        );
        let mut table = punch::expand_punch_column(table)?;
        duration::append_stay_durations(&mut table);
        Ok(reorder::reorder_columns(table))
    }

    fn load(&self, table: &Table) -> Result<Vec<u8>> {
        xlsx::write_workbook(table, self.config.sheet_name())
    }
}
