use crate::domain::model::{RawTable, Table};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_files(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn sheet_name(&self) -> &str;
}

/// One uploaded file flows through the three stages in order. Each stage is
/// pure with respect to process state; nothing is shared between files.
pub trait Pipeline {
    fn extract(&self, bytes: &[u8], filename: &str) -> Result<RawTable>;
    fn transform(&self, raw: RawTable) -> Result<Table>;
    fn load(&self, table: &Table) -> Result<Vec<u8>>;
}
