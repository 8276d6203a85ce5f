pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_list, validate_non_empty_string, validate_path,
    Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const ALLOWED_EXTENSIONS: [&str; 3] = ["csv", "xls", "xlsx"];

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "punchpro")]
#[command(about = "Cleans attendance punch spreadsheets into paired in/out columns")]
pub struct CliConfig {
    #[arg(required = true, help = "Input spreadsheet files (csv, xls, xlsx)")]
    pub input_files: Vec<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "Cleaned Data")]
    pub sheet_name: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_files(&self) -> &[String] {
        &self.input_files
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn sheet_name(&self) -> &str {
        &self.sheet_name
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("input_files", &self.input_files)?;
        validate_file_extensions("input_files", &self.input_files, &ALLOWED_EXTENSIONS)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("sheet_name", &self.sheet_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(files: Vec<&str>) -> CliConfig {
        CliConfig {
            input_files: files.into_iter().map(str::to_string).collect(),
            output_path: "./output".to_string(),
            sheet_name: "Cleaned Data".to_string(),
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config(vec!["august.csv", "july.xlsx"]).validate().is_ok());
    }

    #[test]
    fn test_rejects_unsupported_extension() {
        assert!(config(vec!["notes.txt"]).validate().is_err());
    }

    #[test]
    fn test_rejects_empty_input_list() {
        assert!(config(vec![]).validate().is_err());
    }

    #[test]
    fn test_rejects_blank_sheet_name() {
        let mut config = config(vec!["august.csv"]);
        config.sheet_name = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
