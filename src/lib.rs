pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::etl::{BatchSummary, EtlEngine};
pub use crate::core::pipeline::PunchPipeline;
pub use crate::core::xlsx::XLSX_MIME;
pub use crate::domain::model::{RawTable, Table};
pub use crate::utils::error::{PunchError, Result};
