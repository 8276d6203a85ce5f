pub mod duration;
pub mod etl;
pub mod header;
pub mod ingest;
pub mod pipeline;
pub mod punch;
pub mod reorder;
pub mod xlsx;

pub use crate::domain::model::{RawTable, Table};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
