use std::path::Path;

use crate::core::xlsx;
use crate::domain::ports::{Pipeline, Storage};
use crate::utils::error::Result;

/// Per-batch outcome report. A failed file never aborts the batch.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// (input file, written output path)
    pub succeeded: Vec<(String, String)>,
    /// (input file, error message)
    pub failed: Vec<(String, String)>,
}

impl BatchSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct EtlEngine<P: Pipeline, S: Storage> {
    pipeline: P,
    storage: S,
}

impl<P: Pipeline, S: Storage> EtlEngine<P, S> {
    pub fn new(pipeline: P, storage: S) -> Self {
        Self { pipeline, storage }
    }

    /// Runs every input file through the pipeline independently. Errors are
    /// logged per file and collected in the summary; processing continues
    /// with the next file.
    pub fn run(&self, files: &[String], output_path: &str) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for file in files {
            match self.process_file(file, output_path) {
                Ok(written) => {
                    tracing::info!("Cleaned {} -> {}", file, written);
                    summary.succeeded.push((file.clone(), written));
                }
                Err(error) => {
                    tracing::error!("Error processing {}: {}", file, error);
                    summary.failed.push((file.clone(), error.to_string()));
                }
            }
        }
        summary
    }

    /// Output lands in a per-input subdirectory so a batch of files cleaned
    /// on the same day cannot collide on the date-stamped filename.
    fn process_file(&self, file: &str, output_path: &str) -> Result<String> {
        let bytes = self.storage.read_file(file)?;
        let raw = self.pipeline.extract(&bytes, file)?;
        let table = self.pipeline.transform(raw)?;
        let workbook = self.pipeline.load(&table)?;

        let destination = Path::new(output_path)
            .join(file_stem(file))
            .join(xlsx::cleaned_filename())
            .to_string_lossy()
            .into_owned();
        self.storage.write_file(&destination, &workbook)?;
        Ok(destination)
    }
}

fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("file")
        .to_string()
}
