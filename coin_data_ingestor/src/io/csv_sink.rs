use std::path::{Path, PathBuf};

use async_trait::async_trait;
use snafu::ResultExt;

use crate::{
    io::sink::{CreateDirSnafu, CsvSnafu, DataSink, IoSnafu, SinkError},
    models::daily_record::{DailyRecord, HEADER},
};

/// Writes `{dir}/{coin_id}_data.csv`, replacing any previous file.
#[derive(Debug, Clone)]
pub struct CsvSink {
    dir: PathBuf,
}

impl CsvSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, coin_id: &str) -> PathBuf {
        self.dir.join(format!("{coin_id}_data.csv"))
    }
}

fn write_records(path: &Path, records: &[DailyRecord]) -> Result<(), SinkError> {
    let mut writer = csv::Writer::from_path(path).context(CsvSnafu { path })?;
    writer.write_record(HEADER).context(CsvSnafu { path })?;
    for record in records {
        writer.write_record(record.to_row()).context(CsvSnafu { path })?;
    }
    writer.flush().context(IoSnafu { path })
}

#[async_trait]
impl DataSink for CsvSink {
    type Output = PathBuf;

    async fn write(&self, coin_id: &str, records: &[DailyRecord]) -> Result<PathBuf, SinkError> {
        std::fs::create_dir_all(&self.dir).context(CreateDirSnafu { path: &self.dir })?;
        let path = self.path_for(coin_id);
        write_records(&path, records)?;
        tracing::info!(path = %path.display(), rows = records.len(), "coin data written");
        Ok(path)
    }
}
