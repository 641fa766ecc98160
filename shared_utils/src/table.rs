//! A string-typed, column-addressable CSV table.
//!
//! The pipeline steps each read a whole CSV, add or rewrite a handful of
//! columns and write the file back. [`Table`] keeps every column it does not
//! understand untouched, so a step never has to know the full schema of the
//! file it annotates.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while reading or writing a [`Table`].
#[derive(Debug, Error)]
pub enum TableError {
    /// The input file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The CSV reader or writer failed.
    #[error("CSV error in {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },

    /// Creating the output directory or flushing the file failed.
    #[error("I/O error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A data row has more cells than the header; reading it would lose cells.
    #[error("{}: line {line} has {got} cells but the header has {want}", path.display())]
    Width {
        path: PathBuf,
        line: u64,
        got: usize,
        want: usize,
    },

    /// A column was given a value count that does not match the row count.
    #[error("Column {column} has {got} values but the table has {want} rows")]
    Length {
        column: String,
        got: usize,
        want: usize,
    },
}

/// In-memory CSV: a header row plus string cells.
///
/// Rows shorter than the header are padded with empty cells on read, so
/// every row always has `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table from headers and rows, padding short rows to the header width.
    ///
    /// Rows must not be wider than the header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                debug_assert!(row.len() <= width, "row wider than header");
                if row.len() < width {
                    row.resize(width, String::new());
                }
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Reads a CSV file with a header row.
    ///
    /// Short rows are padded with empty cells; a row wider than the header is
    /// a [`TableError::Width`] error.
    pub fn read_csv(path: &Path) -> Result<Self, TableError> {
        if !path.exists() {
            return Err(TableError::NotFound(path.to_path_buf()));
        }
        let csv_err = |source| TableError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(csv_err)?;
        let headers: Vec<String> = reader
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_err)?;
            if record.len() > headers.len() {
                return Err(TableError::Width {
                    path: path.to_path_buf(),
                    line: record.position().map_or(0, |pos| pos.line()),
                    got: record.len(),
                    want: headers.len(),
                });
            }
            rows.push(record.iter().map(str::to_string).collect());
        }

        tracing::debug!(
            path = %path.display(),
            rows = rows.len(),
            columns = headers.len(),
            "read csv"
        );
        Ok(Self::new(headers, rows))
    }

    /// Writes the table to `path`, creating parent directories as needed.
    pub fn write_csv(&self, path: &Path) -> Result<(), TableError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| TableError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let csv_err = |source| TableError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
        writer.write_record(&self.headers).map_err(csv_err)?;
        for row in &self.rows {
            writer.write_record(row).map_err(csv_err)?;
        }
        writer.flush().map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), rows = self.rows.len(), "wrote csv");
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the column named exactly `name`, falling back to an ASCII
    /// case-insensitive match (`Date` finds `date`).
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .or_else(|| self.headers.iter().position(|h| h.eq_ignore_ascii_case(name)))
    }

    /// Cell values of column `idx`, one per row.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |row| row[idx].as_str())
    }

    /// Replaces the column named `name` in place, or appends it when absent.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<(), TableError> {
        self.check_len(name, values.len())?;
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }

    /// Inserts a new column at `idx`, removing any existing column of the same name
    /// first.
    pub fn insert_column(
        &mut self,
        idx: usize,
        name: &str,
        values: Vec<String>,
    ) -> Result<(), TableError> {
        self.check_len(name, values.len())?;
        self.drop_column(name);
        let idx = idx.min(self.headers.len());
        self.headers.insert(idx, name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.insert(idx, value);
        }
        Ok(())
    }

    /// Removes the column named `name`; returns whether one was removed.
    pub fn drop_column(&mut self, name: &str) -> bool {
        let Some(idx) = self.column_index(name) else {
            return false;
        };
        self.headers.remove(idx);
        for row in &mut self.rows {
            row.remove(idx);
        }
        true
    }

    /// Keeps only the rows for which `keep` returns true.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[String]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }

    /// Reorders rows by `order`, a permutation of row indices.
    pub fn reorder_rows(&mut self, order: &[usize]) {
        debug_assert_eq!(order.len(), self.rows.len());
        let mut taken: Vec<Option<Vec<String>>> = self.rows.drain(..).map(Some).collect();
        self.rows = order.iter().filter_map(|&i| taken[i].take()).collect();
    }

    fn check_len(&self, name: &str, got: usize) -> Result<(), TableError> {
        if got != self.rows.len() {
            return Err(TableError::Length {
                column: name.to_string(),
                got,
                want: self.rows.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["date".into(), "price".into()],
            vec![vec!["2024-01-01".into(), "100".into()], vec!["2024-01-02".into()]],
        )
    }

    #[test]
    fn short_rows_are_padded() {
        let t = sample();
        assert_eq!(t.rows()[1], vec!["2024-01-02".to_string(), String::new()]);
    }

    #[test]
    fn column_lookup_falls_back_to_case_insensitive() {
        let t = sample();
        assert_eq!(t.column_index("Date"), Some(0));
        assert_eq!(t.column_index("price"), Some(1));
        assert_eq!(t.column_index("volume"), None);
    }

    #[test]
    fn set_column_replaces_or_appends() {
        let mut t = sample();
        t.set_column("price", vec!["1".into(), "2".into()]).unwrap();
        t.set_column("label", vec!["a".into(), "b".into()]).unwrap();
        assert_eq!(t.headers(), ["date", "price", "label"]);
        assert_eq!(t.column(1).collect::<Vec<_>>(), ["1", "2"]);
        assert!(matches!(
            t.set_column("x", vec![]),
            Err(TableError::Length { got: 0, want: 2, .. })
        ));
    }

    #[test]
    fn insert_moves_existing_column() {
        let mut t = sample();
        t.insert_column(0, "price", vec!["5".into(), "6".into()]).unwrap();
        assert_eq!(t.headers(), ["price", "date"]);
        assert_eq!(t.rows()[0], ["5", "2024-01-01"]);
        assert!(t.drop_column("PRICE"));
        assert_eq!(t.headers(), ["date"]);
    }

    #[test]
    fn reorder_and_retain() {
        let mut t = sample();
        t.reorder_rows(&[1, 0]);
        assert_eq!(t.rows()[0][0], "2024-01-02");
        t.retain_rows(|row| row[1] == "100");
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn csv_round_trip_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.csv");
        let t = sample();
        t.write_csv(&path).unwrap();
        let back = Table::read_csv(&path).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn wide_row_is_rejected_instead_of_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.csv");
        std::fs::write(&path, "date,price\n2024-01-01,100,EXTRA\n").unwrap();

        let err = Table::read_csv(&path).unwrap_err();
        assert!(matches!(
            err,
            TableError::Width {
                line: 2,
                got: 3,
                want: 2,
                ..
            }
        ));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "date,price\n2024-01-01,100,EXTRA\n"
        );
    }

    #[test]
    fn short_csv_row_is_padded_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.csv");
        std::fs::write(&path, "date,price\n2024-01-01\n").unwrap();

        let t = Table::read_csv(&path).unwrap();
        assert_eq!(t.rows()[0], ["2024-01-01", ""]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = Table::read_csv(Path::new("/nope/missing.csv")).unwrap_err();
        assert!(matches!(err, TableError::NotFound(_)));
    }
}
