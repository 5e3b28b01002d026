// Primitives for reading and writing CSV tables.

use std::fs::File;

use log::debug;
use snafu::prelude::*;

use crate::survey::*;

/// Loads a whole CSV file as a header row plus data rows. A ragged row is
/// a fatal parse error.
pub fn read_table(path: &str) -> SurveyResult<RawTable> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;
    let mut records = rdr.into_records();

    let headers: Vec<String> = match records.next() {
        Some(line_r) => line_r
            .context(CsvLineParseSnafu {})?
            .iter()
            .map(|s| s.to_string())
            .collect(),
        None => return EmptyTableSnafu { path }.fail(),
    };

    let mut rows: Vec<Vec<String>> = Vec::new();
    for line_r in records {
        let line = line_r.context(CsvLineParseSnafu {})?;
        rows.push(line.iter().map(|s| s.to_string()).collect());
    }
    debug!("read_table: {} columns, {} rows from {}", headers.len(), rows.len(), path);
    Ok(RawTable { headers, rows })
}

/// A single scoped write session: rows go out as they are produced and the
/// file is closed when the writer goes away. The underlying writer flushes
/// on drop as well, so rows written before a failure still land on disk.
pub struct TableWriter {
    writer: csv::Writer<File>,
    path: String,
    rows: usize,
}

impl TableWriter {
    pub fn create(path: &str) -> SurveyResult<TableWriter> {
        let writer = csv::Writer::from_path(path).context(CsvOpenSnafu { path })?;
        Ok(TableWriter {
            writer,
            path: path.to_string(),
            rows: 0,
        })
    }

    pub fn write_row(&mut self, row: &[String]) -> SurveyResult<()> {
        self.writer.write_record(row).context(CsvWriteSnafu {
            path: self.path.clone(),
        })?;
        self.rows += 1;
        Ok(())
    }

    /// Flushes everything out and returns the number of rows written.
    pub fn finish(mut self) -> SurveyResult<usize> {
        self.writer.flush().context(FlushOutputSnafu {
            path: self.path.clone(),
        })?;
        Ok(self.rows)
    }
}
