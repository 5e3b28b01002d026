// Reading .xlsx survey exports. The survey platform can export either CSV
// or Excel; both end up in the same in-memory table.

use calamine::{open_workbook, DataType, Reader, Xlsx};
use log::debug;
use snafu::prelude::*;

use crate::survey::*;

pub fn read_table(path: &str, worksheet: Option<&str>) -> SurveyResult<RawTable> {
    let wrange = get_range(path, worksheet)?;
    let mut iter = wrange.rows();

    let header_row = iter.next().context(EmptyTableSnafu { path })?;
    let headers = row_text(header_row, 1)?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, row) in iter.enumerate() {
        rows.push(row_text(row, idx + 2)?);
    }
    debug!("read_table: {} columns, {} rows from {}", headers.len(), rows.len(), path);
    Ok(RawTable { headers, rows })
}

fn row_text(row: &[DataType], lineno: usize) -> SurveyResult<Vec<String>> {
    row.iter().map(|cell| cell_text(cell, lineno)).collect()
}

// Numeric cells show up in exports when a column holds only numbers (the
// points column, typically); render them back to text.
fn cell_text(cell: &DataType, lineno: usize) -> SurveyResult<String> {
    match cell {
        DataType::String(s) => Ok(s.clone()),
        DataType::Empty => Ok(String::new()),
        DataType::Int(i) => Ok(i.to_string()),
        DataType::Float(f) => Ok(f.to_string()),
        _ => ExcelWrongCellTypeSnafu {
            lineno,
            content: format!("{:?}", cell),
        }
        .fail(),
    }
}

fn get_range(path: &str, worksheet: Option<&str>) -> SurveyResult<calamine::Range<DataType>> {
    debug!("get_range: path: {:?} worksheet: {:?}", path, worksheet);
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;

    // A worksheet name was provided, use it.
    if let Some(name) = worksheet {
        let wrange = workbook
            .worksheet_range(name)
            .context(MissingWorksheetSnafu { name, path })?
            .context(OpeningExcelSnafu { path })?;
        Ok(wrange)
    } else {
        let all_worksheets = workbook.worksheets();
        match all_worksheets.as_slice() {
            [] => EmptyTableSnafu { path }.fail(),
            [(_, wrange)] => Ok(wrange.clone()),
            _ => AmbiguousWorksheetSnafu { path }.fail(),
        }
    }
}
