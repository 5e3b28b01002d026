use log::{info, warn};

use snafu::{prelude::*, Snafu};

use std::fs;

use shift_encoding::{generate_roster, PointsTable, RosterSpec, ShiftRecord};
use text_diff::print_diff;

pub mod config_reader;
pub mod encoder;
pub mod io_csv;
pub mod io_xlsx;

#[derive(Debug, Snafu)]
pub enum SurveyError {
    #[snafu(display("Error opening csv file {path}"))]
    CsvOpen { source: csv::Error, path: String },

    #[snafu(display("Error reading a csv line"))]
    CsvLineParse { source: csv::Error },

    #[snafu(display("Error writing a row to {path}"))]
    CsvWrite { source: csv::Error, path: String },

    #[snafu(display("Error flushing output file {path}"))]
    FlushOutput { source: std::io::Error, path: String },

    #[snafu(display("Error opening excel file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },

    #[snafu(display("No header row found in {path}"))]
    EmptyTable { path: String },

    #[snafu(display("Cannot find worksheet {name} in {path}"))]
    MissingWorksheet { name: String, path: String },

    #[snafu(display("{path} has several worksheets, pass the worksheet name explicitly"))]
    AmbiguousWorksheet { path: String },

    #[snafu(display("Cell on line {lineno} is not usable as text: {content}"))]
    ExcelWrongCellType { lineno: usize, content: String },

    #[snafu(display("The survey header has no column named {name}"))]
    MissingColumn { name: String },

    #[snafu(display("Line {lineno} is too short"))]
    RowTooShort { lineno: usize },

    #[snafu(display("Points value {value:?} on line {lineno} is not an integer"))]
    InvalidPoints {
        source: std::num::ParseIntError,
        value: String,
        lineno: usize,
    },

    #[snafu(display("Error opening file {path}"))]
    OpeningFile {
        source: std::io::Error,
        path: String,
    },

    #[snafu(display("Error parsing json configuration {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },

    #[snafu(display("Month number {month} is not in 1-12"))]
    InvalidMonth { month: u32 },

    #[snafu(display("The roster configuration selects no months"))]
    NoMonths {},

    #[snafu(display("Roster expansion failed"))]
    Roster {
        source: shift_encoding::RosterError,
    },

    #[snafu(display("The produced output does not match the reference file {path}"))]
    ReferenceMismatch { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type SurveyResult<T> = Result<T, SurveyError>;

/// A fully loaded tabular input: one header row of column names plus data
/// rows of plain strings. Both the csv and the xlsx readers produce this.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub struct EncodeOptions {
    pub input: String,
    pub input_type: Option<String>,
    pub worksheet: Option<String>,
    pub out: Option<String>,
    pub reference: Option<String>,
}

pub struct RosterOptions {
    pub config: Option<String>,
    pub year: Option<i32>,
    pub months: Option<String>,
    pub out: Option<String>,
}

/// Runs the respondent encoder: reads the survey export, encodes one output
/// row per respondent and writes them in input order.
///
/// Rows are written as they are encoded. A fatal row error (such as a
/// non-numeric points value) aborts the run and may leave rows that were
/// already encoded in the output file.
pub fn run_encode(opts: &EncodeOptions) -> SurveyResult<()> {
    let table = match opts.input_type.as_deref() {
        None | Some("csv") => io_csv::read_table(&opts.input)?,
        Some("xlsx") => io_xlsx::read_table(&opts.input, opts.worksheet.as_deref())?,
        Some(other) => whatever!("Unknown input type {:?}", other),
    };
    info!(
        "Read {} survey responses from {}",
        table.rows.len(),
        opts.input
    );

    let columns = encoder::SurveyColumns::resolve(&table.headers)?;
    info!(
        "Resolved the survey header: {} date columns",
        columns.date_columns.len()
    );

    let out_path = opts.out.clone().unwrap_or_else(|| "Ind.csv".to_string());
    let mut writer = io_csv::TableWriter::create(&out_path)?;
    for (idx, row) in table.rows.iter().enumerate() {
        // Line numbers are 1-based and the header occupies the first line.
        let lineno = idx + 2;
        let encoded = encoder::encode_respondent(&columns, row, lineno)?;
        writer.write_row(&encoded)?;
    }
    let written = writer.finish()?;
    info!("Wrote {} encoded rows to {}", written, out_path);

    if let Some(reference) = &opts.reference {
        check_reference(&out_path, reference)?;
    }
    Ok(())
}

/// Runs the roster generator: expands the configured months into shift
/// records and writes them chronologically.
pub fn run_roster(opts: &RosterOptions) -> SurveyResult<()> {
    let file_config = match &opts.config {
        Some(path) => Some(config_reader::read_roster_config(path)?),
        None => None,
    };

    let year = opts
        .year
        .or_else(|| file_config.as_ref().map(|c| c.year))
        .whatever_context("No roster year given, pass --year or a configuration file")?;
    let months: Vec<u32> = match &opts.months {
        Some(list) => parse_months(list)?,
        None => file_config
            .as_ref()
            .map(|c| c.months.clone())
            .unwrap_or_default(),
    };
    ensure!(!months.is_empty(), NoMonthsSnafu);
    for &month in months.iter() {
        ensure!((1..=12).contains(&month), InvalidMonthSnafu { month });
    }

    let points = PointsTable {
        weekday: file_config
            .as_ref()
            .and_then(|c| c.weekday_points)
            .unwrap_or(PointsTable::FLAT.weekday),
        weekend: file_config
            .as_ref()
            .and_then(|c| c.weekend_points)
            .unwrap_or(PointsTable::FLAT.weekend),
    };

    let spec = RosterSpec {
        year,
        months,
        points,
    };
    let records = generate_roster(&spec).context(RosterSnafu)?;

    let out_path = opts
        .out
        .clone()
        .or_else(|| file_config.and_then(|c| c.output_path))
        .unwrap_or_else(|| "Shift.csv".to_string());
    let mut writer = io_csv::TableWriter::create(&out_path)?;
    for record in records.iter() {
        writer.write_row(&roster_row(record))?;
    }
    let written = writer.finish()?;
    info!("Wrote {} roster rows to {}", written, out_path);
    Ok(())
}

fn roster_row(record: &ShiftRecord) -> Vec<String> {
    vec![
        record.date_label(),
        record.shift.name().to_string(),
        record.shift.index().to_string(),
        record.points.to_string(),
        record.combined_label(),
        record.full_date(),
    ]
}

fn parse_months(list: &str) -> SurveyResult<Vec<u32>> {
    list.split(',')
        .map(|part| {
            let trimmed = part.trim();
            trimmed
                .parse::<u32>()
                .ok()
                .with_whatever_context(|| format!("Cannot parse month number {:?}", trimmed))
        })
        .collect()
}

/// Compares the produced output with a known-good file, printing a line
/// diff on any difference.
fn check_reference(out_path: &str, reference_path: &str) -> SurveyResult<()> {
    let produced = fs::read_to_string(out_path).context(OpeningFileSnafu { path: out_path })?;
    let expected = fs::read_to_string(reference_path).context(OpeningFileSnafu {
        path: reference_path,
    })?;
    if produced != expected {
        warn!("Found differences with the reference file");
        print_diff(expected.as_str(), produced.as_str(), "\n");
        return ReferenceMismatchSnafu {
            path: reference_path,
        }
        .fail();
    }
    info!("Output matches the reference file {}", reference_path);
    Ok(())
}
