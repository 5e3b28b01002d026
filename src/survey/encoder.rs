// Turns one survey row into one fixed-width encoded row.

use std::collections::HashMap;

use log::warn;
use snafu::prelude::*;

use crate::survey::*;
use shift_encoding::*;

/// The first date column in the survey export. Everything before this index
/// is a named question; everything from here up to (but not including) the
/// last column is one date per column.
pub const FIRST_DATE_COLUMN: usize = 15;

/// Resolved column positions for the survey export.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SurveyColumns {
    pub name: usize,
    pub ecl: usize,
    pub email: usize,
    pub points: usize,
    pub institution: usize,
    pub exceed_request: usize,
    pub consecutive_shifts: usize,
    pub rest: usize,
    pub strict_pairing: usize,
    pub non_consecutive_shifts: usize,
    pub brake: usize,
    pub previous_request: usize,
    pub priority: usize,
    pub more_points: usize,
    pub explain_constraints: usize,
    pub response_id: usize,
    /// The per-date block-selection columns, in input order.
    pub date_columns: Vec<usize>,
}

impl SurveyColumns {
    /// Finds every required named column in the header, failing on the
    /// first missing one. The date columns are positional.
    pub fn resolve(headers: &[String]) -> SurveyResult<SurveyColumns> {
        let by_name: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.as_str(), idx))
            .collect();
        let col = |name: &str| -> SurveyResult<usize> {
            by_name.get(name).cloned().context(MissingColumnSnafu { name })
        };

        let last = headers.len().saturating_sub(1);
        let date_columns: Vec<usize> = (FIRST_DATE_COLUMN..last).collect();

        Ok(SurveyColumns {
            name: col("Name")?,
            ecl: col("ECL")?,
            email: col("Email")?,
            points: col("Points")?,
            institution: col("Institution")?,
            exceed_request: col("ExceedRequest")?,
            consecutive_shifts: col("ConsecutiveShifts")?,
            rest: col("Rest")?,
            strict_pairing: col("StrictPairing")?,
            non_consecutive_shifts: col("NonConsecutiveShifts")?,
            brake: col("Brake")?,
            previous_request: col("PreviousRequest")?,
            priority: col("Priority")?,
            more_points: col("MorePoints")?,
            explain_constraints: col("ExplainConstraints")?,
            response_id: col("ResponseID")?,
            date_columns,
        })
    }
}

/// The pandas export writes missing free-text answers as the literal
/// strings "NULL" or "nan"; both mean an empty justification.
pub fn normalize_justification(answer: &str) -> &str {
    if answer == "NULL" || answer == "nan" {
        ""
    } else {
        answer
    }
}

/// Encodes one survey row. The output sequence is fixed: identity fields,
/// institution code, points, first justification, the eight preference
/// codes, second justification, six block flags per date column, response
/// id. Unselected block flags stay empty so the solver can tell them apart
/// from an explicit 0.
pub fn encode_respondent(
    cols: &SurveyColumns,
    row: &[String],
    lineno: usize,
) -> SurveyResult<Vec<String>> {
    let field = |idx: usize| -> SurveyResult<&str> {
        row.get(idx)
            .map(|s| s.as_str())
            .context(RowTooShortSnafu { lineno })
    };

    let points_raw = field(cols.points)?;
    let points: i64 = points_raw.trim().parse().context(InvalidPointsSnafu {
        value: points_raw,
        lineno,
    })?;

    let institution_answer = field(cols.institution)?;
    let inst_code = institution_code(institution_answer);
    if inst_code == UNKNOWN_INSTITUTION_CODE {
        warn!(
            "line {}: institution {:?} is not in the lookup table, using {}",
            lineno, institution_answer, inst_code
        );
    }

    let mut out: Vec<String> = vec![
        field(cols.name)?.to_string(),
        field(cols.ecl)?.to_string(),
        field(cols.email)?.to_string(),
        inst_code.to_string(),
        points.to_string(),
        normalize_justification(field(cols.more_points)?).to_string(),
        exceed_request(field(cols.exceed_request)?).to_string(),
        consecutive_shifts(field(cols.consecutive_shifts)?).to_string(),
        rest(field(cols.rest)?).to_string(),
        strict_pairing(field(cols.strict_pairing)?).to_string(),
        non_consecutive_shifts(field(cols.non_consecutive_shifts)?).to_string(),
        break_between(field(cols.brake)?).to_string(),
        previous_request(field(cols.previous_request)?).to_string(),
        special_priority(field(cols.priority)?).to_string(),
        normalize_justification(field(cols.explain_constraints)?).to_string(),
    ];

    for &date_col in cols.date_columns.iter() {
        let flags = select_blocks(field(date_col)?);
        for selected in flags {
            out.push(if selected { "1".to_string() } else { String::new() });
        }
    }

    out.push(field(cols.response_id)?.to_string());
    Ok(out)
}
