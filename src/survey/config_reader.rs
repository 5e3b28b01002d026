use std::fs;

use serde::{Deserialize, Serialize};
use snafu::prelude::*;

use crate::survey::*;

/// The roster configuration file.
///
/// Year and months are mandatory; the point tables default to the current
/// flat scheme and the output path to Shift.csv. Command line flags
/// override everything here.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub year: i32,
    pub months: Vec<u32>,
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
    /// Points for weekday Night/Day/Swing, in that order.
    #[serde(rename = "weekdayPoints")]
    pub weekday_points: Option<[u32; 3]>,
    /// Points for weekend Night/Day/Swing, in that order.
    #[serde(rename = "weekendPoints")]
    pub weekend_points: Option<[u32; 3]>,
}

pub fn read_roster_config(path: &str) -> SurveyResult<RosterConfig> {
    let contents = fs::read_to_string(path).context(OpeningFileSnafu { path })?;
    let config: RosterConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(config)
}
