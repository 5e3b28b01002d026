use clap::{Parser, Subcommand};

/// Preparation tools for the shift-assignment solver: encodes raw survey
/// exports and generates shift rosters.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,

    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Encodes a raw survey export into the fixed-width table read by the solver.
    Encode {
        /// (file path) The survey export to encode.
        #[clap(short, long, value_parser)]
        input: String,

        /// (default csv) The type of the input: csv or xlsx.
        #[clap(long, value_parser)]
        input_type: Option<String>,

        /// (xlsx only) The name of the worksheet holding the responses. Only needed
        /// when the workbook has more than one worksheet.
        #[clap(long, value_parser)]
        worksheet: Option<String>,

        /// (file path) Where to write the encoded table. Defaults to Ind.csv, the
        /// name the solver expects.
        #[clap(short, long, value_parser)]
        out: Option<String>,

        /// (file path) A known-good encoded table. If provided, shiftprep checks that
        /// the produced output matches it and prints a diff otherwise.
        #[clap(short, long, value_parser)]
        reference: Option<String>,
    },

    /// Expands target months into the shift roster consumed by the solver.
    Roster {
        /// (file path) JSON configuration holding the year, the target months and
        /// the point values.
        #[clap(short, long, value_parser)]
        config: Option<String>,

        /// The roster year. Overrides the configuration file.
        #[clap(long, value_parser)]
        year: Option<i32>,

        /// (comma-separated month numbers) The target months. Overrides the
        /// configuration file.
        #[clap(long, value_parser)]
        months: Option<String>,

        /// (file path) Where to write the roster. Defaults to Shift.csv.
        #[clap(short, long, value_parser)]
        out: Option<String>,
    },
}
