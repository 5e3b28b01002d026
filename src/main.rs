use clap::Parser;
use snafu::ErrorCompat;

mod args;
mod survey;

use crate::args::{Args, Command};
use crate::survey::{EncodeOptions, RosterOptions};

fn main() {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let res = match args.command {
        Command::Encode {
            input,
            input_type,
            worksheet,
            out,
            reference,
        } => survey::run_encode(&EncodeOptions {
            input,
            input_type,
            worksheet,
            out,
            reference,
        }),
        Command::Roster {
            config,
            year,
            months,
            out,
        } => survey::run_roster(&RosterOptions {
            config,
            year,
            months,
            out,
        }),
    };

    if let Err(e) = res {
        eprintln!("An error occured: {}", e);
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}
