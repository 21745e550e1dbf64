use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "csvplot",
    version,
    about = "Plot a CSV file",
    long_about = "Reads a comma-separated file with a header row and opens a window with its default plot: \
                  a scatterplot matrix of the numeric columns, or a histogram when there is only one."
)]
pub struct Cli {
    /// CSV file to plot (first row is the header)
    #[arg(value_name = "PATH-TO-CSV")]
    pub path: PathBuf,

    /// Anything after the path is ignored
    #[arg(hide = true)]
    pub ignored: Vec<OsString>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
