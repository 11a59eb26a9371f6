use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Selects the order wave with the most picked units per visited aisle
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance in the plain-text challenge format
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder receiving `sol_<stem>.txt` and `sol_<stem>.json`, created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON `WaveConfig`, defaults are used for missing fields
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
